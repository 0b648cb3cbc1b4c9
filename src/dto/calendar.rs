//! DTOs shaped for the plan calendar view.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::plan::{CalendarEntry, PlanProgress};
use crate::domain::types::MemberId;
use crate::pagination::Paginated;

/// Data required to render one page of a member's plan calendar.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarPageData {
    pub member_id: MemberId,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    /// Start date rendered for the configured locale.
    pub start_date_display: String,
    pub end_date_display: Option<String>,
    pub progress: PlanProgress,
    /// Paginated calendar entries for the requested page.
    pub entries: Paginated<CalendarEntry>,
}
