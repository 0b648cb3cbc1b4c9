use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Multi-week cessation plan as returned by the member-plan endpoint.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    /// Start date in either `dd-mm-yyyy` or ISO-8601 form.
    pub start_date: String,
    #[serde(default)]
    pub weeks: Vec<Week>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Week {
    #[serde(default)]
    pub days: Vec<Day>,
}

/// A day of the plan. Its fields are opaque to the calendar builder.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(transparent)]
pub struct Day {
    pub fields: Map<String, Value>,
}

impl Day {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

/// One flattened, dated day of a plan.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEntry {
    /// Fields carried over from the source day.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
    /// 1-based position across the whole plan.
    pub day_number: usize,
    /// Serialized as `yyyy-mm-dd`.
    pub date: NaiveDate,
}

/// Progress of a member through a calendar on a given day.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlanProgress {
    pub total_days: usize,
    /// Days dated strictly before the observation day.
    pub completed_days: usize,
    /// Day number dated on the observation day, if the plan covers it.
    pub current_day: Option<usize>,
    /// Completed share rounded down, 0 for an empty plan.
    pub percent_complete: u8,
}
