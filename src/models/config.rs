//! Configuration model loaded from external sources.

use serde::Deserialize;

use crate::dates::DateLocale;
use crate::domain::types::ItemsPerPage;
use crate::pagination::DEFAULT_LABEL_DELTA;

#[derive(Clone, Debug, Deserialize)]
/// Settings shared by the plan calendar views.
pub struct AppConfig {
    /// Directory holding `<member_id>.json` plan documents.
    pub plans_dir: String,
    #[serde(default)]
    pub items_per_page: ItemsPerPage,
    #[serde(default = "default_page_label_delta")]
    pub page_label_delta: usize,
    #[serde(default)]
    pub locale: DateLocale,
}

fn default_page_label_delta() -> usize {
    DEFAULT_LABEL_DELTA
}
