//! Plan store backed by a directory of `<member_id>.json` documents.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::domain::plan::Plan;
use crate::domain::types::MemberId;
use crate::repository::PlanReader;
use crate::repository::errors::RepositoryResult;

#[derive(Clone, Debug)]
pub struct JsonRepository {
    plans_dir: PathBuf,
}

impl JsonRepository {
    pub fn new(plans_dir: impl Into<PathBuf>) -> Self {
        Self {
            plans_dir: plans_dir.into(),
        }
    }

    pub fn plans_dir(&self) -> &Path {
        &self.plans_dir
    }

    fn plan_path(&self, member_id: MemberId) -> PathBuf {
        self.plans_dir.join(format!("{member_id}.json"))
    }
}

impl PlanReader for JsonRepository {
    fn get_plan_by_member(&self, member_id: MemberId) -> RepositoryResult<Option<Plan>> {
        let path = self.plan_path(member_id);

        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                log::debug!("No plan stored at {}", path.display());
                return Ok(None);
            }
            Err(err) => return Err(err.into()),
        };

        let plan: Plan = serde_json::from_str(&contents)?;
        Ok(Some(plan))
    }
}
