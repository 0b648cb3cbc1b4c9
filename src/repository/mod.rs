use crate::{
    domain::{plan::Plan, types::MemberId},
    repository::errors::RepositoryResult,
};

pub mod errors;
pub mod json;
#[cfg(feature = "test-mocks")]
pub mod mock;

pub use json::JsonRepository;

/// Read access to member plans.
pub trait PlanReader {
    /// Loads the plan assigned to `member_id`, `None` when the member has none.
    fn get_plan_by_member(&self, member_id: MemberId) -> RepositoryResult<Option<Plan>>;
}
