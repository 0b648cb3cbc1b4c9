//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::plan::Plan;
use crate::domain::types::MemberId;
use crate::repository::PlanReader;
use crate::repository::errors::RepositoryResult;

mock! {
    pub Repository {}

    impl PlanReader for Repository {
        fn get_plan_by_member(&self, member_id: MemberId) -> RepositoryResult<Option<Plan>>;
    }
}
