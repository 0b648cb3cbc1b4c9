//! Services assembling the plan calendar view.

use chrono::NaiveDate;

use crate::calendar::{build_calendar_from, plan_end_date, plan_progress, plan_start_date};
use crate::domain::types::MemberId;
use crate::dto::calendar::CalendarPageData;
use crate::forms::pagination::{PageQuery, PageQueryForm};
use crate::models::config::AppConfig;
use crate::pagination::{Paginated, go_to_page, paginate};
use crate::repository::PlanReader;
use crate::services::{ServiceError, ServiceResult};

/// Loads a member's plan and returns the requested page of its calendar.
///
/// Out-of-range page requests are clamped to the nearest valid page. `today`
/// drives the progress summary.
pub fn load_plan_calendar_page<R>(
    repo: &R,
    member_id: MemberId,
    form: PageQueryForm,
    config: &AppConfig,
    today: NaiveDate,
) -> ServiceResult<CalendarPageData>
where
    R: PlanReader + ?Sized,
{
    let query = PageQuery::try_from(form).map_err(|err| {
        log::error!("Failed to validate page query: {err}");
        ServiceError::from(err)
    })?;

    let plan = repo
        .get_plan_by_member(member_id)
        .map_err(|err| {
            log::error!("Failed to load plan for member {member_id}: {err}");
            err
        })?
        .ok_or(ServiceError::NotFound)?;

    let (start_date, entries) = plan_start_date(&plan)
        .and_then(|start| Ok((start, build_calendar_from(&plan, start)?)))
        .map_err(|err| {
            log::error!("Failed to build calendar for member {member_id}: {err}");
            err
        })?;

    let items_per_page = query.items_per_page.unwrap_or(config.items_per_page);
    let page = go_to_page(query.page, entries.len(), items_per_page);
    if page != query.page {
        log::info!("Clamped page {} to {page} for member {member_id}", query.page);
    }

    let progress = plan_progress(&entries, today);
    let end_date = plan_end_date(&entries);
    let paginated = Paginated::new(
        paginate(&entries, page, items_per_page),
        config.page_label_delta,
    );

    Ok(CalendarPageData {
        member_id,
        start_date,
        end_date,
        start_date_display: config.locale.render(start_date),
        end_date_display: end_date.map(|date| config.locale.render(date)),
        progress,
        entries: paginated,
    })
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use serde_json::{Map, json};

    use super::*;
    use crate::dates::DateLocale;
    use crate::domain::plan::{Day, Plan, Week};
    use crate::domain::types::ItemsPerPage;
    use crate::pagination::PageLabel;
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockRepository;

    fn config() -> AppConfig {
        AppConfig {
            plans_dir: "plans".to_string(),
            items_per_page: ItemsPerPage::new(4).unwrap(),
            page_label_delta: 2,
            locale: DateLocale::EnGb,
        }
    }

    fn member() -> MemberId {
        MemberId::new(7).unwrap()
    }

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    /// Two weeks of seven days each.
    fn fortnight_plan(start_date: &str) -> Plan {
        let week = |offset: usize| Week {
            days: (1..=7)
                .map(|n| {
                    let mut fields = Map::new();
                    fields.insert("cigarettes".to_string(), json!(20 - offset - n));
                    Day::new(fields)
                })
                .collect(),
        };
        Plan {
            start_date: start_date.to_string(),
            weeks: vec![week(0), week(7)],
        }
    }

    #[test]
    fn loads_requested_page() {
        let mut repo = MockRepository::new();
        repo.expect_get_plan_by_member()
            .times(1)
            .returning(|_| Ok(Some(fortnight_plan("01-06-2024"))));

        let form = PageQueryForm {
            page: Some(2),
            per_page: None,
        };
        let data =
            load_plan_calendar_page(&repo, member(), form, &config(), ymd(2024, 6, 3)).unwrap();

        assert_eq!(data.start_date, ymd(2024, 6, 1));
        assert_eq!(data.end_date, Some(ymd(2024, 6, 14)));
        assert_eq!(data.start_date_display, "01/06/2024");
        assert_eq!(data.end_date_display.as_deref(), Some("14/06/2024"));
        assert_eq!(data.entries.page, 2);
        assert_eq!(data.entries.total_pages, 4);
        let numbers: Vec<usize> = data.entries.items.iter().map(|e| e.day_number).collect();
        assert_eq!(numbers, vec![5, 6, 7, 8]);
        assert_eq!(
            data.entries.pages,
            vec![
                PageLabel::Page(1),
                PageLabel::Page(2),
                PageLabel::Page(3),
                PageLabel::Page(4)
            ]
        );
        assert_eq!(data.progress.current_day, Some(3));
        assert_eq!(data.progress.completed_days, 2);
    }

    #[test]
    fn out_of_range_page_is_clamped() {
        let mut repo = MockRepository::new();
        repo.expect_get_plan_by_member()
            .returning(|_| Ok(Some(fortnight_plan("2024-06-01"))));

        let form = PageQueryForm {
            page: Some(40),
            per_page: Some(10),
        };
        let data =
            load_plan_calendar_page(&repo, member(), form, &config(), ymd(2024, 6, 1)).unwrap();

        assert_eq!(data.entries.page, 2);
        assert_eq!(data.entries.items.len(), 4);
        assert!(data.entries.is_last_page);
    }

    #[test]
    fn plan_without_days_keeps_start_date() {
        let mut repo = MockRepository::new();
        repo.expect_get_plan_by_member().returning(|_| {
            Ok(Some(Plan {
                start_date: "2024-06-01T08:00:00Z".to_string(),
                weeks: vec![Week::default()],
            }))
        });

        let data = load_plan_calendar_page(
            &repo,
            member(),
            PageQueryForm::default(),
            &config(),
            ymd(2024, 6, 1),
        )
        .unwrap();

        assert_eq!(data.start_date, ymd(2024, 6, 1));
        assert_eq!(data.start_date_display, "01/06/2024");
        assert_eq!(data.end_date, None);
        assert_eq!(data.entries.page, 1);
        assert!(data.entries.items.is_empty());
        assert_eq!(data.progress.total_days, 0);
    }

    #[test]
    fn missing_plan_is_not_found() {
        let mut repo = MockRepository::new();
        repo.expect_get_plan_by_member().returning(|_| Ok(None));

        let result = load_plan_calendar_page(
            &repo,
            member(),
            PageQueryForm::default(),
            &config(),
            ymd(2024, 6, 1),
        );

        assert!(matches!(result, Err(ServiceError::NotFound)));
    }

    #[test]
    fn invalid_start_date_is_reported() {
        let mut repo = MockRepository::new();
        repo.expect_get_plan_by_member()
            .returning(|_| Ok(Some(fortnight_plan("31-02-2025"))));

        let result = load_plan_calendar_page(
            &repo,
            member(),
            PageQueryForm::default(),
            &config(),
            ymd(2024, 6, 1),
        );

        assert!(matches!(result, Err(ServiceError::InvalidPlan(_))));
    }

    #[test]
    fn invalid_form_skips_repository() {
        let mut repo = MockRepository::new();
        repo.expect_get_plan_by_member().times(0);

        let form = PageQueryForm {
            page: Some(0),
            per_page: None,
        };
        let result = load_plan_calendar_page(&repo, member(), form, &config(), ymd(2024, 6, 1));

        assert!(matches!(result, Err(ServiceError::Form(_))));
    }

    #[test]
    fn repository_failures_propagate() {
        let mut repo = MockRepository::new();
        repo.expect_get_plan_by_member()
            .returning(|_| Err(RepositoryError::Io("disk unavailable".to_string())));

        let result = load_plan_calendar_page(
            &repo,
            member(),
            PageQueryForm::default(),
            &config(),
            ymd(2024, 6, 1),
        );

        assert!(matches!(result, Err(ServiceError::Internal(_))));
    }
}
