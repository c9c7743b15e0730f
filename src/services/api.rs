use log::{error, warn};

use crate::domain::employee::{EmployeeListRequest, EmployeePage};
use crate::domain::role::Role;
use crate::dto::api::EmployeesQueryParams;
use crate::repository::{EmployeeListQuery, EmployeeReader, RoleReader};
use crate::services::{ServiceError, ServiceResult};

/// Highest page that still holds rows for `item_count` matches.
pub fn highest_valid_page(item_count: u64, per_page: u64) -> u64 {
    item_count.div_ceil(per_page.max(1))
}

/// Returns one page of employees matching the raw query parameters.
///
/// Runs validation, then the count query, then the page-bounds check,
/// and only then the page query. Each step short-circuits on failure.
pub fn list_employees<R>(repo: &R, params: EmployeesQueryParams) -> ServiceResult<EmployeePage>
where
    R: EmployeeReader + ?Sized,
{
    let request = EmployeeListRequest::try_from(params).map_err(|err| {
        warn!("Rejected employee listing parameters: {err}");
        ServiceError::from(err)
    })?;

    let query = EmployeeListQuery::from(&request);

    let rows = repo.count_employees(&query).map_err(|err| {
        error!("Failed to count employees: {err}");
        ServiceError::from(err)
    })?;

    let item_count = match rows.as_slice() {
        [count] => u64::try_from(*count).map_err(|_| {
            error!("Count query returned a negative count: {count}");
            ServiceError::Database(format!("invalid count {count}"))
        })?,
        _ => {
            error!("Count query returned {} rows instead of one", rows.len());
            return Err(ServiceError::Database(format!(
                "count query returned {} rows",
                rows.len()
            )));
        }
    };

    if item_count == 0 {
        return Err(ServiceError::NotFound);
    }

    let highest = highest_valid_page(item_count, request.per_page);
    if request.page > highest {
        return Err(ServiceError::InvalidPage {
            page: request.page,
            highest,
        });
    }

    let entries = repo.list_employees(&query).map_err(|err| {
        error!("Failed to list employees: {err}");
        ServiceError::from(err)
    })?;

    Ok(EmployeePage {
        entries,
        item_count,
        page: request.page,
    })
}

/// Returns the full role lookup list.
pub fn list_roles<R>(repo: &R) -> ServiceResult<Vec<Role>>
where
    R: RoleReader + ?Sized,
{
    repo.list_roles().map_err(|err| {
        error!("Failed to list roles: {err}");
        ServiceError::from(err)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::employee::{Employee, Sex};
    use crate::dto::api::NumberParam;
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockRepository;
    use crate::repository::Pagination;

    fn employee(id: i32, sex: Sex) -> Employee {
        Employee {
            id,
            name: format!("Employee {id}"),
            email: format!("employee{id}@faux-ltd.com"),
            sex,
        }
    }

    fn params(per_page: &str, page: &str) -> EmployeesQueryParams {
        EmployeesQueryParams {
            per_page: Some(NumberParam::Text(per_page.to_string())),
            page: Some(NumberParam::Text(page.to_string())),
            ..Default::default()
        }
    }

    fn expect_count(repo: &mut MockRepository, count: i64) {
        repo.expect_count_employees()
            .times(1)
            .returning(move |_| Ok(vec![count]));
    }

    /// 25 rows, page 3 of 10 returns the last five.
    #[test]
    fn returns_last_partial_page() {
        let mut repo = MockRepository::new();
        expect_count(&mut repo, 25);
        repo.expect_list_employees()
            .withf(|query: &EmployeeListQuery| {
                query.pagination == Pagination { page: 3, per_page: 10 }
                    && query.pagination.offset() == Some(20)
            })
            .times(1)
            .returning(|_| Ok((21..=25).map(|id| employee(id, Sex::Male)).collect()));

        let page = list_employees(&repo, params("10", "3")).unwrap();

        assert_eq!(page.entries.len(), 5);
        assert_eq!(page.item_count, 25);
        assert_eq!(page.page, 3);
    }

    #[test]
    fn page_past_the_end_is_invalid() {
        let mut repo = MockRepository::new();
        expect_count(&mut repo, 25);
        repo.expect_list_employees().times(0);

        let result = list_employees(&repo, params("10", "4"));

        assert_eq!(
            result,
            Err(ServiceError::InvalidPage {
                page: 4,
                highest: 3
            })
        );
    }

    #[test]
    fn empty_result_is_not_found() {
        let mut repo = MockRepository::new();
        expect_count(&mut repo, 0);
        repo.expect_list_employees().times(0);

        let params = EmployeesQueryParams {
            keyword: Some("zzz".to_string()),
            ..Default::default()
        };
        let result = list_employees(&repo, params);

        assert_eq!(result, Err(ServiceError::NotFound));
    }

    #[test]
    fn invalid_numbers_never_reach_storage() {
        let mut repo = MockRepository::new();
        repo.expect_count_employees().times(0);
        repo.expect_list_employees().times(0);

        let result = list_employees(&repo, params("abc", "1"));
        assert_eq!(
            result,
            Err(ServiceError::Validation(
                "per_page must be of type number".to_string()
            ))
        );

        let result = list_employees(&repo, params("10", "x"));
        assert!(matches!(result, Err(ServiceError::Validation(_))));
    }

    #[test]
    fn mixed_case_sex_filters_as_lowercase() {
        let mut repo = MockRepository::new();
        repo.expect_count_employees()
            .withf(|query: &EmployeeListQuery| {
                query.sex == Some(Sex::Male) && query.search.is_none()
            })
            .times(1)
            .returning(|_| Ok(vec![1]));
        repo.expect_list_employees()
            .times(1)
            .returning(|_| Ok(vec![employee(1, Sex::Male)]));

        let params = EmployeesQueryParams {
            sex: Some("Male".to_string()),
            ..Default::default()
        };
        let page = list_employees(&repo, params).unwrap();

        assert_eq!(page.entries[0].sex, Sex::Male);
    }

    #[test]
    fn unknown_sex_lists_without_filter() {
        let mut repo = MockRepository::new();
        repo.expect_count_employees()
            .withf(|query: &EmployeeListQuery| query.sex.is_none() && query.search.is_none())
            .times(1)
            .returning(|_| Ok(vec![2]));
        repo.expect_list_employees()
            .times(1)
            .returning(|_| Ok(vec![employee(1, Sex::Male), employee(2, Sex::Female)]));

        let params = EmployeesQueryParams {
            sex: Some("other".to_string()),
            ..Default::default()
        };
        let page = list_employees(&repo, params).unwrap();

        assert_eq!(page.item_count, 2);
    }

    #[test]
    fn count_with_wrong_shape_is_a_database_error() {
        for rows in [vec![], vec![3, 4]] {
            let mut repo = MockRepository::new();
            repo.expect_count_employees()
                .times(1)
                .returning(move |_| Ok(rows.clone()));
            repo.expect_list_employees().times(0);

            let result = list_employees(&repo, EmployeesQueryParams::default());
            assert!(matches!(result, Err(ServiceError::Database(_))));
        }
    }

    #[test]
    fn negative_count_is_a_database_error() {
        let mut repo = MockRepository::new();
        expect_count(&mut repo, -1);
        repo.expect_list_employees().times(0);

        let result = list_employees(&repo, EmployeesQueryParams::default());
        assert!(matches!(result, Err(ServiceError::Database(_))));
    }

    #[test]
    fn count_failure_skips_page_query() {
        let mut repo = MockRepository::new();
        repo.expect_count_employees()
            .times(1)
            .returning(|_| Err(RepositoryError::DatabaseError("disk I/O error".to_string())));
        repo.expect_list_employees().times(0);

        let result = list_employees(&repo, EmployeesQueryParams::default());
        assert!(matches!(result, Err(ServiceError::Database(msg)) if msg.contains("disk I/O error")));
    }

    #[test]
    fn data_failure_is_a_database_error() {
        let mut repo = MockRepository::new();
        expect_count(&mut repo, 5);
        repo.expect_list_employees()
            .times(1)
            .returning(|_| Err(RepositoryError::DatabaseError("no such table".to_string())));

        let result = list_employees(&repo, EmployeesQueryParams::default());
        assert!(matches!(result, Err(ServiceError::Database(_))));
    }

    #[test]
    fn page_below_one_reports_first_page() {
        let mut repo = MockRepository::new();
        expect_count(&mut repo, 3);
        repo.expect_list_employees()
            .withf(|query: &EmployeeListQuery| query.pagination.offset().is_none())
            .times(1)
            .returning(|_| Ok((1..=3).map(|id| employee(id, Sex::Female)).collect()));

        let page = list_employees(&repo, params("10", "0")).unwrap();
        assert_eq!(page.page, 1);
    }

    #[test]
    fn highest_valid_page_rounds_up() {
        assert_eq!(highest_valid_page(25, 10), 3);
        assert_eq!(highest_valid_page(30, 10), 3);
        assert_eq!(highest_valid_page(1, 10), 1);
        assert_eq!(highest_valid_page(0, 10), 0);
    }

    #[test]
    fn list_roles_passes_through_store() {
        let mut repo = MockRepository::new();
        repo.expect_list_roles().times(1).returning(|| {
            Ok(vec![Role {
                id: 1,
                name: "Engineer".to_string(),
                description: None,
            }])
        });

        let roles = list_roles(&repo).unwrap();
        assert_eq!(roles.len(), 1);
    }
}
