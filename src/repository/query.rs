//! Typed Diesel queries behind the employee listing.
//!
//! The count and page queries both start from [`filtered_employees`], so the
//! page-bounds check performed on the count always agrees with the rows the
//! page query returns.

use diesel::prelude::*;
use diesel::sql_types::BigInt;
use diesel::sqlite::Sqlite;

use crate::domain::employee::{DEFAULT_ITEMS_PER_PAGE, EmployeeListRequest, Sex};
use crate::domain::types::SearchKeyword;
use crate::schema::employees;

/// Escape character declared on the name `LIKE`.
const LIKE_ESCAPE: char = '\\';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    pub page: u64,
    pub per_page: u64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_ITEMS_PER_PAGE,
        }
    }
}

impl Pagination {
    /// Rows to skip; `None` on the first page so no OFFSET is emitted.
    pub fn offset(&self) -> Option<u64> {
        if self.page > 1 {
            Some((self.page - 1).saturating_mul(self.per_page))
        } else {
            None
        }
    }
}

/// Filters and page window of one employee listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeListQuery {
    pub search: Option<SearchKeyword>,
    pub sex: Option<Sex>,
    pub pagination: Pagination,
}

impl EmployeeListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, keyword: SearchKeyword) -> Self {
        self.search = Some(keyword);
        self
    }

    pub fn sex(mut self, sex: Sex) -> Self {
        self.sex = Some(sex);
        self
    }

    pub fn paginate(mut self, page: u64, per_page: u64) -> Self {
        self.pagination = Pagination {
            page: page.max(1),
            per_page: per_page.max(1),
        };
        self
    }
}

impl From<&EmployeeListRequest> for EmployeeListQuery {
    fn from(request: &EmployeeListRequest) -> Self {
        let mut query = EmployeeListQuery::new().paginate(request.page, request.per_page);
        if let Some(keyword) = &request.search {
            query = query.search(keyword.clone());
        }
        if let Some(sex) = request.sex {
            query = query.sex(sex);
        }
        query
    }
}

/// Employees matching the query's filters, unordered and unpaginated.
pub fn filtered_employees(query: &EmployeeListQuery) -> employees::BoxedQuery<'static, Sqlite> {
    let mut items = employees::table.into_boxed::<Sqlite>();

    if let Some(keyword) = &query.search {
        items = items.filter(
            employees::name
                .like(like_pattern(keyword))
                .escape(LIKE_ESCAPE),
        );
    }
    if let Some(sex) = query.sex {
        items = items.filter(employees::sex.eq(sex.as_str()));
    }
    items
}

/// `SELECT COUNT(*)` over the filtered set. Never paginated.
pub fn count_query(
    query: &EmployeeListQuery,
) -> employees::BoxedQuery<'static, Sqlite, BigInt> {
    filtered_employees(query).count()
}

/// The requested page of the filtered set, ordered by id.
pub fn page_query(query: &EmployeeListQuery) -> employees::BoxedQuery<'static, Sqlite> {
    let mut items = filtered_employees(query)
        .order(employees::id.asc())
        .limit(to_sql_int(query.pagination.per_page));

    if let Some(offset) = query.pagination.offset() {
        items = items.offset(to_sql_int(offset));
    }
    items
}

/// Substring pattern for `keyword` with LIKE metacharacters escaped.
fn like_pattern(keyword: &str) -> String {
    let mut pattern = String::with_capacity(keyword.len() + 2);
    pattern.push('%');
    for c in keyword.chars() {
        if matches!(c, '%' | '_') || c == LIKE_ESCAPE {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

fn to_sql_int(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}
