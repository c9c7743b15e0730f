//! DTOs exposed by the employee directory API endpoints.
//!
//! Raw query parameters arrive loosely typed and only live in
//! [`EmployeesQueryParams`]. Converting them into [`EmployeeListRequest`]
//! validates and normalizes them.

use serde::{Deserialize, Serialize};

use crate::domain::employee::{
    DEFAULT_ITEMS_PER_PAGE, Employee, EmployeeListRequest, EmployeePage, Sex,
};
use crate::domain::role::Role;
use crate::domain::types::{SearchKeyword, TypeConstraintError};

/// Numeric parameter given either as a JSON number or as text.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum NumberParam {
    Number(f64),
    Text(String),
}

impl NumberParam {
    /// Reads the parameter as a finite number.
    ///
    /// Blank text counts as absent and yields `Ok(None)`.
    pub fn to_finite(&self, field: &'static str) -> Result<Option<f64>, TypeConstraintError> {
        let value = match self {
            NumberParam::Number(value) => *value,
            NumberParam::Text(text) => {
                let text = text.trim();
                if text.is_empty() {
                    return Ok(None);
                }
                text.parse::<f64>()
                    .map_err(|_| TypeConstraintError::NotANumber(field))?
            }
        };

        if value.is_finite() {
            Ok(Some(value))
        } else {
            Err(TypeConstraintError::NotANumber(field))
        }
    }
}

/// Query parameters accepted by the `/api/v1/employees` endpoint.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct EmployeesQueryParams {
    pub keyword: Option<String>,
    pub sex: Option<String>,
    pub per_page: Option<NumberParam>,
    pub page: Option<NumberParam>,
}

fn read_number(
    param: Option<&NumberParam>,
    field: &'static str,
) -> Result<Option<f64>, TypeConstraintError> {
    Ok(param.map(|p| p.to_finite(field)).transpose()?.flatten())
}

impl TryFrom<EmployeesQueryParams> for EmployeeListRequest {
    type Error = TypeConstraintError;

    fn try_from(params: EmployeesQueryParams) -> Result<Self, Self::Error> {
        let per_page = match read_number(params.per_page.as_ref(), "per_page")? {
            Some(value) if value >= 1.0 => value.floor() as u64,
            _ => DEFAULT_ITEMS_PER_PAGE,
        };
        let page = match read_number(params.page.as_ref(), "page")? {
            Some(value) if value >= 1.0 => value.floor() as u64,
            _ => 1,
        };

        Ok(Self {
            search: params.keyword.and_then(|k| SearchKeyword::new(k).ok()),
            // Unrecognized values disable the filter instead of failing.
            sex: params.sex.as_deref().and_then(Sex::parse),
            per_page,
            page,
        })
    }
}

/// Successful body of `/api/v1/employees`.
#[derive(Debug, Serialize, Deserialize)]
pub struct EmployeesResponse {
    pub entries: Vec<Employee>,
    pub item_count: u64,
    pub page: u64,
}

impl From<EmployeePage> for EmployeesResponse {
    fn from(page: EmployeePage) -> Self {
        Self {
            entries: page.entries,
            item_count: page.item_count,
            page: page.page,
        }
    }
}

/// Successful body of `/api/v1/roles`.
#[derive(Debug, Serialize, Deserialize)]
pub struct RolesResponse {
    pub entries: Vec<Role>,
    pub item_count: usize,
}

impl From<Vec<Role>> for RolesResponse {
    fn from(entries: Vec<Role>) -> Self {
        Self {
            item_count: entries.len(),
            entries,
        }
    }
}

/// Body of every failed API response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
