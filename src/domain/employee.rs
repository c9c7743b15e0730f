use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::domain::types::{SearchKeyword, TypeConstraintError};

/// Page size used when the caller omits `per_page` or passes a value below 1.
pub const DEFAULT_ITEMS_PER_PAGE: u64 = 10;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Employee {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub sex: Sex,
}

#[derive(Clone, Debug)]
pub struct NewEmployee {
    pub name: String,
    pub email: String,
    pub sex: Sex,
}

impl NewEmployee {
    #[must_use]
    pub fn new(name: String, email: String, sex: Sex) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_lowercase(),
            sex,
        }
    }
}

/// Closed set of values stored in the `sex` column.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// Lenient parser for user input: trims and lower-cases, returning `None`
    /// for anything other than `male` or `female`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "male" => Some(Sex::Male),
            "female" => Some(Sex::Female),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }
}

impl Display for Sex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<&str> for Sex {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Sex::parse(value).ok_or_else(|| TypeConstraintError::InvalidValue(value.to_string()))
    }
}

/// Validated parameters of a single employee listing request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmployeeListRequest {
    /// Case-insensitive substring matched against employee names.
    pub search: Option<SearchKeyword>,
    pub sex: Option<Sex>,
    /// Page size, always at least 1.
    pub per_page: u64,
    /// One-based page number, always at least 1.
    pub page: u64,
}

impl Default for EmployeeListRequest {
    fn default() -> Self {
        Self {
            search: None,
            sex: None,
            per_page: DEFAULT_ITEMS_PER_PAGE,
            page: 1,
        }
    }
}

/// One page of employees together with the filtered total.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmployeePage {
    pub entries: Vec<Employee>,
    pub item_count: u64,
    pub page: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sex_parse_normalizes_case_and_whitespace() {
        assert_eq!(Sex::parse("Male"), Some(Sex::Male));
        assert_eq!(Sex::parse("  FEMALE "), Some(Sex::Female));
        assert_eq!(Sex::parse("other"), None);
        assert_eq!(Sex::parse(""), None);
    }

    #[test]
    fn sex_try_from_rejects_unknown_values() {
        assert_eq!(Sex::try_from("female"), Ok(Sex::Female));
        assert_eq!(
            Sex::try_from("x"),
            Err(TypeConstraintError::InvalidValue("x".to_string()))
        );
    }

    #[test]
    fn sex_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Sex::Male).unwrap(), "\"male\"");
    }

    #[test]
    fn new_employee_normalizes_email() {
        let employee = NewEmployee::new(
            " Ann Lee ".to_string(),
            " Ann.Lee@Faux-Ltd.com".to_string(),
            Sex::Female,
        );
        assert_eq!(employee.name, "Ann Lee");
        assert_eq!(employee.email, "ann.lee@faux-ltd.com");
    }
}
