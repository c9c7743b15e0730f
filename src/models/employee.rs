use diesel::prelude::*;

use crate::domain::employee::{
    Employee as DomainEmployee, NewEmployee as DomainNewEmployee, Sex,
};
use crate::domain::types::TypeConstraintError;

#[derive(Debug, Clone, Queryable)]
#[diesel(table_name = crate::schema::employees)]
/// Diesel model for [`crate::domain::employee::Employee`].
pub struct Employee {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub sex: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::employees)]
/// Insertable form of [`Employee`].
pub struct NewEmployee<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub sex: &'a str,
}

impl TryFrom<Employee> for DomainEmployee {
    type Error = TypeConstraintError;

    fn try_from(employee: Employee) -> Result<Self, Self::Error> {
        Ok(Self {
            id: employee.id,
            sex: Sex::try_from(employee.sex.as_str())?,
            name: employee.name,
            email: employee.email,
        })
    }
}

impl<'a> From<&'a DomainNewEmployee> for NewEmployee<'a> {
    fn from(employee: &'a DomainNewEmployee) -> Self {
        Self {
            name: employee.name.as_str(),
            email: employee.email.as_str(),
            sex: employee.sex.as_str(),
        }
    }
}
