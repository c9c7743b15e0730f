//! Diesel implementation of the employee storage traits.

use diesel::debug_query;
use diesel::prelude::*;
use diesel::sqlite::Sqlite;
use log::debug;

use crate::{
    domain::employee::{Employee, NewEmployee},
    models::employee::{Employee as DbEmployee, NewEmployee as DbNewEmployee},
    repository::{
        DieselRepository, EmployeeListQuery, EmployeeReader, EmployeeWriter,
        errors::{RepositoryError, RepositoryResult},
        query::{count_query, page_query},
    },
};

/// Rows per INSERT, keeping well below SQLite's bound-parameter limit.
const INSERT_CHUNK_SIZE: usize = 500;

impl EmployeeReader for DieselRepository {
    fn count_employees(&self, query: &EmployeeListQuery) -> RepositoryResult<Vec<i64>> {
        let mut conn = self.conn()?;
        let statement = count_query(query);
        debug!("{}", debug_query::<Sqlite, _>(&statement));

        Ok(statement.load::<i64>(&mut conn)?)
    }

    fn list_employees(&self, query: &EmployeeListQuery) -> RepositoryResult<Vec<Employee>> {
        let mut conn = self.conn()?;
        let statement = page_query(query);
        debug!("{}", debug_query::<Sqlite, _>(&statement));

        statement
            .load::<DbEmployee>(&mut conn)?
            .into_iter()
            .map(|row| Employee::try_from(row).map_err(RepositoryError::from))
            .collect()
    }

    fn count_all_employees(&self) -> RepositoryResult<usize> {
        use crate::schema::employees;

        let mut conn = self.conn()?;
        let total: i64 = employees::table.count().get_result(&mut conn)?;

        usize::try_from(total)
            .map_err(|_| RepositoryError::DatabaseError(format!("Invalid row count {total}")))
    }
}

impl EmployeeWriter for DieselRepository {
    fn create_employees(&self, new_employees: &[NewEmployee]) -> RepositoryResult<usize> {
        use crate::schema::employees;

        let mut conn = self.conn()?;
        let insertables: Vec<DbNewEmployee> = new_employees.iter().map(Into::into).collect();

        conn.transaction::<usize, diesel::result::Error, _>(|conn| {
            let mut affected = 0;
            for chunk in insertables.chunks(INSERT_CHUNK_SIZE) {
                affected += diesel::insert_into(employees::table)
                    .values(chunk)
                    .execute(conn)?;
            }
            Ok(affected)
        })
        .map_err(RepositoryError::from)
    }
}
