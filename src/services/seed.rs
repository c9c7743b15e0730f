//! Synthetic employee data used to populate a fresh database.

use log::info;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::domain::employee::{NewEmployee, Sex};
use crate::models::config::SeedConfig;
use crate::repository::{EmployeeReader, EmployeeWriter};
use crate::services::ServiceResult;

pub const EMAIL_DOMAIN: &str = "faux-ltd.com";

const MALE_FIRST_NAMES: &[&str] = &[
    "James", "Robert", "John", "Michael", "David", "William", "Richard", "Joseph", "Thomas",
    "Daniel", "Matthew", "Anthony", "Mark", "Steven", "Andrew", "Joshua",
];

const FEMALE_FIRST_NAMES: &[&str] = &[
    "Mary", "Patricia", "Jennifer", "Linda", "Elizabeth", "Barbara", "Susan", "Jessica", "Sarah",
    "Karen", "Nancy", "Lisa", "Betty", "Sandra", "Ashley", "Emily",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Wilson", "Anderson", "Taylor", "Moore", "Jackson", "Lee",
];

/// Builds one random employee with a sex-appropriate first name.
pub fn generate_employee<R: Rng + ?Sized>(rng: &mut R) -> NewEmployee {
    let sex = if rng.gen_bool(0.5) {
        Sex::Male
    } else {
        Sex::Female
    };
    let first_names = match sex {
        Sex::Male => MALE_FIRST_NAMES,
        Sex::Female => FEMALE_FIRST_NAMES,
    };
    let first = first_names.choose(rng).copied().unwrap_or_default();
    let last = LAST_NAMES.choose(rng).copied().unwrap_or_default();

    NewEmployee::new(
        format!("{first} {last}"),
        format!("{first}.{last}@{EMAIL_DOMAIN}"),
        sex,
    )
}

pub fn generate_employees<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<NewEmployee> {
    (0..count).map(|_| generate_employee(rng)).collect()
}

/// Inserts synthetic employees according to `config`.
///
/// Returns the number of inserted rows, zero when nothing was generated.
pub fn seed_employees<R>(repo: &R, config: &SeedConfig) -> ServiceResult<usize>
where
    R: EmployeeReader + EmployeeWriter + ?Sized,
{
    let generate = if config.generate {
        true
    } else if config.generate_if_empty {
        repo.count_all_employees()? == 0
    } else {
        false
    };

    if !generate {
        return Ok(0);
    }

    let employees = generate_employees(&mut rand::thread_rng(), config.size);
    let inserted = repo.create_employees(&employees)?;
    info!("Seeded {inserted} employees");

    Ok(inserted)
}
