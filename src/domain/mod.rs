//! Domain values exposed by the employee directory service layer.

pub mod employee;
pub mod role;
pub mod types;
