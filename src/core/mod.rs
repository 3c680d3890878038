//! Employee records, export settings, errors and completeness checks.
//!
//! These are the inputs of the LODAS export: the employee snapshot read
//! from the HR system and the settings that select client numbers and
//! field restrictions.

mod employee;
mod error;
mod lookup;
mod settings;
mod validation;

pub use employee::*;
pub use error::*;
pub use lookup::*;
pub use settings::*;
pub use validation::*;
