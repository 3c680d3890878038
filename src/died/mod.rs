//! DIED code-table mapper.
//!
//! Translates free-text domain values into the fixed codes required by
//! LODAS, reformats dates and passes the remaining fields through.

mod countries;
mod source;
mod tables;
mod translate;

pub use countries::{BIRTH_COUNTRY, NATIONALITY};
pub use source::{DependentField, FieldKind, SourceField};
pub use tables::*;
pub use translate::{format_date, translate, translate_dependent, translate_named};
