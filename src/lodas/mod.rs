//! DATEV LODAS personnel master data export.
//!
//! Maps employees onto LODAS fields, applies export restrictions and
//! renders one semicolon-delimited file per company with the sections
//! `[Allgemein]`, `[Satzbeschreibung]` and `[Stammdaten]`.
//!
//! # Example
//!
//! ```
//! use lodas::core::{EmployeeRecord, ExportSettingsBuilder, NoDepartments, group_by_company};
//! use lodas::lodas::LodasExporter;
//!
//! let settings = ExportSettingsBuilder::new("123456")
//!     .client("Acme", "00042")
//!     .export_email("lohn@example.de")
//!     .build();
//!
//! let employee = EmployeeRecord {
//!     id: "HR-EMP-1".into(),
//!     company: "Acme".into(),
//!     employee_number: Some("1001".into()),
//!     ..Default::default()
//! };
//!
//! let files = LodasExporter::new(&settings, &NoDepartments)
//!     .build_files(&group_by_company(vec![employee]));
//! assert_eq!(files.len(), 1);
//! assert!(files[0].content.contains("MandantenNr=00042"));
//! ```

mod fields;
mod file;
mod layout;
mod restrictions;
mod salary;
mod serialize;

pub use fields::{
    Derivation, FIELD_TABLE, FieldDef, MappedRecord, field_def, map_dependent, map_employee,
    overlay_dependent,
};
pub use file::{GeneratedFile, LodasExporter, PreparedEmployee, build_files, file_header};
pub use layout::{ALL_RECORDS, Column, EMPLOYEE_RECORDS, RecordLayout};
pub use restrictions::{
    GateDecision, RestrictionSet, WEEKLY_HOURS_KEY, apply_restrictions, apply_weekly_hours_gate,
    weekly_hours_gate,
};
pub use salary::{
    DEFAULT_SUPPLEMENT_WAGE_TYPE, DEFAULT_WAGE_TYPE, WageLine, basic_salary, wage_lines,
};
pub use serialize::{
    CRLF, EmployeeBlock, format_field, format_numeric, record_descriptions, serialize_employee,
};
