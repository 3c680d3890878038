//! # lodas-export
//!
//! Employee master data export to the DATEV LODAS interchange format.
//!
//! Free-text HR values are translated to DIED codes, mapped onto the LODAS
//! field keys, filtered by the configured export restrictions and rendered
//! as one Windows-1252, CRLF-terminated file per company.
//!
//! All amounts are handled as [`rust_decimal::Decimal`], never as floating
//! point.
//!
//! ## Quick Start
//!
//! ```rust
//! use lodas::core::*;
//! use lodas::lodas::build_files;
//!
//! let settings = ExportSettingsBuilder::new("123456")
//!     .client("Acme", "00042")
//!     .export_email("lohn@example.de")
//!     .build();
//! settings.validate().unwrap();
//!
//! let employee = EmployeeRecord {
//!     id: "HR-EMP-1".into(),
//!     company: "Acme".into(),
//!     employee_number: Some("1001".into()),
//!     personal: PersonalData {
//!         last_name: Some("Muster".into()),
//!         ..Default::default()
//!     },
//!     ..Default::default()
//! };
//!
//! let files = build_files(&group_by_company(vec![employee]), &settings, &NoDepartments);
//! assert_eq!(files.len(), 1);
//! assert!(files[0].content.contains("BeraterNr=123456"));
//! assert!(files[0].content.contains("1;\"1001\";\"Muster\";"));
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`core`] | Employee records, settings, errors, completeness checks |
//! | [`died`] | DIED code tables and value translation |
//! | [`lodas`] | Field table, restrictions, record layouts, file assembly |
//! | [`export`] | Export run with store and mail collaborators |
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `yaml` (default) | Load [`ExportSettings`](core::ExportSettings) from YAML |

pub mod core;
pub mod died;
pub mod export;
pub mod lodas;

// Re-export core types at crate root for convenience
pub use crate::core::*;
