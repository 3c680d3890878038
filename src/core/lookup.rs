use std::collections::{BTreeMap, HashMap};

use super::error::ExportError;

/// Resolves a department reference to its LODAS cost-centre code
/// (`kst_abteilungs_nr`).
pub trait DepartmentLookup {
    /// Return the code for `reference`, or an error if the lookup fails.
    fn department_code(&self, reference: &str) -> Result<String, ExportError>;
}

/// Lookup that knows no departments; every reference fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDepartments;

impl DepartmentLookup for NoDepartments {
    fn department_code(&self, reference: &str) -> Result<String, ExportError> {
        Err(ExportError::Store(format!("unknown department '{reference}'")))
    }
}

impl DepartmentLookup for BTreeMap<String, String> {
    fn department_code(&self, reference: &str) -> Result<String, ExportError> {
        self.get(reference)
            .cloned()
            .ok_or_else(|| ExportError::Store(format!("unknown department '{reference}'")))
    }
}

impl DepartmentLookup for HashMap<String, String> {
    fn department_code(&self, reference: &str) -> Result<String, ExportError> {
        self.get(reference)
            .cloned()
            .ok_or_else(|| ExportError::Store(format!("unknown department '{reference}'")))
    }
}
