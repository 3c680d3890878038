use crate::core::{DepartmentLookup, EmployeeRecord, ExportError, Scalar};

use super::history::ExportHistoryEntry;
use super::mail::ExportMail;

/// The HR data store the export reads from and reports back to.
///
/// Department codes are resolved through the [`DepartmentLookup`]
/// supertrait.
pub trait EmployeeStore: DepartmentLookup {
    /// Employees flagged as export pending, with their dependents.
    fn pending_employees(&self) -> Result<Vec<EmployeeRecord>, ExportError>;

    /// A single employee by id, pending or not.
    fn employee(&self, id: &str) -> Result<EmployeeRecord, ExportError>;

    /// Clear the pending flag of `employee` and store the weekly hours that
    /// were current at export time.
    fn commit_export(
        &mut self,
        employee: &str,
        weekly_hours: Option<&Scalar>,
    ) -> Result<(), ExportError>;

    /// Append a row to the export history.
    fn append_history(&mut self, entry: ExportHistoryEntry) -> Result<(), ExportError>;
}

/// Delivers the export mail.
pub trait MailTransport {
    fn send(&mut self, mail: &ExportMail) -> Result<(), ExportError>;
}
