use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::lodas::GeneratedFile;

/// Outcome of an export run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExportStatus {
    /// Files were delivered.
    Success,
    /// Delivery failed; nothing was committed.
    Failed,
}

/// One row of the export history log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportHistoryEntry {
    /// Start of the run.
    pub timestamp: NaiveDateTime,
    /// Employees across all files.
    pub employee_count: usize,
    /// Children across all files.
    pub dependent_count: usize,
    /// Outcome of the run.
    pub status: ExportStatus,
    /// Human-readable summary or error.
    pub message: String,
}

impl ExportHistoryEntry {
    /// Successful run over `files`.
    pub fn success(timestamp: NaiveDateTime, files: &[GeneratedFile]) -> Self {
        let employees = files.iter().map(|f| f.employee_count).sum();
        let dependents = files.iter().map(|f| f.dependent_count).sum();
        Self {
            timestamp,
            employee_count: employees,
            dependent_count: dependents,
            status: ExportStatus::Success,
            message: format!(
                "Exported {employees} employees and {dependents} children from {} companies",
                files.len()
            ),
        }
    }

    /// Failed run; counts refer to the files that were not delivered.
    pub fn failed(timestamp: NaiveDateTime, files: &[GeneratedFile], reason: &str) -> Self {
        Self {
            timestamp,
            employee_count: files.iter().map(|f| f.employee_count).sum(),
            dependent_count: files.iter().map(|f| f.dependent_count).sum(),
            status: ExportStatus::Failed,
            message: reason.to_string(),
        }
    }
}
