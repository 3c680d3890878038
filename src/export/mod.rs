//! The export run around the LODAS core.
//!
//! Reads pending employees from an [`EmployeeStore`], builds the files,
//! hands them to a [`MailTransport`] and, after successful delivery,
//! records the run and commits every exported employee.

mod collaborators;
mod history;
mod job;
mod mail;

pub use collaborators::{EmployeeStore, MailTransport};
pub use history::{ExportHistoryEntry, ExportStatus};
pub use job::{ExportJob, ExportSummary};
pub use mail::{Attachment, ExportMail, SUBJECT};
