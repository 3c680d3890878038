use std::collections::HashMap;
use std::path::PathBuf;

use chrono::{Local, NaiveDateTime};
use tracing::{info, warn};

use super::collaborators::{EmployeeStore, MailTransport};
use super::history::ExportHistoryEntry;
use super::mail::ExportMail;
use crate::core::{
    EmployeeRecord, ExportError, ExportSettings, ValidationError, enforce_completeness,
    group_by_company, validate_company_mapping,
};
use crate::lodas::{GeneratedFile, LodasExporter};

/// Result of a completed export run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportSummary {
    /// Delivered files.
    pub files: Vec<GeneratedFile>,
    /// Employees committed by the run.
    pub employee_count: usize,
    /// Children written to the files.
    pub dependent_count: usize,
    /// Completeness issues logged under the warn policy.
    pub warnings: Vec<ValidationError>,
    /// Employees left out after a serialization failure; they stay pending.
    pub dropped: Vec<String>,
}

impl ExportSummary {
    /// Nothing was pending.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// One export run: read pending employees, build and deliver the files,
/// then record history and commit the exported employees.
pub struct ExportJob<'a, S, M> {
    settings: &'a ExportSettings,
    store: &'a mut S,
    mailer: &'a mut M,
    spool_dir: Option<PathBuf>,
}

impl<'a, S: EmployeeStore, M: MailTransport> ExportJob<'a, S, M> {
    pub fn new(settings: &'a ExportSettings, store: &'a mut S, mailer: &'a mut M) -> Self {
        Self {
            settings,
            store,
            mailer,
            spool_dir: None,
        }
    }

    /// Write the files into `dir` before delivery; they are removed after
    /// a successful delivery.
    pub fn spool_to(mut self, dir: impl Into<PathBuf>) -> Self {
        self.spool_dir = Some(dir.into());
        self
    }

    /// Export all pending employees.
    pub fn run(&mut self) -> Result<ExportSummary, ExportError> {
        self.run_at(Local::now().naive_local())
    }

    /// Export all pending employees with a fixed timestamp.
    pub fn run_at(&mut self, now: NaiveDateTime) -> Result<ExportSummary, ExportError> {
        let pending = self.store.pending_employees()?;
        if pending.is_empty() {
            info!("no employees pending export");
            return Ok(ExportSummary::default());
        }
        self.settings.validate()?;
        let groups = group_by_company(pending);
        validate_company_mapping(self.settings, &groups)?;
        let warnings = enforce_completeness(&groups, self.settings.completeness)?;

        let files = LodasExporter::new(self.settings, &*self.store).build_files_at(&groups, now);
        if files.is_empty() {
            return Err(ExportError::NoFilesGenerated);
        }
        let employees: HashMap<&str, &EmployeeRecord> = groups
            .values()
            .flatten()
            .map(|e| (e.id.as_str(), e))
            .collect();
        let mut summary = self.deliver(files, &employees, now)?;
        summary.warnings = warnings;
        Ok(summary)
    }

    /// Export one employee regardless of its pending flag.
    pub fn run_single(&mut self, employee_id: &str) -> Result<ExportSummary, ExportError> {
        self.run_single_at(employee_id, Local::now().naive_local())
    }

    pub fn run_single_at(
        &mut self,
        employee_id: &str,
        now: NaiveDateTime,
    ) -> Result<ExportSummary, ExportError> {
        self.settings.validate()?;
        let employee = self.store.employee(employee_id)?;
        let file = LodasExporter::new(self.settings, &*self.store).build_single_at(&employee, now)?;
        let employees = HashMap::from([(employee.id.as_str(), &employee)]);
        self.deliver(vec![file], &employees, now)
    }

    fn deliver(
        &mut self,
        mut files: Vec<GeneratedFile>,
        employees: &HashMap<&str, &EmployeeRecord>,
        now: NaiveDateTime,
    ) -> Result<ExportSummary, ExportError> {
        if let Some(dir) = &self.spool_dir {
            let written = files.iter_mut().try_for_each(|f| f.write_to(dir).map(|_| ()));
            if let Err(e) = written {
                remove_spooled(&mut files);
                return Err(e);
            }
        }

        let mail = ExportMail::compose(&self.settings.export_email, &files);
        if let Err(e) = self.mailer.send(&mail) {
            let entry = ExportHistoryEntry::failed(now, &files, &e.to_string());
            if let Err(history) = self.store.append_history(entry) {
                warn!(error = %history, "could not record failed export");
            }
            return Err(e);
        }

        self.store.append_history(ExportHistoryEntry::success(now, &files))?;

        remove_spooled(&mut files);

        let mut summary = ExportSummary::default();
        for file in &files {
            for id in &file.exported {
                let weekly_hours = employees
                    .get(id.as_str())
                    .and_then(|e| e.compensation.weekly_hours.as_ref());
                self.store.commit_export(id, weekly_hours)?;
            }
            summary.employee_count += file.employee_count;
            summary.dependent_count += file.dependent_count;
            summary.dropped.extend(file.dropped.iter().cloned());
        }
        info!(
            files = files.len(),
            employees = summary.employee_count,
            dependents = summary.dependent_count,
            "LODAS export completed"
        );
        summary.files = files;
        Ok(summary)
    }
}

/// Delete every file written to the spool directory and clear its path.
fn remove_spooled(files: &mut [GeneratedFile]) {
    for file in files {
        if let Some(path) = file.path.take() {
            if let Err(e) = std::fs::remove_file(&path) {
                warn!(path = %path.display(), error = %e, "could not remove spooled file");
            }
        }
    }
}
