//! LODAS file assembly: header, record descriptions and master data.

use std::path::{Path, PathBuf};

use chrono::{Datelike, Local, NaiveDate, NaiveDateTime};
use encoding_rs::WINDOWS_1252;
use tracing::{info, warn};

use super::fields::{MappedRecord, map_employee, overlay_dependent};
use super::restrictions::{apply_restrictions, apply_weekly_hours_gate};
use super::salary::{WageLine, wage_lines};
use super::serialize::{CRLF, EmployeeBlock, record_descriptions, serialize_employee};
use crate::core::{CompanyGroups, DepartmentLookup, EmployeeRecord, ExportError, ExportSettings};

/// One generated LODAS file for a company.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// `DATEV_LODAS_<company>_<timestamp>.txt`.
    pub filename: String,
    /// Company the file was built for.
    pub company: String,
    /// LODAS client number (Mandantennummer).
    pub client_number: String,
    /// Employees whose records are in the file.
    pub employee_count: usize,
    /// Record-11 lines across all employees.
    pub dependent_count: usize,
    /// File content with CRLF line endings.
    pub content: String,
    /// Ids of the employees in the file.
    pub exported: Vec<String>,
    /// Ids of employees dropped after a serialization failure.
    pub dropped: Vec<String>,
    /// Location on disk once written.
    pub path: Option<PathBuf>,
}

impl GeneratedFile {
    /// Content encoded as Windows-1252, the encoding LODAS expects.
    pub fn encode(&self) -> Vec<u8> {
        let (bytes, _, _) = WINDOWS_1252.encode(&self.content);
        bytes.into_owned()
    }

    /// Write the encoded file into `dir` and remember the path.
    pub fn write_to(&mut self, dir: impl AsRef<Path>) -> Result<&Path, ExportError> {
        let path = dir.as_ref().join(&self.filename);
        std::fs::write(&path, self.encode())?;
        Ok(self.path.insert(path).as_path())
    }
}

/// An employee mapped, filtered and ready to serialize.
#[derive(Debug, Clone)]
pub struct PreparedEmployee {
    /// Translated and restricted employee values.
    pub record: MappedRecord,
    /// The record overlaid with each informative child.
    pub dependents: Vec<MappedRecord>,
    /// Record-12 fixed salary lines.
    pub wages: Vec<WageLine>,
}

/// Builds LODAS files from grouped employees.
pub struct LodasExporter<'a> {
    settings: &'a ExportSettings,
    departments: &'a dyn DepartmentLookup,
}

impl<'a> LodasExporter<'a> {
    pub fn new(settings: &'a ExportSettings, departments: &'a dyn DepartmentLookup) -> Self {
        Self {
            settings,
            departments,
        }
    }

    /// Map, restrict and gate one employee and its dependents.
    pub fn prepare(&self, employee: &EmployeeRecord) -> PreparedEmployee {
        let restrictions = &self.settings.restrictions;
        let mut record = apply_restrictions(map_employee(employee, self.departments), restrictions);
        apply_weekly_hours_gate(
            &mut record,
            employee.compensation.weekly_hours.as_ref(),
            employee.export.stored_weekly_hours.as_ref(),
        );
        let dependents = employee
            .dependents
            .iter()
            .map(|d| apply_restrictions(overlay_dependent(record.clone(), d), restrictions))
            .collect();
        PreparedEmployee {
            record,
            dependents,
            wages: wage_lines(&employee.compensation),
        }
    }

    /// Serialize one employee.
    pub fn serialize(&self, employee: &EmployeeRecord) -> Result<EmployeeBlock, ExportError> {
        let prepared = self.prepare(employee);
        serialize_employee(&prepared.record, &prepared.dependents, &prepared.wages).map_err(
            |e| match e {
                ExportError::Serialization { message, .. } => ExportError::Serialization {
                    employee: employee.id.clone(),
                    message,
                },
                other => other,
            },
        )
    }

    /// One file per company with a client number, stamped with the current time.
    pub fn build_files(&self, groups: &CompanyGroups) -> Vec<GeneratedFile> {
        self.build_files_at(groups, Local::now().naive_local())
    }

    /// One file per company with a client number.
    ///
    /// Companies without a client number are skipped. Employees that fail
    /// to serialize are dropped from their file; a company whose employees
    /// all fail produces no file.
    pub fn build_files_at(&self, groups: &CompanyGroups, now: NaiveDateTime) -> Vec<GeneratedFile> {
        let mut files = Vec::new();
        for (company, employees) in groups {
            let Some(client_number) = self.settings.client_number(company) else {
                warn!(%company, "no client number mapping, company skipped");
                continue;
            };
            let filename = format!(
                "DATEV_LODAS_{}_{}.txt",
                sanitize(company),
                now.format("%Y%m%d%H%M%S")
            );
            if let Some(file) = self.assemble(company, client_number, employees, filename, now) {
                files.push(file);
            }
        }
        files
    }

    /// File for a single employee, stamped with the current time.
    pub fn build_single(&self, employee: &EmployeeRecord) -> Result<GeneratedFile, ExportError> {
        self.build_single_at(employee, Local::now().naive_local())
    }

    /// File for a single employee.
    ///
    /// Unlike [`build_files_at`](Self::build_files_at), a missing client
    /// number or a serialization failure is an error.
    pub fn build_single_at(
        &self,
        employee: &EmployeeRecord,
        now: NaiveDateTime,
    ) -> Result<GeneratedFile, ExportError> {
        let client_number = self
            .settings
            .client_number(&employee.company)
            .ok_or_else(|| ExportError::UnmappedCompanies(vec![employee.company.clone()]))?;
        let block = self.serialize(employee)?;
        let filename = format!(
            "DATEV_LODAS_Single_{}_{}.txt",
            sanitize(&employee.id),
            now.format("%Y%m%d%H%M%S")
        );
        let mut content = self.preamble(client_number, now);
        content.push_str(&block.text);
        Ok(GeneratedFile {
            filename,
            company: employee.company.clone(),
            client_number: client_number.to_string(),
            employee_count: 1,
            dependent_count: block.dependent_count,
            content,
            exported: vec![employee.id.clone()],
            dropped: Vec::new(),
            path: None,
        })
    }

    fn assemble(
        &self,
        company: &str,
        client_number: &str,
        employees: &[EmployeeRecord],
        filename: String,
        now: NaiveDateTime,
    ) -> Option<GeneratedFile> {
        let mut content = self.preamble(client_number, now);
        let mut exported = Vec::new();
        let mut dropped = Vec::new();
        let mut dependent_count = 0;
        for employee in employees {
            match self.serialize(employee) {
                Ok(block) => {
                    content.push_str(&block.text);
                    dependent_count += block.dependent_count;
                    exported.push(employee.id.clone());
                }
                Err(e) => {
                    warn!(employee = %employee.id, %company, error = %e, "employee dropped from export");
                    dropped.push(employee.id.clone());
                }
            }
        }
        if exported.is_empty() {
            warn!(%company, "no employee could be serialized, no file generated");
            return None;
        }
        info!(
            %company,
            employees = exported.len(),
            dependents = dependent_count,
            %filename,
            "LODAS file assembled"
        );
        Some(GeneratedFile {
            filename,
            company: company.to_string(),
            client_number: client_number.to_string(),
            employee_count: exported.len(),
            dependent_count,
            content,
            exported,
            dropped,
            path: None,
        })
    }

    /// `[Allgemein]` and `[Satzbeschreibung]`, followed by the
    /// `[Stammdaten]` section heading.
    fn preamble(&self, client_number: &str, now: NaiveDateTime) -> String {
        let valid_from = self.settings.valid_from.unwrap_or_else(|| first_of_month(now.date()));
        let mut out = file_header(&self.settings.consultant_number, client_number, valid_from);
        out.push_str("[Satzbeschreibung]");
        out.push_str(CRLF);
        out.push_str(&record_descriptions());
        out.push_str(CRLF);
        out.push_str("[Stammdaten]");
        out.push_str(CRLF);
        out
    }
}

/// The `[Allgemein]` section, ending with an empty line.
pub fn file_header(consultant_number: &str, client_number: &str, valid_from: NaiveDate) -> String {
    let lines = [
        "[Allgemein]".to_string(),
        "Ziel=Lodas".to_string(),
        "Version_SST=1.0".to_string(),
        format!("BeraterNr={consultant_number}"),
        format!("MandantenNr={client_number}"),
        "Feldtrennzeichen=;".to_string(),
        "Zahlenkomma=,".to_string(),
        "Datumsformat=TT.MM.JJJJ".to_string(),
        "Stringbegrenzer=\"".to_string(),
        "Kommentarzeichen=*".to_string(),
        format!("StammdatenGueltigAb={}", valid_from.format("%d.%m.%Y")),
        "BetrieblichePNrVerwenden=Nein".to_string(),
        String::new(),
    ];
    let mut out = String::new();
    for line in lines {
        out.push_str(&line);
        out.push_str(CRLF);
    }
    out
}

/// Build one file per mapped company with the current time.
pub fn build_files(
    groups: &CompanyGroups,
    settings: &ExportSettings,
    departments: &dyn DepartmentLookup,
) -> Vec<GeneratedFile> {
    LodasExporter::new(settings, departments).build_files(groups)
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Spaces and path separators become underscores.
fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            ' ' | '/' | '\\' => '_',
            other => other,
        })
        .collect()
}
