use thiserror::Error;

/// Errors that can occur while preparing or running a LODAS export.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ExportError {
    /// Consultant number (Beraternummer) is not exactly six digits.
    #[error("consultant number must be exactly 6 digits, got '{0}'")]
    InvalidConsultantNumber(String),

    /// Client number (Mandantennummer) of a company is not exactly five digits.
    #[error("client number must be exactly 5 digits for company '{company}', got '{value}'")]
    InvalidClientNumber {
        /// Company the mapping belongs to.
        company: String,
        /// The rejected client number.
        value: String,
    },

    /// No recipient configured for the export mail.
    #[error("no export email address configured")]
    MissingRecipient,

    /// Companies with pending employees but no client number mapping.
    #[error(
        "the following companies have employees marked for export but no client number mapping: {}",
        .0.join(", ")
    )]
    UnmappedCompanies(Vec<String>),

    /// Settings could not be read or parsed.
    #[error("configuration error: {0}")]
    Config(String),

    /// Employee data is incomplete and the completeness policy aborts.
    #[error("some employees have incomplete data:\n{}", summarize(.0))]
    IncompleteData(Vec<ValidationError>),

    /// A single employee's records could not be rendered.
    #[error("cannot serialize employee '{employee}': {message}")]
    Serialization {
        /// Employee identifier.
        employee: String,
        /// What went wrong.
        message: String,
    },

    /// Pending employees existed, but not a single file was produced.
    #[error("no files were generated")]
    NoFilesGenerated,

    /// Data store collaborator failed.
    #[error("data store error: {0}")]
    Store(String),

    /// Mail collaborator failed.
    #[error("mail delivery error: {0}")]
    Mail(String),

    /// Spooling files to disk failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Render at most five issues, then an ellipsis.
fn summarize(issues: &[ValidationError]) -> String {
    let mut lines: Vec<String> = issues.iter().take(5).map(|e| e.to_string()).collect();
    if issues.len() > 5 {
        lines.push("...".into());
    }
    lines.join("\n")
}

/// A single completeness issue with employee and field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Employee identifier the issue belongs to.
    pub employee: String,
    /// Field path (e.g. "last_name" or "dependents[1].birth_date").
    pub field: String,
    /// Human-readable error description.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}: {}", self.employee, self.field, self.message)
    }
}

impl ValidationError {
    /// Create a completeness issue.
    pub fn new(
        employee: impl Into<String>,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            employee: employee.into(),
            field: field.into(),
            message: message.into(),
        }
    }
}
