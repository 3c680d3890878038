use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::error::ExportError;
use crate::lodas::RestrictionSet;

/// What to do when employees are missing required personal data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletenessPolicy {
    /// Log every issue and export anyway.
    #[default]
    Warn,
    /// Fail the run before any file is generated.
    Abort,
}

/// Settings of the LODAS export.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// DATEV consultant number (Beraternummer), exactly 6 digits.
    pub consultant_number: String,
    /// Company name to DATEV client number (Mandantennummer, 5 digits).
    pub client_numbers: BTreeMap<String, String>,
    /// Fields that must never be exported.
    pub restrictions: RestrictionSet,
    /// Recipient of the export mail.
    pub export_email: String,
    /// Handling of incomplete employee data.
    pub completeness: CompletenessPolicy,
    /// Override for `StammdatenGueltigAb`; defaults to the first day of the
    /// month the file is generated in.
    pub valid_from: Option<NaiveDate>,
}

impl ExportSettings {
    /// Client number configured for `company`.
    pub fn client_number(&self, company: &str) -> Option<&str> {
        self.client_numbers.get(company).map(String::as_str)
    }

    /// Check consultant number, client numbers and recipient.
    pub fn validate(&self) -> Result<(), ExportError> {
        if !is_digits(&self.consultant_number, 6) {
            return Err(ExportError::InvalidConsultantNumber(
                self.consultant_number.clone(),
            ));
        }
        for (company, client) in &self.client_numbers {
            if !is_digits(client, 5) {
                return Err(ExportError::InvalidClientNumber {
                    company: company.clone(),
                    value: client.clone(),
                });
            }
        }
        if self.export_email.trim().is_empty() {
            return Err(ExportError::MissingRecipient);
        }
        Ok(())
    }

    /// Parse settings from YAML.
    #[cfg(feature = "yaml")]
    pub fn from_yaml_str(content: &str) -> Result<Self, ExportError> {
        serde_yaml::from_str(content).map_err(|e| ExportError::Config(e.to_string()))
    }

    /// Read settings from a YAML file.
    #[cfg(feature = "yaml")]
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self, ExportError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| ExportError::Config(format!("{}: {e}", path.display())))?;
        Self::from_yaml_str(&content)
    }
}

fn is_digits(value: &str, len: usize) -> bool {
    value.len() == len && value.bytes().all(|b| b.is_ascii_digit())
}

/// Builder for [`ExportSettings`].
///
/// # Example
///
/// ```
/// use lodas::core::ExportSettingsBuilder;
///
/// let settings = ExportSettingsBuilder::new("123456")
///     .client("Acme GmbH", "00042")
///     .restrict("st_klasse")
///     .export_email("lohn@example.de")
///     .build();
/// assert!(settings.validate().is_ok());
/// ```
pub struct ExportSettingsBuilder {
    settings: ExportSettings,
}

impl ExportSettingsBuilder {
    /// Create a new builder with the consultant number.
    pub fn new(consultant_number: impl Into<String>) -> Self {
        Self {
            settings: ExportSettings {
                consultant_number: consultant_number.into(),
                ..Default::default()
            },
        }
    }

    /// Map a company to its client number.
    pub fn client(mut self, company: impl Into<String>, client_number: impl Into<String>) -> Self {
        self.settings
            .client_numbers
            .insert(company.into(), client_number.into());
        self
    }

    /// Suppress a LODAS field in every export.
    pub fn restrict(mut self, field: impl Into<String>) -> Self {
        self.settings.restrictions.set(field, true);
        self
    }

    /// Set the replacement set of restrictions.
    pub fn restrictions(mut self, restrictions: RestrictionSet) -> Self {
        self.settings.restrictions = restrictions;
        self
    }

    /// Set the recipient of the export mail.
    pub fn export_email(mut self, email: impl Into<String>) -> Self {
        self.settings.export_email = email.into();
        self
    }

    /// Set the completeness policy.
    pub fn completeness(mut self, policy: CompletenessPolicy) -> Self {
        self.settings.completeness = policy;
        self
    }

    /// Fix the `StammdatenGueltigAb` date.
    pub fn valid_from(mut self, date: NaiveDate) -> Self {
        self.settings.valid_from = Some(date);
        self
    }

    /// Build the settings.
    pub fn build(self) -> ExportSettings {
        self.settings
    }
}
