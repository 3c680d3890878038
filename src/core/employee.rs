use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single source value as delivered by the HR data store.
///
/// Deserializes from a JSON/YAML scalar: ISO dates become [`Scalar::Date`],
/// other strings [`Scalar::Text`], numbers [`Scalar::Number`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    /// Calendar date.
    Date(NaiveDate),
    /// Free text.
    Text(String),
    /// Numeric value (hours, amounts, counts, checkbox flags).
    Number(Decimal),
}

impl Scalar {
    /// Whether the value renders to an empty (or whitespace-only) string.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Text(s) => s.trim().is_empty(),
            Self::Date(_) | Self::Number(_) => false,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<Decimal> for Scalar {
    fn from(n: Decimal) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for Scalar {
    fn from(n: i32) -> Self {
        Self::Number(Decimal::from(n))
    }
}

impl From<i64> for Scalar {
    fn from(n: i64) -> Self {
        Self::Number(Decimal::from(n))
    }
}

impl From<NaiveDate> for Scalar {
    fn from(d: NaiveDate) -> Self {
        Self::Date(d)
    }
}

/// Render an optional value the way the export compares and prints values:
/// missing, blank and the literal "None" all become the empty string.
pub fn normalized(value: Option<&Scalar>) -> String {
    match value {
        None => String::new(),
        Some(Scalar::Number(n)) => n.normalize().to_string(),
        Some(v) => {
            let s = v.to_string();
            let trimmed = s.trim();
            if trimmed.eq_ignore_ascii_case("none") {
                String::new()
            } else {
                trimmed.to_string()
            }
        }
    }
}

/// Whether an optional value carries anything worth exporting.
///
/// Agrees with [`normalized`]: the literal "None" is absent.
pub fn is_present(value: Option<&Scalar>) -> bool {
    !normalized(value).is_empty()
}

/// One employee as read from the HR system, merged with the personnel
/// questionnaire and its dependents.
///
/// Every source field is optional; a missing field maps to an empty
/// LODAS value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmployeeRecord {
    /// HR system identifier (e.g. "HR-EMP-00042").
    pub id: String,
    /// Owning company; selects the client number.
    pub company: String,
    /// Personnel number used as the LODAS key (`pnr`).
    pub employee_number: Option<Scalar>,
    /// Name, birth and family data.
    pub personal: PersonalData,
    /// Postal address and contact.
    pub address: Address,
    /// Job, contract and training data.
    pub employment: Employment,
    /// Wage tax data.
    pub tax: TaxData,
    /// Salary payment account.
    pub bank: BankDetails,
    /// Severe disability card data.
    pub disability: Disability,
    /// Working time, wages and fixed salary components.
    pub compensation: Compensation,
    /// Children, ordered by sequence number.
    pub dependents: Vec<DependentRecord>,
    /// Export bookkeeping owned by the data store.
    pub export: ExportMarker,
}

/// Name, birth and family data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalData {
    /// Given name.
    pub first_name: Option<Scalar>,
    /// Family name.
    pub last_name: Option<Scalar>,
    /// Academic title (e.g. "Dr.").
    pub academic_title: Option<Scalar>,
    /// Name prefix (Vorsatzwort, e.g. "von").
    pub name_prefix: Option<Scalar>,
    /// Name suffix (Namenszusatz).
    pub name_suffix: Option<Scalar>,
    /// Name at birth.
    pub birth_name: Option<Scalar>,
    /// Prefix of the birth name.
    pub birth_name_prefix: Option<Scalar>,
    /// Suffix of the birth name.
    pub birth_name_suffix: Option<Scalar>,
    /// Date of birth.
    pub birth_date: Option<Scalar>,
    /// Place of birth.
    pub birth_place: Option<Scalar>,
    /// Country of birth, translated to the numeric country key.
    pub birth_country: Option<Scalar>,
    /// Gender, coded via the gender table.
    pub gender: Option<Scalar>,
    /// Nationality, translated to the alphabetic nationality key.
    pub nationality: Option<Scalar>,
    /// Marital status flag ("Ja"/"Nein").
    pub married: Option<Scalar>,
    /// Single-parent flag.
    pub single_parent: Option<Scalar>,
    /// Pension insurance number.
    pub social_security_number: Option<Scalar>,
    /// Date of death.
    pub date_of_death: Option<Scalar>,
    /// Work permit valid until.
    pub work_permit_until: Option<Scalar>,
    /// Residence permit valid until.
    pub residence_permit_until: Option<Scalar>,
    /// Date of the enrolment certificate.
    pub study_certificate_date: Option<Scalar>,
}

/// Postal address and contact.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    /// Street name.
    pub street: Option<Scalar>,
    /// House number.
    pub house_number: Option<Scalar>,
    /// Postal code.
    pub postal_code: Option<Scalar>,
    /// City.
    pub city: Option<Scalar>,
    /// Country, translated to the alphabetic nationality key.
    pub country: Option<Scalar>,
    /// Address supplement.
    pub supplement: Option<Scalar>,
    /// E-mail address.
    pub email: Option<Scalar>,
    /// Phone number.
    pub phone: Option<Scalar>,
}

/// Job, contract and training data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Employment {
    /// Job title.
    pub designation: Option<Scalar>,
    /// Reference to a department; resolved to a cost-centre code on export.
    pub department: Option<Scalar>,
    /// Date of joining.
    pub joining_date: Option<Scalar>,
    /// Date of leaving.
    pub relieving_date: Option<Scalar>,
    /// First entry into the company.
    pub first_entry_date: Option<Scalar>,
    /// Use the first entry date for ELENA notifications.
    pub use_first_entry_date: Option<Scalar>,
    /// Fixed-term or permanent, coded.
    pub contract_type: Option<Scalar>,
    /// First employment flag.
    pub first_employment: Option<Scalar>,
    /// Highest school degree, coded.
    pub school_degree: Option<Scalar>,
    /// Highest vocational degree, coded.
    pub vocational_degree: Option<Scalar>,
    /// Start of apprenticeship.
    pub apprenticeship_start: Option<Scalar>,
    /// Expected end of apprenticeship.
    pub apprenticeship_expected_end: Option<Scalar>,
    /// Actual end of apprenticeship.
    pub apprenticeship_actual_end: Option<Scalar>,
    /// Start of vocational training.
    pub training_start: Option<Scalar>,
    /// End of vocational training.
    pub training_end: Option<Scalar>,
    /// Honorary activity flag.
    pub voluntary_work: Option<Scalar>,
    /// Date of the SGB III certificate check.
    pub sgb3_certificate: Option<Scalar>,
    /// Send earnings certificates after exit.
    pub eel_after_exit: Option<Scalar>,
    /// One-time payments after exit flag.
    pub one_time_payments_after_exit: Option<Scalar>,
    /// Keep the record after exit.
    pub suppress_deletion_after_exit: Option<Scalar>,
    /// Form of remuneration, coded.
    pub remuneration_form: Option<Scalar>,
}

/// Wage tax data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxData {
    /// Tax identification number.
    pub tax_id: Option<Scalar>,
    /// Wage tax class, coded.
    pub tax_class: Option<Scalar>,
    /// Church tax confession, coded.
    pub confession: Option<Scalar>,
    /// Number of child allowances.
    pub child_allowances: Option<Scalar>,
    /// Flat-rate taxation, coded.
    pub flat_rate_tax: Option<Scalar>,
    /// Primary or secondary employer, coded.
    pub employer_rank: Option<Scalar>,
}

/// Salary payment account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BankDetails {
    /// IBAN.
    pub iban: Option<Scalar>,
    /// BIC.
    pub bic: Option<Scalar>,
    /// Account holder if different from the employee.
    pub account_holder: Option<Scalar>,
}

/// Severe disability card data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Disability {
    /// Severe disability flag or degree, coded.
    pub degree: Option<Scalar>,
    /// Card valid from.
    pub card_valid_from: Option<Scalar>,
    /// Card valid until.
    pub card_valid_until: Option<Scalar>,
    /// Approval for under 18 weekly hours.
    pub under_18_hours_approved: Option<Scalar>,
    /// Authority that issued the card.
    pub issuing_authority: Option<Scalar>,
    /// Card file number.
    pub card_number: Option<Scalar>,
    /// Location of the issuing authority.
    pub authority_location: Option<Scalar>,
}

/// Working time, wages and fixed salary components.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Compensation {
    /// Contractual weekly hours.
    pub weekly_hours: Option<Scalar>,
    /// Vacation days for the current year.
    pub vacation_days_current_year: Option<Scalar>,
    /// Base annual vacation entitlement.
    pub base_vacation_entitlement: Option<Scalar>,
    /// Hourly wage.
    pub hourly_wage: Option<Scalar>,
    /// Second hourly wage.
    pub hourly_wage_2: Option<Scalar>,
    /// Agreed gross salary.
    pub agreed_gross: Option<Scalar>,
    /// Job ticket amount.
    pub job_ticket: Option<Scalar>,
    /// Salary of the base contract (Grundvertrag).
    pub base_salary: Option<Scalar>,
    /// Wage type (Lohnart) of the base salary.
    pub base_wage_type: Option<Scalar>,
    /// Project salary amounts, slots 1-4.
    pub project_salaries: [Option<Scalar>; 4],
    /// Wage types of the project salaries.
    pub project_wage_types: [Option<Scalar>; 4],
    /// Supplement (Zulage) amounts, slots 1-2.
    pub supplements: [Option<Scalar>; 2],
    /// Wage types of the supplements.
    pub supplement_wage_types: [Option<Scalar>; 2],
    /// "Paid in addition to the base salary" flags.
    pub additional_compensation: [Option<Scalar>; 4],
}

/// Export bookkeeping kept on the employee by the data store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportMarker {
    /// Changed since the last export; include in the next run.
    pub pending: bool,
    /// Weekly hours as of the last successful export.
    pub stored_weekly_hours: Option<Scalar>,
}

/// A child of the employee (record type 11).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DependentRecord {
    /// Child number (kind_nr); orders record-11 lines.
    pub sequence: Option<Scalar>,
    /// Given name.
    pub first_name: Option<Scalar>,
    /// Family name.
    pub last_name: Option<Scalar>,
    /// Date of birth.
    pub birth_date: Option<Scalar>,
}

impl DependentRecord {
    /// At least one of the four fields carries data.
    pub fn is_informative(&self) -> bool {
        [
            &self.sequence,
            &self.first_name,
            &self.last_name,
            &self.birth_date,
        ]
        .iter()
        .any(|v| is_present(v.as_ref()))
    }
}

/// Employees grouped by company name.
pub type CompanyGroups = BTreeMap<String, Vec<EmployeeRecord>>;

/// Group employees by their company, keeping the input order within a company.
pub fn group_by_company(employees: impl IntoIterator<Item = EmployeeRecord>) -> CompanyGroups {
    let mut groups = CompanyGroups::new();
    for employee in employees {
        groups
            .entry(employee.company.clone())
            .or_default()
            .push(employee);
    }
    groups
}
