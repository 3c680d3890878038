//! Source fields of an employee and the transform each one needs.

use crate::core::{DependentRecord, EmployeeRecord, Scalar};

use super::countries::{BIRTH_COUNTRY, NATIONALITY};
use super::tables::{
    CONFESSION, CONTRACT_TYPE, CodeTable, EMPLOYER_RANK, FLAT_RATE_TAX, GENDER, REMUNERATION_FORM,
    SCHOOL_DEGREE, SEVERE_DISABILITY, TAX_CLASS, VOCATIONAL_DEGREE, YES_NO,
};

/// How a source value is turned into its LODAS representation.
#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    /// ISO date, reformatted to `DD.MM.YYYY`.
    Date,
    /// Numeric value, passed through unchanged.
    Numeric,
    /// Free text, passed through unchanged.
    Text,
    /// Translated through a DIED code table.
    Coded(&'static CodeTable),
}

macro_rules! source_fields {
    ($($variant:ident => $name:literal, $kind:expr, |$e:ident| $read:expr;)*) => {
        /// A field of [`EmployeeRecord`] that feeds the LODAS mapping.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum SourceField {
            $($variant,)*
        }

        impl SourceField {
            /// Every source field, in declaration order.
            pub const ALL: &'static [SourceField] = &[$(SourceField::$variant,)*];

            /// Domain field name, as used in logs and settings.
            pub fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)*
                }
            }

            /// Transform applied to the value.
            pub fn kind(self) -> FieldKind {
                match self {
                    $(Self::$variant => $kind,)*
                }
            }

            /// Read the raw value from an employee.
            pub fn read(self, employee: &EmployeeRecord) -> Option<&Scalar> {
                match self {
                    $(Self::$variant => {
                        let $e = employee;
                        $read.as_ref()
                    })*
                }
            }
        }
    };
}

source_fields! {
    EmployeeNumber => "employee_number", FieldKind::Text, |e| e.employee_number;
    LastName => "last_name", FieldKind::Text, |e| e.personal.last_name;
    FirstName => "first_name", FieldKind::Text, |e| e.personal.first_name;
    AcademicTitle => "academic_title", FieldKind::Text, |e| e.personal.academic_title;
    NamePrefix => "name_prefix", FieldKind::Text, |e| e.personal.name_prefix;
    NameSuffix => "name_suffix", FieldKind::Text, |e| e.personal.name_suffix;
    BirthName => "birth_name", FieldKind::Text, |e| e.personal.birth_name;
    BirthNamePrefix => "birth_name_prefix", FieldKind::Text, |e| e.personal.birth_name_prefix;
    BirthNameSuffix => "birth_name_suffix", FieldKind::Text, |e| e.personal.birth_name_suffix;
    BirthDate => "birth_date", FieldKind::Date, |e| e.personal.birth_date;
    BirthPlace => "birth_place", FieldKind::Text, |e| e.personal.birth_place;
    BirthCountry => "birth_country", FieldKind::Coded(&BIRTH_COUNTRY), |e| e.personal.birth_country;
    Gender => "gender", FieldKind::Coded(&GENDER), |e| e.personal.gender;
    Nationality => "nationality", FieldKind::Coded(&NATIONALITY), |e| e.personal.nationality;
    Married => "married", FieldKind::Coded(&YES_NO), |e| e.personal.married;
    SingleParent => "single_parent", FieldKind::Coded(&YES_NO), |e| e.personal.single_parent;
    SocialSecurityNumber => "social_security_number", FieldKind::Text, |e| e.personal.social_security_number;
    DateOfDeath => "date_of_death", FieldKind::Date, |e| e.personal.date_of_death;
    WorkPermitUntil => "work_permit_until", FieldKind::Date, |e| e.personal.work_permit_until;
    ResidencePermitUntil => "residence_permit_until", FieldKind::Date, |e| e.personal.residence_permit_until;
    StudyCertificateDate => "study_certificate_date", FieldKind::Date, |e| e.personal.study_certificate_date;

    Street => "street", FieldKind::Text, |e| e.address.street;
    HouseNumber => "house_number", FieldKind::Text, |e| e.address.house_number;
    PostalCode => "postal_code", FieldKind::Text, |e| e.address.postal_code;
    City => "city", FieldKind::Text, |e| e.address.city;
    Country => "country", FieldKind::Coded(&NATIONALITY), |e| e.address.country;
    AddressSupplement => "address_supplement", FieldKind::Text, |e| e.address.supplement;
    Email => "email", FieldKind::Text, |e| e.address.email;
    Phone => "phone", FieldKind::Text, |e| e.address.phone;

    Designation => "designation", FieldKind::Text, |e| e.employment.designation;
    Department => "department", FieldKind::Text, |e| e.employment.department;
    JoiningDate => "joining_date", FieldKind::Date, |e| e.employment.joining_date;
    RelievingDate => "relieving_date", FieldKind::Date, |e| e.employment.relieving_date;
    FirstEntryDate => "first_entry_date", FieldKind::Date, |e| e.employment.first_entry_date;
    UseFirstEntryDate => "use_first_entry_date", FieldKind::Coded(&YES_NO), |e| e.employment.use_first_entry_date;
    ContractType => "contract_type", FieldKind::Coded(&CONTRACT_TYPE), |e| e.employment.contract_type;
    FirstEmployment => "first_employment", FieldKind::Coded(&YES_NO), |e| e.employment.first_employment;
    SchoolDegree => "school_degree", FieldKind::Coded(&SCHOOL_DEGREE), |e| e.employment.school_degree;
    VocationalDegree => "vocational_degree", FieldKind::Coded(&VOCATIONAL_DEGREE), |e| e.employment.vocational_degree;
    ApprenticeshipStart => "apprenticeship_start", FieldKind::Date, |e| e.employment.apprenticeship_start;
    ApprenticeshipExpectedEnd => "apprenticeship_expected_end", FieldKind::Date, |e| e.employment.apprenticeship_expected_end;
    ApprenticeshipActualEnd => "apprenticeship_actual_end", FieldKind::Date, |e| e.employment.apprenticeship_actual_end;
    TrainingStart => "training_start", FieldKind::Date, |e| e.employment.training_start;
    TrainingEnd => "training_end", FieldKind::Date, |e| e.employment.training_end;
    VoluntaryWork => "voluntary_work", FieldKind::Coded(&YES_NO), |e| e.employment.voluntary_work;
    Sgb3Certificate => "sgb3_certificate", FieldKind::Coded(&YES_NO), |e| e.employment.sgb3_certificate;
    EelAfterExit => "eel_after_exit", FieldKind::Coded(&YES_NO), |e| e.employment.eel_after_exit;
    OneTimePaymentsAfterExit => "one_time_payments_after_exit", FieldKind::Coded(&YES_NO), |e| e.employment.one_time_payments_after_exit;
    SuppressDeletionAfterExit => "suppress_deletion_after_exit", FieldKind::Coded(&YES_NO), |e| e.employment.suppress_deletion_after_exit;
    RemunerationForm => "remuneration_form", FieldKind::Coded(&REMUNERATION_FORM), |e| e.employment.remuneration_form;

    TaxId => "tax_id", FieldKind::Text, |e| e.tax.tax_id;
    TaxClass => "tax_class", FieldKind::Coded(&TAX_CLASS), |e| e.tax.tax_class;
    Confession => "confession", FieldKind::Coded(&CONFESSION), |e| e.tax.confession;
    ChildAllowances => "child_allowances", FieldKind::Numeric, |e| e.tax.child_allowances;
    FlatRateTax => "flat_rate_tax", FieldKind::Coded(&FLAT_RATE_TAX), |e| e.tax.flat_rate_tax;
    EmployerRank => "employer_rank", FieldKind::Coded(&EMPLOYER_RANK), |e| e.tax.employer_rank;

    Iban => "iban", FieldKind::Text, |e| e.bank.iban;
    Bic => "bic", FieldKind::Text, |e| e.bank.bic;
    AccountHolder => "account_holder", FieldKind::Text, |e| e.bank.account_holder;

    DisabilityDegree => "disability_degree", FieldKind::Coded(&SEVERE_DISABILITY), |e| e.disability.degree;
    DisabilityCardValidFrom => "disability_card_valid_from", FieldKind::Date, |e| e.disability.card_valid_from;
    DisabilityCardValidUntil => "disability_card_valid_until", FieldKind::Date, |e| e.disability.card_valid_until;
    Under18HoursApproved => "under_18_hours_approved", FieldKind::Coded(&YES_NO), |e| e.disability.under_18_hours_approved;
    IssuingAuthority => "issuing_authority", FieldKind::Text, |e| e.disability.issuing_authority;
    DisabilityCardNumber => "disability_card_number", FieldKind::Text, |e| e.disability.card_number;
    AuthorityLocation => "authority_location", FieldKind::Text, |e| e.disability.authority_location;

    WeeklyHours => "weekly_hours", FieldKind::Numeric, |e| e.compensation.weekly_hours;
    VacationDaysCurrentYear => "vacation_days_current_year", FieldKind::Numeric, |e| e.compensation.vacation_days_current_year;
    BaseVacationEntitlement => "base_vacation_entitlement", FieldKind::Numeric, |e| e.compensation.base_vacation_entitlement;
    HourlyWage => "hourly_wage", FieldKind::Numeric, |e| e.compensation.hourly_wage;
    HourlyWage2 => "hourly_wage_2", FieldKind::Numeric, |e| e.compensation.hourly_wage_2;
    AgreedGross => "agreed_gross", FieldKind::Numeric, |e| e.compensation.agreed_gross;
    JobTicket => "job_ticket", FieldKind::Numeric, |e| e.compensation.job_ticket;
}

impl SourceField {
    /// Find a source field by its domain name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.name() == name)
    }
}

/// A field of [`DependentRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DependentField {
    /// Child number.
    Sequence,
    /// Given name.
    FirstName,
    /// Family name.
    LastName,
    /// Date of birth.
    BirthDate,
}

impl DependentField {
    /// Every dependent field, in record order.
    pub const ALL: [DependentField; 4] = [
        Self::Sequence,
        Self::FirstName,
        Self::LastName,
        Self::BirthDate,
    ];

    /// Domain name, prefixed with `dependent_`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Sequence => "dependent_sequence",
            Self::FirstName => "dependent_first_name",
            Self::LastName => "dependent_last_name",
            Self::BirthDate => "dependent_birth_date",
        }
    }

    /// How the value is translated.
    pub fn kind(self) -> FieldKind {
        match self {
            Self::Sequence => FieldKind::Numeric,
            Self::FirstName | Self::LastName => FieldKind::Text,
            Self::BirthDate => FieldKind::Date,
        }
    }

    /// Read the raw value from a dependent.
    pub fn read(self, dependent: &DependentRecord) -> Option<&Scalar> {
        match self {
            Self::Sequence => dependent.sequence.as_ref(),
            Self::FirstName => dependent.first_name.as_ref(),
            Self::LastName => dependent.last_name.as_ref(),
            Self::BirthDate => dependent.birth_date.as_ref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn names_are_unique() {
        let names: HashSet<&str> = SourceField::ALL.iter().map(|f| f.name()).collect();
        assert_eq!(names.len(), SourceField::ALL.len());
    }

    #[test]
    fn from_name_round_trips() {
        for field in SourceField::ALL {
            assert_eq!(SourceField::from_name(field.name()), Some(*field));
        }
        assert_eq!(SourceField::from_name("unknown"), None);
    }

    #[test]
    fn read_picks_the_right_value() {
        let mut e = EmployeeRecord::default();
        e.address.city = Some("Berlin".into());
        e.compensation.weekly_hours = Some(40.into());
        assert_eq!(SourceField::City.read(&e), Some(&Scalar::from("Berlin")));
        assert_eq!(SourceField::WeeklyHours.read(&e), Some(&Scalar::from(40)));
        assert_eq!(SourceField::Street.read(&e), None);
    }

    #[test]
    fn birth_country_and_nationality_use_different_tables() {
        let (FieldKind::Coded(birth), FieldKind::Coded(nat)) =
            (SourceField::BirthCountry.kind(), SourceField::Nationality.kind())
        else {
            panic!("both fields are coded");
        };
        assert_ne!(birth.name(), nat.name());
    }
}
