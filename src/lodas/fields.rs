//! Declarative LODAS field table and the field mapper.

use std::collections::BTreeMap;

use tracing::warn;

use crate::core::{DepartmentLookup, DependentRecord, EmployeeRecord, is_present, normalized};
use crate::died::{self, DependentField, SourceField};

/// Where the value of a LODAS field comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Derivation {
    /// One employee field, translated by the code-table mapper.
    Source(SourceField),
    /// One dependent field; empty on the employee mapping.
    Dependent(DependentField),
    /// Cost-centre code resolved from the employee's department reference.
    Department,
}

/// One entry of the field table.
#[derive(Debug, Clone, Copy)]
pub struct FieldDef {
    /// LODAS field key (e.g. `duevo_familienname`).
    pub key: &'static str,
    /// Where the value comes from.
    pub derivation: Derivation,
}

const fn src(key: &'static str, field: SourceField) -> FieldDef {
    FieldDef {
        key,
        derivation: Derivation::Source(field),
    }
}

const fn dep(key: &'static str, field: DependentField) -> FieldDef {
    FieldDef {
        key,
        derivation: Derivation::Dependent(field),
    }
}

/// Every mapped LODAS field and its source.
pub static FIELD_TABLE: &[FieldDef] = &[
    // personal data (record 1)
    src("pnr", SourceField::EmployeeNumber),
    src("duevo_familienname", SourceField::LastName),
    src("duevo_vorname", SourceField::FirstName),
    src("geschlecht", SourceField::Gender),
    src("geburtsdatum_ttmmjj", SourceField::BirthDate),
    src("adresse_nation_kz", SourceField::Country),
    src("duevo_titel", SourceField::AcademicTitle),
    src("kz_alleinerziehend", SourceField::SingleParent),
    src("adresse_anschriftenzusatz", SourceField::AddressSupplement),
    src("arbeitserlaubnis", SourceField::WorkPermitUntil),
    src("aufenthaltserlaubnis", SourceField::ResidencePermitUntil),
    src("geburtsland", SourceField::BirthCountry),
    src("gebname", SourceField::BirthName),
    src("gebort", SourceField::BirthPlace),
    src("email", SourceField::Email),
    src("ersteintrittsdatum", SourceField::FirstEntryDate),
    src("verw_ersteintr_elena_bn", SourceField::UseFirstEntryDate),
    src("adresse_strasse_nr", SourceField::HouseNumber),
    src("adresse_ort", SourceField::City),
    src("adresse_plz", SourceField::PostalCode),
    src("adresse_strassenname", SourceField::Street),
    src("schwerbeschaedigt", SourceField::DisabilityDegree),
    src("staatsangehoerigkeit", SourceField::Nationality),
    src("telefon", SourceField::Phone),
    src("familienstand", SourceField::Married),
    src("duevo_namenszusatz", SourceField::NameSuffix),
    src("duevo_vorsatzwort", SourceField::NamePrefix),
    src("nazu_gebname", SourceField::BirthNameSuffix),
    src("vorsatzwort_gebname", SourceField::BirthNamePrefix),
    src("datum_studienbesch", SourceField::StudyCertificateDate),
    src("loesch_nach_austr_unterdr", SourceField::SuppressDeletionAfterExit),
    src("sozialversicherung_nr", SourceField::SocialSecurityNumber),
    src("sba_ausbildungsbeginn", SourceField::TrainingStart),
    src("sba_ausbildungsende", SourceField::TrainingEnd),
    src("ebz_nach_austritt_kz", SourceField::OneTimePaymentsAfterExit),
    src("datum_tod", SourceField::DateOfDeath),
    // activity (record 2)
    src("berufsbezeichnung", SourceField::Designation),
    FieldDef {
        key: "kst_abteilungs_nr",
        derivation: Derivation::Department,
    },
    src("schulabschluss", SourceField::SchoolDegree),
    src("ausbildungsabschluss", SourceField::VocationalDegree),
    src("ausbildungsbeginn", SourceField::ApprenticeshipStart),
    src("vorr_ausbildungsende", SourceField::ApprenticeshipExpectedEnd),
    src("datum_ben_ergeb_pruef", SourceField::ApprenticeshipActualEnd),
    src("ehrenamtliche_taetigkeit", SourceField::VoluntaryWork),
    src("kz_erstbeschaeftigung", SourceField::FirstEmployment),
    src("kz_besch_nebenbesch", SourceField::Sgb3Certificate),
    // employment (record 3)
    src("arbeitsverhaeltnis", SourceField::ContractType),
    src("eintrittdatum", SourceField::JoiningDate),
    src("austrittdatum", SourceField::RelievingDate),
    src("eel_nach_austritt_kz", SourceField::EelAfterExit),
    // tax (record 4)
    src("identifikationsnummer", SourceField::TaxId),
    src("st_klasse", SourceField::TaxClass),
    src("konf_an", SourceField::Confession),
    src("kfb_anzahl", SourceField::ChildAllowances),
    src("pausch_einhtl_2", SourceField::FlatRateTax),
    src("els_2_haupt_ag_kz", SourceField::EmployerRank),
    // bank (record 5)
    src("ma_iban", SourceField::Iban),
    src("ma_bic", SourceField::Bic),
    src("ma_bank_kto_inhaber_abw", SourceField::AccountHolder),
    // severe disability (record 6)
    src("sba_sb_ausweis_bis", SourceField::DisabilityCardValidUntil),
    src("sba_unter_18_std_aa_kz", SourceField::Under18HoursApproved),
    src("sba_kz_dienststelle", SourceField::IssuingAuthority),
    src("sba_az_geschaeftsstelle", SourceField::DisabilityCardNumber),
    src("sba_ort_dienstelle", SourceField::AuthorityLocation),
    src("sba_sb_ausweis_ab", SourceField::DisabilityCardValidFrom),
    // working time (record 7)
    src("az_wtl_indiv", SourceField::WeeklyHours),
    src("url_tage_jhrl", SourceField::VacationDaysCurrentYear),
    src("urlaubsanspr_pro_jahr", SourceField::BaseVacationEntitlement),
    // wages (record 8)
    src("std_lohn_1", SourceField::HourlyWage),
    src("std_lohn_2", SourceField::HourlyWage2),
    src("lfd_brutto_vereinbart", SourceField::AgreedGross),
    // travel subsidy (record 9)
    src("jobticket", SourceField::JobTicket),
    // special features (record 10)
    src("entlohnungsform", SourceField::RemunerationForm),
    // children (record 11)
    dep("kind_nr", DependentField::Sequence),
    dep("kind_vorname", DependentField::FirstName),
    dep("kind_nachname", DependentField::LastName),
    dep("kind_geburtsdatum", DependentField::BirthDate),
];

/// Look up the definition of a LODAS field key.
pub fn field_def(key: &str) -> Option<&'static FieldDef> {
    FIELD_TABLE.iter().find(|def| def.key == key)
}

/// Mapped LODAS values of one employee, or of one employee and dependent.
///
/// Holds one entry per [`FIELD_TABLE`] key. Missing keys read as `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappedRecord {
    values: BTreeMap<&'static str, String>,
}

impl MappedRecord {
    /// Value of `key`, or `""` if the key is unknown.
    pub fn get(&self, key: &str) -> &str {
        self.values.get(key).map_or("", String::as_str)
    }

    /// Whether `key` belongs to this record.
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Overwrite an existing key. Unknown keys are ignored.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        if let Some(slot) = self.values.get_mut(key) {
            *slot = value.into();
        }
    }

    /// Blank an existing key. Returns whether a non-empty value was removed.
    pub fn blank(&mut self, key: &str) -> bool {
        match self.values.get_mut(key) {
            Some(slot) if !slot.is_empty() => {
                slot.clear();
                true
            }
            _ => false,
        }
    }

    /// Personnel number.
    pub fn pnr(&self) -> &str {
        self.get("pnr")
    }

    /// Key/value pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.values.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the record holds no keys at all (not whether values are blank).
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Map one employee onto every LODAS field.
///
/// Total over any employee: a missing source yields `""`. The department
/// code is resolved through `departments`; a failed lookup is logged and
/// leaves the field empty.
pub fn map_employee(employee: &EmployeeRecord, departments: &dyn DepartmentLookup) -> MappedRecord {
    let values = FIELD_TABLE
        .iter()
        .map(|def| {
            let value = match def.derivation {
                Derivation::Source(field) => died::translate(field, field.read(employee)),
                Derivation::Dependent(_) => String::new(),
                Derivation::Department => department_code(employee, departments),
            };
            (def.key, value)
        })
        .collect();
    MappedRecord { values }
}

/// Map an employee and overlay the fields of one dependent.
pub fn map_dependent(
    employee: &EmployeeRecord,
    dependent: &DependentRecord,
    departments: &dyn DepartmentLookup,
) -> MappedRecord {
    overlay_dependent(map_employee(employee, departments), dependent)
}

/// Overlay the dependent fields onto an existing employee mapping.
pub fn overlay_dependent(mut record: MappedRecord, dependent: &DependentRecord) -> MappedRecord {
    for def in FIELD_TABLE {
        if let Derivation::Dependent(field) = def.derivation {
            record
                .values
                .insert(def.key, died::translate_dependent(field, field.read(dependent)));
        }
    }
    record
}

fn department_code(employee: &EmployeeRecord, departments: &dyn DepartmentLookup) -> String {
    let reference = employee.employment.department.as_ref();
    if !is_present(reference) {
        return String::new();
    }
    let reference = normalized(reference);
    match departments.department_code(&reference) {
        Ok(code) => code,
        Err(e) => {
            warn!(employee = %employee.id, department = %reference, error = %e, "department lookup failed");
            String::new()
        }
    }
}
