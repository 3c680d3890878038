use tracing::warn;

use super::employee::{CompanyGroups, EmployeeRecord, Scalar, is_present};
use super::error::{ExportError, ValidationError};
use super::settings::{CompletenessPolicy, ExportSettings};

/// Check that every company with pending employees has a client number.
pub fn validate_company_mapping(
    settings: &ExportSettings,
    groups: &CompanyGroups,
) -> Result<(), ExportError> {
    let unmapped: Vec<String> = groups
        .keys()
        .filter(|company| settings.client_number(company).is_none())
        .cloned()
        .collect();
    if unmapped.is_empty() {
        Ok(())
    } else {
        Err(ExportError::UnmappedCompanies(unmapped))
    }
}

/// Collect missing required personal data across all employees.
/// Returns all issues found (not just the first).
pub fn check_completeness(groups: &CompanyGroups) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    for employee in groups.values().flatten() {
        check_employee(employee, &mut errors);
    }
    errors
}

/// Apply the completeness policy: warn and continue, or abort the run.
pub fn enforce_completeness(
    groups: &CompanyGroups,
    policy: CompletenessPolicy,
) -> Result<Vec<ValidationError>, ExportError> {
    let issues = check_completeness(groups);
    if issues.is_empty() {
        return Ok(issues);
    }
    match policy {
        CompletenessPolicy::Abort => Err(ExportError::IncompleteData(issues)),
        CompletenessPolicy::Warn => {
            for issue in &issues {
                warn!(%issue, "incomplete employee data");
            }
            Ok(issues)
        }
    }
}

fn check_employee(employee: &EmployeeRecord, errors: &mut Vec<ValidationError>) {
    let required: [(&str, Option<&Scalar>); 6] = [
        ("employee_number", employee.employee_number.as_ref()),
        ("last_name", employee.personal.last_name.as_ref()),
        ("first_name", employee.personal.first_name.as_ref()),
        ("birth_date", employee.personal.birth_date.as_ref()),
        ("gender", employee.personal.gender.as_ref()),
        ("joining_date", employee.employment.joining_date.as_ref()),
    ];
    for (field, value) in required {
        if !is_present(value) {
            errors.push(ValidationError::new(&employee.id, field, "missing"));
        }
    }

    for (i, dependent) in employee.dependents.iter().enumerate() {
        let fields: [(&str, Option<&Scalar>); 4] = [
            ("sequence", dependent.sequence.as_ref()),
            ("first_name", dependent.first_name.as_ref()),
            ("last_name", dependent.last_name.as_ref()),
            ("birth_date", dependent.birth_date.as_ref()),
        ];
        for (field, value) in fields {
            if !is_present(value) {
                errors.push(ValidationError::new(
                    &employee.id,
                    format!("dependents[{}].{field}", i + 1),
                    "missing",
                ));
            }
        }
    }
}
