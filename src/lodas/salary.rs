//! Basic salary rule and fixed salary components (Festbezuege).

use rust_decimal::Decimal;

use crate::core::{Compensation, Scalar, is_present, normalized};

/// Wage type used when a base or project slot carries no code.
pub const DEFAULT_WAGE_TYPE: &str = "999";
/// Wage type used when a supplement slot carries no code.
pub const DEFAULT_SUPPLEMENT_WAGE_TYPE: &str = "998";

/// One record-12 line: a fixed salary component of an employee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WageLine {
    /// Slot key: 1 base salary, 2-5 projects, 6-7 supplements.
    pub festbez_id: u8,
    /// Wage type (Lohnart).
    pub wage_type: String,
    /// Raw amount, `"0"` for an empty slot.
    pub amount: String,
}

/// Decide the base salary amount.
///
/// A positive project salary makes the base salary exclusive unless one of
/// the additional-compensation flags is set; then nothing is returned.
/// Otherwise the base contract salary wins, and without it the base wage
/// type is used when no project salary exists and the code is not `999`.
pub fn basic_salary(compensation: &Compensation) -> Option<String> {
    let has_project_salary = compensation
        .project_salaries
        .iter()
        .any(|v| is_positive(v.as_ref()));
    let has_additional = compensation
        .additional_compensation
        .iter()
        .any(|v| is_flag_set(v.as_ref()));

    if has_project_salary && !has_additional {
        return None;
    }
    if is_present(compensation.base_salary.as_ref()) {
        return Some(normalized(compensation.base_salary.as_ref()));
    }
    let wage_type = normalized(compensation.base_wage_type.as_ref());
    if !has_project_salary && !wage_type.is_empty() && wage_type != DEFAULT_WAGE_TYPE {
        return Some(wage_type);
    }
    None
}

/// All seven fixed salary lines, in slot order.
pub fn wage_lines(compensation: &Compensation) -> Vec<WageLine> {
    let mut lines = Vec::with_capacity(7);
    lines.push(WageLine {
        festbez_id: 1,
        wage_type: wage_type_or(compensation.base_wage_type.as_ref(), DEFAULT_WAGE_TYPE),
        amount: basic_salary(compensation).unwrap_or_else(|| "0".into()),
    });
    for (slot, (amount, wage_type)) in compensation
        .project_salaries
        .iter()
        .zip(&compensation.project_wage_types)
        .enumerate()
    {
        lines.push(WageLine {
            festbez_id: 2 + slot as u8,
            wage_type: wage_type_or(wage_type.as_ref(), DEFAULT_WAGE_TYPE),
            amount: amount_or_zero(amount.as_ref()),
        });
    }
    for (slot, (amount, wage_type)) in compensation
        .supplements
        .iter()
        .zip(&compensation.supplement_wage_types)
        .enumerate()
    {
        lines.push(WageLine {
            festbez_id: 6 + slot as u8,
            wage_type: wage_type_or(wage_type.as_ref(), DEFAULT_SUPPLEMENT_WAGE_TYPE),
            amount: amount_or_zero(amount.as_ref()),
        });
    }
    lines
}

/// Parse an amount, accepting a decimal comma.
pub(crate) fn parse_amount(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(d) = trimmed.parse::<Decimal>() {
        return Some(d);
    }
    if !trimmed.contains('.') && trimmed.matches(',').count() == 1 {
        return trimmed.replace(',', ".").parse().ok();
    }
    None
}

fn is_positive(value: Option<&Scalar>) -> bool {
    match value {
        Some(Scalar::Number(n)) => n.is_sign_positive() && !n.is_zero(),
        Some(other) => parse_amount(&other.to_string()).is_some_and(|d| d > Decimal::ZERO),
        None => false,
    }
}

/// Check boxes arrive as `0`/`1`; a zero counts as unset.
fn is_flag_set(value: Option<&Scalar>) -> bool {
    let s = normalized(value);
    if s.is_empty() {
        return false;
    }
    !matches!(s.parse::<Decimal>(), Ok(d) if d.is_zero())
}

fn wage_type_or(value: Option<&Scalar>, default: &str) -> String {
    let s = normalized(value);
    if s.is_empty() { default.to_string() } else { s }
}

fn amount_or_zero(value: Option<&Scalar>) -> String {
    let s = normalized(value);
    if s.is_empty() { "0".to_string() } else { s }
}
