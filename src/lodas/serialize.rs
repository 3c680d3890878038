//! LODAS record serializer.

use std::cmp::Ordering;

use encoding_rs::WINDOWS_1252;
use rust_decimal::{Decimal, RoundingStrategy};

use super::fields::MappedRecord;
use super::layout::{CHILDREN, Column, EMPLOYEE_RECORDS, FIXED_SALARY, RecordLayout};
use super::salary::{WageLine, parse_amount};
use crate::core::ExportError;

/// Line terminator of LODAS files.
pub const CRLF: &str = "\r\n";

/// Serialized records of one employee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeBlock {
    /// Record lines, each terminated by CRLF.
    pub text: String,
    /// Number of record-11 lines emitted.
    pub dependent_count: usize,
}

/// Format a number with two decimals and a decimal comma.
///
/// Empty or unparsable input yields `""`, never `0,00`. Values beyond the
/// range of [`Decimal`] (more than 28 digits, exponents) are formatted from
/// an `f64` and lose precision.
pub fn format_numeric(raw: &str) -> String {
    if let Some(d) = parse_amount(raw) {
        return format_amount(d);
    }
    match parse_float(raw) {
        Some(f) => format!("{f:.2}").replace('.', ","),
        None => String::new(),
    }
}

fn parse_float(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    let parsed = match trimmed.parse::<f64>() {
        Ok(f) => f,
        Err(_) if !trimmed.contains('.') && trimmed.matches(',').count() == 1 => {
            trimmed.replace(',', ".").parse().ok()?
        }
        Err(_) => return None,
    };
    parsed.is_finite().then_some(parsed)
}

/// Commercial rounding, half away from zero.
fn format_amount(d: Decimal) -> String {
    let scaled = d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let s = format!("{:.2}", scaled);
    s.replace('.', ",")
}

/// Format one column value. Empty values render as nothing (a bare `;`).
pub fn format_field(column: &Column, value: &str) -> String {
    let cleaned = clean(value);
    match column {
        Column::Numeric(_) => format_numeric(cleaned),
        _ if cleaned.is_empty() => String::new(),
        Column::Quoted(_) => format!("\"{}\"", cleaned.replace('"', "\"\"")),
        Column::Bare(_) | Column::Fixed(..) => cleaned.to_string(),
    }
}

fn clean(value: &str) -> &str {
    if value.trim().eq_ignore_ascii_case("none") {
        ""
    } else {
        value
    }
}

/// Render one record line from a value source.
fn render_line<'a>(
    layout: &RecordLayout,
    value: impl Fn(&str) -> &'a str,
) -> Result<String, String> {
    let mut line = layout.number.to_string();
    line.push(';');
    for column in layout.columns {
        let raw = match column {
            Column::Fixed(_, constant) => *constant,
            other => value(other.key()),
        };
        check_value(column, raw)?;
        line.push_str(&format_field(column, raw));
        line.push(';');
    }
    line.push_str(CRLF);
    Ok(line)
}

fn check_value(column: &Column, value: &str) -> Result<(), String> {
    let key = column.key();
    if value.contains(['\r', '\n']) {
        return Err(format!("field {key} contains a line break"));
    }
    // Unquoted columns cannot escape the separator.
    if matches!(column, Column::Bare(_)) && value.contains([';', '"']) {
        return Err(format!("field {key} contains a separator or quote"));
    }
    let (_, _, had_errors) = WINDOWS_1252.encode(value);
    if had_errors {
        return Err(format!(
            "field {key} contains characters outside Windows-1252"
        ));
    }
    Ok(())
}

/// Whether an optional layout has any value besides the personnel number.
fn has_data(layout: &RecordLayout, record: &MappedRecord) -> bool {
    layout
        .columns
        .iter()
        .filter(|c| !matches!(c, Column::Fixed(..)) && c.key() != "pnr")
        .any(|c| !clean(record.get(c.key())).trim().is_empty())
}

/// Serialize all records of one employee.
///
/// `record` must already be translated and restriction-filtered.
/// `dependents` are the employee mappings overlaid with each child; only
/// children with data are emitted, in ascending `kind_nr` order.
pub fn serialize_employee(
    record: &MappedRecord,
    dependents: &[MappedRecord],
    wages: &[WageLine],
) -> Result<EmployeeBlock, ExportError> {
    let fail = |message: String| ExportError::Serialization {
        employee: record.pnr().to_string(),
        message,
    };

    let mut text = String::new();
    for layout in EMPLOYEE_RECORDS {
        if layout.optional && !has_data(layout, record) {
            continue;
        }
        text.push_str(&render_line(layout, |key| record.get(key)).map_err(fail)?);
    }

    let mut children: Vec<&MappedRecord> = dependents
        .iter()
        .filter(|d| has_data(&CHILDREN, d))
        .collect();
    children.sort_by(|a, b| compare_sequence(a.get("kind_nr"), b.get("kind_nr")));
    for child in &children {
        text.push_str(&render_line(&CHILDREN, |key| child.get(key)).map_err(fail)?);
    }

    for wage in wages {
        let id = wage.festbez_id.to_string();
        let line = render_line(&FIXED_SALARY, |key| match key {
            "festbez_id" => id.as_str(),
            "lohnart_nr" => wage.wage_type.as_str(),
            "betrag" => wage.amount.as_str(),
            other => record.get(other),
        })
        .map_err(fail)?;
        text.push_str(&line);
    }

    Ok(EmployeeBlock {
        text,
        dependent_count: children.len(),
    })
}

/// Numeric order; unparsable sequence numbers go last.
fn compare_sequence(a: &str, b: &str) -> Ordering {
    match (a.trim().parse::<Decimal>(), b.trim().parse::<Decimal>()) {
        (Ok(x), Ok(y)) => x.cmp(&y),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => Ordering::Equal,
    }
}

/// The `[Satzbeschreibung]` lines of all record types.
pub fn record_descriptions() -> String {
    let mut out = String::new();
    for layout in super::layout::ALL_RECORDS {
        out.push_str(&format!("{};{};", layout.number, layout.table));
        for column in layout.columns {
            out.push_str(column.key());
            out.push_str("#psd;");
        }
        out.push_str(CRLF);
    }
    out
}
