use chrono::NaiveDate;
use tracing::warn;

use crate::core::Scalar;

use super::source::{DependentField, FieldKind, SourceField};

/// Translate a source value into its LODAS representation.
///
/// Never fails: a missing value yields `""`, an unparsable date is
/// returned unchanged and a value without a code falls back to the
/// table's default or, failing that, to the original value.
pub fn translate(field: SourceField, value: Option<&Scalar>) -> String {
    apply(field.name(), field.kind(), value)
}

/// [`translate`] for the fields of a dependent.
pub fn translate_dependent(field: DependentField, value: Option<&Scalar>) -> String {
    apply(field.name(), field.kind(), value)
}

/// Translate a value by domain field name. Unknown names pass through.
pub fn translate_named(name: &str, value: Option<&Scalar>) -> String {
    let kind = SourceField::from_name(name)
        .map(SourceField::kind)
        .unwrap_or(FieldKind::Text);
    apply(name, kind, value)
}

fn apply(name: &str, kind: FieldKind, value: Option<&Scalar>) -> String {
    let Some(value) = value else {
        return String::new();
    };
    match kind {
        FieldKind::Text | FieldKind::Numeric => value.to_string(),
        FieldKind::Date => match value {
            Scalar::Date(d) => d.format("%d.%m.%Y").to_string(),
            other => format_date(&other.to_string()),
        },
        FieldKind::Coded(table) => {
            let raw = value.to_string();
            let key = raw.trim().to_lowercase();
            if key.is_empty() {
                return String::new();
            }
            if let Some(code) = table.lookup(&key) {
                return code.to_string();
            }
            warn!(field = name, value = %raw, table = table.name(), "value has no DIED mapping");
            table.fallback().map_or(raw, str::to_string)
        }
    }
}

/// Reformat an ISO date (`YYYY-MM-DD`) as `DD.MM.YYYY`.
///
/// Blank input yields `""`; anything else that does not parse is returned
/// as given.
pub fn format_date(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    match NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        Ok(date) => date.format("%d.%m.%Y").to_string(),
        Err(_) => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn text(s: &str) -> Scalar {
        Scalar::from(s)
    }

    #[test]
    fn missing_value_is_empty() {
        assert_eq!(translate(SourceField::Gender, None), "");
        assert_eq!(translate(SourceField::BirthDate, None), "");
        assert_eq!(translate(SourceField::City, None), "");
    }

    #[test]
    fn coded_lookup_is_case_insensitive() {
        assert_eq!(translate(SourceField::Gender, Some(&text("Female"))), "1");
        assert_eq!(translate(SourceField::Gender, Some(&text(" MALE "))), "0");
        assert_eq!(translate(SourceField::Married, Some(&text("Ja"))), "1");
    }

    #[test]
    fn unmapped_value_falls_back_to_original() {
        assert_eq!(
            translate(SourceField::ContractType, Some(&text("Werkvertrag"))),
            "Werkvertrag"
        );
    }

    #[test]
    fn blank_coded_value_is_empty() {
        assert_eq!(translate(SourceField::Confession, Some(&text("  "))), "");
    }

    #[test]
    fn dates_are_reformatted() {
        assert_eq!(
            translate(SourceField::JoiningDate, Some(&text("2020-05-04"))),
            "04.05.2020"
        );
        let date = NaiveDate::from_ymd_opt(1985, 2, 14).unwrap();
        assert_eq!(
            translate(SourceField::BirthDate, Some(&Scalar::Date(date))),
            "14.02.1985"
        );
    }

    #[test]
    fn bad_dates_are_returned_unchanged() {
        assert_eq!(
            translate(SourceField::DateOfDeath, Some(&text("garbage"))),
            "garbage"
        );
        assert_eq!(format_date("31.12.2020"), "31.12.2020");
        assert_eq!(format_date("2020-02-30"), "2020-02-30");
    }

    #[test]
    fn passthrough_keeps_value() {
        assert_eq!(
            translate(SourceField::WeeklyHours, Some(&Scalar::Number(dec!(38.5)))),
            "38.5"
        );
        assert_eq!(
            translate(SourceField::LastName, Some(&text("Müller-Lüdenscheidt"))),
            "Müller-Lüdenscheidt"
        );
    }

    #[test]
    fn countries_follow_their_scheme() {
        let austria = text("Österreich");
        assert_eq!(translate(SourceField::BirthCountry, Some(&austria)), "151");
        assert_eq!(translate(SourceField::Nationality, Some(&austria)), "A");
        assert_eq!(translate(SourceField::Country, Some(&austria)), "A");
    }

    #[test]
    fn by_name() {
        assert_eq!(translate_named("gender", Some(&text("other"))), "2");
        assert_eq!(translate_named("no_such_field", Some(&text("x"))), "x");
    }

    #[test]
    fn dependent_birth_date() {
        assert_eq!(
            translate_dependent(DependentField::BirthDate, Some(&text("2015-03-01"))),
            "01.03.2015"
        );
    }
}
