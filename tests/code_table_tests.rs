use chrono::NaiveDate;
use lodas::core::Scalar;
use lodas::died::*;
use rust_decimal_macros::dec;

fn text(s: &str) -> Scalar {
    Scalar::from(s)
}

// --- Passthrough ---

#[test]
fn text_fields_pass_through_unchanged() {
    let value = text("Müller-Lüdenscheidt");
    assert_eq!(
        translate(SourceField::LastName, Some(&value)),
        "Müller-Lüdenscheidt"
    );
    assert_eq!(
        translate(SourceField::Iban, Some(&text("DE89370400440532013000"))),
        "DE89370400440532013000"
    );
}

#[test]
fn numeric_fields_pass_through_unchanged() {
    assert_eq!(
        translate(SourceField::WeeklyHours, Some(&Scalar::Number(dec!(38.5)))),
        "38.5"
    );
    assert_eq!(
        translate(SourceField::ChildAllowances, Some(&text("1,5"))),
        "1,5"
    );
}

#[test]
fn missing_values_are_empty_for_every_field() {
    for field in SourceField::ALL {
        assert_eq!(translate(*field, None), "", "{}", field.name());
    }
    for field in DependentField::ALL {
        assert_eq!(translate_dependent(field, None), "", "{}", field.name());
    }
}

// --- Dates ---

#[test]
fn iso_dates_are_reformatted() {
    assert_eq!(
        translate(SourceField::BirthDate, Some(&text("2020-05-04"))),
        "04.05.2020"
    );
    let date = Scalar::Date(NaiveDate::from_ymd_opt(1999, 12, 31).unwrap());
    assert_eq!(translate(SourceField::JoiningDate, Some(&date)), "31.12.1999");
    assert_eq!(
        translate_dependent(DependentField::BirthDate, Some(&text("2015-03-01"))),
        "01.03.2015"
    );
}

#[test]
fn unparsable_dates_are_returned_unchanged() {
    assert_eq!(
        translate(SourceField::WorkPermitUntil, Some(&text("garbage"))),
        "garbage"
    );
    assert_eq!(
        translate(SourceField::BirthDate, Some(&text("31.12.1999"))),
        "31.12.1999"
    );
    assert_eq!(format_date("2021-02-30"), "2021-02-30");
    assert_eq!(format_date("   "), "");
}

// --- Code tables ---

#[test]
fn lookup_is_case_insensitive() {
    assert_eq!(translate(SourceField::Gender, Some(&text("Female"))), "1");
    assert_eq!(translate(SourceField::Gender, Some(&text(" MALE "))), "0");
    assert_eq!(translate(SourceField::Married, Some(&text("Ja"))), "1");
    assert_eq!(
        translate(SourceField::ContractType, Some(&text("Befristet"))),
        "1"
    );
}

#[test]
fn unmapped_value_falls_back_to_original() {
    assert_eq!(
        translate(SourceField::Gender, Some(&text("Unbekannt"))),
        "Unbekannt"
    );
    assert_eq!(
        translate(SourceField::TaxClass, Some(&Scalar::Number(dec!(7)))),
        "7"
    );
}

#[test]
fn table_fallback_is_opt_in() {
    static WITH_DEFAULT: CodeTable = CodeTable::new("test", &[("a", "1")]).with_fallback("9");
    assert_eq!(WITH_DEFAULT.lookup("a"), Some("1"));
    assert_eq!(WITH_DEFAULT.lookup("b"), None);
    assert_eq!(WITH_DEFAULT.fallback(), Some("9"));
}

#[test]
fn numeric_tax_class_is_looked_up_as_text() {
    assert_eq!(
        translate(SourceField::TaxClass, Some(&Scalar::Number(dec!(3)))),
        "3"
    );
}

#[test]
fn misspelled_contract_type_still_maps() {
    assert_eq!(
        translate(SourceField::ContractType, Some(&text("Zwechbefristet"))),
        "2"
    );
}

#[test]
fn countries_use_two_schemes() {
    let austria = text("Österreich");
    assert_eq!(translate(SourceField::BirthCountry, Some(&austria)), "151");
    assert_eq!(translate(SourceField::Nationality, Some(&austria)), "A");
    assert_eq!(translate(SourceField::Country, Some(&austria)), "A");
}

#[test]
fn translate_named_routes_by_field_name() {
    assert_eq!(translate_named("gender", Some(&text("male"))), "0");
    assert_eq!(
        translate_named("birth_date", Some(&text("2020-05-04"))),
        "04.05.2020"
    );
    assert_eq!(translate_named("not_a_field", Some(&text("x"))), "x");
}

#[test]
fn every_table_key_is_lower_case() {
    let tables = [
        &GENDER,
        &YES_NO,
        &SCHOOL_DEGREE,
        &VOCATIONAL_DEGREE,
        &CONTRACT_TYPE,
        &REMUNERATION_FORM,
        &EMPLOYER_RANK,
        &CONFESSION,
        &SEVERE_DISABILITY,
        &TAX_CLASS,
        &FLAT_RATE_TAX,
        &BIRTH_COUNTRY,
        &NATIONALITY,
    ];
    for table in tables {
        for (key, _) in table.entries() {
            assert_eq!(*key, key.to_lowercase(), "{}: {key}", table.name());
        }
    }
}
