use lodas::core::*;
use lodas::lodas::*;

fn fixtures() -> Vec<EmployeeRecord> {
    serde_json::from_str(include_str!("fixtures/employees.json")).unwrap()
}

fn settings() -> ExportSettings {
    ExportSettingsBuilder::new("123456")
        .client("Acme GmbH", "00042")
        .client("Beta AG", "00043")
        .export_email("lohn@example.de")
        .build()
}

fn lines(text: &str) -> Vec<&str> {
    text.split_terminator(CRLF).collect()
}

// --- Full employee blocks ---

#[test]
fn block_of_employee_without_optional_data() {
    let max = fixtures().remove(1);
    let settings = settings();
    let block = LodasExporter::new(&settings, &NoDepartments)
        .serialize(&max)
        .unwrap();
    let expected = [
        "1;\"2001\";\"Muster\";\"Max\";0;30.11.1990;;;;;;;;;;;;;;;;;0;;;;;;;;;;;;;;;",
        "2;\"2001\";;1;;;;;;;;;;",
        "3;\"2001\";;01.04.2022;;;",
        "4;\"2001\";;;;;;;",
        "5;\"2001\";;;;",
        "6;\"2001\";31.12.2027;;\"Versorgungsamt\";;;;",
        "7;\"2001\";;;;",
        "8;\"2001\";;;;",
        "9;\"2001\";;",
        "10;\"2001\";;",
        "12;\"2001\";1;999;0,00;0;0;",
        "12;\"2001\";2;999;1000,00;0;0;",
        "12;\"2001\";3;999;0,00;0;0;",
        "12;\"2001\";4;999;0,00;0;0;",
        "12;\"2001\";5;999;0,00;0;0;",
        "12;\"2001\";6;998;0,00;0;0;",
        "12;\"2001\";7;998;0,00;0;0;",
    ];
    assert_eq!(lines(&block.text), expected);
    assert!(block.text.ends_with(CRLF));
    assert_eq!(block.dependent_count, 0);
}

#[test]
fn changed_weekly_hours_are_exported() {
    let erika = fixtures().remove(0);
    let settings = settings();
    let block = LodasExporter::new(&settings, &NoDepartments)
        .serialize(&erika)
        .unwrap();
    let text = lines(&block.text);
    assert!(text.contains(&"7;\"1001\";40,00;30,00;;"));
    assert!(text.contains(&"4;\"1001\";\"12345678901\";4;;1,50;;1;"));
}

#[test]
fn children_sorted_and_empty_ones_skipped() {
    let erika = fixtures().remove(0);
    let settings = settings();
    let block = LodasExporter::new(&settings, &NoDepartments)
        .serialize(&erika)
        .unwrap();
    let children: Vec<&str> = lines(&block.text)
        .into_iter()
        .filter(|l| l.starts_with("11;"))
        .collect();
    assert_eq!(
        children,
        [
            "11;\"1001\";1;\"Tim\";\"Mustermann\";22.04.2013;",
            "11;\"1001\";2;\"Lena\";\"Mustermann\";09.07.2016;",
        ]
    );
    assert_eq!(block.dependent_count, 2);
}

#[test]
fn fixed_salary_block_follows_children() {
    let erika = fixtures().remove(0);
    let settings = settings();
    let block = LodasExporter::new(&settings, &NoDepartments)
        .serialize(&erika)
        .unwrap();
    let text = lines(&block.text);
    let first_wage = text.iter().position(|l| l.starts_with("12;")).unwrap();
    let last_child = text.iter().rposition(|l| l.starts_with("11;")).unwrap();
    assert!(last_child < first_wage);
    assert_eq!(text[first_wage], "12;\"1001\";1;200;3500,00;0;0;");
    assert_eq!(text[first_wage + 1], "12;\"1001\";2;210;500,00;0;0;");
    assert_eq!(text[first_wage + 5], "12;\"1001\";6;998;75,50;0;0;");
    assert_eq!(text.len(), first_wage + 7);
}

// --- Restrictions reach the serializer ---

#[test]
fn restricted_fields_render_empty() {
    let erika = fixtures().remove(0);
    let settings = ExportSettingsBuilder::new("123456")
        .client("Acme GmbH", "00042")
        .restrict("duevo_vorname")
        .restrict("ma_iban")
        .build();
    let block = LodasExporter::new(&settings, &NoDepartments)
        .serialize(&erika)
        .unwrap();
    let text = lines(&block.text);
    assert!(text[0].starts_with("1;\"1001\";\"Mustermann\";;1;"));
    assert_eq!(text[4], "5;\"1001\";;\"COBADEFFXXX\";;");
}

#[test]
fn fully_restricted_children_are_not_emitted() {
    let erika = fixtures().remove(0);
    let settings = ExportSettingsBuilder::new("123456")
        .client("Acme GmbH", "00042")
        .restrict("kind_nr")
        .restrict("kind_vorname")
        .restrict("kind_nachname")
        .restrict("kind_geburtsdatum")
        .build();
    let block = LodasExporter::new(&settings, &NoDepartments)
        .serialize(&erika)
        .unwrap();
    assert_eq!(block.dependent_count, 0);
    assert!(!block.text.contains("\r\n11;"));
}

#[test]
fn restricted_disability_fields_drop_the_record() {
    let max = fixtures().remove(1);
    let settings = ExportSettingsBuilder::new("123456")
        .client("Beta AG", "00043")
        .restrict("sba_sb_ausweis_bis")
        .restrict("sba_kz_dienststelle")
        .build();
    let block = LodasExporter::new(&settings, &NoDepartments)
        .serialize(&max)
        .unwrap();
    assert!(!lines(&block.text).iter().any(|l| l.starts_with("6;")));
}

// --- Failures ---

#[test]
fn serialization_error_names_the_employee() {
    let mut max = fixtures().remove(1);
    max.personal.birth_place = Some("Kraków".into());
    max.personal.first_name = Some("Zoë\u{0142}".into());
    let settings = settings();
    let err = LodasExporter::new(&settings, &NoDepartments)
        .serialize(&max)
        .unwrap_err();
    match err {
        ExportError::Serialization { employee, message } => {
            assert_eq!(employee, "HR-EMP-00002");
            assert!(message.contains("duevo_vorname"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

// --- Record descriptions ---

#[test]
fn record_descriptions_snapshot() {
    let descriptions = record_descriptions().replace(CRLF, "\n");
    insta::assert_snapshot!("record_descriptions", descriptions);
}

#[test]
fn descriptions_and_data_lines_have_the_same_width() {
    let max = fixtures().remove(1);
    let settings = settings();
    let block = LodasExporter::new(&settings, &NoDepartments)
        .serialize(&max)
        .unwrap();
    let descriptions = record_descriptions();
    for line in lines(&block.text) {
        let number = line.split(';').next().unwrap();
        let description = lines(&descriptions)
            .into_iter()
            .find(|d| d.split(';').next() == Some(number))
            .unwrap();
        // the description carries the table name as an extra column
        assert_eq!(
            description.matches(';').count(),
            line.matches(';').count() + 1,
            "record {number}"
        );
    }
}
