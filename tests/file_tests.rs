use chrono::{NaiveDate, NaiveDateTime};
use lodas::core::*;
use lodas::lodas::*;

fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 6, 18)
        .unwrap()
        .and_hms_opt(14, 5, 9)
        .unwrap()
}

fn employee(id: &str, company: &str, number: &str) -> EmployeeRecord {
    EmployeeRecord {
        id: id.into(),
        company: company.into(),
        employee_number: Some(number.into()),
        personal: PersonalData {
            first_name: Some("Erika".into()),
            last_name: Some("Mustermann".into()),
            ..Default::default()
        },
        ..Default::default()
    }
}

fn section<'a>(content: &'a str, name: &str) -> Vec<&'a str> {
    content
        .split(CRLF)
        .skip_while(|l| *l != name)
        .skip(1)
        .take_while(|l| !l.starts_with('['))
        .filter(|l| !l.is_empty())
        .collect()
}

// --- End to end ---

#[test]
fn one_employee_one_file() {
    let settings = ExportSettingsBuilder::new("123456")
        .client("Acme", "00042")
        .export_email("lohn@example.de")
        .build();
    let groups = group_by_company(vec![employee("HR-1", "Acme", "1001")]);
    let files = build_files(&groups, &settings, &NoDepartments);

    assert_eq!(files.len(), 1);
    let file = &files[0];
    let header = section(&file.content, "[Allgemein]");
    assert!(header.contains(&"MandantenNr=00042"));
    assert!(header.contains(&"BeraterNr=123456"));

    let data = section(&file.content, "[Stammdaten]");
    let personal: Vec<&&str> = data.iter().filter(|l| l.starts_with("1;")).collect();
    assert_eq!(personal.len(), 1);
    assert_eq!(file.employee_count, 1);
    assert_eq!(file.dependent_count, 0);
}

#[test]
fn sections_in_fixed_order() {
    let settings = ExportSettingsBuilder::new("123456").client("Acme", "00042").build();
    let groups = group_by_company(vec![employee("HR-1", "Acme", "1001")]);
    let files = LodasExporter::new(&settings, &NoDepartments).build_files_at(&groups, now());
    let content = &files[0].content;

    let allgemein = content.find("[Allgemein]").unwrap();
    let satz = content.find("[Satzbeschreibung]").unwrap();
    let stamm = content.find("[Stammdaten]").unwrap();
    assert_eq!(allgemein, 0);
    assert!(allgemein < satz && satz < stamm);
    assert_eq!(section(content, "[Satzbeschreibung]").len(), 12);
    assert!(content.contains("StammdatenGueltigAb=01.06.2025\r\n"));
}

#[test]
fn every_line_ends_with_crlf() {
    let settings = ExportSettingsBuilder::new("123456").client("Acme", "00042").build();
    let groups = group_by_company(vec![employee("HR-1", "Acme", "1001")]);
    let files = LodasExporter::new(&settings, &NoDepartments).build_files_at(&groups, now());
    let content = &files[0].content;
    assert!(content.ends_with(CRLF));
    assert_eq!(content.matches('\n').count(), content.matches(CRLF).count());
}

// --- Company grouping ---

#[test]
fn unmapped_company_is_skipped() {
    let settings = ExportSettingsBuilder::new("123456").client("Acme", "00042").build();
    let groups = group_by_company(vec![
        employee("HR-1", "Acme", "1001"),
        employee("HR-2", "Untracked", "2001"),
    ]);
    let files = LodasExporter::new(&settings, &NoDepartments).build_files_at(&groups, now());
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].company, "Acme");
    assert!(!files[0].content.contains("\"2001\""));
}

#[test]
fn one_file_per_company() {
    let settings = ExportSettingsBuilder::new("123456")
        .client("Acme", "00042")
        .client("Beta AG", "00043")
        .build();
    let mut with_child = employee("HR-3", "Beta AG", "3001");
    with_child.dependents.push(DependentRecord {
        sequence: Some(1.into()),
        first_name: Some("Tim".into()),
        ..Default::default()
    });
    let groups = group_by_company(vec![
        employee("HR-1", "Acme", "1001"),
        employee("HR-2", "Beta AG", "2001"),
        with_child,
    ]);
    let files = LodasExporter::new(&settings, &NoDepartments).build_files_at(&groups, now());

    assert_eq!(files.len(), 2);
    assert_eq!(files[0].filename, "DATEV_LODAS_Acme_20250618140509.txt");
    assert_eq!(files[1].filename, "DATEV_LODAS_Beta_AG_20250618140509.txt");
    assert_eq!(files[1].client_number, "00043");
    assert!(files[1].content.contains("MandantenNr=00043"));
    assert_eq!(files[1].employee_count, 2);
    assert_eq!(files[1].dependent_count, 1);
    assert_eq!(files[1].exported, ["HR-2", "HR-3"]);
}

#[test]
fn employees_keep_input_order_within_file() {
    let settings = ExportSettingsBuilder::new("123456").client("Acme", "00042").build();
    let groups = group_by_company(vec![
        employee("HR-9", "Acme", "9"),
        employee("HR-1", "Acme", "1"),
    ]);
    let files = LodasExporter::new(&settings, &NoDepartments).build_files_at(&groups, now());
    let personal: Vec<&str> = section(&files[0].content, "[Stammdaten]")
        .into_iter()
        .filter(|l| l.starts_with("1;"))
        .collect();
    assert!(personal[0].starts_with("1;\"9\";"));
    assert!(personal[1].starts_with("1;\"1\";"));
}

// --- Partial failure ---

#[test]
fn failing_employee_does_not_stop_the_batch() {
    let settings = ExportSettingsBuilder::new("123456").client("Acme", "00042").build();
    let mut broken = employee("HR-2", "Acme", "2001");
    broken.personal.last_name = Some("Łukasiewicz".into());
    let groups = group_by_company(vec![
        employee("HR-1", "Acme", "1001"),
        broken,
        employee("HR-3", "Acme", "3001"),
    ]);
    let files = LodasExporter::new(&settings, &NoDepartments).build_files_at(&groups, now());
    assert_eq!(files[0].exported, ["HR-1", "HR-3"]);
    assert_eq!(files[0].dropped, ["HR-2"]);
    assert_eq!(files[0].employee_count, 2);
    assert!(!files[0].content.contains("\"2001\""));
}

#[test]
fn company_without_serializable_employees_has_no_file() {
    let settings = ExportSettingsBuilder::new("123456").client("Acme", "00042").build();
    let mut broken = employee("HR-2", "Acme", "2001");
    broken.address.street = Some("Line\r\nbreak".into());
    let files = LodasExporter::new(&settings, &NoDepartments)
        .build_files_at(&group_by_company(vec![broken]), now());
    assert!(files.is_empty());
}

// --- Output ---

#[test]
fn written_file_is_windows_1252() {
    let settings = ExportSettingsBuilder::new("123456").client("Acme", "00042").build();
    let mut e = employee("HR-1", "Acme", "1001");
    e.address.street = Some("Große Straße".into());
    let mut file = LodasExporter::new(&settings, &NoDepartments)
        .build_single_at(&e, now())
        .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = file.write_to(dir.path()).unwrap().to_path_buf();
    assert_eq!(path, dir.path().join("DATEV_LODAS_Single_HR-1_20250618140509.txt"));
    assert_eq!(file.path.as_deref(), Some(path.as_path()));

    let bytes = std::fs::read(&path).unwrap();
    assert!(bytes.windows(4).any(|w| w == b"Gro\xdf"));
    assert!(bytes.starts_with(b"[Allgemein]\r\nZiel=Lodas\r\n"));
}

#[test]
fn single_export_requires_client_number() {
    let settings = ExportSettingsBuilder::new("123456").client("Acme", "00042").build();
    let err = LodasExporter::new(&settings, &NoDepartments)
        .build_single_at(&employee("HR-2", "Untracked", "2001"), now())
        .unwrap_err();
    assert!(matches!(err, ExportError::UnmappedCompanies(c) if c == ["Untracked"]));
}
