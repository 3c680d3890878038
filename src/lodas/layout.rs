//! Record layouts of the LODAS personnel master data (`u_lod_psd_*`).
//!
//! The same layouts drive the `[Satzbeschreibung]` section and the data
//! lines, so both always list the columns in the same order.

/// One column of a record line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    /// Text in string delimiters (`"..."`).
    Quoted(&'static str),
    /// Text or code without delimiters.
    Bare(&'static str),
    /// Number with two decimals and a decimal comma.
    Numeric(&'static str),
    /// Constant value under the given key.
    Fixed(&'static str, &'static str),
}

impl Column {
    /// LODAS field key of the column.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Quoted(k) | Self::Bare(k) | Self::Numeric(k) | Self::Fixed(k, _) => k,
        }
    }
}

/// Layout of one record type.
#[derive(Debug)]
pub struct RecordLayout {
    /// Record type number at the start of each line.
    pub number: u8,
    /// LODAS table name.
    pub table: &'static str,
    /// Columns after the record number, in file order.
    pub columns: &'static [Column],
    /// Emit only when a non-key column carries a value.
    pub optional: bool,
}

use Column::{Bare, Fixed, Numeric, Quoted};

pub static PERSONAL: RecordLayout = RecordLayout {
    number: 1,
    table: "u_lod_psd_mitarbeiter",
    columns: &[
        Quoted("pnr"),
        Quoted("duevo_familienname"),
        Quoted("duevo_vorname"),
        Bare("geschlecht"),
        Bare("geburtsdatum_ttmmjj"),
        Bare("adresse_nation_kz"),
        Quoted("duevo_titel"),
        Bare("kz_alleinerziehend"),
        Quoted("adresse_anschriftenzusatz"),
        Bare("arbeitserlaubnis"),
        Bare("aufenthaltserlaubnis"),
        Bare("geburtsland"),
        Quoted("gebname"),
        Quoted("gebort"),
        Quoted("email"),
        Bare("ersteintrittsdatum"),
        Bare("verw_ersteintr_elena_bn"),
        Quoted("adresse_strasse_nr"),
        Quoted("adresse_ort"),
        Bare("adresse_plz"),
        Quoted("adresse_strassenname"),
        Bare("schwerbeschaedigt"),
        Bare("staatsangehoerigkeit"),
        Quoted("telefon"),
        Bare("familienstand"),
        Quoted("duevo_namenszusatz"),
        Quoted("duevo_vorsatzwort"),
        Quoted("nazu_gebname"),
        Quoted("vorsatzwort_gebname"),
        Bare("datum_studienbesch"),
        Bare("loesch_nach_austr_unterdr"),
        Quoted("sozialversicherung_nr"),
        Bare("sba_ausbildungsbeginn"),
        Bare("sba_ausbildungsende"),
        Bare("ebz_nach_austritt_kz"),
        Bare("datum_tod"),
    ],
    optional: false,
};

pub static ACTIVITY: RecordLayout = RecordLayout {
    number: 2,
    table: "u_lod_psd_taetigkeit",
    columns: &[
        Quoted("pnr"),
        Quoted("berufsbezeichnung"),
        Fixed("beschaeft_nr", "1"),
        Quoted("kst_abteilungs_nr"),
        Bare("schulabschluss"),
        Bare("ausbildungsabschluss"),
        Bare("ausbildungsbeginn"),
        Bare("vorr_ausbildungsende"),
        Bare("datum_ben_ergeb_pruef"),
        Bare("ehrenamtliche_taetigkeit"),
        Bare("kz_erstbeschaeftigung"),
        Bare("kz_besch_nebenbesch"),
    ],
    optional: false,
};

pub static EMPLOYMENT: RecordLayout = RecordLayout {
    number: 3,
    table: "u_lod_psd_beschaeftigung",
    columns: &[
        Quoted("pnr"),
        Bare("arbeitsverhaeltnis"),
        Bare("eintrittdatum"),
        Bare("austrittdatum"),
        Bare("eel_nach_austritt_kz"),
    ],
    optional: false,
};

pub static TAX: RecordLayout = RecordLayout {
    number: 4,
    table: "u_lod_psd_steuer",
    columns: &[
        Quoted("pnr"),
        Quoted("identifikationsnummer"),
        Bare("st_klasse"),
        Bare("konf_an"),
        Numeric("kfb_anzahl"),
        Bare("pausch_einhtl_2"),
        Bare("els_2_haupt_ag_kz"),
    ],
    optional: false,
};

pub static BANK: RecordLayout = RecordLayout {
    number: 5,
    table: "u_lod_psd_ma_bank",
    columns: &[
        Quoted("pnr"),
        Quoted("ma_iban"),
        Quoted("ma_bic"),
        Quoted("ma_bank_kto_inhaber_abw"),
    ],
    optional: false,
};

pub static DISABILITY: RecordLayout = RecordLayout {
    number: 6,
    table: "u_lod_psd_schwerbeh",
    columns: &[
        Quoted("pnr"),
        Bare("sba_sb_ausweis_bis"),
        Bare("sba_unter_18_std_aa_kz"),
        Quoted("sba_kz_dienststelle"),
        Quoted("sba_az_geschaeftsstelle"),
        Quoted("sba_ort_dienstelle"),
        Bare("sba_sb_ausweis_ab"),
    ],
    optional: true,
};

pub static WORKING_TIME: RecordLayout = RecordLayout {
    number: 7,
    table: "u_lod_psd_arbeitszeit_regelm",
    columns: &[
        Quoted("pnr"),
        Numeric("az_wtl_indiv"),
        Numeric("url_tage_jhrl"),
        Numeric("urlaubsanspr_pro_jahr"),
    ],
    optional: false,
};

pub static WAGES: RecordLayout = RecordLayout {
    number: 8,
    table: "u_lod_psd_lohn_gehalt_bezuege",
    columns: &[
        Quoted("pnr"),
        Numeric("std_lohn_1"),
        Numeric("std_lohn_2"),
        Numeric("lfd_brutto_vereinbart"),
    ],
    optional: false,
};

pub static TRAVEL_SUBSIDY: RecordLayout = RecordLayout {
    number: 9,
    table: "u_lod_psd_fahrtkostenzuschuss",
    columns: &[Quoted("pnr"), Numeric("jobticket")],
    optional: false,
};

pub static SPECIAL_FEATURES: RecordLayout = RecordLayout {
    number: 10,
    table: "u_lod_psd_besonderheiten",
    columns: &[Quoted("pnr"), Bare("entlohnungsform")],
    optional: false,
};

pub static CHILDREN: RecordLayout = RecordLayout {
    number: 11,
    table: "u_lod_psd_kindergeld",
    columns: &[
        Quoted("pnr"),
        Bare("kind_nr"),
        Quoted("kind_vorname"),
        Quoted("kind_nachname"),
        Bare("kind_geburtsdatum"),
    ],
    optional: true,
};

pub static FIXED_SALARY: RecordLayout = RecordLayout {
    number: 12,
    table: "u_lod_psd_festbezuege",
    columns: &[
        Quoted("pnr"),
        Bare("festbez_id"),
        Bare("lohnart_nr"),
        Numeric("betrag"),
        Fixed("intervall", "0"),
        Fixed("kuerzung", "0"),
    ],
    optional: false,
};

/// Records 1-10, emitted once per employee in this order.
pub static EMPLOYEE_RECORDS: [&RecordLayout; 10] = [
    &PERSONAL,
    &ACTIVITY,
    &EMPLOYMENT,
    &TAX,
    &BANK,
    &DISABILITY,
    &WORKING_TIME,
    &WAGES,
    &TRAVEL_SUBSIDY,
    &SPECIAL_FEATURES,
];

/// All record types, in file order.
pub static ALL_RECORDS: [&RecordLayout; 12] = [
    &PERSONAL,
    &ACTIVITY,
    &EMPLOYMENT,
    &TAX,
    &BANK,
    &DISABILITY,
    &WORKING_TIME,
    &WAGES,
    &TRAVEL_SUBSIDY,
    &SPECIAL_FEATURES,
    &CHILDREN,
    &FIXED_SALARY,
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lodas::fields::field_def;

    #[test]
    fn numbered_in_order() {
        for (i, layout) in ALL_RECORDS.iter().enumerate() {
            assert_eq!(usize::from(layout.number), i + 1);
        }
    }

    #[test]
    fn every_record_starts_with_pnr() {
        for layout in ALL_RECORDS {
            assert_eq!(layout.columns[0], Quoted("pnr"), "{}", layout.table);
        }
    }

    #[test]
    fn mapped_columns_exist_in_field_table() {
        for layout in &ALL_RECORDS[..11] {
            for column in layout.columns {
                if !matches!(column, Fixed(..)) {
                    assert!(field_def(column.key()).is_some(), "{}", column.key());
                }
            }
        }
    }
}
