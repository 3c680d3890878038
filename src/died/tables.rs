//! DIED code tables for LODAS master data fields.

/// An immutable mapping from a lower-case domain value to a LODAS code.
#[derive(Debug)]
pub struct CodeTable {
    name: &'static str,
    entries: &'static [(&'static str, &'static str)],
    fallback: Option<&'static str>,
}

impl CodeTable {
    /// Create a table without fallback code.
    pub const fn new(name: &'static str, entries: &'static [(&'static str, &'static str)]) -> Self {
        Self {
            name,
            entries,
            fallback: None,
        }
    }

    /// Set the code used for values the table does not know.
    pub const fn with_fallback(mut self, code: &'static str) -> Self {
        self.fallback = Some(code);
        self
    }

    /// Table name including the DIED number.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Code used for unknown values, if the table defines one.
    pub fn fallback(&self) -> Option<&'static str> {
        self.fallback
    }

    /// Look up an already normalized (trimmed, lower-case) key.
    pub fn lookup(&self, key: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, code)| *code)
    }

    /// All (key, code) pairs.
    pub fn entries(&self) -> &'static [(&'static str, &'static str)] {
        self.entries
    }
}

/// DIED 4003: gender.
pub static GENDER: CodeTable = CodeTable::new(
    "DIED 4003 Geschlecht",
    &[
        ("male", "0"),
        ("female", "1"),
        ("transgender", "2"),
        ("non-conforming", "2"),
        ("genderqueer", "2"),
        ("other", "2"),
        ("prefer not to say", "3"),
    ],
);

/// Yes/no indicator, shared by all flag fields (DIED 4040 first
/// employment, DIED 440 single parent and the exit and disability flags).
pub static YES_NO: CodeTable = CodeTable::new("DIED Ja/Nein", &[("nein", "0"), ("ja", "1")]);

/// DIED 4604: highest school degree.
pub static SCHOOL_DEGREE: CodeTable = CodeTable::new(
    "DIED 4604 Schulabschluss",
    &[
        ("keine angabe", "0"),
        ("ohne schulabschluss", "1"),
        ("haupt-/volksschulabschluss", "2"),
        ("mittlere reife oder gleichwertiger abschluss", "3"),
        ("abitur/fachabitur", "4"),
        ("abschluss unbekannt", "8"),
    ],
);

/// DIED 4601: highest vocational degree.
pub static VOCATIONAL_DEGREE: CodeTable = CodeTable::new(
    "DIED 4601 Ausbildungsabschluss",
    &[
        ("keine angabe", "0"),
        ("ohne beruflichen ausbildungsabschluss", "1"),
        ("abschluss einer anerkannten berufsausbildung", "2"),
        ("meister-/techniker - oder gleichwertiger fachschulabschluss", "3"),
        ("bachelor", "4"),
        ("diplom/magister/master/staatsexamen", "5"),
        ("promotion", "6"),
        ("abschluss unbekannt", "9"),
    ],
);

/// DIED 4574: employment contract.
pub static CONTRACT_TYPE: CodeTable = CodeTable::new(
    "DIED 4574 Arbeitsverhaeltnis",
    &[
        ("unbefristet", "0"),
        ("befristet", "1"),
        ("zweckbefristet", "2"),
        // historical misspelling still present in older HR data
        ("zwechbefristet", "2"),
    ],
);

/// DIED 4609: remuneration form.
pub static REMUNERATION_FORM: CodeTable = CodeTable::new(
    "DIED 4609 Entlohnungsform",
    &[("stundenlohn", "0"), ("leistungslohn", "1"), ("gehalt", "2")],
);

/// DIED 4630: main or secondary employer.
pub static EMPLOYER_RANK: CodeTable = CodeTable::new(
    "DIED 4630 Haupt-/Nebenarbeitgeber",
    &[
        ("keine angabe", "0"),
        ("hauptarbeitgeber", "1"),
        ("nebenarbeitgeber", "2"),
    ],
);

/// DIED 4624: church tax confession.
pub static CONFESSION: CodeTable = CodeTable::new(
    "DIED 4624 Konfession",
    &[
        ("konfessionslos / keine kirchensteuerberechnung", "0"),
        ("ev - evangelische kirchensteuer", "1"),
        ("rk - römisch-katholische kirchensteuer", "2"),
        ("ak - altkatholische kirchensteuer", "3"),
        ("fa - freie religionsgemeinschaft alzey", "4"),
        ("fb - freireligiöse landesgemeinde baden", "5"),
        ("fg - freireligiöse landesgemeinde pfalz", "6"),
        ("fm - freireligiöse gemeinde mainz", "7"),
        ("fr - französisch reformiert (bis 12/2015)", "8"),
        ("fs - freireligiöse gemeinde offenbach/main", "9"),
        ("ib - israelitische religionsgemeinschaft baden", "10"),
        ("ih - jüdische kultussteuer", "11"),
        (
            "il - israelitische kultussteuer der kultusberechtigten gemeinden",
            "12",
        ),
        ("is - israelitische / jüdische kultussteuer", "13"),
        ("iw - israelitische religionsgemeinschaft württembergs", "14"),
        ("jd - jüdische kultussteuer", "15"),
        ("jh - jüdische kultussteuer", "16"),
        ("lt - evangelisch lutherisch (bis 12/2015)", "17"),
        ("rf - evangelisch reformiert (bis 12/2015)", "18"),
    ],
);

/// DIED 4640: severe disability.
pub static SEVERE_DISABILITY: CodeTable = CodeTable::new(
    "DIED 4640 Schwerbehinderung",
    &[("nein", "0"), ("2 prozent", "1"), ("20 prozent", "2")],
);

/// DIED 1566: tax class.
pub static TAX_CLASS: CodeTable = CodeTable::new(
    "DIED 1566 Steuerklasse",
    &[
        ("1", "1"),
        ("2", "2"),
        ("3", "3"),
        ("4", "4"),
        ("5", "5"),
        ("6", "6"),
    ],
);

/// DIED 460: flat-rate tax.
pub static FLAT_RATE_TAX: CodeTable = CodeTable::new(
    "DIED 460 Pauschalsteuer",
    &[("nein", "0"), ("2 prozent", "1"), ("20 prozent", "2")],
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_known_and_unknown() {
        assert_eq!(GENDER.lookup("female"), Some("1"));
        assert_eq!(GENDER.lookup("Female"), None);
        assert_eq!(GENDER.lookup("robot"), None);
    }

    #[test]
    fn fallback_is_opt_in() {
        static T: CodeTable = CodeTable::new("test", &[("a", "1")]).with_fallback("9");
        assert_eq!(T.fallback(), Some("9"));
        assert_eq!(GENDER.fallback(), None);
    }

    #[test]
    fn keys_are_normalized() {
        for table in [
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
        ] {
            for (key, _) in table.entries() {
                assert_eq!(*key, key.trim().to_lowercase(), "{}", table.name());
            }
        }
    }
}
