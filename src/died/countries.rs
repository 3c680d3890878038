//! Country code tables.
//!
//! Two different DEÜV/DIED numbering schemes are in use for countries:
//! the numeric state key of DIED 4214 (birth country) and the alphabetic
//! nationality key of DIED 4213 (nationality and address country).
//! Keys are lower-case German country names.

use super::tables::CodeTable;

/// DIED 4214: birth country, numeric state key.
pub static BIRTH_COUNTRY: CodeTable = CodeTable::new("DIED 4214 Geburtsland", BIRTH_COUNTRY_CODES);

/// DIED 4213: nationality, alphabetic nationality key.
/// Also used for the country of the home address.
pub static NATIONALITY: CodeTable = CodeTable::new("DIED 4213 Staatsangehoerigkeit", NATIONALITY_CODES);

static BIRTH_COUNTRY_CODES: &[(&str, &str)] = &[
    ("deutschland", "0"),
    ("albanien", "121"),
    ("bosnien und herzegowina", "122"),
    ("andorra", "123"),
    ("belgien", "124"),
    ("bulgarien", "125"),
    ("dänemark", "126"),
    ("estland", "127"),
    ("finnland", "128"),
    ("frankreich", "129"),
    ("kroatien", "130"),
    ("slowenien", "131"),
    ("serbien und montenegro", "132"),
    ("serbien (einschl. kosovo)", "133"),
    ("griechenland", "134"),
    ("irland", "135"),
    ("island", "136"),
    ("italien", "137"),
    ("jugoslawien", "138"),
    ("lettland", "139"),
    ("montenegro", "140"),
    ("liechtenstein", "141"),
    ("litauen", "142"),
    ("luxemburg", "143"),
    ("nordmazedonien", "144"),
    ("malta", "145"),
    ("moldau", "146"),
    ("monaco", "147"),
    ("niederlande", "148"),
    ("norwegen", "149"),
    ("kosovo", "150"),
    ("österreich", "151"),
    ("polen", "152"),
    ("portugal", "153"),
    ("rumänien", "154"),
    ("slowakei", "155"),
    ("san marino", "156"),
    ("schweden", "157"),
    ("schweiz", "158"),
    ("russische föderation", "160"),
    ("spanien", "161"),
    ("türkei", "163"),
    ("tschechien", "164"),
    ("ungarn", "165"),
    ("ukraine", "166"),
    ("vatikanstadt", "167"),
    ("vereinigtes königreich", "168"),
    ("weissrussland", "169"),
    ("serbien", "170"),
    ("zypern", "181"),
    ("gibraltar", "195"),
    ("übriges europa", "199"),
    ("algerien", "221"),
    ("angola", "223"),
    ("eritrea", "224"),
    ("äthiopien", "225"),
    ("lesotho", "226"),
    ("botsuana", "227"),
    ("benin", "229"),
    ("dschibuti", "230"),
    ("côte d'ivoire", "231"),
    ("nigeria", "232"),
    ("simbabwe", "233"),
    ("gabun", "236"),
    ("gambia", "237"),
    ("ghana", "238"),
    ("mauretanien", "239"),
    ("cabo verde", "242"),
    ("kenia", "243"),
    ("komoren", "244"),
    ("kongo", "245"),
    ("kongo, demokratische republik", "246"),
    ("liberia", "247"),
    ("libyen", "248"),
    ("madagaskar", "249"),
    ("mali", "251"),
    ("marokko", "252"),
    ("mauritius", "253"),
    ("mosambik", "254"),
    ("niger", "255"),
    ("malawi", "256"),
    ("sambia", "257"),
    ("burkina faso", "258"),
    ("guinea-bissau", "259"),
    ("guinea", "261"),
    ("kamerun", "262"),
    ("südafrika", "263"),
    ("ruanda", "265"),
    ("namibia", "267"),
    ("são tomé und príncipe", "268"),
    ("senegal", "269"),
    ("seychellen", "271"),
    ("sierra leone", "272"),
    ("somalia", "273"),
    ("äquatorialguinea", "274"),
    ("sudan (vor der teilung des landes)", "276"),
    ("sudan", "277"),
    ("südsudan", "278"),
    ("eswatini", "281"),
    ("tansania", "282"),
    ("togo", "283"),
    ("tschad", "284"),
    ("tunesien", "285"),
    ("uganda", "286"),
    ("ägypten", "287"),
    ("zentralafrikanische republik", "289"),
    ("burundi", "291"),
    ("britisch abhängige gebiete in afrika", "295"),
    ("übriges afrika", "299"),
    ("antigua und barbuda", "320"),
    ("barbados", "322"),
    ("argentinien", "323"),
    ("bahamas", "324"),
    ("bolivien", "326"),
    ("brasilien", "327"),
    ("guyana", "328"),
    ("belize", "330"),
    ("chile", "332"),
    ("dominica", "333"),
    ("costa rica", "334"),
    ("dominikanische republik", "335"),
    ("ecuador", "336"),
    ("el salvador", "337"),
    ("grenada", "340"),
    ("guatemala", "345"),
    ("haiti", "346"),
    ("honduras", "347"),
    ("kanada", "348"),
    ("kolumbien", "349"),
    ("kuba", "351"),
    ("mexiko", "353"),
    ("nicaragua", "354"),
    ("jamaika", "355"),
    ("panama", "357"),
    ("paraguay", "359"),
    ("peru", "361"),
    ("suriname", "364"),
    ("uruguay", "365"),
    ("st. lucia", "366"),
    ("venezuela", "367"),
    ("vereinigte staaten", "368"),
    ("st. vincent und die grenadinen", "369"),
    ("st. kitts und nevis", "370"),
    ("trinidad und tobago", "371"),
    ("britisch abhängige gebiete in amerika", "395"),
    ("übriges amerika", "399"),
    ("hongkong", "411"),
    ("macau", "412"),
    ("jemen", "421"),
    ("armenien", "422"),
    ("afghanistan", "423"),
    ("bahrain", "424"),
    ("aserbaidschan", "425"),
    ("bhutan", "426"),
    ("myanmar", "427"),
    ("brunei darussalam", "429"),
    ("georgien", "430"),
    ("sri lanka", "431"),
    ("vietnam", "432"),
    ("korea, demokratische volksrepublik (nordkorea)", "434"),
    ("indien", "436"),
    ("indonesien", "437"),
    ("irak", "438"),
    ("iran", "439"),
    ("israel", "441"),
    ("japan", "442"),
    ("kasachstan", "444"),
    ("jordanien", "445"),
    ("kambodscha", "446"),
    ("katar", "447"),
    ("kuwait", "448"),
    ("laos", "449"),
    ("kirgisistan", "450"),
    ("libanon", "451"),
    ("malediven", "454"),
    ("oman", "456"),
    ("mongolei", "457"),
    ("nepal", "458"),
    ("palästinensische gebiete", "459"),
    ("bangladesch", "460"),
    ("pakistan", "461"),
    ("philippinen", "462"),
    ("taiwan", "465"),
    ("korea, republik (südkorea)", "467"),
    ("vereinigte arabische emirate", "469"),
    ("tadschikistan", "470"),
    ("turkmenistan", "471"),
    ("saudi-arabien", "472"),
    ("singapur", "474"),
    ("syrien", "475"),
    ("thailand", "476"),
    ("usbekistan", "477"),
    ("china", "479"),
    ("malaysia", "482"),
    ("übriges asien", "499"),
    ("australien", "523"),
    ("salomonen", "524"),
    ("nördliche marianen", "525"),
    ("fidschi", "526"),
    ("kiribati", "530"),
    ("nauru", "531"),
    ("vanuatu", "532"),
    ("neuseeland", "536"),
    ("palau", "537"),
    ("papua-neuguinea", "538"),
    ("tuvalu", "540"),
    ("tonga", "541"),
    ("samoa", "543"),
    ("marshallinseln", "544"),
    ("mikronesien", "545"),
    ("britisch abh. gebiete in australien/ozeanien", "595"),
    ("übriges ozeanien", "599"),
    ("unbekanntes ausland", "996"),
    ("staatenlos", "997"),
    ("ungeklärt", "998"),
    ("ohne angabe", "999"),
];

static NATIONALITY_CODES: &[(&str, &str)] = &[
    ("keine angabe", "0"),
    ("österreich", "A"),
    ("afghanistan", "AFG"),
    ("angola", "AGO"),
    ("amerikanische jungferninseln", "AJ"),
    ("albanien", "AL"),
    ("andorra", "AND"),
    ("anguilla", "ANG"),
    ("antigua und barbuda", "ANT"),
    ("antarktische territorien", "AQ"),
    ("äquatorialguinea", "AQU"),
    ("armenien", "ARM"),
    ("amerikanisch samoa", "AS"),
    ("aserbaidschan", "ASE"),
    ("korallenmeer-, ashmore- und cartierinseln", "AU"),
    ("australien", "AUS"),
    ("aruba", "AW"),
    ("åland", "AX"),
    ("belgien", "B"),
    ("bangladesch", "BD"),
    ("barbados", "BDS"),
    ("bermuda", "BER"),
    ("bulgarien", "BG"),
    ("belize", "BH"),
    ("bhutan", "BHT"),
    ("bosnien und herzegowina", "BIH"),
    ("malediven", "BIO"),
    ("britische jungferninseln", "BJ"),
    ("st. barthélemy", "BL"),
    ("bolivien", "BOL"),
    ("bonaire, saba, st. eustatius", "BQ"),
    ("brasilien", "BR"),
    ("bahrain", "BRN"),
    ("brunei darussalam", "BRU"),
    ("bahamas", "BS"),
    ("bouvetinsel", "BV"),
    ("weissrussland", "BY"),
    ("kuba", "C"),
    ("kamerun", "CAM"),
    ("kokosinseln", "CC"),
    ("kanada", "CDN"),
    ("schweiz", "CH"),
    ("tschad", "CHD"),
    ("côte d'ivoire", "CI"),
    ("sri lanka", "CL"),
    ("kolumbien", "CO"),
    ("cookinseln", "COI"),
    ("clipperton", "CP"),
    ("costa rica", "CR"),
    ("cabo verde", "CV"),
    ("curaçao", "CW"),
    ("zypern", "CY"),
    ("weihnachtsinsel", "CX"),
    ("tschechien", "CZ"),
    ("dänemark", "DK"),
    ("dominikanische republik", "DOM"),
    ("dschibuti", "DSC"),
    ("benin", "DY"),
    ("algerien", "DZ"),
    ("spanien", "E"),
    ("kenia", "EAK"),
    ("tansania", "EAT"),
    ("uganda", "EAU"),
    ("ecuador", "EC"),
    ("westsahara", "EH"),
    ("eritrea", "ERI"),
    ("el salvador", "ES"),
    ("estland", "EST"),
    ("ägypten", "ET"),
    ("äthiopien", "ETH"),
    ("frankreich", "F"),
    ("falklandinseln", "FAL"),
    ("französisch guayana", "FG"),
    ("finnland", "FIN"),
    ("fidschi", "FJI"),
    ("liechtenstein", "FL"),
    ("franz.-polynesien", "FP"),
    ("färöer", "FR"),
    ("gabun", "GAB"),
    ("vereinigtes königreich", "GB"),
    ("guatemala", "GCA"),
    ("georgien", "GEO"),
    ("guernsey", "GG"),
    ("ghana", "GH"),
    ("gibraltar", "GIB"),
    ("griechenland", "GR"),
    ("grönland", "GRO"),
    ("südgeorgien und die südlichen sandwichinseln", "GS"),
    ("guadeloupe", "GUA"),
    ("guinea-bissau", "GUB"),
    ("guam", "GUM"),
    ("guyana", "GUY"),
    ("ungarn", "H"),
    ("honduras", "HCA"),
    ("st. helena /ascension / tristan da cunha", "HEL"),
    ("hongkong", "HKG"),
    ("kroatien", "HR"),
    ("heard und mcdonaldinseln", "HM"),
    ("burkina faso", "HV"),
    ("italien", "I"),
    ("israel", "IL"),
    ("indien", "IND"),
    ("iran", "IR"),
    ("irland", "IRL"),
    ("irak", "IRQ"),
    ("island", "IS"),
    ("britisches territorium im indischen ozean", "IO"),
    ("japan", "J"),
    ("jamaika", "JA"),
    ("jersey", "JE"),
    ("jordanien", "JOR"),
    ("kambodscha", "K"),
    ("kaimaninseln", "KAI"),
    ("kanalinseln", "KAN"),
    ("kasachstan", "KAS"),
    ("kiribati", "KIB"),
    ("kirgisistan", "KIS"),
    ("komoren", "KOM"),
    ("korea, demokratische volksrepublik (nordkorea)", "KOR"),
    ("kosovo", "KOS"),
    ("kuwait", "KWT"),
    ("luxemburg", "L"),
    ("laos", "LAO"),
    ("libyen", "LAR"),
    ("liberia", "LB"),
    ("lesotho", "LS"),
    ("litauen", "LT"),
    ("lettland", "LV"),
    ("malta", "M"),
    ("marokko", "MA"),
    ("macau", "MAC"),
    ("malaysia", "MAL"),
    ("insel man", "MAN"),
    ("oman", "MAO"),
    ("marshallinseln", "MAR"),
    ("martinique", "MAT"),
    ("mayotte", "MAY"),
    ("monaco", "MC"),
    ("moldau", "MD"),
    ("mexiko", "MEX"),
    ("st. martin (französischer teil)", "MF"),
    ("mikronesien", "MIK"),
    ("nordmazedonien", "MK"),
    ("montenegro", "MNE"),
    ("mongolei", "MON"),
    ("montserrat", "MOT"),
    ("mosambik", "MOZ"),
    ("mauritius", "MS"),
    ("malawi", "MW"),
    ("myanmar", "MYA"),
    ("norwegen", "N"),
    ("nauru", "NAU"),
    ("nepal", "NEP"),
    ("norfolkinseln", "NF"),
    ("nicaragua", "NIC"),
    ("niue", "NIU"),
    ("neukaledonien", "NKA"),
    ("niederlande", "NL"),
    ("niederländische antillen", "NLA"),
    ("nördliche marianen", "NMA"),
    ("neuseeland", "NZ"),
    ("portugal", "P"),
    ("panama", "PA"),
    ("palau", "PAL"),
    ("peru", "PE"),
    ("st. pierre und miquelon", "PIE"),
    ("pitcairninseln", "PIT"),
    ("pakistan", "PK"),
    ("polen", "PL"),
    ("papua-neuguinea", "PNG"),
    ("puerto rico", "PRI"),
    ("palästinensische gebiete", "PSE"),
    ("paraguay", "PY"),
    ("katar", "QAT"),
    ("argentinien", "RA"),
    ("botsuana", "RB"),
    ("zentralafrikanische republik", "RCA"),
    ("kongo", "RCB"),
    ("chile", "RCH"),
    ("réunion", "REU"),
    ("guinea", "RG"),
    ("haiti", "RH"),
    ("indonesien", "RI"),
    ("mauretanien", "RIM"),
    ("libanon", "RL"),
    ("madagaskar", "RM"),
    ("mali", "RMM"),
    ("niger", "RN"),
    ("rumänien", "RO"),
    ("korea, republik (südkorea)", "ROK"),
    ("uruguay", "ROU"),
    ("philippinen", "RP"),
    ("san marino", "RSM"),
    ("burundi", "RU"),
    ("russische föderation", "RUS"),
    ("ruanda", "RWA"),
    ("schweden", "S"),
    ("saudi-arabien", "SAU"),
    ("serbien und montenegro", "SCG"),
    ("st. kitts und nevis", "SCN"),
    ("sudan", "SDN"),
    ("singapur", "SGP"),
    ("svalbard und jan mayen", "SJ"),
    ("slowakei", "SK"),
    ("slowenien", "SLO"),
    ("suriname", "SME"),
    ("senegal", "SN"),
    ("salomonen", "SOL"),
    ("somalia", "SP"),
    ("serbien", "SRB"),
    ("südsudan", "SSD"),
    ("são tomé und príncipe", "STP"),
    ("namibia", "SWA"),
    ("eswatini", "SWZ"),
    ("seychellen", "SY"),
    ("syrien", "SYR"),
    ("st. martin (niederländischer teil)", "SX"),
    ("thailand", "T"),
    ("tadschikistan", "TAD"),
    ("französische süd- und antarktisgebiete", "TF"),
    ("togo", "TG"),
    ("china", "TJ"),
    ("tunesien", "TN"),
    ("tokelau", "TOK"),
    ("tonga", "TON"),
    ("türkei", "TR"),
    ("trinidad und tobago", "TT"),
    ("turks- und caicosinseln", "TUC"),
    ("turkmenistan", "TUR"),
    ("tuvalu", "TUV"),
    ("taiwan", "TWN"),
    ("ukraine", "UA"),
    ("vereinigte arabische emirate", "UAE"),
    ("navassa / kleinere amerikanische überseeinseln", "UM"),
    ("vereinigte staaten", "USA"),
    ("usbekistan", "USB"),
    ("vatikanstadt", "V"),
    ("vanuatu", "VAN"),
    ("vietnam", "VN"),
    ("gambia", "WAG"),
    ("sierra leone", "WAL"),
    ("nigeria", "WAN"),
    ("dominica", "WD"),
    ("wallis und futuna", "WF"),
    ("grenada", "WG"),
    ("st. lucia", "WL"),
    ("samoa", "WS"),
    ("st. vincent und die grenadinen", "WV"),
    ("jemen", "YEM"),
    ("jugoslawien", "YU"),
    ("venezuela", "YV"),
    ("sambia", "Z"),
    ("südafrika", "ZA"),
    ("kongo, demokratische republik", "ZRE"),
    ("simbabwe", "ZW"),
    ("deutschland", "0"),
];
