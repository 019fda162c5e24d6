//! Read-only classification lookup tables.
//!
//! The facet builder resolves classification codes to display labels through
//! these tables: LC top-level classes keyed by first letter, LC subclasses
//! keyed by the full class letters, Dewey hundreds and tens keyed by
//! zero-padded 3-digit prefixes, and government-document jurisdictions keyed
//! by location code. Tables are loaded once per process and shared immutably
//! across record processing; the built-in defaults follow the published
//! LC/Dewey outlines, and deployments can replace any table from
//! `.properties`-style text via [`parse_properties`].

use indexmap::{IndexMap, IndexSet};
use lazy_static::lazy_static;

use crate::error::{Result, ShelfkeyError};

/// Top segment of every LC classification facet path.
pub const LC_TOP_FACET: &str = "LC Classification";

/// Top segment of every Dewey classification facet path.
pub const DEWEY_TOP_FACET: &str = "Dewey Classification";

/// Top segment of every government-document facet path.
pub const GOV_DOC_TOP_FACET: &str = "Government Document";

/// Jurisdiction label when a gov-doc location is not in the table.
pub const GOV_DOC_UNKNOWN: &str = "Other";

/// LC top-level classes, keyed by first class letter.
const LC_TOP_LEVEL: &[(&str, &str)] = &[
    ("A", "General Works"),
    ("B", "Philosophy, Psychology, Religion"),
    ("C", "Auxiliary Sciences of History"),
    ("D", "World History"),
    ("E", "History of the Americas (General)"),
    ("F", "History of the Americas (Local)"),
    ("G", "Geography, Anthropology, Recreation"),
    ("H", "Social Sciences"),
    ("J", "Political Science"),
    ("K", "Law"),
    ("L", "Education"),
    ("M", "Music"),
    ("N", "Fine Arts"),
    ("P", "Language & Literature"),
    ("Q", "Science"),
    ("R", "Medicine"),
    ("S", "Agriculture"),
    ("T", "Technology"),
    ("U", "Military Science"),
    ("V", "Naval Science"),
    ("Z", "Bibliography, Library Science, Information Resources"),
];

/// LC subclasses, keyed by full class letters. E and F carry no subclasses;
/// codes absent here fall back to the raw letters in the facet path.
const LC_SUBCLASSES: &[(&str, &str)] = &[
    ("AC", "Collections, Series, Collected Works"),
    ("AE", "Encyclopedias"),
    ("AG", "Dictionaries & Other General Reference Works"),
    ("AI", "Indexes"),
    ("AM", "Museums, Collectors & Collecting"),
    ("AN", "Newspapers"),
    ("AP", "Periodicals"),
    ("AS", "Academies & Learned Societies"),
    ("AY", "Yearbooks, Almanacs, Directories"),
    ("AZ", "History of Scholarship & Learning"),
    ("BC", "Logic"),
    ("BD", "Speculative Philosophy"),
    ("BF", "Psychology"),
    ("BH", "Aesthetics"),
    ("BJ", "Ethics"),
    ("BL", "Religions, Mythology, Rationalism"),
    ("BM", "Judaism"),
    ("BP", "Islam, Bahaism, Theosophy"),
    ("BQ", "Buddhism"),
    ("BR", "Christianity"),
    ("BS", "The Bible"),
    ("BT", "Doctrinal Theology"),
    ("BV", "Practical Theology"),
    ("BX", "Christian Denominations"),
    ("CB", "History of Civilization"),
    ("CC", "Archaeology"),
    ("CD", "Diplomatics, Archives, Seals"),
    ("CE", "Technical Chronology, Calendar"),
    ("CJ", "Numismatics"),
    ("CN", "Inscriptions, Epigraphy"),
    ("CR", "Heraldry"),
    ("CS", "Genealogy"),
    ("CT", "Biography"),
    ("DA", "Great Britain"),
    ("DB", "Austria, Liechtenstein, Hungary, Czechoslovakia"),
    ("DC", "France, Andorra, Monaco"),
    ("DD", "Germany"),
    ("DE", "Greco-Roman World"),
    ("DF", "Greece"),
    ("DG", "Italy, Malta"),
    ("DH", "Low Countries, Benelux Countries"),
    ("DJ", "Netherlands (Holland)"),
    ("DK", "Russia, Soviet Union, Former Soviet Republics, Poland"),
    ("DL", "Northern Europe, Scandinavia"),
    ("DP", "Spain, Portugal"),
    ("DQ", "Switzerland"),
    ("DR", "Balkan Peninsula"),
    ("DS", "Asia"),
    ("DT", "Africa"),
    ("DU", "Oceania"),
    ("GA", "Mathematical Geography, Cartography"),
    ("GB", "Physical Geography"),
    ("GC", "Oceanography"),
    ("GE", "Environmental Sciences"),
    ("GF", "Human Ecology, Anthropogeography"),
    ("GN", "Anthropology"),
    ("GR", "Folklore"),
    ("GT", "Manners & Customs"),
    ("GV", "Recreation, Leisure"),
    ("HA", "Statistics"),
    ("HB", "Economic Theory, Demography"),
    ("HC", "Economic History & Conditions"),
    ("HD", "Industries, Land Use, Labor"),
    ("HE", "Transportation & Communications"),
    ("HF", "Commerce"),
    ("HG", "Finance"),
    ("HJ", "Public Finance"),
    ("HM", "Sociology (General)"),
    ("HN", "Social History & Conditions"),
    ("HQ", "The Family, Marriage, Women"),
    ("HS", "Societies"),
    ("HT", "Communities, Classes, Races"),
    ("HV", "Social Pathology, Social & Public Welfare, Criminology"),
    ("HX", "Socialism, Communism, Anarchism"),
    ("JA", "Political Science (General)"),
    ("JC", "Political Theory"),
    ("JF", "Political Institutions & Public Administration"),
    ("JK", "Political Institutions (United States)"),
    ("JL", "Political Institutions (America except United States)"),
    ("JN", "Political Institutions (Europe)"),
    ("JQ", "Political Institutions (Asia, Africa, Australia, Oceania)"),
    ("JS", "Local Government, Municipal Government"),
    ("JV", "Colonies & Colonization, Emigration & Immigration"),
    ("JX", "International Law"),
    ("JZ", "International Relations"),
    ("KD", "Law of the United Kingdom & Ireland"),
    ("KE", "Law of Canada"),
    ("KF", "Law of the U.S."),
    ("KG", "Law of Latin America"),
    ("KJV", "Law of France"),
    ("KK", "Law of Germany"),
    ("KKX", "Law of Turkey"),
    ("KZ", "Law of Nations"),
    ("LA", "History of Education"),
    ("LB", "Theory & Practice of Education"),
    ("LC", "Special Aspects of Education"),
    ("LD", "Individual Institutions (United States)"),
    ("ML", "Literature on Music"),
    ("MT", "Instruction & Study of Music"),
    ("NA", "Architecture"),
    ("NB", "Sculpture"),
    ("NC", "Drawing, Design, Illustration"),
    ("ND", "Painting"),
    ("NE", "Print Media"),
    ("NK", "Decorative Arts"),
    ("NX", "Arts in General"),
    ("PA", "Greek & Latin Language & Literature"),
    ("PB", "Modern European Languages"),
    ("PC", "Romance Languages"),
    ("PD", "Germanic & Scandinavian Languages"),
    ("PE", "English Language"),
    ("PF", "West Germanic Languages"),
    ("PG", "Slavic, Baltic, Albanian Languages & Literature"),
    ("PH", "Uralic & Basque Languages"),
    ("PJ", "Oriental Languages & Literatures"),
    ("PK", "Indo-Iranian Languages & Literatures"),
    ("PL", "Languages & Literatures of Eastern Asia, Africa, Oceania"),
    ("PM", "Hyperborean, Indian & Artificial Languages"),
    ("PN", "Literature (General)"),
    ("PQ", "French, Italian, Spanish & Portuguese Literature"),
    ("PR", "English Literature"),
    ("PS", "American Literature"),
    ("PT", "German, Dutch & Scandinavian Literature"),
    ("PZ", "Fiction & Juvenile Literature"),
    ("QA", "Mathematics"),
    ("QB", "Astronomy"),
    ("QC", "Physics"),
    ("QD", "Chemistry"),
    ("QE", "Geology"),
    ("QH", "Natural History & Biology"),
    ("QK", "Botany"),
    ("QL", "Zoology"),
    ("QM", "Human Anatomy"),
    ("QP", "Physiology"),
    ("QR", "Microbiology"),
    ("RA", "Public Aspects of Medicine"),
    ("RB", "Pathology"),
    ("RC", "Internal Medicine"),
    ("RD", "Surgery"),
    ("RE", "Ophthalmology"),
    ("RG", "Gynecology & Obstetrics"),
    ("RJ", "Pediatrics"),
    ("RK", "Dentistry"),
    ("RM", "Therapeutics, Pharmacology"),
    ("RS", "Pharmacy"),
    ("RT", "Nursing"),
    ("SB", "Plant Culture"),
    ("SD", "Forestry"),
    ("SF", "Animal Culture"),
    ("SH", "Aquaculture, Fisheries"),
    ("SK", "Hunting Sports"),
    ("TA", "Civil Engineering"),
    ("TC", "Hydraulic & Ocean Engineering"),
    ("TD", "Environmental Technology, Sanitary Engineering"),
    ("TE", "Highway Engineering"),
    ("TF", "Railroad Engineering"),
    ("TG", "Bridge Engineering"),
    ("TH", "Building Construction"),
    ("TJ", "Mechanical Engineering & Machinery"),
    ("TK", "Electrical Engineering, Electronics, Nuclear Engineering"),
    ("TL", "Motor Vehicles, Aeronautics, Astronautics"),
    ("TN", "Mining Engineering, Metallurgy"),
    ("TP", "Chemical Technology"),
    ("TR", "Photography"),
    ("TS", "Manufactures"),
    ("TT", "Handicrafts & Arts & Crafts"),
    ("TX", "Home Economics"),
    ("UA", "Armies: Organization, Distribution, Military Situation"),
    ("UB", "Military Administration"),
    ("UC", "Maintenance & Transportation"),
    ("UD", "Infantry"),
    ("UE", "Cavalry, Armor"),
    ("UF", "Artillery"),
    ("UG", "Military Engineering, Air Forces"),
    ("UH", "Other Military Services"),
    ("VA", "Navies: Organization, Distribution, Naval Situation"),
    ("VB", "Naval Administration"),
    ("VK", "Navigation, Merchant Marine"),
    ("VM", "Naval Architecture, Shipbuilding, Marine Engineering"),
    ("ZA", "Information Resources"),
];

/// Dewey hundreds, keyed by zero-padded hundreds prefix.
const DEWEY_HUNDREDS: &[(&str, &str)] = &[
    ("000", "Computer Science, Information & General Works"),
    ("100", "Philosophy & Psychology"),
    ("200", "Religion"),
    ("300", "Social Sciences"),
    ("400", "Language"),
    ("500", "Science"),
    ("600", "Technology"),
    ("700", "Arts & Recreation"),
    ("800", "Literature"),
    ("900", "History & Geography"),
];

/// Dewey tens, keyed by zero-padded tens prefix.
const DEWEY_TENS: &[(&str, &str)] = &[
    ("000", "Computer Science, Information & General Works"),
    ("010", "Bibliographies"),
    ("020", "Library & Information Sciences"),
    ("030", "Encyclopedias & Books of Facts"),
    ("040", "Unassigned"),
    ("050", "Magazines, Journals & Serials"),
    ("060", "General Organization & Museology"),
    ("070", "News Media, Journalism & Publishing"),
    ("080", "Quotations"),
    ("090", "Manuscripts & Rare Books"),
    ("100", "Philosophy"),
    ("110", "Metaphysics"),
    ("120", "Epistemology"),
    ("130", "Parapsychology & Occultism"),
    ("140", "Philosophical Schools of Thought"),
    ("150", "Psychology"),
    ("160", "Logic"),
    ("170", "Ethics"),
    ("180", "Ancient, Medieval, Oriental Philosophy"),
    ("190", "Modern Western Philosophy"),
    ("200", "Religion"),
    ("210", "Natural Theology"),
    ("220", "Bible"),
    ("230", "Christianity & Christian Theology"),
    ("240", "Christian Practice & Observance"),
    ("250", "Christian Pastoral Practice & Religious Orders"),
    ("260", "Social & Ecclesiastical Theology"),
    ("270", "History of Christianity"),
    ("280", "Christian Denominations"),
    ("290", "Other Religions"),
    ("300", "Social Sciences, Sociology & Anthropology"),
    ("310", "Statistics"),
    ("320", "Political Science"),
    ("330", "Economics"),
    ("340", "Law"),
    ("350", "Public Administration & Military Science"),
    ("360", "Social Problems & Social Services"),
    ("370", "Education"),
    ("380", "Commerce, Communications & Transportation"),
    ("390", "Customs, Etiquette & Folklore"),
    ("400", "Language"),
    ("410", "Linguistics"),
    ("420", "English & Old English Languages"),
    ("430", "German & Related Languages"),
    ("440", "French & Related Languages"),
    ("450", "Italian, Romanian & Related Languages"),
    ("460", "Spanish & Portuguese Languages"),
    ("470", "Latin & Italic Languages"),
    ("480", "Classical & Modern Greek Languages"),
    ("490", "Other Languages"),
    ("500", "Science"),
    ("510", "Mathematics"),
    ("520", "Astronomy"),
    ("530", "Physics"),
    ("540", "Chemistry"),
    ("550", "Earth Sciences"),
    ("560", "Fossils & Prehistoric Life"),
    ("570", "Life Sciences; Biology"),
    ("580", "Plants (Botany)"),
    ("590", "Animals (Zoology)"),
    ("600", "Technology"),
    ("610", "Medicine & Health"),
    ("620", "Engineering"),
    ("630", "Agriculture"),
    ("640", "Home & Family Management"),
    ("650", "Management & Public Relations"),
    ("660", "Chemical Engineering"),
    ("670", "Manufacturing"),
    ("680", "Manufacture for Specific Uses"),
    ("690", "Building & Construction"),
    ("700", "Arts"),
    ("710", "Landscaping & Area Planning"),
    ("720", "Architecture"),
    ("730", "Sculpture, Ceramics & Metalwork"),
    ("740", "Drawing & Decorative Arts"),
    ("750", "Painting"),
    ("760", "Graphic Arts"),
    ("770", "Photography"),
    ("780", "Music"),
    ("790", "Sports, Games & Entertainment"),
    ("800", "Literature, Rhetoric & Criticism"),
    ("810", "American Literature in English"),
    ("820", "English & Old English Literatures"),
    ("830", "German & Related Literatures"),
    ("840", "French & Related Literatures"),
    ("850", "Italian, Romanian & Related Literatures"),
    ("860", "Spanish & Portuguese Literatures"),
    ("870", "Latin & Italic Literatures"),
    ("880", "Classical & Modern Greek Literatures"),
    ("890", "Other Literatures"),
    ("900", "History"),
    ("910", "Geography & Travel"),
    ("920", "Biography & Genealogy"),
    ("930", "History of Ancient World (to ca. 499)"),
    ("940", "History of Europe"),
    ("950", "History of Asia"),
    ("960", "General History of Africa"),
    ("970", "History of North America"),
    ("980", "History of South America"),
    ("990", "History of Other Areas"),
];

/// Government-document locations and their jurisdiction labels.
const GOV_DOC_JURISDICTIONS: &[(&str, &str)] = &[
    ("BRIT-DOCS", "British"),
    ("CALIF-DOCS", "California"),
    ("FED-DOCS", "Federal"),
    ("INTL-DOCS", "International"),
    ("SSRC-DOCS", "Federal"),
    ("SSRC-FICHE", "Federal"),
    ("SSRC-NWDOC", "Federal"),
];

/// Locations indicating an item is missing or lost.
const MISSING_LOCATIONS: &[&str] = &["MISSING", "LOST-ASSUM", "LOST-CLAIM", "LOST-PAID"];

/// The classification lookup tables, loaded once and shared read-only.
#[derive(Debug, Clone)]
pub struct ClassificationTables {
    /// First LC class letter → top-level label.
    pub lc_top_level: IndexMap<String, String>,
    /// Full LC class letters → subclass label.
    pub lc_subclasses: IndexMap<String, String>,
    /// Zero-padded hundreds prefix → label.
    pub dewey_hundreds: IndexMap<String, String>,
    /// Zero-padded tens prefix → label.
    pub dewey_tens: IndexMap<String, String>,
    /// Gov-doc location code → jurisdiction label; key presence also marks
    /// the location as a gov-doc location.
    pub gov_doc_jurisdictions: IndexMap<String, String>,
    /// Location codes for missing/lost items.
    pub missing_locations: IndexSet<String>,
}

impl Default for ClassificationTables {
    fn default() -> Self {
        ClassificationTables {
            lc_top_level: to_map(LC_TOP_LEVEL),
            lc_subclasses: to_map(LC_SUBCLASSES),
            dewey_hundreds: to_map(DEWEY_HUNDREDS),
            dewey_tens: to_map(DEWEY_TENS),
            gov_doc_jurisdictions: to_map(GOV_DOC_JURISDICTIONS),
            missing_locations: MISSING_LOCATIONS
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
        }
    }
}

fn to_map(pairs: &[(&str, &str)]) -> IndexMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

lazy_static! {
    static ref DEFAULT_TABLES: ClassificationTables = ClassificationTables::default();
}

/// Shared built-in tables.
#[must_use]
pub fn default_tables() -> &'static ClassificationTables {
    &DEFAULT_TABLES
}

impl ClassificationTables {
    /// Top-level label for the first letter of an LC class.
    #[must_use]
    pub fn lc_top_label(&self, first_letter: char) -> Option<&str> {
        self.lc_top_level
            .get(first_letter.to_ascii_uppercase().to_string().as_str())
            .map(String::as_str)
    }

    /// Subclass label for the full LC class letters.
    #[must_use]
    pub fn lc_subclass_label(&self, letters: &str) -> Option<&str> {
        self.lc_subclasses
            .get(letters.to_uppercase().as_str())
            .map(String::as_str)
    }

    /// Hundreds label for a zero-padded Dewey prefix like `"500"`.
    #[must_use]
    pub fn dewey_hundreds_label(&self, prefix: &str) -> Option<&str> {
        self.dewey_hundreds.get(prefix).map(String::as_str)
    }

    /// Tens label for a zero-padded Dewey prefix like `"550"`.
    #[must_use]
    pub fn dewey_tens_label(&self, prefix: &str) -> Option<&str> {
        self.dewey_tens.get(prefix).map(String::as_str)
    }

    /// True when the location code marks a government-document collection.
    #[must_use]
    pub fn is_gov_doc_location(&self, location: &str) -> bool {
        self.gov_doc_jurisdictions.contains_key(location)
    }

    /// Jurisdiction label for a location, defaulting to [`GOV_DOC_UNKNOWN`].
    #[must_use]
    pub fn jurisdiction_label(&self, location: &str) -> &str {
        self.gov_doc_jurisdictions
            .get(location)
            .map_or(GOV_DOC_UNKNOWN, String::as_str)
    }
}

/// Parse `.properties`-style `KEY = value` lines into an ordered map.
///
/// Blank lines and `#` comments are skipped. Keys are trimmed and
/// upper-cased; values are trimmed and kept verbatim.
///
/// # Errors
///
/// [`ShelfkeyError::MalformedTableLine`] for a line without `=`, and
/// [`ShelfkeyError::EmptyTableKey`] when the key side is empty.
pub fn parse_properties(text: &str) -> Result<IndexMap<String, String>> {
    let mut map = IndexMap::new();
    for (idx, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            return Err(ShelfkeyError::MalformedTableLine {
                line: idx + 1,
                text: line.to_string(),
            });
        };
        let key = key.trim();
        if key.is_empty() {
            return Err(ShelfkeyError::EmptyTableKey { line: idx + 1 });
        }
        map.insert(key.to_uppercase(), value.trim().to_string());
    }
    Ok(map)
}

/// Parse a `.properties`-style list (keys only, values ignored) into a set.
///
/// # Errors
///
/// Same conditions as [`parse_properties`].
pub fn parse_properties_set(text: &str) -> Result<IndexSet<String>> {
    Ok(parse_properties(text)?.into_keys().collect())
}
