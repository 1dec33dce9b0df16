use std::collections::BTreeSet;
use std::fmt;

// ---------------------------------------------------------------------------
// Column names of the source file
// ---------------------------------------------------------------------------

pub const COL_FIRST_NAME: &str = "First Name";
pub const COL_LAST_NAME: &str = "Last Name";
pub const COL_CITY: &str = "City";
pub const COL_LAST_COMPANY: &str = "Last Company";
pub const COL_ACTIVELY_LOOKING: &str = "Actively Looking";
pub const COL_GAMING_FILMS: &str = "Gaming/Films Experience";
pub const COL_LEVEL: &str = "Level";
pub const COL_TITLE: &str = "Title";

// ---------------------------------------------------------------------------
// YesNo – normalized binary label
// ---------------------------------------------------------------------------

/// Canonical binary label for the free-text Yes/No columns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum YesNo {
    Yes,
    #[default]
    No,
}

impl YesNo {
    pub const ALL: [YesNo; 2] = [YesNo::Yes, YesNo::No];

    pub fn as_str(self) -> &'static str {
        match self {
            YesNo::Yes => "Yes",
            YesNo::No => "No",
        }
    }
}

impl fmt::Display for YesNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map free text onto [`YesNo`].
///
/// Case-insensitive match of the trimmed text against `yes`, `y`, `true`
/// and `1`; everything else (including empty cells) is `No`.
pub fn normalize_yes_no(raw: &str) -> YesNo {
    match raw.trim().to_lowercase().as_str() {
        "yes" | "y" | "true" | "1" => YesNo::Yes,
        _ => YesNo::No,
    }
}

/// Join first and last name, collapsing every whitespace run to one space.
pub fn display_name(first: &str, last: &str) -> String {
    first
        .split_whitespace()
        .chain(last.split_whitespace())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lenient numeric coercion: anything that is not a finite number is missing.
pub fn coerce_numeric(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

// ---------------------------------------------------------------------------
// NumericField – the five range-filterable columns
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NumericField {
    TotalItExperience,
    TroubleshootingExperience,
    Windows,
    NetworkManagement,
    Microsoft365,
}

impl NumericField {
    pub const COUNT: usize = 5;

    pub const ALL: [NumericField; Self::COUNT] = [
        NumericField::TotalItExperience,
        NumericField::TroubleshootingExperience,
        NumericField::Windows,
        NumericField::NetworkManagement,
        NumericField::Microsoft365,
    ];

    /// Header name in the source file.
    pub fn column(self) -> &'static str {
        match self {
            NumericField::TotalItExperience => "Total IT Experience",
            NumericField::TroubleshootingExperience => "Troubleshooting Experience",
            NumericField::Windows => {
                "Microsoft Windows (desktop & server, including Active Directory)"
            }
            NumericField::NetworkManagement => "Network management",
            NumericField::Microsoft365 => "Microsoft 365",
        }
    }

    /// Short label for sliders and table headers.
    pub fn label(self) -> &'static str {
        match self {
            NumericField::TotalItExperience => "Total IT Experience",
            NumericField::TroubleshootingExperience => "Troubleshooting Experience",
            NumericField::Windows => "Microsoft Windows",
            NumericField::NetworkManagement => "Network management",
            NumericField::Microsoft365 => "Microsoft 365",
        }
    }

    /// Upper slider bound used when a column has no values at all.
    pub fn fallback_ceiling(self) -> f64 {
        match self {
            NumericField::TotalItExperience | NumericField::TroubleshootingExperience => 35.0,
            NumericField::Windows | NumericField::NetworkManagement | NumericField::Microsoft365 => {
                10.0
            }
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

// ---------------------------------------------------------------------------
// CandidateRecord – one row of the file
// ---------------------------------------------------------------------------

/// A single candidate (one row of the source file) after normalization.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CandidateRecord {
    pub first_name: String,
    pub last_name: String,
    /// Whitespace-normalized "First Last".
    pub display_name: String,
    pub city: Option<String>,
    pub last_company: Option<String>,
    pub level: Option<String>,
    pub title: String,
    /// Indexed by [`NumericField::index`]; `None` is a missing value.
    pub numeric: [Option<f64>; NumericField::COUNT],
    pub actively_looking: YesNo,
    pub gaming_films: YesNo,
}

impl CandidateRecord {
    pub fn value(&self, field: NumericField) -> Option<f64> {
        self.numeric[field.index()]
    }

    pub fn set_value(&mut self, field: NumericField, value: Option<f64>) {
        self.numeric[field.index()] = value;
    }
}

// ---------------------------------------------------------------------------
// CandidateTable – the complete loaded dataset
// ---------------------------------------------------------------------------

/// All loaded candidates plus the sorted option lists for the dropdowns.
#[derive(Debug, Clone, Default)]
pub struct CandidateTable {
    pub records: Vec<CandidateRecord>,
    pub cities: BTreeSet<String>,
    pub companies: BTreeSet<String>,
    pub levels: BTreeSet<String>,
}

impl CandidateTable {
    /// Build the option lists from the loaded records.
    pub fn from_records(records: Vec<CandidateRecord>) -> Self {
        let mut cities = BTreeSet::new();
        let mut companies = BTreeSet::new();
        let mut levels = BTreeSet::new();

        for rec in &records {
            if let Some(c) = &rec.city {
                cities.insert(c.clone());
            }
            if let Some(c) = &rec.last_company {
                companies.insert(c.clone());
            }
            if let Some(l) = &rec.level {
                levels.insert(l.clone());
            }
        }

        CandidateTable {
            records,
            cities,
            companies,
            levels,
        }
    }

    /// Largest non-missing value of a numeric column.
    pub fn max_value(&self, field: NumericField) -> Option<f64> {
        self.records
            .iter()
            .filter_map(|r| r.value(field))
            .fold(None, |acc, v| Some(acc.map_or(v, |a: f64| a.max(v))))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
