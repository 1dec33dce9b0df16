use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::model::{
    coerce_numeric, display_name, normalize_yes_no, CandidateRecord, CandidateTable,
    NumericField, COL_ACTIVELY_LOOKING, COL_CITY, COL_FIRST_NAME, COL_GAMING_FILMS,
    COL_LAST_COMPANY, COL_LAST_NAME, COL_LEVEL, COL_TITLE,
};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("file is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    #[error("CSV row {row}: {source}")]
    Csv {
        row: usize,
        #[source]
        source: csv::Error,
    },

    #[error("missing required column '{0}'")]
    MissingColumn(String),

    #[error("CSV row {row}: found {found} fields but the header has {expected}")]
    TooManyFields {
        row: usize,
        found: usize,
        expected: usize,
    },
}

/// Character encoding of the input file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextEncoding {
    /// ISO-8859-1: every byte is the code point of the same value.
    #[default]
    Latin1,
    Utf8,
}

impl TextEncoding {
    pub fn decode(self, bytes: Vec<u8>) -> Result<String, LoadError> {
        match self {
            TextEncoding::Latin1 => Ok(bytes.into_iter().map(char::from).collect()),
            TextEncoding::Utf8 => {
                let text = String::from_utf8(bytes)?;
                Ok(match text.strip_prefix('\u{feff}') {
                    Some(rest) => rest.to_string(),
                    None => text,
                })
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load and normalize the candidate file at `path`.
pub fn load_file(path: &Path, encoding: TextEncoding) -> Result<CandidateTable, LoadError> {
    let bytes = std::fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let text = encoding.decode(bytes)?;
    let table = parse_table(&text)?;

    log::info!(
        "Loaded {} candidates from {} ({} cities, {} levels)",
        table.len(),
        path.display(),
        table.cities.len(),
        table.levels.len()
    );
    Ok(table)
}

/// Parse already-decoded text into a [`CandidateTable`].
///
/// The delimiter is sniffed from the header line (comma, tab or semicolon).
/// Rows shorter than the header read their missing trailing cells as empty.
/// Cells of the numeric columns that do not parse become missing values;
/// the Yes/No columns are normalized with [`normalize_yes_no`].
pub fn parse_table(text: &str) -> Result<CandidateTable, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(sniff_delimiter(text))
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader
        .headers()
        .map_err(|source| LoadError::Csv { row: 0, source })?
        .clone();
    let columns = ColumnIndex::resolve(&headers)?;

    let mut records = Vec::new();
    let mut coerced = 0usize;

    for (row_no, result) in reader.records().enumerate() {
        let row = result.map_err(|source| LoadError::Csv {
            row: row_no + 1,
            source,
        })?;
        // Short rows are padded with empty cells; extra cells have no column.
        if row.len() > headers.len() {
            return Err(LoadError::TooManyFields {
                row: row_no + 1,
                found: row.len(),
                expected: headers.len(),
            });
        }
        records.push(columns.candidate(&row, &mut coerced));
    }

    if coerced > 0 {
        log::debug!("{coerced} non-numeric cells treated as missing");
    }

    Ok(CandidateTable::from_records(records))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Pick the most frequent of comma, tab and semicolon on the first line.
fn sniff_delimiter(text: &str) -> u8 {
    let header = text.lines().next().unwrap_or("");
    let mut best = (b',', header.matches(',').count());
    for candidate in [b'\t', b';'] {
        let n = header.matches(candidate as char).count();
        if n > best.1 {
            best = (candidate, n);
        }
    }
    best.0
}

fn non_empty(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}

/// Positions of the required columns in the header row.
struct ColumnIndex {
    first_name: usize,
    last_name: usize,
    city: usize,
    last_company: usize,
    numeric: [usize; NumericField::COUNT],
    actively_looking: usize,
    gaming_films: usize,
    level: usize,
    title: usize,
}

impl ColumnIndex {
    fn resolve(headers: &csv::StringRecord) -> Result<Self, LoadError> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| LoadError::MissingColumn(name.to_string()))
        };

        let first_name = find(COL_FIRST_NAME)?;
        let last_name = find(COL_LAST_NAME)?;
        let city = find(COL_CITY)?;
        let last_company = find(COL_LAST_COMPANY)?;

        let mut numeric = [0usize; NumericField::COUNT];
        for field in NumericField::ALL {
            numeric[field.index()] = find(field.column())?;
        }

        Ok(ColumnIndex {
            first_name,
            last_name,
            city,
            last_company,
            numeric,
            actively_looking: find(COL_ACTIVELY_LOOKING)?,
            gaming_films: find(COL_GAMING_FILMS)?,
            level: find(COL_LEVEL)?,
            title: find(COL_TITLE)?,
        })
    }

    fn candidate(&self, row: &csv::StringRecord, coerced: &mut usize) -> CandidateRecord {
        let cell = |idx: usize| row.get(idx).unwrap_or("");

        let first_name = cell(self.first_name).to_string();
        let last_name = cell(self.last_name).to_string();

        let mut numeric = [None; NumericField::COUNT];
        for (slot, &idx) in numeric.iter_mut().zip(&self.numeric) {
            let raw = cell(idx);
            *slot = coerce_numeric(raw);
            if slot.is_none() && !raw.trim().is_empty() {
                *coerced += 1;
            }
        }

        CandidateRecord {
            display_name: display_name(&first_name, &last_name),
            first_name,
            last_name,
            city: non_empty(cell(self.city)),
            last_company: non_empty(cell(self.last_company)),
            level: non_empty(cell(self.level)),
            title: cell(self.title).trim().to_string(),
            numeric,
            actively_looking: normalize_yes_no(cell(self.actively_looking)),
            gaming_films: normalize_yes_no(cell(self.gaming_films)),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::data::model::YesNo;

    const HEADER: &str = "First Name,Last Name,City,Last Company,Total IT Experience,\
        Troubleshooting Experience,\"Microsoft Windows (desktop & server, including Active Directory)\",\
        Network management,Microsoft 365,Actively Looking,Gaming/Films Experience,Level,Title";

    fn csv_with(rows: &[&str]) -> String {
        let mut text = String::from(HEADER);
        for row in rows {
            text.push('\n');
            text.push_str(row);
        }
        text.push('\n');
        text
    }

    #[test]
    fn parses_and_normalizes_rows() {
        let text = csv_with(&[
            " Ana ,  Lopez,Austin,Acme,5,3,7,6,8,yes,N,Tier 1,Help Desk",
            "Bo,Chen,Dallas,,twenty,,4.5,,x,TRUE,1,,Support Engineer",
        ]);
        let table = parse_table(&text).unwrap();
        assert_eq!(table.len(), 2);

        let a = &table.records[0];
        assert_eq!(a.display_name, "Ana Lopez");
        assert_eq!(a.city.as_deref(), Some("Austin"));
        assert_eq!(a.value(NumericField::TotalItExperience), Some(5.0));
        assert_eq!(a.value(NumericField::Windows), Some(7.0));
        assert_eq!(a.actively_looking, YesNo::Yes);
        assert_eq!(a.gaming_films, YesNo::No);
        assert_eq!(a.level.as_deref(), Some("Tier 1"));

        let b = &table.records[1];
        assert_eq!(b.last_company, None);
        assert_eq!(b.value(NumericField::TotalItExperience), None);
        assert_eq!(b.value(NumericField::TroubleshootingExperience), None);
        assert_eq!(b.value(NumericField::Windows), Some(4.5));
        assert_eq!(b.value(NumericField::Microsoft365), None);
        assert_eq!(b.actively_looking, YesNo::Yes);
        assert_eq!(b.gaming_films, YesNo::Yes);
        assert_eq!(b.level, None);

        assert_eq!(table.cities.len(), 2);
        assert_eq!(table.companies.len(), 1);
    }

    #[test]
    fn missing_column_is_an_error() {
        let text = "First Name,Last Name,City\nA,B,C\n";
        match parse_table(text) {
            Err(LoadError::MissingColumn(col)) => assert_eq!(col, "Last Company"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn short_row_reads_trailing_cells_as_empty() {
        let text = csv_with(&[
            "Ana,Lopez,Austin,Acme,5,3,7,6,8,yes,no",
            "Bo,Chen,Dallas",
        ]);
        let table = parse_table(&text).unwrap();
        assert_eq!(table.len(), 2);

        let a = &table.records[0];
        assert_eq!(a.display_name, "Ana Lopez");
        assert_eq!(a.value(NumericField::Microsoft365), Some(8.0));
        assert_eq!(a.actively_looking, YesNo::Yes);
        assert_eq!(a.level, None);
        assert_eq!(a.title, "");

        let b = &table.records[1];
        assert_eq!(b.city.as_deref(), Some("Dallas"));
        assert_eq!(b.last_company, None);
        assert_eq!(b.value(NumericField::TotalItExperience), None);
        assert_eq!(b.actively_looking, YesNo::No);
        assert_eq!(b.gaming_films, YesNo::No);
    }

    #[test]
    fn long_row_is_an_error() {
        let text = csv_with(&[
            "Ana,Lopez,Austin,Acme,5,3,7,6,8,yes,no,Tier 1,Agent",
            "Bo,Chen,Dallas,Acme,5,3,7,6,8,yes,no,Tier 1,Agent,extra",
        ]);
        match parse_table(&text) {
            Err(LoadError::TooManyFields {
                row,
                found,
                expected,
            }) => assert_eq!((row, found, expected), (2, 14, 13)),
            other => panic!("expected TooManyFields, got {other:?}"),
        }
    }

    #[test]
    fn header_only_file_is_empty_table() {
        let table = parse_table(&csv_with(&[])).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn sniffs_tab_delimiter() {
        let header = HEADER.replace("\"", "").replace(",", "\t");
        // The Windows header contains a comma of its own; turn it back.
        let header = header.replace("server\t including", "server, including");
        let text = format!("{header}\nAna\tLopez\tAustin\tAcme\t5\t3\t7\t6\t8\tno\tyes\tTier 1\tAgent\n");
        assert_eq!(sniff_delimiter(&text), b'\t');

        let table = parse_table(&text).unwrap();
        assert_eq!(table.records[0].value(NumericField::Microsoft365), Some(8.0));
        assert_eq!(table.records[0].gaming_films, YesNo::Yes);
    }

    #[test]
    fn sniff_defaults_to_comma() {
        assert_eq!(sniff_delimiter(""), b',');
        assert_eq!(sniff_delimiter("single"), b',');
        assert_eq!(sniff_delimiter("a;b;c\n1,2"), b';');
    }

    #[test]
    fn latin1_decodes_every_byte() {
        let text = TextEncoding::Latin1
            .decode(vec![b'J', b'o', b's', 0xE9, b' ', 0xD1])
            .unwrap();
        assert_eq!(text, "José Ñ");
    }

    #[test]
    fn utf8_rejects_invalid_and_strips_bom() {
        assert!(matches!(
            TextEncoding::Utf8.decode(vec![0xE9, b'a']),
            Err(LoadError::Encoding(_))
        ));
        let text = TextEncoding::Utf8
            .decode("\u{feff}First Name".as_bytes().to_vec())
            .unwrap();
        assert_eq!(text, "First Name");
    }

    #[test]
    fn load_file_missing_path() {
        let err = load_file(Path::new("does/not/exist.csv"), TextEncoding::Latin1).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("exist.csv"));
    }

    #[test]
    fn load_file_reads_latin1_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let mut bytes = csv_with(&[]).into_bytes();
        bytes.extend_from_slice(b"Jos\xe9,Pe\xf1a,Quer\xe9taro,Acme,12,4,3,2,1,y,no,Tier 2,Agent\n");
        file.write_all(&bytes).unwrap();

        let table = load_file(file.path(), TextEncoding::Latin1).unwrap();
        assert_eq!(table.records[0].display_name, "José Peña");
        assert_eq!(table.records[0].city.as_deref(), Some("Querétaro"));
    }
}
