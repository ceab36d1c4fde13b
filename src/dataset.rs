use std::path::Path;

use rust_embed::RustEmbed;
use thiserror::Error;

/// One named reference color. Names may repeat and triples need not be
/// distinct; row order is the tie-break order for matching.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorEntry {
    pub name: String,
    pub rgb: [u8; 3],
}

/// Ordered, read-only list of reference colors. Non-empty by construction.
#[derive(Clone, Debug)]
pub struct Dataset {
    entries: Vec<ColorEntry>,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("line {line}: expected 4 comma-separated fields (color_name,R,G,B)")]
    FieldCount { line: usize },
    #[error("line {line}: empty color name")]
    EmptyName { line: usize },
    #[error("line {line}: {value:?} is not an integer in 0..=255")]
    BadChannel { line: usize, value: String },
    #[error("dataset has no color rows")]
    Empty,
    #[error("embedded dataset asset is missing")]
    MissingAsset,
}

impl Dataset {
    /// Parse `color_name,R,G,B` rows. A header row on line 1 is tolerated,
    /// blank lines are skipped, anything else malformed is an error.
    pub fn from_csv(text: &str) -> Result<Self, LoadError> {
        let mut entries = Vec::new();
        for (i, raw) in text.lines().enumerate() {
            let line = i + 1;
            let row = raw.trim();
            if row.is_empty() {
                continue;
            }
            let fields: Vec<&str> = row.split(',').map(str::trim).collect();
            if fields.len() != 4 {
                return Err(LoadError::FieldCount { line });
            }
            let channels: Result<Vec<u8>, _> = fields[1..].iter().map(|f| f.parse::<u8>()).collect();
            let channels = match channels {
                Ok(c) => c,
                Err(_) => {
                    // line 1 with non-numeric channel fields is the header;
                    // a numeric but out-of-range value is still an error
                    let numeric = fields[1..].iter().all(|f| f.parse::<i64>().is_ok());
                    if line == 1 && !numeric {
                        continue;
                    }
                    let bad = fields[1..]
                        .iter()
                        .find(|f| f.parse::<u8>().is_err())
                        .unwrap_or(&"")
                        .to_string();
                    return Err(LoadError::BadChannel { line, value: bad });
                }
            };
            if fields[0].is_empty() {
                return Err(LoadError::EmptyName { line });
            }
            entries.push(ColorEntry {
                name: fields[0].to_string(),
                rgb: [channels[0], channels[1], channels[2]],
            });
        }
        if entries.is_empty() {
            return Err(LoadError::Empty);
        }
        Ok(Self { entries })
    }

    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        let text = std::fs::read_to_string(path).map_err(|e| LoadError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::from_csv(&text)
    }

    pub fn entries(&self) -> &[ColorEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // always false: every constructor rejects zero rows
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(RustEmbed)]
#[folder = "assets"]
struct Assets;

/// Built-in palette shipped inside the binary (the CSS named colors).
pub fn load_embedded() -> Result<Dataset, LoadError> {
    let file = Assets::get("colors.csv").ok_or(LoadError::MissingAsset)?;
    Dataset::from_csv(&String::from_utf8_lossy(file.data.as_ref()))
}
