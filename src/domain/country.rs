//! Country code reference table

use crate::domain::{Result, ShiplabelError};
use std::collections::HashMap;
use std::io::Read;

const NAME_COLUMN: &str = "Name";
const CODE_COLUMN: &str = "Code";

/// Mapping from two-letter country code to display name
///
/// Loaded fresh on every run; never cached.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountryReference {
    names: HashMap<String, String>,
}

impl CountryReference {
    /// Parse the reference table from CSV
    ///
    /// The CSV must have a header row containing `Name` and `Code`; other
    /// columns are ignored. When a code appears twice the first name wins.
    ///
    /// # Examples
    ///
    /// ```
    /// use shiplabel::domain::CountryReference;
    ///
    /// let csv = "Name,Code\nGermany,DE\nFrance,FR\n";
    /// let reference = CountryReference::from_csv_reader(csv.as_bytes()).unwrap();
    /// assert_eq!(reference.name_for("DE"), Some("Germany"));
    /// assert_eq!(reference.name_for("XX"), None);
    /// ```
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::Headers)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let name_idx = column_index(&headers, NAME_COLUMN)?;
        let code_idx = column_index(&headers, CODE_COLUMN)?;

        let mut names = HashMap::new();
        for record in csv_reader.records() {
            let record = record?;
            let (Some(name), Some(code)) = (record.get(name_idx), record.get(code_idx)) else {
                continue;
            };
            if names.contains_key(code) {
                tracing::debug!(code = %code, name = %name, "Ignoring duplicate country code");
                continue;
            }
            names.insert(code.to_string(), name.to_string());
        }

        Ok(Self { names })
    }

    /// Display name for a country code
    pub fn name_for(&self, code: &str) -> Option<&str> {
        self.names.get(code).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<C, N> FromIterator<(C, N)> for CountryReference
where
    C: Into<String>,
    N: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (C, N)>>(iter: I) -> Self {
        let mut names = HashMap::new();
        for (code, name) in iter {
            names.entry(code.into()).or_insert_with(|| name.into());
        }
        Self { names }
    }
}

fn column_index(headers: &csv::StringRecord, column: &str) -> Result<usize> {
    headers.iter().position(|h| h == column).ok_or_else(|| {
        ShiplabelError::CountryReference(format!("CSV header is missing the '{column}' column"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ignores_extra_columns() {
        let csv = "Code,Region,Name\nDE,Europe,Germany\nUS,Americas,United States\n";
        let reference = CountryReference::from_csv_reader(csv.as_bytes()).unwrap();
        assert_eq!(reference.len(), 2);
        assert_eq!(reference.name_for("US"), Some("United States"));
    }

    #[test]
    fn test_parse_quoted_names() {
        let csv = "Name,Code\n\"Korea, Republic of\",KR\n";
        let reference = CountryReference::from_csv_reader(csv.as_bytes()).unwrap();
        assert_eq!(reference.name_for("KR"), Some("Korea, Republic of"));
    }

    #[test]
    fn test_missing_header_is_error() {
        let csv = "Country,ISO\nGermany,DE\n";
        let err = CountryReference::from_csv_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, ShiplabelError::CountryReference(_)));
        assert!(err.to_string().contains("Name"));
    }

    #[test]
    fn test_first_duplicate_wins() {
        let csv = "Name,Code\nGermany,DE\nDeutschland,DE\n";
        let reference = CountryReference::from_csv_reader(csv.as_bytes()).unwrap();
        assert_eq!(reference.len(), 1);
        assert_eq!(reference.name_for("DE"), Some("Germany"));
    }

    #[test]
    fn test_from_iterator() {
        let reference: CountryReference = [("DE", "Germany"), ("FR", "France")].into_iter().collect();
        assert_eq!(reference.name_for("FR"), Some("France"));
        assert!(!reference.is_empty());
    }
}
