//! Raw tabular record model.
//!
//! A [`Record`] is one accepted data row of an input file, keyed by the
//! column names of that file's header. Values stay as the raw strings found
//! in the file; interpreting them is left to the report generators.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One data row as an ordered column-name → raw value mapping.
///
/// Column order follows the header of the file the row came from. When a
/// header repeats a column name the column keeps its first position and the
/// later value wins.
///
/// # Example
///
/// ```
/// use payout_report::models::Record;
///
/// let record = Record::from_row(
///     &["name", "department", "hours_worked"],
///     &["Alice Johnson", "Marketing", "160"],
/// );
/// assert_eq!(record.get("department"), Some("Marketing"));
/// assert_eq!(record.get("salary"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: IndexMap<String, String>,
}

impl Record {
    /// Builds a record by pairing header columns with row values.
    ///
    /// Extra values or extra columns are ignored; the reader only calls this
    /// once it has checked that both slices have the same length.
    pub fn from_row(header: &[&str], values: &[&str]) -> Self {
        header
            .iter()
            .zip(values.iter())
            .map(|(column, value)| (*column, *value))
            .collect()
    }

    /// Returns the raw value of a column, if the record has it.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut fields = IndexMap::new();
        for (column, value) in iter {
            fields.insert(column.into(), value.into());
        }
        Self { fields }
    }
}
