use serde::{Deserialize, Serialize};

/// Tabular data exactly as loaded: header names plus string cells, row order kept.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RawTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Builds a table, padding short rows with empty cells and dropping cells
    /// past the last header.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, String::new());
                row
            })
            .collect();

        Self { headers, rows }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_are_squared_to_header_width() {
        let table = RawTable::new(
            vec!["Name".to_string(), "Age".to_string()],
            vec![
                vec!["Ann".to_string()],
                vec!["Bo".to_string(), "30".to_string(), "extra".to_string()],
            ],
        );

        assert_eq!(table.len(), 2);
        assert_eq!(table.cell(0, 1), Some(""));
        assert_eq!(table.rows()[1], vec!["Bo".to_string(), "30".to_string()]);
        assert_eq!(table.column_index("Age"), Some(1));
        assert_eq!(table.column_index("Degree"), None);
    }
}
