use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::list::deserialize_list;
use super::query_mode::QueryMode;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultColumn {
    pub name: String,
    #[serde(rename = "type", default)]
    pub data_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResultSetMetadata {
    #[serde(default, deserialize_with = "deserialize_list")]
    pub columns: Vec<ResultColumn>,
}

impl ResultSetMetadata {
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResultRow {
    #[serde(default, deserialize_with = "deserialize_list")]
    pub values: Vec<Value>,
}

impl ResultRow {
    /// Cell values as display strings. Strings are unquoted, null is `null`.
    pub fn cells(&self) -> Vec<String> {
        self.values
            .iter()
            .map(|value| match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InMemoryResultSet {
    #[serde(default, deserialize_with = "deserialize_list")]
    pub rows: Vec<ResultRow>,
}

impl InMemoryResultSet {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Outcome of a result fetch: either the rows themselves or where to download them.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryResult {
    InMemory {
        result_set: InMemoryResultSet,
        metadata: ResultSetMetadata,
    },
    Persistent {
        download_url: String,
    },
}

impl QueryResult {
    pub fn mode(&self) -> QueryMode {
        match self {
            Self::InMemory { .. } => QueryMode::InMemory,
            Self::Persistent { .. } => QueryMode::Persistent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_rows_and_metadata() {
        let rows: InMemoryResultSet = serde_json::from_str(
            r#"{"rows": [{"values": ["east", 42, null]}, {"values": ["west", 7, true]}]}"#,
        )
        .unwrap();
        let meta: ResultSetMetadata = serde_json::from_str(
            r#"{"columns": [{"name": "region", "type": "STRING"}, {"name": "total", "type": "INT"}, {"name": "flag"}]}"#,
        )
        .unwrap();

        assert_eq!(rows.row_count(), 2);
        assert_eq!(rows.rows[0].cells(), vec!["east", "42", "null"]);
        assert_eq!(meta.column_names(), vec!["region", "total", "flag"]);
        assert_eq!(meta.columns[2].data_type, "");
    }

    #[test]
    fn missing_rows_is_empty_result() {
        let rows: InMemoryResultSet = serde_json::from_str("{}").unwrap();

        assert_eq!(rows.row_count(), 0);
    }

    #[test]
    fn result_reports_its_mode() {
        let persistent = QueryResult::Persistent {
            download_url: "http://x".to_string(),
        };

        assert_eq!(persistent.mode(), QueryMode::Persistent);
    }
}
