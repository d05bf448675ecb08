use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::list::deserialize_list;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableColumn {
    pub name: String,
    #[serde(rename = "type", default)]
    pub data_type: String,
    #[serde(default)]
    pub comment: Option<String>,
}

/// Native table as described by `metastore/nativetables/{db}.{table}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativeTable {
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_list")]
    pub columns: Vec<TableColumn>,
}

/// Cube metadata. Only the name is interpreted; everything else is kept as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cube {
    pub name: String,
    #[serde(flatten)]
    pub properties: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_table_accepts_wrapped_columns() {
        let table: NativeTable = serde_json::from_str(
            r#"{
                "name": "orders",
                "columns": {"column": [
                    {"name": "id", "type": "BIGINT"},
                    {"name": "note", "type": "STRING", "comment": "free text"}
                ]},
                "tableType": "MANAGED_TABLE"
            }"#,
        )
        .unwrap();

        assert_eq!(table.name, "orders");
        assert_eq!(table.columns.len(), 2);
        assert_eq!(table.columns[1].comment.as_deref(), Some("free text"));
    }

    #[test]
    fn cube_keeps_unknown_properties() {
        let cube: Cube =
            serde_json::from_str(r#"{"name": "sales", "measures": {"measure": []}}"#).unwrap();

        assert_eq!(cube.name, "sales");
        assert!(cube.properties.contains_key("measures"));
    }
}
