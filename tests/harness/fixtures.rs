use lensql::app::table_tree::TableDetail;
use lensql::domain::{NativeTable, TableColumn};

pub fn orders_table() -> NativeTable {
    NativeTable {
        name: "orders".to_string(),
        columns: vec![
            TableColumn {
                name: "order_id".to_string(),
                data_type: "bigint".to_string(),
                comment: Some("Primary key".to_string()),
            },
            TableColumn {
                name: "region".to_string(),
                data_type: "string".to_string(),
                comment: None,
            },
        ],
    }
}

pub fn loaded_orders() -> TableDetail {
    TableDetail::Loaded(orders_table())
}
