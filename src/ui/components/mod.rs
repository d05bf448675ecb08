pub mod atoms;
pub mod database_panel;
pub mod footer;
pub mod header;
pub mod layout;
pub mod molecules;
pub mod query_pane;
pub mod result_pane;
pub mod status_message;
pub mod table_tree;
pub mod text_utils;
