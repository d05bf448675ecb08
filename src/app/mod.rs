use lensql_domain as domain;

pub mod action;
pub mod commands;
pub mod database_panel;
pub mod effect;
pub mod effect_runner;
pub mod focused_pane;
pub mod input_mode;
pub mod message_state;
pub mod ports;
pub mod query_pane;
pub mod reducer;
mod reducers;
pub mod render_schedule;
pub mod report;
pub mod state;
pub mod table_tree;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
