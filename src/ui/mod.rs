use lensql_app as app;
use lensql_domain as domain;

pub mod adapters;
pub mod components;
pub mod event;
pub mod theme;
pub mod tui;
