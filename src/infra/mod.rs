use lensql_app as app;
use lensql_domain as domain;

pub mod adapters;
pub mod config;
pub mod export;
pub mod http;
pub mod logging;
