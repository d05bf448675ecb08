use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::infra::config::ConfigOverrides;

/// Terminal client for a Lens query service. Starts the TUI when no command is given.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Service base URL, e.g. http://localhost:9999/lensapi/
    #[arg(long, global = true, env = "LENSQL_BASE_URL")]
    pub base_url: Option<String>,

    /// Session id sent with every request
    #[arg(long, global = true, env = "LENSQL_SESSION_ID", hide_env_values = true)]
    pub session_id: Option<String>,

    /// User whose queries `query list` shows
    #[arg(long, global = true, env = "LENSQL_USER")]
    pub user: Option<String>,

    /// Config file to use instead of the default location
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            base_url: self.base_url.clone(),
            session_id: self.session_id.clone(),
            user: self.user.clone(),
        }
    }
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// List databases
    Databases,
    /// List the native tables of a database
    Tables { database: String },
    /// Show the columns of a native table
    Table { database: String, table: String },
    /// List cubes
    Cubes,
    /// Show a cube definition
    Cube { name: String },
    /// Submit and inspect queries
    #[command(subcommand)]
    Query(QueryCommand),
    /// Manage the config file
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum QueryCommand {
    /// Submit a query; waits for results unless --async is given
    Execute {
        query: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long = "async")]
        asynchronous: bool,
        #[command(flatten)]
        store: StoreArg,
    },
    /// Print the plan of a query without running it
    Explain { query: String },
    /// Show the status of a query
    Status { handle: String },
    /// List queries of the user
    List {
        /// Only queries in this state, e.g. running
        #[arg(long)]
        state: Option<String>,
    },
    /// Cancel a running query
    Kill { handle: String },
    /// Print or store the results of a query
    Results {
        handle: String,
        #[command(flatten)]
        store: StoreArg,
    },
    /// Print the download URL of a persisted result
    DownloadUrl { handle: String },
}

#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreArg {
    /// Existing directory to write in-memory results into
    #[arg(long = "store", value_name = "DIR")]
    pub dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum ConfigCommand {
    /// Write a config file with default values
    Init {
        #[arg(long)]
        force: bool,
    },
    /// Print the resolved configuration
    Show,
}
