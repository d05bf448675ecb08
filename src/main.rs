use std::io::{self, Write};
use std::sync::Arc;
use std::time::Instant;

use clap::Parser;
use color_eyre::eyre::{Result, eyre};
use tokio::sync::mpsc;
use tokio::time::sleep_until;

use lensql::app::action::Action;
use lensql::app::commands::QueryCommands;
use lensql::app::effect::Effect;
use lensql::app::effect_runner::EffectRunner;
use lensql::app::ports::QueryService;
use lensql::app::reducer::reduce;
use lensql::app::render_schedule::next_animation_deadline;
use lensql::app::state::AppState;
use lensql::cli::{Cli, Command, ConfigCommand, QueryCommand};
use lensql::domain::SessionToken;
use lensql::error;
use lensql::infra::adapters::LensQueryAdapter;
use lensql::infra::config::{ClientConfig, TomlConfigStore};
use lensql::infra::export::FsResultWriter;
use lensql::infra::http::ReqwestTransport;
use lensql::infra::logging::{LogTarget, default_log_file, init_logging};
use lensql::ui::adapters::TuiAdapter;
use lensql::ui::event::handler::handle_event;
use lensql::ui::tui::TuiRunner;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    error::install_hooks()?;

    let cli = Cli::parse();
    let store = match &cli.config {
        Some(path) => TomlConfigStore::for_file(path.clone()),
        None => TomlConfigStore::new()?,
    };

    // `config init` must work before a valid config exists.
    if let Some(Command::Config(ConfigCommand::Init { force })) = &cli.command {
        let path = store.init(*force)?;
        return print_output(&format!("Wrote {}", path.display()));
    }

    let file = store.load()?;
    let config = ClientConfig::resolve(file.as_ref(), &cli.overrides())?;

    match cli.command {
        None => {
            let log_file = config.log_file.clone().unwrap_or_else(default_log_file);
            init_logging(&config.log_level, &LogTarget::File(log_file))?;
            run_tui(config, &store).await
        }
        Some(Command::Config(ConfigCommand::Show)) => print_output(&format!(
            "config file: {}\n{}",
            store.storage_path().display(),
            config.describe()
        )),
        Some(command) => {
            init_logging(&config.log_level, &LogTarget::Stderr)?;
            let output = run_command(command, &config, &store).await?;
            print_output(&output)
        }
    }
}

fn print_output(text: &str) -> Result<()> {
    let mut out = io::stdout().lock();
    writeln!(out, "{text}")?;
    Ok(())
}

fn require_session(config: &ClientConfig, store: &TomlConfigStore) -> Result<SessionToken> {
    config.session.clone().ok_or_else(|| {
        eyre!(
            "No session id configured. Pass --session-id, set LENSQL_SESSION_ID, \
             or set session.session_id in {}",
            store.storage_path().display()
        )
    })
}

fn build_service(config: &ClientConfig) -> Result<Arc<dyn QueryService>> {
    let transport = ReqwestTransport::new(config.request_timeout)?;
    Ok(Arc::new(LensQueryAdapter::new(transport, &config.base_url)))
}

async fn run_command(
    command: Command,
    config: &ClientConfig,
    store: &TomlConfigStore,
) -> Result<String> {
    let token = require_session(config, store)?;
    let commands = QueryCommands::new(build_service(config)?, Arc::new(FsResultWriter), token)
        .with_poll_interval(config.poll_interval);

    let output = match command {
        Command::Databases => commands.databases().await?,
        Command::Tables { database } => commands.tables(&database).await?,
        Command::Table { database, table } => commands.table(&database, &table).await?,
        Command::Cubes => commands.cubes().await?,
        Command::Cube { name } => commands.cube(&name).await?,
        Command::Query(query) => match query {
            QueryCommand::Execute {
                query,
                name,
                asynchronous,
                store,
            } => {
                commands
                    .execute(&query, name, asynchronous, store.dir.as_deref())
                    .await?
            }
            QueryCommand::Explain { query } => commands.explain(&query).await?,
            QueryCommand::Status { handle } => commands.status(&handle).await?,
            QueryCommand::List { state } => commands.list(state, config.user.as_deref()).await?,
            QueryCommand::Kill { handle } => commands.kill(&handle).await?,
            QueryCommand::Results { handle, store } => {
                commands.results(&handle, store.dir.as_deref()).await?
            }
            QueryCommand::DownloadUrl { handle } => commands.download_url(&handle)?,
        },
        Command::Config(_) => return Err(eyre!("config commands do not talk to the service")),
    };
    Ok(output)
}

async fn run_tui(config: ClientConfig, store: &TomlConfigStore) -> Result<()> {
    let token = require_session(&config, store)?;
    tracing::info!(config = %config.describe(), "starting tui");

    let (action_tx, mut action_rx) = mpsc::channel::<Action>(256);
    let effect_runner = EffectRunner::new(build_service(&config)?, token, action_tx.clone());

    let mut state = AppState::new(config.base_url.clone()).with_poll_interval(config.poll_interval);
    state.user = config.user.clone();

    let mut tui = TuiRunner::new()?;
    tui.enter()?;

    let initial_size = tui.terminal().size()?;
    state.ui.terminal_height = initial_size.height;

    let _ = action_tx.send(Action::LoadDatabases).await;

    let result = event_loop(&mut tui, &mut state, &effect_runner, &action_tx, &mut action_rx).await;

    tui.exit()?;
    result
}

async fn event_loop(
    tui: &mut TuiRunner,
    state: &mut AppState,
    effect_runner: &EffectRunner,
    action_tx: &mpsc::Sender<Action>,
    action_rx: &mut mpsc::Receiver<Action>,
) -> Result<()> {
    loop {
        let deadline = next_animation_deadline(state, Instant::now());

        tokio::select! {
            Some(event) = tui.next_event() => {
                let action = handle_event(event, state);
                if !action.is_none() {
                    let _ = action_tx.send(action).await;
                }
            }
            Some(action) = action_rx.recv() => {
                let now = Instant::now();
                let mut effects = reduce(state, action, now);

                if state.render_dirty && !effects.contains(&Effect::Render) {
                    state.clear_expired_timers(now);
                    effects.push(Effect::Render);
                }

                let mut tui_adapter = TuiAdapter::new(tui);
                effect_runner.run(effects, &mut tui_adapter, state)?;
                state.clear_dirty();
            }
            // Spinner frame or message expiry
            () = async {
                match deadline {
                    Some(d) => sleep_until(d.into()).await,
                    None => std::future::pending::<()>().await,
                }
            } => {
                let effects = reduce(state, Action::Render, Instant::now());
                let mut tui_adapter = TuiAdapter::new(tui);
                effect_runner.run(effects, &mut tui_adapter, state)?;
                state.clear_dirty();
            }
        }

        if state.should_quit {
            return Ok(());
        }
    }
}
