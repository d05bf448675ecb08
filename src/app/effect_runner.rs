//! Executes side effects returned by the reducer.
//!
//! Requests run on spawned tasks and report back through the action channel,
//! so the event loop never waits on the network. Only `Render` runs inline.

use std::future::Future;
use std::sync::Arc;

use color_eyre::eyre::Result;
use tokio::sync::mpsc;

use crate::action::Action;
use crate::domain::SessionToken;
use crate::effect::Effect;
use crate::ports::{QueryService, Renderer};
use crate::state::AppState;

pub struct EffectRunner {
    service: Arc<dyn QueryService>,
    token: SessionToken,
    action_tx: mpsc::Sender<Action>,
}

impl EffectRunner {
    pub fn new(
        service: Arc<dyn QueryService>,
        token: SessionToken,
        action_tx: mpsc::Sender<Action>,
    ) -> Self {
        Self {
            service,
            token,
            action_tx,
        }
    }

    pub fn run(
        &self,
        effects: Vec<Effect>,
        renderer: &mut dyn Renderer,
        state: &mut AppState,
    ) -> Result<()> {
        for effect in effects {
            self.run_single(effect, renderer, state)?;
        }
        Ok(())
    }

    fn run_single(
        &self,
        effect: Effect,
        renderer: &mut dyn Renderer,
        state: &mut AppState,
    ) -> Result<()> {
        match effect {
            Effect::Render => renderer.draw(state),
            Effect::DispatchActions(actions) => {
                let tx = self.action_tx.clone();
                tokio::spawn(async move {
                    for action in actions {
                        if tx.send(action).await.is_err() {
                            break;
                        }
                    }
                });
                Ok(())
            }
            request => {
                self.spawn_request(request);
                Ok(())
            }
        }
    }

    fn spawn_request(&self, effect: Effect) {
        let service = Arc::clone(&self.service);
        let token = self.token.clone();

        match effect {
            Effect::FetchDatabases => self.spawn_reporting(async move {
                match service.list_databases(&token).await {
                    Ok(databases) => Action::DatabasesLoaded(databases),
                    Err(e) => Action::DatabasesFailed(e.to_string()),
                }
            }),
            Effect::FetchTables { database, mount } => self.spawn_reporting(async move {
                match service.list_tables(&token, &database).await {
                    Ok(tables) => Action::TablesLoaded {
                        database,
                        mount,
                        tables,
                    },
                    Err(e) => Action::TablesFailed {
                        database,
                        mount,
                        error: e.to_string(),
                    },
                }
            }),
            Effect::FetchTableDetail {
                database,
                mount,
                table,
            } => self.spawn_reporting(async move {
                match service.get_table_details(&token, &database, &table).await {
                    Ok(detail) => Action::TableDetailLoaded {
                        database,
                        mount,
                        table,
                        detail: Box::new(detail),
                    },
                    Err(e) => Action::TableDetailFailed {
                        database,
                        mount,
                        table,
                        error: e.to_string(),
                    },
                }
            }),
            Effect::ExecuteQuery { query } => self.spawn_reporting(async move {
                match service.execute_query(&token, &query, None).await {
                    Ok(handle) => {
                        tracing::info!(handle = %handle, "query submitted");
                        Action::QuerySubmitted(handle)
                    }
                    Err(e) => Action::QuerySubmitFailed(e.to_string()),
                }
            }),
            Effect::PollQuery { handle, delay } => self.spawn_reporting(async move {
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                match service.get_query(&token, &handle).await {
                    Ok(query) => Action::QueryPolled(Box::new(query)),
                    Err(e) => Action::QueryPollFailed {
                        handle,
                        error: e.to_string(),
                    },
                }
            }),
            Effect::FetchQueryResult { handle, mode } => self.spawn_reporting(async move {
                match service.get_query_result(&token, &handle, Some(mode)).await {
                    Ok(result) => Action::QueryResultLoaded {
                        handle,
                        result: Box::new(result),
                    },
                    Err(e) => Action::QueryResultFailed {
                        handle,
                        error: e.to_string(),
                    },
                }
            }),
            Effect::CancelQuery { handle } => self.spawn_reporting(async move {
                match service.cancel_query(&token, &handle).await {
                    Ok(result) => Action::QueryCancelled { handle, result },
                    Err(e) => Action::QueryCancelFailed {
                        handle,
                        error: e.to_string(),
                    },
                }
            }),
            Effect::Render | Effect::DispatchActions(_) => {
                debug_assert!(false, "Non-request effect passed to spawn_request: {effect:?}");
            }
        }
    }

    fn spawn_reporting<F>(&self, task: F)
    where
        F: Future<Output = Action> + Send + 'static,
    {
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            let action = task.await;
            if tx.send(action).await.is_err() {
                tracing::debug!("action channel closed; dropping request outcome");
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::domain::{LensQuery, QueryHandle, QueryMode, QueryStatus};
    use crate::ports::{MockQueryService, QueryServiceError};

    #[derive(Default)]
    struct CountingRenderer {
        draws: usize,
    }

    impl Renderer for CountingRenderer {
        fn draw(&mut self, _state: &mut AppState) -> Result<()> {
            self.draws += 1;
            Ok(())
        }
    }

    fn runner(service: MockQueryService) -> (EffectRunner, mpsc::Receiver<Action>) {
        let (tx, rx) = mpsc::channel(16);
        let runner = EffectRunner::new(Arc::new(service), SessionToken::new("abc"), tx);
        (runner, rx)
    }

    fn create_test_state() -> AppState {
        AppState::new("http://localhost:9999/lensapi/")
    }

    #[tokio::test]
    async fn render_draws_inline() {
        let (runner, _rx) = runner(MockQueryService::new());
        let mut renderer = CountingRenderer::default();
        let mut state = create_test_state();

        runner
            .run(vec![Effect::Render, Effect::Render], &mut renderer, &mut state)
            .unwrap();

        assert_eq!(renderer.draws, 2);
    }

    #[tokio::test]
    async fn fetch_databases_reports_loaded_list() {
        let mut service = MockQueryService::new();
        service
            .expect_list_databases()
            .withf(|token| token.as_str() == "abc")
            .times(1)
            .returning(|_| Ok(vec!["default".to_string()]));
        let (runner, mut rx) = runner(service);

        runner
            .run(
                vec![Effect::FetchDatabases],
                &mut CountingRenderer::default(),
                &mut create_test_state(),
            )
            .unwrap();

        assert_eq!(
            rx.recv().await,
            Some(Action::DatabasesLoaded(vec!["default".to_string()]))
        );
    }

    #[tokio::test]
    async fn failed_table_fetch_keeps_database_and_mount() {
        let mut service = MockQueryService::new();
        service
            .expect_list_tables()
            .returning(|_, _| Err(QueryServiceError::Transport("refused".to_string())));
        let (runner, mut rx) = runner(service);

        runner
            .run(
                vec![Effect::FetchTables {
                    database: "sales".to_string(),
                    mount: 4,
                }],
                &mut CountingRenderer::default(),
                &mut create_test_state(),
            )
            .unwrap();

        assert_eq!(
            rx.recv().await,
            Some(Action::TablesFailed {
                database: "sales".to_string(),
                mount: 4,
                error: "Request failed: refused".to_string(),
            })
        );
    }

    #[tokio::test(start_paused = true)]
    async fn poll_waits_for_delay_before_fetching() {
        let mut service = MockQueryService::new();
        service.expect_get_query().times(1).returning(|_, handle| {
            Ok(LensQuery {
                query_handle: handle.clone(),
                user_query: "select 1".to_string(),
                submitted_user: None,
                query_name: None,
                is_persistent: false,
                status: QueryStatus::default(),
                driver_query: None,
                result_set_path: None,
                submission_time: 0,
                finish_time: 0,
            })
        });
        let (runner, mut rx) = runner(service);
        let started = tokio::time::Instant::now();

        runner
            .run(
                vec![Effect::PollQuery {
                    handle: QueryHandle::new("h1"),
                    delay: Duration::from_millis(500),
                }],
                &mut CountingRenderer::default(),
                &mut create_test_state(),
            )
            .unwrap();

        let action = rx.recv().await.unwrap();
        assert!(matches!(action, Action::QueryPolled(_)));
        assert!(started.elapsed() >= Duration::from_millis(500));
    }

    #[tokio::test]
    async fn fetch_result_passes_known_mode() {
        let mut service = MockQueryService::new();
        service
            .expect_get_query_result()
            .withf(|_, _, mode| *mode == Some(QueryMode::Persistent))
            .returning(|_, _, _| {
                Ok(crate::domain::QueryResult::Persistent {
                    download_url: "http://x/".to_string(),
                })
            });
        let (runner, mut rx) = runner(service);

        runner
            .run(
                vec![Effect::FetchQueryResult {
                    handle: QueryHandle::new("h1"),
                    mode: QueryMode::Persistent,
                }],
                &mut CountingRenderer::default(),
                &mut create_test_state(),
            )
            .unwrap();

        assert!(matches!(
            rx.recv().await,
            Some(Action::QueryResultLoaded { .. })
        ));
    }

    #[tokio::test]
    async fn tui_submission_is_unnamed() {
        let mut service = MockQueryService::new();
        service
            .expect_execute_query()
            .withf(|_, query, name| query == "select 1" && name.is_none())
            .times(1)
            .returning(|_, _, _| Ok(QueryHandle::new("h1")));
        let (runner, mut rx) = runner(service);

        runner
            .run(
                vec![Effect::ExecuteQuery {
                    query: "select 1".to_string(),
                }],
                &mut CountingRenderer::default(),
                &mut create_test_state(),
            )
            .unwrap();

        assert_eq!(
            rx.recv().await,
            Some(Action::QuerySubmitted(QueryHandle::new("h1")))
        );
    }

    #[tokio::test]
    async fn dispatch_actions_are_forwarded_in_order() {
        let (runner, mut rx) = runner(MockQueryService::new());

        runner
            .run(
                vec![Effect::DispatchActions(vec![
                    Action::LoadDatabases,
                    Action::Render,
                ])],
                &mut CountingRenderer::default(),
                &mut create_test_state(),
            )
            .unwrap();

        assert_eq!(rx.recv().await, Some(Action::LoadDatabases));
        assert_eq!(rx.recv().await, Some(Action::Render));
    }
}
