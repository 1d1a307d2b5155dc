//! One application session: the single presentation stack plus its
//! dispatch server, created at startup and torn down at shutdown.

use tokio::task::JoinHandle;

use crate::config::Config;
use crate::dispatch::{DispatchLayer, PresenterClient};
use crate::presentation::Presenter;
use crate::shutdown::ShutdownSignal;
use crate::ui::LevelHost;

pub struct Session<V> {
    config: Config,
    presenter: Presenter<V>,
    client: PresenterClient<V>,
    shutdown: ShutdownSignal,
    server: JoinHandle<()>,
}

impl<V: 'static> Session<V> {
    /// Build the session's stack and spawn its dispatch server.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(config: Config) -> Self {
        let presenter = Presenter::from_config(&config.presenter);
        let (client, server) = DispatchLayer::from_config(&config.dispatch);
        let shutdown = ShutdownSignal::new();
        let server = tokio::spawn(server.run(presenter.clone(), shutdown.clone()));
        tracing::info!(
            history_limit = config.presenter.history_limit,
            max_depth = config.host.max_depth,
            "presentation session started"
        );

        Self {
            config,
            presenter,
            client,
            shutdown,
            server,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The session's stack, for callers on the owning thread and for
    /// render-layer queries.
    pub fn presenter(&self) -> &Presenter<V> {
        &self.presenter
    }

    /// Async hand-off for callers on other tasks.
    pub fn client(&self) -> PresenterClient<V> {
        self.client.clone()
    }

    /// Level 0 host bounded by the configured depth.
    pub fn root_host(&self) -> LevelHost<V> {
        LevelHost::from_config(self.presenter.clone(), &self.config.host)
    }

    /// Stop the dispatch server (after it applies what is already queued)
    /// and dismiss every remaining modal.
    pub async fn shutdown(self) {
        self.shutdown.signal();
        drop(self.client);
        if let Err(err) = self.server.await {
            tracing::warn!(error = %err, "presenter server task failed");
        }
        let remaining = self.presenter.len();
        self.presenter.dismiss_all();
        tracing::info!(dismissed = remaining, "presentation session stopped");
    }
}
