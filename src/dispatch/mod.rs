//! Async FIFO hand-off into a `Presenter`.
//!
//! Tasks that should not touch the stack directly send `StackCommand`s over
//! a bounded channel; one `PresenterServer` applies them in arrival order.

mod client;
mod server;
mod types;


use std::time::Duration;

use tokio::sync::mpsc;

use crate::config::DispatchConfig;

pub use client::PresenterClient;
pub use server::PresenterServer;
pub use types::{DispatchError, StackCommand};

pub struct DispatchLayer;

impl DispatchLayer {
    pub fn new<V: 'static>(buffer: usize, timeout: Duration) -> (PresenterClient<V>, PresenterServer<V>) {
        let (sender, receiver) = mpsc::channel(buffer.max(1));
        (
            PresenterClient::new(sender, timeout),
            PresenterServer::new(receiver),
        )
    }

    pub fn from_config<V: 'static>(config: &DispatchConfig) -> (PresenterClient<V>, PresenterServer<V>) {
        Self::new(config.buffer, config.timeout())
    }
}
