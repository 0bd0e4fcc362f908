//! Shared test utilities: an in-process Giphy stand-in and app builders.

#![allow(dead_code)]

pub mod mock_giphy;

use gif_market::config::{ApiKey, Config};
use gif_market::provider::GiphyClient;
use gif_market::ui::app::App;
use gif_market::ui::events::AppEvent;
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::runtime::Runtime;

pub const TEST_API_KEY: &str = "test-key";

/// Config pointing at `base_url` with a test API key.
pub fn test_config(base_url: &str) -> Config {
    let mut config = Config::default();
    config.provider.base_url = base_url.to_string();
    config.provider.api_key = Some(ApiKey::new(TEST_API_KEY));
    config.provider.timeout_seconds = 5;
    config
}

pub fn test_client(base_url: &str) -> GiphyClient {
    GiphyClient::new(&test_config(base_url).provider).expect("Failed to build client")
}

pub fn new_runtime() -> Runtime {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .expect("Failed to build runtime")
}

// -- App helpers --------------------------------------------------------------

/// Build an `App` whose searches run on `runtime` and report to the
/// returned receiver.
pub fn make_app(runtime: &Runtime, base_url: &str) -> (App, Receiver<AppEvent>) {
    let (tx, rx) = mpsc::channel();
    let config = test_config(base_url);
    let client = Arc::new(GiphyClient::new(&config.provider).expect("Failed to build client"));
    let app = App::new(config, client, runtime.handle().clone(), tx);
    (app, rx)
}

/// App for tests that never reach the network.
pub fn make_offline_app(runtime: &Runtime) -> (App, Receiver<AppEvent>) {
    make_app(runtime, "http://127.0.0.1:9")
}

/// Wait for the next search completion and feed it to the app.
pub fn apply_next_completion(app: &mut App, rx: &Receiver<AppEvent>) -> u64 {
    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        match rx.recv_timeout(remaining) {
            Ok(AppEvent::SearchCompleted {
                request_id,
                outcome,
            }) => {
                app.on_search_completed(request_id, outcome);
                return request_id;
            }
            Ok(_) => continue,
            Err(err) => panic!("No search completion received: {err}"),
        }
    }
}
