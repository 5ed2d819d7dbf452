//! Chat interface launcher.

use palaver_client::CompletionClient;
use palaver_core::ClientConfig;
use palaver_error::PalaverResult;
use palaver_history::HistoryStore;
use palaver_tui::run_tui;
use std::sync::Arc;
use tracing::info;

/// Launch the chat interface.
pub async fn launch_chat(config: ClientConfig) -> PalaverResult<()> {
    let system_prompt = config.system_prompt.clone();
    let client = CompletionClient::new(config);
    let store = HistoryStore::open_default()?;

    info!(path = %store.path().display(), "Launching chat interface");
    run_tui(Arc::new(client), &store, &system_prompt).await
}
