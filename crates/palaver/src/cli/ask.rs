//! One-shot prompt handler.

use palaver_client::CompletionClient;
use palaver_core::{ChatRequest, ClientConfig, CompletionDriver, Message};
use palaver_error::PalaverResult;
use tracing::debug;

/// Send a single prompt and print the reply to stdout.
///
/// The exchange is not persisted to history.
pub async fn run_ask(config: ClientConfig, prompt: &str) -> PalaverResult<()> {
    let system_prompt = config.system_prompt.clone();
    let client = CompletionClient::new(config);

    let request = ChatRequest::new(vec![Message::system(system_prompt), Message::user(prompt)]);
    debug!(model = %client.model_name(), "Sending one-shot prompt");
    let response = client.complete(&request).await?;

    println!("{}", response.reply);
    Ok(())
}
