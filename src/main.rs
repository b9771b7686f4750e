//! Demo binary: asks the service for an example sentence and prints it

use cohere_chat::ChatClient;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let words = ["nonchalant", "reckon", "appalled"];
    let prompt = format!(
        "Please create an English example sentence using following words: {}, {}, {}",
        words[0], words[1], words[2]
    );

    println!("\n\n++++++ Prompt ++++++");
    println!("{prompt}");

    println!("\n\n++++++ Generated response ++++++");

    let client = ChatClient::from_env();
    match client.generate(&prompt).await {
        Ok(text) => println!("{text}\n\n"),
        Err(e) => {
            error!("failed to get generated response: {e}");
            std::process::exit(1);
        }
    }
}
