use log::info;
use yurippe_rust_sdk::{BaseUrl, QuoteClient};

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let quote_client = QuoteClient::new(None, Some(BaseUrl::Production));

    let quote = quote_client.fetch_random_quote().await.unwrap();
    info!("\"{}\" - {}", quote.quote, quote.author);
}
