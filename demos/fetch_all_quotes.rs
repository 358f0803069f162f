use log::info;
use yurippe_rust_sdk::{BaseUrl, QuoteClient};

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let quote_client = QuoteClient::new(None, Some(BaseUrl::Production));

    let quotes = quote_client.fetch_quotes().await.unwrap();
    info!("Fetched {} valid quotes", quotes.len());

    for quote in quotes.iter().take(5) {
        info!("{} ({}): {}", quote.character, quote.show, quote.quote);
    }
}
