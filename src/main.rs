use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod models;
mod services;
mod utils;

use commands::{Reply, Session};
use config::FeedConfig;
use services::feed_service;
use utils::user_message;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenv::dotenv().ok();

    // Initialize tracing
    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = "wallet_feed=debug".parse::<Directive>() {
        filter = filter.add_directive(directive);
    }
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_writer(std::io::stderr)
        .init();

    info!("💶 Starting wallet feed session...");

    let config = match FeedConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            return;
        }
    };
    info!(
        "Page size {}, cap {}, latency {}ms",
        config.page_size,
        config.max_items,
        config.latency.as_millis()
    );

    let mut session = Session::new(feed_service::mock_feed(config));

    // Screen mount: load the first page when nothing is held yet
    if let Err(e) = session.feed.on_mount().await {
        println!("{}", user_message(&e));
    }
    if let Reply::Text(text) = commands::handle_line(&mut session, "$list").await {
        println!("{}", text);
    }
    println!("Type `$help` for commands.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                error!("Failed to read input: {}", e);
                break;
            }
        };

        match commands::handle_line(&mut session, &line).await {
            Reply::Text(text) => println!("{}", text),
            Reply::Quit => break,
            Reply::Nothing => {}
        }
    }

    info!("Session closed with {} transactions loaded", session.feed.len().await);
}
