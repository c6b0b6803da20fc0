pub mod feed;
pub mod list;
pub mod transaction;
pub mod filter;
pub mod help;

use tracing::{debug, error, warn};
use crate::models::TransactionFilter;
use crate::services::feed_service::{FeedController, TransactionSource};
use crate::utils::{user_message, FeedError};

/// State for one screen session: the feed plus the active filter
pub struct Session<S: TransactionSource> {
    pub feed: FeedController<S>,
    pub filter: TransactionFilter,
}

impl<S: TransactionSource> Session<S> {
    pub fn new(feed: FeedController<S>) -> Self {
        Session {
            feed,
            filter: TransactionFilter::default(),
        }
    }
}

/// What the session loop should do after a line
#[derive(Debug, PartialEq)]
pub enum Reply {
    Text(String),
    Quit,
    Nothing,
}

pub async fn handle_line<S: TransactionSource>(session: &mut Session<S>, line: &str) -> Reply {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.is_empty() {
        return Reply::Nothing;
    }

    let command = parts[0];
    let args = &parts[1..];
    debug!("Dispatching command {} {:?}", command, args);

    let result = match command {
        "$more" | "$next" => feed::more(session).await,
        "$scroll" => feed::scroll(session, args).await,
        "$list" | "$ls" => list::execute(session).await,
        "$export" => list::export(session).await,
        "$stats" => list::stats(session).await,
        "$show" | "$tr" => transaction::execute(session, args).await,
        "$filter" => filter::execute(session, args).await,
        "$help" => Ok(help::text()),
        "$quit" | "$exit" => return Reply::Quit,
        other => Err(FeedError::InvalidCommand(format!(
            "Unknown command `{}`. Type `$help` for the list of commands.",
            other
        ))),
    };

    match result {
        Ok(text) => Reply::Text(text),
        Err(e) => {
            if e.is_retryable() {
                warn!("Command {} hit a retryable error: {}", command, e);
            } else {
                error!("Error executing command {}: {}", command, e);
            }
            Reply::Text(user_message(&e))
        }
    }
}
