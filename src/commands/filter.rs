use tracing::debug;
use crate::models::{TransactionFilter, TransactionKind, TransactionStatus};
use crate::services::feed_service::TransactionSource;
use crate::utils::FeedError;
use super::Session;

const USAGE: &str = "Usage: `$filter status=<completed,pending,declined> type=<income,expense>` or `$filter clear`";

/// `$filter ...`: replace the active status/type filter
pub async fn execute<S: TransactionSource>(session: &mut Session<S>, args: &[&str]) -> Result<String, FeedError> {
    if args.is_empty() {
        return Ok(format!("🔎 Active filter: {}\n{}", session.filter.describe(), USAGE));
    }

    session.filter = if args.len() == 1 && args[0].eq_ignore_ascii_case("clear") {
        TransactionFilter::default()
    } else {
        parse_filter(args)?
    };
    debug!("Filter set to {:?}", session.filter);

    let shown: usize = session
        .feed
        .sections_filtered(&session.filter)
        .await
        .iter()
        .map(|s| s.items.len())
        .sum();

    Ok(format!(
        "🔎 Filter: {} ({} of {} transactions shown)",
        session.filter.describe(),
        shown,
        session.feed.len().await
    ))
}

pub fn parse_filter(args: &[&str]) -> Result<TransactionFilter, FeedError> {
    let mut filter = TransactionFilter::default();

    for arg in args {
        let (key, values) = arg
            .split_once('=')
            .ok_or_else(|| FeedError::InvalidCommand(USAGE.to_string()))?;

        for value in values.split(',').filter(|v| !v.is_empty()) {
            match key.to_lowercase().as_str() {
                "status" => {
                    let status = TransactionStatus::parse(value).ok_or_else(|| {
                        FeedError::InvalidCommand(format!("Unknown status `{}`", value))
                    })?;
                    filter = filter.with_status(status);
                }
                "type" => {
                    let kind = TransactionKind::parse(value).ok_or_else(|| {
                        FeedError::InvalidCommand(format!("Unknown type `{}`", value))
                    })?;
                    filter = filter.with_kind(kind);
                }
                _ => return Err(FeedError::InvalidCommand(USAGE.to_string())),
            }
        }
    }

    Ok(filter)
}
