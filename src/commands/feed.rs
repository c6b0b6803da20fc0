use tracing::info;
use crate::models::{FeedState, LoadOutcome};
use crate::services::feed_service::TransactionSource;
use crate::services::render_service;
use crate::utils::{FeedError, ScrollMetrics};
use super::Session;

const DEFAULT_VIEWPORT_ROWS: usize = 10;

/// End of list reached: load the next page
pub async fn more<S: TransactionSource>(session: &mut Session<S>) -> Result<String, FeedError> {
    let outcome = session.feed.on_end_reached().await?;
    Ok(describe(outcome, session).await)
}

/// `$scroll <offset> [viewport]`
///
/// Only loads once the remaining rows drop under the configured share of the
/// viewport. Content length counts one header row per section plus the items.
pub async fn scroll<S: TransactionSource>(session: &mut Session<S>, args: &[&str]) -> Result<String, FeedError> {
    let offset = match args.first() {
        Some(raw) => parse_rows(raw)?,
        None => {
            return Err(FeedError::InvalidCommand(
                "Usage: `$scroll <offset> [viewport]`".to_string(),
            ))
        }
    };
    let viewport_len = match args.get(1) {
        Some(raw) => parse_viewport(raw)?,
        None => DEFAULT_VIEWPORT_ROWS,
    };

    let sections = session.feed.sections_filtered(&session.filter).await;
    let content_len = sections.len() + sections.iter().map(|s| s.items.len()).sum::<usize>();
    let metrics = ScrollMetrics {
        offset,
        content_len,
        viewport_len,
    };

    let threshold = session.feed.config().end_reached_threshold;
    if !metrics.is_near_end(threshold) {
        return Ok(format!(
            "{} rows below the viewport, not loading yet",
            metrics.distance_from_end()
        ));
    }

    info!(
        "End reached at offset {} ({} of {} rows remaining)",
        offset,
        metrics.distance_from_end(),
        content_len
    );
    more(session).await
}

fn parse_rows(raw: &str) -> Result<usize, FeedError> {
    raw.parse::<usize>()
        .map_err(|_| FeedError::InvalidCommand(format!("`{}` is not a row count", raw)))
}

/// A zero-row viewport could never get near the end
fn parse_viewport(raw: &str) -> Result<usize, FeedError> {
    match parse_rows(raw)? {
        0 => Err(FeedError::InvalidCommand("Viewport must be at least one row".to_string())),
        rows => Ok(rows),
    }
}

async fn describe<S: TransactionSource>(outcome: LoadOutcome, session: &Session<S>) -> String {
    match outcome {
        LoadOutcome::Loaded { added, total } => {
            let mut text = format!("Loaded {} transactions ({} total)", added, total);
            let footer = render_service::render_footer(session.feed.state().await);
            if !footer.is_empty() {
                text.push('\n');
                text.push_str(footer);
            }
            text
        }
        LoadOutcome::Busy => render_service::render_footer(FeedState::Loading).to_string(),
        LoadOutcome::Exhausted => render_service::render_footer(FeedState::Exhausted).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tests::test_session;

    #[tokio::test(start_paused = true)]
    async fn test_more_until_end() {
        let mut session = test_session();
        let first = more(&mut session).await.unwrap();
        assert_eq!(first, "Loaded 20 transactions (20 total)");

        for _ in 0..9 {
            more(&mut session).await.unwrap();
        }
        assert_eq!(session.feed.len().await, 200);
        assert_eq!(more(&mut session).await.unwrap(), "── End of transactions ──");
    }

    #[tokio::test(start_paused = true)]
    async fn test_scroll_respects_threshold() {
        let mut session = test_session();
        more(&mut session).await.unwrap();

        let content = {
            let sections = session.feed.sections().await;
            sections.len() + 20
        };

        // top of the list: far from the end
        let far = scroll(&mut session, &["0", "10"]).await.unwrap();
        assert!(far.contains("not loading yet"));
        assert_eq!(session.feed.len().await, 20);

        // bottom of the list
        let offset = (content - 10).to_string();
        scroll(&mut session, &[offset.as_str(), "10"]).await.unwrap();
        assert_eq!(session.feed.len().await, 40);
    }

    #[tokio::test(start_paused = true)]
    async fn test_scroll_usage() {
        let mut session = test_session();
        assert!(matches!(scroll(&mut session, &[]).await, Err(FeedError::InvalidCommand(_))));
        assert!(matches!(scroll(&mut session, &["abc"]).await, Err(FeedError::InvalidCommand(_))));
    }

    #[tokio::test(start_paused = true)]
    async fn test_scroll_rejects_empty_viewport() {
        let mut session = test_session();
        more(&mut session).await.unwrap();

        let err = scroll(&mut session, &["15", "0"]).await.unwrap_err();
        assert!(matches!(err, FeedError::InvalidCommand(ref msg) if msg.contains("at least one row")));
        assert_eq!(session.feed.len().await, 20);
    }
}
