use crate::services::feed_service::TransactionSource;
use crate::services::render_service;
use crate::utils::FeedError;
use super::Session;

/// Render the current sections with the active filter applied
pub async fn execute<S: TransactionSource>(session: &mut Session<S>) -> Result<String, FeedError> {
    let sections = session.feed.sections_filtered(&session.filter).await;
    let mut output = String::new();

    if !session.filter.is_empty() {
        output.push_str(&format!("🔎 Filter: {}\n\n", session.filter.describe()));
    }
    output.push_str(&render_service::render_sections(&sections));

    let footer = render_service::render_footer(session.feed.state().await);
    if !footer.is_empty() {
        output.push_str(footer);
        output.push('\n');
    }
    Ok(output)
}

/// Current sections as JSON
pub async fn export<S: TransactionSource>(session: &mut Session<S>) -> Result<String, FeedError> {
    let sections = session.feed.sections_filtered(&session.filter).await;
    Ok(serde_json::to_string_pretty(&sections)?)
}

pub async fn stats<S: TransactionSource>(session: &mut Session<S>) -> Result<String, FeedError> {
    let items = session.feed.items().await;
    let sections = session.feed.sections().await.len();
    let stats = render_service::compute_stats(
        &items,
        sections,
        session.feed.config().max_items,
        session.feed.state().await,
    );
    Ok(render_service::render_stats(&stats))
}
