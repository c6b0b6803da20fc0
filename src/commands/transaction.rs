use crate::services::feed_service::TransactionSource;
use crate::services::render_service;
use crate::utils::FeedError;
use super::Session;

/// `$show <id>`: details for a loaded transaction
pub async fn execute<S: TransactionSource>(session: &mut Session<S>, args: &[&str]) -> Result<String, FeedError> {
    let id = args.first().ok_or_else(|| {
        FeedError::InvalidCommand("Usage: `$show <id>` (ids are listed by `$list`)".to_string())
    })?;

    // accept the receipt form too, e.g. #23000042
    let id = render_service::id_from_transaction_number(id).unwrap_or_else(|| id.to_string());

    let tx = session.feed.find(&id).await?;
    Ok(render_service::render_details(&tx))
}
