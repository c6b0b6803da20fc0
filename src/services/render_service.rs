use crate::models::{FeedState, Section, Transaction, TransactionKind, TransactionStatus};
use crate::utils::{Align, Table};

/// Offset added to the numeric id to build the displayed receipt number
const TRANSACTION_NUMBER_BASE: u64 = 23_000_000;

pub struct FeedStats {
    pub held: usize,
    pub cap: usize,
    pub sections: usize,
    pub income: f64,
    pub expenses: f64,
    pub state: FeedState,
}

/// Render grouped sections as one text table per month
pub fn render_sections(sections: &[Section]) -> String {
    if sections.is_empty() {
        return "📋 No transactions found\n".to_string();
    }

    let mut output = String::new();
    for section in sections {
        let mut table = Table::new(&["ID", "Merchant", "Date", "Amount", "Status"])
            .with_title(format!("── {} ── net {:+.2} EUR", section.title, section.total_signed()))
            .align(0, Align::Right)
            .align(3, Align::Right);

        for tx in &section.items {
            table.add_row(vec![
                tx.id.clone(),
                tx.title.clone(),
                tx.formatted_date(),
                amount_cell(tx),
                status_pill(tx.status),
            ]);
        }

        output.push_str(&table.render());
        output.push('\n');
    }
    output
}

/// Declined amounts are shown struck through
fn amount_cell(tx: &Transaction) -> String {
    let amount = tx.formatted_amount();
    if tx.status == TransactionStatus::Declined {
        format!("~{}~", amount)
    } else {
        amount
    }
}

fn status_pill(status: TransactionStatus) -> String {
    let icon = match status {
        TransactionStatus::Completed => "✅",
        TransactionStatus::Pending => "⏳",
        TransactionStatus::Declined => "❌",
    };
    format!("{} {}", icon, status.as_str())
}

/// List footer: spinner text while loading, end marker once exhausted
pub fn render_footer(state: FeedState) -> &'static str {
    match state {
        FeedState::Loading => "Loading more...",
        FeedState::Exhausted => "── End of transactions ──",
        FeedState::Idle => "",
    }
}

/// Receipt-style details for a single transaction
pub fn render_details(tx: &Transaction) -> String {
    let (kind, payer) = match tx.kind {
        TransactionKind::Income => ("Income", "Admin"),
        TransactionKind::Expense => ("Expense", "You"),
    };

    let mut table = Table::new(&["Field", "Value"]).with_title("📜 Transaction details");
    table.add_row(vec!["Amount".to_string(), tx.formatted_amount()]);
    table.add_row(vec!["Type".to_string(), kind.to_string()]);
    table.add_row(vec!["Merchant".to_string(), tx.title.clone()]);
    table.add_row(vec!["Wallet".to_string(), "EUR".to_string()]);
    table.add_row(vec!["Payer".to_string(), payer.to_string()]);
    table.add_row(vec!["Status".to_string(), tx.status.as_str().to_string()]);
    table.add_row(vec!["Transaction number".to_string(), transaction_number(&tx.id)]);
    table.add_row(vec![
        "Payment date".to_string(),
        tx.date.format("%d/%m/%Y %H:%M").to_string(),
    ]);
    table.render()
}

/// `#23000042` for id `42`; non-numeric ids are shown as-is
pub fn transaction_number(id: &str) -> String {
    match id.parse::<u64>() {
        Ok(n) => format!("#{}", TRANSACTION_NUMBER_BASE + n),
        Err(_) => format!("#{}", id),
    }
}

/// Inverse of [`transaction_number`]: `#23000042` gives `42`
pub fn id_from_transaction_number(number: &str) -> Option<String> {
    let n = number.strip_prefix('#')?.parse::<u64>().ok()?;
    n.checked_sub(TRANSACTION_NUMBER_BASE)
        .filter(|&id| id > 0)
        .map(|id| id.to_string())
}

pub fn compute_stats(items: &[Transaction], sections: usize, cap: usize, state: FeedState) -> FeedStats {
    let (income, expenses) = items
        .iter()
        .filter(|tx| tx.counts_toward_balance())
        .fold((0.0, 0.0), |(inc, exp), tx| match tx.kind {
            TransactionKind::Income => (inc + tx.amount, exp),
            TransactionKind::Expense => (inc, exp + tx.amount),
        });

    FeedStats {
        held: items.len(),
        cap,
        sections,
        income,
        expenses,
        state,
    }
}

pub fn render_stats(stats: &FeedStats) -> String {
    let mut table = Table::new(&["Metric", "Value"])
        .with_title("📊 Feed")
        .align(1, Align::Right);
    table.add_row(vec!["Loaded".to_string(), format!("{}/{}", stats.held, stats.cap)]);
    table.add_row(vec!["Sections".to_string(), stats.sections.to_string()]);
    table.add_row(vec!["Income".to_string(), format!("+{:.2} EUR", stats.income)]);
    table.add_row(vec!["Expenses".to_string(), format!("-{:.2} EUR", stats.expenses)]);
    table.add_row(vec!["State".to_string(), stats.state.to_string()]);
    table.render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use crate::services::section_service::group_by_month;

    fn tx(id: &str, kind: TransactionKind, status: TransactionStatus, amount: f64) -> Transaction {
        Transaction {
            id: id.to_string(),
            title: "Refund".to_string(),
            amount,
            date: Utc.with_ymd_and_hms(2023, 12, 3, 16, 32, 0).unwrap(),
            kind,
            status,
        }
    }

    #[test]
    fn test_render_sections_lists_every_item() {
        let items = vec![
            tx("1", TransactionKind::Income, TransactionStatus::Completed, 80.0),
            tx("2", TransactionKind::Expense, TransactionStatus::Declined, 42.5),
        ];
        let rendered = render_sections(&group_by_month(&items));

        assert!(rendered.contains("── Dec 2023 ──"));
        assert!(rendered.contains("+80.00 EUR"));
        assert!(rendered.contains("~-42.50 EUR~"));
        assert!(rendered.contains("03/12/2023"));
        assert!(rendered.contains("❌ Declined"));
    }

    #[test]
    fn test_render_empty() {
        assert!(render_sections(&[]).contains("No transactions found"));
    }

    #[test]
    fn test_details() {
        let rendered = render_details(&tx("42", TransactionKind::Income, TransactionStatus::Pending, 80.0));
        assert!(rendered.contains("#23000042"));
        assert!(rendered.contains("03/12/2023 16:32"));
        assert!(rendered.contains("Admin"));
        assert!(rendered.contains("Pending"));
    }

    #[test]
    fn test_transaction_number_round_trip() {
        assert_eq!(transaction_number("42"), "#23000042");
        assert_eq!(id_from_transaction_number("#23000042"), Some("42".to_string()));
        assert_eq!(id_from_transaction_number("#12"), None);
        assert_eq!(id_from_transaction_number("42"), None);
    }

    #[test]
    fn test_stats_skip_declined() {
        let items = vec![
            tx("1", TransactionKind::Income, TransactionStatus::Completed, 100.0),
            tx("2", TransactionKind::Expense, TransactionStatus::Pending, 30.0),
            tx("3", TransactionKind::Expense, TransactionStatus::Declined, 500.0),
        ];
        let stats = compute_stats(&items, 1, 200, FeedState::Idle);
        assert_eq!(stats.held, 3);
        assert!((stats.income - 100.0).abs() < 1e-9);
        assert!((stats.expenses - 30.0).abs() < 1e-9);
        assert!(render_stats(&stats).contains("3/200"));

        // the section header uses the same rule as the stats
        let rendered = render_sections(&group_by_month(&items));
        assert!(rendered.contains("net +70.00 EUR"));
    }

    #[test]
    fn test_footer() {
        assert_eq!(render_footer(FeedState::Loading), "Loading more...");
        assert_eq!(render_footer(FeedState::Idle), "");
    }
}
