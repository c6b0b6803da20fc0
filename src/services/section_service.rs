use std::collections::BTreeMap;
use chrono::Datelike;
use crate::models::transaction::month_label;
use crate::models::{Section, Transaction, TransactionFilter};

/// Bucket transactions by calendar month
///
/// Sections come back newest month first, compared as numeric (year, month)
/// rather than by label. Items inside a section are newest first; equal
/// dates keep their input order.
pub fn group_by_month(transactions: &[Transaction]) -> Vec<Section> {
    group_matching(transactions, |_| true)
}

/// Same as [`group_by_month`] over the transactions the filter accepts.
/// Months with no matching transaction are left out.
pub fn group_filtered(transactions: &[Transaction], filter: &TransactionFilter) -> Vec<Section> {
    group_matching(transactions, |tx| filter.matches(tx))
}

fn group_matching<F>(transactions: &[Transaction], keep: F) -> Vec<Section>
where
    F: Fn(&Transaction) -> bool,
{
    let mut buckets: BTreeMap<(i32, u32), Vec<Transaction>> = BTreeMap::new();

    for tx in transactions.iter().filter(|tx| keep(*tx)) {
        buckets
            .entry((tx.date.year(), tx.date.month()))
            .or_default()
            .push(tx.clone());
    }

    buckets
        .into_iter()
        .rev()
        .map(|((year, month), mut items)| {
            // sort_by is stable
            items.sort_by(|a, b| b.date.cmp(&a.date));
            Section {
                title: month_label(year, month),
                year,
                month,
                items,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use crate::models::{TransactionKind, TransactionStatus};

    fn tx(id: &str, y: i32, m: u32, d: u32) -> Transaction {
        Transaction {
            id: id.to_string(),
            title: "Bakery".to_string(),
            amount: 3.2,
            date: Utc.with_ymd_and_hms(y, m, d, 9, 30, 0).unwrap(),
            kind: TransactionKind::Expense,
            status: TransactionStatus::Completed,
        }
    }

    fn titles(sections: &[Section]) -> Vec<&str> {
        sections.iter().map(|s| s.title.as_str()).collect()
    }

    fn ids(section: &Section) -> Vec<&str> {
        section.items.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn test_sections_newest_month_first_across_years() {
        let sections = group_by_month(&[
            tx("1", 2024, 1, 10),
            tx("2", 2023, 12, 10),
            tx("3", 2024, 2, 10),
        ]);
        assert_eq!(titles(&sections), vec!["Feb 2024", "Jan 2024", "Dec 2023"]);
    }

    #[test]
    fn test_numeric_month_order_not_lexical() {
        // "Sep" < "Oct" < "Nov" lexically would be wrong here
        let sections = group_by_month(&[
            tx("1", 2024, 9, 1),
            tx("2", 2024, 11, 1),
            tx("3", 2024, 10, 1),
            tx("4", 2023, 11, 1),
        ]);
        assert_eq!(titles(&sections), vec!["Nov 2024", "Oct 2024", "Sep 2024", "Nov 2023"]);
    }

    #[test]
    fn test_items_newest_first() {
        let sections = group_by_month(&[
            tx("a", 2024, 3, 5),
            tx("b", 2024, 3, 1),
            tx("c", 2024, 3, 20),
        ]);
        assert_eq!(sections.len(), 1);
        assert_eq!(ids(&sections[0]), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_equal_dates_keep_input_order() {
        let sections = group_by_month(&[
            tx("x", 2024, 3, 5),
            tx("y", 2024, 3, 5),
            tx("z", 2024, 3, 6),
        ]);
        assert_eq!(ids(&sections[0]), vec!["z", "x", "y"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(group_by_month(&[]).is_empty());
    }

    #[test]
    fn test_filter_drops_empty_sections() {
        let mut pending = tx("p", 2024, 1, 3);
        pending.status = TransactionStatus::Pending;
        let mut income = tx("i", 2024, 2, 3);
        income.kind = TransactionKind::Income;

        let all = vec![tx("c", 2024, 2, 1), pending, income];

        let filter = TransactionFilter::default().with_status(TransactionStatus::Pending);
        let sections = group_filtered(&all, &filter);
        assert_eq!(titles(&sections), vec!["Jan 2024"]);
        assert_eq!(ids(&sections[0]), vec!["p"]);

        let filter = TransactionFilter::default().with_kind(TransactionKind::Income);
        let sections = group_filtered(&all, &filter);
        assert_eq!(titles(&sections), vec!["Feb 2024"]);
        assert_eq!(ids(&sections[0]), vec!["i"]);

        let sections = group_filtered(&all, &TransactionFilter::default());
        assert_eq!(sections.iter().map(|s| s.items.len()).sum::<usize>(), 3);
    }
}
