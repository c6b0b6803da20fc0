use chrono::{DateTime, Duration, Utc};
use crate::models::{Transaction, TransactionKind, TransactionStatus};
use crate::utils::RandomSource;

/// A merchant in the mock catalog
#[derive(Debug, Clone, Copy)]
pub struct Merchant {
    pub title: &'static str,
    pub kind: TransactionKind,
}

const fn expense(title: &'static str) -> Merchant {
    Merchant { title, kind: TransactionKind::Expense }
}

const fn income(title: &'static str) -> Merchant {
    Merchant { title, kind: TransactionKind::Income }
}

pub const MERCHANTS: [Merchant; 24] = [
    expense("Coffee Shop"),
    expense("Grocery Store"),
    expense("Gas Station"),
    expense("Ride Service"),
    expense("Restaurant"),
    expense("Online Store"),
    expense("Streaming Service"),
    expense("Gym Membership"),
    expense("Utilities"),
    expense("Pharmacy"),
    expense("Book Store"),
    expense("Pet Store"),
    expense("Taxi"),
    expense("Parking"),
    expense("Hardware Store"),
    expense("Travel"),
    expense("Hotel"),
    expense("Cafe"),
    expense("Bakery"),
    expense("Electronics"),
    income("Salary Deposit"),
    income("Freelance Payment"),
    income("Refund"),
    income("Cashback"),
];

/// Days back from "now" a generated date may fall, exclusive
const DATE_WINDOW_DAYS: f64 = 365.0;

/// Generates mock transactions with ids drawn from an owned counter
#[derive(Debug)]
pub struct FeedGenerator {
    next_id: u64,
}

impl Default for FeedGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedGenerator {
    /// Counter starts at 1
    pub fn new() -> Self {
        FeedGenerator { next_id: 1 }
    }

    /// Id the next generated transaction will get
    pub fn peek_next_id(&self) -> u64 {
        self.next_id
    }

    /// Generate `count` transactions dated relative to `now`
    ///
    /// Draws four values per item, in order: merchant, amount, days back, status.
    pub fn generate_batch<R>(&mut self, count: usize, rng: &mut R, now: DateTime<Utc>) -> Vec<Transaction>
    where
        R: RandomSource + ?Sized,
    {
        let mut items = Vec::with_capacity(count);
        for _ in 0..count {
            items.push(self.generate_one(rng, now));
        }
        items
    }

    fn generate_one<R>(&mut self, rng: &mut R, now: DateTime<Utc>) -> Transaction
    where
        R: RandomSource + ?Sized,
    {
        let merchant = MERCHANTS[rng.next_index(MERCHANTS.len())];

        let amount = match merchant.kind {
            TransactionKind::Income => 50.0 + rng.next_f64() * 3000.0,
            TransactionKind::Expense => 1.0 + rng.next_f64() * 300.0,
        };

        let days_back = (rng.next_f64() * DATE_WINDOW_DAYS).floor() as i64;
        let date = now - Duration::days(days_back.min(DATE_WINDOW_DAYS as i64 - 1));

        let status = TransactionStatus::from_draw(rng.next_f64());

        let id = self.next_id.to_string();
        self.next_id += 1;

        Transaction {
            id,
            title: merchant.title.to_string(),
            amount,
            date,
            kind: merchant.kind,
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::collections::HashSet;
    use crate::utils::{FixedSequence, RngSource};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_ids_continue_across_batches() {
        let mut generator = FeedGenerator::new();
        let mut rng = RngSource::seeded(1);

        let first = generator.generate_batch(20, &mut rng, now());
        let second = generator.generate_batch(20, &mut rng, now());

        let first_ids: Vec<String> = first.iter().map(|t| t.id.clone()).collect();
        let second_ids: Vec<String> = second.iter().map(|t| t.id.clone()).collect();
        assert_eq!(first_ids, (1..=20).map(|i| i.to_string()).collect::<Vec<_>>());
        assert_eq!(second_ids, (21..=40).map(|i| i.to_string()).collect::<Vec<_>>());

        let all: HashSet<&String> = first.iter().chain(second.iter()).map(|t| &t.id).collect();
        assert_eq!(all.len(), 40);
        assert_eq!(generator.peek_next_id(), 41);
    }

    #[test]
    fn test_fixed_draws_produce_expected_record() {
        let mut generator = FeedGenerator::new();
        // merchant 0 (Coffee Shop), amount 1 + 0.5 * 300, 10 days back, Pending
        let days = 10.0 / 365.0 + 1e-9;
        let mut rng = FixedSequence::new(vec![0.0, 0.5, days, 0.75]);

        let batch = generator.generate_batch(1, &mut rng, now());
        let tx = &batch[0];
        assert_eq!(tx.id, "1");
        assert_eq!(tx.title, "Coffee Shop");
        assert_eq!(tx.kind, TransactionKind::Expense);
        assert!((tx.amount - 151.0).abs() < 1e-9);
        assert_eq!(tx.date, now() - Duration::days(10));
        assert_eq!(tx.status, TransactionStatus::Pending);
    }

    #[test]
    fn test_income_amount_range() {
        let mut generator = FeedGenerator::new();
        // last catalog entry is Cashback (income)
        let mut rng = FixedSequence::new(vec![0.999, 0.0, 0.0, 0.0]);
        let tx = &generator.generate_batch(1, &mut rng, now())[0];
        assert_eq!(tx.title, "Cashback");
        assert_eq!(tx.kind, TransactionKind::Income);
        assert!((tx.amount - 50.0).abs() < 1e-9);
        assert_eq!(tx.date, now());
        assert_eq!(tx.status, TransactionStatus::Completed);
    }

    #[test]
    fn test_generated_values_stay_in_range() {
        let mut generator = FeedGenerator::new();
        let mut rng = RngSource::seeded(42);
        let oldest = now() - Duration::days(364);

        for tx in generator.generate_batch(500, &mut rng, now()) {
            assert!(tx.date <= now() && tx.date >= oldest);
            match tx.kind {
                TransactionKind::Income => assert!(tx.amount >= 50.0 && tx.amount < 3050.0),
                TransactionKind::Expense => assert!(tx.amount >= 1.0 && tx.amount < 301.0),
            }
        }
    }

    #[test]
    fn test_empty_batch_keeps_counter() {
        let mut generator = FeedGenerator::new();
        let mut rng = RngSource::seeded(3);
        assert!(generator.generate_batch(0, &mut rng, now()).is_empty());
        assert_eq!(generator.peek_next_id(), 1);
    }
}
