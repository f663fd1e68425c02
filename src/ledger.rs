//! Aggregation and list views over a loaded set of transactions.

use rust_decimal::Decimal;

use crate::models::{Transaction, TransactionType};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Totals {
    pub income: Decimal,
    pub expense: Decimal,
    pub balance: Decimal,
}

/// Sums income and expense in one pass.
///
/// Amounts that are not non-negative numbers count as zero. A row that would
/// push its running sum past `Decimal::MAX` is left out of the totals.
pub fn totals(transactions: &[Transaction]) -> Totals {
    let mut income = Decimal::ZERO;
    let mut expense = Decimal::ZERO;

    for tx in transactions {
        let Some(amount) = tx.amount_value() else {
            log::warn!(
                "transaction {} has malformed amount {:?}, counting it as zero",
                tx.id,
                tx.amount
            );
            continue;
        };
        let sum = match tx.kind {
            TransactionType::Income => &mut income,
            TransactionType::Expense => &mut expense,
        };
        match sum.checked_add(amount) {
            Some(next) => *sum = next,
            None => log::warn!(
                "transaction {} amount {} overflows the {} total, leaving it out",
                tx.id,
                amount,
                tx.kind
            ),
        }
    }

    // Both sums are within [0, MAX], so the difference cannot overflow.
    Totals {
        income,
        expense,
        balance: income - expense,
    }
}

pub fn compute_balance(transactions: &[Transaction]) -> Decimal {
    totals(transactions).balance
}

/// Newest first. Same-day transactions keep their server order.
pub fn sort_by_date_desc(transactions: &mut [Transaction]) {
    transactions.sort_by(|a, b| b.date.cmp(&a.date));
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KindFilter {
    #[default]
    All,
    Only(TransactionType),
}

impl KindFilter {
    fn matches(&self, kind: TransactionType) -> bool {
        match self {
            KindFilter::All => true,
            KindFilter::Only(only) => *only == kind,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListFilter {
    pub kind: KindFilter,
    pub search: String,
}

impl ListFilter {
    pub fn is_active(&self) -> bool {
        self.kind != KindFilter::All || !self.search.trim().is_empty()
    }
}

/// Keeps the input order.
pub fn filter_transactions<'a>(
    transactions: &'a [Transaction],
    filter: &ListFilter,
) -> Vec<&'a Transaction> {
    let needle = filter.search.trim().to_lowercase();
    transactions
        .iter()
        .filter(|tx| filter.kind.matches(tx.kind))
        .filter(|tx| needle.is_empty() || tx.description.to_lowercase().contains(&needle))
        .collect()
}

pub fn recent(transactions: &[Transaction], count: usize) -> &[Transaction] {
    &transactions[..count.min(transactions.len())]
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    use super::*;

    fn tx(id: i64, amount: &str, kind: TransactionType, day: u32, description: &str) -> Transaction {
        Transaction {
            id,
            amount: amount.into(),
            kind,
            date: NaiveDate::from_ymd_opt(2024, 3, day).unwrap(),
            description: description.into(),
        }
    }

    fn sample() -> Vec<Transaction> {
        vec![
            tx(1, "1000", TransactionType::Income, 1, "Salary"),
            tx(2, "250.75", TransactionType::Expense, 5, "Groceries"),
            tx(3, "100", TransactionType::Income, 3, "Refund"),
            tx(4, "49.25", TransactionType::Expense, 5, "Grocery top-up"),
        ]
    }

    #[test]
    fn empty_list_has_zero_balance() {
        assert_eq!(compute_balance(&[]), Decimal::ZERO);
        assert_eq!(totals(&[]), Totals::default());
    }

    #[test]
    fn balance_is_income_minus_expense() {
        let t = totals(&sample());
        assert_eq!(t.income, dec!(1100));
        assert_eq!(t.expense, dec!(300.00));
        assert_eq!(t.balance, dec!(800));
        assert_eq!(compute_balance(&sample()), dec!(800));
    }

    #[test]
    fn balance_can_go_negative() {
        let list = vec![
            tx(1, "10", TransactionType::Income, 1, "a"),
            tx(2, "25.5", TransactionType::Expense, 2, "b"),
        ];
        assert_eq!(compute_balance(&list), dec!(-15.5));
    }

    #[test]
    fn malformed_amounts_count_as_zero() {
        let list = vec![
            tx(1, "20", TransactionType::Income, 1, "a"),
            tx(2, "twenty", TransactionType::Income, 1, "b"),
            tx(3, "", TransactionType::Expense, 1, "c"),
            tx(4, "-7", TransactionType::Expense, 1, "d"),
        ];
        assert_eq!(compute_balance(&list), dec!(20));
    }

    #[test]
    fn overflowing_row_is_left_out_of_totals() {
        let max = Decimal::MAX.to_string();
        let list = vec![
            tx(1, &max, TransactionType::Income, 1, "a"),
            tx(2, &max, TransactionType::Income, 2, "b"),
            tx(3, "10", TransactionType::Expense, 3, "c"),
            tx(4, &max, TransactionType::Expense, 4, "d"),
        ];
        assert!(list.iter().all(|t| t.amount_value().is_some()));

        let t = totals(&list);
        assert_eq!(t.income, Decimal::MAX);
        assert_eq!(t.expense, dec!(10));
        assert_eq!(t.balance, Decimal::MAX - dec!(10));
    }

    #[test]
    fn sort_is_non_increasing_by_date() {
        let mut list = sample();
        sort_by_date_desc(&mut list);
        assert!(list.windows(2).all(|w| w[0].date >= w[1].date));
        assert_eq!(list.iter().map(|t| t.id).collect::<Vec<_>>(), vec![2, 4, 3, 1]);
    }

    #[test]
    fn filter_by_kind_and_search_keeps_order() {
        let mut list = sample();
        sort_by_date_desc(&mut list);

        let expenses = filter_transactions(
            &list,
            &ListFilter {
                kind: KindFilter::Only(TransactionType::Expense),
                search: String::new(),
            },
        );
        assert_eq!(expenses.iter().map(|t| t.id).collect::<Vec<_>>(), vec![2, 4]);

        let search = ListFilter {
            kind: KindFilter::All,
            search: "  GROCER ".into(),
        };
        assert!(search.is_active());
        let found = filter_transactions(&list, &search);
        assert_eq!(found.iter().map(|t| t.id).collect::<Vec<_>>(), vec![2, 4]);

        assert!(!ListFilter::default().is_active());
        assert_eq!(filter_transactions(&list, &ListFilter::default()).len(), 4);
    }

    #[test]
    fn recent_takes_a_prefix() {
        let list = sample();
        assert_eq!(recent(&list, 2).len(), 2);
        assert_eq!(recent(&list, 2)[0].id, 1);
        assert_eq!(recent(&list, 10).len(), 4);
        assert!(recent(&[], 3).is_empty());
    }
}
