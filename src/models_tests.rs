use chrono::NaiveDate;
use rust_decimal_macros::dec;

use super::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn draft(amount: &str, description: &str) -> Draft {
    Draft {
        amount: amount.into(),
        kind: TransactionType::Expense,
        date: date(2024, 5, 2),
        description: description.into(),
    }
}

// ── Transaction decoding ──────────────────────────────────────

#[test]
fn decodes_api_transaction() {
    let json = r#"{"id":7,"amount":"12.50","type":"EXPENSE","date":"2024-05-02","description":"Lunch"}"#;
    let tx: Transaction = serde_json::from_str(json).unwrap();
    assert_eq!(tx.id, 7);
    assert_eq!(tx.amount, "12.50");
    assert_eq!(tx.kind, TransactionType::Expense);
    assert_eq!(tx.date, date(2024, 5, 2));
    assert_eq!(tx.amount_value(), Some(dec!(12.50)));
}

#[test]
fn decodes_numeric_amount_and_timestamp_date() {
    let json = r#"{"id":1,"amount":40,"type":"INCOME","date":"2024-01-31T00:00:00.000Z","description":"Gift"}"#;
    let tx: Transaction = serde_json::from_str(json).unwrap();
    assert_eq!(tx.amount, "40");
    assert_eq!(tx.date, date(2024, 1, 31));
    assert!(tx.is_income());
}

#[test]
fn missing_description_decodes_as_empty() {
    let json = r#"{"id":3,"amount":"1","type":"INCOME","date":"2024-01-01"}"#;
    let tx: Transaction = serde_json::from_str(json).unwrap();
    assert!(tx.description.is_empty());
}

#[test]
fn unknown_type_is_rejected() {
    let json = r#"{"id":3,"amount":"1","type":"TRANSFER","date":"2024-01-01","description":"x"}"#;
    assert!(serde_json::from_str::<Transaction>(json).is_err());
}

#[test]
fn malformed_and_negative_amounts_have_no_value() {
    let mut tx: Transaction = serde_json::from_str(
        r#"{"id":1,"amount":"abc","type":"INCOME","date":"2024-01-01","description":"x"}"#,
    )
    .unwrap();
    assert_eq!(tx.amount_value(), None);

    tx.amount = "-5".into();
    assert_eq!(tx.amount_value(), None);

    tx.amount = " 0 ".into();
    assert_eq!(tx.amount_value(), Some(dec!(0)));
}

// ── Draft validation ──────────────────────────────────────────

#[test]
fn default_draft_is_income_dated_today() {
    let d = Draft::default();
    assert_eq!(d.kind, TransactionType::Income);
    assert_eq!(d.date, today());
    assert!(d.amount.is_empty());
    assert!(d.description.is_empty());
}

#[test]
fn empty_amount_is_rejected() {
    assert_eq!(
        draft("  ", "Rent").validate(),
        Err(ValidationError::MissingAmount)
    );
}

#[test]
fn empty_description_is_rejected() {
    assert_eq!(
        draft("10", "").validate(),
        Err(ValidationError::MissingDescription)
    );
}

#[test]
fn non_numeric_amount_is_rejected() {
    assert_eq!(
        draft("ten", "Rent").validate(),
        Err(ValidationError::InvalidAmount("ten".into()))
    );
    assert_eq!(
        draft("-3", "Rent").validate(),
        Err(ValidationError::InvalidAmount("-3".into()))
    );
}

#[test]
fn valid_draft_becomes_payload() {
    let payload = draft(" 50.00 ", " Pay ").validate().unwrap();
    assert_eq!(payload.amount, "50");
    assert_eq!(payload.description, "Pay");
    assert_eq!(payload.kind, TransactionType::Expense);

    let json = serde_json::to_value(&payload).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "amount": "50",
            "type": "EXPENSE",
            "date": "2024-05-02",
            "description": "Pay",
        })
    );
}

#[test]
fn option_values_round_to_types() {
    assert_eq!(
        TransactionType::from_option("EXPENSE"),
        Some(TransactionType::Expense)
    );
    assert_eq!(TransactionType::from_option("other"), None);
}
