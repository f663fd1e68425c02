use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ValidationError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "INCOME",
            TransactionType::Expense => "EXPENSE",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TransactionType::Income => "Income",
            TransactionType::Expense => "Expense",
        }
    }

    /// Parses the value of a `<select>` option.
    pub fn from_option(value: &str) -> Option<Self> {
        match value {
            "INCOME" => Some(TransactionType::Income),
            "EXPENSE" => Some(TransactionType::Expense),
            _ => None,
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A transaction as the finance API returns it.
///
/// `amount` keeps the server's text so that a malformed value can still be
/// listed; use [`Transaction::amount_value`] for arithmetic.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    #[serde(deserialize_with = "amount_text")]
    pub amount: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    #[serde(deserialize_with = "calendar_date")]
    pub date: NaiveDate,
    #[serde(default)]
    pub description: String,
}

impl Transaction {
    /// The amount as a decimal, or `None` when it is not a non-negative number.
    pub fn amount_value(&self) -> Option<Decimal> {
        parse_amount(&self.amount)
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionType::Income
    }
}

fn parse_amount(raw: &str) -> Option<Decimal> {
    Decimal::from_str(raw.trim())
        .ok()
        .filter(|value| !value.is_sign_negative() || value.is_zero())
}

fn amount_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(text) => text,
        Raw::Number(number) => number.to_string(),
    })
}

// Accepts "2024-03-01" as well as "2024-03-01T00:00:00.000Z".
fn calendar_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    let prefix = raw.get(..10).unwrap_or(&raw);
    NaiveDate::parse_from_str(prefix, "%Y-%m-%d").map_err(serde::de::Error::custom)
}

/// Body of `POST /finance/transaction`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewTransaction {
    pub amount: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub date: NaiveDate,
    pub description: String,
}

/// Form input that has not been sent to the server yet.
#[derive(Clone, Debug, PartialEq)]
pub struct Draft {
    pub amount: String,
    pub kind: TransactionType,
    pub date: NaiveDate,
    pub description: String,
}

impl Default for Draft {
    fn default() -> Self {
        Self {
            amount: String::new(),
            kind: TransactionType::Income,
            date: today(),
            description: String::new(),
        }
    }
}

impl Draft {
    pub fn validate(&self) -> Result<NewTransaction, ValidationError> {
        let amount = self.amount.trim();
        if amount.is_empty() {
            return Err(ValidationError::MissingAmount);
        }
        let description = self.description.trim();
        if description.is_empty() {
            return Err(ValidationError::MissingDescription);
        }
        let value =
            parse_amount(amount).ok_or_else(|| ValidationError::InvalidAmount(amount.to_string()))?;

        Ok(NewTransaction {
            amount: value.normalize().to_string(),
            kind: self.kind,
            date: self.date,
            description: description.to_string(),
        })
    }
}

/// Today's date in UTC, which is what the date input defaults to.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

#[cfg(test)]
#[path = "models_tests.rs"]
mod tests;
