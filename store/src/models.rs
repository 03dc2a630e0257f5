//! Entity records, creation params, and filter sets.
//!
//! Field names in the serialized vocabulary are camelCase and match the
//! logical names registered for each entity, so a projection list taken
//! off the wire addresses registry fields directly.
//!
//! Records are what queries return, params are what creation takes (no
//! identity, the store assigns it), and filter sets are bags of optional
//! constraints where `None` always means "do not constrain".

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub name: String,
    pub password_hash: String,
    pub salt: String,
    pub administrator: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewUser {
    pub name: String,
    pub password_hash: String,
    pub salt: String,
    pub administrator: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserFilter {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub administrator: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bank {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewBank {
    pub user_id: i64,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankFilter {
    pub user_id: Option<i64>,
    pub ids: Option<Vec<i64>>,
    pub names: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: i64,
    pub bank_id: i64,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewAccount {
    pub bank_id: i64,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountFilter {
    pub ids: Option<Vec<i64>>,
    pub names: Option<Vec<String>>,
    pub bank_ids: Option<Vec<i64>>,
}

/// A transaction category. `parent_id` of zero means top-level.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub description: String,
    pub parent_id: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewCategory {
    pub user_id: i64,
    pub name: String,
    pub description: String,
    pub parent_id: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryFilter {
    pub user_id: Option<i64>,
    pub ids: Option<Vec<i64>>,
    pub names: Option<Vec<String>>,
    pub parent_ids: Option<Vec<i64>>,
}

/// A single ledger movement. `category_id` of zero means uncategorized.
///
/// Debit and credit are separate non-negative amounts, as on a bank
/// statement; exactly one of them is normally non-zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: i64,
    pub account_id: i64,
    pub label: String,
    pub category_id: i64,
    pub description: String,
    pub transaction_date: DateTime<Utc>,
    pub record_date: DateTime<Utc>,
    pub debit: f64,
    pub credit: f64,
    pub reference: String,
}

impl Default for Transaction {
    fn default() -> Self {
        Self {
            id: 0,
            account_id: 0,
            label: String::new(),
            category_id: 0,
            description: String::new(),
            transaction_date: DateTime::UNIX_EPOCH,
            record_date: DateTime::UNIX_EPOCH,
            debit: 0.0,
            credit: 0.0,
            reference: String::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewTransaction {
    pub account_id: i64,
    pub label: String,
    pub category_id: i64,
    pub description: String,
    pub transaction_date: DateTime<Utc>,
    pub record_date: DateTime<Utc>,
    pub debit: f64,
    pub credit: f64,
    pub reference: String,
}

impl Default for NewTransaction {
    fn default() -> Self {
        Self {
            account_id: 0,
            label: String::new(),
            category_id: 0,
            description: String::new(),
            transaction_date: DateTime::UNIX_EPOCH,
            record_date: DateTime::UNIX_EPOCH,
            debit: 0.0,
            credit: 0.0,
            reference: String::new(),
        }
    }
}

/// Transaction constraints: identifier sets, date windows, amount ranges.
///
/// Date and amount bounds are inclusive on both ends and can be used
/// singly or as a pair.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionFilter {
    pub ids: Option<Vec<i64>>,
    pub account_ids: Option<Vec<i64>>,
    pub category_ids: Option<Vec<i64>>,
    pub references: Option<Vec<String>>,
    pub from_transaction_date: Option<DateTime<Utc>>,
    pub to_transaction_date: Option<DateTime<Utc>>,
    pub from_record_date: Option<DateTime<Utc>>,
    pub to_record_date: Option<DateTime<Utc>>,
    pub min_debit: Option<f64>,
    pub max_debit: Option<f64>,
    pub min_credit: Option<f64>,
    pub max_credit: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn records_serialize_with_camel_case_names() {
        let account = Account {
            id: 3,
            bank_id: 5,
            name: "Checking".to_owned(),
            description: String::new(),
        };
        let json = serde_json::to_value(&account).unwrap();
        assert_eq!(json["bankId"], 5);
        assert_eq!(json["name"], "Checking");
    }

    #[test]
    fn user_vocabulary_uses_password_hash_name() {
        let json = serde_json::to_value(User::default()).unwrap();
        assert!(json.get("passwordHash").is_some());
        assert!(json.get("password_hash").is_none());
    }

    #[test]
    fn params_tolerate_missing_fields() {
        let params: NewAccount = serde_json::from_str(r#"{"bankId": 9}"#).unwrap();
        assert_eq!(params.bank_id, 9);
        assert_eq!(params.name, "");
    }

    #[test]
    fn filters_default_to_unconstrained() {
        let filter: TransactionFilter = serde_json::from_str("{}").unwrap();
        assert!(filter.ids.is_none());
        assert!(filter.from_transaction_date.is_none());
    }

    #[test]
    fn transaction_round_trips_through_json() {
        let tx = Transaction {
            id: 1,
            account_id: 2,
            label: "Groceries".to_owned(),
            transaction_date: Utc.with_ymd_and_hms(2016, 3, 1, 12, 0, 0).unwrap(),
            record_date: Utc.with_ymd_and_hms(2016, 3, 2, 8, 30, 0).unwrap(),
            debit: 42.5,
            ..Transaction::default()
        };
        let json = serde_json::to_string(&tx).unwrap();
        let back: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tx);
    }
}
