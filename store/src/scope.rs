//! Ownership traversal.
//!
//! Users own banks, banks hold accounts, accounts hold transactions.
//! These helpers walk that chain with one query per hop so callers can
//! scope reads and writes to what a user actually owns. Each hop is an
//! independent statement; nothing here is transactional, and a record
//! created between hops may or may not be seen.
//!
//! An owner with nothing at some level yields an empty id list, which
//! the next hop treats as "match nothing", never as "match everything".

use crate::entities::accounts::AccountEntity;
use crate::entities::banks::BankEntity;
use crate::entities::transactions::TransactionEntity;
use crate::error::Result;
use crate::models::{AccountFilter, BankFilter, TransactionFilter};
use crate::repository::Repository;

/// Ids of every bank owned by the user.
pub fn bank_ids_for_user(banks: &Repository<BankEntity>, user_id: i64) -> Result<Vec<i64>> {
    let filter = BankFilter {
        user_id: Some(user_id),
        ..BankFilter::default()
    };
    let banks = banks.get(&filter, &["id"], 0)?;
    Ok(banks.into_iter().map(|b| b.id).collect())
}

/// Ids of every account held at any of the given banks.
pub fn account_ids_for_banks(
    accounts: &Repository<AccountEntity>,
    bank_ids: Vec<i64>,
) -> Result<Vec<i64>> {
    let filter = AccountFilter {
        bank_ids: Some(bank_ids),
        ..AccountFilter::default()
    };
    let accounts = accounts.get(&filter, &["id"], 0)?;
    Ok(accounts.into_iter().map(|a| a.id).collect())
}

/// Ids of every account the user owns, through their banks.
pub fn account_ids_for_user(
    banks: &Repository<BankEntity>,
    accounts: &Repository<AccountEntity>,
    user_id: i64,
) -> Result<Vec<i64>> {
    let bank_ids = bank_ids_for_user(banks, user_id)?;
    account_ids_for_banks(accounts, bank_ids)
}

/// Ids of every transaction on any of the given accounts.
pub fn transaction_ids_for_accounts(
    transactions: &Repository<TransactionEntity>,
    account_ids: Vec<i64>,
) -> Result<Vec<i64>> {
    let filter = TransactionFilter {
        account_ids: Some(account_ids),
        ..TransactionFilter::default()
    };
    let transactions = transactions.get(&filter, &["id"], 0)?;
    Ok(transactions.into_iter().map(|t| t.id).collect())
}
