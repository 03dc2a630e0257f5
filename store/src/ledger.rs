//! Composition root.
//!
//! A [`Ledger`] owns the store and one repository per entity, each wired
//! with its default registry. Code that needs a different vocabulary or
//! table (tests mostly) can build a [`Repository`] directly instead.

use std::path::Path;
use std::sync::Arc;

use crate::entities::accounts::{self, AccountEntity};
use crate::entities::banks::{self, BankEntity};
use crate::entities::categories::{self, CategoryEntity};
use crate::entities::transactions::{self, TransactionEntity};
use crate::entities::users::{self, UserEntity};
use crate::error::Result;
use crate::repository::Repository;
use crate::store::Store;

/// The assembled record-keeper: five repositories over one store.
pub struct Ledger {
    store: Arc<Store>,
    users: Repository<UserEntity>,
    banks: Repository<BankEntity>,
    accounts: Repository<AccountEntity>,
    categories: Repository<CategoryEntity>,
    transactions: Repository<TransactionEntity>,
}

impl Ledger {
    /// Opens (creating if needed) a file-backed ledger.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::assemble(Store::open(path)?))
    }

    /// Opens an in-memory ledger, mainly for tests.
    pub fn open_in_memory() -> Result<Self> {
        Ok(Self::assemble(Store::open_in_memory()?))
    }

    fn assemble(store: Store) -> Self {
        let store = Arc::new(store);
        Self {
            users: Repository::new(Arc::clone(&store), users::registry()),
            banks: Repository::new(Arc::clone(&store), banks::registry()),
            accounts: Repository::new(Arc::clone(&store), accounts::registry()),
            categories: Repository::new(Arc::clone(&store), categories::registry()),
            transactions: Repository::new(Arc::clone(&store), transactions::registry()),
            store,
        }
    }

    pub fn users(&self) -> &Repository<UserEntity> {
        &self.users
    }

    pub fn banks(&self) -> &Repository<BankEntity> {
        &self.banks
    }

    pub fn accounts(&self) -> &Repository<AccountEntity> {
        &self.accounts
    }

    pub fn categories(&self) -> &Repository<CategoryEntity> {
        &self.categories
    }

    pub fn transactions(&self) -> &Repository<TransactionEntity> {
        &self.transactions
    }

    /// Closes the underlying connection. Safe to call more than once.
    pub fn close(&self) -> Result<()> {
        self.store.close()
    }
}
