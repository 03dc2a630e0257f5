//! Personal finance record keeping over a relational store.
//!
//! Users own banks, banks hold accounts, accounts hold transactions, and
//! transactions may reference per-user categories. Every read and bulk
//! write goes through per-entity filter sets in which each constraint is
//! optional; the filter machinery renders them into parameterized SQL, so
//! values never appear in statement text.
//!
//! ## Usage
//!
//! ```
//! use bankbook_store::Ledger;
//! use bankbook_store::models::{NewBank, NewUser};
//!
//! # fn main() -> bankbook_store::Result<()> {
//! let ledger = Ledger::open_in_memory()?;
//! let user = ledger.users().add(&NewUser {
//!     name: "alice".into(),
//!     ..NewUser::default()
//! })?;
//! let bank = ledger.banks().add(&NewBank {
//!     user_id: user.id,
//!     name: "Main Street".into(),
//!     ..NewBank::default()
//! })?;
//! assert_eq!(bank.id, 1);
//! # Ok(())
//! # }
//! ```

pub mod entities;
pub mod error;
pub mod filters;
pub mod ledger;
pub mod models;
pub mod registry;
pub mod repository;
pub mod schema;
pub mod scope;
pub mod statement;
pub mod store;
pub mod value;

pub use error::{Result, StoreError};
pub use ledger::Ledger;
pub use repository::{Entity, Repository};
pub use store::Store;
pub use value::Value;
