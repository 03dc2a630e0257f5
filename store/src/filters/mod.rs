//! Query filter system
//!
//! Turns optional per-entity filter sets into parameterized `WHERE` clauses.
//! Every filter term is optional; absent terms contribute nothing, present
//! terms are combined with `AND`, and set terms expand to `OR` groups with
//! one placeholder per value.
//!
//! ## Usage
//!
//! ```
//! use bankbook_store::entities::accounts;
//! use bankbook_store::filters::{Predicate, build_condition};
//! use bankbook_store::value::Value;
//!
//! let registry = accounts::registry();
//! let predicates = [Predicate::AnyOf("bankId", Value::ints(&[5, 7]))];
//! let condition = build_condition(&predicates, &registry).unwrap();
//! assert_eq!(condition.clause(), "( bank_id = ? OR bank_id = ? )");
//! ```

mod builder;
mod types;

pub use builder::build_condition;
pub use types::{Condition, Predicate};
