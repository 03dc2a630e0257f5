//! Entity descriptors.
//!
//! One module per entity, each declaring its marker type, its default
//! field registry, and how its filter set lowers into predicates. The
//! lowering order inside each `predicates` implementation is part of the
//! entity's contract: it fixes the clause text a given filter produces.

pub mod accounts;
pub mod banks;
pub mod categories;
pub mod transactions;
pub mod users;
