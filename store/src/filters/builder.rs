//! Condition construction.
//!
//! Turns a lowered predicate vector into a parameterized `WHERE` body.
//! Text and arguments are produced in one pass so their orders can never
//! drift apart.

use crate::registry::Registry;

use super::types::{Condition, Predicate};

/// Builds the `WHERE` body for a predicate vector.
///
/// Returns `None` when any set predicate carries an empty value list: an
/// explicitly empty set can match no row, so callers skip the database
/// round-trip entirely instead of sending a contradiction. An empty
/// predicate vector yields `Some` of an empty condition, meaning
/// unconstrained.
///
/// Logical field names resolve to physical columns through the registry;
/// names the registry does not know pass through untouched and surface
/// later as a statement error.
pub fn build_condition<R, P>(
    predicates: &[Predicate],
    registry: &Registry<R, P>,
) -> Option<Condition> {
    let mut fragments: Vec<String> = Vec::with_capacity(predicates.len());
    let mut args = Vec::new();

    for predicate in predicates {
        let column = registry.column(predicate.field());
        match predicate {
            Predicate::Eq(_, value) => {
                fragments.push(format!("{column} = ?"));
                args.push(value.clone());
            }
            Predicate::AnyOf(_, values) => {
                if values.is_empty() {
                    return None;
                }
                let disjuncts: Vec<String> =
                    values.iter().map(|_| format!("{column} = ?")).collect();
                fragments.push(format!("( {} )", disjuncts.join(" OR ")));
                args.extend(values.iter().cloned());
            }
            Predicate::AtLeast(_, value) => {
                fragments.push(format!("{column} >= ?"));
                args.push(value.clone());
            }
            Predicate::AtMost(_, value) => {
                fragments.push(format!("{column} <= ?"));
                args.push(value.clone());
            }
        }
    }

    Some(Condition::new(fragments.join(" AND "), args))
}
