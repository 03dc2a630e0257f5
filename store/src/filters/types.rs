//! Filter predicate and condition types.

use crate::value::Value;

/// One lowered filter term, addressed by logical field name.
///
/// Entity descriptors lower their optional filter sets into a vector of
/// predicates; the order of that vector is part of each entity's contract
/// because it fixes both the clause text and the argument order.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// `field = ?`
    Eq(&'static str, Value),
    /// `( field = ? OR field = ? ... )`, one disjunct per value.
    AnyOf(&'static str, Vec<Value>),
    /// `field >= ?`
    AtLeast(&'static str, Value),
    /// `field <= ?`
    AtMost(&'static str, Value),
}

impl Predicate {
    /// The logical field name this predicate constrains.
    pub fn field(&self) -> &'static str {
        match self {
            Predicate::Eq(field, _)
            | Predicate::AnyOf(field, _)
            | Predicate::AtLeast(field, _)
            | Predicate::AtMost(field, _) => field,
        }
    }
}

/// A rendered `WHERE` body plus its bound arguments.
///
/// The clause contains exactly one `?` placeholder per entry in `args`,
/// in matching order. An empty condition means "match everything" and
/// renders no `WHERE` at all; "match nothing" is not representable here
/// because the builder short-circuits before constructing one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Condition {
    clause: String,
    args: Vec<Value>,
}

impl Condition {
    pub fn new(clause: String, args: Vec<Value>) -> Self {
        debug_assert_eq!(
            clause.matches('?').count(),
            args.len(),
            "placeholder count must match argument count"
        );
        Self { clause, args }
    }

    /// The `WHERE` body without the keyword, empty when unconstrained.
    pub fn clause(&self) -> &str {
        &self.clause
    }

    pub fn args(&self) -> &[Value] {
        &self.args
    }

    pub fn is_empty(&self) -> bool {
        self.clause.is_empty()
    }

    pub fn into_parts(self) -> (String, Vec<Value>) {
        (self.clause, self.args)
    }
}
