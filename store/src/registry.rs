//! Field registries.
//!
//! A registry is the single authority on one entity's field vocabulary: the
//! logical name callers use, the physical column it maps to, how to pull the
//! field out of creation params, and how to read it back off a result row.
//! Repositories are handed a registry at construction, so tests can swap in
//! an alternate table or vocabulary without touching repository code.

use rusqlite::Row;

use crate::value::Value;

/// One entity field, declared as data.
///
/// `param` is `None` for fields that are not supplied at creation time,
/// which in practice means the identity column.
pub struct FieldDef<R, P> {
    /// Name used by filters, projections, and the wire vocabulary.
    pub logical: &'static str,
    /// Column name in the backing table.
    pub column: &'static str,
    /// Extracts this field's value from creation params, if it has one.
    pub param: Option<fn(&P) -> Value>,
    /// Assigns this field from column `idx` of a result row.
    pub read: fn(&mut R, &Row<'_>, usize) -> rusqlite::Result<()>,
}

/// An entity's table name plus its ordered field declarations.
///
/// Declaration order is load-bearing: insert column order and default
/// projection order both follow it.
pub struct Registry<R, P> {
    table: &'static str,
    fields: Vec<FieldDef<R, P>>,
}

impl<R, P> Registry<R, P> {
    pub fn new(table: &'static str, fields: Vec<FieldDef<R, P>>) -> Self {
        debug_assert!(!fields.is_empty(), "registry needs at least one field");
        Self { table, fields }
    }

    pub fn table(&self) -> &'static str {
        self.table
    }

    /// Looks up a field by logical name.
    pub fn field(&self, logical: &str) -> Option<&FieldDef<R, P>> {
        self.fields.iter().find(|f| f.logical == logical)
    }

    /// Resolves a logical name to its column.
    ///
    /// Unknown names pass through unchanged; the resulting statement then
    /// fails at the database and surfaces as a query error.
    pub fn column<'a>(&self, logical: &'a str) -> &'a str {
        match self.field(logical) {
            Some(field) => field.column,
            None => logical,
        }
    }

    /// Selects the named fields in registry declaration order.
    ///
    /// Names the registry does not know are skipped.
    pub fn project(&self, wanted: &[&str]) -> Vec<&FieldDef<R, P>> {
        self.fields
            .iter()
            .filter(|f| wanted.contains(&f.logical))
            .collect()
    }

    /// Selects the named fields in the caller's order.
    ///
    /// Used wherever clause text and argument binding must share one
    /// ordering. Unknown names are skipped, duplicates are kept.
    pub fn resolve(&self, wanted: &[&str]) -> Vec<&FieldDef<R, P>> {
        wanted.iter().filter_map(|w| self.field(w)).collect()
    }

    /// All param-bearing fields in declaration order, i.e. the insert shape.
    pub fn insert_fields(&self) -> Vec<&FieldDef<R, P>> {
        self.fields.iter().filter(|f| f.param.is_some()).collect()
    }

    /// Logical names of every declared field, in declaration order.
    pub fn logical_names(&self) -> Vec<&'static str> {
        self.fields.iter().map(|f| f.logical).collect()
    }

    /// Column names for an already-selected field list.
    pub fn columns_of(fields: &[&FieldDef<R, P>]) -> Vec<&'static str> {
        fields.iter().map(|f| f.column).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Probe;

    fn probe_registry() -> Registry<Probe, ()> {
        Registry::new(
            "probes",
            vec![
                FieldDef {
                    logical: "id",
                    column: "id",
                    param: None,
                    read: |_, _, _| Ok(()),
                },
                FieldDef {
                    logical: "ownerId",
                    column: "owner_id",
                    param: Some(|_| Value::Int(0)),
                    read: |_, _, _| Ok(()),
                },
                FieldDef {
                    logical: "name",
                    column: "name",
                    param: Some(|_| Value::Text(String::new())),
                    read: |_, _, _| Ok(()),
                },
            ],
        )
    }

    #[test]
    fn column_maps_logical_names() {
        let registry = probe_registry();
        assert_eq!(registry.column("ownerId"), "owner_id");
        assert_eq!(registry.column("id"), "id");
    }

    #[test]
    fn column_passes_unknown_names_through() {
        assert_eq!(probe_registry().column("mystery"), "mystery");
    }

    #[test]
    fn project_follows_declaration_order() {
        let registry = probe_registry();
        let fields = registry.project(&["name", "id"]);
        let columns = Registry::columns_of(&fields);
        assert_eq!(columns, ["id", "name"]);
    }

    #[test]
    fn resolve_follows_caller_order() {
        let registry = probe_registry();
        let fields = registry.resolve(&["name", "id"]);
        let columns = Registry::columns_of(&fields);
        assert_eq!(columns, ["name", "id"]);
    }

    #[test]
    fn resolve_skips_unknown_names() {
        let registry = probe_registry();
        let fields = registry.resolve(&["name", "mystery", "id"]);
        assert_eq!(fields.len(), 2);
    }

    #[test]
    fn insert_fields_exclude_identity() {
        let registry = probe_registry();
        let fields = registry.insert_fields();
        let columns = Registry::columns_of(&fields);
        assert_eq!(columns, ["owner_id", "name"]);
    }

    #[test]
    fn logical_names_list_declared_vocabulary() {
        assert_eq!(
            probe_registry().logical_names(),
            ["id", "ownerId", "name"]
        );
    }
}
