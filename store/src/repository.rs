//! Generic entity repository.
//!
//! One implementation of Add/Get/Update/Remove/Count serves every entity;
//! the per-entity differences (vocabulary, filter lowering, creation
//! checks) are supplied through the [`Entity`] descriptor and the
//! [`Registry`] the repository is constructed with.

use std::sync::Arc;

use rusqlite::params_from_iter;
use tracing::debug;

use crate::error::{Result, StoreError};
use crate::filters::{Predicate, build_condition};
use crate::registry::Registry;
use crate::statement;
use crate::store::Store;
use crate::value::Value;

/// Per-entity behavior a repository needs beyond its registry.
pub trait Entity {
    /// Entity name used in logs and error payloads.
    const NAME: &'static str;

    /// Logical names of reference fields that must be set at creation.
    ///
    /// A reference value of integer zero counts as unset and rejects the
    /// creation before any statement is issued.
    const REQUIRED_REFS: &'static [&'static str];

    type Record: Default;
    type Params;
    type Filter;

    /// Lowers the filter set into predicates.
    ///
    /// The order of the returned vector is fixed per entity and decides
    /// both clause text and argument order.
    fn predicates(filter: &Self::Filter) -> Vec<Predicate>;

    /// Materializes the stored record from the assigned identity and the
    /// creation params, without a read-back query.
    fn record(id: i64, params: &Self::Params) -> Self::Record;
}

/// CRUD over one entity's table.
pub struct Repository<E: Entity> {
    store: Arc<Store>,
    registry: Registry<E::Record, E::Params>,
}

impl<E: Entity> Repository<E> {
    pub fn new(store: Arc<Store>, registry: Registry<E::Record, E::Params>) -> Self {
        Self { store, registry }
    }

    pub fn registry(&self) -> &Registry<E::Record, E::Params> {
        &self.registry
    }

    /// Inserts a new record and returns it with its assigned identity.
    pub fn add(&self, params: &E::Params) -> Result<E::Record> {
        for &logical in E::REQUIRED_REFS {
            if let Some(field) = self.registry.field(logical) {
                if let Some(param) = field.param {
                    if matches!(param(params), Value::Int(0)) {
                        return Err(StoreError::missing_field(E::NAME, logical));
                    }
                }
            }
        }

        let fields = self.registry.insert_fields();
        let columns = Registry::columns_of(&fields);
        let values: Vec<Value> = fields
            .iter()
            .filter_map(|f| f.param.map(|param| param(params)))
            .collect();
        let sql = statement::insert(self.registry.table(), &columns, &values);

        let conn = self.store.conn();
        debug!(entity = E::NAME, sql = %sql, args = values.len(), "insert");
        conn.execute(&sql, params_from_iter(values.iter()))?;
        let id = conn.last_insert_rowid();
        Ok(E::record(id, params))
    }

    /// Fetches records matching the filter, projected onto the named
    /// fields in caller order. A limit of zero means unbounded.
    ///
    /// Fields left out of the projection keep their default value on the
    /// returned records.
    pub fn get(&self, filter: &E::Filter, wanted: &[&str], limit: u32) -> Result<Vec<E::Record>> {
        let Some(condition) = build_condition(&E::predicates(filter), &self.registry) else {
            debug!(entity = E::NAME, "filter excludes all rows, skipping select");
            return Ok(Vec::new());
        };

        let fields = self.registry.resolve(wanted);
        let columns = Registry::columns_of(&fields);
        let (mut sql, mut args) = statement::select(self.registry.table(), &columns, condition);
        statement::apply_limit(&mut sql, &mut args, limit);

        let conn = self.store.conn();
        debug!(entity = E::NAME, sql = %sql, args = args.len(), "select");
        let mut stmt = conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(args.iter()))?;
        let mut records = Vec::new();
        while let Some(row) = rows.next()? {
            let mut record = E::Record::default();
            for (idx, field) in fields.iter().enumerate() {
                (field.read)(&mut record, row, idx)?;
            }
            records.push(record);
        }
        Ok(records)
    }

    /// Rewrites the named fields on every matching record and returns the
    /// affected row count. The identity field is never updatable and is
    /// dropped from the change list if named.
    pub fn update(
        &self,
        filter: &E::Filter,
        changes: &[&str],
        params: &E::Params,
    ) -> Result<usize> {
        let Some(condition) = build_condition(&E::predicates(filter), &self.registry) else {
            debug!(entity = E::NAME, "filter excludes all rows, skipping update");
            return Ok(0);
        };

        let mut columns = Vec::new();
        let mut values = Vec::new();
        for field in self.registry.resolve(changes) {
            if let Some(param) = field.param {
                columns.push(field.column);
                values.push(param(params));
            }
        }
        let (sql, args) = statement::update(self.registry.table(), &columns, values, condition);

        let conn = self.store.conn();
        debug!(entity = E::NAME, sql = %sql, args = args.len(), "update");
        let affected = conn.execute(&sql, params_from_iter(args.iter()))?;
        Ok(affected)
    }

    /// Deletes every matching record and returns the affected row count.
    pub fn remove(&self, filter: &E::Filter) -> Result<usize> {
        let Some(condition) = build_condition(&E::predicates(filter), &self.registry) else {
            debug!(entity = E::NAME, "filter excludes all rows, skipping delete");
            return Ok(0);
        };

        let (sql, args) = statement::delete(self.registry.table(), condition);
        let conn = self.store.conn();
        debug!(entity = E::NAME, sql = %sql, args = args.len(), "delete");
        let affected = conn.execute(&sql, params_from_iter(args.iter()))?;
        Ok(affected)
    }

    /// Counts matching records without fetching them.
    pub fn count(&self, filter: &E::Filter) -> Result<u64> {
        let Some(condition) = build_condition(&E::predicates(filter), &self.registry) else {
            return Ok(0);
        };

        let (sql, args) = statement::select(self.registry.table(), &["count(*)"], condition);
        let conn = self.store.conn();
        debug!(entity = E::NAME, sql = %sql, "count");
        let count: i64 = conn.query_row(&sql, params_from_iter(args.iter()), |row| row.get(0))?;
        Ok(u64::try_from(count).unwrap_or(0))
    }
}
