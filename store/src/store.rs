//! Connection service.
//!
//! Owns the single SQLite connection behind a mutex. Repositories borrow
//! the connection for one statement's construct-execute-read sequence and
//! release it on every exit path, so statement interleaving is impossible
//! and `last_insert_rowid` always refers to the caller's own insert.

use std::path::Path;

use parking_lot::{MappedMutexGuard, Mutex, MutexGuard};
use rusqlite::Connection;
use tracing::{debug, warn};

use crate::error::{Result, StoreError};
use crate::schema;

/// Shared SQLite handle with the schema applied.
pub struct Store {
    conn: Mutex<Option<Connection>>,
}

impl Store {
    /// Opens (creating if needed) a file-backed store.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA journal_mode=WAL;")?;
        schema::init(&conn)?;
        debug!(path = %path.display(), "store opened");
        Ok(Self {
            conn: Mutex::new(Some(conn)),
        })
    }

    /// Opens an in-memory store, mainly for tests.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        schema::init(&conn)?;
        Ok(Self {
            conn: Mutex::new(Some(conn)),
        })
    }

    /// Borrows the connection for one statement sequence.
    ///
    /// # Panics
    ///
    /// Panics if called after [`Store::close`].
    pub fn conn(&self) -> MappedMutexGuard<'_, Connection> {
        MutexGuard::map(self.conn.lock(), |conn| {
            conn.as_mut()
                .expect("store connection used after close()")
        })
    }

    /// Closes the connection. Safe to call more than once.
    pub fn close(&self) -> Result<()> {
        let mut guard = self.conn.lock();
        if let Some(conn) = guard.take() {
            conn.close().map_err(|(_, err)| StoreError::Query(err))?;
            debug!("store connection closed");
        }
        Ok(())
    }
}

impl Drop for Store {
    fn drop(&mut self) {
        if let Some(conn) = self.conn.get_mut().take() {
            if let Err((_, err)) = conn.close() {
                warn!("store connection close failed during drop: {err}");
            }
        }
    }
}
