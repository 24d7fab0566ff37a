//! # jml-db
//!
//! libSQL persistence for JML process records and their checklists.
//!
//! Each process kind (onboarding, mover, offboarding) owns a process table and
//! a task table with a cascading foreign key. Process rows carry a `version`
//! column that every write bumps, so the tracker can detect lost updates.
//! Completion workflows are queued in `workflow_outbox` for an external runner.

pub mod error;
pub mod helpers;
pub mod kinds;
mod migrations;
pub mod notifier;
pub mod repos;
pub mod service;
pub mod store;

#[cfg(test)]
mod test_support;

use error::DatabaseError;
use libsql::Builder;

pub use notifier::OutboxNotifier;
pub use service::JmlService;
pub use store::KindStore;

/// Database handle: one libSQL database and its connection.
pub struct JmlDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl JmlDb {
    /// Open a local database at the given path. Runs migrations on open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        // Must be per-connection in SQLite
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let jml_db = Self { db, conn };
        jml_db.run_migrations().await?;
        Ok(jml_db)
    }

    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }
}
