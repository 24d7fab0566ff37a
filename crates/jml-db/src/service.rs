//! Service layer hosting all repository methods.
//!
//! `JmlService` wraps `JmlDb`. Repo methods live in `crate::repos` as
//! `impl JmlService` blocks, one module per entity.

use crate::JmlDb;
use crate::error::DatabaseError;

pub struct JmlService {
    db: JmlDb,
}

impl JmlService {
    /// Open a local database (`":memory:"` for tests) and wrap it.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        let db = JmlDb::open_local(db_path).await?;
        Ok(Self { db })
    }

    #[must_use]
    pub const fn from_db(db: JmlDb) -> Self {
        Self { db }
    }

    #[must_use]
    pub const fn db(&self) -> &JmlDb {
        &self.db
    }
}
