//! Storage contracts that consume queries.
//!
//! The crate does not ship a backend. Storage adapters implement these traits
//! and translate the [`Query`](crate::Query) they build from the supplied
//! options into whatever fetch their engine understands.
//!
//! # Implementing
//!
//! ```
//! use std::sync::Mutex;
//!
//! use standout_query::{QueryError, QueryOption, Query, Repository};
//!
//! #[derive(Default)]
//! struct Names(Mutex<Vec<String>>);
//!
//! impl Repository<String> for Names {
//!     type Error = QueryError;
//!
//!     fn create(&self, entity: String) -> Result<(), QueryError> {
//!         self.0.lock().unwrap().push(entity);
//!         Ok(())
//!     }
//!
//!     fn update(&self, _entity: String) -> Result<(), QueryError> {
//!         Ok(())
//!     }
//!
//!     fn delete(&self, entity: String) -> Result<(), QueryError> {
//!         self.0.lock().unwrap().retain(|name| *name != entity);
//!         Ok(())
//!     }
//!
//!     fn find(&self, options: Vec<QueryOption>) -> Result<Vec<String>, QueryError> {
//!         let query = Query::new(options)?;
//!         let names = self.0.lock().unwrap();
//!         let limit = query.limit().map_or(names.len(), |n| n as usize);
//!         Ok(names.iter().take(limit).cloned().collect())
//!     }
//!
//!     fn count(&self, options: Vec<QueryOption>) -> Result<u64, QueryError> {
//!         Ok(self.find(options)?.len() as u64)
//!     }
//! }
//!
//! let repo = Names::default();
//! repo.create("ada".to_string()).unwrap();
//! assert_eq!(repo.count(vec![]).unwrap(), 1);
//! ```

use crate::error::{QueryError, VersionConflict};
use crate::option::QueryOption;

/// CRUD access to entities of type `T`, with query-based reads.
///
/// `find` and `count` receive the raw options and are expected to build a
/// [`Query`](crate::Query) with [`Query::new`](crate::Query::new), returning
/// its error unchanged if construction fails.
pub trait Repository<T> {
    /// Backend error. Must be able to carry a query construction failure.
    type Error: From<QueryError>;

    /// Stores a new entity.
    fn create(&self, entity: T) -> Result<(), Self::Error>;

    /// Replaces an existing entity.
    fn update(&self, entity: T) -> Result<(), Self::Error>;

    /// Removes an entity.
    fn delete(&self, entity: T) -> Result<(), Self::Error>;

    /// Returns the entities matching the query built from `options`.
    fn find(&self, options: Vec<QueryOption>) -> Result<Vec<T>, Self::Error>;

    /// Counts the entities matching the query built from `options`.
    fn count(&self, options: Vec<QueryOption>) -> Result<u64, Self::Error>;
}

/// Append-only, versioned store of events of type `T`.
pub trait EventStore<T> {
    /// Backend error. Must be able to carry a query construction failure and
    /// a [`VersionConflict`].
    type Error: From<QueryError> + From<VersionConflict>;

    /// Appends `event` if the store is currently at `expected_version`.
    ///
    /// Implementations must fail with a [`VersionConflict`] when the current
    /// version differs.
    fn append(&self, expected_version: u64, event: T) -> Result<(), Self::Error>;

    /// Returns the events matching the query built from `options`.
    fn fetch(&self, options: Vec<QueryOption>) -> Result<Vec<T>, Self::Error>;

    /// Counts the events matching the query built from `options`.
    fn count(&self, options: Vec<QueryOption>) -> Result<u64, Self::Error>;
}
