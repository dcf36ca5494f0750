//! Query - storage-agnostic query specifications.
//!
//! This crate describes *what* to fetch without committing to *how*. A
//! [`Query`] holds pagination (offset, limit, cursor) and, per field, an
//! ordered list of [`Criteria`]. Queries are built from composable option
//! constructors and handed to a [`Repository`] or [`EventStore`]
//! implementation that knows how to talk to a concrete backend.
//!
//! # Quick Start
//!
//! ```rust
//! use standout_query::{between, cursor, equal, limit, validate, Operator, Query, Value};
//!
//! let query = Query::new(vec![
//!     equal("status", "active", vec![validate::one_of(vec!["active", "archived"])]),
//!     between("age", 30, 18, vec![]),
//!     limit(10, vec![validate::max(100)]),
//!     cursor("abc", vec![]),
//! ])
//! .unwrap();
//!
//! let status = query.criteria("status").unwrap();
//! assert_eq!(status[0].operator(), Operator::Equal);
//! assert_eq!(status[0].value(), &Value::from("active"));
//!
//! let age = query.criteria("age").unwrap();
//! assert_eq!(age[0].operator(), Operator::GreaterOrEqual);
//! assert_eq!(age[1].operator(), Operator::LessOrEqual);
//!
//! assert_eq!(query.limit(), Some(10));
//! assert_eq!(query.cursor(), Some("abc"));
//! ```
//!
//! # Construction Semantics
//!
//! ```text
//! Query::new([opt₁, opt₂, …, optₙ])
//!   for each optᵢ in order:
//!     run optᵢ's validators over its value(s)
//!     ok   → mutate the query
//!     fail → record the error, leave the query untouched
//!   any failures → Err(joined errors)
//!   none         → Ok(query)
//! ```
//!
//! - Every option is applied, even after an earlier one failed.
//! - Every validator of an option is run, even after an earlier one failed.
//! - `one_of` / `not_one_of` validate every element and add nothing unless
//!   all pass.
//! - `between` sorts its bounds and always adds `gte` before `lte`.
//!
//! # Operators
//!
//! | Constructor | Operator | Name |
//! |-------------|----------|------|
//! | `equal` | `Equal` | `eq` |
//! | `not_equal` | `NotEqual` | `ne` |
//! | `greater` | `GreaterThan` | `gt` |
//! | `greater_or_equal` | `GreaterOrEqual` | `gte` |
//! | `less` | `LessThan` | `lt` |
//! | `less_or_equal` | `LessOrEqual` | `lte` |
//! | `one_of` | `In` | `in` |
//! | `not_one_of` | `NotIn` | `nin` |
//! | `between` | `GreaterOrEqual` + `LessOrEqual` | `gte`, `lte` |

mod config;
mod criteria;
mod error;
mod operator;
mod option;
mod query;
mod repository;
pub mod select;
pub mod validate;
mod value;

// Re-export public API
pub use config::QueryConfig;
pub use criteria::Criteria;
pub use error::{QueryError, Result, VersionConflict};
pub use operator::{Operator, UNDEFINED};
pub use option::{
    between, cursor, equal, greater, greater_or_equal, less, less_or_equal, limit, limit_str,
    not_equal, not_one_of, offset, offset_str, one_of, QueryOption,
};
pub use query::Query;
pub use repository::{EventStore, Repository};
pub use validate::Validator;
pub use value::{Number, Timestamp, Value};
