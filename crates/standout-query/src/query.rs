//! Query aggregate and its construction.
//!
//! A [`Query`] is a declarative description of pagination and per-field
//! criteria. It is built in one pass from a list of
//! [`QueryOption`](crate::QueryOption)s and is read-only afterwards.

use std::collections::HashMap;

use serde::Serialize;

use crate::criteria::Criteria;
use crate::error::{QueryError, Result};
use crate::option::QueryOption;

/// A frozen query specification.
///
/// Pagination fields use a "set iff positive / non-empty" convention: an
/// offset or limit of zero or below reads back as unset, as does an empty
/// cursor.
///
/// # Example
///
/// ```
/// use standout_query::{equal, limit, offset, Query};
///
/// let query = Query::new(vec![
///     equal("status", "active", vec![]),
///     offset(0, vec![]),
///     limit(25, vec![]),
/// ])
/// .unwrap();
///
/// assert_eq!(query.offset(), None);
/// assert_eq!(query.limit(), Some(25));
/// assert!(query.criteria("missing").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Query {
    pub(crate) offset: i64,
    pub(crate) limit: i64,
    pub(crate) cursor: String,
    criteria: HashMap<String, Vec<Criteria>>,
}

impl Query {
    /// Builds a query by applying every option in order.
    ///
    /// A failing option does not stop the ones after it: all options are
    /// applied and every failure is collected. If any option failed, the
    /// joined error is returned and the partially built query is dropped.
    pub fn new<I>(options: I) -> Result<Query>
    where
        I: IntoIterator<Item = QueryOption>,
    {
        let options = options.into_iter();
        let mut query = Query {
            criteria: HashMap::with_capacity(options.size_hint().0),
            ..Query::default()
        };

        let mut applied = 0usize;
        let mut failures = Vec::new();
        for option in options {
            let name = option.name();
            applied += 1;
            match option.apply(&mut query) {
                Ok(()) => tracing::trace!(option = name, "applied query option"),
                Err(err) => {
                    tracing::trace!(option = name, error = %err, "query option failed");
                    failures.push(err);
                }
            }
        }

        tracing::debug!(
            options = applied,
            failed = failures.len(),
            fields = query.criteria.len(),
            "built query"
        );

        match QueryError::join(failures) {
            Some(err) => Err(err),
            None => Ok(query),
        }
    }

    pub(crate) fn push<I>(&mut self, field: String, criteria: I)
    where
        I: IntoIterator<Item = Criteria>,
    {
        self.criteria.entry(field).or_default().extend(criteria);
    }

    /// Returns the offset, if one greater than zero was set.
    pub fn offset(&self) -> Option<i64> {
        (self.offset > 0).then_some(self.offset)
    }

    /// Returns the limit, if one greater than zero was set.
    pub fn limit(&self) -> Option<i64> {
        (self.limit > 0).then_some(self.limit)
    }

    /// Returns the cursor, if a non-empty one was set.
    pub fn cursor(&self) -> Option<&str> {
        (!self.cursor.is_empty()).then_some(self.cursor.as_str())
    }

    /// Returns the criteria for `field` in insertion order.
    ///
    /// A field with no criteria reads the same as a field that was never
    /// mentioned: both return `None`.
    pub fn criteria(&self, field: &str) -> Option<&[Criteria]> {
        self.criteria
            .get(field)
            .filter(|criteria| !criteria.is_empty())
            .map(Vec::as_slice)
    }

    /// Iterates over the fields that carry at least one criteria.
    ///
    /// Order is unspecified.
    pub fn fields(&self) -> impl Iterator<Item = &str> + '_ {
        self.criteria
            .iter()
            .filter(|(_, criteria)| !criteria.is_empty())
            .map(|(field, _)| field.as_str())
    }

    /// Returns `true` if no pagination and no criteria are set.
    pub fn is_empty(&self) -> bool {
        self.offset().is_none()
            && self.limit().is_none()
            && self.cursor().is_none()
            && self.fields().next().is_none()
    }
}
