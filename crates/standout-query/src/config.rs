//! Pagination settings applied to raw request parameters.
//!
//! [`QueryConfig`] holds the bounds a service enforces on caller-supplied
//! offsets and limits, and turns raw string parameters into validated
//! options.
//!
//! ```
//! use standout_query::{Query, QueryConfig};
//!
//! let config = QueryConfig::from_yaml_str("max_limit: 50\ndefault_limit: 20").unwrap();
//!
//! let query = Query::new(config.pagination(Some("40"), None)).unwrap();
//! assert_eq!(query.offset(), Some(40));
//! assert_eq!(query.limit(), Some(20));
//!
//! assert!(Query::new(config.pagination(None, Some("500"))).is_err());
//! ```

use serde::Deserialize;

use crate::error::{QueryError, Result};
use crate::option::{self, QueryOption};
use crate::validate::{self, Validator};

/// Bounds for caller-supplied pagination.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    /// Largest limit a caller may ask for.
    pub max_limit: i64,
    /// Limit used when the caller gives none.
    pub default_limit: Option<i64>,
    /// Largest offset a caller may ask for.
    pub max_offset: Option<i64>,
}

impl Default for QueryConfig {
    fn default() -> Self {
        QueryConfig {
            max_limit: 100,
            default_limit: None,
            max_offset: None,
        }
    }
}

impl QueryConfig {
    /// Parses a config from YAML. Missing keys take their defaults.
    ///
    /// Fails with [`QueryError::ConfigBounds`] if the bounds cannot be met.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: QueryConfig = serde_yaml::from_str(yaml)?;
        config.check()?;
        Ok(config)
    }

    /// Checks that the bounds admit at least one limit and one offset.
    pub fn check(&self) -> Result<()> {
        if self.max_limit < 1 {
            return Err(QueryError::ConfigBounds(format!(
                "max_limit must be at least 1, got {}",
                self.max_limit
            )));
        }
        if let Some(default) = self.default_limit {
            if !(1..=self.max_limit).contains(&default) {
                return Err(QueryError::ConfigBounds(format!(
                    "default_limit {default} is outside 1..={}",
                    self.max_limit
                )));
            }
        }
        if let Some(max) = self.max_offset.filter(|max| *max < 0) {
            return Err(QueryError::ConfigBounds(format!(
                "max_offset must not be negative, got {max}"
            )));
        }
        Ok(())
    }

    fn limit_bounds(&self) -> Vec<Validator<i64>> {
        vec![validate::range(1, self.max_limit)]
    }

    /// Parses a limit, rejecting values outside `1..=max_limit`.
    pub fn limit_str(&self, input: impl Into<String>) -> QueryOption {
        option::limit_str(input, self.limit_bounds())
    }

    /// Parses an offset, rejecting negative values and values above
    /// `max_offset`.
    pub fn offset_str(&self, input: impl Into<String>) -> QueryOption {
        let mut validators = vec![validate::min(0)];
        if let Some(max) = self.max_offset {
            validators.push(validate::max(max));
        }
        option::offset_str(input, validators)
    }

    /// Turns optional raw parameters into pagination options.
    ///
    /// When no limit is given, `default_limit` is used if set. The default is
    /// held to the same `1..=max_limit` bounds as a caller-supplied limit.
    pub fn pagination(&self, offset: Option<&str>, limit: Option<&str>) -> Vec<QueryOption> {
        let mut options = Vec::with_capacity(2);
        if let Some(offset) = offset {
            options.push(self.offset_str(offset));
        }
        match (limit, self.default_limit) {
            (Some(limit), _) => options.push(self.limit_str(limit)),
            (None, Some(default)) => options.push(option::limit(default, self.limit_bounds())),
            (None, None) => {}
        }
        options
    }
}
