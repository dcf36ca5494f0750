//! Value validators attached to query options.
//!
//! A [`Validator`] inspects a value and either accepts it or explains why it
//! is rejected. Option constructors take a list of validators and run all of
//! them through [`check`] before touching the query.
//!
//! # Example
//!
//! ```
//! use standout_query::validate;
//!
//! let validators = vec![validate::min(1i64), validate::max(100i64)];
//! assert!(validate::check(&50, &validators).is_ok());
//! assert_eq!(validate::check(&500, &validators).unwrap_err().len(), 1);
//! ```

use std::fmt;

use regex::Regex;

use crate::error::Result;

/// Validator function type.
pub type Validator<T> = Box<dyn Fn(&T) -> std::result::Result<(), String> + Send + Sync>;

/// Runs every validator against `value`.
///
/// All validators are run even after one fails. Returns the failure messages
/// in validator order.
pub fn check<T>(
    value: &T,
    validators: &[Validator<T>],
) -> std::result::Result<(), Vec<String>> {
    let failures: Vec<String> = validators
        .iter()
        .filter_map(|validator| validator(value).err())
        .collect();

    if failures.is_empty() {
        Ok(())
    } else {
        Err(failures)
    }
}

/// Builds a validator from a predicate and a fixed message.
pub fn from_fn<T, F>(f: F, message: impl Into<String>) -> Validator<T>
where
    F: Fn(&T) -> bool + Send + Sync + 'static,
{
    let message = message.into();
    Box::new(move |value| {
        if f(value) {
            Ok(())
        } else {
            Err(message.clone())
        }
    })
}

/// Rejects values below `bound`.
pub fn min<T>(bound: T) -> Validator<T>
where
    T: PartialOrd + fmt::Debug + Send + Sync + 'static,
{
    Box::new(move |value| {
        if *value >= bound {
            Ok(())
        } else {
            Err(format!("must be at least {bound:?}"))
        }
    })
}

/// Rejects values above `bound`.
pub fn max<T>(bound: T) -> Validator<T>
where
    T: PartialOrd + fmt::Debug + Send + Sync + 'static,
{
    Box::new(move |value| {
        if *value <= bound {
            Ok(())
        } else {
            Err(format!("must be at most {bound:?}"))
        }
    })
}

/// Rejects values outside the inclusive range `low..=high`.
pub fn range<T>(low: T, high: T) -> Validator<T>
where
    T: PartialOrd + fmt::Debug + Send + Sync + 'static,
{
    Box::new(move |value| {
        if *value >= low && *value <= high {
            Ok(())
        } else {
            Err(format!("must be between {low:?} and {high:?}"))
        }
    })
}

/// Rejects values that are not in `allowed`.
pub fn one_of<T>(allowed: Vec<T>) -> Validator<T>
where
    T: PartialEq + fmt::Debug + Send + Sync + 'static,
{
    Box::new(move |value| {
        if allowed.contains(value) {
            Ok(())
        } else {
            Err(format!("must be one of {allowed:?}"))
        }
    })
}

/// Rejects empty strings.
pub fn not_empty<S: AsRef<str>>() -> Validator<S> {
    Box::new(|value| {
        if value.as_ref().is_empty() {
            Err("must not be empty".to_string())
        } else {
            Ok(())
        }
    })
}

/// Rejects strings longer than `len` characters.
pub fn max_len<S: AsRef<str>>(len: usize) -> Validator<S> {
    Box::new(move |value| {
        if value.as_ref().chars().count() <= len {
            Ok(())
        } else {
            Err(format!("must be at most {len} characters"))
        }
    })
}

/// Rejects strings that do not match `pattern`.
///
/// Returns an error if the pattern is invalid.
pub fn pattern<S: AsRef<str>>(pattern: &str) -> Result<Validator<S>> {
    let regex = Regex::new(pattern)?;
    Ok(Box::new(move |value| {
        if regex.is_match(value.as_ref()) {
            Ok(())
        } else {
            Err(format!("must match /{}/", regex.as_str()))
        }
    }))
}
