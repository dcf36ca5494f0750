//! Option constructors consumed by [`Query::new`].
//!
//! Every constructor captures its field, value(s) and validators up front and
//! returns a [`QueryOption`]: a deferred step that, when applied, runs the
//! validators and mutates exactly one part of the query only if they all
//! pass.
//!
//! # Example
//!
//! ```
//! use standout_query::{between, cursor, equal, limit, validate, Operator, Query, Value};
//!
//! let query = Query::new(vec![
//!     equal("status", "active", vec![validate::not_empty()]),
//!     between("age", 30, 18, vec![validate::min(0)]),
//!     limit(10, vec![]),
//!     cursor("abc", vec![]),
//! ])
//! .unwrap();
//!
//! let age = query.criteria("age").unwrap();
//! assert_eq!(age[0].operator(), Operator::GreaterOrEqual);
//! assert_eq!(age[0].value(), &Value::from(18));
//! ```

use std::fmt;

use crate::criteria::Criteria;
use crate::error::{QueryError, Result};
use crate::operator::Operator;
use crate::query::Query;
use crate::validate::{check, Validator};
use crate::value::Value;

type ApplyFn = Box<dyn FnOnce(&mut Query) -> Result<()> + Send>;

/// A deferred, possibly failing mutation of a [`Query`] under construction.
pub struct QueryOption {
    name: &'static str,
    apply: ApplyFn,
}

impl QueryOption {
    fn new<F>(name: &'static str, f: F) -> Self
    where
        F: FnOnce(&mut Query) -> Result<()> + Send + 'static,
    {
        QueryOption {
            name,
            apply: Box::new(f),
        }
    }

    /// Returns the short name of this option (e.g. `"between"`).
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub(crate) fn apply(self, query: &mut Query) -> Result<()> {
        (self.apply)(query)
    }
}

impl fmt::Debug for QueryOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryOption")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Runs the validators for one value, naming the field in the error.
fn validated<T: fmt::Debug>(field: &str, value: &T, validators: &[Validator<T>]) -> Result<()> {
    check(value, validators)
        .map_err(|reasons| QueryError::validation(field, format!("{value:?}"), reasons))
}

fn parse_int(field: &'static str, input: &str) -> Result<i64> {
    input.parse::<i64>().map_err(|source| QueryError::Parse {
        field,
        input: input.to_string(),
        source,
    })
}

// ============================================================================
// Pagination
// ============================================================================

/// Sets the offset. Values of zero or below leave the offset unset.
pub fn offset(offset: i64, validators: Vec<Validator<i64>>) -> QueryOption {
    QueryOption::new("offset", move |q| {
        validated("offset", &offset, &validators)?;
        q.offset = offset;
        Ok(())
    })
}

/// Parses a decimal offset, then behaves like [`offset`].
///
/// A parse failure is reported as [`QueryError::Parse`]; the validators are
/// not run.
pub fn offset_str(input: impl Into<String>, validators: Vec<Validator<i64>>) -> QueryOption {
    let input = input.into();
    QueryOption::new("offset_str", move |q| {
        let offset = parse_int("offset", &input)?;
        validated("offset", &offset, &validators)?;
        q.offset = offset;
        Ok(())
    })
}

/// Sets the limit. Values of zero or below leave the limit unset.
pub fn limit(limit: i64, validators: Vec<Validator<i64>>) -> QueryOption {
    QueryOption::new("limit", move |q| {
        validated("limit", &limit, &validators)?;
        q.limit = limit;
        Ok(())
    })
}

/// Parses a decimal limit, then behaves like [`limit`].
pub fn limit_str(input: impl Into<String>, validators: Vec<Validator<i64>>) -> QueryOption {
    let input = input.into();
    QueryOption::new("limit_str", move |q| {
        let limit = parse_int("limit", &input)?;
        validated("limit", &limit, &validators)?;
        q.limit = limit;
        Ok(())
    })
}

/// Sets the opaque pagination cursor.
pub fn cursor(cursor: impl Into<String>, validators: Vec<Validator<String>>) -> QueryOption {
    let cursor = cursor.into();
    QueryOption::new("cursor", move |q| {
        validated("cursor", &cursor, &validators)?;
        q.cursor = cursor;
        Ok(())
    })
}

// ============================================================================
// Single-value criteria
// ============================================================================

fn compare<T>(
    name: &'static str,
    operator: Operator,
    field: impl Into<String>,
    value: T,
    validators: Vec<Validator<T>>,
) -> QueryOption
where
    T: Into<Value> + fmt::Debug + Send + 'static,
{
    let field = field.into();
    QueryOption::new(name, move |q| {
        validated(&field, &value, &validators)?;
        q.push(field, [Criteria::new(operator, value.into())]);
        Ok(())
    })
}

/// Matches values equal to `value`.
pub fn equal<T>(field: impl Into<String>, value: T, validators: Vec<Validator<T>>) -> QueryOption
where
    T: Into<Value> + fmt::Debug + Send + 'static,
{
    compare("equal", Operator::Equal, field, value, validators)
}

/// Matches values not equal to `value`.
pub fn not_equal<T>(
    field: impl Into<String>,
    value: T,
    validators: Vec<Validator<T>>,
) -> QueryOption
where
    T: Into<Value> + fmt::Debug + Send + 'static,
{
    compare("not_equal", Operator::NotEqual, field, value, validators)
}

/// Matches values greater than `value`.
pub fn greater<T>(field: impl Into<String>, value: T, validators: Vec<Validator<T>>) -> QueryOption
where
    T: Into<Value> + fmt::Debug + Send + 'static,
{
    compare("greater", Operator::GreaterThan, field, value, validators)
}

/// Matches values greater than or equal to `value`.
pub fn greater_or_equal<T>(
    field: impl Into<String>,
    value: T,
    validators: Vec<Validator<T>>,
) -> QueryOption
where
    T: Into<Value> + fmt::Debug + Send + 'static,
{
    compare(
        "greater_or_equal",
        Operator::GreaterOrEqual,
        field,
        value,
        validators,
    )
}

/// Matches values less than `value`.
pub fn less<T>(field: impl Into<String>, value: T, validators: Vec<Validator<T>>) -> QueryOption
where
    T: Into<Value> + fmt::Debug + Send + 'static,
{
    compare("less", Operator::LessThan, field, value, validators)
}

/// Matches values less than or equal to `value`.
pub fn less_or_equal<T>(
    field: impl Into<String>,
    value: T,
    validators: Vec<Validator<T>>,
) -> QueryOption
where
    T: Into<Value> + fmt::Debug + Send + 'static,
{
    compare(
        "less_or_equal",
        Operator::LessOrEqual,
        field,
        value,
        validators,
    )
}

// ============================================================================
// Set and range criteria
// ============================================================================

fn membership<T>(
    name: &'static str,
    operator: Operator,
    field: impl Into<String>,
    values: Vec<T>,
    validators: Vec<Validator<T>>,
) -> QueryOption
where
    T: Into<Value> + fmt::Debug + Send + 'static,
{
    let field = field.into();
    QueryOption::new(name, move |q| {
        let failures: Vec<QueryError> = values
            .iter()
            .filter_map(|value| validated(&field, value, &validators).err())
            .collect();
        if let Some(err) = QueryError::join(failures) {
            return Err(err);
        }
        q.push(field, [Criteria::new(operator, Value::from(values))]);
        Ok(())
    })
}

/// Matches any of `values`.
///
/// Every element is validated. If any element fails, all failures are
/// reported together and no criteria is added.
pub fn one_of<T>(
    field: impl Into<String>,
    values: Vec<T>,
    validators: Vec<Validator<T>>,
) -> QueryOption
where
    T: Into<Value> + fmt::Debug + Send + 'static,
{
    membership("one_of", Operator::In, field, values, validators)
}

/// Matches none of `values`. Validated like [`one_of`].
pub fn not_one_of<T>(
    field: impl Into<String>,
    values: Vec<T>,
    validators: Vec<Validator<T>>,
) -> QueryOption
where
    T: Into<Value> + fmt::Debug + Send + 'static,
{
    membership("not_one_of", Operator::NotIn, field, values, validators)
}

/// Matches values in the inclusive range spanned by `x` and `y`.
///
/// The bounds may be given in either order. Two criteria are added, the lower
/// bound (`gte`) first and the upper bound (`lte`) second.
pub fn between<T>(
    field: impl Into<String>,
    x: T,
    y: T,
    validators: Vec<Validator<T>>,
) -> QueryOption
where
    T: PartialOrd + Into<Value> + fmt::Debug + Send + 'static,
{
    let field = field.into();
    QueryOption::new("between", move |q| {
        let (low, high) = if y < x { (y, x) } else { (x, y) };
        let failures: Vec<QueryError> = [&low, &high]
            .into_iter()
            .filter_map(|bound| validated(&field, bound, &validators).err())
            .collect();
        if let Some(err) = QueryError::join(failures) {
            return Err(err);
        }
        q.push(
            field,
            [
                Criteria::new(Operator::GreaterOrEqual, low.into()),
                Criteria::new(Operator::LessOrEqual, high.into()),
            ],
        );
        Ok(())
    })
}
