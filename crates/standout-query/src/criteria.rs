//! The atomic filter condition stored in a query.

use serde::Serialize;

use crate::operator::Operator;
use crate::value::Value;

/// One `(operator, value)` condition attached to a field.
///
/// Criteria are created by the option constructors while a
/// [`Query`](crate::Query) is built and are read-only afterwards. Consumers
/// interpret the value according to the operator: set operators (`in`,
/// `nin`) carry a [`Value::List`], every other operator a scalar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Criteria<T = Value> {
    #[serde(rename = "op")]
    operator: Operator,
    value: T,
}

impl<T> Criteria<T> {
    pub(crate) fn new(operator: Operator, value: T) -> Self {
        Criteria { operator, value }
    }

    /// Returns the comparison operator.
    pub fn operator(&self) -> Operator {
        self.operator
    }

    /// Returns the value to compare against.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Consumes the criteria, returning its value.
    pub fn into_value(self) -> T {
        self.value
    }
}
