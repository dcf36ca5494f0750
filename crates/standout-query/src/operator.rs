//! Comparison operators for query criteria.
//!
//! The [`Operator`] enum is the closed vocabulary that gives a
//! [`Criteria`](crate::Criteria) its meaning. Each operator has a stable
//! numeric code and a short lowercase name used when a query is serialized
//! or logged.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::QueryError;

/// Display name for codes outside the known range.
pub const UNDEFINED: &str = "undefined";

/// Comparison operator for a criteria.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Operator {
    /// Equal (exact match).
    #[serde(rename = "eq")]
    Equal = 1,
    /// Not equal.
    #[serde(rename = "ne")]
    NotEqual = 2,
    /// Greater than.
    #[serde(rename = "gt")]
    GreaterThan = 3,
    /// Greater than or equal.
    #[serde(rename = "gte")]
    GreaterOrEqual = 4,
    /// Less than.
    #[serde(rename = "lt")]
    LessThan = 5,
    /// Less than or equal.
    #[serde(rename = "lte")]
    LessOrEqual = 6,
    /// Value is one of the given set.
    #[serde(rename = "in")]
    In = 7,
    /// Value is none of the given set.
    #[serde(rename = "nin")]
    NotIn = 8,
}

impl Operator {
    /// Every operator, in code order.
    pub const ALL: [Operator; 8] = [
        Operator::Equal,
        Operator::NotEqual,
        Operator::GreaterThan,
        Operator::GreaterOrEqual,
        Operator::LessThan,
        Operator::LessOrEqual,
        Operator::In,
        Operator::NotIn,
    ];

    /// Returns the stable numeric code of this operator.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Looks up an operator by its numeric code.
    pub fn from_code(code: u8) -> Option<Operator> {
        Operator::ALL.iter().copied().find(|op| op.code() == code)
    }

    /// Returns the display name for a raw code.
    ///
    /// Unknown codes render as `"undefined"` instead of failing.
    pub fn name_for_code(code: u8) -> &'static str {
        Operator::from_code(code).map_or(UNDEFINED, Operator::as_str)
    }

    /// Returns `true` for the ordering operators (`gt`, `gte`, `lt`, `lte`).
    pub fn is_range(self) -> bool {
        matches!(
            self,
            Operator::GreaterThan
                | Operator::GreaterOrEqual
                | Operator::LessThan
                | Operator::LessOrEqual
        )
    }

    /// Returns `true` for the set operators (`in`, `nin`).
    pub fn is_membership(self) -> bool {
        matches!(self, Operator::In | Operator::NotIn)
    }

    /// Returns the display name of this operator.
    pub fn as_str(self) -> &'static str {
        match self {
            Operator::Equal => "eq",
            Operator::NotEqual => "ne",
            Operator::GreaterThan => "gt",
            Operator::GreaterOrEqual => "gte",
            Operator::LessThan => "lt",
            Operator::LessOrEqual => "lte",
            Operator::In => "in",
            Operator::NotIn => "nin",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Operator {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operator::ALL
            .iter()
            .copied()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| QueryError::UnknownOperator(s.to_string()))
    }
}

impl TryFrom<u8> for Operator {
    type Error = u8;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Operator::from_code(code).ok_or(code)
    }
}
