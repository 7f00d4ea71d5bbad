use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Clinical significance of a key finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Importance {
    High,
    Medium,
}

impl Importance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Importance::High => "high",
            Importance::Medium => "medium",
        }
    }
}

impl FromStr for Importance {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "high" => Ok(Importance::High),
            "medium" => Ok(Importance::Medium),
            other => Err(CoreError::UnknownImportance(other.to_string())),
        }
    }
}

impl fmt::Display for Importance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Comparison applied between a measured value and a threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    GreaterThan,
    LessThan,
    /// Exact float equality. No tolerance is applied.
    Equal,
}

impl Operator {
    pub fn symbol(&self) -> char {
        match self {
            Operator::GreaterThan => '>',
            Operator::LessThan => '<',
            Operator::Equal => '=',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '>' => Some(Operator::GreaterThan),
            '<' => Some(Operator::LessThan),
            '=' => Some(Operator::Equal),
            _ => None,
        }
    }
}

/// A parsed `<operator><number>` rule such as `>3.5` or `<20`.
///
/// Serialized in its authoring form so catalogs stay readable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Condition {
    pub operator: Operator,
    pub threshold: f64,
}

impl Condition {
    pub fn new(operator: Operator, threshold: f64) -> Self {
        Self {
            operator,
            threshold,
        }
    }
}

impl FromStr for Condition {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = |reason: String| CoreError::MalformedCondition {
            condition: s.to_string(),
            reason,
        };

        let mut chars = s.chars();
        let symbol = chars
            .next()
            .ok_or_else(|| malformed("condition is empty".to_string()))?;
        let operator = Operator::from_symbol(symbol)
            .ok_or_else(|| malformed(format!("unknown operator '{symbol}'")))?;

        let literal = chars.as_str().trim();
        let threshold: f64 = literal
            .parse()
            .map_err(|_| malformed(format!("threshold '{literal}' is not a number")))?;
        if !threshold.is_finite() {
            return Err(malformed(format!("threshold '{literal}' is not finite")));
        }

        Ok(Self {
            operator,
            threshold,
        })
    }
}

impl TryFrom<String> for Condition {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Condition> for String {
    fn from(condition: Condition) -> Self {
        condition.to_string()
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.operator.symbol(), self.threshold)
    }
}

/// A `<test>.<param>` reference into a [`MeasurementSet`](super::measurement::MeasurementSet).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ParameterPath {
    test: String,
    param: String,
}

impl ParameterPath {
    pub fn new(test: impl Into<String>, param: impl Into<String>) -> Self {
        Self {
            test: test.into(),
            param: param.into(),
        }
    }

    pub fn test(&self) -> &str {
        &self.test
    }

    pub fn param(&self) -> &str {
        &self.param
    }
}

impl FromStr for ParameterPath {
    type Err = CoreError;

    /// Splits on the first `.`; everything after it is the parameter name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('.') {
            Some((test, param)) if !test.is_empty() && !param.is_empty() => {
                Ok(Self::new(test, param))
            }
            _ => Err(CoreError::MalformedParameterPath(s.to_string())),
        }
    }
}

impl TryFrom<String> for ParameterPath {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ParameterPath> for String {
    fn from(path: ParameterPath) -> Self {
        path.to_string()
    }
}

impl fmt::Display for ParameterPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.test, self.param)
    }
}

/// A single clinical rule: one measured parameter against one threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct KeyFinding {
    #[ts(type = "string")]
    pub parameter: ParameterPath,
    #[ts(type = "string")]
    pub condition: Condition,
    pub importance: Importance,
}
