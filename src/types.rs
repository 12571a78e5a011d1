use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TsError;

/// Server-side bucket reducing function used by `AGGREGATION`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Aggregation {
    Avg,
    Sum,
    Min,
    Max,
    Range,
    Count,
    First,
    Last,
    #[serde(rename = "std.p")]
    StdP,
    #[serde(rename = "std.s")]
    StdS,
    #[serde(rename = "var.p")]
    VarP,
    #[serde(rename = "var.s")]
    VarS,
    Twa,
}

impl Aggregation {
    pub const ALL: [Aggregation; 13] = [
        Aggregation::Avg,
        Aggregation::Sum,
        Aggregation::Min,
        Aggregation::Max,
        Aggregation::Range,
        Aggregation::Count,
        Aggregation::First,
        Aggregation::Last,
        Aggregation::StdP,
        Aggregation::StdS,
        Aggregation::VarP,
        Aggregation::VarS,
        Aggregation::Twa,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Aggregation::Avg => "avg",
            Aggregation::Sum => "sum",
            Aggregation::Min => "min",
            Aggregation::Max => "max",
            Aggregation::Range => "range",
            Aggregation::Count => "count",
            Aggregation::First => "first",
            Aggregation::Last => "last",
            Aggregation::StdP => "std.p",
            Aggregation::StdS => "std.s",
            Aggregation::VarP => "var.p",
            Aggregation::VarS => "var.s",
            Aggregation::Twa => "twa",
        }
    }
}

impl fmt::Display for Aggregation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Aggregation {
    type Err = TsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        Aggregation::ALL
            .into_iter()
            .find(|agg| agg.as_str() == lower)
            .ok_or_else(|| TsError::UnknownAggregation(s.to_string()))
    }
}

/// Cross-series reducer applied by `GROUPBY <label> REDUCE <reducer>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Reducer {
    Sum,
    Min,
    Max,
    Avg,
    Range,
    Count,
    #[serde(rename = "std.p")]
    StdP,
    #[serde(rename = "std.s")]
    StdS,
    #[serde(rename = "var.p")]
    VarP,
    #[serde(rename = "var.s")]
    VarS,
}

impl Reducer {
    pub const ALL: [Reducer; 10] = [
        Reducer::Sum,
        Reducer::Min,
        Reducer::Max,
        Reducer::Avg,
        Reducer::Range,
        Reducer::Count,
        Reducer::StdP,
        Reducer::StdS,
        Reducer::VarP,
        Reducer::VarS,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Reducer::Sum => "sum",
            Reducer::Min => "min",
            Reducer::Max => "max",
            Reducer::Avg => "avg",
            Reducer::Range => "range",
            Reducer::Count => "count",
            Reducer::StdP => "std.p",
            Reducer::StdS => "std.s",
            Reducer::VarP => "var.p",
            Reducer::VarS => "var.s",
        }
    }
}

impl fmt::Display for Reducer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Reducer {
    type Err = TsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        Reducer::ALL
            .into_iter()
            .find(|reducer| reducer.as_str() == lower)
            .ok_or_else(|| TsError::UnknownReducer(s.to_string()))
    }
}

/// Which timestamp of an aggregation bucket is reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BucketTimestamp {
    /// Bucket start (`-`)
    Low,
    /// Bucket end (`+`)
    High,
    /// Bucket middle (`~`)
    Mid,
}

impl BucketTimestamp {
    pub fn as_str(&self) -> &'static str {
        match self {
            BucketTimestamp::Low => "-",
            BucketTimestamp::High => "+",
            BucketTimestamp::Mid => "~",
        }
    }
}

impl fmt::Display for BucketTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BucketTimestamp {
    type Err = TsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "-" | "low" | "start" => Ok(BucketTimestamp::Low),
            "+" | "high" | "end" => Ok(BucketTimestamp::High),
            "~" | "mid" => Ok(BucketTimestamp::Mid),
            _ => Err(TsError::UnknownBucketTimestamp(s.to_string())),
        }
    }
}

/// `AGGREGATION <type> <bucketDuration>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketAggregation {
    pub aggregation: Aggregation,
    /// Bucket duration in milliseconds
    pub bucket_duration: u64,
}

/// Inclusive `FILTER_BY_VALUE` bounds. Both ends are always present.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

/// `GROUPBY <label> REDUCE <reducer>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupBy {
    pub label: String,
    pub reducer: Reducer,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aggregation_tokens() {
        assert_eq!(Aggregation::Avg.as_str(), "avg");
        assert_eq!(Aggregation::StdP.as_str(), "std.p");
        assert_eq!(Aggregation::VarS.to_string(), "var.s");
        assert_eq!(Aggregation::Twa.to_string(), "twa");
    }

    #[test]
    fn test_aggregation_from_str() {
        for agg in Aggregation::ALL {
            assert_eq!(agg.as_str().parse::<Aggregation>().unwrap(), agg);
        }
        assert_eq!("AVG".parse::<Aggregation>().unwrap(), Aggregation::Avg);
        assert_eq!("Std.S".parse::<Aggregation>().unwrap(), Aggregation::StdS);
    }

    #[test]
    fn test_aggregation_unknown() {
        let err = "median".parse::<Aggregation>().unwrap_err();
        assert!(matches!(err, TsError::UnknownAggregation(ref s) if s == "median"));
        assert_eq!(err.to_string(), "unknown aggregation type: median");
    }

    #[test]
    fn test_reducer_from_str() {
        assert_eq!("sum".parse::<Reducer>().unwrap(), Reducer::Sum);
        assert_eq!("MIN".parse::<Reducer>().unwrap(), Reducer::Min);
        assert_eq!("max".parse::<Reducer>().unwrap(), Reducer::Max);
        assert_eq!("var.p".parse::<Reducer>().unwrap(), Reducer::VarP);
        assert!(matches!(
            "twa".parse::<Reducer>(),
            Err(TsError::UnknownReducer(_))
        ));
    }

    #[test]
    fn test_bucket_timestamp_tokens() {
        assert_eq!(BucketTimestamp::Low.as_str(), "-");
        assert_eq!(BucketTimestamp::High.as_str(), "+");
        assert_eq!(BucketTimestamp::Mid.as_str(), "~");
    }

    #[test]
    fn test_bucket_timestamp_aliases() {
        assert_eq!("-".parse::<BucketTimestamp>().unwrap(), BucketTimestamp::Low);
        assert_eq!("start".parse::<BucketTimestamp>().unwrap(), BucketTimestamp::Low);
        assert_eq!("END".parse::<BucketTimestamp>().unwrap(), BucketTimestamp::High);
        assert_eq!("mid".parse::<BucketTimestamp>().unwrap(), BucketTimestamp::Mid);
        assert!("middle".parse::<BucketTimestamp>().is_err());
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&Aggregation::StdP).unwrap(), "\"std.p\"");
        assert_eq!(serde_json::to_string(&Reducer::Sum).unwrap(), "\"sum\"");
        assert_eq!(
            serde_json::from_str::<BucketTimestamp>("\"mid\"").unwrap(),
            BucketTimestamp::Mid
        );
    }
}
