// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use std::fmt;
use std::str::FromStr;

use crate::Weights;

/// The cost dimension used to rank candidate routes during a search.
///
/// The metric only decides which route is judged "best" - the returned
/// [Route](crate::Route) always carries totals for all three dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    /// Travelled distance, in kilometers.
    Distance,

    /// Travel time, in hours.
    Time,

    /// Fuel consumption, in litres.
    Fuel,
}

impl Metric {
    /// Extracts this metric's component from a set of [Weights].
    pub fn component(self, weights: &Weights) -> f64 {
        match self {
            Self::Distance => weights.distance,
            Self::Time => weights.time,
            Self::Fuel => weights.fuel,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Distance => f.write_str("distance"),
            Self::Time => f.write_str("time"),
            Self::Fuel => f.write_str("fuel"),
        }
    }
}

/// Error raised when parsing a [Metric] from an unrecognized string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown metric: {0}")]
pub struct ParseMetricError(pub String);

impl FromStr for Metric {
    type Err = ParseMetricError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "distance" => Ok(Self::Distance),
            "time" => Ok(Self::Time),
            "fuel" => Ok(Self::Fuel),
            _ => Err(ParseMetricError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn component() {
        let w = Weights {
            distance: 1.0,
            time: 2.0,
            fuel: 3.0,
        };
        assert_eq!(Metric::Distance.component(&w), 1.0);
        assert_eq!(Metric::Time.component(&w), 2.0);
        assert_eq!(Metric::Fuel.component(&w), 3.0);
    }

    #[test]
    fn from_str() {
        assert_eq!("distance".parse(), Ok(Metric::Distance));
        assert_eq!("time".parse(), Ok(Metric::Time));
        assert_eq!("fuel".parse(), Ok(Metric::Fuel));
        assert_eq!(
            "co2".parse::<Metric>(),
            Err(ParseMetricError("co2".to_string())),
        );
    }
}
