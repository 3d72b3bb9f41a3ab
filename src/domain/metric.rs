// Metric domain model - the three case-count types a user can visualize
use thiserror::Error;

/// A recomputation was requested with a metric name outside the three
/// recognized values. Options in the UI are fixed, so this only fires for
/// programmatic callers - and it must fail loudly, never fall back.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown metric '{0}', expected one of: total_cases, total_deaths, total_recovered")]
pub struct UnknownMetricError(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    TotalCases,
    TotalDeaths,
    TotalRecovered,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::TotalCases, Metric::TotalDeaths, Metric::TotalRecovered];

    pub fn parse(name: &str) -> Result<Self, UnknownMetricError> {
        match name {
            "total_cases" => Ok(Metric::TotalCases),
            "total_deaths" => Ok(Metric::TotalDeaths),
            "total_recovered" => Ok(Metric::TotalRecovered),
            other => Err(UnknownMetricError(other.to_string())),
        }
    }

    /// Column name in the source dataset.
    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::TotalCases => "total_cases",
            Metric::TotalDeaths => "total_deaths",
            Metric::TotalRecovered => "total_recovered",
        }
    }

    /// Human-readable label used in chart titles and dropdown options.
    pub fn label(&self) -> &'static str {
        match self {
            Metric::TotalCases => "Total cases",
            Metric::TotalDeaths => "Total deaths",
            Metric::TotalRecovered => "Total recovered",
        }
    }
}
