// Dataset domain models - one record per (country, date) observation
use chrono::NaiveDate;
use indexmap::IndexSet;
use serde::Deserialize;

use super::metric::Metric;

/// One row of the source dataset. Metric cells may be empty, and a column
/// that is absent from the header reads as None for every record - the
/// dataset is taken as-is, without schema validation.
#[derive(Debug, Clone, Deserialize)]
pub struct Record {
    pub location: String,
    pub iso_code: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub total_cases: Option<f64>,
    #[serde(default)]
    pub total_deaths: Option<f64>,
    #[serde(default)]
    pub total_recovered: Option<f64>,
}

impl Record {
    pub fn metric(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::TotalCases => self.total_cases,
            Metric::TotalDeaths => self.total_deaths,
            Metric::TotalRecovered => self.total_recovered,
        }
    }
}

/// The loaded dataset: an ordered sequence of records, immutable for the
/// life of the process. (location, date) pairs are not deduplicated.
#[derive(Debug, Clone)]
pub struct Table {
    records: Vec<Record>,
}

impl Table {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct location names in order of first appearance.
    pub fn locations(&self) -> Vec<&str> {
        let set: IndexSet<&str> = self.records.iter().map(|r| r.location.as_str()).collect();
        set.into_iter().collect()
    }

    /// Distinct observation dates in ascending order.
    pub fn dates(&self) -> Vec<NaiveDate> {
        let mut dates: Vec<NaiveDate> = self.records.iter().map(|r| r.date).collect();
        dates.sort_unstable();
        dates.dedup();
        dates
    }
}
