// OWID CSV source - the one startup fetch of the remote dataset
use async_trait::async_trait;

use crate::application::dataset_source::{DatasetSource, LoadError};
use crate::domain::record::{Record, Table};

/// Fixed location of the public dataset. Fetched unauthenticated, exactly
/// once per process; the result is never refreshed.
pub const OWID_DATASET_URL: &str = "https://covid.ourworldindata.org/data/owid-covid-data.csv";

#[derive(Debug, Clone)]
pub struct OwidCsvSource {
    url: String,
}

impl OwidCsvSource {
    pub fn new() -> Self {
        Self {
            url: OWID_DATASET_URL.to_string(),
        }
    }

    /// Parse CSV text into the in-memory table. Columns beyond the ones the
    /// dashboard reads are ignored, empty metric cells become None, and a
    /// metric column missing from the header reads as None everywhere. Any
    /// malformed row fails the whole load - all or nothing, no validation.
    fn parse(csv_text: &str) -> Result<Table, LoadError> {
        let mut reader = csv::ReaderBuilder::new().from_reader(csv_text.as_bytes());

        let mut records = Vec::new();
        for row in reader.deserialize::<Record>() {
            records.push(row?);
        }

        Ok(Table::new(records))
    }
}

impl Default for OwidCsvSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DatasetSource for OwidCsvSource {
    async fn load(&self) -> Result<Table, LoadError> {
        tracing::debug!("Fetching dataset from {}", self.url);

        let client = reqwest::Client::new();
        let response = client.get(&self.url).send().await?;

        if !response.status().is_success() {
            return Err(LoadError::Status(response.status()));
        }

        let body = response.text().await?;
        let table = Self::parse(&body)?;
        if table.is_empty() {
            tracing::warn!("Dataset is empty; charts will render without data");
        }
        tracing::info!(
            "Loaded {} records across {} locations and {} dates",
            table.len(),
            table.locations().len(),
            table.dates().len()
        );

        Ok(table)
    }
}
