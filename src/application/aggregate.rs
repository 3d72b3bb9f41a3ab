// Filter/aggregate use cases - pure derivations over the loaded table
use std::collections::HashSet;

use indexmap::IndexMap;

use crate::domain::metric::Metric;
use crate::domain::record::Table;

/// One (country, value) pair: the maximum observed value of the chosen
/// metric across that country's rows.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateRow {
    pub location: String,
    pub value: f64,
}

/// Identity view over the table that fixes which metric feeds the map
/// coloring. No rows are filtered or copied.
#[derive(Debug, Clone, Copy)]
pub struct MetricColumn<'a> {
    table: &'a Table,
    metric: Metric,
}

pub fn select_metric_column(table: &Table, metric: Metric) -> MetricColumn<'_> {
    MetricColumn { table, metric }
}

impl<'a> MetricColumn<'a> {
    pub fn table(&self) -> &'a Table {
        self.table
    }

    pub fn metric(&self) -> Metric {
        self.metric
    }

    /// Metric cell per record, in table order.
    pub fn values(&self) -> impl Iterator<Item = Option<f64>> + 'a {
        let metric = self.metric;
        self.table.records().iter().map(move |r| r.metric(metric))
    }
}

/// Restrict the table to the selected locations, group by location, and take
/// the per-group maximum of the chosen metric.
///
/// Groups keep the order in which their location first appears in the table.
/// Null cells are ignored; a group with no non-null value yields no row.
/// Unmatched names match nothing, and an empty selection yields an empty
/// result - both are valid states, not errors.
pub fn aggregate_by_country(
    table: &Table,
    countries: &[String],
    metric: Metric,
) -> Vec<AggregateRow> {
    let selected: HashSet<&str> = countries.iter().map(String::as_str).collect();
    let mut groups: IndexMap<&str, Option<f64>> = IndexMap::new();

    for record in table.records() {
        if !selected.contains(record.location.as_str()) {
            continue;
        }

        let entry = groups.entry(record.location.as_str()).or_insert(None);
        if let Some(value) = record.metric(metric) {
            *entry = Some(match *entry {
                Some(current) => current.max(value),
                None => value,
            });
        }
    }

    groups
        .into_iter()
        .filter_map(|(location, value)| {
            value.map(|value| AggregateRow {
                location: location.to_string(),
                value,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::Record;
    use chrono::NaiveDate;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2020, 3, d).unwrap()
    }

    fn record(location: &str, iso: &str, date: NaiveDate, cases: Option<f64>) -> Record {
        Record {
            location: location.to_string(),
            iso_code: iso.to_string(),
            date,
            total_cases: cases,
            total_deaths: None,
            total_recovered: None,
        }
    }

    /// Turkey has total_cases [10, 50, 30] across three dates, Germany
    /// [5, 5] across two.
    fn two_country_table() -> Table {
        Table::new(vec![
            record("Turkey", "TUR", day(1), Some(10.0)),
            record("Turkey", "TUR", day(2), Some(50.0)),
            record("Turkey", "TUR", day(3), Some(30.0)),
            record("Germany", "DEU", day(1), Some(5.0)),
            record("Germany", "DEU", day(2), Some(5.0)),
        ])
    }

    fn names(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_per_country_maximum() {
        let table = two_country_table();
        let rows = aggregate_by_country(&table, &names(&["Turkey", "Germany"]), Metric::TotalCases);

        assert_eq!(
            rows,
            vec![
                AggregateRow {
                    location: "Turkey".to_string(),
                    value: 50.0,
                },
                AggregateRow {
                    location: "Germany".to_string(),
                    value: 5.0,
                },
            ]
        );
    }

    #[test]
    fn test_groups_keep_first_appearance_order_not_selection_order() {
        let table = two_country_table();
        let rows = aggregate_by_country(&table, &names(&["Germany", "Turkey"]), Metric::TotalCases);

        let locations: Vec<&str> = rows.iter().map(|r| r.location.as_str()).collect();
        assert_eq!(locations, vec!["Turkey", "Germany"]);
    }

    #[test]
    fn test_empty_selection_yields_empty_result() {
        let table = two_country_table();
        assert!(aggregate_by_country(&table, &[], Metric::TotalCases).is_empty());
    }

    #[test]
    fn test_unknown_country_yields_no_rows_not_an_error() {
        let table = two_country_table();
        let rows = aggregate_by_country(&table, &names(&["Atlantis"]), Metric::TotalCases);
        assert!(rows.is_empty());
    }

    #[test]
    fn test_null_cells_are_ignored_within_a_group() {
        let table = Table::new(vec![
            record("Turkey", "TUR", day(1), None),
            record("Turkey", "TUR", day(2), Some(7.0)),
            record("Turkey", "TUR", day(3), None),
        ]);

        let rows = aggregate_by_country(&table, &names(&["Turkey"]), Metric::TotalCases);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].value, 7.0);
    }

    #[test]
    fn test_group_with_no_non_null_value_yields_no_row() {
        let table = Table::new(vec![
            record("Turkey", "TUR", day(1), None),
            record("Germany", "DEU", day(1), Some(5.0)),
        ]);

        let rows = aggregate_by_country(&table, &names(&["Turkey", "Germany"]), Metric::TotalCases);
        let locations: Vec<&str> = rows.iter().map(|r| r.location.as_str()).collect();
        assert_eq!(locations, vec!["Germany"]);
    }

    #[test]
    fn test_aggregation_is_idempotent() {
        let table = two_country_table();
        let selection = names(&["Turkey", "Germany"]);

        let first = aggregate_by_country(&table, &selection, Metric::TotalCases);
        let second = aggregate_by_country(&table, &selection, Metric::TotalCases);
        assert_eq!(first, second);
    }

    #[test]
    fn test_select_metric_column_is_an_identity_view() {
        let table = two_country_table();
        let column = select_metric_column(&table, Metric::TotalCases);

        assert_eq!(column.metric(), Metric::TotalCases);
        assert_eq!(column.table().len(), table.len());
        let values: Vec<Option<f64>> = column.values().collect();
        assert_eq!(
            values,
            vec![Some(10.0), Some(50.0), Some(30.0), Some(5.0), Some(5.0)]
        );
    }
}
