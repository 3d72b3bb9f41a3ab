// Chart rendering use cases - pure figure construction from derived tables
use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde_json::json;

use crate::application::aggregate::{AggregateRow, MetricColumn};
use crate::domain::figure::{
    ColorAxis, ColorBar, CurrentValue, Figure, Frame, Geo, Layout, Margin, MenuButton, Projection,
    Slider, SliderStep, Title, Trace, UpdateMenu,
};
use crate::domain::metric::Metric;

const COLOR_SCALE: &str = "Viridis";
const MAP_PROJECTION: &str = "natural earth";
const HOVER_TEMPLATE: &str = "<b>%{text}</b><br>%{z}<extra></extra>";

/// Build the time-animated choropleth world map for the chosen metric.
///
/// One frame per distinct date in the table, ascending; stepping through
/// dates is a client-side scrub, never recomputed server-side. Every frame
/// shares the figure-wide Viridis color axis. Same input, same figure.
pub fn render_map(column: MetricColumn<'_>) -> Figure {
    let metric = column.metric();

    let mut by_date: BTreeMap<NaiveDate, (Vec<String>, Vec<Option<f64>>, Vec<String>)> =
        BTreeMap::new();
    for (record, value) in column.table().records().iter().zip(column.values()) {
        let (locations, z, text) = by_date.entry(record.date).or_default();
        locations.push(record.iso_code.clone());
        z.push(value);
        text.push(record.location.clone());
    }

    let frames: Vec<Frame> = by_date
        .into_iter()
        .map(|(date, (locations, z, text))| Frame {
            name: date.to_string(),
            data: vec![choropleth(locations, z, text)],
        })
        .collect();

    // The initially visible trace is the first frame's.
    let data = frames
        .first()
        .map(|frame| frame.data.clone())
        .unwrap_or_else(|| vec![choropleth(Vec::new(), Vec::new(), Vec::new())]);

    let layout = Layout {
        title: Some(Title::new(format!(
            "Worldwide COVID-19 {} map",
            metric.label()
        ))),
        margin: Some(Margin {
            l: 0,
            r: 0,
            t: 30,
            b: 0,
        }),
        geo: Some(Geo {
            projection: Projection {
                projection_type: MAP_PROJECTION,
            },
        }),
        coloraxis: Some(ColorAxis {
            colorscale: COLOR_SCALE,
            colorbar: ColorBar {
                title: Title::new(metric.label()),
            },
        }),
        sliders: vec![date_slider(&frames)],
        updatemenus: vec![animation_controls()],
    };

    Figure::with_frames(data, layout, frames)
}

/// Build the per-country pie chart from aggregate rows: one slice per row,
/// slice size the aggregated value, slice label the location name. The title
/// is composed from the full selection, matched or not. Same input, same
/// figure; an empty row set renders with zero slices.
pub fn render_pie(rows: &[AggregateRow], metric: Metric, countries: &[String]) -> Figure {
    let labels = rows.iter().map(|r| r.location.clone()).collect();
    let values = rows.iter().map(|r| r.value).collect();

    let layout = Layout {
        title: Some(Title::new(format!(
            "COVID-19 {} distribution: {}",
            metric.label(),
            countries.join(", ")
        ))),
        ..Layout::default()
    };

    Figure::new(vec![Trace::Pie { labels, values }], layout)
}

fn choropleth(locations: Vec<String>, z: Vec<Option<f64>>, text: Vec<String>) -> Trace {
    Trace::Choropleth {
        locations,
        z,
        text,
        coloraxis: "coloraxis",
        hovertemplate: HOVER_TEMPLATE,
    }
}

/// One slider step per frame so the client can scrub through dates.
fn date_slider(frames: &[Frame]) -> Slider {
    let steps = frames
        .iter()
        .map(|frame| SliderStep {
            args: json!([
                [frame.name],
                { "frame": { "duration": 0, "redraw": true }, "mode": "immediate" }
            ]),
            label: frame.name.clone(),
            method: "animate",
        })
        .collect();

    Slider {
        active: 0,
        currentvalue: CurrentValue { prefix: "date=" },
        steps,
    }
}

fn animation_controls() -> UpdateMenu {
    UpdateMenu {
        menu_type: "buttons",
        buttons: vec![
            MenuButton {
                args: json!([
                    null,
                    { "frame": { "duration": 300, "redraw": true }, "fromcurrent": true }
                ]),
                label: "Play",
                method: "animate",
            },
            MenuButton {
                args: json!([
                    [null],
                    { "frame": { "duration": 0, "redraw": false }, "mode": "immediate" }
                ]),
                label: "Pause",
                method: "animate",
            },
        ],
        direction: "left",
        showactive: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::aggregate::{aggregate_by_country, select_metric_column};
    use crate::domain::record::{Record, Table};

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

    fn sample_table() -> Table {
        Table::new(vec![
            record("Turkey", "TUR", day(2), Some(10.0)),
            record("Turkey", "TUR", day(1), Some(5.0)),
            record("Germany", "DEU", day(1), None),
            record("Germany", "DEU", day(2), Some(3.0)),
        ])
    }

    fn names(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_map_has_one_frame_per_distinct_date_ascending() {
        let table = sample_table();
        let figure = render_map(select_metric_column(&table, Metric::TotalCases));

        let frame_names: Vec<&str> = figure.frames.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(frame_names, vec!["2020-03-01", "2020-03-02"]);
        assert_eq!(figure.layout.sliders[0].steps.len(), 2);
    }

    #[test]
    fn test_map_initial_trace_matches_first_frame() {
        let table = sample_table();
        let figure = render_map(select_metric_column(&table, Metric::TotalCases));

        assert_eq!(
            serde_json::to_value(&figure.data).unwrap(),
            serde_json::to_value(&figure.frames[0].data).unwrap()
        );
    }

    #[test]
    fn test_map_keeps_null_cells_and_hover_labels() {
        let table = sample_table();
        let figure = render_map(select_metric_column(&table, Metric::TotalCases));

        match &figure.frames[0].data[0] {
            Trace::Choropleth {
                locations, z, text, ..
            } => {
                assert_eq!(locations, &vec!["TUR".to_string(), "DEU".to_string()]);
                assert_eq!(z, &vec![Some(5.0), None]);
                assert_eq!(text, &vec!["Turkey".to_string(), "Germany".to_string()]);
            }
            other => panic!("expected a choropleth trace, got {other:?}"),
        }
    }

    #[test]
    fn test_map_uses_the_fixed_color_scale_and_projection() {
        let table = sample_table();
        let figure = render_map(select_metric_column(&table, Metric::TotalDeaths));

        let coloraxis = figure.layout.coloraxis.as_ref().unwrap();
        assert_eq!(coloraxis.colorscale, "Viridis");
        assert_eq!(coloraxis.colorbar.title.text, "Total deaths");
        assert_eq!(
            figure.layout.geo.as_ref().unwrap().projection.projection_type,
            "natural earth"
        );
    }

    #[test]
    fn test_map_rendering_is_pure() {
        let table = sample_table();

        let first = render_map(select_metric_column(&table, Metric::TotalCases));
        let second = render_map(select_metric_column(&table, Metric::TotalCases));
        assert_eq!(
            serde_json::to_value(&first).unwrap(),
            serde_json::to_value(&second).unwrap()
        );
    }

    #[test]
    fn test_pie_slice_count_and_sum_match_aggregate_rows() {
        let table = sample_table();
        let selection = names(&["Turkey", "Germany"]);
        let rows = aggregate_by_country(&table, &selection, Metric::TotalCases);
        let figure = render_pie(&rows, Metric::TotalCases, &selection);

        match &figure.data[0] {
            Trace::Pie { labels, values } => {
                assert_eq!(labels.len(), rows.len());
                let slice_sum: f64 = values.iter().sum();
                let max_sum: f64 = rows.iter().map(|r| r.value).sum();
                assert_eq!(slice_sum, max_sum);
            }
            other => panic!("expected a pie trace, got {other:?}"),
        }
    }

    #[test]
    fn test_pie_title_joins_the_selected_countries() {
        let selection = names(&["Turkey", "Germany"]);
        let rows = vec![AggregateRow {
            location: "Turkey".to_string(),
            value: 50.0,
        }];
        let figure = render_pie(&rows, Metric::TotalDeaths, &selection);

        let title = figure.layout.title.unwrap().text;
        assert!(title.contains("Turkey, Germany"));
        assert!(title.contains("Total deaths"));
    }

    #[test]
    fn test_pie_with_empty_selection_renders_zero_slices() {
        let figure = render_pie(&[], Metric::TotalCases, &[]);

        match &figure.data[0] {
            Trace::Pie { labels, values } => {
                assert!(labels.is_empty());
                assert!(values.is_empty());
            }
            other => panic!("expected a pie trace, got {other:?}"),
        }
    }
}
