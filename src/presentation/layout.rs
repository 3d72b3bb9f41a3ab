// AppShell layout - the static component tree built once from the table
use std::fs;
use std::path::Path;

use crate::application::binder::{InputId, OutputId};
use crate::domain::metric::Metric;
use crate::domain::record::Table;

/// Countries pre-selected in the multi-select. The dataset is the only
/// catalog of locations, so a future dataset may no longer carry one of
/// these; that stale default is an accepted inconsistency, not validated
/// away (an absent selection simply yields no slices).
const DEFAULT_COUNTRIES: [&str; 2] = ["Turkey", "Germany"];

#[derive(Debug, Clone)]
pub struct DropdownOption {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone)]
pub struct Dropdown {
    pub id: &'static str,
    pub label: String,
    pub options: Vec<DropdownOption>,
    pub selected: Vec<String>,
    pub multi: bool,
}

/// The layout tree: page title, two dropdown controls, two graph
/// placeholders. Built once from the initial table and never rebuilt.
#[derive(Debug, Clone)]
pub struct PageLayout {
    pub title: String,
    pub metric_dropdown: Dropdown,
    pub country_dropdown: Dropdown,
    pub map_graph: &'static str,
    pub pie_graph: &'static str,
}

impl PageLayout {
    pub fn from_table(table: &Table) -> Self {
        let metric_options = Metric::ALL
            .iter()
            .map(|metric| DropdownOption {
                label: metric.label().to_string(),
                value: metric.as_str().to_string(),
            })
            .collect();

        // Country options are the distinct locations, first appearance first.
        let country_options = table
            .locations()
            .into_iter()
            .map(|location| DropdownOption {
                label: location.to_string(),
                value: location.to_string(),
            })
            .collect();

        Self {
            title: "Worldwide COVID-19 case map and country data".to_string(),
            metric_dropdown: Dropdown {
                id: InputId::CaseTypeDropdown.as_str(),
                label: "Case count type:".to_string(),
                options: metric_options,
                selected: vec![Metric::TotalCases.as_str().to_string()],
                multi: false,
            },
            country_dropdown: Dropdown {
                id: InputId::CountryDropdown.as_str(),
                label: "Select countries:".to_string(),
                options: country_options,
                selected: DEFAULT_COUNTRIES.iter().map(|c| c.to_string()).collect(),
                multi: true,
            },
            map_graph: OutputId::WorldMap.as_str(),
            pie_graph: OutputId::PieChart.as_str(),
        }
    }

    /// The interactive page: layout plus plotly.js and the change-dispatch
    /// script that drives the two reactive cells.
    pub fn render_page(&self) -> String {
        PAGE_TEMPLATE
            .replace("__TITLE__", &escape_html(&self.title))
            .replace("__BODY__", &self.render_body())
    }

    /// The initial, pre-interaction layout as a self-contained document:
    /// no scripts, just the component tree.
    pub fn render_static(&self) -> String {
        STATIC_TEMPLATE
            .replace("__TITLE__", &escape_html(&self.title))
            .replace("__BODY__", &self.render_body())
    }

    fn render_body(&self) -> String {
        let mut body = String::new();
        body.push_str(&format!("<h1>{}</h1>\n", escape_html(&self.title)));
        body.push_str(&format!(
            "<div id=\"{}\" class=\"graph\"></div>\n",
            self.map_graph
        ));
        body.push_str(&render_dropdown(&self.metric_dropdown));
        body.push_str(&render_dropdown(&self.country_dropdown));
        body.push_str(&format!(
            "<div id=\"{}\" class=\"graph\"></div>\n",
            self.pie_graph
        ));
        body
    }
}

/// Write the initial layout document to the fixed path, overwriting any
/// existing file there.
pub fn export_layout(layout: &PageLayout, path: &Path) -> std::io::Result<()> {
    fs::write(path, layout.render_static())?;
    tracing::info!("Wrote static layout to {}", path.display());
    Ok(())
}

fn render_dropdown(dropdown: &Dropdown) -> String {
    let mut html = String::new();
    html.push_str(&format!(
        "<label for=\"{}\">{}</label>\n",
        dropdown.id,
        escape_html(&dropdown.label)
    ));

    let multi = if dropdown.multi {
        " multiple size=\"8\""
    } else {
        ""
    };
    html.push_str(&format!("<select id=\"{}\"{}>\n", dropdown.id, multi));

    for option in &dropdown.options {
        let selected = if dropdown.selected.contains(&option.value) {
            " selected"
        } else {
            ""
        };
        html.push_str(&format!(
            "<option value=\"{}\"{}>{}</option>\n",
            escape_html(&option.value),
            selected,
            escape_html(&option.label)
        ));
    }

    html.push_str("</select>\n");
    html
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>__TITLE__</title>
<script src="https://cdn.plot.ly/plotly-2.35.2.min.js"></script>
<style>
body { font-family: sans-serif; max-width: 1100px; margin: 0 auto; padding: 1rem; }
label { display: block; margin-top: 1rem; font-weight: bold; }
select { margin-top: 0.25rem; min-width: 16rem; }
.graph { min-height: 420px; margin-top: 1rem; }
</style>
</head>
<body>
__BODY__
<script>
async function update(changed) {
  const metric = document.getElementById('case-type-dropdown').value;
  const countries = Array.from(
    document.getElementById('country-dropdown').selectedOptions
  ).map(option => option.value);

  const response = await fetch('/update', {
    method: 'POST',
    headers: { 'Content-Type': 'application/json' },
    body: JSON.stringify({ changed, metric, countries }),
  });
  if (!response.ok) {
    console.error(await response.text());
    return;
  }

  const figures = await response.json();
  for (const [id, figure] of Object.entries(figures)) {
    Plotly.react(document.getElementById(id), figure);
  }
}

document.getElementById('case-type-dropdown')
  .addEventListener('change', () => update('case-type-dropdown'));
document.getElementById('country-dropdown')
  .addEventListener('change', () => update('country-dropdown'));

update('case-type-dropdown');
</script>
</body>
</html>
"#;

const STATIC_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>__TITLE__</title>
<style>
body { font-family: sans-serif; max-width: 1100px; margin: 0 auto; padding: 1rem; }
label { display: block; margin-top: 1rem; font-weight: bold; }
select { margin-top: 0.25rem; min-width: 16rem; }
.graph { min-height: 420px; margin-top: 1rem; }
</style>
</head>
<body>
__BODY__
</body>
</html>
"#;
