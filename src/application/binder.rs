// Reactive wiring - named UI inputs bound to chart outputs
use crate::application::aggregate;
use crate::application::charts;
use crate::domain::figure::Figure;
use crate::domain::metric::Metric;
use crate::domain::record::Table;

/// UI inputs a cell can watch. The string forms are the element ids used on
/// the wire and in the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputId {
    CaseTypeDropdown,
    CountryDropdown,
}

impl InputId {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputId::CaseTypeDropdown => "case-type-dropdown",
            InputId::CountryDropdown => "country-dropdown",
        }
    }

    pub fn parse(id: &str) -> Option<InputId> {
        match id {
            "case-type-dropdown" => Some(InputId::CaseTypeDropdown),
            "country-dropdown" => Some(InputId::CountryDropdown),
            _ => None,
        }
    }
}

/// Chart outputs a cell feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputId {
    WorldMap,
    PieChart,
}

impl OutputId {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputId::WorldMap => "world-map",
            OutputId::PieChart => "pie-chart",
        }
    }
}

/// Transient UI state: the current value of every watched input. Decoded
/// per request, never persisted.
#[derive(Debug, Clone)]
pub struct Selection {
    pub metric: Metric,
    pub countries: Vec<String>,
}

/// Pure transition recomputing one output from the table and the selection.
pub type Transition = fn(&Table, &Selection) -> Figure;

struct Binding {
    inputs: &'static [InputId],
    output: OutputId,
    transition: Transition,
}

/// Explicit registration of (watched inputs -> transition -> output) cells.
///
/// Dispatching one changed input recomputes every watching cell exactly
/// once, in registration order, always from the current selection. Cells
/// are independent: no memoization, no debouncing, and no ordering
/// guarantee between cells beyond registration order.
pub struct ReactiveBinder {
    bindings: Vec<Binding>,
}

impl ReactiveBinder {
    pub fn new() -> Self {
        Self {
            bindings: Vec::new(),
        }
    }

    /// The dashboard's two cells: the metric dropdown drives the world map,
    /// and the metric plus country dropdowns drive the pie chart.
    pub fn standard() -> Self {
        let mut binder = Self::new();
        binder.bind(
            &[InputId::CaseTypeDropdown],
            OutputId::WorldMap,
            update_map,
        );
        binder.bind(
            &[InputId::CaseTypeDropdown, InputId::CountryDropdown],
            OutputId::PieChart,
            update_pie,
        );
        binder
    }

    pub fn bind(&mut self, inputs: &'static [InputId], output: OutputId, transition: Transition) {
        self.bindings.push(Binding {
            inputs,
            output,
            transition,
        });
    }

    /// Recompute every cell watching the changed input.
    pub fn dispatch(
        &self,
        table: &Table,
        changed: InputId,
        selection: &Selection,
    ) -> Vec<(OutputId, Figure)> {
        self.bindings
            .iter()
            .filter(|binding| binding.inputs.contains(&changed))
            .map(|binding| (binding.output, (binding.transition)(table, selection)))
            .collect()
    }
}

impl Default for ReactiveBinder {
    fn default() -> Self {
        Self::new()
    }
}

fn update_map(table: &Table, selection: &Selection) -> Figure {
    charts::render_map(aggregate::select_metric_column(table, selection.metric))
}

fn update_pie(table: &Table, selection: &Selection) -> Figure {
    let rows = aggregate::aggregate_by_country(table, &selection.countries, selection.metric);
    charts::render_pie(&rows, selection.metric, &selection.countries)
}
