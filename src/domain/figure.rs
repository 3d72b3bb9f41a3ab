// Chart description domain models - Plotly-shaped figures handed to the UI
use serde::Serialize;
use serde_json::Value;

/// A complete chart description: traces, layout, and (for animated charts)
/// one frame per animation step. Serializes to the figure object shape that
/// plotly.js consumes directly, so handlers can return it as-is.
#[derive(Debug, Clone, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub frames: Vec<Frame>,
}

impl Figure {
    pub fn new(data: Vec<Trace>, layout: Layout) -> Self {
        Self {
            data,
            layout,
            frames: Vec::new(),
        }
    }

    pub fn with_frames(data: Vec<Trace>, layout: Layout, frames: Vec<Frame>) -> Self {
        Self {
            data,
            layout,
            frames,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Choropleth {
        /// ISO codes keying regions on the base map.
        locations: Vec<String>,
        /// Values feeding the color scale; None renders as an uncolored region.
        z: Vec<Option<f64>>,
        /// Hover labels, one per location.
        text: Vec<String>,
        /// Name of the figure-wide color axis, so every frame shares one scale.
        coloraxis: &'static str,
        hovertemplate: &'static str,
    },
    Pie {
        labels: Vec<String>,
        values: Vec<f64>,
    },
}

/// One animation step; `name` is the value the slider scrubs through.
#[derive(Debug, Clone, Serialize)]
pub struct Frame {
    pub name: String,
    pub data: Vec<Trace>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Layout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<Margin>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo: Option<Geo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coloraxis: Option<ColorAxis>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sliders: Vec<Slider>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub updatemenus: Vec<UpdateMenu>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Title {
    pub text: String,
}

impl Title {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Margin {
    pub l: u32,
    pub r: u32,
    pub t: u32,
    pub b: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct Geo {
    pub projection: Projection,
}

#[derive(Debug, Clone, Serialize)]
pub struct Projection {
    #[serde(rename = "type")]
    pub projection_type: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ColorAxis {
    pub colorscale: &'static str,
    pub colorbar: ColorBar,
}

#[derive(Debug, Clone, Serialize)]
pub struct ColorBar {
    pub title: Title,
}

#[derive(Debug, Clone, Serialize)]
pub struct Slider {
    pub active: usize,
    pub currentvalue: CurrentValue,
    pub steps: Vec<SliderStep>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CurrentValue {
    pub prefix: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct SliderStep {
    /// Plotly animate arguments: `[[frame_name], {frame, mode, transition}]`.
    pub args: Value,
    pub label: String,
    pub method: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdateMenu {
    #[serde(rename = "type")]
    pub menu_type: &'static str,
    pub buttons: Vec<MenuButton>,
    pub direction: &'static str,
    pub showactive: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct MenuButton {
    pub args: Value,
    pub label: &'static str,
    pub method: &'static str,
}
