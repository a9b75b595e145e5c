//! Typed chart payloads.
//!
//! Serializes to the figure JSON plotly.js expects (`{"data": [...], "layout": {...}}`),
//! so the page hands the response straight to `Plotly.react`. Unset options are
//! left out and fall back to plotly's defaults.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPayload {
    #[serde(rename = "data")]
    pub series: Vec<Series>,
    pub layout: Layout,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesKind {
    Scatter,
    Scattergeo,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Points {
    Categorical { x: Vec<String>, y: Vec<f64> },
    Geo { lon: Vec<f64>, lat: Vec<f64> },
}

impl Points {
    pub fn len(&self) -> usize {
        match self {
            Points::Categorical { x, .. } => x.len(),
            Points::Geo { lon, .. } => lon.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    #[serde(rename = "type")]
    pub kind: SeriesKind,
    pub mode: String,
    pub name: String,
    #[serde(flatten)]
    pub points: Points,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showlegend: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub text: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hoverinfo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hoverlabel: Option<HoverLabel>,
    pub marker: Marker,
}

impl Series {
    pub fn markers(kind: SeriesKind, name: impl Into<String>, points: Points) -> Self {
        Self {
            kind,
            mode: "markers".into(),
            name: name.into(),
            points,
            showlegend: None,
            text: Vec::new(),
            hoverinfo: None,
            hoverlabel: None,
            marker: Marker::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MarkerSize {
    Fixed(f64),
    PerPoint(Vec<f64>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MarkerColor {
    Fixed(String),
    /// Values mapped through `colorscale`.
    PerPoint(Vec<f64>),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Marker {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<MarkerSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<MarkerColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colorscale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showscale: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reversescale: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Font {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
}

impl Font {
    pub fn sized(size: f64) -> Self {
        Self { family: None, size: Some(size) }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HoverLabel {
    pub font: Font,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
}

impl Title {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), font: None }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Axis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showticklabels: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zeroline: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeoLayout {
    pub showland: bool,
    pub landcolor: String,
    pub showcountries: bool,
    pub countrycolor: String,
    pub showocean: bool,
    pub oceancolor: String,
    pub showcoastlines: bool,
    pub coastlinecolor: String,
    pub showframe: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub title: Title,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paper_bgcolor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plot_bgcolor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hovermode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo: Option<GeoLayout>,
}

impl Layout {
    pub fn titled(title: Title) -> Self {
        Self {
            title,
            font: None,
            paper_bgcolor: None,
            plot_bgcolor: None,
            width: None,
            height: None,
            xaxis: None,
            yaxis: None,
            hovermode: None,
            geo: None,
        }
    }
}

/// Formats a value for hover text: shortest round-trip form, but whole numbers
/// below 1e16 keep one decimal (`3.0`, not `3`). Larger whole numbers print
/// every digit (`10000000000000000`) rather than in exponent form.
pub fn format_value(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}
