//! Widget data structures - identity, geometry and typed payloads
//!
//! These are pure data structures with NO rendering logic.
//! Frontends read from these to render appropriately.
//!
//! The persisted JSON keeps the flat document shape (`type` next to `data`),
//! but in memory the payload is a closed enum keyed by widget kind.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Resize floor for widget width, in canvas pixels
pub const MIN_WIDGET_WIDTH: u32 = 200;
/// Resize floor for widget height, in canvas pixels
pub const MIN_WIDGET_HEIGHT: u32 = 150;

/// Accent colors offered by the add-widget modal and the settings panel
pub const ACCENT_PALETTE: [&str; 5] = ["#3B82F6", "#8B5CF6", "#10B981", "#F59E0B", "#EF4444"];

/// Opaque widget identifier
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WidgetId(String);

impl WidgetId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Closed set of widget kinds
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WidgetKind {
    #[serde(rename = "chart-line")]
    LineChart,
    #[serde(rename = "chart-bar")]
    BarChart,
    #[serde(rename = "chart-pie")]
    PieChart,
    #[serde(rename = "metrics")]
    Metrics,
    #[serde(rename = "progress")]
    Progress,
    #[serde(rename = "table")]
    Table,
}

impl WidgetKind {
    pub const ALL: [WidgetKind; 6] = [
        WidgetKind::LineChart,
        WidgetKind::BarChart,
        WidgetKind::PieChart,
        WidgetKind::Metrics,
        WidgetKind::Progress,
        WidgetKind::Table,
    ];

    /// Wire name used in the `type` field
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LineChart => "chart-line",
            Self::BarChart => "chart-bar",
            Self::PieChart => "chart-pie",
            Self::Metrics => "metrics",
            Self::Progress => "progress",
            Self::Table => "table",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::LineChart => "Line Chart",
            Self::BarChart => "Bar Chart",
            Self::PieChart => "Pie Chart",
            Self::Metrics => "Key Metrics",
            Self::Progress => "Progress Tracker",
            Self::Table => "Data Table",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::LineChart => "Display trends over time",
            Self::BarChart => "Compare different categories",
            Self::PieChart => "Show proportional data",
            Self::Metrics => "Display important KPIs",
            Self::Progress => "Track goal completion",
            Self::Table => "List raw name/value rows",
        }
    }

    /// Accent used when a document omits `color`
    pub fn default_color(&self) -> &'static str {
        match self {
            Self::BarChart => "#8B5CF6",
            Self::Metrics => "#10B981",
            Self::Progress => "#F59E0B",
            Self::LineChart | Self::PieChart | Self::Table => "#3B82F6",
        }
    }

    /// Size given to freshly added widgets of this kind
    pub fn default_size(&self) -> Size {
        let width = if *self == Self::Metrics { 350 } else { 400 };
        let height = if *self == Self::Progress { 250 } else { 300 };
        Size { width, height }
    }

    /// Payload used when a document has no `data` for this kind
    pub fn empty_content(&self) -> WidgetContent {
        match self {
            Self::LineChart => WidgetContent::LineChart(Vec::new()),
            Self::BarChart => WidgetContent::BarChart(Vec::new()),
            Self::PieChart => WidgetContent::PieChart(Vec::new()),
            Self::Metrics => WidgetContent::Metrics(MetricsData::default()),
            Self::Progress => WidgetContent::Progress(ProgressData::default()),
            Self::Table => WidgetContent::Table(Vec::new()),
        }
    }
}

impl fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Top-left offset from the canvas origin, in pixels
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: u32,
    pub y: u32,
}

impl Position {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// Widget dimensions, in pixels
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Pointer location in canvas pixel space (may be negative or past the canvas)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Geometry snapshot of one widget
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WidgetFrame {
    pub position: Position,
    pub size: Size,
}

/// One `{name, value}` sample; any extra fields ride along untouched
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub name: String,
    pub value: f64,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl ChartPoint {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
            extra: BTreeMap::new(),
        }
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Fixed-key KPI record; absent keys are simply not shown
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_users: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revenue: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversion_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_order_value: Option<f64>,
}

/// Keys of [`MetricsData`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MetricField {
    TotalUsers,
    Revenue,
    ConversionRate,
    AvgOrderValue,
}

impl MetricsData {
    pub fn value(&self, field: MetricField) -> Option<f64> {
        match field {
            MetricField::TotalUsers => self.total_users,
            MetricField::Revenue => self.revenue,
            MetricField::ConversionRate => self.conversion_rate,
            MetricField::AvgOrderValue => self.avg_order_value,
        }
    }
}

/// A tracked goal
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub name: String,
    pub current: f64,
    pub target: f64,
    #[serde(default)]
    pub unit: String,
}

impl Goal {
    pub fn new(name: impl Into<String>, current: f64, target: f64, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            current,
            target,
            unit: unit.into(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgressData {
    #[serde(default)]
    pub goals: Vec<Goal>,
}

/// Widget payload, one shape per kind
///
/// Serializes as the bare payload; the kind travels in the widget's `type`
/// field and drives deserialization through [`WidgetContent::from_json`].
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum WidgetContent {
    LineChart(Vec<ChartPoint>),
    BarChart(Vec<ChartPoint>),
    PieChart(Vec<ChartPoint>),
    Metrics(MetricsData),
    Progress(ProgressData),
    Table(Vec<ChartPoint>),
}

impl WidgetContent {
    pub fn kind(&self) -> WidgetKind {
        match self {
            Self::LineChart(_) => WidgetKind::LineChart,
            Self::BarChart(_) => WidgetKind::BarChart,
            Self::PieChart(_) => WidgetKind::PieChart,
            Self::Metrics(_) => WidgetKind::Metrics,
            Self::Progress(_) => WidgetKind::Progress,
            Self::Table(_) => WidgetKind::Table,
        }
    }

    /// Sample points for chart and table kinds
    pub fn points(&self) -> Option<&[ChartPoint]> {
        match self {
            Self::LineChart(points)
            | Self::BarChart(points)
            | Self::PieChart(points)
            | Self::Table(points) => Some(points),
            Self::Metrics(_) | Self::Progress(_) => None,
        }
    }

    /// Decode a raw `data` value using the shape dictated by `kind`
    pub fn from_json(kind: WidgetKind, data: Option<Value>) -> Result<Self, serde_json::Error> {
        let Some(data) = data else {
            return Ok(kind.empty_content());
        };

        Ok(match kind {
            WidgetKind::LineChart => Self::LineChart(serde_json::from_value(data)?),
            WidgetKind::BarChart => Self::BarChart(serde_json::from_value(data)?),
            WidgetKind::PieChart => Self::PieChart(serde_json::from_value(data)?),
            WidgetKind::Metrics => Self::Metrics(serde_json::from_value(data)?),
            WidgetKind::Progress => Self::Progress(serde_json::from_value(data)?),
            WidgetKind::Table => Self::Table(serde_json::from_value(data)?),
        })
    }
}

/// One entry on the dashboard canvas
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(try_from = "WidgetDocument")]
pub struct Widget {
    pub id: WidgetId,
    pub title: String,
    pub position: Position,
    pub size: Size,
    pub color: String,
    pub z_index: i64,
    pub content: WidgetContent,
    /// Opaque per-widget settings, kept as imported and written back on export
    pub config: Option<Value>,
}

impl Widget {
    pub fn kind(&self) -> WidgetKind {
        self.content.kind()
    }

    pub fn frame(&self) -> WidgetFrame {
        WidgetFrame {
            position: self.position,
            size: self.size,
        }
    }
}

/// Flat on-disk shape of a widget
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WidgetDocument {
    id: WidgetId,
    title: String,
    #[serde(rename = "type")]
    kind: WidgetKind,
    position: Position,
    size: Size,
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    color: Option<String>,
    #[serde(default)]
    z_index: i64,
    #[serde(default)]
    config: Option<Value>,
}

impl TryFrom<WidgetDocument> for Widget {
    type Error = serde_json::Error;

    fn try_from(doc: WidgetDocument) -> Result<Self, Self::Error> {
        let content = WidgetContent::from_json(doc.kind, doc.data)?;
        Ok(Self {
            id: doc.id,
            title: doc.title,
            position: doc.position,
            size: doc.size,
            color: doc
                .color
                .unwrap_or_else(|| doc.kind.default_color().to_string()),
            z_index: doc.z_index,
            content,
            config: doc.config,
        })
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WidgetDocumentRef<'a> {
    id: &'a WidgetId,
    title: &'a str,
    #[serde(rename = "type")]
    kind: WidgetKind,
    position: Position,
    size: Size,
    data: &'a WidgetContent,
    color: &'a str,
    z_index: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    config: Option<&'a Value>,
}

impl Serialize for Widget {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        WidgetDocumentRef {
            id: &self.id,
            title: &self.title,
            kind: self.kind(),
            position: self.position,
            size: self.size,
            data: &self.content,
            color: &self.color,
            z_index: self.z_index,
            config: self.config.as_ref(),
        }
        .serialize(serializer)
    }
}

/// A widget before the store assigns its id and stacking order
#[derive(Clone, Debug, PartialEq)]
pub struct NewWidget {
    pub title: String,
    pub position: Position,
    pub size: Size,
    pub color: String,
    pub content: WidgetContent,
}

/// Shallow patch applied by `update_widget`
///
/// Content may only be replaced by content of the same kind.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WidgetUpdate {
    pub title: Option<String>,
    pub color: Option<String>,
    pub content: Option<WidgetContent>,
}

impl WidgetUpdate {
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn color(color: impl Into<String>) -> Self {
        Self {
            color: Some(color.into()),
            ..Self::default()
        }
    }
}
