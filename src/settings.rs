//! Formatting-pane settings.
//!
//! Hosts attach a bag of named objects to each data view; every object is
//! a map from property name to a loosely typed value. [`VisualSettings`]
//! parses that bag by overlaying recognized properties onto built-in
//! defaults. Unknown objects, unknown properties, and values of the wrong
//! type are ignored rather than rejected, so a stale or partial bag still
//! yields a usable settings tree.
//!
//! Settings describe what the host's formatting pane shows and are parsed
//! fresh on demand; the rendering pipeline reads its per-point channels
//! from the data itself.

use std::collections::HashMap;

/// A single formatting property value as delivered by the host.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ObjectValue {
    /// A toggle.
    Bool(bool),
    /// A numeric slider or spinner.
    Number(f32),
    /// A color, font name, or enumeration choice.
    Text(String),
}

impl ObjectValue {
    /// The boolean payload, if this value is a toggle.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// The numeric payload, if this value is a number.
    #[must_use]
    pub fn as_number(&self) -> Option<f32> {
        match self {
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// The text payload, if this value is a string.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }
}

impl From<bool> for ObjectValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f32> for ObjectValue {
    fn from(value: f32) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for ObjectValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for ObjectValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// The object bag attached to a data view: object name to property map.
pub type DataViewObjects = HashMap<String, HashMap<String, ObjectValue>>;

/// Default marker appearance.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DataPointSettings {
    /// Fill color applied when a point carries no color of its own.
    pub default_color: String,
    /// Marker diameter in pixels.
    pub size: f32,
    /// Marker opacity in percent.
    pub opacity: f32,
}

impl Default for DataPointSettings {
    fn default() -> Self {
        Self {
            default_color: "#000000".to_owned(),
            size: 6.0,
            opacity: 100.0,
        }
    }
}

impl DataPointSettings {
    fn overlay(&mut self, properties: &HashMap<String, ObjectValue>) {
        if let Some(value) = properties.get("defaultColor").and_then(ObjectValue::as_text) {
            self.default_color = value.to_owned();
        }
        if let Some(value) = properties.get("size").and_then(ObjectValue::as_number) {
            self.size = value;
        }
        if let Some(value) = properties.get("opacity").and_then(ObjectValue::as_number) {
            self.opacity = value;
        }
    }
}

/// Axis scale kinds, held as host-facing enumeration strings.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisSettings {
    /// Scale kind for the horizontal axis.
    pub x_axis_scale: String,
    /// Scale kind for the vertical axis.
    pub y_axis_scale: String,
}

impl Default for AxisSettings {
    fn default() -> Self {
        Self {
            x_axis_scale: "linear".to_owned(),
            y_axis_scale: "linear".to_owned(),
        }
    }
}

impl AxisSettings {
    fn overlay(&mut self, properties: &HashMap<String, ObjectValue>) {
        if let Some(value) = properties.get("xAxisScale").and_then(ObjectValue::as_text) {
            self.x_axis_scale = value.to_owned();
        }
        if let Some(value) = properties.get("yAxisScale").and_then(ObjectValue::as_text) {
            self.y_axis_scale = value.to_owned();
        }
    }
}

/// Legend visibility and placement.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LegendSettings {
    /// Whether the legend is shown.
    pub show: bool,
    /// Edge of the viewport the legend docks to.
    pub position: String,
}

impl Default for LegendSettings {
    fn default() -> Self {
        Self {
            show: true,
            position: "Top".to_owned(),
        }
    }
}

impl LegendSettings {
    fn overlay(&mut self, properties: &HashMap<String, ObjectValue>) {
        if let Some(value) = properties.get("show").and_then(ObjectValue::as_bool) {
            self.show = value;
        }
        if let Some(value) = properties.get("position").and_then(ObjectValue::as_text) {
            self.position = value.to_owned();
        }
    }
}

/// Hover tooltip behavior.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TooltipSettings {
    /// Whether hover tooltips are enabled.
    pub enabled: bool,
}

impl Default for TooltipSettings {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl TooltipSettings {
    fn overlay(&mut self, properties: &HashMap<String, ObjectValue>) {
        if let Some(value) = properties.get("enabled").and_then(ObjectValue::as_bool) {
            self.enabled = value;
        }
    }
}

/// Plot background and gridline appearance.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlotAreaSettings {
    /// Whether gridlines are shown.
    pub show_grid: bool,
    /// Plot background color.
    pub background_color: String,
}

impl Default for PlotAreaSettings {
    fn default() -> Self {
        Self {
            show_grid: true,
            background_color: "#ffffff".to_owned(),
        }
    }
}

impl PlotAreaSettings {
    fn overlay(&mut self, properties: &HashMap<String, ObjectValue>) {
        if let Some(value) = properties.get("showGrid").and_then(ObjectValue::as_bool) {
            self.show_grid = value;
        }
        if let Some(value) = properties
            .get("backgroundColor")
            .and_then(ObjectValue::as_text)
        {
            self.background_color = value.to_owned();
        }
    }
}

/// Data label typography.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LabelSettings {
    /// Label font size in points.
    pub font_size: f32,
    /// Label font family.
    pub font_family: String,
}

impl Default for LabelSettings {
    fn default() -> Self {
        Self {
            font_size: 12.0,
            font_family: "Segoe UI".to_owned(),
        }
    }
}

impl LabelSettings {
    fn overlay(&mut self, properties: &HashMap<String, ObjectValue>) {
        if let Some(value) = properties.get("fontSize").and_then(ObjectValue::as_number) {
            self.font_size = value;
        }
        if let Some(value) = properties.get("fontFamily").and_then(ObjectValue::as_text) {
            self.font_family = value.to_owned();
        }
    }
}

/// The complete settings tree shown in the host's formatting pane.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisualSettings {
    /// Marker appearance defaults.
    pub data_point: DataPointSettings,
    /// Axis scale kinds.
    pub axis: AxisSettings,
    /// Legend visibility and placement.
    pub legend: LegendSettings,
    /// Hover tooltip behavior.
    pub tooltip: TooltipSettings,
    /// Plot background and gridlines.
    pub plot_area: PlotAreaSettings,
    /// Data label typography.
    pub labels: LabelSettings,
}

impl VisualSettings {
    /// Parse settings from a data view's object bag.
    ///
    /// Starts from [`VisualSettings::default`] and overlays every
    /// recognized, correctly typed property found in `objects`.
    #[must_use]
    pub fn parse(objects: Option<&DataViewObjects>) -> Self {
        let mut settings = Self::default();
        let Some(objects) = objects else {
            return settings;
        };

        if let Some(properties) = objects.get("dataPoint") {
            settings.data_point.overlay(properties);
        }
        if let Some(properties) = objects.get("axis") {
            settings.axis.overlay(properties);
        }
        if let Some(properties) = objects.get("legend") {
            settings.legend.overlay(properties);
        }
        if let Some(properties) = objects.get("tooltip") {
            settings.tooltip.overlay(properties);
        }
        if let Some(properties) = objects.get("plotArea") {
            settings.plot_area.overlay(properties);
        }
        if let Some(properties) = objects.get("labelSettings") {
            settings.labels.overlay(properties);
        }
        settings
    }
}
