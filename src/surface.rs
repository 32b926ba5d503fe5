//! The persistent vector drawing surface.
//!
//! Created once when the visual is constructed and kept for its whole
//! lifetime, the surface holds the current viewport size and one nested
//! point-group container. Updates resize the surface and replace the
//! container's markers wholesale; serialization to SVG text is on demand
//! and never mutates the scene.

use std::fmt::Write as FmtWrite;

/// CSS class carried by the root `<svg>` element.
pub const SURFACE_CLASS: &str = "scatterPlot";
/// CSS class carried by the point-group `<g>` element.
pub const CONTAINER_CLASS: &str = "container";

/// A filled circular marker, optionally carrying hover text.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleMarker {
    /// Center x in pixels.
    pub cx: f32,
    /// Center y in pixels.
    pub cy: f32,
    /// Radius in pixels.
    pub r: f32,
    /// CSS fill color.
    pub fill: String,
    /// Hover tooltip text, serialized as a nested `<title>` element.
    pub tooltip: Option<String>,
}

impl CircleMarker {
    /// Create a marker with no tooltip.
    #[must_use]
    pub fn new(cx: f32, cy: f32, r: f32, fill: impl Into<String>) -> Self {
        Self {
            cx,
            cy,
            r,
            fill: fill.into(),
            tooltip: None,
        }
    }

    /// Attach hover text.
    #[must_use]
    pub fn with_tooltip(mut self, text: impl Into<String>) -> Self {
        self.tooltip = Some(text.into());
        self
    }

    fn to_svg(&self) -> String {
        let attrs = format!(
            r#"cx="{}" cy="{}" r="{}" fill="{}""#,
            self.cx,
            self.cy,
            self.r,
            escape_xml(&self.fill)
        );
        match &self.tooltip {
            Some(text) => format!("<circle {attrs}><title>{}</title></circle>", escape_xml(text)),
            None => format!("<circle {attrs}/>"),
        }
    }
}

/// The point-group container nested inside the surface.
///
/// Holds every currently drawn point shape; an update clears it and
/// repopulates it from the new point sequence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarkerGroup {
    markers: Vec<CircleMarker>,
}

impl MarkerGroup {
    /// Remove every marker.
    pub fn clear(&mut self) {
        self.markers.clear();
    }

    /// Append a marker.
    pub fn push(&mut self, marker: CircleMarker) {
        self.markers.push(marker);
    }

    /// The markers currently in the group, in draw order.
    #[must_use]
    pub fn markers(&self) -> &[CircleMarker] {
        &self.markers
    }

    /// Number of markers in the group.
    #[must_use]
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    /// Whether the group holds no markers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

/// The drawing surface: viewport-sized root element plus the point group.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SvgSurface {
    width: f32,
    height: f32,
    container: MarkerGroup,
}

impl SvgSurface {
    /// Create an empty zero-sized surface; the first update supplies the
    /// real viewport.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the surface to the current viewport size.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// Current width attribute in pixels.
    #[must_use]
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Current height attribute in pixels.
    #[must_use]
    pub fn height(&self) -> f32 {
        self.height
    }

    /// The point-group container.
    #[must_use]
    pub fn container(&self) -> &MarkerGroup {
        &self.container
    }

    /// Mutable access to the point-group container.
    pub fn container_mut(&mut self) -> &mut MarkerGroup {
        &mut self.container
    }

    /// Serialize the scene to SVG text.
    #[must_use]
    pub fn to_svg(&self) -> String {
        let mut svg = String::with_capacity(256 + 96 * self.container.len());

        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" class="{SURFACE_CLASS}" width="{}" height="{}">"#,
            self.width, self.height
        );
        let _ = writeln!(svg, r#"  <g class="{CONTAINER_CLASS}">"#);
        for marker in &self.container.markers {
            let _ = writeln!(svg, "    {}", marker.to_svg());
        }
        let _ = writeln!(svg, "  </g>");
        svg.push_str("</svg>\n");
        svg
    }
}

/// Escape XML special characters in attribute values and text content.
///
/// Both fill colors and tooltip text originate from host data and cannot
/// be trusted to be markup-safe.
fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
