//! The host-facing visual.
//!
//! A [`ScatterVisual`] is constructed once when the host mounts it and
//! then driven entirely through [`ScatterVisual::update`]: every data or
//! viewport change replaces the drawn scene wholesale. Between updates
//! the visual keeps only its drawing surface and the two axis scales
//! from the most recent draw.

use std::collections::HashMap;

use crate::dataview::{DataView, Viewport};
use crate::error::{Error, Result};
use crate::extract::RoleSeries;
use crate::points::build_points;
use crate::scale::{x_scale, y_scale, LinearScale};
use crate::settings::ObjectValue;
use crate::surface::{CircleMarker, SvgSurface};

/// Radius in pixels of every drawn point marker.
pub const MARKER_RADIUS: f32 = 5.0;

/// What the host hands over when it mounts the visual.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConstructorOptions {
    /// Identifier of the host element the visual is mounted into.
    pub element_id: String,
}

impl ConstructorOptions {
    /// Create constructor options for the given mount point.
    #[must_use]
    pub fn new(element_id: impl Into<String>) -> Self {
        Self {
            element_id: element_id.into(),
        }
    }
}

/// What the host hands over on every update cycle.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UpdateOptions {
    /// Current viewport size.
    pub viewport: Viewport,
    /// Dataset snapshots; only the first is drawn.
    pub data_views: Vec<DataView>,
}

impl UpdateOptions {
    /// Create update options with no data views.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            data_views: Vec::new(),
        }
    }

    /// Attach a dataset snapshot.
    #[must_use]
    pub fn with_data_view(mut self, view: DataView) -> Self {
        self.data_views.push(view);
        self
    }
}

/// One formatting-pane entry reported back to the host.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObjectInstance {
    /// Name of the settings object the entry belongs to.
    pub object_name: String,
    /// Property values for the entry.
    pub properties: HashMap<String, ObjectValue>,
}

/// A 2D scatter plot embedded in a hosting application.
#[derive(Debug, Clone)]
pub struct ScatterVisual {
    surface: SvgSurface,
    x_scale: Option<LinearScale>,
    y_scale: Option<LinearScale>,
    element_id: String,
}

impl ScatterVisual {
    /// Mount the visual.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingInput`] when the host supplies no
    /// constructor options. This is the only fallible step in the
    /// lifecycle; updates degrade instead of failing.
    pub fn new(options: Option<ConstructorOptions>) -> Result<Self> {
        let options = options.ok_or(Error::MissingInput)?;
        Ok(Self {
            surface: SvgSurface::new(),
            x_scale: None,
            y_scale: None,
            element_id: options.element_id,
        })
    }

    /// Redraw from a fresh dataset and viewport.
    ///
    /// The surface is resized first, so the frame tracks the viewport
    /// even when no data arrives. Without a categorical section the
    /// previous markers stay on screen; with one, the container is
    /// cleared and repopulated from scratch in ascending index order.
    pub fn update(&mut self, options: &UpdateOptions) {
        self.surface
            .resize(options.viewport.width, options.viewport.height);

        let Some(categorical) = options
            .data_views
            .first()
            .and_then(|view| view.categorical.as_ref())
        else {
            return;
        };

        let series = RoleSeries::from_categorical(categorical);
        let mut points = build_points(&series, categorical.category_labels());
        points.sort_by(|a, b| a.index.total_cmp(&b.index));

        let x = x_scale(&points, options.viewport.width);
        let y = y_scale(&points, options.viewport.height);

        let container = self.surface.container_mut();
        container.clear();
        for point in &points {
            container.push(
                CircleMarker::new(
                    x.scale(point.x),
                    y.scale(point.y),
                    MARKER_RADIUS,
                    point.color.clone(),
                )
                .with_tooltip(point.tooltip_text()),
            );
        }

        self.x_scale = Some(x);
        self.y_scale = Some(y);
    }

    /// Report formatting-pane entries for one settings object.
    ///
    /// No instances are enumerated yet; hosts fall back to the declared
    /// defaults in [`crate::settings::VisualSettings`].
    #[must_use]
    pub fn enumerate_object_instances(&self, _object_name: &str) -> Vec<ObjectInstance> {
        Vec::new()
    }

    /// The drawing surface holding the current scene.
    #[must_use]
    pub fn surface(&self) -> &SvgSurface {
        &self.surface
    }

    /// Horizontal scale from the most recent draw, if any.
    #[must_use]
    pub fn x_scale(&self) -> Option<LinearScale> {
        self.x_scale
    }

    /// Vertical scale from the most recent draw, if any.
    #[must_use]
    pub fn y_scale(&self) -> Option<LinearScale> {
        self.y_scale
    }

    /// Identifier of the host element the visual was mounted into.
    #[must_use]
    pub fn element_id(&self) -> &str {
        &self.element_id
    }
}
