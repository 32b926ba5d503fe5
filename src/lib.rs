//! # Scatterview
//!
//! Embeddable 2D scatter plot visual for hosting analytics applications.
//!
//! The host mounts the visual once, then pushes dataset and viewport
//! snapshots through [`visual::ScatterVisual::update`]; every update
//! redraws the whole scene onto a persistent SVG surface. Updates never
//! fail: malformed or missing cells degrade to documented defaults so an
//! embedded visual cannot crash its host.
//!
//! ## Features
//!
//! - **Pure Rust**: no browser, JavaScript, or HTML dependencies
//! - **Role-tagged binding**: value columns select the X, Y, Z, color,
//!   and index channels by host-declared role
//! - **Inspectable scene**: markers and scales are plain data, queryable
//!   in tests without parsing SVG text
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use scatterview::prelude::*;
//!
//! let mut visual = ScatterVisual::new(Some(ConstructorOptions::new("plot")))?;
//!
//! let view = DataView::new(
//!     Categorical::new()
//!         .with_categories(CategoryColumn::from_labels(&["A", "B", "C"]))
//!         .with_values(ValueColumn::from_numbers(Role::X, &[1.0, 2.0, 3.0]))
//!         .with_values(ValueColumn::from_numbers(Role::Y, &[2.0, 4.0, 1.0])),
//! );
//! visual.update(&UpdateOptions::new(Viewport::new(800.0, 600.0)).with_data_view(view));
//!
//! let svg = visual.surface().to_svg();
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: serialization support for data views, settings, and host
//!   option types

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// unwrap() is allowed in tests only; production paths degrade instead of panicking
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Row positions become f32 index defaults
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Host Contract
// ============================================================================

/// Data view payloads handed down by the host.
pub mod dataview;

/// Formatting-pane settings parsed from data view objects.
pub mod settings;

// ============================================================================
// Update Pipeline
// ============================================================================

/// Role-tagged column extraction.
pub mod extract;

/// Scatter point construction and per-row defaults.
pub mod points;

/// Linear data-to-pixel scales.
pub mod scale;

/// The persistent SVG drawing surface.
pub mod surface;

// ============================================================================
// Visual Entry Point
// ============================================================================

/// The host-facing visual lifecycle.
pub mod visual;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for visual lifecycle operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types for convenient imports.
///
/// ```rust,ignore
/// use scatterview::prelude::*;
/// ```
pub mod prelude {
    pub use crate::dataview::{
        Categorical, CategoryColumn, CellValue, DataView, Role, ValueColumn, Viewport,
    };
    pub use crate::error::{Error, Result};
    pub use crate::extract::RoleSeries;
    pub use crate::points::ScatterPoint;
    pub use crate::scale::LinearScale;
    pub use crate::settings::{DataViewObjects, ObjectValue, VisualSettings};
    pub use crate::surface::{CircleMarker, MarkerGroup, SvgSurface};
    pub use crate::visual::{
        ConstructorOptions, ObjectInstance, ScatterVisual, UpdateOptions, MARKER_RADIUS,
    };
}

// ============================================================================
// Tests
// ============================================================================
