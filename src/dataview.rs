//! Host dataset shapes.
//!
//! The hosting application hands the visual a snapshot of its data on every
//! update: a categorical view separating category labels from role-tagged
//! value columns. These types are read-only views for the duration of one
//! update call; the visual copies what it needs and retains none of them.

/// A raw cell value as supplied by the host.
///
/// Cells arrive untyped: a column tagged with a numeric role may still
/// contain text or nulls, and the default-fill policy downstream decides
/// what those become.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellValue {
    /// A numeric value.
    Number(f32),
    /// A text value.
    Text(String),
    /// A missing value.
    Null,
}

impl CellValue {
    /// Coerce to a number.
    ///
    /// Text parses after trimming; unparseable text and nulls yield
    /// `f32::NAN`. The NaN is passed through extraction deliberately and
    /// squashed to the documented default only when points are built.
    #[must_use]
    pub fn to_number(&self) -> f32 {
        match self {
            CellValue::Number(n) => *n,
            CellValue::Text(s) => s.trim().parse().unwrap_or(f32::NAN),
            CellValue::Null => f32::NAN,
        }
    }

    /// Coerce to the displayable string form, or `None` for a null cell.
    ///
    /// Numbers format via `Display`, so `42.0` renders as `"42"`.
    #[must_use]
    pub fn as_display(&self) -> Option<String> {
        match self {
            CellValue::Number(n) => Some(format!("{n}")),
            CellValue::Text(s) => Some(s.clone()),
            CellValue::Null => None,
        }
    }

    /// Whether this cell is null.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }
}

impl From<f32> for CellValue {
    fn from(v: f32) -> Self {
        CellValue::Number(v)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

/// Semantic role a host attaches to a value column.
///
/// The variant order is the resolution precedence for mistagged columns:
/// when a column declares several roles, the first one in this order wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Role {
    /// Horizontal position.
    X,
    /// Vertical position.
    Y,
    /// Depth / secondary magnitude, carried into tooltips.
    Z,
    /// Fill color, as a CSS color string.
    Color,
    /// Draw-order index (the host's "size" role).
    Index,
}

impl Role {
    /// All roles in resolution-precedence order.
    pub const ALL: [Role; 5] = [Role::X, Role::Y, Role::Z, Role::Color, Role::Index];
}

/// A value column: an ordered cell sequence plus the host's role tags.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValueColumn {
    /// Role tags declared by the host. May be empty or conflicting; see
    /// [`ValueColumn::effective_role`].
    pub roles: Vec<Role>,
    /// The raw cells, one per row.
    pub values: Vec<CellValue>,
}

impl ValueColumn {
    /// Create a column carrying a single role tag.
    #[must_use]
    pub fn new(role: Role, values: Vec<CellValue>) -> Self {
        Self {
            roles: vec![role],
            values,
        }
    }

    /// Create a column with no role tags. Untagged columns are ignored by
    /// extraction.
    #[must_use]
    pub fn untagged(values: Vec<CellValue>) -> Self {
        Self {
            roles: Vec::new(),
            values,
        }
    }

    /// Create a numeric column from a slice.
    #[must_use]
    pub fn from_numbers(role: Role, values: &[f32]) -> Self {
        Self::new(role, values.iter().copied().map(CellValue::Number).collect())
    }

    /// Add a further role tag.
    #[must_use]
    pub fn with_role(mut self, role: Role) -> Self {
        self.roles.push(role);
        self
    }

    /// Resolve the single role this column fulfills.
    ///
    /// Walks [`Role::ALL`] in precedence order and returns the first role
    /// the column declares, enforcing the one-role-per-column invariant for
    /// mistagged columns. `None` means the column is ignored.
    #[must_use]
    pub fn effective_role(&self) -> Option<Role> {
        Role::ALL.into_iter().find(|role| self.roles.contains(role))
    }
}

/// A category column: one raw label per row.
///
/// Independent of the value columns' row alignment; the point set length
/// considers it alongside the x and y columns.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CategoryColumn {
    /// The raw labels, one per row.
    pub values: Vec<CellValue>,
}

impl CategoryColumn {
    /// Create a category column from raw cells.
    #[must_use]
    pub fn new(values: Vec<CellValue>) -> Self {
        Self { values }
    }

    /// Create a category column from string labels.
    #[must_use]
    pub fn from_labels(labels: &[&str]) -> Self {
        Self::new(labels.iter().map(|&label| CellValue::from(label)).collect())
    }
}

/// The host's row-oriented dataset shape: category labels separated from
/// role-tagged measure columns.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Categorical {
    /// Category columns. Only the first is consulted.
    pub categories: Vec<CategoryColumn>,
    /// Role-tagged value columns, in no guaranteed order.
    pub values: Vec<ValueColumn>,
}

impl Categorical {
    /// Create an empty categorical view.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a category column.
    #[must_use]
    pub fn with_categories(mut self, categories: CategoryColumn) -> Self {
        self.categories.push(categories);
        self
    }

    /// Add a value column.
    #[must_use]
    pub fn with_values(mut self, column: ValueColumn) -> Self {
        self.values.push(column);
        self
    }

    /// The labels of the first category column, or an empty slice.
    #[must_use]
    pub fn category_labels(&self) -> &[CellValue] {
        self.categories
            .first()
            .map(|column| column.values.as_slice())
            .unwrap_or(&[])
    }
}

/// One dataset snapshot handed down by the host.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DataView {
    /// The categorical section, absent when the host has nothing mapped.
    pub categorical: Option<Categorical>,
    /// Host-supplied settings overlays (object name to property map); see
    /// [`crate::settings::VisualSettings::parse`].
    pub objects: Option<crate::settings::DataViewObjects>,
}

impl DataView {
    /// Create a data view around a categorical section.
    #[must_use]
    pub fn new(categorical: Categorical) -> Self {
        Self {
            categorical: Some(categorical),
            objects: None,
        }
    }

    /// Attach settings overlays.
    #[must_use]
    pub fn with_objects(mut self, objects: crate::settings::DataViewObjects) -> Self {
        self.objects = Some(objects);
        self
    }
}

/// Viewport dimensions in pixels, supplied fresh on every update.
///
/// Fractional CSS pixels are legal, so both dimensions are floats.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
}

impl Viewport {
    /// Create a viewport.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}
