//! Column definitions for [`Table`](super::Table).

use crate::text::display_width;

/// One column of a table: its header, current content width and whether the
/// overflow pass may shrink it.
///
/// The width starts at the header's display width and only ever grows as the
/// table observes wider cells.
///
/// # Example
///
/// ```rust
/// use tfc_render::tabular::Column;
///
/// let id = Column::new("ID").no_truncate();
/// let name = Column::new("NAME");
///
/// assert_eq!(id.width(), 2);
/// assert!(!id.truncate());
/// assert!(name.truncate());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Column {
    header: Option<String>,
    width: usize,
    truncate: Option<bool>,
}

impl Column {
    /// Create a column with a header. The width is seeded with the header's
    /// display width.
    pub fn new(header: impl Into<String>) -> Self {
        let header = header.into();
        Column {
            width: display_width(&header),
            header: Some(header),
            truncate: None,
        }
    }

    /// Exempt this column from the overflow shrink pass.
    pub fn no_truncate(mut self) -> Self {
        self.truncate = Some(false);
        self
    }

    /// Allow the overflow pass to shrink this column (the default).
    pub fn truncatable(mut self) -> Self {
        self.truncate = Some(true);
        self
    }

    /// Header text, `""` for header-less columns.
    pub fn header(&self) -> &str {
        self.header.as_deref().unwrap_or("")
    }

    /// Widest content observed so far, header included.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Whether the overflow pass may shrink this column.
    pub fn truncate(&self) -> bool {
        self.truncate.unwrap_or(true)
    }

    pub(crate) fn observe(&mut self, width: usize) {
        self.width = self.width.max(width);
    }
}
