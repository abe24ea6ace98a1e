//! Width allocation for table columns.
//!
//! Column widths come from content; this module only decides how to shrink
//! them when the table would be wider than the space available.

use super::column::Column;

/// Final widths for every column of a table, in column order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedWidths {
    /// Width for each column in display columns.
    pub widths: Vec<usize>,
}

impl ResolvedWidths {
    /// Get the width of a specific column.
    pub fn get(&self, index: usize) -> Option<usize> {
        self.widths.get(index).copied()
    }

    /// Total table width, delimiters included.
    pub fn total(&self, delimiter_width: usize) -> usize {
        table_width(&self.widths, delimiter_width)
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.widths.len()
    }

    /// Check if there are no columns.
    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }
}

/// Fit `columns` into `max_width` display columns.
///
/// When the natural table width exceeds `max_width`, the space left after
/// delimiters and non-truncatable columns is shared among the truncatable
/// columns in proportion to their content width (floor division, so the
/// result may fall a few columns short of `max_width`).
///
/// No shrinking happens when `max_width` is 0 (unconstrained), when the table
/// already fits, when no column is truncatable, or when delimiters and fixed
/// columns alone already exceed `max_width`. In the last case the table
/// overflows.
///
/// # Example
///
/// ```rust
/// use tfc_render::tabular::{resolve_widths, Column};
///
/// let columns = vec![Column::new("x".repeat(10)), Column::new("y".repeat(20))];
/// // 15 columns of content plus one two-column delimiter
/// let resolved = resolve_widths(&columns, 2, 17);
/// assert_eq!(resolved.widths, vec![5, 10]);
/// ```
pub fn resolve_widths(
    columns: &[Column],
    delimiter_width: usize,
    max_width: usize,
) -> ResolvedWidths {
    let widths: Vec<usize> = columns.iter().map(Column::width).collect();

    if max_width == 0 || table_width(&widths, delimiter_width) <= max_width {
        return ResolvedWidths { widths };
    }

    let delimiters = columns.len().saturating_sub(1) * delimiter_width;
    let fixed: usize = columns
        .iter()
        .filter(|c| !c.truncate())
        .map(Column::width)
        .sum();
    let content: usize = columns
        .iter()
        .filter(|c| c.truncate())
        .map(Column::width)
        .sum();

    let budget = match max_width.checked_sub(delimiters + fixed) {
        Some(budget) if content > 0 => budget,
        _ => {
            tracing::trace!(
                max_width,
                delimiters,
                fixed,
                content,
                "no room to shrink columns"
            );
            return ResolvedWidths { widths };
        }
    };

    let widths: Vec<usize> = columns
        .iter()
        .map(|c| {
            if c.truncate() {
                c.width() * budget / content
            } else {
                c.width()
            }
        })
        .collect();

    tracing::trace!(
        max_width,
        budget,
        content,
        ?widths,
        "shrunk truncatable columns"
    );
    ResolvedWidths { widths }
}

fn table_width(widths: &[usize], delimiter_width: usize) -> usize {
    widths.iter().sum::<usize>() + widths.len().saturating_sub(1) * delimiter_width
}

#[cfg(test)]
mod tests {
    use super::*;

    fn col(width: usize) -> Column {
        let mut c = Column::default();
        c.observe(width);
        c
    }

    fn fixed(width: usize) -> Column {
        col(width).no_truncate()
    }

    #[test]
    fn unconstrained_keeps_content_widths() {
        let resolved = resolve_widths(&[col(40), col(60)], 2, 0);
        assert_eq!(resolved.widths, vec![40, 60]);
    }

    #[test]
    fn fitting_table_is_untouched() {
        // 10 + 2 + 20 = 32
        let resolved = resolve_widths(&[col(10), col(20)], 2, 32);
        assert_eq!(resolved.widths, vec![10, 20]);
    }

    #[test]
    fn proportional_shrink() {
        let resolved = resolve_widths(&[col(10), col(20)], 2, 17);
        assert_eq!(resolved.widths, vec![5, 10]);
        assert_eq!(resolved.get(1), Some(10));
        assert_eq!(resolved.get(2), None);
    }

    #[test]
    fn fixed_columns_keep_their_width() {
        // budget = 30 - 4 - 8 = 18, shared 6:12 among 10 and 20
        let resolved = resolve_widths(&[fixed(8), col(10), col(20)], 2, 30);
        assert_eq!(resolved.widths, vec![8, 6, 12]);
    }

    #[test]
    fn floor_rounding_leaves_slack() {
        // budget 10 over 3 * 7 content: 7 * 10 / 21 = 3 each
        let resolved = resolve_widths(&[col(7), col(7), col(7)], 2, 14);
        assert_eq!(resolved.widths, vec![3, 3, 3]);
        assert!(resolved.total(2) < 14);
    }

    #[test]
    fn no_truncatable_columns_overflows() {
        let resolved = resolve_widths(&[fixed(10), fixed(10)], 2, 5);
        assert_eq!(resolved.widths, vec![10, 10]);
    }

    #[test]
    fn fixed_columns_exceeding_max_width_overflow() {
        let resolved = resolve_widths(&[fixed(20), col(10)], 2, 15);
        assert_eq!(resolved.widths, vec![20, 10]);
    }

    #[test]
    fn single_column_shrinks_to_max_width() {
        let resolved = resolve_widths(&[col(10)], 2, 9);
        assert_eq!(resolved.widths, vec![9]);
    }

    #[test]
    fn empty_columns() {
        let resolved = resolve_widths(&[], 2, 10);
        assert!(resolved.is_empty());
        assert_eq!(resolved.total(2), 0);
    }
}
