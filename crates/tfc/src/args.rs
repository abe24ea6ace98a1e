//! Flags shared by every listing command.

use clap::Args;
use tfc_paging::{clamp_page_size, DEFAULT_LIMIT, DEFAULT_PAGE_SIZE};

use crate::error::{Error, Result};

/// `--limit`, `--columns` and `--page-size`, flattened into a command's own
/// arguments with `#[command(flatten)]`.
#[derive(Args, Clone, Debug, PartialEq, Eq)]
pub struct ListArgs {
    /// Limit the number of results.
    #[arg(short, long, default_value_t = DEFAULT_LIMIT)]
    pub limit: usize,

    /// Columns to show, comma separated.
    #[arg(short, long, value_delimiter = ',')]
    pub columns: Vec<String>,

    /// Results requested per API call (at most 100).
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    pub page_size: usize,
}

impl Default for ListArgs {
    fn default() -> Self {
        ListArgs {
            limit: DEFAULT_LIMIT,
            columns: Vec::new(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ListArgs {
    /// The requested columns, or `defaults` when none were given.
    pub fn columns_or(&self, defaults: &[&str]) -> Vec<String> {
        if self.columns.is_empty() {
            defaults.iter().map(|c| c.to_string()).collect()
        } else {
            self.columns.iter().map(|c| c.trim().to_string()).collect()
        }
    }

    /// Page size clamped to what the API accepts.
    pub fn page_size(&self) -> usize {
        clamp_page_size(self.page_size)
    }

    /// Reject any requested column that is not in `allowed`.
    pub fn validate_columns(&self, allowed: &[&str]) -> Result<()> {
        for column in &self.columns {
            let column = column.trim();
            if !allowed.contains(&column) {
                return Err(Error::InvalidColumn {
                    column: column.to_string(),
                    allowed: allowed.iter().map(|c| c.to_string()).collect(),
                });
            }
        }
        Ok(())
    }
}
