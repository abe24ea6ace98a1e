//! Collecting a bounded number of items from a pager.

use crate::pager::Pager;
use crate::pagination::{ListOptions, Page, Pagination};

/// Number of results a listing returns when no limit is given.
pub const DEFAULT_LIMIT: usize = 20;

/// Items gathered by [`collect_limited`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Listing<T> {
    /// Collected items, in server order.
    pub items: Vec<T>,
    /// Metadata of the last page fetched. `None` if no page was fetched.
    pub pagination: Option<Pagination>,
    /// Whether the limit stopped collection before the server ran out.
    pub reached_limit: bool,
}

impl<T> Listing<T> {
    /// Total number of results the server reports, 0 if unknown.
    pub fn total_count(&self) -> usize {
        self.pagination.as_ref().map_or(0, |p| p.total_count)
    }
}

/// Pull items from `pager` until `limit` items pass `keep` or the pager ends.
///
/// A `limit` of 0 means [`DEFAULT_LIMIT`]. Items rejected by `keep` are
/// consumed without counting towards the limit. No item beyond the limit is
/// pulled, so no page past the one holding the last kept item is fetched.
///
/// Fails with the pager's error, discarding anything collected.
pub fn collect_limited<T, E, F, K>(
    pager: &mut Pager<T, E, F>,
    limit: usize,
    mut keep: K,
) -> Result<Listing<T>, E>
where
    F: FnMut(&ListOptions) -> Result<Page<T>, E>,
    K: FnMut(&T) -> bool,
{
    let limit = if limit == 0 { DEFAULT_LIMIT } else { limit };
    let mut items = Vec::new();

    while items.len() < limit {
        let Some((_, item)) = pager.next() else {
            break;
        };
        if keep(&item) {
            items.push(item);
        }
    }

    if let Some(err) = pager.take_err() {
        return Err(err);
    }

    let pagination = pager.current().cloned();
    let total_count = pagination.as_ref().map_or(0, |p| p.total_count);
    let reached_limit = items.len() >= limit && pager.yielded() < total_count;

    tracing::debug!(
        collected = items.len(),
        limit,
        total_count,
        reached_limit,
        "collected listing"
    );

    Ok(Listing {
        items,
        pagination,
        reached_limit,
    })
}
