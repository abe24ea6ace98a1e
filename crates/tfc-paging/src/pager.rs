//! Lazy iteration over every item of a paged list endpoint.

use std::vec;

use crate::pagination::{ListOptions, Page, Pagination};

/// Turns a page-fetching function into one lazy sequence of items.
///
/// Each item is paired with its 0-based position across all pages. A page
/// is requested only once the items of the previous page have all been
/// handed out, so stopping early (`break`, [`Iterator::take`]) saves the
/// remaining requests.
///
/// The first fetch error ends the sequence for good; it is kept and can be
/// inspected with [`err`](Pager::err) once iteration stops.
///
/// The fetch function must report a next page that moves forward. A server
/// that keeps answering with the same `next_page` makes the pager loop.
///
/// # Example
///
/// ```rust
/// use std::convert::Infallible;
/// use tfc_paging::{ListOptions, Page, Pager, Pagination};
///
/// let mut pager = Pager::new(|opts: &ListOptions| {
///     let current = opts.page_number.unwrap_or(1);
///     let next = (current < 3).then_some(current + 1);
///     Ok::<_, Infallible>(Page::new(
///         vec![current * 10, current * 10 + 1],
///         Pagination {
///             current_page: current,
///             next_page: next,
///             total_pages: 3,
///             total_count: 6,
///             ..Default::default()
///         },
///     ))
/// })
/// .with_page_size(2);
///
/// let items: Vec<_> = pager.all().collect();
/// assert_eq!(items[0], (0, 10));
/// assert_eq!(items[5], (5, 31));
/// assert_eq!(pager.fetched_pages(), 3);
/// assert!(pager.err().is_none());
/// ```
pub struct Pager<T, E, F>
where
    F: FnMut(&ListOptions) -> Result<Page<T>, E>,
{
    fetch: F,
    opts: ListOptions,
    current: Option<Pagination>,
    buffer: vec::IntoIter<T>,
    index: usize,
    fetched: usize,
    last: bool,
    err: Option<E>,
}

impl<T, E, F> Pager<T, E, F>
where
    F: FnMut(&ListOptions) -> Result<Page<T>, E>,
{
    /// Bind a fetch function. Nothing is requested until the first pull.
    pub fn new(fetch: F) -> Self {
        Pager {
            fetch,
            opts: ListOptions::default(),
            current: None,
            buffer: Vec::new().into_iter(),
            index: 0,
            fetched: 0,
            last: false,
            err: None,
        }
    }

    /// Set the page size sent with every request.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.set_page_size(page_size);
        self
    }

    /// Set the page size sent with every request.
    ///
    /// The value is passed to the fetch function unchanged; bounding it to
    /// what the API accepts is up to the caller. Takes effect on the next page
    /// request.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.opts.page_size = page_size;
    }

    /// Options the next page request will be sent with.
    pub fn options(&self) -> &ListOptions {
        &self.opts
    }

    /// Iterate over `(index, item)` pairs. Equivalent to `by_ref()`.
    pub fn all(&mut self) -> impl Iterator<Item = (usize, T)> + '_ {
        self.by_ref()
    }

    /// Metadata of the most recently fetched page.
    pub fn current(&self) -> Option<&Pagination> {
        self.current.as_ref()
    }

    /// The error that stopped iteration, if any.
    pub fn err(&self) -> Option<&E> {
        self.err.as_ref()
    }

    /// Take the error out of the pager. Iteration stays stopped.
    pub fn take_err(&mut self) -> Option<E> {
        self.err.take()
    }

    /// Consume the pager, returning the error that stopped it, if any.
    pub fn into_err(self) -> Option<E> {
        self.err
    }

    /// Number of page requests issued so far.
    pub fn fetched_pages(&self) -> usize {
        self.fetched
    }

    /// Number of items handed out so far.
    pub fn yielded(&self) -> usize {
        self.index
    }

    fn fetch_next(&mut self) -> bool {
        let page_number = self.opts.page_number;
        let page_size = self.opts.page_size;
        self.fetched += 1;

        match (self.fetch)(&self.opts) {
            Ok(page) => {
                tracing::debug!(
                    page = ?page_number,
                    page_size,
                    items = page.items.len(),
                    next = ?page.pagination.next_page,
                    "fetched page"
                );
                match page.pagination.next_page {
                    Some(next) => self.opts.page_number = Some(next),
                    None => self.last = true,
                }
                self.buffer = page.items.into_iter();
                self.current = Some(page.pagination);
                true
            }
            Err(err) => {
                tracing::debug!(page = ?page_number, page_size, "page fetch failed");
                self.err = Some(err);
                self.last = true;
                false
            }
        }
    }
}

impl<T, E, F> Iterator for Pager<T, E, F>
where
    F: FnMut(&ListOptions) -> Result<Page<T>, E>,
{
    type Item = (usize, T);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(item) = self.buffer.next() {
                let index = self.index;
                self.index += 1;
                return Some((index, item));
            }

            if self.last || !self.fetch_next() {
                return None;
            }
        }
    }
}

impl<T, E, F> std::iter::FusedIterator for Pager<T, E, F> where
    F: FnMut(&ListOptions) -> Result<Page<T>, E>
{
}

impl<T, E, F> std::fmt::Debug for Pager<T, E, F>
where
    E: std::fmt::Debug,
    F: FnMut(&ListOptions) -> Result<Page<T>, E>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pager")
            .field("opts", &self.opts)
            .field("current", &self.current)
            .field("index", &self.index)
            .field("fetched", &self.fetched)
            .field("last", &self.last)
            .field("err", &self.err)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_page(items: Vec<u32>) -> impl FnMut(&ListOptions) -> Result<Page<u32>, String> {
        move |_| {
            let total_count = items.len();
            Ok(Page::new(
                items.clone(),
                Pagination {
                    current_page: 1,
                    total_pages: 1,
                    total_count,
                    ..Default::default()
                },
            ))
        }
    }

    #[test]
    fn nothing_fetched_before_first_pull() {
        let pager = Pager::new(single_page(vec![1, 2]));
        assert_eq!(pager.fetched_pages(), 0);
        assert!(pager.current().is_none());
    }

    #[test]
    fn single_page_is_fetched_once() {
        let mut pager = Pager::new(single_page(vec![1, 2, 3]));
        let items: Vec<_> = pager.all().collect();
        assert_eq!(items, vec![(0, 1), (1, 2), (2, 3)]);
        assert_eq!(pager.fetched_pages(), 1);
        assert_eq!(pager.next(), None);
        assert_eq!(pager.fetched_pages(), 1);
    }

    #[test]
    fn empty_listing() {
        let mut pager = Pager::new(single_page(Vec::new()));
        assert_eq!(pager.next(), None);
        assert_eq!(pager.current().map(|p| p.total_count), Some(0));
    }

    #[test]
    fn error_is_sticky() {
        let mut calls = 0;
        let mut pager = Pager::new(|_: &ListOptions| -> Result<Page<u32>, String> {
            calls += 1;
            Err("boom".to_string())
        });
        assert_eq!(pager.next(), None);
        assert_eq!(pager.next(), None);
        assert_eq!(pager.err().map(String::as_str), Some("boom"));
        assert_eq!(pager.fetched_pages(), 1);
        assert_eq!(pager.take_err().as_deref(), Some("boom"));
        assert_eq!(pager.next(), None);
        drop(pager);
        assert_eq!(calls, 1);
    }

    #[test]
    fn page_size_is_sent_as_given() {
        let mut seen = Vec::new();
        let mut pager = Pager::new(|opts: &ListOptions| -> Result<Page<u32>, String> {
            seen.push(opts.clone());
            Ok(Page::new(Vec::new(), Pagination::default()))
        })
        .with_page_size(1000);
        assert_eq!(pager.options().page_size, 1000);
        pager.set_page_size(5);
        assert_eq!(pager.next(), None);
        drop(pager);
        assert_eq!(
            seen,
            vec![ListOptions {
                page_number: None,
                page_size: 5
            }]
        );
    }
}
