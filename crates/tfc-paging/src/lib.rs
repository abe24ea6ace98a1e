//! Cursor-based pagination for the `tfc` command line client.
//!
//! List endpoints return results one page at a time together with
//! [`Pagination`] metadata. [`Pager`] hides the paging behind a plain
//! iterator of `(index, item)` pairs, and [`collect_limited`] drives a pager
//! up to a result limit the way listing commands need.
//!
//! ```rust
//! use tfc_paging::{collect_limited, ListOptions, Page, Pager, Pagination};
//!
//! let mut pager = Pager::new(|opts: &ListOptions| {
//!     let page = opts.page_number.unwrap_or(1);
//!     Ok::<_, String>(Page::new(
//!         vec![format!("ws-{}", page)],
//!         Pagination {
//!             current_page: page,
//!             next_page: (page < 10).then_some(page + 1),
//!             total_pages: 10,
//!             total_count: 10,
//!             ..Default::default()
//!         },
//!     ))
//! });
//!
//! let listing = collect_limited(&mut pager, 3, |_| true).unwrap();
//! assert_eq!(listing.items, ["ws-1", "ws-2", "ws-3"]);
//! assert!(listing.reached_limit);
//! assert_eq!(pager.fetched_pages(), 3);
//! ```

mod listing;
mod pager;
mod pagination;

pub use listing::{collect_limited, Listing, DEFAULT_LIMIT};
pub use pager::Pager;
pub use pagination::{
    clamp_page_size, ListOptions, Page, Pagination, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE,
};
