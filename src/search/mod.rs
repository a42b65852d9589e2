//! # Member Search
//!
//! Filtered, paginated member search over the `members`/`teams` tables.
//!
//! ## Key Components
//!
//! - [`condition`] - Sparse search condition and predicate composition
//! - [`projection`] - Flattened member/team result row
//! - [`page`] - Page envelope and count-elision evaluation
//! - [`repository`] - The three search entry points over one shared
//!   query assembler
//!
//! ## Query modes
//!
//! | Entry point | Pagination | Count |
//! |---|---|---|
//! | `search_list` | none | none |
//! | `search_page_combined` | yes | always executed |
//! | `search_page` | yes | elided when the page proves the total |
//!
//! `search_page` is the default: for first-page or undersized result sets it
//! answers with a single round trip.

pub mod condition;
pub mod page;
pub mod projection;
pub mod repository;

pub use condition::MemberSearchCondition;
pub use page::{paged, resolve_total, Page};
pub use projection::MemberTeamRow;
pub use repository::MemberSearchRepository;
