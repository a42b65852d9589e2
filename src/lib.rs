#![allow(clippy::doc_markdown)] // Allow technical terms like PostgreSQL, SQLx in docs
#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # Roster Core
//!
//! Filtered, paginated member search over PostgreSQL.
//!
//! ## Overview
//!
//! The crate answers search requests over a two-entity dataset (members and
//! their owning teams) by composing a minimal SQL query from a set of
//! optional filter fields, and by computing the total matching count without
//! always paying for a second count query.
//!
//! ## Module Organization
//!
//! - [`search`] - Search condition, projection, page envelope, repository
//! - [`query_builder`] - SQL assembly: conditions, joins, pagination
//! - [`models`] - Member and Team rows with basic finders
//! - [`config`] - Environment-driven configuration
//! - [`error`] - Structured error handling
//! - [`logging`] - Tracing subscriber setup
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use roster_core::{MemberSearchCondition, MemberSearchRepository, PageRequest};
//! use sqlx::PgPool;
//!
//! # async fn example(pool: PgPool) -> Result<(), Box<dyn std::error::Error>> {
//! let repository = MemberSearchRepository::new(pool);
//!
//! let condition = MemberSearchCondition::default()
//!     .with_team_name("platform")
//!     .with_age_goe(30);
//!
//! let page = repository
//!     .search_page(&condition, &PageRequest::new(0, 20))
//!     .await?;
//!
//! println!("{} of {} members", page.content.len(), page.total);
//! # Ok(())
//! # }
//! ```
//!
//! ## Count elision
//!
//! The default paging mode skips the count query whenever the fetched page
//! proves the total by itself: a first page shorter than the requested size,
//! or a later partial page. Elision never changes the answer, only the cost.

pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod query_builder;
pub mod search;

pub use config::RosterConfig;
pub use error::{Result, RosterError};
pub use query_builder::{PageRequest, QueryBuilder, SortDirection, SortOrder};
pub use search::{MemberSearchCondition, MemberSearchRepository, MemberTeamRow, Page};
