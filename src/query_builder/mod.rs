//! # Query Builder
//!
//! Composable SQL query building for the member search engine.
//!
//! ## Key Components
//!
//! - [`builder`] - Core query builder with SQL generation and execution
//! - [`conditions`] - WHERE clause composition with an explicit AND fold
//! - [`joins`] - JOIN clause management (INNER, LEFT)
//! - [`pagination`] - Page requests and LIMIT/OFFSET clauses
//!
//! Queries are assembled as pure data; nothing touches the database until a
//! fetch or count method is invoked on a [`QueryBuilder`].

pub mod builder;
pub mod conditions;
pub mod joins;
pub mod pagination;

pub use builder::QueryBuilder;
pub use conditions::{Condition, LogicalOperator, WhereClause};
pub use joins::{Join, JoinType};
pub use pagination::{
    PageRequest, Pagination, SortDirection, SortOrder, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE,
};
