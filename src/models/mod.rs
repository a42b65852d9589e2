//! Data layer for the two roster entities.
//!
//! The search engine only reads these tables; creation exists for
//! bootstrapping and test fixtures.

pub mod member;
pub mod team;

pub use member::{Member, NewMember};
pub use team::{NewTeam, Team};
