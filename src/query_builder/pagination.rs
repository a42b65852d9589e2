use crate::error::{Result, RosterError};
use serde::{Deserialize, Serialize};

/// Page size applied when a caller does not specify one.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Upper bound on requested page size.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Sort direction for an ORDER BY clause
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn to_sql(self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

/// A single (field, direction) sort order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortOrder {
    pub field: String,
    pub direction: SortDirection,
}

impl SortOrder {
    pub fn asc(field: &str) -> Self {
        Self {
            field: field.to_string(),
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(field: &str) -> Self {
        Self {
            field: field.to_string(),
            direction: SortDirection::Desc,
        }
    }
}

/// A page request: zero-based page number, page size, and optional sort.
///
/// Without an explicit sort the result order is whatever stable order the
/// store returns, ascending by insertion order unless overridden.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageRequest {
    #[serde(default)]
    pub page: u32,
    #[serde(default = "default_size")]
    pub size: u32,
    #[serde(default)]
    pub sort: Vec<SortOrder>,
}

fn default_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
            sort: Vec::new(),
        }
    }
}

impl PageRequest {
    pub fn new(page: u32, size: u32) -> Self {
        Self {
            page,
            size,
            sort: Vec::new(),
        }
    }

    pub fn with_sort(mut self, sort: Vec<SortOrder>) -> Self {
        self.sort = sort;
        self
    }

    /// Row offset of the first element of this page (`page * size`)
    pub fn offset(&self) -> u64 {
        u64::from(self.page) * u64::from(self.size)
    }

    /// Reject invalid pagination parameters before any query is built
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(RosterError::InvalidRequest(
                "page size must be positive".to_string(),
            ));
        }
        if self.size > MAX_PAGE_SIZE {
            return Err(RosterError::InvalidRequest(format!(
                "page size must be between 1 and {MAX_PAGE_SIZE}"
            )));
        }
        Ok(())
    }
}

/// LIMIT/OFFSET fragment attached to an assembled query
#[derive(Debug, Clone)]
pub struct Pagination {
    pub limit: Option<u32>,
    pub offset: Option<u64>,
}

impl Pagination {
    /// Create pagination with only limit
    pub fn limit_only(limit: u32) -> Self {
        Self {
            limit: Some(limit),
            offset: None,
        }
    }

    /// Create pagination with only offset
    pub fn offset_only(offset: u64) -> Self {
        Self {
            limit: None,
            offset: Some(offset),
        }
    }

    /// Create pagination with both limit and offset
    pub fn limit_offset(limit: u32, offset: u64) -> Self {
        Self {
            limit: Some(limit),
            offset: Some(offset),
        }
    }

    /// Convert to SQL string
    pub fn to_sql(&self) -> String {
        let mut sql = String::new();

        if let Some(limit) = self.limit {
            sql.push_str(&format!(" LIMIT {limit}"));
        }

        if let Some(offset) = self.offset {
            sql.push_str(&format!(" OFFSET {offset}"));
        }

        sql
    }
}

impl From<&PageRequest> for Pagination {
    fn from(request: &PageRequest) -> Self {
        Pagination::limit_offset(request.size, request.offset())
    }
}
