use super::{Join, PageRequest, Pagination, SortDirection, SortOrder, WhereClause};
use sqlx::{PgPool, Row};

/// Composable SQL query over a base table: optional joins, an AND-folded
/// predicate set, projection, ordering, and LIMIT/OFFSET.
///
/// Building a query never touches the data store; only the fetch and count
/// methods execute SQL, and their failures propagate unchanged.
#[derive(Debug, Clone)]
pub struct QueryBuilder {
    base_table: String,
    select_fields: Vec<String>,
    joins: Vec<Join>,
    where_clauses: Vec<WhereClause>,
    order_by: Vec<String>,
    pagination: Option<Pagination>,
}

impl QueryBuilder {
    /// Create a new query builder for the given table
    pub fn new(table: &str) -> Self {
        Self {
            base_table: table.to_string(),
            select_fields: vec!["*".to_string()],
            joins: Vec::new(),
            where_clauses: Vec::new(),
            order_by: Vec::new(),
            pagination: None,
        }
    }

    /// Set specific fields to select
    pub fn select(mut self, fields: &[&str]) -> Self {
        self.select_fields = fields.iter().map(|f| f.to_string()).collect();
        self
    }

    /// Add a JOIN clause
    pub fn join(mut self, join: Join) -> Self {
        self.joins.push(join);
        self
    }

    /// Add an INNER JOIN
    pub fn inner_join(self, table: &str, on_condition: &str) -> Self {
        self.join(Join::inner(table, on_condition))
    }

    /// Add a LEFT JOIN
    pub fn left_join(self, table: &str, on_condition: &str) -> Self {
        self.join(Join::left(table, on_condition))
    }

    /// Add a WHERE clause
    pub fn where_clause(mut self, clause: WhereClause) -> Self {
        self.where_clauses.push(clause);
        self
    }

    /// Add a simple equality WHERE condition
    pub fn where_eq(self, field: &str, value: serde_json::Value) -> Self {
        self.where_clause(WhereClause::simple(field, "=", value))
    }

    /// Add an ORDER BY clause
    pub fn order_by(mut self, field: &str, direction: SortDirection) -> Self {
        self.order_by
            .push(format!("{} {}", field, direction.to_sql()));
        self
    }

    /// Add ORDER BY ASC
    pub fn order_asc(self, field: &str) -> Self {
        self.order_by(field, SortDirection::Asc)
    }

    /// Add ORDER BY DESC
    pub fn order_desc(self, field: &str) -> Self {
        self.order_by(field, SortDirection::Desc)
    }

    /// Apply a list of sort orders
    pub fn apply_sort(mut self, sort: &[SortOrder]) -> Self {
        for order in sort {
            self = self.order_by(&order.field, order.direction);
        }
        self
    }

    /// Attach LIMIT/OFFSET from a page request
    pub fn paginate(mut self, request: &PageRequest) -> Self {
        self.pagination = Some(Pagination::from(request));
        self
    }

    /// Add LIMIT clause
    pub fn limit(mut self, limit: u32) -> Self {
        if let Some(ref mut pagination) = self.pagination {
            pagination.limit = Some(limit);
        } else {
            self.pagination = Some(Pagination::limit_only(limit));
        }
        self
    }

    /// Add OFFSET clause
    pub fn offset(mut self, offset: u64) -> Self {
        if let Some(ref mut pagination) = self.pagination {
            pagination.offset = Some(offset);
        } else {
            self.pagination = Some(Pagination::offset_only(offset));
        }
        self
    }

    /// Build the complete SQL query string
    pub fn build_sql(&self) -> String {
        let mut sql = String::new();

        // SELECT clause
        sql.push_str("SELECT ");
        sql.push_str(&self.select_fields.join(", "));

        // FROM clause
        sql.push_str(&format!(" FROM {}", self.base_table));

        // JOIN clauses
        for join in &self.joins {
            sql.push(' ');
            sql.push_str(&join.to_sql());
        }

        // WHERE clauses
        if !self.where_clauses.is_empty() {
            sql.push_str(" WHERE ");
            let where_parts: Vec<String> = self
                .where_clauses
                .iter()
                .map(|clause| clause.to_sql())
                .collect();
            sql.push_str(&where_parts.join(" AND "));
        }

        // ORDER BY
        if !self.order_by.is_empty() {
            sql.push_str(&format!(" ORDER BY {}", self.order_by.join(", ")));
        }

        // LIMIT/OFFSET
        if let Some(ref pagination) = self.pagination {
            sql.push_str(&pagination.to_sql());
        }

        sql
    }

    /// Execute the query and return all rows
    pub async fn fetch_all<T>(&self, pool: &PgPool) -> Result<Vec<T>, sqlx::Error>
    where
        T: for<'r> sqlx::FromRow<'r, sqlx::postgres::PgRow> + Send + Unpin,
    {
        let sql = self.build_sql();
        tracing::debug!(sql = %sql, "executing fetch query");
        sqlx::query_as::<_, T>(&sql).fetch_all(pool).await
    }

    /// Execute a COUNT query built from the same predicate set.
    ///
    /// Projection, ordering, and pagination are stripped; joins and WHERE
    /// clauses are kept so the count matches the fetch exactly.
    pub async fn count(&self, pool: &PgPool) -> Result<i64, sqlx::Error> {
        let count_builder = self.to_count_query();

        let sql = count_builder.build_sql();
        tracing::debug!(sql = %sql, "executing count query");
        let row = sqlx::query(&sql).fetch_one(pool).await?;

        Ok(row.get::<i64, _>(0))
    }

    /// Derive the COUNT form of this query without executing it
    pub fn to_count_query(&self) -> Self {
        let mut count_builder = self.clone();
        count_builder.select_fields = vec!["COUNT(*)".to_string()];
        count_builder.order_by.clear();
        count_builder.pagination = None;
        count_builder
    }
}
