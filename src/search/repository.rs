use super::condition::MemberSearchCondition;
use super::page::{paged, Page};
use super::projection::{member_team_columns, MemberTeamRow};
use crate::error::{Result, RosterError};
use crate::query_builder::{PageRequest, QueryBuilder, SortOrder, WhereClause};
use sqlx::PgPool;

const MEMBERS_TABLE: &str = "members";
const TEAMS_TABLE: &str = "teams";
const TEAM_JOIN_ON: &str = "members.team_id = teams.team_id";

/// Sort fields accepted from callers, mapped to qualified columns.
const SORTABLE_FIELDS: &[(&str, &str)] = &[
    ("member_id", "members.member_id"),
    ("username", "members.username"),
    ("age", "members.age"),
    ("team_name", "teams.name"),
];

/// Search repository over members and their owning teams.
///
/// All entry points share one query assembler: base `members` table, LEFT
/// JOIN to `teams` (members without a team still appear when their own
/// predicates match), flattened projection, and the condition's predicate
/// set folded with AND.
#[derive(Debug, Clone)]
pub struct MemberSearchRepository {
    pool: PgPool,
}

impl MemberSearchRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Unpaged search: the full list of matching rows, no count.
    pub async fn search_list(
        &self,
        condition: &MemberSearchCondition,
    ) -> Result<Vec<MemberTeamRow>> {
        let rows = Self::search_query(condition)
            .fetch_all::<MemberTeamRow>(&self.pool)
            .await?;
        tracing::debug!(rows = rows.len(), "unpaged member search");
        Ok(rows)
    }

    /// Paged search with an unconditional count query.
    ///
    /// Fetch and count run in one logical round trip; the count is always
    /// executed. Prefer [`search_page`] unless profiling says otherwise.
    pub async fn search_page_combined(
        &self,
        condition: &MemberSearchCondition,
        request: &PageRequest,
    ) -> Result<Page<MemberTeamRow>> {
        request.validate()?;

        let content = self
            .fetch_page_content(condition, request)
            .await?;
        let total = Self::count_query(condition).count(&self.pool).await?;

        Ok(Page::from_parts(content, request, total))
    }

    /// Paged search with a separated, possibly elided count query.
    ///
    /// The count query is built from the same predicate set and invoked
    /// lazily, only when the fetched page does not prove the total by
    /// itself. This is the default paging mode.
    pub async fn search_page(
        &self,
        condition: &MemberSearchCondition,
        request: &PageRequest,
    ) -> Result<Page<MemberTeamRow>> {
        request.validate()?;

        let content = self
            .fetch_page_content(condition, request)
            .await?;

        let count_query = Self::count_query(condition);
        paged(content, request, || async move {
            count_query
                .count(&self.pool)
                .await
                .map_err(RosterError::from)
        })
        .await
    }

    /// Exact count of matching rows, with no fetch.
    pub async fn count(&self, condition: &MemberSearchCondition) -> Result<i64> {
        Ok(Self::count_query(condition).count(&self.pool).await?)
    }

    async fn fetch_page_content(
        &self,
        condition: &MemberSearchCondition,
        request: &PageRequest,
    ) -> Result<Vec<MemberTeamRow>> {
        let rows = Self::search_query(condition)
            .apply_sort(&Self::qualified_sort(request)?)
            .paginate(request)
            .fetch_all::<MemberTeamRow>(&self.pool)
            .await?;
        tracing::debug!(
            page = request.page,
            size = request.size,
            rows = rows.len(),
            "paged member search"
        );
        Ok(rows)
    }

    /// Assemble the projection query: members, always LEFT JOINed to teams,
    /// with the condition's predicates as one WHERE conjunction.
    fn search_query(condition: &MemberSearchCondition) -> QueryBuilder {
        let columns = member_team_columns();
        let mut query = QueryBuilder::new(MEMBERS_TABLE)
            .select(&columns)
            .left_join(TEAMS_TABLE, TEAM_JOIN_ON);

        let predicates = condition.conditions();
        if !predicates.is_empty() {
            query = query.where_clause(WhereClause::and(predicates));
        }

        query
    }

    /// Assemble the count query from the same predicate set. The team join
    /// is attached only when a team-side predicate needs it.
    fn count_query(condition: &MemberSearchCondition) -> QueryBuilder {
        let mut query = QueryBuilder::new(MEMBERS_TABLE);

        if condition.team_name_eq().is_some() {
            query = query.left_join(TEAMS_TABLE, TEAM_JOIN_ON);
        }

        let predicates = condition.conditions();
        if !predicates.is_empty() {
            query = query.where_clause(WhereClause::and(predicates));
        }

        query.to_count_query()
    }

    /// Map caller-facing sort fields to qualified columns, rejecting
    /// anything outside the whitelist before SQL is built.
    fn qualified_sort(request: &PageRequest) -> Result<Vec<SortOrder>> {
        request
            .sort
            .iter()
            .map(|order| {
                SORTABLE_FIELDS
                    .iter()
                    .find(|(name, _)| *name == order.field)
                    .map(|(_, column)| SortOrder {
                        field: column.to_string(),
                        direction: order.direction,
                    })
                    .ok_or_else(|| {
                        RosterError::InvalidRequest(format!(
                            "unsortable field: {}",
                            order.field
                        ))
                    })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query_builder::SortDirection;

    fn sql_for(condition: &MemberSearchCondition) -> String {
        MemberSearchRepository::search_query(condition).build_sql()
    }

    #[test]
    fn test_empty_condition_fetches_everything() {
        let sql = sql_for(&MemberSearchCondition::default());
        assert!(sql.contains("FROM members LEFT JOIN teams"));
        assert!(!sql.contains("WHERE"));
    }

    #[test]
    fn test_projection_query_always_left_joins() {
        // Filtering on username must not silently exclude teamless members
        let sql = sql_for(&MemberSearchCondition::default().with_username("alice"));
        assert!(sql.contains("LEFT JOIN teams ON members.team_id = teams.team_id"));
        assert!(!sql.contains("INNER JOIN"));
        assert!(sql.contains("WHERE members.username = 'alice'"));
    }

    #[test]
    fn test_predicates_fold_with_and() {
        let sql = sql_for(
            &MemberSearchCondition::default()
                .with_team_name("platform")
                .with_age_goe(20)
                .with_age_loe(40),
        );
        assert!(sql.contains(
            "WHERE (teams.name = 'platform' AND members.age >= 20 AND members.age <= 40)"
        ));
        assert!(!sql.contains(" OR "));
    }

    #[test]
    fn test_count_query_skips_join_without_team_predicate() {
        let sql = MemberSearchRepository::count_query(
            &MemberSearchCondition::default().with_age_goe(25),
        )
        .build_sql();
        assert!(sql.starts_with("SELECT COUNT(*) FROM members"));
        assert!(!sql.contains("JOIN"));
        assert!(sql.contains("WHERE members.age >= 25"));
    }

    #[test]
    fn test_count_query_joins_when_team_predicate_active() {
        let sql = MemberSearchRepository::count_query(
            &MemberSearchCondition::default().with_team_name("platform"),
        )
        .build_sql();
        assert!(sql.contains("SELECT COUNT(*) FROM members LEFT JOIN teams"));
        assert!(sql.contains("WHERE teams.name = 'platform'"));
    }

    #[test]
    fn test_blank_team_name_skips_count_join() {
        let sql =
            MemberSearchRepository::count_query(&MemberSearchCondition::default().with_team_name("  "))
                .build_sql();
        assert_eq!(sql, "SELECT COUNT(*) FROM members");
    }

    #[test]
    fn test_sort_whitelist_maps_to_qualified_columns() {
        let request = PageRequest::new(0, 10).with_sort(vec![
            SortOrder::asc("team_name"),
            SortOrder::desc("age"),
        ]);
        let sort = MemberSearchRepository::qualified_sort(&request).unwrap();
        assert_eq!(sort[0].field, "teams.name");
        assert_eq!(sort[0].direction, SortDirection::Asc);
        assert_eq!(sort[1].field, "members.age");
    }

    #[test]
    fn test_unknown_sort_field_rejected() {
        let request =
            PageRequest::new(0, 10).with_sort(vec![SortOrder::asc("password; DROP TABLE members")]);
        let result = MemberSearchRepository::qualified_sort(&request);
        assert!(matches!(result, Err(RosterError::InvalidRequest(_))));
    }
}
