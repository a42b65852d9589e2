use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Flattened result row combining member and team fields.
///
/// Team fields are NULL when the member has no team; the row is materialized
/// directly from the fetched columns, with no lazy loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct MemberTeamRow {
    pub member_id: i64,
    pub username: String,
    pub age: i32,
    pub team_id: Option<i64>,
    pub team_name: Option<String>,
}

/// Column list for the flattened member/team projection
pub fn member_team_columns() -> [&'static str; 5] {
    [
        "members.member_id",
        "members.username",
        "members.age",
        "teams.team_id AS team_id",
        "teams.name AS team_name",
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projection_aliases_team_columns() {
        let columns = member_team_columns();
        assert!(columns.contains(&"teams.team_id AS team_id"));
        assert!(columns.contains(&"teams.name AS team_name"));
    }

    #[test]
    fn test_row_serializes_null_team_fields() {
        let row = MemberTeamRow {
            member_id: 1,
            username: "alice".to_string(),
            age: 30,
            team_id: None,
            team_name: None,
        };
        let value = serde_json::to_value(&row).unwrap();
        assert!(value["team_id"].is_null());
        assert!(value["team_name"].is_null());
    }
}
