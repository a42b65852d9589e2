use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

/// Team represents the owning group for zero or more members.
/// Maps to the `teams` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Team {
    pub team_id: i64,
    pub name: String,
    pub created_at: NaiveDateTime,
}

/// New Team for creation (without generated fields)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTeam {
    pub name: String,
}

impl Team {
    /// Create a new team
    pub async fn create(pool: &PgPool, new_team: NewTeam) -> Result<Team, sqlx::Error> {
        sqlx::query_as::<_, Team>(
            r#"
            INSERT INTO teams (name)
            VALUES ($1)
            RETURNING team_id, name, created_at
            "#,
        )
        .bind(new_team.name)
        .fetch_one(pool)
        .await
    }

    /// Find a team by ID
    pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Team>, sqlx::Error> {
        sqlx::query_as::<_, Team>(
            r#"
            SELECT team_id, name, created_at
            FROM teams
            WHERE team_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Find a team by name
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<Team>, sqlx::Error> {
        sqlx::query_as::<_, Team>(
            r#"
            SELECT team_id, name, created_at
            FROM teams
            WHERE name = $1
            "#,
        )
        .bind(name)
        .fetch_optional(pool)
        .await
    }

    /// List all teams in insertion order
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Team>, sqlx::Error> {
        sqlx::query_as::<_, Team>(
            r#"
            SELECT team_id, name, created_at
            FROM teams
            ORDER BY team_id
            "#,
        )
        .fetch_all(pool)
        .await
    }
}
