use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

/// Member represents one person in the roster.
/// Maps to the `members` table; `team_id` is NULL for teamless members.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Member {
    pub member_id: i64,
    pub username: String,
    pub age: i32,
    pub team_id: Option<i64>,
    pub created_at: NaiveDateTime,
}

/// New Member for creation (without generated fields)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMember {
    pub username: String,
    pub age: i32,
    pub team_id: Option<i64>,
}

impl Member {
    /// Create a new member
    pub async fn create(pool: &PgPool, new_member: NewMember) -> Result<Member, sqlx::Error> {
        sqlx::query_as::<_, Member>(
            r#"
            INSERT INTO members (username, age, team_id)
            VALUES ($1, $2, $3)
            RETURNING member_id, username, age, team_id, created_at
            "#,
        )
        .bind(new_member.username)
        .bind(new_member.age)
        .bind(new_member.team_id)
        .fetch_one(pool)
        .await
    }

    /// Find a member by ID
    pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Member>, sqlx::Error> {
        sqlx::query_as::<_, Member>(
            r#"
            SELECT member_id, username, age, team_id, created_at
            FROM members
            WHERE member_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Find members by username
    pub async fn find_by_username(
        pool: &PgPool,
        username: &str,
    ) -> Result<Vec<Member>, sqlx::Error> {
        sqlx::query_as::<_, Member>(
            r#"
            SELECT member_id, username, age, team_id, created_at
            FROM members
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_all(pool)
        .await
    }

    /// List all members in insertion order
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Member>, sqlx::Error> {
        sqlx::query_as::<_, Member>(
            r#"
            SELECT member_id, username, age, team_id, created_at
            FROM members
            ORDER BY member_id
            "#,
        )
        .fetch_all(pool)
        .await
    }
}
