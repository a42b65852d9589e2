use crate::query_builder::Condition;
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Sparse search condition over members and their owning team.
///
/// Every field is independently optional; an all-absent condition matches
/// every member. Blank or whitespace-only strings impose no constraint and
/// never match empty-string values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemberSearchCondition {
    pub username: Option<String>,
    pub team_name: Option<String>,
    pub age_goe: Option<i32>,
    pub age_loe: Option<i32>,
}

impl MemberSearchCondition {
    pub fn with_username(mut self, username: &str) -> Self {
        self.username = Some(username.to_string());
        self
    }

    pub fn with_team_name(mut self, team_name: &str) -> Self {
        self.team_name = Some(team_name.to_string());
        self
    }

    pub fn with_age_goe(mut self, age_goe: i32) -> Self {
        self.age_goe = Some(age_goe);
        self
    }

    pub fn with_age_loe(mut self, age_loe: i32) -> Self {
        self.age_loe = Some(age_loe);
        self
    }

    /// The ordered list of active predicates, to be folded with AND.
    ///
    /// Pure: no side effects, no store access. Absent and blank fields
    /// contribute nothing.
    pub fn conditions(&self) -> Vec<Condition> {
        [
            self.username_eq(),
            self.team_name_eq(),
            self.age_at_least(),
            self.age_at_most(),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Username equality predicate, active iff the field has text
    pub fn username_eq(&self) -> Option<Condition> {
        self.username
            .as_deref()
            .filter(|s| has_text(s))
            .map(|s| Condition::eq("members.username", json!(s)))
    }

    /// Team-name equality predicate against the joined team.
    ///
    /// A member with no team never matches this predicate: the left join
    /// leaves `teams.name` NULL and the equality test fails.
    pub fn team_name_eq(&self) -> Option<Condition> {
        self.team_name
            .as_deref()
            .filter(|s| has_text(s))
            .map(|s| Condition::eq("teams.name", json!(s)))
    }

    /// Lower age bound, independent of the upper bound
    pub fn age_at_least(&self) -> Option<Condition> {
        self.age_goe.map(|age| Condition::gte("members.age", json!(age)))
    }

    /// Upper age bound, independent of the lower bound
    pub fn age_at_most(&self) -> Option<Condition> {
        self.age_loe.map(|age| Condition::lte("members.age", json!(age)))
    }

    /// Both bounds as a single BETWEEN, semantically identical to applying
    /// `age_at_least` and `age_at_most` separately. Active only when both
    /// bounds are present.
    pub fn age_between(&self) -> Option<Condition> {
        match (self.age_goe, self.age_loe) {
            (Some(goe), Some(loe)) => Some(Condition::between("members.age", json!(goe), json!(loe))),
            _ => None,
        }
    }
}

/// True when the string has at least one non-whitespace character
fn has_text(s: &str) -> bool {
    !s.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_condition_produces_no_predicates() {
        let condition = MemberSearchCondition::default();
        assert!(condition.conditions().is_empty());
    }

    #[test]
    fn test_blank_strings_behave_as_absent() {
        let condition = MemberSearchCondition::default()
            .with_username("   ")
            .with_team_name("");
        assert!(condition.username_eq().is_none());
        assert!(condition.team_name_eq().is_none());
        assert!(condition.conditions().is_empty());
    }

    #[test]
    fn test_all_fields_active() {
        let condition = MemberSearchCondition::default()
            .with_username("alice")
            .with_team_name("platform")
            .with_age_goe(20)
            .with_age_loe(40);

        let predicates = condition.conditions();
        assert_eq!(predicates.len(), 4);

        let sql: Vec<String> = predicates.iter().map(|c| c.to_sql()).collect();
        assert_eq!(sql[0], "members.username = 'alice'");
        assert_eq!(sql[1], "teams.name = 'platform'");
        assert_eq!(sql[2], "members.age >= 20");
        assert_eq!(sql[3], "members.age <= 40");
    }

    #[test]
    fn test_lower_bound_is_independent_of_upper() {
        let condition = MemberSearchCondition::default().with_age_goe(25);
        let predicates = condition.conditions();
        assert_eq!(predicates.len(), 1);
        assert_eq!(predicates[0].to_sql(), "members.age >= 25");
        assert!(condition.age_at_most().is_none());
    }

    #[test]
    fn test_upper_bound_is_independent_of_lower() {
        let condition = MemberSearchCondition::default().with_age_loe(35);
        let predicates = condition.conditions();
        assert_eq!(predicates.len(), 1);
        assert_eq!(predicates[0].to_sql(), "members.age <= 35");
    }

    #[test]
    fn test_age_between_requires_both_bounds() {
        assert!(MemberSearchCondition::default()
            .with_age_goe(20)
            .age_between()
            .is_none());
        assert!(MemberSearchCondition::default()
            .with_age_loe(40)
            .age_between()
            .is_none());

        let both = MemberSearchCondition::default()
            .with_age_goe(20)
            .with_age_loe(40);
        assert_eq!(
            both.age_between().unwrap().to_sql(),
            "members.age BETWEEN 20 AND 40"
        );
    }

    #[test]
    fn test_deserializes_from_sparse_json() {
        let condition: MemberSearchCondition =
            serde_json::from_str(r#"{"team_name": "platform", "age_goe": 30}"#).unwrap();
        assert_eq!(condition.team_name.as_deref(), Some("platform"));
        assert_eq!(condition.age_goe, Some(30));
        assert!(condition.username.is_none());
        assert!(condition.age_loe.is_none());
    }
}
