/// Represents the atomic predicate shapes the search engine emits
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    Simple {
        field: String,
        operator: String,
        value: serde_json::Value,
    },
    Between {
        field: String,
        start: serde_json::Value,
        end: serde_json::Value,
    },
    IsNull {
        field: String,
    },
    IsNotNull {
        field: String,
    },
}

impl Condition {
    /// Equality predicate (`field = value`)
    pub fn eq(field: &str, value: serde_json::Value) -> Self {
        Condition::Simple {
            field: field.to_string(),
            operator: "=".to_string(),
            value,
        }
    }

    /// Lower-bound predicate (`field >= value`)
    pub fn gte(field: &str, value: serde_json::Value) -> Self {
        Condition::Simple {
            field: field.to_string(),
            operator: ">=".to_string(),
            value,
        }
    }

    /// Upper-bound predicate (`field <= value`)
    pub fn lte(field: &str, value: serde_json::Value) -> Self {
        Condition::Simple {
            field: field.to_string(),
            operator: "<=".to_string(),
            value,
        }
    }

    /// Inclusive range predicate, equivalent to `gte` AND `lte`
    pub fn between(field: &str, start: serde_json::Value, end: serde_json::Value) -> Self {
        Condition::Between {
            field: field.to_string(),
            start,
            end,
        }
    }

    /// Convert condition to SQL string
    pub fn to_sql(&self) -> String {
        match self {
            Condition::Simple {
                field,
                operator,
                value,
            } => {
                format!("{} {} {}", field, operator, format_value(value))
            }
            Condition::Between { field, start, end } => {
                format!(
                    "{} BETWEEN {} AND {}",
                    field,
                    format_value(start),
                    format_value(end)
                )
            }
            Condition::IsNull { field } => {
                format!("{field} IS NULL")
            }
            Condition::IsNotNull { field } => {
                format!("{field} IS NOT NULL")
            }
        }
    }
}

/// A WHERE clause combining one or more conditions.
///
/// The search path only ever folds conditions with AND; `Or` exists for
/// callers that assemble their own clauses.
#[derive(Debug, Clone)]
pub struct WhereClause {
    pub conditions: Vec<Condition>,
    pub operator: LogicalOperator,
}

#[derive(Debug, Clone)]
pub enum LogicalOperator {
    And,
    Or,
}

impl WhereClause {
    /// Create a WHERE clause with a single condition
    pub fn single(condition: Condition) -> Self {
        Self {
            conditions: vec![condition],
            operator: LogicalOperator::And,
        }
    }

    /// Create a simple WHERE clause from field/operator/value
    pub fn simple(field: &str, operator: &str, value: serde_json::Value) -> Self {
        Self::single(Condition::Simple {
            field: field.to_string(),
            operator: operator.to_string(),
            value,
        })
    }

    /// Create WHERE IS NULL clause
    pub fn is_null(field: &str) -> Self {
        Self::single(Condition::IsNull {
            field: field.to_string(),
        })
    }

    /// Create WHERE IS NOT NULL clause
    pub fn is_not_null(field: &str) -> Self {
        Self::single(Condition::IsNotNull {
            field: field.to_string(),
        })
    }

    /// Combine multiple conditions with AND
    pub fn and(conditions: Vec<Condition>) -> Self {
        Self {
            conditions,
            operator: LogicalOperator::And,
        }
    }

    /// Combine multiple conditions with OR
    pub fn or(conditions: Vec<Condition>) -> Self {
        Self {
            conditions,
            operator: LogicalOperator::Or,
        }
    }

    /// Convert to SQL string
    pub fn to_sql(&self) -> String {
        if self.conditions.is_empty() {
            return "1=1".to_string();
        }

        if self.conditions.len() == 1 {
            return self.conditions[0].to_sql();
        }

        let operator_str = match self.operator {
            LogicalOperator::And => " AND ",
            LogicalOperator::Or => " OR ",
        };

        let condition_sqls: Vec<String> = self.conditions.iter().map(|c| c.to_sql()).collect();

        format!("({})", condition_sqls.join(operator_str))
    }
}

/// Format a JSON value for SQL
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => "NULL".to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::String(s) => format!("'{}'", s.replace('\'', "''")),
        _ => format!("'{}'", value.to_string().replace('\'', "''")),
    }
}
