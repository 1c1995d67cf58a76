use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::store::ListFilter;

/// Query string of `GET /tasks`.
#[derive(Debug, Default, PartialEq, Eq, IntoParams)]
pub struct TaskListQuery {
    /// Case-insensitive substring of the title.
    pub title: Option<String>,
    /// Creation date in UTC, `YYYY-MM-DD`.
    pub date: Option<String>,
}

impl TaskListQuery {
    /// A key given more than once is ignored rather than rejected.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        let single = |key: &str| {
            let mut values = pairs.iter().filter(|(k, _)| k == key).map(|(_, v)| v);
            match (values.next(), values.next()) {
                (Some(v), None) => Some(v.clone()),
                _ => None,
            }
        };
        Self {
            title: single("title"),
            date: single("date"),
        }
    }
}

impl From<TaskListQuery> for ListFilter {
    fn from(q: TaskListQuery) -> Self {
        ListFilter {
            title: q.title,
            date: q.date,
        }
    }
}

/// Body of every non-success response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod test {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn single_values_are_kept() {
        let q = TaskListQuery::from_pairs(&pairs(&[("title", "login"), ("date", "2024-05-01"), ("x", "y")]));
        assert_eq!(q.title.as_deref(), Some("login"));
        assert_eq!(q.date.as_deref(), Some("2024-05-01"));
    }

    #[test]
    fn repeated_keys_are_ignored() {
        let q = TaskListQuery::from_pairs(&pairs(&[("title", "a"), ("title", "b"), ("date", "2024-05-01")]));
        assert_eq!(q.title, None);
        assert_eq!(q.date.as_deref(), Some("2024-05-01"));
    }
}
