use taskboard_types::{Category, Priority, Status, Task};

/// Client-side filter criteria applied to the cached task list.
///
/// `None` means "any value". `search_query` is matched case-insensitively
/// against the title; an empty query matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    pub category: Option<Category>,
    pub status: Option<Status>,
    pub priority: Option<Priority>,
    pub search_query: String,
}

impl FilterSelection {
    pub fn matches(&self, task: &Task) -> bool {
        self.category.is_none_or(|c| c == task.category)
            && self.status.is_none_or(|s| s == task.status)
            && self.priority.is_none_or(|p| p == task.priority)
            && (self.search_query.is_empty() || task.title_contains(&self.search_query))
    }

    /// Merges the fields present in `patch`. Returns whether the search query
    /// changed value.
    pub fn apply(&mut self, patch: FilterPatch) -> bool {
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        match patch.search_query {
            Some(query) if query != self.search_query => {
                self.search_query = query;
                true
            }
            _ => false,
        }
    }
}

/// Partial update of a [`FilterSelection`].
///
/// The outer `Option` says whether the field is touched; for the enum fields
/// the inner one is the new value, `None` clearing it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterPatch {
    pub category: Option<Option<Category>>,
    pub status: Option<Option<Status>>,
    pub priority: Option<Option<Priority>>,
    pub search_query: Option<String>,
}

impl FilterPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: Option<Category>) -> Self {
        self.category = Some(category);
        self
    }

    pub fn status(mut self, status: Option<Status>) -> Self {
        self.status = Some(status);
        self
    }

    pub fn priority(mut self, priority: Option<Priority>) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn search_query(mut self, query: impl Into<String>) -> Self {
        self.search_query = Some(query.into());
        self
    }
}
