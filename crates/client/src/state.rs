//! In-memory todo collection with local filters and derived counts.
//!
//! The list holds the full fetched collection, most recently created first,
//! and is reconciled against server responses after each mutation: created
//! todos are prepended, updated todos replace their predecessor by id, and
//! deleted todos are removed by id. Filters and counts are pure views over
//! the full collection and are recomputed on demand rather than maintained
//! incrementally.

use chrono::NaiveDate;

use doable_core::dates::is_overdue;
use doable_core::types::DbId;
use doable_db::models::todo::{Priority, Todo};

/// Completion-status filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Pending,
    Completed,
}

/// Priority filter: everything, or one specific priority.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PriorityFilter {
    #[default]
    All,
    Only(Priority),
}

/// Derived counters shown in the summary header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counts {
    pub pending: usize,
    pub completed: usize,
    pub overdue: usize,
}

/// The client's copy of the server's todo collection.
///
/// Only mutated from completed server responses, never speculatively.
#[derive(Debug, Default)]
pub struct TodoList {
    todos: Vec<Todo>,
    pub status_filter: StatusFilter,
    pub priority_filter: PriorityFilter,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole collection with a fresh list fetch. The server
    /// returns todos most-recent-first; the order is kept as-is.
    pub fn replace_all(&mut self, todos: Vec<Todo>) {
        self.todos = todos;
    }

    /// Reconcile a successful create: the new record becomes the most
    /// recent entry.
    pub fn apply_created(&mut self, todo: Todo) {
        self.todos.insert(0, todo);
    }

    /// Reconcile a successful update: replace the matching record with the
    /// one the server returned. Replacing the whole record (rather than
    /// merging fields locally) keeps server-derived fields like
    /// `updated_at` correct. Unknown ids are ignored.
    pub fn apply_updated(&mut self, todo: Todo) {
        if let Some(existing) = self.todos.iter_mut().find(|t| t.id == todo.id) {
            *existing = todo;
        }
    }

    /// Reconcile a successful delete: remove the matching record.
    pub fn apply_deleted(&mut self, id: DbId) {
        self.todos.retain(|t| t.id != id);
    }

    /// The full collection, unfiltered.
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    /// The todos passing both active filters, in collection order.
    pub fn visible(&self) -> Vec<&Todo> {
        self.todos.iter().filter(|t| self.matches(t)).collect()
    }

    /// Derived counts over the *full* collection (filters do not apply).
    /// `today` is supplied by the caller so the overdue cutoff is decided
    /// in one place.
    pub fn counts(&self, today: NaiveDate) -> Counts {
        Counts {
            pending: self.todos.iter().filter(|t| !t.completed).count(),
            completed: self.todos.iter().filter(|t| t.completed).count(),
            overdue: self
                .todos
                .iter()
                .filter(|t| is_overdue(t.due_date, t.completed, today))
                .count(),
        }
    }

    fn matches(&self, todo: &Todo) -> bool {
        let priority_match = match self.priority_filter {
            PriorityFilter::All => true,
            PriorityFilter::Only(p) => todo.priority == p,
        };
        let status_match = match self.status_filter {
            StatusFilter::All => true,
            StatusFilter::Completed => todo.completed,
            StatusFilter::Pending => !todo.completed,
        };
        priority_match && status_match
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn todo(id: DbId, priority: Priority, completed: bool) -> Todo {
        let now = Utc::now();
        Todo {
            id,
            title: format!("todo {id}"),
            description: None,
            completed,
            due_date: None,
            priority,
            created_at: now,
            updated_at: now,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn pending_filter_with_all_priorities() {
        let mut list = TodoList::new();
        list.replace_all(vec![
            todo(1, Priority::High, false),
            todo(2, Priority::Low, true),
            todo(3, Priority::Medium, false),
        ]);
        list.status_filter = StatusFilter::Pending;

        let ids: Vec<_> = list.visible().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn filters_compose_as_a_conjunction() {
        let mut list = TodoList::new();
        list.replace_all(vec![
            todo(1, Priority::High, false),
            todo(2, Priority::High, true),
            todo(3, Priority::Low, false),
        ]);
        list.status_filter = StatusFilter::Pending;
        list.priority_filter = PriorityFilter::Only(Priority::High);

        let ids: Vec<_> = list.visible().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn counts_ignore_active_filters() {
        let mut list = TodoList::new();
        list.replace_all(vec![
            todo(1, Priority::High, false),
            todo(2, Priority::Low, true),
        ]);
        list.status_filter = StatusFilter::Completed;

        let counts = list.counts(date(2024, 6, 15));
        assert_eq!(counts.pending, 1);
        assert_eq!(counts.completed, 1);
    }

    #[test]
    fn overdue_count_is_day_granular() {
        let today = date(2024, 6, 15);
        let mut due_today = todo(1, Priority::Medium, false);
        due_today.due_date = Some(today);
        let mut due_yesterday = todo(2, Priority::Medium, false);
        due_yesterday.due_date = Some(date(2024, 6, 14));
        let mut done_yesterday = todo(3, Priority::Medium, true);
        done_yesterday.due_date = Some(date(2024, 6, 14));

        let mut list = TodoList::new();
        list.replace_all(vec![due_today, due_yesterday, done_yesterday]);

        // Only the pending, strictly-past due date counts.
        assert_eq!(list.counts(today).overdue, 1);
    }

    #[test]
    fn created_todos_are_prepended() {
        let mut list = TodoList::new();
        list.replace_all(vec![todo(1, Priority::Medium, false)]);
        list.apply_created(todo(2, Priority::Medium, false));

        let ids: Vec<_> = list.todos().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn updated_todo_replaces_matching_record_only() {
        let mut list = TodoList::new();
        list.replace_all(vec![
            todo(1, Priority::Medium, false),
            todo(2, Priority::Medium, false),
        ]);

        let mut updated = todo(2, Priority::High, true);
        updated.title = "renamed".to_string();
        list.apply_updated(updated);

        assert_eq!(list.todos()[0].id, 1);
        assert_eq!(list.todos()[0].title, "todo 1");
        assert_eq!(list.todos()[1].title, "renamed");
        assert!(list.todos()[1].completed);
    }

    #[test]
    fn update_for_unknown_id_is_ignored() {
        let mut list = TodoList::new();
        list.replace_all(vec![todo(1, Priority::Medium, false)]);
        list.apply_updated(todo(99, Priority::High, true));

        assert_eq!(list.todos().len(), 1);
        assert_eq!(list.todos()[0].id, 1);
    }

    #[test]
    fn deleted_todo_is_removed_others_kept() {
        let mut list = TodoList::new();
        list.replace_all(vec![
            todo(1, Priority::Medium, false),
            todo(2, Priority::Medium, false),
        ]);
        list.apply_deleted(1);

        let ids: Vec<_> = list.todos().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2]);
    }
}
