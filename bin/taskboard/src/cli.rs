use std::io::{BufRead, Write};

use chrono::NaiveDate;
use clap::{ArgAction, Args, Parser, Subcommand};
use taskboard_client::{ClientError, FilterPatch, FormError, TaskApi, TaskClient, TaskForm};
use taskboard_types::{Category, DATE_FORMAT, Priority, Status, Task};
use thiserror::Error;

pub const DEFAULT_SERVER: &str = "http://localhost:5000";

#[derive(Debug, Parser)]
#[command(name = "taskboard")]
#[command(about = "Command-line client for a taskboard server")]
#[command(version)]
pub struct Cli {
    /// Base URL of the taskboard server
    #[arg(long, global = true, env = "TASKBOARD_URL", default_value = DEFAULT_SERVER)]
    pub server: String,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List tasks, newest first
    List(ListArgs),
    /// Show a single task
    Show {
        id: String,
    },
    /// Create a task
    Add {
        /// Task title (at least 3 characters)
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        /// Bug, Feature, Documentation, Refactor or Test
        #[arg(long)]
        category: Option<Category>,
        /// "To Do", "In Progress" or Done
        #[arg(long)]
        status: Option<Status>,
        /// Low, Medium or High
        #[arg(long)]
        priority: Option<Priority>,
    },
    /// Change fields of an existing task
    Edit {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        category: Option<Category>,
        #[arg(long)]
        status: Option<Status>,
        #[arg(long)]
        priority: Option<Priority>,
    },
    /// Delete a task
    Delete {
        id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Debug, Default, Args)]
pub struct ListArgs {
    /// Case-insensitive title substring
    #[arg(long)]
    pub search: Option<String>,
    /// Creation date (YYYY-MM-DD, UTC)
    #[arg(long, value_parser = parse_date)]
    pub date: Option<String>,
    #[arg(long)]
    pub category: Option<Category>,
    #[arg(long)]
    pub status: Option<Status>,
    #[arg(long)]
    pub priority: Option<Priority>,
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Client(#[from] ClientError),
    #[error("invalid task: {0}")]
    Form(#[from] FormError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn parse_date(s: &str) -> Result<String, String> {
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .map(|_| s.to_owned())
        .map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}

/// One row of `list` output.
pub fn task_line(task: &Task) -> String {
    format!(
        "{}  {}  {:<13} {:<11} {:<6} {}",
        task.id,
        task.created_date(),
        task.category.to_string(),
        task.status.to_string(),
        task.priority.to_string(),
        task.title
    )
}

fn write_details(out: &mut impl Write, task: &Task) -> std::io::Result<()> {
    writeln!(out, "ID:          {}", task.id)?;
    writeln!(out, "Title:       {}", task.title)?;
    writeln!(out, "Category:    {}", task.category)?;
    writeln!(out, "Status:      {}", task.status)?;
    writeln!(out, "Priority:    {}", task.priority)?;
    writeln!(out, "Created:     {}", taskboard_types::timestamp::format(&task.created_at))?;
    if !task.description.is_empty() {
        writeln!(out, "\n{}", task.description)?;
    }
    Ok(())
}

/// Handle the list command: the search text doubles as the server-side
/// title query, the enum filters are applied to the fetched list.
pub async fn handle_list<A: TaskApi>(
    client: &mut TaskClient<A>,
    args: ListArgs,
    out: &mut impl Write,
) -> Result<(), CliError> {
    client.set_filter(
        FilterPatch::new()
            .category(args.category)
            .status(args.status)
            .priority(args.priority)
            .search_query(args.search.unwrap_or_default()),
    );
    let search = client.state().filters.search_query.clone();
    client.refresh(Some(&search), args.date.as_deref()).await?;

    let tasks = client.filtered_tasks();
    if tasks.is_empty() {
        writeln!(out, "No tasks found.")?;
    }
    for task in tasks {
        writeln!(out, "{}", task_line(task))?;
    }
    Ok(())
}

pub async fn handle_show<A: TaskApi>(client: &mut TaskClient<A>, id: &str, out: &mut impl Write) -> Result<(), CliError> {
    let task = client.load_one(id).await?;
    write_details(out, &task)?;
    Ok(())
}

pub async fn handle_add<A: TaskApi>(
    client: &mut TaskClient<A>,
    form: TaskForm,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let input = form.into_input()?;
    let task = client.create(&input).await?;
    writeln!(out, "Task created successfully (ID: {})", task.id)?;
    Ok(())
}

/// Field overrides for the edit command; `None` keeps the current value.
#[derive(Debug, Default)]
pub struct TaskEdits {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<Category>,
    pub status: Option<Status>,
    pub priority: Option<Priority>,
}

impl TaskEdits {
    fn merge_into(self, form: &mut TaskForm) {
        if let Some(title) = self.title {
            form.title = title;
        }
        if let Some(description) = self.description {
            form.description = description;
        }
        if let Some(category) = self.category {
            form.category = category;
        }
        if let Some(status) = self.status {
            form.status = status;
        }
        if let Some(priority) = self.priority {
            form.priority = priority;
        }
    }
}

pub async fn handle_edit<A: TaskApi>(
    client: &mut TaskClient<A>,
    id: &str,
    edits: TaskEdits,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let original = client.load_one(id).await?;
    let mut form = TaskForm::from_task(&original);
    edits.merge_into(&mut form);
    let task = form.into_task(&original)?;
    let updated = client.update(&task).await?;
    writeln!(out, "Task updated successfully (ID: {})", updated.id)?;
    Ok(())
}

/// Handle the delete command. Without `yes` the user must answer `y` on
/// `input` before any request is sent.
pub async fn handle_delete<A: TaskApi>(
    client: &mut TaskClient<A>,
    id: &str,
    yes: bool,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<(), CliError> {
    if !yes {
        write!(out, "Delete task {id}? [y/N] ")?;
        out.flush()?;
        let mut answer = String::new();
        input.read_line(&mut answer)?;
        if !matches!(answer.trim(), "y" | "Y" | "yes") {
            writeln!(out, "Aborted.")?;
            return Ok(());
        }
    }
    client.delete(id).await?;
    writeln!(out, "Task deleted (ID: {id})")?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use std::sync::Mutex;

    use chrono::{TimeZone, Utc};
    use taskboard_client::{HttpTaskApi, ListQuery};
    use taskboard_types::TaskInput;

    /// Nothing listens on the discard port, so any request would fail.
    fn offline_client() -> TaskClient<HttpTaskApi> {
        TaskClient::new(HttpTaskApi::new("http://127.0.0.1:9").unwrap())
    }

    #[test]
    fn parses_list_filters() {
        let cli = Cli::try_parse_from([
            "taskboard", "list", "--search", "login", "--status", "in-progress", "--priority", "high", "--date",
            "2024-05-01",
        ])
        .unwrap();
        assert_eq!(cli.server, DEFAULT_SERVER);
        match cli.command {
            Commands::List(args) => {
                assert_eq!(args.search.as_deref(), Some("login"));
                assert_eq!(args.status, Some(Status::InProgress));
                assert_eq!(args.priority, Some(Priority::High));
                assert_eq!(args.category, None);
                assert_eq!(args.date.as_deref(), Some("2024-05-01"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn rejects_bad_enum_and_date_values() {
        assert!(Cli::try_parse_from(["taskboard", "list", "--priority", "urgent"]).is_err());
        assert!(Cli::try_parse_from(["taskboard", "list", "--date", "2024-13-01"]).is_err());
        assert!(Cli::try_parse_from(["taskboard", "add", "Title", "--category", "chore"]).is_err());
    }

    #[test]
    fn global_flags_follow_subcommand() {
        let cli = Cli::try_parse_from(["taskboard", "delete", "t-1", "--yes", "--server", "http://h:1", "-vv"]).unwrap();
        assert_eq!(cli.server, "http://h:1");
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Commands::Delete { yes: true, .. }));
    }

    #[test]
    fn task_line_shows_key_fields() {
        let input = TaskInput {
            title: "Fix login".into(),
            description: String::new(),
            category: Category::Bug,
            status: Status::ToDo,
            priority: Priority::High,
        };
        let task = Task::with_id("t-1", input, Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap());
        assert_eq!(task_line(&task), "t-1  2024-05-01  Bug           To Do       High   Fix login");
    }

    #[tokio::test]
    async fn short_title_is_rejected_before_any_request() {
        let mut client = offline_client();
        let form = TaskForm {
            title: "ab".into(),
            ..TaskForm::default()
        };
        let mut out = Vec::new();
        let err = handle_add(&mut client, form, &mut out).await.unwrap_err();
        assert!(matches!(err, CliError::Form(FormError::TitleTooShort { .. })));
        assert!(client.state().tasks.is_empty());
    }

    #[tokio::test]
    async fn declined_delete_sends_nothing() {
        let mut client = offline_client();
        let mut input = "n\n".as_bytes();
        let mut out = Vec::new();
        handle_delete(&mut client, "t-1", false, &mut input, &mut out).await.unwrap();
        let printed = String::from_utf8(out).unwrap();
        assert!(printed.starts_with("Delete task t-1? [y/N] "));
        assert!(printed.ends_with("Aborted.\n"));
    }

    /// Server double keeping tasks newest first and recording what it was sent.
    #[derive(Default)]
    struct FakeApi {
        tasks: Mutex<Vec<Task>>,
        queries: Mutex<Vec<ListQuery>>,
        updates: Mutex<Vec<Task>>,
    }

    fn not_found(id: &str) -> ClientError {
        ClientError::Status {
            status: 404,
            message: format!("task {id} not found"),
        }
    }

    impl TaskApi for FakeApi {
        async fn list(&self, query: &ListQuery) -> Result<Vec<Task>, ClientError> {
            self.queries.lock().unwrap().push(query.clone());
            let tasks = self.tasks.lock().unwrap();
            Ok(tasks
                .iter()
                .filter(|t| query.title.as_deref().is_none_or(|q| t.title_contains(q)))
                .cloned()
                .collect())
        }

        async fn get(&self, id: &str) -> Result<Task, ClientError> {
            let tasks = self.tasks.lock().unwrap();
            tasks.iter().find(|t| t.id == id).cloned().ok_or_else(|| not_found(id))
        }

        async fn create(&self, input: &TaskInput) -> Result<Task, ClientError> {
            let mut tasks = self.tasks.lock().unwrap();
            let task = Task::with_id(format!("t{}", tasks.len() + 1), input.clone(), Utc::now());
            tasks.insert(0, task.clone());
            Ok(task)
        }

        async fn update(&self, task: &Task) -> Result<Task, ClientError> {
            self.updates.lock().unwrap().push(task.clone());
            let mut tasks = self.tasks.lock().unwrap();
            let slot = tasks.iter_mut().find(|t| t.id == task.id).ok_or_else(|| not_found(&task.id))?;
            slot.apply(task.input());
            Ok(slot.clone())
        }

        async fn delete(&self, id: &str) -> Result<(), ClientError> {
            let mut tasks = self.tasks.lock().unwrap();
            let pos = tasks.iter().position(|t| t.id == id).ok_or_else(|| not_found(id))?;
            tasks.remove(pos);
            Ok(())
        }
    }

    fn stored(id: &str, title: &str, minute: u32, category: Category, status: Status, priority: Priority) -> Task {
        let input = TaskInput {
            title: title.into(),
            description: "details".into(),
            category,
            status,
            priority,
        };
        Task::with_id(id, input, Utc.with_ymd_and_hms(2024, 5, 1, 9, minute, 0).unwrap())
    }

    /// Three tasks, newest first: "Write docs", "Login page", "Fix login".
    fn seeded_client() -> TaskClient<FakeApi> {
        let api = FakeApi::default();
        *api.tasks.lock().unwrap() = vec![
            stored("t3", "Write docs", 3, Category::Documentation, Status::Done, Priority::Low),
            stored("t2", "Login page", 2, Category::Feature, Status::InProgress, Priority::Low),
            stored("t1", "Fix login", 1, Category::Bug, Status::ToDo, Priority::High),
        ];
        TaskClient::new(api)
    }

    #[tokio::test]
    async fn list_searches_server_side_and_filters_locally() {
        let mut client = seeded_client();
        let args = ListArgs {
            search: Some("login".into()),
            status: Some(Status::InProgress),
            ..ListArgs::default()
        };
        let mut out = Vec::new();
        handle_list(&mut client, args, &mut out).await.unwrap();

        let expected = format!("{}\n", task_line(client.task("t2").unwrap()));
        assert_eq!(String::from_utf8(out).unwrap(), expected);
        assert_eq!(client.state().tasks.len(), 2);
        assert_eq!(client.state().filters.status, Some(Status::InProgress));
        assert_eq!(*client.api().queries.lock().unwrap(), vec![ListQuery::new(Some("login"), None)]);
    }

    #[tokio::test]
    async fn list_reports_empty_result() {
        let mut client = seeded_client();
        let args = ListArgs {
            category: Some(Category::Refactor),
            ..ListArgs::default()
        };
        let mut out = Vec::new();
        handle_list(&mut client, args, &mut out).await.unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "No tasks found.\n");
        assert_eq!(client.api().queries.lock().unwrap()[0], ListQuery::default());
    }

    #[tokio::test]
    async fn show_prints_task_details() {
        let mut client = seeded_client();
        let mut out = Vec::new();
        handle_show(&mut client, "t1", &mut out).await.unwrap();
        let printed = String::from_utf8(out).unwrap();
        assert!(printed.contains("Title:       Fix login\n"));
        assert!(printed.contains("Status:      To Do\n"));
        assert!(printed.contains("Created:     2024-05-01T09:01:00.000Z\n"));
        assert!(printed.ends_with("\ndetails\n"));
        assert!(client.task("t1").is_some());
    }

    #[tokio::test]
    async fn show_missing_task_is_not_found() {
        let mut client = seeded_client();
        let err = handle_show(&mut client, "nope", &mut Vec::new()).await.unwrap_err();
        assert!(matches!(err, CliError::Client(e) if e.is_not_found()));
    }

    #[tokio::test]
    async fn edit_merges_given_fields_over_server_copy() {
        let mut client = seeded_client();
        let original = stored("t1", "Fix login", 1, Category::Bug, Status::ToDo, Priority::High);
        let edits = TaskEdits {
            title: Some("Fix login flow".into()),
            priority: Some(Priority::Low),
            ..TaskEdits::default()
        };
        let mut out = Vec::new();
        handle_edit(&mut client, "t1", edits, &mut out).await.unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Task updated successfully (ID: t1)\n");

        let sent = client.api().updates.lock().unwrap()[0].clone();
        assert_eq!(sent.id, original.id);
        assert_eq!(sent.created_at, original.created_at);
        assert_eq!(sent.title, "Fix login flow");
        assert_eq!(sent.priority, Priority::Low);
        assert_eq!(sent.description, original.description);
        assert_eq!(sent.category, original.category);
        assert_eq!(sent.status, original.status);
        assert_eq!(client.task("t1").unwrap().title, "Fix login flow");
    }

    #[tokio::test]
    async fn edit_with_short_title_sends_no_update() {
        let mut client = seeded_client();
        let edits = TaskEdits {
            title: Some("no".into()),
            ..TaskEdits::default()
        };
        let err = handle_edit(&mut client, "t1", edits, &mut Vec::new()).await.unwrap_err();
        assert!(matches!(err, CliError::Form(FormError::TitleTooShort { min: 3 })));
        assert!(client.api().updates.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn add_then_confirmed_delete() {
        let mut client = seeded_client();
        let form = TaskForm {
            title: "Ship release".into(),
            ..TaskForm::default()
        };
        let mut out = Vec::new();
        handle_add(&mut client, form, &mut out).await.unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Task created successfully (ID: t4)\n");
        assert_eq!(client.state().tasks[0].title, "Ship release");

        let mut input = "y\n".as_bytes();
        let mut out = Vec::new();
        handle_delete(&mut client, "t4", false, &mut input, &mut out).await.unwrap();
        assert!(String::from_utf8(out).unwrap().ends_with("Task deleted (ID: t4)\n"));
        assert!(client.task("t4").is_none());
        assert_eq!(client.api().tasks.lock().unwrap().len(), 3);
    }
}
