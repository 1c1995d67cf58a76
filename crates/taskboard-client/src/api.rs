//! Access to the task server.
//!
//! [`TaskApi`] is the seam between the state container and the network:
//! [`HttpTaskApi`] speaks the REST contract over `reqwest`, tests substitute
//! an in-process implementation.

use std::future::Future;

use reqwest::{Client, Response, Url};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use taskboard_types::{Task, TaskInput};

use crate::error::ClientError;

/// Server-side filters of `GET /tasks`. Empty strings are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub title: Option<String>,
    pub date: Option<String>,
}

impl ListQuery {
    pub fn new(title: Option<&str>, date: Option<&str>) -> Self {
        Self {
            title: non_empty(title),
            date: non_empty(date),
        }
    }
}

fn non_empty(s: Option<&str>) -> Option<String> {
    s.filter(|s| !s.is_empty()).map(str::to_owned)
}

pub trait TaskApi: Send + Sync {
    fn list(&self, query: &ListQuery) -> impl Future<Output = Result<Vec<Task>, ClientError>> + Send;

    fn get(&self, id: &str) -> impl Future<Output = Result<Task, ClientError>> + Send;

    fn create(&self, input: &TaskInput) -> impl Future<Output = Result<Task, ClientError>> + Send;

    /// Sends the whole task; the server only takes its mutable fields.
    fn update(&self, task: &Task) -> impl Future<Output = Result<Task, ClientError>> + Send;

    fn delete(&self, id: &str) -> impl Future<Output = Result<(), ClientError>> + Send;
}

/// `reqwest`-backed [`TaskApi`].
///
/// The client is built without a request timeout: a hung server hangs the
/// call.
#[derive(Debug, Clone)]
pub struct HttpTaskApi {
    base: Url,
    client: Client,
}

impl HttpTaskApi {
    /// `base_url` is the server root, e.g. `http://localhost:5000`; task paths
    /// are appended to whatever path it already has.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let client = Client::builder()
            .user_agent(concat!("taskboard-client/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Self::with_client(base_url, client)
    }

    pub fn with_client(base_url: &str, client: Client) -> Result<Self, ClientError> {
        let base = Url::parse(base_url).map_err(|e| ClientError::InvalidUrl(format!("{base_url}: {e}")))?;
        if base.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl(base_url.to_owned()));
        }
        Ok(Self { base, client })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn tasks_url(&self, id: Option<&str>) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("tasks");
            if let Some(id) = id {
                segments.push(id);
            }
        }
        url
    }

    fn list_url(&self, query: &ListQuery) -> Url {
        let mut url = self.tasks_url(None);
        if query.title.is_some() || query.date.is_some() {
            let mut pairs = url.query_pairs_mut();
            if let Some(title) = &query.title {
                pairs.append_pair("title", title);
            }
            if let Some(date) = &query.date {
                pairs.append_pair("date", date);
            }
        }
        url
    }
}

impl TaskApi for HttpTaskApi {
    async fn list(&self, query: &ListQuery) -> Result<Vec<Task>, ClientError> {
        let resp = self.client.get(self.list_url(query)).send().await?;
        read_json(resp).await
    }

    async fn get(&self, id: &str) -> Result<Task, ClientError> {
        let resp = self.client.get(self.tasks_url(Some(id))).send().await?;
        read_json(resp).await
    }

    async fn create(&self, input: &TaskInput) -> Result<Task, ClientError> {
        let resp = self.client.post(self.tasks_url(None)).json(input).send().await?;
        read_json(resp).await
    }

    async fn update(&self, task: &Task) -> Result<Task, ClientError> {
        let resp = self
            .client
            .patch(self.tasks_url(Some(&task.id)))
            .json(task)
            .send()
            .await?;
        read_json(resp).await
    }

    async fn delete(&self, id: &str) -> Result<(), ClientError> {
        let resp = self.client.delete(self.tasks_url(Some(id))).send().await?;
        check_status(resp).await?;
        Ok(())
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

async fn check_status(resp: Response) -> Result<Response, ClientError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let message = match resp.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => status.canonical_reason().unwrap_or("request failed").to_owned(),
    };
    Err(ClientError::Status {
        status: status.as_u16(),
        message,
    })
}

async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T, ClientError> {
    let resp = check_status(resp).await?;
    let bytes = resp.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}
