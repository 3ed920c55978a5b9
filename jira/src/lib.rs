//!
//! Client for the small slice of the Jira REST API (v3) that work log
//! registration needs: looking up a single issue and inserting a work log
//! entry on it.
//!
//! The types are declared specifically for the purpose of work log
//! management, and are hence not generic.
use std::{
    collections::BTreeMap,
    error,
    fmt::{self, Formatter},
};

use chrono::{DateTime, Utc};
use log::debug;
use models::{
    core::IssueKey,
    issue::Issue,
    worklog::{CommentBody, Insert, Worklog},
};
use reqwest::{
    header::{ACCEPT, CONTENT_TYPE},
    Client, Method, RequestBuilder, StatusCode,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use url::{ParseError, Url};

pub mod models;

type Result<T> = std::result::Result<T, JiraError>;

const API_PATH: &str = "rest/api/3";

/// Error document returned by Jira for 4xx responses.
#[derive(Serialize, Deserialize, Debug)]
pub struct Errors {
    #[serde(rename = "errorMessages", default)]
    pub error_messages: Vec<String>,
    #[serde(default)]
    pub errors: BTreeMap<String, String>,
}

#[derive(Debug)]
pub enum JiraError {
    Unauthorized,
    NotFound(String),
    Fault { code: StatusCode, errors: Errors },
    RequestError(reqwest::Error),
    SerializationError(serde_json::error::Error),
    ParseError(ParseError),
}

#[allow(clippy::enum_glob_use)]
impl fmt::Display for JiraError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        use crate::JiraError::*;

        match self {
            Unauthorized => write!(f, "Jira rejected the credentials (HTTP 401)"),
            NotFound(url) => write!(f, "Not found: '{url}'"),
            Fault {
                ref code,
                ref errors,
            } => write!(f, "Jira request failed ({code}):\n{errors:#?}"),
            RequestError(e) => write!(f, "Could not reach Jira: {}", e.to_string().as_str()),
            SerializationError(e) => write!(f, "Could not serialize/deserialize: {e}"),
            ParseError(e) => write!(f, "Invalid Jira URL: {e}"),
        }
    }
}

impl error::Error for JiraError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            JiraError::RequestError(e) => Some(e),
            JiraError::SerializationError(e) => Some(e),
            JiraError::ParseError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ParseError> for JiraError {
    fn from(error: ParseError) -> JiraError {
        JiraError::ParseError(error)
    }
}

impl From<reqwest::Error> for JiraError {
    fn from(error: reqwest::Error) -> JiraError {
        JiraError::RequestError(error)
    }
}

impl From<serde_json::error::Error> for JiraError {
    fn from(error: serde_json::error::Error) -> JiraError {
        JiraError::SerializationError(error)
    }
}

#[derive(Clone, Debug)]
pub enum Credentials {
    Anonymous,
    Basic(String, String),
    Bearer(String),
}

impl Credentials {
    fn apply(&self, request: RequestBuilder) -> RequestBuilder {
        match self {
            Credentials::Anonymous => request,
            Credentials::Basic(ref user, ref pass) => {
                request.basic_auth(user.to_owned(), Some(pass.to_owned()))
            }
            Credentials::Bearer(ref token) => request.bearer_auth(token.to_owned()),
        }
    }
}

/// Outcome of an issue lookup. A missing issue is a normal answer,
/// not a failure, so it gets its own variant rather than an error.
#[derive(Debug)]
pub enum IssueLookup {
    Found(Issue),
    NotFound,
}

#[derive(Clone)]
pub struct Jira {
    host: Url,
    credentials: Credentials,
    pub client: Client,
}

impl Jira {
    #[allow(clippy::missing_errors_doc)]
    pub fn new<H>(host: H, credentials: Credentials) -> Result<Jira>
    where
        H: Into<String>,
    {
        let host = Url::parse(&host.into())?;

        Ok(Jira {
            host,
            client: Client::new(),
            credentials,
        })
    }

    async fn request<D>(&self, method: Method, endpoint: &str, body: Option<Vec<u8>>) -> Result<D>
    where
        D: DeserializeOwned,
    {
        let url = self.host.join(&format!("{API_PATH}{endpoint}"))?;

        let mut request = self
            .client
            .request(method, url.clone())
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json");

        request = self.credentials.apply(request);

        if let Some(body) = body {
            request = request.body(body);
        }
        debug!("request '{:?}'", request);

        let response = request.send().await?;

        let status = response.status();
        let body = &response.text().await?;
        debug!("status {:?} body '{:?}'", status, body);
        match status {
            StatusCode::UNAUTHORIZED => Err(JiraError::Unauthorized),
            StatusCode::NOT_FOUND => Err(JiraError::NotFound(url.to_string())),
            failure if !failure.is_success() => Err(JiraError::Fault {
                code: status,
                errors: parse_error_document(body),
            }),
            _ => {
                let data = if body.is_empty() { "null" } else { body };
                Ok(serde_json::from_str::<D>(data)?)
            }
        }
    }

    #[allow(clippy::missing_errors_doc)]
    pub async fn get<D>(&self, endpoint: &str) -> Result<D>
    where
        D: DeserializeOwned,
    {
        self.request::<D>(Method::GET, endpoint, None).await
    }

    async fn post<D, S>(&self, endpoint: &str, body: S) -> Result<D>
    where
        D: DeserializeOwned,
        S: Serialize,
    {
        let data = serde_json::to_string::<S>(&body)?;
        self.request::<D>(Method::POST, endpoint, Some(data.into_bytes()))
            .await
    }

    /// Looks up a single issue by key. HTTP 404 is reported as
    /// `IssueLookup::NotFound`; every other failure is an error.
    #[allow(clippy::missing_errors_doc)]
    pub async fn get_issue(&self, key: &IssueKey) -> Result<IssueLookup> {
        match self.get::<Issue>(&format!("/issue/{key}")).await {
            Ok(issue) => Ok(IssueLookup::Found(issue)),
            Err(JiraError::NotFound(_)) => Ok(IssueLookup::NotFound),
            Err(e) => Err(e),
        }
    }

    /// Creates a work log entry on the given issue. There is no retry on
    /// failure: the entry is delivered at most once.
    #[allow(clippy::missing_errors_doc)]
    pub async fn insert_worklog(
        &self,
        issue_key: &IssueKey,
        started: DateTime<Utc>,
        time_spent_seconds: i64,
        comment: &str,
    ) -> Result<Worklog> {
        let worklog_entry = Insert {
            time_spent_seconds,
            comment: CommentBody::from_text(comment),
            started: format_started(started),
        };

        let url = format!("/issue/{issue_key}/worklog");
        self.post::<Worklog, Insert>(&url, worklog_entry).await
    }
}

/// Jira wants the offset as `+0000`, not `Z`, so this must not go through
/// the RFC 3339 formatter.
fn format_started(started: DateTime<Utc>) -> String {
    started.format("%Y-%m-%dT%H:%M:%S.%3f%z").to_string()
}

fn parse_error_document(body: &str) -> Errors {
    serde_json::from_str::<Errors>(body).unwrap_or_else(|_| Errors {
        error_messages: vec![body.to_string()],
        errors: BTreeMap::new(),
    })
}
