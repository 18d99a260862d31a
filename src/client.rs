//! HTTP client for the event server

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use eventsync_core::event::decode_event_list;
use eventsync_core::protocol::StatusResponse;
use eventsync_core::{Event, EventId, NewEvent, RemoteStore, StoreStatus, SyncError, SyncResult};
use reqwest::Response;
use serde::Serialize;
use url::Url;

/// HTTP client for the event server.
///
/// Keeps a cookie jar so the session from `/login` rides along on every
/// later request.
pub struct Client {
    http: reqwest::Client,
    base_url: Url,
}

#[derive(Serialize)]
struct LoginForm<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct RegisterForm<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
}

impl Client {
    pub fn new(base_url: Url, timeout: Option<Duration>) -> SyncResult<Self> {
        let mut builder = reqwest::Client::builder().cookie_store(true);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(http_error)?;

        Ok(Self {
            http,
            base_url: with_trailing_slash(base_url),
        })
    }

    fn endpoint(&self, path: &str) -> SyncResult<Url> {
        self.base_url
            .join(path)
            .map_err(|e| SyncError::InvalidUrl(format!("{}: {}", path, e)))
    }

    /// POST /login
    pub async fn login(&self, email: &str, password: &str) -> SyncResult<()> {
        let resp = self
            .http
            .post(self.endpoint("login")?)
            .form(&LoginForm { email, password })
            .send()
            .await
            .map_err(http_error)?;

        // A successful login redirects away from the login page.
        check(&resp)?;
        tracing::debug!(email, "logged in");
        Ok(())
    }

    /// POST /register
    pub async fn register(&self, name: &str, email: &str, password: &str) -> SyncResult<StoreStatus> {
        let resp = self
            .http
            .post(self.endpoint("register")?)
            .form(&RegisterForm {
                name,
                email,
                password,
            })
            .send()
            .await
            .map_err(http_error)?;

        if !resp.status().is_success() {
            return Err(SyncError::Status(resp.status().as_u16()));
        }

        // The server sends new accounts on to the login page and re-renders
        // the form otherwise.
        if redirected_to_login(&resp) {
            Ok(StoreStatus::Success)
        } else {
            Ok(StoreStatus::Failure {
                message: Some("Registration was refused (is the email already taken?)".into()),
            })
        }
    }

    /// Fetch a document (the PDF export) and write it to `dest`.
    ///
    /// Returns the number of bytes written.
    pub async fn download(&self, url: &Url, dest: &Path) -> SyncResult<usize> {
        let resp = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(http_error)?;
        check(&resp)?;

        let bytes = resp.bytes().await.map_err(http_error)?;
        tokio::fs::write(dest, &bytes).await?;
        Ok(bytes.len())
    }
}

#[async_trait]
impl RemoteStore for Client {
    async fn list_events(&self) -> SyncResult<Vec<Event>> {
        let resp = self
            .http
            .get(self.endpoint("events")?)
            .send()
            .await
            .map_err(http_error)?;
        check(&resp)?;

        let items: Vec<serde_json::Value> = resp
            .json()
            .await
            .map_err(|e| SyncError::Decode(e.to_string()))?;
        Ok(decode_event_list(items))
    }

    async fn create_event(&self, event: &NewEvent) -> SyncResult<StoreStatus> {
        let resp = self
            .http
            .post(self.endpoint("add")?)
            .json(event)
            .send()
            .await
            .map_err(http_error)?;
        check(&resp)?;

        let body: StatusResponse = resp
            .json()
            .await
            .map_err(|e| SyncError::Decode(e.to_string()))?;
        Ok(body.into())
    }

    async fn delete_event(&self, id: &EventId) -> SyncResult<StoreStatus> {
        let resp = self
            .http
            .delete(self.endpoint(&format!("delete/{}", id))?)
            .send()
            .await
            .map_err(http_error)?;
        check(&resp)?;

        // Older servers reply with an empty body. Only a parseable status
        // can downgrade the outcome.
        let text = resp.text().await.map_err(http_error)?;
        Ok(serde_json::from_str::<StatusResponse>(&text)
            .map(StoreStatus::from)
            .unwrap_or(StoreStatus::Success))
    }

    async fn update_event(&self, id: &EventId, event: &NewEvent) -> SyncResult<StoreStatus> {
        let resp = self
            .http
            .post(self.endpoint(&format!("event/{}/edit", id))?)
            .form(event)
            .send()
            .await
            .map_err(http_error)?;
        check(&resp)?;

        // The edit endpoint is a plain HTML form handler. Reaching a 2xx
        // page after redirects is all it reports.
        Ok(StoreStatus::Success)
    }

    fn export_url(&self) -> Url {
        let mut url = self.base_url.clone();
        url.set_path(&format!("{}generate-pdf", self.base_url.path()));
        url
    }
}

fn http_error(e: reqwest::Error) -> SyncError {
    SyncError::Http(e.to_string())
}

fn redirected_to_login(resp: &Response) -> bool {
    resp.url().path().trim_end_matches('/').ends_with("/login")
}

/// Map a login bounce or an error status to a `SyncError`.
fn check(resp: &Response) -> SyncResult<()> {
    if redirected_to_login(resp) {
        return Err(SyncError::Unauthenticated);
    }
    if !resp.status().is_success() {
        return Err(SyncError::Status(resp.status().as_u16()));
    }
    Ok(())
}

fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}
