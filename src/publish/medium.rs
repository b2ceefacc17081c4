//! Medium REST API client.
//!
//! Two calls per run:
//!
//! 1. `GET {api_url}/me` to find the authenticated user id
//! 2. `POST {api_url}/users/{id}/posts` to create the post
//!
//! Responses are wrapped as `{"data": ...}`; errors as
//! `{"errors": [{"message": ..., "code": ...}]}`.

use super::{CreatedPost, PublishError, PublishRequest, Publisher};
use crate::{
    config::{MediumConfig, Token},
    log,
};
use reqwest::{
    StatusCode,
    blocking::{Client, Response},
    header::{ACCEPT, AUTHORIZATION},
};
use serde::{Deserialize, de::DeserializeOwned};

/// Authenticated Medium account.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Deserialize)]
struct Envelope<T> {
    data: T,
}

#[derive(Deserialize)]
struct ErrorBody {
    errors: Vec<ErrorItem>,
}

#[derive(Deserialize)]
struct ErrorItem {
    message: String,
}

/// Blocking client for the Medium API.
#[derive(Debug)]
pub struct MediumClient {
    http: Client,
    api_url: String,
    token: Token,
    expected_user: Option<String>,
}

impl MediumClient {
    pub fn new(config: &MediumConfig, token: Token) -> Result<Self, PublishError> {
        let http = Client::builder()
            .user_agent(concat!("medpub/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            api_url: config.api_url.trim_end_matches('/').to_owned(),
            token,
            expected_user: config.username.clone(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_url, path)
    }

    /// Fetch the user the token belongs to.
    pub fn current_user(&self) -> Result<User, PublishError> {
        let response = self
            .http
            .get(self.endpoint("me"))
            .header(AUTHORIZATION, self.token.bearer())
            .header(ACCEPT, "application/json")
            .send()?;
        decode(response)
    }

    /// Create a post under `user_id`.
    pub fn create_post(
        &self,
        user_id: &str,
        request: &PublishRequest,
    ) -> Result<CreatedPost, PublishError> {
        let response = self
            .http
            .post(self.endpoint(&format!("users/{user_id}/posts")))
            .header(AUTHORIZATION, self.token.bearer())
            .header(ACCEPT, "application/json")
            .json(request)
            .send()?;
        decode(response)
    }
}

impl Publisher for MediumClient {
    fn publish(&self, request: &PublishRequest) -> Result<CreatedPost, PublishError> {
        let user = self.current_user()?;
        match &user.name {
            Some(name) => log!("publish"; "authenticated as @{} ({})", user.username, name),
            None => log!("publish"; "authenticated as @{}", user.username),
        }

        if let Some(expected) = &self.expected_user
            && !expected.eq_ignore_ascii_case(&user.username)
        {
            log!("warn"; "token belongs to @{}, config expects @{}", user.username, expected);
        }

        self.create_post(&user.id, request)
    }
}

/// Unwrap a `{"data": ...}` response, mapping failures to [`PublishError`].
fn decode<T: DeserializeOwned>(response: Response) -> Result<T, PublishError> {
    let status = response.status();
    let body = response.text()?;
    decode_body(status, &body)
}

fn decode_body<T: DeserializeOwned>(status: StatusCode, body: &str) -> Result<T, PublishError> {
    if !status.is_success() {
        return Err(classify(status, body));
    }
    serde_json::from_str::<Envelope<T>>(body)
        .map(|envelope| envelope.data)
        .map_err(|err| PublishError::InvalidResponse(err.to_string()))
}

/// Map a non-success status to an error kind.
fn classify(status: StatusCode, body: &str) -> PublishError {
    let message = error_message(body).unwrap_or_else(|| {
        status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_owned()
    });
    let status_code = status.as_u16();

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => PublishError::Authentication {
            status: status_code,
            message,
        },
        _ => PublishError::RemoteRejected {
            status: status_code,
            message,
        },
    }
}

/// Join the messages of a Medium error body, if it is one.
fn error_message(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    let messages: Vec<_> = parsed.errors.into_iter().map(|e| e.message).collect();
    (!messages.is_empty()).then(|| messages.join("; "))
}
