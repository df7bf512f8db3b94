use std::{fmt, time::Duration};

use reqwest::{
    blocking::{Client, ClientBuilder, RequestBuilder},
    header::{ACCEPT, AUTHORIZATION, USER_AGENT},
};
use serde::Deserialize;

use crate::errors::PushLaterError;

pub const DEFAULT_API_URL: &str = "https://api.github.com";
const AGENT: &str = concat!("pushlater/", env!("CARGO_PKG_VERSION"));

#[derive(Clone, PartialEq, Eq)]
pub enum Credential {
    Token(String),
    Basic { username: String, password: String },
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credential::Token(_) => write!(f, "Token(<redacted>)"),
            Credential::Basic { username, .. } => {
                write!(f, "Basic {{ username: {:?}, password: <redacted> }}", username)
            }
        }
    }
}

#[derive(Deserialize)]
struct User {
    login: String,
}

pub struct GithubClient {
    client: Client,
    api_url: String,
    credential: Credential,
}

impl GithubClient {
    pub fn new(api_url: &str, credential: Credential) -> Result<Self, PushLaterError> {
        let client = ClientBuilder::new()
            .connect_timeout(Duration::from_secs(5))
            .build()
            .map_err(PushLaterError::HttpClient)?;
        Ok(Self {
            client,
            api_url: api_url.trim_end_matches('/').to_owned(),
            credential,
        })
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.credential {
            Credential::Token(token) => request.header(AUTHORIZATION, format!("Bearer {}", token)),
            Credential::Basic { username, password } => request.basic_auth(username, Some(password)),
        }
    }

    /// Login name of the authenticated user. This is the only call made with
    /// the credential, so any failure here means it cannot be trusted.
    pub fn current_user(&self) -> Result<String, PushLaterError> {
        let url = format!("{}/user", self.api_url);
        let request = self
            .client
            .get(&url)
            .header(ACCEPT, "application/vnd.github+json")
            .header(USER_AGENT, AGENT);
        let res = self
            .authorize(request)
            .send()
            .map_err(PushLaterError::GitHubNetworkError)?;
        if !res.status().is_success() {
            return Err(PushLaterError::GitHubApiError(
                url,
                res.status(),
                res.text()
                    .unwrap_or("GitHub Api returned unparseable error".to_owned()),
            ));
        }
        let user: User = res.json().map_err(PushLaterError::GitHubNetworkError)?;
        Ok(user.login)
    }
}
