//! Browser transport for the Play Service.
use crate::dom;
use async_trait::async_trait;
use dreamdle_game::{Method, PlayError, RestPlayService, Transport};
use gloo_net::http::{Request, RequestBuilder};
use serde_json::Value;
use std::rc::Rc;

/// `localStorage` key holding the bearer token issued by the backend.
pub const TOKEN_KEY: &str = "adminToken";

pub type WebPlayService = RestPlayService<FetchTransport>;

/// `fetch`-backed transport that attaches the stored bearer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTransport {
    base: String,
}

impl FetchTransport {
    #[must_use]
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base, path.trim_start_matches('/'))
    }
}

#[must_use]
pub fn bearer(token: Option<&str>) -> Option<String> {
    token
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|t| format!("Bearer {t}"))
}

fn network(err: &gloo_net::Error) -> PlayError {
    PlayError::Network(err.to_string())
}

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, PlayError> {
        let url = self.url(path);
        let mut builder = match method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
        };
        if let Some(auth) = bearer(dom::stored_item(TOKEN_KEY).as_deref()) {
            builder = builder.header("Authorization", &auth);
        }
        let request = build(builder, body.as_ref())?;

        log::debug!("{} {url}", method.as_str());
        let response = request.send().await.map_err(|e| network(&e))?;
        let status = response.status();
        let text = response.text().await.map_err(|e| network(&e))?;
        if !response.ok() {
            return Err(PlayError::status(status, text));
        }
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text)?)
    }
}

fn build(builder: RequestBuilder, body: Option<&Value>) -> Result<Request, PlayError> {
    match body {
        Some(json) => builder.json(json),
        None => builder.build(),
    }
    .map_err(|e| network(&e))
}

/// Play Service client pointed at the configured backend.
#[must_use]
pub fn play_service() -> Rc<WebPlayService> {
    Rc::new(RestPlayService::new(FetchTransport::new(
        crate::paths::api_base(),
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_join_without_double_slashes() {
        let transport = FetchTransport::new("http://localhost:3000");
        assert_eq!(
            transport.url("/plays/start"),
            "http://localhost:3000/plays/start"
        );
        assert_eq!(
            transport.url("characters"),
            "http://localhost:3000/characters"
        );
    }

    #[test]
    fn bearer_header_skips_blank_tokens() {
        assert_eq!(bearer(Some(" abc ")), Some("Bearer abc".into()));
        assert_eq!(bearer(Some("  ")), None);
        assert_eq!(bearer(None), None);
    }
}
