//! reqwest implementation of [`PlayerDirectory`].

use super::{MessageEnvelope, PlayerDirectory, Saved};
use crate::{
    core::{build_client, maybe_auth_header_map, ClientConfig, PlayerFilter},
    error::{Result, RosterError},
    models::{Draft, Player, PlayerId},
};
use log::debug;
use reqwest::{header::HeaderMap, Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

#[cfg(test)]
mod tests;

/// Player directory backed by the club REST API.
///
/// Reads are anonymous. Create, update and delete carry the configured
/// bearer token, since the API protects them with a JWT.
#[derive(Debug, Clone)]
pub struct HttpPlayerDirectory {
    client: Client,
    config: ClientConfig,
    auth: Option<HeaderMap>,
}

impl HttpPlayerDirectory {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = build_client(&config)?;
        let auth = maybe_auth_header_map(config.token.as_deref())?;
        Ok(Self {
            client,
            config,
            auth,
        })
    }

    fn with_auth(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.auth {
            Some(headers) => builder.headers(headers.clone()),
            None => builder,
        }
    }
}

impl PlayerDirectory for HttpPlayerDirectory {
    async fn list(&self, filter: &PlayerFilter) -> Result<Vec<Player>> {
        let url = self.config.players_url();
        let params = filter.query_pairs();
        debug!("GET {} {:?}", url, params);

        let response = self.client.get(&url).query(&params).send().await?;
        read_json(response, None).await
    }

    async fn get(&self, id: PlayerId) -> Result<Player> {
        let url = self.config.player_url(id);
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        read_json(response, Some(id)).await
    }

    async fn create(&self, draft: &Draft) -> Result<Saved> {
        let url = self.config.players_url();
        debug!("POST {}", url);

        let body = create_body(draft)?;
        let response = self
            .with_auth(self.client.post(&url))
            .json(&body)
            .send()
            .await?;
        read_json(response, None).await
    }

    async fn update(&self, id: PlayerId, draft: &Draft) -> Result<Saved> {
        let url = self.config.player_url(id);
        debug!("PUT {}", url);

        let response = self
            .with_auth(self.client.put(&url))
            .json(draft)
            .send()
            .await?;
        read_json(response, Some(id)).await
    }

    async fn delete(&self, id: PlayerId) -> Result<String> {
        let url = self.config.player_url(id);
        debug!("DELETE {}", url);

        let response = self.with_auth(self.client.delete(&url)).send().await?;
        let envelope: MessageEnvelope = read_json(response, Some(id)).await?;
        Ok(envelope.message)
    }
}

/// Decode a successful body as `T`, or map the failure status onto the
/// error taxonomy. A 404 is `NotFound` only when a specific id was targeted.
async fn read_json<T: DeserializeOwned>(response: Response, id: Option<PlayerId>) -> Result<T> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        return Err(status_error(status, &body, id));
    }
    Ok(serde_json::from_str(&body)?)
}

fn status_error(status: StatusCode, body: &str, id: Option<PlayerId>) -> RosterError {
    match (status, id) {
        (StatusCode::NOT_FOUND, Some(id)) => RosterError::NotFound { id },
        _ => RosterError::Api {
            status: status.as_u16(),
            message: api_error_message(status, body),
        },
    }
}

/// Best readable message from an error body.
///
/// Handlers answer `{"message": ..}`, the JWT layer `{"msg": ..}` and schema
/// validation `{"errors": {field: [messages]}}`. Anything else falls back to
/// the raw body, then to the status reason.
pub(crate) fn api_error_message(status: StatusCode, body: &str) -> String {
    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(body) {
        for key in ["message", "msg", "error"] {
            if let Some(Value::String(s)) = map.get(key) {
                return s.clone();
            }
        }
        if let Some(errors) = map.get("errors") {
            return format_validation_errors(errors);
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string()
    } else {
        trimmed.to_string()
    }
}

fn format_validation_errors(errors: &Value) -> String {
    match errors {
        Value::Object(fields) => fields
            .iter()
            .map(|(field, messages)| format!("{}: {}", field, flatten_messages(messages)))
            .collect::<Vec<_>>()
            .join("; "),
        other => flatten_messages(other),
    }
}

fn flatten_messages(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(flatten_messages)
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    }
}

/// The API rejects explicit nulls on create, so unset fields are left out.
fn create_body(draft: &Draft) -> Result<Value> {
    let mut body = serde_json::to_value(draft)?;
    if let Value::Object(map) = &mut body {
        map.retain(|_, v| !v.is_null());
    }
    Ok(body)
}
