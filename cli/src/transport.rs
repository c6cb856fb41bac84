//! Executes `HttpRequest`s produced by the core client.

use item_core::{HttpMethod, HttpRequest, HttpResponse};

use crate::error::CliError;

/// One blocking HTTP round trip. Every status code, including 4xx/5xx, comes
/// back as `Ok`; only failures to get a response at all are errors.
pub trait Transport {
    fn send(&self, request: HttpRequest) -> Result<HttpResponse, CliError>;
}

#[derive(Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Transport for UreqTransport {
    fn send(&self, request: HttpRequest) -> Result<HttpResponse, CliError> {
        tracing::debug!(method = request.method.as_str(), url = %request.path, "sending request");

        let HttpRequest {
            method,
            path,
            headers,
            body,
        } = request;
        let agent = &self.agent;
        let result = match method {
            HttpMethod::Get => with_headers(agent.get(&path), &headers).call(),
            HttpMethod::Delete => with_headers(agent.delete(&path), &headers).call(),
            HttpMethod::Post => send_body(with_headers(agent.post(&path), &headers), body),
            HttpMethod::Put => send_body(with_headers(agent.put(&path), &headers), body),
        };
        let mut response = result.map_err(|e| CliError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| CliError::Transport(e.to_string()))?;
        tracing::debug!(status, "received response");

        Ok(HttpResponse::new(status, body))
    }
}

fn with_headers<B>(
    mut builder: ureq::RequestBuilder<B>,
    headers: &[(String, String)],
) -> ureq::RequestBuilder<B> {
    for (name, value) in headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
}

fn send_body(
    builder: ureq::RequestBuilder<ureq::typestate::WithBody>,
    body: Option<String>,
) -> Result<ureq::http::Response<ureq::Body>, ureq::Error> {
    match body {
        Some(body) => builder.send(body.as_bytes()),
        None => builder.send_empty(),
    }
}
