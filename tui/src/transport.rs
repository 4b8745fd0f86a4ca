//! reqwest-backed executor for controller-built requests.
//!
//! Non-2xx statuses come back as data for the controller to interpret; only
//! transport-level failures (refused connection, DNS, closed socket) become
//! `ApiError::Connectivity`.

use justdoit_core::{ApiError, HttpMethod, HttpRequest, HttpResponse};
use reqwest::Client;

pub async fn execute(client: &Client, req: HttpRequest) -> Result<HttpResponse, ApiError> {
    let mut builder = match req.method {
        HttpMethod::Get => client.get(&req.path),
        HttpMethod::Post => client.post(&req.path),
        HttpMethod::Patch => client.patch(&req.path),
        HttpMethod::Delete => client.delete(&req.path),
    };
    for (name, value) in &req.headers {
        builder = builder.header(name, value);
    }
    if let Some(body) = req.body {
        builder = builder.body(body);
    }

    let response = builder
        .send()
        .await
        .map_err(|e| ApiError::Connectivity(e.to_string()))?;
    let status = response.status().as_u16();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Connectivity(e.to_string()))?;

    Ok(HttpResponse {
        status,
        headers: Vec::new(),
        body,
    })
}
