//! WASM transport using gloo_net
//!
//! Requests go through the browser's fetch API. Browsers refuse a scripted
//! `Cookie` header, so it is dropped here and the session cookies of the
//! logged-in tab are sent with `credentials: include` instead.

use crate::error::Result;
use gloo_net::http::{Request, RequestBuilder};
use web_sys::{RequestCredentials, RequestMode};

use crate::interface::Transport;
use crate::model::dtos::{HttpRequest, HttpResponse, Method};

/// Transport for WASM environments using gloo_net
#[derive(Debug, Clone, Default)]
pub struct WasmClient;

impl WasmClient {
    pub fn new() -> Self {
        Self
    }

    fn build_request(request: &HttpRequest) -> RequestBuilder {
        let mut builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
        };

        builder = builder
            .mode(RequestMode::Cors)
            .credentials(RequestCredentials::Include);

        for (name, value) in &request.headers {
            if name.eq_ignore_ascii_case("cookie") {
                continue;
            }
            builder = builder.header(name, value);
        }

        builder
    }
}

impl Transport for WasmClient {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        let builder = Self::build_request(&request);

        let resp = match request.body {
            Some(body) => builder.body(body)?.send().await?,
            None => builder.send().await?,
        };

        log::debug!("{} {} -> {}", request.method.as_str(), request.url, resp.status());

        let status = resp.status();
        let body = resp.text().await?;
        Ok(HttpResponse { status, body })
    }
}
