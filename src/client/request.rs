//! No-WASM transport using reqwest

use crate::error::{ErrorKind, Result};
use reqwest::{
    Client,
    header::{HeaderMap, HeaderName, HeaderValue},
};

use crate::interface::Transport;
use crate::model::dtos::{HttpRequest, HttpResponse, Method};

/// Transport for no-WASM environments using reqwest
#[derive(Debug, Clone, Default)]
pub struct ReqwestClient {
    client: Client,
}

impl ReqwestClient {
    pub fn new() -> Result<Self> {
        let client = Client::builder().build()?;
        Ok(Self { client })
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

fn header_map(headers: &[(String, String)]) -> Result<HeaderMap> {
    let mut map = HeaderMap::new();
    for (name, value) in headers {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| ErrorKind::InvalidHeader(format!("{name}: {e}")))?;
        let value =
            HeaderValue::from_str(value).map_err(|e| ErrorKind::InvalidHeader(e.to_string()))?;
        map.insert(name, value);
    }
    Ok(map)
}

impl Transport for ReqwestClient {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        let headers = header_map(&request.headers)?;

        let builder = match request.method {
            Method::Get => self.client.get(&request.url),
            Method::Post => self.client.post(&request.url),
        };
        let builder = builder.headers(headers);
        let builder = match request.body {
            Some(body) => builder.body(body),
            None => builder,
        };

        let resp = builder.send().await?;
        let status = resp.status().as_u16();
        let body = resp.text().await?;

        Ok(HttpResponse { status, body })
    }
}
