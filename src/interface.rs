#![allow(async_fn_in_trait)] // transport futures are not required to be Send

use crate::error::Result;
use crate::model::dtos::{HttpRequest, HttpResponse};

/// Moves one fully-resolved request over the wire.
///
/// Implementations report only transport failures; status checking and body
/// decoding are done by the caller.
pub trait Transport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse>;
}
