pub mod app;
pub mod client;
pub mod config;
pub mod error;
pub mod interface;
pub mod model;
pub mod registration;
pub mod session;

pub use error::{Error, ErrorKind, Result};
pub use model::{Mode, SearchParams, SortDirection, Term};
pub use registration::{DEFAULT_BASE_URL, ZagwebRegistration};

#[cfg(feature = "no-wasm")]
pub use client::request::ReqwestClient;
#[cfg(feature = "wasm")]
pub use client::gloo::WasmClient;
