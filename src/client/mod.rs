//! Transports for both WASM and no-WASM environments

#[cfg(feature = "no-wasm")]
pub mod request;

#[cfg(feature = "wasm")]
pub mod gloo;

#[cfg(test)]
pub(crate) mod mock;
