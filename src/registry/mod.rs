//! Registry layer - wire format and the REST client for the registry
//! service that stores API definitions.

pub mod client;
pub mod wire;

pub use client::RegistryClient;
pub use wire::{StoredApi, WirePayload, WirePoint};
