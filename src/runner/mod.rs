//! Runner layer - turns stored endpoint descriptions into live HTTP
//! calls and keeps the latest outcome per endpoint.

pub mod actor;
pub mod board;
pub mod client;

pub use actor::RunnerActor;
pub use board::{RunBoard, RunRecord};
pub use client::{build_request, execute_endpoint, full_url, RunReport};
