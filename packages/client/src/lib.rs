//! Console client for the wordgames WebSocket endpoint.
//!
//! Lines typed on stdin are sent to the server as text frames while every
//! frame the server sends is printed to stdout. The session ends as soon as
//! either side is done.

pub mod config;
pub mod error;
pub mod input;
pub mod printer;
pub mod relay;
pub mod runner;
pub mod session;


pub use config::ClientConfig;
pub use error::ClientError;
pub use runner::run_client;
pub use session::{Activity, SessionReport, run_session};
