//! Network layer - API gateway and request execution
//!
//! The Network actor receives commands from the App layer, runs them against
//! an `ApiGateway`, and sends back tagged responses.

pub mod actor;
pub mod client;
pub mod error;
pub mod gateway;

pub use actor::NetworkActor;
pub use client::HttpGateway;
pub use error::NetworkError;
pub use gateway::ApiGateway;
