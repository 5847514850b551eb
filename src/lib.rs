//! # Postboard
//!
//! A terminal client for a users/posts/comments REST API.
//!
//! ## Features
//! - Pick a user from a dropdown and list their posts
//! - Open a post to read its comments
//! - Add comments (shown once the server accepts them)
//! - Delete comments (removed at once, resynced if the server refuses)
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (State machine)
//! - Network Layer (Tokio runtime)

pub mod app;
pub mod config;
pub mod constants;
pub mod messages;
pub mod models;
pub mod network;
pub mod ui;

// Re-export commonly used types
pub use app::{AppActor, AppState, CommentForm};
pub use config::{Cli, Config, ConfigError};
pub use messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};
pub use models::{Comment, CommentDraft, Post, User};
pub use network::{ApiGateway, HttpGateway, NetworkActor, NetworkError};
