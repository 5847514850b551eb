//! Application constants
//!
//! Centralized location for user-visible strings and configuration defaults.

/// Default base URL of the remote API
pub const DEFAULT_BASE_URL: &str = "https://mate.academy/students-api";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default log file, relative to the working directory
pub const DEFAULT_LOG_FILE: &str = "postboard.log";

/// Environment variable overriding the API base URL
pub const BASE_URL_ENV_VAR: &str = "POSTBOARD_BASE_URL";

/// Environment variable holding the tracing filter
pub const LOG_FILTER_ENV_VAR: &str = "POSTBOARD_LOG";

/// Application name
pub const APP_NAME: &str = "Postboard";

// Region error messages
pub const USERS_LOAD_ERROR: &str = "Unable to load users";
pub const POSTS_LOAD_ERROR: &str = "Something went wrong";
pub const COMMENTS_LOAD_ERROR: &str = "Something went wrong";
pub const COMMENT_DELETE_ERROR: &str = "Unable to delete a comment";
pub const COMMENT_ADD_ERROR: &str = "Unable to add a comment";

// Form validation messages
pub const NAME_REQUIRED: &str = "Name is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const BODY_REQUIRED: &str = "Enter some text";
