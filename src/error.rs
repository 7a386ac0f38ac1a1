//! # Error Handling
//!
//! Centralized error type for the `devnest` library, built with `thiserror`.
//!
//! The variants map onto the failure classes of the workspace pipeline:
//!
//! - **`Config`**: the configuration file is missing, empty, or malformed.
//!   This is the only fatal class: it aborts the run before any project is
//!   touched.
//! - **`Project`**: a single project is unusable (e.g. no repositories
//!   defined). That project is skipped; the run continues.
//! - **`Acquire`**: a repository clone failed. Sibling repositories and
//!   subsequent projects proceed.
//! - **`Transfer`**: an env file copy failed. Distinct from the non-error
//!   `Skipped` outcome in [`crate::envfiles`].
//! - **`Synthesis`**: the task graph references an undefined label or a task
//!   depends on itself. Rejects that project's descriptor write only.
//!
//! `Io` and `Json` wrap the underlying library errors so `?` works across
//! filesystem and serialization call sites.

use thiserror::Error;

/// Main error type for devnest operations
#[derive(Error, Debug)]
pub enum Error {
    /// The configuration file is absent, empty, or not valid JSON.
    ///
    /// Includes the specific issue and optionally a hint about how to fix it.
    #[error("Configuration error: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    Config {
        message: String,
        /// Optional hint for how to fix the configuration issue
        hint: Option<String>,
    },

    /// A single project cannot be processed.
    #[error("Project '{project}': {message}")]
    Project { project: String, message: String },

    /// A repository clone failed.
    ///
    /// Carries the clone URL and the message reported by the external git
    /// client (stderr for non-zero exits, the spawn error otherwise).
    #[error("Clone failed for {url}: {message}")]
    Acquire { url: String, message: String },

    /// An env file copy failed.
    #[error("Env file transfer failed: {src} -> {dst}: {message}")]
    Transfer {
        src: String,
        dst: String,
        message: String,
    },

    /// The task graph for a project is invalid.
    #[error("Task graph error for '{label}': {message}")]
    Synthesis { label: String, message: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON error, wrapped from `serde_json::Error`.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_config() {
        let error = Error::Config {
            message: "Invalid JSON".to_string(),
            hint: None,
        };
        let display = format!("{}", error);
        assert!(display.contains("Configuration error"));
        assert!(display.contains("Invalid JSON"));
    }

    #[test]
    fn test_error_display_config_with_hint() {
        let error = Error::Config {
            message: "The configuration file is empty".to_string(),
            hint: Some("Provide at least one project entry".to_string()),
        };
        let display = format!("{}", error);
        assert!(display.contains("Configuration error"));
        assert!(display.contains("hint:"));
        assert!(display.contains("Provide at least one project"));
    }

    #[test]
    fn test_error_display_project() {
        let error = Error::Project {
            project: "billing".to_string(),
            message: "no repositories defined".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("billing"));
        assert!(display.contains("no repositories defined"));
    }

    #[test]
    fn test_error_display_acquire() {
        let error = Error::Acquire {
            url: "https://github.com/test/repo.git".to_string(),
            message: "Authentication failed".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Clone failed"));
        assert!(display.contains("https://github.com/test/repo.git"));
        assert!(display.contains("Authentication failed"));
    }

    #[test]
    fn test_error_display_transfer() {
        let error = Error::Transfer {
            src: "envfiles/demo-api.env".to_string(),
            dst: "projects/app/api/.env".to_string(),
            message: "permission denied".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Env file transfer failed"));
        assert!(display.contains("demo-api.env"));
        assert!(display.contains("permission denied"));
    }

    #[test]
    fn test_error_display_synthesis() {
        let error = Error::Synthesis {
            label: "build".to_string(),
            message: "depends on undefined task 'compile'".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Task graph error"));
        assert!(display.contains("build"));
        assert!(display.contains("compile"));
    }

    #[test]
    fn test_error_from_io_error() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let error: Error = io_error.into();
        let display = format!("{}", error);
        assert!(display.contains("I/O error"));
        assert!(display.contains("File not found"));
    }

    #[test]
    fn test_error_from_json_error() {
        let json_error = serde_json::from_str::<serde_json::Value>("{unclosed").unwrap_err();
        let error: Error = json_error.into();
        let display = format!("{}", error);
        assert!(display.contains("JSON error"));
    }
}
