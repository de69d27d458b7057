//! Application Configuration
//!
//! Configuration for the Events application layer.

use std::path::PathBuf;

/// Events application configuration
#[derive(Debug, Clone)]
pub struct EventsConfig {
    /// Directory uploaded images are written to
    pub upload_dir: PathBuf,
    /// Public URL prefix the images are served under
    pub public_path: String,
}

impl Default for EventsConfig {
    fn default() -> Self {
        Self {
            upload_dir: PathBuf::from("uploads"),
            public_path: "/uploads".to_string(),
        }
    }
}

impl EventsConfig {
    /// Create config with an explicit upload directory
    pub fn with_upload_dir(upload_dir: impl Into<PathBuf>) -> Self {
        Self {
            upload_dir: upload_dir.into(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let config = EventsConfig::default();
        assert_eq!(config.upload_dir, PathBuf::from("uploads"));
        assert_eq!(config.public_path, "/uploads");
    }
}
