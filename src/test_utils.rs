#[cfg(test)]
pub mod test_utils {
    use crate::config::{AppConfig, initialize_app_state};
    use crate::router::create_router;
    use crate::schemas::AppState;
    use axum::Router;
    use std::path::Path;
    use tempfile::TempDir;
    use tracing::Level;
    use tracing_subscriber::FmtSubscriber;

    /// Bytes of a 1x1 transparent PNG
    pub const TINY_PNG: &[u8] = &[
        0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
        0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1F,
        0x15, 0xC4, 0x89, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9C, 0x63, 0x00,
        0x01, 0x00, 0x00, 0x05, 0x00, 0x01, 0x0D, 0x0A, 0x2D, 0xB4, 0x00, 0x00, 0x00, 0x00, 0x49,
        0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
    ];

    /// Working directory for a test, optionally holding the forecast plot
    pub struct TestWorkspace {
        pub dir: TempDir,
    }

    impl TestWorkspace {
        pub fn empty() -> Self {
            TestWorkspace {
                dir: tempfile::tempdir().expect("Failed to create temp dir"),
            }
        }

        pub fn with_image(bytes: &[u8]) -> Self {
            let workspace = Self::empty();
            std::fs::write(workspace.image_path(), bytes).expect("Failed to write test image");
            workspace
        }

        pub fn image_path(&self) -> std::path::PathBuf {
            self.dir.path().join(report::DEFAULT_IMAGE_PATH)
        }
    }

    /// Create AppState for testing, reading the plot from `image_path`
    pub fn setup_test_app_state(image_path: &Path) -> AppState {
        let config = AppConfig::default().with_overrides(None, Some(image_path.to_path_buf()));
        initialize_app_state(config).expect("Failed to initialize app state")
    }

    /// Initialize tracing for tests with output to STDERR.
    ///
    /// The log level is determined by the RUST_LOG environment variable,
    /// defaulting to WARN if not set.
    fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        // Get log level from environment variable or default to WARN
        let log_level = std::env::var("RUST_LOG")
            .ok()
            .and_then(|level| match level.to_uppercase().as_str() {
                "ERROR" => Some(Level::ERROR),
                "WARN" => Some(Level::WARN),
                "INFO" => Some(Level::INFO),
                "DEBUG" => Some(Level::DEBUG),
                "TRACE" => Some(Level::TRACE),
                _ => None,
            })
            .unwrap_or(Level::WARN);

        let subscriber = FmtSubscriber::builder()
            .with_max_level(log_level)
            .with_writer(std::io::stderr) // Output to stderr, which is captured by tests
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    /// Create axum app for testing
    pub fn setup_test_app(workspace: &TestWorkspace) -> Router {
        // Initialize tracing for tests
        let _ = init_test_tracing();

        let state = setup_test_app_state(&workspace.image_path());
        create_router(state)
    }
}
