// Version information for the LikeMind embedding node

/// Semantic version number
pub const VERSION_NUMBER: &str = env!("CARGO_PKG_VERSION");

/// Get formatted version string for logging
pub fn get_version_string() -> String {
    format!("LikeMind Embedding Node v{}", VERSION_NUMBER)
}
