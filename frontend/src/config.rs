/// Base URL for static assets. Kept as a constant so a sub-path deployment
/// only has to change one place.
pub const BASE_URL: &str = "/";

/// Helper to construct asset paths relative to [`BASE_URL`].
pub fn asset_path(path: &str) -> String {
    let path = path.strip_prefix('/').unwrap_or(path);
    format!("{}{}", BASE_URL, path)
}
