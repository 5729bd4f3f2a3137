/// Resolves a bundled asset path against the directory the widget is
/// served from, so the page works at any mount point.
pub fn get_asset_url(path: &str) -> String {
    if path.starts_with("http") {
        path.to_string()
    } else {
        format!("./{}", path.trim_start_matches('/'))
    }
}
