//! Resolution of backend image paths into absolute URLs.
//!
//! The backend hands back image locations in three shapes: full URLs,
//! paths already rooted at its `/api/images/` serving route, and bare
//! storage paths like `generated/x.png` or `user/y.png`. All three must
//! resolve to something an image tag or download can fetch directly.

/// Route under which the backend serves stored images.
pub const IMAGE_ROUTE_PREFIX: &str = "/api/images/";

/// Resolve an image path returned by the backend against the configured
/// base URL. Pure and deterministic; an empty path resolves to an empty
/// string, which callers treat as "no image".
pub fn image_url(base_url: &str, image_path: &str) -> String {
    if image_path.is_empty() {
        return String::new();
    }

    if image_path.starts_with("http://") || image_path.starts_with("https://") {
        return image_path.to_string();
    }

    let origin = root_origin(base_url);
    if image_path.starts_with(IMAGE_ROUTE_PREFIX) {
        return format!("{}{}", origin, image_path);
    }

    format!("{}{}{}", origin, IMAGE_ROUTE_PREFIX, image_path)
}

/// The backend's root origin: the base URL with its `/api` sub-path
/// stripped, since the image route is mounted at the server root.
fn root_origin(base_url: &str) -> &str {
    let trimmed = base_url.trim_end_matches('/');
    trimmed.strip_suffix("/api").unwrap_or(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "http://localhost:5000/api";

    #[test]
    fn absolute_urls_pass_through() {
        assert_eq!(
            image_url(BASE, "https://cdn.example.com/a.png"),
            "https://cdn.example.com/a.png"
        );
        assert_eq!(
            image_url(BASE, "http://other.host/b.jpg"),
            "http://other.host/b.jpg"
        );
    }

    #[test]
    fn prefixed_paths_join_root_origin() {
        assert_eq!(
            image_url(BASE, "/api/images/generated/x.png"),
            "http://localhost:5000/api/images/generated/x.png"
        );
    }

    #[test]
    fn bare_relative_paths_gain_the_image_route() {
        assert_eq!(
            image_url(BASE, "generated/x.png"),
            "http://localhost:5000/api/images/generated/x.png"
        );
        assert_eq!(
            image_url(BASE, "user/a.png"),
            "http://localhost:5000/api/images/user/a.png"
        );
    }

    #[test]
    fn empty_path_means_no_image() {
        assert_eq!(image_url(BASE, ""), "");
    }

    #[test]
    fn trailing_slash_on_base_url_is_tolerated() {
        assert_eq!(
            image_url("http://localhost:5000/api/", "user/a.png"),
            "http://localhost:5000/api/images/user/a.png"
        );
    }

    #[test]
    fn base_url_without_api_suffix_is_used_as_is() {
        assert_eq!(
            image_url("http://localhost:5000", "user/a.png"),
            "http://localhost:5000/api/images/user/a.png"
        );
    }
}
