//! Pure helpers: URL building and response-body trimming (no HTTP).

use url::Url;

use crate::error::{ClientError, ClientResult};

/// Append path segments to `base`, percent-encoding each one.
///
/// A trailing slash on the base is dropped first so `http://h/geoserver/`
/// and `http://h/geoserver` produce the same endpoint. Empty, `.` and `..`
/// segments are refused: URL normalization would retarget the request.
pub(crate) fn join_segments(base: &Url, segments: &[&str]) -> ClientResult<Url> {
    if let Some(bad) = segments
        .iter()
        .find(|s| s.is_empty() || **s == "." || **s == "..")
    {
        return Err(ClientError::Config {
            message: format!("invalid resource name '{}'", bad),
        });
    }

    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| ClientError::Config {
            message: format!("platform URL cannot be a base: {}", base),
        })?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// Form-encode a single query value.
pub(crate) fn encode_query_value(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

/// Keep diagnostic bodies readable in logs.
pub(crate) fn truncate_body(body: &str) -> String {
    const MAX_BODY_CHARS: usize = 2000;
    let body = body.trim();
    if body.chars().count() > MAX_BODY_CHARS {
        let mut truncated: String = body.chars().take(MAX_BODY_CHARS).collect();
        truncated.push_str("...");
        truncated
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_segments_encodes() {
        let base = Url::parse("http://localhost:8080/geoserver/").unwrap();
        let url = join_segments(&base, &["rest", "workspaces", "my ws", "datastores"]).unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8080/geoserver/rest/workspaces/my%20ws/datastores"
        );
    }

    #[test]
    fn test_join_segments_escapes_slash() {
        let base = Url::parse("http://localhost").unwrap();
        let url = join_segments(&base, &["a/b"]).unwrap();
        assert_eq!(url.path(), "/a%2Fb");
    }

    #[test]
    fn test_join_segments_rejects_blank_and_dot_names() {
        let base = Url::parse("http://localhost:8080/geoserver").unwrap();
        for store in ["", ".", ".."] {
            let joined = join_segments(&base, &["rest", "datastores", store, "file.shp"]);
            assert!(
                matches!(joined, Err(ClientError::Config { .. })),
                "{:?} was accepted",
                store
            );
        }
        assert!(join_segments(&base, &["rest", "a..b"]).is_ok());
    }

    #[test]
    fn test_truncate_body() {
        assert_eq!(truncate_body("  short \n"), "short");
        let long = "x".repeat(5000);
        let truncated = truncate_body(&long);
        assert!(truncated.ends_with("..."));
        assert_eq!(truncated.len(), 2003);
    }
}
