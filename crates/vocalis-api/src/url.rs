//! URL construction helpers.
//!
//! Pure functions building the backend endpoint URLs, so every call
//! site constructs them the same way. The base URL is normalised to
//! end with a slash at client construction time; `join` therefore
//! appends instead of replacing the last path segment.

use url::Url;

use vocalis_core::{JobId, ServiceKind};

use crate::error::ApiResult;

/// Normalise a base URL string so joins append path segments.
pub fn parse_base(base: &str) -> ApiResult<Url> {
    let normalised = if base.ends_with('/') {
        base.to_string()
    } else {
        format!("{base}/")
    };
    Ok(Url::parse(&normalised)?)
}

/// POST target for new generation jobs.
pub fn generate_url(base: &Url) -> ApiResult<Url> {
    Ok(base.join("generate")?)
}

/// GET target for a job's status.
pub fn status_url(base: &Url, job_id: &JobId) -> ApiResult<Url> {
    let mut url = base.join("generate/status")?;
    url.query_pairs_mut().append_pair("id", job_id.as_str());
    Ok(url)
}

/// POST target for requesting a signed upload slot.
pub fn upload_url(base: &Url) -> ApiResult<Url> {
    Ok(base.join("upload-url")?)
}

/// GET target for a service's history listing.
pub fn history_url(base: &Url, service: ServiceKind) -> ApiResult<Url> {
    let mut url = base.join("history")?;
    url.query_pairs_mut()
        .append_pair("service", service.as_str());
    Ok(url)
}

/// GET target for an ownership-scoped clip lookup.
pub fn clip_url(base: &Url, id: &str) -> ApiResult<Url> {
    let mut url = base.join("history/clip")?;
    url.query_pairs_mut().append_pair("id", id);
    Ok(url)
}

/// DELETE target for a history record.
pub fn delete_history_url(base: &Url, id: &str) -> ApiResult<Url> {
    let mut url = base.join("history")?;
    url.query_pairs_mut().append_pair("id", id);
    Ok(url)
}

/// DELETE target for a stored object.
pub fn delete_object_url(base: &Url, key: &str) -> ApiResult<Url> {
    let mut url = base.join("objects")?;
    url.query_pairs_mut().append_pair("key", key);
    Ok(url)
}

/// GET target for a service's voice catalog.
pub fn voices_url(base: &Url, service: ServiceKind) -> ApiResult<Url> {
    let mut url = base.join("voices")?;
    url.query_pairs_mut()
        .append_pair("service", service.as_str());
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        parse_base("https://studio.example/api").unwrap()
    }

    #[test]
    fn base_gains_a_trailing_slash() {
        assert_eq!(base().as_str(), "https://studio.example/api/");
    }

    #[test]
    fn joins_append_instead_of_replacing() {
        assert_eq!(
            generate_url(&base()).unwrap().as_str(),
            "https://studio.example/api/generate"
        );
    }

    #[test]
    fn status_url_carries_the_job_id() {
        let url = status_url(&base(), &JobId::new("j1")).unwrap();
        assert_eq!(
            url.as_str(),
            "https://studio.example/api/generate/status?id=j1"
        );
    }

    #[test]
    fn history_url_carries_the_service() {
        let url = history_url(&base(), ServiceKind::MakeAnAudio).unwrap();
        assert_eq!(
            url.as_str(),
            "https://studio.example/api/history?service=make-an-audio"
        );
    }

    #[test]
    fn query_values_are_encoded() {
        let url = delete_object_url(&base(), "clips/a b.wav").unwrap();
        assert!(url.as_str().ends_with("objects?key=clips%2Fa+b.wav"));
    }
}
