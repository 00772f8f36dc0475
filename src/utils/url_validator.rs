//! Target URL validation.
//!
//! A target must be an absolute `http` or `https` URL with a host. Domain
//! hosts need a top-level domain, so `http://localhost` is rejected while IP
//! literals are accepted. Whitespace and control characters are rejected
//! anywhere in the input, since the target is stored and redirected verbatim.

use url::{Host, Url};

/// Errors that can occur while validating a target URL.
#[derive(Debug, thiserror::Error)]
pub enum TargetUrlError {
    #[error("Target URL is empty")]
    Empty,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL must include a fully qualified host")]
    InvalidHost,
}

/// Validates a target URL.
///
/// The target is stored exactly as given; validation does not rewrite it.
///
/// # Errors
///
/// Returns [`TargetUrlError`] describing the first rule the input breaks.
///
/// # Examples
///
/// ```
/// use tinylink::utils::url_validator::validate_target;
///
/// assert!(validate_target("https://example.com").is_ok());
/// assert!(validate_target("ftp://example.com").is_err());
/// assert!(validate_target("example.com").is_err());
/// ```
pub fn validate_target(input: &str) -> Result<(), TargetUrlError> {
    if input.trim().is_empty() {
        return Err(TargetUrlError::Empty);
    }

    if input
        .chars()
        .any(|c| c.is_whitespace() || c.is_control())
    {
        return Err(TargetUrlError::InvalidFormat(
            "URL must not contain whitespace or control characters".to_string(),
        ));
    }

    let url = Url::parse(input).map_err(|e| TargetUrlError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(TargetUrlError::UnsupportedProtocol),
    }

    match url.host() {
        Some(Host::Domain(domain)) if has_tld(domain) => Ok(()),
        Some(Host::Ipv4(_)) | Some(Host::Ipv6(_)) => Ok(()),
        _ => Err(TargetUrlError::InvalidHost),
    }
}

fn has_tld(domain: &str) -> bool {
    let domain = domain.trim_end_matches('.');
    match domain.rsplit_once('.') {
        Some((name, tld)) => {
            // Internationalized TLDs arrive punycode-encoded.
            !name.is_empty()
                && (tld.starts_with("xn--")
                    || (tld.len() >= 2 && !tld.chars().any(|c| c.is_ascii_digit())))
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_http_and_https() {
        assert!(validate_target("https://example.com").is_ok());
        assert!(validate_target("http://example.com/path?q=1#frag").is_ok());
        assert!(validate_target("https://sub.example.co.uk:8443/a/b").is_ok());
    }

    #[test]
    fn test_accepts_internationalized_domains() {
        assert!(validate_target("https://пример.рф").is_ok());
        assert!(validate_target("https://example.xn--p1ai/path").is_ok());
        assert!(validate_target("https://münchen.de").is_ok());
    }

    #[test]
    fn test_accepts_ip_hosts() {
        assert!(validate_target("http://192.168.1.10/").is_ok());
        assert!(validate_target("http://[::1]:8080/").is_ok());
    }

    #[test]
    fn test_rejects_empty() {
        assert!(matches!(validate_target(""), Err(TargetUrlError::Empty)));
        assert!(matches!(validate_target("   "), Err(TargetUrlError::Empty)));
    }

    #[test]
    fn test_rejects_missing_scheme() {
        assert!(matches!(
            validate_target("example.com"),
            Err(TargetUrlError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_rejects_other_schemes() {
        for input in ["ftp://example.com", "javascript:alert(1)", "mailto:a@example.com", "file:///etc/passwd"] {
            assert!(
                matches!(validate_target(input), Err(TargetUrlError::UnsupportedProtocol)),
                "{input} should be rejected"
            );
        }
    }

    #[test]
    fn test_rejects_hosts_without_tld() {
        assert!(matches!(
            validate_target("http://localhost:3000"),
            Err(TargetUrlError::InvalidHost)
        ));
        assert!(matches!(
            validate_target("https://example.c"),
            Err(TargetUrlError::InvalidHost)
        ));
    }

    #[test]
    fn test_rejects_whitespace_and_control_characters() {
        for input in [
            "https://example.com/a\nb",
            "https://exa\tmple.com/",
            " https://example.com",
            "https://example.com ",
            "https://example.com/a b",
            "https://example.com/\r",
            "https://example.com/\u{0}",
        ] {
            assert!(
                matches!(validate_target(input), Err(TargetUrlError::InvalidFormat(_))),
                "{input:?} should be rejected"
            );
        }
    }
}
