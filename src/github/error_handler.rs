//! GitHub API error detection and classification
//!
//! Turns octocrab errors into `RepokitError` variants with actionable
//! guidance. Nothing here retries or recovers; the classified error is
//! reported and the process exits.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::RepokitError;

/// Extracts the organization from an SSO authorization URL
static SSO_ORG_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"/orgs/([A-Za-z0-9][A-Za-z0-9-]*)/sso")
        .expect("Invalid regex pattern for SSO organization detection")
});

/// Classifies an octocrab error into a more specific RepokitError if possible
///
/// API failures are classified by status code and message; transport and
/// decoding failures become a generic `GitHubApi` error.
pub fn classify_github_error(err: octocrab::Error) -> RepokitError {
    match err {
        octocrab::Error::GitHub { source, .. } => {
            let details: Vec<String> = source
                .errors
                .as_ref()
                .map(|errors| errors.iter().filter_map(error_detail).collect())
                .unwrap_or_default();
            let mut context = source.message.clone();
            if let Some(url) = &source.documentation_url {
                context.push(' ');
                context.push_str(url);
            }
            classify_api_failure(source.status_code.as_u16(), &context, &details)
        }
        // Display only returns a short label for most variants
        other => RepokitError::GitHubApi(format!("{:?}", other)),
    }
}

/// Classify a failed API response from its status code, message and details
pub fn classify_api_failure(status: u16, message: &str, details: &[String]) -> RepokitError {
    match status {
        401 => RepokitError::AuthenticationFailed(message.to_string()),
        403 if is_rate_limit_error(message) => RepokitError::RateLimited,
        403 if is_sso_error(message) => RepokitError::SsoRequired {
            org: extract_sso_org(message).unwrap_or_else(|| "this organization".to_string()),
        },
        429 => RepokitError::RateLimited,
        404 => RepokitError::NotFound(message.to_string()),
        422 => {
            if details.iter().any(|d| d.contains("already exists")) {
                return RepokitError::RepositoryExists;
            }
            if details.is_empty() {
                RepokitError::Validation(message.to_string())
            } else {
                RepokitError::Validation(format!("{} ({})", message, details.join("; ")))
            }
        }
        _ => RepokitError::GitHubApi(format!("{} (HTTP {})", message, status)),
    }
}

/// Pull a readable string out of one entry of GitHub's `errors` array
fn error_detail(value: &serde_json::Value) -> Option<String> {
    if let Some(s) = value.as_str() {
        return Some(s.to_string());
    }
    if let Some(message) = value.get("message").and_then(|m| m.as_str()) {
        return Some(message.to_string());
    }
    let field = value.get("field").and_then(|f| f.as_str());
    let code = value.get("code").and_then(|c| c.as_str());
    match (field, code) {
        (Some(field), Some(code)) => Some(format!("{}: {}", field, code)),
        (None, Some(code)) => Some(code.to_string()),
        _ => None,
    }
}

/// Check if error is a rate limit error
fn is_rate_limit_error(error_message: &str) -> bool {
    let lower = error_message.to_lowercase();
    lower.contains("rate limit") || lower.contains("limit exceeded")
}

/// Check if error is a SAML single sign-on enforcement error
fn is_sso_error(error_message: &str) -> bool {
    error_message.contains("SAML enforcement") || error_message.contains("/sso")
}

fn extract_sso_org(error_message: &str) -> Option<String> {
    SSO_ORG_PATTERN
        .captures(error_message)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limit_detection() {
        assert!(is_rate_limit_error("API rate limit exceeded for user ID 1."));
        assert!(is_rate_limit_error("You have exceeded a secondary rate limit"));
        assert!(!is_rate_limit_error("Must have admin rights to Repository."));
    }

    #[test]
    fn test_classify_rate_limit() {
        let err = classify_api_failure(403, "API rate limit exceeded", &[]);
        assert!(matches!(err, RepokitError::RateLimited));
        assert!(matches!(
            classify_api_failure(429, "Too many requests", &[]),
            RepokitError::RateLimited
        ));
    }

    #[test]
    fn test_classify_sso_with_org() {
        let msg = "Resource protected by organization SAML enforcement. https://github.com/orgs/acme-corp/sso?authorization_request=abc";
        match classify_api_failure(403, msg, &[]) {
            RepokitError::SsoRequired { org } => assert_eq!(org, "acme-corp"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_classify_sso_without_org() {
        let msg = "Resource protected by organization SAML enforcement. You must grant your Personal Access token access to this organization.";
        match classify_api_failure(403, msg, &[]) {
            RepokitError::SsoRequired { org } => assert_eq!(org, "this organization"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_plain_forbidden_is_generic() {
        let err = classify_api_failure(403, "Must have admin rights to Repository.", &[]);
        assert!(matches!(err, RepokitError::GitHubApi(msg) if msg.contains("HTTP 403")));
    }

    #[test]
    fn test_classify_not_found_and_auth() {
        assert!(matches!(
            classify_api_failure(404, "Not Found", &[]),
            RepokitError::NotFound(_)
        ));
        assert!(matches!(
            classify_api_failure(401, "Bad credentials", &[]),
            RepokitError::AuthenticationFailed(_)
        ));
    }

    #[test]
    fn test_classify_validation_details() {
        let details = vec!["description: invalid".to_string()];
        match classify_api_failure(422, "Validation Failed", &details) {
            RepokitError::Validation(msg) => {
                assert_eq!(msg, "Validation Failed (description: invalid)")
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_classify_already_exists() {
        let details = vec!["name already exists on this account".to_string()];
        assert!(matches!(
            classify_api_failure(422, "Repository creation failed.", &details),
            RepokitError::RepositoryExists
        ));
    }

    #[test]
    fn test_error_detail_shapes() {
        let with_message = serde_json::json!({
            "resource": "Repository",
            "code": "custom",
            "field": "name",
            "message": "name already exists on this account"
        });
        assert_eq!(
            error_detail(&with_message).as_deref(),
            Some("name already exists on this account")
        );

        let field_code = serde_json::json!({ "resource": "Repository", "field": "name", "code": "missing_field" });
        assert_eq!(error_detail(&field_code).as_deref(), Some("name: missing_field"));

        assert_eq!(
            error_detail(&serde_json::json!("plain")).as_deref(),
            Some("plain")
        );
        assert_eq!(error_detail(&serde_json::json!({})), None);
    }
}
