//! Capture of the token fragment the provider appends to the redirect URI.
//!
//! After the user authorizes, the provider navigates back to
//! `<redirect_uri>#access_token=...&token_type=Bearer&expires_in=3600[&state=...]`.
//! The fragment is read once, turned into an [`AccessToken`], and removed
//! from the visible location with replace semantics so the secret does not
//! stay reachable through history.

use std::time::Duration;

use url::Url;

use crate::{
    management::{AccessToken, MAX_TOKEN_LIFETIME},
    session::Window,
};

/// Token parameters read from a redirect fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectGrant {
    pub access_token: String,
    pub expires_in: Duration,
}

/// Reads `access_token` and `expires_in` from the fragment of `href`.
///
/// Both parameters are required and `expires_in` must be a whole number of
/// seconds no longer than [`MAX_TOKEN_LIFETIME`]; anything else means no
/// grant is present. The echoed `state` is ignored, the stored pending term
/// is authoritative.
///
/// # Arguments
///
/// * `href` - Full window location, fragment included
///
/// # Example
///
/// ```
/// let grant = parse_grant("http://127.0.0.1:8888/callback#access_token=BQD&expires_in=3600");
/// assert_eq!(grant.unwrap().expires_in, Duration::from_secs(3600));
/// ```
pub fn parse_grant(href: &str) -> Option<RedirectGrant> {
    let pairs = fragment_pairs(href)?;

    let mut access_token = None;
    let mut expires_in = None;
    for (key, value) in pairs {
        match key.as_str() {
            "access_token" if !value.is_empty() => access_token = Some(value),
            "expires_in" => {
                expires_in = value
                    .trim()
                    .parse::<u64>()
                    .ok()
                    .map(Duration::from_secs)
                    .filter(|lifetime| *lifetime <= MAX_TOKEN_LIFETIME)
            }
            _ => {}
        }
    }

    Some(RedirectGrant {
        access_token: access_token?,
        expires_in: expires_in?,
    })
}

/// Whether `href` carries an `access_token` fragment parameter at all.
pub fn has_access_token(href: &str) -> bool {
    fragment_pairs(href)
        .map(|pairs| pairs.iter().any(|(k, v)| k == "access_token" && !v.is_empty()))
        .unwrap_or(false)
}

/// `href` without its fragment. Unparseable input is cut at the first `#`.
pub fn strip_fragment(href: &str) -> String {
    match Url::parse(href) {
        Ok(mut url) => {
            url.set_fragment(None);
            url.to_string()
        }
        Err(_) => href.split('#').next().unwrap_or_default().to_string(),
    }
}

/// Takes a freshly granted token out of the window location.
///
/// On success the location is replaced by its fragment-less form.
pub fn capture_grant(window: &dyn Window) -> Option<AccessToken> {
    let href = window.href();
    let grant = parse_grant(&href)?;

    window.replace_location(&strip_fragment(&href));
    tracing::debug!(
        "Captured access token from redirect, valid for {}s",
        grant.expires_in.as_secs()
    );

    Some(AccessToken::new(grant.access_token, grant.expires_in))
}

fn fragment_pairs(href: &str) -> Option<Vec<(String, String)>> {
    let fragment = match Url::parse(href) {
        Ok(url) => url.fragment()?.to_string(),
        Err(_) => href.split_once('#')?.1.to_string(),
    };

    Some(
        url::form_urlencoded::parse(fragment.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect(),
    )
}
