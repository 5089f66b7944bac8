use axum::{
    Extension,
    extract::RawQuery,
    response::{Html, Json},
};
use serde_json::{Value, json};

use crate::server::RedirectSlot;

/// Landing page for the provider's redirect.
///
/// The token travels in the URL fragment, which browsers never send to the
/// server, so the page posts its own fragment back to `/token`.
const CALLBACK_PAGE: &str = r#"<!doctype html>
<html>
  <head><title>musetunes</title></head>
  <body>
    <h4>Completing sign-in...</h4>
    <script>
      const fragment = window.location.hash.substring(1);
      history.replaceState(null, "", window.location.pathname);
      fetch("/token?" + fragment)
        .then(() => {
          document.body.innerHTML =
            "<h2>Authentication successful.</h2><p>Close this window and return to the terminal.</p>";
        })
        .catch(() => {
          document.body.innerHTML = "<h4>Login failed.</h4>";
        });
    </script>
  </body>
</html>
"#;

pub async fn callback() -> Html<&'static str> {
    Html(CALLBACK_PAGE)
}

/// Receives the fragment forwarded by [`callback`] and hands it to the
/// waiting terminal session.
///
/// Fragments that arrive while no authorization is outstanding are refused.
pub async fn token(
    RawQuery(fragment): RawQuery,
    Extension(slot): Extension<RedirectSlot>,
) -> Json<Value> {
    let Some(fragment) = fragment.filter(|f| !f.is_empty()) else {
        return Json(json!({ "status": "missing fragment" }));
    };

    if !slot.offer(fragment) {
        tracing::warn!("Ignoring redirect fragment, no authorization is pending");
        return Json(json!({ "status": "unexpected redirect" }));
    }
    Json(json!({ "status": "ok" }))
}
