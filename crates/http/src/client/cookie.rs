//! Anti-forgery cookie handling
//!
//! The backend sets a `csrftoken` cookie alongside the session cookie;
//! its value must be echoed in the `X-CSRFToken` header on every
//! state-changing request.

/// Cookie carrying the anti-forgery token
pub const CSRF_COOKIE: &str = "csrftoken";

/// Header the token value is echoed in
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// Look up a cookie value in a `document.cookie` string.
pub(crate) fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies.split(';').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        if key.trim() == name {
            Some(value.trim().to_string())
        } else {
            None
        }
    })
}

/// Read the anti-forgery token from the browser's cookie jar.
///
/// Returns `None` when the cookie is absent (first visit, or the backend
/// has not issued one yet); the header is simply omitted in that case.
#[cfg(target_arch = "wasm32")]
pub fn csrf_token() -> Option<String> {
    use wasm_bindgen::JsCast;

    let document = web_sys::window()?.document()?;
    let html_document = document.dyn_into::<web_sys::HtmlDocument>().ok()?;
    let cookies = html_document.cookie().ok()?;
    cookie_value(&cookies, CSRF_COOKIE)
}

/// Outside the browser there is no cookie jar to read.
#[cfg(not(target_arch = "wasm32"))]
pub fn csrf_token() -> Option<String> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_token_among_other_cookies() {
        let cookies = "sessionid=abc123; csrftoken=tok456; theme=dark";
        assert_eq!(cookie_value(cookies, CSRF_COOKIE).as_deref(), Some("tok456"));
    }

    #[test]
    fn handles_leading_whitespace() {
        assert_eq!(
            cookie_value(" csrftoken=tok", CSRF_COOKIE).as_deref(),
            Some("tok")
        );
    }

    #[test]
    fn missing_cookie_is_none() {
        assert!(cookie_value("sessionid=abc", CSRF_COOKIE).is_none());
        assert!(cookie_value("", CSRF_COOKIE).is_none());
    }

    #[test]
    fn does_not_match_prefixed_names() {
        assert!(cookie_value("xcsrftoken=nope", CSRF_COOKIE).is_none());
    }
}
