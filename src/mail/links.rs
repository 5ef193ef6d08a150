// src/mail/links.rs
//! Deep links that open a pre-filled compose view

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Same set as `encodeURIComponent`: everything but `A-Za-z0-9-_.!~*'()`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// Trimmed recipient, or `None` when blank
pub fn normalize_recipient(recipient: Option<&str>) -> Option<&str> {
    recipient.map(str::trim).filter(|r| !r.is_empty())
}

fn compose_query(subject: &str, body: &str, recipient: Option<&str>) -> String {
    let mut params = Vec::with_capacity(3);
    if let Some(to) = normalize_recipient(recipient) {
        params.push(format!("to={}", encode_component(to)));
    }
    params.push(format!("subject={}", encode_component(subject)));
    params.push(format!("body={}", encode_component(body)));
    params.join("&")
}

pub fn web_compose_url(
    compose_base: &str,
    subject: &str,
    body: &str,
    recipient: Option<&str>,
) -> String {
    format!("{}?{}", compose_base, compose_query(subject, body, recipient))
}

pub fn mailto_url(subject: &str, body: &str, recipient: Option<&str>) -> String {
    format!("mailto:?{}", compose_query(subject, body, recipient))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_COMPOSE_URL;

    #[test]
    fn test_mailto_encoding() {
        let url = mailto_url("Re: SWE Intern", "Hi there", Some("hr@acme.com"));
        assert_eq!(
            url,
            "mailto:?to=hr%40acme.com&subject=Re%3A%20SWE%20Intern&body=Hi%20there"
        );
    }

    #[test]
    fn test_web_compose_encoding() {
        let url = web_compose_url(
            DEFAULT_COMPOSE_URL,
            "Re: SWE Intern",
            "Hi there",
            Some("hr@acme.com"),
        );
        assert_eq!(
            url,
            "https://outlook.office.com/mail/deeplink/compose?to=hr%40acme.com&subject=Re%3A%20SWE%20Intern&body=Hi%20there"
        );
    }

    #[test]
    fn test_missing_or_blank_recipient_is_omitted() {
        assert_eq!(
            mailto_url("S", "B", None),
            "mailto:?subject=S&body=B"
        );
        assert_eq!(
            web_compose_url("https://mail.example/compose", "S", "B", Some("   ")),
            "https://mail.example/compose?subject=S&body=B"
        );
    }

    #[test]
    fn test_newlines_and_reserved_characters() {
        assert_eq!(
            encode_component("Hello,\n\nI'm (very) keen! a&b=c"),
            "Hello%2C%0A%0AI'm%20(very)%20keen!%20a%26b%3Dc"
        );
        assert_eq!(encode_component("café"), "caf%C3%A9");
    }
}
