//! Masking of credential material in debug output.
//!
//! Debug dumps must never leak the auth token or a cookie value; every
//! secret passes through these helpers before it reaches a log line.

// -----------------------------------------------------------------------------
//
/// Masks a secret token for display.
///
/// Tokens of 8 characters or fewer are fully masked; up to 16 characters
/// reveal the first and last 2; longer tokens reveal the first and last 3.
#[must_use]
pub fn mask_token(token: &str) -> String {
    let characters: Vec<char> = token.chars().collect();
    let length = characters.len();

    let reveal = if length <= 8 {
        0
    } else if length <= 16 {
        2
    } else {
        3
    };

    if reveal == 0 {
        return "*".repeat(length);
    } // if

    let head: String = characters[..reveal].iter().collect();
    let tail: String = characters[length - reveal..].iter().collect();
    format!("{head}{stars}{tail}", stars = "*".repeat(length - 2 * reveal))
} // fn

// -----------------------------------------------------------------------------
//
/// Masks every value in a `Cookie:` header string, preserving cookie names.
///
/// `SID=abcdef; HSID=xyz` becomes `SID=ab…ef; HSID=***`-style output, with
/// each value masked under the token rules.
#[must_use]
pub fn mask_cookies(cookie_header: &str) -> String {
    cookie_header
        .split(';')
        .map(|pair| {
            let pair = pair.trim();
            match pair.split_once('=') {
                Some((name, value)) => format!("{name}={}", mask_token(value)),
                None => pair.to_string(),
            } // match
        })
        .collect::<Vec<String>>()
        .join("; ")
} // fn

// -----------------------------------------------------------------------------
//
// Tests

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_tokens_fully_masked() {
        assert_eq!(mask_token("abc"), "***");
        assert_eq!(mask_token("12345678"), "********");
    }

    #[test]
    fn test_medium_tokens_reveal_two() {
        assert_eq!(mask_token("abcdefghij"), "ab******ij");
        assert_eq!(mask_token("abcdefghijklmnop"), "ab************op");
    }

    #[test]
    fn test_long_tokens_reveal_three() {
        let masked = mask_token("AIzaSyD-1234567890abcdefg");
        assert!(masked.starts_with("AIz"));
        assert!(masked.ends_with("efg"));
        assert!(masked.contains('*'));
        assert_eq!(masked.chars().count(), 25);
    }

    #[test]
    fn test_cookie_values_masked_names_preserved() {
        let masked = mask_cookies("SID=secret-session-value; HSID=shortval; __Secure=x");
        assert!(masked.contains("SID="));
        assert!(masked.contains("HSID="));
        assert!(!masked.contains("secret-session-value"));
        assert!(!masked.contains("shortval"));
        assert!(!masked.contains("=x"));
    }

    #[test]
    fn test_no_secret_substring_survives() {
        for secret in ["tiny", "mediumsizedtoken", "averyveryverylongsecrettokenvalue"] {
            let masked = mask_token(secret);
            assert!(!masked.contains(secret));
        }
    }
}
