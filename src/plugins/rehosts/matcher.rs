//! Host name matchers
//!
//! Three matcher kinds sit behind one predicate: exact string equality,
//! wildcard globs translated to regular expressions, and explicit
//! regular expressions from `@` lines. Construction picks the variant
//! at parse time; lookup only ever calls `matches`.

use regex::Regex;

/// A predicate over normalized host names
///
/// All variants compare against the normalized name space: trailing dot
/// stripped, lower-cased, IDNA-decoded (see
/// [`normalize_query_name`](super::normalize::normalize_query_name)).
///
/// # Example
///
/// ```
/// use rehosts::plugins::rehosts::HostMatcher;
///
/// let exact = HostMatcher::exact("UwU");
/// assert!(exact.matches("uwu"));
///
/// let wildcard = HostMatcher::wildcard("*.owo.uwu").unwrap();
/// assert!(wildcard.matches("ouo.owo.uwu"));
/// assert!(!wildcard.matches("owo.uwu"));
/// ```
#[derive(Debug, Clone)]
pub enum HostMatcher {
    /// Exact equality against a pre-lowered name
    Exact(String),
    /// Pattern compiled from a wildcard glob
    Wildcard(Regex),
    /// Explicit regular expression from an `@` line
    Pattern(Regex),
}

impl HostMatcher {
    /// Exact matcher; the token is lower-cased once here
    pub fn exact(token: &str) -> Self {
        HostMatcher::Exact(token.to_lowercase())
    }

    /// Wildcard matcher from a glob token
    ///
    /// The token is lower-cased, literal dots are escaped and each `*`
    /// expands to "match any sequence". The caller is expected to have
    /// validated the token with [`verify_wildcard`] first; translation
    /// of a validated token cannot produce an invalid expression, but
    /// compile errors are surfaced rather than swallowed.
    pub fn wildcard(token: &str) -> Result<Self, regex::Error> {
        let translated = token.to_lowercase().replace('.', r"\.").replace('*', ".*");
        Regex::new(&translated).map(HostMatcher::Wildcard)
    }

    /// Explicit regex matcher from an `@` line suffix
    pub fn pattern(expr: &str) -> Result<Self, regex::Error> {
        Regex::new(expr).map(HostMatcher::Pattern)
    }

    /// Does this matcher cover the normalized name?
    pub fn matches(&self, name: &str) -> bool {
        match self {
            HostMatcher::Exact(host) => host == name,
            HostMatcher::Wildcard(re) | HostMatcher::Pattern(re) => re.is_match(name),
        }
    }
}

/// Validate a wildcard token
///
/// Accepts letters, digits, `*`, `.`, `-` and `_` only. `-` and `_`
/// pass through translation unescaped; neither is a regex
/// metacharacter.
pub fn verify_wildcard(token: &str) -> bool {
    token
        .chars()
        .all(|c| c.is_alphabetic() || c.is_numeric() || matches!(c, '*' | '.' | '-' | '_'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_matcher_lowercases() {
        let matcher = HostMatcher::exact("UwU.Example.COM");
        assert!(matcher.matches("uwu.example.com"));
        assert!(!matcher.matches("uwu.example.org"));
        assert!(!matcher.matches("sub.uwu.example.com"));
    }

    #[test]
    fn test_wildcard_dot_boundary() {
        // *.owo.uwu must not match the bare suffix itself
        let matcher = HostMatcher::wildcard("*.owo.uwu").unwrap();
        assert!(matcher.matches("ucu.ouo.owo.uwu"));
        assert!(matcher.matches("ouo.owo.uwu"));
        assert!(!matcher.matches("owo.uwu"));
    }

    #[test]
    fn test_wildcard_without_dot() {
        // *uwu has no dot boundary, so any suffix match counts
        let matcher = HostMatcher::wildcard("*uwu").unwrap();
        assert!(matcher.matches("owouwu"));
        assert!(matcher.matches("a.uwu"));

        let dotted = HostMatcher::wildcard("*.uwu").unwrap();
        assert!(dotted.matches("a.uwu"));
        assert!(!dotted.matches("owouwu"));
    }

    #[test]
    fn test_wildcard_case_insensitive_via_lowering() {
        let matcher = HostMatcher::wildcard("*.OwO.uwu").unwrap();
        assert!(matcher.matches("a.owo.uwu"));
    }

    #[test]
    fn test_wildcard_dash_underscore() {
        // '-' and '_' are accepted and need no escaping
        assert!(verify_wildcard("*.my-goo_gle.us"));
        let matcher = HostMatcher::wildcard("*.my-goo_gle.us").unwrap();
        assert!(matcher.matches("not.my-goo_gle.us"));
        assert!(!matcher.matches("not.myXgoo_gle.us"));
    }

    #[test]
    fn test_verify_wildcard_rejects_metacharacters() {
        assert!(verify_wildcard("*.owo.uwu"));
        assert!(verify_wildcard("owo123"));
        assert!(!verify_wildcard("*.owo.uwu/"));
        assert!(!verify_wildcard("owo+uwu"));
        assert!(!verify_wildcard("owo uwu"));
        assert!(!verify_wildcard("@owo"));
    }

    #[test]
    fn test_pattern_matcher() {
        let matcher = HostMatcher::pattern(r"go+gle\.com?").unwrap();
        assert!(matcher.matches("gogle.com"));
        assert!(matcher.matches("gogle.co"));
        assert!(matcher.matches("gooooooogle.co"));
        assert!(!matcher.matches("ggle.com"));
    }

    #[test]
    fn test_pattern_invalid_regex() {
        assert!(HostMatcher::pattern("(unclosed").is_err());
    }
}
