//! Query name normalization
//!
//! Every matcher compares against the same canonical string space:
//! trailing dot stripped, lower-cased, IDNA-decoded to Unicode.

use crate::{Error, Result};

/// Normalize a fully-qualified query name for matching
///
/// Fails with [`Error::NotFullyQualified`] when the trailing dot is
/// missing and with [`Error::InvalidIdna`] when the label set does not
/// decode. Lookup treats both as "no match"; they are never surfaced to
/// the query path.
///
/// # Example
///
/// ```
/// use rehosts::plugins::rehosts::normalize_query_name;
///
/// assert_eq!(normalize_query_name("UwU.Example.COM.").unwrap(), "uwu.example.com");
/// assert!(normalize_query_name("uwu.example.com").is_err());
/// ```
pub fn normalize_query_name(name: &str) -> Result<String> {
    let host = match name.strip_suffix('.') {
        Some(host) => host,
        None => return Err(Error::not_fully_qualified(name)),
    };
    let host = host.to_lowercase();

    let (unicode, result) = idna::domain_to_unicode(&host);
    if result.is_err() {
        return Err(Error::invalid_idna(name));
    }

    Ok(unicode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_trailing_dot_and_lowercases() {
        assert_eq!(normalize_query_name("UWU.").unwrap(), "uwu");
        assert_eq!(normalize_query_name("uwu.").unwrap(), "uwu");
        assert_eq!(normalize_query_name("Owo.Uwu.").unwrap(), "owo.uwu");
    }

    #[test]
    fn test_rejects_unqualified_name() {
        let err = normalize_query_name("uwu").unwrap_err();
        assert!(matches!(err, Error::NotFullyQualified { .. }));

        let err = normalize_query_name("").unwrap_err();
        assert!(matches!(err, Error::NotFullyQualified { .. }));
    }

    #[test]
    fn test_idna_decoding() {
        // xn--bcher-kva is "bücher" in punycode
        assert_eq!(normalize_query_name("xn--bcher-kva.example.").unwrap(), "bücher.example");
    }

    #[test]
    fn test_invalid_idna() {
        // A punycode label that does not decode
        let err = normalize_query_name("xn--!!!.ru.").unwrap_err();
        assert!(matches!(err, Error::InvalidIdna { .. }));
    }

    #[test]
    fn test_root_name() {
        // The bare root "." normalizes to the empty string
        assert_eq!(normalize_query_name(".").unwrap(), "");
    }
}
