//! Rehosts file parser
//!
//! Converts raw file text into an ordered list of match records. Pure
//! function of the input text; malformed lines and tokens are skipped
//! with a diagnostic and parsing continues. Record order mirrors file
//! order because lookup is first-match-wins.

use super::matcher::{verify_wildcard, HostMatcher};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;
use tracing::warn;

/// One parsed line-derived unit binding a matcher to an address set
///
/// A record carries exactly the address family implied by the IP
/// literal on its source line; the other family's bucket stays empty.
#[derive(Debug, Clone)]
pub struct HostRecord {
    matcher: HostMatcher,
    addrs_v4: Vec<Ipv4Addr>,
    addrs_v6: Vec<Ipv6Addr>,
}

impl HostRecord {
    /// Build a record for a single address, bucketed by family
    ///
    /// IPv4-mapped IPv6 literals land in the v4 bucket.
    pub fn new(matcher: HostMatcher, addr: IpAddr) -> Self {
        let mut record = Self {
            matcher,
            addrs_v4: Vec::new(),
            addrs_v6: Vec::new(),
        };
        match addr {
            IpAddr::V4(v4) => record.addrs_v4.push(v4),
            IpAddr::V6(v6) => match v6.to_ipv4_mapped() {
                Some(v4) => record.addrs_v4.push(v4),
                None => record.addrs_v6.push(v6),
            },
        }
        record
    }

    /// The matcher bound to this record
    pub fn matcher(&self) -> &HostMatcher {
        &self.matcher
    }

    /// IPv4 addresses, in source order
    pub fn addrs_v4(&self) -> &[Ipv4Addr] {
        &self.addrs_v4
    }

    /// IPv6 addresses, in source order
    pub fn addrs_v6(&self) -> &[Ipv6Addr] {
        &self.addrs_v6
    }
}

/// Parse an IP literal, tolerating a trailing `%zone` suffix
///
/// The zone is discarded before parsing.
fn parse_ip(addr: &str) -> Option<IpAddr> {
    let addr = addr.trim();
    let addr = match addr.find('%') {
        Some(pos) => &addr[..pos],
        None => addr,
    };
    IpAddr::from_str(addr).ok()
}

/// Parse rehosts file text into an ordered record list
///
/// Two line shapes are recognized, after comment stripping (`#` to end
/// of line) and whitespace trimming:
///
/// - `<ip> <token> [<token> ...]` - each token is an exact or wildcard
///   (`*`) host pattern, one record per token
/// - `<ip> @ <regex>` - explicit regular expression against the
///   normalized host name, one record
///
/// Never fails the whole operation: a bad IP literal skips its line, a
/// bad wildcard or regex skips its token, each with a warning.
pub fn parse(input: &str) -> Vec<HostRecord> {
    let mut records = Vec::new();

    for line in input.lines() {
        let line = match line.find('#') {
            Some(pos) => &line[..pos],
            None => line,
        };
        let line = line.trim();

        if line.is_empty() {
            continue;
        }

        // Regex mode
        if let Some(at_pos) = line.find('@') {
            let ip_str = &line[..at_pos];
            let ip = match parse_ip(ip_str) {
                Some(ip) => ip,
                None => {
                    warn!(ip = ip_str.trim(), "invalid ip literal in rehosts line");
                    continue;
                }
            };

            let expr = line[at_pos + 1..].trim();
            let matcher = match HostMatcher::pattern(expr) {
                Ok(matcher) => matcher,
                Err(e) => {
                    warn!(pattern = expr, error = %e, "invalid regex in rehosts line");
                    continue;
                }
            };

            records.push(HostRecord::new(matcher, ip));
        } else {
            let mut fields = line.split_whitespace();
            let ip_str = fields.next().unwrap_or_default();
            let ip = match parse_ip(ip_str) {
                Some(ip) => ip,
                None => {
                    warn!(ip = ip_str, "invalid ip literal in rehosts line");
                    continue;
                }
            };

            // Single record per each host token on the line
            for token in fields {
                let matcher = if token.contains('*') {
                    if !verify_wildcard(token) {
                        warn!(token, "invalid wildcard in rehosts line");
                        continue;
                    }
                    match HostMatcher::wildcard(token) {
                        Ok(matcher) => matcher,
                        Err(e) => {
                            warn!(token, error = %e, "invalid wildcard regex in rehosts line");
                            continue;
                        }
                    }
                } else {
                    HostMatcher::exact(token)
                };

                records.push(HostRecord::new(matcher, ip));
            }
        }
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_exact_lines() {
        let records = parse("127.0.0.1 uwu aoa\n1234::cDEf owo\n");

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].addrs_v4(), &[Ipv4Addr::new(127, 0, 0, 1)]);
        assert!(records[0].addrs_v6().is_empty());
        assert!(records[0].matcher().matches("uwu"));
        assert!(records[1].matcher().matches("aoa"));

        assert!(records[2].addrs_v4().is_empty());
        assert_eq!(records[2].addrs_v6(), &["1234::cdef".parse::<Ipv6Addr>().unwrap()]);
        assert!(records[2].matcher().matches("owo"));
    }

    #[test]
    fn test_parse_comments_and_blanks() {
        let input = "\n# full comment line\n127.0.0.1 uwu # trailing comment\n   \n";
        let records = parse(input);

        assert_eq!(records.len(), 1);
        assert!(records[0].matcher().matches("uwu"));
    }

    #[test]
    fn test_parse_wildcard_token() {
        let records = parse("127.0.1.1 *.owo.uwu\n");

        assert_eq!(records.len(), 1);
        assert!(records[0].matcher().matches("ouo.owo.uwu"));
        assert!(!records[0].matcher().matches("owo.uwu"));
    }

    #[test]
    fn test_parse_regex_line() {
        let records = parse(r"127.0.2.1 @ go+gle\.com?");

        assert_eq!(records.len(), 1);
        assert!(records[0].matcher().matches("gooogle.co"));
        assert_eq!(records[0].addrs_v4(), &[Ipv4Addr::new(127, 0, 2, 1)]);
    }

    #[test]
    fn test_parse_skips_bad_ip_line() {
        let records = parse("not-an-ip uwu\n127.0.0.1 owo\n");

        assert_eq!(records.len(), 1);
        assert!(records[0].matcher().matches("owo"));
    }

    #[test]
    fn test_parse_skips_bad_regex_line() {
        let records = parse("127.0.0.1 @ (unclosed\n127.0.0.2 owo\n");

        assert_eq!(records.len(), 1);
        assert!(records[0].matcher().matches("owo"));
    }

    #[test]
    fn test_parse_skips_bad_wildcard_token_only() {
        // the bad token is skipped, the good token on the same line kept
        let records = parse("127.0.0.1 *bad/char good\n");

        assert_eq!(records.len(), 1);
        assert!(records[0].matcher().matches("good"));
    }

    #[test]
    fn test_parse_ipv6_zone_suffix_discarded() {
        let records = parse("fe80::1%eth0 uwu\n");

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].addrs_v6(), &["fe80::1".parse::<Ipv6Addr>().unwrap()]);
    }

    #[test]
    fn test_parse_ipv4_mapped_is_v4() {
        let records = parse("::ffff:1.2.3.4 uwu\n");

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].addrs_v4(), &[Ipv4Addr::new(1, 2, 3, 4)]);
        assert!(records[0].addrs_v6().is_empty());
    }

    #[test]
    fn test_parse_preserves_file_order() {
        let records = parse("127.0.0.1 uwu\n127.0.0.2 uwu\n");

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].addrs_v4(), &[Ipv4Addr::new(127, 0, 0, 1)]);
        assert_eq!(records[1].addrs_v4(), &[Ipv4Addr::new(127, 0, 0, 2)]);
    }

    #[test]
    fn test_parse_ip_only_line_yields_nothing() {
        assert!(parse("127.0.0.1\n").is_empty());
    }
}
