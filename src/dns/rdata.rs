//! DNS resource record data (RDATA) implementation
//!
//! This crate only synthesizes address records, so the RDATA enum
//! covers the two address families.

use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};

/// DNS resource record data
///
/// Contains the actual data for a DNS resource record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RData {
    /// IPv4 address (A record)
    A(Ipv4Addr),

    /// IPv6 address (AAAA record)
    AAAA(Ipv6Addr),
}

impl RData {
    /// Get the IPv4 address if this is an A record
    pub fn as_ipv4(&self) -> Option<Ipv4Addr> {
        match self {
            RData::A(addr) => Some(*addr),
            _ => None,
        }
    }

    /// Get the IPv6 address if this is an AAAA record
    pub fn as_ipv6(&self) -> Option<Ipv6Addr> {
        match self {
            RData::AAAA(addr) => Some(*addr),
            _ => None,
        }
    }
}

impl fmt::Display for RData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RData::A(addr) => write!(f, "{}", addr),
            RData::AAAA(addr) => write!(f, "{}", addr),
        }
    }
}
