//! DNS resource record implementation
//!
//! A resource record binds a name to typed record data with a TTL.

use super::rdata::RData;
use super::types::{RecordClass, RecordType};
use std::fmt;

/// DNS resource record
///
/// # Example
///
/// ```
/// use rehosts::dns::{RData, RecordClass, RecordType, ResourceRecord};
/// use std::net::Ipv4Addr;
///
/// let record = ResourceRecord::new(
///     "example.com.".to_string(),
///     RecordType::A,
///     RecordClass::IN,
///     3600,
///     RData::A(Ipv4Addr::new(93, 184, 216, 34)),
/// );
/// assert_eq!(record.ttl(), 3600);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    /// The domain name this record applies to
    name: String,
    /// The record type
    rtype: RecordType,
    /// The record class
    rclass: RecordClass,
    /// Time to live in seconds
    ttl: u32,
    /// The record data
    rdata: RData,
}

impl ResourceRecord {
    /// Create a new resource record
    pub fn new(
        name: String,
        rtype: RecordType,
        rclass: RecordClass,
        ttl: u32,
        rdata: RData,
    ) -> Self {
        Self {
            name,
            rtype,
            rclass,
            ttl,
            rdata,
        }
    }

    /// Get the domain name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the record type
    pub fn rtype(&self) -> RecordType {
        self.rtype
    }

    /// Get the record class
    pub fn rclass(&self) -> RecordClass {
        self.rclass
    }

    /// Get the time to live
    pub fn ttl(&self) -> u32 {
        self.ttl
    }

    /// Set the time to live
    pub fn set_ttl(&mut self, ttl: u32) {
        self.ttl = ttl;
    }

    /// Get the record data
    pub fn rdata(&self) -> &RData {
        &self.rdata
    }
}

impl fmt::Display for ResourceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}",
            self.name, self.ttl, self.rclass, self.rtype, self.rdata
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    #[test]
    fn test_record_creation() {
        let record = ResourceRecord::new(
            "example.com.".to_string(),
            RecordType::A,
            RecordClass::IN,
            300,
            RData::A(Ipv4Addr::new(1, 2, 3, 4)),
        );

        assert_eq!(record.name(), "example.com.");
        assert_eq!(record.rtype(), RecordType::A);
        assert_eq!(record.rclass(), RecordClass::IN);
        assert_eq!(record.ttl(), 300);
        assert_eq!(record.rdata().as_ipv4(), Some(Ipv4Addr::new(1, 2, 3, 4)));
    }

    #[test]
    fn test_record_set_ttl() {
        let mut record = ResourceRecord::new(
            "example.com.".to_string(),
            RecordType::A,
            RecordClass::IN,
            300,
            RData::A(Ipv4Addr::new(1, 2, 3, 4)),
        );

        record.set_ttl(60);
        assert_eq!(record.ttl(), 60);
    }

    #[test]
    fn test_record_display() {
        let record = ResourceRecord::new(
            "example.com.".to_string(),
            RecordType::A,
            RecordClass::IN,
            300,
            RData::A(Ipv4Addr::new(1, 2, 3, 4)),
        );

        let display = record.to_string();
        assert!(display.contains("example.com."));
        assert!(display.contains("1.2.3.4"));
    }
}
