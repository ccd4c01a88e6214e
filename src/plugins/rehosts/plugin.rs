//! Rehosts plugin wrapper
//!
//! Implements the `Plugin` trait on top of the lookup table: origin
//! zone gating, A/AAAA dispatch, answer synthesis and the
//! fallthrough/SERVFAIL decision. The parsing and lookup core lives in
//! [`RehostsTable`].

use super::config::RehostsConfig;
use super::table::RehostsTable;
use crate::dns::{Message, RData, RecordClass, RecordType, ResourceRecord, ResponseCode};
use crate::plugin::{Context, Plugin};
use crate::Result;
use async_trait::async_trait;
use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::Arc;
use tracing::{debug, warn};

/// Check whether a name falls under a zone
///
/// Zone and name are compared with trailing dots stripped and case
/// folded; the root zone covers everything.
fn zone_matches(qname: &str, zone: &str) -> bool {
    let zone = zone.trim_end_matches('.').to_lowercase();
    if zone.is_empty() {
        return true;
    }
    let qname = qname.trim_end_matches('.').to_lowercase();
    qname == zone || qname.ends_with(&format!(".{}", zone))
}

/// Hosts-with-patterns resolution plugin
///
/// Answers A/AAAA queries from the rehosts table. Queries for names
/// outside the configured origin zones pass through untouched (PTR
/// excepted). A name with no record in either family yields SERVFAIL -
/// there is no SOA to justify a negative answer - unless fallthrough
/// covers the name, in which case the response is left unset for the
/// next handler.
pub struct RehostsPlugin {
    table: Arc<RehostsTable>,
    origins: Vec<String>,
    fall_through: Option<Vec<String>>,
}

impl RehostsPlugin {
    /// Build the plugin from a validated configuration
    ///
    /// A missing or directory path is a setup-time warning, not an
    /// error; the table starts empty and self-heals on the next
    /// successful reload.
    pub fn from_config(config: RehostsConfig) -> Result<Self> {
        config.validate()?;

        match std::fs::metadata(&config.path) {
            Ok(metadata) if metadata.is_dir() => {
                warn!(path = ?config.path, "rehosts path is a directory");
            }
            Err(_) => {
                warn!(path = ?config.path, "rehosts file does not exist");
            }
            _ => {}
        }

        let options = config.options();
        Ok(Self {
            table: Arc::new(RehostsTable::new(config.path, options)),
            origins: config.origins,
            fall_through: config.fall_through,
        })
    }

    /// The shared lookup table
    ///
    /// Hand a clone of this to the periodic reload task.
    pub fn table(&self) -> &Arc<RehostsTable> {
        &self.table
    }

    fn in_origins(&self, qname: &str) -> bool {
        self.origins.iter().any(|zone| zone_matches(qname, zone))
    }

    fn fall_through_for(&self, qname: &str) -> bool {
        match &self.fall_through {
            None => false,
            Some(zones) if zones.is_empty() => true,
            Some(zones) => zones.iter().any(|zone| zone_matches(qname, zone)),
        }
    }

    fn other_records_exist(&self, qname: &str) -> bool {
        !self.table.lookup_v4(qname).is_empty() || !self.table.lookup_v6(qname).is_empty()
    }

    fn a_answers(qname: &str, ttl: u32, addrs: &[Ipv4Addr]) -> Vec<ResourceRecord> {
        addrs
            .iter()
            .map(|addr| {
                ResourceRecord::new(
                    qname.to_string(),
                    RecordType::A,
                    RecordClass::IN,
                    ttl,
                    RData::A(*addr),
                )
            })
            .collect()
    }

    fn aaaa_answers(qname: &str, ttl: u32, addrs: &[Ipv6Addr]) -> Vec<ResourceRecord> {
        addrs
            .iter()
            .map(|addr| {
                ResourceRecord::new(
                    qname.to_string(),
                    RecordType::AAAA,
                    RecordClass::IN,
                    ttl,
                    RData::AAAA(*addr),
                )
            })
            .collect()
    }
}

impl fmt::Debug for RehostsPlugin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RehostsPlugin")
            .field("path", &self.table.path())
            .field("entries", &self.table.len())
            .field("origins", &self.origins)
            .finish()
    }
}

#[async_trait]
impl Plugin for RehostsPlugin {
    async fn execute(&self, ctx: &mut Context) -> Result<()> {
        if ctx.has_response() {
            return Ok(());
        }

        let question = match ctx.request().questions().first() {
            Some(question) => question.clone(),
            None => return Ok(()),
        };
        let qname = question.qname();

        // PTR zones don't need to be listed in origins
        if !self.in_origins(qname) && question.qtype() != RecordType::PTR {
            return Ok(());
        }

        let ttl = self.table.ttl();
        let answers = match question.qtype() {
            RecordType::A => Self::a_answers(qname, ttl, &self.table.lookup_v4(qname)),
            RecordType::AAAA => Self::aaaa_answers(qname, ttl, &self.table.lookup_v6(qname)),
            _ => Vec::new(),
        };

        if answers.is_empty() && !self.other_records_exist(qname) {
            if self.fall_through_for(qname) {
                return Ok(());
            }

            // No SOA exists for hosts-file data, so a negative answer
            // cannot be justified; SERVFAIL at least signals resolution
            // trouble to the client.
            let mut reply = Message::reply_to(ctx.request());
            reply.set_response_code(ResponseCode::ServFail);
            ctx.set_response(Some(reply));
            return Ok(());
        }

        debug!(qname, answers = answers.len(), "rehosts answered query");

        let mut reply = Message::reply_to(ctx.request());
        reply.set_authoritative(true);
        for answer in answers {
            reply.add_answer(answer);
        }
        ctx.set_response(Some(reply));

        Ok(())
    }

    fn name(&self) -> &str {
        "rehosts"
    }
}
