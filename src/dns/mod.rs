//! DNS message model
//!
//! This module provides the message structures the plugin layer works
//! with: questions, resource records and the message container. Wire
//! encoding and decoding are intentionally not part of this crate; the
//! host server owns the protocol framing.
//!
//! # Example
//!
//! ```rust
//! use rehosts::dns::{Message, Question, RecordType, RecordClass};
//!
//! // Create a DNS query message
//! let mut message = Message::new();
//! message.set_query(true);
//! message.add_question(Question::new(
//!     "example.com.",
//!     RecordType::A,
//!     RecordClass::IN,
//! ));
//! ```

pub mod message;
pub mod question;
pub mod rdata;
pub mod record;
pub mod types;

// Re-export commonly used types
pub use message::Message;
pub use question::Question;
pub use rdata::RData;
pub use record::ResourceRecord;
pub use types::{RecordClass, RecordType, ResponseCode};
