//! DNS message implementation
//!
//! A DNS message consists of a header and the question and answer
//! sections this crate works with. Authority/additional sections and
//! wire encoding belong to the host server.

use super::question::Question;
use super::record::ResourceRecord;
use super::types::ResponseCode;

/// DNS message
///
/// Represents a DNS query or response as seen by the plugin layer.
///
/// # Example
///
/// ```
/// use rehosts::dns::{Message, Question, RecordType, RecordClass};
///
/// let mut message = Message::new();
/// message.set_id(1234);
/// message.add_question(Question::new(
///     "example.com.",
///     RecordType::A,
///     RecordClass::IN,
/// ));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Message ID
    id: u16,
    /// Query/Response flag (false = query, true = response)
    qr: bool,
    /// Authoritative answer flag
    aa: bool,
    /// Recursion desired flag
    rd: bool,
    /// Recursion available flag
    ra: bool,
    /// Response code
    rcode: ResponseCode,
    /// Question section
    questions: Vec<Question>,
    /// Answer section
    answers: Vec<ResourceRecord>,
}

impl Message {
    /// Create a new DNS message with default values
    ///
    /// The message is initialized as a query (QR=0) with NOERROR
    /// response code.
    pub fn new() -> Self {
        Self {
            id: 0,
            qr: false,
            aa: false,
            rd: true,
            ra: false,
            rcode: ResponseCode::NoError,
            questions: Vec::new(),
            answers: Vec::new(),
        }
    }

    /// Create a reply skeleton for a request
    ///
    /// Copies the ID, recursion-desired flag and question section, and
    /// marks the message as a response.
    pub fn reply_to(request: &Message) -> Self {
        let mut reply = Message::new();
        reply.id = request.id;
        reply.qr = true;
        reply.rd = request.rd;
        reply.questions = request.questions.clone();
        reply
    }

    /// Get the message ID
    pub fn id(&self) -> u16 {
        self.id
    }

    /// Set the message ID
    pub fn set_id(&mut self, id: u16) {
        self.id = id;
    }

    /// Check if this is a response
    pub fn is_response(&self) -> bool {
        self.qr
    }

    /// Set whether this is a query
    pub fn set_query(&mut self, is_query: bool) {
        self.qr = !is_query;
    }

    /// Set whether this is a response
    pub fn set_response(&mut self, is_response: bool) {
        self.qr = is_response;
    }

    /// Check if authoritative answer flag is set
    pub fn is_authoritative(&self) -> bool {
        self.aa
    }

    /// Set the authoritative answer flag
    pub fn set_authoritative(&mut self, aa: bool) {
        self.aa = aa;
    }

    /// Check if recursion desired flag is set
    pub fn recursion_desired(&self) -> bool {
        self.rd
    }

    /// Set the recursion desired flag
    pub fn set_recursion_desired(&mut self, rd: bool) {
        self.rd = rd;
    }

    /// Check if recursion available flag is set
    pub fn recursion_available(&self) -> bool {
        self.ra
    }

    /// Set the recursion available flag
    pub fn set_recursion_available(&mut self, ra: bool) {
        self.ra = ra;
    }

    /// Get the response code
    pub fn response_code(&self) -> ResponseCode {
        self.rcode
    }

    /// Set the response code
    pub fn set_response_code(&mut self, rcode: ResponseCode) {
        self.rcode = rcode;
    }

    /// Get the questions
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Add a question to the message
    pub fn add_question(&mut self, question: Question) {
        self.questions.push(question);
    }

    /// Get the answers
    pub fn answers(&self) -> &[ResourceRecord] {
        &self.answers
    }

    /// Add an answer to the message
    pub fn add_answer(&mut self, answer: ResourceRecord) {
        self.answers.push(answer);
    }
}

impl Default for Message {
    fn default() -> Self {
        Self::new()
    }
}
