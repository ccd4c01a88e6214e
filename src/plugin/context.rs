//! Plugin execution context
//!
//! The context holds the DNS query and the response a plugin may
//! attach. A context whose response is still unset after a plugin ran
//! signals "fall through to the next handler" to the host server.

use crate::dns::Message;

/// Plugin execution context
///
/// # Example
///
/// ```rust
/// use rehosts::plugin::Context;
/// use rehosts::dns::Message;
///
/// let request = Message::new();
/// let mut ctx = Context::new(request);
/// assert!(!ctx.has_response());
///
/// let response = Message::new();
/// ctx.set_response(Some(response));
/// assert!(ctx.has_response());
/// ```
#[derive(Debug)]
pub struct Context {
    /// The original DNS query
    request: Message,

    /// The DNS response (if set by a plugin)
    response: Option<Message>,
}

impl Context {
    /// Create a new context with a DNS query
    pub fn new(request: Message) -> Self {
        Self {
            request,
            response: None,
        }
    }

    /// Get a reference to the DNS query
    pub fn request(&self) -> &Message {
        &self.request
    }

    /// Get a mutable reference to the DNS query
    pub fn request_mut(&mut self) -> &mut Message {
        &mut self.request
    }

    /// Get a reference to the DNS response
    pub fn response(&self) -> Option<&Message> {
        self.response.as_ref()
    }

    /// Set the DNS response
    pub fn set_response(&mut self, response: Option<Message>) {
        self.response = response;
    }

    /// Take the DNS response, leaving None in its place
    pub fn take_response(&mut self) -> Option<Message> {
        self.response.take()
    }

    /// Check if a response has been set
    pub fn has_response(&self) -> bool {
        self.response.is_some()
    }
}
