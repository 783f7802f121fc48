//! Client for the remote recipe completion service.
//!
//! [`AIClient`] owns the retry loop; the wire call itself lives behind the
//! [`Transport`] trait so the HTTP implementation can be swapped for a fake.

mod classify;
mod error;
mod retry;
mod transport;

pub use classify::UserMessage;
pub use error::AIError;
pub use retry::{AIClient, RetryPolicy};
pub use transport::{AIReply, HttpTransport, Transport};
