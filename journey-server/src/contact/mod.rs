//! Contact form handling.
//!
//! Messages are validated locally and forwarded to Web3Forms, which emails
//! them on. Delivery, retries and spam scoring beyond the honeypot are the
//! form service's business.

mod client;
mod error;
mod message;
#[cfg(test)]
pub(crate) mod mock;

pub use client::{ContactClient, ContactClientConfig, DEFAULT_ENDPOINT};
pub use error::ContactError;
pub use message::{ContactMessage, SubmitPayload};
