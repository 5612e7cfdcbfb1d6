//! Bounds checked decoding of domain names from DNS messages, including
//! [rfc1035] compression pointers.
//!
//! A received message is loaded into a [`MessageBuffer`], then each name field
//! is decoded with [`decode_name`] (or [`MessageBuffer::read_name`] at the
//! cursor). Every offset in the message is untrusted, so all reads are bounds
//! checked, pointer loops are cut short, and the 255 octet name limit is
//! enforced as the name is decoded.
//!
//! # Example
//!
//! ```rust
//! use dnsname::{decode_name, MessageBuffer};
//!
//! let mut msg = b"\x03www\x06google\x03com\x00".to_vec();
//! msg.extend_from_slice(&[0, 0, 0, 0, 0xC0, 0x00]);
//!
//! let buf: MessageBuffer = MessageBuffer::from_slice(&msg)?;
//! let (name, next) = decode_name(&buf, 20)?;
//!
//! assert_eq!(name.to_string(), "www.google.com");
//! assert_eq!(next, 22);
//! # Ok::<(), dnsname::Error>(())
//! ```
//!
//! [rfc1035]: https://datatracker.ietf.org/doc/html/rfc1035#section-4.1.4

mod buffer;
mod errors;
mod name;

#[doc(inline)]
pub use crate::buffer::MessageBuffer;
pub use crate::buffer::MAX_MESSAGE_SIZE;

#[doc(inline)]
pub use crate::errors::Error;
pub use crate::errors::Result;

#[doc(inline)]
pub use crate::name::decode_name;
#[doc(inline)]
pub use crate::name::{Label, Name};
pub use crate::name::{MAX_LABEL_LEN, MAX_NAME_LEN, MAX_POINTER_DEPTH};
