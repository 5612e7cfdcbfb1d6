//! Decoding of (possibly compressed) domain names from a DNS message.

use crate::buffer::MessageBuffer;
use crate::errors::{Error, Result};
use log::{debug, trace};
use std::fmt;
use std::iter::FromIterator;

/// Restricts the length of a domain label to 63 octets. [rfc1035]
///
/// [rfc1035]: https://datatracker.ietf.org/doc/html/rfc1035#section-2.3.4
pub const MAX_LABEL_LEN: usize = 63;

/// Restricts the encoded length of a domain name to 255 octets. [rfc1035]
///
/// [rfc1035]: https://datatracker.ietf.org/doc/html/rfc1035#section-2.3.4
pub const MAX_NAME_LEN: usize = 255;

/// The most compression pointers followed while decoding a single name.
pub const MAX_POINTER_DEPTH: usize = 5;

/// One segment of a domain name, e.g. `google` in `www.google.com`.
///
/// Labels are opaque bytes. They are usually ASCII, but nothing in the wire
/// format requires it, so no validation is done.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Label(Vec<u8>);

impl Label {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[u8]> for Label {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<&[u8]> for Label {
    fn from(b: &[u8]) -> Self {
        Label(b.to_vec())
    }
}

impl From<&str> for Label {
    fn from(s: &str) -> Self {
        Label(s.as_bytes().to_vec())
    }
}

impl From<Vec<u8>> for Label {
    fn from(b: Vec<u8>) -> Self {
        Label(b)
    }
}

/// Writes the label, escaping anything that isn't printable ASCII, in the
/// master file style of [rfc1035] (e.g. `\.` and `\009`).
///
/// [rfc1035]: https://datatracker.ietf.org/doc/html/rfc1035#section-5.1
impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for &b in &self.0 {
            match b {
                b'.' | b'\\' => write!(f, "\\{}", b as char)?,
                0x21..=0x7E => write!(f, "{}", b as char)?,
                _ => write!(f, "\\{:03}", b)?,
            }
        }
        Ok(())
    }
}

/// A domain name decoded from a DNS message.
///
/// An empty list of labels is the root name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Name {
    labels: Vec<Label>,
}

impl Name {
    /// Returns the root name.
    pub fn root() -> Name {
        Name::default()
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Label> {
        self.labels.iter()
    }

    /// The number of labels.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_root(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.is_root()
    }

    /// The number of octets this name takes up uncompressed, counting the
    /// length octet of each label but not the terminating root octet.
    pub fn encoded_len(&self) -> usize {
        self.labels.iter().map(|l| 1 + l.len()).sum()
    }

    /// Returns the labels joined by `.`. The root name is empty.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.encoded_len());
        for (i, label) in self.labels.iter().enumerate() {
            if i > 0 {
                buf.push(b'.');
            }
            buf.extend_from_slice(label.as_bytes());
        }
        buf
    }
}

impl From<Vec<Label>> for Name {
    fn from(labels: Vec<Label>) -> Self {
        Name { labels }
    }
}

impl<L: Into<Label>> FromIterator<L> for Name {
    fn from_iter<I: IntoIterator<Item = L>>(iter: I) -> Self {
        Name {
            labels: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Name {
    type Item = &'a Label;
    type IntoIter = std::slice::Iter<'a, Label>;

    fn into_iter(self) -> Self::IntoIter {
        self.labels.iter()
    }
}

/// Displays the labels separated by `.`, or `.` for the root.
impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.labels.is_empty() {
            return write!(f, ".");
        }

        for (i, label) in self.labels.iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            write!(f, "{}", label)?;
        }

        Ok(())
    }
}

/// Decodes the domain name starting at `offset`.
///
/// Returns the name, and the offset of the first byte after it. If the name
/// ends in a compression pointer, that is the byte after the pointer, not
/// after wherever the pointer led.
///
/// # Errors
///
/// Any malformed name is an error, and nothing decoded up to that point is
/// returned. See [`Error`] for the possible failures.
///
/// # Examples
///
/// ```rust
/// use dnsname::{decode_name, MessageBuffer};
///
/// let buf = MessageBuffer::<32>::from_slice(b"\x03www\x06google\x03com\x00\x04mail\xC0\x04")?;
///
/// let (name, next) = decode_name(&buf, 16)?;
/// assert_eq!(name.to_string(), "mail.google.com");
/// assert_eq!(next, 23);
/// # Ok::<(), dnsname::Error>(())
/// ```
pub fn decode_name<const C: usize>(
    buf: &MessageBuffer<C>,
    offset: usize,
) -> Result<(Name, usize)> {
    match decode(buf, offset, 0, 0) {
        Ok(part) => Ok((Name::from(part.labels), part.next)),
        Err(e) => {
            debug!("failed to decode name at offset {}: {}", offset, e);
            Err(e)
        }
    }
}

impl<const C: usize> MessageBuffer<C> {
    /// Reads the domain name at the cursor, and moves the cursor past it.
    ///
    /// On error the cursor is left where it was.
    pub fn read_name(&mut self) -> Result<Name> {
        let offset = self.cursor(1)?;
        let (name, next) = decode_name(self, offset)?;
        self.seek(next);
        Ok(name)
    }
}

/// The result of decoding one part of a name, either from the start or from
/// the target of a pointer.
struct Decoded {
    labels: Vec<Label>,

    /// Encoded length of the whole name so far.
    encoded_len: usize,

    /// Offset just after the part, as seen by its caller.
    next: usize,
}

/// Decodes the labels at `offset` until the root label or a pointer.
///
/// `depth` is the number of pointers already followed, and `encoded_len` the
/// length of the labels decoded before them.
fn decode<const C: usize>(
    buf: &MessageBuffer<C>,
    offset: usize,
    depth: usize,
    mut encoded_len: usize,
) -> Result<Decoded> {
    if depth > MAX_POINTER_DEPTH {
        return Err(Error::MaxRecursionExceeded { offset });
    }

    let mut labels = Vec::new();
    let mut index = offset;

    // Read each label one at a time, to build up the full domain name.
    loop {
        let len = buf.byte_at(index)?;
        if len == 0 {
            return Ok(Decoded {
                labels,
                encoded_len,
                next: index + 1,
            });
        }

        match len & 0xC0 {
            // No compression
            0x00 => {
                let len = usize::from(len);
                let end = index + 1 + len;
                if end > C {
                    return Err(Error::InvalidIndex {
                        offset: index,
                        end,
                        capacity: C,
                    });
                }

                encoded_len += 1 + len;
                if encoded_len > MAX_NAME_LEN {
                    return Err(Error::NameTooLong {
                        offset: index,
                        len: encoded_len,
                    });
                }

                let label = Label::from(buf.range_at(index + 1, len)?);
                trace!("label '{}' at offset {}", label, index);

                labels.push(label);
                index = end;
            }

            // Compression. A pointer always ends the name.
            0xC0 => {
                let ptr = buf
                    .u16_at(index)
                    .map_err(|_| Error::InvalidPointer {
                        offset: index,
                        target: None,
                    })?;

                let target = usize::from(ptr & 0x3FFF);
                if target >= C {
                    return Err(Error::InvalidPointer {
                        offset: index,
                        target: Some(target),
                    });
                }

                trace!("pointer at offset {} to {} (depth {})", index, target, depth + 1);

                let rest = decode(buf, target, depth + 1, encoded_len)?;
                labels.extend(rest.labels);

                return Ok(Decoded {
                    labels,
                    encoded_len: rest.encoded_len,
                    next: index + 2,
                });
            }

            // 0x40 is the extended label type of rfc6891 (and the deprecated
            // bit-string labels of rfc2673). 0x80 is reserved.
            bits => return Err(Error::UnsupportedLabelType { offset: index, bits }),
        }
    }
}
