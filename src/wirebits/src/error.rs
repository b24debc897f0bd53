//! Errors reported by the codec layers.

use std::fmt;

use thiserror::Error;

/// The codec layer an operation belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Layer {
    /// Single-word reads and writes.
    Word,
    /// Multiword reads and writes.
    Wide,
    /// Byte-array reads and writes.
    Bytes,
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Word => "word",
            Self::Wide => "wide",
            Self::Bytes => "bytes",
        };

        f.write_str(name)
    }
}

/// What went wrong in a failed operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum ErrorKind {
    /// The start bit lies outside of the message.
    #[error("start bit lies outside of the message")]
    OutOfRange,

    /// The field is wider than the value or unit it is moved through.
    #[error("field is wider than its value can hold")]
    FieldTooWide,

    /// The field would extend past the end of the message.
    #[error("field extends past the end of the message")]
    SpanOverflow,

    /// The scratch buffer for a byte-array operation could not be
    /// allocated.
    #[error("failed to allocate scratch buffer")]
    AllocationFailure,

    /// A read was given no place to store its result.
    #[error("read operation has no output to store into")]
    NullOutput,
}

/// A failed codec operation.
///
/// Layers built on top of each other re-signal inner failures instead of
/// masking them, so an error records both the layer which detected the
/// problem and the outermost layer it surfaced through.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
#[error("{kind} (detected by {origin} layer, reported by {layer} layer)")]
pub struct Error {
    /// The kind of failure.
    pub kind: ErrorKind,
    /// The layer which detected the failure.
    pub origin: Layer,
    /// The outermost layer the failure was reported through.
    pub layer: Layer,
}

impl Error {
    #[inline]
    pub(crate) const fn new(layer: Layer, kind: ErrorKind) -> Self {
        Self {
            kind,
            origin: layer,
            layer,
        }
    }

    /// Re-signals the error through an outer layer.
    #[inline]
    pub(crate) const fn through(mut self, layer: Layer) -> Self {
        self.layer = layer;
        self
    }
}
