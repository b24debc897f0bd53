//! Opt-in diagnostics for codec operations.
//!
//! A [`Codec`](crate::Codec) reports what it does to a [`Tracer`]. The
//! default [`NoTrace`] discards everything and compiles down to nothing,
//! [`LogTracer`] forwards events to the [`log`] facade at trace level
//! and [`TraceFn`] adapts any closure.

use crate::{Layer, Word};

/// Whether an operation reads from or writes to the message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Read,
    Write,
}

/// A single step of a codec operation.
///
/// All word values are in host byte order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event<W> {
    /// An operation on a layer started.
    Begin {
        layer: Layer,
        access: Access,
        start_bit: usize,
        bit_len: usize,
    },

    /// A message word was updated by a write.
    ///
    /// `mask` covers the bits of the word belonging to the field.
    Merge {
        index: usize,
        mask: W,
        before: W,
        after: W,
    },

    /// Bits were extracted from a message word.
    ///
    /// `value` holds the extracted bits at their final position in the
    /// result, before any realignment.
    Extract { index: usize, word: W, value: W },

    /// A scratch buffer of `words` words was set up.
    Scratch { words: usize },

    /// An operation on a layer completed successfully.
    End { layer: Layer, next_bit: usize },
}

/// A receiver of codec [`Event`]s.
pub trait Tracer<W: Word> {
    /// Handles a single event.
    fn trace(&self, event: &Event<W>);
}

/// A [`Tracer`] which ignores all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoTrace;

impl<W: Word> Tracer<W> for NoTrace {
    #[inline(always)]
    fn trace(&self, _event: &Event<W>) {}
}

/// A [`Tracer`] which logs every event with [`log::trace!`].
#[derive(Clone, Copy, Debug, Default)]
pub struct LogTracer;

impl<W: Word> Tracer<W> for LogTracer {
    fn trace(&self, event: &Event<W>) {
        log::trace!("{event:x?}");
    }
}

/// Adapts a closure into a [`Tracer`].
#[derive(Clone, Copy, Debug)]
pub struct TraceFn<F>(pub F);

impl<W, F> Tracer<W> for TraceFn<F>
where
    W: Word,
    F: Fn(&Event<W>),
{
    #[inline]
    fn trace(&self, event: &Event<W>) {
        (self.0)(event)
    }
}

impl<W: Word, T: Tracer<W> + ?Sized> Tracer<W> for &T {
    #[inline]
    fn trace(&self, event: &Event<W>) {
        (**self).trace(event)
    }
}
