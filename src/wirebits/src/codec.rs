use crate::trace::NoTrace;

/// The codec engine, carrying the diagnostic [`Tracer`](crate::trace::Tracer)
/// its operations report to.
///
/// The free functions of this crate run on `Codec::new()`, which traces
/// nothing. Construct a codec with [`Codec::with_tracer`] to observe the
/// individual word merges and extractions of an operation.
///
/// The methods implementing each layer live alongside the corresponding
/// free functions.
#[derive(Clone, Copy, Debug, Default)]
pub struct Codec<T = NoTrace> {
    tracer: T,
}

impl Codec<NoTrace> {
    /// Creates a codec which does not trace.
    #[inline]
    pub const fn new() -> Self {
        Self { tracer: NoTrace }
    }
}

impl<T> Codec<T> {
    /// Creates a codec reporting to the given tracer.
    #[inline]
    pub const fn with_tracer(tracer: T) -> Self {
        Self { tracer }
    }

    /// Gets a reference to the tracer in use.
    #[inline]
    pub fn tracer(&self) -> &T {
        &self.tracer
    }

    /// Consumes the codec and returns its tracer.
    #[inline]
    pub fn into_tracer(self) -> T {
        self.tracer
    }
}
