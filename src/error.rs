use core::fmt::{Debug, Display, Formatter};

/// Driver error type
///
/// `E` is the error type of the [`LcdBus`](crate::interface::LcdBus) the driver talks through.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Error<E> {
    /// A single pixel coordinate was outside the logical device area.
    /// Nothing was written to the shadow memory or the bus.
    OutOfBounds,

    /// The transport failed. The shadow memory still holds the intended content.
    Bus(E),
}

impl<E: Display> Display for Error<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::OutOfBounds => write!(f, "pixel coordinate is outside the display area"),
            Self::Bus(err) => Display::fmt(err, f),
        }
    }
}

impl<E: Debug> Debug for Error<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::OutOfBounds => write!(f, "OutOfBounds"),
            Self::Bus(err) => f.debug_tuple("Bus").field(err).finish(),
        }
    }
}
