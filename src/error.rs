use enough::StopReason;

use crate::color::{Channel, Operation};

/// Errors from BMP header inspection and channel transforms.
///
/// `UnsupportedDepth`, `InvalidChannel` and `UnsupportedOperation` are
/// non-fatal: the buffer is left byte-for-byte identical to its input and
/// the caller may retry with different parameters.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum TintError {
    #[error("buffer too short for a BMP header: {len} bytes, need 54")]
    TruncatedHeader { len: usize },

    #[error("unsupported color depth: {bpp} bpp")]
    UnsupportedDepth { bpp: u16 },

    #[error("channel {channel:?} is not valid at {bpp} bpp")]
    InvalidChannel { channel: Channel, bpp: u16 },

    #[error("operation {op:?} is not available at {bpp} bpp")]
    UnsupportedOperation { op: Operation, bpp: u16 },

    #[error("operation cancelled")]
    Cancelled(StopReason),

    #[cfg(feature = "std")]
    #[error("file not found: {}", .0.display())]
    NotFound(std::path::PathBuf),

    #[cfg(feature = "std")]
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<StopReason> for TintError {
    fn from(r: StopReason) -> Self {
        TintError::Cancelled(r)
    }
}
