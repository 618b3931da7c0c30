//! Transform dispatch: validates depth/channel/operation, locates the
//! pixel array, and hands the scan to a per-depth handler.

mod depth4;
mod depth24;

use enough::Stop;

use crate::color::{BitDepth, Channel, Operation};
use crate::error::TintError;
use crate::header::BmpInfo;

/// Scan elements between cancellation checks inside the handlers.
pub(crate) const STOP_INTERVAL: usize = 4096;

/// Apply `op` to `channel` of a BMP buffer whose depth is already known.
///
/// The pixel-array offset is re-read from the header on every call. The
/// buffer is mutated in place; on any error it is left byte-for-byte
/// identical to its input. An offset at or past the end of the buffer is
/// a well-defined no-op, not an error.
pub fn apply(
    data: &mut [u8],
    depth: BitDepth,
    op: Operation,
    channel: Channel,
    stop: impl Stop,
) -> Result<(), TintError> {
    let bpp = depth.bpp();
    if !depth.has_handler() {
        return Err(TintError::UnsupportedDepth { bpp });
    }
    // The channel is validated even for operations that ignore it,
    // matching the historical behavior this crate reproduces.
    if !channel.is_valid_at(depth) {
        return Err(TintError::InvalidChannel { channel, bpp });
    }
    if !op.is_available_at(depth) {
        return Err(TintError::UnsupportedOperation { op, bpp });
    }

    let info = BmpInfo::from_bytes(data)?;
    let Some(pixels) = data.get_mut(info.pixel_array_offset as usize..) else {
        return Ok(());
    };

    stop.check()?;
    match depth {
        BitDepth::Bpp4 => depth4::apply(pixels, op, channel, &stop),
        BitDepth::Bpp24 => depth24::apply(pixels, op, channel, &stop),
        // has_handler() above restricts depth to the two arms handled here
        _ => Ok(()),
    }
}

/// Builder-style transform that probes the bit depth itself.
///
/// ```no_run
/// use zentint::{Channel, Operation, TransformRequest, Unstoppable};
/// # let mut data: Vec<u8> = Vec::new();
/// TransformRequest::new(Operation::Darken)
///     .channel(Channel::Red)
///     .apply(&mut data, Unstoppable)?;
/// # Ok::<(), zentint::TintError>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct TransformRequest {
    op: Operation,
    channel: Channel,
}

impl TransformRequest {
    /// A request for `op` on the default channel (blue).
    pub fn new(op: Operation) -> Self {
        Self {
            op,
            channel: Channel::Blue,
        }
    }

    /// Select the channel the operation targets.
    ///
    /// Ignored by grayscale/all-white/all-black, but still validated
    /// against the bit depth.
    pub fn channel(mut self, channel: Channel) -> Self {
        self.channel = channel;
        self
    }

    /// Read the depth from the header and apply the transform in place.
    pub fn apply(self, data: &mut [u8], stop: impl Stop) -> Result<(), TintError> {
        let info = BmpInfo::from_bytes(data)?;
        let depth = BitDepth::from_bpp(info.bits_per_pixel).ok_or(
            TintError::UnsupportedDepth {
                bpp: info.bits_per_pixel,
            },
        )?;
        apply(data, depth, self.op, self.channel, stop)
    }
}
