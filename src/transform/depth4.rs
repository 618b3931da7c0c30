//! 4 bpp handler: two nibble-packed palette indices per byte.
//!
//! Iteration granularity is one byte, not one pixel — two palette indices
//! share each byte, so every byte of the pixel array is visited exactly
//! once and only the selected channel's nibble is touched.

use enough::Stop;

use super::STOP_INTERVAL;
use crate::color::{Channel, Operation};
use crate::error::TintError;

pub(crate) fn apply(
    pixels: &mut [u8],
    op: Operation,
    channel: Channel,
    stop: &dyn Stop,
) -> Result<(), TintError> {
    let mask = channel.nibble_mask();
    for chunk in pixels.chunks_mut(STOP_INTERVAL) {
        stop.check()?;
        match op {
            Operation::Filter => {
                for b in chunk.iter_mut() {
                    *b &= !mask;
                }
            }
            Operation::Darken => {
                for b in chunk.iter_mut() {
                    *b |= mask;
                }
            }
            // availability is validated by the dispatcher
            _ => {}
        }
    }
    Ok(())
}
