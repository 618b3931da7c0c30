//! 24 bpp handler: 3 bytes per pixel, [blue, green, red] order, stride 3.

use enough::Stop;

use super::STOP_INTERVAL;
use crate::color::{Channel, Operation};
use crate::error::TintError;

const PIXEL_STRIDE: usize = 3;

pub(crate) fn apply(
    pixels: &mut [u8],
    op: Operation,
    channel: Channel,
    stop: &dyn Stop,
) -> Result<(), TintError> {
    match op {
        Operation::Filter => filter(pixels, channel, stop),
        Operation::Darken => darken(pixels, channel, stop),
        Operation::Grayscale => grayscale(pixels, stop),
        Operation::AllWhite => flood(pixels, 0xFF, stop),
        Operation::AllBlack => flood(pixels, 0x00, stop),
    }
}

/// Zero the selected channel's byte of every pixel, including one in a
/// trailing partial pixel if the buffer ends mid-pixel.
fn filter(pixels: &mut [u8], channel: Channel, stop: &dyn Stop) -> Result<(), TintError> {
    let start = channel.byte_offset();
    for (n, b) in pixels
        .iter_mut()
        .skip(start)
        .step_by(PIXEL_STRIDE)
        .enumerate()
    {
        if n % STOP_INTERVAL == 0 {
            stop.check()?;
        }
        *b = 0;
    }
    Ok(())
}

/// Zero the two bytes *after* each occurrence of the selected channel.
///
/// This keeps only the selected channel's original intensity lit, which is
/// how this crate's "darken" has always behaved. It is not a luminance
/// scale-down. For green and red the zeroed bytes spill into the next
/// pixel; bytes past the end of the buffer are never written.
fn darken(pixels: &mut [u8], channel: Channel, stop: &dyn Stop) -> Result<(), TintError> {
    let mut i = channel.byte_offset();
    let mut n = 0usize;
    while i < pixels.len() {
        if n % STOP_INTERVAL == 0 {
            stop.check()?;
        }
        n += 1;
        if let Some(b) = pixels.get_mut(i + 1) {
            *b = 0;
        }
        if let Some(b) = pixels.get_mut(i + 2) {
            *b = 0;
        }
        i += PIXEL_STRIDE;
    }
    Ok(())
}

/// Set each complete pixel to the floor average of its three channels.
///
/// Idempotent: averaging three equal bytes returns that byte. A trailing
/// partial pixel has no complete triple to average and is left as-is.
fn grayscale(pixels: &mut [u8], stop: &dyn Stop) -> Result<(), TintError> {
    for (n, px) in pixels.chunks_exact_mut(PIXEL_STRIDE).enumerate() {
        if n % STOP_INTERVAL == 0 {
            stop.check()?;
        }
        let avg = ((px[0] as u16 + px[1] as u16 + px[2] as u16) / 3) as u8;
        px.fill(avg);
    }
    Ok(())
}

/// All-white / all-black: flood every pixel-array byte, stride 1.
fn flood(pixels: &mut [u8], value: u8, stop: &dyn Stop) -> Result<(), TintError> {
    stop.check()?;
    pixels.fill(value);
    Ok(())
}
