//! # zentint
//!
//! In-place color channel transforms for uncompressed BMP files.
//!
//! Unlike a decoder, this crate never unpacks the image: it rewrites the
//! pixel-array bytes of a BMP buffer directly, using the header's declared
//! geometry to pick the right stride and channel byte/nibble positions.
//!
//! ## Supported bit depths
//!
//! - **4 bpp** — nibble-packed palette indices, two pixels per byte.
//!   Operations: filter, darken (per channel nibble).
//! - **24 bpp** — true color, 3 bytes per pixel in [blue, green, red]
//!   order. Operations: filter, darken, grayscale, all-white, all-black.
//!
//! 8, 16 and 32 bpp files are recognized but explicitly unsupported;
//! transforms on them return [`TintError::UnsupportedDepth`] and leave the
//! buffer untouched.
//!
//! ## Legacy quirks preserved
//!
//! - "Darken" does not scale the selected channel down. It zeroes the
//!   *other* two channels of each pixel, leaving only the selected
//!   channel's original intensity. This is not gamma-correct darkening.
//! - The header is read trustingly: no "BM" magic check is performed, only
//!   a minimum-length check (54 bytes).
//!
//! ## Usage
//!
//! ```no_run
//! use zentint::{Channel, Operation, TransformRequest, Unstoppable};
//!
//! let mut data: Vec<u8> = Vec::new(); // your BMP bytes
//!
//! // Probe the header without transforming
//! let info = zentint::inspect(&data)?;
//! println!("{}x{} {} bpp", info.width, info.height, info.bits_per_pixel);
//!
//! // Zero the blue channel in place
//! TransformRequest::new(Operation::Filter)
//!     .channel(Channel::Blue)
//!     .apply(&mut data, Unstoppable)?;
//! # Ok::<(), zentint::TintError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

mod color;
mod error;
mod header;
mod transform;

#[cfg(feature = "std")]
pub mod io;

// Re-exports
pub use color::{BitDepth, Channel, Operation};
pub use enough::{Stop, Unstoppable};
pub use error::TintError;
pub use header::BmpInfo;
pub use transform::{TransformRequest, apply};

/// Read the BMP header fields of `data` without touching the pixel array.
///
/// Shorthand for [`BmpInfo::from_bytes`].
pub fn inspect(data: &[u8]) -> Result<BmpInfo, TintError> {
    BmpInfo::from_bytes(data)
}
