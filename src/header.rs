//! BMP header inspection: fixed-offset little-endian field reads.
//!
//! The reads are deliberately trusting. No "BM" magic check, no
//! plausibility checks on dimensions or offsets — only the minimum-length
//! bound needed to make the fixed-offset reads well defined. Callers that
//! want strict validation should use a full decoder instead.

use crate::error::TintError;

/// Minimum file length for the fixed header fields to exist
/// (14-byte file header + 40-byte BITMAPINFOHEADER).
pub const MIN_HEADER_LEN: usize = 54;

// Fixed field offsets within the file.
const FILE_SIZE_OFFSET: usize = 2;
const PIXEL_ARRAY_OFFSET: usize = 10;
const WIDTH_OFFSET: usize = 18;
const HEIGHT_OFFSET: usize = 22;
const BPP_OFFSET: usize = 28;

/// Header fields read from a BMP byte buffer.
///
/// A snapshot, not a view: fields are re-read from the buffer on every
/// [`BmpInfo::from_bytes`] call and never cached across transforms.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BmpInfo {
    /// Declared file size in bytes (header field, not the buffer length).
    pub file_size: u32,
    /// Byte offset from the start of the file to the pixel array.
    pub pixel_array_offset: u32,
    pub width: u32,
    pub height: u32,
    pub bits_per_pixel: u16,
}

impl BmpInfo {
    /// Read the header fields of `data`.
    ///
    /// Returns [`TintError::TruncatedHeader`] if `data` is shorter than
    /// [`MIN_HEADER_LEN`] bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self, TintError> {
        if data.len() < MIN_HEADER_LEN {
            return Err(TintError::TruncatedHeader { len: data.len() });
        }
        Ok(Self {
            file_size: get_u32_le(data, FILE_SIZE_OFFSET),
            pixel_array_offset: get_u32_le(data, PIXEL_ARRAY_OFFSET),
            width: get_u32_le(data, WIDTH_OFFSET),
            height: get_u32_le(data, HEIGHT_OFFSET),
            bits_per_pixel: get_u16_le(data, BPP_OFFSET),
        })
    }
}

// Offsets below are compile-time constants within the length-checked
// 54-byte prefix, so plain indexing cannot go out of bounds here.

fn get_u32_le(data: &[u8], pos: usize) -> u32 {
    u32::from_le_bytes([data[pos], data[pos + 1], data[pos + 2], data[pos + 3]])
}

fn get_u16_le(data: &[u8], pos: usize) -> u16 {
    u16::from_le_bytes([data[pos], data[pos + 1]])
}
