//! Bit depth, channel, and operation enums plus their availability tables.

/// Color depth declared in the BMP header.
///
/// Only [`BitDepth::Bpp4`] and [`BitDepth::Bpp24`] have working transform
/// handlers; the rest are recognized so callers can report them, but any
/// transform on them is refused.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BitDepth {
    /// 4 bpp — nibble-packed palette indices (EGA-era).
    Bpp4,
    /// 8 bpp — byte palette indices. Unsupported.
    Bpp8,
    /// 16 bpp — packed high color. Unsupported.
    Bpp16,
    /// 24 bpp — true color, [blue, green, red] bytes per pixel.
    Bpp24,
    /// 32 bpp — true color with padding/alpha byte. Unsupported.
    Bpp32,
}

impl BitDepth {
    /// Map a header `bits_per_pixel` field to a known depth.
    pub fn from_bpp(bpp: u16) -> Option<Self> {
        match bpp {
            4 => Some(Self::Bpp4),
            8 => Some(Self::Bpp8),
            16 => Some(Self::Bpp16),
            24 => Some(Self::Bpp24),
            32 => Some(Self::Bpp32),
            _ => None,
        }
    }

    /// The raw bits-per-pixel value.
    pub fn bpp(self) -> u16 {
        match self {
            Self::Bpp4 => 4,
            Self::Bpp8 => 8,
            Self::Bpp16 => 16,
            Self::Bpp24 => 24,
            Self::Bpp32 => 32,
        }
    }

    /// Whether a transform handler exists for this depth.
    pub fn has_handler(self) -> bool {
        matches!(self, Self::Bpp4 | Self::Bpp24)
    }
}

/// One color component of a pixel.
///
/// At 24 bpp a channel is one byte of the 3-byte [blue, green, red] pixel;
/// `Gray` is not a 24 bpp channel. At 4 bpp a channel selects a nibble of
/// each pixel-array byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    Blue,
    Green,
    Red,
    Gray,
}

/// Nibble shift per channel index at 4 bpp: blue/red address the low
/// nibble, green/gray the high nibble ((index * 4) mod 8).
const NIBBLE_SHIFT: [u8; 4] = [0, 4, 0, 4];

impl Channel {
    /// Channel order index: blue 0, green 1, red 2, gray 3.
    pub fn index(self) -> usize {
        match self {
            Self::Blue => 0,
            Self::Green => 1,
            Self::Red => 2,
            Self::Gray => 3,
        }
    }

    /// Whether this channel exists at the given depth.
    pub fn is_valid_at(self, depth: BitDepth) -> bool {
        match depth {
            BitDepth::Bpp4 => true,
            BitDepth::Bpp24 => !matches!(self, Self::Gray),
            _ => false,
        }
    }

    /// Bit mask of the nibble this channel occupies in a 4 bpp byte.
    pub(crate) fn nibble_mask(self) -> u8 {
        0x0F << NIBBLE_SHIFT[self.index()]
    }

    /// Byte position of this channel within a 24 bpp [b, g, r] pixel.
    pub(crate) fn byte_offset(self) -> usize {
        self.index()
    }
}

/// A channel transform.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    /// Zero the selected channel's contribution across the image.
    Filter,
    /// Suppress the *other* channels, keeping only the selected one.
    /// A legacy approximation, not a luminance scale-down.
    Darken,
    /// Replace each pixel with the integer average of its three channels.
    /// 24 bpp only; ignores the channel argument.
    Grayscale,
    /// Set every pixel-array byte to 255. 24 bpp only; ignores the channel.
    AllWhite,
    /// Set every pixel-array byte to 0. 24 bpp only; ignores the channel.
    AllBlack,
}

impl Operation {
    /// Availability table: which operations exist per bit depth.
    pub fn is_available_at(self, depth: BitDepth) -> bool {
        match depth {
            BitDepth::Bpp4 => matches!(self, Self::Filter | Self::Darken),
            BitDepth::Bpp24 => true,
            _ => false,
        }
    }
}
