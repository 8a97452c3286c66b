//! Video RAM to frame buffer conversion.
//!
//! The board has no palette and no sprites: video RAM is a plain 256×224
//! bitmap, one bit per pixel, eight pixels packed per byte, row-major.
//! Once per frame the converter unpacks it into a linear ARGB32 buffer for
//! the rendering collaborator. Within each byte the MSB is the
//! lowest-index pixel of the byte's span. The display is rotated in the
//! cabinet, but orientation is the renderer's concern, not ours.

/// Display width in pixels.
pub const DISPLAY_WIDTH: usize = 256;

/// Display height in pixels.
pub const DISPLAY_HEIGHT: usize = 224;

/// Bytes of video RAM covering the full display.
pub const VRAM_BYTES: usize = DISPLAY_WIDTH * DISPLAY_HEIGHT / 8;

/// Opaque white; a set bit lights the pixel.
const PIXEL_ON: u32 = 0xFFFF_FFFF;

/// Transparent black.
const PIXEL_OFF: u32 = 0x0000_0000;

/// Linear ARGB32 frame buffer owned by the machine.
///
/// The renderer borrows it read-only between ticks; only
/// [`refresh`](Self::refresh) mutates it.
pub struct FrameBuffer {
    pixels: Vec<u32>,
}

impl FrameBuffer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            pixels: vec![PIXEL_OFF; DISPLAY_WIDTH * DISPLAY_HEIGHT],
        }
    }

    /// Unpack video RAM into the pixel buffer.
    ///
    /// `vram` must cover at least [`VRAM_BYTES`]; extra bytes (the video
    /// region runs to the end of RAM) are ignored.
    pub fn refresh(&mut self, vram: &[u8]) {
        for (index, &packed) in vram[..VRAM_BYTES].iter().enumerate() {
            let base = index * 8;
            for bit in 0..8 {
                self.pixels[base + bit] = if packed & (0x80 >> bit) != 0 {
                    PIXEL_ON
                } else {
                    PIXEL_OFF
                };
            }
        }
    }

    /// The pixel buffer (ARGB32, row-major, `width * height` entries).
    #[must_use]
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        DISPLAY_WIDTH as u32
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        DISPLAY_HEIGHT as u32
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}
