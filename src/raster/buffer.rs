use crate::foundation::core::{Canvas, Rect};
use crate::foundation::error::{InkError, InkResult};
use crate::palette::color::PaletteColor;
use crate::raster::target::PixelTarget;

/// Source of frame-sized byte buffers.
///
/// Buffer allocation is the only fallible resource acquisition in a render. `max_bytes` models
/// the device's memory ceiling: any request above it fails the same way an exhausted heap does,
/// which is what lets callers exercise their degraded paths.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BufferAllocator {
    /// Largest single buffer that may be handed out; `None` means only the heap limits it.
    pub max_bytes: Option<usize>,
}

impl BufferAllocator {
    /// Allocator bounded only by the heap.
    pub fn unbounded() -> Self {
        Self { max_bytes: None }
    }

    /// Allocator refusing any buffer larger than `max_bytes`.
    pub fn with_limit(max_bytes: usize) -> Self {
        Self {
            max_bytes: Some(max_bytes),
        }
    }

    fn alloc_bytes(&self, len: usize, byte: u8) -> InkResult<Vec<u8>> {
        if self.max_bytes.is_some_and(|max| len > max) {
            return Err(InkError::allocation(len));
        }
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| InkError::allocation(len))?;
        data.resize(len, byte);
        Ok(data)
    }

    /// A buffer with every pixel set to `fill`.
    pub fn blank(&self, canvas: Canvas, fill: PaletteColor) -> InkResult<PixelBuffer> {
        canvas.validate()?;
        let data = self.alloc_bytes(canvas.packed_len(), fill.packed_pair())?;
        Ok(PixelBuffer { canvas, data })
    }

    /// A scratch copy of an externally supplied packed frame.
    ///
    /// `packed` shorter than the canvas is a [`InkError::SizeMismatch`]; surplus bytes are ignored.
    /// Nibbles outside the palette are rejected so the stored-code invariant holds.
    pub fn copy_of(&self, canvas: Canvas, packed: &[u8]) -> InkResult<PixelBuffer> {
        canvas.validate()?;
        let frame = checked_frame(canvas, packed)?;
        if let Some(offset) = frame.iter().position(|&b| !is_valid_pair(b)) {
            return Err(InkError::validation(format!(
                "packed frame byte {offset} (0x{:02x}) holds a non-palette nibble",
                frame[offset]
            )));
        }
        let mut data = self.alloc_bytes(frame.len(), 0)?;
        data.copy_from_slice(frame);
        Ok(PixelBuffer { canvas, data })
    }
}

/// The exact-size prefix of `packed`, or a size mismatch if it is too short.
pub fn checked_frame(canvas: Canvas, packed: &[u8]) -> InkResult<&[u8]> {
    let expected = canvas.packed_len();
    if packed.len() < expected {
        return Err(InkError::size_mismatch(expected, packed.len()));
    }
    if packed.len() > expected {
        tracing::warn!(
            expected,
            actual = packed.len(),
            "ignoring trailing bytes after packed frame"
        );
    }
    Ok(&packed[..expected])
}

fn is_valid_pair(byte: u8) -> bool {
    PaletteColor::from_code(byte >> 4).is_some() && PaletteColor::from_code(byte & 0x0F).is_some()
}

/// Packed 4-bit framebuffer: two horizontally adjacent pixels per byte, even `x` in the high
/// nibble, rows `width / 2` bytes apart.
///
/// Size is fixed at construction. Every stored nibble is a palette code.
#[derive(Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    canvas: Canvas,
    data: Vec<u8>,
}

impl std::fmt::Debug for PixelBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixelBuffer")
            .field("canvas", &self.canvas)
            .field("bytes", &self.data.len())
            .finish()
    }
}

impl PixelBuffer {
    /// A buffer filled with `fill`, allocated from the heap.
    pub fn new(canvas: Canvas, fill: PaletteColor) -> InkResult<Self> {
        BufferAllocator::unbounded().blank(canvas, fill)
    }

    /// Build a buffer by evaluating `f(x, y)` for every pixel.
    pub fn from_fn(
        canvas: Canvas,
        mut f: impl FnMut(u32, u32) -> PaletteColor,
    ) -> InkResult<Self> {
        let mut buf = Self::new(canvas, PaletteColor::White)?;
        let stride = canvas.stride();
        for y in 0..canvas.height {
            let row = &mut buf.data[y as usize * stride..(y as usize + 1) * stride];
            for (i, byte) in row.iter_mut().enumerate() {
                let x = (i * 2) as u32;
                *byte = (f(x, y).code() << 4) | f(x + 1, y).code();
            }
        }
        Ok(buf)
    }

    /// Copy a packed frame; see [`BufferAllocator::copy_of`].
    pub fn from_packed(canvas: Canvas, packed: &[u8]) -> InkResult<Self> {
        BufferAllocator::unbounded().copy_of(canvas, packed)
    }

    /// Buffer dimensions.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Packed bytes, ready for the display transport.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Release the packed bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if !self.canvas.contains(x, y) {
            return None;
        }
        Some(y as usize * self.canvas.stride() + (x as usize) / 2)
    }

    /// Write one pixel. Coordinates off the canvas are ignored.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: PaletteColor) {
        let Some(idx) = self.index(x, y) else {
            return;
        };
        let byte = &mut self.data[idx];
        *byte = if x % 2 == 0 {
            (*byte & 0x0F) | (color.code() << 4)
        } else {
            (*byte & 0xF0) | color.code()
        };
    }

    /// Read one pixel; `None` off the canvas.
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<PaletteColor> {
        let byte = self.data[self.index(x, y)?];
        let code = if x % 2 == 0 { byte >> 4 } else { byte & 0x0F };
        PaletteColor::from_code(code)
    }

    /// Set every pixel to `color`.
    pub fn fill(&mut self, color: PaletteColor) {
        self.data.fill(color.packed_pair());
    }
}

impl PixelTarget for PixelBuffer {
    fn bounds(&self) -> Rect {
        self.canvas.bounds()
    }

    fn put(&mut self, x: i32, y: i32, color: PaletteColor) {
        self.set_pixel(x, y, color);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/buffer.rs"]
mod tests;
