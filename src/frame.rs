// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Caller-owned pixel buffer descriptors and image views.
//!
//! A [`SharedFrame`] describes an externally owned, densely packed pixel
//! buffer (step is always `cols * channels * depth_bytes`, no padding).
//! The library never allocates, frees, resizes, or retains that memory;
//! it only borrows a mutable view for the duration of a single call.

use image::{ImageBuffer, Rgb};

use crate::error::{AnnotateError, Result};

/// Per-channel numeric type of a pixel buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Depth {
    /// Unsigned 8-bit channels.
    U8 = 0,
    /// Signed 8-bit channels.
    S8 = 1,
    /// Unsigned 16-bit channels.
    U16 = 2,
    /// Signed 16-bit channels.
    S16 = 3,
    /// Signed 32-bit channels.
    S32 = 4,
    /// 32-bit float channels.
    F32 = 5,
    /// 64-bit float channels.
    F64 = 6,
    /// 16-bit float channels.
    F16 = 7,
}

impl Depth {
    /// Returns the string representation of the depth tag.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::U8 => "U8",
            Self::S8 => "S8",
            Self::U16 => "U16",
            Self::S16 => "S16",
            Self::S32 => "S32",
            Self::F32 => "F32",
            Self::F64 => "F64",
            Self::F16 => "F16",
        }
    }

    /// Bytes per channel.
    #[must_use]
    pub const fn bytes(&self) -> usize {
        match self {
            Self::U8 | Self::S8 => 1,
            Self::U16 | Self::S16 | Self::F16 => 2,
            Self::S32 | Self::F32 => 4,
            Self::F64 => 8,
        }
    }
}

impl TryFrom<u8> for Depth {
    type Error = AnnotateError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Self::U8),
            1 => Ok(Self::S8),
            2 => Ok(Self::U16),
            3 => Ok(Self::S16),
            4 => Ok(Self::S32),
            5 => Ok(Self::F32),
            6 => Ok(Self::F64),
            7 => Ok(Self::F16),
            _ => Err(AnnotateError::InvalidArgument(format!(
                "unknown depth tag {value}"
            ))),
        }
    }
}

/// Channel arrangement of a pixel buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum PixelFormat {
    /// 3-channel RGB, usually 24-bit with `Depth::U8`.
    Rgb = 0,
    /// 3-channel BGR.
    Bgr = 1,
    /// 4-channel RGBA.
    Rgba = 2,
    /// 4-channel BGRA.
    Bgra = 3,
    /// Single-channel grayscale.
    Gray = 4,
    /// 3-channel planar-free YUV.
    Yuv = 5,
    /// Packed YUYV, 2 bytes per pixel.
    Yuyv = 6,
}

impl PixelFormat {
    /// Returns the string representation of the pixel format tag.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Rgb => "RGB",
            Self::Bgr => "BGR",
            Self::Rgba => "RGBA",
            Self::Bgra => "BGRA",
            Self::Gray => "GRAY",
            Self::Yuv => "YUV",
            Self::Yuyv => "YUYV",
        }
    }

    /// Channel values stored per pixel.
    #[must_use]
    pub const fn channels(&self) -> usize {
        match self {
            Self::Gray => 1,
            Self::Yuyv => 2,
            Self::Rgb | Self::Bgr | Self::Yuv => 3,
            Self::Rgba | Self::Bgra => 4,
        }
    }
}

impl TryFrom<u8> for PixelFormat {
    type Error = AnnotateError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Self::Rgb),
            1 => Ok(Self::Bgr),
            2 => Ok(Self::Rgba),
            3 => Ok(Self::Bgra),
            4 => Ok(Self::Gray),
            5 => Ok(Self::Yuv),
            6 => Ok(Self::Yuyv),
            _ => Err(AnnotateError::InvalidArgument(format!(
                "unknown pixel format tag {value}"
            ))),
        }
    }
}

/// A mutable RGB8 view borrowed over caller-owned pixel memory.
pub type FrameView<'a> = ImageBuffer<Rgb<u8>, &'a mut [u8]>;

/// Descriptor for an externally owned pixel buffer.
///
/// Matches the C ABI layout: raw data pointer, dimensions (both capped at
/// 65535 by the field width), and the depth / pixel format tags as raw
/// bytes so that out-of-range values coming over the ABI can be rejected
/// instead of invoking undefined behavior.
#[derive(Debug, Clone, Copy)]
#[repr(C)]
pub struct SharedFrame {
    /// Pointer to the first byte of pixel data. Never freed by this library.
    pub data: *mut u8,
    /// Number of pixel rows.
    pub rows: u16,
    /// Number of pixel columns.
    pub cols: u16,
    /// Channel depth tag, see [`Depth`].
    pub depth: u8,
    /// Channel arrangement tag, see [`PixelFormat`].
    pub pixel_format: u8,
}

impl SharedFrame {
    /// Parse the depth tag.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for an unknown tag value.
    pub fn depth(&self) -> Result<Depth> {
        Depth::try_from(self.depth)
    }

    /// Parse the pixel format tag.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for an unknown tag value.
    pub fn pixel_format(&self) -> Result<PixelFormat> {
        PixelFormat::try_from(self.pixel_format)
    }

    /// Total buffer size in bytes implied by the descriptor.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for unknown tag values.
    pub fn len_bytes(&self) -> Result<usize> {
        let depth = self.depth()?;
        let format = self.pixel_format()?;
        Ok(usize::from(self.rows) * usize::from(self.cols) * format.channels() * depth.bytes())
    }

    /// Borrow the caller's pixels as a mutable RGB8 view.
    ///
    /// Only `Depth::U8` with a 3-channel RGB/BGR arrangement is drawable;
    /// every other combination is rejected before any pixel is touched.
    /// BGR buffers are drawn with the channel order the caller declared
    /// (no swizzling is performed).
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedFormat` for non-drawable format/depth
    /// combinations and `InvalidArgument` for a null data pointer.
    ///
    /// # Safety
    ///
    /// `data` must point to at least `rows * cols * 3` valid bytes that
    /// stay alive and unaliased for the duration of the borrow.
    pub unsafe fn view_mut(&mut self) -> Result<FrameView<'_>> {
        let depth = self.depth()?;
        let format = self.pixel_format()?;
        if depth != Depth::U8 || format.channels() != 3 {
            return Err(AnnotateError::UnsupportedFormat(format!(
                "pixel format {} with depth {}; only 8-bit 3-channel frames are drawable",
                format.as_str(),
                depth.as_str()
            )));
        }
        if self.data.is_null() {
            return Err(AnnotateError::InvalidArgument(
                "frame data pointer is null".to_string(),
            ));
        }
        let len = usize::from(self.rows) * usize::from(self.cols) * 3;
        let pixels = unsafe { std::slice::from_raw_parts_mut(self.data, len) };
        view_from_slice(pixels, self.rows, self.cols)
    }
}

/// Build a mutable RGB8 view over a densely packed `rows x cols x 3` slice.
///
/// # Errors
///
/// Returns `InvalidArgument` if the slice length does not match the
/// dimensions.
pub fn view_from_slice(pixels: &mut [u8], rows: u16, cols: u16) -> Result<FrameView<'_>> {
    let expected = usize::from(rows) * usize::from(cols) * 3;
    if pixels.len() != expected {
        return Err(AnnotateError::InvalidArgument(format!(
            "pixel buffer length mismatch: expected {expected}, got {}",
            pixels.len()
        )));
    }
    FrameView::from_raw(u32::from(cols), u32::from(rows), pixels).ok_or_else(|| {
        AnnotateError::ImageError("failed to construct image view over pixel buffer".to_string())
    })
}
