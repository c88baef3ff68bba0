// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Rasterization primitives over caller-owned pixel buffers.
//!
//! The [`Rasterizer`] trait is the full capability surface the annotation
//! routines need; [`FrameCanvas`] implements it with `imageproc` drawing
//! primitives. Tests substitute a recording implementation to observe
//! draw requests without touching pixels.

use imageproc::drawing::{
    draw_filled_circle_mut, draw_filled_rect_mut, draw_hollow_circle_mut, draw_hollow_rect_mut,
    draw_line_segment_mut,
};
use imageproc::rect::Rect;

use crate::color::Color;
use crate::error::Result;
use crate::frame::{view_from_slice, FrameView};

#[cfg(feature = "text")]
use ab_glyph::PxScale;
#[cfg(feature = "text")]
use imageproc::drawing::draw_text_mut;

/// Base glyph height in pixels at text scale 1.0.
#[cfg(feature = "text")]
const BASE_TEXT_SIZE: f32 = 16.0;

/// Drawing capability surface required by the annotation routines.
///
/// All shapes are clipped to the canvas; drawing outside the bounds is a
/// no-op, never an error.
pub trait Rasterizer {
    /// Draw a circle centered at `center`. Negative `thickness` fills the
    /// circle; otherwise the outline is drawn `thickness` pixels wide,
    /// growing inward from `radius`.
    fn draw_circle(
        &mut self,
        center: (i32, i32),
        radius: i32,
        color: Color,
        thickness: i32,
    ) -> Result<()>;

    /// Draw a line segment from `start` to `end`, `thickness` pixels wide.
    fn draw_line(
        &mut self,
        start: (i32, i32),
        end: (i32, i32),
        color: Color,
        thickness: i32,
    ) -> Result<()>;

    /// Draw UTF-8 text. `origin` is the top-left corner of the first
    /// glyph, or the bottom-left corner when `bottom_left_origin` is set.
    /// `thickness` is a stroke-width hint that implementations without
    /// variable stroke rendering may ignore.
    fn draw_text(
        &mut self,
        text: &str,
        origin: (i32, i32),
        color: Color,
        scale: f32,
        thickness: f32,
        bottom_left_origin: bool,
    ) -> Result<()>;
}

/// [`Rasterizer`] backed by a mutable RGB8 view over caller memory.
pub struct FrameCanvas<'a> {
    img: FrameView<'a>,
}

impl<'a> FrameCanvas<'a> {
    /// Wrap an existing image view.
    #[must_use]
    pub fn new(img: FrameView<'a>) -> Self {
        Self { img }
    }

    /// Build a canvas over a densely packed `rows x cols x 3` slice.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the slice length does not match the
    /// dimensions.
    pub fn from_slice(pixels: &'a mut [u8], rows: u16, cols: u16) -> Result<Self> {
        Ok(Self::new(view_from_slice(pixels, rows, cols)?))
    }

    /// Draw an axis-aligned rectangle between two corners.
    ///
    /// Negative `thickness` fills the rectangle; otherwise the outline is
    /// drawn `thickness` pixels wide, growing inward. Degenerate corners
    /// (zero width or height) draw nothing.
    pub fn draw_rect(
        &mut self,
        top_left: (i32, i32),
        bottom_right: (i32, i32),
        color: Color,
        thickness: i32,
    ) {
        let (mut x1, mut y1) = top_left;
        let (mut x2, mut y2) = bottom_right;
        if x1 > x2 {
            std::mem::swap(&mut x1, &mut x2);
        }
        if y1 > y2 {
            std::mem::swap(&mut y1, &mut y2);
        }
        if x2 <= x1 || y2 <= y1 {
            return;
        }

        let rgb = color.to_rgb();
        if thickness < 0 {
            let rect = Rect::at(x1, y1).of_size((x2 - x1) as u32, (y2 - y1) as u32);
            draw_filled_rect_mut(&mut self.img, rect, rgb);
            return;
        }
        for t in 0..thickness.max(1) {
            let tx1 = (x1 + t).min(x2);
            let ty1 = (y1 + t).min(y2);
            let tx2 = (x2 - t).max(tx1);
            let ty2 = (y2 - t).max(ty1);
            if tx2 > tx1 && ty2 > ty1 {
                let rect = Rect::at(tx1, ty1).of_size((tx2 - tx1) as u32, (ty2 - ty1) as u32);
                draw_hollow_rect_mut(&mut self.img, rect, rgb);
            }
        }
    }
}

impl Rasterizer for FrameCanvas<'_> {
    fn draw_circle(
        &mut self,
        center: (i32, i32),
        radius: i32,
        color: Color,
        thickness: i32,
    ) -> Result<()> {
        if thickness < 0 {
            draw_filled_circle_mut(&mut self.img, center, radius, color.to_rgb());
        } else {
            // Outline thickness grows inward from the nominal radius
            for t in 0..thickness.max(1) {
                let r = radius - t;
                if r < 0 {
                    break;
                }
                draw_hollow_circle_mut(&mut self.img, center, r, color.to_rgb());
            }
        }
        Ok(())
    }

    fn draw_line(
        &mut self,
        start: (i32, i32),
        end: (i32, i32),
        color: Color,
        thickness: i32,
    ) -> Result<()> {
        let rgb = color.to_rgb();
        let passes = thickness.max(1);
        let shallow = (end.0 - start.0).abs() >= (end.1 - start.1).abs();
        for t in 0..passes {
            // Offset passes along the minor axis, centered on the segment
            let off = t - passes / 2;
            let (s, e) = if shallow {
                ((start.0, start.1 + off), (end.0, end.1 + off))
            } else {
                ((start.0 + off, start.1), (end.0 + off, end.1))
            };
            #[allow(clippy::cast_precision_loss)]
            draw_line_segment_mut(
                &mut self.img,
                (s.0 as f32, s.1 as f32),
                (e.0 as f32, e.1 as f32),
                rgb,
            );
        }
        Ok(())
    }

    #[cfg(feature = "text")]
    fn draw_text(
        &mut self,
        text: &str,
        origin: (i32, i32),
        color: Color,
        scale: f32,
        _thickness: f32,
        bottom_left_origin: bool,
    ) -> Result<()> {
        let font = crate::font::default_font()?;
        let px = PxScale::from(scale * BASE_TEXT_SIZE);
        #[allow(clippy::cast_possible_truncation)]
        let y = if bottom_left_origin {
            origin.1 - px.y as i32
        } else {
            origin.1
        };
        draw_text_mut(&mut self.img, color.to_rgb(), origin.0, y, px, font, text);
        Ok(())
    }

    #[cfg(not(feature = "text"))]
    fn draw_text(
        &mut self,
        _text: &str,
        _origin: (i32, i32),
        _color: Color,
        _scale: f32,
        _thickness: f32,
        _bottom_left_origin: bool,
    ) -> Result<()> {
        Err(crate::error::AnnotateError::FontError(
            "text annotations require the `text` feature".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas_pixels(rows: u16, cols: u16) -> Vec<u8> {
        vec![0u8; usize::from(rows) * usize::from(cols) * 3]
    }

    fn pixel(pixels: &[u8], cols: u16, x: u32, y: u32) -> [u8; 3] {
        let i = (y as usize * usize::from(cols) + x as usize) * 3;
        [pixels[i], pixels[i + 1], pixels[i + 2]]
    }

    #[test]
    fn test_filled_circle_writes_center() {
        let mut pixels = canvas_pixels(10, 10);
        {
            let mut canvas = FrameCanvas::from_slice(&mut pixels, 10, 10).unwrap();
            canvas.draw_circle((5, 5), 2, Color::RED, -1).unwrap();
        }
        assert_eq!(pixel(&pixels, 10, 5, 5), [255, 0, 0]);
        assert_eq!(pixel(&pixels, 10, 6, 5), [255, 0, 0]);
        // Corner stays untouched
        assert_eq!(pixel(&pixels, 10, 0, 0), [0, 0, 0]);
    }

    #[test]
    fn test_hollow_circle_leaves_center() {
        let mut pixels = canvas_pixels(16, 16);
        {
            let mut canvas = FrameCanvas::from_slice(&mut pixels, 16, 16).unwrap();
            canvas.draw_circle((8, 8), 4, Color::GREEN, 1).unwrap();
        }
        assert_eq!(pixel(&pixels, 16, 8, 8), [0, 0, 0]);
        assert_eq!(pixel(&pixels, 16, 12, 8), [0, 255, 0]);
    }

    #[test]
    fn test_line_writes_along_row() {
        let mut pixels = canvas_pixels(8, 8);
        {
            let mut canvas = FrameCanvas::from_slice(&mut pixels, 8, 8).unwrap();
            canvas.draw_line((1, 4), (6, 4), Color::BLUE, 1).unwrap();
        }
        for x in 1..=6 {
            assert_eq!(pixel(&pixels, 8, x, 4), [0, 0, 255]);
        }
        assert_eq!(pixel(&pixels, 8, 0, 4), [0, 0, 0]);
    }

    #[test]
    fn test_thick_line_covers_minor_axis() {
        let mut pixels = canvas_pixels(8, 8);
        {
            let mut canvas = FrameCanvas::from_slice(&mut pixels, 8, 8).unwrap();
            canvas.draw_line((0, 4), (7, 4), Color::WHITE, 3).unwrap();
        }
        assert_eq!(pixel(&pixels, 8, 3, 3), [255, 255, 255]);
        assert_eq!(pixel(&pixels, 8, 3, 4), [255, 255, 255]);
        assert_eq!(pixel(&pixels, 8, 3, 5), [255, 255, 255]);
    }

    #[test]
    fn test_hollow_rect_outline() {
        let mut pixels = canvas_pixels(10, 10);
        {
            let mut canvas = FrameCanvas::from_slice(&mut pixels, 10, 10).unwrap();
            canvas.draw_rect((2, 2), (7, 7), Color::RED, 1);
        }
        assert_eq!(pixel(&pixels, 10, 2, 2), [255, 0, 0]);
        assert_eq!(pixel(&pixels, 10, 7, 2), [255, 0, 0]);
        assert_eq!(pixel(&pixels, 10, 4, 4), [0, 0, 0]);
    }

    #[test]
    fn test_filled_rect_and_swapped_corners() {
        let mut pixels = canvas_pixels(10, 10);
        {
            let mut canvas = FrameCanvas::from_slice(&mut pixels, 10, 10).unwrap();
            canvas.draw_rect((7, 7), (2, 2), Color::GREEN, -1);
        }
        assert_eq!(pixel(&pixels, 10, 4, 4), [0, 255, 0]);
    }

    #[test]
    fn test_out_of_bounds_is_clipped() {
        let mut pixels = canvas_pixels(4, 4);
        let mut canvas = FrameCanvas::from_slice(&mut pixels, 4, 4).unwrap();
        canvas.draw_circle((-10, -10), 3, Color::RED, -1).unwrap();
        canvas.draw_line((-5, 2), (20, 2), Color::RED, 1).unwrap();
    }
}
