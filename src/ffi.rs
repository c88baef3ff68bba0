// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! C ABI entry points.
//!
//! Every function returns an `i32` status code: 0 on success, a negative
//! [`AnnotateError::status_code`] on failure. Failures are also reported
//! on stderr through the logging macros. Pointer arguments are
//! null-checked and tag bytes validated before any memory is touched; the
//! keypoint buffer is passed with an explicit length and rejected when it
//! is not exactly `133 * 2` values.
//!
//! The pixel buffer is owned by the caller for its entire lifetime. Calls
//! borrow it only for their own duration and concurrent calls on the same
//! buffer must be serialized by the caller.

use std::ffi::{c_char, CStr};

use crate::draw::{FrameCanvas, Rasterizer};
use crate::error::{AnnotateError, Result};
use crate::frame::SharedFrame;
use crate::keypoints::{Keypoints, Layout};
use crate::options::DrawSkeletonOptions;
use crate::skeleton::draw_whole_body_skeleton;

/// 2-D integer vector.
#[derive(Debug, Clone, Copy)]
#[repr(C)]
pub struct Vec2i {
    pub x: i32,
    pub y: i32,
}

/// 3-component integer vector, used for RGB colors.
#[derive(Debug, Clone, Copy)]
#[repr(C)]
pub struct Vec3i {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl From<Vec3i> for crate::color::Color {
    /// Channel values are truncated to 8 bits; the C side declares them
    /// as plain ints.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn from(v: Vec3i) -> Self {
        Self(v.x as u8, v.y as u8, v.z as u8)
    }
}

/// Skeleton drawing options as they cross the C ABI.
///
/// The layout arrives as a raw tag byte so that out-of-range values can
/// be rejected instead of invoking undefined behavior.
#[derive(Debug, Clone, Copy)]
#[repr(C)]
pub struct RawSkeletonOptions {
    /// Layout tag, see [`Layout`].
    pub layout: u8,
    /// Whether to draw a circle per landmark.
    pub draw_landmarks: bool,
    /// Whether to draw a line per bone.
    pub draw_bones: bool,
    /// Landmark circle radius in pixels.
    pub landmark_radius: i32,
    /// Landmark circle outline thickness; negative draws filled.
    pub landmark_thickness: i32,
    /// Bone line width in pixels.
    pub bone_thickness: i32,
}

impl TryFrom<RawSkeletonOptions> for DrawSkeletonOptions {
    type Error = AnnotateError;

    fn try_from(raw: RawSkeletonOptions) -> Result<Self> {
        Ok(Self {
            layout: Layout::try_from(raw.layout)?,
            draw_landmarks: raw.draw_landmarks,
            draw_bones: raw.draw_bones,
            landmark_radius: raw.landmark_radius,
            landmark_thickness: raw.landmark_thickness,
            bone_thickness: raw.bone_thickness,
        })
    }
}

fn status(result: Result<()>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(err) => {
            crate::error!("{err}");
            err.status_code()
        }
    }
}

/// Toggle verbose logging for the library.
#[no_mangle]
pub extern "C" fn pose_annotate_set_verbose(verbose: bool) {
    crate::logging::set_verbose(verbose);
}

/// Draw a circle onto a caller-owned frame.
///
/// Negative `thickness` draws a filled circle.
///
/// # Safety
///
/// `frame.data` must point to a valid, densely packed pixel buffer of the
/// size implied by the descriptor, and must not be aliased for the
/// duration of the call.
#[no_mangle]
pub unsafe extern "C" fn pose_annotate_draw_circle(
    mut frame: SharedFrame,
    center: Vec2i,
    radius: i32,
    color: Vec3i,
    thickness: i32,
) -> i32 {
    status((|| {
        let mut canvas = FrameCanvas::new(unsafe { frame.view_mut() }?);
        canvas.draw_circle((center.x, center.y), radius, color.into(), thickness)
    })())
}

/// Draw an axis-aligned rectangle onto a caller-owned frame.
///
/// `a` and `b` are opposite corners in either order. Negative `thickness`
/// draws a filled rectangle.
///
/// # Safety
///
/// Same contract as [`pose_annotate_draw_circle`].
#[no_mangle]
pub unsafe extern "C" fn pose_annotate_draw_rect(
    mut frame: SharedFrame,
    a: Vec2i,
    b: Vec2i,
    color: Vec3i,
    thickness: i32,
) -> i32 {
    status((|| {
        let mut canvas = FrameCanvas::new(unsafe { frame.view_mut() }?);
        canvas.draw_rect((a.x, a.y), (b.x, b.y), color.into(), thickness);
        Ok(())
    })())
}

/// Draw a line segment onto a caller-owned frame.
///
/// # Safety
///
/// Same contract as [`pose_annotate_draw_circle`].
#[no_mangle]
pub unsafe extern "C" fn pose_annotate_draw_line(
    mut frame: SharedFrame,
    a: Vec2i,
    b: Vec2i,
    color: Vec3i,
    thickness: i32,
) -> i32 {
    status((|| {
        let mut canvas = FrameCanvas::new(unsafe { frame.view_mut() }?);
        canvas.draw_line((a.x, a.y), (b.x, b.y), color.into(), thickness)
    })())
}

/// Draw UTF-8 text onto a caller-owned frame.
///
/// `scale` multiplies the base glyph size; `bottom_left_origin` anchors
/// `pos` at the bottom-left corner of the text instead of the top-left.
///
/// # Safety
///
/// Same contract as [`pose_annotate_draw_circle`]; additionally `text`
/// must be a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn pose_annotate_put_text(
    mut frame: SharedFrame,
    text: *const c_char,
    pos: Vec2i,
    color: Vec3i,
    scale: f32,
    thickness: f32,
    bottom_left_origin: bool,
) -> i32 {
    status((|| {
        if text.is_null() {
            return Err(AnnotateError::InvalidArgument(
                "text pointer is null".to_string(),
            ));
        }
        let text = unsafe { CStr::from_ptr(text) }
            .to_str()
            .map_err(|_| AnnotateError::InvalidArgument("text is not valid UTF-8".to_string()))?;
        let mut canvas = FrameCanvas::new(unsafe { frame.view_mut() }?);
        canvas.draw_text(
            text,
            (pos.x, pos.y),
            color.into(),
            scale,
            thickness,
            bottom_left_origin,
        )
    })())
}

/// Draw the 133-point whole-body skeleton onto a caller-owned frame.
///
/// `points` must hold exactly `points_len == 133 * 2` coordinates in the
/// layout declared by `options`; any other length is rejected with an
/// invalid-argument status before the buffer is read.
///
/// # Safety
///
/// Same contract as [`pose_annotate_draw_circle`]; additionally `points`
/// must point to `points_len` valid floats.
#[no_mangle]
pub unsafe extern "C" fn pose_annotate_draw_whole_body_skeleton(
    mut frame: SharedFrame,
    points: *const f32,
    points_len: usize,
    options: RawSkeletonOptions,
) -> i32 {
    status((|| {
        if points.is_null() {
            return Err(AnnotateError::InvalidArgument(
                "keypoint buffer pointer is null".to_string(),
            ));
        }
        let options = DrawSkeletonOptions::try_from(options)?;
        let data = unsafe { std::slice::from_raw_parts(points, points_len) };
        let keypoints = Keypoints::new(data, options.layout)?;
        let mut canvas = FrameCanvas::new(unsafe { frame.view_mut() }?);
        draw_whole_body_skeleton(&mut canvas, &keypoints, &options)
    })())
}
