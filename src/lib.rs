// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

#![allow(clippy::multiple_crate_versions)]

//! # Pose Annotate
//!
//! Image annotation library with a C ABI, for drawing whole-body pose
//! skeletons, circles, lines, and text onto externally owned pixel
//! buffers. Rasterization is delegated to [`imageproc`]; this crate owns
//! the 133-point skeleton topology, the keypoint buffer layout handling,
//! and the buffer-to-image-view adaptation.
//!
//! ## Features
//!
//! - **Zero-copy** - Annotations are drawn in place on caller-owned memory;
//!   the library never allocates, frees, or retains pixel data
//! - **Whole-Body Skeleton** - 133 COCO-WholeBody keypoints (body, feet,
//!   face, hands) with per-region colors and the full bone graph
//! - **Two Buffer Layouts** - Row-major `(133, 2)` and column-major
//!   `(2, 133)` keypoint buffers
//! - **Defensive C ABI** - Length-annotated buffers, null checks, and tag
//!   validation; errors are status codes, never aborts
//!
//! ## Quick Start (Library)
//!
//! ```rust
//! use pose_annotate::{
//!     draw_whole_body_skeleton, DrawSkeletonOptions, FrameCanvas, Keypoints, Layout,
//! };
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Caller-owned RGB8 pixel buffer, 480 rows x 640 cols
//!     let mut pixels = vec![0u8; 480 * 640 * 3];
//!
//!     // 133 keypoints as interleaved (x, y) pairs
//!     let points = vec![0.0f32; 133 * 2];
//!
//!     let mut canvas = FrameCanvas::from_slice(&mut pixels, 480, 640)?;
//!     let keypoints = Keypoints::new(&points, Layout::RowMajor)?;
//!     let options = DrawSkeletonOptions::new().with_landmark_radius(4);
//!     draw_whole_body_skeleton(&mut canvas, &keypoints, &options)?;
//!     Ok(())
//! }
//! ```
//!
//! ## C API
//!
//! Build with `--release` to get a `cdylib` exporting the
//! `pose_annotate_*` entry points declared in `include/pose_annotate.h`:
//!
//! ```c
//! #include <pose_annotate.h>
//!
//! float points[266] = { /* 133 x-y pairs */ };
//! pose_annotate_shared_frame_t frame = {
//!     data, rows, cols, POSE_ANNOTATE_DEPTH_U8, POSE_ANNOTATE_PIXEL_FORMAT_RGB,
//! };
//! pose_annotate_skeleton_options_t options = {
//!     POSE_ANNOTATE_LAYOUT_ROW_MAJOR, true, true, 3, -1, 2,
//! };
//! int32_t rc = pose_annotate_draw_whole_body_skeleton(frame, points, 266, options);
//! ```
//!
//! All entry points return 0 on success and a negative status code on
//! failure; the keypoint buffer length is validated, so a short buffer is
//! an error instead of an out-of-bounds read.
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`skeleton`] | Landmark/bone topology tables and the skeleton renderer |
//! | [`keypoints`] | [`Keypoints`] buffer views and [`Layout`] handling |
//! | [`frame`] | [`SharedFrame`] descriptors and pixel buffer views |
//! | [`draw`] | [`Rasterizer`] capability trait and the `imageproc` canvas |
//! | [`options`] | [`DrawSkeletonOptions`] builder |
//! | [`ffi`] | C ABI entry points |
//! | [`error`] | Error types ([`AnnotateError`], [`Result`]) |
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `text` | Text annotation support: font download and glyph rendering (default) |
//!
//! ## License
//!
//! This project is licensed under
//! [AGPL-3.0](https://www.gnu.org/licenses/agpl-3.0.html) for open-source
//! use or the [Ultralytics Enterprise License](https://ultralytics.com/license)
//! for commercial applications.

// Modules
pub mod color;
pub mod draw;
pub mod error;
pub mod ffi;
#[cfg(feature = "text")]
pub mod font;
pub mod frame;
pub mod keypoints;
pub mod logging;
pub mod options;
pub mod skeleton;

// Re-export main types for convenience
pub use color::Color;
pub use draw::{FrameCanvas, Rasterizer};
pub use error::{AnnotateError, Result};
pub use frame::{Depth, FrameView, PixelFormat, SharedFrame};
pub use keypoints::{Keypoints, Layout, NUM_KEYPOINTS};
pub use options::DrawSkeletonOptions;
pub use skeleton::{bones, draw_whole_body_skeleton, landmarks, Bone, Landmark};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
