// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Skeleton drawing configuration.
//!
//! This module defines the [`DrawSkeletonOptions`] struct, which controls
//! which skeleton elements are drawn and how: keypoint buffer layout,
//! landmark circle sizing, and bone line width.

use crate::keypoints::Layout;

/// Configuration for whole-body skeleton drawing.
///
/// Uses a builder pattern for convenient construction.
///
/// # Example
///
/// ```rust
/// use pose_annotate::{DrawSkeletonOptions, Layout};
///
/// let options = DrawSkeletonOptions::new()
///     .with_layout(Layout::ColMajor)
///     .with_landmark_radius(5)
///     .with_bone_thickness(3);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DrawSkeletonOptions {
    /// Memory arrangement of the keypoint buffer.
    pub layout: Layout,
    /// Whether to draw a circle per landmark.
    pub draw_landmarks: bool,
    /// Whether to draw a line per bone.
    pub draw_bones: bool,
    /// Landmark circle radius in pixels.
    pub landmark_radius: i32,
    /// Landmark circle outline thickness; negative draws a filled circle.
    pub landmark_thickness: i32,
    /// Bone line width in pixels.
    pub bone_thickness: i32,
}

impl Default for DrawSkeletonOptions {
    fn default() -> Self {
        Self {
            layout: Layout::RowMajor,
            draw_landmarks: true,
            draw_bones: true,
            landmark_radius: 3,
            landmark_thickness: -1,
            bone_thickness: 2,
        }
    }
}

impl DrawSkeletonOptions {
    /// Create a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the keypoint buffer layout.
    #[must_use]
    pub const fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    /// Enable or disable landmark circles.
    #[must_use]
    pub const fn with_landmarks(mut self, draw: bool) -> Self {
        self.draw_landmarks = draw;
        self
    }

    /// Enable or disable bone lines.
    #[must_use]
    pub const fn with_bones(mut self, draw: bool) -> Self {
        self.draw_bones = draw;
        self
    }

    /// Set the landmark circle radius in pixels.
    #[must_use]
    pub const fn with_landmark_radius(mut self, radius: i32) -> Self {
        self.landmark_radius = radius;
        self
    }

    /// Set the landmark circle outline thickness.
    ///
    /// A negative value draws filled circles.
    #[must_use]
    pub const fn with_landmark_thickness(mut self, thickness: i32) -> Self {
        self.landmark_thickness = thickness;
        self
    }

    /// Set the bone line width in pixels.
    #[must_use]
    pub const fn with_bone_thickness(mut self, thickness: i32) -> Self {
        self.bone_thickness = thickness;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = DrawSkeletonOptions::default();
        assert_eq!(options.layout, Layout::RowMajor);
        assert!(options.draw_landmarks);
        assert!(options.draw_bones);
        assert_eq!(options.landmark_radius, 3);
        assert_eq!(options.landmark_thickness, -1);
        assert_eq!(options.bone_thickness, 2);
    }

    #[test]
    fn test_builder() {
        let options = DrawSkeletonOptions::new()
            .with_layout(Layout::ColMajor)
            .with_landmarks(false)
            .with_bones(true)
            .with_landmark_radius(7)
            .with_landmark_thickness(2)
            .with_bone_thickness(4);
        assert_eq!(options.layout, Layout::ColMajor);
        assert!(!options.draw_landmarks);
        assert!(options.draw_bones);
        assert_eq!(options.landmark_radius, 7);
        assert_eq!(options.landmark_thickness, 2);
        assert_eq!(options.bone_thickness, 4);
    }
}
