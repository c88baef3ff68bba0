// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Flat keypoint buffer views.
//!
//! Whole-body pose models emit 133 keypoints with two coordinates each as
//! one flat float buffer. The buffer is either row-major (coordinate pairs
//! interleaved, shape `(133, 2)`) or column-major (all x values followed
//! by all y values, shape `(2, 133)`). [`Keypoints`] wraps such a buffer
//! together with its declared [`Layout`] and resolves 1-based landmark
//! indices to integer pixel positions.

use ndarray::ArrayView2;

use crate::error::{AnnotateError, Result};

/// Number of keypoints in the whole-body set.
pub const NUM_KEYPOINTS: usize = 133;

/// Memory arrangement of a flat keypoint coordinate buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Layout {
    /// Interleaved coordinate pairs: `x` at `2i`, `y` at `2i + 1`.
    #[default]
    RowMajor = 0,
    /// All x values first: `x` at `i`, `y` at `133 + i`.
    ColMajor = 1,
}

impl Layout {
    /// Returns the string representation of the layout tag.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::RowMajor => "row-major",
            Self::ColMajor => "col-major",
        }
    }
}

impl TryFrom<u8> for Layout {
    type Error = AnnotateError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Self::RowMajor),
            1 => Ok(Self::ColMajor),
            _ => Err(AnnotateError::InvalidArgument(format!(
                "unknown layout tag {value}"
            ))),
        }
    }
}

/// Zero-copy view over a caller-owned flat buffer of 133 keypoints.
///
/// The buffer is borrowed for the lifetime of the view only; nothing is
/// retained across draw calls.
#[derive(Debug, Clone, Copy)]
pub struct Keypoints<'a> {
    view: ArrayView2<'a, f32>,
    layout: Layout,
}

impl<'a> Keypoints<'a> {
    /// Wrap a flat coordinate buffer, validating its length once.
    ///
    /// # Arguments
    ///
    /// * `data` - Flat buffer of exactly `133 * 2` values.
    /// * `layout` - Declared memory arrangement of `data`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `data` is not exactly 266 values long.
    pub fn new(data: &'a [f32], layout: Layout) -> Result<Self> {
        if data.len() != NUM_KEYPOINTS * 2 {
            return Err(AnnotateError::InvalidArgument(format!(
                "keypoint buffer length mismatch: expected {}, got {}",
                NUM_KEYPOINTS * 2,
                data.len()
            )));
        }
        let shape = match layout {
            Layout::RowMajor => (NUM_KEYPOINTS, 2),
            Layout::ColMajor => (2, NUM_KEYPOINTS),
        };
        let view = ArrayView2::from_shape(shape, data)
            .map_err(|e| AnnotateError::InvalidArgument(e.to_string()))?;
        Ok(Self { view, layout })
    }

    /// The declared layout of the underlying buffer.
    #[must_use]
    pub const fn layout(&self) -> Layout {
        self.layout
    }

    /// Resolve a 1-based landmark index to an integer pixel position.
    ///
    /// Coordinates are truncated toward zero, not rounded; sub-pixel
    /// keypoints near a pixel boundary must land on the same pixel for
    /// both layouts.
    ///
    /// # Panics
    ///
    /// Panics if `index` is 0. Landmark indices are 1-based and the
    /// topology tables guarantee the precondition, so a zero here is a
    /// programmer error rather than a recoverable condition.
    #[must_use]
    pub fn point(&self, index: u8) -> (i32, i32) {
        assert!(index > 0, "landmark indices are 1-based");
        let i = usize::from(index - 1);
        let (x, y) = match self.layout {
            Layout::RowMajor => (self.view[[i, 0]], self.view[[i, 1]]),
            Layout::ColMajor => (self.view[[0, i]], self.view[[1, i]]),
        };
        (x as i32, y as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_major_buffer() -> Vec<f32> {
        (0..NUM_KEYPOINTS)
            .flat_map(|i| [i as f32 * 2.0, i as f32 * 2.0 + 1.0])
            .collect()
    }

    fn col_major_buffer() -> Vec<f32> {
        let xs = (0..NUM_KEYPOINTS).map(|i| i as f32 * 2.0);
        let ys = (0..NUM_KEYPOINTS).map(|i| i as f32 * 2.0 + 1.0);
        xs.chain(ys).collect()
    }

    #[test]
    fn test_layouts_agree_for_all_indices() {
        let row = row_major_buffer();
        let col = col_major_buffer();
        let row_kps = Keypoints::new(&row, Layout::RowMajor).unwrap();
        let col_kps = Keypoints::new(&col, Layout::ColMajor).unwrap();

        for index in 1..=NUM_KEYPOINTS as u8 {
            assert_eq!(row_kps.point(index), col_kps.point(index));
        }
    }

    #[test]
    fn test_truncates_toward_zero() {
        let mut data = vec![0.0f32; NUM_KEYPOINTS * 2];
        data[0] = 3.9;
        data[1] = -3.9;
        let kps = Keypoints::new(&data, Layout::RowMajor).unwrap();
        assert_eq!(kps.point(1), (3, -3));
    }

    #[test]
    fn test_length_validation() {
        let short = vec![0.0f32; NUM_KEYPOINTS * 2 - 1];
        let long = vec![0.0f32; NUM_KEYPOINTS * 2 + 1];
        let exact = vec![0.0f32; NUM_KEYPOINTS * 2];

        assert!(matches!(
            Keypoints::new(&short, Layout::RowMajor),
            Err(AnnotateError::InvalidArgument(_))
        ));
        assert!(matches!(
            Keypoints::new(&long, Layout::ColMajor),
            Err(AnnotateError::InvalidArgument(_))
        ));
        assert!(Keypoints::new(&exact, Layout::RowMajor).is_ok());
    }

    #[test]
    #[should_panic(expected = "1-based")]
    fn test_zero_index_is_fatal() {
        let data = vec![0.0f32; NUM_KEYPOINTS * 2];
        let kps = Keypoints::new(&data, Layout::RowMajor).unwrap();
        let _ = kps.point(0);
    }

    #[test]
    fn test_col_major_positions() {
        let mut data = vec![0.0f32; NUM_KEYPOINTS * 2];
        // keypoint 5 (1-based): x at slot 4, y at slot 133 + 4
        data[4] = 40.0;
        data[NUM_KEYPOINTS + 4] = 50.0;
        let kps = Keypoints::new(&data, Layout::ColMajor).unwrap();
        assert_eq!(kps.point(5), (40, 50));
    }
}
