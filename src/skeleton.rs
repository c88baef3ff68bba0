// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Whole-body skeleton topology and rendering.
//!
//! The 133-point whole-body keypoint set covers the body (1-17), feet
//! (18-23), face (24-91), and hands (92-133). The tables below are the
//! fixed catalog of landmarks and of the bones connecting them, each
//! tagged with a body-region color. No edges are defined among face or
//! foot landmarks; feet attach to the skeleton through the ankles only.

use crate::color::Color;
use crate::draw::Rasterizer;
use crate::error::Result;
use crate::keypoints::Keypoints;
use crate::options::DrawSkeletonOptions;

/// Region color for the trunk, shoulders, and head attachment.
pub const SPINE: Color = Color(138, 201, 38);
/// Region color for the arms.
pub const ARMS: Color = Color(255, 202, 58);
/// Region color for the legs and pelvis.
pub const LEGS: Color = Color(25, 130, 196);
/// Region color for the hands.
pub const FINGERS: Color = Color(255, 0, 0);
/// Region color for the face.
pub const FACE: Color = Color(255, 200, 0);
/// Region color for the feet.
pub const FOOT: Color = Color(255, 128, 0);

/// A single anatomical keypoint with a fixed 1-based index and region color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Landmark {
    /// 1-based index into the 133-point keypoint set.
    pub index: u8,
    /// Region color used when drawing this landmark.
    pub color: Color,
}

impl Landmark {
    /// 0-based position of this landmark in a keypoint buffer.
    ///
    /// # Panics
    ///
    /// Panics if the index is 0. The tables only hold 1-based indices, so
    /// a zero here is a build-time defect rather than a runtime error.
    #[must_use]
    pub const fn base_0_index(&self) -> u8 {
        assert!(self.index > 0);
        self.index - 1
    }
}

/// A directed visual edge between two landmarks, with a region color.
///
/// Both endpoints must reference defined landmarks; no cycle or
/// uniqueness invariant is enforced beyond that.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bone {
    /// 1-based index of the start landmark.
    pub start: u8,
    /// 1-based index of the end landmark.
    pub end: u8,
    /// Region color used when drawing this bone.
    pub color: Color,
}

impl Bone {
    /// 0-based position of the start landmark in a keypoint buffer.
    ///
    /// # Panics
    ///
    /// Panics if the start index is 0.
    #[must_use]
    pub const fn base_0_start(&self) -> u8 {
        assert!(self.start > 0);
        self.start - 1
    }

    /// 0-based position of the end landmark in a keypoint buffer.
    ///
    /// # Panics
    ///
    /// Panics if the end index is 0.
    #[must_use]
    pub const fn base_0_end(&self) -> u8 {
        assert!(self.end > 0);
        self.end - 1
    }
}

const fn lm(index: u8, color: Color) -> Landmark {
    Landmark { index, color }
}

const fn bone(start: u8, end: u8, color: Color) -> Bone {
    Bone { start, end, color }
}

/// Body landmarks (indices 1-17).
pub const BODY_LANDMARKS: [Landmark; 17] = [
    lm(1, SPINE),  // nose
    lm(2, SPINE),  // left eye
    lm(3, SPINE),  // right eye
    lm(4, SPINE),  // left ear
    lm(5, SPINE),  // right ear
    lm(6, ARMS),   // left shoulder
    lm(7, ARMS),   // right shoulder
    lm(8, ARMS),   // left elbow
    lm(9, ARMS),   // right elbow
    lm(10, ARMS),  // left wrist
    lm(11, ARMS),  // right wrist
    lm(12, LEGS),  // left hip
    lm(13, LEGS),  // right hip
    lm(14, LEGS),  // left knee
    lm(15, LEGS),  // right knee
    lm(16, LEGS),  // left ankle
    lm(17, LEGS),  // right ankle
];

/// Foot landmarks (indices 18-23).
pub const FOOT_LANDMARKS: [Landmark; 6] = [
    lm(18, FOOT), // left big toe
    lm(19, FOOT), // left small toe
    lm(20, FOOT), // left heel
    lm(21, FOOT), // right big toe
    lm(22, FOOT), // right small toe
    lm(23, FOOT), // right heel
];

/// Face landmarks (indices 24-91).
pub const FACE_LANDMARKS: [Landmark; 68] = [
    // chin contour
    lm(24, FACE),
    lm(25, FACE),
    lm(26, FACE),
    lm(27, FACE),
    lm(28, FACE),
    lm(29, FACE),
    lm(30, FACE),
    lm(31, FACE),
    lm(32, FACE),
    lm(33, FACE),
    lm(34, FACE),
    lm(35, FACE),
    lm(36, FACE),
    lm(37, FACE),
    lm(38, FACE),
    lm(39, FACE),
    lm(40, FACE),
    // right eyebrow
    lm(41, FACE),
    lm(42, FACE),
    lm(43, FACE),
    lm(44, FACE),
    lm(45, FACE),
    // left eyebrow
    lm(46, FACE),
    lm(47, FACE),
    lm(48, FACE),
    lm(49, FACE),
    lm(50, FACE),
    // nasal bridge
    lm(51, FACE),
    lm(52, FACE),
    lm(53, FACE),
    lm(54, FACE),
    // nasal base
    lm(55, FACE),
    lm(56, FACE),
    lm(57, FACE),
    lm(58, FACE),
    lm(59, FACE),
    // right eye
    lm(60, FACE),
    lm(61, FACE),
    lm(62, FACE),
    lm(63, FACE),
    lm(64, FACE),
    lm(65, FACE),
    // left eye
    lm(66, FACE),
    lm(67, FACE),
    lm(68, FACE),
    lm(69, FACE),
    lm(70, FACE),
    lm(71, FACE),
    // lips
    lm(72, FACE),
    lm(73, FACE),
    lm(74, FACE),
    lm(75, FACE),
    lm(76, FACE),
    lm(77, FACE),
    lm(78, FACE),
    lm(79, FACE),
    lm(80, FACE),
    lm(81, FACE),
    lm(82, FACE),
    lm(83, FACE),
    lm(84, FACE),
    lm(85, FACE),
    lm(86, FACE),
    lm(87, FACE),
    lm(88, FACE),
    lm(89, FACE),
    lm(90, FACE),
    lm(91, FACE),
];

/// Hand landmarks (indices 92-133), right hand then left hand.
pub const HAND_LANDMARKS: [Landmark; 42] = [
    // right hand
    lm(92, FINGERS),  // right wrist
    lm(93, FINGERS),  // right thumb metacarpal
    lm(94, FINGERS),  // right thumb mcp
    lm(95, FINGERS),  // right thumb ip
    lm(96, FINGERS),  // right thumb tip
    lm(97, FINGERS),  // right index metacarpal
    lm(98, FINGERS),  // right index mcp
    lm(99, FINGERS),  // right index pip
    lm(100, FINGERS), // right index tip
    lm(101, FINGERS), // right middle metacarpal
    lm(102, FINGERS), // right middle mcp
    lm(103, FINGERS), // right middle pip
    lm(104, FINGERS), // right middle tip
    lm(105, FINGERS), // right ring metacarpal
    lm(106, FINGERS), // right ring mcp
    lm(107, FINGERS), // right ring pip
    lm(108, FINGERS), // right ring tip
    lm(109, FINGERS), // right pinky metacarpal
    lm(110, FINGERS), // right pinky mcp
    lm(111, FINGERS), // right pinky pip
    lm(112, FINGERS), // right pinky tip
    // left hand
    lm(113, FINGERS), // left wrist
    lm(114, FINGERS), // left thumb metacarpal
    lm(115, FINGERS), // left thumb mcp
    lm(116, FINGERS), // left thumb ip
    lm(117, FINGERS), // left thumb tip
    lm(118, FINGERS), // left index metacarpal
    lm(119, FINGERS), // left index mcp
    lm(120, FINGERS), // left index pip
    lm(121, FINGERS), // left index tip
    lm(122, FINGERS), // left middle metacarpal
    lm(123, FINGERS), // left middle mcp
    lm(124, FINGERS), // left middle pip
    lm(125, FINGERS), // left middle tip
    lm(126, FINGERS), // left ring metacarpal
    lm(127, FINGERS), // left ring mcp
    lm(128, FINGERS), // left ring pip
    lm(129, FINGERS), // left ring tip
    lm(130, FINGERS), // left pinky metacarpal
    lm(131, FINGERS), // left pinky mcp
    lm(132, FINGERS), // left pinky pip
    lm(133, FINGERS), // left pinky tip
];

/// Body bones, including the ankle-to-foot attachments.
pub const BODY_BONES: [Bone; 23] = [
    bone(16, 14, LEGS),  // left tibia
    bone(14, 12, LEGS),  // left femur
    bone(17, 15, LEGS),  // right tibia
    bone(15, 13, LEGS),  // right femur
    bone(12, 13, LEGS),  // pelvis
    bone(6, 12, SPINE),  // left contour
    bone(7, 13, SPINE),  // right contour
    bone(6, 7, SPINE),   // clavicle
    bone(6, 8, ARMS),    // left humerus
    bone(8, 10, ARMS),   // left radius
    bone(7, 9, ARMS),    // right humerus
    bone(9, 11, ARMS),   // right radius
    bone(2, 3, FACE),    // head
    bone(1, 2, FACE),    // left eye
    bone(1, 3, FACE),    // right eye
    bone(2, 4, FACE),    // left ear
    bone(3, 5, FACE),    // right ear
    bone(16, 18, FOOT),  // left foot toe
    bone(16, 19, FOOT),  // left foot small toe
    bone(16, 20, FOOT),  // left foot heel
    bone(17, 21, FOOT),  // right foot toe
    bone(17, 22, FOOT),  // right foot small toe
    bone(17, 23, FOOT),  // right foot heel
];

/// Hand bones, right hand then left hand.
pub const HAND_BONES: [Bone; 38] = [
    // right hand
    bone(92, 93, FINGERS),   // right thumb metacarpal
    bone(93, 94, FINGERS),   // right thumb proximal phalanx
    bone(94, 95, FINGERS),   // right thumb distal phalanx
    bone(92, 97, FINGERS),   // right index metacarpal
    bone(97, 98, FINGERS),   // right index proximal phalanx
    bone(98, 99, FINGERS),   // right index middle phalanx
    bone(99, 100, FINGERS),  // right index distal phalanx
    bone(92, 101, FINGERS),  // right middle metacarpal
    bone(101, 102, FINGERS), // right middle proximal phalanx
    bone(102, 103, FINGERS), // right middle middle phalanx
    bone(103, 104, FINGERS), // right middle distal phalanx
    bone(92, 105, FINGERS),  // right ring metacarpal
    bone(105, 106, FINGERS), // right ring proximal phalanx
    bone(106, 107, FINGERS), // right ring middle phalanx
    bone(107, 108, FINGERS), // right ring distal phalanx
    bone(92, 109, FINGERS),  // right pinky metacarpal
    bone(109, 110, FINGERS), // right pinky proximal phalanx
    bone(110, 111, FINGERS), // right pinky middle phalanx
    bone(111, 112, FINGERS), // right pinky distal phalanx
    // left hand
    bone(113, 114, FINGERS), // left thumb metacarpal
    bone(114, 115, FINGERS), // left thumb proximal phalanx
    bone(115, 116, FINGERS), // left thumb distal phalanx
    bone(113, 118, FINGERS), // left index metacarpal
    bone(118, 119, FINGERS), // left index proximal phalanx
    bone(119, 120, FINGERS), // left index middle phalanx
    bone(120, 121, FINGERS), // left index distal phalanx
    bone(113, 122, FINGERS), // left middle metacarpal
    bone(122, 123, FINGERS), // left middle proximal phalanx
    bone(123, 124, FINGERS), // left middle middle phalanx
    bone(124, 125, FINGERS), // left middle distal phalanx
    bone(113, 126, FINGERS), // left ring metacarpal
    bone(126, 127, FINGERS), // left ring proximal phalanx
    bone(127, 128, FINGERS), // left ring middle phalanx
    bone(128, 129, FINGERS), // left ring distal phalanx
    bone(113, 130, FINGERS), // left pinky metacarpal
    bone(130, 131, FINGERS), // left pinky proximal phalanx
    bone(131, 132, FINGERS), // left pinky middle phalanx
    bone(132, 133, FINGERS), // left pinky distal phalanx
];

/// All 133 landmarks in drawing order: body, foot, face, hand.
///
/// The order matches the index ordering 1..133.
pub fn landmarks() -> impl Iterator<Item = &'static Landmark> {
    BODY_LANDMARKS
        .iter()
        .chain(&FOOT_LANDMARKS)
        .chain(&FACE_LANDMARKS)
        .chain(&HAND_LANDMARKS)
}

/// All bones in drawing order: body bones, then hand bones.
pub fn bones() -> impl Iterator<Item = &'static Bone> {
    BODY_BONES.iter().chain(&HAND_BONES)
}

/// Draw the whole-body skeleton onto `canvas`.
///
/// Bones are drawn first, then landmark circles, each in topology order;
/// later shapes paint over earlier ones. If an error occurs mid-iteration
/// the target buffer may be left partially drawn — there is no atomicity
/// guarantee across shapes within one call.
///
/// # Errors
///
/// Propagates any error raised by the canvas.
pub fn draw_whole_body_skeleton<C: Rasterizer>(
    canvas: &mut C,
    keypoints: &Keypoints<'_>,
    options: &DrawSkeletonOptions,
) -> Result<()> {
    if options.draw_bones {
        for b in bones() {
            let start = keypoints.point(b.start);
            let end = keypoints.point(b.end);
            canvas.draw_line(start, end, b.color, options.bone_thickness)?;
        }
    }

    if options.draw_landmarks {
        for l in landmarks() {
            let center = keypoints.point(l.index);
            canvas.draw_circle(
                center,
                options.landmark_radius,
                l.color,
                options.landmark_thickness,
            )?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keypoints::NUM_KEYPOINTS;
    use std::collections::HashSet;

    #[test]
    fn test_landmark_count_and_contiguity() {
        let indices: Vec<u8> = landmarks().map(|l| l.index).collect();
        assert_eq!(indices.len(), NUM_KEYPOINTS);

        let unique: HashSet<u8> = indices.iter().copied().collect();
        assert_eq!(unique.len(), NUM_KEYPOINTS);

        // Iteration order matches the 1..=133 index ordering
        for (slot, index) in indices.iter().enumerate() {
            assert_eq!(usize::from(*index), slot + 1);
        }
    }

    #[test]
    fn test_bone_endpoints_are_defined_landmarks() {
        for b in bones() {
            assert!((1..=NUM_KEYPOINTS as u8).contains(&b.start));
            assert!((1..=NUM_KEYPOINTS as u8).contains(&b.end));
        }
    }

    #[test]
    fn test_no_face_or_foot_only_bones() {
        let face = 24..=91u8;
        let foot = 18..=23u8;
        for b in bones() {
            assert!(!(face.contains(&b.start) && face.contains(&b.end)));
            assert!(!(foot.contains(&b.start) && foot.contains(&b.end)));
        }
    }

    #[test]
    fn test_bone_counts() {
        assert_eq!(BODY_BONES.len(), 23);
        assert_eq!(HAND_BONES.len(), 38);
        assert_eq!(bones().count(), 61);
    }

    #[test]
    fn test_base_0_conversion() {
        assert_eq!(BODY_LANDMARKS[0].base_0_index(), 0);
        assert_eq!(HAND_LANDMARKS[41].base_0_index(), 132);
        assert_eq!(BODY_BONES[0].base_0_start(), 15);
        assert_eq!(BODY_BONES[0].base_0_end(), 13);
    }

    #[test]
    #[should_panic]
    fn test_base_0_rejects_zero_index() {
        let bogus = Landmark {
            index: 0,
            color: SPINE,
        };
        let _ = bogus.base_0_index();
    }

    #[test]
    fn test_region_colors() {
        assert_eq!(BODY_LANDMARKS[0].color, SPINE);
        assert_eq!(BODY_LANDMARKS[5].color, ARMS);
        assert_eq!(BODY_LANDMARKS[11].color, LEGS);
        assert_eq!(FOOT_LANDMARKS[0].color, FOOT);
        assert_eq!(FACE_LANDMARKS[0].color, FACE);
        assert_eq!(HAND_LANDMARKS[0].color, FINGERS);
    }
}
