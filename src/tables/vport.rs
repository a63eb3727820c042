//! Default field values for VPORT table records

use crate::types::{Vector2, Vector3};

/// The fixed part of a VPORT record.
///
/// [`DxfWriter::viewport`](crate::DxfWriter::viewport) supplies only the name,
/// view center and view height; every other field comes from here.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportDefaults {
    /// Lower-left corner (10/20)
    pub lower_left: Vector2,
    /// Upper-right corner (11/21)
    pub upper_right: Vector2,
    /// Snap base point (13/23)
    pub snap_base: Vector2,
    /// Snap spacing (14/24)
    pub snap_spacing: Vector2,
    /// Grid spacing (15/25)
    pub grid_spacing: Vector2,
    /// View direction from target (16/26/36)
    pub view_direction: Vector3,
    /// View target point (17/27/37)
    pub view_target: Vector3,
    /// Aspect ratio (41)
    pub aspect_ratio: f64,
    /// Lens length (42)
    pub lens_length: f64,
    /// Front clipping plane (43)
    pub front_clip: f64,
    /// Back clipping plane (44)
    pub back_clip: f64,
    /// Snap rotation angle (50)
    pub snap_rotation: f64,
    /// View twist angle (51)
    pub view_twist: f64,
    /// View mode (71)
    pub view_mode: i16,
    /// Circle zoom percent (72)
    pub circle_zoom: i16,
    /// Fast zoom (73)
    pub fast_zoom: i16,
    /// UCSICON setting (74)
    pub ucs_icon: i16,
    /// Snap on (75)
    pub snap_on: i16,
    /// Grid on (76)
    pub grid_on: i16,
    /// Snap style (77)
    pub snap_style: i16,
    /// Snap isopair (78)
    pub snap_isopair: i16,
}

impl Default for ViewportDefaults {
    fn default() -> Self {
        ViewportDefaults {
            lower_left: Vector2::ZERO,
            upper_right: Vector2::ONE,
            snap_base: Vector2::ZERO,
            snap_spacing: Vector2::ONE,
            grid_spacing: Vector2::ZERO,
            view_direction: Vector3::UNIT_Z,
            view_target: Vector3::ZERO,
            aspect_ratio: 2.2,
            lens_length: 1.0,
            front_clip: 0.0,
            back_clip: 0.0,
            snap_rotation: 0.0,
            view_twist: 0.0,
            view_mode: 0,
            circle_zoom: 1000,
            fast_zoom: 1,
            ucs_icon: 3,
            snap_on: 0,
            grid_on: 0,
            snap_style: 0,
            snap_isopair: 0,
        }
    }
}
