//! Polyline flags

use bitflags::bitflags;

bitflags! {
    /// Polyline flags (DXF group code 70)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct PolylineFlags: i16 {
        /// Closed polyline
        const CLOSED = 1;
        /// Curve-fit vertices added
        const CURVE_FIT = 2;
        /// Spline-fit vertices added
        const SPLINE_FIT = 4;
        /// 3D polyline
        const POLYLINE_3D = 8;
    }
}

/// Value of group code 66 ("vertices follow") on a POLYLINE record
pub const VERTICES_FOLLOW: i16 = 1;
