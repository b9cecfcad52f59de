//! Viewport breakpoint shared by the navbar's desktop and mobile layouts.

/// Width (logical pixels) at and above which the inline desktop nav is shown
/// and the mobile collapse is forced shut.
pub const BREAKPOINT_PX: f64 = 960.0;

/// `true` when `width` is at or past the desktop breakpoint.
pub fn is_wide(width: f64) -> bool {
    width.is_finite() && width >= BREAKPOINT_PX
}
