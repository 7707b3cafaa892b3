pub const MIN_ZOOM: f32 = 0.5;
pub const MAX_ZOOM: f32 = 5.0;
/// One Ctrl+'+'/'-' press or one Ctrl+wheel notch.
pub const ZOOM_STEP: f32 = 0.1;

/// Text zoom factor of a tab, always within `[MIN_ZOOM, MAX_ZOOM]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Zoom(f32);

impl Default for Zoom {
    fn default() -> Self {
        Zoom(1.0)
    }
}

impl Zoom {
    pub fn new(factor: f32) -> Self {
        Zoom(clamp_factor(factor))
    }

    pub fn factor(self) -> f32 {
        self.0
    }

    /// Zoom after applying `delta`, rounded to hundredths so repeated
    /// steps don't drift. A `delta` under 0.005 leaves the factor unchanged.
    pub fn adjusted(self, delta: f32) -> Self {
        let raw = ((self.0 + delta) * 100.0).round() / 100.0;
        Zoom(clamp_factor(raw))
    }

    /// Point size to render at for a given base size.
    pub fn text_size(self, base: u32) -> i32 {
        ((base as f32 * self.0).round() as i32).max(1)
    }
}

fn clamp_factor(factor: f32) -> f32 {
    if factor.is_nan() {
        return 1.0;
    }
    factor.clamp(MIN_ZOOM, MAX_ZOOM)
}

/// Zoom delta for a wheel movement: sign only, one step per event.
pub fn wheel_delta(notches: i32) -> f32 {
    match notches.signum() {
        1 => ZOOM_STEP,
        -1 => -ZOOM_STEP,
        _ => 0.0,
    }
}
