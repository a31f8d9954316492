//! Easing curves and index transitions.

use std::fmt;

/// Easing functions, expressed the way CSS timing functions are.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    /// Linear interpolation (no easing).
    LinearEasing,
    /// CSS `ease`.
    Ease,
    /// CSS `ease-in`.
    EaseIn,
    /// CSS `ease-out`.
    EaseOut,
    /// CSS `ease-in-out`.
    EaseInOut,
    /// Fast out, slow in (material design standard).
    FastOutSlowInEasing,
    /// Arbitrary `cubic-bezier(x1, y1, x2, y2)`.
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    /// Easing used for committed slide changes.
    pub const SWIPE: Easing = Easing::CubicBezier(0.15, 0.3, 0.25, 1.0);

    /// Apply the easing function to a linear fraction [0, 1].
    pub fn transform(&self, fraction: f32) -> f32 {
        match *self {
            Easing::LinearEasing => fraction.clamp(0.0, 1.0),
            Easing::Ease => cubic_bezier(0.25, 0.1, 0.25, 1.0, fraction),
            Easing::EaseIn => cubic_bezier(0.42, 0.0, 1.0, 1.0, fraction),
            Easing::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, fraction),
            Easing::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, fraction),
            Easing::FastOutSlowInEasing => cubic_bezier(0.4, 0.0, 0.2, 1.0, fraction),
            Easing::CubicBezier(x1, y1, x2, y2) => cubic_bezier(x1, y1, x2, y2, fraction),
        }
    }

    /// CSS timing-function spelling.
    pub fn as_css(&self) -> String {
        match *self {
            Easing::LinearEasing => "linear".to_string(),
            Easing::Ease => "ease".to_string(),
            Easing::EaseIn => "ease-in".to_string(),
            Easing::EaseOut => "ease-out".to_string(),
            Easing::EaseInOut => "ease-in-out".to_string(),
            Easing::FastOutSlowInEasing => "cubic-bezier(0.4, 0, 0.2, 1)".to_string(),
            Easing::CubicBezier(x1, y1, x2, y2) => {
                format!("cubic-bezier({x1}, {y1}, {x2}, {y2})")
            }
        }
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_css())
    }
}

/// Cubic bezier curve approximation for easing.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, fraction: f32) -> f32 {
    if fraction <= 0.0 {
        return 0.0;
    }
    if fraction >= 1.0 {
        return 1.0;
    }

    let cx = 3.0 * x1;
    let bx = 3.0 * (x2 - x1) - cx;
    let ax = 1.0 - cx - bx;

    let cy = 3.0 * y1;
    let by = 3.0 * (y2 - y1) - cy;
    let ay = 1.0 - cy - by;

    fn sample_curve(a: f32, b: f32, c: f32, t: f32) -> f32 {
        ((a * t + b) * t + c) * t
    }

    fn sample_derivative(a: f32, b: f32, c: f32, t: f32) -> f32 {
        (3.0 * a * t + 2.0 * b) * t + c
    }

    // Newton-Raphson for the parametric `t` of the requested x, clamped to
    // [0, 1].
    let mut t = fraction;
    let mut newton_success = false;
    for _ in 0..8 {
        let x = sample_curve(ax, bx, cx, t) - fraction;
        if x.abs() < 1e-6 {
            newton_success = true;
            break;
        }
        let dx = sample_derivative(ax, bx, cx, t);
        if dx.abs() < 1e-6 {
            break;
        }
        t = (t - x / dx).clamp(0.0, 1.0);
    }

    if !newton_success {
        let mut t0 = 0.0;
        let mut t1 = 1.0;
        t = fraction;
        for _ in 0..16 {
            let x = sample_curve(ax, bx, cx, t);
            let delta = x - fraction;
            if delta.abs() < 1e-6 {
                break;
            }
            if delta > 0.0 {
                t1 = t;
            } else {
                t0 = t;
            }
            t = 0.5 * (t0 + t1);
        }
    }

    sample_curve(ay, by, cy, t)
}

/// Duration, easing and delay of the transition applied when an index is
/// committed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionSpec {
    /// Duration in milliseconds.
    pub duration_millis: u64,
    /// Easing function to apply.
    pub easing: Easing,
    /// Delay before starting animation in milliseconds.
    pub delay_millis: u64,
}

impl TransitionSpec {
    /// Create a tween with duration and easing.
    pub fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
            delay_millis: 0,
        }
    }

    /// A zero-length transition, applied while dragging.
    pub fn instant() -> Self {
        Self::tween(0, Easing::Ease)
    }

    /// Add a delay before the animation starts.
    pub fn with_delay(mut self, delay_millis: u64) -> Self {
        self.delay_millis = delay_millis;
        self
    }

    pub fn with_duration(mut self, duration_millis: u64) -> Self {
        self.duration_millis = duration_millis;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn total_millis(&self) -> u64 {
        self.delay_millis.saturating_add(self.duration_millis)
    }

    /// CSS `transition` shorthand for one property, e.g.
    /// `transform 0.35s cubic-bezier(0.15, 0.3, 0.25, 1) 0s`.
    pub fn css_transition(&self, property: &str) -> String {
        format!(
            "{property} {} {} {}",
            format_seconds(self.duration_millis),
            self.easing.as_css(),
            format_seconds(self.delay_millis)
        )
    }
}

impl Default for TransitionSpec {
    fn default() -> Self {
        Self::tween(350, Easing::SWIPE)
    }
}

fn format_seconds(millis: u64) -> String {
    format!("{}s", millis as f64 / 1000.0)
}

/// Time-driven interpolation between two fractional indices.
///
/// Renderers without CSS transitions advance this with frame deltas and
/// notify the gesture controller once [`IndexTransition::is_finished`]
/// becomes true.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndexTransition {
    from: f32,
    to: f32,
    spec: TransitionSpec,
    elapsed_millis: u64,
}

impl IndexTransition {
    pub fn new(from: f32, to: f32, spec: TransitionSpec) -> Self {
        Self {
            from,
            to,
            spec,
            elapsed_millis: 0,
        }
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    /// Advance the clock and return the new value.
    pub fn advance(&mut self, delta_millis: u64) -> f32 {
        self.elapsed_millis = self.elapsed_millis.saturating_add(delta_millis);
        self.value()
    }

    pub fn value(&self) -> f32 {
        if self.elapsed_millis <= self.spec.delay_millis {
            return if self.spec.duration_millis == 0 && self.spec.delay_millis == 0 {
                self.to
            } else {
                self.from
            };
        }
        if self.spec.duration_millis == 0 {
            return self.to;
        }
        let running = self.elapsed_millis - self.spec.delay_millis;
        let fraction = (running as f32 / self.spec.duration_millis as f32).min(1.0);
        let eased = self.spec.easing.transform(fraction);
        self.from + (self.to - self.from) * eased
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed_millis >= self.spec.total_millis()
    }
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
