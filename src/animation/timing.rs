//! CSS timing functions for the shimmer sweep.
//!
//! The named curves are the CSS `animation-timing-function` keywords, all
//! expressed as cubic beziers, so `TimingFunction::Ease` matches what a
//! browser does for a keyframe animation without an explicit timing.

use std::str::FromStr;
use std::sync::Arc;

/// Easing applied within each sweep cycle
#[derive(Clone, Default)]
pub enum TimingFunction {
    Linear,
    /// `cubic-bezier(0.25, 0.1, 0.25, 1.0)`
    #[default]
    Ease,
    /// `cubic-bezier(0.42, 0, 1, 1)`
    EaseIn,
    /// `cubic-bezier(0, 0, 0.58, 1)`
    EaseOut,
    /// `cubic-bezier(0.42, 0, 0.58, 1)`
    EaseInOut,
    /// `cubic-bezier(x1, y1, x2, y2)`
    CubicBezier(f32, f32, f32, f32),
    Custom(Arc<dyn Fn(f32) -> f32 + Send + Sync>),
}

impl TimingFunction {
    /// Map linear progress `t` in `0.0..=1.0` through the curve.
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            TimingFunction::Linear => t,
            TimingFunction::Custom(f) => f(t),
            other => match other.control_points() {
                Some((x1, y1, x2, y2)) => cubic_bezier(t, x1, y1, x2, y2),
                None => t,
            },
        }
    }

    /// Bezier control points, `None` for linear and custom curves.
    pub fn control_points(&self) -> Option<(f32, f32, f32, f32)> {
        match *self {
            TimingFunction::Ease => Some((0.25, 0.1, 0.25, 1.0)),
            TimingFunction::EaseIn => Some((0.42, 0.0, 1.0, 1.0)),
            TimingFunction::EaseOut => Some((0.0, 0.0, 0.58, 1.0)),
            TimingFunction::EaseInOut => Some((0.42, 0.0, 0.58, 1.0)),
            TimingFunction::CubicBezier(x1, y1, x2, y2) => Some((x1, y1, x2, y2)),
            TimingFunction::Linear | TimingFunction::Custom(_) => None,
        }
    }

    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(f32) -> f32 + Send + Sync + 'static,
    {
        TimingFunction::Custom(Arc::new(f))
    }
}

impl std::fmt::Debug for TimingFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimingFunction::Linear => write!(f, "linear"),
            TimingFunction::Ease => write!(f, "ease"),
            TimingFunction::EaseIn => write!(f, "ease-in"),
            TimingFunction::EaseOut => write!(f, "ease-out"),
            TimingFunction::EaseInOut => write!(f, "ease-in-out"),
            TimingFunction::CubicBezier(x1, y1, x2, y2) => {
                write!(f, "cubic-bezier({}, {}, {}, {})", x1, y1, x2, y2)
            }
            TimingFunction::Custom(_) => write!(f, "custom"),
        }
    }
}

/// Parses the CSS keywords and `cubic-bezier(x1, y1, x2, y2)`.
impl FromStr for TimingFunction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s {
            "linear" => return Ok(TimingFunction::Linear),
            "ease" => return Ok(TimingFunction::Ease),
            "ease-in" => return Ok(TimingFunction::EaseIn),
            "ease-out" => return Ok(TimingFunction::EaseOut),
            "ease-in-out" => return Ok(TimingFunction::EaseInOut),
            _ => {}
        }

        let args = s
            .strip_prefix("cubic-bezier(")
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(|| format!("unknown timing function '{}'", s))?;
        let values = args
            .split(',')
            .map(|v| v.trim().parse::<f32>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| format!("bad cubic-bezier argument in '{}': {}", s, e))?;

        match values[..] {
            [x1, y1, x2, y2] if (0.0..=1.0).contains(&x1) && (0.0..=1.0).contains(&x2) => {
                Ok(TimingFunction::CubicBezier(x1, y1, x2, y2))
            }
            [_, _, _, _] => Err(format!("cubic-bezier x values must be in [0, 1]: '{}'", s)),
            _ => Err(format!("cubic-bezier takes four arguments: '{}'", s)),
        }
    }
}

fn cubic_bezier(x: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    let u = solve_curve_x(x, x1, x2);
    bezier_component(u, y1, y2)
}

/// One coordinate of a bezier with endpoints fixed at 0 and 1.
fn bezier_component(u: f32, p1: f32, p2: f32) -> f32 {
    let mu = 1.0 - u;
    3.0 * mu * mu * u * p1 + 3.0 * mu * u * u * p2 + u * u * u
}

fn bezier_slope(u: f32, p1: f32, p2: f32) -> f32 {
    let mu = 1.0 - u;
    3.0 * mu * mu * p1 + 6.0 * mu * u * (p2 - p1) + 3.0 * u * u * (1.0 - p2)
}

/// Curve parameter whose x equals `x`. Newton first, bisection when the slope
/// flattens out.
fn solve_curve_x(x: f32, x1: f32, x2: f32) -> f32 {
    const EPSILON: f32 = 1e-5;

    let mut u = x;
    for _ in 0..8 {
        let err = bezier_component(u, x1, x2) - x;
        if err.abs() < EPSILON {
            return u;
        }
        let slope = bezier_slope(u, x1, x2);
        if slope.abs() < 1e-6 {
            break;
        }
        u -= err / slope;
    }

    let (mut lo, mut hi) = (0.0f32, 1.0f32);
    u = x;
    for _ in 0..32 {
        let value = bezier_component(u, x1, x2);
        if (value - x).abs() < EPSILON {
            break;
        }
        if value < x {
            lo = u;
        } else {
            hi = u;
        }
        u = (lo + hi) / 2.0;
    }
    u
}
