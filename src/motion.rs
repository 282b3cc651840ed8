//! Small numeric helpers behind the decorative effects.

use std::time::Duration;

/// Maximum card rotation in degrees on either axis.
pub const MAX_TILT: f64 = 10.0;

/// Linear map of `value` from `input` onto `output`, clamped to the output range.
pub fn interpolate(value: f64, input: (f64, f64), output: (f64, f64)) -> f64 {
    let (in_lo, in_hi) = input;
    if in_hi == in_lo {
        return output.0;
    }
    let t = ((value - in_lo) / (in_hi - in_lo)).clamp(0.0, 1.0);
    output.0 + t * (output.1 - output.0)
}

/// Card rotation `(rotate_x, rotate_y)` in degrees for a pointer at
/// (`x`, `y`) inside an element of size `width` x `height`.
///
/// The pointer is normalised to `[-0.5, 0.5]` around the element centre:
/// moving down tilts the top edge away, moving right turns the card right.
pub fn tilt(x: f64, y: f64, width: f64, height: f64) -> (f64, f64) {
    if width <= 0.0 || height <= 0.0 {
        return (0.0, 0.0);
    }
    let nx = x / width - 0.5;
    let ny = y / height - 0.5;
    let rotate_x = interpolate(ny, (-0.5, 0.5), (MAX_TILT, -MAX_TILT));
    let rotate_y = interpolate(nx, (-0.5, 0.5), (-MAX_TILT, MAX_TILT));
    (rotate_x, rotate_y)
}

pub fn tilt_style(rotate_x: f64, rotate_y: f64) -> String {
    format!("transform: perspective(1000px) rotateX({rotate_x:.2}deg) rotateY({rotate_y:.2}deg); transform-style: preserve-3d;")
}

/// Delay of the `index`th item in a staggered reveal.
pub fn stagger(base: Duration, step: Duration, index: usize) -> Duration {
    base + step * index as u32
}

/// CSS `transition-delay`/`animation-delay` value.
pub fn delay_css(delay: Duration) -> String {
    format!("{}ms", delay.as_millis())
}

/// Vertical parallax offset (px) for an element that drifts `distance` px
/// while its container scrolls through `span` px.
pub fn parallax(scroll: f64, span: f64, distance: f64) -> f64 {
    interpolate(scroll, (0.0, span), (0.0, distance))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpolate() {
        assert_eq!(interpolate(0.5, (0.0, 1.0), (0.0, 100.0)), 50.0);
        assert_eq!(interpolate(-1.0, (0.0, 1.0), (0.0, 100.0)), 0.0);
        assert_eq!(interpolate(2.0, (0.0, 1.0), (0.0, 100.0)), 100.0);
        assert_eq!(interpolate(0.25, (0.0, 0.5), (1.0, 0.0)), 0.5);
        assert_eq!(interpolate(3.0, (1.0, 1.0), (7.0, 9.0)), 7.0);
    }

    #[test]
    fn test_tilt_centre_is_flat() {
        assert_eq!(tilt(150.0, 100.0, 300.0, 200.0), (0.0, 0.0));
    }

    #[test]
    fn test_tilt_corners() {
        assert_eq!(tilt(0.0, 0.0, 300.0, 200.0), (MAX_TILT, -MAX_TILT));
        assert_eq!(tilt(300.0, 200.0, 300.0, 200.0), (-MAX_TILT, MAX_TILT));
    }

    #[test]
    fn test_tilt_is_bounded() {
        let (rx, ry) = tilt(-500.0, 9000.0, 300.0, 200.0);
        assert!(rx.abs() <= MAX_TILT && ry.abs() <= MAX_TILT);
        assert_eq!(tilt(10.0, 10.0, 0.0, 200.0), (0.0, 0.0));
    }

    #[test]
    fn test_stagger() {
        let base = Duration::from_millis(300);
        let step = Duration::from_millis(80);
        assert_eq!(stagger(base, step, 0), base);
        assert_eq!(stagger(base, step, 5), Duration::from_millis(700));
        assert_eq!(delay_css(stagger(base, step, 2)), "460ms");
    }

    #[test]
    fn test_parallax() {
        assert_eq!(parallax(0.0, 800.0, -150.0), 0.0);
        assert_eq!(parallax(400.0, 800.0, -150.0), -75.0);
        assert_eq!(parallax(5000.0, 800.0, -150.0), -150.0);
    }
}
