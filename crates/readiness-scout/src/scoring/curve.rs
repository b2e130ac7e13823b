/// Monotonic piecewise-linear normalization with an exponential tail.
///
/// Inputs at or below the first knot map to the first knot's value, so a
/// zero count still scores the curve's baseline. Between knots the value is
/// interpolated linearly. Past the last knot the value approaches `ceiling`
/// asymptotically with the given `tail_scale` and never exceeds it.
#[derive(Debug, Clone, Copy)]
pub struct Curve {
    knots: &'static [(f64, f64)],
    ceiling: f64,
    tail_scale: f64,
}

impl Curve {
    /// Knots must be strictly increasing in `x` and non-decreasing in `y`,
    /// and the last `y` must not exceed `ceiling`.
    pub const fn new(knots: &'static [(f64, f64)], ceiling: f64, tail_scale: f64) -> Self {
        Self {
            knots,
            ceiling,
            tail_scale,
        }
    }

    pub fn apply(&self, raw: f64) -> f64 {
        let Some(&(first_x, first_y)) = self.knots.first() else {
            return 0.0;
        };
        let x = if raw.is_nan() { first_x } else { raw };

        if x <= first_x {
            return first_y.clamp(0.0, 100.0);
        }

        for pair in self.knots.windows(2) {
            let [(x0, y0), (x1, y1)] = [pair[0], pair[1]];
            if x <= x1 {
                let t = (x - x0) / (x1 - x0);
                return (y0 + t * (y1 - y0)).clamp(0.0, 100.0);
            }
        }

        let (last_x, last_y) = self.knots[self.knots.len() - 1];
        let headroom = (self.ceiling - last_y).max(0.0);
        let progress = 1.0 - (-(x - last_x) / self.tail_scale).exp();
        (last_y + headroom * progress).clamp(0.0, 100.0)
    }

    pub fn baseline(&self) -> f64 {
        self.apply(f64::NEG_INFINITY)
    }
}

/// Count-to-score helper for evaluators working on integer counters.
pub fn score_count(curve: &Curve, count: usize) -> f64 {
    curve.apply(count as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: Curve = Curve::new(&[(0.0, 20.0), (5.0, 40.0), (20.0, 60.0)], 100.0, 10.0);

    #[test]
    fn zero_maps_to_nonzero_baseline() {
        assert_eq!(SAMPLE.apply(0.0), 20.0);
        assert_eq!(SAMPLE.apply(-3.0), 20.0);
        assert_eq!(SAMPLE.baseline(), 20.0);
    }

    #[test]
    fn interpolates_between_knots() {
        assert!((SAMPLE.apply(2.5) - 30.0).abs() < 1e-9);
        assert!((SAMPLE.apply(20.0) - 60.0).abs() < 1e-9);
    }

    #[test]
    fn tail_saturates_below_ceiling() {
        let far = SAMPLE.apply(1_000.0);
        assert!(far > 99.0);
        assert!(far <= 100.0);
        assert!(SAMPLE.apply(30.0) < SAMPLE.apply(40.0));
    }

    #[test]
    fn curve_is_monotonic() {
        let mut previous = SAMPLE.apply(0.0);
        for step in 1..=2_000 {
            let value = SAMPLE.apply(step as f64 * 0.1);
            assert!(value >= previous, "curve decreased at {step}");
            previous = value;
        }
    }

    #[test]
    fn non_finite_inputs_stay_in_range() {
        assert_eq!(SAMPLE.apply(f64::NAN), 20.0);
        assert_eq!(SAMPLE.apply(f64::INFINITY), 100.0);
    }
}
