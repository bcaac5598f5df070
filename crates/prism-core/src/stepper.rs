//! Drag-to-adjust stepping rule.
//!
//! A drag label moves its value by one fixed step per drag event. Only the
//! sign of the horizontal delta is used, so drag speed has no effect:
//!
//! ```text
//!   delta_x > 0   →  value + step
//!   delta_x <= 0  →  value − step
//!
//!   out = clamp(value ± step, min, max)
//! ```

use crate::param::ParamRange;

/// Direction of a single drag event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragDirection {
    Increase,
    Decrease,
}

impl DragDirection {
    /// Classify a horizontal pointer delta. Anything not strictly positive,
    /// including zero (a purely vertical drag) and NaN, steps down.
    pub fn from_delta(delta_x: f32) -> Self {
        if delta_x > 0.0 {
            Self::Increase
        } else {
            Self::Decrease
        }
    }
}

/// Fixed-step stepper bound to a field range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragStepper {
    range: ParamRange,
    step: f32,
}

impl DragStepper {
    /// Stepper using the range's default step, `(max - min) / 50`.
    pub fn new(range: ParamRange) -> Self {
        Self {
            range,
            step: range.default_step(),
        }
    }

    /// Stepper with an explicit step. The sign of `step` is ignored.
    pub fn with_step(range: ParamRange, step: f32) -> Self {
        Self {
            range,
            step: step.abs(),
        }
    }

    pub fn range(&self) -> ParamRange {
        self.range
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    /// Apply one drag event with horizontal delta `delta_x` to `value`.
    pub fn apply(&self, value: f32, delta_x: f32) -> f32 {
        let next = match DragDirection::from_delta(delta_x) {
            DragDirection::Increase => value + self.step,
            DragDirection::Decrease => value - self.step,
        };
        self.range.clamp(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_sign_of_delta_matters() {
        let stepper = DragStepper::new(ParamRange::UNIT);
        let slow = stepper.apply(0.5, 0.01);
        let fast = stepper.apply(0.5, 250.0);
        assert_eq!(slow, fast);
        assert!((slow - 0.52).abs() < 1e-6);

        let back = stepper.apply(0.5, -3.0);
        assert!((back - 0.48).abs() < 1e-6);
    }

    #[test]
    fn test_zero_delta_steps_down() {
        let stepper = DragStepper::new(ParamRange::UNIT);
        assert!((stepper.apply(0.5, 0.0) - 0.48).abs() < 1e-6);
        assert!((stepper.apply(0.5, -0.0) - 0.48).abs() < 1e-6);
        assert!((stepper.apply(0.5, f32::NAN) - 0.48).abs() < 1e-6);
        assert_eq!(DragDirection::from_delta(0.0), DragDirection::Decrease);

        let offset = DragStepper::new(ParamRange::MATRIX_OFFSET);
        assert!((offset.apply(100.0, 0.0) - 94.9).abs() < 1e-4);
        assert_eq!(offset.apply(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_repeated_drag_saturates_at_max() {
        let stepper = DragStepper::new(ParamRange::MATRIX_COEFFICIENT);
        let mut v = -0.37;
        for _ in 0..200 {
            v = stepper.apply(v, 1.0);
        }
        assert_eq!(v, 1.0);
        assert_eq!(stepper.apply(v, 1.0), 1.0);
    }

    #[test]
    fn test_repeated_drag_saturates_at_min() {
        let stepper = DragStepper::with_step(ParamRange::MATRIX_OFFSET, 7.0);
        let mut v = 200.0;
        for _ in 0..100 {
            v = stepper.apply(v, -0.5);
        }
        assert_eq!(v, 0.0);
        assert_eq!(stepper.apply(v, -0.5), 0.0);
    }

    #[test]
    fn test_negative_step_is_normalized() {
        let stepper = DragStepper::with_step(ParamRange::UNIT, -0.1);
        assert!((stepper.step() - 0.1).abs() < f32::EPSILON);
        assert!((stepper.apply(0.5, 1.0) - 0.6).abs() < 1e-6);
    }
}
