//! Interpreter that converts an L-System symbol string into 2D polylines.
//!
//! The entry point is [`TurtleInterpreter`]. Configure it with a [`TurtleConfig`],
//! then call [`TurtleInterpreter::get_points`] (or [`TurtleInterpreter::draw`]
//! to also get the bounding box) with the string produced by
//! [`LindenmayerSystem::iterate`](crate::LindenmayerSystem::iterate).

use crate::error::{LindenmayerError, Result};
use crate::geometry::{Drawing, Polyline, round_point};
use crate::turtle::{TurtleOp, TurtleState};
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Drawing parameters for turtle interpretation. Angles are in degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TurtleConfig {
    /// Where the first polyline begins.
    pub start_position: DVec2,
    /// Initial heading, counter-clockwise from +X.
    pub start_angle: f64,
    /// Heading change applied by `-` (added) and `+` (subtracted).
    pub turn_angle: f64,
    /// Distance covered by each draw/move symbol.
    pub step: f64,
}

impl Default for TurtleConfig {
    fn default() -> Self {
        Self {
            start_position: DVec2::ZERO,
            start_angle: 0.0,
            turn_angle: 90.0,
            step: 10.0,
        }
    }
}

/// Interprets symbol strings as turtle commands.
///
/// The interpreter holds only configuration; every call works on fresh turtle
/// state, so one instance may be reused for any number of strings.
#[derive(Clone, Debug, Default)]
pub struct TurtleInterpreter {
    config: TurtleConfig,
}

impl TurtleInterpreter {
    pub fn new(config: TurtleConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TurtleConfig {
        &self.config
    }

    /// Walks `symbols` left to right and returns the completed polylines in
    /// the order they were finished.
    ///
    /// # Segments
    ///
    /// Draw symbols extend the current polyline. A move symbol, a `]`, or the
    /// end of input closes it; polylines with fewer than two points are
    /// dropped. Every point after the start position is rounded to
    /// [`PRECISION_DIGITS`](crate::geometry::PRECISION_DIGITS) decimals, while
    /// the turtle itself keeps full precision.
    ///
    /// # Push / Pop
    ///
    /// `[` saves the unrounded position and heading. `]` restores them and
    /// starts a new polyline at the rounded restored position. A `]` with
    /// nothing saved fails with [`LindenmayerError::UnbalancedStack`].
    pub fn get_points(&self, symbols: &str) -> Result<Vec<Polyline>> {
        let step = self.config.step;
        let turn = self.config.turn_angle;

        let mut turtle = TurtleState::new(self.config.start_position, self.config.start_angle);
        let mut stack: Vec<TurtleState> = Vec::new();
        let mut segments: Vec<Polyline> = Vec::new();
        let mut current: Polyline = vec![turtle.position];

        for (index, symbol) in symbols.char_indices() {
            match TurtleOp::classify(symbol) {
                TurtleOp::Draw => {
                    turtle.forward(step);
                    current.push(round_point(turtle.position));
                }
                TurtleOp::Move => {
                    flush(&mut segments, &mut current);
                    turtle.forward(step);
                    current.push(round_point(turtle.position));
                }
                TurtleOp::TurnLeft => turtle.turn(turn),
                TurtleOp::TurnRight => turtle.turn(-turn),
                TurtleOp::Push => stack.push(turtle),
                TurtleOp::Pop => {
                    flush(&mut segments, &mut current);
                    turtle = stack.pop().ok_or_else(|| {
                        tracing::warn!(index, "pop with empty stack");
                        LindenmayerError::UnbalancedStack { index }
                    })?;
                    current.push(round_point(turtle.position));
                }
                TurtleOp::Noop => tracing::trace!(?symbol, "ignored symbol"),
            }
        }
        flush(&mut segments, &mut current);

        tracing::debug!(
            symbols = symbols.len(),
            polylines = segments.len(),
            "interpreted symbol string"
        );
        Ok(segments)
    }

    /// Like [`get_points`](Self::get_points), bundling the polylines with their bounds.
    pub fn draw(&self, symbols: &str) -> Result<Drawing> {
        self.get_points(symbols).map(Drawing::new)
    }
}

/// Emits `current` if it forms a line, and leaves it empty for the restart point.
fn flush(segments: &mut Vec<Polyline>, current: &mut Polyline) {
    if current.len() > 1 {
        segments.push(std::mem::take(current));
    } else {
        current.clear();
    }
}

/// Interprets `symbols` with the given drawing parameters.
pub fn render(
    symbols: &str,
    step: f64,
    start_angle: f64,
    turn_angle: f64,
    start_position: DVec2,
) -> Result<Vec<Polyline>> {
    TurtleInterpreter::new(TurtleConfig {
        start_position,
        start_angle,
        turn_angle,
        step,
    })
    .get_points(symbols)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: DVec2, b: DVec2) -> bool {
        (a - b).length() < 1e-9
    }

    #[test]
    fn default_config() {
        let config = TurtleConfig::default();
        assert_eq!(config.start_position, DVec2::ZERO);
        assert_eq!(config.start_angle, 0.0);
        assert_eq!(config.turn_angle, 90.0);
        assert_eq!(config.step, 10.0);
    }

    #[test]
    fn square() {
        let lines = TurtleInterpreter::default().get_points("F-F-F-F").unwrap();
        assert_eq!(lines.len(), 1);
        let expected = [
            DVec2::new(0.0, 0.0),
            DVec2::new(10.0, 0.0),
            DVec2::new(10.0, 10.0),
            DVec2::new(0.0, 10.0),
            DVec2::new(0.0, 0.0),
        ];
        assert_eq!(lines[0], expected);
    }

    #[test]
    fn plus_turns_clockwise() {
        let lines = TurtleInterpreter::default().get_points("+F").unwrap();
        assert_eq!(lines, vec![vec![DVec2::ZERO, DVec2::new(0.0, -10.0)]]);
    }

    #[test]
    fn move_breaks_continuity() {
        let lines = render("Fa F", 1.0, 0.0, 90.0, DVec2::ZERO).unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], vec![DVec2::new(0.0, 0.0), DVec2::new(1.0, 0.0)]);
        assert_eq!(lines[1], vec![DVec2::new(2.0, 0.0), DVec2::new(3.0, 0.0)]);
    }

    #[test]
    fn lone_moves_emit_nothing() {
        let lines = TurtleInterpreter::default().get_points("ffgF").unwrap();
        assert_eq!(lines, vec![vec![DVec2::new(30.0, 0.0), DVec2::new(40.0, 0.0)]]);
    }

    #[test]
    fn branch_restarts_at_saved_position() {
        // F[-F]F: trunk, left branch, then trunk continues from the branch point.
        let lines = TurtleInterpreter::default().get_points("F[-F]F").unwrap();
        assert_eq!(lines.len(), 2);
        assert!(approx(lines[0][2], DVec2::new(10.0, 10.0)));
        assert_eq!(lines[0].len(), 3);
        assert_eq!(lines[1], vec![DVec2::new(10.0, 0.0), DVec2::new(20.0, 0.0)]);
    }

    #[test]
    fn pop_on_empty_stack_fails() {
        let err = TurtleInterpreter::default().get_points("]").unwrap_err();
        assert_eq!(err, LindenmayerError::UnbalancedStack { index: 0 });

        let err = TurtleInterpreter::default().get_points("F[F]]F").unwrap_err();
        assert_eq!(err, LindenmayerError::UnbalancedStack { index: 4 });
    }

    #[test]
    fn unknown_symbols_are_ignored() {
        let plain = TurtleInterpreter::default().get_points("F+F").unwrap();
        let noisy = TurtleInterpreter::default().get_points("XFY+Z F|").unwrap();
        assert_eq!(plain, noisy);
    }

    #[test]
    fn empty_input_yields_no_polylines() {
        assert!(TurtleInterpreter::default().get_points("").unwrap().is_empty());
        assert!(TurtleInterpreter::default().get_points("+-[]").unwrap().is_empty());
    }

    #[test]
    fn start_position_is_kept_verbatim() {
        let start = DVec2::new(0.123456789, -1.0);
        let lines = render("F", 1.0, 0.0, 90.0, start).unwrap();
        assert_eq!(lines[0][0], start);
        assert_eq!(lines[0][1], DVec2::new(1.12346, -1.0));
    }

    #[test]
    fn draw_rounds_like_decimal_arithmetic() {
        for (step, expected) in [(0.123455, 0.12345), (7.500005, 7.5), (2.000025, 2.00002)] {
            let lines = render("F", step, 0.0, 90.0, DVec2::ZERO).unwrap();
            assert_eq!(lines[0][1], DVec2::new(expected, 0.0), "step {step}");
        }
    }

    #[test]
    fn push_keeps_full_precision() {
        // The restart point is rounded down to 0, but drawing resumes from 0.000004.
        let start = DVec2::new(0.000004, 0.0);
        let lines = render("[F]F", 0.000002, 0.0, 90.0, start).unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], vec![DVec2::ZERO, DVec2::new(0.00001, 0.0)]);
    }

    #[test]
    fn draw_reports_bounds() {
        let drawing = TurtleInterpreter::default().draw("F-F").unwrap();
        let bounds = drawing.bounds.unwrap();
        assert_eq!(bounds.min, DVec2::ZERO);
        assert!(approx(bounds.max, DVec2::new(10.0, 10.0)));
        assert_eq!(drawing.point_count(), 3);
    }

    #[test]
    fn config_from_json_uses_defaults() {
        let config: TurtleConfig = serde_json::from_str(r#"{"turn_angle": 60.0}"#).unwrap();
        assert_eq!(config.turn_angle, 60.0);
        assert_eq!(config.step, 10.0);
    }
}
