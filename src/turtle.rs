//! Turtle state and the symbol-to-operation table.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Operations that can be performed by the drawing turtle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurtleOp {
    /// Move forward drawing a line (`A`, `B`, `F`, `G`).
    Draw,
    /// Move forward with the pen up (`a`, `b`, `f`, `g`).
    Move,
    /// Turn counter-clockwise by the turn angle (`-`).
    TurnLeft,
    /// Turn clockwise by the turn angle (`+`).
    TurnRight,
    /// Save position and heading onto the stack (`[`).
    Push,
    /// Restore the most recently pushed position and heading (`]`).
    Pop,
    /// Symbol with no drawing meaning; ignored.
    Noop,
}

const fn build_table() -> [TurtleOp; 128] {
    let mut table = [TurtleOp::Noop; 128];
    table[b'A' as usize] = TurtleOp::Draw;
    table[b'B' as usize] = TurtleOp::Draw;
    table[b'F' as usize] = TurtleOp::Draw;
    table[b'G' as usize] = TurtleOp::Draw;
    table[b'a' as usize] = TurtleOp::Move;
    table[b'b' as usize] = TurtleOp::Move;
    table[b'f' as usize] = TurtleOp::Move;
    table[b'g' as usize] = TurtleOp::Move;
    table[b'-' as usize] = TurtleOp::TurnLeft;
    table[b'+' as usize] = TurtleOp::TurnRight;
    table[b'[' as usize] = TurtleOp::Push;
    table[b']' as usize] = TurtleOp::Pop;
    table
}

// Every keyword is ASCII, so anything outside the table is a Noop.
static OP_TABLE: [TurtleOp; 128] = build_table();

impl TurtleOp {
    /// Classifies `symbol`. Total: unknown symbols map to [`TurtleOp::Noop`].
    #[inline]
    pub fn classify(symbol: char) -> Self {
        OP_TABLE
            .get(symbol as usize)
            .copied()
            .unwrap_or(TurtleOp::Noop)
    }

    /// The symbols that trigger this operation.
    pub fn keywords(self) -> &'static str {
        match self {
            TurtleOp::Draw => "ABFG",
            TurtleOp::Move => "abfg",
            TurtleOp::TurnLeft => "-",
            TurtleOp::TurnRight => "+",
            TurtleOp::Push => "[",
            TurtleOp::Pop => "]",
            TurtleOp::Noop => "",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            TurtleOp::Draw => "Move forward by line length drawing a line",
            TurtleOp::Move => "Move forward by line length without drawing a line",
            TurtleOp::TurnLeft => "Turn left by turning angle",
            TurtleOp::TurnRight => "Turn right by turning angle",
            TurtleOp::Push => "Push current drawing state onto stack",
            TurtleOp::Pop => "Pop current drawing state from the stack",
            TurtleOp::Noop => "Ignored symbol",
        }
    }
}

/// The live state of the 2D turtle.
///
/// Coordinates are kept at full precision; rounding happens only when a point
/// is emitted into a polyline.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurtleState {
    /// Current position of the cursor.
    pub position: DVec2,

    /// Current heading in degrees, counter-clockwise from +X.
    pub heading: f64,
}

impl Default for TurtleState {
    fn default() -> Self {
        Self {
            position: DVec2::ZERO,
            heading: 0.0,
        }
    }
}

impl TurtleState {
    pub fn new(position: DVec2, heading: f64) -> Self {
        Self { position, heading }
    }

    /// Unit vector along the current heading.
    pub fn direction(&self) -> DVec2 {
        let rad = self.heading.to_radians();
        DVec2::new(rad.cos(), rad.sin())
    }

    /// Advances `step` units along the heading.
    pub fn forward(&mut self, step: f64) {
        self.position += self.direction() * step;
    }

    /// Rotates the heading by `angle` degrees (positive is counter-clockwise).
    pub fn turn(&mut self, angle: f64) {
        self.heading += angle;
    }
}
