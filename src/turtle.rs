//! Turtle state and the point accumulator it drives.

use glam::DVec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Length of a single forward step. Scaling to physical units is the renderer's job.
pub const STEP_LENGTH: f64 = 1.0;

/// Step emitted by the expander for each terminal symbol.
///
/// Turns never reach the accumulator; they only change the heading the
/// expander threads through its recursion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurtleOp {
    /// Step forward and record the new position.
    Draw,
    /// Step forward with the pen up.
    Move,
}

/// One entry of the output sequence.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum PathPoint {
    /// A position on the curve. The first point after a [`PathPoint::Break`] is a move-to.
    Point(DVec2),
    /// Ends the current path; drawing restarts at the next point.
    Break,
}

impl PathPoint {
    /// Coordinates of a real point, `None` for a break.
    pub fn position(&self) -> Option<DVec2> {
        match self {
            Self::Point(p) => Some(*p),
            Self::Break => None,
        }
    }

    /// Whether this entry ends the current path.
    pub fn is_break(&self) -> bool {
        matches!(self, Self::Break)
    }
}

/// Raised when appending would grow the sequence past its ceiling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("point sequence reached its limit of {limit} entries")]
pub struct PointLimitReached {
    pub limit: usize,
}

/// Pen state of the turtle for a single render.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TurtleState {
    /// Current pen location.
    pub position: DVec2,

    /// Set by a non-drawing step; cleared once drawing resumes behind a break.
    pub pen_suspended: bool,
}

/// Folds turtle steps into an ordered point sequence.
///
/// Starts at the origin with the origin already recorded. Headings are in
/// degrees and owned by the caller, since they thread through the expansion.
#[derive(Debug)]
pub struct PathAccumulator {
    state: TurtleState,
    points: Vec<PathPoint>,
    limit: usize,
}

impl PathAccumulator {
    /// Creates an accumulator that refuses to hold more than `limit` entries.
    pub fn new(limit: usize) -> Self {
        Self {
            state: TurtleState::default(),
            points: vec![PathPoint::Point(DVec2::ZERO)],
            limit,
        }
    }

    /// Pen position and suspension flag after the last step.
    pub fn state(&self) -> &TurtleState {
        &self.state
    }

    /// Sequence recorded so far, starting with the origin.
    pub fn points(&self) -> &[PathPoint] {
        &self.points
    }

    /// Consumes the accumulator, returning its sequence.
    pub fn into_points(self) -> Vec<PathPoint> {
        self.points
    }

    /// Advances one [`STEP_LENGTH`] along `heading` (degrees).
    ///
    /// A [`TurtleOp::Move`] step only moves the pen. The first drawn step
    /// after one or more moves appends a break and a move-to at the pre-step
    /// position before its own point.
    pub fn apply(&mut self, op: TurtleOp, heading: f64) -> Result<(), PointLimitReached> {
        if op == TurtleOp::Move {
            self.advance(heading);
            self.state.pen_suspended = true;
            return Ok(());
        }

        if self.state.pen_suspended {
            self.reserve(3)?;
            self.points.push(PathPoint::Break);
            self.points.push(PathPoint::Point(self.state.position));
            self.state.pen_suspended = false;
        } else {
            self.reserve(1)?;
        }
        self.advance(heading);
        self.points.push(PathPoint::Point(self.state.position));
        Ok(())
    }

    fn advance(&mut self, heading: f64) {
        self.state.position += DVec2::from_angle(heading.to_radians()) * STEP_LENGTH;
    }

    fn reserve(&self, additional: usize) -> Result<(), PointLimitReached> {
        if self.points.len() + additional > self.limit {
            return Err(PointLimitReached { limit: self.limit });
        }
        Ok(())
    }
}
