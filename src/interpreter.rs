//! Expands a [`Grammar`] to a fixed depth and interprets it as a 2D turtle path.
//!
//! The entry point is [`Renderer`]. Configure it with a [`RenderConfig`], then
//! call [`Renderer::render`] with a grammar and a recursion depth. Rewriting and
//! interpretation happen in one depth-first pass: no intermediate symbol string
//! is ever materialized.

use crate::bounds::Bounds;
use crate::error::RenderError;
use crate::grammar::{Grammar, SymbolKind};
use crate::turtle::{PathAccumulator, PathPoint, PointLimitReached, TurtleOp};
use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Limits applied to every render.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Deepest recursion accepted. Also bounds the call stack of the expander.
    pub max_depth: u32,
    /// Largest point sequence (breaks included) a render may produce.
    pub max_points: usize,
    /// Most terminal steps a render may take. Caps the work of renders that move
    /// without drawing, which never grow the point sequence.
    pub max_steps: u64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_depth: 32,
            max_points: 1_000_000,
            max_steps: 10_000_000,
        }
    }
}

/// Result of one render. Owned by the caller; nothing is retained by the renderer.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderOutput {
    /// Ordered path, starting at the origin.
    pub points: Vec<PathPoint>,
    /// Box around every non-break point, padded when degenerate.
    pub bounds: Bounds,
}

impl RenderOutput {
    /// Splits the sequence at breaks into polylines. Each one starts with its move-to point.
    pub fn paths(&self) -> Vec<Vec<DVec2>> {
        self.points
            .split(PathPoint::is_break)
            .map(|run| run.iter().filter_map(PathPoint::position).collect::<Vec<_>>())
            .filter(|path| !path.is_empty())
            .collect()
    }

    /// Number of path breaks in the sequence.
    pub fn break_count(&self) -> usize {
        self.points.iter().filter(|p| p.is_break()).count()
    }

    /// Every real coordinate in order, breaks dropped.
    pub fn drawn_points(&self) -> impl Iterator<Item = DVec2> + '_ {
        self.points.iter().filter_map(PathPoint::position)
    }
}

/// Terminal steps a render would perform.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepCount {
    pub drawn: u64,
    pub moved: u64,
}

impl StepCount {
    /// Drawn and moved steps together, saturating at `u64::MAX`.
    pub fn total(&self) -> u64 {
        self.drawn.saturating_add(self.moved)
    }

    fn saturating_add(self, other: Self) -> Self {
        Self {
            drawn: self.drawn.saturating_add(other.drawn),
            moved: self.moved.saturating_add(other.moved),
        }
    }
}

/// Renders grammars into point sequences.
///
/// Holds only configuration, so one renderer can serve any number of
/// grammars, from any number of threads.
#[derive(Clone, Debug, Default)]
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    /// Creates a renderer that enforces the limits in `config`.
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Limits applied to every render.
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Expands `grammar` to `depth` and returns the resulting path and bounds.
    ///
    /// The turtle starts at the origin heading along `+x`. At depth 0 every
    /// axiom symbol is terminal.
    ///
    /// # Errors
    ///
    /// Fails before expanding anything when `depth` is negative or above
    /// [`RenderConfig::max_depth`], or when the drawn steps alone would exceed
    /// [`RenderConfig::max_points`], or when the total steps would exceed
    /// [`RenderConfig::max_steps`]. If breaks push the sequence over the limit
    /// mid-expansion the partial output is dropped and
    /// [`RenderError::OutputTooLarge`] is returned.
    pub fn render(&self, grammar: &Grammar, depth: i32) -> Result<RenderOutput, RenderError> {
        let depth = self.check_depth(depth)?;
        debug!(
            axiom_len = grammar.axiom().len(),
            depth,
            angle = grammar.angle(),
            "rendering l-system"
        );

        let too_large = || RenderError::OutputTooLarge {
            depth,
            limit: self.config.max_points,
        };

        let estimate = Self::estimate_steps(grammar, depth);
        if estimate.total() > self.config.max_steps {
            warn!(
                depth,
                steps = estimate.total(),
                max_steps = self.config.max_steps,
                "render rejected: too many steps"
            );
            return Err(RenderError::TooManySteps {
                depth,
                steps: estimate.total(),
                limit: self.config.max_steps,
            });
        }
        let limit = u64::try_from(self.config.max_points).unwrap_or(u64::MAX);
        if estimate.drawn.saturating_add(1) > limit {
            warn!(depth, drawn = estimate.drawn, limit, "render rejected: output too large");
            return Err(too_large());
        }

        let mut turtle = PathAccumulator::new(self.config.max_points);
        if let Err(err) = self.expand(grammar, grammar.axiom(), depth, 0.0, &mut turtle) {
            warn!(depth, limit = err.limit, "render aborted: point limit reached");
            return Err(too_large());
        }

        let points = turtle.into_points();
        let bounds = Bounds::compute(&points);
        let output = RenderOutput { points, bounds };
        debug!(
            points = output.points.len(),
            breaks = output.break_count(),
            "l-system rendered"
        );
        Ok(output)
    }

    /// Walks `symbols` left to right, rewriting variables while `depth` remains
    /// and feeding terminal steps to `turtle`.
    ///
    /// Returns the heading after the last symbol so turns made inside a nested
    /// expansion carry over to the caller's next symbol. Headings are in
    /// degrees and never normalized.
    pub fn expand(
        &self,
        grammar: &Grammar,
        symbols: &str,
        depth: u32,
        heading: f64,
        turtle: &mut PathAccumulator,
    ) -> Result<f64, PointLimitReached> {
        let mut heading = heading;
        for c in symbols.chars() {
            match grammar.classify(c) {
                SymbolKind::TurnRight | SymbolKind::TurnLeft => {
                    heading += grammar.turn_delta(c).unwrap_or_default();
                }
                SymbolKind::Variable if depth >= 1 => {
                    if let Some(rule) = grammar.rule(c) {
                        heading = self.expand(grammar, rule, depth - 1, heading, turtle)?;
                    }
                }
                SymbolKind::Variable | SymbolKind::Draw | SymbolKind::Move => {
                    let op = if grammar.is_non_drawing(c) {
                        TurtleOp::Move
                    } else {
                        TurtleOp::Draw
                    };
                    turtle.apply(op, heading)?;
                }
            }
        }
        Ok(heading)
    }

    /// Counts the terminal steps expanding the axiom to `depth` would take.
    ///
    /// Saturates instead of overflowing, so it is safe to call for depths
    /// whose output could never be materialized.
    pub fn estimate_steps(grammar: &Grammar, depth: u32) -> StepCount {
        let mut memo = HashMap::new();
        grammar
            .axiom()
            .chars()
            .map(|c| count_steps(grammar, c, depth, &mut memo))
            .fold(StepCount::default(), StepCount::saturating_add)
    }

    fn check_depth(&self, depth: i32) -> Result<u32, RenderError> {
        let Ok(depth) = u32::try_from(depth) else {
            warn!(depth, "render rejected: negative depth");
            return Err(RenderError::NegativeDepth { depth });
        };
        if depth > self.config.max_depth {
            warn!(depth, max_depth = self.config.max_depth, "render rejected: depth limit");
            return Err(RenderError::DepthLimitExceeded {
                depth,
                max_depth: self.config.max_depth,
            });
        }
        Ok(depth)
    }
}

fn count_steps(
    grammar: &Grammar,
    symbol: char,
    depth: u32,
    memo: &mut HashMap<(char, u32), StepCount>,
) -> StepCount {
    if let Some(count) = memo.get(&(symbol, depth)) {
        return *count;
    }
    let count = match grammar.classify(symbol) {
        SymbolKind::TurnRight | SymbolKind::TurnLeft => StepCount::default(),
        SymbolKind::Variable if depth >= 1 => grammar
            .rule(symbol)
            .unwrap_or_default()
            .chars()
            .map(|c| count_steps(grammar, c, depth - 1, memo))
            .fold(StepCount::default(), StepCount::saturating_add),
        _ if grammar.is_non_drawing(symbol) => StepCount { drawn: 0, moved: 1 },
        _ => StepCount { drawn: 1, moved: 0 },
    };
    memo.insert((symbol, depth), count);
    count
}
