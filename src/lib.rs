//! # lsystem-curve
//!
//! Generates plane-filling fractal curves from deterministic L-System grammars.
//!
//! A [`Grammar`] (axiom, single-character rules, turn angle) is expanded
//! depth-first to a requested depth, and every terminal symbol is interpreted
//! as a unit turtle step. The result is a [`RenderOutput`]: an ordered
//! sequence of [`PathPoint`]s with explicit path breaks, plus the [`Bounds`]
//! a renderer needs to scale the curve into its own viewport.
//!
//! ```
//! use lsystem_curve::{Grammar, Renderer};
//!
//! let output = Renderer::default()
//!     .render(&Grammar::default(), Grammar::DEFAULT_DEPTH as i32)
//!     .unwrap();
//! assert_eq!(output.points.len(), 3 * 4usize.pow(3) + 1);
//! ```

pub mod bounds;
pub mod error;
pub mod grammar;
pub mod interpreter;
pub mod turtle;

pub use bounds::*;
pub use error::*;
pub use grammar::*;
pub use interpreter::*;
pub use turtle::*;
