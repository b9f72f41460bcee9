//! Grammar definition: axiom, production rules and the turn angle.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Symbol that adds the configured angle to the heading.
pub const TURN_RIGHT: char = '+';

/// Symbol that subtracts the configured angle from the heading.
pub const TURN_LEFT: char = '-';

/// How the expander treats a single symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SymbolKind {
    /// `+`: heading += angle.
    TurnRight,
    /// `-`: heading -= angle.
    TurnLeft,
    /// Has a non-empty rule. Expanded while depth remains, a step otherwise.
    Variable,
    /// No rule. Always a drawn unit step.
    Draw,
    /// Empty rule, or a move symbol without a rule. An invisible unit step at every depth.
    Move,
}

/// A deterministic, context-free L-System over single characters.
///
/// Rules map one character to a replacement string. `+` and `-` are reserved
/// turn operators and are never looked up in the rule table. Any other symbol
/// without a rule is a terminal draw step.
///
/// The turn angle is stored once; both turn deltas are derived from it on read.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grammar {
    axiom: String,
    rules: HashMap<char, String>,
    /// Symbols whose depth-0 steps advance the turtle without drawing.
    move_symbols: HashSet<char>,
    /// Turn angle in degrees.
    angle: f64,
}

impl Default for Grammar {
    /// One Koch snowflake.
    fn default() -> Self {
        presets::koch_snowflake()
    }
}

impl Grammar {
    /// Recursion depth used when a caller has no preference.
    pub const DEFAULT_DEPTH: u32 = 3;

    /// Creates a grammar with the given axiom, no rules and a 60° angle.
    pub fn new(axiom: impl Into<String>) -> Self {
        Self {
            axiom: axiom.into(),
            rules: HashMap::new(),
            move_symbols: HashSet::new(),
            angle: 60.0,
        }
    }

    /// Adds or replaces the rule for `symbol` (builder pattern).
    pub fn with_rule(mut self, symbol: char, replacement: impl Into<String>) -> Self {
        self.set_rule(symbol, replacement);
        self
    }

    /// Sets the turn angle in degrees (builder pattern).
    pub fn with_angle(mut self, degrees: f64) -> Self {
        self.set_angle(degrees);
        self
    }

    /// Marks `symbol` as non-drawing (builder pattern).
    pub fn with_move_symbol(mut self, symbol: char) -> Self {
        self.move_symbols.insert(symbol);
        self
    }

    /// Symbol string the expansion starts from.
    pub fn axiom(&self) -> &str {
        &self.axiom
    }

    /// Replaces the starting symbol string.
    pub fn set_axiom(&mut self, axiom: impl Into<String>) {
        self.axiom = axiom.into();
    }

    /// Turn angle in degrees. `+` adds it, `-` subtracts it.
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Updates the turn angle. Both turn operators follow immediately.
    pub fn set_angle(&mut self, degrees: f64) {
        self.angle = degrees;
    }

    /// Adds or replaces a production rule.
    ///
    /// Rules keyed by a turn operator are stored but never consulted.
    pub fn set_rule(&mut self, symbol: char, replacement: impl Into<String>) {
        self.rules.insert(symbol, replacement.into());
    }

    /// Removes a production rule, returning its replacement if there was one.
    pub fn remove_rule(&mut self, symbol: char) -> Option<String> {
        self.rules.remove(&symbol)
    }

    /// Replacement string for `symbol`, if it has a rule.
    pub fn rule(&self, symbol: char) -> Option<&str> {
        self.rules.get(&symbol).map(String::as_str)
    }

    /// Symbols that own a rule, sorted.
    pub fn variables(&self) -> Vec<char> {
        let mut vars: Vec<char> = self.rules.keys().copied().collect();
        vars.sort_unstable();
        vars
    }

    /// Signed heading change for a turn operator, or `None` for any other symbol.
    pub fn turn_delta(&self, symbol: char) -> Option<f64> {
        match symbol {
            TURN_RIGHT => Some(self.angle),
            TURN_LEFT => Some(-self.angle),
            _ => None,
        }
    }

    /// Whether a terminal step of `symbol` leaves the pen up.
    pub fn is_non_drawing(&self, symbol: char) -> bool {
        self.move_symbols.contains(&symbol) || self.rules.get(&symbol).is_some_and(String::is_empty)
    }

    /// Decides how the expander treats `symbol`. Turn operators win over any rule.
    pub fn classify(&self, symbol: char) -> SymbolKind {
        match symbol {
            TURN_RIGHT => SymbolKind::TurnRight,
            TURN_LEFT => SymbolKind::TurnLeft,
            _ => match self.rules.get(&symbol) {
                Some(rule) if rule.is_empty() => SymbolKind::Move,
                Some(_) => SymbolKind::Variable,
                None if self.move_symbols.contains(&symbol) => SymbolKind::Move,
                None => SymbolKind::Draw,
            },
        }
    }
}

/// Ready-made grammars for well-known curves.
pub mod presets {
    use super::Grammar;

    /// Three Koch curves joined into a snowflake. Renders at [`Grammar::DEFAULT_DEPTH`].
    pub fn koch_snowflake() -> Grammar {
        Grammar::new("F--F--F")
            .with_rule('F', "F+F--F+F")
            .with_angle(60.0)
    }

    /// A single Koch curve segment.
    pub fn koch_curve() -> Grammar {
        Grammar::new("F")
            .with_rule('F', "F+F--F+F")
            .with_angle(60.0)
    }

    /// Cantor set: `A` draws, `B` moves without drawing.
    pub fn cantor_set() -> Grammar {
        Grammar::new("A")
            .with_rule('A', "ABA")
            .with_rule('B', "BBB")
            .with_move_symbol('B')
            .with_angle(0.0)
    }

    pub fn sierpinski_arrowhead() -> Grammar {
        Grammar::new("A")
            .with_rule('A', "B-A-B")
            .with_rule('B', "A+B+A")
            .with_angle(60.0)
    }

    pub fn gosper_curve() -> Grammar {
        Grammar::new("A")
            .with_rule('A', "A-B--B+A++AA+B-")
            .with_rule('B', "+A-BB--B-A++A+B")
            .with_angle(60.0)
    }

    pub fn levy_c_curve() -> Grammar {
        Grammar::new("F").with_rule('F', "+F--F+").with_angle(45.0)
    }
}
