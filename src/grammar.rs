//! Grammar engine: the axiom, its production rules, and iterative rewriting.
//!
//! The entry point is [`LindenmayerSystem`]. Build it from a [`GrammarConfig`],
//! then call [`LindenmayerSystem::iterate`] to rewrite the axiom. The expanded
//! string is handed to the [`TurtleInterpreter`](crate::TurtleInterpreter).

use crate::error::{LindenmayerError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Axiom plus production rules.
///
/// Symbols without a rule are terminals and survive rewriting unchanged.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrammarConfig {
    /// The axiom. Must be non-empty.
    pub start: String,

    /// Single symbol -> replacement sequence.
    #[serde(default)]
    pub rules: BTreeMap<char, String>,
}

impl GrammarConfig {
    pub fn new(start: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            rules: BTreeMap::new(),
        }
    }

    /// Adds a production rule (builder pattern). A later rule for the same
    /// symbol replaces the earlier one.
    pub fn with_rule(mut self, symbol: char, replacement: impl Into<String>) -> Self {
        self.rules.insert(symbol, replacement.into());
        self
    }

    /// Parses a configuration such as `{"start": "F", "rules": {"F": "F+F--F+F"}}`.
    ///
    /// Malformed documents, a missing `start`, or multi-character rule keys
    /// are all reported as [`LindenmayerError::InvalidConfig`].
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| LindenmayerError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.start.is_empty() {
            return Err(LindenmayerError::InvalidConfig(
                "`start` must contain at least one symbol".into(),
            ));
        }
        Ok(())
    }
}

/// An L-System together with its current derivation.
///
/// `string()` always equals the axiom rewritten exactly `iterations()` times.
#[derive(Clone, Debug)]
pub struct LindenmayerSystem {
    start: String,
    rules: BTreeMap<char, String>,
    iterations: usize,
    current: String,
}

impl LindenmayerSystem {
    /// Validates `config` and creates a system at iteration 0.
    pub fn new(config: GrammarConfig) -> Result<Self> {
        config.validate()?;
        let GrammarConfig { start, rules } = config;
        Ok(Self {
            current: start.clone(),
            start,
            rules,
            iterations: 0,
        })
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn rules(&self) -> &BTreeMap<char, String> {
        &self.rules
    }

    /// Number of rewrite passes applied since construction or the last reset.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// The current derivation.
    pub fn string(&self) -> &str {
        &self.current
    }

    /// Applies `n` rewrite passes and returns the resulting string.
    ///
    /// Calls are cumulative: `iterate(a)` followed by `iterate(b)` is the same
    /// as `iterate(a + b)`. Growth is not limited; rules with replacements
    /// longer than one symbol grow the string exponentially.
    pub fn iterate(&mut self, n: usize) -> &str {
        for _ in 0..n {
            self.current = self.one_pass(&self.current);
            self.iterations += 1;
            tracing::debug!(
                iteration = self.iterations,
                len = self.current.len(),
                "rewrite pass"
            );
        }
        &self.current
    }

    /// Applies a single rewrite pass.
    pub fn step(&mut self) -> &str {
        self.iterate(1)
    }

    /// Rewrites every symbol of `symbols` once, left to right.
    pub fn one_pass(&self, symbols: &str) -> String {
        let mut out = String::with_capacity(symbols.len());
        for c in symbols.chars() {
            match self.rules.get(&c) {
                Some(replacement) => out.push_str(replacement),
                None => out.push(c),
            }
        }
        out
    }

    /// Returns to the axiom at iteration 0.
    pub fn reset(&mut self) {
        self.current.clone_from(&self.start);
        self.iterations = 0;
        tracing::debug!("reset to axiom");
    }
}

impl fmt::Display for LindenmayerSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rules = self
            .rules
            .iter()
            .map(|(k, v)| format!("{k}=>{v}"))
            .collect::<Vec<_>>()
            .join(", ");
        write!(
            f,
            "LindenmayerSystem(start={} rules={{{}}} iterations={})",
            self.start, rules, self.iterations
        )
    }
}

/// Builds a system from `config` and returns its derivation after `iterations` passes.
pub fn expand(config: GrammarConfig, iterations: usize) -> Result<String> {
    let mut system = LindenmayerSystem::new(config)?;
    system.iterate(iterations);
    Ok(system.current)
}
