//! # symbios-lindenmayer
//!
//! Rewrites [Lindenmayer system](https://en.wikipedia.org/wiki/L-system) grammars and
//! interprets the result with a 2D turtle, producing polylines ready for rendering.
//!
//! Data flows one way: a [`LindenmayerSystem`] expands its axiom into a symbol string,
//! a [`TurtleInterpreter`] turns that string into a list of polylines, and an external
//! writer (SVG, plotter, ...) consumes the [`Drawing`].
//!
//! ```
//! use symbios_lindenmayer::{GrammarConfig, LindenmayerSystem, TurtleConfig, TurtleInterpreter};
//!
//! let mut koch = LindenmayerSystem::new(GrammarConfig::new("F").with_rule('F', "F+F--F+F"))?;
//! let symbols = koch.iterate(1);
//! assert_eq!(symbols, "F+F--F+F");
//!
//! let turtle = TurtleInterpreter::new(TurtleConfig {
//!     turn_angle: 60.0,
//!     step: 5.0,
//!     ..Default::default()
//! });
//! let polylines = turtle.get_points(symbols)?;
//! assert_eq!(polylines.len(), 1);
//! # Ok::<(), symbios_lindenmayer::LindenmayerError>(())
//! ```

pub mod error;
pub mod geometry;
pub mod grammar;
pub mod interpreter;
pub mod turtle;

pub use error::*;
pub use geometry::*;
pub use grammar::*;
pub use interpreter::*;
pub use turtle::*;
