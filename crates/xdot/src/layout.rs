//! Running a Graphviz layout engine over plain DOT.
//!
//! The parser only understands DOT that already carries xdot drawing
//! attributes. A [`LayoutRunner`] produces that text from a plain graph
//! description.

use std::io;

use thiserror::Error;

use xdot_core::engine::LayoutEngine;

/// Errors raised while laying out a graph.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("failed to run layout engine `{engine}`: {source}")]
    Spawn {
        engine: LayoutEngine,
        #[source]
        source: io::Error,
    },

    #[error("layout engine `{engine}` failed: {message}")]
    Failed {
        engine: LayoutEngine,
        message: String,
    },

    #[error("layout engine `{engine}` produced output that is not UTF-8")]
    InvalidOutput { engine: LayoutEngine },
}

/// Turns plain DOT into DOT annotated with xdot drawing attributes.
pub trait LayoutRunner {
    /// Lays out `dot_source` with `engine` and returns the xdot text.
    ///
    /// # Errors
    ///
    /// Returns a [`LayoutError`] when the engine cannot be run or rejects
    /// the input.
    fn layout(&self, dot_source: &str, engine: LayoutEngine) -> Result<String, LayoutError>;
}

/// Runs the Graphviz command line tools through `graphviz-rust`.
///
/// Requires the Graphviz `dot` program on the `PATH`.
#[cfg(feature = "graphviz")]
#[derive(Debug, Default, Clone, Copy)]
pub struct GraphvizRunner;

#[cfg(feature = "graphviz")]
impl GraphvizRunner {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(feature = "graphviz")]
impl LayoutRunner for GraphvizRunner {
    fn layout(&self, dot_source: &str, engine: LayoutEngine) -> Result<String, LayoutError> {
        use graphviz_rust::{cmd::CommandArg, exec_dot};
        use log::debug;

        debug!(engine = engine.as_str(); "Running Graphviz");
        let output = exec_dot(
            dot_source.to_string(),
            vec![
                CommandArg::Custom(format!("-K{engine}")),
                CommandArg::Custom("-Txdot".to_string()),
            ],
        )
        .map_err(|source| LayoutError::Spawn { engine, source })?;

        let xdot = String::from_utf8(output).map_err(|_| LayoutError::InvalidOutput { engine })?;
        if xdot.trim().is_empty() {
            return Err(LayoutError::Failed {
                engine,
                message: "no output".to_string(),
            });
        }
        Ok(xdot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Canned(Result<&'static str, &'static str>);

    impl LayoutRunner for Canned {
        fn layout(&self, _dot_source: &str, engine: LayoutEngine) -> Result<String, LayoutError> {
            self.0
                .map(str::to_string)
                .map_err(|message| LayoutError::Failed {
                    engine,
                    message: message.to_string(),
                })
        }
    }

    #[test]
    fn test_runner_trait_object() {
        let runner: &dyn LayoutRunner = &Canned(Ok("digraph {}"));
        assert_eq!(runner.layout("digraph {}", LayoutEngine::Dot).unwrap(), "digraph {}");
    }

    #[test]
    fn test_error_messages() {
        let err = Canned(Err("syntax error in line 1"))
            .layout("digraph {", LayoutEngine::Neato)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "layout engine `neato` failed: syntax error in line 1"
        );

        let err = LayoutError::Spawn {
            engine: LayoutEngine::Dot,
            source: io::Error::new(io::ErrorKind::NotFound, "dot not found"),
        };
        assert_eq!(err.to_string(), "failed to run layout engine `dot`: dot not found");
    }
}
