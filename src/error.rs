use thiserror::Error;

/// Problems with the solver inputs. Always detected before the first sweep.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("network has no buses")]
    Empty,

    #[error("{name} matrix must be square, got {rows}x{cols}")]
    NotSquare {
        name: &'static str,
        rows: usize,
        cols: usize,
    },

    #[error("G is {g}x{g} but B is {b}x{b}")]
    DimensionMismatch { g: usize, b: usize },

    #[error("expected {expected} bus specifications, got {got}")]
    BusCount { expected: usize, got: usize },

    #[error("exactly one slack bus is required, found {0}")]
    SlackCount(usize),

    #[error("bus {bus}: specification matches neither load (P, Q), generator (P, |E|) nor slack (|E|, angle)")]
    Unclassified { bus: usize },

    #[error("bus {bus}: specified value is not finite")]
    NonFinite { bus: usize },

    #[error("invalid matrix: {0}")]
    Matrix(String),

    #[error("invalid option: {0}")]
    Option(String),
}

/// Failure of a power flow solve.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PFError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("singular correction at bus {bus} in sweep {iteration}")]
    Singular { bus: usize, iteration: usize },
}
