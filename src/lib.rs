//! Gauss-Seidel power flow for small dense networks.
//!
//! The solver takes the bus admittance matrix as its real and imaginary
//! parts, `G` and `B`, plus one [`BusSpec`] per bus, and corrects the
//! voltage of every non-slack bus in turn until the sweep budget is spent.

mod admittance;
mod bus_types;
mod correction;
mod dense;
mod error;
mod gauss;
mod loadcase;
mod math;
mod mpopt;
mod pf;
mod solution;
mod state;

pub mod debug;

pub use admittance::*;
pub use bus_types::*;
pub use correction::*;
pub use dense::*;
pub use error::*;
pub use gauss::{LogProgress, ProgressMonitor};
pub use loadcase::*;
pub use mpopt::*;
pub use pf::*;
pub use solution::*;
pub use state::*;

#[cfg(test)]
mod tests;
