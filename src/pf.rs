use crate::admittance::Admittance;
use crate::bus_types::{bus_types, BusSpec};
use crate::dense::Mat;
use crate::error::{ConfigError, PFError};
use crate::gauss::{gausspf, ProgressMonitor};
use crate::mpopt::GSOpt;
use crate::solution::{extract, SolvedNetwork};
use crate::state::VoltageState;

/// Runs `sweep_count` Gauss-Seidel sweeps from a flat start.
///
/// `g` and `b` are the conductance and susceptance parts of the bus
/// admittance matrix and `spec` holds one entry per bus, exactly one of
/// which must be the slack.
pub fn solve(
    g: Mat<f64>,
    b: Mat<f64>,
    spec: &[BusSpec],
    sweep_count: usize,
) -> Result<SolvedNetwork, PFError> {
    let y_bus = Admittance::new(g, b)?;
    runpf(&y_bus, spec, &GSOpt::fixed(sweep_count), None)
}

/// Runs a power flow with explicit options.
///
/// All input checks happen before the first sweep; a configuration error
/// never comes with a partial result.
pub fn runpf(
    y_bus: &Admittance,
    spec: &[BusSpec],
    opt: &GSOpt,
    progress: Option<&dyn ProgressMonitor>,
) -> Result<SolvedNetwork, PFError> {
    opt.check().map_err(ConfigError::Option)?;

    let nb = y_bus.nb();
    if spec.len() != nb {
        return Err(ConfigError::BusCount {
            expected: nb,
            got: spec.len(),
        }
        .into());
    }
    let (slack, pv, pq) = bus_types(spec)?;
    log::debug!(
        "slack bus {}, {} PV bus(es), {} PQ bus(es)",
        slack,
        pv.len(),
        pq.len()
    );

    let v_slack = spec[slack]
        .slack_voltage()
        .ok_or(ConfigError::SlackCount(0))?;
    let v0 = VoltageState::flat_start(nb, slack, v_slack);

    let (v, converged, sweeps) = gausspf(y_bus, spec, v0, opt, progress)?;

    let sol = extract(y_bus, &v, sweeps, converged);
    log::debug!("total loss: {}", sol.loss);
    Ok(sol)
}
