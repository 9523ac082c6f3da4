use crate::admittance::Admittance;
use crate::bus_types::BusSpec;
use crate::correction::{correct_generator_bus, correct_load_bus, BusPoint};
use crate::debug::format_polar_vec;
use crate::error::PFError;
use crate::mpopt::{GSOpt, Termination};
use crate::state::VoltageState;

/// Receives the state after every completed sweep.
pub trait ProgressMonitor {
    fn update(&self, sweep: usize, max_correction: f64, v: &VoltageState);
}

/// Logs the largest correction of each sweep at `info` level.
pub struct LogProgress {}

impl ProgressMonitor for LogProgress {
    fn update(&self, sweep: usize, max_correction: f64, _v: &VoltageState) {
        if sweep == 1 {
            log::info!(" it    max |dE| (p.u.)");
            log::info!("----  ----------------");
        }
        log::info!("{:>4}  {:>16.3e}", sweep, max_correction);
    }
}

/// Solves the power flow by Gauss-Seidel successive displacements.
///
/// Non-slack buses are visited in ascending order and each correction is
/// applied before the next bus is visited, so later buses see the
/// voltages already updated in the same sweep. Slack voltages are never
/// touched.
///
/// Returns the final state, whether the tolerance was met (always `false`
/// with [`Termination::FixedSweeps`]) and the number of sweeps performed.
pub(crate) fn gausspf(
    y_bus: &Admittance,
    spec: &[BusSpec],
    v0: VoltageState,
    opt: &GSOpt,
    progress: Option<&dyn ProgressMonitor>,
) -> Result<(VoltageState, bool, usize), PFError> {
    let mut v = v0;
    let mut converged = false;
    let mut i = 0;

    log::debug!("V0: {}", format_polar_vec(&v.to_complex()));

    while !converged && i < opt.max_sweeps {
        i += 1;

        let mut max_dv: f64 = 0.0;
        for (k, bus) in spec.iter().enumerate() {
            let dv = match *bus {
                BusSpec::Slack { .. } => continue,
                BusSpec::Load { p, q } => {
                    correct_load_bus(p, q, &bus_point(y_bus, &v, k), opt.singular_tol)
                }
                BusSpec::Generator { p, vm } => {
                    correct_generator_bus(p, vm, &bus_point(y_bus, &v, k), opt.singular_tol)
                }
            };
            let (d_re, d_im) = dv.ok_or(PFError::Singular {
                bus: k,
                iteration: i,
            })?;
            v.apply(k, d_re, d_im);
            max_dv = max_dv.max(d_re.abs()).max(d_im.abs());
        }

        log::trace!("sweep {}: V = {}", i, format_polar_vec(&v.to_complex()));
        if let Some(pm) = progress {
            pm.update(i, max_dv, &v);
        }

        if let Termination::Tolerance(tol) = opt.termination {
            converged = max_dv < tol;
        }
    }

    match opt.termination {
        Termination::FixedSweeps => {
            log::info!("Gauss-Seidel power flow completed {} sweeps.", i);
        }
        Termination::Tolerance(_) if converged => {
            log::info!("Gauss-Seidel power flow converged in {} sweeps.", i);
        }
        Termination::Tolerance(_) => {
            log::warn!("Gauss-Seidel power flow did not converge in {} sweeps.", i);
        }
    }

    Ok((v, converged, i))
}

fn bus_point(y_bus: &Admittance, v: &VoltageState, k: usize) -> BusPoint {
    BusPoint {
        i: y_bus.injection(v, k),
        e: (v.re()[k], v.im()[k]),
        y_kk: y_bus.self_admittance(k),
    }
}
