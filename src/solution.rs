use crate::admittance::{power, Admittance};
use crate::cmplx;
use crate::state::VoltageState;
use num_complex::Complex64;
use serde::Serialize;

/// Quantities derived for one bus from the final voltages.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BusResult {
    /// Voltage.
    pub v: Complex64,
    /// Current injection.
    pub i: Complex64,
    /// Active power injection (p.u.).
    pub p: f64,
    /// Reactive power injection (p.u.).
    pub q: f64,
    /// Voltage magnitude (p.u.).
    pub vm: f64,
    /// Voltage angle (radians).
    pub va: f64,
}

impl BusResult {
    /// Voltage angle in degrees.
    pub fn va_deg(&self) -> f64 {
        self.va.to_degrees()
    }
}

/// Solved power flow.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolvedNetwork {
    pub bus: Vec<BusResult>,
    /// Sum of active power injections over all buses.
    pub loss: f64,
    /// Number of sweeps performed.
    pub sweeps: usize,
    /// Whether the tolerance was met. Always `false` for fixed sweeps.
    pub converged: bool,
}

impl SolvedNetwork {
    pub fn vm(&self) -> Vec<f64> {
        self.bus.iter().map(|b| b.vm).collect()
    }

    pub fn va_deg(&self) -> Vec<f64> {
        self.bus.iter().map(|b| b.va_deg()).collect()
    }

    pub fn voltages(&self) -> Vec<Complex64> {
        self.bus.iter().map(|b| b.v).collect()
    }
}

/// Derives per-bus currents, powers and polar voltages, and the total loss.
pub(crate) fn extract(
    y_bus: &Admittance,
    v: &VoltageState,
    sweeps: usize,
    converged: bool,
) -> SolvedNetwork {
    let bus: Vec<BusResult> = (0..v.len())
        .map(|k| {
            let (i_re, i_im) = y_bus.injection(v, k);
            let (e_re, e_im) = (v.re()[k], v.im()[k]);
            let (p, q) = power(i_re, i_im, e_re, e_im);
            BusResult {
                v: cmplx!(e_re, e_im),
                i: cmplx!(i_re, i_im),
                p,
                q,
                vm: e_re.hypot(e_im),
                va: e_im.atan2(e_re),
            }
        })
        .collect();
    let loss = bus.iter().map(|b| b.p).sum();

    SolvedNetwork {
        bus,
        loss,
        sweeps,
        converged,
    }
}
