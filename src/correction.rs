//! Per-bus voltage corrections.
//!
//! Each correction linearizes the bus mismatch around the present voltage
//! using only the self admittance `G_kk + jB_kk` and solves the resulting
//! 2x2 system exactly. The result is added to `(e_re, e_im)` of the bus.

use crate::admittance::power;

/// Present operating point of a bus.
#[derive(Debug, Clone, Copy)]
pub struct BusPoint {
    /// Current injection `(i_re, i_im)`.
    pub i: (f64, f64),
    /// Voltage `(e_re, e_im)`.
    pub e: (f64, f64),
    /// Self admittance `(G_kk, B_kk)`.
    pub y_kk: (f64, f64),
}

impl BusPoint {
    /// First row of the Jacobian, the derivatives of P.
    fn p_row(&self) -> [f64; 2] {
        let (i_re, i_im) = self.i;
        let (e_re, e_im) = self.e;
        let (g, b) = self.y_kk;
        [
            e_re * g + e_im * b + i_re,
            -e_re * b + e_im * g + i_im,
        ]
    }
}

/// Correction for a load (PQ) bus with specified `p` and `q`.
///
/// Returns `None` when the 2x2 system is singular.
pub fn correct_load_bus(p: f64, q: f64, pt: &BusPoint, singular_tol: f64) -> Option<(f64, f64)> {
    let (i_re, i_im) = pt.i;
    let (e_re, e_im) = pt.e;
    let (g, b) = pt.y_kk;

    let (p_calc, q_calc) = power(i_re, i_im, e_re, e_im);
    let dp = p - p_calc;
    let dq = q - q_calc;

    let a = [
        pt.p_row(),
        [
            -e_re * b + e_im * g - i_im,
            -e_re * g + e_im * b + i_re,
        ],
    ];
    solve2(&a, [dp, dq], singular_tol)
}

/// Correction for a generator (PV) bus with specified `p` and magnitude `vm`.
///
/// The voltage mismatch is taken on the squared magnitude.
pub fn correct_generator_bus(
    p: f64,
    vm: f64,
    pt: &BusPoint,
    singular_tol: f64,
) -> Option<(f64, f64)> {
    let (i_re, i_im) = pt.i;
    let (e_re, e_im) = pt.e;

    let (p_calc, _) = power(i_re, i_im, e_re, e_im);
    let dp = p - p_calc;
    let dv2 = vm * vm - (e_re * e_re + e_im * e_im);

    let a = [pt.p_row(), [2.0 * e_re, 2.0 * e_im]];
    solve2(&a, [dp, dv2], singular_tol)
}

/// Solves `a * x = rhs` by Cramer's rule.
fn solve2(a: &[[f64; 2]; 2], rhs: [f64; 2], singular_tol: f64) -> Option<(f64, f64)> {
    let det = a[0][0] * a[1][1] - a[0][1] * a[1][0];
    if !det.is_finite() || det.abs() < singular_tol {
        return None;
    }
    let x0 = (rhs[0] * a[1][1] - a[0][1] * rhs[1]) / det;
    let x1 = (a[0][0] * rhs[1] - a[1][0] * rhs[0]) / det;
    Some((x0, x1))
}
