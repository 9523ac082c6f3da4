use crate::solution::SolvedNetwork;
use num_complex::Complex64;
use pretty_dtoa::{dtoa, FmtFloatConfig};
use std::fmt::Write;

const FLOAT_CONFIG: FmtFloatConfig = FmtFloatConfig::default()
    .add_point_zero(false)
    .max_significant_digits(9);

const TABLE_CONFIG: FmtFloatConfig = FmtFloatConfig::default()
    .add_point_zero(true)
    .max_significant_digits(7);

pub fn format_f64_vec(v: &[f64]) -> String {
    let a: Vec<String> = v.iter().map(|f| dtoa(*f, FLOAT_CONFIG)).collect();
    format!("[{}]", a.join(", "))
}

fn format_polar(z: &Complex64) -> String {
    format!(
        "{}\u{2220}{}\u{00B0}",
        dtoa(z.norm(), FLOAT_CONFIG),
        dtoa(z.arg().to_degrees(), FLOAT_CONFIG)
    )
}

pub fn format_polar_vec(v: &[Complex64]) -> String {
    let a: Vec<String> = v.iter().map(format_polar).collect();
    format!("[{}]", a.join(", "))
}

/// Renders the per-bus results and the total loss as a plain text table.
pub fn format_solution(sol: &SolvedNetwork) -> String {
    let mut s = String::new();
    let _ = writeln!(
        s,
        "{:>4}  {:>12}  {:>12}  {:>12}  {:>12}",
        "bus", "|V| (p.u.)", "angle (deg)", "P (p.u.)", "Q (p.u.)"
    );
    let _ = writeln!(s, "{}", "-".repeat(4 + 4 * 14));
    for (k, b) in sol.bus.iter().enumerate() {
        let _ = writeln!(
            s,
            "{:>4}  {:>12}  {:>12}  {:>12}  {:>12}",
            k,
            dtoa(b.vm, TABLE_CONFIG),
            dtoa(b.va_deg(), TABLE_CONFIG),
            dtoa(b.p, TABLE_CONFIG),
            dtoa(b.q, TABLE_CONFIG),
        );
    }
    let _ = writeln!(s, "total loss: {}", dtoa(sol.loss, TABLE_CONFIG));
    let _ = write!(
        s,
        "sweeps: {}{}",
        sol.sweeps,
        if sol.converged { " (converged)" } else { "" }
    );
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cmplx;
    use crate::solution::BusResult;

    #[test]
    fn test_format_vecs() {
        assert_eq!(format_f64_vec(&[1.0, -0.25]), "[1, -0.25]");
        let polar = format_polar_vec(&[cmplx!(1.05, 0.0), cmplx!(0.0, 2.0)]);
        assert!(polar.starts_with("[1.05\u{2220}"), "{}", polar);
        assert!(polar.ends_with(", 2\u{2220}90\u{00B0}]"), "{}", polar);
    }

    #[test]
    fn test_format_solution() {
        let sol = SolvedNetwork {
            bus: vec![BusResult {
                v: cmplx!(1.0, 0.0),
                i: cmplx!(0.5, 0.0),
                p: 0.5,
                q: 0.0,
                vm: 1.0,
                va: 0.0,
            }],
            loss: 0.5,
            sweeps: 12,
            converged: true,
        };
        let table = format_solution(&sol);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].contains("|V| (p.u.)"));
        assert!(lines[2].trim_start().starts_with('0'));
        assert_eq!(lines[3], "total loss: 0.5");
        assert_eq!(lines[4], "sweeps: 12 (converged)");
    }
}
