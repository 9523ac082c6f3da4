use derive_builder::Builder;

/// Default number of Gauss-Seidel sweeps.
pub const DEFAULT_SWEEPS: usize = 60;

/// Default threshold on `|det|` of a 2x2 correction system.
pub const DEFAULT_SINGULAR_TOL: f64 = 1e-12;

/// When to stop sweeping.
#[derive(Debug, PartialEq, Copy, Clone, Default)]
pub enum Termination {
    /// Always run `max_sweeps` sweeps. No convergence test is made.
    #[default]
    FixedSweeps,
    /// Stop after the first sweep whose largest correction component
    /// (real or imaginary, p.u.) is below the tolerance. Still bounded
    /// by `max_sweeps`.
    Tolerance(f64),
}

/// Gauss-Seidel power flow options.
#[derive(Debug, Clone, PartialEq, Builder)]
#[builder(build_fn(validate = "Self::validate"))]
pub struct GSOpt {
    /// Number of sweeps, or the upper bound on it in tolerance mode.
    #[builder(default = "DEFAULT_SWEEPS")]
    pub max_sweeps: usize,

    #[builder(default)]
    pub termination: Termination,

    /// Corrections whose system determinant is smaller than this in
    /// magnitude are reported as singular.
    #[builder(default = "DEFAULT_SINGULAR_TOL")]
    pub singular_tol: f64,
}

impl Default for GSOpt {
    fn default() -> Self {
        Self {
            max_sweeps: DEFAULT_SWEEPS,
            termination: Termination::FixedSweeps,
            singular_tol: DEFAULT_SINGULAR_TOL,
        }
    }
}

impl GSOpt {
    /// Reference behaviour: exactly `sweeps` sweeps.
    pub fn fixed(sweeps: usize) -> Self {
        Self {
            max_sweeps: sweeps,
            ..Default::default()
        }
    }

    pub(crate) fn check(&self) -> Result<(), String> {
        check_values(&self.termination, self.singular_tol)
    }
}

impl GSOptBuilder {
    fn validate(&self) -> Result<(), String> {
        check_values(
            &self.termination.unwrap_or_default(),
            self.singular_tol.unwrap_or(DEFAULT_SINGULAR_TOL),
        )
    }
}

fn check_values(termination: &Termination, singular_tol: f64) -> Result<(), String> {
    if let Termination::Tolerance(tol) = *termination {
        if !(tol.is_finite() && tol > 0.0) {
            return Err(format!("tolerance must be positive, got {}", tol));
        }
    }
    if !(singular_tol.is_finite() && singular_tol >= 0.0) {
        return Err(format!(
            "singular tolerance must be non-negative, got {}",
            singular_tol
        ));
    }
    Ok(())
}
