use crate::admittance::Admittance;
use crate::bus_types::BusSpec;
use crate::loadcase::load_case;
use anyhow::Result;
use std::env;
use std::path::{Path, PathBuf};

/// Voltage magnitudes of `case6` after 60 sweeps.
pub(crate) const CASE6_VM: [f64; 6] = [1.05, 1.04, 0.996234, 1.015435, 1.010234, 0.98097];

/// Voltage angles (degrees) of `case6` after 60 sweeps.
pub(crate) const CASE6_VA_DEG: [f64; 6] =
    [0.0, -2.28144, -6.04157, -4.21349, -4.86335, -7.43799];

/// Total loss of `case6` after 60 sweeps.
pub(crate) const CASE6_LOSS: f64 = 0.045229;

pub(crate) fn casedata_dir() -> Result<PathBuf> {
    let manifest_dir = env::var("CARGO_MANIFEST_DIR")?;
    Ok(Path::new(&manifest_dir).join("casedata"))
}

/// Six bus network: slack at bus 0, generator at bus 1, loads elsewhere.
pub(crate) fn case6() -> Result<(Admittance, Vec<BusSpec>)> {
    let case = load_case(&casedata_dir()?.join("case6.json"))?;
    Ok((case.admittance()?, case.bus_specs()?))
}
