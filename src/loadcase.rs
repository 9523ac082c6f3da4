use crate::admittance::Admittance;
use crate::bus_types::{classify_buses, BusData, BusSpec};
use crate::error::ConfigError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Solver input as stored on disk: the dense G and B matrices and one
/// bus record per row.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Case {
    #[serde(default)]
    pub name: String,
    pub g: Vec<Vec<f64>>,
    pub b: Vec<Vec<f64>>,
    pub bus: Vec<BusData>,
}

impl Case {
    pub fn admittance(&self) -> Result<Admittance, ConfigError> {
        Admittance::from_rows(&self.g, &self.b)
    }

    pub fn bus_specs(&self) -> Result<Vec<BusSpec>, ConfigError> {
        classify_buses(&self.bus)
    }
}

/// Reads a JSON case file.
pub fn load_case(case_path: &Path) -> Result<Case> {
    let file = File::open(case_path)
        .with_context(|| format!("unable to open case file {}", case_path.display()))?;
    let case: Case = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("unable to parse case file {}", case_path.display()))?;
    Ok(case)
}
