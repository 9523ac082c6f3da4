use crate::error::ConfigError;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Fixed quantities of a bus. All values are per-unit.
#[derive(Debug, PartialEq, Copy, Clone, Serialize, Deserialize)]
pub enum BusSpec {
    /// Reference bus with fixed voltage magnitude and angle (radians).
    Slack { vm: f64, va: f64 },
    /// Fixed active and reactive power injection.
    Load { p: f64, q: f64 },
    /// Fixed active power injection and voltage magnitude.
    Generator { p: f64, vm: f64 },
}

impl BusSpec {
    pub fn is_slack(&self) -> bool {
        matches!(self, BusSpec::Slack { .. })
    }

    /// Specified slack voltage, `None` for other bus types.
    pub fn slack_voltage(&self) -> Option<Complex64> {
        match *self {
            BusSpec::Slack { vm, va } => Some(Complex64::from_polar(vm, va)),
            _ => None,
        }
    }

    fn is_finite(&self) -> bool {
        match *self {
            BusSpec::Slack { vm, va } => vm.is_finite() && va.is_finite(),
            BusSpec::Load { p, q } => p.is_finite() && q.is_finite(),
            BusSpec::Generator { p, vm } => p.is_finite() && vm.is_finite(),
        }
    }
}

/// Bus record with optional fields, as found in case files.
///
/// Angles are in degrees. Classification follows a fixed precedence:
/// P and Q make a load, P and |E| a generator, |E| and angle without P
/// the slack. Anything else is rejected.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub p: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub q: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vm: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub va: Option<f64>,
}

impl BusData {
    pub fn classify(&self, bus: usize) -> Result<BusSpec, ConfigError> {
        match (self.p, self.q, self.vm, self.va) {
            (Some(p), Some(q), _, _) => Ok(BusSpec::Load { p, q }),
            (Some(p), None, Some(vm), _) => Ok(BusSpec::Generator { p, vm }),
            (None, _, Some(vm), Some(va)) => Ok(BusSpec::Slack {
                vm,
                va: va * PI / 180.0,
            }),
            _ => Err(ConfigError::Unclassified { bus }),
        }
    }
}

impl From<&BusSpec> for BusData {
    fn from(spec: &BusSpec) -> Self {
        match *spec {
            BusSpec::Slack { vm, va } => BusData {
                vm: Some(vm),
                va: Some(va * 180.0 / PI),
                ..Default::default()
            },
            BusSpec::Load { p, q } => BusData {
                p: Some(p),
                q: Some(q),
                ..Default::default()
            },
            BusSpec::Generator { p, vm } => BusData {
                p: Some(p),
                vm: Some(vm),
                ..Default::default()
            },
        }
    }
}

/// Classifies every record up front, failing on the first bad one.
pub fn classify_buses(bus: &[BusData]) -> Result<Vec<BusSpec>, ConfigError> {
    bus.iter()
        .enumerate()
        .map(|(i, b)| b.classify(i))
        .collect()
}

/// Builds index lists for each type of bus (REF, PV, PQ).
///
/// Fails unless there is exactly one slack bus and every specified value
/// is finite.
pub fn bus_types(bus: &[BusSpec]) -> Result<(usize, Vec<usize>, Vec<usize>), ConfigError> {
    if let Some(i) = bus.iter().position(|b| !b.is_finite()) {
        return Err(ConfigError::NonFinite { bus: i });
    }

    let refbus = bus
        .iter()
        .enumerate()
        .filter(|(_, b)| b.is_slack())
        .map(|(i, _)| i)
        .collect::<Vec<usize>>();
    let pv = bus
        .iter()
        .enumerate()
        .filter(|(_, b)| matches!(b, BusSpec::Generator { .. }))
        .map(|(i, _)| i)
        .collect::<Vec<usize>>();
    let pq = bus
        .iter()
        .enumerate()
        .filter(|(_, b)| matches!(b, BusSpec::Load { .. }))
        .map(|(i, _)| i)
        .collect::<Vec<usize>>();

    match refbus.as_slice() {
        [slack] => Ok((*slack, pv, pq)),
        _ => Err(ConfigError::SlackCount(refbus.len())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[test]
    fn test_classify_precedence() -> Result<()> {
        // P and Q win even when |E| is also present.
        let b = BusData {
            p: Some(0.5),
            q: Some(0.1),
            vm: Some(1.02),
            va: None,
        };
        assert_eq!(b.classify(0)?, BusSpec::Load { p: 0.5, q: 0.1 });

        let b = BusData {
            p: Some(0.5),
            vm: Some(1.02),
            ..Default::default()
        };
        assert_eq!(b.classify(0)?, BusSpec::Generator { p: 0.5, vm: 1.02 });

        let b = BusData {
            vm: Some(1.05),
            va: Some(-90.0),
            ..Default::default()
        };
        match b.classify(0)? {
            BusSpec::Slack { vm, va } => {
                assert_eq!(vm, 1.05);
                assert!((va + PI / 2.0).abs() < 1e-15);
            }
            other => panic!("expected slack, got {:?}", other),
        }
        Ok(())
    }

    #[test]
    fn test_classify_rejects_incomplete() {
        let missing = [
            BusData::default(),
            BusData {
                p: Some(0.2),
                ..Default::default()
            },
            BusData {
                q: Some(0.2),
                vm: Some(1.0),
                ..Default::default()
            },
            BusData {
                p: Some(0.2),
                va: Some(0.0),
                ..Default::default()
            },
        ];
        for b in missing {
            assert_eq!(b.classify(3), Err(ConfigError::Unclassified { bus: 3 }));
        }
    }

    #[test]
    fn test_classify_buses_reports_first_bad_bus() {
        let bus = vec![
            BusData {
                vm: Some(1.0),
                va: Some(0.0),
                ..Default::default()
            },
            BusData {
                p: Some(-0.1),
                q: Some(0.0),
                ..Default::default()
            },
            BusData::default(),
            BusData::default(),
        ];
        assert_eq!(
            classify_buses(&bus),
            Err(ConfigError::Unclassified { bus: 2 })
        );
    }

    #[test]
    fn test_bus_types() -> Result<()> {
        let bus = [
            BusSpec::Load { p: -0.1, q: 0.0 },
            BusSpec::Slack { vm: 1.0, va: 0.0 },
            BusSpec::Generator { p: 0.3, vm: 1.01 },
            BusSpec::Load { p: -0.2, q: -0.1 },
        ];
        let (slack, pv, pq) = bus_types(&bus)?;
        assert_eq!(slack, 1);
        assert_eq!(pv, vec![2]);
        assert_eq!(pq, vec![0, 3]);
        Ok(())
    }

    #[test]
    fn test_bus_types_slack_count() {
        let none = [BusSpec::Load { p: 0.0, q: 0.0 }];
        assert_eq!(bus_types(&none), Err(ConfigError::SlackCount(0)));

        let two = [
            BusSpec::Slack { vm: 1.0, va: 0.0 },
            BusSpec::Slack { vm: 1.0, va: 0.0 },
        ];
        assert_eq!(bus_types(&two), Err(ConfigError::SlackCount(2)));
    }

    #[test]
    fn test_bus_types_non_finite() {
        let bus = [
            BusSpec::Slack { vm: 1.0, va: 0.0 },
            BusSpec::Load {
                p: f64::NAN,
                q: 0.0,
            },
        ];
        assert_eq!(bus_types(&bus), Err(ConfigError::NonFinite { bus: 1 }));
    }

    #[test]
    fn test_round_trip_record() -> Result<()> {
        let spec = BusSpec::Generator { p: 0.4, vm: 1.04 };
        assert_eq!(BusData::from(&spec).classify(0)?, spec);
        Ok(())
    }
}
