use crate::dense::Mat;
use crate::error::ConfigError;
use crate::state::VoltageState;

/// Dense nodal admittance matrix `Y = G + jB`.
#[derive(Debug, Clone)]
pub struct Admittance {
    g: Mat<f64>,
    b: Mat<f64>,
}

impl Admittance {
    /// Checks that G and B are square, non-empty and of the same order.
    pub fn new(g: Mat<f64>, b: Mat<f64>) -> Result<Self, ConfigError> {
        for (name, m) in [("G", &g), ("B", &b)] {
            if !m.is_square() {
                return Err(ConfigError::NotSquare {
                    name,
                    rows: m.rows(),
                    cols: m.cols(),
                });
            }
        }
        if g.rows() != b.rows() {
            return Err(ConfigError::DimensionMismatch {
                g: g.rows(),
                b: b.rows(),
            });
        }
        if g.rows() == 0 {
            return Err(ConfigError::Empty);
        }
        Ok(Self { g, b })
    }

    /// Builds from nested rows, e.g. as read from a case file.
    pub fn from_rows(g: &[Vec<f64>], b: &[Vec<f64>]) -> Result<Self, ConfigError> {
        let g = Mat::from_rows(g).map_err(|e| ConfigError::Matrix(e.to_string()))?;
        let b = Mat::from_rows(b).map_err(|e| ConfigError::Matrix(e.to_string()))?;
        Self::new(g, b)
    }

    /// Number of buses.
    pub fn nb(&self) -> usize {
        self.g.rows()
    }

    pub fn g(&self) -> &Mat<f64> {
        &self.g
    }

    pub fn b(&self) -> &Mat<f64> {
        &self.b
    }

    /// Self admittance `(G_kk, B_kk)`.
    pub fn self_admittance(&self, k: usize) -> (f64, f64) {
        (self.g.get(k, k), self.b.get(k, k))
    }

    /// Complex current injected at bus `k`, row `k` of `Y` times `E`,
    /// as `(i_re, i_im)`.
    ///
    /// Terms are accumulated in ascending column order so identical
    /// state always yields identical bits.
    pub fn injection(&self, v: &VoltageState, k: usize) -> (f64, f64) {
        let (e_re, e_im) = (v.re(), v.im());
        let mut i_re = 0.0;
        let mut i_im = 0.0;
        for (m, (g_km, b_km)) in self.g.row(k).zip(self.b.row(k)).enumerate() {
            i_re += g_km * e_re[m] - b_km * e_im[m];
            i_im += g_km * e_im[m] + b_km * e_re[m];
        }
        (i_re, i_im)
    }
}

/// Complex power `S = E * conj(I)` as `(p, q)`.
#[inline]
pub fn power(i_re: f64, i_im: f64, e_re: f64, e_im: f64) -> (f64, f64) {
    let p = i_re * e_re + i_im * e_im;
    let q = i_re * e_im - i_im * e_re;
    (p, q)
}
