use crate::cmplx;
use num_complex::Complex64;

/// Bus voltages held as separate real and imaginary parts.
#[derive(Debug, Clone, PartialEq)]
pub struct VoltageState {
    re: Vec<f64>,
    im: Vec<f64>,
}

impl VoltageState {
    /// Slack bus at its specified value, every other bus at 1∠0.
    pub fn flat_start(nb: usize, slack: usize, v_slack: Complex64) -> Self {
        let mut re = vec![1.0; nb];
        let mut im = vec![0.0; nb];
        re[slack] = v_slack.re;
        im[slack] = v_slack.im;
        Self { re, im }
    }

    pub fn from_complex(v: &[Complex64]) -> Self {
        Self {
            re: v.iter().map(|z| z.re).collect(),
            im: v.iter().map(|z| z.im).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.re.len()
    }

    pub fn is_empty(&self) -> bool {
        self.re.is_empty()
    }

    pub fn re(&self) -> &[f64] {
        &self.re
    }

    pub fn im(&self) -> &[f64] {
        &self.im
    }

    pub fn get(&self, k: usize) -> Complex64 {
        cmplx!(self.re[k], self.im[k])
    }

    pub fn to_complex(&self) -> Vec<Complex64> {
        (0..self.len()).map(|k| self.get(k)).collect()
    }

    /// Adds a correction to bus `k` in place.
    #[inline]
    pub(crate) fn apply(&mut self, k: usize, d_re: f64, d_im: f64) {
        self.re[k] += d_re;
        self.im[k] += d_im;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_start() {
        let v = VoltageState::flat_start(4, 2, cmplx!(1.02, -0.1));
        assert_eq!(v.re(), &[1.0, 1.0, 1.02, 1.0]);
        assert_eq!(v.im(), &[0.0, 0.0, -0.1, 0.0]);
        assert_eq!(v.get(2), cmplx!(1.02, -0.1));
    }

    #[test]
    fn test_apply() {
        let mut v = VoltageState::from_complex(&[cmplx!(1.0), cmplx!(1.0)]);
        v.apply(1, -0.25, 0.5);
        assert_eq!(v.to_complex(), vec![cmplx!(1.0), cmplx!(0.75, 0.5)]);
    }
}
