use derive_builder::Builder;
use num_traits::Zero;

/// Dense matrix with values stored in row-major order.
#[derive(Debug, Clone, Default, Builder)]
#[builder(default, build_fn(name = "pre_build", validate = "Self::validate"))]
pub struct Mat<T: Default> {
    #[builder(setter(custom))]
    rows: usize,
    #[builder(setter(custom))]
    cols: usize,

    values: Vec<T>,
}

impl<T> MatBuilder<T>
where
    T: Default + Clone,
{
    pub fn build(&self) -> Result<Mat<T>, MatBuilderError>
    where
        T: Zero,
    {
        let mut mat = self.pre_build()?;
        if self.values.is_none() {
            mat.values = vec![T::zero(); mat.rows * mat.cols];
        }
        Ok(mat)
    }

    fn validate(&self) -> Result<(), String> {
        if let Some(values) = &self.values {
            let rows = self.rows.unwrap_or_default();
            let cols = self.cols.unwrap_or_default();
            if values.len() != rows * cols {
                return Err(format!(
                    "values length ({}) must be rows * cols ({} * {} = {})",
                    values.len(),
                    rows,
                    cols,
                    rows * cols
                ));
            }
        }
        Ok(())
    }
}

impl<T> Mat<T>
where
    T: Default + Copy,
{
    pub fn new(rows: usize, cols: usize) -> MatBuilder<T> {
        MatBuilder {
            rows: Some(rows),
            cols: Some(cols),
            ..Default::default()
        }
    }

    /// Builds a matrix from nested rows. Ragged input is rejected.
    pub fn from_rows(rows: &[Vec<T>]) -> Result<Self, MatBuilderError>
    where
        T: Zero,
    {
        let ncols = rows.first().map_or(0, Vec::len);
        if let Some((i, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != ncols) {
            return Err(MatBuilderError::from(format!(
                "row {} has {} values, expected {}",
                i,
                r.len(),
                ncols
            )));
        }
        Mat::new(rows.len(), ncols).values(rows.concat()).build()
    }

    pub fn rows(&self) -> usize {
        self.rows
    }
    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> T {
        debug_assert!(row < self.rows && col < self.cols);
        self.values[row * self.cols + col]
    }

    pub fn row(&self, row: usize) -> impl Iterator<Item = T> + '_ {
        assert!(row < self.rows);
        self.values[row * self.cols..(row + 1) * self.cols].iter().copied()
    }
}
