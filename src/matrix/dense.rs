/// Dense row-major matrix of `f64`.
///
/// Element `(r, c)` lives at `data[r * cols + c]`. Both indices are
/// zero-based.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Wraps row-major `data` as a `rows × cols` matrix.
    ///
    /// # Panics
    ///
    /// Panics if `data.len() != rows * cols`.
    ///
    /// # Example
    ///
    /// ```
    /// use dct2::Matrix;
    ///
    /// let m = Matrix::new(2, 3, vec![1.0, 2.0, 3.0,
    ///                                4.0, 5.0, 6.0]);
    /// assert_eq!(m.at(1, 0), 4.0);
    /// ```
    pub fn new(rows: usize, cols: usize, data: Vec<f64>) -> Self {
        assert_eq!(
            data.len(),
            rows * cols,
            "expected {}x{}={} elements",
            rows,
            cols,
            rows * cols
        );
        Self { rows, cols, data }
    }

    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Builds a matrix from a slice of equally long rows.
    ///
    /// # Panics
    ///
    /// Panics if the rows have different lengths.
    pub fn from_rows(rows: &[&[f64]]) -> Self {
        let cols = rows.first().map_or(0, |r| r.len());
        let mut data = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), cols, "row {}: expected {} columns", i, cols);
            data.extend_from_slice(row);
        }
        Self {
            rows: rows.len(),
            cols,
            data,
        }
    }

    /// `(rows, cols)`
    pub fn dims(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn at(&self, r: usize, c: usize) -> f64 {
        debug_assert!(r < self.rows && c < self.cols);
        self.data[r * self.cols + c]
    }

    #[inline]
    pub fn set(&mut self, r: usize, c: usize, v: f64) {
        debug_assert!(r < self.rows && c < self.cols);
        self.data[r * self.cols + c] = v;
    }

    pub fn row(&self, r: usize) -> &[f64] {
        &self.data[r * self.cols..(r + 1) * self.cols]
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    /// Changes the shape to `rows × cols`, keeping the allocation when it
    /// is large enough. Contents after a reshape are unspecified; callers
    /// overwrite every cell.
    pub fn reshape(&mut self, rows: usize, cols: usize) {
        self.data.resize(rows * cols, 0.0);
        self.rows = rows;
        self.cols = cols;
    }

    /// Sum of squared entries.
    pub fn sum_of_squares(&self) -> f64 {
        self.data.iter().map(|&x| x * x).sum()
    }

    /// Cell-wise comparison with a combined tolerance.
    ///
    /// Two cells differ only when both the absolute error `|a - b|` and the
    /// relative error `2|a - b| / |a + b|` exceed `tolerance`. Shapes must
    /// match.
    ///
    /// # Example
    ///
    /// ```
    /// use dct2::Matrix;
    ///
    /// let a = Matrix::new(1, 2, vec![1.0, 1e12]);
    /// let b = Matrix::new(1, 2, vec![1.0 + 1e-12, 1e12 + 1e-3]);
    /// assert!(a.approx_eq(&b, 1e-10));
    /// ```
    pub fn approx_eq(&self, other: &Matrix, tolerance: f64) -> bool {
        self.dims() == other.dims()
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(&a, &b)| !different(a, b, tolerance))
    }
}

/// True when `a` and `b` are apart by more than `tolerance`, both
/// absolutely and relatively.
pub fn different(a: f64, b: f64, tolerance: f64) -> bool {
    let diff = (a - b).abs();
    diff > tolerance && diff / (a + b).abs() * 2.0 > tolerance
}
