use crate::direct::{basis, norm};

/// Precomputed 1D DCT basis for length `n`.
///
/// `table[k * n + i] = cos(π/n · (i + ½) · k)` and `alpha[k] = c(k, n)`.
pub struct CosTable {
    n: usize,
    table: Vec<f64>,
    alpha: Vec<f64>,
}

impl CosTable {
    pub fn new(n: usize) -> Self {
        let mut table = Vec::with_capacity(n * n);
        for k in 0..n {
            table.extend((0..n).map(|i| basis(i, k, n)));
        }
        let alpha = (0..n).map(|k| norm(k, n)).collect();
        Self { n, table, alpha }
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// 1D DCT-II of `input` into `output`, both of length `n`.
    #[inline]
    pub fn dct1d(&self, input: &[f64], output: &mut [f64]) {
        let n = self.n;
        for (k, out) in output.iter_mut().enumerate().take(n) {
            let row = &self.table[k * n..(k + 1) * n];
            let sum: f64 = input.iter().zip(row).map(|(&x, &c)| x * c).sum();
            *out = self.alpha[k] * sum;
        }
    }

    /// 1D DCT-III of `input` into `output`, both of length `n`.
    #[inline]
    pub fn idct1d(&self, input: &[f64], output: &mut [f64]) {
        let n = self.n;
        for (i, out) in output.iter_mut().enumerate().take(n) {
            let mut sum = 0.0;
            for k in 0..n {
                sum += self.alpha[k] * input[k] * self.table[k * n + i];
            }
            *out = sum;
        }
    }
}
