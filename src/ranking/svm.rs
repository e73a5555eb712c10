//! One-class support vector machine with an RBF kernel.
//!
//! The dual
//!
//! ```text
//! min  1/2 a'Qa   s.t.  0 <= a_i <= 1,  sum(a) = nu * l
//! ```
//!
//! is solved by `linfa-svm`'s SMO solver. The decision value of a point is
//! `sum_i a_i K(x_i, x) - rho`: positive inside the learned support,
//! negative outside.

use linfa::dataset::{DatasetBase, Pr};
use linfa::traits::Fit;
use linfa_svm::Svm;
use ndarray::{Array1, Array2, ArrayView2, Axis};
use ndarray_linfa as nd;

use crate::config::SvmParams;
use crate::error::{RankError, RankResult};

/// Coefficients below this are treated as zero when picking support vectors
const MIN_DUAL_COEF: f64 = 100.0 * f64::EPSILON;

/// Fitted one-class boundary
#[derive(Debug, Clone)]
pub struct OneClassSvm {
	support: Array2<f64>,
	dual_coef: Array1<f64>,
	rho: f64,
	gamma: f64,
}

impl OneClassSvm {
	/// Fit on the rows of `x` (already standardized)
	pub fn fit(x: ArrayView2<f64>, params: &SvmParams) -> RankResult<Self> {
		let gamma = scale_gamma(x);

		let records = nd::Array2::from_shape_vec((x.nrows(), x.ncols()), x.iter().copied().collect())
			.map_err(|e| RankError::Solver(e.to_string()))?;
		let dataset = DatasetBase::from(records);

		// linfa's gaussian kernel is exp(-||x - y||^2 / eps)
		let model = Svm::<f64, Pr>::params()
			.nu_weight(params.nu)
			.gaussian_kernel(1.0 / gamma)
			.eps(params.tolerance)
			.fit(&dataset)
			.map_err(|e| RankError::Solver(e.to_string()))?;

		if !model.rho.is_finite() {
			return Err(RankError::Solver("solver returned a non-finite offset".to_string()));
		}

		let support_idx: Vec<usize> = model
			.alpha
			.iter()
			.enumerate()
			.filter(|&(_, &a)| a > MIN_DUAL_COEF)
			.map(|(i, _)| i)
			.collect();

		Ok(Self {
			support: x.select(Axis(0), &support_idx),
			dual_coef: support_idx.iter().map(|&i| model.alpha[i]).collect(),
			rho: model.rho,
			gamma,
		})
	}

	/// Signed distance of each row of `x` to the boundary
	pub fn decision_function(&self, x: ArrayView2<f64>) -> Vec<f64> {
		if x.nrows() == 0 {
			return Vec::new();
		}
		let k = rbf_kernel(x, self.support.view(), self.gamma);
		k.rows()
			.into_iter()
			.map(|row| {
				let sum: f64 = row.iter().zip(self.dual_coef.iter()).map(|(k, a)| k * a).sum();
				sum - self.rho
			})
			.collect()
	}

	pub fn rho(&self) -> f64 {
		self.rho
	}

	pub fn gamma(&self) -> f64 {
		self.gamma
	}

	pub fn n_support(&self) -> usize {
		self.support.nrows()
	}

	pub fn dual_coef(&self) -> &Array1<f64> {
		&self.dual_coef
	}
}

/// `1 / (n_features * Var(x))` over all entries, or 1.0 for constant data
pub fn scale_gamma(x: ArrayView2<f64>) -> f64 {
	let n = x.len();
	if n == 0 {
		return 1.0;
	}
	let mean = x.sum() / n as f64;
	let var = x.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / n as f64;
	if var > 0.0 {
		1.0 / (x.ncols() as f64 * var)
	} else {
		1.0
	}
}

/// `K[i, j] = exp(-gamma * ||a_i - b_j||^2)`.
///
/// Distances are summed directly rather than expanded through a matrix
/// product, so identical rows always get bit-identical kernel values.
pub fn rbf_kernel(a: ArrayView2<f64>, b: ArrayView2<f64>, gamma: f64) -> Array2<f64> {
	Array2::from_shape_fn((a.nrows(), b.nrows()), |(i, j)| {
		let dist: f64 = a
			.row(i)
			.iter()
			.zip(b.row(j).iter())
			.map(|(x, y)| (x - y) * (x - y))
			.sum();
		(-gamma * dist).exp()
	})
}
