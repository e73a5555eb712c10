//! Per-feature standardization fitted on a group's reference embeddings

use ndarray::{Array1, Array2, ArrayView2, Axis};

/// Features whose spread falls below this are left unscaled
const MIN_SCALE: f64 = 10.0 * f64::EPSILON;

/// Zero-mean, unit-variance transform (population standard deviation)
#[derive(Debug, Clone)]
pub struct StandardScaler {
	mean: Array1<f64>,
	scale: Array1<f64>,
}

impl StandardScaler {
	pub fn fit(x: ArrayView2<f64>) -> Self {
		let n_features = x.ncols();
		let mean = x
			.mean_axis(Axis(0))
			.unwrap_or_else(|| Array1::zeros(n_features));

		let mut var = Array1::<f64>::zeros(n_features);
		for row in x.rows() {
			for ((v, &value), &m) in var.iter_mut().zip(row.iter()).zip(mean.iter()) {
				let d = value - m;
				*v += d * d;
			}
		}

		let n = x.nrows().max(1) as f64;
		let scale = var.mapv(|v| {
			let std = (v / n).sqrt();
			if std < MIN_SCALE {
				1.0
			} else {
				std
			}
		});

		Self { mean, scale }
	}

	pub fn transform(&self, x: ArrayView2<f64>) -> Array2<f64> {
		(&x - &self.mean) / &self.scale
	}

	pub fn fit_transform(x: ArrayView2<f64>) -> (Self, Array2<f64>) {
		let scaler = Self::fit(x);
		let scaled = scaler.transform(x);
		(scaler, scaled)
	}

	pub fn mean(&self) -> &Array1<f64> {
		&self.mean
	}

	pub fn scale(&self) -> &Array1<f64> {
		&self.scale
	}
}
