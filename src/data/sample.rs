//! Synthetic point generation around a known line.

use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::StandardNormal;
use tracing::debug;

use crate::domain::{Point, SampleConfig};
use crate::error::SampleError;

/// Draw `config.count` points with `x ~ U[x_min, x_max]` and
/// `y = slope·x + intercept + noise·z`, `z ~ N(0, 1)`.
///
/// The same config (seed included) always yields the same points.
pub fn generate_sample(config: &SampleConfig) -> Result<Vec<Point>, SampleError> {
    validate(config)?;

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut points = Vec::with_capacity(config.count);

    for _ in 0..config.count {
        let x = rng.gen_range(config.x_min..=config.x_max);
        let z: f64 = rng.sample(StandardNormal);
        let y = config.slope * x + config.intercept + config.noise * z;
        let point = Point::new(x, y).ok_or(SampleError::NonFiniteLine)?;
        points.push(point);
    }

    debug!(count = points.len(), seed = config.seed, "generated sample");
    Ok(points)
}

fn validate(config: &SampleConfig) -> Result<(), SampleError> {
    if config.count == 0 {
        return Err(SampleError::EmptySample);
    }
    if !(config.x_min.is_finite() && config.x_max.is_finite() && config.x_max > config.x_min) {
        return Err(SampleError::InvalidRange {
            min: config.x_min,
            max: config.x_max,
        });
    }
    if !(config.slope.is_finite() && config.intercept.is_finite()) {
        return Err(SampleError::NonFiniteLine);
    }
    if !(config.noise.is_finite() && config.noise >= 0.0) {
        return Err(SampleError::InvalidNoise(config.noise));
    }
    Ok(())
}
