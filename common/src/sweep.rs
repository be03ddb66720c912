//! Sweep grids
//!
//! Every exercise evaluates its formula over an ordered set of inputs, either
//! an inclusive integer range or an evenly spaced floating-point grid.

use ndarray::Array1;

use crate::error::{PhysicsError, PhysicsResult};

/// Strictly increasing, fixed-length sequence of sweep inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepGrid {
    values: Array1<f64>,
}

impl SweepGrid {
    /// Integers `start..=stop` with unit step
    pub fn integer_range(start: i32, stop: i32) -> PhysicsResult<Self> {
        if stop < start {
            return Err(PhysicsError::InvalidSweep(format!(
                "empty integer range {start}..={stop}"
            )));
        }
        let values = (start..=stop).map(f64::from).collect::<Array1<f64>>();
        Ok(Self { values })
    }

    /// `count` evenly spaced points from `start` to `stop`, both inclusive
    pub fn linspace(start: f64, stop: f64, count: usize) -> PhysicsResult<Self> {
        if !start.is_finite() || !stop.is_finite() {
            return Err(PhysicsError::InvalidSweep(format!(
                "non-finite bounds [{start}, {stop}]"
            )));
        }
        match count {
            0 => Err(PhysicsError::InvalidSweep("zero sample count".into())),
            1 => Ok(Self {
                values: Array1::from_elem(1, start),
            }),
            _ if stop <= start => Err(PhysicsError::InvalidSweep(format!(
                "bounds [{start}, {stop}] are not increasing"
            ))),
            _ => {
                let step = (stop - start) / (count - 1) as f64;
                if start + step <= start || stop - step >= stop {
                    return Err(PhysicsError::InvalidSweep(format!(
                        "{count} points do not fit between {start} and {stop}"
                    )));
                }
                // Pin the last sample so the upper bound is hit exactly.
                let values = Array1::from_shape_fn(count, |i| {
                    if i == count - 1 {
                        stop
                    } else {
                        start + step * i as f64
                    }
                });
                Ok(Self { values })
            }
        }
    }

    pub fn values(&self) -> &Array1<f64> {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().copied()
    }

    pub fn first(&self) -> f64 {
        self.values[0]
    }

    pub fn last(&self) -> f64 {
        self.values[self.values.len() - 1]
    }

    /// Scale every point, e.g. to convert nanometres to metres
    pub fn scaled(&self, factor: f64) -> Array1<f64> {
        &self.values * factor
    }

    /// Evaluate `f` at every point, in order. The first failure aborts the sweep.
    pub fn evaluate<T, F>(&self, f: F) -> PhysicsResult<Vec<T>>
    where
        F: FnMut(f64) -> PhysicsResult<T>,
    {
        self.iter().map(f).collect()
    }
}
