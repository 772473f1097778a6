//! Simulation grid for MLER wave reconstruction.

use crate::error::MlerError;

/// Time and space grid over which conditioned waves are evaluated.
///
/// Use the builder methods to customise extents and spacings; the derived
/// axes are inclusive of both endpoints.
///
/// # Example
///
/// ```
/// use triton_mler::SimulationGrid;
///
/// let grid = SimulationGrid::new().with_time(-50.0, 50.0, 0.5);
/// assert!(grid.validate().is_ok());
/// assert_eq!(grid.time_axis().len(), 201);
/// ```
#[derive(Debug, Clone, serde::Serialize)]
pub struct SimulationGrid {
    start_time: f64,
    end_time: f64,
    dt: f64,
    t0: f64,
    start_x: f64,
    end_x: f64,
    dx: f64,
    x0: f64,
}

impl SimulationGrid {
    /// Creates the default grid: time from -150 s to 150 s in 1 s steps
    /// with the maximum event at t = 0, space from -300 m to 300 m in 1 m
    /// steps with the maximum event at x = 0.
    pub fn new() -> Self {
        Self {
            start_time: -150.0,
            end_time: 150.0,
            dt: 1.0,
            t0: 0.0,
            start_x: -300.0,
            end_x: 300.0,
            dx: 1.0,
            x0: 0.0,
        }
    }

    /// Sets the time extent and step.
    pub fn with_time(mut self, start: f64, end: f64, dt: f64) -> Self {
        self.start_time = start;
        self.end_time = end;
        self.dt = dt;
        self
    }

    /// Sets the time of the maximum event.
    pub fn with_t0(mut self, t0: f64) -> Self {
        self.t0 = t0;
        self
    }

    /// Sets the space extent and step.
    pub fn with_space(mut self, start: f64, end: f64, dx: f64) -> Self {
        self.start_x = start;
        self.end_x = end;
        self.dx = dx;
        self
    }

    /// Sets the position of the maximum event.
    pub fn with_x0(mut self, x0: f64) -> Self {
        self.x0 = x0;
        self
    }

    /// Time of the maximum event.
    pub fn t0(&self) -> f64 {
        self.t0
    }

    /// Position of the maximum event.
    pub fn x0(&self) -> f64 {
        self.x0
    }

    /// Validates this grid.
    pub fn validate(&self) -> Result<(), MlerError> {
        for (name, value) in [
            ("start_time", self.start_time),
            ("end_time", self.end_time),
            ("dt", self.dt),
            ("t0", self.t0),
            ("start_x", self.start_x),
            ("end_x", self.end_x),
            ("dx", self.dx),
            ("x0", self.x0),
        ] {
            if !value.is_finite() {
                return Err(MlerError::InvalidGrid {
                    reason: format!("{name} must be finite"),
                });
            }
        }
        if self.end_time <= self.start_time {
            return Err(MlerError::InvalidGrid {
                reason: "end_time must be after start_time".to_string(),
            });
        }
        if self.dt <= 0.0 {
            return Err(MlerError::InvalidGrid {
                reason: "dt must be positive".to_string(),
            });
        }
        if self.end_x <= self.start_x {
            return Err(MlerError::InvalidGrid {
                reason: "end_x must be after start_x".to_string(),
            });
        }
        if self.dx <= 0.0 {
            return Err(MlerError::InvalidGrid {
                reason: "dx must be positive".to_string(),
            });
        }
        Ok(())
    }

    /// Inclusive time axis with `ceil((end - start)/dt + 1)` points.
    pub fn time_axis(&self) -> Vec<f64> {
        linspace(
            self.start_time,
            self.end_time,
            ((self.end_time - self.start_time) / self.dt + 1.0).ceil() as usize,
        )
    }

    /// Inclusive space axis with `ceil((end - start)/dx + 1)` points.
    pub fn space_axis(&self) -> Vec<f64> {
        linspace(
            self.start_x,
            self.end_x,
            ((self.end_x - self.start_x) / self.dx + 1.0).ceil() as usize,
        )
    }
}

impl Default for SimulationGrid {
    fn default() -> Self {
        Self::new()
    }
}

/// `n` evenly spaced points from `start` to `end` inclusive.
fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    if n == 0 {
        return Vec::new();
    }
    if n == 1 {
        return vec![start];
    }
    let step = (end - start) / (n - 1) as f64;
    (0..n).map(|i| start + i as f64 * step).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn default_grid_sizes() {
        let grid = SimulationGrid::new();
        assert!(grid.validate().is_ok());
        let time = grid.time_axis();
        let space = grid.space_axis();
        assert_eq!(time.len(), 301);
        assert_eq!(space.len(), 601);
        assert_relative_eq!(time[0], -150.0);
        assert_relative_eq!(time[300], 150.0);
        assert_relative_eq!(space[0], -300.0);
        assert_relative_eq!(space[600], 300.0);
    }

    #[test]
    fn custom_grid_axes() {
        let grid = SimulationGrid::new()
            .with_time(-10.0, 10.0, 0.5)
            .with_space(-20.0, 20.0, 2.0);
        let time = grid.time_axis();
        let space = grid.space_axis();
        assert_eq!(time.len(), 41);
        assert_eq!(space.len(), 21);
        assert_relative_eq!(time[1] - time[0], 0.5, epsilon = 1e-12);
        assert_relative_eq!(space[1] - space[0], 2.0, epsilon = 1e-12);
    }

    #[test]
    fn validate_rejects_inverted_time() {
        let grid = SimulationGrid::new().with_time(10.0, -10.0, 1.0);
        assert!(matches!(
            grid.validate(),
            Err(MlerError::InvalidGrid { .. })
        ));
    }

    #[test]
    fn validate_rejects_zero_step() {
        let grid = SimulationGrid::new().with_space(-10.0, 10.0, 0.0);
        assert!(matches!(
            grid.validate(),
            Err(MlerError::InvalidGrid { .. })
        ));
    }

    #[test]
    fn linspace_endpoints() {
        let v = linspace(0.0, 1.0, 5);
        assert_eq!(v.len(), 5);
        assert_relative_eq!(v[0], 0.0);
        assert_relative_eq!(v[4], 1.0);
    }
}
