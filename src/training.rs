use crate::errors::WorkoutError;
use crate::types::{InfoMessage, Workout, WorkoutKind};

pub const M_IN_KM: f64 = 1000.0;
pub const MIN_IN_H: f64 = 60.0;

/// One step in meters.
pub const LEN_STEP: f64 = 0.65;
/// One stroke in meters.
pub const LEN_STROKE: f64 = 1.38;

const RUN_SPEED_MULTIPLIER: f64 = 18.0;
const RUN_SPEED_SHIFT: f64 = 20.0;

const WLK_WEIGHT_MULTIPLIER: f64 = 0.035;
const WLK_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

const SWM_SPEED_SHIFT: f64 = 1.1;
const SWM_WEIGHT_MULTIPLIER: f64 = 2.0;

impl Workout {
    pub const fn step_length_m(&self) -> f64 {
        match self.kind {
            WorkoutKind::Swimming { .. } => LEN_STROKE,
            WorkoutKind::Running | WorkoutKind::SportsWalking { .. } => LEN_STEP,
        }
    }

    #[allow(clippy::cast_precision_loss)]
    pub fn distance_km(&self) -> f64 {
        self.action_count as f64 * self.step_length_m() / M_IN_KM
    }

    /// Swimming speed comes from the pool geometry, not from stroke count.
    pub fn mean_speed_kmh(&self) -> f64 {
        match self.kind {
            WorkoutKind::Swimming {
                pool_length_m,
                pool_lap_count,
            } => pool_length_m * pool_lap_count / M_IN_KM / self.duration_hours,
            WorkoutKind::Running | WorkoutKind::SportsWalking { .. } => {
                self.distance_km() / self.duration_hours
            }
        }
    }

    pub fn calories_kcal(&self) -> f64 {
        let speed = self.mean_speed_kmh();
        match self.kind {
            WorkoutKind::Running => {
                (RUN_SPEED_MULTIPLIER * speed - RUN_SPEED_SHIFT) * self.weight_kg / M_IN_KM
                    * (self.duration_hours * MIN_IN_H)
            }
            WorkoutKind::SportsWalking { height_cm } => {
                // Floored quotient, the reference numbers depend on it.
                let speed_term = (speed * speed).div_euclid(height_cm);
                (WLK_WEIGHT_MULTIPLIER * self.weight_kg
                    + speed_term * WLK_SPEED_HEIGHT_MULTIPLIER * self.weight_kg)
                    * (self.duration_hours * MIN_IN_H)
            }
            WorkoutKind::Swimming { .. } => {
                (speed + SWM_SPEED_SHIFT) * SWM_WEIGHT_MULTIPLIER * self.weight_kg
            }
        }
    }

    /// Fails when valid inputs still overflow a metric (tiny durations, huge weights).
    pub fn show_training_info(&self) -> Result<InfoMessage, WorkoutError> {
        let info = InfoMessage {
            training_type: self.kind.name().to_string(),
            duration: self.duration_hours,
            distance: finite("distance", self.distance_km())?,
            speed: finite("speed", self.mean_speed_kmh())?,
            calories: finite("calories", self.calories_kcal())?,
        };
        tracing::trace!(?info, "summary built");
        Ok(info)
    }
}

fn finite(metric: &'static str, value: f64) -> Result<f64, WorkoutError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(WorkoutError::NonFiniteMetric { metric, value })
    }
}
