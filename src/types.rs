use serde::Serialize;

/// One recorded workout, as reported by the sensor.
#[derive(Debug, Clone, PartialEq)]
pub struct Workout {
    pub action_count: u64,
    pub duration_hours: f64,
    pub weight_kg: f64,
    pub kind: WorkoutKind,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WorkoutKind {
    Running,
    SportsWalking {
        height_cm: f64,
    },
    Swimming {
        pool_length_m: f64,
        pool_lap_count: f64,
    },
}

impl WorkoutKind {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Running => "Running",
            Self::SportsWalking { .. } => "SportsWalking",
            Self::Swimming { .. } => "Swimming",
        }
    }
}

/// Snapshot of the derived metrics of a workout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InfoMessage {
    pub training_type: String,
    pub duration: f64,
    pub distance: f64,
    pub speed: f64,
    pub calories: f64,
}

/// A raw `(tag, args)` pair before dispatch.
#[derive(Debug, Clone, PartialEq)]
pub struct Package {
    pub tag: String,
    pub args: Vec<f64>,
}
