use crate::dlog;
use crate::errors::WorkoutError;
use crate::types::{Package, Workout, WorkoutKind};
use std::fmt;
use std::str::FromStr;

/// Workout codes understood by the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkoutTag {
    Run,
    Wlk,
    Swm,
}

impl WorkoutTag {
    pub const ALL: [Self; 3] = [Self::Run, Self::Wlk, Self::Swm];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Run => "RUN",
            Self::Wlk => "WLK",
            Self::Swm => "SWM",
        }
    }

    /// Number of positional raw values the tag expects.
    pub const fn arity(self) -> usize {
        match self {
            Self::Run => 3,
            Self::Wlk => 4,
            Self::Swm => 5,
        }
    }
}

impl fmt::Display for WorkoutTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkoutTag {
    type Err = WorkoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| WorkoutError::UnknownTag(s.to_string()))
    }
}

/// Build a workout from a tag and its positional sensor values.
///
/// Layout: `[action, duration_h, weight_kg]`, followed by `height_cm` for
/// `WLK` or `pool_length_m, pool_lap_count` for `SWM`.
pub fn read_package(workout_type: &str, data: &[f64]) -> Result<Workout, WorkoutError> {
    let tag: WorkoutTag = workout_type.parse()?;

    if data.len() != tag.arity() {
        return Err(WorkoutError::Arity {
            tag: tag.as_str(),
            expected: tag.arity(),
            got: data.len(),
        });
    }

    let action_count = action_count(data[0])?;
    let duration_hours = positive("duration", data[1])?;
    let weight_kg = positive("weight", data[2])?;

    let kind = match tag {
        WorkoutTag::Run => WorkoutKind::Running,
        WorkoutTag::Wlk => WorkoutKind::SportsWalking {
            height_cm: positive("height", data[3])?,
        },
        WorkoutTag::Swm => WorkoutKind::Swimming {
            pool_length_m: positive("pool length", data[3])?,
            pool_lap_count: non_negative("pool lap count", data[4])?,
        },
    };

    dlog!("dispatched tag={tag} kind={:?}", kind);

    Ok(Workout {
        action_count,
        duration_hours,
        weight_kg,
        kind,
    })
}

pub fn read(package: &Package) -> Result<Workout, WorkoutError> {
    read_package(&package.tag, &package.args)
}

fn invalid(field: &'static str, value: f64, reason: &'static str) -> WorkoutError {
    WorkoutError::InvalidValue {
        field,
        value,
        reason,
    }
}

fn positive(field: &'static str, value: f64) -> Result<f64, WorkoutError> {
    if !value.is_finite() {
        return Err(invalid(field, value, "must be finite"));
    }
    if value <= 0.0 {
        return Err(invalid(field, value, "must be greater than zero"));
    }
    Ok(value)
}

fn non_negative(field: &'static str, value: f64) -> Result<f64, WorkoutError> {
    if !value.is_finite() {
        return Err(invalid(field, value, "must be finite"));
    }
    if value < 0.0 {
        return Err(invalid(field, value, "must not be negative"));
    }
    Ok(value)
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn action_count(value: f64) -> Result<u64, WorkoutError> {
    let value = non_negative("action count", value)?;
    if value.fract() != 0.0 {
        return Err(invalid("action count", value, "must be a whole number"));
    }
    // u64::MAX rounds up to 2^64, the first value the cast would clamp.
    if value >= u64::MAX as f64 {
        return Err(invalid("action count", value, "too large"));
    }
    Ok(value as u64)
}
