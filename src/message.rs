use crate::types::InfoMessage;
use anyhow::Result;
use clap::ValueEnum;

/// Language of the text summary.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Lang {
    #[default]
    /// English wording.
    En,
    /// Russian wording of the original tracker output.
    Ru,
}

impl InfoMessage {
    pub fn get_message(&self, lang: Lang) -> String {
        let Self {
            training_type,
            duration,
            distance,
            speed,
            calories,
        } = self;

        match lang {
            Lang::En => format!(
                "Workout type: {training_type}; \
                 Duration: {duration:.3} h.; \
                 Distance: {distance:.3} km; \
                 Avg. speed: {speed:.3} km/h; \
                 Calories burned: {calories:.3}."
            ),
            Lang::Ru => format!(
                "Тип тренировки: {training_type}; \
                 Длительность: {duration:.3} ч.; \
                 Дистанция: {distance:.3} км; \
                 Ср. скорость: {speed:.3} км/ч; \
                 Потрачено ккал: {calories:.3}."
            ),
        }
    }

    pub fn to_json_line(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
