use std::str::FromStr;

use crate::{entities::ScheduleType, errors::CalculationError};

/// Single place where schedule type strings are accepted. The legacy value
/// "monthly & weekly" is read as monthly.
#[derive(Debug)]
pub(crate) struct ScheduleTypeModel(ScheduleType);

impl FromStr for ScheduleTypeModel {
    type Err = CalculationError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "monthly" | "monthly & weekly" => Ok(ScheduleTypeModel(ScheduleType::Monthly)),
            "weekly" => Ok(ScheduleTypeModel(ScheduleType::Weekly)),
            _ => Err(CalculationError::UnknownScheduleType(s.to_string())),
        }
    }
}

impl From<ScheduleTypeModel> for ScheduleType {
    fn from(model: ScheduleTypeModel) -> Self {
        model.0
    }
}
