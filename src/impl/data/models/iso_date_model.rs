use std::str::FromStr;

use chrono::NaiveDate;

use crate::errors::CalculationError;

#[derive(Debug)]
pub(crate) struct ISODateModel(NaiveDate);

impl FromStr for ISODateModel {
    type Err = chrono::ParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ISODateModel(NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")?))
    }
}

impl From<ISODateModel> for NaiveDate {
    fn from(model: ISODateModel) -> Self {
        model.0
    }
}

impl ISODateModel {
    /// Absent and blank dates are missing (`None`); anything else must parse.
    pub(crate) fn parse_optional(
        field: &str,
        raw: Option<&str>,
    ) -> Result<Option<NaiveDate>, CalculationError> {
        match raw.map(str::trim) {
            None | Some("") => Ok(None),
            Some(s) => s
                .parse::<ISODateModel>()
                .map(|d| Some(d.into()))
                .map_err(|_| CalculationError::InvalidDateValues {
                    field: field.to_string(),
                    value: s.to_string(),
                }),
        }
    }
}
