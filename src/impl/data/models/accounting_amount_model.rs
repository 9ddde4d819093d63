use std::str::FromStr;

use rust_decimal::Decimal;

use crate::errors::CalculationError;

/// Amount in accounting notation: thousands separators are ignored and a
/// value wrapped in parentheses is negative. A blank value is zero.
#[derive(Debug)]
pub(crate) struct AccountingAmountModel(pub Decimal);

impl AccountingAmountModel {
    pub(crate) fn parse(field: &str, s: &str) -> Result<Self, CalculationError> {
        s.parse::<Self>().map_err(|_| CalculationError::InvalidAmount {
            field: field.to_string(),
            value: s.to_string(),
        })
    }
}

impl FromStr for AccountingAmountModel {
    type Err = rust_decimal::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim().replace(',', "");
        if raw.is_empty() {
            return Ok(AccountingAmountModel(Decimal::ZERO));
        }
        let is_negative = raw.starts_with('(') && raw.ends_with(')');
        let numeric_part = raw.trim_matches(|c| c == '(' || c == ')');
        let amount = Decimal::from_str(numeric_part)?;
        Ok(AccountingAmountModel(if is_negative { -amount } else { amount }))
    }
}

impl From<AccountingAmountModel> for Decimal {
    fn from(model: AccountingAmountModel) -> Self {
        model.0
    }
}
