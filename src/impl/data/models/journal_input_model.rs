use tracing::warn;

use crate::{
    config::InvalidAllocationPolicy,
    entities::{JournalInput, RawJournalInput, RawStoreAllocation, ScheduleType, StoreAllocation},
    errors::CalculationError,
};

use super::{
    accounting_amount_model::AccountingAmountModel, iso_date_model::ISODateModel,
    schedule_type_model::ScheduleTypeModel,
};

/// Boundary conversion from text input to typed input.
#[derive(Debug)]
pub(crate) struct JournalInputModel(pub RawJournalInput);

#[derive(Debug)]
pub(crate) struct StoreAllocationModel(pub RawStoreAllocation);

impl TryFrom<JournalInputModel> for JournalInput {
    type Error = CalculationError;
    fn try_from(model: JournalInputModel) -> Result<Self, Self::Error> {
        model.into_journal_input(InvalidAllocationPolicy::Reject)
    }
}

impl JournalInputModel {
    /// With `Skip`, store allocations whose dates don't parse are dropped
    /// the same way the combiner drops allocations with missing dates.
    pub(crate) fn into_journal_input(
        self,
        policy: InvalidAllocationPolicy,
    ) -> Result<JournalInput, CalculationError> {
        let raw = self.0;
        let schedule_type: ScheduleType = raw.schedule_type.parse::<ScheduleTypeModel>()?.into();
        let had_allocations = !raw.store_allocations.is_empty();
        let mut store_allocations = Vec::with_capacity(raw.store_allocations.len());
        for a in raw.store_allocations {
            let (id, store) = (a.id.clone(), a.store.clone());
            match StoreAllocation::try_from(StoreAllocationModel(a)) {
                Ok(allocation) => store_allocations.push(allocation),
                Err(e @ CalculationError::InvalidDateValues { .. })
                    if policy == InvalidAllocationPolicy::Skip =>
                {
                    warn!(
                        allocation_id = %id,
                        store = %store,
                        error = %e,
                        "skipping store allocation with unparseable dates"
                    );
                }
                Err(e) => return Err(e.for_store(&store)),
            }
        }
        if had_allocations && store_allocations.is_empty() {
            return Err(CalculationError::NoValidAllocations);
        }
        Ok(JournalInput {
            total_amount: AccountingAmountModel::parse("total_amount", &raw.total_amount)?.into(),
            expense_paid_date: ISODateModel::parse_optional(
                "expense_paid_date",
                raw.expense_paid_date.as_deref(),
            )?,
            period_start: ISODateModel::parse_optional("period_start", raw.period_start.as_deref())?,
            period_end: ISODateModel::parse_optional("period_end", raw.period_end.as_deref())?,
            description: raw.description,
            schedule_type,
            primary_account_code: raw.primary_account_code,
            transfer_account_code: raw.transfer_account_code,
            store: raw.store,
            status: raw.status,
            store_allocations,
        })
    }
}

impl TryFrom<StoreAllocationModel> for StoreAllocation {
    type Error = CalculationError;
    fn try_from(model: StoreAllocationModel) -> Result<Self, Self::Error> {
        let raw = model.0;
        Ok(StoreAllocation {
            total_amount: AccountingAmountModel::parse("total_amount", &raw.total_amount)?.into(),
            expense_paid_date: ISODateModel::parse_optional(
                "expense_paid_date",
                raw.expense_paid_date.as_deref(),
            )?,
            period_start: ISODateModel::parse_optional("period_start", raw.period_start.as_deref())?,
            period_end: ISODateModel::parse_optional("period_end", raw.period_end.as_deref())?,
            id: raw.id,
            description: raw.description,
            primary_account_code: raw.primary_account_code,
            transfer_account_code: raw.transfer_account_code,
            store: raw.store,
            status: raw.status,
        })
    }
}
