//! Prepayment and accrual journal schedules.
//!
//! Given a lump-sum expense, the date it was paid and the period it relates
//! to, the engine classifies the journal as a prepayment or an accrual,
//! spreads the amount over monthly or weekly buckets in proportion to the
//! days each bucket covers, and emits balanced debit/credit line items for
//! every bucket. Multi-store journals are calculated per store and merged
//! period by period. A single-bucket stock movement journal is also
//! provided.

mod r#impl;
pub(crate) use r#impl::data;
pub(crate) use r#impl::domain;
pub use r#impl::exports::*;
pub(crate) use r#impl::presentation;

pub mod config;
pub mod errors;
pub mod util;

pub use util::{calculate_journal, calculate_stock_journal, JournalUtil};
