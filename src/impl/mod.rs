// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod journals_csv_datasource;
    }
    pub(crate) mod models {
        pub(crate) mod accounting_amount_model;
        pub(crate) mod iso_date_model;
        pub(crate) mod journal_input_model;
        pub(crate) mod schedule_type_model;
    }
    pub(crate) mod repositories {
        pub(crate) mod journals_repository_impl;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod journal_calculation;
        pub(crate) mod journal_input;
        pub(crate) mod period_bucket;
        pub(crate) mod raw_journal_input;
        pub(crate) mod schedule_type;
    }
    pub(crate) mod logic {
        pub(crate) mod journal_builder;
        pub(crate) mod journal_calculator;
        pub(crate) mod multi_store_combiner;
        pub(crate) mod period_utils;
        pub(crate) mod stock_journal_builder;
    }
    pub(crate) mod repositories {
        pub(crate) mod journals_repository;
    }
    pub(crate) mod usecases {
        pub(crate) mod calculate_usecase;
    }
}

pub(crate) mod presentation {
    pub(crate) mod hledger_printer;
    pub(crate) mod utils;
}

// Public exports.
// ---

#[doc(hidden)]
#[allow(unused_imports)]
pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod entities {
        pub use crate::domain::entities::journal_calculation::*;
        pub use crate::domain::entities::journal_input::*;
        pub use crate::domain::entities::period_bucket::*;
        pub use crate::domain::entities::raw_journal_input::*;
        pub use crate::domain::entities::schedule_type::*;
    }
}
