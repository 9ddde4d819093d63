use chrono::NaiveDate;

use crate::entities::{JournalCalculation, LineItem, PeriodBucket};

use super::utils::format_amount;

/// Renders a calculated journal as an hledger journal, one transaction per
/// balanced line item pair.
pub(crate) struct HledgerPrinter {
    decimal_places: u32,
}

impl HledgerPrinter {
    pub(crate) fn new(decimal_places: u32) -> Self {
        Self { decimal_places }
    }

    pub(crate) fn print_ledger(&self, calculation: &JournalCalculation) -> String {
        let mut ledger_output = String::new();

        if let Some(error) = &calculation.error {
            ledger_output.push_str(&format!("; error: {}\n", error));
            return ledger_output;
        }

        let journal_type = calculation
            .journal_type
            .map_or("unknown".to_string(), |t| t.to_string());
        ledger_output.push_str(&format!(
            "; --- Journal ({}) {}\n\n",
            journal_type,
            "-".repeat(66usize.saturating_sub(journal_type.len()))
        ));
        for bucket in calculation.buckets() {
            self.print_bucket(&mut ledger_output, bucket);
        }

        ledger_output
    }

    fn print_bucket(&self, ledger_output: &mut String, bucket: &PeriodBucket) {
        // Pairs share date and store; a merged multi-store bucket holds one
        // pair per contributing store.
        let mut pairs: Vec<((NaiveDate, &str), Vec<&LineItem>)> = Vec::new();
        for line in &bucket.line_items {
            let key = (line.date, line.store.as_str());
            match pairs.iter().position(|(k, _)| *k == key) {
                Some(i) => pairs[i].1.push(line),
                None => pairs.push((key, vec![line])),
            }
        }

        for ((date, store), lines) in pairs {
            ledger_output.push_str(&format!(
                "{} {} | {}  ; period:{}, store:{}, status:{}\n",
                date, bucket.label, bucket.description, bucket.key, store, bucket.status
            ));
            for line in &lines {
                ledger_output.push_str(&format!(
                    "    {:55} {:>20}\n",
                    line.account_code,
                    format_amount(line.debit_amount - line.credit_amount, self.decimal_places),
                ));
            }
            if let Some(first) = lines.first() {
                let prefix = "    ;";
                for line in textwrap::wrap(&first.description, 74) {
                    ledger_output.push_str(&format!("{} {}\n", prefix, line));
                }
            }
            ledger_output.push('\n');
        }
    }
}
