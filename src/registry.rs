//! Process-wide account bookkeeping.
//!
//! The id sequence and the aggregate statistics live in an explicit
//! [`Registry`] that is passed into the account paths that touch them,
//! rather than in hidden globals. The registry assumes a single writer;
//! callers that need sharing across threads wrap it in a `Mutex`.

use chrono::NaiveDate;
use log::debug;
use rust_decimal::Decimal;
use serde::Serialize;

/// Process-wide account state.
///
/// Holds the sequential id allocator and the aggregates updated as a side
/// effect of account operations: the running sum of net deposits, the
/// garnished-account count, and the date of the most recent balance peak.
#[derive(Debug, Default)]
pub struct Registry {
    next_id: u32,
    balance_sum: Decimal,
    garnished_accounts: u32,
    latest_peak_date: Option<NaiveDate>,
}

/// Read-only snapshot of the aggregate statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub balance_sum: Decimal,
    pub garnished_accounts: u32,
    pub latest_peak_date: Option<NaiveDate>,
}

impl Registry {
    /// Creates an empty registry: id sequence at 0, zero sums, no peak yet.
    pub fn new() -> Self {
        Registry::default()
    }

    /// Hands out the next sequential account id.
    ///
    /// Ids start at 0, increase in creation order, and are never reused.
    pub(crate) fn allocate_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Adds a net deposit amount to the global balance sum. The net can be
    /// negative when a garnishment cut exceeds the deposited amount.
    pub(crate) fn record_deposit(&mut self, net: Decimal) {
        self.balance_sum += net;
        debug!("registry: global balance sum now {}", self.balance_sum);
    }

    /// Records a balance-peak event observed on `date`.
    pub(crate) fn record_peak(&mut self, date: NaiveDate) {
        self.latest_peak_date = Some(date);
    }

    /// Running total of all net deposit amounts across every account.
    pub fn balance_sum(&self) -> Decimal {
        self.balance_sum
    }

    /// Number of accounts currently garnished.
    ///
    /// Carried over from the historical model, where no operation ever
    /// updated it; it stays at 0 until that is settled.
    pub fn garnished_accounts(&self) -> u32 {
        self.garnished_accounts
    }

    /// Date of the most recent balance-peak event, or `None` if no deposit
    /// has raised a peak yet.
    pub fn latest_peak_date(&self) -> Option<NaiveDate> {
        self.latest_peak_date
    }

    /// Snapshot of the aggregate statistics.
    pub fn stats(&self) -> Stats {
        Stats {
            balance_sum: self.balance_sum,
            garnished_accounts: self.garnished_accounts,
            latest_peak_date: self.latest_peak_date,
        }
    }
}
