//! Bank account model and operations.
//!
//! Maintains the invariants: `overdraft_limit` in `[-2000.00, 0]`,
//! `balance` in `[overdraft_limit, 50_000_000.00]`, and `garnish_rate` in
//! `[0, 100]` after every successful operation.

use crate::error::{AccountError, Result};
use crate::money::{
    self, DEFAULT_BALANCE, DEFAULT_OVERDRAFT, HUNDRED, MAX_BALANCE, MAX_GARNISH_RATE,
    MIN_GARNISH_RATE, MIN_YEAR,
};
use crate::registry::Registry;
use chrono::{Datelike, Local, NaiveDate};
use log::{debug, warn};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

/// A bank account.
///
/// Identity (`id`), creation date, and overdraft limit are fixed at
/// opening; balance and garnishment rate change only through the
/// operations below. Every operation validates fully before writing any
/// field, so a failed call leaves the account (and, for transfers, the
/// destination) untouched.
///
/// # Garnishment
///
/// A garnishment rate is a percent in `(0, 100]` deducted from money
/// movements. Deposits subtract a flat `rate / 100`; transfers scale the
/// moved amount by the rate. The two formulas are the historical rules
/// and are deliberately not unified.
#[derive(Debug, Clone, Serialize)]
pub struct Account {
    /// Unique sequential id, assigned by the registry at opening.
    id: u32,

    /// Date the account was opened. Never in the future, year >= 1900.
    creation_date: NaiveDate,

    /// Most negative balance allowed. In `[-2000.00, 0]`.
    overdraft_limit: Decimal,

    /// Current balance. In `[overdraft_limit, 50_000_000.00]`.
    balance: Decimal,

    /// Garnishment rate in percent. 0 means not garnished.
    garnish_rate: Decimal,

    /// Highest balance a deposit has ever produced on this account.
    peak_balance: Decimal,
}

impl Account {
    /// Opens an account with the given opening balance.
    ///
    /// `creation_date` defaults to today and `overdraft_limit` to 0.00
    /// (no overdraft). The registry assigns the sequential id; garnishment
    /// and peak balance start at 0.
    ///
    /// Fails with an `InvalidArgument`-kind error if the opening balance
    /// is negative or above the ceiling, the creation date is in the
    /// future or before 1900, or the overdraft limit is positive or below
    /// the floor.
    pub fn open(
        initial_balance: Decimal,
        creation_date: Option<NaiveDate>,
        overdraft_limit: Option<Decimal>,
        registry: &mut Registry,
    ) -> Result<Account> {
        Account::open_on(
            initial_balance,
            creation_date,
            overdraft_limit,
            Local::now().date_naive(),
            registry,
        )
    }

    /// Same as [`Account::open`], with an explicit `today` for the
    /// creation-date checks.
    pub fn open_on(
        initial_balance: Decimal,
        creation_date: Option<NaiveDate>,
        overdraft_limit: Option<Decimal>,
        today: NaiveDate,
        registry: &mut Registry,
    ) -> Result<Account> {
        if initial_balance < Decimal::ZERO || initial_balance > MAX_BALANCE {
            return Err(AccountError::InvalidInitialBalance(initial_balance));
        }

        let creation_date = creation_date.unwrap_or(today);
        if creation_date > today || creation_date.year() < MIN_YEAR {
            return Err(AccountError::InvalidCreationDate(creation_date));
        }

        let overdraft_limit = overdraft_limit.unwrap_or(DEFAULT_OVERDRAFT);
        if !money::overdraft_limit_in_range(overdraft_limit) {
            return Err(AccountError::InvalidOverdraftLimit(overdraft_limit));
        }

        let id = registry.allocate_id();
        debug!(
            "account {}: opened with balance {}, overdraft limit {}",
            id, initial_balance, overdraft_limit
        );

        Ok(Account {
            id,
            creation_date,
            overdraft_limit,
            balance: initial_balance,
            garnish_rate: MIN_GARNISH_RATE,
            peak_balance: Decimal::ZERO,
        })
    }

    /// Returns `true` if a garnishment is in place (rate in `(0, 100]`).
    pub fn is_garnished(&self) -> bool {
        self.garnish_rate > MIN_GARNISH_RATE && self.garnish_rate <= MAX_GARNISH_RATE
    }

    /// Returns `true` if the overdraft limit lies in the permitted range.
    ///
    /// Opening already enforces that range, so this holds for every
    /// account; it is kept as the historical "overdraft allowed"
    /// predicate.
    pub fn is_overdraft_capped(&self) -> bool {
        money::overdraft_limit_in_range(self.overdraft_limit)
    }

    /// Places a garnishment on the account.
    ///
    /// Fails with `InvalidGarnishRate` for a rate outside `(0, 100]` and
    /// with `AlreadyGarnished` if a garnishment is already in place.
    pub fn garnish(&mut self, rate: Decimal) -> Result<()> {
        if rate <= MIN_GARNISH_RATE || rate > MAX_GARNISH_RATE {
            return Err(AccountError::InvalidGarnishRate(rate));
        }
        if self.is_garnished() {
            return Err(AccountError::AlreadyGarnished);
        }

        self.garnish_rate = rate;
        debug!("account {}: garnished at {}%", self.id, rate);
        Ok(())
    }

    /// Lifts the garnishment, if any.
    ///
    /// Returns `true` if one was in place, `false` for a no-op.
    pub fn un_garnish(&mut self) -> bool {
        if self.is_garnished() {
            self.garnish_rate = MIN_GARNISH_RATE;
            debug!("account {}: garnishment lifted", self.id);
            true
        } else {
            false
        }
    }

    /// Deposits `amount`, crediting the net of the garnishment cut.
    ///
    /// The cut is a flat `rate / 100`, not a percentage of the amount, so
    /// the net credit can be negative for tiny deposits on a garnished
    /// account. The registry's global balance sum absorbs the same net,
    /// and a deposit that raises the account's peak balance stamps the
    /// registry's latest peak date.
    pub fn deposit(&mut self, amount: Decimal, registry: &mut Registry) -> Result<()> {
        self.deposit_on(amount, Local::now().date_naive(), registry)
    }

    /// Same as [`Account::deposit`], with an explicit `today` for the
    /// peak date stamp.
    pub fn deposit_on(
        &mut self,
        amount: Decimal,
        today: NaiveDate,
        registry: &mut Registry,
    ) -> Result<()> {
        if amount < Decimal::ZERO {
            return Err(AccountError::NegativeAmount(amount));
        }

        let net = amount - self.garnish_rate / HUNDRED;
        let after = self.balance + net;
        if after > MAX_BALANCE {
            return Err(AccountError::BalanceCeilingExceeded(after));
        }

        if net < Decimal::ZERO {
            warn!(
                "account {}: garnishment cut exceeds deposit, net {}",
                self.id, net
            );
        }

        self.balance = after;
        registry.record_deposit(net);
        if self.balance > self.peak_balance {
            self.peak_balance = self.balance;
            registry.record_peak(today);
        }

        debug!(
            "account {}: deposited {} (net {}), balance {}",
            self.id, amount, net, self.balance
        );
        Ok(())
    }

    /// Withdraws `amount`.
    ///
    /// The balance may land on the overdraft limit exactly but not below
    /// it. No registry or peak updates.
    pub fn withdraw(&mut self, amount: Decimal) -> Result<()> {
        if amount < Decimal::ZERO {
            return Err(AccountError::NegativeAmount(amount));
        }

        let after = self.balance - amount;
        if after < self.overdraft_limit {
            return Err(AccountError::OverdraftLimitExceeded(after));
        }

        self.balance = after;
        debug!(
            "account {}: withdrew {}, balance {}",
            self.id, amount, self.balance
        );
        Ok(())
    }

    /// Transfers `amount` to `dest`.
    ///
    /// The source must cover the amount with its *effective* balance (the
    /// balance less its garnished share), which must also not sit below
    /// the source's overdraft limit. The destination is credited the
    /// amount less the destination's own garnished share, and its
    /// effective balance plus that credit must stay under the ceiling.
    /// On success the source loses the raw `amount` while the destination
    /// gains only the net; either both accounts change or neither does.
    pub fn transfer_to(&mut self, amount: Decimal, dest: &mut Account) -> Result<()> {
        if amount < Decimal::ZERO {
            return Err(AccountError::NegativeAmount(amount));
        }

        let effective = self.balance - self.balance * (self.garnish_rate / HUNDRED);
        if effective < amount || effective < self.overdraft_limit {
            return Err(AccountError::InsufficientFunds(effective));
        }

        let dest_effective = dest.balance - dest.balance * (dest.garnish_rate / HUNDRED);
        let net = amount - amount * (dest.garnish_rate / HUNDRED);
        if dest_effective + net > MAX_BALANCE {
            return Err(AccountError::DestinationCeilingExceeded(dest_effective + net));
        }

        self.balance -= amount;
        dest.balance += net;
        debug!(
            "account {}: transferred {} to account {} (net {})",
            self.id, amount, dest.id, net
        );
        Ok(())
    }

    /// Transfers the whole balance to `dest`, or 0.00 when the balance is
    /// not positive, under the rules of [`Account::transfer_to`].
    ///
    /// Note that a negative balance still fails the source check even for
    /// a 0.00 transfer, and a garnished source cannot move its whole raw
    /// balance, since only the effective balance is available.
    pub fn transfer_all_to(&mut self, dest: &mut Account) -> Result<()> {
        if self.balance > Decimal::ZERO {
            let full = self.balance;
            self.transfer_to(full, dest)
        } else {
            self.transfer_to(Decimal::ZERO, dest)
        }
    }

    /// Unique sequential account id.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Current balance.
    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Garnishment rate in percent; 0 when not garnished.
    pub fn garnish_rate(&self) -> Decimal {
        self.garnish_rate
    }

    /// Highest balance a deposit has produced on this account.
    pub fn peak_balance(&self) -> Decimal {
        self.peak_balance
    }

    /// Date the account was opened.
    pub fn creation_date(&self) -> NaiveDate {
        self.creation_date
    }

    /// Most negative balance allowed.
    pub fn overdraft_limit(&self) -> Decimal {
        self.overdraft_limit
    }

    /// Total deposited, measured from the zero opening baseline; with
    /// that baseline this is the current balance.
    pub fn total_deposited(&self) -> Decimal {
        self.balance - DEFAULT_BALANCE
    }

    /// Account age as a day-of-year difference.
    ///
    /// Negative across year boundaries; callers wanting a calendar-day
    /// delta should diff the dates themselves.
    pub fn age_in_days(&self) -> i32 {
        self.age_in_days_on(Local::now().date_naive())
    }

    /// Same as [`Account::age_in_days`], against an explicit `today`.
    pub fn age_in_days_on(&self, today: NaiveDate) -> i32 {
        today.ordinal() as i32 - self.creation_date.ordinal() as i32
    }
}

impl fmt::Display for Account {
    /// Renders the fixed-width report line:
    /// `Id: <id> - Saldo: <balance> - Embargada: <sí <rate>% | no>`
    /// with the balance right-aligned to width 14 and thousands grouped
    /// by spaces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Id: {} - Saldo: {} - Embargada: ",
            self.id,
            money::format_report_balance(self.balance)
        )?;
        if self.is_garnished() {
            write!(f, "sí {}%", money::format_report_rate(self.garnish_rate))
        } else {
            f.write_str("no")
        }
    }
}
