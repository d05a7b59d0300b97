//! Edge case tests: boundary hits on the balance ceiling and overdraft
//! floor, garnishment oddities, zero-amount movements, and the quirks the
//! model preserves on purpose (flat deposit cuts, day-of-year ages, the
//! balance-shaped deposit total).

use chrono::NaiveDate;
use cuenta_bancaria::{Account, AccountError, ErrorKind, Registry};
use rust_decimal_macros::dec;

fn day(year: i32, month: u32, dayn: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, dayn).unwrap()
}

fn today() -> NaiveDate {
    day(2024, 6, 15)
}

fn open(balance: rust_decimal::Decimal, registry: &mut Registry) -> Account {
    Account::open_on(balance, Some(day(2020, 1, 1)), None, today(), registry).unwrap()
}

// --- ceiling and floor boundaries ---

#[test]
fn test_deposit_landing_exactly_on_ceiling_succeeds() {
    let mut registry = Registry::new();
    let mut account = open(dec!(49999000.00), &mut registry);

    account.deposit_on(dec!(1000.00), today(), &mut registry).unwrap();
    assert_eq!(account.balance(), dec!(50000000.00));

    // one cent more is rejected
    let err = account.deposit_on(dec!(0.01), today(), &mut registry).unwrap_err();
    assert!(matches!(err, AccountError::BalanceCeilingExceeded(_)));
    assert_eq!(account.balance(), dec!(50000000.00));
}

#[test]
fn test_withdraw_landing_exactly_on_floor_succeeds() {
    let mut registry = Registry::new();
    let mut account = Account::open_on(
        dec!(0),
        Some(day(2020, 1, 1)),
        Some(dec!(-2000.00)),
        today(),
        &mut registry,
    )
    .unwrap();

    account.withdraw(dec!(2000.00)).unwrap();
    assert_eq!(account.balance(), dec!(-2000.00));

    let err = account.withdraw(dec!(0.01)).unwrap_err();
    assert!(matches!(err, AccountError::OverdraftLimitExceeded(_)));
    assert_eq!(account.balance(), dec!(-2000.00));
}

#[test]
fn test_zero_amount_movements_are_valid() {
    let mut registry = Registry::new();
    let mut account = open(dec!(100.00), &mut registry);
    let mut dest = open(dec!(5.00), &mut registry);

    account.deposit_on(dec!(0), today(), &mut registry).unwrap();
    account.withdraw(dec!(0)).unwrap();
    account.transfer_to(dec!(0), &mut dest).unwrap();
    assert_eq!(account.balance(), dec!(100.00));
    assert_eq!(dest.balance(), dec!(5.00));
}

// --- garnishment oddities ---

#[test]
fn test_garnish_cut_can_exceed_a_tiny_deposit() {
    let mut registry = Registry::new();
    let mut account = open(dec!(100.00), &mut registry);
    account.garnish(dec!(10.0)).unwrap();

    // net is 0.05 - 0.10 = -0.05: the balance and the global sum shrink
    account.deposit_on(dec!(0.05), today(), &mut registry).unwrap();
    assert_eq!(account.balance(), dec!(99.95));
    assert_eq!(registry.balance_sum(), dec!(-0.05));
}

#[test]
fn test_garnish_at_the_full_rate() {
    let mut registry = Registry::new();
    let mut account = open(dec!(100.00), &mut registry);
    account.garnish(dec!(100.0)).unwrap();

    // deposits still only lose the flat 100/100 = 1.00
    account.deposit_on(dec!(50.00), today(), &mut registry).unwrap();
    assert_eq!(account.balance(), dec!(149.00));

    // but the whole balance is garnished for transfers
    let mut dest = open(dec!(0), &mut registry);
    let err = account.transfer_to(dec!(1.00), &mut dest).unwrap_err();
    assert!(matches!(err, AccountError::InsufficientFunds(_)));
}

#[test]
fn test_transfer_all_from_garnished_source_fails() {
    let mut registry = Registry::new();
    let mut account = open(dec!(100.00), &mut registry);
    let mut dest = open(dec!(0), &mut registry);
    account.garnish(dec!(50.0)).unwrap();

    // the whole raw balance exceeds the effective 50.00
    let err = account.transfer_all_to(&mut dest).unwrap_err();
    assert!(matches!(err, AccountError::InsufficientFunds(_)));
    assert_eq!(account.balance(), dec!(100.00));
    assert_eq!(dest.balance(), dec!(0));
}

#[test]
fn test_garnish_rate_boundaries() {
    let mut registry = Registry::new();
    let mut account = open(dec!(0), &mut registry);

    assert!(matches!(
        account.garnish(dec!(0)).unwrap_err(),
        AccountError::InvalidGarnishRate(_)
    ));
    assert!(matches!(
        account.garnish(dec!(100.01)).unwrap_err(),
        AccountError::InvalidGarnishRate(_)
    ));
    assert!(account.garnish(dec!(0.01)).is_ok());
}

// --- transfer boundaries ---

#[test]
fn test_transfer_of_exact_effective_balance_succeeds() {
    let mut registry = Registry::new();
    let mut source = open(dec!(200.00), &mut registry);
    let mut dest = open(dec!(0), &mut registry);
    source.garnish(dec!(25.0)).unwrap();

    // effective balance is 200 - 200*0.25 = 150
    source.transfer_to(dec!(150.00), &mut dest).unwrap();
    assert_eq!(source.balance(), dec!(50.00));
    assert_eq!(dest.balance(), dec!(150.00));
}

#[test]
fn test_transfer_destination_ceiling_counts_net_against_effective() {
    let mut registry = Registry::new();
    let mut source = open(dec!(1000.00), &mut registry);
    let mut dest = open(dec!(50000000.00), &mut registry);
    dest.garnish(dec!(50.0)).unwrap();

    // dest's effective balance is 25 000 000, so a large credit still fits
    source.transfer_to(dec!(1000.00), &mut dest).unwrap();
    assert_eq!(source.balance(), dec!(0));
    assert_eq!(dest.balance(), dec!(50000500.00));
}

// --- preserved quirks ---

#[test]
fn test_total_deposited_mirrors_the_balance() {
    let mut registry = Registry::new();
    let mut account = open(dec!(500.00), &mut registry);
    account.withdraw(dec!(200.00)).unwrap();

    // measured from the zero baseline, so withdrawals shrink it too
    assert_eq!(account.total_deposited(), dec!(300.00));
}

#[test]
fn test_age_goes_negative_across_year_boundaries() {
    let mut registry = Registry::new();
    let account = Account::open_on(
        dec!(0),
        Some(day(2023, 12, 30)),
        None,
        day(2024, 1, 3),
        &mut registry,
    )
    .unwrap();

    // 2023-12-30 is day 364; 2024-01-03 is day 3
    assert_eq!(account.age_in_days_on(day(2024, 1, 3)), 3 - 364);

    // within the creation year it behaves like a day count
    let account = Account::open_on(
        dec!(0),
        Some(day(2024, 1, 3)),
        None,
        day(2024, 1, 10),
        &mut registry,
    )
    .unwrap();
    assert_eq!(account.age_in_days_on(day(2024, 1, 10)), 7);
}

#[test]
fn test_peak_balance_ignores_opening_balance_and_withdrawals() {
    let mut registry = Registry::new();
    let mut account = open(dec!(5000.00), &mut registry);

    assert_eq!(account.peak_balance(), dec!(0));

    account.deposit_on(dec!(1.00), day(2024, 2, 1), &mut registry).unwrap();
    assert_eq!(account.peak_balance(), dec!(5001.00));

    account.withdraw(dec!(4000.00)).unwrap();
    assert_eq!(account.peak_balance(), dec!(5001.00));
    assert_eq!(registry.latest_peak_date(), Some(day(2024, 2, 1)));
}

#[test]
fn test_peak_date_tracks_the_most_recent_peak_across_accounts() {
    let mut registry = Registry::new();
    let mut first = open(dec!(0), &mut registry);
    let mut second = open(dec!(0), &mut registry);

    first.deposit_on(dec!(10.00), day(2024, 3, 1), &mut registry).unwrap();
    second.deposit_on(dec!(1.00), day(2024, 3, 5), &mut registry).unwrap();
    assert_eq!(registry.latest_peak_date(), Some(day(2024, 3, 5)));

    // a non-peak deposit on the first account leaves the date alone
    first.withdraw(dec!(5.00)).unwrap();
    first.deposit_on(dec!(1.00), day(2024, 3, 9), &mut registry).unwrap();
    assert_eq!(registry.latest_peak_date(), Some(day(2024, 3, 5)));
}

// --- error contract ---

#[test]
fn test_every_failure_is_classified() {
    let mut registry = Registry::new();
    let mut account = open(dec!(100.00), &mut registry);

    let arg_err = Account::open_on(dec!(-1), None, None, today(), &mut registry).unwrap_err();
    assert_eq!(arg_err.kind(), ErrorKind::InvalidArgument);

    account.garnish(dec!(10.0)).unwrap();
    let state_err = account.garnish(dec!(10.0)).unwrap_err();
    assert_eq!(state_err.kind(), ErrorKind::InvalidState);
}

#[test]
fn test_failed_operations_keep_the_registry_clean() {
    let mut registry = Registry::new();
    let mut account = open(dec!(49999999.99), &mut registry);

    let _ = account.deposit_on(dec!(10.00), day(2024, 5, 1), &mut registry);
    assert_eq!(registry.balance_sum(), dec!(0));
    assert_eq!(registry.latest_peak_date(), None);
    assert_eq!(account.peak_balance(), dec!(0));
}
