//! Tests for increment and decrement on read-write and self-storage accessors.

use std::cell::Cell;

use accessor::{
    Error, MutableProperty, ReadableProperty, Result, get, make_accessor, make_self_storage, set,
    try_set,
};

#[test]
fn test_post_increment_returns_prior_value() -> Result<()> {
    let cell = Cell::new(41_i32);
    let mut acc = make_accessor(get(|| cell.get()), set(|v: i32| cell.set(v)));

    assert_eq!(acc.post_inc()?, 41);
    assert_eq!(acc.read(), 42);
    Ok(())
}

#[test]
fn test_pre_increment_returns_new_value() -> Result<()> {
    let cell = Cell::new(41_i32);
    let mut acc = make_accessor(get(|| cell.get()), set(|v: i32| cell.set(v)));

    assert_eq!(acc.pre_inc()?, 42);
    assert_eq!(acc.read(), 42);
    Ok(())
}

#[test]
fn test_decrements() -> Result<()> {
    let cell = Cell::new(1.5_f64);
    let mut acc = make_accessor(get(|| cell.get()), set(|v: f64| cell.set(v)));

    assert_eq!(acc.post_dec()?, 1.5);
    assert_eq!(cell.get(), 0.5);
    assert_eq!(acc.pre_dec()?, -0.5);
    assert_eq!(cell.get(), -0.5);
    Ok(())
}

#[test]
fn test_increment_self_storage() -> Result<()> {
    let mut counter = make_self_storage(0_usize);

    for _ in 0..10 {
        counter.post_inc()?;
    }
    counter.pre_dec()?;

    assert_eq!(*counter, 9);
    Ok(())
}

#[test]
fn test_update_applies_closure() -> Result<()> {
    let cell = Cell::new(3_u64);
    let mut acc = make_accessor(get(|| cell.get()), set(|v: u64| cell.set(v)));

    assert_eq!(acc.update(|v| v * v)?, 9);
    assert_eq!(acc.compound(2_u64, |a, b| a.pow(b as u32))?, 81);
    assert_eq!(cell.get(), 81);
    Ok(())
}

#[test]
fn test_rejected_increment_keeps_value() {
    let cell = Cell::new(9_u8);
    let mut digit = make_accessor(
        get(|| cell.get()),
        try_set(|v: u8| {
            if v > 9 {
                return Err(Error::rejected::<u8>("not a digit"));
            }
            cell.set(v);
            Ok(())
        }),
    );

    assert!(digit.post_inc().is_err());
    assert!(digit.pre_inc().is_err());
    assert_eq!(digit.read(), 9);

    assert_eq!(digit.pre_dec().ok(), Some(8));
}
