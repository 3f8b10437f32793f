//! Fixed test vectors for amounts and fee rates.

use asofe_test::prelude::Result;

use super::super::*;

#[test]
fn constraints_reject_out_of_range_values() -> Result<()> {
    asofe_test::init();

    assert_eq!(
        Amount::<NonNegative>::try_from(-1i64),
        Err(Error::Constraint {
            value: -1,
            range: 0..=MAX_MONEY,
        })
    );
    assert!(Amount::<NonNegative>::try_from(MAX_MONEY + 1).is_err());

    assert_eq!(Amount::<NonNegative>::max(), MAX_MONEY);
    assert_eq!(Amount::<NonNegative>::zero(), 0);

    let coin = Amount::<NonNegative>::try_from(COIN)?;
    assert_eq!(u64::from(coin), COIN as u64);
    assert_eq!(i64::from(coin), COIN);
    assert!(Amount::zero() < coin);

    Ok(())
}

#[test]
fn amounts_serialize_as_zatoshis() -> Result<()> {
    asofe_test::init();

    #[derive(Debug, Deserialize, Serialize)]
    struct Wrapper {
        fee: Amount<NonNegative>,
    }

    let wrapper: Wrapper = toml::from_str("fee = 1000")?;
    assert_eq!(wrapper.fee, 1000);
    assert_eq!(toml::to_string(&wrapper)?.trim(), "fee = 1000");

    assert!(toml::from_str::<Wrapper>("fee = -1").is_err());

    Ok(())
}

#[test]
fn fee_for_a_known_rate_and_size() {
    asofe_test::init();

    // 1000 * 500 / 100_000 = 5, no floor applied
    assert_eq!(fee_for_size(1000, 500), 5);
    assert_eq!(FeeRate::new(200_000).fee(1), 2);
    assert_eq!(FeeRate::new(250_000).fee(1), 2);
}

#[test]
fn empty_transactions_and_zero_rates_are_free() {
    asofe_test::init();

    assert_eq!(fee_for_size(0, 0), 0);
    assert_eq!(fee_for_size(0, 1_000_000), 0);
    assert_eq!(fee_for_size(1, 0), 0);
    assert_eq!(fee_for_size(u64::MAX, 0), 0);
}

#[test]
fn sub_unit_fees_round_up_to_one_zatoshi() {
    asofe_test::init();

    assert_eq!(fee_for_size(1, 1), 1);
    assert_eq!(fee_for_size(99_999, 1), 1);
    assert_eq!(fee_for_size(100_000, 1), 1);
    assert_eq!(fee_for_size(1, 100_000), 1);
    assert_eq!(fee_for_size(1, 199_999), 1);
    assert_eq!(fee_for_size(1, 200_000), 2);
}

#[test]
fn huge_fees_are_clamped() {
    asofe_test::init();

    assert_eq!(fee_for_size(u64::MAX, usize::MAX), MAX_MONEY);
    assert_eq!(fee_for_size(MAX_MONEY as u64, 200_000), MAX_MONEY);
    assert_eq!(fee_for_size(MAX_MONEY as u64, 1000), MAX_MONEY / 100);
}

#[test]
fn rate_from_a_paid_fee() -> Result<()> {
    asofe_test::init();

    let five: Amount<NonNegative> = 5i64.try_into()?;

    assert_eq!(rate_from_paid(five, 500), 10);
    assert_eq!(rate_from_paid(five, 0), 0);
    assert_eq!(rate_from_paid(Amount::zero(), 500), 0);
    assert_eq!(rate_from_paid(Amount::max(), 1), MAX_MONEY as u64 * 1000);
    assert_eq!(FeeRate::from_paid(five, 3), FeeRate::new(1666));

    Ok(())
}

#[test]
fn round_trip_recovers_one_hundredth_of_the_rate() {
    asofe_test::init();

    let rate = FeeRate::new(1000);
    let fee = rate.fee(500);
    assert_eq!(fee, 5);
    assert_eq!(FeeRate::from_paid(fee, 500), FeeRate::new(10));

    // The minimum fee floor charges one zatoshi, which can read back
    // as a higher rate than the one that produced it.
    let rate = FeeRate::new(1);
    let fee = rate.fee(1000);
    assert_eq!(fee, 1);
    assert_eq!(FeeRate::from_paid(fee, 1000), FeeRate::new(1));
    assert_eq!(rate.zatoshis_per_kilobyte() / 100, 0);
}

#[test]
fn fee_rate_display() {
    asofe_test::init();

    assert_eq!(FeeRate::new(0).to_string(), "0.00 ASF/kB");
    assert_eq!(FeeRate::new(1000).to_string(), "0.1000 ASF/kB");
    assert_eq!(
        FeeRate::new(2 * COIN as u64 + 5).to_string(),
        "2.05 ASF/kB"
    );
    assert_eq!(FeeRate::new(COIN as u64).to_string(), "1.00 ASF/kB");
}

#[test]
fn fee_rates_are_ordered_by_rate() {
    asofe_test::init();

    assert!(FeeRate::new(1) < FeeRate::new(2));
    assert_eq!(FeeRate::from(7), FeeRate::new(7));
    assert_eq!(FeeRate::default(), FeeRate::new(0));
}
