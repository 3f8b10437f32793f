//! Randomised property tests for fee rates.

use proptest::prelude::*;

use super::super::*;

proptest! {
    /// A larger transaction never pays a smaller fee at the same rate.
    #[test]
    fn fee_is_monotonic_in_size(
        rate in 1..=u64::from(u32::MAX),
        size in 0..10_000_000usize,
        extra in 0..10_000usize,
    ) {
        asofe_test::init();

        let rate = FeeRate::new(rate);
        prop_assert!(rate.fee(size) <= rate.fee(size + extra));
    }

    /// Any non-zero rate charges a non-empty transaction at least one zatoshi.
    #[test]
    fn non_zero_rates_charge_something(rate in 1..u64::MAX, size in 1..usize::MAX) {
        asofe_test::init();

        let fee = FeeRate::new(rate).fee(size);
        prop_assert!(fee >= Amount::<NonNegative>::try_from(1i64).expect("in range"));
        prop_assert!(fee <= Amount::<NonNegative>::max());
    }

    /// Empty transactions are free at any rate.
    #[test]
    fn zero_size_is_free(rate in any::<FeeRate>()) {
        asofe_test::init();

        prop_assert_eq!(rate.fee(0), 0);
    }

    /// Converting a rate to a fee and back recovers a hundredth of the rate,
    /// within one zatoshi, for transactions of at least a kilobyte.
    #[test]
    fn round_trip_is_within_one_unit(
        rate in 0..=u64::from(u32::MAX),
        size in 1000..(1usize << 20),
    ) {
        asofe_test::init();

        let expected = rate / 100;
        let fee = FeeRate::new(rate).fee(size);
        let recovered = FeeRate::from_paid(fee, size).zatoshis_per_kilobyte();

        prop_assert!(
            recovered + 1 >= expected && recovered <= expected + 1,
            "rate {} size {} fee {} recovered {}",
            rate,
            size,
            fee,
            recovered,
        );
    }
}
