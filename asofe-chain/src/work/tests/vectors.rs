//! Fixed test vectors for Equihash parameters and epochs.

use asofe_test::prelude::Result;

use crate::{
    block::Height,
    parameters::{
        network::consensus::{
            TESTNET_EQUIHASH_EPOCH_1_END_HEIGHT, TESTNET_EQUIHASH_EPOCH_2_START_HEIGHT,
        },
        Network,
    },
    work::equihash::{
        active_parameters, ActiveParameters, EquihashEpochs, EquihashParametersError, Parameters,
    },
};

#[test]
fn acceptable_parameters() -> Result<()> {
    asofe_test::init();

    for (n, k, solution_size) in [(200, 9, 1344), (144, 5, 100), (48, 5, 36), (96, 5, 68)] {
        let parameters = Parameters::new(n, k)?;

        assert_eq!(parameters.n(), n);
        assert_eq!(parameters.k(), k);
        assert_eq!(parameters.solution_size(), solution_size);
    }

    assert_eq!(Parameters::new(200, 9)?, Parameters::N200_K9);
    assert_eq!(Parameters::new(144, 5)?, Parameters::N144_K5);
    assert_eq!(Parameters::new(48, 5)?, Parameters::N48_K5);
    assert_eq!(Parameters::N200_K9.to_string(), "(200, 9)");

    Ok(())
}

#[test]
fn unacceptable_parameters() {
    asofe_test::init();

    use EquihashParametersError::*;

    assert_eq!(Parameters::new(200, 0), Err(KTooSmall { n: 200, k: 0 }));
    assert_eq!(Parameters::new(8, 8), Err(KNotLessThanN { n: 8, k: 8 }));
    assert_eq!(Parameters::new(201, 2), Err(NNotMultipleOf8 { n: 201, k: 2 }));
    assert_eq!(
        Parameters::new(200, 8),
        Err(NNotMultipleOfKPlusOne { n: 200, k: 8 })
    );
    assert_eq!(
        Parameters::new(256, 7),
        Err(TooManyIndexBits {
            n: 256,
            k: 7,
            index_bits: 33
        })
    );

    // 2^23 indexes of 3 bits each don't fit in a headers message.
    assert_eq!(
        Parameters::new(48, 23),
        Err(SolutionTooLarge {
            n: 48,
            k: 23,
            solution_size: 3_145_728
        })
    );
}

#[test]
fn deserialized_parameters_are_checked() -> Result<()> {
    asofe_test::init();

    #[derive(Debug, Deserialize)]
    struct Wrapper {
        equihash: Parameters,
    }

    let wrapper: Wrapper = toml::from_str("equihash = { n = 144, k = 5 }")?;
    assert_eq!(wrapper.equihash, Parameters::N144_K5);

    assert!(toml::from_str::<Wrapper>("equihash = { n = 200, k = 8 }").is_err());

    Ok(())
}

#[test]
fn testnet_epochs_overlap() {
    asofe_test::init();

    let params = Network::Testnet.consensus_params();
    let epochs = params.equihash_epochs();

    let before = TESTNET_EQUIHASH_EPOCH_2_START_HEIGHT
        .previous()
        .expect("epoch 2 starts above genesis");
    let after = TESTNET_EQUIHASH_EPOCH_1_END_HEIGHT
        .next()
        .expect("epoch 1 ends below the maximum height");

    assert_eq!(
        epochs.active_parameters(Height(1)),
        ActiveParameters::Single(Parameters::N200_K9)
    );
    assert_eq!(
        epochs.active_parameters(before),
        ActiveParameters::Single(Parameters::N200_K9)
    );

    for height in [
        TESTNET_EQUIHASH_EPOCH_2_START_HEIGHT,
        Height(300_005),
        TESTNET_EQUIHASH_EPOCH_1_END_HEIGHT,
    ] {
        let active = params.equihash_parameters(height);

        assert_eq!(
            active,
            ActiveParameters::Overlap {
                newer: Parameters::N144_K5,
                older: Parameters::N200_K9,
            }
        );
        assert_eq!(active.len(), 2);
        assert_eq!(
            active.iter().collect::<Vec<_>>(),
            vec![Parameters::N144_K5, Parameters::N200_K9]
        );
        assert_eq!(active.preferred(), Parameters::N144_K5);
        assert!(active.contains(&Parameters::N200_K9));
    }

    assert_eq!(
        epochs.active_parameters(after),
        ActiveParameters::Single(Parameters::N144_K5)
    );
    assert_eq!(
        epochs.active_parameters(Height::MAX),
        ActiveParameters::Single(Parameters::N144_K5)
    );
}

#[test]
fn mainnet_and_regtest_use_one_epoch() {
    asofe_test::init();

    let mainnet = Network::Mainnet.consensus_params();
    let regtest = Network::Regtest.consensus_params();

    for height in [Height(0), Height(1), Height(300_005), Height::MAX] {
        let active = mainnet.equihash_parameters(height);
        assert_eq!(active, ActiveParameters::Single(Parameters::N200_K9));
        assert_eq!(active.len(), 1);
        assert!(!active.contains(&Parameters::N144_K5));

        assert_eq!(
            regtest.equihash_parameters(height),
            ActiveParameters::Single(Parameters::N48_K5)
        );
    }
}

#[test]
fn identical_epochs_never_overlap() {
    asofe_test::init();

    let epochs = EquihashEpochs {
        epoch_1: Parameters::N48_K5,
        epoch_1_end_height: Height(20),
        epoch_2: Parameters::N48_K5,
        epoch_2_start_height: Height(10),
    };

    assert_eq!(
        active_parameters(Height(15), &epochs),
        ActiveParameters::Single(Parameters::N48_K5)
    );
}

#[test]
fn epoch_contiguity() {
    asofe_test::init();

    let mut epochs = EquihashEpochs {
        epoch_1: Parameters::N200_K9,
        epoch_1_end_height: Height(100),
        epoch_2: Parameters::N144_K5,
        epoch_2_start_height: Height(101),
    };
    assert!(epochs.is_contiguous());

    // Adjacent epochs never overlap.
    assert_eq!(
        epochs.active_parameters(Height(100)),
        ActiveParameters::Single(Parameters::N200_K9)
    );
    assert_eq!(
        epochs.active_parameters(Height(101)),
        ActiveParameters::Single(Parameters::N144_K5)
    );

    epochs.epoch_2_start_height = Height(102);
    assert!(!epochs.is_contiguous());

    assert!(EquihashEpochs::single(Parameters::N200_K9).is_contiguous());
}
