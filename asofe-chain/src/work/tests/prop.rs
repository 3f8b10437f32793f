use proptest::prelude::*;

use crate::{
    block::Height,
    parameters::Network,
    work::equihash::{ActiveParameters, EquihashEpochs, Parameters},
};

fn parameters_strategy() -> impl Strategy<Value = Parameters> {
    prop_oneof![
        Just(Parameters::N200_K9),
        Just(Parameters::N144_K5),
        Just(Parameters::N48_K5),
    ]
}

proptest! {
    /// The selector returns one or two parameter sets, and always allows the preferred set.
    #[test]
    fn active_parameters_has_one_or_two_sets(
        epoch_1 in parameters_strategy(),
        epoch_2 in parameters_strategy(),
        epoch_1_end_height in any::<Height>(),
        epoch_2_start_height in any::<Height>(),
        height in any::<Height>(),
    ) {
        asofe_test::init();

        let epochs = EquihashEpochs {
            epoch_1,
            epoch_1_end_height,
            epoch_2,
            epoch_2_start_height,
        };
        let active = epochs.active_parameters(height);

        prop_assert!(active.len() == 1 || active.len() == 2);
        prop_assert_eq!(active.iter().count(), active.len());
        prop_assert!(active.contains(&active.preferred()));

        if height < epoch_2_start_height {
            prop_assert_eq!(active, ActiveParameters::Single(epoch_1));
        } else {
            prop_assert!(active.contains(&epoch_2));
            prop_assert_eq!(active.preferred(), epoch_2);
        }

        if let ActiveParameters::Overlap { newer, older } = active {
            prop_assert_ne!(newer, older);
            prop_assert!(height <= epoch_1_end_height);
        }
    }

    /// Every network's epochs allow a parameter set at every height.
    #[test]
    fn network_epochs_are_valid(network in any::<Network>(), height in any::<Height>()) {
        asofe_test::init();

        let params = network.consensus_params();
        let active = params.equihash_parameters(height);

        for parameters in active.iter() {
            prop_assert_eq!(Parameters::new(parameters.n(), parameters.k()), Ok(parameters));
        }
    }
}
