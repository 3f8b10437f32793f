
use asofe_test::prelude::Result;

use super::{subsidy::*, Network};
use crate::{block::Height, parameters::NetworkUpgrade};

#[test]
fn halving_test() -> Result<()> {
    asofe_test::init();

    for network in Network::iter() {
        halving_for_network(network)?;
    }

    Ok(())
}

fn halving_for_network(network: Network) -> Result<()> {
    let params = network.consensus_params();
    let first_halving_height =
        height_for_halving(1, &params).expect("first halving is below the maximum height");
    let last_founders_reward_height = params.last_founders_reward_height();

    assert_eq!(
        Some(first_halving_height),
        last_founders_reward_height.next().ok()
    );

    assert_eq!(0, num_halvings(Height(1), &params)?);
    assert_eq!(
        0,
        num_halvings(params.slow_start_interval().max(Height(1)), &params)?
    );
    assert_eq!(0, num_halvings(last_founders_reward_height, &params)?);
    assert_eq!(1, num_halvings(first_halving_height, &params)?);

    if let Some(blossom_height) = params.upgrades().activation_height(NetworkUpgrade::Blossom) {
        let before_blossom = blossom_height.previous()?;
        assert_eq!(0, num_halvings(before_blossom, &params)?);
        assert_eq!(0, num_halvings(blossom_height, &params)?);

        // After Blossom, halvings are twice as many blocks apart.
        let second_halving_height = (first_halving_height
            + params.post_blossom_halving_interval())
        .expect("second halving is below the maximum height");
        assert_eq!(Some(second_halving_height), height_for_halving(2, &params));
        assert_eq!(1, num_halvings(second_halving_height.previous()?, &params)?);
        assert_eq!(2, num_halvings(second_halving_height, &params)?);
    } else {
        let second_halving_height = (first_halving_height
            + params.pre_blossom_halving_interval())
        .expect("second halving is below the maximum height");
        assert_eq!(Some(second_halving_height), height_for_halving(2, &params));
        assert_eq!(2, num_halvings(second_halving_height, &params)?);
    }

    assert!(num_halvings(Height::MAX, &params)? > 1);

    Ok(())
}

#[test]
fn genesis_has_no_halving() {
    asofe_test::init();

    for network in Network::iter() {
        let params = network.consensus_params();

        assert_eq!(
            num_halvings(Height(0), &params),
            Err(SubsidyError::InvalidHeight(Height(0)))
        );
        assert_eq!(height_for_halving(0, &params), Some(Height(0)));
    }
}

#[test]
fn check_height_for_num_halvings() -> Result<()> {
    asofe_test::init();

    for network in Network::iter() {
        let params = network.consensus_params();

        for halving in 1..100 {
            let Some(height_for_halving) = height_for_halving(halving, &params) else {
                panic!("could not find height for halving {halving}");
            };

            let prev_height = height_for_halving
                .previous()
                .expect("there should be a previous height");

            assert_eq!(
                halving,
                num_halvings(height_for_halving, &params)?,
                "num_halvings should match the halving index"
            );

            assert_eq!(
                halving - 1,
                num_halvings(prev_height, &params)?,
                "num_halvings for the prev height should be 1 less than the halving index"
            );
        }

        assert_eq!(height_for_halving(u32::MAX, &params), None);
    }

    Ok(())
}

#[test]
fn blossom_adjusted_height_halves_post_blossom_blocks() {
    asofe_test::init();

    let params = Network::Mainnet.consensus_params();
    let blossom = Height(653_600);

    assert_eq!(blossom_adjusted_height(Height(1), &params), Height(1));
    assert_eq!(
        blossom_adjusted_height(Height(653_599), &params),
        Height(653_599)
    );
    assert_eq!(blossom_adjusted_height(blossom, &params), blossom);
    assert_eq!(blossom_adjusted_height(Height(653_601), &params), blossom);
    assert_eq!(
        blossom_adjusted_height(Height(653_602), &params),
        Height(653_601)
    );

    let regtest = Network::Regtest.consensus_params();
    assert_eq!(blossom_adjusted_height(Height::MAX, &regtest), Height::MAX);
}
