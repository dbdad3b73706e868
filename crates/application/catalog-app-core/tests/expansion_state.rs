mod common;

use catalog_app_core::app_core::{reduce, DomainEvent};
use catalog_app_core::{CatalogState, ExpansionState};
use common::sample_products;

fn loaded_state() -> CatalogState {
    reduce(
        CatalogState::default(),
        DomainEvent::ProductsLoaded {
            products: sample_products(),
            fetched_at: chrono::Utc::now(),
        },
    )
}

#[test]
fn starts_collapsed_for_every_product() {
    let exp = ExpansionState::for_state(&loaded_state());
    assert_eq!(exp.flags(), &[false, false, false]);
}

#[test]
fn toggle_flips_only_the_target() {
    let mut exp = ExpansionState::for_state(&loaded_state());
    for i in 0..3 {
        let before = exp.flags().to_vec();
        exp.toggle(i);
        for (j, (a, b)) in before.iter().zip(exp.flags()).enumerate() {
            if i == j {
                assert_ne!(a, b);
            } else {
                assert_eq!(a, b);
            }
        }
    }
}

#[test]
fn out_of_range_toggle_is_ignored() {
    let mut exp = ExpansionState::for_state(&loaded_state());
    assert!(!exp.toggle(10));
    assert_eq!(exp.flags(), &[false, false, false]);
}

#[test]
fn sync_is_a_no_op_for_the_same_catalog() {
    let state = loaded_state();
    let mut exp = ExpansionState::for_state(&state);
    exp.toggle(1);
    assert!(!exp.sync(&state));
    assert!(exp.is_expanded(1));
}

#[test]
fn sync_resets_when_products_are_replaced() {
    let state = loaded_state();
    let mut exp = ExpansionState::for_state(&state);
    exp.toggle(0);

    let next = reduce(
        state,
        DomainEvent::ProductsLoaded {
            products: sample_products()[..2].to_vec(),
            fetched_at: chrono::Utc::now(),
        },
    );
    assert!(exp.sync(&next));
    assert_eq!(exp.flags(), &[false, false]);
}

#[test]
fn failure_does_not_reset_flags() {
    let state = loaded_state();
    let mut exp = ExpansionState::for_state(&state);
    exp.toggle(2);

    let failed = reduce(
        state,
        DomainEvent::ProductsFailed {
            message: "Network Error".into(),
        },
    );
    assert!(!exp.sync(&failed));
    assert!(exp.is_expanded(2));
}

#[test]
fn expand_leaves_open_cards_open() {
    let mut exp = ExpansionState::for_state(&loaded_state());
    assert!(exp.expand(0));
    assert!(exp.expand(0));
    assert!(!exp.expand(7));
    assert_eq!(exp.flags(), &[true, false, false]);
}

#[test]
fn matches_only_the_catalog_it_was_built_for() {
    let state = loaded_state();
    let exp = ExpansionState::for_state(&state);
    assert!(exp.matches(&state));

    let next = reduce(
        state,
        DomainEvent::ProductsLoaded {
            products: sample_products(),
            fetched_at: chrono::Utc::now(),
        },
    );
    assert!(!exp.matches(&next));
}
