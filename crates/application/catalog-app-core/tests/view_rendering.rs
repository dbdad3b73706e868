mod common;

use catalog_app_core::app_core::{reduce, AppStore, DomainEvent};
use catalog_app_core::viewmodel::{catalog_vm, CatalogVm, Presentation, READ_MORE_LABEL, SHOW_LESS_LABEL};
use catalog_app_core::{AppKernel, CatalogState, ExpansionState, ProductListView, ProductSource};
use catalog_core::EllipsisPolicy;
use common::{product, sample_products, FixedSource, GatedSource};
use std::sync::atomic::Ordering;

fn view<S: ProductSource>(source: S) -> ProductListView<S> {
    let store = AppStore::new(CatalogState::default());
    let kernel = AppKernel::new(store, source).expect("kernel");
    ProductListView::new(kernel, Presentation::default())
}

#[tokio::test]
async fn activation_shows_loading_until_resolved() {
    let source = GatedSource::default();
    let gate = source.push(Ok(sample_products()));
    let mut view = view(source);

    assert!(view.activate());
    assert_eq!(view.vm().status_text().as_deref(), Some("Loading..."));
    assert!(view.vm().cards().is_empty());

    gate.send(()).unwrap();
    view.settle().await;
    assert_eq!(view.vm().status_text(), None);
    assert_eq!(view.vm().cards().len(), 3);
}

#[tokio::test]
async fn activation_fetches_only_once() {
    let source = FixedSource::ok(sample_products());
    let calls = source.call_counter();
    let mut view = view(source);

    assert!(view.activate());
    assert!(!view.activate());
    view.settle().await;
    for _ in 0..5 {
        tokio::task::yield_now().await;
    }

    assert_eq!(view.tick(), 0);
    assert!(view.is_activated());
    assert_eq!(view.state().revision, 1);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn empty_catalog_renders_empty_grid() {
    let mut view = view(FixedSource::ok(vec![]));
    view.activate();
    view.settle().await;

    match view.vm() {
        CatalogVm::Grid { cards, fetched_at } => {
            assert!(cards.is_empty());
            assert!(fetched_at.is_some());
        }
        other => panic!("expected empty grid, got {other:?}"),
    }
    assert_eq!(view.vm().status_text(), None);
}

#[tokio::test]
async fn single_short_product_renders_card() {
    let mut view = view(FixedSource::ok(vec![product(1, "A", 9.99, "short", "u")]));
    view.activate();
    view.settle().await;

    let vm = view.vm();
    let card = &vm.cards()[0];
    assert_eq!(card.title, "A");
    assert_eq!(card.price_label, "Price: $9.99");
    assert_eq!(card.description, "short...");
    assert_eq!(card.toggle_label, READ_MORE_LABEL);
    assert_eq!(card.image_url, "u");
}

#[tokio::test]
async fn network_failure_renders_error_text() {
    let mut view = view(FixedSource::failing("Network Error"));
    view.activate();
    view.settle().await;

    assert_eq!(
        view.vm().status_text().as_deref(),
        Some("Error: Network Error")
    );
    assert!(view.vm().cards().is_empty());
}

#[tokio::test]
async fn toggling_expands_one_card_only() {
    let mut view = view(FixedSource::ok(sample_products()));
    view.activate();
    view.settle().await;

    assert!(view.toggle(1));
    let vm = view.vm();
    let cards = vm.cards();
    assert!(!cards[0].expanded);
    assert!(cards[1].expanded);
    assert!(!cards[2].expanded);
    assert_eq!(cards[1].toggle_label, SHOW_LESS_LABEL);
    assert_eq!(cards[1].description, sample_products()[1].description);
    assert!(!cards[1].description.ends_with("..."));

    assert!(!view.toggle(1));
    assert!(!view.vm().cards()[1].expanded);
}

#[tokio::test]
async fn collapsed_long_description_is_cut_to_preview_length() {
    let mut view = view(FixedSource::ok(sample_products()));
    view.activate();
    view.settle().await;

    let vm = view.vm();
    let card = &vm.cards()[1];
    assert_eq!(card.description.chars().count(), 153);
    assert!(card.description.ends_with("..."));
}

#[tokio::test]
async fn when_truncated_policy_leaves_short_descriptions_alone() {
    let mut view = view(FixedSource::ok(vec![product(1, "A", 9.99, "short", "u")]));
    view.set_presentation(Presentation {
        ellipsis: EllipsisPolicy::WhenTruncated,
        ..Presentation::default()
    });
    view.activate();
    view.settle().await;

    assert_eq!(view.vm().cards()[0].description, "short");
}

#[tokio::test]
async fn refresh_resets_expansion_when_catalog_is_replaced() {
    let mut view = view(FixedSource::ok(sample_products()));
    view.activate();
    view.settle().await;
    view.toggle(0);
    view.toggle(2);
    assert_eq!(view.expansion().flags(), &[true, false, true]);

    view.refresh();
    assert_eq!(view.vm().status_text().as_deref(), Some("Loading..."));
    view.settle().await;

    assert_eq!(view.expansion().flags(), &[false, false, false]);
}

#[tokio::test]
async fn expansion_tracks_catalog_that_arrives_after_mount() {
    let mut view = view(FixedSource::ok(sample_products()));
    assert!(view.expansion().is_empty());

    view.activate();
    view.settle().await;

    assert_eq!(view.expansion().len(), 3);
    assert!(view.toggle(2));
}

#[tokio::test]
async fn toggle_by_product_id() {
    let mut view = view(FixedSource::ok(sample_products()));
    view.activate();
    view.settle().await;

    assert_eq!(view.toggle_product(3), Some(true));
    assert_eq!(view.toggle_product(99), None);
    assert!(view.vm().cards()[2].expanded);
}

#[tokio::test]
async fn cards_render_collapsed_once_the_store_moves_past_the_flags() {
    let store = AppStore::new(CatalogState::default());
    let kernel = AppKernel::new(store.clone(), FixedSource::ok(sample_products())).expect("kernel");
    let mut view = ProductListView::new(kernel, Presentation::default());
    view.activate();
    view.settle().await;
    view.toggle(0);
    assert!(view.vm().cards()[0].expanded);

    // A replacement catalog lands without the view realigning its flags.
    store.apply(DomainEvent::ProductsLoaded {
        products: sample_products(),
        fetched_at: chrono::Utc::now(),
    });

    assert_eq!(view.state().revision, 2);
    assert_eq!(view.expansion().flags(), &[true, false, false]);
    assert!(view.vm().cards().iter().all(|c| !c.expanded));

    view.tick();
    assert_eq!(view.expansion().flags(), &[false, false, false]);
}

#[tokio::test]
async fn expand_by_product_id_is_idempotent() {
    let mut view = view(FixedSource::ok(sample_products()));
    view.activate();
    view.settle().await;

    assert!(view.expand_product(2));
    assert!(view.expand_product(2));
    assert!(!view.expand_product(99));
    assert_eq!(view.expansion().flags(), &[false, true, false]);
}

#[test]
fn stale_flags_are_ignored_when_building_the_grid() {
    let first = reduce(
        CatalogState::default(),
        DomainEvent::ProductsLoaded {
            products: sample_products(),
            fetched_at: chrono::Utc::now(),
        },
    );
    let mut expansion = ExpansionState::for_state(&first);
    expansion.toggle(1);

    let second = reduce(
        first,
        DomainEvent::ProductsLoaded {
            products: sample_products(),
            fetched_at: chrono::Utc::now(),
        },
    );
    let vm = catalog_vm(&second, &expansion, &Presentation::default());
    assert!(!vm.cards()[1].expanded);
    assert_eq!(vm.cards()[1].toggle_label, READ_MORE_LABEL);
}
