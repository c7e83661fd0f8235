//! Property-based invariant tests for route localization.
//!
//! 1. Trailing-slash normalization is idempotent
//! 2. Normalized paths never end in more than one slash
//! 3. Localized names are unique given unique input names
//! 4. Output size is input pages × locales (plus default copies)
//! 5. The input tree is never mutated

use proptest::prelude::*;

use route_i18n::routing::adjust_path_for_trailing_slash;
use route_i18n::routing::route::walk_all;
use route_i18n::{localize_routes, LocalizationOptions, Route, Strategy as RoutingStrategy};

mod common;

fn routing_strategy() -> impl Strategy<Value = RoutingStrategy> {
    prop_oneof![
        Just(RoutingStrategy::Prefix),
        Just(RoutingStrategy::PrefixExceptDefault),
        Just(RoutingStrategy::PrefixAndDefault),
    ]
}

/// A forest of uniquely named routes, at most two levels deep.
fn forest() -> impl Strategy<Value = Vec<Route>> {
    prop::collection::vec(
        ("[a-z]{1,6}", prop::collection::vec(("[a-z]{1,6}", any::<bool>()), 0..4)),
        0..6,
    )
    .prop_map(|parents| {
        parents
            .into_iter()
            .enumerate()
            .map(|(i, (segment, children))| {
                let children = children
                    .into_iter()
                    .enumerate()
                    .map(|(j, (child_segment, absolute))| {
                        let path = if absolute {
                            format!("/{child_segment}")
                        } else {
                            child_segment
                        };
                        Route::new(format!("p{i}-c{j}"), path)
                    })
                    .collect();
                Route::new(format!("p{i}"), format!("/{segment}")).with_children(children)
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn normalization_idempotent(
        path in "[a-z/]{0,12}",
        trailing_slash in any::<bool>(),
        relative_child in any::<bool>(),
    ) {
        let once = adjust_path_for_trailing_slash(&path, trailing_slash, relative_child);
        let twice = adjust_path_for_trailing_slash(&once, trailing_slash, relative_child);
        prop_assert_eq!(&once, &twice);
        prop_assert!(!once.ends_with("//"));
    }
}

proptest! {
    #[test]
    fn localized_names_unique(
        routes in forest(),
        strategy in routing_strategy(),
        trailing_slash in any::<bool>(),
    ) {
        let options = LocalizationOptions::new("en", ["en", "de", "fr"])
            .with_strategy(strategy)
            .with_trailing_slash(trailing_slash);
        let out = localize_routes(&routes, &options);
        prop_assert!(common::names_unique(&out));
    }
}

proptest! {
    #[test]
    fn output_size_is_pages_times_locales(routes in forest(), strategy in routing_strategy()) {
        let options = LocalizationOptions::new("en", ["en", "de", "fr"]).with_strategy(strategy);
        let out = localize_routes(&routes, &options);

        let copies = if strategy == RoutingStrategy::PrefixAndDefault { 4 } else { 3 };
        prop_assert_eq!(out.len(), routes.len() * copies);
        prop_assert_eq!(walk_all(&out).count(), walk_all(&routes).count() * copies);
    }
}

proptest! {
    #[test]
    fn input_never_mutated(routes in forest(), strategy in routing_strategy()) {
        let before = routes.clone();
        let _ = localize_routes(&routes, &LocalizationOptions::new("de", ["en", "de"]).with_strategy(strategy));
        prop_assert_eq!(routes, before);
    }
}
