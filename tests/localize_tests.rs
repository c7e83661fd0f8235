//! End-to-end behaviour of the route localizer.

use std::collections::{HashMap, HashSet};

use route_i18n::routing::route::walk_all;
use route_i18n::routing::{ComputedRouteOptions, LocaleMatcher};
use route_i18n::{localize_routes, Route, Strategy};

mod common;

#[test]
fn test_every_named_route_once_per_locale() {
    for strategy in [Strategy::Prefix, Strategy::PrefixExceptDefault] {
        let out = localize_routes(&common::site(), &common::en_de().with_strategy(strategy));
        let names = common::names(&out);

        for base in ["index", "about", "blog", "blog-slug", "blog-archive"] {
            for locale in ["en", "de"] {
                let expected = format!("{base}___{locale}");
                assert_eq!(
                    names.iter().filter(|n| **n == expected).count(),
                    1,
                    "{strategy}: {expected}"
                );
            }
        }
        assert!(common::names_unique(&out));
    }
}

#[test]
fn test_no_prefix_keeps_routes() {
    let site = common::site();
    let out = localize_routes(&site, &common::en_de().with_strategy(Strategy::NoPrefix));
    assert_eq!(out, site);
    assert_eq!(common::names(&out).iter().filter(|n| *n == "about").count(), 1);
}

#[test]
fn test_prefix_and_default_about() {
    let out = localize_routes(
        &[Route::new("about", "/about")],
        &common::en_de().with_strategy(Strategy::PrefixAndDefault),
    );
    let got: HashSet<_> = common::flatten(&out).into_iter().collect();
    let expected: HashSet<_> = [
        ("about___en", "/about"),
        ("about___en___default", "/about"),
        ("about___de", "/de/about"),
    ]
    .into_iter()
    .map(|(n, p)| (n.to_string(), p.to_string()))
    .collect();
    assert_eq!(got, expected);
}

#[test]
fn test_redirect_only_route_unchanged() {
    for locales in [vec!["en"], vec!["en", "de", "fr"]] {
        let options = route_i18n::LocalizationOptions::new("en", locales);
        let out = localize_routes(&[Route::redirect("/x")], &options);
        assert_eq!(out, vec![Route::redirect("/x")]);
    }
}

#[test]
fn test_relative_child_stays_relative() {
    let out = localize_routes(&common::site(), &common::en_de());
    let blog_de = out
        .iter()
        .find(|r| r.name.as_deref() == Some("blog___de"))
        .unwrap();

    assert_eq!(blog_de.path, "/de/blog");
    assert_eq!(blog_de.children[0].name.as_deref(), Some("blog-slug___de"));
    assert_eq!(blog_de.children[0].path, ":slug");
    assert_eq!(blog_de.children[1].path, "/de/archive");
}

#[test]
fn test_child_locales_subset_of_parent() {
    let out = localize_routes(&common::site(), &common::en_de().with_strategy(Strategy::Prefix));
    let matcher = LocaleMatcher::new(&["en", "de"], "___").unwrap();

    for parent in &out {
        let Some(parent_locale) = matcher.locale_from_route(parent) else {
            continue;
        };
        for child in walk_all(&parent.children) {
            assert_eq!(matcher.locale_from_route(child), Some(parent_locale.clone()));
        }
    }
}

#[test]
fn test_resolver_none_leaves_route_as_is() {
    let site = common::site();
    let options = common::en_de().with_options_resolver(|route, _| {
        (route.name.as_deref() != Some("blog")).then(ComputedRouteOptions::default)
    });
    let out = localize_routes(&site, &options);

    let blog: Vec<_> = out.iter().filter(|r| r.path == "/blog").collect();
    assert_eq!(blog.len(), 1);
    assert_eq!(*blog[0], site[2]);
    assert!(!common::names(&out).iter().any(|n| n.starts_with("blog___")));
}

#[test]
fn test_resolver_restriction_applies_to_subtree() {
    let options = route_i18n::LocalizationOptions::new("en", ["en", "de", "fr"]).with_options_resolver(
        |route, _| {
            let locales = if route.name.as_deref() == Some("blog-slug") {
                vec!["de".to_string()]
            } else {
                Vec::new()
            };
            Some(ComputedRouteOptions {
                locales,
                paths: HashMap::new(),
            })
        },
    );
    let out = localize_routes(&common::site(), &options);

    for blog in out.iter().filter(|r| r.name.as_deref().is_some_and(|n| n.starts_with("blog___"))) {
        let has_slug = blog
            .children
            .iter()
            .any(|c| c.name.as_deref().is_some_and(|n| n.starts_with("blog-slug")));
        assert_eq!(has_slug, blog.name.as_deref() == Some("blog___de"));
    }
}

#[test]
fn test_trailing_slash_examples() {
    use route_i18n::routing::adjust_path_for_trailing_slash;
    assert_eq!(adjust_path_for_trailing_slash("/about///", true, false), "/about/");
    assert_eq!(adjust_path_for_trailing_slash("", false, false), "/");
}

#[test]
fn test_output_paths_never_empty_for_top_level() {
    let routes = vec![Route::new("root", ""), Route::default().with_child(Route::new("x", ""))];
    for strategy in [Strategy::Prefix, Strategy::PrefixExceptDefault, Strategy::PrefixAndDefault] {
        let out = localize_routes(&routes, &common::en_de().with_strategy(strategy));
        assert!(out.iter().all(|r| !r.path.is_empty()), "{strategy}");
    }
}

#[test]
fn test_reverse_lookup_matches_generated_routes() {
    let out = localize_routes(&common::site(), &common::en_de().with_strategy(Strategy::Prefix));
    let matcher = LocaleMatcher::new(&["en", "de"], "___").unwrap();

    for route in &out {
        let by_name = matcher.locale_from_name(route.name.as_deref().unwrap_or(""));
        let by_path = matcher.locale_from_path(&route.path);
        if route.redirect.is_some() {
            continue;
        }
        assert_eq!(by_name, by_path, "{:?}", route.name);
    }
}
