//! Shared fixtures for integration tests.

use std::collections::HashSet;

use route_i18n::routing::route::{walk_all, Route};
use route_i18n::LocalizationOptions;

/// Options with `en` (default) and `de`.
#[allow(dead_code)]
pub fn en_de() -> LocalizationOptions {
    LocalizationOptions::new("en", ["en", "de"])
}

/// A small site: index, about, a nested blog, and a legacy redirect.
#[allow(dead_code)]
pub fn site() -> Vec<Route> {
    vec![
        Route::new("index", "/").with_file("pages/index.vue"),
        Route::new("about", "/about").with_file("pages/about.vue"),
        Route::new("blog", "/blog")
            .with_file("pages/blog.vue")
            .with_child(Route::new("blog-slug", ":slug").with_file("pages/blog/[slug].vue"))
            .with_child(Route::new("blog-archive", "/archive").with_file("pages/blog/archive.vue")),
        Route::redirect("/about"),
    ]
}

/// `(name, path)` of every route in the tree, depth first.
#[allow(dead_code)]
pub fn flatten(routes: &[Route]) -> Vec<(String, String)> {
    walk_all(routes)
        .map(|r| (r.name.clone().unwrap_or_default(), r.path.clone()))
        .collect()
}

/// Names of every route in the tree.
#[allow(dead_code)]
pub fn names(routes: &[Route]) -> Vec<String> {
    walk_all(routes).filter_map(|r| r.name.clone()).collect()
}

/// True if no name appears twice.
#[allow(dead_code)]
pub fn names_unique(routes: &[Route]) -> bool {
    let all = names(routes);
    let unique: HashSet<_> = all.iter().collect();
    unique.len() == all.len()
}
