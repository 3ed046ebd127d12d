use std::str::FromStr;

use crawlview::client::router::Route;

#[test]
// `/` redirects to the same view as `/home`
fn root_resolves_to_home() {
    assert_eq!(Route::from_str("/").ok(), Some(Route::Home {}));
    assert_eq!(Route::from_str("/home").ok(), Some(Route::Home {}));
}

#[test]
fn page_route_passes_id_prop() {
    assert_eq!(
        Route::from_str("/page/42").ok(),
        Some(Route::Page {
            id: "42".to_string()
        })
    );
}

#[test]
fn unknown_path_resolves_to_not_found() {
    let route = Route::from_str("/does/not/exist").ok();

    assert!(matches!(route, Some(Route::NotFound { .. })));
}

#[test]
fn every_view_has_a_path() {
    let routes = [
        ("/home", Route::Home {}),
        ("/login", Route::Login {}),
        ("/profile", Route::Profile {}),
        ("/search", Route::Search {}),
        ("/signup", Route::Signup {}),
        ("/update", Route::Update {}),
    ];

    for (path, route) in routes {
        assert_eq!(Route::from_str(path).ok(), Some(route.clone()), "{}", path);
        assert_eq!(route.to_string(), path);
    }
}
