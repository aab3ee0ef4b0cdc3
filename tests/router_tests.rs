#[cfg(test)]
pub mod router_tests {
    use tarocard::frontend::router::Route;

    #[test]
    fn initial_route_is_home() {
        assert_eq!(Route::default(), Route::Home);
    }

    #[test]
    fn keys_round_trip() {
        for route in Route::ALL {
            assert_eq!(Route::from_key(route.key()), Some(route));
        }
        assert_eq!(Route::from_key("negozio"), None);
    }

    #[test]
    fn header_links_skip_legal_and_admin_pages() {
        assert!(!Route::HEADER_LINKS.contains(&Route::Admin));
        for doc in Route::FOOTER_DOCS {
            assert!(!Route::HEADER_LINKS.contains(&doc));
        }
    }

    #[test]
    fn every_route_is_reachable_from_the_menu() {
        for route in [Route::Rules, Route::Privacy, Route::Terms, Route::Admin] {
            assert!(Route::ALL.contains(&route));
        }
        assert_eq!(Route::ALL.len(), 9);
    }

    #[test]
    fn labels_are_italian_and_non_empty() {
        for route in Route::ALL {
            assert!(!route.label().is_empty());
        }
        assert_eq!(Route::Map.label(), "Mappa negozi");
        assert_eq!(Route::Admin.label(), "Area riservata");
    }
}
