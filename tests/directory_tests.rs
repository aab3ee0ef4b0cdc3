mod common;

#[cfg(test)]
pub mod directory_tests {
    use super::common::*;

    use tarocard::frontend::map::{fallback_embed_url, popup_html, LoaderState, DEFAULT_ZOOM};
    use tarocard::models::Position;
    use tarocard::services::directory::{
        parse_coord, StoreDirectory, StoreDraft, ALL_CATEGORIES, FALLBACK_CATEGORY,
    };
    use tarocard::services::export::{stores_to_csv, CSV_HEADER};

    #[test]
    fn sentinel_returns_every_store() {
        let dir = StoreDirectory::demo();
        assert_eq!(dir.filter_by_category(ALL_CATEGORIES).len(), dir.len());
        assert_eq!(dir.len(), 7);
    }

    #[test]
    fn filter_returns_only_matching_stores() {
        let dir = StoreDirectory::demo();
        for category in dir.categories().into_iter().skip(1) {
            let subset = dir.filter_by_category(&category);
            assert!(!subset.is_empty());
            assert!(subset.iter().all(|s| s.category == category));
        }
    }

    #[test]
    fn categories_start_with_sentinel_and_are_distinct() {
        let dir = StoreDirectory::demo();
        let categories = dir.categories();
        assert_eq!(categories[0], ALL_CATEGORIES);
        let mut deduped = categories.clone();
        deduped.dedup();
        assert_eq!(categories, deduped);
    }

    #[test]
    fn center_is_arithmetic_mean() {
        let dir = StoreDirectory::demo();
        let all = dir.filter_by_category(ALL_CATEGORIES);
        let center = dir.compute_center(&all);
        let n = all.len() as f64;
        let lat = all.iter().map(|s| s.position.lat).sum::<f64>() / n;
        let lon = all.iter().map(|s| s.position.lon).sum::<f64>() / n;
        assert!((center.lat - lat).abs() < 1e-9);
        assert!((center.lon - lon).abs() < 1e-9);
    }

    #[test]
    fn center_of_empty_list_falls_back_to_full_directory() {
        let dir = StoreDirectory::demo();
        let full = dir.compute_center(dir.stores());
        assert_eq!(dir.compute_center(&[]), full);
    }

    #[test]
    fn bar_caffe_filter_selects_single_store_and_recenters_on_it() {
        let dir = StoreDirectory::demo();
        let filtered = dir.filter_by_category("Bar & Caffe");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Bar Centrale");
        assert_eq!(dir.compute_center(&filtered), filtered[0].position);
    }

    #[test]
    fn add_store_appends_with_next_id() {
        let mut dir = StoreDirectory::demo();
        let before = dir.len();
        let max_id = dir.stores().iter().map(|s| s.id).max().unwrap();

        let id = dir.add_store(StoreDraft {
            name: "Libreria del Ponte".to_string(),
            category: "Libri".to_string(),
            ..StoreDraft::default()
        });

        assert_eq!(dir.len(), before + 1);
        assert_eq!(id, max_id + 1);

        // A second row gets the next id; ids are never reused.
        let second = dir.add_store(StoreDraft::default());
        assert_eq!(second, id + 1);
    }

    #[test]
    fn add_store_defaults_blank_category() {
        let mut dir = StoreDirectory::demo();
        dir.add_store(StoreDraft::default());
        assert_eq!(dir.stores().last().unwrap().category, FALLBACK_CATEGORY);
    }

    #[test]
    fn coordinate_parsing_accepts_blank_and_rejects_garbage() {
        assert_eq!(parse_coord(""), Ok(0.0));
        assert_eq!(parse_coord("  "), Ok(0.0));
        assert_eq!(parse_coord("44.488"), Ok(44.488));
        assert_eq!(parse_coord(" 9.7 "), Ok(9.7));
        assert!(parse_coord("nord").is_err());
        assert!(parse_coord("44,488").is_err());
    }

    #[test]
    fn csv_export_round_trips_awkward_fields() {
        let mut dir = StoreDirectory::demo();
        let tricky = tricky_store();
        dir.add_store(StoreDraft {
            name: tricky.name.clone(),
            category: tricky.category.clone(),
            comune: tricky.comune.clone(),
            address: tricky.address.clone(),
            lat: tricky.position.lat,
            lon: tricky.position.lon,
            website: tricky.website.clone(),
            description: tricky.description.clone(),
        });

        let csv = stores_to_csv(dir.stores());
        let rows = parse_csv(&csv);

        assert_eq!(rows[0].join(","), CSV_HEADER);
        assert_eq!(rows.len(), dir.len() + 1);
        for (row, store) in rows[1..].iter().zip(dir.stores()) {
            assert_eq!(row[0], store.name);
            assert_eq!(row[1], store.category);
            assert_eq!(row[2], store.address);
            assert_eq!(row[3], store.comune);
            assert_eq!(row[4], store.position.lat.to_string());
            assert_eq!(row[5], store.position.lon.to_string());
            assert_eq!(row[6], store.website);
            assert_eq!(row[7], store.telefono);
            assert_eq!(row[8], store.description);
        }
    }

    #[test]
    fn failed_loader_fallback_url_carries_center_and_zoom() {
        // Library load failure is terminal; the degraded embed must point
        // at the computed center with the fixed default zoom.
        assert_eq!(LoaderState::default(), LoaderState::Pending);
        let url = fallback_embed_url(Position::new(44.488, 9.779), DEFAULT_ZOOM);
        assert!(url.starts_with("https://www.openstreetmap.org/export/embed.html"));
        assert!(url.contains("marker=44.488,9.779"));
        assert!(url.contains("zoom=12"));
    }

    #[test]
    fn popup_omits_link_for_store_without_website() {
        let dir = StoreDirectory::demo();
        let with_site = dir.stores().iter().find(|s| s.has_website()).unwrap();
        let without_site = dir.stores().iter().find(|s| !s.has_website()).unwrap();

        let html = popup_html(with_site);
        assert!(html.contains("Sito web"));
        assert!(html.contains(&with_site.website));

        let html = popup_html(without_site);
        assert!(!html.contains("<a "));
        assert!(html.contains(&without_site.address));
    }
}
