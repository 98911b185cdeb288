//! Unit tests for the browse driver

#[cfg(test)]
mod tests {
    use crate::browse::{BrowseSettings, Browser};
    use crate::db::Database;
    use crate::retrieval::RetrievalEngine;
    use crate::rows::RowAssembler;
    use crate::testing::{FailingStore, TestDb, sample_documents};
    use crate::ui::mock::{RecordingSurface, SurfaceCall};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn settings(page_size: usize, randomize: bool) -> BrowseSettings {
        BrowseSettings {
            page_size,
            randomize,
            infinite_scroll: true,
        }
    }

    fn browser<'a>(
        db: &'a Database,
        surface: RecordingSurface,
        settings: BrowseSettings,
    ) -> Browser<'a, Database, RecordingSurface, StdRng> {
        let engine = RetrievalEngine::new(db, RowAssembler::default());
        Browser::new(engine, surface, StdRng::seed_from_u64(11), settings).unwrap()
    }

    #[test]
    fn test_sequential_listing_of_25() {
        let test_db = TestDb::with_documents(&sample_documents(25));
        let mut browser = browser(test_db.db(), RecordingSurface::new(), settings(10, false));

        browser.start().unwrap();
        browser.reached_scroll_bottom().unwrap();
        browser.reached_scroll_bottom().unwrap();
        browser.reached_scroll_bottom().unwrap();

        let surface = browser.surface();
        let sizes: Vec<usize> = surface.displayed_batches().iter().map(Vec::len).collect();
        assert_eq!(sizes, vec![10, 10, 5]);
        assert_eq!(surface.rows.len(), 25);
        assert_eq!(surface.count(&SurfaceCall::NoMoreResults), 1);
        assert_eq!(surface.fragment.as_deref(), Some("list--20"));
        assert!(!surface.loading);
    }

    #[test]
    fn test_random_start_with_small_page() {
        let test_db = TestDb::with_documents(&sample_documents(30));
        let mut browser = browser(test_db.db(), RecordingSurface::new(), settings(4, true));

        browser.start().unwrap();

        let surface = browser.surface();
        assert_eq!(surface.rows.len(), 4);
        let token = surface.fragment.clone().unwrap();
        assert!(token.starts_with("random--"));
        let listed = surface.row_ids().join(".");
        assert_eq!(token, format!("random--{listed}"));
    }

    #[test]
    fn test_random_restore_drops_dangling_ids() {
        let test_db = TestDb::with_documents(&sample_documents(30));
        let surface = RecordingSurface::with_fragment("random--00003.00099.00001.00003");
        let mut browser = browser(test_db.db(), surface, settings(10, true));

        browser.start().unwrap();

        assert_eq!(browser.surface().row_ids(), vec!["00003", "00001", "00003"]);
        assert_eq!(browser.token(), "random--00003.00099.00001.00003");
    }

    #[test]
    fn test_small_collection_lists_everything_once() {
        let test_db = TestDb::with_documents(&sample_documents(3));
        let mut browser = browser(test_db.db(), RecordingSurface::new(), settings(10, true));

        browser.start().unwrap();
        browser.reached_scroll_bottom().unwrap();

        let surface = browser.surface();
        assert_eq!(surface.row_ids(), vec!["00000", "00001", "00002"]);
        assert_eq!(surface.count(&SurfaceCall::RemoveInfiniteScroll), 1);
        assert!(!surface.infinite_scroll);
        assert_eq!(surface.displayed_batches().len(), 1);
        assert_eq!(surface.fragment.as_deref(), Some("list--0"));
    }

    #[test]
    fn test_empty_collection_stops_after_one_page() {
        let test_db = TestDb::new();
        let mut browser = browser(test_db.db(), RecordingSurface::new(), settings(10, true));

        browser.start().unwrap();
        browser.reached_scroll_bottom().unwrap();
        browser.reached_scroll_bottom().unwrap();

        let surface = browser.surface();
        assert!(surface.rows.is_empty());
        assert_eq!(surface.count(&SurfaceCall::RemoveInfiniteScroll), 1);
        assert_eq!(surface.displayed_batches().len(), 1);
        assert_eq!(surface.fragment.as_deref(), Some("list--0"));
        assert!(!browser.state().settings().randomize);
    }

    #[test]
    fn test_search_without_results() {
        let test_db = TestDb::with_documents(&sample_documents(25));
        let mut browser = browser(test_db.db(), RecordingSurface::new(), settings(10, false));

        browser.start().unwrap();
        browser.submit_search("nothing like this").unwrap();
        browser.reached_scroll_bottom().unwrap();

        let surface = browser.surface();
        assert!(surface.rows.is_empty());
        assert_eq!(surface.count(&SurfaceCall::NoResult), 1);
        assert_eq!(surface.count(&SurfaceCall::NoMoreResults), 0);
        assert_eq!(surface.fragment.as_deref(), Some("search--0_nothing like this"));
    }

    #[test]
    fn test_short_search_is_complete_not_empty() {
        let test_db = TestDb::with_documents(&sample_documents(25));
        let mut browser = browser(test_db.db(), RecordingSurface::new(), settings(10, false));

        browser.start().unwrap();
        browser.submit_search("document 2").unwrap();

        let surface = browser.surface();
        assert_eq!(surface.rows.len(), 6);
        assert_eq!(surface.count(&SurfaceCall::NoMoreResults), 1);
        assert_eq!(surface.count(&SurfaceCall::NoResult), 0);
    }

    #[test]
    fn test_search_pages_append() {
        let test_db = TestDb::with_documents(&sample_documents(25));
        let mut browser = browser(test_db.db(), RecordingSurface::new(), settings(5, false));

        browser.start().unwrap();
        browser.search("ann", Some(0)).unwrap();
        browser.reached_scroll_bottom().unwrap();
        browser.reached_scroll_bottom().unwrap();

        // 13 even-numbered documents are by Ann
        let surface = browser.surface();
        assert_eq!(surface.rows.len(), 13);
        assert!(surface.rows.iter().all(|r| r.author.as_deref() == Some("Ann")));
        assert_eq!(surface.fragment.as_deref(), Some("search--10_ann"));
    }

    #[test]
    fn test_restore_search_at_cursor() {
        let test_db = TestDb::with_documents(&sample_documents(25));
        let surface = RecordingSurface::with_fragment("search--10_DOCUMENT 1");
        let mut browser = browser(test_db.db(), surface, settings(10, true));

        browser.start().unwrap();

        assert_eq!(browser.surface().row_ids(), vec!["00019"]);
        assert_eq!(browser.surface().count(&SurfaceCall::NoMoreResults), 1);
    }

    #[test]
    fn test_restore_opens_player() {
        let test_db = TestDb::with_documents(&sample_documents(25));
        let surface = RecordingSurface::with_fragment("list-00005-10");
        let mut browser = browser(test_db.db(), surface, settings(10, false));

        browser.start().unwrap();

        let surface = browser.surface();
        assert_eq!(surface.rows.first().map(|r| r.id.as_str()), Some("00010"));
        let player = surface.player.as_ref().unwrap();
        assert_eq!(player.id, "00005");
        assert!(player.multiple);
        assert_eq!(surface.fragment.as_deref(), Some("list-00005-10"));
    }

    #[test]
    fn test_open_and_close_player() {
        let test_db = TestDb::with_documents(&sample_documents(25));
        let mut browser = browser(test_db.db(), RecordingSurface::new(), settings(10, false));

        browser.start().unwrap();
        browser.open_media_player("00002").unwrap();

        assert_eq!(browser.surface().fragment.as_deref(), Some("list-00002-0"));
        assert_eq!(
            browser.surface().player.as_ref().map(|p| p.items.len()),
            Some(2)
        );

        browser.close_player().unwrap();
        assert!(browser.surface().player.is_none());
        assert_eq!(browser.surface().fragment.as_deref(), Some("list--0"));
    }

    #[test]
    fn test_missing_player_document() {
        let test_db = TestDb::with_documents(&sample_documents(25));
        let mut browser = browser(test_db.db(), RecordingSurface::new(), settings(10, false));

        browser.start().unwrap();
        browser.open_media_player("00777").unwrap();

        let surface = browser.surface();
        assert!(surface.player.is_none());
        assert_eq!(surface.count(&SurfaceCall::HidePlayer), 1);
        assert_eq!(surface.fragment.as_deref(), Some("list--0"));
    }

    #[test]
    fn test_about() {
        let test_db = TestDb::with_documents(&sample_documents(3));
        let mut browser = browser(test_db.db(), RecordingSurface::new(), settings(10, false))
            .with_about("Sea stories", "Public domain novels");

        browser.about().unwrap();
        assert_eq!(browser.surface().count(&SurfaceCall::ShowAbout), 1);
    }

    #[test]
    fn test_failing_store_shows_empty_listing() {
        let engine = RetrievalEngine::new(&FailingStore, RowAssembler::default());
        let mut browser = Browser::new(
            engine,
            RecordingSurface::new(),
            StdRng::seed_from_u64(1),
            settings(10, false),
        )
        .unwrap();

        browser.start().unwrap();

        let surface = browser.into_surface();
        assert!(surface.rows.is_empty());
        assert_eq!(surface.count(&SurfaceCall::NoResult), 0);
        assert_eq!(surface.count(&SurfaceCall::NoMoreResults), 0);
        assert_eq!(surface.calls.last(), Some(&SurfaceCall::SetLoading(false)));
    }

    #[test]
    fn test_loading_is_cleared_after_every_page() {
        let test_db = TestDb::with_documents(&sample_documents(25));
        let mut browser = browser(test_db.db(), RecordingSurface::new(), settings(10, true));

        browser.start().unwrap();
        browser.reached_scroll_bottom().unwrap();

        let surface = browser.surface();
        assert_eq!(
            surface.count(&SurfaceCall::SetLoading(true)),
            surface.count(&SurfaceCall::SetLoading(false))
        );
        assert_eq!(surface.rows.len(), 20);
        assert!(!browser.state().is_loading());
    }
}
