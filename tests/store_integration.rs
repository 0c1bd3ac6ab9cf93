//! File-backed store behavior across process-style reopen cycles
//!
//! These tests exercise the JSON file backend through the public API only,
//! the same way the CLI and a game client drive it.

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use tempfile::TempDir;
    use waymark::client::{ClientHost, PlayerState, TickInput, WaypointClient};
    use waymark::config::StoreConfig;
    use waymark::core::{OVERWORLD, THE_NETHER};
    use waymark::store::JsonFileBackend;
    use waymark::{Color, Position, WaypointStore};

    fn store_config(dir: &TempDir) -> StoreConfig {
        StoreConfig { data_dir: dir.path().join("waymark"), ..StoreConfig::default() }
    }

    #[derive(Default)]
    struct RecordingHost {
        opened: Vec<String>,
        messages: Vec<String>,
    }

    impl ClientHost for RecordingHost {
        fn open_waypoint_list(&mut self, dimension: &str) {
            self.opened.push(dimension.to_string());
        }

        fn notify(&mut self, message: &str) {
            self.messages.push(message.to_string());
        }
    }

    #[test]
    fn test_waypoints_survive_reopen() {
        let dir = TempDir::new().unwrap();
        let config = store_config(&dir);

        let store = WaypointStore::open(&config);
        let base = store.create(
            "Base",
            Position::new(100.0, 64.0, -200.0),
            OVERWORLD,
            Some(Color::new(0x123456)),
            None,
            Some("Homes".to_string()),
        );
        let portal =
            store.create("Portal", Position::new(12.0, 70.0, -25.0), THE_NETHER, None, None, None);
        store.add(base.clone());
        store.add(portal.clone());
        drop(store);

        assert!(config.file_path().exists());

        let reopened = WaypointStore::open(&config);
        assert_eq!(reopened.len(), 2);
        assert_eq!(reopened.get(base.id()), Some(base));
        let portal_back = reopened.get(portal.id()).unwrap();
        assert_eq!(portal_back.color, Color::new(0xF44336));
        assert_eq!(portal_back.icon, "netherrack.png");
    }

    #[test]
    fn test_malformed_file_starts_empty() {
        let dir = TempDir::new().unwrap();
        let config = store_config(&dir);
        std::fs::create_dir_all(&config.data_dir).unwrap();
        std::fs::write(config.file_path(), "{ this is not json").unwrap();

        let store = WaypointStore::open(&config);
        assert!(store.is_empty());

        // The next mutation replaces the broken document
        let wp = store.create("Fresh", Position::new(0.0, 0.0, 0.0), OVERWORLD, None, None, None);
        store.add(wp);
        let reopened = WaypointStore::open(&config);
        assert_eq!(reopened.len(), 1);
    }

    #[test]
    fn test_export_then_import_into_another_store() {
        let dir = TempDir::new().unwrap();
        let source = WaypointStore::new(JsonFileBackend::new(dir.path().join("source.json")));
        for (i, name) in ["A", "B", "C"].iter().enumerate() {
            let wp = source.create(
                *name,
                Position::new(i as f64 * 10.0, 64.0, 0.0),
                OVERWORLD,
                None,
                None,
                None,
            );
            source.add(wp);
        }
        let exported = source.export_all().unwrap();

        let target = WaypointStore::new(JsonFileBackend::new(dir.path().join("target.json")));
        let imported = target.import_from(&exported).unwrap();
        assert_eq!(imported, 3);

        let mut names: Vec<String> = target.list().into_iter().map(|wp| wp.name).collect();
        names.sort();
        assert_eq!(names, vec!["A", "B", "C"]);

        // Importing the same export again overwrites rather than duplicates
        target.import_from(&exported).unwrap();
        assert_eq!(target.len(), 3);
        drop(target);

        let reopened = WaypointStore::new(JsonFileBackend::new(dir.path().join("target.json")));
        let mut expected = source.list();
        let mut actual = reopened.list();
        expected.sort_by(|a, b| a.id().cmp(b.id()));
        actual.sort_by(|a, b| a.id().cmp(b.id()));
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_update_is_written_to_file() {
        let dir = TempDir::new().unwrap();
        let config = store_config(&dir);
        let store = WaypointStore::open(&config);
        let mut wp =
            store.create("Camp", Position::new(1.0, 2.0, 3.0), OVERWORLD, None, None, None);
        store.add(wp.clone());

        wp.name = "Old camp".to_string();
        wp.set_position(Position::new(-7.5, 80.0, 12.0));
        wp.visible = false;
        store.update(wp.clone());
        drop(store);

        let stored = WaypointStore::open(&config).get(wp.id()).unwrap();
        assert_eq!(stored.name, "Old camp");
        assert_eq!(stored.position(), Position::new(-7.5, 80.0, 12.0));
        assert!(!stored.visible);
    }

    #[test]
    fn test_dimension_queries_on_file_store() {
        let dir = TempDir::new().unwrap();
        let store = WaypointStore::open(&store_config(&dir));

        let a = store.create("A", Position::new(0.0, 64.0, 0.0), OVERWORLD, None, None, None);
        let b = store.create("B", Position::new(10.0, 64.0, 0.0), OVERWORLD, None, None, None);
        let c = store.create("C", Position::new(0.0, 64.0, 0.0), THE_NETHER, None, None, None);
        store.add(a.clone());
        store.add(b.clone());
        store.add(c.clone());

        let nearest = store.nearest(1.0, 64.0, 0.0, OVERWORLD, 1);
        assert_eq!(nearest.len(), 1);
        assert_eq!(nearest[0].id(), a.id());

        let nether = store.list_in_dimension(THE_NETHER);
        assert_eq!(nether.len(), 1);
        assert_eq!(nether[0].id(), c.id());

        let mut hidden = b.clone();
        hidden.visible = false;
        store.update(hidden);
        let visible = store.list_visible_in_dimension(OVERWORLD);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id(), a.id());
    }

    #[test]
    fn test_quick_add_persists_through_client() {
        let dir = TempDir::new().unwrap();
        let config = store_config(&dir);
        let client = WaypointClient::new(Arc::new(WaypointStore::open(&config)));
        let mut host = RecordingHost::default();

        let input = TickInput {
            player: Some(PlayerState {
                position: Position::new(5.0, 70.0, 5.0),
                dimension: OVERWORLD.to_string(),
            }),
            open_list_pressed: false,
            add_waypoint_pressed: true,
        };
        client.on_tick(&input, &mut host);
        client.on_tick(&input, &mut host);

        assert_eq!(
            host.messages,
            vec!["Waypoint added: Waypoint 1".to_string(), "Waypoint added: Waypoint 2".to_string()]
        );
        assert!(host.opened.is_empty());

        let reopened = WaypointStore::open(&config);
        assert_eq!(reopened.count_in_dimension(OVERWORLD), 2);
    }
}
