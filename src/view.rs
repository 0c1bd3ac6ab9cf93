//! State behind the waypoint list screen
use crate::core::util::format_distance;
use crate::core::{Color, DimensionInfo, Position, Waypoint, WaypointId};
use crate::store::WaypointStore;

/// One row of the list
#[derive(Debug, Clone, PartialEq)]
pub struct ListEntry {
    pub id: WaypointId,
    pub name: String,
    /// Whole-block coordinates, e.g. `10, 64, -3`
    pub coords: String,
    /// Distance from the player, when the player is known
    pub distance: Option<String>,
    pub color: Color,
}

impl ListEntry {
    pub fn describe(waypoint: &Waypoint, player: Option<Position>) -> Self {
        Self {
            id: waypoint.id().clone(),
            name: waypoint.name.clone(),
            coords: format!("{:.0}, {:.0}, {:.0}", waypoint.x, waypoint.y, waypoint.z),
            distance: player.map(|p| format_distance(waypoint.position().distance_to(&p))),
            color: waypoint.color,
        }
    }
}

/// Waypoints of one dimension, narrowed by a search query
#[derive(Debug, Clone)]
pub struct ListView {
    dimension: String,
    query: String,
    scroll_offset: usize,
    /// Rows the screen showed last; 0 until the host reports it
    visible_rows: usize,
    displayed: Vec<Waypoint>,
}

impl ListView {
    pub fn new(dimension: impl Into<String>, store: &WaypointStore) -> Self {
        let mut view = Self {
            dimension: dimension.into(),
            query: String::new(),
            scroll_offset: 0,
            visible_rows: 0,
            displayed: Vec::new(),
        };
        view.refresh(store);
        view
    }

    pub fn dimension(&self) -> &str {
        &self.dimension
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Change the search text and jump back to the top
    pub fn set_query(&mut self, query: impl Into<String>, store: &WaypointStore) {
        self.query = query.into();
        self.scroll_offset = 0;
        self.refresh(store);
    }

    /// Re-read the store, sorted by name so rows do not jump between frames
    pub fn refresh(&mut self, store: &WaypointStore) {
        let mut displayed = if self.query.is_empty() {
            store.list_in_dimension(&self.dimension)
        } else {
            store.search_in_dimension(&self.query, &self.dimension)
        };
        displayed.sort_by(|a, b| {
            a.name.to_lowercase().cmp(&b.name.to_lowercase()).then_with(|| a.id().cmp(b.id()))
        });
        self.displayed = displayed;
        self.clamp_scroll();
    }

    /// Record how many rows fit on screen, keeping the last page full
    pub fn set_visible_rows(&mut self, visible_rows: usize) {
        self.visible_rows = visible_rows;
        self.clamp_scroll();
    }

    fn clamp_scroll(&mut self) {
        let max_scroll = self.len().saturating_sub(self.visible_rows.max(1));
        self.scroll_offset = self.scroll_offset.min(max_scroll);
    }

    pub fn waypoints(&self) -> &[Waypoint] {
        &self.displayed
    }

    pub fn len(&self) -> usize {
        self.displayed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.displayed.is_empty()
    }

    /// Heading such as `Nether Waypoints (3)`
    pub fn title(&self) -> String {
        format!("{} Waypoints ({})", DimensionInfo::lookup(&self.dimension).display_name, self.len())
    }

    /// Scroll by `delta` rows, keeping `visible_rows` of the list on screen
    pub fn scroll_by(&mut self, delta: isize, visible_rows: usize) {
        self.visible_rows = visible_rows;
        self.scroll_offset = self.scroll_offset.saturating_add_signed(delta);
        self.clamp_scroll();
    }

    /// Rows currently on screen
    pub fn entries(&self, visible_rows: usize, player: Option<Position>) -> Vec<ListEntry> {
        self.displayed
            .iter()
            .skip(self.first_row(visible_rows))
            .take(visible_rows)
            .map(|wp| ListEntry::describe(wp, player))
            .collect()
    }

    /// Waypoint in on-screen row `row`
    pub fn at_row(&self, row: usize) -> Option<&Waypoint> {
        self.displayed.get(self.first_row(self.visible_rows) + row)
    }

    /// Index of the top row when `visible_rows` fit on screen
    fn first_row(&self, visible_rows: usize) -> usize {
        self.scroll_offset.min(self.len().saturating_sub(visible_rows.max(1)))
    }

    /// Delete the waypoint in on-screen row `row`
    pub fn remove_at_row(&mut self, row: usize, store: &WaypointStore) -> Option<Waypoint> {
        let id = self.at_row(row)?.id().clone();
        let removed = store.remove(&id);
        self.refresh(store);
        removed
    }

    /// Delete every waypoint in every dimension
    pub fn clear_all(&mut self, store: &WaypointStore) {
        store.clear();
        self.refresh(store);
    }
}
