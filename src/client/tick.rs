//! Per-tick input handling
use crate::core::{Position, Waypoint};
use crate::store::WaypointStore;
use std::sync::Arc;
use tracing::info;

/// Where the local player is
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerState {
    pub position: Position,
    pub dimension: String,
}

/// Input sampled by the host at the end of a client tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    /// `None` while no world is loaded
    pub player: Option<PlayerState>,
    pub open_list_pressed: bool,
    pub add_waypoint_pressed: bool,
}

/// Host actions the tick handler can trigger
#[cfg_attr(test, mockall::automock)]
pub trait ClientHost {
    /// Show the waypoint list for `dimension`
    fn open_waypoint_list(&mut self, dimension: &str);

    /// Short status message to the player
    fn notify(&mut self, message: &str);
}

/// Client-side entry point, owning a handle to the shared store
pub struct WaypointClient {
    store: Arc<WaypointStore>,
}

impl WaypointClient {
    pub fn new(store: Arc<WaypointStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<WaypointStore> {
        &self.store
    }

    /// Name given to a quick-added waypoint, e.g. `Waypoint 3`
    pub fn next_default_name(&self, dimension: &str) -> String {
        format!("Waypoint {}", self.store.count_in_dimension(dimension) + 1)
    }

    /// Add a waypoint at the player's position with dimension defaults
    pub fn quick_add(&self, player: &PlayerState) -> Waypoint {
        let name = self.next_default_name(&player.dimension);
        let waypoint =
            Waypoint::with_dimension_defaults(name, player.position, player.dimension.as_str());
        self.store.add(waypoint.clone());
        info!("Added waypoint {} in {}", waypoint.name, waypoint.dimension);
        waypoint
    }

    /// Tick callback
    pub fn on_tick(&self, input: &TickInput, host: &mut impl ClientHost) {
        let Some(player) = &input.player else {
            return;
        };

        if input.open_list_pressed {
            host.open_waypoint_list(&player.dimension);
        }

        if input.add_waypoint_pressed {
            let waypoint = self.quick_add(player);
            host.notify(&format!("Waypoint added: {}", waypoint.name));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DimensionInfo, OVERWORLD, THE_NETHER};
    use crate::store::MemoryBackend;
    use mockall::predicate::eq;

    fn client() -> WaypointClient {
        WaypointClient::new(Arc::new(WaypointStore::new(MemoryBackend::new())))
    }

    fn player_in(dimension: &str) -> PlayerState {
        PlayerState { position: Position::new(12.3, 70.0, -8.9), dimension: dimension.to_string() }
    }

    #[test]
    fn test_no_player_does_nothing() {
        let client = client();
        let mut host = MockClientHost::new();
        host.expect_open_waypoint_list().never();
        host.expect_notify().never();

        let input = TickInput { player: None, open_list_pressed: true, add_waypoint_pressed: true };
        client.on_tick(&input, &mut host);
        assert!(client.store().is_empty());
    }

    #[test]
    fn test_open_key_opens_list_for_current_dimension() {
        let client = client();
        let mut host = MockClientHost::new();
        host.expect_open_waypoint_list().with(eq(THE_NETHER)).times(1).return_const(());
        host.expect_notify().never();

        let input = TickInput {
            player: Some(player_in(THE_NETHER)),
            open_list_pressed: true,
            ..Default::default()
        };
        client.on_tick(&input, &mut host);
    }

    #[test]
    fn test_add_key_numbers_waypoints_per_dimension() {
        let client = client();
        let mut host = MockClientHost::new();
        host.expect_notify().with(eq("Waypoint added: Waypoint 1")).times(2).return_const(());
        host.expect_notify().with(eq("Waypoint added: Waypoint 2")).times(1).return_const(());

        let add = |dimension: &str| TickInput {
            player: Some(player_in(dimension)),
            add_waypoint_pressed: true,
            ..Default::default()
        };
        client.on_tick(&add(OVERWORLD), &mut host);
        client.on_tick(&add(OVERWORLD), &mut host);
        client.on_tick(&add(THE_NETHER), &mut host);

        assert_eq!(client.store().count_in_dimension(OVERWORLD), 2);
        let nether = client.store().list_in_dimension(THE_NETHER);
        assert_eq!(nether[0].name, "Waypoint 1");
        assert_eq!(nether[0].position(), Position::new(12.3, 70.0, -8.9));
        assert_eq!(nether[0].color, DimensionInfo::lookup(THE_NETHER).default_color);
    }
}
