//! Per-frame marker planning
//!
//! The host owns matrices and vertex buffers. Each frame it hands over the
//! camera position and current dimension, and receives one [`MarkerPlan`]
//! per waypoint worth drawing through its [`MarkerSink`].
use crate::config::RenderConfig;
use crate::core::util::format_distance;
use crate::core::{Position, Waypoint, WaypointId};
use crate::store::WaypointStore;
use tracing::trace;

/// Vertical beam drawn through a waypoint's column
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BeamPlan {
    /// Beam anchor: block center in x/z, waypoint y
    pub anchor: Position,
    pub half_width: f32,
    /// Offsets from the anchor to the bottom and top of the beam
    pub y_min: f32,
    pub y_max: f32,
    /// RGBA at the bottom; the top fades to fully transparent
    pub rgba: [f32; 4],
}

/// Everything the host needs to draw one waypoint marker
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerPlan {
    pub id: WaypointId,
    /// World position of the marker (block center)
    pub anchor: Position,
    /// Anchor minus camera, for the host's translate
    pub offset: Position,
    pub distance: f64,
    /// Uniform scale so markers stay readable at range
    pub scale: f32,
    pub half_size: f32,
    pub rgba: [f32; 4],
    pub label: String,
    pub distance_label: String,
    pub text_scale: f32,
    pub beam: BeamPlan,
}

/// Draw target provided by the host
pub trait MarkerSink {
    fn draw_marker(&mut self, marker: &MarkerPlan);
}

fn marker_scale(distance: f64, config: &RenderConfig) -> f32 {
    (distance * config.marker_size).clamp(config.min_scale, config.max_scale) as f32
}

fn plan_marker(waypoint: &Waypoint, camera: Position, config: &RenderConfig) -> Option<MarkerPlan> {
    let anchor = waypoint.position().block_center();
    let distance = camera.distance_to(&anchor);
    if distance > config.max_render_distance {
        return None;
    }

    let [r, g, b] = waypoint.color.rgb_f32();
    let beam_anchor = Position::new(anchor.x, waypoint.y, anchor.z);

    Some(MarkerPlan {
        id: waypoint.id().clone(),
        anchor,
        offset: Position::new(anchor.x - camera.x, anchor.y - camera.y, anchor.z - camera.z),
        distance,
        scale: marker_scale(distance, config),
        half_size: config.marker_half_size,
        rgba: [r, g, b, config.marker_alpha],
        label: waypoint.name.clone(),
        distance_label: format_distance(distance),
        text_scale: config.text_scale,
        beam: BeamPlan {
            anchor: beam_anchor,
            half_width: config.beam_width,
            y_min: (config.beam_min_y - beam_anchor.y) as f32,
            y_max: (config.beam_max_y - beam_anchor.y) as f32,
            rgba: [r, g, b, config.beam_alpha],
        },
    })
}

/// Markers for every visible waypoint in `dimension` within range of the
/// camera, furthest first so nearer markers are drawn on top.
pub fn plan_markers(
    store: &WaypointStore,
    camera: Position,
    dimension: &str,
    config: &RenderConfig,
) -> Vec<MarkerPlan> {
    let mut markers: Vec<MarkerPlan> = store
        .list_visible_in_dimension(dimension)
        .iter()
        .filter_map(|wp| plan_marker(wp, camera, config))
        .collect();
    markers.sort_by(|a, b| b.distance.total_cmp(&a.distance));
    markers
}

/// Frame callback: plan and hand every marker to the host
pub fn render_frame(
    store: &WaypointStore,
    camera: Position,
    dimension: &str,
    config: &RenderConfig,
    sink: &mut impl MarkerSink,
) -> usize {
    let markers = plan_markers(store, camera, dimension, config);
    for marker in &markers {
        sink.draw_marker(marker);
    }
    trace!("Drew {} waypoint markers in {}", markers.len(), dimension);
    markers.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Color, OVERWORLD, THE_END};
    use crate::store::MemoryBackend;

    #[derive(Default)]
    struct RecordingSink {
        drawn: Vec<MarkerPlan>,
    }

    impl MarkerSink for RecordingSink {
        fn draw_marker(&mut self, marker: &MarkerPlan) {
            self.drawn.push(marker.clone());
        }
    }

    fn store_with(points: &[(&str, f64, &str, bool)]) -> WaypointStore {
        let store = WaypointStore::new(MemoryBackend::new());
        for &(name, x, dim, visible) in points {
            let mut wp = store.create(name, Position::new(x, 63.5, -0.5), dim, None, None, None);
            wp.visible = visible;
            store.add(wp);
        }
        store
    }

    #[test]
    fn test_culls_hidden_far_and_other_dimensions() {
        let store = store_with(&[
            ("near", 9.5, OVERWORLD, true),
            ("hidden", 5.0, OVERWORLD, false),
            ("far", 5000.0, OVERWORLD, true),
            ("end", 0.0, THE_END, true),
        ]);
        let camera = Position::new(0.0, 64.0, 0.0);
        let markers = plan_markers(&store, camera, OVERWORLD, &RenderConfig::default());

        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].label, "near");
    }

    #[test]
    fn test_marker_geometry() {
        let store = store_with(&[("m", 9.5, OVERWORLD, true)]);
        let config = RenderConfig::default();
        let markers = plan_markers(&store, Position::new(0.0, 64.0, 0.0), OVERWORLD, &config);
        let marker = &markers[0];

        assert_eq!(marker.anchor, Position::new(10.0, 64.0, 0.0));
        assert_eq!(marker.offset, Position::new(10.0, 0.0, 0.0));
        assert_eq!(marker.distance, 10.0);
        assert_eq!(marker.distance_label, "10m");
        assert!((marker.scale - 0.3).abs() < 1e-6);
        assert_eq!(marker.rgba[3], config.marker_alpha);
        assert_eq!(marker.beam.y_min, -127.5);
        assert_eq!(marker.beam.y_max, 256.5);
    }

    #[test]
    fn test_scale_is_clamped() {
        let config = RenderConfig::default();
        assert_eq!(marker_scale(0.0, &config), 0.1);
        assert_eq!(marker_scale(500.0, &config), 1.0);
    }

    #[test]
    fn test_colors_are_normalized() {
        let store = WaypointStore::new(MemoryBackend::new());
        let red = Some(Color::new(0xFF0000));
        store.add(store.create("c", Position::default(), OVERWORLD, red, None, None));
        let markers = plan_markers(&store, Position::default(), OVERWORLD, &RenderConfig::default());
        assert_eq!(markers[0].rgba, [1.0, 0.0, 0.0, 0.8]);
        assert_eq!(markers[0].beam.rgba, [1.0, 0.0, 0.0, 0.4]);
    }

    #[test]
    fn test_render_frame_draws_furthest_first() {
        let store = store_with(&[("a", 2.0, OVERWORLD, true), ("b", 40.0, OVERWORLD, true)]);
        let mut sink = RecordingSink::default();

        let config = RenderConfig::default();
        let drawn = render_frame(&store, Position::default(), OVERWORLD, &config, &mut sink);

        assert_eq!(drawn, 2);
        let labels: Vec<&str> = sink.drawn.iter().map(|m| m.label.as_str()).collect();
        assert_eq!(labels, vec!["b", "a"]);
    }
}
