//! Map payload for a resolved trip.
//!
//! The map renderer is an external collaborator: it receives a centre, a
//! zoom level, a set of markers and an optional polyline, and draws them.
//! This module only decides what goes on the map.

use serde::Serialize;

use crate::domain::Coordinate;

use super::config::MapConfig;
use super::resolve::TripResult;

/// What a marker represents. Determines its colour on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerKind {
    Start,
    Destination,
    Attraction,
    Lodging,
    Dining,
}

/// A single map marker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub kind: MarkerKind,
    pub position: [f64; 2],
    pub title: String,
    /// Extra popup lines below the title.
    pub details: Vec<String>,
}

/// Everything the map renderer needs for one trip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapView {
    pub center: [f64; 2],
    pub zoom: u8,
    pub tile_url: String,
    pub attribution: String,
    pub markers: Vec<Marker>,
    /// The route polyline; omitted when either endpoint is unresolved.
    pub route: Option<Vec<[f64; 2]>>,
}

impl MapView {
    /// Markers of the given kind.
    pub fn markers_of(&self, kind: MarkerKind) -> impl Iterator<Item = &Marker> {
        self.markers.iter().filter(move |m| m.kind == kind)
    }
}

fn pair(c: Coordinate) -> [f64; 2] {
    c.as_pair()
}

/// Build the map payload for a trip.
///
/// The map centres on the start point when it resolved, otherwise on the
/// configured default. Endpoint markers appear only for resolved endpoints;
/// attraction, lodging and dining markers always appear.
pub fn build_map_view(result: &TripResult<'_>, config: &MapConfig) -> MapView {
    let (center, zoom) = match result.source {
        Some(source) => (pair(source.coordinate), config.source_zoom),
        None => (pair(config.default_center), config.default_zoom),
    };

    let mut markers = Vec::new();

    if let Some(source) = result.source {
        markers.push(Marker {
            kind: MarkerKind::Start,
            position: pair(source.coordinate),
            title: format!("Start: {}", source.name),
            details: Vec::new(),
        });
    }
    if let Some(destination) = result.destination {
        markers.push(Marker {
            kind: MarkerKind::Destination,
            position: pair(destination.coordinate),
            title: format!("Destination: {}", destination.name),
            details: Vec::new(),
        });
    }

    markers.extend(result.attractions.iter().map(|a| Marker {
        kind: MarkerKind::Attraction,
        position: pair(a.coordinate),
        title: a.name.to_string(),
        details: vec![a.kind.to_string(), a.description.to_string()],
    }));
    markers.extend(result.lodging.iter().map(|l| Marker {
        kind: MarkerKind::Lodging,
        position: pair(l.coordinate),
        title: l.name.to_string(),
        details: vec![format!("Rating: {}", l.rating), l.price_range.to_string()],
    }));
    markers.extend(result.dining.iter().map(|d| Marker {
        kind: MarkerKind::Dining,
        position: pair(d.coordinate),
        title: d.name.to_string(),
        details: vec![
            format!("Rating: {}", d.rating),
            d.cuisine.to_string(),
            d.price_range.to_string(),
        ],
    }));

    let route = result
        .has_route()
        .then(|| result.route_line.iter().copied().map(pair).collect());

    MapView {
        center,
        zoom,
        tile_url: config.tile_url.clone(),
        attribution: config.attribution.clone(),
        markers,
        route,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::uttarakhand_places;
    use crate::planner::resolve;

    #[test]
    fn resolved_trip_centres_on_source() {
        let catalog = uttarakhand_places();
        let result = resolve("Nainital", "Almora", &catalog);
        let view = build_map_view(&result, &MapConfig::default());

        assert_eq!(view.center, [29.3919, 79.4542]);
        assert_eq!(view.zoom, 10);
    }

    #[test]
    fn unresolved_source_uses_default_centre() {
        let catalog = uttarakhand_places();
        let result = resolve("Nowhere", "Almora", &catalog);
        let view = build_map_view(&result, &MapConfig::default());

        assert_eq!(view.center, [30.3165, 78.0322]);
        assert_eq!(view.zoom, 8);
    }

    #[test]
    fn endpoint_markers_and_route() {
        let catalog = uttarakhand_places();
        let result = resolve("Dehradun", "Mussoorie", &catalog);
        let view = build_map_view(&result, &MapConfig::default());

        let start: Vec<_> = view.markers_of(MarkerKind::Start).collect();
        assert_eq!(start.len(), 1);
        assert_eq!(start[0].title, "Start: Dehradun");

        let dest: Vec<_> = view.markers_of(MarkerKind::Destination).collect();
        assert_eq!(dest.len(), 1);
        assert_eq!(dest[0].title, "Destination: Mussoorie");

        assert_eq!(
            view.route,
            Some(vec![[30.3165, 78.0322], [30.4598, 78.0644]])
        );
    }

    #[test]
    fn unresolved_endpoint_has_no_marker_or_route() {
        let catalog = uttarakhand_places();
        let result = resolve("Dehradun", "Nowhere", &catalog);
        let view = build_map_view(&result, &MapConfig::default());

        assert_eq!(view.markers_of(MarkerKind::Start).count(), 1);
        assert_eq!(view.markers_of(MarkerKind::Destination).count(), 0);
        assert!(view.route.is_none());
    }

    #[test]
    fn static_markers_always_present() {
        let catalog = uttarakhand_places();
        let result = resolve("Nowhere", "Elsewhere", &catalog);
        let view = build_map_view(&result, &MapConfig::default());

        assert_eq!(view.markers_of(MarkerKind::Attraction).count(), 3);
        assert_eq!(view.markers_of(MarkerKind::Lodging).count(), 2);
        assert_eq!(view.markers_of(MarkerKind::Dining).count(), 2);
        assert_eq!(view.markers.len(), 7);
    }

    #[test]
    fn dining_popup_details() {
        let catalog = uttarakhand_places();
        let result = resolve("Dehradun", "Auli", &catalog);
        let view = build_map_view(&result, &MapConfig::default());

        let flavors = view
            .markers_of(MarkerKind::Dining)
            .find(|m| m.title == "Himalayan Flavors")
            .unwrap();
        assert_eq!(
            flavors.details,
            vec!["Rating: 4.6", "Local Uttarakhand", "₹500-1500"]
        );
    }

    #[test]
    fn marker_kind_serializes_snake_case() {
        let json = serde_json::to_string(&MarkerKind::Destination).unwrap();
        assert_eq!(json, "\"destination\"");
    }
}
