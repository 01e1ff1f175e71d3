// ============================================================================
// MAP VIEWMODEL - marker styling and layout
// ============================================================================
// Only data preparation. Drawing happens in `components::region_map`.
// ============================================================================

use serde::Serialize;

use crate::models::Region;
use crate::viewmodels::regions_viewmodel::DerivedStats;

pub const MAX_RADIUS: f64 = 20.0;
pub const ZERO_RADIUS: f64 = 5.0;
pub const FILL_OPACITY: f64 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerColor {
    Blue,
    Green,
    Orange,
    Red,
    DarkBlue,
    DarkGray,
}

impl MarkerColor {
    pub fn as_css(&self) -> &'static str {
        match self {
            MarkerColor::Blue => "blue",
            MarkerColor::Green => "green",
            MarkerColor::Orange => "orange",
            MarkerColor::Red => "red",
            MarkerColor::DarkBlue => "darkblue",
            MarkerColor::DarkGray => "darkgray",
        }
    }
}

/// Ratio of `accesses` to the current maximum, scaled to 20. A zero ratio is drawn at 5
/// so the marker stays clickable.
pub fn radius_for(accesses: u64, max_accesses: u64) -> f64 {
    let ratio = accesses as f64 / max_accesses.max(1) as f64;
    if ratio == 0.0 {
        ZERO_RADIUS
    } else {
        ratio * MAX_RADIUS
    }
}

pub fn fill_color(region: &Region, stats: &DerivedStats) -> MarkerColor {
    if stats.is_most_accessed(region) {
        MarkerColor::Blue
    } else if region.accesses > 1000 {
        MarkerColor::Green
    } else if region.accesses > 500 {
        MarkerColor::Orange
    } else {
        MarkerColor::Red
    }
}

pub fn border_color(region: &Region, stats: &DerivedStats) -> MarkerColor {
    if stats.is_most_accessed(region) {
        MarkerColor::DarkBlue
    } else {
        MarkerColor::DarkGray
    }
}

/// One circle marker as handed to the Leaflet glue
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapMarker {
    pub coords: [f64; 2],
    pub radius: f64,
    pub fill_color: MarkerColor,
    pub color: MarkerColor,
    pub fill_opacity: f64,
    pub popup: String,
}

pub fn popup_text(region: &Region) -> String {
    format!("<b>{}</b><br/>Acessos: {}", escape_html(&region.name), region.accesses)
}

fn escape_html(raw: &str) -> String {
    raw.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

pub fn prepare_markers(regions: &[Region], stats: &DerivedStats) -> Vec<MapMarker> {
    regions
        .iter()
        .map(|region| MapMarker {
            coords: [region.latitude, region.longitude],
            radius: radius_for(region.accesses, stats.max_accesses),
            fill_color: fill_color(region, stats),
            color: border_color(region, stats),
            fill_opacity: FILL_OPACITY,
            popup: popup_text(region),
        })
        .collect()
}

/// Flex direction of the dashboard container
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Column,
    Row,
}

impl Layout {
    pub fn for_width(width: f64, breakpoint: f64) -> Self {
        if width < breakpoint {
            Layout::Column
        } else {
            Layout::Row
        }
    }

    pub fn flex_direction(&self) -> &'static str {
        match self {
            Layout::Column => "column",
            Layout::Row => "row",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region(name: &str, accesses: u64) -> Region {
        Region { name: name.to_string(), latitude: -22.9, longitude: -43.2, accesses }
    }

    #[test]
    fn test_sp_rj_markers() {
        let regions = vec![region("SP", 1000), region("RJ", 200)];
        let stats = DerivedStats::compute(&regions);
        let markers = prepare_markers(&regions, &stats);

        assert_eq!(markers[0].fill_color, MarkerColor::Blue);
        assert_eq!(markers[0].color, MarkerColor::DarkBlue);
        assert_eq!(markers[0].radius, 20.0);

        assert_eq!(markers[1].fill_color, MarkerColor::Red);
        assert_eq!(markers[1].color, MarkerColor::DarkGray);
        assert!((markers[1].radius - 4.0).abs() < 1e-9);
        assert_eq!(markers[1].popup, "<b>RJ</b><br/>Acessos: 200");
        assert_eq!(markers[1].fill_opacity, 0.6);
    }

    #[test]
    fn test_color_thresholds() {
        let stats = DerivedStats::compute(&[region("top", 5000)]);
        assert_eq!(fill_color(&region("a", 1001), &stats), MarkerColor::Green);
        assert_eq!(fill_color(&region("b", 1000), &stats), MarkerColor::Orange);
        assert_eq!(fill_color(&region("c", 501), &stats), MarkerColor::Orange);
        assert_eq!(fill_color(&region("d", 500), &stats), MarkerColor::Red);
        // equality with the top count, not identity
        assert_eq!(fill_color(&region("twin", 5000), &stats), MarkerColor::Blue);
    }

    #[test]
    fn test_radius_zero_and_monotonic() {
        assert_eq!(radius_for(0, 1000), ZERO_RADIUS);
        assert_eq!(radius_for(0, 1), ZERO_RADIUS);

        let mut previous = 0.0;
        for accesses in 1..=1000u64 {
            let radius = radius_for(accesses, 1000);
            assert!(radius >= previous);
            assert!(radius <= MAX_RADIUS);
            previous = radius;
        }
    }

    #[test]
    fn test_layout_breakpoint() {
        assert_eq!(Layout::for_width(1024.0, 800.0), Layout::Row);
        assert_eq!(Layout::for_width(700.0, 800.0), Layout::Column);
        assert_eq!(Layout::for_width(800.0, 800.0), Layout::Row);
        assert_eq!(Layout::Column.flex_direction(), "column");
    }

    #[test]
    fn test_marker_serializes_for_leaflet() {
        let stats = DerivedStats::compute(&[region("SP", 10)]);
        let markers = prepare_markers(&[region("SP", 10)], &stats);
        let json = serde_json::to_value(&markers[0]).unwrap();
        assert_eq!(json["fillColor"], "blue");
        assert_eq!(json["color"], "darkblue");
        assert_eq!(json["fillOpacity"], 0.6);
    }
}
