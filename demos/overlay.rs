//! A vector-backed host driving two display passes at different zooms.

use huddle::geo::{GeoPoint, MarkerSize, PixelPoint};
use huddle::{GroupOverlay, Marker, OverlayHost, OverlayItem, Projection};

#[derive(Clone, Debug, PartialEq)]
enum Visual {
    Pin,
    Cloud,
}

impl Marker for Visual {
    fn intrinsic_size(&self) -> MarkerSize {
        MarkerSize::new(24, 24)
    }
}

#[derive(Clone, Debug)]
struct Cafe {
    name: String,
    at: GeoPoint,
    visual: Visual,
}

impl OverlayItem for Cafe {
    type Marker = Visual;

    fn position(&self) -> GeoPoint {
        self.at
    }

    fn set_marker(&mut self, marker: Visual) {
        self.visual = marker;
    }
}

struct CafeDirectory {
    cafes: Vec<Cafe>,
}

impl OverlayHost for CafeDirectory {
    type Item = Cafe;

    fn item_count(&self) -> usize {
        self.cafes.len()
    }

    fn item_at(&self, index: usize) -> Cafe {
        self.cafes[index].clone()
    }

    fn new_group_item(&self, centroid: GeoPoint) -> Cafe {
        Cafe {
            name: "(several cafes)".to_string(),
            at: centroid,
            visual: Visual::Pin,
        }
    }

    fn tapped(&self, item: &Cafe) -> bool {
        println!("  tapped: {}", item.name);
        true
    }
}

/// Fixed-scale projection: more pixels per degree as zoom grows.
struct ZoomProjection {
    zoom: i32,
}

impl Projection for ZoomProjection {
    fn to_pixels(&self, position: GeoPoint) -> Option<PixelPoint> {
        let scale = 1_000_000 >> self.zoom;
        if scale == 0 {
            return None;
        }
        Some(PixelPoint::new(
            position.lon_e6 / scale,
            position.lat_e6 / scale,
        ))
    }
}

fn main() {
    let cafes = vec![
        ("Blue Door", 47_376_100, 8_541_000),
        ("Kafi Nord", 47_376_150, 8_541_090),
        ("La Stanza", 47_376_220, 8_541_180),
        ("Hafen Bar", 47_390_000, 8_515_000),
        ("Sento", 47_390_070, 8_515_060),
        ("Turm Cafe", 47_420_000, 8_480_000),
    ];
    let directory = CafeDirectory {
        cafes: cafes
            .into_iter()
            .map(|(name, lat, lon)| Cafe {
                name: name.to_string(),
                at: GeoPoint::new(lat, lon),
                visual: Visual::Pin,
            })
            .collect(),
    };

    let overlay = GroupOverlay::new(directory, Visual::Pin).with_group_marker(Visual::Cloud);

    for zoom in [6, 12] {
        overlay.prepare_draw(zoom, &ZoomProjection { zoom });
        println!("=== zoom {} -> {} visible markers ===", zoom, overlay.len());
        for i in 0..overlay.len() {
            let cafe = overlay.item(i).expect("index in range");
            println!(
                "  {:11} ({:>9}, {:>9}) [{:?}]",
                cafe.name, cafe.at.lat_e6, cafe.at.lon_e6, cafe.visual
            );
        }
        println!();
    }

    overlay.tap(0).expect("visible index");
}
