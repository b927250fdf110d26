//! Satellite map geometry. The page embeds a static tile image addressed by
//! a bounding box around the facility's coordinates; zooming halves or
//! doubles the box edge, panning shifts it by an accumulated offset.

pub const MIN_ZOOM: u8 = 12;
pub const MAX_ZOOM: u8 = 19;
pub const DEFAULT_ZOOM: u8 = 16;

const BASE_DELTA: f64 = 0.006;

/// Current viewport over the satellite image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapView {
    pub zoom: u8,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl Default for MapView {
    fn default() -> Self {
        Self {
            zoom: DEFAULT_ZOOM,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }
}

impl MapView {
    pub fn with_zoom(zoom: u8) -> Self {
        Self {
            zoom: zoom.clamp(MIN_ZOOM, MAX_ZOOM),
            ..Self::default()
        }
    }

    pub fn zoom_in(&self) -> Self {
        Self {
            zoom: (self.zoom + 1).min(MAX_ZOOM),
            ..*self
        }
    }

    pub fn zoom_out(&self) -> Self {
        Self {
            zoom: self.zoom.saturating_sub(1).max(MIN_ZOOM),
            ..*self
        }
    }

    pub fn reset(&self) -> Self {
        Self::default()
    }

    /// Half-width of the bounding box in degrees: `0.006 × 2^(16 − zoom)`.
    pub fn delta(&self) -> f64 {
        BASE_DELTA * f64::powi(2.0, 16 - i32::from(self.zoom))
    }

    /// Bounding box `(min_lon, min_lat, max_lon, max_lat)` around a center
    /// point. The vertical extent is squeezed to match the 16:9 image.
    pub fn bbox(&self, latitude: f64, longitude: f64) -> (f64, f64, f64, f64) {
        let delta = self.delta();
        (
            longitude - delta + self.offset_x,
            latitude - delta / 1.5 + self.offset_y,
            longitude + delta + self.offset_x,
            latitude + delta / 1.5 + self.offset_y,
        )
    }

    /// Export URL for the ArcGIS World Imagery tile of this viewport. The
    /// image is only ever dereferenced by the client.
    pub fn tile_url(&self, latitude: f64, longitude: f64) -> String {
        let (min_lon, min_lat, max_lon, max_lat) = self.bbox(latitude, longitude);
        format!(
            "https://server.arcgisonline.com/ArcGIS/rest/services/World_Imagery/MapServer/export?bbox={min_lon},{min_lat},{max_lon},{max_lat}&bboxSR=4326&size=800,450&format=jpg&f=image"
        )
    }
}

/// External link for the "Open in Google Maps" action.
pub fn google_maps_url(latitude: f64, longitude: f64) -> String {
    format!("https://www.google.com/maps/search/?api=1&query={latitude},{longitude}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zoom_clamps_at_both_ends() {
        let mut view = MapView::with_zoom(MAX_ZOOM);
        view = view.zoom_in();
        assert_eq!(view.zoom, MAX_ZOOM);

        let mut view = MapView::with_zoom(MIN_ZOOM);
        view = view.zoom_out();
        assert_eq!(view.zoom, MIN_ZOOM);

        assert_eq!(MapView::with_zoom(3).zoom, MIN_ZOOM);
        assert_eq!(MapView::with_zoom(25).zoom, MAX_ZOOM);
    }

    #[test]
    fn delta_doubles_per_zoom_out_step() {
        let near = MapView::with_zoom(16);
        let far = MapView::with_zoom(15);
        assert!((far.delta() - 2.0 * near.delta()).abs() < 1e-12);
        assert!((near.delta() - BASE_DELTA).abs() < 1e-12);
    }

    #[test]
    fn bbox_is_centered_when_unpanned() {
        let view = MapView::default();
        let (min_lon, min_lat, max_lon, max_lat) = view.bbox(23.896051, 90.418952);
        assert!((min_lon + max_lon - 2.0 * 90.418952).abs() < 1e-9);
        assert!((min_lat + max_lat - 2.0 * 23.896051).abs() < 1e-9);
        // Vertical extent is 1/1.5 of the horizontal one.
        let width = max_lon - min_lon;
        let height = max_lat - min_lat;
        assert!((width / height - 1.5).abs() < 1e-9);
    }

    #[test]
    fn reset_restores_defaults() {
        let view = MapView {
            zoom: 18,
            offset_x: 0.01,
            offset_y: -0.02,
        };
        assert_eq!(view.reset(), MapView::default());
    }

    #[test]
    fn urls_embed_the_coordinates() {
        let url = MapView::default().tile_url(23.896051, 90.418952);
        assert!(url.contains("bboxSR=4326"));
        assert!(url.contains("size=800,450"));
        assert!(google_maps_url(23.896051, 90.418952).contains("23.896051,90.418952"));
    }
}
