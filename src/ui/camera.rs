//! Viewport camera for the world view
//!
//! Maps between world pixel space and screen pixel space. The terminal
//! grid on top of screen space is the map view's concern.

/// Minimum zoom factor
pub const MIN_ZOOM: f32 = 0.5;
/// Maximum zoom factor
pub const MAX_ZOOM: f32 = 2.0;
/// Screen pixels moved per keyboard pan step
pub const PAN_STEP: f32 = 40.0;

/// Pannable, zoomable viewport over the world.
///
/// `x` and `y` are the world coordinates under the view origin; `zoom`
/// is screen pixels per world pixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub x: f32,
    pub y: f32,
    pub zoom: f32,
}

impl Camera {
    pub fn new() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            zoom: 1.0,
        }
    }

    /// Pan by a screen-space delta. Covers less world when zoomed in.
    pub fn pan(&mut self, dx: f32, dy: f32) {
        self.x += dx / self.zoom;
        self.y += dy / self.zoom;
    }

    /// Drag the world with the pointer: the grabbed point stays under it.
    pub fn drag_by(&mut self, dx: f32, dy: f32) {
        self.x -= dx / self.zoom;
        self.y -= dy / self.zoom;
    }

    /// Scale zoom by `factor`, clamped to the zoom range. With an anchor
    /// (a screen point) the world position under it does not move.
    pub fn zoom_at(&mut self, factor: f32, anchor: Option<(f32, f32)>) {
        let new_zoom = (self.zoom * factor).clamp(MIN_ZOOM, MAX_ZOOM);
        if (new_zoom - self.zoom).abs() < f32::EPSILON {
            return;
        }
        match anchor {
            Some((sx, sy)) => {
                let (wx, wy) = self.screen_to_world(sx, sy);
                self.zoom = new_zoom;
                self.x = wx - sx / self.zoom;
                self.y = wy - sy / self.zoom;
            }
            None => {
                self.zoom = new_zoom;
            }
        }
    }

    /// World to screen coordinates
    pub fn world_to_screen(&self, wx: f32, wy: f32) -> (f32, f32) {
        ((wx - self.x) * self.zoom, (wy - self.y) * self.zoom)
    }

    /// Screen to world coordinates
    pub fn screen_to_world(&self, sx: f32, sy: f32) -> (f32, f32) {
        (sx / self.zoom + self.x, sy / self.zoom + self.y)
    }

    /// Center the view on a world point, given the view size in screen pixels.
    pub fn center_on(&mut self, wx: f32, wy: f32, view_w: f32, view_h: f32) {
        self.x = wx - view_w / (2.0 * self.zoom);
        self.y = wy - view_h / (2.0 * self.zoom);
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_world_round_trip() {
        let mut camera = Camera::new();
        camera.x = 120.0;
        camera.y = -35.0;
        camera.zoom = 1.5;

        let (sx, sy) = camera.world_to_screen(300.0, 80.0);
        let (wx, wy) = camera.screen_to_world(sx, sy);
        assert!((wx - 300.0).abs() < 1e-3);
        assert!((wy - 80.0).abs() < 1e-3);
    }

    #[test]
    fn test_pan_scales_with_zoom() {
        let mut camera = Camera::new();
        camera.zoom = 2.0;
        camera.pan(100.0, 0.0);
        // 100 screen pixels cover 50 world pixels at 2x zoom
        assert!((camera.x - 50.0).abs() < 1e-3);
    }

    #[test]
    fn test_drag_keeps_point_under_pointer() {
        let mut camera = Camera::new();
        camera.x = 40.0;
        camera.y = 10.0;
        camera.zoom = 1.3;

        let before = camera.screen_to_world(200.0, 150.0);
        camera.drag_by(37.0, -12.0);
        let after = camera.screen_to_world(237.0, 138.0);
        assert!((before.0 - after.0).abs() < 1e-2);
        assert!((before.1 - after.1).abs() < 1e-2);
    }

    #[test]
    fn test_zoom_clamps_to_range() {
        let mut camera = Camera::new();
        for _ in 0..30 {
            camera.zoom_at(1.5, None);
        }
        assert!((camera.zoom - MAX_ZOOM).abs() < 1e-6);

        for _ in 0..30 {
            camera.zoom_at(0.5, None);
        }
        assert!((camera.zoom - MIN_ZOOM).abs() < 1e-6);
    }

    #[test]
    fn test_zoom_anchor_stays_fixed() {
        let mut camera = Camera::new();
        camera.x = -60.0;
        camera.y = 25.0;

        let anchor = (320.0, 180.0);
        let before = camera.screen_to_world(anchor.0, anchor.1);
        camera.zoom_at(1.25, Some(anchor));
        let after = camera.screen_to_world(anchor.0, anchor.1);
        assert!((before.0 - after.0).abs() < 1e-2);
        assert!((before.1 - after.1).abs() < 1e-2);

        camera.zoom_at(0.8, Some(anchor));
        let back = camera.screen_to_world(anchor.0, anchor.1);
        assert!((before.0 - back.0).abs() < 1e-2);
        assert!((before.1 - back.1).abs() < 1e-2);
    }

    #[test]
    fn test_center_on_puts_point_mid_view() {
        let mut camera = Camera::new();
        camera.zoom = 1.6;
        camera.center_on(500.0, 400.0, 800.0, 600.0);

        let (sx, sy) = camera.world_to_screen(500.0, 400.0);
        assert!((sx - 400.0).abs() < 1e-2);
        assert!((sy - 300.0).abs() < 1e-2);
    }
}
