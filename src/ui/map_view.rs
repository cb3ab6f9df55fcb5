//! Hex world rendering into the terminal grid
//!
//! Each terminal cell covers a small rectangle of screen pixels; the
//! camera maps those to world pixels, which land inside some hex. A
//! hex therefore spans several cells and grows with zoom.

use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::Frame;

use crate::game::Session;
use crate::ui::camera::Camera;
use crate::world::{hex_to_pixel, pixel_to_hex, HexCoord};

/// Screen pixels covered by one terminal cell horizontally
pub const CELL_PX_W: f32 = 10.0;
/// Screen pixels covered by one terminal cell vertically. Terminal
/// cells are about twice as tall as they are wide.
pub const CELL_PX_H: f32 = 20.0;
/// Hex borders are drawn above this zoom level
pub const BORDER_MIN_ZOOM: f32 = 0.7;

/// Screen-pixel center of a cell of the map view.
pub fn cell_center_px(cell_x: u16, cell_y: u16) -> (f32, f32) {
    (
        (cell_x as f32 + 0.5) * CELL_PX_W,
        (cell_y as f32 + 0.5) * CELL_PX_H,
    )
}

/// The hex under a map view cell, before wrapping.
pub fn hex_at_cell(camera: &Camera, cell_x: u16, cell_y: u16) -> HexCoord {
    let (sx, sy) = cell_center_px(cell_x, cell_y);
    let (wx, wy) = camera.screen_to_world(sx, sy);
    pixel_to_hex(wx, wy)
}

/// The hex in the middle of the map view.
pub fn center_hex(camera: &Camera, area: Rect) -> HexCoord {
    hex_at_cell(camera, area.width / 2, area.height / 2)
}

/// Paint the visible part of the world into `area`.
///
/// Hexes near the wrap seam appear under out-of-range coordinates; the
/// board and terrain are always looked up under the canonical ones, so
/// both images of a seam hex show the same state.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    session: &Session,
    camera: &Camera,
    hovered: Option<HexCoord>,
    selected: Option<HexCoord>,
) {
    let map = session.map();
    let board = session.board();
    let draw_borders = camera.zoom > BORDER_MIN_ZOOM;

    let selected = selected.map(|h| map.wrap(h));
    let hovered = hovered.map(|h| map.wrap(h));

    let buf = frame.buffer_mut();
    for cy in 0..area.height {
        for cx in 0..area.width {
            let virt = hex_at_cell(camera, cx, cy);
            let hex = map.wrap(virt);
            let terrain = map.terrain_at(hex);
            let mut color = terrain.color();

            if let Some(owner) = board.owner(hex) {
                color = blend(owner.color(), color, 0.7);
            }

            if selected == Some(hex) {
                color = lighten(color, 0.35);
            } else if hovered == Some(hex) {
                color = lighten(color, 0.18);
            }

            // Border cells are the first cell of a hex in reading order
            let mut on_border = false;
            if draw_borders {
                if cx > 0 && hex_at_cell(camera, cx - 1, cy) != virt {
                    on_border = true;
                } else if cy > 0 && hex_at_cell(camera, cx, cy - 1) != virt {
                    on_border = true;
                }
            }
            if on_border {
                color = darken(color, 0.35);
            }

            let (hx, hy) = hex_to_pixel(virt);
            let (csx, csy) = camera.world_to_screen(hx, hy);
            let center_cell = (
                (csx / CELL_PX_W).floor() as i32,
                (csy / CELL_PX_H).floor() as i32,
            );

            let cell_x = area.x + cx;
            let cell_y = area.y + cy;
            if center_cell == (cx as i32, cy as i32) {
                match board.improvement(hex) {
                    Some(improvement) => {
                        let (r, g, b) = improvement.icon_color();
                        buf[(cell_x, cell_y)].set_char(improvement.glyph());
                        buf[(cell_x, cell_y)].set_fg(Color::Rgb(r, g, b));
                    }
                    None => {
                        let dim = darken(color, 0.45);
                        buf[(cell_x, cell_y)].set_char(terrain.glyph());
                        buf[(cell_x, cell_y)].set_fg(Color::Rgb(dim.0, dim.1, dim.2));
                    }
                }
            } else {
                buf[(cell_x, cell_y)].set_char(' ');
            }
            buf[(cell_x, cell_y)].set_bg(Color::Rgb(color.0, color.1, color.2));
        }
    }
}

fn blend(a: (u8, u8, u8), b: (u8, u8, u8), t: f32) -> (u8, u8, u8) {
    let mix = |x: u8, y: u8| (x as f32 * t + y as f32 * (1.0 - t)) as u8;
    (mix(a.0, b.0), mix(a.1, b.1), mix(a.2, b.2))
}

fn lighten(c: (u8, u8, u8), amount: f32) -> (u8, u8, u8) {
    let lift = |x: u8| (x as f32 + (255.0 - x as f32) * amount) as u8;
    (lift(c.0), lift(c.1), lift(c.2))
}

fn darken(c: (u8, u8, u8), amount: f32) -> (u8, u8, u8) {
    let drop = |x: u8| (x as f32 * (1.0 - amount)) as u8;
    (drop(c.0), drop(c.1), drop(c.2))
}
