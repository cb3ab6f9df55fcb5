//! Hex grid geometry
//!
//! Flat-topped hexes in an odd-q offset layout (odd columns sit half a
//! hex higher). All geometry here works in world pixels; the camera is
//! responsible for mapping world pixels to the screen.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Distance from a hex center to any of its corners, in world pixels.
pub const HEX_SIZE: f32 = 40.0;

/// sqrt(3), the hex height factor.
pub const SQRT_3: f32 = 1.732_050_8;

/// Horizontal distance between neighboring columns.
pub const HEX_HORIZ_SPACING: f32 = HEX_SIZE * 1.5;

/// Vertical distance between neighboring rows.
pub const HEX_VERT_SPACING: f32 = HEX_SIZE * SQRT_3;

/// Axial offsets of the six neighbors of any hex.
const AXIAL_DIRECTIONS: [(i32, i32); 6] = [(1, 0), (1, -1), (0, -1), (-1, 0), (-1, 1), (0, 1)];

/// Offset (column, row) coordinates of a hex on the grid.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct HexCoord {
    pub col: i32,
    pub row: i32,
}

impl HexCoord {
    pub fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// Convert to axial coordinates (q, r).
    pub fn to_axial(self) -> (i32, i32) {
        // col + (col & 1) is always even, so the division is exact
        (self.col, self.row - (self.col + (self.col & 1)) / 2)
    }

    /// Build from axial coordinates (q, r).
    pub fn from_axial(q: i32, r: i32) -> Self {
        Self {
            col: q,
            row: r + (q + (q & 1)) / 2,
        }
    }

    /// The six adjacent hexes.
    pub fn neighbors(self) -> [HexCoord; 6] {
        let (q, r) = self.to_axial();
        AXIAL_DIRECTIONS.map(|(dq, dr)| HexCoord::from_axial(q + dq, r + dr))
    }
}

impl fmt::Display for HexCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

/// World-pixel center of a hex.
pub fn hex_to_pixel(hex: HexCoord) -> (f32, f32) {
    let x = hex.col as f32 * HEX_HORIZ_SPACING;
    let y = (hex.row as f32 - (hex.col & 1) as f32 * 0.5) * HEX_VERT_SPACING;
    (x, y)
}

/// Grid distance between two hexes, in steps.
pub fn hex_distance(a: HexCoord, b: HexCoord) -> u32 {
    let (aq, ar) = a.to_axial();
    let (bq, br) = b.to_axial();
    let dq = aq - bq;
    let dr = ar - br;
    ((dq.abs() + dr.abs() + (dq + dr).abs()) / 2) as u32
}

/// Exact containment test for a flat-topped hex centered at (hx, hy).
pub fn point_in_hex(px: f32, py: f32, hx: f32, hy: f32) -> bool {
    let dx = (px - hx).abs();
    let dy = (py - hy).abs();
    dy <= SQRT_3 / 2.0 * HEX_SIZE && SQRT_3 * dx + dy <= SQRT_3 * HEX_SIZE
}

/// The hex containing a world-pixel point.
pub fn pixel_to_hex(px: f32, py: f32) -> HexCoord {
    // Fractional axial coordinates for the flat-topped layout
    let q = (2.0 / 3.0 * px) / HEX_SIZE;
    let r = (-1.0 / 3.0 * px + SQRT_3 / 3.0 * py) / HEX_SIZE;

    let (rq, rr) = cube_round(q, r);
    let candidate = HexCoord::from_axial(rq, rr);

    // Rounding is exact away from hex edges. On an edge the float error
    // can land the point just outside the rounded hex, so verify and let
    // the containing neighbor win instead.
    let (cx, cy) = hex_to_pixel(candidate);
    if point_in_hex(px, py, cx, cy) {
        return candidate;
    }

    let mut best = candidate;
    let mut best_dist = dist_sq(px, py, cx, cy);
    for neighbor in candidate.neighbors() {
        let (nx, ny) = hex_to_pixel(neighbor);
        if point_in_hex(px, py, nx, ny) {
            let d = dist_sq(px, py, nx, ny);
            if d < best_dist {
                best = neighbor;
                best_dist = d;
            }
        }
    }
    best
}

/// The six corners of a hex centered at (cx, cy), counterclockwise from
/// the rightmost corner.
pub fn hex_vertices(cx: f32, cy: f32) -> [(f32, f32); 6] {
    std::array::from_fn(|i| {
        let angle = std::f32::consts::PI / 180.0 * (60.0 * i as f32);
        (cx + HEX_SIZE * angle.cos(), cy + HEX_SIZE * angle.sin())
    })
}

/// Round fractional axial coordinates to the nearest hex.
fn cube_round(q: f32, r: f32) -> (i32, i32) {
    let x = q;
    let z = r;
    let y = -x - z;

    let rx = x.round();
    let ry = y.round();
    let rz = z.round();

    let x_diff = (rx - x).abs();
    let y_diff = (ry - y).abs();
    let z_diff = (rz - z).abs();

    // Rebuild the axis with the largest rounding error from the other
    // two so x + y + z = 0 holds again.
    let (rx, rz) = if x_diff > y_diff && x_diff > z_diff {
        (-ry - rz, rz)
    } else if y_diff > z_diff {
        (rx, rz)
    } else {
        (rx, -rx - ry)
    };

    (rx as i32, rz as i32)
}

fn dist_sq(ax: f32, ay: f32, bx: f32, by: f32) -> f32 {
    let dx = ax - bx;
    let dy = ay - by;
    dx * dx + dy * dy
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axial_round_trip() {
        for col in -5..10 {
            for row in -5..10 {
                let hex = HexCoord::new(col, row);
                let (q, r) = hex.to_axial();
                assert_eq!(HexCoord::from_axial(q, r), hex);
            }
        }
    }

    #[test]
    fn test_pixel_round_trip() {
        // Centers must map back to their own hex, negatives included
        for col in -4..12 {
            for row in -4..12 {
                let hex = HexCoord::new(col, row);
                let (x, y) = hex_to_pixel(hex);
                assert_eq!(pixel_to_hex(x, y), hex, "center of {}", hex);
            }
        }
    }

    #[test]
    fn test_pixel_round_trip_off_center() {
        // Points near a center still resolve to that hex
        for col in -2..6 {
            for row in -2..6 {
                let hex = HexCoord::new(col, row);
                let (x, y) = hex_to_pixel(hex);
                for (dx, dy) in [(9.0, 0.0), (-9.0, 7.0), (0.0, -12.0), (7.0, 11.0)] {
                    assert_eq!(pixel_to_hex(x + dx, y + dy), hex);
                }
            }
        }
    }

    #[test]
    fn test_pixel_to_hex_contains_point() {
        // Whatever hex comes back must actually contain the query point
        let mut y = -130.0_f32;
        while y < 300.0 {
            let mut x = -130.0_f32;
            while x < 300.0 {
                let hex = pixel_to_hex(x, y);
                let (cx, cy) = hex_to_pixel(hex);
                assert!(
                    point_in_hex(x, y, cx, cy),
                    "({}, {}) not inside {}",
                    x,
                    y,
                    hex
                );
                x += 7.3;
            }
            y += 5.9;
        }
    }

    #[test]
    fn test_odd_column_shifted_up() {
        let (_, y_even) = hex_to_pixel(HexCoord::new(0, 3));
        let (_, y_odd) = hex_to_pixel(HexCoord::new(1, 3));
        assert!(y_odd < y_even);
        assert!((y_even - y_odd - HEX_VERT_SPACING * 0.5).abs() < 1e-3);
    }

    #[test]
    fn test_point_in_hex_bounds() {
        // Just inside each extreme is in, just outside is out
        assert!(point_in_hex(0.99 * HEX_SIZE, 0.0, 0.0, 0.0));
        assert!(!point_in_hex(1.01 * HEX_SIZE, 0.0, 0.0, 0.0));
        let half_height = SQRT_3 / 2.0 * HEX_SIZE;
        assert!(point_in_hex(0.0, 0.99 * half_height, 0.0, 0.0));
        assert!(!point_in_hex(0.0, 1.01 * half_height, 0.0, 0.0));
        // Corner region, past the slanted edge
        assert!(!point_in_hex(0.9 * HEX_SIZE, 0.9 * half_height, 0.0, 0.0));
    }

    #[test]
    fn test_neighbors_are_adjacent() {
        for hex in [HexCoord::new(0, 0), HexCoord::new(3, 5), HexCoord::new(-2, 4)] {
            let neighbors = hex.neighbors();
            assert_eq!(neighbors.len(), 6);
            for n in neighbors {
                assert_eq!(hex_distance(hex, n), 1, "{} -> {}", hex, n);
            }
            // All six are distinct
            for i in 0..6 {
                for j in (i + 1)..6 {
                    assert_ne!(neighbors[i], neighbors[j]);
                }
            }
        }
    }

    #[test]
    fn test_hex_distance() {
        let origin = HexCoord::new(0, 0);
        assert_eq!(hex_distance(origin, origin), 0);
        assert_eq!(hex_distance(origin, HexCoord::new(3, 0)), 3);
        assert_eq!(hex_distance(origin, HexCoord::new(0, 4)), 4);
        // Symmetric
        let a = HexCoord::new(2, 7);
        let b = HexCoord::new(-3, 1);
        assert_eq!(hex_distance(a, b), hex_distance(b, a));
    }

    #[test]
    fn test_vertices_on_circumcircle() {
        let verts = hex_vertices(100.0, 50.0);
        for (vx, vy) in verts {
            let d = ((vx - 100.0).powi(2) + (vy - 50.0).powi(2)).sqrt();
            assert!((d - HEX_SIZE).abs() < 1e-3);
        }
    }
}
