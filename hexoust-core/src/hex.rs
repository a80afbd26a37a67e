//! Hex geometry with cube coordinates
//!
//! Cells are addressed by (q, r, s) with q + r + s = 0. Only q and r are
//! stored; s is always derived, so the invariant cannot be broken.
//! Pixel conversion uses a flat-top layout.

use serde::{Deserialize, Serialize};

/// Direction vectors in axial coordinates (dq, dr); ds is implied.
/// Neighbor enumeration always follows this order.
pub const DIRECTIONS: [(i32, i32); 6] = [
    (1, -1),
    (1, 0),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (0, -1),
];

const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// Cube hex coordinate (s = -q - r)
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Hex {
    pub q: i32,
    pub r: i32,
}

impl Hex {
    pub const ORIGIN: Hex = Hex::new(0, 0);

    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// Build from a full cube triple, `None` if q + r + s != 0
    pub fn from_cube(q: i32, r: i32, s: i32) -> Option<Self> {
        (i64::from(q) + i64::from(r) + i64::from(s) == 0).then_some(Self { q, r })
    }

    /// Third cube component. Widened so it exists for every (q, r).
    pub const fn s(&self) -> i64 {
        -(self.q as i64) - (self.r as i64)
    }

    /// Distance from center (0,0,0)
    pub fn distance_to_center(&self) -> i64 {
        i64::from(self.q)
            .abs()
            .max(i64::from(self.r).abs())
            .max(self.s().abs())
    }

    /// All six neighbors, in `DIRECTIONS` order. May lie off the board.
    ///
    /// Components wrap at the i32 edge; a wrapped neighbor of an on-board
    /// cell is always off the board.
    pub fn neighbors(&self) -> [Hex; 6] {
        DIRECTIONS.map(|(dq, dr)| Hex::new(self.q.wrapping_add(dq), self.r.wrapping_add(dr)))
    }

    /// Snap fractional axial coordinates to the nearest cell.
    ///
    /// Each cube component is rounded on its own, then the component with the
    /// largest rounding error is recomputed from the other two. q is only
    /// recomputed when its error is strictly the largest; an r/s tie
    /// recomputes r. `None` when the cell has no i32 address (or the input
    /// is not finite).
    pub fn round(q: f64, r: f64) -> Option<Hex> {
        let s = -q - r;
        let mut rq = round_half_up(q);
        let mut rr = round_half_up(r);
        let rs = round_half_up(s);

        let q_diff = (rq - q).abs();
        let r_diff = (rr - r).abs();
        let s_diff = (rs - s).abs();

        if q_diff > r_diff && q_diff > s_diff {
            rq = -rr - rs;
        } else if r_diff >= s_diff {
            rr = -rq - rs;
        }
        // otherwise s absorbs the error, and s is never stored

        Some(Hex::new(to_component(rq)?, to_component(rr)?))
    }
}

impl std::fmt::Display for Hex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.q, self.r, self.s())
    }
}

/// Whole-valued float to a stored component, refusing anything `as` would clamp
fn to_component(x: f64) -> Option<i32> {
    (x >= f64::from(i32::MIN) && x <= f64::from(i32::MAX)).then_some(x as i32)
}

/// Halves go toward +inf, so -0.5 becomes 0 and 0.5 becomes 1
fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// A point in pixel space
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Flat-top pixel layout: where cell (0,0,0) is drawn and how big cells are
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Layout {
    pub origin_x: f64,
    pub origin_y: f64,
    /// Center-to-corner distance in pixels
    pub size: f64,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            origin_x: 410.0,
            origin_y: 345.0,
            size: 30.0,
        }
    }
}

impl Layout {
    pub const fn new(origin_x: f64, origin_y: f64, size: f64) -> Self {
        Self {
            origin_x,
            origin_y,
            size,
        }
    }

    /// Pixel center of a cell
    pub fn hex_to_pixel(&self, hex: Hex) -> Point {
        let q = hex.q as f64;
        let r = hex.r as f64;
        Point {
            x: self.origin_x + self.size * (1.5 * q),
            y: self.origin_y + self.size * SQRT_3 * (r + q / 2.0),
        }
    }

    /// Fractional axial coordinates under a pixel. No bounds check.
    pub fn from_pixel(&self, x: f64, y: f64) -> (f64, f64) {
        let dx = x - self.origin_x;
        let dy = y - self.origin_y;
        let q = (2.0 / 3.0 * dx) / self.size;
        let r = (-1.0 / 3.0 * dx + SQRT_3 / 3.0 * dy) / self.size;
        (q, r)
    }

    /// Cell under a pixel (may be off the board). `None` when the pixel is
    /// so far out that no cell address exists for it.
    pub fn pixel_to_hex(&self, x: f64, y: f64) -> Option<Hex> {
        let (q, r) = self.from_pixel(x, y);
        Hex::round(q, r)
    }

    /// Polygon corners of a cell, corner i at 60*i degrees
    pub fn corners(&self, hex: Hex) -> [Point; 6] {
        let center = self.hex_to_pixel(hex);
        std::array::from_fn(|i| {
            let angle = (60.0 * i as f64).to_radians();
            Point {
                x: center.x + self.size * angle.cos(),
                y: center.y + self.size * angle.sin(),
            }
        })
    }
}
