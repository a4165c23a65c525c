use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// Logical clock reading in milliseconds, supplied by the host.
pub type Millis = u64;

/// Identity of an answer within a game (a letter, a number, a shape name...).
pub type Concept = &'static str;

/// Single grid axis used for coverage cells.
pub type Coord = u8;

/// Grid coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

bitflags! {
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct PointerButtons: u16 {
        const PRIMARY   = 1;
        const SECONDARY = 1 << 1;
        const AUXILIARY = 1 << 2;
        const BACK      = 1 << 3;
        const FORWARD   = 1 << 4;
    }
}

/// Position relative to the top-left corner of an element.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Size of an element's bounding box.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    pub width: f32,
    pub height: f32,
}

impl Extent {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// One pointer or touch sample over an element.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointerSample {
    pub pos: Point,
    pub extent: Extent,
    pub buttons: PointerButtons,
    pub touch: bool,
}

impl PointerSample {
    pub const fn mouse(pos: Point, extent: Extent, buttons: PointerButtons) -> Self {
        Self {
            pos,
            extent,
            buttons,
            touch: false,
        }
    }

    pub const fn touch(pos: Point, extent: Extent) -> Self {
        Self {
            pos,
            extent,
            buttons: PointerButtons::empty(),
            touch: true,
        }
    }

    /// Touches always paint; mice only while the primary button alone is held.
    pub fn is_pressed(&self) -> bool {
        self.touch || self.buttons == PointerButtons::PRIMARY
    }
}

const STAMP: [(isize, isize); 9] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 0),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coord2, delta: (isize, isize), bounds: Coord) -> Option<Coord2> {
    let (row, col) = coords;
    let (dr, dc) = delta;

    let next_row = row.checked_add_signed(dr.try_into().ok()?)?;
    if next_row >= bounds {
        return None;
    }

    let next_col = col.checked_add_signed(dc.try_into().ok()?)?;
    if next_col >= bounds {
        return None;
    }

    Some((next_row, next_col))
}

/// Iterates the 3x3 block centered on a cell, skipping cells outside a square grid.
#[derive(Debug)]
pub struct StampIter {
    center: Coord2,
    bounds: Coord,
    index: u8,
}

impl StampIter {
    pub fn new(center: Coord2, bounds: Coord) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for StampIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if usize::from(self.index) >= STAMP.len() {
                return None;
            }

            let next_item = apply_delta(self.center, STAMP[self.index as usize], self.bounds);
            self.index += 1;

            if next_item.is_some() {
                return next_item;
            }
        }
    }
}
