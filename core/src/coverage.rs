use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Markers closer than this to the previous one (on both axes) are not recorded.
pub const MARKER_SPACING: f32 = 8.0;

/// Coverage bound, in percent of the grid.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Threshold {
    AtLeast(f32),
    Above(f32),
}

impl Threshold {
    pub fn is_met(self, percent: f32) -> bool {
        match self {
            Self::AtLeast(bound) => percent >= bound,
            Self::Above(bound) => percent > bound,
        }
    }

    /// Same comparison against a different bound.
    pub fn with_bound(self, bound: f32) -> Self {
        match self {
            Self::AtLeast(_) => Self::AtLeast(bound),
            Self::Above(_) => Self::Above(bound),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PaintRules {
    pub grid: Coord,
    /// Coverage of the right answer that counts as a selection.
    pub accept: Threshold,
    /// Coverage of a wrong answer that already counts as a selection.
    pub reject: Threshold,
}

/// How a paint game currently takes answers.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputMode {
    #[default]
    Paint,
    Click,
}

impl InputMode {
    pub const fn toggled(self) -> Self {
        match self {
            Self::Paint => Self::Click,
            Self::Click => Self::Paint,
        }
    }
}


/// Visited cells of one option's hit-region.
#[derive(Clone, Debug, PartialEq)]
pub struct CoverageGrid {
    cells: Array2<bool>,
    visited: u16,
    size: Coord,
}

impl CoverageGrid {
    pub fn new(size: Coord) -> Self {
        let size = size.max(1);
        Self {
            cells: Array2::default((size, size).to_nd_index()),
            visited: 0,
            size,
        }
    }

    pub fn size(&self) -> Coord {
        self.size
    }

    pub fn visited(&self) -> u16 {
        self.visited
    }

    pub fn total_cells(&self) -> u16 {
        u16::from(self.size) * u16::from(self.size)
    }

    /// Cell under a local position, clamped into the grid.
    pub fn cell_at(&self, pos: Point, extent: Extent) -> Option<Coord2> {
        if !(extent.width > 0.0 && extent.height > 0.0) || !pos.x.is_finite() || !pos.y.is_finite() {
            return None;
        }
        let n = f32::from(self.size);
        let max = f32::from(self.size - 1);
        let col = (pos.x / extent.width * n).floor().clamp(0.0, max);
        let row = (pos.y / extent.height * n).floor().clamp(0.0, max);
        Some((row as Coord, col as Coord))
    }

    /// Marks the 3x3 block around `center`, returning how many cells were new.
    pub fn stamp(&mut self, center: Coord2) -> u16 {
        let mut added = 0;
        for cell in StampIter::new(center, self.size) {
            let visited = &mut self.cells[cell.to_nd_index()];
            if !*visited {
                *visited = true;
                added += 1;
            }
        }
        self.visited += added;
        added
    }

    pub fn percent(&self) -> f32 {
        f32::from(self.visited) * 100.0 / f32::from(self.total_cells())
    }

    pub fn reset(&mut self) {
        self.cells.fill(false);
        self.visited = 0;
    }
}

/// Paint state for every option of the current round.
#[derive(Clone, Debug, PartialEq)]
pub struct CoverageBoard {
    grids: Vec<CoverageGrid>,
    markers: Vec<Vec<Point>>,
    size: Coord,
}

impl CoverageBoard {
    pub fn new(options: usize, size: Coord) -> Self {
        Self {
            grids: (0..options).map(|_| CoverageGrid::new(size)).collect(),
            markers: vec![Vec::new(); options],
            size,
        }
    }

    /// Records one pressed sample over `option` and returns its coverage in percent.
    pub fn paint(&mut self, option: usize, pos: Point, extent: Extent) -> Result<f32> {
        let grid = self
            .grids
            .get_mut(option)
            .ok_or(HubError::InvalidOption(option))?;

        let markers = &mut self.markers[option];
        let is_close = markers.last().is_some_and(|last| {
            (last.x - pos.x).abs() < MARKER_SPACING && (last.y - pos.y).abs() < MARKER_SPACING
        });
        if !is_close {
            markers.push(pos);
        }

        match grid.cell_at(pos, extent) {
            Some(cell) => {
                let added = grid.stamp(cell);
                log::trace!("option {} cell {:?} +{}", option, cell, added);
            }
            None => log::warn!("ignoring paint sample over an empty extent {:?}", extent),
        }
        Ok(grid.percent())
    }

    pub fn percent(&self, option: usize) -> f32 {
        self.grids.get(option).map_or(0.0, CoverageGrid::percent)
    }

    pub fn markers(&self, option: usize) -> &[Point] {
        self.markers.get(option).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn clear_option(&mut self, option: usize) {
        if let Some(grid) = self.grids.get_mut(option) {
            grid.reset();
        }
        if let Some(markers) = self.markers.get_mut(option) {
            markers.clear();
        }
    }

    /// Forgets every stroke, resizing for a new round's option count.
    pub fn clear(&mut self, options: usize) {
        self.grids = (0..options).map(|_| CoverageGrid::new(self.size)).collect();
        self.markers = vec![Vec::new(); options];
    }

    pub fn is_blank(&self) -> bool {
        self.grids.iter().all(|grid| grid.visited() == 0)
            && self.markers.iter().all(Vec::is_empty)
    }
}
