//! Non-maximum suppression on gradient magnitude with direction alignment,
//! followed by the single-bound strong-edge classification.
//!
//! Each interior pixel is compared against the two neighbours selected by its
//! quantized edge direction and kept (255) only if its magnitude is strictly
//! greater than both. The outermost 1-pixel frame is never kept, which also
//! keeps neighbour lookups in bounds.
use super::grad::Direction;
use crate::error::Result;
use crate::image::ops::{ensure_same_size, map_pixels};
use crate::image::{Image, ImageF32, ImageU8};

pub const EDGE: u8 = 255;
pub const NO_EDGE: u8 = 0;

#[inline]
fn neighbours(direction: Direction, x: usize, y: usize) -> [(usize, usize); 2] {
    match direction {
        Direction::Deg45 => [(x + 1, y - 1), (x - 1, y + 1)],
        Direction::Deg90 => [(x + 1, y), (x - 1, y)],
        Direction::Deg135 => [(x - 1, y - 1), (x + 1, y + 1)],
        Direction::Deg0 => [(x, y + 1), (x, y - 1)],
    }
}

/// Thin a magnitude field to one-pixel ridges.
pub fn suppress_non_maxima(magnitude: &ImageF32, directions: &Image<Direction>) -> Result<ImageU8> {
    ensure_same_size(magnitude, directions)?;
    let (w, h) = (magnitude.w, magnitude.h);
    Ok(map_pixels(w, h, |x, y| {
        if x == 0 || y == 0 || x + 1 >= w || y + 1 >= h {
            return NO_EDGE;
        }
        let mag = magnitude.get(x, y);
        let [(ax, ay), (bx, by)] = neighbours(directions.get(x, y), x, y);
        if mag > magnitude.get(ax, ay) && mag > magnitude.get(bx, by) {
            EDGE
        } else {
            NO_EDGE
        }
    }))
}

/// Keep a suppressed pixel only if its magnitude exceeds `upper_bound`.
///
/// Pixels at or below the bound are rejected outright; there is no weak-edge
/// promotion along connected strong edges.
pub fn classify_strong(thin: &ImageU8, magnitude: &ImageF32, upper_bound: f32) -> Result<ImageU8> {
    ensure_same_size(thin, magnitude)?;
    Ok(map_pixels(thin.w, thin.h, |x, y| {
        if thin.get(x, y) == EDGE && magnitude.get(x, y) > upper_bound {
            EDGE
        } else {
            NO_EDGE
        }
    }))
}
