//! Scale-space extrema over the 3×3×3 neighbourhood of interior DoG layers.
use super::dog::DogPyramid;
use crate::image::ImageU8;
use serde::Serialize;

/// Keypoint candidate before filtering and description.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Candidate {
    pub x: usize,
    pub y: usize,
    pub octave: usize,
    pub layer: usize,
}

/// `true` if the centre of the 3×3×3 block is strictly above, or strictly
/// below, all 26 neighbours.
fn is_extremum(below: &ImageU8, current: &ImageU8, above: &ImageU8, x: usize, y: usize) -> bool {
    let centre = current.get(x, y);
    let mut greater = true;
    let mut less = true;
    for (dz, layer) in [below, current, above].into_iter().enumerate() {
        for ny in y - 1..=y + 1 {
            for nx in x - 1..=x + 1 {
                if dz == 1 && nx == x && ny == y {
                    continue;
                }
                let v = layer.get(nx, ny);
                greater &= centre > v;
                less &= centre < v;
                if !greater && !less {
                    return false;
                }
            }
        }
    }
    true
}

/// Scan every interior layer of every octave, skipping a 1-pixel frame.
///
/// Candidates are ordered by octave, layer, then column-major position
/// (`x` outer, `y` inner).
pub fn locate_extrema(dog: &DogPyramid) -> Vec<Candidate> {
    let mut candidates = Vec::new();
    for octave in 0..dog.num_octaves() {
        let layers = dog.layers(octave);
        for layer in dog.interior_layers(octave) {
            let (below, current, above) = (&layers[layer - 1], &layers[layer], &layers[layer + 1]);
            if current.w < 3 || current.h < 3 {
                continue;
            }
            for x in 1..current.w - 1 {
                for y in 1..current.h - 1 {
                    if is_extremum(below, current, above, x, y) {
                        candidates.push(Candidate {
                            x,
                            y,
                            octave,
                            layer,
                        });
                    }
                }
            }
        }
    }
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat_octave(w: usize, h: usize, layers: usize, value: u8) -> Vec<ImageU8> {
        (0..layers).map(|_| ImageU8::filled(w, h, value)).collect()
    }

    #[test]
    fn single_peak_is_the_only_candidate() {
        let mut octave = flat_octave(9, 7, 3, 40);
        octave[1].set(4, 3, 41);
        let dog = DogPyramid::from_layers(vec![octave]);
        assert_eq!(
            locate_extrema(&dog),
            vec![Candidate {
                x: 4,
                y: 3,
                octave: 0,
                layer: 1
            }]
        );
    }

    #[test]
    fn single_pit_is_found() {
        let mut octave = flat_octave(6, 6, 4, 100);
        octave[2].set(2, 3, 7);
        let dog = DogPyramid::from_layers(vec![flat_octave(6, 6, 4, 0), octave]);
        let found = locate_extrema(&dog);
        assert_eq!(found.len(), 1);
        assert_eq!((found[0].octave, found[0].layer, found[0].x, found[0].y), (1, 2, 2, 3));
    }

    #[test]
    fn tie_with_a_neighbour_is_not_an_extremum() {
        let mut octave = flat_octave(7, 7, 3, 10);
        octave[1].set(3, 3, 50);
        octave[2].set(4, 4, 50);
        let dog = DogPyramid::from_layers(vec![octave]);
        assert!(locate_extrema(&dog).is_empty());
    }

    #[test]
    fn border_pixels_and_outer_layers_are_skipped() {
        let mut octave = flat_octave(5, 5, 3, 10);
        octave[1].set(0, 2, 90);
        octave[0].set(2, 2, 90);
        let dog = DogPyramid::from_layers(vec![octave]);
        assert!(locate_extrema(&dog).is_empty());
    }

    #[test]
    fn too_few_layers_yield_nothing() {
        let mut octave = flat_octave(5, 5, 2, 10);
        octave[1].set(2, 2, 90);
        let dog = DogPyramid::from_layers(vec![octave]);
        assert!(locate_extrema(&dog).is_empty());
    }
}
