use crate::{cache::GeometryCache, error::TilingError, replicate::SiteSet, tile::Tile};
use geometry::{Frame, Rect};
use itertools::Itertools;
use lattice::DIRECTIONS;
use smallvec::SmallVec;
use std::f64::consts::{FRAC_PI_2, FRAC_PI_3, FRAC_PI_4, FRAC_PI_6, PI, TAU};
use std::rc::Rc;

const TWELFTH_PI: f64 = PI / 12.;

// angular slack allowed when matching a face's first-vertex angle against a
// rotation class, as a fraction of the angular step 2π/sides
pub const DEFAULT_BREAKDOWN_TOLERANCE: f64 = 0.01;

// sides_for_gap maps the gap between consecutive occupied directions to the
// side count of the face enclosed between them. Gaps with no entry enclose no
// face; those show up routinely where neighbor coverage is partial at the
// lattice edge and are skipped without comment.
fn sides_for_gap(gap: usize) -> Option<usize> {
    match gap {
        2 => Some(3),
        3 => Some(4),
        4 => Some(6),
        5 => Some(12),
        _ => None,
    }
}

// class_angles lists the canonical first-vertex angle of every rotation class
// for a side count. The classes are fixed by the lattice symmetry: all are
// exact multiples of π/12.
pub(crate) fn class_angles(sides: usize) -> &'static [f64] {
    const TRIANGLE: [f64; 4] = [0., FRAC_PI_6, FRAC_PI_3, FRAC_PI_2];
    const SQUARE: [f64; 3] = [TWELFTH_PI, FRAC_PI_4, 5. * TWELFTH_PI];
    const HEXAGON: [f64; 2] = [0., FRAC_PI_2];
    const DODECAGON: [f64; 1] = [TWELFTH_PI];
    match sides {
        3 => &TRIANGLE,
        4 => &SQUARE,
        6 => &HEXAGON,
        12 => &DODECAGON,
        _ => panic!("no rotation classes for side count {}", sides),
    }
}

pub fn rotation_class_count(sides: usize) -> usize {
    class_angles(sides).len()
}

// breakdown classifies an angle into a rotation class by testing it against
// each class angle modulo the angular step
fn breakdown(sides: usize, angle: f64, tolerance: f64) -> Option<u8> {
    let alpha = TAU / sides as f64;
    class_angles(sides)
        .iter()
        .position(|base| {
            let steps = (angle - base) / alpha;
            (steps - steps.round()).abs() < tolerance
        })
        .map(|class| class as u8)
}

// extract_faces walks every face incident to every site and keeps the ones
// whose centroid lands inside the region once the frame is applied. That
// windowing is the only thing that bounds the tile set.
pub fn extract_faces(
    sites: &SiteSet,
    frame: &Frame,
    region: &Rect,
    cache: &mut GeometryCache,
    tolerance: f64,
) -> Result<Vec<Rc<Tile>>, TilingError> {
    let mut tiles = Vec::new();

    for site in sites.sites() {
        let mut neighs: SmallVec<[usize; 6]> = SmallVec::new();
        for d in 0..6 {
            if sites.contains(&site.add(&DIRECTIONS[d])) {
                neighs.push(d);
            }
        }

        for (&start, &stop) in neighs.iter().tuple_windows() {
            let sides = match sides_for_gap(stop - start) {
                Some(sides) => sides,
                None => continue,
            };

            // walk the face: every 12/sides-th direction of the star, starting
            // from the first occupied direction of the pair
            let step = 12 / sides;
            let mut walker = site.add(&DIRECTIONS[start]);
            let first = walker.to_point();
            let mut centroid = first;
            for turn in (step..12).step_by(step) {
                walker = walker.add(&DIRECTIONS[(start + turn) % 12]);
                centroid = &centroid + &walker.to_point();
            }
            let centroid = centroid.mul(1. / sides as f64);

            let center = frame.apply(&centroid);
            if !region.contains(&center) {
                continue;
            }

            let angle = (&first - &centroid).arg();
            let rotation = breakdown(sides, angle, tolerance)
                .ok_or(TilingError::Breakdown { sides, angle })?;

            let geometry = cache.get_or_create(sides, rotation);
            tiles.push(Rc::new(Tile::new(sides, rotation, center, geometry)));
        }
    }

    Ok(tiles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tessellation::Tessellation;
    use common::approx_eq;

    #[test]
    fn test_sides_for_gap_table() {
        assert_eq!(None, sides_for_gap(0));
        assert_eq!(None, sides_for_gap(1));
        assert_eq!(Some(3), sides_for_gap(2));
        assert_eq!(Some(4), sides_for_gap(3));
        assert_eq!(Some(6), sides_for_gap(4));
        assert_eq!(Some(12), sides_for_gap(5));
        assert_eq!(None, sides_for_gap(6));
    }

    #[test]
    fn test_rotation_class_count() {
        assert_eq!(4, rotation_class_count(3));
        assert_eq!(3, rotation_class_count(4));
        assert_eq!(2, rotation_class_count(6));
        assert_eq!(1, rotation_class_count(12));
    }

    #[test]
    fn test_breakdown_matches_class_angles() {
        for &sides in [3, 4, 6, 12].iter() {
            let alpha = TAU / sides as f64;
            for (class, &base) in class_angles(sides).iter().enumerate() {
                // every class angle matches itself, at any whole step offset
                for k in 0..sides {
                    let angle = base + k as f64 * alpha;
                    assert_eq!(
                        Some(class as u8),
                        breakdown(sides, angle, DEFAULT_BREAKDOWN_TOLERANCE),
                        "sides {} class {} step {}",
                        sides,
                        class,
                        k,
                    );
                }
            }
        }
    }

    #[test]
    fn test_breakdown_accepts_noise_within_tolerance() {
        let alpha = TAU / 3.;
        assert_eq!(Some(0), breakdown(3, 1e-9, DEFAULT_BREAKDOWN_TOLERANCE));
        assert_eq!(Some(0), breakdown(3, alpha - 1e-9, DEFAULT_BREAKDOWN_TOLERANCE));
        assert_eq!(Some(2), breakdown(3, FRAC_PI_3 - alpha, DEFAULT_BREAKDOWN_TOLERANCE));
    }

    #[test]
    fn test_extract_faces_surfaces_breakdown_failure() {
        let definition = Tessellation {
            name: String::from("triangular"),
            tags: None,
            t1: [1, 0, 0, 0],
            t2: [0, 0, 1, 0],
            seed: vec![[0, 0, 0, 0]],
        };
        let region = Rect::new(-3., -3., 6., 6.);
        let sites = SiteSet::replicate(&definition, &region, 1.);
        let mut cache = GeometryCache::new(1.);
        // a zero tolerance rejects every class, so the first face fails
        match extract_faces(&sites, &Frame::scaling(1.), &region, &mut cache, 0.) {
            Err(TilingError::Breakdown { sides: 3, .. }) => {}
            other => panic!("expected Breakdown, got {:?}", other.map(|tiles| tiles.len())),
        }
    }

    #[test]
    fn test_breakdown_rejects_off_class_angles() {
        // 0.3 rad sits between the triangle classes
        assert_eq!(None, breakdown(3, 0.3, DEFAULT_BREAKDOWN_TOLERANCE));
        // a tighter tolerance rejects what the default accepts
        approx_eq!(f64, FRAC_PI_6, class_angles(3)[1]);
        assert_eq!(Some(1), breakdown(3, FRAC_PI_6 + 0.01, DEFAULT_BREAKDOWN_TOLERANCE));
        assert_eq!(None, breakdown(3, FRAC_PI_6 + 0.01, 1e-4));
    }
}
