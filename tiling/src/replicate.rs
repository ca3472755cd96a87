use crate::tessellation::Tessellation;
use geometry::{Point, Rect};
use lattice::LatticeCoord;
use std::collections::HashSet;

// floor on the replication counts so degenerate or very small lattices still
// cover the region
const MIN_REPLICATIONS: i32 = 24;

// how many translation periods to lay down per region extent; generous so the
// windowing step, not the replication bounds, decides what survives
const COVERAGE_FACTOR: f64 = 6.;

// SiteSet is every lattice point the replicator produced for one generation
// pass: the sites in generation order plus an occupancy set for the adjacency
// probes. It lives exactly as long as the pass; there is no global registry.
pub struct SiteSet {
    sites: Vec<LatticeCoord>,
    occupied: HashSet<LatticeCoord>,
}

impl SiteSet {
    // replicate lays the seed pattern down at every translation (x·T1 + y·T2)
    // for (x, y) in [-WN, WN) × [-HN, HN)
    pub fn replicate(definition: &Tessellation, region: &Rect, scale: f64) -> SiteSet {
        let t1 = LatticeCoord(definition.t1);
        let t2 = LatticeCoord(definition.t2);
        let (wn, hn) = replication_bounds(definition, region, scale);

        let mut sites = Vec::new();
        let mut occupied = HashSet::new();
        for x in -wn..wn {
            for y in -hn..hn {
                let translation = t1.scale(x).add(&t2.scale(y));
                for seed in definition.seed.iter() {
                    let site = translation.add_array(seed);
                    sites.push(site);
                    occupied.insert(site);
                }
            }
        }
        SiteSet { sites, occupied }
    }

    pub fn contains(&self, coord: &LatticeCoord) -> bool {
        self.occupied.contains(coord)
    }

    pub fn sites(&self) -> &[LatticeCoord] {
        &self.sites
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }
}

// periods_for counts how many periods of the given extent cover the region
// dimension; extents too small to divide by yield no constraint
fn periods_for(dimension: f64, extent: f64, scale: f64) -> Option<i32> {
    let period = extent * scale;
    if !period.is_finite() || period.abs() < f64::EPSILON {
        return None;
    }
    Some((COVERAGE_FACTOR * dimension / period).ceil() as i32)
}

// replication_bounds takes the stricter of the seed-bounding-box constraint
// and the T1+T2 combined-extent constraint per axis, substituting one axis
// for the other when it collapses, with a floor of MIN_REPLICATIONS
fn replication_bounds(definition: &Tessellation, region: &Rect, scale: f64) -> (i32, i32) {
    let mut bb_min = Point(f64::MAX, f64::MAX);
    let mut bb_max = Point(f64::MIN, f64::MIN);
    for seed in definition.seed.iter() {
        let point = LatticeCoord(*seed).to_point();
        bb_min = Point(bb_min.0.min(point.0), bb_min.1.min(point.1));
        bb_max = Point(bb_max.0.max(point.0), bb_max.1.max(point.1));
    }
    let bb = &bb_max - &bb_min;

    let combined = LatticeCoord(definition.t1).add(&LatticeCoord(definition.t2)).to_point();

    let mut wn = periods_for(region.w, bb.0, scale)
        .max(periods_for(region.w, combined.0, scale))
        .unwrap_or(0);
    let mut hn = periods_for(region.h, bb.1, scale)
        .max(periods_for(region.h, combined.1, scale))
        .unwrap_or(0);

    if wn < MIN_REPLICATIONS {
        wn = hn;
    }
    if hn < MIN_REPLICATIONS {
        hn = wn;
    }
    if wn < MIN_REPLICATIONS {
        wn = MIN_REPLICATIONS;
    }
    if hn < MIN_REPLICATIONS {
        hn = MIN_REPLICATIONS;
    }
    (wn, hn)
}
