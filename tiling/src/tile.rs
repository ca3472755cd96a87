use geometry::{Edge, Point};
use smallvec::SmallVec;
use std::cell::Cell;
use std::rc::Rc;

// side counts come from the closed set {3, 4, 6, 12}
pub const MAX_SIDES: usize = 12;

// ray target offsets for the containment test: long enough to leave any
// practical region, slightly sloped so the ray does not ride along a
// horizontal edge
const RAY_REACH: f64 = 1e6;
const RAY_RISE: f64 = 10.;

// Geometry is one tile shape in one canonical orientation: vertex offsets
// relative to the tile center. Owned by the GeometryCache and shared
// read-only by every tile with the same (side count, rotation class).
#[derive(Debug)]
pub struct Geometry {
    pub sides: usize,
    // scaled circumradius, also the tile's bounding-disc radius
    pub radius: f64,
    pub offsets: SmallVec<[Point; MAX_SIDES]>,
}

// Tile is one generated face. The shape itself lives in the shared Geometry;
// the fill factor and the palette slot are the two fields collaborators
// mutate after generation, so they sit behind Cells.
#[derive(Debug)]
pub struct Tile {
    pub sides: usize,
    pub rotation: u8,
    pub center: Point,
    pub geometry: Rc<Geometry>,
    fill: Cell<f64>,
    color: Cell<Option<usize>>,
}

impl Tile {
    pub fn new(sides: usize, rotation: u8, center: Point, geometry: Rc<Geometry>) -> Tile {
        debug_assert_eq!(sides, geometry.sides);
        Tile {
            sides,
            rotation,
            center,
            geometry,
            fill: Cell::new(0.),
            color: Cell::new(None),
        }
    }

    pub fn vertex(&self, index: usize) -> Point {
        &self.center + &self.geometry.offsets[index]
    }

    pub fn vertices(&self) -> SmallVec<[Point; MAX_SIDES]> {
        self.geometry
            .offsets
            .iter()
            .map(|offset| &self.center + offset)
            .collect()
    }

    // fill factor: a scalar in [0, 1] written by the shading collaborator
    // every frame and read back by rendering and export
    pub fn fill(&self) -> f64 {
        self.fill.get()
    }

    pub fn set_fill(&self, fill: f64) {
        self.fill.set(fill);
    }

    // color: a palette slot written by the painting collaborator
    pub fn color(&self) -> Option<usize> {
        self.color.get()
    }

    pub fn set_color(&self, slot: usize) {
        self.color.set(Some(slot));
    }

    // contains ray-casts from the point to a far-away target and counts edge
    // crossings; an odd count means the point is inside
    pub fn contains(&self, point: &Point) -> bool {
        let vertices = self.vertices();
        let target = Point(point.0 + RAY_REACH, point.1 + RAY_RISE);
        let ray = Edge(point, &target);
        let crossings = Point::edges(&vertices)
            .iter()
            .filter(|edge| edge.intersects_segment(&ray))
            .count();
        crossings % 2 == 1
    }
}

impl zones::Spatial for Tile {
    fn center(&self) -> Point {
        self.center
    }

    fn radius(&self) -> f64 {
        self.geometry.radius
    }

    fn contains(&self, point: &Point) -> bool {
        Tile::contains(self, point)
    }
}
