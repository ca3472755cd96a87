use crate::faces::class_angles;
use crate::tile::Geometry;
use geometry::Point;
use std::collections::HashMap;
use std::f64::consts::TAU;
use std::rc::Rc;

// circumradius of a regular polygon with unit edge length, per side count
fn unit_radius(sides: usize) -> f64 {
    match sides {
        3 => 0.5773502691,
        4 => 0.707106781186,
        6 => 1.,
        12 => 1.93185165257,
        _ => panic!("no radius for side count {}", sides),
    }
}

// GeometryCache hands out the shared vertex-offset set for each distinct
// (side count, rotation class) pair. A shape is computed at most once per
// generation pass; every tile with that shape holds the same instance.
pub struct GeometryCache {
    scale: f64,
    shapes: HashMap<(usize, u8), Rc<Geometry>>,
}

impl GeometryCache {
    pub fn new(scale: f64) -> GeometryCache {
        GeometryCache {
            scale,
            shapes: HashMap::new(),
        }
    }

    pub fn get_or_create(&mut self, sides: usize, rotation: u8) -> Rc<Geometry> {
        let scale = self.scale;
        self.shapes
            .entry((sides, rotation))
            .or_insert_with(|| {
                let radius = scale * unit_radius(sides);
                let base = class_angles(sides)[rotation as usize];
                let offsets = (0..sides)
                    .map(|v| {
                        let theta = base + v as f64 * TAU / sides as f64;
                        Point(radius * theta.cos(), radius * theta.sin())
                    })
                    .collect();
                Rc::new(Geometry {
                    sides,
                    radius,
                    offsets,
                })
            })
            .clone()
    }

    pub fn get(&self, sides: usize, rotation: u8) -> Option<Rc<Geometry>> {
        self.shapes.get(&(sides, rotation)).cloned()
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}
