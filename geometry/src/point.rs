use crate::edge::Edge;
use common::{fmt_float, rad, DEFAULT_F64_MARGIN};
use float_cmp::{ApproxEq, F64Margin};
use itertools::izip;
use std::ops::{Add, Neg, Sub};

pub const ORIGIN: Point = Point(0., 0.);

pub const DISPLAY_PRECISION: u32 = 2;

#[derive(Clone, Copy, Debug)]
pub struct Point(pub f64, pub f64);

impl Point {
    pub fn new(values: (f64, f64)) -> Point {
        Point(values.0, values.1)
    }

    // edges pairs up consecutive points, wrapping last-to-first
    pub fn edges<'a>(points: &'a [Point]) -> Vec<Edge<'a>> {
        izip!(
            points.iter().cycle().take(points.len()),
            points.iter().cycle().skip(1).take(points.len()),
        )
        .map(|(point1, point2)| Edge(point1, point2))
        .collect()
    }

    // arg returns the heading of the vector from the origin to self, in [0, TAU)
    pub fn arg(&self) -> f64 {
        rad(self.1.atan2(self.0))
    }

    pub fn dot(&self, other: &Point) -> f64 {
        self.0 * other.0 + self.1 * other.1
    }

    pub fn mul(&self, val: f64) -> Point {
        Point(self.0 * val, self.1 * val)
    }

    pub fn norm(&self) -> f64 {
        self.norm_squared().sqrt()
    }

    pub fn norm_squared(&self) -> f64 {
        self.0.powi(2) + self.1.powi(2)
    }

    pub fn distance(&self, other: &Point) -> f64 {
        (self - other).norm()
    }

    pub fn values(&self) -> (f64, f64) {
        (self.0, self.1)
    }
}

impl Add for &Point {
    type Output = Point;
    fn add(self, other: &Point) -> Self::Output {
        Point(self.0 + other.0, self.1 + other.1)
    }
}

impl Sub for &Point {
    type Output = Point;
    fn sub(self, other: &Point) -> Self::Output {
        Point(self.0 - other.0, self.1 - other.1)
    }
}

impl Neg for Point {
    type Output = Point;
    fn neg(self) -> Self::Output {
        Point(-self.0, -self.1)
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.0.approx_eq(other.0, DEFAULT_F64_MARGIN)
            && self.1.approx_eq(other.1, DEFAULT_F64_MARGIN)
    }
}

impl ApproxEq for Point {
    type Margin = F64Margin;

    fn approx_eq<M: Into<Self::Margin>>(self, other: Self, margin: M) -> bool {
        0_f64.approx_eq((&self - &other).norm(), margin)
    }
}

impl ApproxEq for &Point {
    type Margin = F64Margin;

    fn approx_eq<M: Into<Self::Margin>>(self, other: Self, margin: M) -> bool {
        0_f64.approx_eq((self - other).norm(), margin)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{},{}]",
            fmt_float(self.0, DISPLAY_PRECISION),
            fmt_float(self.1, DISPLAY_PRECISION)
        )
    }
}
