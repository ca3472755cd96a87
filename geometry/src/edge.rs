use crate::point::Point;
use common::DEFAULT_F64_MARGIN;
use float_cmp::ApproxEq;

#[derive(Clone, Debug)]
pub struct Edge<'a>(pub &'a Point, pub &'a Point);

impl<'a> Edge<'a> {
    // intersects_segment solves the parametric line-line system between the two
    // segments; a zero denominator means parallel segments, which never count
    // as an intersection
    // https://stackoverflow.com/questions/563198/how-do-you-detect-where-two-line-segments-intersect
    pub fn intersects_segment(&self, other: &Edge) -> bool {
        let s1 = self.1 - self.0;
        let s2 = other.1 - other.0;

        let denominator = -s2.0 * s1.1 + s1.0 * s2.1;
        if 0_f64.approx_eq(denominator, DEFAULT_F64_MARGIN) {
            return false;
        }

        let w = self.0 - other.0;
        let s = (-s1.1 * w.0 + s1.0 * w.1) / denominator;
        let t = (s2.0 * w.1 - s2.1 * w.0) / denominator;

        s >= 0. && s <= 1. && t >= 0. && t <= 1.
    }

    // distance returns the distance from the point to the closest point on the edge
    pub fn distance(&self, point: &Point) -> f64 {
        let edge = self.1 - self.0;
        let t = ((point - self.0).dot(&edge) / edge.norm_squared()).clamp(0., 1.);
        let projection = self.0 + &edge.mul(t);
        (point - &projection).norm()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::approx_eq;

    #[test]
    fn test_edge_intersects_segment() {
        let a0 = Point(0., 0.);
        let a1 = Point(2., 0.);
        let edge = Edge(&a0, &a1);

        let b0 = Point(1., -1.);
        let b1 = Point(1., 1.);
        assert!(edge.intersects_segment(&Edge(&b0, &b1)));

        // disjoint
        let b0 = Point(3., -1.);
        let b1 = Point(3., 1.);
        assert!(!edge.intersects_segment(&Edge(&b0, &b1)));

        // parallel
        let b0 = Point(0., 1.);
        let b1 = Point(2., 1.);
        assert!(!edge.intersects_segment(&Edge(&b0, &b1)));

        // collinear overlap is parallel too
        let b0 = Point(1., 0.);
        let b1 = Point(3., 0.);
        assert!(!edge.intersects_segment(&Edge(&b0, &b1)));

        // touching at an endpoint
        let b0 = Point(2., -1.);
        let b1 = Point(2., 1.);
        assert!(edge.intersects_segment(&Edge(&b0, &b1)));
    }

    #[test]
    fn test_edge_distance() {
        let a0 = Point(0., 0.);
        let a1 = Point(2., 0.);
        let edge = Edge(&a0, &a1);

        approx_eq!(f64, 1., edge.distance(&Point(1., 1.)));
        approx_eq!(f64, 1., edge.distance(&Point(3., 0.)));
        approx_eq!(f64, 0., edge.distance(&Point(0.5, 0.)));
    }
}
