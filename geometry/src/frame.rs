use crate::point::Point;

// Frame is the active linear view transform: a uniform scale about the origin
// followed by a translation.
#[derive(Clone, Debug)]
pub struct Frame {
    pub scale: f64,
    inv_scale: f64,
    pub offset: Point,
}

impl Frame {
    pub fn new(scale: f64, offset: Point) -> Frame {
        assert!(scale != 0., "frame scale must be nonzero");
        Frame {
            scale,
            inv_scale: 1. / scale,
            offset,
        }
    }

    // scaling returns a frame that scales about the origin without translating
    pub fn scaling(scale: f64) -> Frame {
        Frame::new(scale, Point(0., 0.))
    }

    pub fn apply(&self, point: &Point) -> Point {
        Point(
            self.offset.0 + self.scale * point.0,
            self.offset.1 + self.scale * point.1,
        )
    }

    pub fn unapply(&self, point: &Point) -> Point {
        Point(
            (point.0 - self.offset.0) * self.inv_scale,
            (point.1 - self.offset.1) * self.inv_scale,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::approx_eq;

    #[test]
    fn test_frame_apply() {
        let frame = Frame::new(2., Point(10., -10.));
        let point = frame.apply(&Point(1., 3.));
        approx_eq!(f64, 12., point.0);
        approx_eq!(f64, -4., point.1);
    }

    #[test]
    fn test_frame_round_trip() {
        let frame = Frame::new(30., Point(4., 2.));
        let point = Point(0.25, -1.5);
        approx_eq!(&Point, &point, &frame.unapply(&frame.apply(&point)));
    }
}
