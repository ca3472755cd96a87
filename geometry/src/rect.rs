use crate::point::Point;

#[derive(Clone, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Rect {
        Rect { x, y, w, h }
    }

    pub fn contains(&self, point: &Point) -> bool {
        point.0 >= self.x
            && point.0 < self.x + self.w
            && point.1 >= self.y
            && point.1 < self.y + self.h
    }

    pub fn center(&self) -> Point {
        Point(self.x + self.w / 2., self.y + self.h / 2.)
    }

    // expand grows the rect by margin on every side
    pub fn expand(&self, margin: f64) -> Rect {
        Rect {
            x: self.x - margin,
            y: self.y - margin,
            w: self.w + 2. * margin,
            h: self.h + 2. * margin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::approx_eq;

    #[test]
    fn test_rect_contains() {
        let rect = Rect::new(-1., -1., 2., 2.);
        assert!(rect.contains(&Point(0., 0.)));
        assert!(rect.contains(&Point(-1., -1.)));
        assert!(!rect.contains(&Point(1., 1.)));
        assert!(!rect.contains(&Point(0., 2.)));
    }

    #[test]
    fn test_rect_center() {
        let center = Rect::new(0., 0., 4., 2.).center();
        approx_eq!(f64, 2., center.0);
        approx_eq!(f64, 1., center.1);
    }

    #[test]
    fn test_rect_expand() {
        let rect = Rect::new(0., 0., 4., 2.).expand(1.);
        assert_eq!(Rect::new(-1., -1., 6., 4.), rect);
    }
}
