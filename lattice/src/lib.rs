use geometry::Point;
use std::{fmt, ops::Add, str::FromStr};

const SQRT_3: f64 = 1.7320508075688772;

// LatticeCoord addresses a point on the quasi-periodic lattice with four
// integer basis coefficients. The four basis vectors map to the plane as
// (1, 0), (√3/2, 1/2), (1/2, √3/2) and (0, 1), so consecutive entries of
// DIRECTIONS below are 30° apart.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct LatticeCoord(pub [i32; 4]);

// The twelve-direction star around any lattice point. Directions 0-5 are the
// primary adjacency probes; 6-11 are their negations and are only stepped
// through while walking a face.
pub const DIRECTIONS: [LatticeCoord; 12] = [
    LatticeCoord([1, 0, 0, 0]),
    LatticeCoord([0, 1, 0, 0]),
    LatticeCoord([0, 0, 1, 0]),
    LatticeCoord([0, 0, 0, 1]),
    LatticeCoord([-1, 0, 1, 0]),
    LatticeCoord([0, -1, 0, 1]),
    LatticeCoord([-1, 0, 0, 0]),
    LatticeCoord([0, -1, 0, 0]),
    LatticeCoord([0, 0, -1, 0]),
    LatticeCoord([0, 0, 0, -1]),
    LatticeCoord([1, 0, -1, 0]),
    LatticeCoord([0, 1, 0, -1]),
];

impl LatticeCoord {
    pub fn new(w0: i32, w1: i32, w2: i32, w3: i32) -> LatticeCoord {
        LatticeCoord([w0, w1, w2, w3])
    }

    pub fn add(&self, other: &LatticeCoord) -> LatticeCoord {
        let mut w = [0; 4];
        for i in 0..4 {
            w[i] = self.0[i] + other.0[i];
        }
        LatticeCoord(w)
    }

    pub fn scale(&self, k: i32) -> LatticeCoord {
        let mut w = [0; 4];
        for i in 0..4 {
            w[i] = self.0[i] * k;
        }
        LatticeCoord(w)
    }

    pub fn add_array(&self, values: &[i32; 4]) -> LatticeCoord {
        self.add(&LatticeCoord(*values))
    }

    // to_point maps the coordinate to its Euclidean position
    pub fn to_point(&self) -> Point {
        let [w0, w1, w2, w3] = self.0;
        Point(
            f64::from(w0) + 0.5 * SQRT_3 * f64::from(w1) + 0.5 * f64::from(w2),
            0.5 * f64::from(w1) + 0.5 * SQRT_3 * f64::from(w2) + f64::from(w3),
        )
    }

    // encode produces the canonical comma-joined key, e.g. "1,0,-1,0".
    // It is injective: distinct coordinates always encode differently.
    pub fn encode(&self) -> String {
        format!("{},{},{},{}", self.0[0], self.0[1], self.0[2], self.0[3])
    }
}

impl Add for &LatticeCoord {
    type Output = LatticeCoord;
    fn add(self, other: &LatticeCoord) -> Self::Output {
        LatticeCoord::add(self, other)
    }
}

impl fmt::Display for LatticeCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.encode())
    }
}

impl FromStr for LatticeCoord {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut w = [0; 4];
        let mut parts = s.split(',');
        for i in 0..4 {
            w[i] = parts
                .next()
                .ok_or(format!("expected 4 comma-joined integers, got {:?}", s))?
                .trim()
                .parse::<i32>()
                .map_err(|e| format!("bad lattice coordinate {:?}: {}", s, e))?;
        }
        if parts.next().is_some() {
            return Err(format!("expected 4 comma-joined integers, got {:?}", s));
        }
        Ok(LatticeCoord(w))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::approx_eq;

    #[test]
    fn test_lattice_coord_arithmetic() {
        let a = LatticeCoord::new(1, 0, -1, 2);
        let b = LatticeCoord::new(0, 3, 1, -2);
        assert_eq!(LatticeCoord::new(1, 3, 0, 0), a.add(&b));
        assert_eq!(LatticeCoord::new(1, 3, 0, 0), &a + &b);
        assert_eq!(LatticeCoord::new(2, 0, -2, 4), a.scale(2));
        assert_eq!(LatticeCoord::new(0, 0, 0, 0), a.scale(0));
        assert_eq!(LatticeCoord::new(2, 3, 0, 0), a.add_array(&[1, 3, 1, -2]));
    }

    #[test]
    fn test_lattice_coord_to_point() {
        let point = LatticeCoord::new(1, 0, 0, 0).to_point();
        approx_eq!(f64, 1., point.0);
        approx_eq!(f64, 0., point.1);

        let point = LatticeCoord::new(0, 1, 0, 0).to_point();
        approx_eq!(f64, 0.5 * SQRT_3, point.0);
        approx_eq!(f64, 0.5, point.1);

        let point = LatticeCoord::new(0, 0, 1, 0).to_point();
        approx_eq!(f64, 0.5, point.0);
        approx_eq!(f64, 0.5 * SQRT_3, point.1);

        let point = LatticeCoord::new(0, 0, 0, 1).to_point();
        approx_eq!(f64, 0., point.0);
        approx_eq!(f64, 1., point.1);
    }

    #[test]
    fn test_directions_are_unit_steps() {
        for direction in DIRECTIONS.iter() {
            approx_eq!(f64, 1., direction.to_point().norm());
        }
    }

    #[test]
    fn test_directions_back_half_negates_front_half() {
        for d in 0..6 {
            assert_eq!(DIRECTIONS[d].scale(-1), DIRECTIONS[d + 6]);
        }
    }

    #[test]
    fn test_encode_round_trip() {
        for w0 in -2..3 {
            for w1 in -2..3 {
                for w2 in -2..3 {
                    for w3 in -2..3 {
                        let coord = LatticeCoord::new(w0, w1, w2, w3);
                        assert_eq!(coord, coord.encode().parse().unwrap());
                    }
                }
            }
        }
        assert_eq!("1,0,-1,0", LatticeCoord::new(1, 0, -1, 0).encode());
    }

    #[test]
    fn test_decode_rejects_malformed() {
        assert!("1,2,3".parse::<LatticeCoord>().is_err());
        assert!("1,2,3,4,5".parse::<LatticeCoord>().is_err());
        assert!("1,x,3,4".parse::<LatticeCoord>().is_err());
    }
}
