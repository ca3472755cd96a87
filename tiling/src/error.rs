use common::fmt_float;

// Structural and definitional failures abort the whole generation pass; there
// is no partial tile set to salvage and no retry that could end differently.
#[derive(Debug)]
pub enum TilingError {
    // the definition has no seed offsets to replicate
    EmptySeed(String),
    // a lookup-by-name found no matching definition
    UnknownTessellation(String),
    // the rotation breakdown found no class for a face's first-vertex angle,
    // which means the lattice disagrees with the breakdown tables
    Breakdown { sides: usize, angle: f64 },
}

impl std::fmt::Display for TilingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TilingError::EmptySeed(name) => {
                write!(f, "tessellation {:?} has no seed offsets", name)
            }
            TilingError::UnknownTessellation(name) => {
                write!(f, "no tessellation named {:?}", name)
            }
            TilingError::Breakdown { sides, angle } => write!(
                f,
                "no rotation class for a {}-sided face with first-vertex angle {}",
                sides,
                fmt_float(*angle, 6),
            ),
        }
    }
}

impl std::error::Error for TilingError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            "tessellation \"hex\" has no seed offsets",
            format!("{}", TilingError::EmptySeed(String::from("hex"))),
        );
        assert_eq!(
            "no tessellation named \"missing\"",
            format!("{}", TilingError::UnknownTessellation(String::from("missing"))),
        );
        assert_eq!(
            "no rotation class for a 4-sided face with first-vertex angle 0.500000",
            format!("{}", TilingError::Breakdown { sides: 4, angle: 0.5 }),
        );
    }
}
