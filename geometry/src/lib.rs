mod edge;
mod frame;
mod point;
mod rect;

pub use self::edge::*;
pub use self::frame::*;
pub use self::point::*;
pub use self::rect::*;
