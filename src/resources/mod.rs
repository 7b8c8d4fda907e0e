mod obj_loader;
pub use obj_loader::{parse_colored_obj, ColoredObjLoader};

use crate::error::Result;

/// Implemented by structures that can load resources of a given type from disk
pub trait ResourceLoader {
    type Item;
    // self is made mutable here to allow more flexibility in the way we load stuff
    fn load(&mut self) -> Result<Self::Item>;
}
