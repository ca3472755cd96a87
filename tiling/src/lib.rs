mod cache;
mod error;
mod faces;
mod replicate;
mod tessellation;
mod tile;

pub use self::cache::GeometryCache;
pub use self::error::TilingError;
pub use self::faces::{extract_faces, rotation_class_count, DEFAULT_BREAKDOWN_TOLERANCE};
pub use self::replicate::SiteSet;
pub use self::tessellation::Tessellation;
pub use self::tile::{Geometry, Tile, MAX_SIDES};

use geometry::{Frame, Rect};
use log::{debug, info};
use std::rc::Rc;
use zones::ZoneGrid;

// TileSet owns every tile of one generation pass, in generation order, along
// with the geometry cache the tiles' shapes live in. Indexes built over it
// hold weak references, so the set must outlive them.
pub struct TileSet {
    tiles: Vec<Rc<Tile>>,
    cache: GeometryCache,
    region: Rect,
}

impl TileSet {
    pub fn tiles(&self) -> &[Rc<Tile>] {
        &self.tiles
    }

    pub fn cache(&self) -> &GeometryCache {
        &self.cache
    }

    pub fn region(&self) -> &Rect {
        &self.region
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

// generate runs the whole batch pass for one definition: replicate the seed
// pattern over the region, extract faces from the adjacency structure, and
// resolve each face's shared geometry. Deterministic; generating twice from
// the same inputs yields value-identical tile sets.
pub fn generate(
    definition: &Tessellation,
    region: &Rect,
    scale: f64,
) -> Result<TileSet, TilingError> {
    if definition.seed.is_empty() {
        return Err(TilingError::EmptySeed(definition.name.clone()));
    }

    let frame = Frame::scaling(scale);
    let sites = SiteSet::replicate(definition, region, scale);
    debug!("replicated {} sites for {:?}", sites.len(), definition.name);

    let mut cache = GeometryCache::new(scale);
    let tiles = extract_faces(&sites, &frame, region, &mut cache, DEFAULT_BREAKDOWN_TOLERANCE)?;
    info!(
        "generated {} tiles across {} distinct shapes for {:?}",
        tiles.len(),
        cache.len(),
        definition.name,
    );

    Ok(TileSet {
        tiles,
        cache,
        region: region.clone(),
    })
}

// build_index buckets the finished tile set into a uniform zone grid for
// point queries
pub fn build_index(set: &TileSet, cols: usize, rows: usize) -> ZoneGrid<Tile> {
    let mut grid = ZoneGrid::new(set.region.clone(), cols, rows);
    for tile in set.tiles() {
        grid.insert(tile);
    }
    debug!(
        "indexed {} tiles into {} bucket entries",
        set.len(),
        grid.occupancy(),
    );
    grid
}
