//! Map saving and loading
//!
//! Maps are stored as a single RON record, brotli-compressed on disk.
//! Reading auto-detects plain RON so hand-edited files still load.
//! A missing file is not an error: it loads as an empty map, which is
//! the expected first-run state.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{OffTile, Tile, TileMap, TILE_SIZE};

/// On-disk format revision, written with every save and checked on
/// load. Bump when the record layout changes.
pub const FORMAT_VERSION: u32 = 1;

/// Validation limits applied when loading untrusted map files
pub mod limits {
    /// Maximum entries per collection
    pub const MAX_ENTRIES: usize = 65_536;
    /// Maximum coordinate magnitude in pixels
    pub const MAX_COORD: i32 = 1 << 24;
}

/// Error type for map persistence
#[derive(Debug)]
pub enum MapError {
    Io(std::io::Error),
    Parse(ron::error::SpannedError),
    Serialize(ron::Error),
    Validation(String),
}

impl From<std::io::Error> for MapError {
    fn from(e: std::io::Error) -> Self {
        MapError::Io(e)
    }
}

impl From<ron::error::SpannedError> for MapError {
    fn from(e: ron::error::SpannedError) -> Self {
        MapError::Parse(e)
    }
}

impl From<ron::Error> for MapError {
    fn from(e: ron::Error) -> Self {
        MapError::Serialize(e)
    }
}

impl std::fmt::Display for MapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MapError::Io(e) => write!(f, "IO error: {}", e),
            MapError::Parse(e) => write!(f, "parse error: {}", e),
            MapError::Serialize(e) => write!(f, "serialize error: {}", e),
            MapError::Validation(e) => write!(f, "validation error: {}", e),
        }
    }
}

impl std::error::Error for MapError {}

/// Serialized map record.
///
/// Tile bounding boxes are derived data and deliberately absent;
/// [`Tile::bounds`] recomputes them after load.
#[derive(Debug, Serialize, Deserialize)]
struct MapFile {
    version: u32,
    tiles: Vec<Tile>,
    offtiles: Vec<OffTile>,
}

fn in_coord_range(x: i32) -> bool {
    x.abs() <= limits::MAX_COORD
}

fn validate(record: &MapFile) -> Result<(), MapError> {
    if record.version > FORMAT_VERSION {
        return Err(MapError::Validation(format!(
            "unsupported format version {} (newest known is {})",
            record.version, FORMAT_VERSION
        )));
    }
    if record.tiles.len() > limits::MAX_ENTRIES {
        return Err(MapError::Validation(format!(
            "too many tiles ({} > {})",
            record.tiles.len(),
            limits::MAX_ENTRIES
        )));
    }
    if record.offtiles.len() > limits::MAX_ENTRIES {
        return Err(MapError::Validation(format!(
            "too many off-tiles ({} > {})",
            record.offtiles.len(),
            limits::MAX_ENTRIES
        )));
    }
    for (i, tile) in record.tiles.iter().enumerate() {
        if !in_coord_range(tile.pos.x) || !in_coord_range(tile.pos.y) {
            return Err(MapError::Validation(format!(
                "tile[{}]: position ({}, {}) out of range",
                i, tile.pos.x, tile.pos.y
            )));
        }
        if tile.pos.x % TILE_SIZE != 0 || tile.pos.y % TILE_SIZE != 0 {
            return Err(MapError::Validation(format!(
                "tile[{}]: position ({}, {}) is not grid aligned",
                i, tile.pos.x, tile.pos.y
            )));
        }
    }
    for (i, off) in record.offtiles.iter().enumerate() {
        if !in_coord_range(off.pos.x) || !in_coord_range(off.pos.y) {
            return Err(MapError::Validation(format!(
                "offtile[{}]: position ({}, {}) out of range",
                i, off.pos.x, off.pos.y
            )));
        }
    }
    Ok(())
}

/// Save a map, overwriting any existing file at `path`.
pub fn save_map<P: AsRef<Path>>(map: &TileMap, path: P) -> Result<(), MapError> {
    let record = MapFile {
        version: FORMAT_VERSION,
        tiles: map.tiles().to_vec(),
        offtiles: map.offtiles().to_vec(),
    };

    let config = ron::ser::PrettyConfig::new().indentor("  ".to_string());
    let ron_string = ron::ser::to_string_pretty(&record, config)?;

    // Compress with brotli (quality 6, window 22 - good balance of speed/ratio)
    let mut compressed = Vec::new();
    brotli::BrotliCompress(
        &mut Cursor::new(ron_string.as_bytes()),
        &mut compressed,
        &brotli::enc::BrotliEncoderParams {
            quality: 6,
            lgwin: 22,
            ..Default::default()
        },
    )
    .map_err(|e| {
        MapError::Io(std::io::Error::new(
            std::io::ErrorKind::Other,
            format!("brotli compression failed: {}", e),
        ))
    })?;

    fs::write(path, compressed)?;
    Ok(())
}

/// Load a map (supports both compressed and plain RON).
///
/// A file that does not exist yields an empty map; any other failure
/// is surfaced as a [`MapError`].
pub fn load_map<P: AsRef<Path>>(path: P) -> Result<TileMap, MapError> {
    let path = path.as_ref();
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(TileMap::new()),
        Err(e) => return Err(MapError::Io(e)),
    };

    // Detect format: RON files start with '(' or whitespace, brotli is binary
    let is_plain_ron = bytes
        .first()
        .map(|&b| b == b'(' || b.is_ascii_whitespace())
        .unwrap_or(false);

    let contents = if is_plain_ron {
        String::from_utf8(bytes).map_err(|e| {
            MapError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("invalid UTF-8: {}", e),
            ))
        })?
    } else {
        let mut decompressed = Vec::new();
        brotli::BrotliDecompress(&mut Cursor::new(&bytes), &mut decompressed).map_err(|e| {
            MapError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("brotli decompression failed: {}", e),
            ))
        })?;
        String::from_utf8(decompressed).map_err(|e| {
            MapError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("invalid UTF-8 after decompression: {}", e),
            ))
        })?
    };

    let record: MapFile = ron::from_str(&contents)?;
    validate(&record)?;

    Ok(TileMap::from_parts(record.tiles, record.offtiles))
}
