//! Plain-text export of the visible tile set

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::algorithm::executor::GrowthEngine;
use crate::io::error::{Result, TilingError};
use crate::spatial::prototile::{Corner, Decoration};
use crate::spatial::tile::TileInstance;

/// Write one record per visible tile to `path`
///
/// Each record carries the prototile name, the rotation, the four corner
/// coordinates in corner order and (when a decoration is selected) the four
/// decoration anchor points. Coordinates print with four decimals, enough
/// to reconstruct the pattern at pixel precision.
///
/// # Errors
///
/// Returns [`TilingError::FileSystem`] when the file cannot be created or
/// written.
pub fn export_tile_report(engine: &GrowthEngine, path: &Path) -> Result<()> {
    let file_error = |operation: &'static str| {
        move |source: std::io::Error| TilingError::FileSystem {
            path: path.to_path_buf(),
            operation,
            source,
        }
    };

    let file = File::create(path).map_err(file_error("create"))?;
    let mut writer = BufWriter::new(file);

    let settings = engine.settings();
    writeln!(
        writer,
        "# pentile {}x{} scale={} seed={} decoration={}",
        settings.width,
        settings.height,
        settings.scale,
        settings.seed,
        settings.decoration.name(),
    )
    .map_err(file_error("write"))?;

    for tile in engine.visible_tiles() {
        writeln!(writer, "{}", tile_record(tile)).map_err(file_error("write"))?;
    }

    writer.flush().map_err(file_error("flush"))
}

fn tile_record(tile: &TileInstance) -> String {
    let mut record = format!("{} rot={:.4}", tile.kind.name(), tile.rotation);
    for corner in Corner::ALL {
        let point = tile.corner(corner);
        record.push_str(&format!(" {:.4},{:.4}", point[0], point[1]));
    }
    if tile.decoration != Decoration::None {
        if let Some(anchors) = tile.decor_anchors() {
            record.push_str(" |");
            for point in anchors {
                record.push_str(&format!(" {:.4},{:.4}", point[0], point[1]));
            }
        }
    }
    record
}
