//! Find frontiers in a synthetic floor plan.
//!
//! ```text
//! RUST_LOG=debug cargo run --example find_frontiers -- [config.yaml]
//! ```

use std::path::Path;

use vastu_frontier::{Cell, FinderConfig, FrontierFinder, GridBuffer};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args().nth(1) {
        Some(path) => FinderConfig::from_yaml_file(Path::new(&path))?,
        None => FinderConfig::load_or_default()?,
    };
    config.validate()?;

    // 6 m x 8 m at the configured resolution, one interior wall with a doorway
    let cell_size = config.ray_casting.grid_cell_size;
    let rows = (6.0 / cell_size).round() as usize;
    let cols = (8.0 / cell_size).round() as usize;
    let map = GridBuffer::from_fn(rows, cols, |cell| {
        let border = cell.row == 0 || cell.col == 0 || cell.row + 1 == rows || cell.col + 1 == cols;
        let wall = cell.col == cols / 2 && cell.row.abs_diff(rows / 3) > rows / 10;
        if border || wall { 0u8 } else { 254 }
    });

    let finder = FrontierFinder::new(config)?;
    let viewpoint = Cell::new(rows / 2, cols / 4);
    log::info!("Map {}x{} cells, viewpoint ({}, {})", rows, cols, viewpoint.row, viewpoint.col);
    let detection = finder.detect(viewpoint, &map)?;

    if rows <= 80 && cols <= 120 {
        print!("{}", detection.visibility.render());
    }
    println!(
        "Viewpoint ({}, {}): {} frontier cells, {} regions",
        viewpoint.row,
        viewpoint.col,
        detection.mask.count(),
        detection.regions.len()
    );
    for (i, region) in detection.regions.iter().enumerate() {
        let center = region.metric_center(cell_size);
        println!(
            "  [{}] {:4} cells, center ({:.2}, {:.2}) m",
            i,
            region.len(),
            center.x,
            center.y
        );
    }

    Ok(())
}
