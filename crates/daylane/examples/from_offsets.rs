//! Example: Laying out a day from raw offsets
//!
//! This example builds a layout directly from `(start, end)` minute offsets,
//! without parsing schedule text, and prints the geometry of every event.

use daylane::{
    DayBuilder,
    config::{AppConfig, DayConfig, GeometryConfig},
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Laying out a day from offsets...\n");

    // A day view from 09:00 to 21:00, two pixels per minute
    let config = AppConfig::new(DayConfig::new(9, 21), GeometryConfig::new(2.0, 2));
    let builder = DayBuilder::new(config);

    let offsets = [(30, 150), (540, 600), (560, 620), (610, 670)];
    let layout = builder.lay_out_offsets(&offsets)?;

    for (index, cluster) in layout.clusters().iter().enumerate() {
        println!(
            "cluster {index}: {} event(s) in {} column(s)",
            cluster.events().len(),
            cluster.column_count()
        );
    }

    println!();
    for placement in builder.place(&layout) {
        let geometry = placement.geometry();
        println!(
            "event {}: top {:.0}px, height {:.0}px, left {:.2}%, width {:.2}%",
            placement.index(),
            geometry.top(),
            geometry.height(),
            geometry.left(),
            geometry.width(),
        );
    }

    println!("\ncontainer height: {:.0}px", builder.container_height());
    Ok(())
}
