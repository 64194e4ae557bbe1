// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lay out a small tree, draw it headlessly and print it as SVG.
//!
//! Each arc is listed with its angles in degrees and its radii, then the whole
//! chart is written as an SVG document using Kurbo paths.
//!
//! Run:
//! - `cargo run -p understory_demos --example sunburst_basics > chart.svg`
//! - `RUST_LOG=understory_sunburst=debug cargo run -p understory_demos --example sunburst_basics`

use std::fmt::Write as _;

use kurbo::{Point, Size};
use tracing_subscriber::EnvFilter;
use understory_partition::Record;
use understory_sunburst::{RecordingSurface, Sunburst, SunburstOptions};

fn disk_usage() -> Record {
    Record::branch(
        "home",
        [
            Record::branch(
                "src",
                [
                    Record::leaf("main.rs", 12.0),
                    Record::leaf("lib.rs", 30.0),
                    Record::branch(
                        "ui",
                        [Record::leaf("view.rs", 8.0), Record::leaf("paint.rs", 5.0)],
                    ),
                ],
            ),
            Record::branch(
                "assets",
                [Record::leaf("logo.png", 40.0), Record::leaf("font.ttf", 25.0)],
            ),
            Record::leaf("README.md", 4.0),
        ],
    )
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let surface = RecordingSurface::new(Size::new(480.0, 480.0));
    let chart = Sunburst::new(surface, disk_usage(), SunburstOptions::default())?;

    for node in chart.layout() {
        let Some(shape) = chart.arc_shape(node.id) else {
            continue;
        };
        eprintln!(
            "{indent}{name:<10} {a0:>6.1}°..{a1:>6.1}°  r {r0:>6.1}..{r1:>6.1}",
            indent = "  ".repeat(node.depth),
            name = node.name.as_deref().unwrap_or("?"),
            a0 = shape.start_angle.to_degrees(),
            a1 = shape.end_angle.to_degrees(),
            r0 = shape.inner_radius,
            r1 = shape.outer_radius,
        );
    }

    let view = chart.surface().view_box();
    let mut svg = String::new();
    writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}">"#,
        view.x0,
        view.y0,
        view.width(),
        view.height()
    )?;
    for arc in chart.surface().arcs() {
        if arc.shape.is_empty() {
            continue;
        }
        let c = arc.fill.to_rgba8();
        writeln!(
            svg,
            r##"  <path d="{}" fill="#{:02x}{:02x}{:02x}" stroke="white"/>"##,
            arc.shape.path(Point::ORIGIN, 0.1).to_svg(),
            c.r,
            c.g,
            c.b
        )?;
    }
    svg.push_str("</svg>\n");
    print!("{svg}");
    Ok(())
}
