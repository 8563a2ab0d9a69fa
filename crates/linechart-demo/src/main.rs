// File: crates/linechart-demo/src/main.rs
// Summary: Demo loads value series from CSV, lays out a line chart, and writes the scene to an SVG.

use anyhow::{Context, Result};
use linechart_core::scene::{Scene, TextAnchor};
use linechart_core::theme::Rgba;
use linechart_core::types::{HEIGHT, WIDTH};
use linechart_core::{build_scene, highlight_segment, resolve_touch, LineChart};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    let mut chart = LineChart::new();

    match std::env::args().nth(1) {
        Some(raw) => {
            let path = PathBuf::from(&raw);
            let lines = load_csv_columns(&path)
                .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
            anyhow::ensure!(!lines.is_empty(), "no numeric columns in input");
            println!("Loaded {} series from {}", lines.len(), path.display());
            for line in lines {
                chart.add_line(line);
            }
        }
        None => {
            println!("No input file given; using built-in sample series");
            chart.add_line(sample_wave(60, 1.0));
            chart.add_line(sample_wave(60, 1.7));
        }
    }

    let layout = chart.layout(WIDTH, HEIGHT)?;
    println!(
        "Layout: plot {}x{} px, y ticks step {}",
        layout.plot.width(),
        layout.plot.height(),
        layout.y_ticks.step
    );

    let mut scene = build_scene(&chart, &layout);

    // Simulate a tap in the middle of the plot and show the highlight line.
    let touch_x = (layout.plot.left + layout.plot.right) / 2.0;
    let selection = resolve_touch(&chart, &layout, touch_x)?;
    println!(
        "Tap at x={touch_x:.1}px selects index {} with values {:?}",
        selection.index, selection.values
    );
    if let Some(seg) = highlight_segment(&chart, &layout, &selection) {
        scene.axes.push(seg);
    }

    let out = out_name("demo");
    std::fs::write(&out, scene_to_svg(&scene, WIDTH, HEIGHT))
        .with_context(|| format!("writing {}", out.display()))?;
    println!("Wrote {}", out.display());
    Ok(())
}

fn sample_wave(n: usize, freq: f64) -> Vec<f64> {
    (0..n)
        .map(|i| (i as f64 * 0.2 * freq).sin() * 30.0 + 40.0)
        .collect()
}

/// Produce output file name like target/out/linechart_<suffix>.svg
fn out_name(suffix: &str) -> PathBuf {
    let dir = PathBuf::from("target/out");
    std::fs::create_dir_all(&dir).ok();
    dir.join(format!("linechart_{suffix}.svg"))
}

/// Load each numeric CSV column as one value series. A header row is
/// detected automatically by csv; non-numeric cells become gaps that end the
/// read for that row.
fn load_csv_columns(path: &Path) -> Result<Vec<Vec<f64>>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.clone();
    println!("Headers: {:?}", headers);

    let mut columns: Vec<Vec<f64>> = vec![Vec::new(); headers.len()];
    for rec in rdr.records() {
        let rec = rec?;
        for (i, cell) in rec.iter().enumerate() {
            if let Ok(v) = cell.trim().parse::<f64>() {
                if let Some(col) = columns.get_mut(i) {
                    col.push(v);
                }
            }
        }
    }
    columns.retain(|c| !c.is_empty());
    Ok(columns)
}

fn css(c: Rgba) -> String {
    format!(
        "rgba({},{},{},{:.3})",
        c.r,
        c.g,
        c.b,
        f64::from(c.a) / 255.0
    )
}

/// Serialize the scene as a standalone SVG document.
fn scene_to_svg(scene: &Scene, width: f64, height: f64) -> String {
    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    );
    if let Some(bg) = scene.background {
        let _ = writeln!(
            svg,
            r#"  <rect width="{width}" height="{height}" fill="{}"/>"#,
            css(bg)
        );
    }
    for seg in scene.grid.iter().chain(&scene.axes) {
        let _ = writeln!(
            svg,
            r#"  <line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}" stroke-width="{}"/>"#,
            seg.from.x,
            seg.from.y,
            seg.to.x,
            seg.to.y,
            css(seg.color),
            seg.width
        );
    }
    for area in &scene.areas {
        let points: Vec<String> = area
            .points
            .iter()
            .map(|p| format!("{:.2},{:.2}", p.x, p.y))
            .collect();
        let _ = writeln!(
            svg,
            r#"  <polygon points="{}" fill="{}"/>"#,
            points.join(" "),
            css(area.fill)
        );
    }
    for line in &scene.lines {
        let points: Vec<String> = line
            .points
            .iter()
            .map(|p| format!("{:.2},{:.2}", p.x, p.y))
            .collect();
        let _ = writeln!(
            svg,
            r#"  <polyline points="{}" fill="none" stroke="{}" stroke-width="{}"/>"#,
            points.join(" "),
            css(line.color),
            line.width
        );
    }
    for dot in &scene.dots {
        let _ = writeln!(
            svg,
            r#"  <circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="{}"/>"#,
            dot.center.x,
            dot.center.y,
            dot.outer_radius / 2.0,
            css(dot.outer)
        );
        let _ = writeln!(
            svg,
            r#"  <circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="{}"/>"#,
            dot.center.x,
            dot.center.y,
            dot.inner_radius / 2.0,
            css(dot.inner)
        );
    }
    for label in &scene.labels {
        let anchor = match label.anchor {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        };
        let _ = writeln!(
            svg,
            r#"  <text x="{:.2}" y="{:.2}" text-anchor="{anchor}" font-size="{}" fill="{}">{}</text>"#,
            label.pos.x,
            label.pos.y,
            label.font_px,
            css(label.color),
            label.text
        );
    }
    svg.push_str("</svg>\n");
    svg
}
