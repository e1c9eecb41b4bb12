//! Standalone SVG serialization of a [`Scene`].
//!
//! The document carries its own stylesheet and uses presentation attributes
//! for fills and strokes, so it renders the same in a browser, in an `<img>`
//! and in resvg.

use crate::scene::{fmt_num, Scene, GRADIENT_ID};
use std::fmt::Write;

/// Escape text for use in XML character data and attribute values.
pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// CSS shared by the standalone document and the live chart.
pub fn stylesheet(scene: &Scene) -> String {
    format!(
        "text{{font-family:{font};font-size:12px;fill:#333}}\
         .axis text{{font-size:11px}}\
         .legend .legend-title{{font-weight:600}}\
         .maxLine{{fill:none;stroke:{max};stroke-width:1.5}}\
         .minLine{{fill:none;stroke:{min};stroke-width:1.5;opacity:0.9}}",
        font = scene.style.font_family,
        max = scene.style.max_line_color,
        min = scene.style.min_line_color,
    )
}

/// Serialize `scene` as a complete SVG document.
pub fn render_svg(scene: &Scene) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_svg(&mut out, scene);
    log::debug!(
        "[TMX] svg: {} cells, {} bytes",
        scene.cells.len(),
        out.len()
    );
    out
}

fn write_svg(out: &mut String, scene: &Scene) -> std::fmt::Result {
    let (w, h) = (fmt_num(scene.width), fmt_num(scene.height));
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
    )?;
    writeln!(out, "<title>{}</title>", escape_xml(&scene.title))?;
    writeln!(out, "<style>{}</style>", escape_xml(&stylesheet(scene)))?;

    writeln!(out, "<defs>")?;
    writeln!(
        out,
        r#"<linearGradient id="{GRADIENT_ID}" x1="0%" x2="0%" y1="100%" y2="0%">"#
    )?;
    for stop in &scene.legend.stops {
        writeln!(
            out,
            r#"<stop offset="{}%" stop-color="{}"/>"#,
            fmt_num(stop.offset * 100.0),
            stop.color
        )?;
    }
    writeln!(out, "</linearGradient>")?;
    writeln!(out, "</defs>")?;

    let (ox, oy) = scene.origin;
    writeln!(
        out,
        r#"<g transform="translate({},{})">"#,
        fmt_num(ox),
        fmt_num(oy)
    )?;

    writeln!(out, r#"<g class="axis">"#)?;
    for tick in &scene.year_ticks {
        writeln!(
            out,
            r#"<text x="{}" y="{}" text-anchor="middle">{}</text>"#,
            fmt_num(tick.x),
            fmt_num(tick.y),
            escape_xml(&tick.label)
        )?;
    }
    writeln!(out, "</g>")?;
    writeln!(out, r#"<g class="axis">"#)?;
    for tick in &scene.month_ticks {
        writeln!(
            out,
            r#"<text x="{}" y="{}" dy="0.32em" text-anchor="end">{}</text>"#,
            fmt_num(tick.x),
            fmt_num(tick.y),
            escape_xml(&tick.label)
        )?;
    }
    writeln!(out, "</g>")?;

    let radius = fmt_num(scene.style.corner_radius);
    for mark in &scene.cells {
        writeln!(
            out,
            r#"<g class="cellG" transform="translate({},{})">"#,
            fmt_num(mark.x),
            fmt_num(mark.y)
        )?;
        writeln!(
            out,
            r#"<rect class="cell" width="{}" height="{}" rx="{radius}" ry="{radius}" fill="{}" stroke="{}"/>"#,
            fmt_num(mark.width),
            fmt_num(mark.height),
            mark.fill,
            escape_xml(&scene.style.cell_stroke)
        )?;
        if let Some(spark) = &mark.sparkline {
            writeln!(out, r#"<g class="sparkline">"#)?;
            writeln!(
                out,
                r#"<path class="maxLine" d="{}" fill="none" stroke="{}" stroke-width="1.5"/>"#,
                spark.max_path, scene.style.max_line_color
            )?;
            writeln!(
                out,
                r#"<path class="minLine" d="{}" fill="none" stroke="{}" stroke-width="1.5" opacity="0.9"/>"#,
                spark.min_path, scene.style.min_line_color
            )?;
            writeln!(out, "</g>")?;
        }
        writeln!(out, "</g>")?;
    }
    writeln!(out, "</g>")?;

    let legend = &scene.legend;
    writeln!(
        out,
        r#"<g class="legend" transform="translate({},{})">"#,
        fmt_num(legend.x),
        fmt_num(legend.y)
    )?;
    writeln!(
        out,
        r#"<rect width="{}" height="{}" rx="{radius}" ry="{radius}" fill="url(#{GRADIENT_ID})"/>"#,
        fmt_num(legend.width),
        fmt_num(legend.height)
    )?;
    for tick in &legend.ticks {
        writeln!(
            out,
            r##"<line x1="{x}" x2="{x2}" y1="{y}" y2="{y}" stroke="#333"/>"##,
            x = fmt_num(tick.x),
            x2 = fmt_num(tick.x + 6.0),
            y = fmt_num(tick.y)
        )?;
        writeln!(
            out,
            r#"<text x="{}" y="{}" dy="0.32em">{}</text>"#,
            fmt_num(tick.x + 9.0),
            fmt_num(tick.y),
            escape_xml(&tick.label)
        )?;
    }
    writeln!(
        out,
        r#"<text class="legend-title" x="0" y="-10" font-weight="600">{}</text>"#,
        escape_xml(&legend.title)
    )?;
    writeln!(out, "</g>")?;
    write!(out, "</svg>")
}
