//! SVG visualization of a layout frame.
//!
//! Generates a vertical sequence of annotated panels: viewport with the
//! centered container, container split into UI band and surface, then the
//! content in its own logical orientation.
//!
//! # Example
//!
//! ```
//! use zenstage::{LayoutConfig, Orientation, Viewport, plan, svg::render_frame_svg};
//!
//! let frame = plan(Viewport::new(400.0, 800.0), &LayoutConfig::new(Orientation::Landscape)).unwrap();
//! let svg = render_frame_svg(&frame);
//! assert!(svg.starts_with("<svg"));
//! ```

use crate::constraint::{Rect, Size};
use crate::plan::LayoutFrame;

/// Maximum pixel width for any panel in the SVG output.
const MAX_PANEL_W: f64 = 300.0;
/// Maximum pixel height for any panel in the SVG output.
const MAX_PANEL_H: f64 = 200.0;
/// Vertical gap between panels, arrow included.
const PANEL_GAP: f64 = 50.0;
/// Horizontal margin.
const MARGIN_X: f64 = 50.0;
/// Top margin for first panel.
const MARGIN_TOP: f64 = 30.0;
/// Height of label text area above each panel.
const LABEL_H: f64 = 22.0;
/// Height of annotation text below each panel.
const ANNOTATION_H: f64 = 18.0;

/// One region drawn inside a panel, in the panel's own pixel space.
struct Region {
    rect: Rect,
    class: &'static str,
    text: Option<&'static str>,
}

/// A single panel.
struct Panel {
    label: String,
    outer: Size,
    regions: Vec<Region>,
    /// Point marking the logical top edge, in outer pixel space.
    top_marker: Option<(f64, f64)>,
    annotation: String,
}

/// Render a complete SVG document for one layout frame.
pub fn render_frame_svg(frame: &LayoutFrame) -> String {
    let panels = build_panels(frame);
    render_panels(&panels)
}

fn build_panels(frame: &LayoutFrame) -> Vec<Panel> {
    let viewport = Size::new(frame.viewport.width as u32, frame.viewport.height as u32);
    let surface = frame.surface.rect;
    let content = &frame.content;

    let viewport_panel = Panel {
        label: format!("Viewport  {}×{}", frame.viewport.width, frame.viewport.height),
        outer: viewport,
        regions: vec![Region {
            rect: frame.container_rect,
            class: "container",
            text: None,
        }],
        top_marker: None,
        annotation: format!(
            "{}, container at ({}, {})",
            frame.physical.name(),
            frame.container_rect.x,
            frame.container_rect.y
        ),
    };

    // Logical top-center, carried through the content transform into the container.
    let (tx, ty) = content.transform.apply(content.logical.width as f64 / 2.0, 0.0);
    let container_panel = Panel {
        label: format!("Container  {}×{}", frame.container.width, frame.container.height),
        outer: frame.container,
        regions: vec![
            Region {
                rect: frame.ui.band,
                class: "band",
                text: Some("UI"),
            },
            Region {
                rect: surface,
                class: "surface",
                text: None,
            },
        ],
        top_marker: Some((surface.x + tx, surface.y + ty)),
        annotation: format!(
            "surface {}×{} {:?}, ui {}",
            frame.surface.size.width,
            frame.surface.size.height,
            frame.surface.anchor,
            frame.ui.transform
        ),
    };

    let content_panel = Panel {
        label: format!("Content  {}×{}", content.logical.width, content.logical.height),
        outer: content.logical,
        regions: vec![Region {
            rect: Rect::from_size(content.logical),
            class: "surface",
            text: None,
        }],
        top_marker: Some((content.logical.width as f64 / 2.0, 0.0)),
        annotation: match frame.decision.rotation() {
            Some(sense) => format!("{} drawn {:?}", frame.logical.name(), sense),
            None => format!("{}, no rotation", frame.logical.name()),
        },
    };

    vec![viewport_panel, container_panel, content_panel]
}

/// Scale a Size to fit within MAX_PANEL_W × MAX_PANEL_H, preserving aspect ratio.
fn scale_to_fit(size: Size) -> (f64, f64, f64) {
    let w = size.width as f64;
    let h = size.height as f64;
    if w == 0.0 || h == 0.0 {
        return (1.0, 1.0, 1.0);
    }
    let scale = (MAX_PANEL_W / w).min(MAX_PANEL_H / h);
    (w * scale, h * scale, scale)
}

fn render_panels(panels: &[Panel]) -> String {
    let per_panel = LABEL_H + MAX_PANEL_H + ANNOTATION_H;
    let total_h = 2.0 * MARGIN_TOP
        + per_panel * panels.len() as f64
        + PANEL_GAP * panels.len().saturating_sub(1) as f64;
    let total_w = MAX_PANEL_W + 2.0 * MARGIN_X;

    let mut svg = String::with_capacity(4096);

    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        total_w as u32, total_h as u32, total_w, total_h
    ));
    svg.push('\n');

    // Light/dark mode via prefers-color-scheme
    svg.push_str(
        r##"<style>
  text { font-family: "Consolas", "DejaVu Sans Mono", "Courier New", monospace; }
  .label { font-size: 13px; font-weight: bold; fill: #333; }
  .annotation { font-size: 11px; fill: #666; }
  .region-text { font-size: 11px; fill: #444; }
  .outer { fill: #e8e8e8; stroke: #999; stroke-width: 1; }
  .container { fill: #d0d0d0; stroke: #777; stroke-width: 1; }
  .surface { fill: #6ba3d6; stroke: #2c6faa; stroke-width: 1.5; }
  .band { fill: #b8d4ee; stroke: #7baed0; stroke-width: 1; stroke-dasharray: 4,2; }
  .top { fill: #d6563c; }
  .arrow { stroke: #666; stroke-width: 1.5; fill: none; marker-end: url(#arrowhead); }
  .arrowhead { fill: #666; }
  @media (prefers-color-scheme: dark) {
    .label { fill: #e0e0e0; }
    .annotation, .region-text { fill: #aaa; }
    .outer { fill: #2d2d2d; stroke: #555; }
    .container { fill: #3a3a3a; stroke: #666; }
    .surface { fill: #3a72a4; stroke: #5a9fd4; }
    .band { fill: #2a4a65; stroke: #4a7a9e; }
    .arrow { stroke: #888; }
    .arrowhead { fill: #888; }
  }
</style>
"##,
    );

    svg.push_str(
        r##"<defs>
  <marker id="arrowhead" markerWidth="8" markerHeight="6" refX="8" refY="3" orient="auto">
    <polygon points="0 0, 8 3, 0 6" class="arrowhead"/>
  </marker>
</defs>
"##,
    );

    let mut y = MARGIN_TOP;
    let center_x = total_w / 2.0;

    for (i, panel) in panels.iter().enumerate() {
        svg.push_str(&format!(
            r#"<text x="{}" y="{}" class="label" text-anchor="middle">{}</text>"#,
            center_x,
            y + 14.0,
            escape_xml(&panel.label)
        ));
        svg.push('\n');
        y += LABEL_H;

        let (pw, ph, scale) = scale_to_fit(panel.outer);
        let px = center_x - pw / 2.0;
        let py = y;

        svg.push_str(&format!(
            r#"<rect x="{px:.1}" y="{py:.1}" width="{pw:.1}" height="{ph:.1}" class="outer" rx="2"/>"#
        ));
        svg.push('\n');

        for region in &panel.regions {
            let rx = px + region.rect.x * scale;
            let ry = py + region.rect.y * scale;
            let rw = region.rect.width * scale;
            let rh = region.rect.height * scale;
            svg.push_str(&format!(
                r#"<rect x="{rx:.1}" y="{ry:.1}" width="{rw:.1}" height="{rh:.1}" class="{}"/>"#,
                region.class
            ));
            svg.push('\n');
            if let Some(text) = region.text {
                svg.push_str(&format!(
                    r#"<text x="{:.1}" y="{:.1}" class="region-text" text-anchor="middle" dominant-baseline="middle">{}</text>"#,
                    rx + rw / 2.0,
                    ry + rh / 2.0,
                    escape_xml(text)
                ));
                svg.push('\n');
            }
        }

        if let Some((mx, my)) = panel.top_marker {
            svg.push_str(&format!(
                r#"<circle cx="{:.1}" cy="{:.1}" r="4" class="top"/>"#,
                px + mx * scale,
                py + my * scale
            ));
            svg.push('\n');
        }

        y += MAX_PANEL_H;
        if !panel.annotation.is_empty() {
            svg.push_str(&format!(
                r#"<text x="{}" y="{}" class="annotation" text-anchor="middle">{}</text>"#,
                center_x,
                y + 13.0,
                escape_xml(&panel.annotation)
            ));
            svg.push('\n');
        }
        y += ANNOTATION_H;

        if i + 1 < panels.len() {
            svg.push_str(&format!(
                r#"<line x1="{cx}" y1="{:.1}" x2="{cx}" y2="{:.1}" class="arrow"/>"#,
                y + 8.0,
                y + PANEL_GAP - 8.0,
                cx = center_x
            ));
            svg.push('\n');
            y += PANEL_GAP;
        }
    }

    svg.push_str("</svg>\n");
    svg
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
