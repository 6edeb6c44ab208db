//! Rasterized content vs the content transform.
//!
//! Every surface pixel is pulled back through the content transform to the
//! logical pixel that would be drawn there. Each logical pixel must land on
//! exactly one surface pixel, and the logical top-left corner must land on
//! the corner the rotation sense predicts. A wrong translate, a missing half
//! turn, or swapped dimensions all show up as holes, double hits, or a
//! misplaced corner.

use zenstage::*;

/// Logical pixel that ends up on each surface pixel, row-major.
fn rasterize(frame: &ContentFrame) -> Vec<(u32, u32)> {
    let (sw, sh) = (frame.surface.width, frame.surface.height);
    let mut out = Vec::with_capacity((sw * sh) as usize);
    for y in 0..sh {
        for x in 0..sw {
            let (lx, ly) = frame
                .transform
                .apply_inverse(x as f64 + 0.5, y as f64 + 0.5);
            out.push((lx.floor() as u32, ly.floor() as u32));
        }
    }
    out
}

fn check_bijective(tag: &str, frame: &ContentFrame, failures: &mut Vec<String>) {
    let (lw, lh) = (frame.logical.width, frame.logical.height);
    let mut hits = vec![0u32; (lw * lh) as usize];
    for (lx, ly) in rasterize(frame) {
        if lx >= lw || ly >= lh {
            failures.push(format!("{tag}: ({lx},{ly}) outside logical {lw}x{lh}"));
            return;
        }
        hits[(ly * lw + lx) as usize] += 1;
    }
    if let Some(i) = hits.iter().position(|&n| n != 1) {
        failures.push(format!(
            "{tag}: logical pixel ({},{}) hit {} times",
            i as u32 % lw,
            i as u32 / lw,
            hits[i]
        ));
    }
}

/// Surface pixel showing logical (0, 0).
fn origin_pixel(frame: &ContentFrame) -> (u32, u32) {
    let sw = frame.surface.width;
    let pos = rasterize(frame)
        .iter()
        .position(|&p| p == (0, 0))
        .expect("logical origin drawn");
    (pos as u32 % sw, pos as u32 / sw)
}

const SURFACES: [(u32, u32); 6] = [(1, 1), (2, 1), (7, 3), (16, 9), (60, 45), (33, 58)];

#[test]
fn every_logical_pixel_drawn_once() {
    let mut failures = Vec::new();
    for &(w, h) in &SURFACES {
        let surface = Size::new(w, h);
        for physical in [Orientation::Landscape, Orientation::Portrait] {
            for logical in [Orientation::Landscape, Orientation::Portrait] {
                let frame = build_content_transform(surface, resolve(physical, logical));
                check_bijective(&format!("{w}x{h} {physical:?}->{logical:?}"), &frame, &mut failures);
            }
        }
    }
    assert!(failures.is_empty(), "{} failures:\n{}", failures.len(), failures.join("\n"));
}

#[test]
fn unrotated_origin_stays_top_left() {
    let frame = build_content_transform(Size::new(16, 9), RotationDecision::NONE);
    assert_eq!(origin_pixel(&frame), (0, 0));
}

#[test]
fn clockwise_origin_lands_bottom_left() {
    // Physical landscape, logical portrait: the viewer turns the device
    // clockwise, so the logical top edge runs up the physical left side.
    let frame = build_content_transform(
        Size::new(16, 9),
        resolve(Orientation::Landscape, Orientation::Portrait),
    );
    assert_eq!(frame.logical, Size::new(9, 16));
    assert_eq!(origin_pixel(&frame), (0, 8));
}

#[test]
fn counter_clockwise_origin_lands_top_right() {
    let frame = build_content_transform(
        Size::new(9, 16),
        resolve(Orientation::Portrait, Orientation::Landscape),
    );
    assert_eq!(frame.logical, Size::new(16, 9));
    assert_eq!(origin_pixel(&frame), (8, 0));
}

#[test]
fn logical_rows_become_surface_columns() {
    // With any rotation, one logical row fills exactly one surface column.
    for (physical, logical) in [
        (Orientation::Landscape, Orientation::Portrait),
        (Orientation::Portrait, Orientation::Landscape),
    ] {
        let frame = build_content_transform(Size::new(12, 5), resolve(physical, logical));
        let sw = frame.surface.width;
        let raster = rasterize(&frame);
        for x in 0..sw {
            let rows: Vec<u32> = (0..frame.surface.height)
                .map(|y| raster[(y * sw + x) as usize].1)
                .collect();
            assert!(
                rows.windows(2).all(|w| w[0] == w[1]),
                "{physical:?}->{logical:?} column {x}: {rows:?}"
            );
        }
    }
}
