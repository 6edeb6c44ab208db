//! End-to-end layout scenarios and sweeps over viewports and configs.

use zenstage::*;

const VIEWPORTS: [(f64, f64); 14] = [
    (1920.0, 1080.0),
    (1366.0, 768.0),
    (1280.0, 800.0),
    (1024.0, 1024.0),
    (800.0, 600.0),
    (640.0, 480.0),
    (3840.0, 1600.0),
    (400.0, 800.0),
    (375.0, 667.0),
    (390.0, 844.0),
    (768.0, 1024.0),
    (1080.0, 2400.0),
    (333.3, 777.7),
    (1200.5, 700.25),
];

fn configs() -> Vec<LayoutConfig> {
    let mut out = Vec::new();
    for logical in [Orientation::Landscape, Orientation::Portrait] {
        out.push(LayoutConfig::new(logical));
        out.push(LayoutConfig::new(logical).max_width(640.0).max_height(900.0));
        out.push(
            LayoutConfig::new(logical)
                .aspect_landscape(4.0 / 3.0)
                .aspect_portrait(3.0 / 4.0),
        );
        out.push(LayoutConfig::new(logical).aspect_landscape(2.39).aspect_portrait(0.5));
    }
    out
}

#[test]
fn wide_desktop_clamps_to_max_width() {
    let frame = plan(Viewport::new(1920.0, 1080.0), &LayoutConfig::default()).unwrap();
    assert_eq!(frame.container, Size::new(1280, 720));
    assert_eq!(frame.surface.size, Size::new(960, 720));
    assert!(!frame.decision.needs_rotation);
    assert_eq!(frame.readout.to_string(), "Canvas: 960px × 720px :: 75%");
}

#[test]
fn phone_portrait_rotates_landscape_content() {
    let frame = plan(Viewport::new(400.0, 800.0), &LayoutConfig::default()).unwrap();
    assert_eq!(frame.physical, Orientation::Portrait);
    assert!(frame.decision.needs_rotation);
    assert_eq!(frame.decision.rotation(), Some(RotationSense::CounterClockwise));
    assert_eq!(frame.content.logical.width, frame.surface.size.height);
    assert_eq!(frame.content.logical.height, frame.surface.size.width);
}

#[test]
fn sweep_layout_properties() {
    let mut failures = Vec::new();

    for config in configs() {
        for &(vw, vh) in &VIEWPORTS {
            let tag = format!("{vw}x{vh} {config:?}");
            let frame = match plan(Viewport::new(vw, vh), &config) {
                Ok(f) => f,
                Err(e) => {
                    failures.push(format!("{tag}: {e}"));
                    continue;
                }
            };

            // Container centered inside the viewport.
            let r = frame.container_rect;
            if r.x < 0.0 || r.y < 0.0 || r.right() > vw || r.bottom() > vh {
                failures.push(format!("{tag}: container {r:?} outside viewport"));
            }
            if (r.x - (vw - r.right())).abs() > 1e-9 || (r.y - (vh - r.bottom())).abs() > 1e-9 {
                failures.push(format!("{tag}: container {r:?} not centered"));
            }

            // Rotation iff orientations differ.
            let differ = frame.physical != frame.logical;
            if frame.decision.needs_rotation != differ {
                failures.push(format!("{tag}: rotation {:?}", frame.decision));
            }

            // Content covers the surface exactly.
            let covered = frame
                .content
                .transform
                .map_rect(Rect::from_size(frame.content.logical));
            if covered != Rect::from_size(frame.surface.size) {
                failures.push(format!("{tag}: content maps to {covered:?}"));
            }
            let expected_logical = if differ {
                frame.surface.size.transposed()
            } else {
                frame.surface.size
            };
            if frame.content.logical != expected_logical {
                failures.push(format!("{tag}: logical {:?}", frame.content.logical));
            }

            // UI band and surface tile the container.
            let container = Rect::from_size(frame.container);
            let band = frame.ui.transform.map_rect(frame.ui.rect);
            if band != frame.ui.band {
                failures.push(format!("{tag}: ui lands on {band:?}, band {:?}", frame.ui.band));
            }
            if band.overlaps(&frame.surface.rect) {
                failures.push(format!("{tag}: ui band overlaps surface"));
            }
            if !container.contains_rect(&band) || !container.contains_rect(&frame.surface.rect) {
                failures.push(format!("{tag}: region escapes container"));
            }
            let area = band.width * band.height + frame.surface.rect.width * frame.surface.rect.height;
            if area != container.width * container.height {
                failures.push(format!("{tag}: band + surface area {area}"));
            }

            // Readout describes the surface actually placed.
            if frame.readout.size != frame.surface.size {
                failures.push(format!("{tag}: readout {:?}", frame.readout));
            }
        }
    }

    assert!(failures.is_empty(), "{} failures:\n{}", failures.len(), failures.join("\n"));
}

#[test]
fn toggling_twice_is_identity_across_viewports() {
    for &(vw, vh) in &VIEWPORTS {
        let mut toggle = ToggleController::default();
        let before = plan(Viewport::new(vw, vh), toggle.config()).unwrap();
        toggle.toggle();
        let flipped = plan(Viewport::new(vw, vh), toggle.config()).unwrap();
        toggle.toggle();
        let after = plan(Viewport::new(vw, vh), toggle.config()).unwrap();

        assert_eq!(before, after, "{vw}x{vh}");
        // Sizing depends only on the physical orientation.
        assert_eq!(before.container, flipped.container, "{vw}x{vh}");
        assert_eq!(before.surface, flipped.surface, "{vw}x{vh}");
        assert_ne!(before.decision, flipped.decision, "{vw}x{vh}");
    }
}

#[test]
fn degenerate_viewports_never_plan() {
    for (vw, vh) in [(0.0, 0.0), (0.0, 600.0), (800.0, -1.0), (f64::NAN, 600.0), (f64::INFINITY, 1.0)] {
        let err = plan(Viewport::new(vw, vh), &LayoutConfig::default()).unwrap_err();
        assert!(
            matches!(err, LayoutError::DegenerateViewport { .. }),
            "{vw}x{vh}: {err:?}"
        );
    }
}
