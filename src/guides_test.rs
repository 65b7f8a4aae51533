#![allow(clippy::clone_on_copy, clippy::float_cmp)]

use uuid::Uuid;

use super::*;
use crate::align::{HorizontalAlignment, VerticalAlignment};
use crate::points::SnapKind;

fn make_horizontal(snap_value: f64, element_id: Uuid) -> HorizontalAlignment {
    HorizontalAlignment {
        kind: SnapKind::Left,
        corrected_x: snap_value,
        distance: 3.0,
        snap_value,
        element_id,
    }
}

fn make_vertical(snap_value: f64, element_id: Uuid) -> VerticalAlignment {
    VerticalAlignment {
        kind: SnapKind::Top,
        corrected_y: snap_value,
        distance: 2.0,
        snap_value,
        element_id,
    }
}

// --- Derivation ---

#[test]
fn horizontal_alignment_yields_vertical_guide() {
    let id = Uuid::new_v4();
    let m = AlignmentMatch { horizontal: Some(make_horizontal(120.0, id)), vertical: None };

    let guides = guides_for(&m);
    assert_eq!(guides.len(), 1);
    assert_eq!(guides[0].orientation, GuideOrientation::Vertical);
    assert_eq!(guides[0].position, 120.0);
    assert!(guides[0].visible);
    assert_eq!(guides[0].element_id, id);
}

#[test]
fn vertical_alignment_yields_horizontal_guide() {
    let id = Uuid::new_v4();
    let m = AlignmentMatch { horizontal: None, vertical: Some(make_vertical(64.0, id)) };

    let guides = guides_for(&m);
    assert_eq!(guides.len(), 1);
    assert_eq!(guides[0].orientation, GuideOrientation::Horizontal);
    assert_eq!(guides[0].position, 64.0);
}

#[test]
fn both_axes_yield_two_guides_x_first() {
    let a = Uuid::new_v4();
    let b = Uuid::new_v4();
    let m = AlignmentMatch {
        horizontal: Some(make_horizontal(120.0, a)),
        vertical: Some(make_vertical(64.0, b)),
    };

    let guides = guides_for(&m);
    assert_eq!(guides.len(), 2);
    assert_eq!(guides[0].orientation, GuideOrientation::Vertical);
    assert_eq!(guides[0].element_id, a);
    assert_eq!(guides[1].orientation, GuideOrientation::Horizontal);
    assert_eq!(guides[1].element_id, b);
}

#[test]
fn empty_match_yields_no_guides() {
    assert!(guides_for(&AlignmentMatch::default()).is_empty());
}

// --- Serde ---

#[test]
fn orientation_serializes_lowercase() {
    let v = serde_json::to_value(GuideOrientation::Vertical).unwrap();
    assert_eq!(v, "vertical");
    let h = serde_json::to_value(GuideOrientation::Horizontal).unwrap();
    assert_eq!(h, "horizontal");
}

#[test]
fn guide_roundtrips_through_serde() {
    let guide = SnapGuide {
        orientation: GuideOrientation::Vertical,
        position: 42.5,
        visible: true,
        element_id: Uuid::new_v4(),
    };
    let json = serde_json::to_string(&guide).unwrap();
    let back: SnapGuide = serde_json::from_str(&json).unwrap();
    assert_eq!(back, guide);
}
