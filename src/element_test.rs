#![allow(clippy::clone_on_copy, clippy::float_cmp)]

use serde_json::json;
use uuid::Uuid;

use super::*;
use crate::consts::MM_TO_PX;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

// =============================================================
// PageElement serde
// =============================================================

#[test]
fn element_serde_roundtrip() {
    let e = PageElement { id: Uuid::new_v4(), x: 10.0, y: 20.0, width: 100.0, height: 50.0 };
    let json = serde_json::to_string(&e).unwrap();
    let back: PageElement = serde_json::from_str(&json).unwrap();
    assert_eq!(e, back);
}

#[test]
fn element_deserializes_from_store_shape() {
    let id = Uuid::new_v4();
    let value = json!({
        "id": id,
        "x": 12.5,
        "y": 0.0,
        "width": 40.0,
        "height": 25.0,
    });
    let e: PageElement = serde_json::from_value(value).unwrap();
    assert_eq!(e.id, id);
    assert_eq!(e.x, 12.5);
    assert_eq!(e.width, 40.0);
}

#[test]
fn element_missing_field_rejects() {
    let result = serde_json::from_value::<PageElement>(json!({
        "id": Uuid::new_v4(),
        "x": 1.0,
        "y": 2.0,
        "width": 3.0,
    }));
    assert!(result.is_err());
}

// =============================================================
// bounds_px
// =============================================================

#[test]
fn bounds_px_converts_every_field() {
    let e = PageElement { id: Uuid::new_v4(), x: 10.0, y: 20.0, width: 100.0, height: 50.0 };
    let b = e.bounds_px();
    assert!(approx_eq(b.left, 10.0 * MM_TO_PX));
    assert!(approx_eq(b.top, 20.0 * MM_TO_PX));
    assert!(approx_eq(b.width, 100.0 * MM_TO_PX));
    assert!(approx_eq(b.height, 50.0 * MM_TO_PX));
}

#[test]
fn bounds_px_zero_element_is_zero() {
    let e = PageElement { id: Uuid::new_v4(), x: 0.0, y: 0.0, width: 0.0, height: 0.0 };
    let b = e.bounds_px();
    assert_eq!(b.left, 0.0);
    assert_eq!(b.top, 0.0);
    assert_eq!(b.width, 0.0);
    assert_eq!(b.height, 0.0);
}

#[test]
fn bounds_px_negative_position() {
    let e = PageElement { id: Uuid::new_v4(), x: -5.0, y: -2.0, width: 10.0, height: 10.0 };
    let b = e.bounds_px();
    assert!(approx_eq(b.left, -5.0 * MM_TO_PX));
    assert!(approx_eq(b.top, -2.0 * MM_TO_PX));
}

#[test]
fn element_clone_and_copy() {
    let e = PageElement { id: Uuid::new_v4(), x: 1.0, y: 2.0, width: 3.0, height: 4.0 };
    let b = e;
    let c = e.clone();
    assert_eq!(e, b);
    assert_eq!(e, c);
}
