// File: crates/scatter-core/tests/layout.rs
// Purpose: Validate dimension math and the non-positive bounded area guard.

use scatter_core::{ChartError, Dimensions, Margin};

#[test]
fn viewport_produces_square_chart() {
    let dims = Dimensions::from_viewport(1400.0, 1000.0).unwrap();
    assert_eq!(dims.width, 900.0);
    assert_eq!(dims.height, 900.0);
}

#[test]
fn bounded_area_subtracts_opposing_margins() {
    let dims = Dimensions::from_viewport(1000.0, 1000.0).unwrap();
    // margins: top 10, right 10, bottom 50, left 50
    assert_eq!(dims.margin, Margin::new(10.0, 10.0, 50.0, 50.0));
    assert_eq!(dims.bounded_width(), 900.0 - 50.0 - 10.0);
    assert_eq!(dims.bounded_height(), 900.0 - 10.0 - 50.0);
}

#[test]
fn tiny_viewport_is_rejected_before_drawing() {
    // outer = 45, margins sum to 60 on each axis
    let err = Dimensions::from_viewport(50.0, 50.0).unwrap_err();
    assert!(matches!(err, ChartError::InvalidLayout { .. }));
}

#[test]
fn custom_margin_guard() {
    // left + right swallow the full width: zero bounded width
    assert!(Dimensions::with_margin(100.0, 100.0, Margin::new(0.0, 50.0, 0.0, 50.0)).is_err());
    assert!(Dimensions::with_margin(101.0, 101.0, Margin::new(0.0, 50.0, 0.0, 50.0)).is_ok());
}
