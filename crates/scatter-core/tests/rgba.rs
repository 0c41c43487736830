// File: crates/scatter-core/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape and background pixels.

use scatter_core::{Dimensions, RenderOptions, ScatterChart, Theme, WeatherRecord};

#[test]
fn render_rgba8_buffer() {
    let chart = ScatterChart::new(vec![
        WeatherRecord { dew_point: 40.0, humidity: 0.5, cloud_cover: 0.2, date: None },
        WeatherRecord { dew_point: 60.0, humidity: 0.9, cloud_cover: 0.8, date: None },
    ]);
    let dims = Dimensions::from_viewport(400.0, 400.0).unwrap();
    let mut opts = RenderOptions::new(dims);
    opts.draw_labels = false; // avoid font variance

    let (px, w, h, stride) = chart.render_to_rgba8(&opts).expect("rgba render");
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Top-left pixel is the light theme background: opaque white.
    assert_eq!(&px[0..4], &[255, 255, 255, 255]);
}

#[test]
fn dark_theme_background() {
    let chart = ScatterChart::new(vec![WeatherRecord {
        dew_point: 50.0,
        humidity: 0.7,
        cloud_cover: 0.4,
        date: None,
    }]);
    let dims = Dimensions::from_viewport(400.0, 400.0).unwrap();
    let mut opts = RenderOptions::new(dims);
    opts.theme = Theme::dark();
    opts.draw_labels = false;

    let (px, _, _, _) = chart.render_to_rgba8(&opts).expect("rgba render");
    assert_eq!(&px[0..4], &[18, 18, 20, 255]);
}
