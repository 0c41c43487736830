// File: crates/scatter-core/src/chart.rs
// Summary: Scatter chart model with Skia raster and SVG rendering pipelines.

use std::path::Path;

use skia_safe as skia;
use tracing::debug;

use crate::error::{ChartError, Result};
use crate::layout::Dimensions;
use crate::record::{Channels, WeatherRecord};
use crate::scale::{build_scales, LinearScale, Scales, TICK_COUNT};
use crate::theme::Theme;

pub struct RenderOptions {
    pub dimensions: Dimensions,
    pub theme: Theme,
    pub dot_radius: f64,
    pub draw_labels: bool,
}

impl RenderOptions {
    pub fn new(dimensions: Dimensions) -> Self {
        Self {
            dimensions,
            theme: Theme::light(),
            dot_radius: 5.0,
            draw_labels: true,
        }
    }
}

pub struct ScatterChart {
    pub records: Vec<WeatherRecord>,
    pub channels: Channels,
    pub x_caption: String,
    pub y_caption: String,
}

impl ScatterChart {
    pub fn new(records: Vec<WeatherRecord>) -> Self {
        Self {
            records,
            channels: Channels::default(),
            x_caption: "Dew Point (°F)".to_string(),
            y_caption: "Humidity (Relative)".to_string(),
        }
    }

    pub fn with_captions(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.x_caption = x.into();
        self.y_caption = y.into();
        self
    }

    /// Scales derived fresh from the current dataset and channel config.
    pub fn scales(&self, dims: &Dimensions) -> Result<Scales> {
        build_scales(&self.records, self.channels, dims)
    }

    /// Render the chart to a PNG at `path` using a CPU raster surface.
    pub fn render_to_png(&self, opts: &RenderOptions, path: impl AsRef<Path>) -> Result<()> {
        let data = self.render_to_png_bytes(opts)?;
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, data)?;
        Ok(())
    }

    /// Render the chart and return encoded PNG bytes.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = self.render_to_surface(opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| ChartError::Render("encode PNG failed".to_string()))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the chart into an RGBA8 pixel buffer.
    /// Returns `(pixels, width, height, stride)`.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, i32, i32, usize)> {
        let mut surface = self.render_to_surface(opts)?;
        let w = surface.width();
        let h = surface.height();
        let info = skia::ImageInfo::new(
            (w, h),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Premul,
            None,
        );
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(ChartError::Render("read_pixels failed".to_string()));
        }
        Ok((pixels, w, h, stride))
    }

    /// Render the chart as an SVG document at `path`.
    pub fn render_to_svg(&self, opts: &RenderOptions, path: impl AsRef<Path>) -> Result<()> {
        let svg = self.render_to_svg_string(opts)?;
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, svg)?;
        Ok(())
    }

    // ---- raster pipeline ----------------------------------------------------

    fn render_to_surface(&self, opts: &RenderOptions) -> Result<skia::Surface> {
        let scales = self.scales(&opts.dimensions)?;
        let dims = &opts.dimensions;
        let w = dims.width.ceil() as i32;
        let h = dims.height.ceil() as i32;

        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or_else(|| ChartError::Render("failed to create raster surface".to_string()))?;
        let canvas = surface.canvas();
        canvas.clear(opts.theme.background);

        canvas.save();
        canvas.translate((dims.margin.left as f32, dims.margin.top as f32));
        self.draw_marks(canvas, &scales, opts);
        self.draw_axes(canvas, &scales, opts);
        canvas.restore();

        debug!(marks = self.records.len(), w, h, "rendered scatter surface");
        Ok(surface)
    }

    fn draw_marks(&self, canvas: &skia::Canvas, scales: &Scales, opts: &RenderOptions) {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Fill);

        // One circle per record, in dataset order.
        for r in &self.records {
            let cx = scales.x.map(self.channels.x.value(r)) as f32;
            let cy = scales.y.map(self.channels.y.value(r)) as f32;
            let fill = scales.color.map(self.channels.color.value(r));
            paint.set_color(skia::Color::from_argb(255, fill.r, fill.g, fill.b));
            canvas.draw_circle((cx, cy), opts.dot_radius as f32, &paint);
        }
    }

    fn draw_axes(&self, canvas: &skia::Canvas, scales: &Scales, opts: &RenderOptions) {
        let dims = &opts.dimensions;
        let bw = dims.bounded_width() as f32;
        let bh = dims.bounded_height() as f32;

        let mut axis_paint = skia::Paint::default();
        axis_paint.set_color(opts.theme.axis_line);
        axis_paint.set_anti_alias(true);
        axis_paint.set_stroke_width(1.0);

        let mut tick_paint = skia::Paint::default();
        tick_paint.set_color(opts.theme.tick);
        tick_paint.set_anti_alias(true);
        tick_paint.set_stroke_width(1.0);

        // Rulers: bottom for x, left for y.
        canvas.draw_line((0.0, bh), (bw, bh), &axis_paint);
        canvas.draw_line((0.0, 0.0), (0.0, bh), &axis_paint);

        let mut label_paint = skia::Paint::default();
        label_paint.set_color(opts.theme.tick_label);
        label_paint.set_anti_alias(true);
        let mut font = skia::Font::default();
        font.set_size(12.0);

        for t in scales.x.ticks(TICK_COUNT) {
            let px = scales.x.map(t) as f32;
            canvas.draw_line((px, bh), (px, bh + 6.0), &tick_paint);
            if opts.draw_labels {
                let label = format_tick(t);
                let dx = label.len() as f32 * 3.5;
                canvas.draw_str(&label, (px - dx, bh + 20.0), &font, &label_paint);
            }
        }
        for t in scales.y.ticks(TICK_COUNT) {
            let py = scales.y.map(t) as f32;
            canvas.draw_line((-6.0, py), (0.0, py), &tick_paint);
            if opts.draw_labels {
                let label = format_tick(t);
                let dx = label.len() as f32 * 7.0;
                canvas.draw_str(&label, (-9.0 - dx, py + 4.0), &font, &label_paint);
            }
        }

        if opts.draw_labels {
            self.draw_captions(canvas, opts, bw, bh);
        }
    }

    fn draw_captions(&self, canvas: &skia::Canvas, opts: &RenderOptions, bw: f32, bh: f32) {
        let dims = &opts.dimensions;
        let mut paint = skia::Paint::default();
        paint.set_color(opts.theme.caption);
        paint.set_anti_alias(true);
        let mut font = skia::Font::default();
        font.set_size(14.0);

        let x_est = self.x_caption.len() as f32 * 3.5;
        canvas.draw_str(
            &self.x_caption,
            (bw / 2.0 - x_est, bh + dims.margin.bottom as f32 - 10.0),
            &font,
            &paint,
        );

        // Rotate the y caption -90 degrees about its anchor on the left margin.
        let anchor = skia::Point::new(-(dims.margin.left as f32) + 15.0, bh / 2.0);
        let y_est = self.y_caption.len() as f32 * 3.5;
        canvas.save();
        canvas.rotate(-90.0, Some(anchor));
        canvas.draw_str(&self.y_caption, (anchor.x - y_est, anchor.y), &font, &paint);
        canvas.restore();
    }

    // ---- vector pipeline ----------------------------------------------------

    /// Build the chart as an SVG document string.
    ///
    /// Same geometry as the raster path: a square canvas, a group translated
    /// by the margins, one circle per record, bottom/left axes with ticks,
    /// and two captions.
    pub fn render_to_svg_string(&self, opts: &RenderOptions) -> Result<String> {
        let scales = self.scales(&opts.dimensions)?;
        let dims = &opts.dimensions;
        let bw = dims.bounded_width();
        let bh = dims.bounded_height();

        let mut out = String::new();
        out.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w:.0}\" height=\"{h:.0}\" viewBox=\"0 0 {w:.0} {h:.0}\">\n",
            w = dims.width,
            h = dims.height,
        ));
        out.push_str(&format!(
            "  <rect width=\"{:.0}\" height=\"{:.0}\" fill=\"{}\"/>\n",
            dims.width,
            dims.height,
            css(opts.theme.background),
        ));
        out.push_str(&format!(
            "  <g transform=\"translate({:.0},{:.0})\">\n",
            dims.margin.left, dims.margin.top,
        ));

        for rec in &self.records {
            let cx = scales.x.map(self.channels.x.value(rec));
            let cy = scales.y.map(self.channels.y.value(rec));
            let fill = scales.color.map(self.channels.color.value(rec));
            out.push_str(&format!(
                "    <circle cx=\"{cx:.1}\" cy=\"{cy:.1}\" r=\"{r:.1}\" fill=\"{fill}\"/>\n",
                r = opts.dot_radius,
            ));
        }

        svg_axis_x(&mut out, &scales.x, bw, bh, opts);
        svg_axis_y(&mut out, &scales.y, bh, opts);

        if opts.draw_labels {
            let caption = css(opts.theme.caption);
            out.push_str(&format!(
                "    <text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\" font-size=\"14\" fill=\"{}\">{}</text>\n",
                bw / 2.0,
                bh + dims.margin.bottom - 10.0,
                caption,
                xml_escape(&self.x_caption),
            ));
            out.push_str(&format!(
                "    <text x=\"{:.1}\" y=\"{:.1}\" transform=\"rotate(-90)\" text-anchor=\"middle\" font-size=\"14\" fill=\"{}\">{}</text>\n",
                -bh / 2.0,
                -dims.margin.left + 15.0,
                caption,
                xml_escape(&self.y_caption),
            ));
        }

        out.push_str("  </g>\n</svg>\n");
        Ok(out)
    }
}

// ---- helpers ----------------------------------------------------------------

fn svg_axis_x(out: &mut String, scale: &LinearScale, bw: f64, bh: f64, opts: &RenderOptions) {
    let axis = css(opts.theme.axis_line);
    let tick = css(opts.theme.tick);
    let label = css(opts.theme.tick_label);
    out.push_str(&format!(
        "    <line x1=\"0\" y1=\"{bh:.1}\" x2=\"{bw:.1}\" y2=\"{bh:.1}\" stroke=\"{axis}\"/>\n",
    ));
    for t in scale.ticks(TICK_COUNT) {
        let px = scale.map(t);
        out.push_str(&format!(
            "    <line x1=\"{px:.1}\" y1=\"{bh:.1}\" x2=\"{px:.1}\" y2=\"{y2:.1}\" stroke=\"{tick}\"/>\n",
            y2 = bh + 6.0,
        ));
        if opts.draw_labels {
            out.push_str(&format!(
                "    <text x=\"{px:.1}\" y=\"{y:.1}\" text-anchor=\"middle\" font-size=\"12\" fill=\"{label}\">{}</text>\n",
                format_tick(t),
                y = bh + 20.0,
            ));
        }
    }
}

fn svg_axis_y(out: &mut String, scale: &LinearScale, bh: f64, opts: &RenderOptions) {
    let axis = css(opts.theme.axis_line);
    let tick = css(opts.theme.tick);
    let label = css(opts.theme.tick_label);
    out.push_str(&format!(
        "    <line x1=\"0\" y1=\"0\" x2=\"0\" y2=\"{bh:.1}\" stroke=\"{axis}\"/>\n",
    ));
    for t in scale.ticks(TICK_COUNT) {
        let py = scale.map(t);
        out.push_str(&format!(
            "    <line x1=\"-6\" y1=\"{py:.1}\" x2=\"0\" y2=\"{py:.1}\" stroke=\"{tick}\"/>\n",
        ));
        if opts.draw_labels {
            out.push_str(&format!(
                "    <text x=\"-9\" y=\"{y:.1}\" text-anchor=\"end\" font-size=\"12\" fill=\"{label}\">{}</text>\n",
                format_tick(t),
                y = py + 4.0,
            ));
        }
    }
}

/// Format a tick value without trailing zero noise.
fn format_tick(v: f64) -> String {
    if v == v.trunc() {
        format!("{v:.0}")
    } else {
        let s = format!("{v:.2}");
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

/// CSS hex form of a Skia color (alpha dropped).
fn css(c: skia::Color) -> String {
    format!("#{:02x}{:02x}{:02x}", c.r(), c.g(), c.b())
}

fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
