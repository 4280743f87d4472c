//! Log-log diagnostic plot rendering
//!
//! Draws the fitted points as square markers and the regression line over the
//! data range into a plain RGB image. The estimate and the axis quantities are
//! written into the margins with a small built-in bitmap font.

use image::{Rgb, RgbImage};
use std::path::Path;

use crate::algorithm::estimator::FitResult;
use crate::io::configuration::{PLOT_HEIGHT, PLOT_MARGIN, PLOT_MARKER_RADIUS, PLOT_WIDTH};
use crate::io::error::{FractalError, Result, file_system, invalid_parameter};

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
const AXIS_COLOR: Rgb<u8> = Rgb([96, 96, 96]);
const POINT_COLOR: Rgb<u8> = Rgb([31, 119, 180]);
const LINE_COLOR: Rgb<u8> = Rgb([214, 39, 40]);
const TEXT_COLOR: Rgb<u8> = Rgb([0, 0, 0]);

const GLYPH_WIDTH: i64 = 3;
const GLYPH_HEIGHT: i64 = 5;
const TEXT_SCALE: i64 = 2;
const TEXT_HEIGHT: i64 = GLYPH_HEIGHT * TEXT_SCALE;
const TEXT_ADVANCE: i64 = (GLYPH_WIDTH + 1) * TEXT_SCALE;

/// Rows of a 3x5 glyph, top first; bit 2 is the leftmost column
const fn glyph(c: char) -> Option<[u8; 5]> {
    let rows = match c {
        '0' => [0b111, 0b101, 0b101, 0b101, 0b111],
        '1' => [0b010, 0b110, 0b010, 0b010, 0b111],
        '2' => [0b111, 0b001, 0b111, 0b100, 0b111],
        '3' => [0b111, 0b001, 0b111, 0b001, 0b111],
        '4' => [0b101, 0b101, 0b111, 0b001, 0b001],
        '5' => [0b111, 0b100, 0b111, 0b001, 0b111],
        '6' => [0b111, 0b100, 0b111, 0b101, 0b111],
        '7' => [0b111, 0b001, 0b001, 0b001, 0b001],
        '8' => [0b111, 0b101, 0b111, 0b101, 0b111],
        '9' => [0b111, 0b101, 0b111, 0b001, 0b111],
        '.' => [0b000, 0b000, 0b000, 0b000, 0b010],
        '-' => [0b000, 0b000, 0b111, 0b000, 0b000],
        '=' => [0b000, 0b111, 0b000, 0b111, 0b000],
        '/' => [0b001, 0b001, 0b010, 0b100, 0b100],
        '(' => [0b010, 0b100, 0b100, 0b100, 0b010],
        ')' => [0b010, 0b001, 0b001, 0b001, 0b010],
        'D' => [0b110, 0b101, 0b101, 0b101, 0b110],
        'N' => [0b101, 0b111, 0b111, 0b111, 0b101],
        'S' => [0b111, 0b100, 0b111, 0b001, 0b111],
        'l' => [0b100, 0b100, 0b100, 0b100, 0b110],
        'n' => [0b000, 0b000, 0b110, 0b101, 0b101],
        ' ' => [0; 5],
        _ => return None,
    };
    Some(rows)
}

/// Pixel width of `text` when drawn
fn text_width(text: &str) -> i64 {
    let chars = i64::try_from(text.chars().count()).unwrap_or(i64::MAX);
    chars.saturating_mul(TEXT_ADVANCE) - TEXT_SCALE
}

/// Inclusive value range with a guaranteed non-zero span
#[derive(Debug, Clone, Copy)]
struct Span {
    min: f64,
    max: f64,
}

impl Span {
    fn covering(values: impl Iterator<Item = f64>) -> Self {
        let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
        if !min.is_finite() || !max.is_finite() {
            return Self {
                min: -1.0,
                max: 1.0,
            };
        }
        // Flat data still needs a drawable extent
        if max - min <= f64::EPSILON {
            return Self {
                min: min - 1.0,
                max: max + 1.0,
            };
        }
        Self { min, max }
    }

    fn fraction(&self, value: f64) -> f64 {
        (value - self.min) / (self.max - self.min)
    }
}

/// Maps data coordinates to pixel coordinates inside the plot margins
struct Canvas {
    image: RgbImage,
    x_span: Span,
    y_span: Span,
    margin: f64,
}

impl Canvas {
    fn to_pixel(&self, x: f64, y: f64) -> (i64, i64) {
        let inner_w = f64::from(self.image.width()) - 2.0 * self.margin;
        let inner_h = f64::from(self.image.height()) - 2.0 * self.margin;
        let px = self.x_span.fraction(x).mul_add(inner_w, self.margin);
        let py = f64::from(self.image.height()) - self.y_span.fraction(y).mul_add(inner_h, self.margin);
        (px.round() as i64, py.round() as i64)
    }

    fn plot(&mut self, x: i64, y: i64, color: Rgb<u8>) {
        if x < 0 || y < 0 {
            return;
        }
        if let Some(pixel) = self.image.get_pixel_mut_checked(x as u32, y as u32) {
            *pixel = color;
        }
    }

    // Bresenham
    fn line(&mut self, from: (i64, i64), to: (i64, i64), color: Rgb<u8>) {
        let (mut x, mut y) = from;
        let dx = (to.0 - x).abs();
        let dy = -(to.1 - y).abs();
        let step_x = if x < to.0 { 1 } else { -1 };
        let step_y = if y < to.1 { 1 } else { -1 };
        let mut error = dx + dy;

        loop {
            self.plot(x, y, color);
            if x == to.0 && y == to.1 {
                break;
            }
            let doubled = 2 * error;
            if doubled >= dy {
                error += dy;
                x += step_x;
            }
            if doubled <= dx {
                error += dx;
                y += step_y;
            }
        }
    }

    fn marker(&mut self, center: (i64, i64), radius: i64, color: Rgb<u8>) {
        for y in center.1 - radius..=center.1 + radius {
            for x in center.0 - radius..=center.0 + radius {
                self.plot(x, y, color);
            }
        }
    }

    // Characters without a glyph are left blank
    fn text(&mut self, origin: (i64, i64), text: &str, color: Rgb<u8>) {
        let mut left = origin.0;
        for c in text.chars() {
            if let Some(rows) = glyph(c) {
                for (dy, bits) in (0..).zip(rows) {
                    for dx in 0..GLYPH_WIDTH {
                        if (bits >> (GLYPH_WIDTH - 1 - dx)) & 1 != 0 {
                            self.block(
                                (left + dx * TEXT_SCALE, origin.1 + dy * TEXT_SCALE),
                                TEXT_SCALE,
                                color,
                            );
                        }
                    }
                }
            }
            left += TEXT_ADVANCE;
        }
    }

    fn block(&mut self, corner: (i64, i64), side: i64, color: Rgb<u8>) {
        for y in corner.1..corner.1 + side {
            for x in corner.0..corner.0 + side {
                self.plot(x, y, color);
            }
        }
    }

    fn labels(&mut self, dimension: f64) {
        let margin = self.margin as i64;
        let right = i64::from(self.image.width()) - margin;
        let bottom = i64::from(self.image.height()) - margin;
        let top_baseline = (margin - TEXT_HEIGHT) / 2;

        self.text((margin, top_baseline), "ln(N)", TEXT_COLOR);

        let annotation = format!("D = {dimension:.4}");
        self.text(
            (right - text_width(&annotation), top_baseline),
            &annotation,
            TEXT_COLOR,
        );

        let x_label = "ln(1/S)";
        self.text(
            (right - text_width(x_label), bottom + top_baseline),
            x_label,
            TEXT_COLOR,
        );
    }

    fn frame(&mut self) {
        let margin = self.margin as i64;
        let right = i64::from(self.image.width()) - margin;
        let bottom = i64::from(self.image.height()) - margin;
        self.line((margin, margin), (right, margin), AXIS_COLOR);
        self.line((right, margin), (right, bottom), AXIS_COLOR);
        self.line((right, bottom), (margin, bottom), AXIS_COLOR);
        self.line((margin, bottom), (margin, margin), AXIS_COLOR);
    }
}

/// Render the log-log points and fitted line of a fit
///
/// # Errors
///
/// Returns `InvalidParameter` if the canvas leaves no room inside the margins
pub fn render_log_log_plot(fit: &FitResult, width: u32, height: u32) -> Result<RgbImage> {
    let minimum = 2 * PLOT_MARGIN + 1;
    if width < minimum || height < minimum {
        return Err(invalid_parameter(
            "plot size",
            &format!("{width}x{height}"),
            &format!("must be at least {minimum}x{minimum}"),
        ));
    }

    let x_span = Span::covering(fit.points.iter().map(|point| point.x));
    let y_span = Span::covering(
        fit.points
            .iter()
            .map(|point| point.y)
            .chain(fit.fitted_y.iter().copied()),
    );

    let mut canvas = Canvas {
        image: RgbImage::from_pixel(width, height, BACKGROUND),
        x_span,
        y_span,
        margin: f64::from(PLOT_MARGIN),
    };

    canvas.frame();
    canvas.labels(fit.dimension());

    let start = canvas.to_pixel(x_span.min, fit.slope.mul_add(x_span.min, fit.intercept));
    let end = canvas.to_pixel(x_span.max, fit.slope.mul_add(x_span.max, fit.intercept));
    canvas.line(start, end, LINE_COLOR);

    for point in &fit.points {
        let center = canvas.to_pixel(point.x, point.y);
        canvas.marker(center, i64::from(PLOT_MARKER_RADIUS), POINT_COLOR);
    }

    Ok(canvas.image)
}

/// Render the default-size plot and save it as PNG
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the image
/// cannot be saved
pub fn export_log_log_plot<P: AsRef<Path>>(fit: &FitResult, output_path: P) -> Result<()> {
    let output_path = output_path.as_ref();
    let img = render_log_log_plot(fit, PLOT_WIDTH, PLOT_HEIGHT)?;

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| file_system(parent, "create directory", e))?;
    }

    img.save(output_path)
        .map_err(|e| FractalError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
