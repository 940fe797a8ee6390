use ab_glyph::{point, Font, FontArc, OutlinedGlyph, PxScale, ScaleFont};
use image::{Rgba, RgbaImage};

use crate::config::IconConfig;
use crate::error::IconError;
use crate::font;

pub const PLATE_COLOR: Rgba<u8> = Rgba([0x4A, 0x90, 0xE2, 0xFF]);
pub const GLYPH_COLOR: Rgba<u8> = Rgba([0xFF, 0xFF, 0xFF, 0xFF]);
pub const GLYPH: &str = "\u{26A1}";

/// Integer ink box of laid-out text, origin at (0, 0).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextBounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl TextBounds {
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }
}

pub fn corner_radius(size: u32) -> u32 {
    size / 8
}

pub fn glyph_font_size(size: u32) -> u32 {
    size / 2
}

/// Top-left of the text layout so the measured box lands centered. Floors
/// toward negative infinity when the text is wider than the canvas.
pub fn glyph_origin(size: i32, bounds: &TextBounds) -> (i32, i32) {
    (
        (size - bounds.width()).div_euclid(2),
        (size - bounds.height()).div_euclid(2),
    )
}

/// Render one icon with the configured font, or the built-in one if that
/// can't be loaded.
pub fn render(size: u32, cfg: &IconConfig) -> Result<RgbaImage, IconError> {
    let loaded = font::load_font(&cfg.font_path)?;
    render_with_font(size, loaded.font(), GLYPH)
}

/// Sizes must be in `1..=i32::MAX` so glyph offsets stay in signed pixel space.
pub fn render_with_font(size: u32, font: &FontArc, text: &str) -> Result<RgbaImage, IconError> {
    let side = match i32::try_from(size) {
        Ok(side) if side > 0 => side,
        _ => return Err(IconError::InvalidSize(size)),
    };
    let mut canvas = RgbaImage::from_pixel(size, size, Rgba([0, 0, 0, 0]));
    fill_rounded_rect(&mut canvas, corner_radius(size), PLATE_COLOR);

    let scale = font::px_scale(font, glyph_font_size(size));
    let bounds = measure_text(font, scale, text);
    let (x, y) = glyph_origin(side, &bounds);
    draw_text(&mut canvas, font, scale, (x, y), text, GLYPH_COLOR);
    Ok(canvas)
}

/// Fill the whole canvas with a rounded rectangle. A pixel is painted when
/// its center lies inside the shape; no anti-aliasing.
pub fn fill_rounded_rect(canvas: &mut RgbaImage, radius: u32, color: Rgba<u8>) {
    let (w, h) = (canvas.width() as f32, canvas.height() as f32);
    let r = (radius as f32).min(w * 0.5).min(h * 0.5);
    for (x, y, px) in canvas.enumerate_pixels_mut() {
        let cx = x as f32 + 0.5;
        let cy = y as f32 + 0.5;
        // Nearest point on the inner rectangle; only corner regions are ever
        // farther than r from it.
        let nx = cx.clamp(r, w - r);
        let ny = cy.clamp(r, h - r);
        let dx = cx - nx;
        let dy = cy - ny;
        if dx * dx + dy * dy <= r * r {
            *px = color;
        }
    }
}

fn layout(font: &FontArc, scale: PxScale, origin: (i32, i32), text: &str) -> Vec<OutlinedGlyph> {
    let scaled = font.as_scaled(scale);
    let baseline = origin.1 as f32 + scaled.ascent();
    let mut caret = origin.0 as f32;
    let mut prev = None;
    let mut out = Vec::new();
    for ch in text.chars() {
        let id = scaled.glyph_id(ch);
        if let Some(prev) = prev {
            caret += scaled.kern(prev, id);
        }
        let glyph = id.with_scale_and_position(scale, point(caret, baseline));
        caret += scaled.h_advance(id);
        prev = Some(id);
        if let Some(outlined) = font.outline_glyph(glyph) {
            out.push(outlined);
        }
    }
    out
}

pub fn measure_text(font: &FontArc, scale: PxScale, text: &str) -> TextBounds {
    let mut bounds: Option<TextBounds> = None;
    for glyph in layout(font, scale, (0, 0), text) {
        let px = glyph.px_bounds();
        let b = TextBounds {
            left: px.min.x.floor() as i32,
            top: px.min.y.floor() as i32,
            right: px.max.x.ceil() as i32,
            bottom: px.max.y.ceil() as i32,
        };
        bounds = Some(match bounds {
            None => b,
            Some(acc) => TextBounds {
                left: acc.left.min(b.left),
                top: acc.top.min(b.top),
                right: acc.right.max(b.right),
                bottom: acc.bottom.max(b.bottom),
            },
        });
    }
    bounds.unwrap_or_default()
}

pub fn draw_text(
    canvas: &mut RgbaImage,
    font: &FontArc,
    scale: PxScale,
    origin: (i32, i32),
    text: &str,
    color: Rgba<u8>,
) {
    let w = i32::try_from(canvas.width()).unwrap_or(i32::MAX);
    let h = i32::try_from(canvas.height()).unwrap_or(i32::MAX);
    for glyph in layout(font, scale, origin, text) {
        let px = glyph.px_bounds();
        let (left, top) = (px.min.x.floor() as i32, px.min.y.floor() as i32);
        glyph.draw(|gx, gy, coverage| {
            let x = left + gx as i32;
            let y = top + gy as i32;
            if x >= 0 && y >= 0 && x < w && y < h {
                blend(canvas.get_pixel_mut(x as u32, y as u32), color, coverage);
            }
        });
    }
}

// Source-over compositing of `color` at fractional coverage.
fn blend(dst: &mut Rgba<u8>, color: Rgba<u8>, coverage: f32) {
    let sa = coverage.clamp(0.0, 1.0) * color[3] as f32 / 255.0;
    if sa <= 0.0 {
        return;
    }
    let da = dst[3] as f32 / 255.0;
    let out_a = sa + da * (1.0 - sa);
    for i in 0..3 {
        let c = (color[i] as f32 * sa + dst[i] as f32 * da * (1.0 - sa)) / out_a;
        dst[i] = c.round().clamp(0.0, 255.0) as u8;
    }
    dst[3] = (out_a * 255.0).round().clamp(0.0, 255.0) as u8;
}
