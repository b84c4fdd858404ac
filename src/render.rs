//! Software rasteriser for the RGBA frame handed over by `pixels`.
//!
//! One frame pixel covers one field unit, so the frame is
//! `bounds.width * bounds.height * 4` bytes. Pixel (x, y) is sampled at its
//! centre (x + 0.5, y + 0.5).

use crate::config::{Color, GameConfig};
use crate::game::{Game, Status};
use crate::geometry::{Point, Segment};

/// Colours and stroke widths used when drawing.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Style {
    pub background: Color,
    pub snake: Color,
    pub apple: Color,
    pub game_over: Color,
    pub stroke_width: f32,
    pub apple_radius: f32,
}

impl From<&GameConfig> for Style {
    fn from(config: &GameConfig) -> Self {
        Self {
            background: config.background_color,
            snake: config.snake_color,
            apple: config.apple_color,
            game_over: config.game_over_color,
            stroke_width: config.snake_width,
            apple_radius: config.apple_radius,
        }
    }
}

/// Mutable view over an RGBA frame.
pub struct Canvas<'a> {
    frame: &'a mut [u8],
    width: usize,
    height: usize,
}

impl<'a> Canvas<'a> {
    /// `None` if `frame` is too small for `width * height` pixels.
    pub fn new(frame: &'a mut [u8], width: usize, height: usize) -> Option<Canvas<'a>> {
        if frame.len() < width * height * 4 {
            return None;
        }
        Some(Canvas {
            frame,
            width,
            height,
        })
    }

    pub fn clear(&mut self, color: Color) {
        for pixel in self.frame.chunks_exact_mut(4) {
            pixel.copy_from_slice(&color.0);
        }
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y * self.width + x) * 4;
        let mut out = [0; 4];
        out.copy_from_slice(&self.frame[i..i + 4]);
        Some(out)
    }

    fn put(&mut self, x: usize, y: usize, color: Color) {
        let i = (y * self.width + x) * 4;
        self.frame[i..i + 4].copy_from_slice(&color.0);
    }

    /// Calls `f` on the centre of every pixel inside the given box, clipped.
    fn fill_where(&mut self, min: Point, max: Point, color: Color, f: impl Fn(Point) -> bool) {
        let x0 = min.x.floor().max(0.0) as usize;
        let y0 = min.y.floor().max(0.0) as usize;
        let x1 = (max.x.ceil().max(0.0) as usize).min(self.width);
        let y1 = (max.y.ceil().max(0.0) as usize).min(self.height);
        for y in y0..y1 {
            for x in x0..x1 {
                if f(Point::new(x as f32 + 0.5, y as f32 + 0.5)) {
                    self.put(x, y, color);
                }
            }
        }
    }

    /// Stroked segment with round caps.
    pub fn capsule(&mut self, seg: &Segment, width: f32, color: Color) {
        let r = width / 2.0;
        let min = Point::new(seg.p0.x.min(seg.p1.x) - r, seg.p0.y.min(seg.p1.y) - r);
        let max = Point::new(seg.p0.x.max(seg.p1.x) + r, seg.p0.y.max(seg.p1.y) + r);
        self.fill_where(min, max, color, |p| seg.distance_to(p) <= r);
    }

    /// Circle outline of the given radius stroked with `width`.
    pub fn ring(&mut self, center: Point, radius: f32, width: f32, color: Color) {
        let half = width / 2.0;
        let reach = radius + half;
        let min = Point::new(center.x - reach, center.y - reach);
        let max = Point::new(center.x + reach, center.y + reach);
        self.fill_where(min, max, color, |p| (p.distance(center) - radius).abs() <= half);
    }

    pub fn rect(&mut self, min: Point, max: Point, color: Color) {
        self.fill_where(min, max, color, |_| true);
    }
}

/// Draws the whole scene; adds the game-over banner once stopped.
pub fn draw(frame: &mut [u8], game: &Game, style: &Style) {
    let bounds = game.bounds();
    let len = frame.len();
    let Some(mut canvas) = Canvas::new(frame, bounds.width as usize, bounds.height as usize) else {
        tracing::error!(len, "frame smaller than the playing field");
        return;
    };

    canvas.clear(style.background);
    for seg in game.snake().segments() {
        canvas.capsule(seg, style.stroke_width, style.snake);
    }
    for apple in game.apples().apples() {
        canvas.ring(apple.position, style.apple_radius, style.stroke_width, style.apple);
    }

    if let Status::Stopped(_) = game.status() {
        draw_banner(&mut canvas, bounds.width as f32, bounds.height as f32, style.game_over);
    }
}

fn draw_banner(canvas: &mut Canvas<'_>, width: f32, height: f32, color: Color) {
    let (cx, cy) = (width / 2.0, height / 2.0);
    let half_w = width * 0.3;
    let half_h = 20.0_f32.min(height / 4.0);
    canvas.rect(
        Point::new(cx - half_w, cy - half_h),
        Point::new(cx + half_w, cy + half_h),
        color,
    );
}
