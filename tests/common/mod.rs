//! In-memory display for rendering tests

use std::convert::Infallible;

use embedded_graphics::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Point, Size},
    pixelcolor::Rgb565,
    primitives::{PointsIter, Rectangle},
    Pixel,
};

pub const WIDTH: u32 = 240;
pub const HEIGHT: u32 = 240;

/// 240x240 framebuffer, `None` for pixels never written
pub struct FrameBuffer {
    pixels: Vec<Option<Rgb565>>,
    /// Number of pixel writes since creation
    pub writes: usize,
    /// Pixels written one by one through `draw_iter`
    pub single_writes: usize,
    /// Number of `fill_contiguous` calls
    pub fills: usize,
}

impl FrameBuffer {
    pub fn new() -> Self {
        Self {
            pixels: vec![None; (WIDTH * HEIGHT) as usize],
            writes: 0,
            single_writes: 0,
            fills: 0,
        }
    }

    pub fn pixel(&self, point: Point) -> Option<Rgb565> {
        self.index(point).and_then(|index| self.pixels[index])
    }

    pub fn pixels(&self) -> &[Option<Rgb565>] {
        &self.pixels
    }

    /// Count written pixels with the given color
    pub fn count(&self, color: Rgb565) -> usize {
        self.pixels.iter().filter(|pixel| **pixel == Some(color)).count()
    }

    /// Positions of all written pixels with the given color
    pub fn points_with(&self, color: Rgb565) -> Vec<Point> {
        self.points()
            .filter(|point| self.pixel(*point) == Some(color))
            .collect()
    }

    /// Every position of the framebuffer
    pub fn points(&self) -> impl Iterator<Item = Point> {
        (0..HEIGHT as i32).flat_map(|y| (0..WIDTH as i32).map(move |x| Point::new(x, y)))
    }

    fn index(&self, point: Point) -> Option<usize> {
        if point.x < 0 || point.y < 0 || point.x >= WIDTH as i32 || point.y >= HEIGHT as i32 {
            return None;
        }
        Some(point.y as usize * WIDTH as usize + point.x as usize)
    }

    fn write(&mut self, point: Point, color: Rgb565) {
        if let Some(index) = self.index(point) {
            self.pixels[index] = Some(color);
            self.writes += 1;
        }
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(WIDTH, HEIGHT)
    }
}

impl DrawTarget for FrameBuffer {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            let before = self.writes;
            self.write(point, color);
            self.single_writes += self.writes - before;
        }
        Ok(())
    }

    fn fill_contiguous<I>(&mut self, area: &Rectangle, colors: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Self::Color>,
    {
        self.fills += 1;
        for (point, color) in area.points().zip(colors) {
            self.write(point, color);
        }
        Ok(())
    }
}

/// Point at `radius` from `center`, `degrees` clockwise from 12 o'clock
pub fn polar(center: Point, radius: f32, degrees: f32) -> Point {
    let radians = degrees.to_radians();
    Point::new(
        center.x + (radius * radians.sin()).round() as i32,
        center.y - (radius * radians.cos()).round() as i32,
    )
}
