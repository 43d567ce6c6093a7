//! Progress ring rasterizer
//!
//! A ring is an annulus whose band is filled clockwise from 12 o'clock up to
//! the sweep angle. The unfilled arc of the band is painted in the background
//! color. Pixels inside or outside the band are never touched.
//!
//! The band is sent row by row as contiguous spans, so a display driver sees
//! at most two address windows per row.

use embedded_graphics::{
    draw_target::DrawTarget,
    geometry::{Point, Size},
    pixelcolor::Rgb565,
    primitives::Rectangle,
};

use crate::{config::RingGeometry, progress::SweepAngle};

/// How a pixel of the ring's band is painted
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shade {
    /// Filled part of the band
    Ring,
    /// Unfilled arc
    Background,
}

/// A progress ring at a fixed position
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProgressRing {
    center: Point,
    geometry: RingGeometry,
}

impl ProgressRing {
    pub fn new(center: Point, geometry: RingGeometry) -> Self {
        Self { center, geometry }
    }

    /// Shade of a pixel for the given sweep, `None` outside the band
    pub fn shade(&self, point: Point, sweep: SweepAngle) -> Option<Shade> {
        let dx = point.x as i64 - self.center.x as i64;
        let dy = point.y as i64 - self.center.y as i64;
        let distance_sq = dx * dx + dy * dy;

        if distance_sq > (self.geometry.outer_radius as i64).pow(2)
            || distance_sq <= (self.geometry.inner_radius as i64).pow(2)
        {
            return None;
        }

        Some(band_shade(dx as f32, dy as f32, sweep))
    }

    /// Draw the ring with the given sweep
    pub fn draw<D>(
        &self,
        target: &mut D,
        sweep: SweepAngle,
        ring: Rgb565,
        background: Rgb565,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let outer_sq = (self.geometry.outer_radius as i64).pow(2);
        let inner_sq = (self.geometry.inner_radius as i64).pow(2);
        let radius = self.geometry.outer_radius as i32;

        for dy in -radius..=radius {
            let Some(outer) = half_width(outer_sq, dy) else {
                continue;
            };

            // Rows crossing the inner disc split into a left and a right span
            match half_width(inner_sq, dy) {
                Some(inner) => {
                    self.fill_span(target, dy, -outer, -inner - 1, sweep, ring, background)?;
                    self.fill_span(target, dy, inner + 1, outer, sweep, ring, background)?;
                }
                None => self.fill_span(target, dy, -outer, outer, sweep, ring, background)?,
            }
        }

        Ok(())
    }

    /// Fill the band pixels `start..=end` of row `dy`, relative to the center
    #[allow(clippy::too_many_arguments)]
    fn fill_span<D>(
        &self,
        target: &mut D,
        dy: i32,
        start: i32,
        end: i32,
        sweep: SweepAngle,
        ring: Rgb565,
        background: Rgb565,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        if end < start {
            return Ok(());
        }

        let area = Rectangle::new(
            self.center + Point::new(start, dy),
            Size::new((end - start + 1) as u32, 1),
        );
        let colors = (start..=end).map(|dx| match band_shade(dx as f32, dy as f32, sweep) {
            Shade::Ring => ring,
            Shade::Background => background,
        });

        target.fill_contiguous(&area, colors)
    }
}

/// Largest `dx >= 0` with `dx² + dy² <= radius_sq`, `None` if the row misses
/// the disc
fn half_width(radius_sq: i64, dy: i32) -> Option<i32> {
    let rest = radius_sq - (dy as i64).pow(2);
    if rest < 0 {
        return None;
    }

    let mut dx = libm::sqrt(rest as f64) as i64;
    while dx * dx > rest {
        dx -= 1;
    }
    while (dx + 1) * (dx + 1) <= rest {
        dx += 1;
    }
    Some(dx as i32)
}

/// Shade of a band pixel at offset (`dx`, `dy`) from the center
fn band_shade(dx: f32, dy: f32, sweep: SweepAngle) -> Shade {
    if clockwise_degrees(dx, dy) < sweep.degrees() as f32 {
        Shade::Ring
    } else {
        Shade::Background
    }
}

/// Clockwise angle of an offset from 12 o'clock in degrees, in [0, 360)
fn clockwise_degrees(dx: f32, dy: f32) -> f32 {
    // Screen y grows downwards, so up is -y
    let degrees = libm::atan2f(dx, -dy).to_degrees();
    if degrees < 0.0 {
        degrees + 360.0
    } else {
        degrees
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring() -> ProgressRing {
        ProgressRing::new(
            Point::new(120, 120),
            RingGeometry {
                outer_radius: 100,
                inner_radius: 92,
            },
        )
    }

    /// Point on the middle of the band at a clockwise angle from 12 o'clock
    fn on_band(degrees: f32) -> Point {
        let radians = degrees.to_radians();
        Point::new(
            120 + libm::roundf(96.0 * libm::sinf(radians)) as i32,
            120 - libm::roundf(96.0 * libm::cosf(radians)) as i32,
        )
    }

    #[test]
    fn clockwise_angles_from_twelve() {
        assert_eq!(clockwise_degrees(0.0, -10.0), 0.0);
        assert!((clockwise_degrees(10.0, 0.0) - 90.0).abs() < 0.01);
        assert!((clockwise_degrees(0.0, 10.0) - 180.0).abs() < 0.01);
        assert!((clockwise_degrees(-10.0, 0.0) - 270.0).abs() < 0.01);
        assert!((clockwise_degrees(-10.0, -10.0) - 315.0).abs() < 0.01);
    }

    #[test]
    fn outside_outer_radius_is_untouched() {
        let ring = ring();
        let sweep = SweepAngle::from_degrees(90);
        assert_eq!(ring.shade(Point::new(120, 19), sweep), None);
        assert_eq!(ring.shade(Point::new(0, 0), sweep), None);
        assert_eq!(ring.shade(Point::new(50_000, 0), sweep), None);
    }

    #[test]
    fn inner_disc_is_untouched() {
        let ring = ring();
        let sweep = SweepAngle::from_degrees(359);
        assert_eq!(ring.shade(Point::new(120, 120), sweep), None);
        assert_eq!(ring.shade(Point::new(120, 28), sweep), None);
        assert_eq!(ring.shade(Point::new(120, 27), sweep), Some(Shade::Ring));
    }

    #[test]
    fn half_width_of_rows() {
        assert_eq!(half_width(100, 0), Some(10));
        assert_eq!(half_width(100, 6), Some(8));
        assert_eq!(half_width(100, 10), Some(0));
        assert_eq!(half_width(100, 11), None);
        assert_eq!(half_width(99, 0), Some(9));
    }

    #[test]
    fn band_fills_up_to_sweep() {
        let ring = ring();
        let sweep = SweepAngle::from_degrees(90);
        assert_eq!(ring.shade(on_band(1.0), sweep), Some(Shade::Ring));
        assert_eq!(ring.shade(on_band(45.0), sweep), Some(Shade::Ring));
        assert_eq!(ring.shade(on_band(89.0), sweep), Some(Shade::Ring));
        assert_eq!(ring.shade(on_band(95.0), sweep), Some(Shade::Background));
        assert_eq!(ring.shade(on_band(180.0), sweep), Some(Shade::Background));
        assert_eq!(ring.shade(on_band(300.0), sweep), Some(Shade::Background));
    }

    #[test]
    fn empty_sweep_has_no_ring() {
        let ring = ring();
        for degrees in [0.0, 90.0, 180.0, 270.0] {
            assert_eq!(
                ring.shade(on_band(degrees), SweepAngle::ZERO),
                Some(Shade::Background)
            );
        }
    }
}
