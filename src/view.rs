//! Mapping from lab-frame events to canvas pixels.
//!
//! Pure math so it can be host-tested; the canvas y axis points down while
//! lab time points up.

use crate::constants::*;
use glam::DVec2;
use twin_core::{Event, Viewport};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    /// Canvas of `width` x `height` device pixels, minus the margins
    /// scaled by `dpr`.
    pub fn inset(width: f64, height: f64, dpr: f64) -> Self {
        let left = MARGIN_LEFT_PX * dpr;
        let top = MARGIN_TOP_PX * dpr;
        Self {
            left,
            top,
            width: (width - left - MARGIN_RIGHT_PX * dpr).max(1.0),
            height: (height - top - MARGIN_BOTTOM_PX * dpr).max(1.0),
        }
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }
}

/// Independent linear scales on both axes, like a chart: the viewport fills
/// the plot area exactly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
    pub viewport: Viewport,
    pub area: PlotArea,
    scale: DVec2,
}

impl ViewTransform {
    pub fn new(viewport: Viewport, area: PlotArea) -> Self {
        let span = DVec2::new(
            viewport.x_max - viewport.x_min,
            viewport.t_max - viewport.t_min,
        )
        .max(DVec2::splat(f64::EPSILON));
        Self {
            viewport,
            area,
            scale: DVec2::new(area.width, area.height) / span,
        }
    }

    pub fn to_px(&self, e: Event) -> DVec2 {
        DVec2::new(
            self.area.left + (e.x - self.viewport.x_min) * self.scale.x,
            self.area.bottom() - (e.t - self.viewport.t_min) * self.scale.y,
        )
    }

    /// Screen angle of a lab-frame direction, for rotating labels along a
    /// line. Canvas angles grow clockwise.
    pub fn screen_angle(&self, dx: f64, dt: f64) -> f64 {
        (-dt * self.scale.y).atan2(dx * self.scale.x)
    }
}

/// Round tick positions covering `[min, max]` with about `max_ticks`
/// marks, on a 1-2-5 step ladder.
pub fn axis_ticks(min: f64, max: f64, max_ticks: usize) -> Vec<f64> {
    if !min.is_finite() || !max.is_finite() || max <= min || max_ticks == 0 {
        return Vec::new();
    }
    let raw = (max - min) / max_ticks as f64;
    let magnitude = 10f64.powf(raw.log10().floor());
    let step = [1.0, 2.0, 5.0, 10.0]
        .iter()
        .map(|m| m * magnitude)
        .find(|s| *s >= raw)
        .unwrap_or(10.0 * magnitude);
    let first = (min / step).ceil() as i64;
    let last = (max / step).floor() as i64;
    (first..=last).map(|i| i as f64 * step).collect()
}

/// CSS `rgba()` string for a grid color at the given alpha.
pub fn rgba((r, g, b): (u8, u8, u8), alpha: f32) -> String {
    format!("rgba({r}, {g}, {b}, {:.2})", alpha.clamp(0.0, 1.0))
}

/// Scale the pixel size inside a CSS font shorthand ("bold 9px serif") by
/// the device pixel ratio. Fonts without a px size pass through unchanged.
pub fn scaled_font(font: &str, dpr: f64) -> String {
    let Some((head, rest)) = font.split_once("px") else {
        return font.to_string();
    };
    let (style, size) = head.rsplit_once(' ').unwrap_or(("", head));
    match size.parse::<f64>() {
        Ok(px) if style.is_empty() => format!("{}px{rest}", (px * dpr).round()),
        Ok(px) => format!("{style} {}px{rest}", (px * dpr).round()),
        Err(_) => font.to_string(),
    }
}
