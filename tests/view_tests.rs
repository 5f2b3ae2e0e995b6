// Host-side tests for the lab-to-canvas mapping.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
#[path = "../src/view.rs"]
mod view;

use glam::DVec2;
use twin_core::{Event, SimulationParameters, Viewport};
use view::*;

fn unit_view() -> ViewTransform {
    let viewport = Viewport {
        x_min: -1.0,
        x_max: 9.0,
        t_min: -1.0,
        t_max: 19.0,
    };
    let area = PlotArea {
        left: 50.0,
        top: 20.0,
        width: 500.0,
        height: 400.0,
    };
    ViewTransform::new(viewport, area)
}

#[test]
fn corners_map_to_plot_edges() {
    let v = unit_view();
    assert_eq!(v.to_px(Event::new(-1.0, -1.0)), DVec2::new(50.0, 420.0));
    assert_eq!(v.to_px(Event::new(9.0, 19.0)), DVec2::new(550.0, 20.0));
}

#[test]
fn time_points_up_the_screen() {
    let v = unit_view();
    let early = v.to_px(Event::new(0.0, 1.0));
    let late = v.to_px(Event::new(0.0, 5.0));
    assert!(late.y < early.y);
    assert_eq!(late.x, early.x);
}

#[test]
fn plot_area_respects_margins_and_dpr() {
    let a = PlotArea::inset(800.0, 600.0, 2.0);
    assert_eq!(a.left, constants::MARGIN_LEFT_PX * 2.0);
    assert_eq!(a.top, constants::MARGIN_TOP_PX * 2.0);
    assert_eq!(a.right(), 800.0 - constants::MARGIN_RIGHT_PX * 2.0);
    assert_eq!(a.bottom(), 600.0 - constants::MARGIN_BOTTOM_PX * 2.0);
    // a canvas smaller than its margins still yields a drawable area
    let tiny = PlotArea::inset(10.0, 10.0, 1.0);
    assert!(tiny.width >= 1.0 && tiny.height >= 1.0);
}

#[test]
fn light_ray_angle_on_square_scales_is_45_degrees() {
    let viewport = Viewport {
        x_min: 0.0,
        x_max: 10.0,
        t_min: 0.0,
        t_max: 10.0,
    };
    let area = PlotArea {
        left: 0.0,
        top: 0.0,
        width: 100.0,
        height: 100.0,
    };
    let v = ViewTransform::new(viewport, area);
    let angle = v.screen_angle(1.0, 1.0);
    assert!((angle + std::f64::consts::FRAC_PI_4).abs() < 1e-12);
}

#[test]
fn axis_ticks_cover_the_textbook_viewport() {
    let vp = Viewport::for_params(&SimulationParameters::default());
    let ticks = axis_ticks(vp.t_min, vp.t_max, 12);
    assert!(!ticks.is_empty() && ticks.len() <= 13);
    assert!(ticks.iter().all(|t| *t >= vp.t_min && *t <= vp.t_max));
    assert!(ticks.contains(&0.0));
    let step = ticks[1] - ticks[0];
    assert!([1.0, 2.0, 5.0].contains(&step), "step {step}");
}

#[test]
fn axis_ticks_reject_degenerate_ranges() {
    assert!(axis_ticks(3.0, 3.0, 10).is_empty());
    assert!(axis_ticks(5.0, 1.0, 10).is_empty());
    assert!(axis_ticks(0.0, f64::NAN, 10).is_empty());
    assert!(axis_ticks(0.0, 10.0, 0).is_empty());
}

#[test]
fn css_helpers() {
    assert_eq!(rgba((0x22, 0xd3, 0xee), 0.5), "rgba(34, 211, 238, 0.50)");
    assert_eq!(rgba((1, 2, 3), 7.0), "rgba(1, 2, 3, 1.00)");
    assert_eq!(scaled_font("12px system-ui", 2.0), "24px system-ui");
    assert_eq!(scaled_font("bold 9px serif", 2.0), "bold 18px serif");
    assert_eq!(scaled_font("serif", 2.0), "serif");
}
