// The native front-end is a binary, so the pure modules are included here.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
#[path = "../src/geometry.rs"]
mod geometry;

use geometry::*;
use glam::Vec4;
use twin_core::{
    DisplayOptions, Event, Scene, Segment, SimulationParameters, Stage, StageClock, Viewport,
};

fn viewport() -> Viewport {
    Viewport {
        x_min: -1.0,
        x_max: 9.0,
        t_min: -1.0,
        t_max: 11.0,
    }
}

fn scene(stage: Stage, options: DisplayOptions) -> Scene {
    Scene::build(
        SimulationParameters::default(),
        StageClock::at(stage, 0.5),
        options,
    )
}

#[test]
fn view_proj_centers_the_viewport() {
    let m = view_proj(&viewport());
    let center = m * Vec4::new(4.0, 5.0, 0.0, 1.0);
    assert!(center.x.abs() < 1e-5);
    assert!(center.y.abs() < 1e-5);
}

#[test]
fn view_proj_keeps_the_viewport_inside_clip_space() {
    let m = view_proj(&viewport());
    let top_right = m * Vec4::new(9.0, 11.0, 0.0, 1.0);
    let bottom_left = m * Vec4::new(-1.0, -1.0, 0.0, 1.0);
    assert!(top_right.x > 0.9 && top_right.x < 1.0);
    assert!(top_right.y > 0.9 && top_right.y < 1.0);
    assert!(bottom_left.x < -0.9 && bottom_left.x > -1.0);
    assert!(bottom_left.y < -0.9 && bottom_left.y > -1.0);
}

#[test]
fn dashed_line_splits_into_dash_gap_runs() {
    let mut batch = LineBatch::new(&viewport());
    batch.dashed(
        Segment::new(Event::new(0.0, 0.0), Event::new(0.0, 1.0)),
        [1.0; 4],
    );
    let v = batch.into_vertices();
    // dashes start at 0.0, 0.3, 0.6 and 0.9
    assert_eq!(v.len(), 8);
    assert_eq!(v[0].pos, [0.0, 0.0]);
    assert!((v[7].pos[1] - 1.0).abs() < 1e-6);
}

#[test]
fn degenerate_dash_emits_nothing() {
    let mut batch = LineBatch::new(&viewport());
    let p = Event::new(2.0, 3.0);
    batch.dashed(Segment::new(p, p), [1.0; 4]);
    assert!(batch.into_vertices().is_empty());
}

#[test]
fn diamond_is_four_closed_edges() {
    let mut batch = LineBatch::new(&viewport());
    batch.diamond(Event::new(1.0, 1.0), 1.0, [1.0; 4]);
    let v = batch.into_vertices();
    assert_eq!(v.len(), 8);
    assert_eq!(v[0].pos, v[7].pos);
}

#[test]
fn scene_vertices_form_a_line_list() {
    let v = scene_vertices(&scene(Stage::Outbound, DisplayOptions::default()));
    assert!(!v.is_empty());
    assert_eq!(v.len() % 2, 0);
}

#[test]
fn toggles_add_geometry() {
    let plain = scene_vertices(&scene(Stage::Inbound, DisplayOptions::default())).len();
    let with_grid = scene_vertices(&scene(
        Stage::Inbound,
        DisplayOptions {
            show_grid: true,
            ..Default::default()
        },
    ))
    .len();
    let with_signals = scene_vertices(&scene(
        Stage::Inbound,
        DisplayOptions {
            show_stationary_signals: true,
            show_traveler_signals: true,
            ..Default::default()
        },
    ))
    .len();
    assert!(with_grid > plain);
    assert!(with_signals > plain);
}

#[test]
fn grid_alpha_follows_emphasis() {
    let s = scene(
        Stage::Turnaround,
        DisplayOptions {
            show_grid: true,
            ..Default::default()
        },
    );
    assert_eq!(s.grids.len(), 2);
    let emphasis = s.grids[0].emphasis;
    let v = scene_vertices(&s);
    assert!(v.iter().any(|vx| vx.color[3] == emphasis));
}
