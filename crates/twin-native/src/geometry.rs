//! Flattening a [`Scene`] into colored line-list vertices.

use crate::constants::*;
use glam::{DVec2, Mat4};
use twin_core::{Emitter, Event, GridFamily, Leg, Scene, Segment, Viewport};

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub pos: [f32; 2],
    pub color: [f32; 4],
}

/// Orthographic projection of the viewport (plus padding) onto clip space.
pub fn view_proj(viewport: &Viewport) -> Mat4 {
    let pad_x = (viewport.x_max - viewport.x_min) as f32 * FRAME_PADDING;
    let pad_t = (viewport.t_max - viewport.t_min) as f32 * FRAME_PADDING;
    Mat4::orthographic_rh(
        viewport.x_min as f32 - pad_x,
        viewport.x_max as f32 + pad_x,
        viewport.t_min as f32 - pad_t,
        viewport.t_max as f32 + pad_t,
        -1.0,
        1.0,
    )
}

/// Line-list builder: every two vertices form one segment.
pub struct LineBatch {
    vertices: Vec<Vertex>,
    marker: f64,
}

impl LineBatch {
    pub fn new(viewport: &Viewport) -> Self {
        let span = (viewport.x_max - viewport.x_min).max(viewport.t_max - viewport.t_min);
        Self {
            vertices: Vec::new(),
            marker: span * MARKER_SIZE,
        }
    }

    pub fn into_vertices(self) -> Vec<Vertex> {
        self.vertices
    }

    pub fn segment(&mut self, seg: Segment, color: [f32; 4]) {
        for e in [seg.start, seg.end] {
            self.vertices.push(Vertex {
                pos: [e.x as f32, e.t as f32],
                color,
            });
        }
    }

    pub fn path(&mut self, points: &[Event], color: [f32; 4]) {
        for pair in points.windows(2) {
            self.segment(Segment::new(pair[0], pair[1]), color);
        }
    }

    /// Dashes of `DASH_LENGTH` with equal gaps, starting at `seg.start`.
    pub fn dashed(&mut self, seg: Segment, color: [f32; 4]) {
        let a = seg.start.to_dvec2();
        let b = seg.end.to_dvec2();
        let len = a.distance(b);
        if len <= f64::EPSILON {
            return;
        }
        let mut s = 0.0;
        while s < len {
            let e = (s + DASH_LENGTH).min(len);
            self.segment(
                Segment::new(lerp(a, b, s / len), lerp(a, b, e / len)),
                color,
            );
            s += 2.0 * DASH_LENGTH;
        }
    }

    /// Diamond around `at`, `scale` times the standard marker size.
    pub fn diamond(&mut self, at: Event, scale: f64, color: [f32; 4]) {
        let r = self.marker * scale;
        let pts = [
            Event::new(at.x + r, at.t),
            Event::new(at.x, at.t + r),
            Event::new(at.x - r, at.t),
            Event::new(at.x, at.t - r),
            Event::new(at.x + r, at.t),
        ];
        self.path(&pts, color);
    }
}

fn lerp(a: DVec2, b: DVec2, s: f64) -> Event {
    Event::from(a.lerp(b, s))
}

/// Every primitive of the scene, back to front.
pub fn scene_vertices(scene: &Scene) -> Vec<Vertex> {
    let mut batch = LineBatch::new(&scene.viewport);
    let vp = scene.viewport;

    // axes through the origin
    batch.segment(
        Segment::new(Event::new(vp.x_min, 0.0), Event::new(vp.x_max, 0.0)),
        AXIS_COLOR,
    );
    batch.segment(
        Segment::new(Event::new(0.0, vp.t_min), Event::new(0.0, vp.t_max)),
        AXIS_COLOR,
    );

    for frame in &scene.grids {
        let rgb = match frame.leg {
            Leg::Outbound => GRID_OUTBOUND_RGB,
            Leg::Inbound => GRID_INBOUND_RGB,
        };
        let color = [rgb[0], rgb[1], rgb[2], frame.emphasis];
        for line in &frame.lines {
            match line.family {
                GridFamily::Time => batch.dashed(line.segment, color),
                GridFamily::Position => batch.segment(line.segment, color),
            }
        }
    }

    for s in scene
        .signals
        .from_stationary
        .iter()
        .chain(&scene.signals.from_traveler)
    {
        let color = match s.emitter {
            Emitter::Stationary => STATIONARY_SIGNAL_COLOR,
            Emitter::Traveler => TRAVELER_SIGNAL_COLOR,
        };
        batch.dashed(Segment::new(s.emission, s.front), color);
        batch.diamond(s.emission, SMALL_MARKER_SIZE / MARKER_SIZE, color);
        if let Some(at) = s.reception() {
            batch.diamond(at, 2.0 * SMALL_MARKER_SIZE / MARKER_SIZE, color);
        }
    }

    for ray in scene.light_cone.iter().filter_map(|ray| vp.clip(*ray)) {
        batch.dashed(ray, LIGHT_COLOR);
    }

    batch.dashed(scene.destination_line, DESTINATION_COLOR);
    batch.segment(scene.stationary_world_line, STATIONARY_COLOR);
    batch.path(&scene.traveler_ghost, GHOST_COLOR);
    batch.path(&scene.traveler_active, TRAVELER_COLOR);
    batch.diamond(scene.traveler_now, 1.0, TRAVELER_COLOR);
    batch.diamond(scene.stationary_now, 0.6, STATIONARY_COLOR);

    if let Some(line) = scene.simultaneity {
        batch.dashed(line.segment, SIMULTANEITY_COLOR);
    }

    batch.into_vertices()
}
