//! Canvas2D rendering of a [`Scene`].
//!
//! Everything is redrawn from scratch each frame. Canvas calls that return
//! `Result` only fail on non-finite input, which the scene never produces, so
//! those results are discarded.

use crate::constants::*;
use crate::view::{axis_ticks, rgba, scaled_font, PlotArea, ViewTransform};
use twin_core::{Emitter, Event, GridFamily, GridFrame, Leg, Scene, Segment, Signal};
use wasm_bindgen::JsValue;
use web_sys as web;

struct Painter<'a> {
    ctx: &'a web::CanvasRenderingContext2d,
    view: ViewTransform,
    dpr: f64,
}

pub fn draw_scene(ctx: &web::CanvasRenderingContext2d, width: f64, height: f64, dpr: f64, scene: &Scene) {
    let area = PlotArea::inset(width, height, dpr);
    let painter = Painter {
        ctx,
        view: ViewTransform::new(scene.viewport, area),
        dpr,
    };
    painter.clear(width, height);
    painter.background_grid();

    ctx.save();
    painter.clip_to_plot();
    for frame in &scene.grids {
        painter.grid_frame(frame);
    }
    for signal in scene
        .signals
        .from_stationary
        .iter()
        .chain(&scene.signals.from_traveler)
    {
        painter.signal(signal);
    }
    painter.light_cone(scene);
    painter.fixed_world_lines(scene);
    painter.traveler(scene);
    if let Some(line) = scene.simultaneity {
        painter.stroke_segment(
            line.segment,
            SIMULTANEITY_COLOR,
            SIMULTANEITY_WIDTH,
            &DASH_SIMULTANEITY,
        );
    }
    ctx.restore();

    painter.axes();
}

impl Painter<'_> {
    fn clear(&self, width: f64, height: f64) {
        self.ctx.set_fill_style_str(BACKGROUND);
        self.ctx.fill_rect(0.0, 0.0, width, height);
    }

    fn clip_to_plot(&self) {
        let a = self.view.area;
        self.ctx.begin_path();
        self.ctx.rect(a.left, a.top, a.width, a.height);
        self.ctx.clip();
    }

    fn set_dash(&self, dash: &[f64]) {
        let pattern = js_sys::Array::new();
        for d in dash {
            pattern.push(&JsValue::from_f64(d * self.dpr));
        }
        let _ = self.ctx.set_line_dash(&pattern);
    }

    fn stroke_path(&self, points: &[Event], color: &str, width: f64, dash: &[f64]) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        self.set_dash(dash);
        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(width * self.dpr);
        self.ctx.begin_path();
        let p = self.view.to_px(*first);
        self.ctx.move_to(p.x, p.y);
        for e in rest {
            let p = self.view.to_px(*e);
            self.ctx.line_to(p.x, p.y);
        }
        self.ctx.stroke();
    }

    fn stroke_segment(&self, seg: Segment, color: &str, width: f64, dash: &[f64]) {
        self.stroke_path(&[seg.start, seg.end], color, width, dash);
    }

    fn dot(&self, at: Event, radius: f64, fill: &str, rim: Option<&str>) {
        let p = self.view.to_px(at);
        self.ctx.begin_path();
        let _ = self
            .ctx
            .arc(p.x, p.y, radius * self.dpr, 0.0, std::f64::consts::TAU);
        self.ctx.set_fill_style_str(fill);
        self.ctx.fill();
        if let Some(rim) = rim {
            self.set_dash(&[]);
            self.ctx.set_stroke_style_str(rim);
            self.ctx.set_line_width(self.dpr);
            self.ctx.stroke();
        }
    }

    fn text(&self, text: &str, at: Event, offset: (f64, f64), color: &str, font: &str) {
        let p = self.view.to_px(at);
        self.ctx.set_fill_style_str(color);
        self.ctx.set_font(&scaled_font(font, self.dpr));
        let _ = self
            .ctx
            .fill_text(text, p.x + offset.0 * self.dpr, p.y + offset.1 * self.dpr);
    }

    fn background_grid(&self) {
        let vp = self.view.viewport;
        for x in axis_ticks(vp.x_min, vp.x_max, MAX_AXIS_TICKS) {
            self.stroke_segment(
                Segment::new(Event::new(x, vp.t_min), Event::new(x, vp.t_max)),
                BACKGROUND_GRID,
                THIN_LINE_WIDTH,
                &[],
            );
        }
        for t in axis_ticks(vp.t_min, vp.t_max, MAX_AXIS_TICKS) {
            self.stroke_segment(
                Segment::new(Event::new(vp.x_min, t), Event::new(vp.x_max, t)),
                BACKGROUND_GRID,
                THIN_LINE_WIDTH,
                &[],
            );
        }
    }

    fn grid_frame(&self, frame: &GridFrame) {
        let rgb = match frame.leg {
            Leg::Outbound => GRID_OUTBOUND_RGB,
            Leg::Inbound => GRID_INBOUND_RGB,
        };
        let color = rgba(rgb, frame.emphasis);
        for line in &frame.lines {
            let (dash, prefix): (&[f64], &str) = match line.family {
                GridFamily::Time => (DASH_GRID_TIME.as_slice(), "t'"),
                GridFamily::Position => (DASH_GRID_POSITION.as_slice(), "x'"),
            };
            self.stroke_segment(line.segment, &color, GRID_LINE_WIDTH, dash);
            if let Some(anchor) = line.label_at {
                self.text(
                    &format!("{prefix}={}", line.value),
                    anchor,
                    (4.0, -2.0),
                    &color,
                    FONT_GRID_LABEL,
                );
            }
        }
    }

    fn signal(&self, s: &Signal) {
        let (color, rim) = match s.emitter {
            Emitter::Stationary => (STATIONARY_SIGNAL_COLOR, STATIONARY_SIGNAL_RIM),
            Emitter::Traveler => (TRAVELER_SIGNAL_COLOR, TRAVELER_SIGNAL_RIM),
        };
        self.stroke_segment(
            Segment::new(s.emission, s.front),
            color,
            THIN_LINE_WIDTH,
            &DASH_SIGNAL,
        );
        self.dot(s.emission, EMISSION_MARKER_RADIUS, color, None);
        if let Some(at) = s.reception() {
            self.dot(at, RECEPTION_MARKER_RADIUS, color, Some(rim));
        }
    }

    fn light_cone(&self, scene: &Scene) {
        for ray in scene.light_cone {
            self.stroke_segment(ray, LIGHT_COLOR, THIN_LINE_WIDTH, &DASH_LIGHT);
        }
        // label runs along the right-moving ray
        let anchor = Event::new(2.0, 2.0);
        let p = self.view.to_px(anchor);
        self.ctx.save();
        let _ = self.ctx.translate(p.x, p.y - 5.0 * self.dpr);
        let _ = self.ctx.rotate(self.view.screen_angle(1.0, 1.0));
        self.ctx.set_fill_style_str(LIGHT_LABEL_COLOR);
        self.ctx.set_font(&scaled_font(FONT_SMALL, self.dpr));
        let _ = self.ctx.fill_text("Light Speed (c)", 0.0, 0.0);
        self.ctx.restore();
    }

    fn fixed_world_lines(&self, scene: &Scene) {
        self.stroke_segment(
            scene.destination_line,
            DESTINATION_COLOR,
            THIN_LINE_WIDTH,
            &DASH_DESTINATION,
        );
        self.text(
            "Planet",
            Event::new(scene.destination_line.start.x, -0.5),
            (0.0, 0.0),
            AXIS_COLOR,
            FONT,
        );
        self.stroke_segment(
            scene.stationary_world_line,
            STATIONARY_COLOR,
            WORLD_LINE_WIDTH,
            &[],
        );
        self.text(
            "Bob",
            scene.stationary_world_line.end,
            (-10.0, -10.0),
            STATIONARY_COLOR,
            FONT,
        );
        self.dot(scene.stationary_now, STATIONARY_MARKER_RADIUS, STATIONARY_COLOR, None);
    }

    fn traveler(&self, scene: &Scene) {
        self.ctx.set_global_alpha(GHOST_ALPHA);
        self.stroke_path(&scene.traveler_ghost, TRAVELER_COLOR, GHOST_LINE_WIDTH, &[]);
        self.ctx.set_global_alpha(1.0);
        self.stroke_path(&scene.traveler_active, TRAVELER_COLOR, WORLD_LINE_WIDTH, &[]);
        self.dot(scene.traveler_now, TRAVELER_MARKER_RADIUS, TRAVELER_COLOR, None);
    }

    fn axes(&self) {
        let a = self.view.area;
        let vp = self.view.viewport;
        let ctx = self.ctx;
        self.set_dash(&[]);
        ctx.set_stroke_style_str(AXIS_COLOR);
        ctx.set_fill_style_str(AXIS_COLOR);
        ctx.set_line_width(self.dpr);
        ctx.set_font(&scaled_font(FONT, self.dpr));

        ctx.begin_path();
        ctx.move_to(a.left, a.top);
        ctx.line_to(a.left, a.bottom());
        ctx.line_to(a.right(), a.bottom());
        ctx.stroke();

        let tick = TICK_LENGTH_PX * self.dpr;
        ctx.set_text_align("center");
        ctx.set_text_baseline("top");
        for x in axis_ticks(vp.x_min, vp.x_max, MAX_AXIS_TICKS) {
            let px = self.view.to_px(Event::new(x, vp.t_min)).x;
            ctx.begin_path();
            ctx.move_to(px, a.bottom());
            ctx.line_to(px, a.bottom() + tick);
            ctx.stroke();
            let _ = ctx.fill_text(&tick_label(x), px, a.bottom() + tick + 2.0 * self.dpr);
        }
        ctx.set_text_align("right");
        ctx.set_text_baseline("middle");
        for t in axis_ticks(vp.t_min, vp.t_max, MAX_AXIS_TICKS) {
            let py = self.view.to_px(Event::new(vp.x_min, t)).y;
            ctx.begin_path();
            ctx.move_to(a.left - tick, py);
            ctx.line_to(a.left, py);
            ctx.stroke();
            let _ = ctx.fill_text(&tick_label(t), a.left - tick - 2.0 * self.dpr, py);
        }

        ctx.set_text_baseline("alphabetic");
        let _ = ctx.fill_text("Position (ly)", a.right(), a.bottom() - 10.0 * self.dpr);
        ctx.save();
        let _ = ctx.translate(a.left + 20.0 * self.dpr, a.top);
        let _ = ctx.rotate(-std::f64::consts::FRAC_PI_2);
        let _ = ctx.fill_text("Time (years)", 0.0, 0.0);
        ctx.restore();
        ctx.set_text_align("start");
    }
}

fn tick_label(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{v:.0}")
    } else {
        format!("{v:.1}")
    }
}
