use crate::draw;
use crate::overlay;
use crate::readout::Readout;
use std::cell::RefCell;
use std::rc::Rc;
use twin_core::{ClockStep, Session};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub session: Rc<RefCell<Session>>,
    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,
    pub last_readout: Option<Readout>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let (scene, readout) = {
            let mut session = self.session.borrow_mut();
            match session.tick() {
                Some(ClockStep::StageChanged(stage)) => log::info!("[frame] stage {stage}"),
                Some(ClockStep::Finished) => log::info!("[frame] trip finished"),
                _ => {}
            }
            let scene = session.scene();
            let readout = Readout::new(&session, &scene);
            (scene, readout)
        };

        let dpr = web::window().map_or(1.0, |w| w.device_pixel_ratio());
        draw::draw_scene(
            &self.ctx,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
            dpr,
            &scene,
        );

        if self.last_readout.as_ref() != Some(&readout) {
            overlay::apply(&self.document, &readout, self.last_readout.as_ref());
            self.last_readout = Some(readout);
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
