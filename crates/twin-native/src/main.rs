use twin_core::{ClockStep, Session};
use winit::{
    event::*,
    event_loop::EventLoop,
    keyboard::PhysicalKey,
    window::WindowBuilder,
};

mod constants;
mod geometry;
mod input;
mod render;

use render::GpuState;

fn window_title(session: &Session) -> String {
    let scene = session.scene();
    format!(
        "{} | {} | gamma {:.3} | Bob {:.2} y | Alice {:.2} y",
        constants::WINDOW_TITLE,
        scene.stage,
        session.params().gamma(),
        scene.stationary_elapsed,
        scene.traveler_elapsed,
    )
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let mut session = Session::new();
    let params = session.params();
    log::info!(
        "[init] distance={} ly velocity={}c gamma={:.3}",
        params.distance(),
        params.velocity(),
        params.gamma()
    );

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title(window_title(&session))
        .build(&event_loop)?;

    let mut state = pollster::block_on(GpuState::new(&window))?;
    log::info!("{}", session.scene().explanation);

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent {
            event: WindowEvent::Resized(size),
            ..
        } => state.resize(size),
        Event::WindowEvent {
            event: WindowEvent::CloseRequested,
            ..
        } => elwt.exit(),
        Event::WindowEvent {
            event:
                WindowEvent::KeyboardInput {
                    event:
                        KeyEvent {
                            physical_key: PhysicalKey::Code(code),
                            state: ElementState::Pressed,
                            ..
                        },
                    ..
                },
            ..
        } => {
            if code == winit::keyboard::KeyCode::Escape {
                elwt.exit();
                return;
            }
            if let Some(command) = input::command_for_key(code) {
                if session.apply(command) {
                    log::debug!("[input] {command:?}");
                    state.window.set_title(&window_title(&session));
                }
            }
        }
        Event::AboutToWait => {
            match session.tick() {
                Some(ClockStep::StageChanged(stage)) => {
                    log::info!("[frame] stage {stage}");
                    log::info!("{}", session.scene().explanation);
                }
                Some(ClockStep::Finished) => log::info!("[frame] trip finished"),
                _ => {}
            }
            let scene = session.scene();
            if session.playback().is_playing() {
                state.window.set_title(&window_title(&session));
            }
            match state.render(&scene) {
                Ok(_) => state.window.request_redraw(),
                Err(wgpu::SurfaceError::Lost) => state.resize(state.window.inner_size()),
                Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                Err(e) => log::warn!("[render] {e:?}"),
            }
        }
        _ => {}
    })?;
    Ok(())
}
