use std::io::{self, Write};
use std::time::{Duration, Instant};

use pixels::{Pixels, SurfaceTexture};
use tracing::{debug, error, info, warn};
use winit::{
    dpi::LogicalSize,
    event::{ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};

use crate::config::GameConfig;
use crate::error::Result;
use crate::game::{Command, Game, GameOverReason, Reporter};
use crate::game_input::command_for_key;
use crate::render::{self, Style};

const TITLE: &str = "Segment snake";

/// Collects score and game-over notices during a command so the window can
/// pick them up afterwards.
#[derive(Default)]
struct WindowReporter {
    title: Option<String>,
}

impl Reporter for WindowReporter {
    fn score_changed(&mut self, score: u32) {
        self.title = Some(format!("{TITLE} | score {score}"));
    }

    fn game_over(&mut self, reason: GameOverReason, score: u32) {
        let why = match reason {
            GameOverReason::LeftField => "left the field",
            GameOverReason::SelfCollision => "bit its own tail",
        };
        self.title = Some(format!("{TITLE} | game over ({why}) | score {score}"));
        if let Err(err) = ring_bell(&mut io::stdout()) {
            debug!(%err, "could not ring terminal bell");
        }
    }
}

/// Terminal bell, standing in for the game-over sound.
fn ring_bell(out: &mut impl Write) -> io::Result<()> {
    out.write_all(b"\x07")?;
    out.flush()
}

/// Single exit path for window close and Escape.
fn close(game: &Game, control_flow: &mut ControlFlow, cause: &str) {
    info!(score = game.score(), cause, "window closed");
    *control_flow = ControlFlow::Exit;
}

/// Opens the window and runs the game until the window is closed.
/// Only returns on setup failure.
pub fn run(config: GameConfig) -> Result<()> {
    let event_loop = EventLoop::new();
    let bounds = config.bounds();

    let window = WindowBuilder::new()
        .with_title(format!("{TITLE} | score 0"))
        .with_inner_size(LogicalSize::new(
            bounds.width as f64 * config.window_scale,
            bounds.height as f64 * config.window_scale,
        ))
        .with_resizable(false)
        .build(&event_loop)?;

    let size = window.inner_size();
    let surface = SurfaceTexture::new(size.width, size.height, &window);
    let mut pixels = Pixels::new(bounds.width, bounds.height, surface)?;

    let style = Style::from(&config);
    let mut game = Game::new(&config);
    let mut reporter = WindowReporter::default();
    let tick = Duration::from_millis(config.tick_ms);
    let mut next_tick = Instant::now() + tick;

    info!(
        width = bounds.width,
        height = bounds.height,
        tick_ms = config.tick_ms,
        seed = ?config.seed,
        "starting game"
    );

    event_loop.run(move |event, _, control_flow| {
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    close(&game, control_flow, "close requested");
                    return;
                }
                WindowEvent::KeyboardInput {
                    input:
                        KeyboardInput {
                            state: ElementState::Pressed,
                            virtual_keycode: Some(key),
                            ..
                        },
                    ..
                } => {
                    if key == VirtualKeyCode::Escape {
                        close(&game, control_flow, "escape");
                        return;
                    }
                    if let Some(command) = command_for_key(key) {
                        game.handle(command, &mut reporter);
                    }
                }
                WindowEvent::Resized(size) => {
                    if let Err(err) = pixels.resize_surface(size.width, size.height) {
                        error!(%err, "failed to resize surface");
                        *control_flow = ControlFlow::Exit;
                        return;
                    }
                }
                _ => {}
            },

            Event::MainEventsCleared => {
                let now = Instant::now();
                if game.is_running() && now >= next_tick {
                    game.handle(Command::Tick, &mut reporter);
                    next_tick += tick;
                    if next_tick < now {
                        warn!(behind_ms = (now - next_tick).as_millis() as u64, "tick overran, resyncing");
                        next_tick = now + tick;
                    }
                    window.request_redraw();
                }
            }

            Event::RedrawRequested(_) => {
                render::draw(pixels.frame_mut(), &game, &style);
                if let Err(err) = pixels.render() {
                    error!(%err, "render failed");
                    *control_flow = ControlFlow::Exit;
                    return;
                }
            }
            _ => {}
        }

        if let Some(title) = reporter.title.take() {
            window.set_title(&title);
        }

        *control_flow = if game.is_running() {
            ControlFlow::WaitUntil(next_tick)
        } else {
            ControlFlow::Wait
        };
    });
}
