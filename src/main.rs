//! Terminal torus runner (default binary).
//!
//! Renders the selected animation to stdout forever (or for `--frames N`),
//! redrawing in place with a cursor-up escape after every frame.
//! Logs go to stderr and are silent unless `RUST_LOG` asks for them.

use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;
use tracing::{debug, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use tui_torus::config::{Command, RunConfig, USAGE};
use tui_torus::core::{Frame, RaymarchScene, Scene, SplatScene};
use tui_torus::term::{FramePacer, TerminalRenderer};
use tui_torus::types::RenderMode;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

fn main() -> Result<()> {
    init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = match RunConfig::from_env().parse_args(&args)? {
        Command::Run(config) => config,
        Command::Help => {
            print!("{}", USAGE);
            return Ok(());
        }
    };
    info!(
        mode = config.mode.as_str(),
        frame_ms = config.frame_ms,
        frames = ?config.frames,
        "starting"
    );

    let mut term = TerminalRenderer::new();
    let result = match config.mode {
        RenderMode::Raymarch => {
            let mut scene: RaymarchScene = RaymarchScene::default();
            run(&mut scene, &mut term, &config)
        }
        RenderMode::Splat => run(&mut SplatScene::default(), &mut term, &config),
    };

    // Leave the cursor below the animation even if drawing failed.
    let _ = term.finish();
    result
}

fn run<S: Scene>(scene: &mut S, term: &mut TerminalRenderer, config: &RunConfig) -> Result<()> {
    let mut frame = Frame::new();
    let mut pacer = FramePacer::new(config.frame_ms);
    let start = Instant::now();
    let mut drawn: u64 = 0;

    loop {
        if config.frames.is_some_and(|limit| drawn >= limit) {
            return Ok(());
        }

        let now_ms = start.elapsed().as_millis() as u64;
        if !pacer.should_render(now_ms) {
            thread::sleep(Duration::from_millis(pacer.until_due_ms(now_ms)));
            continue;
        }

        scene.render_into(&mut frame);
        term.draw(&frame)?;
        scene.advance();
        drawn += 1;

        if drawn % 1000 == 0 {
            debug!(frames = drawn, elapsed_ms = now_ms, "frame checkpoint");
        }
    }
}
