//! Runtime configuration for the `tui-torus` binary.
//!
//! The rendering core takes no configuration; everything here only decides
//! which animation runs and how fast frames are written.
//!
//! Precedence: built-in defaults, then environment, then command line.
//!
//! - `TORUS_MODE`: `raymarch` or `splat`
//! - `TORUS_FRAME_MS`: delay between frames in milliseconds (`0` = unthrottled)
//! - `TORUS_FRAMES`: stop after this many frames
//!
//! Invalid environment values are ignored; invalid arguments are errors.

use anyhow::{anyhow, Result};

use crate::types::{RenderMode, DEFAULT_FRAME_MS};

pub const USAGE: &str = "\
usage: tui-torus [--mode raymarch|splat] [--frame-ms N] [--frames N]

  --mode      animation to run (default: raymarch)
  --frame-ms  milliseconds between frames, 0 for no delay (default: 33)
  --frames    stop after N frames (default: run until interrupted)
  -h, --help  print this help
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub mode: RenderMode,
    pub frame_ms: u64,
    pub frames: Option<u64>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            mode: RenderMode::Raymarch,
            frame_ms: DEFAULT_FRAME_MS,
            frames: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Run(RunConfig),
    Help,
}

impl RunConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an environment lookup function.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let mode = lookup("TORUS_MODE")
            .and_then(|s| RenderMode::from_str(s.trim()))
            .unwrap_or(defaults.mode);
        let frame_ms = lookup("TORUS_FRAME_MS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.frame_ms);
        let frames = lookup("TORUS_FRAMES")
            .and_then(|s| s.trim().parse().ok())
            .or(defaults.frames);

        Self {
            mode,
            frame_ms,
            frames,
        }
    }

    /// Apply command-line arguments (without the program name) on top of `self`.
    pub fn parse_args(mut self, args: &[String]) -> Result<Command> {
        let mut i = 0usize;
        while i < args.len() {
            match args[i].as_str() {
                "-h" | "--help" => return Ok(Command::Help),
                "--mode" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for --mode"))?;
                    self.mode = RenderMode::from_str(v)
                        .ok_or_else(|| anyhow!("invalid --mode value: {}", v))?;
                }
                "--frame-ms" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for --frame-ms"))?;
                    self.frame_ms = v
                        .parse::<u64>()
                        .map_err(|_| anyhow!("invalid --frame-ms value: {}", v))?;
                }
                "--frames" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for --frames"))?;
                    let n = v
                        .parse::<u64>()
                        .map_err(|_| anyhow!("invalid --frames value: {}", v))?;
                    self.frames = Some(n);
                }
                other => {
                    return Err(anyhow!("unknown argument: {}", other));
                }
            }
            i += 1;
        }
        Ok(Command::Run(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn env_lookup_ignores_garbage() {
        let cfg = RunConfig::from_lookup(|key| match key {
            "TORUS_MODE" => Some("splat".to_string()),
            "TORUS_FRAME_MS" => Some("fast".to_string()),
            _ => None,
        });
        assert_eq!(cfg.mode, RenderMode::Splat);
        assert_eq!(cfg.frame_ms, DEFAULT_FRAME_MS);
        assert_eq!(cfg.frames, None);
    }

    #[test]
    fn args_override_env() {
        let base = RunConfig::from_lookup(|key| match key {
            "TORUS_FRAME_MS" => Some("100".to_string()),
            _ => None,
        });
        let cmd = base.parse_args(&args(&["--frame-ms", "0"])).unwrap();
        match cmd {
            Command::Run(cfg) => assert_eq!(cfg.frame_ms, 0),
            Command::Help => panic!("expected run"),
        }
    }
}
