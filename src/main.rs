//! Spin Wheel entry point
//!
//! Terminal front end: builds a session, drives the spin frame by frame
//! and prints the winner.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;

use spin_wheel::settings::SpinSpeed;
use spin_wheel::wheel::{Easing, SpinDirection};
use spin_wheel::{OptionList, Override, Prompt, Settings, SpinController, SpinEvent, SpinRequest, SpinState};

#[derive(Parser, Debug)]
#[command(name = "spin-wheel", version, about, long_about = None)]
struct Cli {
    /// Comma-separated options (overrides the settings list)
    #[arg(short = 'o', long, value_delimiter = ',')]
    options: Vec<String>,

    /// File with one option per line
    #[arg(short = 'f', long)]
    file: Option<PathBuf>,

    /// Settings JSON file
    #[arg(short = 's', long, default_value = "spin-wheel.json")]
    settings: PathBuf,

    /// Skip the animation and reveal immediately
    #[arg(long)]
    fast: bool,

    /// Session mode; `admin` unlocks --rig
    #[arg(long)]
    mode: Option<String>,

    /// Force a winner: 1-based number or exact label
    #[arg(long, conflicts_with = "rig_label")]
    rig: Option<String>,

    /// Force a winner by exact label, even one that looks like a number
    #[arg(long)]
    rig_label: Option<String>,

    /// Speed preset (quick, normal, dramatic)
    #[arg(long)]
    speed: Option<String>,

    /// Easing curve (cubic-out, quart-out, quint-out, sine-out)
    #[arg(long)]
    easing: Option<String>,

    /// Spin direction (clockwise, counter-clockwise)
    #[arg(long)]
    direction: Option<String>,

    /// Seed for a reproducible session
    #[arg(long)]
    seed: Option<u64>,

    /// Run frames back to back instead of in real time
    #[arg(long)]
    no_sleep: bool,
}

/// Layer command-line choices over the loaded settings
fn apply_cli(cli: &Cli, settings: &mut Settings) -> anyhow::Result<()> {
    if cli.fast {
        settings.fast_spin = true;
    }
    if let Some(speed) = &cli.speed {
        let preset = SpinSpeed::from_str(speed).with_context(|| format!("unknown speed '{}'", speed))?;
        settings.apply_preset(preset);
    }
    if let Some(easing) = &cli.easing {
        settings.easing = Easing::from_str(easing).with_context(|| format!("unknown easing '{}'", easing))?;
    }
    if let Some(dir) = &cli.direction {
        settings.direction = SpinDirection::from_str(dir)
            .with_context(|| format!("unknown direction '{}'", dir))?;
    }
    Ok(())
}

/// Forced winner requested on the command line, if any
fn rig_override(cli: &Cli) -> Option<Override> {
    match &cli.rig_label {
        Some(label) => Some(Override::Label(label.clone())),
        None => cli.rig.as_deref().and_then(Override::parse),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut settings = Settings::load(&cli.settings);
    apply_cli(&cli, &mut settings)?;

    let options = if let Some(path) = &cli.file {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading options from {}", path.display()))?;
        OptionList::from_text(&text)
    } else if !cli.options.is_empty() {
        OptionList::new(&cli.options)
    } else {
        settings.option_list()
    };

    // Resolved once at session start, like a ?mode=admin query parameter
    let admin = cli.mode.as_deref() == Some("admin");
    let rigged = cli.rig.is_some() || cli.rig_label.is_some();
    if rigged && !admin {
        log::warn!("--rig given without --mode admin; it will be ignored");
    }

    let frame_ms = settings.frame_interval_ms();
    let mut controller = match cli.seed {
        Some(seed) => SpinController::with_seed(options, settings, admin, seed),
        None => SpinController::from_entropy(options, settings, admin),
    };

    if controller.prompt() == Prompt::AddOptions {
        println!("{}", Prompt::AddOptions.message());
        return Ok(());
    }

    let request = match rig_override(&cli) {
        Some(forced) => SpinRequest::forced(forced),
        None => SpinRequest::random(),
    };

    controller.spin(request)?;
    println!("{}", controller.prompt().message());

    while controller.state() == SpinState::Spinning {
        if !cli.no_sleep {
            std::thread::sleep(Duration::from_millis(frame_ms as u64));
        }
        let rotation = controller.advance(frame_ms);
        log::debug!("frame: rotation {:.2}", rotation);
    }

    for event in controller.drain_events() {
        if let SpinEvent::OverrideRejected { reason } = event {
            log::info!("override ignored: {}", reason);
        }
    }

    println!("{}", controller.prompt().message());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use spin_wheel::consts::DEFAULT_SPIN_DURATION_MS;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("spin-wheel").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_speed_and_easing_flags() {
        let cli = parse(&["--speed", "dramatic", "--easing", "quint-out", "--fast"]);
        let mut settings = Settings::default();
        apply_cli(&cli, &mut settings).unwrap();
        assert_eq!(settings.speed, SpinSpeed::Dramatic);
        assert_eq!(settings.spin_duration_ms, 6000);
        assert_eq!(settings.easing, Easing::QuintOut);
        assert!(settings.fast_spin);

        let mut settings = Settings::default();
        apply_cli(&parse(&[]), &mut settings).unwrap();
        assert_eq!(settings.spin_duration_ms, DEFAULT_SPIN_DURATION_MS);
    }

    #[test]
    fn test_unknown_speed_or_easing_is_an_error() {
        let mut settings = Settings::default();
        assert!(apply_cli(&parse(&["--speed", "warp"]), &mut settings).is_err());
        assert!(apply_cli(&parse(&["--easing", "bounce"]), &mut settings).is_err());
    }

    #[test]
    fn test_rig_flags() {
        assert_eq!(rig_override(&parse(&[])), None);
        assert_eq!(rig_override(&parse(&["--rig", "2"])), Some(Override::Index(2)));
        assert_eq!(
            rig_override(&parse(&["--rig-label", "20"])),
            Some(Override::Label("20".into()))
        );
        assert!(Cli::try_parse_from(["spin-wheel", "--rig", "1", "--rig-label", "1"]).is_err());
    }
}
