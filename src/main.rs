pub(crate) mod artnet;
pub(crate) mod artnetoutput;
pub(crate) mod channels;
pub(crate) mod color;
pub(crate) mod config;
pub(crate) mod error;
pub(crate) mod fader;
pub(crate) mod intervaltimer;
pub(crate) mod presets;

use std::net::{SocketAddr, ToSocketAddrs};
use std::path::PathBuf;

use clap::Parser;

use crate::artnetoutput::ArtNetOutput;
use crate::channels::ChannelBuffer;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::fader::FRAME_RATE;
use crate::intervaltimer::IntervalTimer;
use crate::presets::Presets;

#[derive(Parser)]
struct Cli {
    /// The configuration file to use
    #[arg(short, long, value_name = "FILE", default_value = "funklicht.toml")]
    config: PathBuf,

    /// Preset name or hex color (e.g. "#20c020") to show
    #[arg(required_unless_present_any = ["blackout", "hold"])]
    color: Option<String>,

    /// First DMX channel of the fixture
    #[arg(short = 'n', long, default_value_t = 1)]
    channel: u16,

    /// Fade toward the color over this many seconds
    #[arg(short, long, value_name = "SECONDS")]
    fade: Option<f32>,

    /// Keep retransmitting the current state at the DMX frame rate
    #[arg(long)]
    hold: bool,

    /// Send an all-zero frame and exit
    #[arg(long)]
    blackout: bool,
}

fn resolve_target(config: &Config) -> Result<SocketAddr> {
    let mut addrs = (config.target.as_str(), config.port).to_socket_addrs()?;
    addrs
        .next()
        .ok_or_else(|| Error::UnresolvableTarget(config.target.clone()))
}

/// On SIGINT, push one blackout frame so fixtures do not stay stuck on
/// the last state, then exit. The handler runs on its own thread while
/// a fade may still own the live output, so it builds a throwaway
/// output with a fresh zero-filled buffer instead.
fn install_blackout_handler(target_addr: SocketAddr, universe: u8, physical: u8) {
    let result = ctrlc::set_handler(move || {
        match ArtNetOutput::new(target_addr, universe, physical) {
            Ok(output) => {
                if let Err(err) = output.flush() {
                    log::warn!("Blackout on shutdown failed: {}", err);
                }
            }
            Err(err) => log::warn!("Blackout on shutdown failed: {}", err),
        }
        std::process::exit(0);
    });

    if let Err(err) = result {
        panic!("Cannot install shutdown handler: {}", err);
    }
}

fn show_color(
    output: &mut ArtNetOutput,
    presets: &Presets,
    args: &Cli,
    color_arg: &str,
) -> Result<()> {
    // A leading '#' means a literal color, anything else is looked up
    // in the presets file. A preset's own fade time applies unless
    // --fade overrides it.
    let (hex, fade_secs) = if color_arg.starts_with('#') {
        (color_arg.to_string(), args.fade)
    } else {
        let preset = presets.get(color_arg)?;
        (preset.color.clone(), args.fade.or(preset.fade))
    };

    match fade_secs {
        Some(secs) => {
            let mut destination = ChannelBuffer::new();
            destination.load(output.snapshot());
            color::write_hex(&mut destination, args.channel, &hex)?;
            output.fade(destination.snapshot(), secs)
        }
        None => {
            output.set_hex(args.channel, &hex)?;
            output.flush()
        }
    }
}

/// Art-Net nodes fall back to their own idle behavior when frames stop
/// arriving, so keep refreshing the current state until interrupted.
fn hold(output: &ArtNetOutput) {
    log::info!("Holding current state, ^C to quit");

    let mut timer = IntervalTimer::new(FRAME_RATE as f32, true);
    loop {
        if let Err(err) = output.flush() {
            log::warn!("Art-Net send failed: {}", err);
        }
        timer.sleep_until_next_tick();
    }
}

fn main() {
    env_logger::init();
    let args = Cli::parse();

    let config = match Config::load(&args.config) {
        Ok(config) => config,
        Err(err) => panic!("Cannot load configuration: {}", err),
    };

    let presets = match Presets::load(&config.presets) {
        Ok(presets) => presets,
        Err(err) => panic!("Cannot load presets: {}", err),
    };

    let target_addr = match resolve_target(&config) {
        Ok(addr) => addr,
        Err(err) => panic!("Cannot resolve Art-Net node address: {}", err),
    };

    let mut output = match ArtNetOutput::new(target_addr, config.universe, config.physical) {
        Ok(output) => output,
        Err(err) => panic!("Cannot set up Art-Net output: {}", err),
    };

    install_blackout_handler(target_addr, config.universe, config.physical);

    if args.blackout {
        if let Err(err) = output.blackout() {
            panic!("Cannot send blackout frame: {}", err);
        }
        return;
    }

    if let Some(color_arg) = args.color.as_deref() {
        if let Err(err) = show_color(&mut output, &presets, &args, color_arg) {
            panic!("Cannot show color: {}", err);
        }
    }

    if args.hold {
        hold(&output);
    }
}
