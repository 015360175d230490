//! Host shim and entry point.
//!
//! This binary is the thin integration layer between the mediabridge library
//! and a line-oriented host: it translates stdin commands into typed adapter
//! calls, pumps the editing session, and prints the newest editor state
//! projection as JSON on stdout after every mutation.
//!
//! # Commands
//!
//! ```text
//! image <src> [alt]
//! audio <src> [title]
//! youtube <src> [width height]
//! vimeo <src> [width height]
//! soundcloud <src> [width height]
//! twitter <src>
//! state
//! quit
//! ```
//!
//! # Configuration
//!
//! Read from environment variables and parsed through `Config::from_map`:
//!
//! - `MEDIABRIDGE_EXTENSION_FILE`: TOML extension configuration override
//! - `MEDIABRIDGE_TRACE_LEVEL`: tracing level (`trace` .. `error`)

use std::collections::BTreeMap;
use std::io::{self, BufRead, Write};

use mediabridge::domain::Result;
use mediabridge::host::{AudioOptions, EmbedOptions, HostAdapter, ImageOptions};
use mediabridge::{initialize, Config, EditorSession, MemoryDocument};

/// Builds the runtime configuration from `MEDIABRIDGE_*` environment
/// variables.
fn config_from_env() -> Config {
    let mut map = BTreeMap::new();
    if let Ok(value) = std::env::var("MEDIABRIDGE_EXTENSION_FILE") {
        map.insert("extension_file".to_string(), value);
    }
    if let Ok(value) = std::env::var("MEDIABRIDGE_TRACE_LEVEL") {
        map.insert("trace_level".to_string(), value);
    }
    Config::from_map(&map)
}

/// Parses an optional `width height` tail into embed options.
fn embed_options(args: &[&str]) -> EmbedOptions {
    EmbedOptions {
        width: args.first().and_then(|s| s.parse().ok()),
        height: args.get(1).and_then(|s| s.parse().ok()),
    }
}

/// Dispatches one stdin command to the adapter.
///
/// Returns `false` for unknown commands; transport and codec failures
/// propagate.
fn run_command(adapter: &HostAdapter, command: &str, args: &[&str]) -> Result<bool> {
    let Some(src) = args.first() else {
        return Ok(false);
    };

    match command {
        "image" => adapter.set_media_image(
            *src,
            ImageOptions {
                alt: args.get(1).map(ToString::to_string),
                ..Default::default()
            },
        )?,
        "audio" => adapter.set_audio(
            *src,
            AudioOptions {
                title: args.get(1).map(ToString::to_string),
                ..Default::default()
            },
        )?,
        "youtube" => adapter.set_youtube(*src, embed_options(&args[1..]))?,
        "vimeo" => adapter.set_vimeo(*src, embed_options(&args[1..]))?,
        "soundcloud" => adapter.set_sound_cloud(*src, embed_options(&args[1..]))?,
        "twitter" => adapter.set_twitter(*src)?,
        _ => return Ok(false),
    }
    Ok(true)
}

/// Pumps the session and prints the newest projection as JSON.
fn print_state(
    adapter: &mut HostAdapter,
    session: &mut EditorSession<MemoryDocument>,
) -> Result<()> {
    session.pump()?;
    let state = adapter.state()?.unwrap_or_default();
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", serde_json::to_string(&state)?)?;
    Ok(())
}

fn main() -> Result<()> {
    let config = config_from_env();
    mediabridge::observability::init_tracing(&config);

    let (mut adapter, mut session) = initialize(&config);
    tracing::debug!("mediabridge shim ready");

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else {
            continue;
        };
        let args: Vec<&str> = parts.collect();

        match command {
            "quit" | "exit" => break,
            "state" => {
                session.publish_state()?;
                print_state(&mut adapter, &mut session)?;
            }
            _ => {
                if run_command(&adapter, command, &args)? {
                    print_state(&mut adapter, &mut session)?;
                } else {
                    eprintln!("unknown command: {line}");
                }
            }
        }
    }

    Ok(())
}
