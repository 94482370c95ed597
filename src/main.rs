use log::{error, info};
use mix_colors::app::{AppError, DisplaySnapshot, MixScreen, SelectionEvent};
use mix_colors::config::MixerConfig;
use mix_colors::domain::{Color, InputSlot};
use std::path::PathBuf;
use std::process::ExitCode;

const USAGE: &str = "usage: mix-colors [--config PATH] [--size WIDTHxHEIGHT] COLOR_A COLOR_B";

struct Args {
    config: Option<PathBuf>,
    size: Option<(f64, f64)>,
    color_a: String,
    color_b: String,
}

fn parse_args(mut raw: impl Iterator<Item = String>) -> Result<Args, AppError> {
    let usage = || AppError::Usage(USAGE.to_string());
    let mut config = None;
    let mut size = None;
    let mut colors = Vec::new();

    while let Some(arg) = raw.next() {
        match arg.as_str() {
            "--config" => config = Some(PathBuf::from(raw.next().ok_or_else(usage)?)),
            "--size" => {
                let value = raw.next().ok_or_else(usage)?;
                size = Some(parse_size(&value).ok_or_else(usage)?);
            }
            "-h" | "--help" => return Err(usage()),
            flag if flag.starts_with("--") => return Err(usage()),
            _ => colors.push(arg),
        }
    }

    let [color_a, color_b]: [String; 2] = colors.try_into().map_err(|_| usage())?;
    Ok(Args {
        config,
        size,
        color_a,
        color_b,
    })
}

fn parse_size(value: &str) -> Option<(f64, f64)> {
    let (width, height) = value.split_once('x')?;
    Some((width.trim().parse().ok()?, height.trim().parse().ok()?))
}

fn print_snapshot(snapshot: &DisplaySnapshot) {
    let rows = [
        ("A", snapshot.input_a, &snapshot.name_a),
        ("B", snapshot.input_b, &snapshot.name_b),
        ("Mixed", snapshot.mixed, &snapshot.mixed_name),
    ];
    for (label, color, name) in rows {
        println!("{:<6} {} {} ({})", format!("{label}:"), color.to_hex(), color, name);
    }
    println!(
        "Layout: {:?} stack, {} x {}",
        snapshot.layout.axis,
        snapshot.layout.content_extent(),
        snapshot.layout.swatch_size
    );
}

fn run() -> Result<(), AppError> {
    let args = parse_args(std::env::args().skip(1))?;
    let config = MixerConfig::load_or_default(args.config.as_deref())?;
    let mut screen = MixScreen::new(&config)?;

    if let Some((width, height)) = args.size {
        screen.resize(width, height);
    }

    let color_a: Color = args.color_a.parse()?;
    let color_b: Color = args.color_b.parse()?;
    screen.handle_selection(SelectionEvent::new(InputSlot::A, color_a))?;
    let snapshot = screen.handle_selection(SelectionEvent::new(InputSlot::B, color_b))?;

    info!("Mixed {} and {}", args.color_a, args.color_b);
    print_snapshot(&snapshot);
    Ok(())
}

/// Process exit status for a failed run: 2 for usage errors, 1 otherwise
fn exit_status(err: &AppError) -> u8 {
    match err {
        AppError::Usage(_) => 2,
        _ => 1,
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match &err {
                AppError::Usage(usage) => eprintln!("{}", usage),
                other => error!("{}", other),
            }
            ExitCode::from(exit_status(&err))
        }
    }
}
