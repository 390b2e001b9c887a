use anyhow::{Context, Result};
use black_remover::RemoveConfig;
use clap::Parser;
use std::{path::PathBuf, process::ExitCode};

/// Replace the near-black background of an image with transparency
#[derive(Parser, Debug)]
#[command(name = "unblack", version, about, long_about = None)]
struct Args {
    /// Image to convert
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Where to write the result, always a PNG with alpha
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

/// Timestamped `[HH:MM:SS LEVEL file line] msg` logger. `RUST_LOG` wins over `--verbose`.
fn init_logger(verbose: bool) {
    use std::io::Write;

    let level = if verbose { "debug" } else { "info" };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format(|buf, record| {
            let style = buf.default_level_style(record.level());
            let ts = chrono::Local::now().format("%H:%M:%S");

            writeln!(
                buf,
                "[{} {style}{}{style:#} {} {}] {}",
                ts,
                record.level(),
                record
                    .file()
                    .unwrap_or("None")
                    .split('/')
                    .next_back()
                    .unwrap_or("None"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logger(args.verbose);

    if let Err(e) = run(&args) {
        log::debug!("remove black background failed: {e:?}");
        println!("{}", error_message(&e));
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn error_message(e: &anyhow::Error) -> String {
    format!("Error: {e:#}")
}

fn run(args: &Args) -> Result<()> {
    let config = RemoveConfig::new(&args.input, &args.output);

    let summary = black_remover::remove_black_background_with_config(&config)
        .with_context(|| format!("converting {}", args.input.display()))?;

    log::debug!("{summary:?}");
    println!(
        "Successfully saved transparent image to {}",
        args.output.display()
    );

    Ok(())
}
