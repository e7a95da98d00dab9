mod render;

use anyhow::Result;
use std::io::{BufWriter, Write};
use std::{env, path::PathBuf, process};
use tinysplit_config::{Config, OutputFormat};
use tinysplit_engine::{Splitter, io};

const USAGE: &str = "[--format summary|stack|tree] [--no-blank] [--quiet] [FILE]";

/// Command-line choices; `None` means "use the config file value".
#[derive(Debug, Default, PartialEq, Eq)]
struct Options {
    path: Option<PathBuf>,
    format: Option<OutputFormat>,
    show_blank: Option<bool>,
    warn_anomalies: Option<bool>,
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut options = Options::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--format" | "-f" => {
                let value = iter
                    .next()
                    .ok_or_else(|| format!("{arg} expects a value"))?;
                let format: OutputFormat = value.parse().map_err(|e| format!("{e}"))?;
                options.format = Some(format);
            }
            "--no-blank" => options.show_blank = Some(false),
            "--quiet" | "-q" => options.warn_anomalies = Some(false),
            flag if flag.starts_with('-') && flag != "-" => {
                return Err(format!("unknown option {flag}"));
            }
            path => {
                if options.path.is_some() {
                    return Err("expects at most one input file".to_string());
                }
                // "-" reads stdin, same as no file
                if path != "-" {
                    options.path = Some(PathBuf::from(path));
                }
            }
        }
    }

    Ok(options)
}

fn load_config() -> Config {
    let config_path = Config::config_path();
    match Config::load_from_path(&config_path) {
        Ok(Some(config)) => {
            log::info!("Loaded config from {}", config_path.display());
            config
        }
        Ok(None) => Config::default(),
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    }
}

/// Output settings after command-line flags are laid over the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Settings {
    format: OutputFormat,
    show_blank: bool,
    warn_anomalies: bool,
}

fn resolve(options: &Options, config: &Config) -> Settings {
    Settings {
        format: options.format.unwrap_or(config.format),
        show_blank: options.show_blank.unwrap_or(config.show_blank),
        warn_anomalies: options.warn_anomalies.unwrap_or(config.warn_anomalies),
    }
}

/// Splits `content` line by line and renders each line to `out`.
///
/// Returns the warnings that were logged, empty when `warn_anomalies` is off.
fn run<W: Write>(
    content: &str,
    settings: Settings,
    out: &mut W,
) -> std::io::Result<Vec<String>> {
    let mut splitter = Splitter::new();
    let mut warnings = Vec::new();

    for (n, line) in content.lines().enumerate() {
        let class = splitter.push(line);

        if settings.warn_anomalies
            && let Some(anomaly) = class.anomaly()
        {
            warnings.push(format!("line {}: {anomaly}: {:?}", n + 1, class.trimmed));
        }
        if class.is_blank() && !settings.show_blank {
            continue;
        }
        render::render_line(out, settings.format, &class)?;
    }

    if settings.warn_anomalies {
        for entry in &splitter.finish() {
            warnings.push(format!("unclosed at end of input: {}", entry.raw_text));
        }
    }

    for warning in &warnings {
        log::warn!("{warning}");
    }
    Ok(warnings)
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let args: Vec<String> = env::args().collect();
    let options = match parse_args(&args[1..]) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Usage: {} {USAGE}", args[0]);
            process::exit(1);
        }
    };

    let settings = resolve(&options, &load_config());

    let content = match io::read_source(options.path.as_deref()) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    run(&content, settings, &mut out)?;
    out.flush()?;

    Ok(())
}
