use clap::{Parser, Subcommand};
use exposure_triangle::exposure::{self, Language, Selection};
use exposure_triangle::{config, output, preview};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Slider positions; any index left out comes from the config file.
#[derive(clap::Args, Clone)]
struct SelectionArgs {
    /// Aperture index (0 = f/1.4 … 9 = f/22)
    #[arg(long, short = 'a')]
    aperture: Option<usize>,
    /// Shutter speed index (0 = 1/4000 … 14 = 4s)
    #[arg(long, short = 's')]
    shutter: Option<usize>,
    /// ISO index (0 = ISO 100 … 7 = ISO 12800)
    #[arg(long, short = 'i')]
    iso: Option<usize>,
    /// Scene index (0 = full sun, EV 15 … 7 = city night, EV 3)
    #[arg(long, short = 'c')]
    scene: Option<usize>,
}

impl SelectionArgs {
    fn apply(&self, base: Selection) -> Selection {
        Selection {
            aperture: self.aperture.unwrap_or(base.aperture),
            shutter: self.shutter.unwrap_or(base.shutter),
            iso: self.iso.unwrap_or(base.iso),
            scene: self.scene.unwrap_or(base.scene),
        }
    }
}

fn version_string() -> &'static str {
    let on_tag = env!("EXPOSURE_ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("EXPOSURE_GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "exposure-triangle")]
#[command(about = "Simulate how aperture, shutter speed and ISO shape a photo")]
#[command(long_about = "\
Simulate how aperture, shutter speed and ISO shape a photo

Every setting is chosen by its index in a fixed table, like a slider.
Run 'exposure-triangle tables' to see them.

Outputs:
  Exposure status   settings EV compared to the scene's reference EV
  Brightness        2^(-deviation), clamped to 0.05..3
  Motion blur       from 1/30 s and slower
  Noise             from ISO 800 and up
  Depth of field    from the f-number

Defaults come from exposure.toml in --config-dir (see 'gen-config').")]
#[command(version = version_string())]
struct Cli {
    /// Directory holding exposure.toml
    #[arg(long, default_value = ".", global = true)]
    config_dir: PathBuf,

    /// Label language (en, fr); overrides the config file
    #[arg(long, global = true)]
    lang: Option<Language>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compute the exposure for one selection
    Compute {
        #[command(flatten)]
        selection: SelectionArgs,
        /// Print a JSON report instead of text
        #[arg(long)]
        json: bool,
    },
    /// List the aperture, shutter, ISO and scene tables
    Tables,
    /// Write a static HTML preview of one selection
    Preview {
        #[command(flatten)]
        selection: SelectionArgs,
        /// Output HTML file
        #[arg(long, short = 'o', default_value = "exposure-preview.html")]
        output: PathBuf,
    },
    /// Print a stock exposure.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Command::Compute { selection, json } => {
            let site = config::load_config(&cli.config_dir)?;
            let lang = cli.lang.unwrap_or(site.display.language);
            let selection = selection.apply(site.selection);
            let derived = exposure::compute(&selection)?;
            if json {
                let report = output::Report::new(&selection, &derived, lang);
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                output::print_compute_output(&derived, lang);
            }
        }
        Command::Tables => {
            let lang = match cli.lang {
                Some(lang) => lang,
                None => config::load_config(&cli.config_dir)?.display.language,
            };
            output::print_tables_output(lang);
        }
        Command::Preview {
            selection,
            output: path,
        } => {
            let mut site = config::load_config(&cli.config_dir)?;
            if let Some(lang) = cli.lang {
                site.display.language = lang;
            }
            let selection = selection.apply(site.selection);
            let derived = exposure::compute(&selection)?;
            preview::write_preview(&path, &selection, &derived, &site)?;
            println!("==> Preview written: {}", path.display());
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Log to stderr so stdout stays clean for reports and JSON.
///
/// Level defaults to WARN; override with `RUST_LOG`.
fn init_logging() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_target(false)
        .init();
}
