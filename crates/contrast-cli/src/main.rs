// ABOUTME: CLI entry point for contrast-grid.
// ABOUTME: Dispatches to generate, pair, legend, hex, config and version subcommands.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use contrast_cli::config::{Config, OutputFormat};
use contrast_cli::render::{self, Grid, RenderOptions};
use contrast_core::{build_matrix, layout, Color, ContrastResult, GridLayout, Palette, TierSet};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "contrast-grid")]
#[command(about = "WCAG contrast matrix for a palette of named colors")]
#[command(version)]
struct Cli {
    /// Verbose logging to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(long, global = true, env = "CONTRAST_GRID_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build and render the contrast grid for a palette file
    Generate {
        /// Palette file (TOML, or JSON with a .json extension)
        palette: PathBuf,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Comma-separated tiers to show (aaa, aa, aa-large, fail)
        #[arg(short, long)]
        tiers: Option<String>,

        /// Write output to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Sample text drawn on each tile
        #[arg(long)]
        sample_text: Option<String>,

        /// Disable ANSI colors in text output
        #[arg(long)]
        no_color: bool,
    },

    /// Contrast ratio and tier for one background/text pair
    Pair {
        /// Background color (#rrggbb)
        background: String,

        /// Text color (#rrggbb)
        foreground: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the tier ladder with descriptions and badge colors
    Legend,

    /// Convert unit channels in [0, 1] to a hex code
    Hex {
        #[arg(allow_negative_numbers = true)]
        r: f64,
        #[arg(allow_negative_numbers = true)]
        g: f64,
        #[arg(allow_negative_numbers = true)]
        b: f64,
    },

    /// Configuration commands
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Show version information
    Version,
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Print the configuration file location
    Path,

    /// Print the effective configuration
    Show,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    contrast_log::init_for(&["contrast_core", "contrast_cli", "contrast_grid"], level);

    let config_path = cli.config.clone().unwrap_or_else(Config::default_path);

    match cli.command {
        Commands::Generate {
            palette,
            format,
            tiers,
            output,
            sample_text,
            no_color,
        } => {
            let config = Config::load_or_default(&config_path)?;
            let options = GenerateOptions {
                format: format.unwrap_or(config.format),
                visible_tiers: match tiers {
                    Some(list) => TierSet::parse_list(&list)?,
                    None => config.visible_tiers,
                },
                sample_text: sample_text.unwrap_or(config.sample_text),
                color: config.color
                    && !no_color
                    && output.is_none()
                    && std::io::stdout().is_terminal(),
            };
            run_generate(&palette, options, output)
        }
        Commands::Pair {
            background,
            foreground,
            json,
        } => run_pair(&background, &foreground, json),
        Commands::Legend => {
            print_legend();
            Ok(())
        }
        Commands::Hex { r, g, b } => {
            let color = Color::new(r, g, b)?;
            println!("{}", color.to_hex());
            Ok(())
        }
        Commands::Config(cmd) => run_config(cmd, &config_path),
        Commands::Version => {
            print_version();
            Ok(())
        }
    }
}

struct GenerateOptions {
    format: OutputFormat,
    visible_tiers: TierSet,
    sample_text: String,
    color: bool,
}

/// Load a palette, build its matrix and layout, and render them
fn run_generate(
    palette_path: &Path,
    options: GenerateOptions,
    output: Option<PathBuf>,
) -> Result<()> {
    let palette = Palette::load(palette_path)?;
    if palette.is_empty() {
        info!(path = %palette_path.display(), "palette has no colors, grid will be empty");
    }

    let matrix = build_matrix(&palette, &options.visible_tiers);
    let layout = GridLayout::build_with_text(&palette, &matrix, &options.sample_text);
    let grid = Grid {
        palette: &palette,
        visible_tiers: options.visible_tiers,
        matrix: &matrix,
        layout: &layout,
    };

    let render_options = RenderOptions {
        color: options.color,
    };
    let rendered = render::render(&grid, options.format, render_options)?;

    match output {
        Some(path) => {
            std::fs::write(&path, rendered)
                .with_context(|| format!("Failed to write output to {}", path.display()))?;
            debug!(path = %path.display(), format = ?options.format, "wrote contrast grid");
        }
        None => print!("{rendered}"),
    }
    Ok(())
}

/// Print ratio and tier for a single pair
fn run_pair(background: &str, foreground: &str, json: bool) -> Result<()> {
    let background = Color::from_hex(background).context("Invalid background color")?;
    let foreground = Color::from_hex(foreground).context("Invalid text color")?;
    let result = ContrastResult::compute(background, foreground);

    if json {
        let rendered =
            serde_json::to_string_pretty(&result).context("Failed to serialize contrast result")?;
        println!("{rendered}");
    } else {
        println!("{background} / {foreground}");
        println!("  ratio: {}:1", result.ratio_label());
        println!("  tier:  {} ({})", result.tier.badge_label(), result.tier.description());
    }
    Ok(())
}

/// Print the badge legend
fn print_legend() {
    for entry in layout::legend() {
        println!("{:<9} {} {}", entry.label, entry.color, entry.description);
    }
}

/// Handle config subcommands
fn run_config(cmd: ConfigCommands, path: &Path) -> Result<()> {
    match cmd {
        ConfigCommands::Path => {
            println!("{}", path.display());
            Ok(())
        }
        ConfigCommands::Show => {
            let config = Config::load_or_default(path)?;
            let rendered = toml::to_string_pretty(&config).context("Failed to serialize config")?;
            print!("{rendered}");
            Ok(())
        }
        ConfigCommands::Init { force } => {
            if path.exists() && !force {
                anyhow::bail!(
                    "Config already exists at {} (use --force to overwrite)",
                    path.display()
                );
            }
            Config::default().save(path)?;
            println!("Wrote default config to {}", path.display());
            Ok(())
        }
    }
}

/// Print version information
fn print_version() {
    println!("contrast-grid {}", contrast_cli::VERSION);
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        // Ensure CLI structure is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_generate_flags() {
        let cli = Cli::try_parse_from([
            "contrast-grid",
            "generate",
            "brand.toml",
            "--format",
            "svg",
            "--tiers",
            "aaa,aa",
            "--no-color",
        ])
        .unwrap();

        match cli.command {
            Commands::Generate {
                palette,
                format,
                tiers,
                no_color,
                ..
            } => {
                assert_eq!(palette, PathBuf::from("brand.toml"));
                assert_eq!(format, Some(OutputFormat::Svg));
                assert_eq!(tiers.as_deref(), Some("aaa,aa"));
                assert!(no_color);
            }
            _ => panic!("expected generate"),
        }
    }

    #[test]
    fn parse_hex_accepts_negative_channels() {
        // Out-of-range values reach Color::new and are rejected there
        let cli = Cli::try_parse_from(["contrast-grid", "hex", "-0.5", "0", "1"]).unwrap();
        assert!(matches!(cli.command, Commands::Hex { r, .. } if r == -0.5));
    }

    #[test]
    fn parse_global_verbose_after_subcommand() {
        let cli = Cli::try_parse_from(["contrast-grid", "legend", "-v"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn generate_writes_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let palette_path = dir.path().join("palette.toml");
        std::fs::write(
            &palette_path,
            "[[colors]]\nname = \"White\"\nhex = \"#ffffff\"\n\n[[colors]]\nname = \"Black\"\nhex = \"#000000\"\n",
        )
        .unwrap();
        let output = dir.path().join("grid.md");

        let options = GenerateOptions {
            format: OutputFormat::Markdown,
            visible_tiers: TierSet::all(),
            sample_text: "Text".to_string(),
            color: false,
        };
        run_generate(&palette_path, options, Some(output.clone())).unwrap();

        let written = std::fs::read_to_string(output).unwrap();
        assert!(written.contains("21.0 AAA"));
    }

    #[test]
    fn config_init_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        run_config(ConfigCommands::Init { force: false }, &path).unwrap();
        assert!(path.exists());
        assert!(run_config(ConfigCommands::Init { force: false }, &path).is_err());
        run_config(ConfigCommands::Init { force: true }, &path).unwrap();
    }
}
