// ABOUTME: CLI library components for the contrast-grid CLI.
// ABOUTME: Configuration loading and output renderers shared by the subcommands.

//! # contrast-cli
//!
//! Command-line host for the contrast engine. It stands in for a design
//! tool canvas: it loads a palette, asks `contrast-core` for the matrix and
//! layout, and renders the result.
//!
//! ```text
//! contrast-grid
//! ├── generate <palette>            # Build and render the contrast grid
//! ├── pair <background> <text>      # Contrast of a single pair
//! ├── legend                        # Tier ladder and badge colors
//! ├── hex <r> <g> <b>               # Unit channels to hex
//! ├── config
//! │   ├── path                      # Show config file location
//! │   ├── show                      # Show effective configuration
//! │   └── init                      # Write a default config file
//! └── version                       # Show version info
//! ```
//!
//! ## Usage
//!
//! ```bash
//! # Render a palette as a colored table
//! contrast-grid generate brand.toml
//!
//! # Only show pairs that pass AA or better, as SVG
//! contrast-grid generate brand.toml --tiers aaa,aa --format svg -o grid.svg
//!
//! # Check one pair
//! contrast-grid pair "#ffffff" "#3f62df"
//! ```

pub mod config;
pub mod render;

/// Version of the contrast-grid CLI
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
