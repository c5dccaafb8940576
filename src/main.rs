use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use pwaicons::{IconConfig, Rgb, Strategy};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum StrategyArg {
    /// Solid-color PNG assembled by hand
    Manual,
    /// Canvas with a centered label
    #[cfg(feature = "drawn")]
    Drawn,
}

impl From<StrategyArg> for Strategy {
    fn from(s: StrategyArg) -> Self {
        match s {
            StrategyArg::Manual => Strategy::Manual,
            #[cfg(feature = "drawn")]
            StrategyArg::Drawn => Strategy::Drawn,
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate placeholder PWA icons (icon-192.png, icon-512.png)", long_about = None)]
struct Args {
    /// Generation strategy (defaults to `drawn` when available)
    #[arg(long, value_enum)]
    strategy: Option<StrategyArg>,
    /// Output directory
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
    /// Icon edge length; repeat for several icons
    #[arg(long = "size")]
    sizes: Vec<u32>,
    /// Background color (#rrggbb)
    #[arg(long, default_value = "#2c3e50")]
    background: Rgb,
    /// Label color
    #[arg(long, default_value = "white")]
    fill: Rgb,
    /// TrueType font for the label
    #[arg(long)]
    font: Option<PathBuf>,
    /// Preferred label text
    #[arg(long)]
    label: Option<String>,
    /// Label used when the preferred one can't be rendered
    #[arg(long)]
    fallback_label: Option<String>,
}

impl Args {
    fn into_config(self) -> IconConfig {
        let defaults = IconConfig::default();
        IconConfig {
            out_dir: self.out_dir,
            sizes: if self.sizes.is_empty() { defaults.sizes.clone() } else { self.sizes },
            background: self.background,
            fill: self.fill,
            label: self.label.unwrap_or_else(|| defaults.label.clone()),
            fallback_label: self.fallback_label.unwrap_or_else(|| defaults.fallback_label.clone()),
            font_path: self.font.or_else(|| defaults.font_path.clone()),
            ..defaults
        }
    }
}

fn generate(strategy: Strategy, config: IconConfig) -> pwaicons::Result<()> {
    let generator = pwaicons::new_generator(strategy, config)?;
    // One confirmation per file, printed as soon as it is written.
    for spec in generator.config().icon_specs() {
        let icon = generator.write_icon(&spec)?;
        println!("Created {} ({}x{})", icon.path.display(), icon.width, icon.height);
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let strategy = args.strategy.map(Strategy::from).unwrap_or_default();
    let config = args.into_config();

    match strategy {
        // Uncaught: failures surface as the error chain and a non-zero exit.
        Strategy::Manual => {
            generate(strategy, config).context("manual icon generation failed")?;
            println!("Placeholder icons created successfully!");
            println!("Note: These are solid color placeholders. Use generate-icons.html to create proper icons.");
        }
        #[cfg(feature = "drawn")]
        Strategy::Drawn => {
            if let Err(e) = generate(strategy, config) {
                eprintln!("Error generating icons: {}", e);
                std::process::exit(1);
            }
            println!("Icons generated successfully!");
        }
    }
    Ok(())
}
