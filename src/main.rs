use clap::{Parser, Subcommand};
use pagewire::{config, demo, markup};
use std::path::PathBuf;

fn version_string() -> &'static str {
    let on_tag = env!("PAGEWIRE_ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("PAGEWIRE_GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "pagewire")]
#[command(about = "Client-side behavior for static informational sites")]
#[command(long_about = "\
Client-side behavior for static informational sites

The behavior itself ships as a WebAssembly module (build it with
`wasm-pack build --target web`). This tool prints its configuration and
stylesheet and renders a demo page wired to every component.

Markup contract:

  #navbar.navbar                   navbar, gets `scrolled` past the threshold
  #nav-toggle, #nav-menu           mobile menu, `.nav-link` entries close it
  a[href^=\"#\"]                     smooth scroll below the navbar
  .fade-in .slide-left .slide-right  get `visible` once scrolled into view
  .filter-btn[data-filter]         gallery filter buttons
  .gallery-item[data-category]     filtered items (else .card[data-category])
  #lightbox #lightbox-img #lightbox-caption #lightbox-close
  #contact-form, #form-success     validated contact form

Run 'pagewire gen-config' to generate a documented pagewire.toml.")]
#[command(version = version_string())]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print a stock pagewire.toml with all options documented
    GenConfig,
    /// Print the stylesheet injected at start-up
    Styles {
        /// Directory containing pagewire.toml
        #[arg(long, default_value = ".")]
        config: PathBuf,
    },
    /// Render a demo page exercising every component
    Demo {
        /// Directory containing pagewire.toml
        #[arg(long, default_value = ".")]
        config: PathBuf,

        /// Output directory
        #[arg(long, default_value = "demo")]
        output: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
        Command::Styles { config: dir } => {
            let config = config::load_config(&dir)?;
            println!("{}", markup::fade_in_keyframes_css());
            println!();
            println!(
                "/* applied to shown gallery items: animation: {} */",
                markup::fade_in_animation(&config.gallery)
            );
        }
        Command::Demo {
            config: dir,
            output,
        } => {
            let config = config::load_config(&dir)?;
            let path = demo::write_demo(&output, &config)?;
            println!("Generated {}", path.display());
            println!(
                "Next: wasm-pack build --target web --out-dir {}",
                output.join("pkg").display()
            );
        }
    }

    Ok(())
}
