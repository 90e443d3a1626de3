//! Builds the configuration and hands it to the host as a serialized file.
use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tilecfg::utils::file_handler::{load_config_file, serialize, Format};
use tilecfg::utils::{get_help_template, log::setup_logging};
use tilecfg::{autostart, config};

#[derive(Parser, Debug)]
#[command(version, about, help_template = get_help_template())]
struct Args {
    /// Configuration file to load instead of the one in the config directory
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Format of the built configuration
    #[arg(short, long, value_enum, default_value_t)]
    format: Format,
    /// Write the built configuration here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Run the autostart script once the configuration is built
    #[arg(long)]
    autostart: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let (user, load_err) = match &args.config {
        Some(path) => (load_config_file(Some(path.clone()))?, None),
        None => config::load(),
    };
    setup_logging(&user.log_level);
    if let Some(err) = load_err {
        tracing::error!("Error loading config, using defaults: {err:#}");
    }
    tracing::info!(
        "tilecfg {} ({})",
        env!("CARGO_PKG_VERSION"),
        git_version::git_version!(fallback = option_env!("GIT_HASH").unwrap_or("NONE"))
    );

    let theme_dir = match args.config.as_deref().and_then(Path::parent) {
        Some(dir) => dir.to_path_buf(),
        None => config::config_dir()?.create_config_directory("")?,
    };
    let theme = user.theme(&theme_dir);
    let built = tilecfg::build_with_theme(&user, &theme).context("Invalid configuration")?;
    tracing::info!(
        "Built {} key bindings, {} groups, {} screens",
        built.keys().len(),
        built.groups().len(),
        built.screens().len()
    );

    if args.autostart {
        autostart::run(&user);
    }

    let serialized = serialize(&built, args.format)?;
    match &args.output {
        Some(path) => fs::write(path, serialized)
            .with_context(|| format!("Writing {}", path.display()))?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(serialized.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }
    Ok(())
}
