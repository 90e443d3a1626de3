use anyhow::{bail, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use tilecfg::utils::file_handler::{check_file_type, load_config_file, ConfigFileType};
use tilecfg::utils::get_help_template;
use tilecfg::{config, ThemeSetting, UserConfig};

/// Checks syntax and consistency of the configuration
#[derive(Parser, Debug)]
#[command(version, about, help_template = get_help_template())]
struct Args {
    /// Outputs received configuration file.
    #[arg(short, long)]
    verbose: bool,
    /// Sets the input file to use. Uses the one in the config directory otherwise.
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let verbose = args.verbose;

    println!(
        "\x1b[0;94m::\x1b[0m tilecfg version: {}",
        env!("CARGO_PKG_VERSION")
    );
    println!(
        "\x1b[0;94m::\x1b[0m tilecfg git hash: {}",
        git_version::git_version!(fallback = option_env!("GIT_HASH").unwrap_or("NONE"))
    );

    println!("\x1b[0;94m::\x1b[0m Loading configuration . . .");
    if let Some(input) = &args.input {
        println!("\x1b[1;35mNote: Using file {} \x1b[0m", input.display());
        if check_file_type(input) == ConfigFileType::TomlFile && verbose {
            println!("Reading TOML, RON is preferred.");
        }
    }
    let user: UserConfig = match load_config_file(args.input.clone()) {
        Ok(user) => {
            println!("\x1b[0;92m    -> Configuration loaded OK \x1b[0m");
            if verbose {
                dbg!(&user);
            }
            user
        }
        Err(err) => {
            println!("\x1b[1;91mERROR:\x1b[0m\x1b[1m Configuration failed. Reason: {err:#} \x1b[0m");
            bail!("Configuration could not be loaded");
        }
    };

    let mut ok = user.check_modkey(verbose);
    ok &= user.check_groups(verbose);
    ok &= user.check_keybinds(verbose);
    ok &= user.check_log_level(verbose);

    println!("\x1b[0;94m::\x1b[0m Checking theme . . .");
    let theme_dir = match args.input.as_deref().and_then(Path::parent) {
        Some(dir) => dir.to_path_buf(),
        None => config::config_dir()?.create_config_directory("")?,
    };
    let theme = match user.try_theme(&theme_dir) {
        Ok(theme) => theme,
        Err(err) => {
            println!("\x1b[1;91mERROR:\x1b[0m\x1b[1m Theme failed. Reason: {err:#} \x1b[0m");
            ok = false;
            ThemeSetting::default()
        }
    };
    ok &= theme.check_bars(verbose);

    println!("\x1b[0;94m::\x1b[0m Building configuration . . .");
    match tilecfg::build_with_theme(&user, &theme) {
        Ok(built) => {
            println!("\x1b[0;92m    -> Configuration OK \x1b[0m");
            if verbose {
                for binding in built.keys() {
                    println!("{binding}");
                }
            }
        }
        Err(err) => {
            println!("\x1b[1;91mERROR:\x1b[0m\x1b[1m {err} \x1b[0m");
            ok = false;
        }
    }

    if !ok {
        bail!("Configuration has errors");
    }
    Ok(())
}
