use clap::Parser;
use fbrowse::core::config::{self, CliOverrides};
use fbrowse::core::state::Navigator;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::{self, File};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "fbrowse", about = "Minimal terminal file browser")]
struct Args {
    /// List dotfiles
    #[arg(long, overrides_with = "no_hidden")]
    hidden: bool,

    /// Hide dotfiles
    #[arg(long)]
    no_hidden: bool,

    /// Group directories above files
    #[arg(long)]
    dirs_first: bool,

    /// Log level: off, error, warn, info, debug, trace
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Read this config file instead of ~/.fbrowse/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

impl Args {
    fn overrides(&self) -> CliOverrides {
        let show_hidden = match (self.hidden, self.no_hidden) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        };
        CliOverrides {
            show_hidden,
            directories_first: self.dirs_first.then_some(true),
            log_level: self.log_level.clone(),
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let file_config = match config::load_config(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("fbrowse: {e}");
            return ExitCode::FAILURE;
        }
    };
    let resolved = config::resolve(&file_config, &args.overrides());

    // Log to a file: anything on stdout/stderr would corrupt the TUI.
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Some(dir) = config::config_dir()
        && fs::create_dir_all(&dir).is_ok()
        && let Ok(log_file) = File::create(dir.join("fbrowse.log"))
    {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    log::info!("fbrowse starting up with {:?}", resolved);

    let lister = resolved.lister();
    let nav = match Navigator::from_current_dir(&lister) {
        Ok(nav) => nav,
        Err(e) => {
            log::error!("{e}");
            eprintln!("fbrowse: {e}");
            return ExitCode::FAILURE;
        }
    };

    match fbrowse::tui::run(nav, &lister) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Terminal error: {e}");
            eprintln!("fbrowse: terminal error: {e}");
            ExitCode::FAILURE
        }
    }
}
