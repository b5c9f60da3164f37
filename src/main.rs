//! param-inject CLI
//!
//! Usage:
//!   param-inject [OPTIONS] > output.html
//!
//! Options:
//!   -c, --config <FILE>          Configuration file (TOML format)
//!   -t, --template <FILE>        Template file
//!   -p, --params <FILE>          File holding the value to inject
//!   -n, --placeholder <NAME>     Placeholder name
//!   -u, --unknown <POLICY>       keep, warn or error
//!       --trim-trailing-newline  Strip one trailing newline from the value
//!       --no-trim-trailing-newline
//!                                Keep the value verbatim (overrides config)
//!   -v, --verbose                Debug logging on stderr
//!   -h, --help                   Print help

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::Parser;
use log::debug;

use param_inject::{run, Config, UnknownPolicy};

#[derive(Parser)]
#[command(name = "param-inject")]
#[command(about = "Inject a parameter file into a text template and print the result")]
struct Cli {
    /// Configuration file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Template file [default: template.html]
    #[arg(short, long)]
    template: Option<PathBuf>,

    /// File holding the value to inject [default: params]
    #[arg(short, long)]
    params: Option<PathBuf>,

    /// Placeholder name [default: params]
    #[arg(short = 'n', long)]
    placeholder: Option<String>,

    /// What to do with other placeholders [default: warn]
    #[arg(short, long, value_enum)]
    unknown: Option<UnknownPolicy>,

    /// Strip one trailing newline from the parameter value
    #[arg(long, overrides_with = "no_trim_trailing_newline")]
    trim_trailing_newline: bool,

    /// Keep the parameter value verbatim, even if the config file trims it
    #[arg(long, overrides_with = "trim_trailing_newline")]
    no_trim_trailing_newline: bool,

    /// Debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Apply command-line overrides on top of a loaded config
    fn apply(self, mut config: Config) -> Config {
        if let Some(template) = self.template {
            config.template = template;
        }
        if let Some(params) = self.params {
            config.params = params;
        }
        if let Some(placeholder) = self.placeholder {
            config.placeholder = placeholder;
        }
        if let Some(unknown) = self.unknown {
            config.unknown = unknown;
        }
        if self.trim_trailing_newline {
            config.trim_trailing_newline = true;
        } else if self.no_trim_trailing_newline {
            config.trim_trailing_newline = false;
        }
        config
    }
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    // Load config
    let config = match &cli.config {
        Some(path) => match Config::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => Config::default(),
    };
    let config = cli.apply(config);
    debug!("{:?}", config);

    let stdout = io::stdout();
    if let Err(e) = run(&config, &mut stdout.lock()) {
        let color = io::stderr().is_terminal();
        eprint!("{}", e.format(&config.template.display().to_string(), color));
        std::process::exit(1);
    }
}
