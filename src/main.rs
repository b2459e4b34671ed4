use clap::Parser;
use galefetch::collectors::SystemProvider;
use galefetch::config;
use galefetch::display;
use galefetch::modules::ModuleRegistry;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "galefetch", version, about = "System information fetch tool")]
struct Args {
    /// Distribution ascii art to display instead of the detected one
    #[arg(long)]
    ascii: Option<String>,

    /// Override the detected distribution name
    #[arg(long)]
    distro_name: Option<String>,

    /// Print how long each module took to execute
    #[arg(long)]
    time_taken: bool,

    /// Use an alternate configuration file
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("galefetch: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> galefetch::Result<String> {
    if args.config.is_none() {
        config::ensure_user_config_exists();
    }

    let mut config = config::load_config(args.config.as_deref())?;
    if let Some(ascii) = &args.ascii {
        config.distro_ascii = ascii.clone();
    }
    if let Some(distro_name) = &args.distro_name {
        config.distro_name = Some(distro_name.clone());
    }

    let registry = ModuleRegistry::builtin();
    let facts = SystemProvider::from_config(&config);
    display::render(&config, &registry, &facts, args.time_taken)
}
