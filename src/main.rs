use clap::Parser;
use std::path::PathBuf;

use buildconst_lib::{BuildSelection, CliRequest, Selection};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Catalog of release types and platforms (.json or .toml)
    #[arg(short, long)]
    catalog: PathBuf,

    /// Generator config (.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory searched for an existing constants file
    #[arg(short, long)]
    root: Option<PathBuf>,

    /// Version string baked into the constants file
    #[arg(long, default_value = "")]
    version_string: String,

    #[arg(long)]
    release_type: Option<String>,

    #[arg(long)]
    platform: Option<String>,

    #[arg(long)]
    architecture: Option<String>,

    #[arg(long)]
    distribution: Option<String>,

    /// Build time as RFC 3339 (defaults to now)
    #[arg(long)]
    build_time: Option<String>,
}

fn main() {
    env_logger::init();

    let args = Args::parse();
    let selection = BuildSelection {
        version: args.version_string,
        release_type: Selection::from(args.release_type),
        platform: Selection::from(args.platform),
        architecture: Selection::from(args.architecture),
        distribution: Selection::from(args.distribution),
    };

    let request = CliRequest {
        catalog_path: args.catalog,
        config_path: args.config,
        search_root: args.root,
        build_time: args.build_time,
        selection,
    };

    match buildconst_lib::run_cli(request) {
        Ok(path) => println!("Generated: {}", path.display()),
        Err(e) => {
            log::error!("Generation failed: {}", e);
            eprintln!("buildconst error: {}", e);
            std::process::exit(1);
        }
    }
}
