// SPDX-License-Identifier: MPL-2.0
use folio_index::config;
use folio_index::directory_scanner::scan_works_dir;
use folio_index::domain::{DisplayImage, OtherWorksLimit};
use folio_index::error::Result;
use folio_index::manifest::{self, asset_url};
use folio_index::paths;
use folio_index::routing::{Route, Router, View};
use folio_index::{WorksIndex, WorksIndexer};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
folio-index: group portfolio image folders into ordered works

USAGE:
  folio-index [OPTIONS] <WORKS_DIR>

OPTIONS:
  --config <FILE>       Read settings from FILE instead of the config directory
  --config-dir <DIR>    Look for folio.toml in DIR
  --output <FILE>       Write the JSON manifest to FILE (default: stdout)
  --route <PATH>        Print what the page at PATH would show, e.g. /work/01_Logo
  --compact             Write the manifest on a single line
  -v, --verbose         Log skipped paths and other details
  -h, --help            Print this help
";

struct Flags {
    config_file: Option<PathBuf>,
    config_dir: Option<String>,
    output: Option<PathBuf>,
    route: Option<String>,
    compact: bool,
    verbose: bool,
    works_dir: PathBuf,
    unused: Vec<String>,
}

fn main() -> ExitCode {
    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => return ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}\n\n{HELP}");
            return ExitCode::from(2);
        }
    };

    init_tracing(flags.verbose);

    if !flags.unused.is_empty() {
        warn!("Ignoring unexpected arguments: {}", flags.unused.join(" "));
    }

    match run(&flags) {
        Ok(code) => code,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn parse_flags() -> std::result::Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(None);
    }

    let flags = Flags {
        compact: args.contains("--compact"),
        verbose: args.contains(["-v", "--verbose"]),
        config_file: args.opt_value_from_str("--config")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        output: args.opt_value_from_str("--output")?,
        route: args.opt_value_from_str("--route")?,
        works_dir: args.free_from_str()?,
        unused: args
            .finish()
            .into_iter()
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect(),
    };

    Ok(Some(flags))
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // stdout carries the manifest, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn run(flags: &Flags) -> Result<ExitCode> {
    paths::init_cli_overrides(flags.config_dir.clone());

    let (config, warning) = match &flags.config_file {
        Some(path) => config::load_or_default(path),
        None => config::load(),
    };
    if let Some(warning) = warning {
        warn!("{}", warning);
    }

    let discovered = scan_works_dir(&flags.works_dir, &config.scan.works_dir_name)?;
    info!(
        "Discovered {} files under {}",
        discovered.len(),
        flags.works_dir.display()
    );

    let base_url = config.base_url();
    let index = WorksIndexer::with_options(config.index_options()).build_index(
        discovered
            .iter()
            .map(|asset| (asset.path.as_str(), asset_url(base_url, &asset.path))),
    );

    if let Some(route) = &flags.route {
        let router = Router::new(config.router_base());
        return Ok(print_view(&router, &index, route, config.other_works_limit()));
    }

    let pretty = config.pretty_manifest() && !flags.compact;
    match &flags.output {
        Some(path) => {
            manifest::write_manifest(path, &index, pretty)?;
            info!("Wrote manifest to {}", path.display());
        }
        None => println!("{}", manifest::to_json(&index, pretty)?),
    }

    Ok(ExitCode::SUCCESS)
}

fn print_view(
    router: &Router,
    index: &WorksIndex<String>,
    path: &str,
    limit: OtherWorksLimit,
) -> ExitCode {
    let link = |slug: &str| {
        router.href(&Route::WorkDetail {
            slug: slug.to_string(),
        })
    };

    match router.resolve(index, path, limit) {
        View::Home { works, navigation } => {
            println!("home: {} works", works.len());
            for item in navigation {
                println!("  {:>4}  {:<32} {}", item.order, item.name, link(&item.slug));
            }
            ExitCode::SUCCESS
        }
        View::Detail {
            work,
            images,
            other_works,
        } => {
            println!("work-detail: {} ({})", work.name, work.slug);
            if let Some(cover) = &work.cover {
                println!("  cover: {}", cover.url);
            }
            if let Some(background) = &work.cover_background {
                println!("  cover background: {}", background.url);
            }
            println!("  images:");
            for item in images {
                match item {
                    DisplayImage::Image(asset) => println!("    image  {}", asset.url),
                    DisplayImage::Svg(asset) => println!("    svg    {}", asset.url),
                    DisplayImage::InteractivePair {
                        foreground,
                        background,
                    } => println!("    pair   {} over {}", foreground.url, background.url),
                }
            }
            println!("  other works:");
            for other in other_works {
                println!("    {}  {}", other.name, link(&other.slug));
            }
            ExitCode::SUCCESS
        }
        View::NotFound { path } => {
            println!("not found: {path}");
            ExitCode::from(1)
        }
    }
}
