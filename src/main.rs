//! depfresh - Dependency staleness checker CLI tool
//!
//! Parses the project's dependency manifest (or SBOM), resolves the
//! latest upstream version of each dependency, and reports which ones
//! are outdated. Exit code 0 means everything is fresh, 1 means at
//! least one dependency is outdated, 2 means the run itself failed.

use clap::Parser;
use depfresh::cli::CliArgs;
use depfresh::config::{load_config, Config, DEFAULT_CONFIG_FILE};
use depfresh::engine::Reconciler;
use depfresh::manifest::{detect_manifest, load_asset_versions, parse_manifest};
use depfresh::output::{render_json, render_text};
use depfresh::progress::Progress;
use depfresh::resolver::{GitTagResolver, HttpClient, NuGetResolver, SystemGit};
use std::io::{self, Write};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();

    match run(args).await {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}

/// Main application logic
async fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    if args.verbose {
        eprintln!("depfresh v{}", env!("CARGO_PKG_VERSION"));
        eprintln!("Target: {}", args.path.display());
    }

    // An explicit --config must exist; the default location is optional.
    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => {
            let default_path = args.path.join(DEFAULT_CONFIG_FILE);
            if default_path.exists() {
                load_config(&default_path)?
            } else {
                Config::default()
            }
        }
    };

    let manifest_path = match &args.manifest {
        Some(path) => path.clone(),
        None => detect_manifest(&args.path)?,
    };
    if args.verbose {
        eprintln!("Manifest: {}", manifest_path.display());
    }

    let scan = parse_manifest(&manifest_path)?;
    if args.verbose {
        for name in &scan.duplicates {
            eprintln!("Warning: duplicate entry for '{}', last one kept", name);
        }
    }

    let installed = load_asset_versions(&args.path);

    let client = HttpClient::new()?;
    let reconciler = Reconciler::new(
        &config.repos,
        GitTagResolver::new(SystemGit::new()),
        NuGetResolver::new(client),
        args.normalization(),
    );

    let mut progress = Progress::new(!args.quiet && !args.json);
    let report = reconciler.run(&scan, &installed, &mut progress).await;

    let mut stdout = io::stdout().lock();
    if args.json {
        render_json(&report, &mut stdout)?;
    } else {
        render_text(&report, args.verbose, &mut stdout)?;
    }
    stdout.flush()?;

    if report.is_fresh() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}
