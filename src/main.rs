use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, warn};
use spec_stubs::{ConfigFile, FileOutcome, InsertionOrder, StubConfig, Stubber};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Parser)]
#[command(name = "spec-stubs")]
#[command(author, version, about = "Insert stub definitions for methods described in spec files", long_about = None)]
struct Args {
    /// Spec files or directories to scan
    #[arg(default_value = ".")]
    paths: Vec<PathBuf>,

    /// Text after which stubs are inserted in the implementation file
    #[arg(short, long)]
    marker: Option<String>,

    /// Template file; `{name}` is the method, `{unit}` the @type unit
    #[arg(short, long)]
    template: Option<PathBuf>,

    /// Removed from a spec file name to get its implementation file
    #[arg(short, long)]
    suffix: Option<String>,

    /// Call names that open a describe block (repeatable)
    #[arg(short, long = "describe")]
    describe: Vec<String>,

    /// Insert stubs last-declared first, like older versions did
    #[arg(long)]
    legacy_order: bool,

    /// JSON config file (marker, templateUrl, specSuffix, describeNames, insertionOrder)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Report what would be inserted without writing anything
    #[arg(long)]
    dry_run: bool,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

const SKIPPED_DIRS: &[&str] = &["node_modules", ".git", "target"];

fn load_config(args: &Args) -> Result<StubConfig> {
    let base = match &args.config {
        Some(path) => ConfigFile::load(path)?,
        None => ConfigFile::default(),
    };

    let overrides = ConfigFile {
        marker: args.marker.clone(),
        template_url: args.template.clone(),
        spec_suffix: args.suffix.clone(),
        describe_names: (!args.describe.is_empty()).then(|| args.describe.clone()),
        insertion_order: args.legacy_order.then_some(InsertionOrder::Reversed),
    };

    Ok(base.merge(overrides).into_config()?)
}

fn is_skipped_dir(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| SKIPPED_DIRS.contains(&name))
}

fn find_spec_files(paths: &[PathBuf], suffix: &str) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_file() {
            files.push(path.clone());
            continue;
        }
        if !path.is_dir() {
            warn!("No such file or directory: {}", path.display());
            continue;
        }

        files.extend(
            WalkDir::new(path)
                .into_iter()
                .filter_entry(|e| {
                    e.depth() == 0 || !(e.file_type().is_dir() && is_skipped_dir(e.path()))
                })
                .filter_map(|e| e.ok())
                .filter(|e| {
                    e.file_type().is_file()
                        && e.file_name().to_str().is_some_and(|name| name.contains(suffix))
                })
                .map(|e| e.path().to_path_buf()),
        );
    }

    files.sort();
    files.dedup();
    files
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.verbose);

    let config = load_config(&args).context("Invalid configuration")?;
    let stubber = Stubber::new(config).context("Failed to prepare stub template")?;
    if !stubber.template().is_default() {
        debug!("Using template:\n{}", stubber.template().source());
    }

    let spec_files = find_spec_files(&args.paths, &stubber.config().spec_suffix);
    debug!("Found {} spec file(s)", spec_files.len());

    let mut stubbed_files = 0;
    let mut stub_count = 0;

    // One file at a time: two specs may share a companion.
    for spec in &spec_files {
        match stubber.stub_path(spec, !args.dry_run) {
            Ok(FileOutcome::Stubbed { companion, inserted }) => {
                println!("stubbed {}: {}", companion.display(), inserted.join(", "));
                stubbed_files += 1;
                stub_count += inserted.len();
            }
            Ok(FileOutcome::MarkerMissing { companion }) => {
                debug!("No marker in {}", companion.display());
            }
            Ok(outcome) => debug!("{}: {:?}", spec.display(), outcome),
            Err(e) if !e.is_fatal() => warn!("Skipping {}: {}", spec.display(), e),
            Err(e) => return Err(e.into()),
        }
    }

    let verb = if args.dry_run { "would insert" } else { "inserted" };
    println!("{} {} stub(s) into {} file(s)", verb, stub_count, stubbed_files);

    Ok(())
}
