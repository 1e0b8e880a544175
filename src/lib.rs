// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod fs;
pub mod graph;
pub mod logging;
pub mod scope;
pub mod types;

use std::io::Write;
use std::path::Path;

use anyhow::Result;
use tracing::{debug, error, info};

use crate::cli::CliArgs;
use crate::config::loader::load_and_validate;
use crate::config::model::ConfigFile;
use crate::errors::PresubmitError;
use crate::fs::{FileSystem, RealFileSystem};
use crate::graph::{affected_modules, Manifest};
use crate::scope::{load_changed_paths, ChangeScopeResolver};
use crate::types::MatchMode;

/// Knobs for a single resolution pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResolveOptions {
    pub match_mode: MatchMode,
    /// Fill `Manifest::affected_modules` with the dependents closure.
    pub with_affected: bool,
}

impl ResolveOptions {
    pub fn from_config(cfg: &ConfigFile) -> Self {
        Self {
            match_mode: cfg.config.match_mode,
            with_affected: false,
        }
    }
}

/// Resolve the presubmit manifest for one invocation.
///
/// - `changed_files == None`: the feature is off; returns `Ok(None)` without
///   touching the filesystem.
/// - Unreadable change list: `Err(PresubmitError::InputUnreadable)`; no
///   manifest is produced and no module is assumed touched.
/// - Otherwise: the umbrella task with one edge per touched module that
///   exposes a dependents task (possibly none).
pub fn resolve_presubmit(
    fs: &dyn FileSystem,
    changed_files: Option<&Path>,
    cfg: &ConfigFile,
    options: ResolveOptions,
) -> errors::Result<Option<Manifest>> {
    let Some(path) = changed_files else {
        debug!("no change list supplied; presubmit scoping inactive");
        return Ok(None);
    };

    info!("Creating presubmit task.");
    let changes = load_changed_paths(fs, path)?;

    let modules = cfg.modules();
    let resolver = ChangeScopeResolver::new(&modules, options.match_mode);
    let touched = resolver.resolve(&changes);
    info!(
        touched = touched.len(),
        modules = modules.len(),
        changes = changes.len(),
        "resolved touched modules"
    );

    let mut manifest = Manifest::new(&cfg.config.umbrella_task, &cfg.config.group);
    resolver.wire(&cfg.config.umbrella_task, &touched, &mut manifest);

    if options.with_affected {
        manifest.affected_modules = Some(affected_modules(&cfg.dependency_map(), &touched));
    }
    manifest.touched_modules = touched.into_vec();

    Ok(Some(manifest))
}

/// High-level entry point used by `main.rs`.
pub fn run(args: CliArgs) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_with(&args, &RealFileSystem, &mut out)
}

/// [`run`] with an injectable filesystem and output sink.
///
/// Without a change list (and outside dry-run) nothing is loaded, not even
/// the config. Config errors propagate. An unreadable change list is logged
/// and swallowed so the surrounding build carries on without the presubmit
/// task.
pub fn run_with(args: &CliArgs, fs: &dyn FileSystem, out: &mut dyn Write) -> Result<()> {
    if args.changed_files.is_none() && !args.dry_run {
        debug!("no change list supplied; presubmit scoping inactive");
        return Ok(());
    }

    let cfg = load_and_validate(&args.config)?;

    if args.dry_run {
        print_dry_run(&cfg, out)?;
        return Ok(());
    }

    let mut options = ResolveOptions::from_config(&cfg);
    if let Some(mode) = args.match_mode {
        options.match_mode = mode;
    }
    options.with_affected = args.with_affected;

    match resolve_presubmit(fs, args.changed_files.as_deref(), &cfg, options) {
        Ok(Some(manifest)) => {
            out.write_all(manifest.render(args.format)?.as_bytes())?;
            Ok(())
        }
        Ok(None) => Ok(()),
        Err(err @ PresubmitError::InputUnreadable { .. }) => {
            error!(error = %err, "Unable to read presubmit file");
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

/// Simple dry-run output: print settings and modules.
fn print_dry_run(cfg: &ConfigFile, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "presubmit-scope dry-run")?;
    writeln!(out, "  config.umbrella_task = {}", cfg.config.umbrella_task)?;
    writeln!(out, "  config.group = {}", cfg.config.group)?;
    writeln!(out, "  config.dependents_task = {}", cfg.config.dependents_task)?;
    writeln!(out, "  config.match_mode = {}", cfg.config.match_mode)?;
    writeln!(out)?;

    writeln!(out, "modules ({}):", cfg.module.len())?;
    for module in cfg.modules() {
        writeln!(out, "  - {}", module.name)?;
        writeln!(out, "      root: {}", module.root)?;
        match module.dependents_task {
            Some(ref task) => writeln!(out, "      dependents: {task}")?,
            None => writeln!(out, "      dependents: (none)")?,
        }
        let deps = &cfg.module[&module.name].depends_on;
        if !deps.is_empty() {
            writeln!(out, "      depends_on: {:?}", deps)?;
        }
    }

    debug!("dry-run complete (change list not read)");
    Ok(())
}
