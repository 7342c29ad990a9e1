//! Command line interface
//!
//! Every command loads a declaration table first, since configuration text
//! can only be interpreted against declared parameters and types.

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tang_application::{
    Configuration, ConfigurationBuilder, ConfigurationSerializer, DeclarationRegistry, Injector,
};
use tang_domain::value_objects::ParameterKind;
use tang_infrastructure::AppConfig;
use tang_infrastructure::files::{load_registry, read_configuration_file, write_configuration_file};
use tracing::{debug, warn};

/// Command line interface for Tang
#[derive(Parser, Debug)]
#[command(name = "tang")]
#[command(about = "Tang - Named-parameter dependency injection tools")]
#[command(version)]
pub struct Cli {
    /// Path to the settings file (defaults to a discovered tang.toml)
    #[arg(short, long, global = true)]
    pub settings: Option<PathBuf>,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Tang subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate configuration text against a declaration table
    Check {
        /// Declaration table (TOML)
        #[arg(short, long)]
        declarations: PathBuf,

        /// Configuration text files, layered in order
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Print configuration text in canonical form
    Canonicalize {
        /// Declaration table (TOML)
        #[arg(short, long)]
        declarations: PathBuf,

        /// Configuration text file
        file: PathBuf,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List declared parameters with their defaults, and declared classes
    Describe {
        /// Declaration table (TOML)
        #[arg(short, long)]
        declarations: PathBuf,
    },
}

/// Run a parsed command, writing its report to `out`
pub fn run(cli: &Cli, settings: &AppConfig, out: &mut impl Write) -> anyhow::Result<()> {
    debug!(command = ?cli.command, "Running command");
    match &cli.command {
        Command::Check { declarations, files } => check(declarations, files, settings, out),
        Command::Canonicalize {
            declarations,
            file,
            output,
        } => canonicalize(declarations, file, output.as_deref(), out),
        Command::Describe { declarations } => describe(declarations, out),
    }
}

fn registry(declarations: &Path) -> anyhow::Result<Arc<DeclarationRegistry>> {
    let registry = load_registry(declarations)
        .with_context(|| format!("loading declarations from {}", declarations.display()))?;
    Ok(Arc::new(registry))
}

fn load_store(registry: &Arc<DeclarationRegistry>, file: &Path) -> anyhow::Result<Configuration> {
    let mut builder = ConfigurationBuilder::new(Arc::clone(registry));
    read_configuration_file(file, &mut builder)
        .with_context(|| format!("reading {}", file.display()))?;
    Ok(builder.build())
}

fn check(
    declarations: &Path,
    files: &[PathBuf],
    settings: &AppConfig,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let registry = registry(declarations)?;
    let mut layers = Vec::with_capacity(files.len());
    for file in files {
        let store = load_store(&registry, file)?;
        writeln!(out, "{}: {} bindings", file.display(), store.binding_count())?;
        layers.push(Arc::new(store));
    }

    // Type-valued parameters resolve to instances, which needs constructors
    // a declaration table cannot provide; their literals were checked on load.
    let mut injector =
        Injector::new(Arc::clone(&registry), layers).with_options(settings.injector.options());
    let mut problems = 0_usize;
    for declaration in registry.parameters() {
        if declaration.element().interface().is_some() {
            continue;
        }
        if let Err(err) = injector.parameter_value(declaration.id().as_str()) {
            warn!(parameter = %declaration.id(), error = %err, "Parameter does not resolve");
            writeln!(out, "error: {err}")?;
            problems += 1;
        }
    }
    if problems > 0 {
        anyhow::bail!("{problems} parameter(s) do not resolve");
    }
    writeln!(out, "ok")?;
    Ok(())
}

fn canonicalize(
    declarations: &Path,
    file: &Path,
    output: Option<&Path>,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let registry = registry(declarations)?;
    let store = load_store(&registry, file)?;
    match output {
        Some(path) => write_configuration_file(path, &store)
            .with_context(|| format!("writing {}", path.display()))?,
        None => out.write_all(ConfigurationSerializer::to_text(&store).as_bytes())?,
    }
    Ok(())
}

fn describe(declarations: &Path, out: &mut impl Write) -> anyhow::Result<()> {
    let registry = registry(declarations)?;
    for parameter in registry.parameters() {
        let default = match parameter.kind() {
            ParameterKind::Scalar => parameter.default_literal().unwrap_or("-").to_string(),
            ParameterKind::Set if parameter.has_default() => {
                format!("{{{}}}", parameter.defaults().join(","))
            }
            ParameterKind::Set => "-".to_string(),
        };
        writeln!(
            out,
            "parameter {} {}<{}> default={}",
            parameter.id(),
            parameter.kind(),
            parameter.element(),
            default
        )?;
    }
    for class in registry.classes() {
        let kind = if class.is_abstract() { "interface" } else { "class" };
        write!(out, "{kind} {}", class.name())?;
        if !class.interfaces().is_empty() {
            let interfaces: Vec<_> = class.interfaces().iter().map(|i| i.as_str()).collect();
            write!(out, " implements {}", interfaces.join(","))?;
        }
        writeln!(out)?;
    }
    Ok(())
}
