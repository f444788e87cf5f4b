//! Tracing setup for the stevedore CLI and libraries.
//!
//! A [`StevedoreTracer`] composes tracing-subscriber layers from cli-level
//! configuration: a stdout layer with a selectable format, and an optional
//! journald layer. `RUST_LOG` always takes precedence over the default
//! directive derived from verbosity flags.
// Layer composition mostly follows [reth](https://github.com/paradigmxyz/reth)

pub use tracing_subscriber;

use clap::ValueEnum;
use eyre::Result;
use std::fmt::{self, Display};
use tracing_subscriber::{filter::Directive, prelude::*, EnvFilter, Layer, Registry};

/// A boxed tracing layer over the default registry.
type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// The format of log lines written to stdout.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable terminal output
    Terminal,
    /// Newline-delimited JSON output
    Json,
    /// Logfmt (key=value) output
    Logfmt,
}

impl Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Terminal => write!(f, "terminal"),
            LogFormat::Json => write!(f, "json"),
            LogFormat::Logfmt => write!(f, "logfmt"),
        }
    }
}

/// Configuration for a single subscriber layer: its output format, the
/// default filter directive, any additional filter directives, and the
/// color preference.
#[derive(Debug, Clone)]
pub struct LayerInfo {
    format: LogFormat,
    default_directive: String,
    filters: String,
    color: Option<String>,
}

impl LayerInfo {
    /// Creates a new layer configuration.
    pub fn new(
        format: LogFormat,
        default_directive: String,
        filters: String,
        color: Option<String>,
    ) -> Self {
        Self { format, default_directive, filters, color }
    }
}

/// Builds and initializes the global tracing subscriber from the
/// configured layers.
#[derive(Debug, Default)]
pub struct StevedoreTracer {
    stdout: Option<LayerInfo>,
    journald: Option<String>,
}

impl StevedoreTracer {
    /// Creates a tracer with no layers configured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the stdout layer configuration.
    pub fn with_stdout(mut self, layer: LayerInfo) -> Self {
        self.stdout = Some(layer);
        self
    }

    /// Adds a journald layer with the given filter directives.
    pub fn with_journald(mut self, filters: String) -> Self {
        self.journald = Some(filters);
        self
    }

    /// Initializes the global subscriber. Fails if a global subscriber has
    /// already been installed or a filter directive cannot be parsed.
    pub fn init(self) -> Result<()> {
        let mut layers: Vec<BoxedLayer> = Vec::new();

        if let Some(info) = &self.stdout {
            layers.push(stdout_layer(info)?);
        }
        if let Some(filters) = &self.journald {
            layers.push(journald_layer(filters)?);
        }

        tracing_subscriber::registry().with(layers).try_init()?;
        Ok(())
    }
}

fn stdout_layer(info: &LayerInfo) -> Result<BoxedLayer> {
    let filter = build_env_filter(Some(&info.default_directive), &info.filters)?;
    let ansi = !matches!(info.color.as_deref(), Some("never"));

    Ok(match info.format {
        LogFormat::Terminal => tracing_subscriber::fmt::layer()
            .with_ansi(ansi)
            .with_target(true)
            .with_filter(filter)
            .boxed(),
        LogFormat::Json => {
            tracing_subscriber::fmt::layer().json().with_ansi(false).with_filter(filter).boxed()
        }
        LogFormat::Logfmt => tracing_logfmt::layer().with_filter(filter).boxed(),
    })
}

fn journald_layer(filters: &str) -> Result<BoxedLayer> {
    let filter = build_env_filter(None, filters)?;
    Ok(tracing_journald::layer()?.with_filter(filter).boxed())
}

/// Builds an [`EnvFilter`] from an optional default directive and a
/// comma-separated list of additional directives. `RUST_LOG` wins over the
/// default directive.
fn build_env_filter(default_directive: Option<&str>, directives: &str) -> Result<EnvFilter> {
    let env_filter = if let Some(default_directive) = default_directive {
        EnvFilter::builder()
            .with_default_directive(default_directive.parse::<Directive>()?)
            .from_env_lossy()
    } else {
        EnvFilter::builder().from_env_lossy()
    };

    directives
        .split(',')
        .filter(|directive| !directive.is_empty())
        .try_fold(env_filter, |filter, directive| {
            Ok(filter.add_directive(directive.parse()?))
        })
}
