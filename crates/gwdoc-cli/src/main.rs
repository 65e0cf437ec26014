use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use gwdoc_core::config::{self, CONFIG_FILE_NAME, GwdocConfig};
use gwdoc_core::parse::{self, document::OpenApiDocument};
use gwdoc_core::{
    DecorationStrategy, Decorator, ExtractOptions, InfoPlacement, ModelNormalization,
    PartExtractor,
};

#[derive(Parser)]
#[command(
    name = "gwdoc",
    about = "Attach API Gateway documentation parts to an OpenAPI 3.x document",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decorate an OpenAPI document with x-amazon-apigateway-documentation
    Decorate {
        /// Path to the OpenAPI document (YAML or JSON)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Where to write the decorated document (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Decoration strategy
        #[arg(long)]
        strategy: Option<String>,

        #[command(flatten)]
        extract: ExtractArgs,

        /// Output format (defaults to the output or input file extension)
        #[arg(long)]
        format: Option<Format>,
    },

    /// Print the documentation parts of an OpenAPI document
    Parts {
        /// Path to the OpenAPI document
        #[arg(short, long)]
        input: PathBuf,

        #[command(flatten)]
        extract: ExtractArgs,

        /// Output format
        #[arg(long, default_value = "json")]
        format: Format,
    },

    /// Initialize a new gwdoc configuration
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(clap::Args)]
struct ExtractArgs {
    /// Rename component schemas to alphanumeric model names
    #[arg(long)]
    normalize_models: Option<Switch>,

    /// Where info fields go in the API part
    #[arg(long)]
    info: Option<InfoArg>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Switch {
    On,
    Off,
}

#[derive(Clone, Copy, ValueEnum)]
enum InfoArg {
    Nested,
    Flattened,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Yaml,
    Json,
}

impl ExtractArgs {
    /// Overlay command-line flags on the configured options.
    fn apply(&self, mut options: ExtractOptions) -> ExtractOptions {
        if let Some(switch) = self.normalize_models {
            options.model_normalization = match switch {
                Switch::On => ModelNormalization::On,
                Switch::Off => ModelNormalization::Off,
            };
        }
        if let Some(info) = self.info {
            options.info_placement = match info {
                InfoArg::Nested => InfoPlacement::Nested,
                InfoArg::Flattened => InfoPlacement::Flattened,
            };
        }
        options
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Decorate {
            input,
            output,
            strategy,
            extract,
            format,
        } => cmd_decorate(input, output, strategy, &extract, format),

        Commands::Parts {
            input,
            extract,
            format,
        } => cmd_parts(input, &extract, format),

        Commands::Init { force } => cmd_init(force),

        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            clap_complete::generate(shell, &mut cmd, "gwdoc", &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Try to load the project config file from the current directory.
fn try_load_config() -> Result<Option<GwdocConfig>> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    Ok(config::load_config(&config_path)?)
}

fn format_for(path: &Path) -> Format {
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => Format::Json,
        _ => Format::Yaml,
    }
}

fn load_document(path: &Path) -> Result<OpenApiDocument> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;

    let doc = match format_for(path) {
        Format::Json => parse::from_json(&content)?,
        Format::Yaml => parse::from_yaml(&content)?,
    };
    log::debug!("loaded {} paths from {}", doc.paths.len(), path.display());
    Ok(doc)
}

fn render<T: serde::Serialize>(value: &T, format: Format) -> Result<String> {
    Ok(match format {
        Format::Yaml => serde_yaml_ng::to_string(value)?,
        Format::Json => format!("{}\n", serde_json::to_string_pretty(value)?),
    })
}

fn cmd_decorate(
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    strategy: Option<String>,
    extract: &ExtractArgs,
    format: Option<Format>,
) -> Result<()> {
    let cfg = try_load_config()?.unwrap_or_default();
    let input = input.unwrap_or_else(|| PathBuf::from(&cfg.input));
    let output = output.or_else(|| cfg.output.as_ref().map(PathBuf::from));
    let strategy = match strategy {
        Some(s) => s.parse::<DecorationStrategy>()?,
        None => cfg.strategy,
    };
    let options = extract.apply(cfg.extract);

    let mut doc = load_document(&input)?;
    let mut decorator = Decorator::new(&mut doc, options);
    decorator
        .decorate(strategy)
        .with_context(|| format!("failed to decorate {}", input.display()))?;

    for (old, new) in &decorator.model_names().old_to_new {
        if old != new {
            eprintln!("  renamed model {old} → {new}");
        }
    }

    let format =
        format.unwrap_or_else(|| format_for(output.as_deref().unwrap_or(input.as_path())));
    let rendered = render(&doc, format)?;

    match output {
        Some(path) => {
            fs::write(&path, rendered)
                .with_context(|| format!("failed to write {}", path.display()))?;
            eprintln!("Decorated {} → {}", input.display(), path.display());
        }
        None => print!("{rendered}"),
    }
    Ok(())
}

fn cmd_parts(input: PathBuf, extract: &ExtractArgs, format: Format) -> Result<()> {
    let cfg = try_load_config()?.unwrap_or_default();
    let options = extract.apply(cfg.extract);

    let mut doc = load_document(&input)?;
    let mut extractor = PartExtractor::new(&mut doc, options);
    let parts = extractor
        .parse()
        .with_context(|| format!("failed to extract parts from {}", input.display()))?;

    let summary = serde_json::json!({
        "documentationParts": parts,
        "models": extractor.model_names(),
    });
    print!("{}", render(&summary, format)?);
    Ok(())
}

fn cmd_init(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, config::default_config_content())?;
    eprintln!("Created {}", config_path.display());
    Ok(())
}
