use announcement::Submission;
use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tawasul_core::config::markup_from_env_value;
use tawasul_core::{CardLayout, ComposedNotice, ComposerConfig, Markup, TextComposer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "tawasul")]
#[command(about = "Tawasul notice composer CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compose a submission file (YAML, or JSON with a .json extension)
    Compose {
        /// Submission file
        file: PathBuf,
        /// Emit plain text instead of HTML spans
        #[arg(long)]
        plain: bool,
        /// Print the top and bottom card regions separately
        #[arg(long)]
        layout: bool,
    },
    /// Validate a submission file without printing the composed text
    Check {
        /// Submission file
        file: PathBuf,
    },
    /// Re-emit a submission file as normalised YAML
    Normalise {
        /// Submission file
        file: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("tawasul=warn".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Compose {
            file,
            plain,
            layout,
        }) => {
            let markup = if plain {
                Markup::Plain
            } else {
                markup_from_env_value(std::env::var("TAWASUL_MARKUP").ok())?
            };
            tracing::debug!("composing {} with {} markup", file.display(), markup.to_wire());
            let composer = TextComposer::new(ComposerConfig::new(markup));

            let composed = composer
                .compose_file(&file)
                .with_context(|| format!("composing {}", file.display()))?;

            match (layout, composed.layout()) {
                (true, Some(card)) => print_layout(&composed, &card),
                _ => println!("{}", composed.text()),
            }
        }
        Some(Commands::Check { file }) => {
            let data = load(&file)?;
            TextComposer::default()
                .compose_submission(&data)
                .with_context(|| format!("composing {}", file.display()))?;
            println!(
                "{}: ok ({})",
                file.display(),
                data.category().arabic_name()
            );
        }
        Some(Commands::Normalise { file }) => {
            let data = load(&file)?;
            print!("{}", Submission::render_yaml(&data)?);
        }
        None => {
            println!("Use 'tawasul --help' for commands");
        }
    }

    Ok(())
}

fn load(file: &Path) -> anyhow::Result<announcement::SubmissionData> {
    let data = Submission::load(file)
        .with_context(|| format!("reading submission {}", file.display()))?;
    tracing::debug!("loaded {} submission from {}", data.category().to_wire(), file.display());
    Ok(data)
}

fn print_layout(composed: &ComposedNotice, card: &CardLayout) {
    if let ComposedNotice::Announcement(announcement) = composed {
        for line in announcement.header_lines() {
            println!("{line}");
        }
    }
    println!("--- top ---");
    for section in &card.top {
        println!("[{}] {}", section.kind.as_str(), section.text);
    }
    println!("--- bottom ---");
    for section in &card.bottom {
        println!("[{}] {}", section.kind.as_str(), section.text);
    }
}
