use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgAction, Command};
use phpdoc_rst::{load_classes_from_path, ClassRenderer, VisibilityLevel, VisibilityPolicy};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn cli() -> Command {
    Command::new("phpdoc-rst")
        .about("Render reflected PHP classes as reStructuredText")
        .arg(
            Arg::new("input")
                .help("Reflection JSON file, or - for stdin")
                .required(true)
                .value_parser(value_parser!(PathBuf))
                .index(1),
        )
        .arg(
            Arg::new("visibility")
                .long("visibility")
                .help("Lowest member visibility to document")
                .value_parser(value_parser!(VisibilityLevel))
                .default_value("public"),
        )
        .arg(
            Arg::new("include-internal")
                .long("include-internal")
                .help("Also document elements tagged @internal")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("class")
                .long("class")
                .value_name("FQSEN")
                .help("Only render the element with this fully qualified name"),
        )
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_env("PHPDOC_RST_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let matches = cli().get_matches();

    let input = matches
        .get_one::<PathBuf>("input")
        .context("missing input argument")?;
    let level = matches
        .get_one::<VisibilityLevel>("visibility")
        .copied()
        .unwrap_or_default();
    let policy = VisibilityPolicy::new(level).with_internal(matches.get_flag("include-internal"));
    let only = matches
        .get_one::<String>("class")
        .map(|fqsen| fqsen.trim_start_matches('\\').to_string());

    let classes = load_classes_from_path(input)?;
    let renderer = ClassRenderer::new(policy);

    let stdout = io::stdout();
    let mut stdout = stdout.lock();
    let mut rendered = 0usize;
    for class in &classes {
        if let Some(only) = &only {
            if class.fqsen.trim_start_matches('\\') != only {
                continue;
            }
        }
        let output = renderer
            .render(class)
            .with_context(|| format!("Failed to render {}", class.fqsen))?;
        if output.is_empty() {
            continue;
        }
        stdout.write_all(output.as_bytes())?;
        rendered += 1;
    }

    if let Some(only) = &only {
        if rendered == 0 {
            anyhow::bail!("No renderable element named {}", only);
        }
    }

    info!(rendered, total = classes.len(), "done");
    Ok(())
}
