//! Binary entry point for the dictionary-to-catalog converter.

use std::process::ExitCode;

use clap::{
    CommandFactory,
    Parser,
};
use i18n_catalog_converter::catalog::{
    self,
    CatalogConfig,
};
use i18n_catalog_converter::cli::{
    Cli,
    Command,
};
use i18n_catalog_converter::dictionary::{
    self,
    Dictionary,
    NameFilter,
};
use i18n_catalog_converter::error::Error;
use i18n_catalog_converter::headers::HeaderConfig;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(code) => code,
        Err(error) => {
            tracing::error!(%error, "Command failed");
            ExitCode::FAILURE
        }
    }
}

/// Installs the tracing subscriber on stderr. `RUST_LOG` wins over the
/// `--verbose` default when set.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

/// Dispatches the parsed command line.
fn run(cli: &Cli) -> Result<ExitCode, Error> {
    let Some(command) = &cli.command else {
        Cli::command().print_help().ok();
        return Ok(ExitCode::FAILURE);
    };

    let headers = HeaderConfig::from_overrides(&cli.headers)?;
    let source = cli.source_dir();

    match command {
        Command::Convert { name } => {
            let namespace = cli.namespace_for(name);
            let dictionary = dictionary::load(&source, name, Some(&namespace))?;
            write(cli, dictionary, cli.resolve_domain(None), headers)?;
        }
        Command::Merge { exclude, include } => {
            let filter = name_filter(include, exclude);
            let dictionary = dictionary::merge_directory(&source, cli.module.as_deref(), &filter)?;
            write(cli, dictionary, cli.resolve_domain(None), headers)?;
        }
        Command::Extract { name, tags } => {
            let namespace = cli.namespace_for(name);
            let dictionary = dictionary::load(&source, name, Some(&namespace))?;
            let tags: Vec<String> = tags.iter().map(|tag| qualify(tag, &namespace)).collect();
            write(cli, dictionary.extract(&tags), cli.resolve_domain(Some("extracted")), headers)?;
        }
        Command::Stats { csv } => {
            let dictionary =
                dictionary::merge_directory(&source, cli.module.as_deref(), &NameFilter::All)?;
            print_stats(&dictionary, *csv)?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Builds the merge filter from the mutually exclusive flag pair.
fn name_filter(include: &[String], exclude: &[String]) -> NameFilter {
    if !include.is_empty() {
        NameFilter::Include(include.iter().cloned().collect())
    } else if !exclude.is_empty() {
        NameFilter::Exclude(exclude.iter().cloned().collect())
    } else {
        NameFilter::All
    }
}

/// Prefixes a tag with the dictionary namespace unless it already
/// carries one.
fn qualify(tag: &str, namespace: &str) -> String {
    if tag.contains(':') { tag.to_string() } else { format!("{namespace}:{tag}") }
}

/// Applies the stringify transform when requested and writes catalogs.
fn write(
    cli: &Cli,
    mut dictionary: Dictionary,
    domain: String,
    headers: HeaderConfig,
) -> Result<(), Error> {
    if cli.stringify {
        dictionary.stringify();
    }
    let config = CatalogConfig { output_root: cli.output.clone(), domain, headers };
    catalog::write_catalogs(&dictionary, &config)?;
    Ok(())
}

/// Prints per-language coverage to stdout.
fn print_stats(dictionary: &Dictionary, csv: bool) -> Result<(), Error> {
    let stats = dictionary::language_stats(dictionary)?;
    for (language, stat) in &stats {
        if csv {
            println!("{language},{:.1}%,{}", stat.percentage, stat.count);
        } else {
            println!("{language}: {:.1}", stat.percentage);
        }
    }
    Ok(())
}
