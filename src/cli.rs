//! Command-line surface of the converter.

use std::path::PathBuf;

use clap::{
    Parser,
    Subcommand,
};

/// Convert JSON localization dictionaries into gettext catalogs.
#[derive(Parser, Debug)]
#[command(name = "i18n-catalog", version, about)]
pub struct Cli {
    /// Catalog domain, overriding the module- or command-derived name
    #[arg(long, global = true)]
    pub domain: Option<String>,

    /// Root directory for written catalogs
    #[arg(long, value_name = "DIR", default_value = "locale", global = true)]
    pub output: PathBuf,

    /// Module whose dictionaries are processed
    #[arg(long, global = true)]
    pub module: Option<String>,

    /// Dictionary source directory (defaults to `dictionaries`, or
    /// `modules/<MODULE>/dictionaries` when a module is given)
    #[arg(long, value_name = "DIR", global = true)]
    pub path: Option<PathBuf>,

    /// Catalog header override; repeatable
    #[arg(long = "header", value_name = "KEY=VALUE", global = true)]
    pub headers: Vec<String>,

    /// Also index entries by their English string
    #[arg(long, global = true)]
    pub stringify: bool,

    /// Verbose diagnostics
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Command to run; without one the usage text is printed
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert a single dictionary into catalogs
    Convert {
        /// Dictionary base name
        name: String,
    },

    /// Merge every dictionary in the source directory into catalogs
    Merge {
        /// Dictionary to leave out; repeatable
        #[arg(long, value_name = "NAME", conflicts_with = "include")]
        exclude: Vec<String>,

        /// Dictionary to keep; repeatable
        #[arg(long, value_name = "NAME")]
        include: Vec<String>,
    },

    /// Extract named tags from a dictionary into the `extracted` domain
    Extract {
        /// Dictionary base name
        name: String,

        /// Message-ids to extract; unqualified tags are namespaced
        /// like the dictionary's own entries
        #[arg(required = true)]
        tags: Vec<String>,
    },

    /// Print per-language translation coverage
    Stats {
        /// Emit `language,percentage%,count` lines instead
        #[arg(long)]
        csv: bool,
    },
}

impl Cli {
    /// Directory holding the dictionary source files.
    #[must_use]
    pub fn source_dir(&self) -> PathBuf {
        self.path.clone().unwrap_or_else(|| match &self.module {
            Some(module) => PathBuf::from("modules").join(module).join("dictionaries"),
            None => PathBuf::from("dictionaries"),
        })
    }

    /// Namespace for the dictionary `name`, `{module or name}:{name}`.
    #[must_use]
    pub fn namespace_for(&self, name: &str) -> String {
        format!("{}:{name}", self.module.as_deref().unwrap_or(name))
    }

    /// Catalog domain after applying the override chain: `--domain`,
    /// then the command's own default, then the module, then
    /// `messages`.
    #[must_use]
    pub fn resolve_domain(&self, command_default: Option<&str>) -> String {
        self.domain
            .clone()
            .or_else(|| command_default.map(ToString::to_string))
            .or_else(|| self.module.clone())
            .unwrap_or_else(|| "messages".to_string())
    }
}
