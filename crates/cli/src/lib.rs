use anyhow::{anyhow, Context as AnyhowContext, Result};
use clap::{Args, Parser, Subcommand};
use langual_thesaurus::{load_index, ThesaurusConfig, ThesaurusIndex};
use std::env;
use std::io::{self, Write};
use std::path::PathBuf;

mod command;

pub const DATA_ENV: &str = "LANGUAL_DATA";
pub const CONFIG_ENV: &str = "LANGUAL_CONFIG";

#[derive(Parser)]
#[command(name = "langual")]
#[command(about = "Browse the LanguaL food thesaurus on the command line", long_about = None)]
#[command(version, arg_required_else_help = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Search term: a code such as B1272 or a name (same as `langual search`).
    /// Names that collide with a subcommand, e.g. `stats`, need
    /// `langual search <term>`.
    term: Option<String>,

    /// Print one `code, name` line per match instead of the path from the root
    #[arg(long)]
    no_tree: bool,

    /// Thesaurus record file (.json or tab-separated); overrides LANGUAL_DATA
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Config file (JSON or TOML); overrides LANGUAL_CONFIG
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only errors
    #[arg(long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up a code or name and show where it sits in the hierarchy
    Search(SearchArgs),

    /// List every descriptor whose name contains the term
    Contains(TermArgs),

    /// Show the path from the root to each match
    Tree(TermArgs),

    /// List the direct children of each match
    Children(TermArgs),

    /// List each match and everything below it, breadth first
    Descendants(TermArgs),

    /// Check whether a code lies below any of the given ancestor codes
    #[command(name = "is-descendant")]
    IsDescendant(IsDescendantArgs),

    /// Show record, edge and leaf counts of the loaded thesaurus
    Stats,
}

#[derive(Args)]
struct SearchArgs {
    /// Code (e.g. B1272) or name
    term: String,

    /// Print one `code, name` line per match instead of the path from the root
    #[arg(long)]
    no_tree: bool,
}

#[derive(Args)]
struct TermArgs {
    /// Code (e.g. B1272) or name
    term: String,
}

#[derive(Args)]
struct IsDescendantArgs {
    /// Code of the descriptor to test
    candidate: String,

    /// Codes of the possible ancestors
    #[arg(required = true)]
    ancestors: Vec<String>,
}

/// What to run once the index is loaded
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Action {
    Search { term: String, with_tree: bool },
    Contains { term: String },
    Tree { term: String },
    Children { term: String },
    Descendants { term: String },
    IsDescendant { candidate: String, ancestors: Vec<String> },
    Stats,
}

impl Cli {
    fn action(&self, config: &ThesaurusConfig) -> Result<Action> {
        let action = match &self.command {
            Some(Commands::Search(args)) => Action::Search {
                term: args.term.clone(),
                with_tree: config.with_tree && !args.no_tree,
            },
            Some(Commands::Contains(args)) => Action::Contains {
                term: args.term.clone(),
            },
            Some(Commands::Tree(args)) => Action::Tree {
                term: args.term.clone(),
            },
            Some(Commands::Children(args)) => Action::Children {
                term: args.term.clone(),
            },
            Some(Commands::Descendants(args)) => Action::Descendants {
                term: args.term.clone(),
            },
            Some(Commands::IsDescendant(args)) => Action::IsDescendant {
                candidate: args.candidate.clone(),
                ancestors: args.ancestors.clone(),
            },
            Some(Commands::Stats) => Action::Stats,
            None => {
                let term = self
                    .term
                    .clone()
                    .ok_or_else(|| anyhow!("No search term given; see `langual --help`"))?;
                Action::Search {
                    term,
                    with_tree: config.with_tree && !self.no_tree,
                }
            }
        };
        Ok(action)
    }
}

fn init_logging(cli: &Cli) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Error);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();
}

fn resolve_config(cli: &Cli) -> Result<ThesaurusConfig> {
    let config_path = cli
        .config
        .clone()
        .or_else(|| env::var_os(CONFIG_ENV).map(PathBuf::from));

    let mut config = match config_path {
        Some(path) => ThesaurusConfig::from_file(&path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?,
        None => ThesaurusConfig::default(),
    };

    if let Some(data) = cli
        .data
        .clone()
        .or_else(|| env::var_os(DATA_ENV).map(PathBuf::from))
    {
        config.data_path = Some(data);
    }

    Ok(config)
}

fn load(config: &ThesaurusConfig) -> Result<ThesaurusIndex> {
    let path = config.data_path.as_ref().ok_or_else(|| {
        anyhow!(
            "No thesaurus file given; pass --data <FILE>, set {DATA_ENV}, \
             or set data_path in the config file"
        )
    })?;

    load_index(path, &config.root_name)
        .with_context(|| format!("Failed to load thesaurus from {}", path.display()))
}

pub fn main_entry() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    let config = resolve_config(&cli)?;
    let action = cli.action(&config)?;
    let index = load(&config)?;

    let output = command::run(&index, &config, &action, cli.json)?;
    print_stdout(&output)
}

/// Write to stdout, treating a closed pipe (e.g. `| head`) as success.
fn print_stdout(text: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    if let Err(err) = stdout
        .write_all(text.as_bytes())
        .and_then(|_| stdout.flush())
    {
        if err.kind() == io::ErrorKind::BrokenPipe {
            return Ok(());
        }
        return Err(err.into());
    }
    Ok(())
}
