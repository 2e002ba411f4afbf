use clap::{Arg, ArgAction, ArgMatches, Command, CommandFactory, FromArgMatches, Parser};
use idparams::core::options::catalog::{self, CATALOG, OptionDescriptor, Section};
use idparams::core::options::raw::RawOptionSet;
use std::ffi::OsString;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

const AFTER_HELP: &str = "\
Search options are also accepted with a single dash, e.g. '-prec_tol 5' or '-mods'.
Only -out and -db are mandatory; every other option falls back to its documented default.";

/// Front-end flags. The search options themselves are added to the command from
/// the option catalog and collected into [`Cli::options`].
#[derive(Parser, Debug)]
#[command(
    name = "idparams",
    version,
    about = "Creates identification parameter files for peptide search engines from command line options.",
    help_template = HELP_TEMPLATE,
    after_help = AFTER_HELP,
)]
pub struct Cli {
    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// TOML file with catalog locations and default option values
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Additional enzyme definitions in TOML format
    #[arg(long, value_name = "PATH")]
    pub enzymes: Option<PathBuf>,

    /// User-defined modifications in CSV or TOML format
    #[arg(long = "user-mods", value_name = "PATH")]
    pub user_modifications: Option<PathBuf>,

    /// Report every invalid option instead of stopping at the first one
    #[arg(long)]
    pub report_all: bool,

    #[arg(skip)]
    pub options: RawOptionSet,
}

/// The complete command: front-end flags plus one argument per catalog option,
/// grouped by section.
pub fn command() -> Command {
    Section::all()
        .flat_map(catalog::options_for)
        .fold(Cli::command(), |command, descriptor| {
            command.arg(option_arg(descriptor))
        })
}

pub fn parse() -> Result<Cli, clap::Error> {
    parse_from(std::env::args_os())
}

pub fn parse_from<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let matches = command().try_get_matches_from(normalize_args(args))?;
    let mut cli = Cli::from_arg_matches(&matches)?;
    cli.options = collect_options(&matches);
    Ok(cli)
}

fn option_arg(descriptor: &'static OptionDescriptor) -> Arg {
    let arg = Arg::new(descriptor.id)
        .long(descriptor.id)
        .help(descriptor.description)
        .help_heading(descriptor.section.heading());

    if descriptor.takes_value {
        arg.value_name("VALUE")
            .num_args(1)
            .allow_hyphen_values(true)
            .action(ArgAction::Set)
    } else {
        arg.action(ArgAction::SetTrue)
    }
}

fn collect_options(matches: &ArgMatches) -> RawOptionSet {
    CATALOG
        .iter()
        .filter_map(|descriptor| {
            if descriptor.takes_value {
                matches
                    .get_one::<String>(descriptor.id)
                    .map(|value| (descriptor.id, value.clone()))
            } else if matches.get_flag(descriptor.id) {
                Some((descriptor.id, String::new()))
            } else {
                None
            }
        })
        .collect()
}

/// Rewrites single-dash catalog options (`-prec_tol`, `-mods=...`) and the
/// `-help`/`-usage` aliases into the double-dash form clap expects. Only tokens
/// in option-name position are touched: the program name, option values and
/// everything after `--` pass through as given.
fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let command = command();
    let mut args = args.into_iter().map(Into::into);
    let mut normalized: Vec<OsString> = args.next().into_iter().collect();
    let mut value_expected = false;
    let mut positional_only = false;

    for arg in args {
        if value_expected || positional_only {
            value_expected = false;
            normalized.push(arg);
            continue;
        }
        let arg = normalize_arg(arg);
        positional_only = arg == "--";
        value_expected = expects_separate_value(&command, &arg);
        normalized.push(arg);
    }
    normalized
}

/// Whether `arg` is a long option whose value follows as the next token.
fn expects_separate_value(command: &Command, arg: &OsString) -> bool {
    let Some(name) = arg.to_str().and_then(|text| text.strip_prefix("--")) else {
        return false;
    };
    !name.contains('=')
        && command
            .get_arguments()
            .find(|candidate| candidate.get_long() == Some(name))
            .is_some_and(|candidate| candidate.get_action().takes_values())
}

fn normalize_arg(arg: OsString) -> OsString {
    let Some(text) = arg.to_str() else {
        return arg;
    };
    let Some(name) = text.strip_prefix('-').filter(|rest| !rest.starts_with('-')) else {
        return arg;
    };
    let id = name.split_once('=').map_or(name, |(id, _)| id);

    match id {
        "help" | "usage" => OsString::from("--help"),
        _ if catalog::lookup(id).is_some() => OsString::from(format!("-{}", text)),
        _ => arg,
    }
}
