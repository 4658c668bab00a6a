//! CLI entry point for twig

use std::ffi::OsString;
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Command, CommandFactory, Parser};
use twig::{ColorMode, ListingConfig, ListingFormatter, OutputConfig, TreeWalker};

#[derive(Parser, Debug)]
#[command(name = "twig")]
#[command(about = "Print an indented listing of a directory tree")]
#[command(version)]
struct Args {
    /// Directory to list
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Show hidden entries (names starting with '.')
    #[arg(short = 'a', long = "all")]
    all: bool,

    /// List directories only
    #[arg(short = 'd', long = "dirs-only")]
    dirs_only: bool,

    /// Descend only N levels deep (N > 0)
    #[arg(
        short = 'L',
        long = "level",
        value_name = "N",
        allow_negative_numbers = true,
        value_parser = parse_level
    )]
    level: Option<usize>,

    /// Print the size of each entry in bytes
    #[arg(short = 's', long = "size")]
    size: bool,

    /// Print the file type and permissions of each entry
    #[arg(short = 'p', long = "perms")]
    perms: bool,

    /// List only entries whose name matches PATTERN. PATTERN is read as a regex
    /// whenever it is one (`a_*` means "a" then any underscores); only text that
    /// is not a valid regex, such as `*.txt`, is read as a glob
    #[arg(short = 'P', long = "pattern", value_name = "PATTERN", allow_hyphen_values = true)]
    pattern: Option<String>,

    /// Do not list entries whose name matches PATTERN (regex first, glob
    /// otherwise, as for --pattern)
    #[arg(short = 'I', long = "ignore", value_name = "PATTERN", allow_hyphen_values = true)]
    ignore: Option<String>,

    /// Print the full path of each entry instead of its name
    #[arg(short = 'f', long = "full-path")]
    full_path: bool,

    /// Wrap names in double quotes
    #[arg(short = 'Q', long = "quote")]
    quote: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

impl Args {
    fn listing_config(&self) -> ListingConfig {
        ListingConfig {
            show_hidden: self.all,
            max_depth: self.level,
            dirs_only: self.dirs_only,
            exclude_pattern: self.ignore.as_deref().map(trim_quotes),
            include_pattern: self.pattern.as_deref().map(trim_quotes),
            full_path: self.full_path,
            quote_names: self.quote,
            show_size: self.size,
            show_permissions: self.perms,
        }
    }
}

/// Parse the `-L` argument: a strictly positive integer.
fn parse_level(s: &str) -> Result<usize, String> {
    let level: i64 = s
        .trim()
        .parse()
        .map_err(|_| format!("expected a number, got '{}'", s))?;
    if level <= 0 {
        return Err("invalid level, must be greater than 0".to_string());
    }
    usize::try_from(level).map_err(|_| format!("level {} is too large", level))
}

/// Strip one leading and one trailing double quote, if present.
fn trim_quotes(s: &str) -> String {
    let s = s.strip_prefix('"').unwrap_or(s);
    let s = s.strip_suffix('"').unwrap_or(s);
    s.to_string()
}

/// Flags clap knows about, with whether each one takes a value.
struct KnownFlags {
    short: Vec<(char, bool)>,
    long: Vec<(String, bool)>,
}

impl KnownFlags {
    fn from_command(mut cmd: Command) -> Self {
        // Building registers the generated --help and --version flags
        cmd.build();

        let mut short = Vec::new();
        let mut long = Vec::new();
        for arg in cmd.get_arguments().filter(|a| !a.is_positional()) {
            let takes_value = arg.get_action().takes_values();
            if let Some(c) = arg.get_short() {
                short.push((c, takes_value));
            }
            if let Some(name) = arg.get_long() {
                long.push((name.to_string(), takes_value));
            }
        }
        Self { short, long }
    }

    fn short(&self, c: char) -> Option<bool> {
        self.short.iter().find(|(s, _)| *s == c).map(|(_, v)| *v)
    }

    fn long(&self, name: &str) -> Option<bool> {
        self.long.iter().find(|(l, _)| l == name).map(|(_, v)| *v)
    }
}

/// Drop flags the command does not define, so they are ignored rather than
/// rejected. Values of known flags are passed through untouched.
///
/// An unknown flag may have been given a value (`--sort name`). That value
/// cannot be told apart from the directory operand, so when more than one
/// operand survives, the last one that does not directly follow a dropped
/// flag is kept and the others are dropped.
fn retain_known_args<I>(args: I, cmd: Command) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let known = KnownFlags::from_command(cmd);
    let mut iter = args.into_iter();
    let mut kept = Vec::new();
    // Index into `kept` of each operand, and whether it follows a dropped flag
    let mut operands: Vec<(usize, bool)> = Vec::new();
    let mut after_unknown = false;

    if let Some(bin) = iter.next() {
        kept.push(bin);
    }

    while let Some(arg) = iter.next() {
        let Some(text) = arg.to_str() else {
            operands.push((kept.len(), after_unknown));
            kept.push(arg);
            after_unknown = false;
            continue;
        };

        if text == "--" {
            kept.push(arg);
            for rest in iter.by_ref() {
                operands.push((kept.len(), false));
                kept.push(rest);
            }
            break;
        }

        if let Some(long) = text.strip_prefix("--") {
            let (name, inline_value) = match long.split_once('=') {
                Some((name, value)) => (name, Some(value)),
                None => (long, None),
            };
            match known.long(name) {
                Some(takes_value) => {
                    let needs_value = takes_value && inline_value.is_none();
                    kept.push(arg);
                    if needs_value {
                        kept.extend(iter.next());
                    }
                    after_unknown = false;
                }
                None => {
                    log::debug!("ignoring unknown flag {}", text);
                    after_unknown = inline_value.is_none();
                }
            }
            continue;
        }

        if let Some(cluster) = text.strip_prefix('-').filter(|c| !c.is_empty()) {
            let mut retained = String::from("-");
            let mut needs_value = false;
            let mut last_unknown = false;
            for (i, c) in cluster.char_indices() {
                match known.short(c) {
                    Some(true) => {
                        // The rest of the cluster is this flag's value
                        retained.push_str(&cluster[i..]);
                        needs_value = i + c.len_utf8() == cluster.len();
                        last_unknown = false;
                        break;
                    }
                    Some(false) => {
                        retained.push(c);
                        last_unknown = false;
                    }
                    None => {
                        log::debug!("ignoring unknown flag -{}", c);
                        last_unknown = true;
                    }
                }
            }
            if retained.len() > 1 {
                kept.push(OsString::from(retained));
            }
            if needs_value {
                kept.extend(iter.next());
            }
            after_unknown = last_unknown;
            continue;
        }

        operands.push((kept.len(), after_unknown));
        kept.push(arg);
        after_unknown = false;
    }

    if operands.len() > 1 {
        let keep = operands
            .iter()
            .rev()
            .find(|(_, follows_unknown)| !follows_unknown)
            .or(operands.last())
            .map(|(i, _)| *i);
        // Remove back to front so earlier indices stay valid
        for &(i, _) in operands.iter().rev() {
            if Some(i) != keep {
                let dropped = kept.remove(i);
                log::debug!("ignoring extra operand {}", dropped.to_string_lossy());
            }
        }
    }

    kept
}

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();
}

fn run(args: Args) -> Result<()> {
    let config = args.listing_config();
    log::debug!("listing {} with {:?}", args.path.display(), config);

    // Walk everything up front: a walk error must not leave a partial listing
    let entries = TreeWalker::new().walk(&args.path)?;

    let output = OutputConfig::new(args.color);
    let mut stdout = output.stdout();
    let counts = ListingFormatter::new(&config)
        .render(&entries, &mut stdout)
        .context("error writing output")?;
    log::debug!("rendered {} of {} entries", counts.total(), entries.len());

    Ok(())
}

fn main() {
    init_logging();

    let argv = retain_known_args(std::env::args_os(), Args::command());
    let args = Args::parse_from(argv);

    if let Err(e) = run(args) {
        eprintln!("twig: {:#}", e);
        process::exit(1);
    }
}
