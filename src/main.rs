//! The `autotex` binary.

use autotex::{
    format_html, parse_fragment, process_math_in_element, Arena, Delimiter, OptionsOverride,
    RenderErrorPolicy,
};
use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, ValueEnum};
use std::error::Error;
use std::fs;
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;
use std::process;

const EXIT_PARSE_CONFIG: i32 = 2;
const EXIT_READ_INPUT: i32 = 3;
const EXIT_RENDER: i32 = 4;

#[derive(Debug, Parser)]
#[command(about, author, version)]
#[command(after_help = "\
By default, math is found between $$...$$, \\[...\\] and \\(...\\), in that
order, and never inside script, noscript, style, textarea, pre or code.
Giving any --delimiter or --display-delimiter replaces the defaults; pairs
take precedence in the order given.

By default, autotex reads options from the configuration file at
~/.config/autotex/config (or $XDG_CONFIG_HOME/autotex/config). The file is
split into arguments like a shell command line, and those arguments are
placed before the ones given on the command line.")]
struct Cli {
    /// HTML files to process; or standard input if none passed
    #[arg(value_name = "FILE")]
    files: Option<Vec<PathBuf>>,

    /// Path to config file containing command-line arguments, or 'none'
    #[arg(short, long, value_name = "PATH", default_value = get_configuration_path())]
    config_file: String,

    /// Add an inline delimiter pair
    #[arg(long, num_args = 2, value_names = ["LEFT", "RIGHT"], allow_hyphen_values = true)]
    delimiter: Vec<String>,

    /// Add a display-mode delimiter pair
    #[arg(long, num_args = 2, value_names = ["LEFT", "RIGHT"], allow_hyphen_values = true)]
    display_delimiter: Vec<String>,

    /// Don't look for math inside TAG; may be repeated, and replaces the
    /// default list
    #[arg(long, value_name = "TAG")]
    ignore: Vec<String>,

    /// What to do when a math span can't be rendered
    #[arg(long, value_enum, value_name = "POLICY")]
    on_error: Option<OnError>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OnError {
    /// Stop with an error and print nothing
    Abort,
    /// Replace the span with an error marker and carry on
    Isolate,
}

impl From<OnError> for RenderErrorPolicy {
    fn from(on_error: OnError) -> Self {
        match on_error {
            OnError::Abort => RenderErrorPolicy::Abort,
            OnError::Isolate => RenderErrorPolicy::Isolate,
        }
    }
}

#[cfg(all(not(windows), not(target_arch = "wasm32")))]
fn get_configuration_path() -> String {
    if let Ok(xdg_dirs) = xdg::BaseDirectories::with_prefix("autotex") {
        if let Ok(path) = xdg_dirs.place_config_file("config") {
            return path.to_string_lossy().into_owned();
        }
    }

    "none".into()
}

#[cfg(any(windows, target_arch = "wasm32"))]
fn get_configuration_path() -> String {
    "none".into()
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let matches = matches_with_config();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let options = OptionsOverride {
        delimiters: delimiters_in_order(&matches)?,
        ignored_tags: if cli.ignore.is_empty() {
            None
        } else {
            Some(cli.ignore.clone())
        },
        error_policy: cli.on_error.map(Into::into),
    };

    let mut input = String::with_capacity(2048);
    match cli.files {
        None => {
            io::stdin().read_to_string(&mut input)?;
        }
        Some(ref paths) => {
            for path in paths {
                match fs::read_to_string(path) {
                    Ok(contents) => input.push_str(&contents),
                    Err(e) => {
                        eprintln!("failed to read {}: {}", path.display(), e);
                        process::exit(EXIT_READ_INPUT);
                    }
                }
            }
        }
    }

    let arena = Arena::new();
    let root = parse_fragment(&arena, &input);

    if let Err(e) = process_math_in_element(&arena, Some(root), Some(options)) {
        eprintln!("{}", e);
        process::exit(EXIT_RENDER);
    }

    let stdout = io::stdout();
    let mut bw = BufWriter::new(stdout.lock());
    fmt2io::write(&mut bw, |writer| format_html(root, writer))?;
    bw.flush()?;

    Ok(())
}

/// Parse the command line, with the configuration file's arguments placed in
/// front of it.
fn matches_with_config() -> ArgMatches {
    let matches = Cli::command().get_matches();
    let config_file = matches
        .get_one::<String>("config_file")
        .map_or("none", String::as_str);

    if config_file == "none" {
        return matches;
    }

    let contents = match fs::read_to_string(config_file) {
        Ok(contents) => contents,
        Err(e) => {
            log::debug!("not reading {}: {}", config_file, e);
            return matches;
        }
    };

    match shell_words::split(&contents) {
        Ok(mut args) => {
            for (i, arg) in std::env::args().enumerate() {
                if i == 0 {
                    args.insert(0, arg);
                } else {
                    args.push(arg);
                }
            }
            Cli::command().get_matches_from(args)
        }
        Err(e) => {
            eprintln!("failed to parse {}: {}", config_file, e);
            process::exit(EXIT_PARSE_CONFIG);
        }
    }
}

/// Collect `--delimiter` and `--display-delimiter` pairs in the order they
/// were given, or `None` if there were none.
fn delimiters_in_order(matches: &ArgMatches) -> Result<Option<Vec<Delimiter>>, autotex::Error> {
    let mut pairs = vec![];

    for (id, display) in [("delimiter", false), ("display_delimiter", true)] {
        let values = match matches.get_many::<String>(id) {
            Some(values) => values.collect::<Vec<_>>(),
            None => continue,
        };
        let indices = matches
            .indices_of(id)
            .map_or_else(Vec::new, |indices| indices.collect::<Vec<_>>());

        for (pair, index) in values.chunks(2).zip(indices.into_iter().step_by(2)) {
            if let [left, right] = pair {
                pairs.push((index, Delimiter::new(left.as_str(), right.as_str(), display)?));
            }
        }
    }

    if pairs.is_empty() {
        return Ok(None);
    }

    pairs.sort_by_key(|&(index, _)| index);
    Ok(Some(pairs.into_iter().map(|(_, d)| d).collect()))
}
