use std::env;
use std::fs;
use std::process;

use para_dp::words::split_words;
use para_dp::{Limits, PartitionerBuilder};

fn main() {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("prettyprint: {err}");
            Options::print_help();
            process::exit(2);
        }
    };

    #[cfg(feature = "cli-tracing")]
    init_tracing();

    if let Err(err) = run(&options) {
        eprintln!("prettyprint: {err}");
        process::exit(1);
    }
}

fn run(options: &Options) -> Result<(), String> {
    let text = fs::read_to_string(&options.path)
        .map_err(|err| format!("unable to read '{}': {err}", options.path))?;
    let words = split_words(&text);

    let partitioner = PartitionerBuilder::new(options.width)
        .with_limits(options.limits)
        .build()
        .map_err(|err| err.to_string())?;
    let partition = partitioner.run(&words).map_err(|err| err.to_string())?;

    let lines = partition.lines(&words).map_err(|err| err.to_string())?;

    println!("The penalty is:  {}", partition.total_cost());
    for line in lines {
        println!("{}:({})\t{}", line.number, line.len, line.text);
    }
    Ok(())
}

#[cfg(feature = "cli-tracing")]
fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[derive(Debug)]
struct Options {
    path: String,
    width: usize,
    limits: Limits,
}

impl Options {
    fn parse<I, T>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut positional = Vec::new();
        let mut limits = Limits::unbounded();

        while let Some(arg) = args.next() {
            let arg = arg.into();
            if arg == "--help" || arg == "-h" {
                Options::print_help();
                process::exit(0);
            } else if let Some(value) = arg.strip_prefix("--limits=") {
                limits = parse_limits(value)?;
            } else if arg == "--limits" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --limits".to_string())?
                    .into();
                limits = parse_limits(&value)?;
            } else if arg.starts_with("--") {
                return Err(format!("unrecognized argument '{arg}'"));
            } else {
                positional.push(arg);
            }
        }

        let [path, width] = <[String; 2]>::try_from(positional)
            .map_err(|_| "expected exactly two arguments: <FILE> <WIDTH>".to_string())?;
        let width = width
            .parse::<usize>()
            .map_err(|_| format!("width must be a non-negative integer, got '{width}'"))?;

        Ok(Self {
            path,
            width,
            limits,
        })
    }

    fn print_help() {
        println!(
            "\
Usage: prettyprint <FILE> <WIDTH> [options]

Prints the optimal division of the words in FILE into lines of at most
WIDTH columns, together with the total penalty.

Options:
  --limits <none|reference>     Input limits (default: none; reference = 2048 words of <= 30 chars)
  -h, --help                    Print this help message

Examples:
  prettyprint sampledata.txt 40
  prettyprint --limits reference sampledata.txt 72
"
        );
    }
}

fn parse_limits(value: &str) -> Result<Limits, String> {
    match value {
        "none" => Ok(Limits::unbounded()),
        "reference" => Ok(Limits::reference()),
        other => Err(format!("unknown limits '{other}'")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Options, String> {
        Options::parse(args.iter().copied())
    }

    #[test]
    fn file_and_width() {
        let opts = parse(&["words.txt", "40"]).unwrap();
        assert_eq!(opts.path, "words.txt");
        assert_eq!(opts.width, 40);
        assert_eq!(opts.limits, Limits::unbounded());
    }

    #[test]
    fn limits_flag_in_both_spellings() {
        let opts = parse(&["--limits", "reference", "w.txt", "10"]).unwrap();
        assert_eq!(opts.limits, Limits::reference());
        let opts = parse(&["w.txt", "--limits=none", "10"]).unwrap();
        assert_eq!(opts.limits, Limits::unbounded());
    }

    #[test]
    fn rejects_bad_input() {
        assert!(parse(&["w.txt"]).is_err());
        assert!(parse(&["w.txt", "ten"]).is_err());
        assert!(parse(&["w.txt", "10", "extra"]).is_err());
        assert!(parse(&["--limits", "huge", "w.txt", "10"]).is_err());
        assert!(parse(&["--verbose", "w.txt", "10"]).is_err());
    }
}
