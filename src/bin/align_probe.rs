use std::env;

use global_align::{align, DpTables, Scoring};

fn main() {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("align_probe: {err}");
            Options::print_help();
            std::process::exit(2);
        }
    };

    let scoring = options.scoring;
    let seq_a = options.seq_a.as_bytes();
    let seq_b = options.seq_b.as_bytes();

    if options.show_matrix {
        let tables = DpTables::build(seq_a, seq_b, &scoring);
        println!("DP matrix (scores):");
        print!("{}", tables.render_scores(seq_a, seq_b));
        println!();
    }

    let result = align(seq_a, seq_b, &scoring);
    println!("Alignment score: {}", result.score);
    println!();
    println!("{result}");
}

struct Options {
    seq_a: String,
    seq_b: String,
    scoring: Scoring,
    show_matrix: bool,
}

impl Options {
    fn parse<I, T>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut scoring = Scoring::default();
        let mut show_matrix = false;
        let mut positional = Vec::new();

        while let Some(arg) = args.next() {
            let arg = arg.into();
            if arg == "--help" || arg == "-h" {
                Options::print_help();
                std::process::exit(0);
            } else if arg == "--matrix" {
                show_matrix = true;
            } else if let Some(value) = arg.strip_prefix("--match-score=") {
                scoring.match_score = parse_score("match score", value)?;
            } else if arg == "--match-score" {
                scoring.match_score = parse_score("match score", &next_value(&mut args, &arg)?)?;
            } else if let Some(value) = arg.strip_prefix("--mismatch=") {
                scoring.mismatch_penalty = parse_score("mismatch penalty", value)?;
            } else if arg == "--mismatch" {
                scoring.mismatch_penalty =
                    parse_score("mismatch penalty", &next_value(&mut args, &arg)?)?;
            } else if let Some(value) = arg.strip_prefix("--gap=") {
                scoring.gap_penalty = parse_score("gap penalty", value)?;
            } else if arg == "--gap" {
                scoring.gap_penalty = parse_score("gap penalty", &next_value(&mut args, &arg)?)?;
            } else if arg.starts_with("--") {
                return Err(format!("unrecognized argument '{arg}'"));
            } else {
                positional.push(arg);
            }
        }

        if positional.len() != 2 {
            return Err(format!(
                "expected exactly two sequences, got {}",
                positional.len()
            ));
        }
        let mut positional = positional.into_iter();

        Ok(Self {
            seq_a: positional.next().unwrap(),
            seq_b: positional.next().unwrap(),
            scoring,
            show_matrix,
        })
    }

    fn print_help() {
        println!(
            "\
Usage: cargo run --bin align_probe [-- <options>] SEQ_A SEQ_B

Options:
  --match-score <N>    Score added per matching column (default: 1)
  --mismatch <N>       Score added per mismatching column (default: -1)
  --gap <N>            Score added per gap column (default: -2)
  --matrix             Print the DP score matrix before the alignment
  -h, --help           Print this help message

Examples:
  cargo run --bin align_probe -- GATTACA GCATGCU
  cargo run --bin align_probe -- --match-score 1 --mismatch -1 --gap -1 --matrix GATTACA GCATGCU
"
        );
    }
}

fn next_value<I, T>(args: &mut I, flag: &str) -> Result<String, String>
where
    I: Iterator<Item = T>,
    T: Into<String>,
{
    args.next()
        .map(Into::into)
        .ok_or_else(|| format!("missing value after {flag}"))
}

fn parse_score(name: &str, value: &str) -> Result<i64, String> {
    value
        .parse::<i64>()
        .map_err(|_| format!("{name} must be an integer, got '{value}'"))
}
