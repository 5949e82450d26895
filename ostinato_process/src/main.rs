// Ostinato — CLI entry point.
//
// Runs an additive or subtractive process over a phrase given on the command
// line and prints one output phrase per line. Elements are opaque tokens;
// nothing is parsed beyond splitting on whitespace.
//
// Usage:
//   cargo run -p ostinato_process -- [additive|subtractive] [OPTIONS] [--] ELEMENT...
//     --direction <D>      forward | backward | inward | outward (default: forward)
//     --step <S>           N | a,b,c | primes | kolakoski (default: 1)
//     --step-mode <M>      relative | absolute (default: relative)
//     --repetitions <R>    N | a,b,c (default: 1)
//     --iterations <N>     cap on process steps (default: unbounded)
//     --config <JSON>      inline JSON ProcessConfig; other flags override it
//     --flat               print all phrases on a single line
//
// Example:
//   process subtractive --direction outward C D E F G A B c d e f g
//
// Set RUST_LOG=debug to see run diagnostics on stderr.

use ostinato_process::{ProcessConfig, ProcessError, ProcessKind, flatten, run};
use tracing_subscriber::EnvFilter;

/// Raw command-line options, before they are folded into a `ProcessConfig`.
#[derive(Default)]
struct Args {
    kind: Option<String>,
    config_json: Option<String>,
    direction: Option<String>,
    step: Option<String>,
    step_mode: Option<String>,
    repetitions: Option<String>,
    iterations: Option<String>,
    flat: bool,
    elements: Vec<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = parse_args();
    if args.elements.is_empty() {
        eprintln!("No elements given. Usage: process [additive|subtractive] [OPTIONS] ELEMENT...");
        std::process::exit(1);
    }

    let (kind, config) = match build_config(&args) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("[{}] {e}", e.code());
            std::process::exit(1);
        }
    };

    let result = match run(kind, &args.elements, &config) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("[{}] {e}", e.code());
            std::process::exit(1);
        }
    };

    if args.flat {
        println!("{}", flatten(&result.phrases).join(" "));
    } else {
        for phrase in &result.phrases {
            println!("{}", phrase.join(" "));
        }
    }
    tracing::info!(
        steps = result.steps,
        phrases = result.phrases.len(),
        termination = %result.termination,
        "done"
    );
}

/// Fold the raw options into a process kind and a validated configuration.
fn build_config(args: &Args) -> Result<(ProcessKind, ProcessConfig), ProcessError> {
    let kind = match &args.kind {
        Some(k) => k.parse()?,
        None => ProcessKind::Additive,
    };
    let mut config = match &args.config_json {
        Some(json) => ProcessConfig::from_json(json)?,
        None => ProcessConfig::default(),
    };
    if let Some(d) = &args.direction {
        config.direction = d.parse()?;
    }
    if let Some(s) = &args.step {
        config.step = s.parse()?;
    }
    if let Some(m) = &args.step_mode {
        config.step_mode = m.parse()?;
    }
    if let Some(r) = &args.repetitions {
        config.repetitions = r.parse()?;
    }
    if let Some(i) = &args.iterations {
        let cap = i.parse().map_err(|_| ProcessError::InvalidIterations)?;
        config.iterations = Some(cap);
    }
    config.validate()?;
    Ok((kind, config))
}

/// Parse `std::env::args()` by hand, as a simple flag walk.
fn parse_args() -> Args {
    let mut args = Args::default();
    let argv: Vec<String> = std::env::args().skip(1).collect();
    let mut i = 0;
    let mut flags_done = false;

    while i < argv.len() {
        let arg = &argv[i];
        if flags_done || !arg.starts_with("--") {
            if args.kind.is_none()
                && args.elements.is_empty()
                && !flags_done
                && arg.parse::<ProcessKind>().is_ok()
            {
                args.kind = Some(arg.clone());
            } else {
                args.elements.extend(arg.split_whitespace().map(str::to_string));
            }
            i += 1;
            continue;
        }

        let slot = match arg.as_str() {
            "--" => {
                flags_done = true;
                i += 1;
                continue;
            }
            "--flat" => {
                args.flat = true;
                i += 1;
                continue;
            }
            "--config" => &mut args.config_json,
            "--direction" => &mut args.direction,
            "--step" => &mut args.step,
            "--step-mode" => &mut args.step_mode,
            "--repetitions" => &mut args.repetitions,
            "--iterations" => &mut args.iterations,
            other => {
                eprintln!("Unknown option '{other}'");
                std::process::exit(1);
            }
        };
        i += 1;
        match argv.get(i) {
            Some(value) => *slot = Some(value.clone()),
            None => {
                eprintln!("{arg} requires a value");
                std::process::exit(1);
            }
        }
        i += 1;
    }

    args
}
