use clap::Parser;
use clap::error::ErrorKind;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::process::ExitCode;
use wound_triage::analyze;
use wound_triage::output::{self, FailureStyle};

#[derive(Parser)]
#[command(name = "wound-triage")]
#[command(about = "Emit a randomized wound assessment for an image as JSON")]
#[command(long_about = "\
Emit a randomized wound assessment for an image as JSON

Demo tool: the image path is accepted but never opened. The assessment is a
uniform random draw over fixed wound types and severities, with guidance text
that is identical across runs. Output is always exactly one JSON document on
stdout — a full assessment record on success, or an object with an `error`
key on failure — so callers can parse either outcome uniformly.

Exit codes:
  0  assessment printed
  1  wrong argument count, or the analysis path failed")]
#[command(version)]
struct Cli {
    /// Path to the wound photo (accepted, never opened)
    image_path: String,

    /// Seed the random generator for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Include degraded-default record fields in error objects
    #[arg(long)]
    fallback: bool,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err)
            if matches!(
                err.kind(),
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
            ) =>
        {
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        // Missing path, extra positionals, unknown flags: all the same
        // structured usage error, on stdout like every other outcome.
        Err(_) => {
            output::print_usage_error();
            return ExitCode::from(1);
        }
    };

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let style = if cli.fallback {
        FailureStyle::Fallback
    } else {
        FailureStyle::Minimal
    };

    let result = analyze::analyze(&cli.image_path, &mut rng);
    match output::format_result(&result) {
        Ok(json) => {
            output::print_result(&json);
            ExitCode::SUCCESS
        }
        Err(err) => {
            output::print_failure(&err.to_string(), style);
            ExitCode::from(1)
        }
    }
}
