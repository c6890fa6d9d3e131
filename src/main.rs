//! Differential-equation problem generator CLI.

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use diffeq_drill_gen::{
    generate_kind, Equation, EquationKind, FirstOrderOptions, GenerationError, SystemRandom,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log level; overrides RUST_LOG
    #[arg(long, value_enum, global = true)]
    log_level: Option<LogLevelArg>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one or more equations and print them
    Generate {
        /// Kind to generate: a selector (1-8) or a name such as `cauchy-euler`
        #[arg(short, long, value_parser = parse_kind)]
        kind: EquationKind,

        /// Seed for reproducible output
        #[arg(short, long)]
        seed: Option<u64>,

        /// Number of equations to generate
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,

        /// First-order only: force Q = 0
        #[arg(long)]
        homogeneous: bool,

        /// First-order only: multiply P by x
        #[arg(long)]
        variable_coefficient: bool,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// List the available kinds and their selectors
    Kinds,
    /// Open the desktop window
    #[cfg(feature = "gui")]
    Gui {
        /// Name shown on the welcome panel
        #[arg(long)]
        name: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevelArg {
    fn as_str(self) -> &'static str {
        match self {
            LogLevelArg::Error => "error",
            LogLevelArg::Warn  => "warn",
            LogLevelArg::Info  => "info",
            LogLevelArg::Debug => "debug",
            LogLevelArg::Trace => "trace",
        }
    }
}

#[derive(Serialize)]
struct GeneratedEquation<'a> {
    selector: i32,
    kind: String,
    text: String,
    equation: &'a Equation,
}

fn parse_kind(value: &str) -> Result<EquationKind, String> {
    if let Ok(selector) = value.parse::<i32>() {
        return EquationKind::from_selector(selector)
            .ok_or_else(|| GenerationError::InvalidSelector(selector).to_string());
    }
    EquationKind::from_slug(value).ok_or_else(|| {
        let known: Vec<&str> = EquationKind::ALL.iter().map(|k| k.slug()).collect();
        format!("unknown kind '{value}', expected one of: {}", known.join(", "))
    })
}

fn init_logging(level: Option<LogLevelArg>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level.as_str()),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_generate(
    kind: EquationKind,
    seed: Option<u64>,
    count: usize,
    options: FirstOrderOptions,
    json: bool,
) -> Result<(), serde_json::Error> {
    let mut rng = SystemRandom::from_seed(seed);
    let equations: Vec<Equation> = (0..count)
        .map(|_| generate_kind(kind, options, &mut rng))
        .collect();

    if json {
        let out: Vec<GeneratedEquation<'_>> = equations
            .iter()
            .map(|eq| GeneratedEquation {
                selector: eq.kind().selector(),
                kind: eq.kind().to_string(),
                text: eq.to_string(),
                equation: eq,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        for (i, eq) in equations.iter().enumerate() {
            if i > 0 {
                println!();
            }
            println!("{eq}");
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    let exit_code = match cli.command {
        Commands::Generate { kind, seed, count, homogeneous, variable_coefficient, json } => {
            let options = FirstOrderOptions {
                is_homogeneous: homogeneous,
                has_variable_coefficient: variable_coefficient,
            };
            match run_generate(kind, seed, count, options, json) {
                Ok(()) => 0,
                Err(error) => {
                    eprintln!("error: {error}");
                    1
                }
            }
        }
        Commands::Kinds => {
            for kind in EquationKind::ALL {
                println!("{}  {:<20} {}", kind.selector(), kind.slug(), kind);
            }
            0
        }
        #[cfg(feature = "gui")]
        Commands::Gui { name } => {
            let mut config = diffeq_drill_gen::PresenterConfig::default();
            if let Some(name) = name {
                config.user_name = name;
            }
            match diffeq_drill_gen::gui::run(config) {
                Ok(()) => 0,
                Err(error) => {
                    eprintln!("error: {error}");
                    1
                }
            }
        }
    };
    std::process::exit(exit_code);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_kind_accepts_selectors_and_slugs() {
        assert_eq!(parse_kind("2"), Ok(EquationKind::CauchyEuler));
        assert_eq!(parse_kind("laplace"), Ok(EquationKind::LaplaceTransform));
        assert_eq!(
            parse_kind("9"),
            Err("invalid equation selector 9: expected 1..=8".to_string())
        );
        assert!(parse_kind("bogus").is_err());
    }

    #[test]
    fn cli_parses_generate_flags() {
        let cli = Cli::try_parse_from([
            "diffeq_drill_gen", "generate", "--kind", "first-order-linear",
            "--seed", "7", "-n", "3", "--homogeneous",
        ])
        .expect("valid arguments");
        match cli.command {
            Commands::Generate { kind, seed, count, homogeneous, variable_coefficient, json } => {
                assert_eq!(kind, EquationKind::FirstOrderLinear);
                assert_eq!(seed, Some(7));
                assert_eq!(count, 3);
                assert!(homogeneous);
                assert!(!variable_coefficient);
                assert!(!json);
            }
            _ => panic!("expected generate"),
        }
    }
}
