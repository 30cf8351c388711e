use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use log::LevelFilter;
use std::io::{self, BufRead, Write};

use mana::config::{CalcConfig, Shape, DEFAULT_LOG_FILTER, LOG_ENV};
use mana::render::render;
use mana::source::{ReaderSource, ValueSource};
use mana::MatrixDense;

fn shape_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .help(help)
        .required(true)
        .value_parser(clap::value_parser!(Shape))
}

fn row_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .help(help)
        .required(true)
        .value_parser(clap::value_parser!(usize))
}

fn scalar_arg() -> Arg {
    Arg::new("scalar")
        .help("Scalar factor")
        .required(true)
        .allow_negative_numbers(true)
        .value_parser(clap::value_parser!(f64))
}

fn cli() -> Command {
    let unary = |name: &'static str, about: &'static str| {
        Command::new(name)
            .about(about)
            .arg(shape_arg("shape", "Matrix shape, ROWSxCOLS"))
    };
    let binary = |name: &'static str, about: &'static str| {
        Command::new(name)
            .about(about)
            .arg(shape_arg("lhs", "Left operand shape, ROWSxCOLS"))
            .arg(shape_arg("rhs", "Right operand shape, ROWSxCOLS"))
    };

    Command::new("mana-calc")
        .version(clap::crate_version!())
        .about("Matrix calculator: enter values cell by cell, get the result")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("precision")
                .short('p')
                .long("precision")
                .global(true)
                .default_value("6")
                .value_parser(clap::value_parser!(usize))
                .help("Decimals printed per value"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Do not prompt for each cell (for piped input)"),
        )
        .subcommand(unary("det", "Determinant of a square matrix"))
        .subcommand(unary("rref", "Reduced row-echelon form"))
        .subcommand(unary("rank", "Rank"))
        .subcommand(unary("transpose", "Transpose"))
        .subcommand(unary("scale", "Multiply every entry by a scalar").arg(scalar_arg()))
        .subcommand(
            unary("row-scale", "Multiply one row by a scalar")
                .arg(row_arg("row", "Row number, starting at 1"))
                .arg(scalar_arg()),
        )
        .subcommand(
            unary("row-swap", "Exchange two rows")
                .arg(row_arg("row_a", "First row number"))
                .arg(row_arg("row_b", "Second row number")),
        )
        .subcommand(
            unary("row-add", "Add a multiple of the source row to the destination row")
                .arg(row_arg("dest", "Destination row number"))
                .arg(row_arg("src", "Source row number"))
                .arg(scalar_arg()),
        )
        .subcommand(binary("add", "Element-wise sum"))
        .subcommand(binary("sub", "Element-wise difference"))
        .subcommand(binary("mul", "Matrix product"))
}

fn read_matrix<S: ValueSource<f64>>(
    label: &str,
    shape: Shape,
    source: &mut S,
    config: &CalcConfig,
) -> Result<MatrixDense> {
    if !config.quiet {
        eprintln!("{} ({}):", label, shape);
    }
    let m = MatrixDense::create_from(shape.rows, shape.cols, source)
        .with_context(|| format!("reading {} matrix", label))?;
    log::info!("read {} matrix {}", label, shape);
    Ok(m)
}

fn print_matrix(m: &MatrixDense, config: &CalcConfig) -> Result<()> {
    let mut out = String::new();
    render(m, config.precision, &mut out)?;
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    writeln!(handle)?;
    write!(handle, "{}", out)?;
    Ok(())
}

fn run<S: ValueSource<f64>>(
    name: &str,
    args: &ArgMatches,
    source: &mut S,
    config: &CalcConfig,
) -> Result<()> {
    let shape = |id: &str| -> Result<Shape> {
        args.get_one::<Shape>(id)
            .copied()
            .with_context(|| format!("missing {}", id))
    };
    let row = |id: &str| -> Result<usize> {
        args.get_one::<usize>(id)
            .copied()
            .with_context(|| format!("missing {}", id))
    };
    let scalar = || -> Result<f64> {
        args.get_one::<f64>("scalar")
            .copied()
            .context("missing scalar")
    };

    match name {
        "add" | "sub" | "mul" => {
            let lhs = read_matrix("left", shape("lhs")?, source, config)?;
            let rhs = read_matrix("right", shape("rhs")?, source, config)?;
            let result = match name {
                "add" => &lhs + &rhs,
                "sub" => &lhs - &rhs,
                _ => &lhs * &rhs,
            }?;
            print_matrix(&result, config)
        }
        _ => {
            let mut m = read_matrix("input", shape("shape")?, source, config)?;
            match name {
                "det" => {
                    println!("{:.*}", config.precision, m.determinant()?);
                    return Ok(());
                }
                "rank" => {
                    println!("{}", m.rank());
                    return Ok(());
                }
                "rref" => {
                    m.rref();
                }
                "transpose" => {
                    m.transpose();
                }
                "scale" => {
                    m.scale(scalar()?);
                }
                "row-scale" => {
                    m.scale_row(row("row")?, scalar()?)?;
                }
                "row-swap" => {
                    m.swap_rows(row("row_a")?, row("row_b")?)?;
                }
                "row-add" => {
                    m.add_scaled_row(row("dest")?, row("src")?, scalar()?)?;
                }
                other => anyhow::bail!("unknown command {}", other),
            }
            print_matrix(&m, config)
        }
    }
}

fn calc<R: BufRead>(name: &str, args: &ArgMatches, input: R, config: &CalcConfig) -> Result<()> {
    if config.quiet {
        run(name, args, &mut ReaderSource::new(input), config)
    } else {
        run(
            name,
            args,
            &mut ReaderSource::interactive(input, io::stderr()),
            config,
        )
    }
}

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Warn)
        .parse_env(env_logger::Env::default().filter_or(LOG_ENV, DEFAULT_LOG_FILTER))
        .init();

    let matches = cli().get_matches();
    let config = CalcConfig {
        precision: matches
            .get_one::<usize>("precision")
            .copied()
            .unwrap_or(CalcConfig::default().precision),
        quiet: matches.get_flag("quiet"),
    };
    log::debug!("{:?}", config);

    let Some((name, args)) = matches.subcommand() else {
        anyhow::bail!("no command given");
    };

    let stdin = io::stdin();
    if let Err(e) = calc(name, args, stdin.lock(), &config) {
        log::error!("{} failed: {:#}", name, e);
        return Err(e);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_with(argv: &[&str], input: &str) -> Result<()> {
        let matches = cli().try_get_matches_from(argv)?;
        let (name, args) = matches.subcommand().context("no subcommand")?;
        let config = CalcConfig {
            quiet: true,
            ..CalcConfig::default()
        };
        calc(name, args, Cursor::new(input.to_string()), &config)
    }

    #[test]
    fn test_cli_definition() {
        cli().debug_assert();
    }

    #[test]
    fn test_commands() {
        run_with(&["mana-calc", "det", "2x2"], "2 0 0 3").unwrap();
        run_with(&["mana-calc", "rref", "2x2"], "1 2 2 4").unwrap();
        run_with(&["mana-calc", "row-add", "2x2", "2", "1", "-2"], "1 2 2 4").unwrap();
        run_with(&["mana-calc", "mul", "2x3", "3x1"], "1 2 3 4 5 6 1 1 1").unwrap();
    }

    #[test]
    fn test_command_errors() {
        assert!(run_with(&["mana-calc", "det", "2x3"], "1 2 3 4 5 6").is_err());
        assert!(run_with(&["mana-calc", "add", "2x2", "3x3"], &"1 ".repeat(13)).is_err());
        assert!(run_with(&["mana-calc", "row-swap", "2x2", "1", "3"], "1 2 3 4").is_err());
        assert!(run_with(&["mana-calc", "transpose", "13x1"], "").is_err());
        assert!(run_with(&["mana-calc", "rank", "2x2"], "1 2 3").is_err());
    }
}
