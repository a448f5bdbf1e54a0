mod export;

use anyhow::{anyhow, Result};
use clap::{arg, value_parser, Arg, ArgAction, ArgMatches, Command};
use export::Format;
use kp_engine::{
    report, solve, verify, EngineError, ProblemInstance, ResultSet, SolverConfig, Strategy,
};
use kp_structs::{
    config::RuntimeConfig,
    core::{OutputData, SolveRequest},
};
use kp_utils::load_json_arg;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const EXIT_FAILURE: i32 = 1;
const EXIT_REJECTED: i32 = 2;
const EXIT_RESOURCE_EXCEEDED: i32 = 3;

fn cli() -> Command {
    Command::new("kp-runtime")
        .about("Solves or verifies 0/1 knapsack requests")
        .arg_required_else_help(true)
        .arg(
            arg!(-v --verbose ... "Increase log verbosity (RUST_LOG takes precedence)")
                .global(true),
        )
        .subcommand(
            Command::new("solve")
                .about("Computes the optimal selection for a request")
                .arg(
                    arg!(<REQUEST> "Request json string, path to json file, or '-' for stdin")
                        .value_parser(value_parser!(String)),
                )
                .arg(config_arg())
                .arg(
                    arg!(--strategy [STRATEGY] "Item recovery strategy, overrides the config")
                        .value_parser(["table", "recompute"]),
                )
                .arg(
                    Arg::new("max_cells")
                        .long("max-cells")
                        .value_name("CELLS")
                        .help("Ceiling on dynamic programming cells, overrides the config")
                        .value_parser(value_parser!(u64)),
                )
                .arg(
                    arg!(--output [OUTPUT_FILE] "If set, the output data will be saved to this file path")
                        .value_parser(value_parser!(PathBuf)),
                )
                .arg(
                    arg!(--format [FORMAT] "Output format")
                        .value_parser(["json", "table"])
                        .default_value("json"),
                )
                .arg(
                    arg!(--compress "If output file is set, the json output will be compressed as zlib")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("verify_result")
                .about("Verifies that a result is a feasible, optimal answer to a request")
                .arg(
                    arg!(<REQUEST> "Request json string, path to json file, or '-' for stdin")
                        .value_parser(value_parser!(String)),
                )
                .arg(
                    arg!(<RESULT> "Output data json string, path to json file, or '-' for stdin")
                        .value_parser(value_parser!(String)),
                )
                .arg(config_arg()),
        )
}

fn config_arg() -> Arg {
    arg!(--config [CONFIG] "Runtime config json string or path to json file")
        .value_parser(value_parser!(String))
}

fn main() {
    let matches = cli().get_matches();
    init_logging(matches.get_count("verbose"));

    if let Err(e) = match matches.subcommand() {
        Some(("solve", sub_m)) => compute_solution(sub_m),
        Some(("verify_result", sub_m)) => verify_result(sub_m),
        _ => Err(anyhow!("Invalid subcommand")),
    } {
        eprintln!("Error: {}", e);
        std::process::exit(exit_code(&e));
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn exit_code(e: &anyhow::Error) -> i32 {
    match e.downcast_ref::<EngineError>() {
        Some(EngineError::Validation(_)) => EXIT_REJECTED,
        Some(EngineError::ResourceExceeded(_)) => EXIT_RESOURCE_EXCEEDED,
        None => EXIT_FAILURE,
    }
}

fn load_config(sub_m: &ArgMatches) -> Result<RuntimeConfig> {
    match sub_m.get_one::<String>("config") {
        Some(arg) => RuntimeConfig::load(arg),
        None => Ok(RuntimeConfig::default()),
    }
}

fn solver_config(sub_m: &ArgMatches, config: &RuntimeConfig) -> Result<SolverConfig> {
    let mut solver = config.solver_config();
    if let Some(strategy) = sub_m.get_one::<String>("strategy") {
        solver = solver.with_strategy(strategy.parse::<Strategy>().map_err(|e| anyhow!(e))?);
    }
    if let Some(max_cells) = sub_m.get_one::<u64>("max_cells") {
        solver = solver.with_max_table_cells(*max_cells);
    }
    Ok(solver)
}

fn load_request(arg: &str) -> Result<SolveRequest> {
    let request: SolveRequest = load_json_arg(arg, "request")?;
    request.check_num_items()?;
    Ok(request)
}

pub fn compute_solution(sub_m: &ArgMatches) -> Result<()> {
    let request = load_request(sub_m.get_one::<String>("REQUEST").unwrap())?;
    let config = load_config(sub_m)?;
    let solver = solver_config(sub_m, &config)?;
    let format: Format = sub_m.get_one::<String>("format").unwrap().parse()?;
    let compress = sub_m.get_flag("compress");

    let instance = request.to_instance().map_err(EngineError::from)?;
    info!(
        items = instance.len(),
        capacity = instance.capacity(),
        strategy = %solver.strategy,
        max_table_cells = solver.max_table_cells,
        "request validated"
    );
    let solution = solve(&instance, &solver).map_err(EngineError::from)?;
    let output = OutputData::new(&request, solver.strategy, report(&instance, &solution));

    if output.result().is_empty() {
        warn!("no item fits within capacity {}", instance.capacity());
    }
    info!(
        total_value = output.result().total_value,
        total_weight = output.result().total_weight,
        "{}",
        output.summary()
    );

    match sub_m.get_one::<PathBuf>("output") {
        Some(path) => {
            let path = config.resolve_output_path(path);
            export::write_output(&path, &output, format, compress)?;
            println!("{}. Results saved to {:?}", output.summary(), path);
        }
        None => {
            if compress {
                warn!("--compress has no effect without --output");
            }
            print!("{}", with_newline(export::render(&output, format, false)?));
        }
    }
    Ok(())
}

pub fn verify_result(sub_m: &ArgMatches) -> Result<()> {
    let request = load_request(sub_m.get_one::<String>("REQUEST").unwrap())?;
    let output: OutputData = load_json_arg(sub_m.get_one::<String>("RESULT").unwrap(), "result")?;
    let config = load_config(sub_m)?;

    if *output.capacity() != *request.capacity() || *output.num_items() != request.items().len()
    {
        return Err(anyhow!(
            "Result was computed for capacity {} with {} items, request has capacity {} with {} items",
            output.capacity(),
            output.num_items(),
            request.capacity(),
            request.items().len()
        ));
    }

    let instance = request.to_instance().map_err(EngineError::from)?;
    check_result(&instance, output.result(), &config.solver_config())?;
    println!("Result is valid");
    Ok(())
}

/// Runs [`verify`], keeping engine refusals typed so they map to their own
/// exit codes.
fn check_result(instance: &ProblemInstance, result: &ResultSet, solver: &SolverConfig) -> Result<()> {
    verify(instance, result, solver).map_err(|e| {
        if e.is::<EngineError>() {
            e
        } else {
            anyhow!("Invalid result: {}", e)
        }
    })
}

fn with_newline(mut rendered: String) -> String {
    if !rendered.ends_with('\n') {
        rendered.push('\n');
    }
    rendered
}

#[cfg(test)]
mod tests {
    use super::*;
    use kp_engine::{validate, validate_and_solve, RawItem, ResourceExceeded, ValidationError};

    fn classic_items() -> Vec<RawItem> {
        vec![RawItem::new(60, 5), RawItem::new(100, 4), RawItem::new(120, 6)]
    }

    fn solve_matches(args: &[&str]) -> ArgMatches {
        let mut argv = vec!["kp-runtime", "solve", "{}"];
        argv.extend_from_slice(args);
        cli()
            .try_get_matches_from(argv)
            .unwrap()
            .subcommand_matches("solve")
            .unwrap()
            .clone()
    }

    #[test]
    fn test_exit_codes() {
        let rejected: anyhow::Error = EngineError::from(ValidationError::capacity()).into();
        assert_eq!(exit_code(&rejected), EXIT_REJECTED);

        let refused: anyhow::Error = EngineError::from(ResourceExceeded::ValueOverflow).into();
        assert_eq!(exit_code(&refused), EXIT_RESOURCE_EXCEEDED);

        assert_eq!(exit_code(&anyhow!("Failed to parse request")), EXIT_FAILURE);
    }

    #[test]
    fn test_verify_refusal_keeps_resource_exit_code() {
        let instance = validate(10, &classic_items()).unwrap();
        let result =
            validate_and_solve(10, &classic_items(), &SolverConfig::default()).unwrap();

        check_result(&instance, &result, &SolverConfig::default()).unwrap();

        let limited = SolverConfig::default().with_max_table_cells(10);
        let err = check_result(&instance, &result, &limited).unwrap_err();
        assert_eq!(exit_code(&err), EXIT_RESOURCE_EXCEEDED);
        assert!(!err.to_string().starts_with("Invalid result"));
    }

    #[test]
    fn test_invalid_result_exit_code() {
        let instance = validate(10, &classic_items()).unwrap();
        let mut result =
            validate_and_solve(10, &classic_items(), &SolverConfig::default()).unwrap();
        result.total_value += 1;

        let err = check_result(&instance, &result, &SolverConfig::default()).unwrap_err();
        assert!(err.to_string().starts_with("Invalid result"));
        assert_eq!(exit_code(&err), EXIT_FAILURE);
    }

    #[test]
    fn test_flags_override_config() {
        let config = RuntimeConfig::load(
            r#"{"solver": {"strategy": "table", "max_table_cells": 5000}}"#,
        )
        .unwrap();

        let solver = solver_config(&solve_matches(&[]), &config).unwrap();
        assert_eq!(solver.max_table_cells, 5000);
        assert_eq!(solver.strategy, Strategy::Table);

        let sub_m = solve_matches(&["--max-cells", "7", "--strategy", "recompute"]);
        let solver = solver_config(&sub_m, &config).unwrap();
        assert_eq!(solver.max_table_cells, 7);
        assert_eq!(solver.strategy, Strategy::Recompute);
    }

    #[test]
    fn test_config_flag_is_loaded() {
        let sub_m = solve_matches(&["--config", r#"{"solver": {"max_table_cells": 42}}"#]);
        let config = load_config(&sub_m).unwrap();
        assert_eq!(config.solver_config().max_table_cells, 42);
        assert_eq!(
            load_config(&solve_matches(&[])).unwrap(),
            RuntimeConfig::default()
        );
    }
}
