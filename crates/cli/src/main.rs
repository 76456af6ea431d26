use clap::Parser;
use log::{debug, info, warn};
use std::process::ExitCode;

use cmdline_params_core::config::{self, Settings};
use cmdline_params_core::environment::Environment;
use cmdline_params_core::error::Result;
use cmdline_params_core::file_handling;
use cmdline_params_core::registry::ParameterRegistry;

use cmdline_params_cli::arguments::process_command_line;
use cmdline_params_cli::cli_args::Args;
use cmdline_params_cli::report;

/// Picks the tokens to resolve: the new arguments, or the saved ones on rerun
fn determine_tokens(args: &Args, last_arguments_path: &str) -> Result<Vec<String>> {
    if !args.get_rerun_request_is_valid()? {
        return Ok(args.arguments.clone());
    }

    match file_handling::get_saved_arguments(last_arguments_path)? {
        Some(saved) => Ok(saved),
        None => {
            warn!("Rerun last arguments was specified, but there are no saved arguments!");
            Ok(Vec::new())
        }
    }
}

fn execute() -> Result<()> {
    let args = Args::parse();

    let definitions_path = config::get_definitions_path(args.definitions_path.as_deref());
    debug!("Definitions path: `{}`", definitions_path);

    let definitions = file_handling::get_parameter_definitions(&definitions_path)?;
    let mut registry = ParameterRegistry::from_definitions(definitions)?;

    if args.describe {
        println!("{}", report::describe_parameters(&registry));
        return Ok(());
    }

    let last_arguments_path = config::get_last_arguments_path(args.last_arguments_path.as_deref());
    let tokens = determine_tokens(&args, &last_arguments_path)?;

    let raw_data = process_command_line(&registry, &tokens)?;
    let settings = Settings::with_list_delimiter(args.list_delimiter);
    registry.resolve_all(&raw_data, &Environment::from_process(), &settings)?;
    registry.validate_required()?;

    println!("{}", report::describe_values(&registry));

    let arg_list = registry.to_arg_list();
    println!("Arguments:\n{}", arg_list.join(" "));

    if args.skip_arguments_save {
        info!("Skipping arguments save was specified. Not (over)writing last arguments.");
    } else {
        file_handling::write_saved_arguments(&last_arguments_path, &arg_list)?;
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
