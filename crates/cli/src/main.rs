use std::io::{stdin, stdout, IsTerminal};
use std::process::ExitCode;

use clap::Parser;
use log::{debug, info};
use run_picker_cli::cli_args::Args;
use run_picker_cli::script_selection::prompt_for_script_choice;
use run_picker_core::config;
use run_picker_core::error::{Error, Result};
use run_picker_core::execution::ExecutionController;
use run_picker_core::manifest;
use run_picker_core::selection::{ScriptChoice, SelectionState};

fn execute(args: &Args) -> Result<()> {
    let manifest_path = config::get_manifest_path(&args.manifest_path);
    debug!("Manifest path: `{manifest_path}`");

    let scripts = manifest::load_scripts(&manifest_path)?;

    if !stdin().is_terminal() || !stdout().is_terminal() {
        return Err(Error::NotInteractive);
    }

    let mut state = SelectionState::new(scripts, args.show_hooks);

    match prompt_for_script_choice(&mut state)? {
        ScriptChoice::Quit => {
            info!("No script selected");
            Ok(())
        }
        ScriptChoice::Run(script) => ExecutionController::system().run(&script.name),
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();

    match execute(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            e.exit_code()
        }
    }
}
