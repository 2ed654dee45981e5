mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use wheelprobe_core::observability;

fn main() -> Result<()> {
    observability::init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Build {
            name,
            pkg_version,
            no_submodule,
            out,
        } => {
            let wheel = commands::build::cmd_build(&name, &pkg_version, !no_submodule, out)?;
            println!("{}", wheel.display());
        }
        Commands::Entries { wheel } => {
            for entry in commands::build::cmd_entries(&wheel)? {
                println!("{}", entry);
            }
        }
        Commands::Venv { dir, python } => {
            let root = commands::venv::cmd_venv(&dir, python.as_deref())?;
            println!("{}", root.display());
        }
        Commands::Install { venv, wheel } => {
            commands::venv::cmd_install(&venv, &wheel)?;
        }
        Commands::Exec { venv, code } => {
            let code = commands::venv::cmd_exec(&venv, &code)?;
            std::process::exit(code);
        }
        Commands::Probe {
            name,
            pkg_version,
            no_submodule,
            keep,
            python,
        } => {
            let report = commands::probe::cmd_probe(
                &name,
                &pkg_version,
                !no_submodule,
                keep,
                python.as_deref(),
            )?;
            println!("{}", serde_json::to_string_pretty(&report)?);
            if !report.passed {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
