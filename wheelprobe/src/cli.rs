use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// wheelprobe - synthetic wheels and disposable venvs for testing wheel rename tools
#[derive(Parser, Debug)]
#[command(name = "wheelprobe")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a synthetic wheel and print its path
    Build {
        /// Package (and distribution) name
        #[arg(long)]
        name: String,

        /// Version embedded in every module
        #[arg(long, value_name = "VERSION")]
        pkg_version: String,

        /// Leave out the nested `sub` package
        #[arg(long, default_value = "false")]
        no_submodule: bool,

        /// Output directory (default: $WHEELPROBE_WORK_DIR or the user cache dir)
        #[arg(long, value_name = "DIR")]
        out: Option<PathBuf>,
    },

    /// List the entries of a wheel
    Entries {
        #[arg(value_name = "WHEEL")]
        wheel: PathBuf,
    },

    /// Create a virtual environment and print its root
    Venv {
        #[arg(value_name = "DIR")]
        dir: PathBuf,

        /// Host interpreter used for `-m venv`
        #[arg(long, env = "WHEELPROBE_PYTHON")]
        python: Option<String>,
    },

    /// pip-install a wheel into an existing venv
    Install {
        #[arg(value_name = "VENV")]
        venv: PathBuf,

        #[arg(value_name = "WHEEL")]
        wheel: PathBuf,
    },

    /// Run `python -c CODE` in a venv; exits with the interpreter's status
    Exec {
        #[arg(value_name = "VENV")]
        venv: PathBuf,

        #[arg(value_name = "CODE")]
        code: String,
    },

    /// Build, provision, install and run the standard import checks; prints a JSON report
    Probe {
        #[arg(long)]
        name: String,

        #[arg(long, value_name = "VERSION")]
        pkg_version: String,

        #[arg(long, default_value = "false")]
        no_submodule: bool,

        /// Keep the temporary directory (wheel + venv) instead of removing it
        #[arg(long, default_value = "false")]
        keep: bool,

        #[arg(long, env = "WHEELPROBE_PYTHON")]
        python: Option<String>,
    },
}
