//! # cmx CLI Entry Point
//!
//! The default invocation (no subcommand) runs the configure → build →
//! test workflow; `clean`, `info`, and `completion` live behind
//! subcommands and conflict with the workflow flags.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use std::path::PathBuf;

use cmx::clean;
use cmx::info;
use cmx::options::{self, BuildOptions, BuildType};
use cmx::workflow;

#[derive(Parser)]
#[command(name = "cmx")]
#[command(about = "Convenience wrapper around CMake configure/build/test workflows", version = env!("CARGO_PKG_VERSION"))]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(flatten)]
    build: BuildArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Args)]
struct BuildArgs {
    /// Set the build type
    #[arg(long, value_enum, default_value = "Debug")]
    build_type: BuildType,

    /// Number of threads passed to the configure/build/test tools
    #[arg(short = 'j', long, default_value_t = 8, value_parser = clap::value_parser!(u32).range(1..))]
    num_threads: u32,

    /// Build directory base name, combined with the build type
    /// (e.g. build_debug, where build is the name)
    #[arg(short = 'd', long, default_value = "build")]
    build_dir: String,

    /// Force reconfiguration even if a CMake cache exists
    #[arg(short = 'c', long)]
    clear_cache: bool,

    /// Configure with testing enabled and run ctest after the build
    #[arg(short = 'e', long)]
    enable_testing: bool,

    /// Build a specific target (e.g. msdblib or operator_ui) instead of everything
    #[arg(short = 't', long)]
    target: Option<String>,

    /// Print the external commands instead of running them
    #[arg(long)]
    dry_run: bool,

    /// Project root containing the CMakeLists.txt
    #[arg(long, default_value = ".")]
    project_dir: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Remove build directories
    Clean {
        /// Remove every build-type variant, not just the selected one
        #[arg(long)]
        all: bool,
        /// Build type whose directory to remove
        #[arg(long, value_enum, default_value = "Debug")]
        build_type: BuildType,
        /// Build directory base name
        #[arg(short = 'd', long, default_value = "build")]
        build_dir: String,
        /// Project root containing the build directories
        #[arg(long, default_value = ".")]
        project_dir: PathBuf,
    },
    /// Show installed tools and build directory states
    Info {
        /// Build directory base name
        #[arg(short = 'd', long, default_value = "build")]
        build_dir: String,
        /// Project root containing the build directories
        #[arg(long, default_value = ".")]
        project_dir: PathBuf,
    },
    /// Generate shell completion scripts
    Completion { shell: Shell },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Clean {
            all,
            build_type,
            build_dir,
            project_dir,
        }) => {
            let root = options::resolve_project_dir(&project_dir)?;
            clean::clean(&root, &build_dir, build_type, all)
        }
        Some(Commands::Info {
            build_dir,
            project_dir,
        }) => {
            let root = options::resolve_project_dir(&project_dir)?;
            info::print_info(&root, &build_dir)
        }
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let bin_name = cmd.get_name().to_string();
            generate(shell, &mut cmd, bin_name, &mut std::io::stdout());
            Ok(())
        }
        None => {
            let opts = BuildOptions {
                build_type: cli.build.build_type,
                num_threads: cli.build.num_threads,
                build_dir: cli.build.build_dir,
                clear_cache: cli.build.clear_cache,
                enable_testing: cli.build.enable_testing,
                target: cli.build.target,
                dry_run: cli.build.dry_run,
                project_dir: options::resolve_project_dir(&cli.build.project_dir)?,
            };
            match workflow::run(&opts) {
                Ok(true) => Ok(()),
                Ok(false) => std::process::exit(1),
                Err(e) => Err(e),
            }
        }
    }
}
