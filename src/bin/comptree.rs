use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use colored::Colorize;

use comptree::args::{Mode, ParsedArgs, parse_args};
use comptree::config::resolve_config;
use comptree::generator::ast_log::summarize_file;
use comptree::generator::{GeneratorError, generate_component_trees};
use comptree::fs_utils::component_name;

const USAGE: &str = "comptree - Component dependency trees for React projects\n\n\
Usage:\n  \
  comptree [generate] [options]     Generate the component tree forest\n  \
  comptree parse <file>             Dump one module's summary as JSON\n\n\
Options:\n  \
  -c, --client <dir>   Client project root (default: current directory)\n  \
  -s, --src <dir>      Source directory, relative to the client root (default: src)\n  \
  -r, --root <file>    Root component, relative to the source directory (default: App.js)\n  \
      --pretty         Pretty-print JSON output\n  \
      --verbose        Extra progress detail on stderr\n  \
  -h, --help           Show this help\n  \
  -V, --version        Show version\n\n\
Examples:\n  \
  comptree --client ./my-app --root App.jsx\n  \
  comptree generate -c ./my-app --pretty\n  \
  comptree parse src/App.jsx\n";

fn main() -> ExitCode {
    let raw: Vec<String> = env::args().skip(1).collect();

    let parsed = match parse_args(&raw) {
        Ok(parsed) => parsed,
        Err(message) => {
            eprintln!("{} {}", "error:".red().bold(), message);
            eprintln!("\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    if parsed.show_help {
        println!("{USAGE}");
        return ExitCode::SUCCESS;
    }
    if parsed.show_version {
        println!("comptree {}", env!("CARGO_PKG_VERSION"));
        return ExitCode::SUCCESS;
    }

    let result = match parsed.mode {
        Mode::Generate => run_generate(&parsed),
        Mode::Parse => run_parse(&parsed),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Some(GeneratorError::InvalidRootComponent { path }) =
                err.downcast_ref::<GeneratorError>()
            {
                eprintln!(
                    "{} Cannot recognize {} as a React component",
                    "error:".red().bold(),
                    path.display()
                );
            } else {
                eprintln!("{} {err:#}", "error:".red().bold());
            }
            ExitCode::FAILURE
        }
    }
}

fn run_generate(parsed: &ParsedArgs) -> Result<()> {
    let client_path = match &parsed.client_path {
        Some(path) => absolute(path)?,
        None => env::current_dir().context("cannot determine current directory")?,
    };

    let config = resolve_config(
        client_path,
        parsed.src_path.clone(),
        parsed.root_component.clone(),
    );

    if parsed.verbose {
        eprintln!("[comptree] src: {}", config.src_path.display());
        eprintln!(
            "[comptree] root component: {}",
            config.root_component_path.display()
        );
    }

    let forest = generate_component_trees(&config)?;

    if parsed.verbose {
        eprintln!("[comptree] {} root tree(s)", forest.len());
    }

    let json = if parsed.pretty {
        serde_json::to_string_pretty(&forest)?
    } else {
        serde_json::to_string(&forest)?
    };
    println!("{json}");
    Ok(())
}

fn run_parse(parsed: &ParsedArgs) -> Result<()> {
    let target = parsed
        .parse_target
        .as_ref()
        .context("parse expects a file argument")?;
    let target = absolute(target)?;

    let summary = summarize_file(&target)?;
    let json = serde_json::to_string_pretty(&summary)?;

    let outfile = PathBuf::from(format!("{}AST.json", component_name(&target)));
    std::fs::write(&outfile, json)
        .with_context(|| format!("failed to write {}", outfile.display()))?;

    println!("{} {}", "wrote".green(), outfile.display());
    Ok(())
}

fn absolute(path: &PathBuf) -> Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.clone())
    } else {
        Ok(env::current_dir()
            .context("cannot determine current directory")?
            .join(path))
    }
}
