//! Command-line argument parsing.

use std::path::PathBuf;

/// What the binary was asked to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Generate the component tree forest (default).
    Generate,
    /// Parse one file and dump its module summary.
    Parse,
}

#[derive(Debug)]
pub struct ParsedArgs {
    pub mode: Mode,
    /// Client project root; defaults to the current directory.
    pub client_path: Option<PathBuf>,
    /// Source directory override, relative to the client root.
    pub src_path: Option<PathBuf>,
    /// Root component override, relative to the source directory.
    pub root_component: Option<PathBuf>,
    /// Target file for `parse`.
    pub parse_target: Option<PathBuf>,
    /// Pretty-print JSON output.
    pub pretty: bool,
    pub verbose: bool,
    pub show_help: bool,
    pub show_version: bool,
}

impl Default for ParsedArgs {
    fn default() -> Self {
        Self {
            mode: Mode::Generate,
            client_path: None,
            src_path: None,
            root_component: None,
            parse_target: None,
            pretty: false,
            verbose: false,
            show_help: false,
            show_version: false,
        }
    }
}

pub fn parse_args(args: &[String]) -> Result<ParsedArgs, String> {
    let mut parsed = ParsedArgs::default();
    let mut iter = args.iter().peekable();
    let mut saw_command = false;

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "generate" | "g" if !saw_command => {
                parsed.mode = Mode::Generate;
                saw_command = true;
            }
            "parse" | "p" if !saw_command => {
                parsed.mode = Mode::Parse;
                saw_command = true;
            }
            "--client" | "-c" => {
                parsed.client_path = Some(expect_value(&mut iter, "--client")?);
            }
            "--src" | "-s" => {
                parsed.src_path = Some(expect_value(&mut iter, "--src")?);
            }
            "--root" | "-r" => {
                parsed.root_component = Some(expect_value(&mut iter, "--root")?);
            }
            "--pretty" => parsed.pretty = true,
            "--verbose" => parsed.verbose = true,
            "--help" | "-h" => parsed.show_help = true,
            "--version" | "-V" => parsed.show_version = true,
            other if !other.starts_with('-') && parsed.mode == Mode::Parse => {
                if parsed.parse_target.is_some() {
                    return Err(format!("parse takes a single file, got extra: {other}"));
                }
                parsed.parse_target = Some(PathBuf::from(other));
            }
            other => return Err(format!("unknown argument: {other}")),
        }
    }

    if parsed.mode == Mode::Parse
        && parsed.parse_target.is_none()
        && !parsed.show_help
        && !parsed.show_version
    {
        return Err("parse expects a file argument".to_string());
    }

    Ok(parsed)
}

fn expect_value(
    iter: &mut std::iter::Peekable<std::slice::Iter<'_, String>>,
    flag: &str,
) -> Result<PathBuf, String> {
    match iter.next() {
        Some(value) if !value.starts_with('-') => Ok(PathBuf::from(value)),
        _ => Err(format!("{flag} expects a path")),
    }
}
