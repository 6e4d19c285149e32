//! Blocking wrapper around the `xrandr` command line tool.

mod error;

pub use error::XrandrError;

use std::io;
use std::process::{Command, Stdio};

use tracing::debug;
use xbright_core::model::xrandr_number;
use xbright_core::{DisplayBackend, OutputId, OutputList};

const CONNECTED_MARKER: &str = " connected";
const BRIGHTNESS_MARKER: &str = "Brightness:";

/// Captured result of one finished process.
#[derive(Debug, Clone, Default)]
pub struct CommandOutput {
    pub success: bool,
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

/// Runs a program to completion. Swapped out in tests.
pub trait CommandRunner {
    fn run(&self, program: &str, args: &[String]) -> io::Result<CommandOutput>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[String]) -> io::Result<CommandOutput> {
        let out = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()?;
        Ok(CommandOutput {
            success: out.status.success(),
            code: out.status.code(),
            stdout: String::from_utf8_lossy(&out.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&out.stderr).trim().to_string(),
        })
    }
}

pub struct Xrandr<R = SystemRunner> {
    program: String,
    runner: R,
}

impl Xrandr<SystemRunner> {
    pub fn new() -> Self {
        Self::with_runner(SystemRunner)
    }
}

impl Default for Xrandr<SystemRunner> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: CommandRunner> Xrandr<R> {
    pub fn with_runner(runner: R) -> Self {
        Self { program: "xrandr".to_string(), runner }
    }

    /// `xrandr` with no arguments; connected outputs in report order.
    pub fn list_outputs(&self) -> Result<OutputList, XrandrError> {
        let stdout = self.run(Vec::new())?;
        Ok(parse_connected_outputs(&stdout))
    }

    /// `xrandr --verbose --output NAME`; `None` if no brightness line parses.
    pub fn get_brightness(&self, output: &OutputId) -> Result<Option<f64>, XrandrError> {
        let stdout = self.run(vec![
            "--verbose".into(),
            "--output".into(),
            output.to_string(),
        ])?;
        Ok(parse_brightness(&stdout))
    }

    pub fn set_brightness(&self, output: &OutputId, value: f64) -> Result<(), XrandrError> {
        self.run(vec![
            "--output".into(),
            output.to_string(),
            "--brightness".into(),
            xrandr_number(value),
        ])
        .map(drop)
    }

    /// Same gamma on all three channels: `--gamma G:G:G`.
    pub fn set_gamma(&self, output: &OutputId, value: f64) -> Result<(), XrandrError> {
        self.run(vec![
            "--output".into(),
            output.to_string(),
            "--gamma".into(),
            gamma_triplet(value),
        ])
        .map(drop)
    }

    fn run(&self, args: Vec<String>) -> Result<String, XrandrError> {
        let command = command_line(&self.program, &args);
        debug!("running {command}");
        let out = self
            .runner
            .run(&self.program, &args)
            .map_err(|source| XrandrError::Spawn { command: command.clone(), source })?;
        if !out.success {
            return Err(XrandrError::Failed { command, code: out.code, stderr: out.stderr });
        }
        Ok(out.stdout)
    }
}

impl<R: CommandRunner> DisplayBackend for Xrandr<R> {
    type Error = XrandrError;

    fn probe_outputs(&self) -> Result<OutputList, XrandrError> {
        self.list_outputs()
    }

    fn read_brightness(&self, output: &OutputId) -> Result<Option<f64>, XrandrError> {
        self.get_brightness(output)
    }

    fn apply_brightness(&self, output: &OutputId, value: f64) -> Result<(), XrandrError> {
        self.set_brightness(output, value)
    }

    fn apply_gamma(&self, output: &OutputId, value: f64) -> Result<(), XrandrError> {
        self.set_gamma(output, value)
    }
}

/// Every line containing " connected" names an output: the text before its
/// first space. Lines such as "VGA-1 disconnected" do not match.
pub fn parse_connected_outputs(stdout: &str) -> OutputList {
    stdout
        .lines()
        .filter(|line| line.contains(CONNECTED_MARKER))
        .map(|line| OutputId::new(line.split(' ').next().unwrap_or_default()))
        .collect()
}

/// Value after the first "Brightness:" marker, trimmed. Later lines are not
/// consulted even if the first one does not parse.
pub fn parse_brightness(stdout: &str) -> Option<f64> {
    let line = stdout.lines().find(|line| line.contains(BRIGHTNESS_MARKER))?;
    let (_, rest) = line.split_once(BRIGHTNESS_MARKER)?;
    rest.trim().parse::<f64>().ok()
}

fn gamma_triplet(value: f64) -> String {
    let v = xrandr_number(value);
    format!("{v}:{v}:{v}")
}

fn command_line(program: &str, args: &[String]) -> String {
    std::iter::once(program)
        .chain(args.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ")
}
