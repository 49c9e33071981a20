// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! External tool execution.
//!
//! Both vendor tools are run to completion with captured output. There is no
//! timeout: a stuck `esptool.py` blocks until the user interrupts it.

use std::ffi::OsString;
use std::fmt;
use std::io;
use std::path::PathBuf;
use std::process::Command;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Which vendor tool an invocation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    Generator,
    Flasher,
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tool::Generator => f.write_str("NVS partition generator"),
            Tool::Flasher => f.write_str("esptool"),
        }
    }
}

/// A fully-specified external command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub tool: Tool,
    pub program: PathBuf,
    pub args: Vec<OsString>,
}

impl Invocation {
    pub fn new(tool: Tool, program: impl Into<PathBuf>) -> Self {
        Self {
            tool,
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Command line for logs.
    pub fn display(&self) -> String {
        let mut line = self.program.display().to_string();
        for arg in &self.args {
            line.push(' ');
            line.push_str(&arg.to_string_lossy());
        }
        line
    }
}

/// Captured result of a finished tool.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolOutput {
    /// Exit code, `None` when killed by a signal.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ToolOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Text to show the user on failure: stderr, or stdout when stderr is empty.
    pub fn diagnostic(&self) -> String {
        let stderr = self.stderr.trim_end();
        if stderr.trim().is_empty() {
            self.stdout.trim_end().to_string()
        } else {
            stderr.to_string()
        }
    }
}

/// Runs external commands to completion.
pub trait ToolRunner {
    fn run(&mut self, invocation: &Invocation) -> io::Result<ToolOutput>;
}

/// Runs commands as real child processes.
#[derive(Debug, Default)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ToolRunner for SystemRunner {
    fn run(&mut self, invocation: &Invocation) -> io::Result<ToolOutput> {
        tracing::debug!(command = %invocation.display(), "spawning {}", invocation.tool);

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} [{elapsed_precise}] {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message(format!("Running {}...", invocation.tool));
        spinner.enable_steady_tick(Duration::from_millis(100));

        let result = Command::new(&invocation.program)
            .args(&invocation.args)
            .output();
        spinner.finish_and_clear();

        let output = result?;
        let output = ToolOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };

        tracing::debug!(
            code = ?output.code,
            stdout_bytes = output.stdout.len(),
            stderr_bytes = output.stderr.len(),
            "{} finished",
            invocation.tool
        );
        Ok(output)
    }
}
