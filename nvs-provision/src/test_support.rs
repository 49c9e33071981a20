// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Fixtures shared by the unit tests.

use std::collections::VecDeque;
use std::fs;
use std::io;
use std::path::PathBuf;

use tempfile::TempDir;

use crate::toolchain::Toolchain;
use crate::tools::{Invocation, ToolOutput, ToolRunner};

/// A temporary ESP-IDF root containing an empty generator script.
pub fn fake_idf_tree() -> TempDir {
    let dir = tempfile::tempdir().expect("create fake IDF_PATH");
    let script = Toolchain::generator_path(dir.path());
    fs::create_dir_all(script.parent().expect("script has a parent")).expect("create tree");
    fs::write(&script, "").expect("write generator stub");
    dir
}

/// Tool runner that records invocations and replays queued outcomes.
#[derive(Default)]
pub struct ScriptedRunner {
    responses: VecDeque<io::Result<ToolOutput>>,
    pub calls: Vec<Invocation>,
    /// Contents of every `.csv` argument, read while the tool "runs".
    pub descriptors: Vec<String>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ok() -> ToolOutput {
        ToolOutput {
            code: Some(0),
            ..ToolOutput::default()
        }
    }

    pub fn fail(code: i32, stderr: &str) -> ToolOutput {
        ToolOutput {
            code: Some(code),
            stdout: String::new(),
            stderr: stderr.to_string(),
        }
    }

    pub fn respond(mut self, output: ToolOutput) -> Self {
        self.responses.push_back(Ok(output));
        self
    }

    pub fn respond_err(mut self, kind: io::ErrorKind) -> Self {
        self.responses.push_back(Err(io::Error::from(kind)));
        self
    }

    /// Every temporary file path handed to a tool.
    pub fn temp_paths(&self) -> Vec<PathBuf> {
        self.calls
            .iter()
            .flat_map(|call| call.args.iter())
            .map(PathBuf::from)
            .filter(|path| {
                path.extension()
                    .is_some_and(|ext| ext == "csv" || ext == "bin")
            })
            .collect()
    }
}

impl ToolRunner for ScriptedRunner {
    fn run(&mut self, invocation: &Invocation) -> io::Result<ToolOutput> {
        self.calls.push(invocation.clone());
        for arg in &invocation.args {
            let path = PathBuf::from(arg);
            if path.extension().is_some_and(|ext| ext == "csv") {
                self.descriptors.push(fs::read_to_string(&path)?);
            }
        }
        self.responses
            .pop_front()
            .unwrap_or_else(|| Err(io::Error::other("scripted runner has no queued response")))
    }
}
