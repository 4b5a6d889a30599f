//! Line-oriented front-end around a [`Session`].
//!
//! The shell prints the `<username>@<hostname>:<cwd>$ ` prompt, hands each
//! line to the session and writes back the result until `exit` is entered or
//! the input ends. A startup script runs through the same loop with each line
//! echoed after the prompt, as if it had been typed.

use crate::core::{
    config::ShellConfig,
    error::{Result, TarShellError},
    output::format_prompt,
};
use crate::session::Session;
use std::io::{BufRead, Write};
use std::path::Path;

pub struct Shell {
    username: String,
    hostname: String,
    session: Session,
    color: bool,
    echo_script: bool,
}

impl Shell {
    pub fn new(
        username: impl Into<String>,
        hostname: impl Into<String>,
        session: Session,
        config: &ShellConfig,
    ) -> Self {
        Self {
            username: username.into(),
            hostname: hostname.into(),
            session,
            color: config.color,
            echo_script: config.echo_script,
        }
    }

    pub fn prompt(&self) -> String {
        format_prompt(
            &self.username,
            &self.hostname,
            self.session.current_dir(),
            self.color,
        )
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn exit_requested(&self) -> bool {
        self.session.exit_requested()
    }

    /// Run the commands of the script file at `path`
    pub fn run_script_file<W: Write>(&mut self, path: &Path, output: &mut W) -> Result<()> {
        let script = std::fs::read_to_string(path)
            .map_err(|e| TarShellError::script_read_failed(path, e))?;
        log::debug!("Running startup script {}", path.display());
        self.run_script(&script, output)
    }

    /// Run each line of `script`, stopping early on `exit`
    pub fn run_script<W: Write>(&mut self, script: &str, output: &mut W) -> Result<()> {
        for line in script.lines() {
            if self.exit_requested() {
                break;
            }
            if self.echo_script {
                writeln!(output, "{}{line}", self.prompt())?;
            }
            let result = self.session.process(line);
            output.write_all(result.as_bytes())?;
        }
        output.flush()?;
        Ok(())
    }

    /// Interactive loop over `input` until `exit` or end of input
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, output: &mut W) -> Result<()> {
        let mut line = String::new();

        while !self.exit_requested() {
            write!(output, "{}", self.prompt())?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(output)?;
                break;
            }

            let result = self.session.process(line.trim_end_matches(['\r', '\n']));
            output.write_all(result.as_bytes())?;
        }

        output.flush()?;
        Ok(())
    }
}
