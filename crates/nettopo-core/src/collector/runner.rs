//! Command execution seam.
//!
//! The collector talks to the OS through the `CommandRunner` trait so
//! tests can substitute canned output (see [`super::mock`]).

use std::io;
use std::process::Command;

/// Runs an external command and captures its stdout.
pub trait CommandRunner {
    /// Executes `program` with `args`, waiting for it to exit.
    /// Blocking, no timeout: a hung command blocks the calling actor.
    fn run(&self, program: &str, args: &[&str]) -> io::Result<String>;
}

/// Real runner spawning `ip` on the local host.
#[derive(Clone, Copy, Debug, Default)]
pub struct IpRunner;

impl IpRunner {
    pub fn new() -> Self {
        IpRunner
    }
}

impl CommandRunner for IpRunner {
    fn run(&self, program: &str, args: &[&str]) -> io::Result<String> {
        let output = Command::new(program).args(args).output()?;
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
