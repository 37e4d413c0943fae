use std::path::PathBuf;

use anyhow::bail;

const USAGE: &str = "Usage: snapserve --serverPort=<port> [--root=<dir>]";

#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    pub root: PathBuf,
}

impl Config {
    /// Parses configuration from the process arguments (program name excluded).
    pub fn load() -> anyhow::Result<Self> {
        Self::from_args(std::env::args().skip(1))
    }

    /// Parses `--serverPort=<port>` (required) and `--root=<dir>` (optional,
    /// defaults to `./www`). Ports at or below 1024 are rejected as likely
    /// reserved. Any unrecognized argument aborts with the usage message.
    pub fn from_args(args: impl Iterator<Item = String>) -> anyhow::Result<Self> {
        let mut port: Option<u16> = None;
        let mut root = PathBuf::from("./www");

        for arg in args {
            match arg.split_once('=') {
                Some(("--serverPort", value)) => {
                    port = Some(value.parse()?);
                }
                Some(("--root", value)) => {
                    root = PathBuf::from(value);
                }
                _ => bail!("{USAGE}"),
            }
        }

        let Some(port) = port else {
            bail!("Must specify port number with --serverPort\n{USAGE}");
        };

        if port <= 1024 {
            bail!("Avoid potentially reserved port number: {port} (should be > 1024)");
        }

        Ok(Self { port, root })
    }
}
