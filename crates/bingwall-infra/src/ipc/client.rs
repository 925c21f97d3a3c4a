//! IPC client implementation.

use std::io::{BufRead, BufReader, Write};
use std::os::unix::net::UnixStream;

use anyhow::{Context, anyhow};

use bingwall_core::protocol::{Request, Response};

use crate::{pipeline, settings};

fn connect() -> anyhow::Result<UnixStream> {
    let sock = super::socket_path();
    UnixStream::connect(&sock).with_context(|| format!("connect {sock:?}"))
}

fn send(req: Request) -> anyhow::Result<Response> {
    let mut stream = connect()?;
    stream.write_all(req.to_line().as_bytes()).context("write")?;
    stream.flush().context("flush")?;

    let mut reader = BufReader::new(stream);
    let mut resp_line = String::new();
    reader.read_line(&mut resp_line).context("read response")?;
    Response::parse_line(&resp_line)
}

pub fn status() -> anyhow::Result<()> {
    match send(Request::Status).context("is the daemon running?")? {
        Response::Ok => {
            println!("OK");
            Ok(())
        }
        Response::OkMsg(msg) => {
            println!("OK {msg}");
            Ok(())
        }
        Response::Err(msg) => Err(anyhow!("{msg}")),
    }
}

/// Refresh via a running daemon (so its guard serializes the run and its
/// status stays accurate), or in-process when no daemon is listening.
pub fn refresh() -> anyhow::Result<()> {
    match send(Request::Refresh) {
        Ok(Response::Ok | Response::OkMsg(_)) => {
            println!("refresh started (daemon)");
            Ok(())
        }
        Ok(Response::Err(msg)) => Err(anyhow!("{msg}")),
        Err(_) => {
            let cfg = settings::load()?;
            let applied = pipeline::run(&cfg).map_err(anyhow::Error::new)?;
            println!("wallpaper set: {}", applied.path.display());
            Ok(())
        }
    }
}
