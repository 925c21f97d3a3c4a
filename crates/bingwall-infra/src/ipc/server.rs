//! Daemon: refresh timer plus IPC server.

use std::io::{BufRead, BufReader, Write};
use std::os::unix::net::{UnixListener, UnixStream};
use std::sync::{Arc, Mutex};
use std::thread;

use anyhow::Context;

use bingwall_core::config::REFRESH_INTERVAL;
use bingwall_core::protocol::{Request, Response};
use bingwall_core::state::{LastRun, State};

use crate::{pipeline, settings};

pub fn run_daemon() -> anyhow::Result<()> {
    let sock = super::socket_path();

    // Ensure old socket is gone.
    if sock.exists() {
        std::fs::remove_file(&sock).with_context(|| format!("remove existing socket {sock:?}"))?;
    }

    let listener = UnixListener::bind(&sock).with_context(|| format!("bind socket {sock:?}"))?;

    // Best-effort perms: user-only.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let _ = std::fs::set_permissions(&sock, std::fs::Permissions::from_mode(0o600));
    }

    let state = Arc::new(Mutex::new(State::default()));
    // Serializes concurrent refreshes: a manual REFRESH racing the timer
    // must not delete a scratch file the other run just wrote.
    let gate = Arc::new(Mutex::new(()));

    {
        let state = Arc::clone(&state);
        let gate = Arc::clone(&gate);
        thread::spawn(move || {
            loop {
                run_refresh(&state, &gate);
                thread::sleep(REFRESH_INTERVAL);
            }
        });
    }

    tracing::info!(socket = ?sock, "daemon listening");
    for stream in listener.incoming() {
        match stream {
            Ok(stream) => {
                if let Err(err) = handle_client(stream, &state, &gate) {
                    tracing::warn!(error = %format!("{err:#}"), "client connection failed");
                }
            }
            Err(err) => tracing::warn!(error = %err, "accept failed"),
        }
    }

    Ok(())
}

fn run_refresh(state: &Arc<Mutex<State>>, gate: &Arc<Mutex<()>>) {
    let _serialized = match gate.lock() {
        Ok(g) => g,
        Err(_) => {
            tracing::error!("refresh gate poisoned");
            return;
        }
    };

    let cfg = match settings::load() {
        Ok(cfg) => cfg,
        Err(err) => {
            tracing::error!(error = %format!("{err:#}"), "could not load config");
            bingwall_core::config::Config::default()
        }
    };

    let outcome = pipeline::run_logged(&cfg);
    if let Ok(mut s) = state.lock() {
        s.last_run = Some(LastRun::now(outcome));
    }
}

fn handle_client(
    stream: UnixStream,
    state: &Arc<Mutex<State>>,
    gate: &Arc<Mutex<()>>,
) -> anyhow::Result<()> {
    let mut w = stream.try_clone().context("clone stream")?;
    let r = BufReader::new(stream);

    for line in r.lines() {
        let line = line.context("read line")?;
        let req = match Request::parse_line(&line) {
            Ok(r) => r,
            Err(_) => {
                w.write_all(Response::Err("unknown_command".into()).to_line().as_bytes())?;
                w.flush()?;
                continue;
            }
        };

        let resp = match req {
            Request::Ping => Response::Ok,
            Request::Status => {
                let msg = match state.lock() {
                    Ok(s) => match &s.last_run {
                        Some(run) => run.status_line(),
                        None => "last=<none>".to_string(),
                    },
                    Err(_) => return Err(anyhow::anyhow!("state lock poisoned")),
                };
                Response::OkMsg(msg)
            }
            Request::Refresh => {
                // Fire and forget; the outcome lands in STATUS.
                let state = Arc::clone(state);
                let gate = Arc::clone(gate);
                thread::spawn(move || run_refresh(&state, &gate));
                Response::Ok
            }
        };

        w.write_all(resp.to_line().as_bytes())?;
        w.flush()?;
    }

    Ok(())
}
