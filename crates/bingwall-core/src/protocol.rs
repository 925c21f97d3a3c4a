//! IPC protocol parsing/formatting.

use anyhow::{Context, anyhow};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request {
    Ping,
    Status,
    Refresh,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    Ok,
    OkMsg(String),
    Err(String),
}

impl Request {
    pub fn parse_line(line: &str) -> anyhow::Result<Self> {
        match line.trim_end_matches(['\r', '\n']) {
            "PING" => Ok(Self::Ping),
            "STATUS" => Ok(Self::Status),
            "REFRESH" => Ok(Self::Refresh),
            _ => Err(anyhow!("unknown_command")),
        }
    }

    pub fn to_line(&self) -> &'static str {
        match self {
            Self::Ping => "PING\n",
            Self::Status => "STATUS\n",
            Self::Refresh => "REFRESH\n",
        }
    }
}

impl Response {
    pub fn to_line(&self) -> String {
        match self {
            Self::Ok => "OK\n".to_string(),
            Self::OkMsg(msg) => format!("OK {msg}\n"),
            Self::Err(msg) => format!("ERR {msg}\n"),
        }
    }

    pub fn parse_line(line: &str) -> anyhow::Result<Self> {
        let line = line.trim_end_matches(['\r', '\n']);

        if line == "OK" {
            return Ok(Self::Ok);
        }
        if let Some(rest) = line.strip_prefix("OK ") {
            return Ok(Self::OkMsg(rest.to_string()));
        }
        if let Some(rest) = line.strip_prefix("ERR ") {
            return Ok(Self::Err(rest.to_string()));
        }

        Err(anyhow!("invalid_response")).with_context(|| format!("line: {line:?}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requests_round_trip() {
        for req in [Request::Ping, Request::Status, Request::Refresh] {
            assert_eq!(Request::parse_line(req.to_line()).unwrap(), req);
        }
    }

    #[test]
    fn unknown_request_is_rejected() {
        assert!(Request::parse_line("SET /x\n").is_err());
    }

    #[test]
    fn responses_parse() {
        assert_eq!(Response::parse_line("OK\n").unwrap(), Response::Ok);
        assert_eq!(
            Response::parse_line("OK last=<none>\n").unwrap(),
            Response::OkMsg("last=<none>".into())
        );
        assert_eq!(
            Response::parse_line("ERR nope\n").unwrap(),
            Response::Err("nope".into())
        );
        assert!(Response::parse_line("HUH\n").is_err());
    }
}
