//! Shared helpers for CLI specs

#![allow(dead_code)]

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Address nothing listens on; connections are refused immediately
pub const UNREACHABLE_API: &str = "http://127.0.0.1:1/api";

pub const CACHE_FILE: &str = "local-storage.json";

/// Build a `noc` invocation with a quiet, isolated environment
pub fn noc() -> CliBuilder {
    let mut cmd = Command::cargo_bin("noc").unwrap();
    cmd.env("RUST_LOG", "off")
        .env_remove("NOC_API_URL")
        .env_remove("NOC_CACHE_PATH")
        .env_remove("NOC_CONFIG");
    CliBuilder { cmd }
}

pub struct CliBuilder {
    cmd: Command,
}

impl CliBuilder {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn env(mut self, key: &str, value: impl AsRef<std::ffi::OsStr>) -> Self {
        self.cmd.env(key, value);
        self
    }

    pub fn env_remove(mut self, key: &str) -> Self {
        self.cmd.env_remove(key);
        self
    }

    /// Run and require a zero exit status
    pub fn passes(mut self) -> RunAssert {
        let output = self.cmd.output().unwrap();
        let run = RunAssert::from(output);
        assert!(
            run.success,
            "expected success\nstdout:\n{}\nstderr:\n{}",
            run.stdout,
            run.stderr
        );
        run
    }

    /// Run and require a non-zero exit status
    pub fn fails(mut self) -> RunAssert {
        let output = self.cmd.output().unwrap();
        let run = RunAssert::from(output);
        assert!(
            !run.success,
            "expected failure\nstdout:\n{}\nstderr:\n{}",
            run.stdout,
            run.stderr
        );
        run
    }
}

pub struct RunAssert {
    success: bool,
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl From<std::process::Output> for RunAssert {
    fn from(output: std::process::Output) -> Self {
        Self {
            success: output.status.success(),
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

impl RunAssert {
    pub fn stdout_eq(self, expected: &str) -> Self {
        similar_asserts::assert_eq!(self.stdout, expected);
        self
    }

    pub fn stdout_has(self, needle: &str) -> Self {
        assert!(
            self.stdout.contains(needle),
            "stdout missing {:?}\nstdout:\n{}",
            needle,
            self.stdout
        );
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        assert!(
            self.stderr.contains(needle),
            "stderr missing {:?}\nstderr:\n{}",
            needle,
            self.stderr
        );
        self
    }

    pub fn code_is(self, code: i32) -> Self {
        assert_eq!(self.code, Some(code), "stderr:\n{}", self.stderr);
        self
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout).unwrap()
    }
}

/// Scratch console home: config, cache file and an offline API
pub struct Console {
    dir: TempDir,
}

impl Console {
    pub fn offline() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn cache_path(&self) -> PathBuf {
        self.dir.path().join(CACHE_FILE)
    }

    pub fn file(&self, rel: &str, contents: &str) {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, contents).unwrap();
    }

    /// Seed the cache with a settings snapshot as the console stores it
    pub fn cached_settings(&self, json: &str) {
        let store = serde_json::json!({ "noc.globalSettings": json });
        self.file(CACHE_FILE, &store.to_string());
    }

    /// Settings snapshot currently held in the cache
    pub fn read_cached_settings(&self) -> Option<serde_json::Value> {
        let text = std::fs::read_to_string(self.cache_path()).ok()?;
        let store: serde_json::Value = serde_json::from_str(&text).unwrap();
        let snapshot = store.get("noc.globalSettings")?.as_str()?.to_string();
        Some(serde_json::from_str(&snapshot).unwrap())
    }

    pub fn noc(&self) -> CliBuilder {
        noc()
            .env("NOC_API_URL", UNREACHABLE_API)
            .env("NOC_CACHE_PATH", self.cache_path())
            .env("NOC_CONFIG", self.dir.path().join("config.toml"))
    }
}

/// Console API stand-in serving a fixed number of requests
pub struct FakeApi {
    pub url: String,
    requests: std::sync::mpsc::Receiver<String>,
}

impl FakeApi {
    /// Answer `GET` with `settings_json` and `PUT` with `put_status`
    pub fn serve(count: usize, settings_json: &'static str, put_status: &'static str) -> Self {
        use std::io::{BufRead, BufReader, Read, Write};

        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = std::sync::mpsc::channel();

        std::thread::spawn(move || {
            for _ in 0..count {
                let Ok((mut stream, _)) = listener.accept() else {
                    return;
                };
                let mut reader = BufReader::new(stream.try_clone().unwrap());
                let mut request = String::new();
                let mut content_length = 0usize;
                let mut chunked = false;
                loop {
                    let mut line = String::new();
                    if reader.read_line(&mut line).unwrap_or(0) == 0 {
                        break;
                    }
                    let lower = line.to_ascii_lowercase();
                    if let Some(v) = lower.strip_prefix("content-length:") {
                        content_length = v.trim().parse().unwrap_or(0);
                    }
                    if lower.starts_with("transfer-encoding:") && lower.contains("chunked") {
                        chunked = true;
                    }
                    request.push_str(&line);
                    if line == "\r\n" {
                        break;
                    }
                }
                if chunked {
                    loop {
                        let mut size_line = String::new();
                        reader.read_line(&mut size_line).unwrap();
                        let size = usize::from_str_radix(size_line.trim(), 16).unwrap();
                        let mut chunk = vec![0; size + 2];
                        reader.read_exact(&mut chunk).unwrap();
                        if size == 0 {
                            break;
                        }
                        request.push_str(&String::from_utf8_lossy(&chunk[..size]));
                    }
                } else {
                    let mut body = vec![0; content_length];
                    reader.read_exact(&mut body).unwrap();
                    request.push_str(&String::from_utf8_lossy(&body));
                }

                let (status, body) = if request.starts_with("GET ") {
                    ("200 OK", settings_json)
                } else {
                    (put_status, "{}")
                };
                let _ = write!(
                    stream,
                    "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    body.len(),
                    body
                );
                let _ = stream.flush();
                let _ = tx.send(request);
            }
        });

        Self {
            url: format!("http://{}/api", addr),
            requests: rx,
        }
    }

    /// Wait for the next `n` requests, in arrival order
    pub fn requests(&self, n: usize) -> Vec<String> {
        (0..n)
            .map(|_| {
                self.requests
                    .recv_timeout(std::time::Duration::from_secs(5))
                    .unwrap()
            })
            .collect()
    }
}
