//! strgen RPC Server — JSON-RPC over stdin/stdout for a front end.
//!
//! Protocol: one JSON object per line (newline-delimited JSON).
//! Request:  {"id":1, "method":"generator.generate", "params":{"length":16}}
//! Response: {"id":1, "result":{...}} or {"id":1, "error":"..."}
//!
//! Logs go to stderr. The settings path may be passed as the first argument.

use std::io::{self, BufRead, Write};
use std::sync::Mutex;
use std::time::Instant;

use strgen::app::App;
use strgen::logging;
use strgen::rpc_handler::handle_method;
use strgen::services::settings_engine::{SettingsEngine, SettingsEngineTrait};

use serde_json::{json, Value};

/// Simple rate limiter: max requests per second.
struct RateLimiter {
    window_start: Instant,
    request_count: u32,
    max_per_second: u32,
}

impl RateLimiter {
    fn new(max_per_second: u32) -> Self {
        Self {
            window_start: Instant::now(),
            request_count: 0,
            max_per_second,
        }
    }

    /// Returns true if the request is allowed, false if rate-limited.
    fn check(&mut self) -> bool {
        if self.window_start.elapsed().as_secs() >= 1 {
            self.window_start = Instant::now();
            self.request_count = 0;
        }
        self.request_count += 1;
        self.request_count <= self.max_per_second
    }
}

fn send(out: &mut impl Write, value: &Value) -> io::Result<()> {
    writeln!(out, "{}", value)?;
    out.flush()
}

fn main() {
    let settings_path = std::env::args().nth(1);

    let logging_settings = SettingsEngine::new(settings_path.clone())
        .load()
        .map(|s| s.logging)
        .unwrap_or_default();
    logging::init(&logging_settings);

    let app = match App::new(settings_path) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("strgen-rpc: failed to initialize: {}", e);
            std::process::exit(1);
        }
    };
    let app = Mutex::new(app);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let ready = json!({"event": "ready", "version": env!("CARGO_PKG_VERSION")});
    if send(&mut out, &ready).is_err() {
        return;
    }
    tracing::info!("rpc server ready");

    let mut rate_limiter = RateLimiter::new(200);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };
        if line.trim().is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<Value>(&line) {
            Err(e) => json!({"id": null, "error": format!("parse error: {}", e)}),
            Ok(req) => {
                let id = req.get("id").cloned().unwrap_or(Value::Null);
                if !rate_limiter.check() {
                    json!({"id": id, "error": "rate limit exceeded"})
                } else {
                    let method = req.get("method").and_then(|v| v.as_str()).unwrap_or("");
                    let params = req.get("params").cloned().unwrap_or(json!({}));
                    tracing::debug!(method, "rpc request");

                    match handle_method(&app, method, &params) {
                        Ok(val) => json!({"id": id, "result": val}),
                        Err(err) => json!({"id": id, "error": err}),
                    }
                }
            }
        };

        if send(&mut out, &response).is_err() {
            break;
        }
    }
    tracing::info!("stdin closed, shutting down");
}
