//! RPC method handler for the strgen JSON-RPC protocol.
//!
//! Kept separate from `rpc_server.rs` so it can be unit-tested. Protocol
//! errors (unknown method, missing params) come back as `Err`. Refused
//! generations and failed copies are normal outcomes and come back as `Ok`
//! with `"ok": false` and a `toast` for the front end to show.

use std::sync::Mutex;

use serde_json::{json, Value};

use crate::app::App;
use crate::managers::charset_registry::CharsetRegistryTrait;
use crate::types::notification::{Notification, Severity};

fn str_param<'a>(params: &'a Value, name: &str) -> Result<&'a str, String> {
    params
        .get(name)
        .and_then(|v| v.as_str())
        .ok_or_else(|| format!("missing {}", name))
}

/// Reads an optional `length` parameter. Present but non-positive is an error.
///
/// Whole-valued floats such as `5.0` are accepted.
fn length_param(params: &Value) -> Result<Option<usize>, String> {
    const NOT_POSITIVE: &str = "Invalid input: length must be at least 1";
    const OUT_OF_RANGE: &str = "length out of range";

    let v = match params.get("length") {
        None | Some(Value::Null) => return Ok(None),
        Some(v) => v,
    };
    if let Some(n) = v.as_u64() {
        if n == 0 {
            return Err(NOT_POSITIVE.to_string());
        }
        return usize::try_from(n)
            .map(Some)
            .map_err(|_| OUT_OF_RANGE.to_string());
    }
    if v.as_i64().is_some() {
        return Err(NOT_POSITIVE.to_string());
    }
    match v.as_f64() {
        Some(f) if f.is_finite() && f.fract() == 0.0 => {
            if f < 1.0 {
                Err(NOT_POSITIVE.to_string())
            } else if f >= usize::MAX as f64 {
                Err(OUT_OF_RANGE.to_string())
            } else {
                Ok(Some(f as usize))
            }
        }
        _ => Err("length must be an integer".to_string()),
    }
}

fn toast(notification: &Notification) -> Value {
    json!(notification)
}

/// Dispatch a JSON-RPC method call to the appropriate handler.
///
/// Returns `Ok(Value)` on success or `Err(String)` with an error message.
pub fn handle_method(app: &Mutex<App>, method: &str, params: &Value) -> Result<Value, String> {
    match method {
        "ping" => Ok(json!({"pong": true})),

        // ─── Character sets ───
        "charset.list" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            let items: Vec<Value> = a
                .character_sets()
                .iter()
                .map(|s| {
                    json!({
                        "id": s.id,
                        "label": s.label,
                        "characters": s.characters,
                        "preview": s.preview(),
                        "enabled": s.enabled,
                    })
                })
                .collect();
            Ok(json!({
                "items": items,
                "alphabet": a.registry.effective_alphabet(),
                "any_enabled": a.registry.has_enabled(),
            }))
        }
        "charset.toggle" => {
            let id = str_param(params, "id")?;
            let enabled = params
                .get("enabled")
                .and_then(|v| v.as_bool())
                .ok_or("missing enabled")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.toggle_character_set(id, enabled).map_err(|e| e.to_string())?;
            Ok(json!({"id": id, "enabled": enabled}))
        }

        // ─── Generator ───
        "generator.generate" => {
            let length = length_param(params)?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            match a.generate(length) {
                Ok(generated) => {
                    let warning = (!generated.persisted)
                        .then(|| toast(&Notification::persistence_unavailable()));
                    Ok(json!({
                        "ok": true,
                        "record": generated.record,
                        "persisted": generated.persisted,
                        "toast": toast(&generated.notification),
                        "warning": warning,
                    }))
                }
                Err(e) => Ok(json!({
                    "ok": false,
                    "error": e.to_string(),
                    "toast": toast(&Notification::from(&e)),
                })),
            }
        }
        "generator.current" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            Ok(json!({"value": a.current_value(), "length": a.length()}))
        }
        "generator.set_length" => {
            let length = length_param(params)?.ok_or("missing length")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.set_length(length).map_err(|e| e.to_string())?;
            Ok(json!({"length": length}))
        }

        // ─── History ───
        "history.list" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            Ok(json!({"items": a.history_entries()}))
        }
        "history.clear" => {
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let notification = a.clear_history();
            Ok(json!({
                "ok": notification.severity != Severity::Error,
                "toast": toast(&notification),
            }))
        }

        // ─── Clipboard ───
        "clipboard.copy" => {
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let notification = match params.get("text").and_then(|v| v.as_str()) {
                Some(text) => a.copy(text),
                None => {
                    let id = params.get("id").and_then(|v| v.as_str());
                    a.copy_entry(id)
                }
            };
            Ok(json!({
                "ok": notification.severity == Severity::Success,
                "toast": toast(&notification),
            }))
        }

        // ─── Settings ───
        "settings.get" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            serde_json::to_value(a.settings()).map_err(|e| e.to_string())
        }
        "settings.set" => {
            let key = str_param(params, "key")?;
            let value = params.get("value").cloned().ok_or("missing value")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.update_setting(key, value).map_err(|e| e.to_string())?;
            Ok(json!({"ok": true, "length": a.length()}))
        }

        _ => Err(format!("unknown method: {}", method)),
    }
}
