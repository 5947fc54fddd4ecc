//! Browser side effects: clipboard, new windows, file downloads and
//! confirmation prompts.
//!
//! Each script catches its own exceptions and reports `{ ok, error }` so
//! failures surface as `Err` instead of disappearing in the console.

use dioxus::prelude::*;
use hauldesk_core::CsvExport;
use serde_json::{Value, json};

const COPY_JS: &str = r#"
    const text = await dioxus.recv();
    try {
        await navigator.clipboard.writeText(text);
        return { ok: true };
    } catch (e) {
        return { ok: false, error: String(e) };
    }
"#;

const OPEN_JS: &str = r#"
    const target = await dioxus.recv();
    try {
        const win = window.open(target.url, "_blank", target.features);
        if (!win) {
            return { ok: false, error: "Pop-up blocked" };
        }
        return { ok: true };
    } catch (e) {
        return { ok: false, error: String(e) };
    }
"#;

const DOWNLOAD_JS: &str = r#"
    const file = await dioxus.recv();
    try {
        const blob = new Blob([file.content], { type: file.mime_type });
        const url = window.URL.createObjectURL(blob);
        const link = document.createElement("a");
        link.href = url;
        link.download = file.filename;
        document.body.appendChild(link);
        link.click();
        link.remove();
        window.URL.revokeObjectURL(url);
        return { ok: true };
    } catch (e) {
        return { ok: false, error: String(e) };
    }
"#;

const CONFIRM_JS: &str = r#"
    const message = await dioxus.recv();
    return window.confirm(message);
"#;

const SHARE_WINDOW_FEATURES: &str = "width=600,height=400";

async fn run(script: &str, input: Value) -> Result<(), String> {
    let eval = document::eval(script);
    eval.send(input).map_err(|e| e.to_string())?;

    let result = eval.await.map_err(|e| e.to_string())?;
    if result.get("ok").and_then(Value::as_bool) == Some(true) {
        Ok(())
    } else {
        let reason = result
            .get("error")
            .and_then(Value::as_str)
            .unwrap_or("unknown error");
        Err(reason.to_string())
    }
}

/// Write `text` to the system clipboard.
pub async fn copy_to_clipboard(text: &str) -> Result<(), String> {
    run(COPY_JS, json!(text)).await
}

/// Open `url` in a small share window.
pub async fn open_window(url: &str) -> Result<(), String> {
    run(
        OPEN_JS,
        json!({ "url": url, "features": SHARE_WINDOW_FEATURES }),
    )
    .await
}

/// Hand the export to the browser as a file download.
pub async fn download_csv(export: &CsvExport) -> Result<(), String> {
    let input = serde_json::to_value(export).map_err(|e| e.to_string())?;
    run(DOWNLOAD_JS, input).await
}

/// Ask the user to confirm; anything but an explicit yes is a no.
pub async fn confirm(message: &str) -> bool {
    let eval = document::eval(CONFIRM_JS);
    if eval.send(json!(message)).is_err() {
        return false;
    }
    matches!(eval.await, Ok(Value::Bool(true)))
}

/// Wait without blocking the UI thread.
pub async fn sleep_ms(ms: u32) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::TimeoutFuture::new(ms).await;

    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(std::time::Duration::from_millis(u64::from(ms))).await;
}
