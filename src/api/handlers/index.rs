use axum::{extract::State, response::Html};

use crate::api::AppState;
use crate::error::Result;
use crate::prompts::PromptDocument;

// The page is split at its two insertion points so inserted text is never
// scanned for markers.
const PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html lang="de">
<head>
<meta charset="utf-8">
<title>Prompt Desk</title>
<style>
body { font-family: sans-serif; max-width: 60rem; margin: 2rem auto; }
textarea { width: 100%; }
#result { white-space: pre-wrap; border: 1px solid #ccc; padding: 1rem; min-height: 4rem; }
</style>
</head>
<body>
<h1>Prompt Desk</h1>
<form id="generate-form">
<label>Kategorie <select name="category" id="category">"#;

const PAGE_MIDDLE: &str = r#"</select></label>
<label>Modus <select name="mode" id="mode"></select></label>
<p><textarea name="content" rows="10" placeholder="Inhalt" required></textarea></p>
<p><input name="extra" placeholder="Zusatzanweisung (optional)" size="60"></p>
<button type="submit">Generieren</button>
</form>
<h2>Ergebnis</h2>
<div id="result"></div>
<h2>Einstellungen</h2>
<p><textarea id="settings" rows="20">"#;

const PAGE_TAIL: &str = r#"</textarea></p>
<button id="save">Speichern</button> <span id="save-status"></span>
<script>
const settings = document.getElementById("settings");
const category = document.getElementById("category");
const mode = document.getElementById("mode");
function fillModes() {
  const selected = category.selectedOptions[0];
  const modes = selected ? JSON.parse(selected.dataset.modes) : [];
  mode.innerHTML = "";
  for (const m of modes) { const o = document.createElement("option"); o.value = m; o.textContent = m; mode.appendChild(o); }
}
category.addEventListener("change", fillModes);
fillModes();
document.getElementById("generate-form").addEventListener("submit", async (ev) => {
  ev.preventDefault();
  const result = document.getElementById("result");
  result.textContent = "...";
  const resp = await fetch("/generate", { method: "POST", body: new URLSearchParams(new FormData(ev.target)) });
  const data = await resp.json();
  result.textContent = data.result ?? data.error ?? "";
});
document.getElementById("save").addEventListener("click", async () => {
  const resp = await fetch("/save_settings", { method: "POST", headers: { "Content-Type": "application/json" }, body: settings.value });
  const data = await resp.json();
  if (data.status === "success") { location.reload(); return; }
  document.getElementById("save-status").textContent = "Fehler: " + data.message;
});
</script>
</body>
</html>
"#;

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Renders the operator page for the given prompt document.
pub fn render_page(prompts: &PromptDocument) -> Result<String> {
    let options: String = prompts
        .categories()
        .into_iter()
        .map(|(category, modes)| -> Result<String> {
            Ok(format!(
                r#"<option value="{0}" data-modes="{1}">{0}</option>"#,
                escape_html(category),
                escape_html(&serde_json::to_string(&modes)?)
            ))
        })
        .collect::<Result<String>>()?;

    let settings = escape_html(&serde_json::to_string_pretty(prompts)?);

    let mut page = String::with_capacity(
        PAGE_HEAD.len() + options.len() + PAGE_MIDDLE.len() + settings.len() + PAGE_TAIL.len(),
    );
    page.push_str(PAGE_HEAD);
    page.push_str(&options);
    page.push_str(PAGE_MIDDLE);
    page.push_str(&settings);
    page.push_str(PAGE_TAIL);
    Ok(page)
}

pub async fn index(State(state): State<AppState>) -> Result<Html<String>> {
    let prompts = state.store.load().await?;
    Ok(Html(render_page(&prompts)?))
}
