//! Compress sampled files to their essential structure.
//!
//! Full file bodies waste generation tokens; a summary of imports, exports,
//! and signatures carries most of the signal. JSON files reduce to their key
//! fields instead.

use regex::Regex;
use std::sync::LazyLock;

const MAX_IMPORTS: usize = 10;
const MAX_EXPORTS: usize = 15;
const MAX_SIGNATURES: usize = 10;
const MAX_FALLBACK_CHARS: usize = 500;

static ARROW_FN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(const|let)\s+\w+\s*=\s*(async\s*)?\(").expect("arrow fn regex")
});

/// Summarize a sampled file to imports, exports, and signatures.
///
/// JSON files are reduced to key fields; anything without recognizable
/// structure falls back to a character-capped prefix.
#[must_use]
pub fn summarize_file(content: &str, filename: &str) -> String {
    if filename.ends_with(".json") {
        return summarize_json(content, filename);
    }

    let lines: Vec<&str> = content.lines().collect();
    let mut summary: Vec<String> = Vec::new();

    let imports: Vec<&str> = lines
        .iter()
        .map(|l| l.trim())
        .filter(|l| l.starts_with("import ") || l.starts_with("from "))
        .collect();
    if !imports.is_empty() {
        summary.push("// Imports:".to_string());
        summary.extend(imports.iter().take(MAX_IMPORTS).map(|l| (*l).to_string()));
        if imports.len() > MAX_IMPORTS {
            summary.push(format!("// ... {} more imports", imports.len() - MAX_IMPORTS));
        }
    }

    let exports: Vec<&str> = lines
        .iter()
        .filter(|l| l.trim_start().starts_with("export "))
        .copied()
        .collect();
    if !exports.is_empty() {
        summary.push(String::new());
        summary.push("// Exports:".to_string());
        summary.extend(exports.iter().take(MAX_EXPORTS).map(|l| elide_body(l)));
    }

    let signatures: Vec<&str> = lines
        .iter()
        .filter(|l| {
            let trimmed = l.trim_start();
            !trimmed.starts_with("export ")
                && (trimmed.starts_with("function ")
                    || trimmed.starts_with("async function ")
                    || trimmed.starts_with("class ")
                    || ARROW_FN_RE.is_match(trimmed))
        })
        .copied()
        .collect();
    if !signatures.is_empty() {
        summary.push(String::new());
        summary.push("// Functions/Classes:".to_string());
        summary.extend(signatures.iter().take(MAX_SIGNATURES).map(|l| elide_body(l)));
    }

    if summary.is_empty() {
        truncate_chars(content, MAX_FALLBACK_CHARS)
    } else {
        summary.join("\n")
    }
}

/// Replace a trailing body-opening brace with an elided placeholder.
fn elide_body(line: &str) -> String {
    match line.find('{') {
        Some(idx) => format!("{}{{ ... }}", &line[..idx]),
        None => line.to_string(),
    }
}

fn summarize_json(content: &str, filename: &str) -> String {
    let Ok(json) = serde_json::from_str::<serde_json::Value>(content) else {
        return truncate_chars(content, MAX_FALLBACK_CHARS);
    };

    if filename == "package.json" || filename.ends_with("/package.json") {
        let keys = |field: &str| -> Vec<String> {
            json.get(field)
                .and_then(|v| v.as_object())
                .map(|obj| obj.keys().cloned().collect())
                .unwrap_or_default()
        };
        let reduced = serde_json::json!({
            "name": json.get("name").cloned().unwrap_or_default(),
            "scripts": keys("scripts"),
            "dependencies": keys("dependencies"),
            "devDependencies": keys("devDependencies"),
        });
        return serde_json::to_string_pretty(&reduced).unwrap_or_default();
    }

    let pretty = serde_json::to_string_pretty(&json).unwrap_or_default();
    truncate_chars(&pretty, MAX_FALLBACK_CHARS)
}

fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}
