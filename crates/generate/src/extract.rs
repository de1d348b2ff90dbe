//! Extract usable markdown from model output.
//!
//! Models wrap answers in fences or preamble more often than not; downstream
//! writers want the bare document, starting at its frontmatter when one
//! exists.

/// Extract markdown content from a generation response.
///
/// Prefers the first fenced block that contains a frontmatter delimiter,
/// then falls back to the first frontmatter delimiter in the raw text, then
/// to the trimmed response as-is.
#[must_use]
pub fn extract_markdown(response: &str) -> String {
    let response = response.trim();

    if let Some(start) = response.find("```") {
        if let Some(end_offset) = response[start + 3..].find("```") {
            let block = &response[start + 3..start + 3 + end_offset];
            // Skip the language identifier line if present (e.g. ```markdown).
            if let Some(newline) = block.find('\n') {
                let body = &block[newline + 1..];
                if body.contains("---") {
                    return body.trim().to_string();
                }
            }
        }
    }

    if let Some(start) = response.find("---") {
        return response[start..].trim().to_string();
    }

    response.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unwraps_fenced_block_with_frontmatter() {
        let response = "Here's the file:\n\n```markdown\n---\nname: reviewer\n---\n\n# Reviewer\n```\n\nDone!";
        let content = extract_markdown(response);
        assert!(content.starts_with("---"));
        assert!(content.contains("name: reviewer"));
        assert!(!content.contains("```"));
    }

    #[test]
    fn finds_frontmatter_in_raw_text() {
        let response = "Sure, here you go:\n---\nname: reviewer\n---\nbody";
        let content = extract_markdown(response);
        assert!(content.starts_with("---"));
    }

    #[test]
    fn passes_through_plain_markdown() {
        let response = "# Guidance\n\nJust a document.";
        assert_eq!(extract_markdown(response), response);
    }

    #[test]
    fn fence_without_frontmatter_falls_through() {
        let response = "```js\nconsole.log(1)\n```\n---\nname: x\n---";
        let content = extract_markdown(response);
        assert!(content.starts_with("---"));
        assert!(content.contains("name: x"));
    }
}
