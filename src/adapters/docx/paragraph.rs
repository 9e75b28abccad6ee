//! Paragraph-level text substitution over WordprocessingML.
//!
//! A paragraph's text is the concatenation of its runs' `w:t` content, with
//! `w:tab` read as `\t` and `w:br`/`w:cr` as `\n`. A placeholder therefore
//! matches even when the editor split it across differently formatted runs.
//! A rewritten paragraph keeps its `w:pPr` and collapses to one run carrying
//! the first run's `w:rPr`.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::Replacements;

static PARAGRAPH_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<(/)?w:p(\s[^>]*?)?(/)?>").expect("paragraph tag pattern"));

static TEXT_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?s)<w:t(?:\s[^>]*[^/>])?>(?P<text>.*?)</w:t>|<w:t(?:\s[^>]*)?/>|(?P<tab><w:tab\s*/>)|(?P<br><w:(?:br|cr)(?:\s[^>]*)?/>)",
    )
    .expect("text token pattern")
});

static PARAGRAPH_PROPERTIES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^\s*(<w:pPr(?:\s[^>]*)?/>|<w:pPr(?:\s[^>]*)?>.*?</w:pPr>)")
        .expect("paragraph properties pattern")
});

static FIRST_RUN_PROPERTIES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<w:r(?:\s[^>]*)?>\s*(<w:rPr(?:\s[^>]*)?/>|<w:rPr(?:\s[^>]*)?>.*?</w:rPr>)?")
        .expect("run properties pattern")
});

/// Byte range of one paragraph element that contains no nested paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ParagraphSpan {
    start: usize,
    content_start: usize,
    content_end: usize,
    end: usize,
}

/// Apply `replacements` to every leaf paragraph of `xml`.
///
/// Returns the rewritten document and the number of paragraphs changed.
pub fn substitute_paragraphs(xml: &str, replacements: &Replacements) -> (String, usize) {
    let mut output = String::with_capacity(xml.len());
    let mut cursor = 0;
    let mut rewritten = 0;

    for span in leaf_paragraphs(xml) {
        let content = &xml[span.content_start..span.content_end];
        let Some(new_text) = replacements.apply(&paragraph_text(content)) else {
            continue;
        };

        output.push_str(&xml[cursor..span.content_start]);
        output.push_str(&rebuild_content(content, &new_text));
        output.push_str(&xml[span.content_end..span.end]);
        cursor = span.end;
        rewritten += 1;
    }

    output.push_str(&xml[cursor..]);
    (output, rewritten)
}

/// Paragraphs without nested paragraphs, in document order. Paragraphs that
/// host text boxes are represented by their inner paragraphs.
fn leaf_paragraphs(xml: &str) -> Vec<ParagraphSpan> {
    // (start, content_start, has_nested)
    let mut open: Vec<(usize, usize, bool)> = Vec::new();
    let mut leaves = Vec::new();

    for caps in PARAGRAPH_TAG.captures_iter(xml) {
        let Some(tag) = caps.get(0) else {
            continue;
        };
        let closing = caps.get(1).is_some();
        let self_closing = caps.get(3).is_some();

        if self_closing {
            if let Some(parent) = open.last_mut() {
                parent.2 = true;
            }
        } else if !closing {
            open.push((tag.start(), tag.end(), false));
        } else if let Some((start, content_start, has_nested)) = open.pop() {
            if !has_nested {
                leaves.push(ParagraphSpan {
                    start,
                    content_start,
                    content_end: tag.start(),
                    end: tag.end(),
                });
            }
            if let Some(parent) = open.last_mut() {
                parent.2 = true;
            }
        }
    }

    leaves
}

/// Visible text of a paragraph's content.
fn paragraph_text(content: &str) -> String {
    let mut text = String::new();
    for caps in TEXT_TOKEN.captures_iter(content) {
        if let Some(value) = caps.name("text") {
            text.push_str(&unescape(value.as_str()));
        } else if caps.name("tab").is_some() {
            text.push('\t');
        } else if caps.name("br").is_some() {
            text.push('\n');
        }
    }
    text
}

fn rebuild_content(content: &str, text: &str) -> String {
    let paragraph_properties =
        PARAGRAPH_PROPERTIES.captures(content).and_then(|caps| caps.get(1));
    let runs_from = paragraph_properties.map_or(0, |m| m.end());
    let run_properties = FIRST_RUN_PROPERTIES
        .captures(&content[runs_from..])
        .and_then(|caps| caps.get(1))
        .map_or("", |m| m.as_str());

    let mut rebuilt = String::new();
    if let Some(properties) = paragraph_properties {
        rebuilt.push_str(properties.as_str());
    }
    rebuilt.push_str("<w:r>");
    rebuilt.push_str(run_properties);
    push_run_content(&mut rebuilt, text);
    rebuilt.push_str("</w:r>");
    rebuilt
}

fn push_run_content(out: &mut String, text: &str) {
    let mut chunk = String::new();
    for ch in text.chars() {
        match ch {
            '\t' | '\n' | '\r' => {
                flush_text(out, &mut chunk);
                out.push_str(if ch == '\t' { "<w:tab/>" } else { "<w:br/>" });
            }
            _ => chunk.push(ch),
        }
    }
    flush_text(out, &mut chunk);
}

fn flush_text(out: &mut String, chunk: &mut String) {
    if chunk.is_empty() {
        return;
    }
    out.push_str(r#"<w:t xml:space="preserve">"#);
    out.push_str(&escape(chunk));
    out.push_str("</w:t>");
    chunk.clear();
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

fn unescape(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp..];
        let Some(semi) = tail.find(';') else {
            out.push_str(tail);
            return out;
        };
        let entity = &tail[1..semi];
        match decode_entity(entity) {
            Some(ch) => out.push(ch),
            None => out.push_str(&tail[..=semi]),
        }
        rest = &tail[semi + 1..];
    }
    out.push_str(rest);
    out
}

fn decode_entity(entity: &str) -> Option<char> {
    match entity {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        _ => {
            let code = if let Some(hex) = entity.strip_prefix("#x").or(entity.strip_prefix("#X")) {
                u32::from_str_radix(hex, 16).ok()?
            } else {
                entity.strip_prefix('#')?.parse().ok()?
            };
            char::from_u32(code)
        }
    }
}
