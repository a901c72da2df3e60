use chrono::{DateTime, Local, Utc};
use serde_json::Value;
use std::fmt::Write;

use super::{escape_html, render_markdown};
use crate::models::Note;

const NOTE_PAGE_STYLE: &str = r#"
    * { margin: 0; padding: 0; box-sizing: border-box; }
    body {
      font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif;
      line-height: 1.6;
      color: #333;
      max-width: 800px;
      margin: 0 auto;
      padding: 20px;
      background: #f5f5f5;
    }
    .container {
      background: white;
      padding: 40px;
      border-radius: 8px;
      box-shadow: 0 2px 10px rgba(0,0,0,0.1);
    }
    h1 {
      border-bottom: 2px solid #e0e0e0;
      padding-bottom: 10px;
      margin-bottom: 20px;
      color: #2c3e50;
    }
    .metadata {
      font-size: 0.85em;
      color: #666;
      margin-bottom: 20px;
      padding: 10px;
      background: #f8f9fa;
      border-radius: 4px;
    }
    .markdown { line-height: 1.8; }
    .markdown h2 { margin-top: 30px; margin-bottom: 15px; color: #2c3e50; }
    .markdown p { margin-bottom: 15px; }
    .markdown code {
      background: #f4f4f4;
      padding: 2px 6px;
      border-radius: 3px;
      font-family: 'Courier New', monospace;
    }
    .markdown pre {
      background: #2d2d2d;
      color: #f8f8f2;
      padding: 15px;
      border-radius: 5px;
      overflow-x: auto;
      margin-bottom: 20px;
    }
    .markdown pre code { background: none; padding: 0; color: inherit; }
    .markdown blockquote {
      border-left: 4px solid #3498db;
      padding-left: 15px;
      margin: 20px 0;
      color: #555;
      font-style: italic;
    }
    .markdown ul, .markdown ol { margin-bottom: 15px; padding-left: 30px; }
    .markdown li { margin-bottom: 8px; }
    .markdown a { color: #3498db; text-decoration: none; }
    .markdown a:hover { text-decoration: underline; }
    .footer {
      margin-top: 40px;
      padding-top: 20px;
      border-top: 1px solid #e0e0e0;
      text-align: center;
      color: #888;
      font-size: 0.9em;
    }
"#;

/// Timestamp in the server's local zone, e.g. `2025/3/7 09:41:05`.
fn display_time(ts: &DateTime<Utc>) -> String {
    ts.with_timezone(&Local).format("%Y/%-m/%-d %H:%M:%S").to_string()
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

pub fn render_note_page(note: &Note) -> String {
    let title = escape_html(&note.title);

    let mut metadata = String::new();
    for (key, value) in &note.metadata {
        let _ = write!(
            metadata,
            "\n      <p>{}: {}</p>",
            escape_html(key),
            escape_html(&display_value(value))
        );
    }

    let mut page = String::with_capacity(NOTE_PAGE_STYLE.len() + note.content.len() * 2 + 1024);
    let _ = write!(
        page,
        r#"<!DOCTYPE html>
<html lang="zh-CN">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{title} - OpenMD</title>
  <style>{style}  </style>
</head>
<body>
  <div class="container">
    <h1>{title}</h1>
    <div class="metadata">
      <p>Created: {created}</p>
      <p>Last Updated: {updated}</p>{metadata}
    </div>
    <div class="markdown">
{content}
    </div>
    <div class="footer">
      <p>Generated by OpenMD - AI-native note tool</p>
    </div>
  </div>
</body>
</html>
"#,
        title = title,
        style = NOTE_PAGE_STYLE,
        created = display_time(&note.created_at),
        updated = display_time(&note.updated_at),
        metadata = metadata,
        content = render_markdown(&note.content),
    );
    page
}
