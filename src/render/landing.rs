const LANDING_HEAD: &str = r##"<!DOCTYPE html>
<html lang="zh-CN">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>OpenMD - AI-native Note Tool</title>
  <style>
    body {
      font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
      max-width: 800px;
      margin: 0 auto;
      padding: 40px 20px;
      line-height: 1.6;
    }
    h1 { color: #2c3e50; }
    .api-section {
      background: #f8f9fa;
      padding: 20px;
      border-radius: 8px;
      margin: 20px 0;
    }
    code {
      background: #e9ecef;
      padding: 2px 6px;
      border-radius: 3px;
    }
    pre {
      background: #2d2d2d;
      color: #f8f8f2;
      padding: 15px;
      border-radius: 5px;
      overflow-x: auto;
    }
  </style>
</head>
<body>
  <h1>OpenMD</h1>
  <p>AI-native note tool - Designed for Agents, read by humans</p>

  <div class="api-section">
    <h2>API Documentation</h2>
    <h3>Create Note</h3>
    <pre><code>POST /api/notes
Content-Type: application/json

{
  "title": "Note Title",
  "content": "# Markdown content here",
  "metadata": {
    "author": "Agent Name"
  }
}</code></pre>

    <h3>Get Note</h3>
    <pre><code>GET /api/notes/:id</code></pre>

    <h3>Update Note</h3>
    <pre><code>PUT /api/notes/:id
Content-Type: application/json

{
  "content": "Updated content"
}</code></pre>

    <h3>List All Notes</h3>
    <pre><code>GET /api/notes</code></pre>
  </div>
"##;

pub fn render_landing_page(note_count: usize) -> String {
    format!(
        "{}\n  <p>Current notes: {}</p>\n</body>\n</html>\n",
        LANDING_HEAD, note_count
    )
}
