/// Landing page: one button for the briefing, one small form for feedback.
pub const INDEX_HTML: &str = r##"<!doctype html>
<html>
<head>
  <meta charset="utf-8"/>
  <meta name="viewport" content="width=device-width, initial-scale=1"/>
  <title>Feedback DJ</title>
  <style>
    body {
      font-family: ui-monospace, SFMono-Regular, Menlo, monospace;
      padding: 24px;
      background: #fafafa;
    }
    .card {
      max-width: 820px;
      border: 1px solid #ddd;
      border-radius: 12px;
      padding: 16px;
      margin-bottom: 16px;
      background: #fff;
    }
    button {
      padding: 10px 14px;
      border-radius: 10px;
      border: 1px solid #333;
      background: #fff;
      cursor: pointer;
    }
    input, textarea {
      width: 100%;
      box-sizing: border-box;
      margin: 6px 0 10px;
      padding: 8px;
      font-family: inherit;
    }
    pre {
      white-space: pre-wrap;
      word-wrap: break-word;
      background: #f7f7f7;
      padding: 12px;
      border-radius: 10px;
    }
  </style>
</head>
<body>
  <div class="card">
    <h2>Feedback DJ: Today's Customer Signal Mix</h2>
    <p>One-click daily briefing from messy product feedback.</p>
    <button id="btn">Generate Today's Briefing</button>
    <p id="meta"></p>
    <pre id="out">Click the button to generate.</pre>
  </div>

  <div class="card">
    <h3>Drop some feedback</h3>
    <label>Source <input id="source" placeholder="manual"/></label>
    <label>Text <textarea id="text" rows="3"></textarea></label>
    <button id="send">Submit</button>
    <p id="status"></p>
  </div>

  <script>
    const btn = document.getElementById('btn');
    const out = document.getElementById('out');
    const meta = document.getElementById('meta');

    btn.onclick = async () => {
      out.textContent = "Generating…";
      const res = await fetch('/briefing');
      const txt = await res.text();
      const cached = res.headers.get('x-briefing-cached') === 'true';
      meta.textContent = (cached ? "Cached, fetched: " : "Last generated: ") + new Date().toLocaleString();
      out.textContent = txt;
    };

    document.getElementById('send').onclick = async () => {
      const status = document.getElementById('status');
      const res = await fetch('/ingest', {
        method: 'POST',
        headers: { 'Content-Type': 'application/json' },
        body: JSON.stringify({
          source: document.getElementById('source').value,
          text: document.getElementById('text').value
        })
      });
      const body = await res.json();
      status.textContent = res.ok ? ("Saved. " + body.count + " entries.") : body.error;
      if (res.ok) document.getElementById('text').value = "";
    };
  </script>
</body>
</html>"##;
