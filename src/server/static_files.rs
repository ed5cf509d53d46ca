//! Embedded single-page shell. No map SDK — the pin is shown as text;
//! rendering belongs to whatever embeds the API.

pub const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>GeoPin</title>
  <link rel="stylesheet" href="/style.css">
</head>
<body>
  <main>
    <h1>GeoPin</h1>
    <p class="tagline">Paste a map share link, get its coordinate.</p>
    <form id="pin-form">
      <input id="link" type="text" placeholder="https://maps.app.goo.gl/..." autofocus>
      <label><input id="no-expand" type="checkbox"> already expanded</label>
      <button type="submit">Resolve</button>
    </form>
    <div id="result" hidden>
      <div id="coords"></div>
      <div id="detail"></div>
    </div>
  </main>
  <script src="/app.js"></script>
</body>
</html>
"#;

pub const STYLE_CSS: &str = r#"body {
  font-family: system-ui, sans-serif;
  max-width: 40rem;
  margin: 4rem auto;
  padding: 0 1rem;
  color: #222;
}
.tagline { color: #666; }
#pin-form { display: flex; gap: 0.5rem; align-items: center; }
#link { flex: 1; padding: 0.5rem; }
button { padding: 0.5rem 1rem; }
#result { margin-top: 1.5rem; }
#coords { font-size: 1.4rem; font-weight: 600; }
#detail { color: #666; margin-top: 0.25rem; word-break: break-all; }
"#;

pub const APP_JS: &str = r#"const form = document.getElementById('pin-form');
const result = document.getElementById('result');
const coords = document.getElementById('coords');
const detail = document.getElementById('detail');

form.addEventListener('submit', async (e) => {
  e.preventDefault();
  const link = document.getElementById('link').value.trim();
  if (!link) return;
  const noExpand = document.getElementById('no-expand').checked;
  const params = new URLSearchParams({ link });
  if (noExpand) params.set('expand', 'false');

  const resp = await fetch('/api/pin?' + params);
  if (!resp.ok) {
    coords.textContent = 'Request failed';
    detail.textContent = '';
    result.hidden = false;
    return;
  }
  const pin = await resp.json();
  if (pin.coordinate) {
    coords.textContent = pin.coordinate.lat + ', ' + pin.coordinate.lng;
    detail.textContent = (pin.pattern ? 'via ' + pin.pattern + ' — ' : '')
      + (pin.expanded_url || pin.input);
  } else {
    coords.textContent = 'No coordinate found';
    detail.textContent = pin.expanded_url || '';
  }
  result.hidden = false;
});
"#;
