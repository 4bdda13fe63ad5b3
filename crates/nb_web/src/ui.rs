/// The single page this tool serves: a topic form, two date pickers, and a
/// display area fed by `POST /api/briefing`.
pub const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang='en'>
<head>
<meta charset='utf-8'>
<meta name='viewport' content='width=device-width, initial-scale=1'>
<title>newsbrief</title>
<style>
  body { font-family: system-ui, sans-serif; max-width: 48rem; margin: 2rem auto; padding: 0 1rem; color: #222; }
  h1 { font-size: 1.5rem; }
  form { display: flex; gap: 0.5rem; flex-wrap: wrap; align-items: end; }
  label { display: flex; flex-direction: column; font-size: 0.85rem; gap: 0.2rem; }
  input { padding: 0.4rem; font-size: 1rem; }
  button { padding: 0.45rem 1rem; font-size: 1rem; cursor: pointer; }
  #status { color: #666; }
  #status.error { color: #b00020; }
  #summary { white-space: pre-wrap; background: #f7f7f7; padding: 1rem; border-radius: 6px; }
  #sources li { margin: 0.25rem 0; }
</style>
</head>
<body>
<h1>📰 newsbrief</h1>
<form id='briefing-form'>
  <label>Topic
    <input id='topic' type='text' placeholder='e.g. artificial intelligence' required>
  </label>
  <label>From
    <input id='from' type='date'>
  </label>
  <label>To
    <input id='to' type='date'>
  </label>
  <button type='submit'>Get summary</button>
</form>
<p id='status' hidden></p>
<div id='summary' hidden></div>
<ul id='sources' hidden></ul>
<script>
const form = document.getElementById('briefing-form');
const status = document.getElementById('status');
const summary = document.getElementById('summary');
const sources = document.getElementById('sources');

form.addEventListener('submit', async (event) => {
  event.preventDefault();
  status.hidden = false;
  status.classList.remove('error');
  status.textContent = 'Fetching and summarizing news...';
  summary.hidden = true;
  sources.hidden = true;

  const payload = {
    topic: document.getElementById('topic').value,
    from: document.getElementById('from').value || null,
    to: document.getElementById('to').value || null,
  };

  try {
    const response = await fetch('/api/briefing', {
      method: 'POST',
      headers: { 'Content-Type': 'application/json' },
      body: JSON.stringify(payload),
    });
    const body = await response.json();
    if (!response.ok) {
      status.classList.add('error');
      status.textContent = body.error || 'Something went wrong.';
      return;
    }
    status.hidden = true;
    summary.hidden = false;
    summary.textContent = body.summary;
    sources.innerHTML = '';
    for (const article of body.articles) {
      const item = document.createElement('li');
      const link = document.createElement('a');
      link.href = article.url;
      link.textContent = article.title;
      link.target = '_blank';
      item.appendChild(link);
      item.append(' (' + article.source + ')');
      sources.appendChild(item);
    }
    sources.hidden = body.articles.length === 0;
  } catch (err) {
    status.classList.add('error');
    status.textContent = 'Could not reach the server. Is it still running?';
  }
});
</script>
</body>
</html>
"#;
