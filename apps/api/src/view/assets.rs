pub const PAGE_STYLE: &str = r#"
body { margin: 0; display: flex; background: #020617; color: #e2e8f0; font-family: system-ui, sans-serif; }
.sidebar { width: 18rem; min-height: 100vh; background: #0f172a; border-right: 1px solid #1e293b; padding: 1.5rem 1rem; box-sizing: border-box; }
.sidebar h1 { color: #38bdf8; font-weight: 900; margin: 0; }
.sidebar h2 { font-size: .7rem; text-transform: uppercase; color: #64748b; letter-spacing: .08em; }
.sidebar ul { list-style: none; padding: 0; margin: 0 0 1rem; }
.sidebar button { width: 100%; text-align: left; background: none; border: 1px solid transparent; color: #94a3b8; padding: .45rem .75rem; border-radius: .5rem; cursor: pointer; }
.sidebar button.active { color: #38bdf8; border-color: rgba(56,189,248,.2); background: rgba(56,189,248,.1); }
.tagline, footer { font-size: .75rem; color: #64748b; }
main { flex: 1; max-width: 72rem; margin: 0 auto; padding: 2.5rem; }
.pane { min-height: 60vh; display: flex; flex-direction: column; align-items: center; justify-content: center; text-align: center; }
.chips span { margin: 0 .5rem; padding: .25rem .75rem; border: 1px solid #1e293b; border-radius: .25rem; font-family: monospace; }
.spinner { width: 4rem; height: 4rem; border: 4px solid #38bdf8; border-top-color: transparent; border-radius: 50%; animation: spin 1s linear infinite; }
@keyframes spin { to { transform: rotate(360deg); } }
.error h3 { color: #f87171; }
.course-header { display: flex; justify-content: space-between; align-items: center; }
.toggle { color: #94a3b8; }
.toggle.on { color: #38bdf8; }
.toc { position: fixed; right: 1.5rem; top: 6rem; width: 16rem; background: rgba(30,41,59,.95); border: 1px solid #334155; border-radius: .75rem; padding: 1rem; }
.toc a { color: #cbd5e1; text-decoration: none; }
.overview, .section { background: #0f172a; border: 1px solid #334155; border-radius: 1rem; margin-bottom: 2.5rem; overflow: hidden; }
.overview h2 { font-size: .75rem; text-transform: uppercase; padding: .75rem 1.5rem; margin: 0; color: #94a3b8; }
.section header { display: flex; gap: 1rem; padding: 1rem; border-bottom: 1px solid #334155; }
.section header h3 { flex: 1; margin: 0; }
.columns { display: grid; grid-template-columns: repeat(3, 1fr); }
.lang { padding: 1.5rem; }
.lang h4 { font-size: .7rem; text-transform: uppercase; color: #64748b; display: flex; justify-content: space-between; }
.bullet { margin: 0 0 .25rem 1rem; }
.bullet .marker { margin-right: .5rem; }
pre { background: #020617; padding: .75rem; border-radius: .375rem; border: 1px solid #334155; overflow-x: auto; }
code { color: #34d399; font-size: .75rem; }
ruby rt { color: #fb7185; }
.hide-ruby rt, .hide-ruby rp { display: none; }
.speak { background: none; border: none; cursor: pointer; }
.disclaimer { text-align: center; font-style: italic; color: #64748b; }
"#;

pub const PAGE_SCRIPT: &str = r#"
async function post(url, body) {
  await fetch(url, {
    method: 'POST',
    headers: { 'content-type': 'application/json' },
    body: JSON.stringify(body || {}),
  });
}
document.querySelectorAll('[data-topic]').forEach((button) => {
  button.addEventListener('click', async () => {
    await post('/api/v1/session/select', { topic_id: button.dataset.topic });
    window.location.reload();
  });
});
const retry = document.getElementById('retry');
if (retry) {
  retry.addEventListener('click', async () => {
    await post('/api/v1/session/retry');
    window.location.reload();
  });
}
document.querySelectorAll('.speak').forEach((button) => {
  button.addEventListener('click', (event) => {
    event.stopPropagation();
    post('/api/v1/speech', { text: button.dataset.text, lang: button.dataset.lang });
  });
});
"#;
