use crate::{
    session::ui::{Notice, Tab},
    utils::html::escape,
};

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; background: #f8fafc; color: #0f172a; }
.header { background: #1e293b; color: white; padding: 1rem 2rem; display: flex; justify-content: space-between; align-items: center; }
.header p { margin: 0; color: #94a3b8; }
.nav a { color: #cbd5e1; margin-left: 1rem; text-decoration: none; padding: .5rem .75rem; border-radius: .375rem; }
.nav a.active { background: #3b82f6; color: white; }
.main { padding: 2rem; max-width: 1200px; margin: 0 auto; }
.card { background: white; border-radius: .5rem; padding: 1.25rem; margin-bottom: 1.5rem; box-shadow: 0 1px 3px rgba(0,0,0,.1); }
.notice { background: #fee2e2; color: #991b1b; padding: .75rem 1rem; border-radius: .375rem; margin-bottom: 1rem; display: flex; justify-content: space-between; }
.table { width: 100%; border-collapse: collapse; }
.table th, .table td { padding: .5rem; text-align: left; border-bottom: 1px solid #e2e8f0; }
.progress-bar { background: #e2e8f0; border-radius: 999px; height: 1rem; overflow: hidden; }
.progress-fill { background: #22c55e; height: 100%; }
.gauges-grid, .leaderboards-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(220px, 1fr)); gap: 1rem; }
.gauge { width: 160px; height: 80px; border-radius: 160px 160px 0 0; margin: 0 auto; }
.text-good { color: #16a34a; } .text-warn { color: #ca8a04; } .text-low { color: #dc2626; }
.modal-overlay { position: fixed; inset: 0; background: rgba(15,23,42,.5); display: flex; align-items: center; justify-content: center; }
.modal { background: white; border-radius: .5rem; padding: 1.5rem; width: 640px; }
.form-grid { display: grid; grid-template-columns: 1fr 1fr; gap: .75rem; }
.footer { text-align: center; color: #64748b; padding: 1rem; }
"#;

pub fn page(active: Tab, notice: Option<&Notice>, body: &str) -> String {
    let nav: String = Tab::ALL
        .iter()
        .map(|tab| {
            let class = if *tab == active { r#" class="active""# } else { "" };
            format!(r#"<a href="{}"{}>{}</a>"#, tab.path(), class, tab.label())
        })
        .collect();

    let notice = notice
        .map(|notice| {
            format!(
                r#"<div class="notice"><span>{}</span><form method="post" action="/notice/dismiss"><button>✕</button></form></div>"#,
                escape(&notice.message)
            )
        })
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="utf-8"><title>Executive Academy Tracker</title><style>{STYLE}</style></head>
<body>
<header class="header">
<div><h1>🎓 Executive Academy Tracker</h1><p>Executive Education Program</p></div>
<nav class="nav">{nav}<form method="post" action="/refresh" style="display:inline"><button>↻</button></form></nav>
</header>
<main class="main">{notice}{body}</main>
<footer class="footer"><p>Executive Academy Tracker</p></footer>
</body>
</html>"#
    )
}

pub fn loading() -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en"><head><meta charset="utf-8"><meta http-equiv="refresh" content="2"><title>Executive Academy Tracker</title><style>{STYLE}</style></head>
<body><div class="main"><p class="loading">Loading...</p></div></body></html>"#
    )
}
