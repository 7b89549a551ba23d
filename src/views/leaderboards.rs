use crate::{
    report::leaderboard::{Leaderboard, SortKey, SortOrder},
    utils::html::{escape, options},
};

fn sort_form(board: &Leaderboard) -> String {
    let key = match board.sort.key {
        SortKey::Confirmed => "confirmed",
        SortKey::Total => "total",
    };
    let order = match board.sort.order {
        SortOrder::Desc => "desc",
        SortOrder::Asc => "asc",
    };
    format!(
        r#"<form method="post" action="/leaderboards/{slug}/sort"><select name="key" onchange="this.form.submit()">{keys}</select><select name="order" onchange="this.form.submit()">{orders}</select><noscript><button>Sort</button></noscript></form>"#,
        slug = board.kind.slug(),
        keys = options([("confirmed", "By Confirmed"), ("total", "By Contacted")], key),
        orders = options([("desc", "Highest first"), ("asc", "Lowest first")], order),
    )
}

fn board(board: &Leaderboard) -> String {
    let mut html = format!(
        r#"<div class="leaderboard" id="{slug}"><div class="leaderboard-header" style="background-color: {color}"><span>🏆 {title}</span>{sort}</div><div class="leaderboard-body">"#,
        slug = board.kind.slug(),
        color = board.kind.color(),
        title = escape(&board.title),
        sort = sort_form(board),
    );
    for (idx, row) in board.rows.iter().enumerate() {
        let top = if idx < 3 { " top-three" } else { "" };
        html.push_str(&format!(
            r#"<div class="leaderboard-row{top}"><span class="rank rank-{rank}">{rank}</span><span class="rep-name">{name}</span><span class="confirmed">{confirmed} ✓</span><span class="contacted">{total} total</span></div>"#,
            rank = idx + 1,
            name = escape(&row.name),
            confirmed = row.confirmed,
            total = row.total,
        ));
    }
    if board.rows.is_empty() {
        html.push_str(r#"<div class="no-data">No data yet</div>"#);
    }
    html.push_str("</div></div>");
    html
}

pub fn render(boards: &[Leaderboard]) -> String {
    let mut html = String::from(r#"<div class="leaderboards-grid">"#);
    for b in boards {
        html.push_str(&board(b));
    }
    html.push_str("</div>");
    html
}
