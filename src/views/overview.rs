use crate::{
    consts::report_const::GOAL_YEAR,
    report::{
        Overview,
        cohort::{CohortStats, FillTier},
        goal::GoalMetrics,
    },
    utils::html::escape,
};

pub fn tier_color(tier: FillTier) -> &'static str {
    match tier {
        FillTier::Good => "#22c55e",
        FillTier::Warn => "#eab308",
        FillTier::Low => "#ef4444",
    }
}

fn tier_class(tier: FillTier) -> &'static str {
    match tier {
        FillTier::Good => "text-good",
        FillTier::Warn => "text-warn",
        FillTier::Low => "text-low",
    }
}

fn goal_card(goal: &GoalMetrics) -> String {
    // ? bar stops at the edge, the label does not
    let bar = goal.percent_complete.min(100.0);
    format!(
        r#"<div class="card goal-card">
<h2>🎯 {year} Goal: {target} Executives Engaged</h2>
<div class="progress-header"><span>Progress</span> <span class="progress-numbers">{confirmed} / {target}</span></div>
<div class="progress-bar"><div class="progress-fill" style="width: {bar:.1}%"></div></div>
<div class="progress-percent">{percent} complete</div>
<div class="stats-grid">
<div class="stat stat-green"><div class="stat-value">{confirmed}</div><div class="stat-label">Confirmed</div></div>
<div class="stat stat-yellow"><div class="stat-value">{invited}</div><div class="stat-label">Invited</div></div>
<div class="stat stat-blue"><div class="stat-value">{to_contact}</div><div class="stat-label">To Contact</div></div>
</div>
</div>"#,
        year = GOAL_YEAR,
        target = goal.goal,
        confirmed = goal.confirmed,
        invited = goal.invited,
        to_contact = goal.to_contact,
        percent = goal.percent_label(),
    )
}

fn gauge(stats: &CohortStats) -> String {
    let color = tier_color(stats.gauge_tier);
    let rotation = stats.gauge_percent / 100.0 * 180.0;
    format!(
        r#"<div class="gauge-container">
<div class="gauge" style="background: conic-gradient(from 270deg, {color} 0deg, {color} {rotation:.1}deg, #e2e8f0 {rotation:.1}deg 180deg, transparent 180deg)"></div>
<div class="gauge-center"><span class="gauge-value" style="color: {color}">{confirmed}</span><span class="gauge-max">/{seats}</span></div>
<div class="gauge-label">{label}</div>
<div class="gauge-percent">{percent:.0}% filled</div>
</div>"#,
        confirmed = stats.confirmed,
        seats = stats.seats,
        label = escape(&stats.name),
        percent = stats.gauge_percent,
    )
}

fn cohort_row(stats: &CohortStats) -> String {
    format!(
        r#"<tr><td class="font-medium">{name}</td><td><span class="region-badge {region_class}">{region}</span></td><td>{date}</td><td>{seats}</td><td class="text-good">{confirmed}</td><td class="text-warn">{invited}</td><td>{to_contact}</td><td class="{tier}">{fill}</td></tr>"#,
        name = escape(&stats.name),
        region_class = escape(&stats.region.to_lowercase()),
        region = escape(&stats.region),
        date = escape(&stats.date),
        seats = stats.seats,
        confirmed = stats.confirmed,
        invited = stats.invited,
        to_contact = stats.to_contact,
        tier = tier_class(stats.fill_tier),
        fill = stats.fill_label(),
    )
}

pub fn render(overview: &Overview) -> String {
    let mut html = goal_card(&overview.goal);

    html.push_str(r#"<div class="section"><h2>📊 Cohort Status (Active &amp; Upcoming)</h2>"#);
    if overview.cohorts.is_empty() {
        html.push_str(r#"<div class="card"><p class="empty">No upcoming cohorts.</p></div>"#);
    } else {
        html.push_str(r#"<div class="gauges-grid">"#);
        for stats in &overview.cohorts {
            html.push_str(&gauge(stats));
        }
        html.push_str("</div>");
    }
    html.push_str("</div>");

    html.push_str(r#"<div class="card"><h3>📈 Cohort Details (Active &amp; Upcoming)</h3>"#);
    if overview.cohorts.is_empty() {
        html.push_str(r#"<p class="empty">No upcoming cohorts to display.</p>"#);
    } else {
        html.push_str(
            "<table class=\"table\"><thead><tr><th>Cohort</th><th>Region</th><th>Date</th><th>Seats</th>\
             <th>Confirmed</th><th>Invited</th><th>To Contact</th><th>Fill %</th></tr></thead><tbody>",
        );
        for stats in &overview.cohorts {
            html.push_str(&cohort_row(stats));
        }
        html.push_str("</tbody></table>");
    }
    html.push_str("</div>");
    html
}
