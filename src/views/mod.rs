//! Server-rendered HTML for the three tabs.

use crate::session::{Session, ui::Tab};

pub mod invitations;
pub mod layout;
pub mod leaderboards;
pub mod overview;

pub fn render(session: &Session, today: &str) -> String {
    if session.ui.loading {
        return layout::loading();
    }
    let body = match session.ui.tab {
        Tab::Dashboard => overview::render(&session.overview(today)),
        Tab::Invitations => invitations::render(session),
        Tab::Leaderboards => leaderboards::render(&session.leaderboards()),
    };
    layout::page(session.ui.tab, session.ui.notice.as_ref(), &body)
}
