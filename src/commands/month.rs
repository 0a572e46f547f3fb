use crate::session::Session;

pub fn previous(session: &mut Session) {
    session.view.previous_month();
}

pub fn next(session: &mut Session) {
    session.view.next_month();
}

pub fn today(session: &mut Session) {
    session.view.go_to_today();
}
