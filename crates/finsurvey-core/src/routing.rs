//! Paths the app serves and which of them need a session.

use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Landing,
    Login,
    Survey,
    ThankYou,
}

impl Page {
    pub fn path(&self) -> &'static str {
        match self {
            Page::Landing => "/",
            Page::Login => "/login",
            Page::Survey => "/survey",
            Page::ThankYou => "/thank-you",
        }
    }

    /// Gated pages redirect to [`Page::Login`] when nobody is signed in
    pub fn requires_session(&self) -> bool {
        matches!(self, Page::Survey | Page::ThankYou)
    }

    pub fn all() -> &'static [Page] {
        &[Page::Landing, Page::Login, Page::Survey, Page::ThankYou]
    }
}

impl FromStr for Page {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim_end_matches('/');
        Page::all()
            .iter()
            .copied()
            .find(|p| p.path().trim_end_matches('/') == trimmed)
            .ok_or_else(|| format!("unknown path: {s}"))
    }
}
