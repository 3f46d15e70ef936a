use crate::sections::{Section, INVITATION_SECTIONS, PORTFOLIO_SECTIONS};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Invitation,
    Portfolio,
    NotFound,
}

impl Route {
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" | "/invitation" | "/index.html" => Route::Invitation,
            "/portfolio" => Route::Portfolio,
            _ => Route::NotFound,
        }
    }

    pub fn sections(self) -> &'static [Section] {
        match self {
            Route::Invitation => &INVITATION_SECTIONS,
            Route::Portfolio => &PORTFOLIO_SECTIONS,
            Route::NotFound => &[],
        }
    }

    /// Only the invitation has the 3D walk-through behind it.
    pub fn has_scene(self) -> bool {
        matches!(self, Route::Invitation)
    }
}
