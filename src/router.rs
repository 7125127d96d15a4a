//! Page classification.
//!
//! Every navigation path maps to exactly one page kind; there is no unknown
//! page. Classification is substring matching on the path, with landing as
//! the default when neither distinguishing fragment is present.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Landing,
    IframeEmbed,
    ProjectsTeam,
}

impl PageKind {
    /// Path fragment that selects this page, if it has one. Landing is the
    /// default and has no fragment of its own.
    pub fn path_fragment(self) -> Option<&'static str> {
        match self {
            PageKind::Landing => None,
            PageKind::IframeEmbed => Some("iframe_page.html"),
            PageKind::ProjectsTeam => Some("projects_team.html"),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PageKind::Landing => "landing",
            PageKind::IframeEmbed => "iframe_embed",
            PageKind::ProjectsTeam => "projects_team",
        }
    }

    pub fn all() -> &'static [PageKind] {
        &[
            PageKind::Landing,
            PageKind::IframeEmbed,
            PageKind::ProjectsTeam,
        ]
    }
}

/// Total classification of a navigation path.
pub fn route(path: &str) -> PageKind {
    for &kind in PageKind::all() {
        if let Some(fragment) = kind.path_fragment() {
            if path.contains(fragment) {
                return kind;
            }
        }
    }
    PageKind::Landing
}
