// src/extraction/selectors.rs
//! Ordered selector table probed for job description text

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiteHint {
    LinkedIn,
    Indeed,
    Glassdoor,
    Generic,
}

impl fmt::Display for SiteHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SiteHint::LinkedIn => "linkedin",
            SiteHint::Indeed => "indeed",
            SiteHint::Glassdoor => "glassdoor",
            SiteHint::Generic => "generic",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectorRule {
    pub selector: &'static str,
    pub site: SiteHint,
}

const fn rule(selector: &'static str, site: SiteHint) -> SelectorRule {
    SelectorRule { selector, site }
}

/// Probed in order; job-board specific rules first, broad class matches last.
/// `.job-description` is shared by several boards and listed once.
pub const JOB_DESCRIPTION_RULES: &[SelectorRule] = &[
    rule("[data-job-description]", SiteHint::LinkedIn),
    rule(".job-description", SiteHint::LinkedIn),
    rule(".description__text", SiteHint::LinkedIn),
    rule(".show-more-less-html__markup", SiteHint::LinkedIn),
    rule("[data-testid=\"jobDescriptionText\"]", SiteHint::Indeed),
    rule("#jobDescriptionText", SiteHint::Indeed),
    rule(".jobDescriptionContent", SiteHint::Glassdoor),
    rule(".desc", SiteHint::Glassdoor),
    rule(".job-details", SiteHint::Generic),
    rule(".description", SiteHint::Generic),
    rule("[class*=\"description\"]", SiteHint::Generic),
    rule("[class*=\"job\"]", SiteHint::Generic),
    rule("[class*=\"posting\"]", SiteHint::Generic),
];

/// Landmarks tried last; the first match in document order wins
pub const MAIN_CONTENT_SELECTOR: &str = "main, [role=\"main\"], .main, #main";

/// Characters a selector match must exceed
pub const MIN_SELECTOR_CHARS: usize = 100;
/// Characters a user selection must exceed
pub const MIN_SELECTION_CHARS: usize = 50;
/// Characters the main-content landmark must exceed
pub const MIN_MAIN_CONTENT_CHARS: usize = 200;
