//! Hero background policy for the landing page.
//!
//! The image load itself is a fire-and-forget browser operation (see the
//! `web` module); what it should do on completion is decided here so both
//! outcomes are testable on the host. Either way the hero section ends up in
//! the "loaded" visual state, only the background URL differs.

/// Substitute shown when the real background fails to load.
pub const ERROR_BACKGROUND_IMAGE: &str =
    "https://via.placeholder.com/1600x900/444444/FFFFFF?text=Background+Error";

/// CSS class marking the hero section as ready to display.
pub const HERO_LOADED_CLASS: &str = "loaded";

/// Completion variant of the background probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeroOutcome {
    Loaded,
    Failed,
}

/// Synthesizes the `background-image` value for the hero section: a darkening
/// gradient over the probed image, or over the error substitute when the
/// probe failed.
pub fn hero_background_css(outcome: HeroOutcome, url: &str) -> String {
    let applied = match outcome {
        HeroOutcome::Loaded => url,
        HeroOutcome::Failed => ERROR_BACKGROUND_IMAGE,
    };
    format!("linear-gradient(rgba(0, 0, 0, 0.6), rgba(0, 0, 0, 0.6)), url('{applied}')")
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://example.test/bg.jpg";

    #[test]
    fn loaded_outcome_uses_the_probed_url() {
        let css = hero_background_css(HeroOutcome::Loaded, URL);
        assert!(css.contains(URL));
        assert!(!css.contains(ERROR_BACKGROUND_IMAGE));
    }

    #[test]
    fn failed_outcome_uses_the_error_substitute() {
        let css = hero_background_css(HeroOutcome::Failed, URL);
        assert!(css.contains(ERROR_BACKGROUND_IMAGE));
        assert!(!css.contains(URL));
    }

    #[test]
    fn both_outcomes_share_the_gradient_template() {
        let loaded = hero_background_css(HeroOutcome::Loaded, URL);
        let failed = hero_background_css(HeroOutcome::Failed, URL);
        let prefix = "linear-gradient(rgba(0, 0, 0, 0.6), rgba(0, 0, 0, 0.6)), url(";
        assert!(loaded.starts_with(prefix));
        assert!(failed.starts_with(prefix));
    }
}
