//! Link construction for catalogue entries and their bibliography codes.

pub const HUMAN_URL_PREFIX: &str = "https://www.astro.keele.ac.uk/jkt/tepcat/planets/";
pub const ARXIV_URL_PREFIX: &str = "https://arxiv.org/abs/";
pub const FALLBACK_URL_PREFIX: &str = "http://adsabs.harvard.edu/abs/";

const ARXIV_CODE_PREFIX: &str = "arXiv";

/// Catalogue page for a single system.
pub fn human_url(system: &str) -> String {
    format!("{HUMAN_URL_PREFIX}{system}.html")
}

/// Citation link for a bibliographic code.
///
/// `arXiv` codes link to the abstract as-is. Everything else goes to ADS, and
/// every `+` in that URL becomes `&`; the ADS query format depends on it.
pub fn reference_url(code: &str) -> String {
    if code.starts_with(ARXIV_CODE_PREFIX) {
        format!("{ARXIV_URL_PREFIX}{code}")
    } else {
        format!("{FALLBACK_URL_PREFIX}{code}").replace('+', "&")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arxiv_code_is_used_verbatim() {
        assert_eq!(
            reference_url("arXiv:1506.02471"),
            "https://arxiv.org/abs/arXiv:1506.02471"
        );
        assert_eq!(
            reference_url("arXiv+1506.02471"),
            "https://arxiv.org/abs/arXiv+1506.02471"
        );
    }

    #[test]
    fn fallback_replaces_every_plus() {
        assert_eq!(
            reference_url("2004ApJ...600L..67B+2005+x"),
            "http://adsabs.harvard.edu/abs/2004ApJ...600L..67B&2005&x"
        );
    }

    #[test]
    fn prefix_match_is_case_sensitive() {
        assert_eq!(
            reference_url("arxiv1506"),
            "http://adsabs.harvard.edu/abs/arxiv1506"
        );
    }

    #[test]
    fn human_url_embeds_system_name() {
        assert_eq!(
            human_url("WASP-12"),
            "https://www.astro.keele.ac.uk/jkt/tepcat/planets/WASP-12.html"
        );
    }
}
