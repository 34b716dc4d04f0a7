//! Subtitle handling strategy resolution.

use crate::config::CoreConfig;

/// How subtitles are handled for one file. The four modes are mutually
/// exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubtitleStrategy {
    /// No burn-in; the output carries no subtitles.
    SoftDisabled,
    /// Burn a text subtitle stream read directly from the input container.
    BurnFromContainer,
    /// Extract the subtitle stream to an intermediate file first, then
    /// burn from that file.
    BurnViaExtraction,
    /// Overlay a picture-based subtitle stream through a filter graph.
    BurnPictureOverlay,
}

/// Classifies the configured subtitle handling.
///
/// Pure function of the configuration flags; stream content never changes
/// the outcome. Disabled wins over everything, picture overlay over
/// extraction, extraction over direct burn.
pub fn resolve_strategy(config: &CoreConfig) -> SubtitleStrategy {
    if config.disable_subtitles {
        SubtitleStrategy::SoftDisabled
    } else if config.picture_based_subtitles {
        SubtitleStrategy::BurnPictureOverlay
    } else if config.extract_subtitles_first {
        SubtitleStrategy::BurnViaExtraction
    } else {
        SubtitleStrategy::BurnFromContainer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_direct_burn() {
        let config = CoreConfig::default();
        assert_eq!(resolve_strategy(&config), SubtitleStrategy::BurnFromContainer);
    }

    #[test]
    fn test_each_flag_selects_its_mode() {
        let mut config = CoreConfig::default();
        config.disable_subtitles = true;
        assert_eq!(resolve_strategy(&config), SubtitleStrategy::SoftDisabled);

        let mut config = CoreConfig::default();
        config.picture_based_subtitles = true;
        assert_eq!(resolve_strategy(&config), SubtitleStrategy::BurnPictureOverlay);

        let mut config = CoreConfig::default();
        config.extract_subtitles_first = true;
        assert_eq!(resolve_strategy(&config), SubtitleStrategy::BurnViaExtraction);
    }

    #[test]
    fn test_precedence_when_flags_combine() {
        // Disabled beats everything
        let mut config = CoreConfig::default();
        config.disable_subtitles = true;
        config.picture_based_subtitles = true;
        config.extract_subtitles_first = true;
        assert_eq!(resolve_strategy(&config), SubtitleStrategy::SoftDisabled);

        // Picture overlay beats extraction
        let mut config = CoreConfig::default();
        config.picture_based_subtitles = true;
        config.extract_subtitles_first = true;
        assert_eq!(resolve_strategy(&config), SubtitleStrategy::BurnPictureOverlay);
    }
}
