//! Typed slide variants.

use serde::{Deserialize, Serialize};

/// One typed unit of Story content.
///
/// The variant set is closed: a generated slide carrying any other `type`
/// tag is rejected during validation rather than coerced or dropped.
///
/// # Examples
///
/// ```
/// use backpage_core::Slide;
///
/// let slide = Slide::Headline {
///     text: "DERBY DAY DEMOLITION".to_string(),
///     subtext: "United run riot at Old Trafford".to_string(),
/// };
/// let json = serde_json::to_string(&slide).unwrap();
/// assert!(json.contains("\"type\":\"headline\""));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Slide {
    /// Opening splash: short punchy headline plus one-line subtext
    Headline {
        /// Headline text, ALL CAPS by convention
        text: String,
        /// One-sentence expansion of the headline
        subtext: String,
    },
    /// A single statistic with narrative context
    Stat {
        /// Short label, e.g. "FINAL SCORE"
        stat_label: String,
        /// The value, formatted for visual impact, e.g. "124 - 104"
        stat_value: String,
        /// One sentence of context for the stat
        narrative: String,
    },
    /// Closing call-to-action for the fanbase
    Cta {
        /// Fanbase label, e.g. an account-handle style string
        text: String,
        /// One-line engagement prompt
        subtext: String,
    },
}

impl Slide {
    /// The wire tag for this slide's variant.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Headline { .. } => "headline",
            Self::Stat { .. } => "stat",
            Self::Cta { .. } => "cta",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_tagged_representation() {
        let json = r#"{"type":"stat","stat_label":"FINAL SCORE","stat_value":"2 - 0","narrative":"A clean sheet and total control."}"#;
        let slide: Slide = serde_json::from_str(json).unwrap();
        assert_eq!(slide.tag(), "stat");
        assert_eq!(serde_json::to_string(&slide).unwrap(), json);
    }

    #[test]
    fn unknown_tag_fails_deserialization() {
        let json = r#"{"type":"poll","question":"Best player?"}"#;
        assert!(serde_json::from_str::<Slide>(json).is_err());
    }
}
