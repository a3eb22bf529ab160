//! Static copy for the landing page

/// Brand name shown in the nav and footer
pub const BRAND: &str = "Outercamp";

/// Hero background image, served from the `public/` assets dir
pub const HERO_IMAGE: &str = "/images/hero-resort.jpg";

pub const HERO_IMAGE_ALT: &str =
    "Outercamp eco-resort cabins surrounded by tropical forest at golden hour";

/// Anchor id of the waitlist section
pub const WAITLIST_ANCHOR: &str = "waitlist";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeatureIcon {
    Leaf,
    Mountain,
    Droplets,
    Sun,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub icon: FeatureIcon,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: [Feature; 4] = [
    Feature {
        icon: FeatureIcon::Leaf,
        title: "Carbon Neutral",
        description: "100% renewable energy powered with net-zero carbon operations.",
    },
    Feature {
        icon: FeatureIcon::Mountain,
        title: "Wilderness Immersion",
        description: "20 new eco-cabins nestled into untouched forest canopy.",
    },
    Feature {
        icon: FeatureIcon::Droplets,
        title: "Living Waters",
        description: "Natural swimming pools and restored wetland sanctuaries.",
    },
    Feature {
        icon: FeatureIcon::Sun,
        title: "Regenerative Dining",
        description: "Farm-to-table cuisine from our permaculture gardens.",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: [FaqEntry; 5] = [
    FaqEntry {
        question: "When does Outercamp 2.0 open?",
        answer: "The expansion welcomes its first guests in 2026. Waitlist members hear about exact dates before anyone else.",
    },
    FaqEntry {
        question: "Where is the expansion?",
        answer: "The new eco-cabins sit on the forested ridge above the original Outercamp, a short trail walk from the main lodge.",
    },
    FaqEntry {
        question: "What do waitlist members get?",
        answer: "Priority booking before public release and exclusive founding rates for the opening season.",
    },
    FaqEntry {
        question: "Does joining the waitlist cost anything?",
        answer: "No. Joining is free and does not commit you to a booking.",
    },
    FaqEntry {
        question: "How will you use my email?",
        answer: "Only to send Outercamp 2.0 updates and your early access invitation. You can unsubscribe at any time.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_titles_are_unique() {
        for (i, a) in FEATURES.iter().enumerate() {
            for b in &FEATURES[i + 1..] {
                assert_ne!(a.title, b.title);
            }
        }
    }

    #[test]
    fn test_faq_entries_are_filled() {
        assert!(FAQS.iter().all(|faq| !faq.question.is_empty() && !faq.answer.is_empty()));
    }
}
