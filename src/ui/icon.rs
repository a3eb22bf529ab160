use leptos::prelude::*;

use crate::core::content::FeatureIcon;

/// Inline stroke icons (lucide geometry, 24x24 viewBox)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconKind {
    Leaf,
    Mountain,
    Droplets,
    Sun,
    ChevronDown,
}

impl From<FeatureIcon> for IconKind {
    fn from(icon: FeatureIcon) -> Self {
        match icon {
            FeatureIcon::Leaf => IconKind::Leaf,
            FeatureIcon::Mountain => IconKind::Mountain,
            FeatureIcon::Droplets => IconKind::Droplets,
            FeatureIcon::Sun => IconKind::Sun,
        }
    }
}

#[component]
pub fn Icon(
    kind: IconKind,
    /// CSS classes for sizing and color
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let paths = match kind {
        IconKind::Leaf => view! {
            <path d="M11 20A7 7 0 0 1 9.8 6.1C15.5 5 17 4.48 19 2c1 2 2 4.18 2 8 0 5.5-4.78 10-10 10Z" />
            <path d="M2 21c0-3 1.85-5.36 5.08-6C9.5 14.52 12 13 13 12" />
        }
        .into_any(),
        IconKind::Mountain => view! {
            <path d="m8 3 4 8 5-5 5 15H2L8 3z" />
        }
        .into_any(),
        IconKind::Droplets => view! {
            <path d="M7 16.3c2.2 0 4-1.83 4-4.05 0-1.16-.57-2.26-1.71-3.19S7.29 6.75 7 5.3c-.29 1.45-1.14 2.84-2.29 3.76S3 11.1 3 12.25c0 2.22 1.8 4.05 4 4.05z" />
            <path d="M12.56 6.6A10.97 10.97 0 0 0 14 3.02c.5 2.5 2 4.9 4 6.5s3 3.5 3 5.5a6.98 6.98 0 0 1-11.91 4.97" />
        }
        .into_any(),
        IconKind::Sun => view! {
            <circle cx="12" cy="12" r="4" />
            <path d="M12 2v2" />
            <path d="M12 20v2" />
            <path d="m4.93 4.93 1.41 1.41" />
            <path d="m17.66 17.66 1.41 1.41" />
            <path d="M2 12h2" />
            <path d="M20 12h2" />
            <path d="m6.34 17.66-1.41 1.41" />
            <path d="m19.07 4.93-1.41 1.41" />
        }
        .into_any(),
        IconKind::ChevronDown => view! {
            <path d="m6 9 6 6 6-6" />
        }
        .into_any(),
    };

    view! {
        <svg
            class=class
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {paths}
        </svg>
    }
}
