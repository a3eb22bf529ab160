use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::ui::pages::{LandingPage, NotFoundPage};

/// Public URL of the page, provided as context by the server when configured.
/// The landing page renders it as the canonical link and `og:url`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CanonicalUrl(pub String);

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/outercamp.css"/>

        <Title text="Outercamp 2.0"/>

        <Router>
            <main>
                <Routes fallback=NotFoundPage>
                    <Route path=path!("") view=LandingPage/>
                </Routes>
            </main>
        </Router>
    }
}
