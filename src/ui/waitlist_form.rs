//! Waitlist capture form
//!
//! Renders the native constraints (`required`, `maxlength`, `type="email"`)
//! so the browser's own validation UI is the only feedback. The same rules
//! are checked again in `WaitlistState::submit` before the form flips to its
//! confirmation card.

use leptos::prelude::*;

use crate::core::validation::{MAX_EMAIL_LENGTH, MAX_NAME_LENGTH};
use crate::core::{WaitlistEntry, WaitlistFields, WaitlistState};
use crate::ui::icon::{Icon, IconKind};
use crate::ui::reveal::Reveal;

/// Style policy for the form, picked by the section it sits in
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FormStyle {
    /// Light section background
    #[default]
    Light,
    /// Dark section background
    Dark,
}

impl FormStyle {
    fn input_class(&self) -> &'static str {
        match self {
            FormStyle::Light => {
                "waitlist-input bg-background border-border text-foreground placeholder:text-muted-foreground"
            }
            FormStyle::Dark => {
                "waitlist-input bg-foreground/20 border-sand/30 text-sand-light placeholder:text-sand/60"
            }
        }
    }

    fn button_class(&self) -> &'static str {
        match self {
            FormStyle::Light => "waitlist-button bg-primary text-primary-foreground hover:bg-forest-light",
            FormStyle::Dark => "waitlist-button bg-sand text-foreground hover:bg-sand-light",
        }
    }

    fn confirmation_class(&self) -> &'static str {
        match self {
            FormStyle::Light => "waitlist-confirmation bg-background border-border text-foreground",
            FormStyle::Dark => "waitlist-confirmation bg-foreground/30 border-sand/30 text-sand-light",
        }
    }
}

/// Waitlist form that swaps to a confirmation once submitted
#[component]
pub fn WaitlistForm(
    /// Which inputs to show
    #[prop(default = WaitlistFields::EmailOnly)]
    fields: WaitlistFields,
    #[prop(default = FormStyle::Light)] style: FormStyle,
    /// Stagger index of the form inside its section
    #[prop(default = 0)]
    index: u32,
) -> impl IntoView {
    let state = RwSignal::new(WaitlistState::new(fields));
    let submitted = Memo::new(move |_| state.with(|s| s.is_submitted()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let mut result = None;
        state.update(|s| result = Some(s.submit()));

        match result {
            Some(Ok(entry)) => {
                leptos::logging::log!("{}", accepted_log_line(&entry));
            }
            Some(Err(err)) => {
                leptos::logging::log!("waitlist: submission refused: {err}");
            }
            None => {}
        }
    };

    view! {
        <Show
            when=move || submitted.get()
            fallback=move || {
                view! {
                    <Reveal index=index>
                        <form
                            class="waitlist-form flex flex-col sm:flex-row gap-3 max-w-md mx-auto"
                            on:submit=on_submit
                        >
                            {fields.has_name().then(|| view! {
                                <input
                                    type="text"
                                    name="name"
                                    required=true
                                    maxlength=MAX_NAME_LENGTH.to_string()
                                    autocomplete="name"
                                    placeholder="Your name"
                                    aria-label="Your name"
                                    class=style.input_class()
                                    prop:value=move || state.with(|s| s.name().to_string())
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        state.update(|s| s.set_name(value));
                                    }
                                />
                            })}
                            <input
                                type="email"
                                name="email"
                                required=true
                                maxlength=MAX_EMAIL_LENGTH.to_string()
                                autocomplete="email"
                                placeholder="your@email.com"
                                aria-label="Email address"
                                class=style.input_class()
                                prop:value=move || state.with(|s| s.email().to_string())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    state.update(|s| s.set_email(value));
                                }
                            />
                            <button type="submit" class=style.button_class()>
                                "Notify Me"
                            </button>
                        </form>
                    </Reveal>
                }
            }
        >
            <div class=style.confirmation_class() role="status">
                <Icon kind=IconKind::Leaf class="w-10 h-10 text-primary mx-auto mb-4" />
                <p class="font-serif text-2xl mb-2">"You're on the list"</p>
                <p class="text-sm opacity-70">"We'll be in touch with exclusive updates."</p>
            </div>
        </Show>
    }
}

/// Log line for an accepted entry. The address itself is never logged.
fn accepted_log_line(entry: &WaitlistEntry) -> String {
    format!(
        "waitlist: entry accepted (name given: {})",
        entry.name.is_some()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_styles_share_base_classes() {
        for style in [FormStyle::Light, FormStyle::Dark] {
            assert!(style.input_class().starts_with("waitlist-input "));
            assert!(style.button_class().starts_with("waitlist-button "));
            assert!(style.confirmation_class().starts_with("waitlist-confirmation "));
        }
    }

    #[test]
    fn test_styles_differ() {
        assert_ne!(FormStyle::Light.input_class(), FormStyle::Dark.input_class());
        assert_ne!(FormStyle::Light.button_class(), FormStyle::Dark.button_class());
        assert_eq!(FormStyle::default(), FormStyle::Light);
    }

    #[test]
    fn test_accepted_log_line_omits_address() {
        let entry = WaitlistEntry {
            name: Some("Jo".to_string()),
            email: "jo@example.com".to_string(),
        };
        let line = accepted_log_line(&entry);
        assert_eq!(line, "waitlist: entry accepted (name given: true)");
        assert!(!line.contains("jo@example.com"));
        assert!(!line.contains("Jo"));

        let entry = WaitlistEntry {
            name: None,
            email: "a@b.com".to_string(),
        };
        assert_eq!(
            accepted_log_line(&entry),
            "waitlist: entry accepted (name given: false)"
        );
    }
}
