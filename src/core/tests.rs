#[cfg(test)]
mod tests {
    use crate::core::{
        AnimationCue, FormPhase, RevealEvent, ViewportMargin, WaitlistError, WaitlistFields,
        WaitlistState, stagger_delay,
    };
    use std::time::Duration;

    fn submit_pair(name: &str, email: &str) -> (WaitlistState, Result<(), WaitlistError>) {
        let mut form = WaitlistState::new(WaitlistFields::NameAndEmail);
        form.set_name(name);
        form.set_email(email);
        let result = form.submit().map(|_| ());
        (form, result)
    }

    #[test]
    fn test_blank_name_scenario() {
        let (form, result) = submit_pair("", "a@b.com");

        assert_eq!(result, Err(WaitlistError::BlankName));
        assert_eq!(form.phase(), FormPhase::Editing);
        assert_eq!(form.name(), "");
        assert_eq!(form.email(), "a@b.com");
    }

    #[test]
    fn test_valid_pair_scenario() {
        let (form, result) = submit_pair("Jo", "jo@example.com");

        assert!(result.is_ok());
        assert_eq!(form.phase(), FormPhase::Submitted);
        assert_eq!(form.name(), "");
        assert_eq!(form.email(), "");
    }

    #[test]
    fn test_non_blank_pairs_always_submit() {
        let pairs = [
            ("Jo", "jo@example.com"),
            ("  Ana María  ", "ana@correo.es"),
            ("X", "x@y"),
            ("Dr. Grace O'Hara", "grace+waitlist@forest.camp"),
        ];

        for (name, email) in pairs {
            let (form, result) = submit_pair(name, email);
            assert!(result.is_ok(), "{name} / {email} should submit");
            assert!(form.is_submitted());
            assert_eq!((form.name(), form.email()), ("", ""));
        }
    }

    #[test]
    fn test_blank_inputs_never_submit() {
        let pairs = [("Jo", ""), ("Jo", " \t"), ("", "a@b.com"), ("   ", "a@b.com"), ("", "")];

        for (name, email) in pairs {
            let (form, result) = submit_pair(name, email);
            assert!(result.is_err());
            assert_eq!(form.phase(), FormPhase::Editing);
            assert_eq!(form.name(), name);
            assert_eq!(form.email(), email);
        }
    }

    #[test]
    fn test_retry_after_failure() {
        let mut form = WaitlistState::new(WaitlistFields::NameAndEmail);
        form.set_email("jo@example.com");
        assert!(form.submit().is_err());

        form.set_name("Jo");
        let entry = form.submit().expect("second attempt is valid");
        assert_eq!(entry.name.as_deref(), Some("Jo"));
        assert!(form.is_submitted());
    }

    #[test]
    fn test_sibling_group_staggering() {
        let cues: Vec<AnimationCue> = (0..4)
            .map(|i| AnimationCue::new(i).on_enter_viewport(ViewportMargin::CARD))
            .collect();

        for (i, cue) in cues.iter().enumerate() {
            let animation = cue.animation();
            assert_eq!(animation.delay, Duration::from_millis(150 * i as u64));
            assert_eq!(animation.delay, stagger_delay(cue.index));
            assert_eq!(animation.duration, Duration::from_millis(700));
        }
    }

    #[test]
    fn test_viewport_reveal_scrolled_into_view_twice() {
        let cue = AnimationCue::new(2).on_enter_viewport(ViewportMargin::SECTION);
        let mut observer = cue.observer();

        let events: Vec<RevealEvent> = [false, true, false, true, false]
            .into_iter()
            .filter_map(|intersecting| observer.observe(intersecting))
            .collect();

        assert_eq!(events, vec![RevealEvent::Show]);
    }
}
