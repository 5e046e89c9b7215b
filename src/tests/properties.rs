use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn no_backslash_pairs() -> Vec<Delimiter> {
    vec![
        Delimiter::new("$$", "$$", true).unwrap(),
        Delimiter::new("[", "]", true).unwrap(),
        Delimiter::new("(", ")", false).unwrap(),
    ]
}

proptest! {
    #[test]
    fn text_without_left_is_one_segment(input in "[^(]*") {
        prop_assert_eq!(split(&input, "(", ")", false), vec![text(&input)]);
    }

    #[test]
    fn one_pass_round_trips(input in r"[ab (){}\\]{0,40}") {
        let segments = split(&input, "(", ")", false);
        prop_assert_eq!(reassemble(&segments, "(", ")"), input);
    }

    #[test]
    fn one_pass_round_trips_multi_character(input in r"[ab \[\]{}\\]{0,40}") {
        let segments = split(&input, "[[", "]]", true);
        prop_assert_eq!(reassemble(&segments, "[[", "]]"), input);
    }

    #[test]
    fn one_pass_is_idempotent(input in r"[ab $(){}\\]{0,40}") {
        let once = split(&input, "$", "$", false);
        let twice = split_at_delimiters(once.clone(), "$", "$", false).unwrap();
        prop_assert_eq!(merged(&twice), merged(&once));
    }

    #[test]
    fn pipeline_is_idempotent(input in r"[ab $()\[\]]{0,40}") {
        let delimiters = no_backslash_pairs();
        let once = split_with_delimiters(&input, &delimiters).unwrap();
        let twice = delimiters.iter().fold(once.clone(), |segments, d| {
            split_at_delimiters(segments, &d.left, &d.right, d.display).unwrap()
        });
        prop_assert_eq!(merged(&twice), merged(&once));
    }

    #[test]
    fn walking_never_changes_text_it_cannot_split(input in "[^<&$\\\\]{0,60}") {
        let wrapped = format!("<p>{}</p>", input);
        let output = render_html(&wrapped, None).unwrap();
        prop_assert_eq!(output, format!("<p>{}</p>", input.replace('>', "&gt;").replace('"', "&quot;")));
    }
}

#[test]
fn rerun_over_unclosed_lefts_adds_only_empty_text() {
    let delimiters = no_backslash_pairs();
    let once = split_with_delimiters("[([", &delimiters).unwrap();
    let twice = delimiters.iter().fold(once.clone(), |segments, d| {
        split_at_delimiters(segments, &d.left, &d.right, d.display).unwrap()
    });

    assert_ne!(twice, once);
    assert_eq!(merged(&twice), vec![text("[([")]);
    assert_eq!(merged(&once), vec![text("[([")]);
}
