use std::time::Duration;

use sumz_core::{
    update, AppState, Article, CopyFeedback, Effect, Msg, COPY_FEEDBACK_TIMEOUT,
};

fn with_articles(urls: &[&str]) -> AppState {
    let articles = urls
        .iter()
        .map(|url| Article::new(*url, format!("summary of {url}")))
        .collect();
    let (state, _) = update(AppState::new(), Msg::RestoreArticles(articles));
    state
}

fn copied_urls(state: &AppState) -> Vec<String> {
    state
        .view()
        .articles
        .into_iter()
        .filter(|row| row.copied)
        .map(|row| row.url)
        .collect()
}

#[test]
fn copy_sets_feedback_and_schedules_reset() {
    let state = with_articles(&["https://x.example.com"]);
    let (state, effects) = update(state, Msg::CopyClicked { index: 0 });

    assert_eq!(
        effects,
        vec![
            Effect::WriteClipboard {
                text: "https://x.example.com".into()
            },
            Effect::ScheduleCopyReset {
                generation: 1,
                after: COPY_FEEDBACK_TIMEOUT,
            },
        ]
    );
    assert_eq!(COPY_FEEDBACK_TIMEOUT, Duration::from_millis(2000));
    assert_eq!(
        state.copy_feedback(),
        Some(&CopyFeedback {
            url: "https://x.example.com".into(),
            generation: 1
        })
    );
    assert_eq!(copied_urls(&state), vec!["https://x.example.com".to_string()]);
}

#[test]
fn reset_clears_feedback() {
    let state = with_articles(&["https://x.example.com"]);
    let (state, _) = update(state, Msg::CopyClicked { index: 0 });
    let (state, _) = update(state, Msg::CopyFeedbackExpired { generation: 1 });

    assert_eq!(state.copy_feedback(), None);
    assert!(copied_urls(&state).is_empty());
}

#[test]
fn newer_copy_survives_older_timer() {
    let state = with_articles(&["https://x.example.com", "https://y.example.com"]);
    let (state, _) = update(state, Msg::CopyClicked { index: 0 });
    let (state, effects) = update(state, Msg::CopyClicked { index: 1 });
    assert_eq!(
        effects[1],
        Effect::ScheduleCopyReset {
            generation: 2,
            after: COPY_FEEDBACK_TIMEOUT
        }
    );

    // X's timer fires while Y is active.
    let (state, _) = update(state, Msg::CopyFeedbackExpired { generation: 1 });
    assert_eq!(copied_urls(&state), vec!["https://y.example.com".to_string()]);

    let (state, _) = update(state, Msg::CopyFeedbackExpired { generation: 2 });
    assert!(copied_urls(&state).is_empty());
}

#[test]
fn copying_the_same_url_twice_restarts_the_window() {
    let state = with_articles(&["https://x.example.com"]);
    let (state, _) = update(state, Msg::CopyClicked { index: 0 });
    let (state, _) = update(state, Msg::CopyClicked { index: 0 });
    let (state, _) = update(state, Msg::CopyFeedbackExpired { generation: 1 });

    assert_eq!(state.copy_feedback().map(|c| c.generation), Some(2));
}

#[test]
fn copy_of_unknown_index_is_ignored() {
    let state = with_articles(&["https://x.example.com"]);
    let (next, effects) = update(state.clone(), Msg::CopyClicked { index: 5 });

    assert!(effects.is_empty());
    assert_eq!(next, state);
}

#[test]
fn custom_copy_timeout_is_scheduled() {
    let state = AppState::with_copy_timeout(Duration::from_millis(50));
    let (state, _) = update(
        state,
        Msg::RestoreArticles(vec![Article::new("https://x.example.com", "s")]),
    );
    let (_, effects) = update(state, Msg::CopyClicked { index: 0 });

    assert!(effects.contains(&Effect::ScheduleCopyReset {
        generation: 1,
        after: Duration::from_millis(50)
    }));
}

#[test]
fn restore_drops_feedback_for_missing_url() {
    let state = with_articles(&["https://x.example.com"]);
    let (state, _) = update(state, Msg::CopyClicked { index: 0 });
    let (state, _) = update(
        state,
        Msg::RestoreArticles(vec![Article::new("https://z.example.com", "z")]),
    );

    assert_eq!(state.copy_feedback(), None);
}
