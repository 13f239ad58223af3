use super::*;

#[test]
fn next_walks_the_total_order() {
    let mut walked = vec![Stage::Arriving];
    while let Some(n) = walked.last().copied().and_then(Stage::next) {
        walked.push(n);
    }
    assert_eq!(walked, Stage::ALL.to_vec());
    assert!(Stage::ALL.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn only_afterglow_is_terminal() {
    for s in Stage::ALL {
        assert_eq!(s.is_terminal(), s == Stage::Afterglow);
    }
}

#[test]
fn breath_runs_in_present_and_active() {
    let breathing: Vec<Stage> = Stage::ALL.into_iter().filter(|s| s.breathes()).collect();
    assert_eq!(breathing, vec![Stage::Present, Stage::Active]);
}

#[test]
fn names_serialize_lowercase() {
    assert_eq!(
        serde_json::to_string(&Stage::Resonant).unwrap(),
        "\"resonant\""
    );
    assert_eq!(Stage::Afterglow.to_string(), "afterglow");
}
