// Unit tests for the candidate filter, browse session, swipe machine and navigation

use matrimony_core::core::browse::BrowseSession;
use matrimony_core::core::filters::{matches_criteria, visible_queue, FilterError};
use matrimony_core::core::navigation::{footer_tabs, resolve, Screen, TabKind};
use matrimony_core::core::swipe::{rotation_for, AnimationKind, SwipeMachine, SwipePhase};
use matrimony_core::models::{
    seed::default_pool, AgeBracket, CandidateProfile, Choice, FilterCriteria, Gender,
};
use std::collections::HashSet;

fn create_test_profile(
    id: &str,
    name: &str,
    age: u8,
    gender: Gender,
    religion: &str,
    location: &str,
) -> CandidateProfile {
    CandidateProfile {
        id: id.to_string(),
        name: name.to_string(),
        age,
        gender,
        religion: religion.to_string(),
        caste: String::new(),
        location: location.to_string(),
        bio: String::new(),
        photo_ref: String::new(),
    }
}

fn ids(queue: &[&CandidateProfile]) -> Vec<String> {
    queue.iter().map(|p| p.id.clone()).collect()
}

fn excluded(ids: &[&str]) -> HashSet<String> {
    ids.iter().map(|s| s.to_string()).collect()
}

/// Queue with no structured criteria
fn unfiltered<'a>(
    pool: &'a [CandidateProfile],
    dismissed: &HashSet<String>,
    gender: Gender,
    search: &str,
) -> Vec<&'a CandidateProfile> {
    visible_queue(pool, dismissed, gender, search, &FilterCriteria::default()).unwrap()
}

#[test]
fn test_default_queue_for_male_viewer() {
    let pool = default_pool();
    let queue = unfiltered(&pool, &HashSet::new(), Gender::Male, "");
    assert_eq!(ids(&queue), vec!["1", "3", "5"]);
}

#[test]
fn test_rejected_id_excluded_for_female_viewer() {
    let pool = default_pool();
    let queue = unfiltered(&pool, &excluded(&["2"]), Gender::Female, "");
    assert_eq!(ids(&queue), vec!["4"]);
}

#[test]
fn test_search_is_case_insensitive_substring() {
    let pool = default_pool();
    let queue = unfiltered(&pool, &HashSet::new(), Gender::Male, "pri");
    assert_eq!(ids(&queue), vec!["1"]);

    let queue = unfiltered(&pool, &HashSet::new(), Gender::Male, "zzz");
    assert!(queue.is_empty());
}

#[test]
fn test_excluded_ids_never_appear() {
    let pool = default_pool();
    let dismissed = excluded(&["1", "5"]);

    for search in ["", "a", "neha"] {
        let queue = unfiltered(&pool, &dismissed, Gender::Male, search);
        assert!(queue.iter().all(|p| !dismissed.contains(&p.id)));
    }
}

#[test]
fn test_queue_preserves_pool_order() {
    let pool = vec![
        create_test_profile("c", "Zoya", 26, Gender::Female, "Muslim", "Pune"),
        create_test_profile("a", "Asha", 30, Gender::Female, "Hindu", "Pune"),
        create_test_profile("b", "Bina", 24, Gender::Female, "Hindu", "Delhi"),
    ];
    let queue = unfiltered(&pool, &HashSet::new(), Gender::Male, "");
    assert_eq!(ids(&queue), vec!["c", "a", "b"]);
}

#[test]
fn test_adding_criteria_only_narrows() {
    let pool = vec![
        create_test_profile("1", "Asha", 24, Gender::Female, "Hindu", "Pune"),
        create_test_profile("2", "Bina", 29, Gender::Female, "Hindu", "Delhi"),
        create_test_profile("3", "Zoya", 33, Gender::Female, "Muslim", "Pune"),
        create_test_profile("4", "Dev", 29, Gender::Male, "Hindu", "Pune"),
    ];

    let base = unfiltered(&pool, &HashSet::new(), Gender::Male, "");

    let religion = FilterCriteria {
        religion: Choice::from("Hindu"),
        ..Default::default()
    };
    let narrowed = visible_queue(&pool, &HashSet::new(), Gender::Male, "", &religion).unwrap();
    assert!(narrowed.iter().all(|p| base.contains(p)));

    let location = FilterCriteria {
        location: Choice::from("Pune"),
        ..religion.clone()
    };
    let narrower = visible_queue(&pool, &HashSet::new(), Gender::Male, "", &location).unwrap();
    assert!(narrower.iter().all(|p| narrowed.contains(p)));
    assert_eq!(ids(&narrower), vec!["1"]);
}

#[test]
fn test_age_bracket_boundaries() {
    let bracket: AgeBracket = "26-30".parse().unwrap();
    let criteria = FilterCriteria {
        age: bracket,
        ..Default::default()
    };

    let at = |age| create_test_profile("x", "X", age, Gender::Female, "Hindu", "Pune");
    assert!(!matches_criteria(&at(25), &criteria));
    assert!(matches_criteria(&at(26), &criteria));
    assert!(matches_criteria(&at(30), &criteria));
    assert!(!matches_criteria(&at(31), &criteria));

    let open: AgeBracket = "41+".parse().unwrap();
    assert!(open.contains(41));
    assert!(open.contains(90));
    assert!(!open.contains(40));
}

#[test]
fn test_invalid_age_bracket() {
    assert!(matches!("30-20".parse::<AgeBracket>(), Err(FilterError::InvalidAgeBracket(_))));
    assert!(matches!("old".parse::<AgeBracket>(), Err(FilterError::InvalidAgeBracket(_))));
}

#[test]
fn test_other_viewer_gender_is_an_error() {
    let pool = default_pool();
    let criteria = FilterCriteria::default();
    let result = visible_queue(&pool, &HashSet::new(), Gender::Other, "", &criteria);
    assert_eq!(result.unwrap_err(), FilterError::UnsupportedViewerGender(Gender::Other));
}

#[test]
fn test_religion_change_resets_caste() {
    let mut criteria = FilterCriteria::default();
    criteria.set_religion(Choice::from("Hindu"));
    criteria.caste = Choice::from("Brahmin");

    criteria.set_religion(Choice::from("Hindu"));
    assert_eq!(criteria.caste, Choice::from("Brahmin"));

    criteria.set_religion(Choice::from("Sikh"));
    assert!(criteria.caste.is_any());
}

#[test]
fn test_location_filter_then_like_exhausts_queue() {
    let pool = vec![
        create_test_profile("A", "Aarti", 25, Gender::Female, "Hindu", "Mumbai"),
        create_test_profile("B", "Bushra", 30, Gender::Female, "Muslim", "Delhi"),
    ];
    let mut session = BrowseSession::new(
        pool,
        Gender::Male,
        Default::default(),
        SwipeMachine::new(400.0, 200),
    );

    session
        .apply_criteria(FilterCriteria {
            location: Choice::from("Mumbai"),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(ids(&session.queue().unwrap()), vec!["A"]);

    session.begin_gesture().unwrap();
    session.drag_to(150.0).unwrap();
    session.release().unwrap();
    let commit = session.finish_animation().unwrap().unwrap();
    assert_eq!(commit.profile.id, "A");

    let liked: Vec<&str> = session.interactions().liked.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(liked, vec!["A"]);
    assert!(session.interactions().rejected.is_empty());
    assert_eq!(session.index(), 1);
    assert!(session.is_exhausted().unwrap());
}

#[test]
fn test_swipe_threshold_is_strict() {
    let mut machine = SwipeMachine::new(400.0, 200);
    machine.begin().unwrap();
    machine.drag_to(100.0).unwrap();

    let animation = machine.release().unwrap();
    assert_eq!(machine.phase(), SwipePhase::Returning);
    assert_eq!(animation.kind, AnimationKind::Spring);
    assert_eq!(machine.finish().unwrap(), None);
}

#[test]
fn test_rotation_interpolation() {
    assert_eq!(rotation_for(0.0, 400.0), 0.0);
    assert_eq!(rotation_for(200.0, 400.0), 10.0);
    assert_eq!(rotation_for(-200.0, 400.0), -10.0);
    assert_eq!(rotation_for(100.0, 400.0), 5.0);
}

#[test]
fn test_navigation_gating() {
    assert_eq!(resolve(Screen::Browse, false, false), Screen::Onboarding);
    assert_eq!(resolve(Screen::Login, false, false), Screen::Login);
    assert_eq!(resolve(Screen::Browse, true, false), Screen::CreateProfile);
    assert_eq!(resolve(Screen::Likes, true, true), Screen::Likes);
}

#[test]
fn test_chat_marks_messages_tab_active() {
    let tabs = footer_tabs(&Screen::Chat {
        user_id: "3".to_string(),
    });
    let active: Vec<TabKind> = tabs.iter().filter(|t| t.active).map(|t| t.name).collect();
    assert_eq!(active, vec![TabKind::Messages]);
    assert_eq!(tabs.len(), 4);
}
