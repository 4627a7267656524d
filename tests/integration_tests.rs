// Integration tests for PEAL Match

use peal_match::core::{Matcher, RECOMMENDATION_LIMIT};
use peal_match::models::{
    Availability, MatchingCriteria, MentorCandidate, PublicUser, RequesterProfile, SearchFilters,
};
use peal_match::services::{CachedDirectory, MatchError, MatchingService, MemoryDirectory};
use std::sync::Arc;

const SKILLS: &[&str] = &[
    "Leadership", "Finance", "Marketing Strategy", "Public Speaking", "Product Management",
    "Data Science", "Fundraising", "Negotiation", "UX Design", "Software Engineering",
];

const CITIES: &[&str] = &["Austin, TX", "Lagos", "Berlin", "Nairobi", "São Paulo"];

fn create_candidate(i: u32) -> MentorCandidate {
    let availability = match i % 4 {
        0 => Availability::Available,
        1 => Availability::Busy,
        2 => Availability::Unavailable,
        _ => Availability::Available,
    };

    MentorCandidate {
        id: format!("mentor_{}", i),
        // Every 7th mentor is owned by the requester
        user_id: if i % 7 == 0 { "requester".to_string() } else { format!("owner_{}", i) },
        bio: Some(format!("Mentor number {}", i)),
        availability,
        years_experience: if i % 5 == 0 { None } else { Some(i % 15) },
        max_mentees: 1 + i % 4,
        current_mentees_count: i % 3,
        accepts_remote: i % 2 == 0,
        skills: vec![
            SKILLS[(i as usize) % SKILLS.len()].to_string(),
            SKILLS[(i as usize * 3 + 1) % SKILLS.len()].to_string(),
        ],
        user: PublicUser {
            id: format!("owner_{}", i),
            name: format!("Mentor {}", i),
            avatar_url: None,
            location: Some(CITIES[(i as usize) % CITIES.len()].to_string()),
            bio: None,
        },
    }
}

fn create_pool(size: u32) -> Vec<MentorCandidate> {
    (0..size).map(create_candidate).collect()
}

fn create_requester() -> RequesterProfile {
    RequesterProfile {
        user_id: "requester".to_string(),
        skills: vec!["leadership".to_string(), "finance".to_string(), "market".to_string()],
        interests: vec!["design".to_string(), "speaking".to_string()],
        location: Some("Austin".to_string()),
    }
}

fn eligible_count(pool: &[MentorCandidate], requester: &RequesterProfile) -> usize {
    pool.iter()
        .filter(|c| c.user_id != requester.user_id)
        .filter(|c| c.availability != Availability::Unavailable)
        .filter(|c| c.current_mentees_count < c.max_mentees)
        .count()
}

#[test]
fn test_integration_invariants_hold_for_pool() {
    let matcher = Matcher::with_default_weights();
    let requester = create_requester();
    let pool = create_pool(200);

    for limit in [0, 1, 5, 10, 50, 500] {
        let result = matcher.find_matches(&requester, &pool, None, limit);

        assert!(result.len() <= limit);
        assert!(result.len() <= eligible_count(&pool, &requester));

        for m in &result {
            let candidate = pool.iter().find(|c| c.id == m.mentor_id).unwrap();
            assert_ne!(candidate.user_id, requester.user_id);
            assert_ne!(candidate.availability, Availability::Unavailable);
            assert!(candidate.current_mentees_count < candidate.max_mentees);
        }

        for pair in result.windows(2) {
            assert!(pair[0].score >= pair[1].score, "Matches not sorted by score");
        }
    }

    let everything = matcher.find_matches(&requester, &pool, None, usize::MAX);
    assert_eq!(everything.len(), eligible_count(&pool, &requester));
}

#[test]
fn test_integration_idempotent() {
    let matcher = Matcher::with_default_weights();
    let requester = create_requester();
    let pool = create_pool(100);
    let criteria = MatchingCriteria {
        min_experience: Some(3.0),
        accepts_remote: Some(true),
        ..Default::default()
    };

    let first = matcher.find_matches(&requester, &pool, Some(&criteria), 10);
    let second = matcher.find_matches(&requester, &pool, Some(&criteria), 10);

    assert_eq!(first, second);
}

#[test]
fn test_integration_min_experience_and_remote() {
    let matcher = Matcher::with_default_weights();
    let requester = create_requester();
    let pool = create_pool(100);
    let criteria = MatchingCriteria {
        min_experience: Some(5.0),
        accepts_remote: Some(true),
        ..Default::default()
    };

    let result = matcher.find_matches(&requester, &pool, Some(&criteria), 100);

    assert!(!result.is_empty());
    for m in &result {
        assert!(m.years_experience.is_some_and(|y| y >= 5));
        let candidate = pool.iter().find(|c| c.id == m.mentor_id).unwrap();
        assert!(candidate.accepts_remote);
    }
}

#[test]
fn test_integration_empty_pool() {
    let matcher = Matcher::with_default_weights();
    assert!(matcher.find_matches(&create_requester(), &[], None, 10).is_empty());
    assert!(matcher.recommendations(&create_requester(), &[]).is_empty());
}

#[test]
fn test_integration_search_is_unfiltered_listing() {
    let matcher = Matcher::with_default_weights();
    let pool = create_pool(40);

    let result = matcher.search("market", &pool, None);
    let expected = pool
        .iter()
        .filter(|c| c.skills.iter().any(|s| s.to_lowercase().contains("market")))
        .count();

    assert_eq!(result.len(), expected);
    assert!(result.iter().any(|m| m.availability == Availability::Unavailable));
    assert!(result.iter().all(|m| m.score == 0 && m.matched_skills.is_empty() && m.matched_interests.is_empty()));

    let busy = matcher.search(
        "market",
        &pool,
        Some(&SearchFilters {
            availability: Some(Availability::Busy),
            accepts_remote: None,
        }),
    );
    assert!(busy.iter().all(|m| m.availability == Availability::Busy));
}

#[test]
fn test_integration_service_through_cache() {
    let memory = Arc::new(MemoryDirectory::with_data(vec![create_requester()], create_pool(60)));
    let cached = Arc::new(CachedDirectory::new(memory, 100, 60));
    let service = MatchingService::new(cached, Matcher::default());

    let recommendations = tokio_test::block_on(service.recommendations("requester")).unwrap();
    assert_eq!(recommendations.len(), RECOMMENDATION_LIMIT);

    let matches = tokio_test::block_on(service.find_matches("requester", None, 10)).unwrap();
    assert_eq!(&matches[..RECOMMENDATION_LIMIT], &recommendations[..]);

    let missing = tokio_test::block_on(service.find_matches("stranger", None, 10));
    assert!(matches!(missing, Err(MatchError::NotFound(_))));
}

#[tokio::test]
async fn test_integration_service_criteria_prefilter() {
    let directory = Arc::new(MemoryDirectory::with_data(vec![create_requester()], create_pool(60)));
    let service = MatchingService::new(directory, Matcher::default());

    let criteria = MatchingCriteria {
        skills: Some(vec!["UX".to_string()]),
        availability: Some(Availability::Busy),
        ..Default::default()
    };

    let result = service.find_matches("requester", Some(&criteria), 50).await.unwrap();

    assert!(!result.is_empty());
    assert!(result.iter().all(|m| m.availability == Availability::Busy));
    assert!(result
        .iter()
        .filter(|m| m.profile.skills.iter().any(|s| s == "UX Design"))
        .all(|m| m.matched_skills == vec!["ux"]));
}
