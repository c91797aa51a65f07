use indexmap::IndexMap;

use crate::models::ActivityRecord;

// Initial state at process start, in catalog order.
const SEED_ACTIVITIES: &[(&str, &str, &str, u32, &[&str])] = &[
    (
        "Chess Club",
        "Learn strategies and compete in chess tournaments",
        "Fridays, 3:30 PM - 5:00 PM",
        12,
        &["michael@mergington.edu", "daniel@mergington.edu"],
    ),
    (
        "Programming Class",
        "Learn programming fundamentals and build software projects",
        "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        20,
        &["emma@mergington.edu", "sophia@mergington.edu"],
    ),
    (
        "Gym Class",
        "Physical education and sports activities",
        "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        30,
        &["john@mergington.edu", "olivia@mergington.edu"],
    ),
    // Sports
    (
        "Soccer Team",
        "Outdoor soccer practice and inter-school matches",
        "Mondays and Thursdays, 4:00 PM - 6:00 PM",
        22,
        &["alex@mergington.edu", "marco@mergington.edu"],
    ),
    (
        "Basketball Club",
        "Skills training, scrimmages and league play",
        "Tuesdays and Fridays, 4:30 PM - 6:00 PM",
        15,
        &["luis@mergington.edu", "isabel@mergington.edu"],
    ),
    // Arts
    (
        "Art Workshop",
        "Drawing, painting and mixed media projects",
        "Wednesdays, 3:30 PM - 5:00 PM",
        18,
        &["nora@mergington.edu", "maria@mergington.edu"],
    ),
    (
        "Music Ensemble",
        "Group rehearsals and performances for various instruments",
        "Thursdays, 3:45 PM - 5:15 PM",
        25,
        &["tom@mergington.edu", "lucy@mergington.edu"],
    ),
    // Intellectual
    (
        "Debate Team",
        "Practice formal debating, public speaking and research",
        "Mondays and Wednesdays, 3:30 PM - 5:00 PM",
        16,
        &["henry@mergington.edu", "sara@mergington.edu"],
    ),
    (
        "Science Club",
        "Hands-on experiments, competitions and STEM projects",
        "Fridays, 3:30 PM - 5:00 PM",
        20,
        &["oliver@mergington.edu", "mia@mergington.edu"],
    ),
];

pub fn seed_activities() -> IndexMap<String, ActivityRecord> {
    SEED_ACTIVITIES
        .iter()
        .map(|(name, description, schedule, max, participants)| {
            (
                name.to_string(),
                ActivityRecord::new(description, schedule, *max, participants),
            )
        })
        .collect()
}
