use crate::models::{CandidateProfile, Gender};

#[allow(clippy::too_many_arguments)]
fn candidate(
    id: &str,
    name: &str,
    age: u8,
    gender: Gender,
    religion: &str,
    caste: &str,
    location: &str,
    bio: &str,
    photo_ref: &str,
) -> CandidateProfile {
    CandidateProfile {
        id: id.to_string(),
        name: name.to_string(),
        age,
        gender,
        religion: religion.to_string(),
        caste: caste.to_string(),
        location: location.to_string(),
        bio: bio.to_string(),
        photo_ref: photo_ref.to_string(),
    }
}

/// Built-in candidate pool, seeded on first read when no pool file is configured
pub fn default_pool() -> Vec<CandidateProfile> {
    vec![
        candidate(
            "1",
            "Priya Sharma",
            27,
            Gender::Female,
            "Hindu",
            "Brahmin",
            "Mumbai",
            "Software engineer who loves traveling and cooking",
            "https://randomuser.me/api/portraits/women/1.jpg",
        ),
        candidate(
            "2",
            "Rahul Patel",
            30,
            Gender::Male,
            "Hindu",
            "Patel",
            "Ahmedabad",
            "Business owner with passion for music and sports",
            "https://randomuser.me/api/portraits/men/1.jpg",
        ),
        candidate(
            "3",
            "Ananya Gupta",
            25,
            Gender::Female,
            "Hindu",
            "Gupta",
            "Delhi",
            "Doctor who enjoys reading and painting",
            "https://randomuser.me/api/portraits/women/2.jpg",
        ),
        candidate(
            "4",
            "Vikram Singh",
            32,
            Gender::Male,
            "Sikh",
            "Jat",
            "Punjab",
            "Army officer looking for a life partner",
            "https://randomuser.me/api/portraits/men/2.jpg",
        ),
        candidate(
            "5",
            "Neha Reddy",
            28,
            Gender::Female,
            "Hindu",
            "Reddy",
            "Hyderabad",
            "Architect with love for design and photography",
            "https://randomuser.me/api/portraits/women/3.jpg",
        ),
    ]
}
