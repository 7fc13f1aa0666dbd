//! Built-in seed dataset.
//!
//! A fixed demo collection the store hydrates from when no persisted
//! collection exists (or the persisted slot is malformed). Identifiers and
//! timestamps are hardcoded so the fixture is deterministic, and the
//! records stay schema-compatible with anything the store persists.

use chrono::{DateTime, Utc};

use crate::user::{UserRecord, WorkExperience};

fn ts(rfc3339: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(rfc3339)
        .expect("seed timestamp is valid RFC 3339")
        .with_timezone(&Utc)
}

fn experience(id: &str, domain: &str, sub_domain: &str, duration: &str) -> WorkExperience {
    WorkExperience {
        id: id.to_string(),
        domain: domain.to_string(),
        sub_domain: sub_domain.to_string(),
        experience: duration.to_string(),
    }
}

/// The demo collection used as the hydration fallback.
pub fn seed_users() -> Vec<UserRecord> {
    vec![
        UserRecord {
            id: "0192e6a0-6b01-7000-8000-5eed00000001".to_string(),
            first_name: "Priya".to_string(),
            last_name: "Sharma".to_string(),
            email: "priya.sharma@example.com".to_string(),
            phone: "+91 98200 11223".to_string(),
            alternate_phone: String::new(),
            year_of_birth: "1992".to_string(),
            gender: "Female".to_string(),
            country_code: "IN".to_string(),
            address: "14 MG Road, Bengaluru".to_string(),
            pincode: "560001".to_string(),
            state: "Karnataka".to_string(),
            country_code_domicile: "IN".to_string(),
            school: "IIT Bombay".to_string(),
            degree: "B.Tech".to_string(),
            course: "Computer Science".to_string(),
            year_of_completion: "2014".to_string(),
            grade: "8.9 CGPA".to_string(),
            skills: "Rust, distributed systems".to_string(),
            projects: "Order-routing engine".to_string(),
            work_experience: vec![
                experience(
                    "0192e6a0-6b01-7000-8000-5eed00000011",
                    "Technology",
                    "Backend",
                    "6 years",
                ),
                experience(
                    "0192e6a0-6b01-7000-8000-5eed00000012",
                    "Finance",
                    "Payments",
                    "3 years",
                ),
            ],
            linkedin_url: "https://linkedin.com/in/priyasharma".to_string(),
            resume: "priya_sharma.pdf".to_string(),
            created_at: ts("2024-11-02T09:30:00Z"),
            updated_at: ts("2024-11-02T09:30:00Z"),
        },
        UserRecord {
            id: "0192e6a0-6b01-7000-8000-5eed00000002".to_string(),
            first_name: "Arjun".to_string(),
            last_name: "Mehta".to_string(),
            email: "arjun.mehta@example.com".to_string(),
            phone: "+91 99670 55443".to_string(),
            alternate_phone: "+91 22 4890 1122".to_string(),
            year_of_birth: "1988".to_string(),
            gender: "Male".to_string(),
            country_code: "IN".to_string(),
            address: "7 Carter Road, Mumbai".to_string(),
            pincode: "400050".to_string(),
            state: "Maharashtra".to_string(),
            country_code_domicile: "IN".to_string(),
            school: "St. Xavier's College".to_string(),
            degree: "B.Com".to_string(),
            course: "Accounting".to_string(),
            year_of_completion: "2009".to_string(),
            grade: "First Class".to_string(),
            skills: "Financial modelling, audit".to_string(),
            projects: String::new(),
            work_experience: vec![experience(
                "0192e6a0-6b01-7000-8000-5eed00000021",
                "Finance",
                "Audit",
                "11 years",
            )],
            linkedin_url: String::new(),
            resume: String::new(),
            created_at: ts("2024-11-05T14:10:00Z"),
            updated_at: ts("2025-01-20T08:45:00Z"),
        },
        UserRecord {
            id: "0192e6a0-6b01-7000-8000-5eed00000003".to_string(),
            first_name: "Sara".to_string(),
            last_name: "Khan".to_string(),
            email: "sara.khan@example.com".to_string(),
            phone: String::new(),
            alternate_phone: String::new(),
            year_of_birth: String::new(),
            gender: String::new(),
            country_code: "IN".to_string(),
            address: String::new(),
            pincode: String::new(),
            state: "Delhi".to_string(),
            country_code_domicile: "IN".to_string(),
            school: "Delhi University".to_string(),
            degree: "M.A.".to_string(),
            course: "Economics".to_string(),
            year_of_completion: "2021".to_string(),
            grade: String::new(),
            skills: "Data analysis".to_string(),
            projects: "Household survey dashboard".to_string(),
            work_experience: Vec::new(),
            linkedin_url: String::new(),
            resume: String::new(),
            created_at: ts("2025-02-11T11:00:00Z"),
            updated_at: ts("2025-02-11T11:00:00Z"),
        },
    ]
}

// ── tests ────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn seed_is_nonempty_with_unique_ids() {
        let users = seed_users();
        assert!(!users.is_empty());

        let ids: HashSet<_> = users.iter().map(|u| u.id.as_str()).collect();
        assert_eq!(ids.len(), users.len());
    }

    #[test]
    fn seed_timestamps_are_ordered() {
        for user in seed_users() {
            assert!(user.updated_at >= user.created_at);
        }
    }

    #[test]
    fn seed_round_trips_through_json() {
        let users = seed_users();
        let json = serde_json::to_string(&users).unwrap();
        let back: Vec<UserRecord> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, users);
    }
}
