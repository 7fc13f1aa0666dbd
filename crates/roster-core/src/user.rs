//! User profile records.
//!
//! Defines the durable [`UserRecord`] entity, its ordered
//! [`WorkExperience`] sub-records, and the [`UserPatch`] partial record
//! used to create and edit users.
//!
//! Wire names are camelCase and every profile field carries a serde
//! default, so a persisted collection written by an earlier build (or one
//! missing newer optional fields) hydrates with empty defaults instead of
//! failing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ═══════════════════════════════════════════════════════════════════════
//  UserRecord
// ═══════════════════════════════════════════════════════════════════════

/// One user's full profile — the unit of storage and mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Unique identifier (UUID v7), assigned at creation, immutable.
    pub id: String,

    // -- basic info ------------------------------------------------------
    /// Given name.
    #[serde(default)]
    pub first_name: String,
    /// Family name.
    #[serde(default)]
    pub last_name: String,
    /// Contact email address.
    #[serde(default)]
    pub email: String,
    /// Primary phone number.
    #[serde(default)]
    pub phone: String,
    /// Secondary phone number.
    #[serde(default)]
    pub alternate_phone: String,
    /// Four-digit birth year, free-form.
    #[serde(default)]
    pub year_of_birth: String,
    /// Gender as entered; the selectable catalog lives in the view layer.
    #[serde(default)]
    pub gender: String,
    /// ISO country code for the phone number.
    #[serde(default)]
    pub country_code: String,
    /// Street address.
    #[serde(default)]
    pub address: String,
    /// Postal code.
    #[serde(default)]
    pub pincode: String,
    /// State / region name.
    #[serde(default)]
    pub state: String,
    /// ISO country code of domicile.
    #[serde(default)]
    pub country_code_domicile: String,

    // -- education -------------------------------------------------------
    /// Institution attended.
    #[serde(default)]
    pub school: String,
    /// Degree earned.
    #[serde(default)]
    pub degree: String,
    /// Course or major.
    #[serde(default)]
    pub course: String,
    /// Year of completion, free-form.
    #[serde(default)]
    pub year_of_completion: String,
    /// Grade or GPA, free-form.
    #[serde(default)]
    pub grade: String,

    // -- skills ----------------------------------------------------------
    /// Free-text skills blob.
    #[serde(default)]
    pub skills: String,
    /// Free-text projects blob.
    #[serde(default)]
    pub projects: String,

    // -- experience ------------------------------------------------------
    /// Work-experience entries, in insertion (= display) order.
    #[serde(default)]
    pub work_experience: Vec<WorkExperience>,
    /// LinkedIn profile URL.
    #[serde(default)]
    pub linkedin_url: String,
    /// Opaque resume reference (filename or data blob); not validated.
    #[serde(default)]
    pub resume: String,

    // -- bookkeeping -----------------------------------------------------
    /// When the record was created. Set once.
    pub created_at: DateTime<Utc>,
    /// When the record was last mutated. Refreshed on every update.
    pub updated_at: DateTime<Utc>,
}

impl UserRecord {
    /// Create a new record from a partial draft.
    ///
    /// Assigns a fresh UUID v7 identifier, stamps `created_at` and
    /// `updated_at` to the same instant, and fills every field the draft
    /// leaves unset with its empty default.
    pub fn create(draft: UserPatch) -> Self {
        let now = Utc::now();
        let mut record = Self {
            id: Uuid::now_v7().to_string(),
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            alternate_phone: String::new(),
            year_of_birth: String::new(),
            gender: String::new(),
            country_code: String::new(),
            address: String::new(),
            pincode: String::new(),
            state: String::new(),
            country_code_domicile: String::new(),
            school: String::new(),
            degree: String::new(),
            course: String::new(),
            year_of_completion: String::new(),
            grade: String::new(),
            skills: String::new(),
            projects: String::new(),
            work_experience: Vec::new(),
            linkedin_url: String::new(),
            resume: String::new(),
            created_at: now,
            updated_at: now,
        };
        draft.apply(&mut record);
        record
    }

    /// Refresh `updated_at` to the current instant.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// The user's display name (`first last`, trimmed).
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

// ═══════════════════════════════════════════════════════════════════════
//  WorkExperience
// ═══════════════════════════════════════════════════════════════════════

/// One work-experience entry, independently addressable by its id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkExperience {
    /// Unique identifier (UUID v7) within the owning record.
    pub id: String,
    /// Industry domain.
    #[serde(default)]
    pub domain: String,
    /// Specialization within the domain.
    #[serde(default)]
    pub sub_domain: String,
    /// Duration text, e.g. "3 years".
    #[serde(default)]
    pub experience: String,
}

impl WorkExperience {
    /// Build a new entry with a generated identifier.
    pub fn new(
        domain: impl Into<String>,
        sub_domain: impl Into<String>,
        experience: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::now_v7().to_string(),
            domain: domain.into(),
            sub_domain: sub_domain.into(),
            experience: experience.into(),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
//  UserPatch
// ═══════════════════════════════════════════════════════════════════════

/// A partial user record: the add-user draft and the update-user patch.
///
/// Carries no identifier and no timestamps — those belong to the store.
/// Unset fields are left untouched when applied to an existing record.
/// Build one with struct-literal syntax over [`Default`]:
///
/// ```
/// use roster_core::UserPatch;
///
/// let patch = UserPatch {
///     email: Some("ada@example.com".into()),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub alternate_phone: Option<String>,
    pub year_of_birth: Option<String>,
    pub gender: Option<String>,
    pub country_code: Option<String>,
    pub address: Option<String>,
    pub pincode: Option<String>,
    pub state: Option<String>,
    pub country_code_domicile: Option<String>,
    pub school: Option<String>,
    pub degree: Option<String>,
    pub course: Option<String>,
    pub year_of_completion: Option<String>,
    pub grade: Option<String>,
    pub skills: Option<String>,
    pub projects: Option<String>,
    pub work_experience: Option<Vec<WorkExperience>>,
    pub linkedin_url: Option<String>,
    pub resume: Option<String>,
}

impl UserPatch {
    /// Copy every provided field onto `record`, leaving the rest (and the
    /// record's id and timestamps) untouched.
    pub fn apply(self, record: &mut UserRecord) {
        if let Some(v) = self.first_name {
            record.first_name = v;
        }
        if let Some(v) = self.last_name {
            record.last_name = v;
        }
        if let Some(v) = self.email {
            record.email = v;
        }
        if let Some(v) = self.phone {
            record.phone = v;
        }
        if let Some(v) = self.alternate_phone {
            record.alternate_phone = v;
        }
        if let Some(v) = self.year_of_birth {
            record.year_of_birth = v;
        }
        if let Some(v) = self.gender {
            record.gender = v;
        }
        if let Some(v) = self.country_code {
            record.country_code = v;
        }
        if let Some(v) = self.address {
            record.address = v;
        }
        if let Some(v) = self.pincode {
            record.pincode = v;
        }
        if let Some(v) = self.state {
            record.state = v;
        }
        if let Some(v) = self.country_code_domicile {
            record.country_code_domicile = v;
        }
        if let Some(v) = self.school {
            record.school = v;
        }
        if let Some(v) = self.degree {
            record.degree = v;
        }
        if let Some(v) = self.course {
            record.course = v;
        }
        if let Some(v) = self.year_of_completion {
            record.year_of_completion = v;
        }
        if let Some(v) = self.grade {
            record.grade = v;
        }
        if let Some(v) = self.skills {
            record.skills = v;
        }
        if let Some(v) = self.projects {
            record.projects = v;
        }
        if let Some(v) = self.work_experience {
            record.work_experience = v;
        }
        if let Some(v) = self.linkedin_url {
            record.linkedin_url = v;
        }
        if let Some(v) = self.resume {
            record.resume = v;
        }
    }
}

// ── tests ────────────────────────────────────────────────────────────
