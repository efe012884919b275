use serde::{Deserialize, Serialize};

use crate::survey::dto::SubmitRequest;

/// Form state for the "Question Details" card. `title`/`description`
/// become the envelope fields; `full_name`/`age` travel inside the blob.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyMeta {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub age: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// The `meta` section as serialized into the blob.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaSection {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub age: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Female,
    Male,
    #[serde(rename = "Non-binary")]
    NonBinary,
    #[serde(rename = "Prefer not to say")]
    PreferNotToSay,
    #[default]
    #[serde(rename = "")]
    Unset,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaritalStatus {
    Single,
    Married,
    Divorced,
    Widowed,
    #[serde(rename = "Prefer not to say")]
    PreferNotToSay,
    #[default]
    #[serde(rename = "")]
    Unset,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MobilityAssistance {
    Yes,
    No,
    Sometimes,
    #[default]
    #[serde(rename = "")]
    Unset,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum IncomeRange {
    #[serde(rename = "<25k")]
    Under25k,
    #[serde(rename = "25k-50k")]
    From25kTo50k,
    #[serde(rename = "50k-75k")]
    From50kTo75k,
    #[serde(rename = "75k-100k")]
    From75kTo100k,
    #[serde(rename = "100k-150k")]
    From100kTo150k,
    #[serde(rename = "150k-200k")]
    From150kTo200k,
    #[serde(rename = ">200k")]
    Over200k,
    #[default]
    #[serde(rename = "")]
    Unset,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum InsuranceProvider {
    Aetna,
    #[serde(rename = "Blue Cross Blue Shield")]
    BlueCrossBlueShield,
    Cigna,
    Kaiser,
    Medicare,
    Medicaid,
    UnitedHealthcare,
    Other,
    None,
    #[default]
    #[serde(rename = "")]
    Unset,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoverageType {
    #[serde(rename = "HMO")]
    Hmo,
    #[serde(rename = "PPO")]
    Ppo,
    #[serde(rename = "EPO")]
    Epo,
    #[serde(rename = "POS")]
    Pos,
    #[serde(rename = "High Deductible (HSA)")]
    HighDeductibleHsa,
    #[serde(rename = "Medicare Advantage")]
    MedicareAdvantage,
    #[serde(rename = "None/Unknown")]
    NoneOrUnknown,
    #[default]
    #[serde(rename = "")]
    Unset,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Demographic {
    #[serde(default)]
    pub gender: Gender,
    #[serde(default)]
    pub marital_status: MaritalStatus,
    #[serde(default)]
    pub dependents: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Health {
    #[serde(default)]
    pub conditions: Vec<String>,
    #[serde(default)]
    pub conditions_other: String,
    #[serde(default)]
    pub medications: Vec<String>,
    #[serde(default)]
    pub medications_other: String,
    #[serde(default)]
    pub mobility_assistance: MobilityAssistance,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Financial {
    #[serde(default)]
    pub income_range: IncomeRange,
    #[serde(default)]
    pub insurance_provider: InsuranceProvider,
    #[serde(default)]
    pub insurance_other: String,
    #[serde(default)]
    pub coverage_type: CoverageType,
}

/// The nested object serialized into the `answer` blob.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Submission {
    #[serde(default)]
    pub meta: MetaSection,
    #[serde(default)]
    pub demographic: Demographic,
    #[serde(default)]
    pub health: Health,
    #[serde(default)]
    pub financial: Financial,
}

/// The four independent pieces of form state, assembled on submit.
#[derive(Debug, Clone, Default)]
pub struct IntakeForm {
    pub meta: SurveyMeta,
    pub demographic: Demographic,
    pub health: Health,
    pub financial: Financial,
}

impl IntakeForm {
    /// Builds the wire request: structured envelope fields plus the
    /// opaque serialized blob. Blank title/description get the same
    /// defaults the form applies.
    pub fn assemble(&self) -> serde_json::Result<SubmitRequest> {
        let submission = Submission {
            meta: MetaSection {
                full_name: self.meta.full_name.clone(),
                age: self.meta.age.clone(),
            },
            demographic: self.demographic.clone(),
            health: self.health.clone(),
            financial: self.financial.clone(),
        };
        let question = if self.meta.title.is_empty() {
            "Untitled Question".to_string()
        } else {
            self.meta.title.clone()
        };
        Ok(SubmitRequest {
            question,
            description: self.meta.description.clone(),
            answer: serde_json::to_string(&submission)?,
        })
    }
}
