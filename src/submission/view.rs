use crate::submission::schema::{
    CoverageType, Gender, IncomeRange, InsuranceProvider, MaritalStatus, MobilityAssistance,
    Submission,
};
use crate::survey::dto::SurveyRow;

/// What the viewer renders for one stored row.
#[derive(Debug)]
pub enum RenderedAnswer {
    Structured(Submission),
    /// The blob was not a valid serialization; show it as-is.
    Raw(String),
}

/// Decodes an `answer` blob, falling back to raw display on any parse
/// failure. Malformed or legacy data is a display case, not an error.
pub fn decode_answer(answer: &str) -> RenderedAnswer {
    match serde_json::from_str::<Submission>(answer) {
        Ok(s) => RenderedAnswer::Structured(s),
        Err(_) => RenderedAnswer::Raw(answer.to_string()),
    }
}

const PLACEHOLDER: &str = "—";

fn or_placeholder(s: &str) -> &str {
    if s.is_empty() {
        PLACEHOLDER
    } else {
        s
    }
}

fn join_with_other(items: &[String], other: &str) -> String {
    let joined = items
        .iter()
        .map(String::as_str)
        .chain(std::iter::once(other))
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(", ");
    if joined.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        joined
    }
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Female => "Female",
            Gender::Male => "Male",
            Gender::NonBinary => "Non-binary",
            Gender::PreferNotToSay => "Prefer not to say",
            Gender::Unset | Gender::Unknown => "",
        }
    }
}

impl MaritalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MaritalStatus::Single => "Single",
            MaritalStatus::Married => "Married",
            MaritalStatus::Divorced => "Divorced",
            MaritalStatus::Widowed => "Widowed",
            MaritalStatus::PreferNotToSay => "Prefer not to say",
            MaritalStatus::Unset | MaritalStatus::Unknown => "",
        }
    }
}

impl MobilityAssistance {
    pub fn as_str(&self) -> &'static str {
        match self {
            MobilityAssistance::Yes => "Yes",
            MobilityAssistance::No => "No",
            MobilityAssistance::Sometimes => "Sometimes",
            MobilityAssistance::Unset | MobilityAssistance::Unknown => "",
        }
    }
}

impl IncomeRange {
    pub fn as_str(&self) -> &'static str {
        match self {
            IncomeRange::Under25k => "<25k",
            IncomeRange::From25kTo50k => "25k-50k",
            IncomeRange::From50kTo75k => "50k-75k",
            IncomeRange::From75kTo100k => "75k-100k",
            IncomeRange::From100kTo150k => "100k-150k",
            IncomeRange::From150kTo200k => "150k-200k",
            IncomeRange::Over200k => ">200k",
            IncomeRange::Unset | IncomeRange::Unknown => "",
        }
    }
}

impl InsuranceProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            InsuranceProvider::Aetna => "Aetna",
            InsuranceProvider::BlueCrossBlueShield => "Blue Cross Blue Shield",
            InsuranceProvider::Cigna => "Cigna",
            InsuranceProvider::Kaiser => "Kaiser",
            InsuranceProvider::Medicare => "Medicare",
            InsuranceProvider::Medicaid => "Medicaid",
            InsuranceProvider::UnitedHealthcare => "UnitedHealthcare",
            InsuranceProvider::Other => "Other",
            InsuranceProvider::None => "None",
            InsuranceProvider::Unset | InsuranceProvider::Unknown => "",
        }
    }
}

impl CoverageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CoverageType::Hmo => "HMO",
            CoverageType::Ppo => "PPO",
            CoverageType::Epo => "EPO",
            CoverageType::Pos => "POS",
            CoverageType::HighDeductibleHsa => "High Deductible (HSA)",
            CoverageType::MedicareAdvantage => "Medicare Advantage",
            CoverageType::NoneOrUnknown => "None/Unknown",
            CoverageType::Unset | CoverageType::Unknown => "",
        }
    }
}

/// Plain-text projection of one stored row, section by section.
pub fn render_row(row: &SurveyRow) -> String {
    match decode_answer(&row.answer) {
        RenderedAnswer::Raw(raw) => raw,
        RenderedAnswer::Structured(s) => {
            // Insurance shows the free-text provider when the choice was
            // Other, even when that text is blank; the placeholder applies
            // only to the enumerated branch
            let insurance = if s.financial.insurance_provider == InsuranceProvider::Other {
                s.financial.insurance_other.clone()
            } else {
                or_placeholder(s.financial.insurance_provider.as_str()).to_string()
            };

            let mut out = String::new();
            out.push_str("Question Details\n");
            out.push_str(&format!("  Question Title: {}\n", row.question));
            out.push_str(&format!("  Question Description: {}\n", row.description));
            out.push_str(&format!(
                "  Full name: {}\n",
                or_placeholder(&s.meta.full_name)
            ));
            out.push_str(&format!("  Age: {}\n", or_placeholder(&s.meta.age)));
            out.push_str("Demographic\n");
            out.push_str(&format!(
                "  Gender: {}\n",
                or_placeholder(s.demographic.gender.as_str())
            ));
            out.push_str(&format!(
                "  Marital status: {}\n",
                or_placeholder(s.demographic.marital_status.as_str())
            ));
            out.push_str(&format!(
                "  Dependents: {}\n",
                or_placeholder(&s.demographic.dependents)
            ));
            out.push_str("Health\n");
            out.push_str(&format!(
                "  Conditions: {}\n",
                join_with_other(&s.health.conditions, &s.health.conditions_other)
            ));
            out.push_str(&format!(
                "  Medications: {}\n",
                join_with_other(&s.health.medications, &s.health.medications_other)
            ));
            out.push_str(&format!(
                "  Mobility assistance: {}\n",
                or_placeholder(s.health.mobility_assistance.as_str())
            ));
            out.push_str("Financial\n");
            out.push_str(&format!(
                "  Income: {}\n",
                or_placeholder(s.financial.income_range.as_str())
            ));
            out.push_str(&format!("  Insurance: {}\n", insurance));
            out.push_str(&format!(
                "  Coverage: {}\n",
                or_placeholder(s.financial.coverage_type.as_str())
            ));
            out
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::submission::schema::{Financial, Health, IntakeForm, SurveyMeta};

    fn row(question: &str, description: &str, answer: &str) -> SurveyRow {
        SurveyRow {
            id: 1,
            question: question.into(),
            description: description.into(),
            answer: answer.into(),
        }
    }

    #[test]
    fn malformed_answer_falls_back_to_raw() {
        let r = row("Intake", "", "not json at all {]");
        assert_eq!(render_row(&r), "not json at all {]");
    }

    #[test]
    fn partial_blob_renders_with_placeholders() {
        let r = row("Intake", "", r#"{"meta":{"fullName":"Jane","age":"40"}}"#);
        let text = render_row(&r);
        assert!(text.contains("Full name: Jane"));
        assert!(text.contains("Age: 40"));
        assert!(text.contains("Gender: —"));
        assert!(text.contains("Conditions: —"));
        assert!(text.contains("Coverage: —"));
    }

    #[test]
    fn conditions_merge_checklist_and_other() {
        let r = row(
            "Intake",
            "",
            r#"{"health":{"conditions":["Diabetes","Arthritis"],"conditionsOther":"Gout"}}"#,
        );
        let text = render_row(&r);
        assert!(text.contains("Conditions: Diabetes, Arthritis, Gout"));
    }

    #[test]
    fn insurance_other_shows_free_text() {
        let r = row(
            "Intake",
            "",
            r#"{"financial":{"insuranceProvider":"Other","insuranceOther":"Oscar"}}"#,
        );
        let text = render_row(&r);
        assert!(text.contains("Insurance: Oscar"));
    }

    #[test]
    fn insurance_other_with_blank_text_renders_empty() {
        let r = row(
            "Intake",
            "",
            r#"{"financial":{"insuranceProvider":"Other"}}"#,
        );
        let text = render_row(&r);
        assert!(text.contains("Insurance: \n"));
    }

    #[test]
    fn unset_insurance_renders_placeholder() {
        let r = row("Intake", "", r#"{"financial":{}}"#);
        let text = render_row(&r);
        assert!(text.contains("Insurance: —"));
    }

    #[test]
    fn assembled_form_round_trips_through_viewer() {
        let form = IntakeForm {
            meta: SurveyMeta {
                full_name: "Jane".into(),
                age: "40".into(),
                title: "Intake".into(),
                description: "".into(),
            },
            health: Health {
                medications: vec!["Metformin".into()],
                ..Default::default()
            },
            financial: Financial {
                coverage_type: crate::submission::schema::CoverageType::Ppo,
                ..Default::default()
            },
            ..Default::default()
        };
        let req = form.assemble().unwrap();
        let r = row(&req.question, &req.description, &req.answer);
        let text = render_row(&r);
        assert!(text.contains("Question Title: Intake"));
        assert!(text.contains("Medications: Metformin"));
        assert!(text.contains("Coverage: PPO"));
    }
}
