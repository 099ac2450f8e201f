//! Integration tests for the Pipeline end to end.
//!
//! Uses a MockReader that returns a pre-built FieldSource without
//! decoding anything, so these tests run without poppler-utils.

use fnol_core::error::FnolError;
use fnol_core::extraction::form_json::FormJsonReader;
use fnol_core::extraction::text::PlainTextReader;
use fnol_core::extraction::{DocumentReader, FieldSource, FormFields};
use fnol_core::result::ProcessingStatus;
use fnol_core::routing::RoutingDecision;
use fnol_core::rules::parse_config_str;
use fnol_core::Pipeline;
use serde_json::json;

struct MockReader {
    source: FieldSource,
}

impl DocumentReader for MockReader {
    fn read(&self, _bytes: &[u8]) -> Result<FieldSource, FnolError> {
        Ok(self.source.clone())
    }

    fn backend_name(&self) -> &str {
        "mock"
    }
}

struct FailingReader;

impl DocumentReader for FailingReader {
    fn read(&self, _bytes: &[u8]) -> Result<FieldSource, FnolError> {
        Err(FnolError::Decode("corrupt xref table".into()))
    }

    fn backend_name(&self) -> &str {
        "failing"
    }
}

const DESCRIPTION_LABEL: &str = "DESCRIPTION OF ACCIDENT ACORD 101 Additional Remarks Schedule may be attached if more space is required";

/// A complete ACORD-style form; tests override single labels.
fn form(overrides: &[(&str, &str)]) -> FieldSource {
    let mut fields: FormFields = [
        ("Text7", "POL-100"),
        ("NAME OF INSURED First Middle Last", "Jane Doe"),
        ("Text3", "2024-01-01"),
        ("Text4", "10:30"),
        ("Check Box5", "Yes"),
        (DESCRIPTION_LABEL, "Rear-ended at a stop light"),
        ("STREET LOCATION OF LOSS", "12 Elm St"),
        ("CITY STATE ZIP", "Springfield, IL 62704"),
        ("COUNTRY", "USA"),
        ("PHONE  CELL HOME BUS PRIMARY", "555-123-4567"),
        ("Check Box12", "Yes"),
        ("PLATE NUMBER", "ABC-1234"),
        ("Text45", "18,500.00"),
    ]
    .into_iter()
    .collect();
    for (label, value) in overrides {
        fields.insert(*label, *value);
    }
    FieldSource::Structured(fields)
}

fn process(source: FieldSource) -> fnol_core::result::ProcessingResult {
    let pipeline = Pipeline::with_defaults().unwrap();
    pipeline.process_bytes(b"ignored", &MockReader { source })
}

// ---------------------------------------------------------------------------
// Scenario 1: complete low-value claim is fast-tracked
// ---------------------------------------------------------------------------
#[test]
fn complete_form_fast_tracked() {
    let result = process(form(&[]));

    assert_eq!(result.status, ProcessingStatus::Success);
    assert_eq!(result.recommended_route, Some(RoutingDecision::FastTrack));
    assert_eq!(result.missing_fields, Some(vec![]));
    assert_eq!(
        result.reasoning.as_deref(),
        Some(
            "Estimated damage of $18,500.00 is below the fast-track threshold of $25,000.00. \
             All mandatory fields are present. No fraud indicators detected."
        )
    );
    assert_eq!(
        result.warnings,
        Some(vec!["No attachments/supporting documents provided".to_string()])
    );

    let fields = result.extracted_fields.unwrap();
    assert_eq!(fields["policyInformation"]["policyNumber"], "POL-100");
    assert_eq!(
        fields["incidentInformation"]["location"],
        "12 Elm St, Springfield, IL 62704, USA"
    );
    assert_eq!(fields["incidentInformation"]["incidentTime"], "10:30 AM");
    assert_eq!(fields["involvedParties"][0]["role"], "CLAIMANT");
    assert_eq!(fields["involvedParties"][0]["primaryPhoneType"], "CELL");
    assert_eq!(fields["assetDetails"]["assetType"], "VEHICLE");
    assert_eq!(fields["claimType"], "VEHICLE");
    assert_eq!(fields["initialEstimate"], "18500.00");
}

// ---------------------------------------------------------------------------
// Scenario 2: blank policy number sends the claim to manual review
// ---------------------------------------------------------------------------
#[test]
fn blank_policy_number_needs_manual_review() {
    let result = process(form(&[("Text7", "   ")]));

    assert_eq!(result.status, ProcessingStatus::Partial);
    assert_eq!(result.recommended_route, Some(RoutingDecision::ManualReview));
    assert_eq!(
        result.missing_fields,
        Some(vec!["policyInformation.policyNumber".to_string()])
    );
    assert_eq!(
        result.reasoning.as_deref(),
        Some(
            "Missing mandatory fields: policyInformation.policyNumber. \
             Manual review required to complete claim information."
        )
    );
}

// ---------------------------------------------------------------------------
// Scenario 3: fraud language outranks a low damage amount
// ---------------------------------------------------------------------------
#[test]
fn staged_collision_goes_to_investigation() {
    let result = process(form(&[(DESCRIPTION_LABEL, "Staged COLLISION at the mall")]));

    assert_eq!(result.status, ProcessingStatus::Success);
    assert_eq!(result.recommended_route, Some(RoutingDecision::Investigation));
    assert!(result
        .reasoning
        .as_deref()
        .is_some_and(|r| r.contains("- Contains keyword: 'staged'")));
}

#[test]
fn injury_outranks_fast_track() {
    let result = process(form(&[("NAME  ADDRESSRow1", "Jane Doe - whiplash")]));
    assert_eq!(result.recommended_route, Some(RoutingDecision::SpecialistQueue));
    assert_eq!(result.extracted_fields.unwrap()["claimType"], "INJURY");
}

#[test]
fn fast_track_boundary_is_exclusive() {
    let result = process(form(&[("Text45", "25,000.00")]));
    assert_eq!(
        result.recommended_route,
        Some(RoutingDecision::StandardProcessing)
    );

    let result = process(form(&[("Text45", "24,999.99")]));
    assert_eq!(result.recommended_route, Some(RoutingDecision::FastTrack));
}

#[test]
fn many_gaps_are_incomplete() {
    let result = process(form(&[
        ("Text7", ""),
        ("NAME OF INSURED First Middle Last", ""),
        ("Text3", "not a date"),
        ("PLATE NUMBER", ""),
    ]));
    assert_eq!(result.status, ProcessingStatus::Incomplete);
    assert_eq!(
        result.missing_fields.unwrap(),
        vec![
            "policyInformation.policyNumber",
            "policyInformation.policyholderName",
            "incidentInformation.incidentDate",
            "assetDetails.assetId",
        ]
    );
}

#[test]
fn missing_time_and_high_damage_warn() {
    let result = process(form(&[("Check Box5", "Off"), ("Text45", "150,000")]));
    assert_eq!(
        result.warnings.unwrap(),
        vec![
            "Incident time not provided - may affect investigation",
            "No attachments/supporting documents provided",
            "High damage amount - may require additional approval",
        ]
    );
}

#[test]
fn third_parties_listed_after_claimant() {
    let result = process(form(&[
        ("Text48", "Bob Smith"),
        ("PHONE  CELL HOME BUS PRIMARY_5", "555-222-3333"),
        ("Check Box49", "Yes"),
        ("Check Box51", "Yes"),
        ("Text81", "Carl Jones"),
    ]));
    let fields = result.extracted_fields.unwrap();
    let parties = fields["involvedParties"].as_array().unwrap();
    assert_eq!(parties.len(), 3);
    assert_eq!(parties[1]["role"], "THIRD_PARTY_OWNER");
    assert_eq!(parties[1]["primaryPhoneType"], "HOME");
    assert_eq!(parties[2]["name"], "Carl Jones");
}

#[test]
fn reader_failure_becomes_failed_result() {
    let pipeline = Pipeline::with_defaults().unwrap();
    let result = pipeline.process_bytes(b"%PDF-1.7", &FailingReader);

    assert!(result.is_failed());
    assert_eq!(
        serde_json::to_value(&result).unwrap(),
        json!({
            "status": "FAILED",
            "errors": ["Error processing document: failed to decode document: corrupt xref table"]
        })
    );
}

#[test]
fn free_text_claim_end_to_end() {
    let text = "\
Policy Number: POL-7781
Policyholder: Maria Garcia
Incident Date: 03/02/2024
Incident Time: 8:15 AM
Location: Parking garage on 5th Ave
Description: Backed into a pillar while parking.

Claimant Name: Maria Garcia
Phone: 555-444-1212

VIN: 2T1BURHE0JC014235
Estimated Damage: $3,200.00
Attachments: photos.zip
";
    let pipeline = Pipeline::with_defaults().unwrap();
    let result = pipeline.process_bytes(text.as_bytes(), &PlainTextReader);

    assert_eq!(result.status, ProcessingStatus::Success);
    assert_eq!(result.recommended_route, Some(RoutingDecision::FastTrack));
    assert_eq!(result.warnings, None);

    let fields = result.extracted_fields.unwrap();
    assert_eq!(fields["policyInformation"]["policyNumber"], "POL-7781");
    assert_eq!(fields["incidentInformation"]["incidentDate"], "2024-03-02");
    assert_eq!(
        fields["incidentInformation"]["location"],
        "Parking garage on 5th Ave"
    );
    assert_eq!(fields["assetDetails"]["assetId"], "2T1BURHE0JC014235");
    assert_eq!(fields["involvedParties"][0]["primaryPhone"], "555-444-1212");
    assert_eq!(fields["attachments"], json!(["photos.zip"]));
}

#[test]
fn form_json_reader_end_to_end() {
    let body = json!({
        "Text7": "POL-100",
        "NAME OF INSURED First Middle Last": "Jane Doe",
        "Text3": "2024-01-01",
        "Text4": "10:30",
        "Check Box6": true,
        DESCRIPTION_LABEL: "Rear-ended",
        "DESCRIBE LOCATION OF LOSS IF NOT AT SPECIFIC STREET ADDRESS": "Mall parking lot",
        "PLATE NUMBER": "ABC-1234",
        "Text45": 40000,
        "Text48": null
    });
    let pipeline = Pipeline::with_defaults().unwrap();
    let result = pipeline.process_bytes(body.to_string().as_bytes(), &FormJsonReader);

    assert_eq!(result.status, ProcessingStatus::Success);
    assert_eq!(
        result.recommended_route,
        Some(RoutingDecision::StandardProcessing)
    );
    assert_eq!(
        result.reasoning.as_deref(),
        Some(
            "Claim meets all standard processing criteria. \
             Estimated damage: $40,000.00 (above fast-track threshold)."
        )
    );
    let fields = result.extracted_fields.unwrap();
    assert_eq!(fields["incidentInformation"]["incidentTime"], "10:30 PM");
    assert_eq!(fields["involvedParties"].as_array().unwrap().len(), 1);
}

#[test]
fn custom_config_changes_threshold_and_vocabulary() {
    let config = parse_config_str(
        r#"{
            "name": "Strict",
            "version": "1.0",
            "fast_track_threshold": "10000",
            "high_value_threshold": "50000",
            "fraud_keywords": ["stop light"]
        }"#,
    )
    .unwrap();
    let pipeline = Pipeline::new(config).unwrap();

    let result = pipeline.process_bytes(b"", &MockReader { source: form(&[]) });
    assert_eq!(result.recommended_route, Some(RoutingDecision::Investigation));

    let result = pipeline.process_bytes(
        b"",
        &MockReader {
            source: form(&[(DESCRIPTION_LABEL, "Hail on the roof")]),
        },
    );
    assert_eq!(
        result.recommended_route,
        Some(RoutingDecision::StandardProcessing)
    );
}

#[test]
fn free_text_without_real_attachments_still_warns() {
    let text = "\
Policy Number: POL-7782
Policyholder: Sam Lee
Incident Date: 04/10/2024
Incident Time: 6:40 PM
Location: Route 9 near exit 4
Description: Vehicle slid into a fence. No property damage beyond the fence.

Claimant Name: Sam Lee
Phone: 555-444-9090

VIN: 2T1BURHE0JC014235
Estimated Damage: $2,100.00
Attachments: None
";
    let pipeline = Pipeline::with_defaults().unwrap();
    let result = pipeline.process_bytes(text.as_bytes(), &PlainTextReader);

    assert_eq!(
        result.warnings,
        Some(vec!["No attachments/supporting documents provided".to_string()])
    );
    let fields = result.extracted_fields.unwrap();
    assert_eq!(fields["claimType"], "VEHICLE");
    assert_eq!(fields["assetDetails"]["assetType"], "VEHICLE");
    assert!(fields.get("attachments").is_none());
}
