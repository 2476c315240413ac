//! Serde roundtrip and JsonSchema validation tests for entity types.

use campus_core::entities::Institution;
use campus_core::enums::Category;
use pretty_assertions::assert_eq;
use schemars::schema_for;

fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

fn oxford() -> Institution {
    Institution {
        id: "6".into(),
        name: "University of Oxford".into(),
        location: "Oxford".into(),
        country: "United Kingdom".into(),
        category: Category::International,
        description: "Historic university.".into(),
        tuition_fee: "£30,000/year".into(),
        programs: vec!["Philosophy".into(), "Law".into()],
        rating: 4.8,
        image_ref: "https://example.com/oxford.jpg".into(),
        established_year: 1096,
        accreditations: vec!["QAA".into(), "GMC".into()],
    }
}

#[test]
fn institution_roundtrip_and_schema() {
    let val = oxford();

    let json_str = serde_json::to_string_pretty(&val).unwrap();
    let recovered: Institution = serde_json::from_str(&json_str).unwrap();
    assert_eq!(recovered, val);

    let schema = serde_json::to_value(schema_for!(Institution)).unwrap();
    let instance = serde_json::to_value(&val).unwrap();
    let errors = validate_against_schema(&schema, &instance);
    assert!(errors.is_empty(), "schema validation failed: {errors:?}");
}

#[test]
fn schema_rejects_unknown_category() {
    let schema = serde_json::to_value(schema_for!(Institution)).unwrap();
    let mut instance = serde_json::to_value(oxford()).unwrap();
    instance["type"] = serde_json::json!("overseas");
    let errors = validate_against_schema(&schema, &instance);
    assert!(!errors.is_empty());
}

#[test]
fn decodes_a_wire_record() {
    let raw = r#"{
        "id": "9",
        "name": "Technical University of Munich",
        "location": "Munich",
        "country": "Germany",
        "type": "international",
        "description": "Top technical university in Europe.",
        "tuitionFee": "€3,000/year",
        "programs": ["Engineering", "Computer Science"],
        "rating": 4.4,
        "image": "https://example.com/tum.jpg",
        "established": 1868,
        "accreditation": ["AQAS", "FIBAA"]
    }"#;

    let inst: Institution = serde_json::from_str(raw).unwrap();
    assert_eq!(inst.category, Category::International);
    assert_eq!(inst.established_year, 1868);
    assert_eq!(inst.accreditations, vec!["AQAS", "FIBAA"]);
}

#[test]
fn bundled_catalog_matches_schema() {
    let raw = include_str!("../../campus-catalog/data/fallback.json");
    let records: Vec<serde_json::Value> = serde_json::from_str(raw).unwrap();
    assert_eq!(records.len(), 9);

    let schema = serde_json::to_value(schema_for!(Institution)).unwrap();
    for record in &records {
        let errors = validate_against_schema(&schema, record);
        assert!(
            errors.is_empty(),
            "record {} failed schema validation: {errors:?}",
            record["id"]
        );
        let decoded: Institution = serde_json::from_value(record.clone()).unwrap();
        assert_eq!(serde_json::to_value(&decoded).unwrap(), *record);
    }
}
