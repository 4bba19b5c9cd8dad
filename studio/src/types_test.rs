use super::*;

#[test]
fn identity_accepts_null_and_missing_name() {
    let with_null: Identity =
        serde_json::from_value(serde_json::json!({ "id": 4, "email": "a@b.com", "name": null, "provider": "local" }))
            .unwrap();
    assert_eq!(with_null.name, "");

    let missing: Identity = serde_json::from_value(serde_json::json!({ "id": 4, "email": "a@b.com" })).unwrap();
    assert_eq!(missing.name, "");
    assert_eq!(missing.greeting_name(), "a@b.com");
}

#[test]
fn project_ignores_unknown_fields() {
    let project: Project = serde_json::from_value(serde_json::json!({
        "id": 9,
        "title": "Cabin",
        "owner_id": 1,
        "created_at": "2024-05-01T10:00:00Z"
    }))
    .unwrap();
    assert_eq!(project.id, 9);
    assert_eq!(project.brief(), "");
    assert!(project.stored_result().is_none());
}

#[test]
fn stored_result_requires_non_empty_narrative() {
    let mut project: Project = serde_json::from_value(serde_json::json!({
        "id": 1,
        "title": "Loft",
        "design_narrative": "",
        "compliance_notes": "ok"
    }))
    .unwrap();
    assert!(project.stored_result().is_none());

    project.design_narrative = Some("Open plan".to_owned());
    project.design_concept_url = Some("/static/mock_model.glb".to_owned());
    let result = project.stored_result().unwrap();
    assert_eq!(result.design_narrative, "Open plan");
    assert_eq!(result.compliance_notes, "ok");
    assert_eq!(result.design_concept_url.as_deref(), Some("/static/mock_model.glb"));
}

#[test]
fn design_result_keeps_backend_fallback_note() {
    let result: DesignResult = serde_json::from_value(serde_json::json!({
        "design_concept_url": "/static/mock_model.glb",
        "design_narrative": "Design generated based on: cabin",
        "compliance_notes": "Compliance check completed.",
        "error": "model timeout"
    }))
    .unwrap();
    assert_eq!(result.error.as_deref(), Some("model timeout"));
}

#[test]
fn generation_form_omits_missing_sketch() {
    let form = GenerationForm { project_id: 7, text_brief: "two storey house".to_owned(), sketch_data: None };
    assert_eq!(
        form.fields(),
        vec![("project_id", "7".to_owned()), ("text_brief", "two storey house".to_owned())]
    );

    let with_sketch = GenerationForm { sketch_data: Some("{\"lines\":[]}".to_owned()), ..form };
    assert_eq!(with_sketch.fields().last(), Some(&("sketch_data", "{\"lines\":[]}".to_owned())));
}

#[test]
fn project_update_serializes_null_sketch() {
    let update = ProjectUpdate {
        description: "brief".to_owned(),
        sketch_data: None,
        design_narrative: "n".to_owned(),
        compliance_notes: "c".to_owned(),
        design_concept_url: None,
    };
    assert_eq!(
        serde_json::to_value(&update).unwrap(),
        serde_json::json!({
            "description": "brief",
            "sketch_data": null,
            "design_narrative": "n",
            "compliance_notes": "c",
            "design_concept_url": null
        })
    );
}
