use super::*;

#[test]
fn relative_concept_is_joined_onto_api_base() {
    assert_eq!(
        asset_link("http://localhost:8000", Some("/static/mock_model.glb")).as_deref(),
        Some("http://localhost:8000/static/mock_model.glb")
    );
}

#[test]
fn absolute_concept_passes_through() {
    assert_eq!(
        asset_link("http://localhost:8000", Some("https://cdn.example.com/m.glb")).as_deref(),
        Some("https://cdn.example.com/m.glb")
    );
}

#[test]
fn missing_or_blank_concept_has_no_link() {
    assert!(asset_link("http://localhost:8000", None).is_none());
    assert!(asset_link("http://localhost:8000", Some("  ")).is_none());
}

#[test]
fn grid_offsets_cover_both_borders() {
    let offsets = grid_offsets(4, 100.0);
    assert_eq!(offsets, vec![0.0, 25.0, 50.0, 75.0, 100.0]);
}

#[test]
fn grid_offsets_with_zero_cells_do_not_divide_by_zero() {
    assert_eq!(grid_offsets(0, 100.0), vec![0.0]);
}
