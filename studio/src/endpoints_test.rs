use super::*;

#[test]
fn project_paths_format_expected_routes() {
    assert_eq!(project(12), "/projects/12");
    assert_eq!(project_sketch(12), "/projects/12/sketch");
}

#[test]
fn join_trims_trailing_slash_of_base() {
    assert_eq!(join("http://localhost:8000/", PROJECTS), "http://localhost:8000/projects/");
    assert_eq!(join("http://localhost:8000", AUTH_ME), "http://localhost:8000/auth/me");
}

#[test]
fn resolve_asset_joins_relative_references() {
    assert_eq!(
        resolve_asset("http://localhost:8000", "/static/mock_model.glb"),
        "http://localhost:8000/static/mock_model.glb"
    );
    assert_eq!(
        resolve_asset("http://localhost:8000/", "static/mock_model.glb"),
        "http://localhost:8000/static/mock_model.glb"
    );
}

#[test]
fn resolve_asset_keeps_absolute_references() {
    assert_eq!(
        resolve_asset("http://localhost:8000", "https://cdn.example.com/house.glb"),
        "https://cdn.example.com/house.glb"
    );
}
