use ds_project::{
    ProjectError, ProjectFile, load_project, save_project, validate_project, write_params_js,
};
use ds_sim::Parameters;

fn sample_project() -> ProjectFile {
    let params = Parameters {
        m: 2.0,
        c: 0.5,
        k: 18.0,
        y0: 0.03,
        v0: -0.1,
        duration: 12.0,
        dt: 0.002,
        scale: 40.0,
    };
    ProjectFile::new("Roundtrip", &params)
}

#[test]
fn roundtrip_yaml() {
    let project = sample_project();
    validate_project(&project).unwrap();

    let path = std::env::temp_dir().join("ds_project_roundtrip.yaml");
    save_project(&path, &project).unwrap();
    let loaded = load_project(&path).unwrap();

    assert_eq!(project, loaded);
    assert_eq!(loaded.parameters().unwrap().scale, 40.0);
}

#[test]
fn roundtrip_json() {
    let project = sample_project();

    let path = std::env::temp_dir().join("ds_project_roundtrip.json");
    save_project(&path, &project).unwrap();
    let loaded = load_project(&path).unwrap();

    assert_eq!(project, loaded);
}

#[test]
fn unknown_extension_is_rejected() {
    let path = std::env::temp_dir().join("ds_project_roundtrip.toml");
    assert!(matches!(
        load_project(&path),
        Err(ProjectError::UnknownFormat { .. })
    ));
}

#[test]
fn invalid_file_is_rejected_on_load() {
    let path = std::env::temp_dir().join("ds_project_invalid.yaml");
    std::fs::write(
        &path,
        "version: 1\nname: bad\nparameters: {m: 0.0, c: 0.1, k: 1.0, y0: 0.0, v0: 0.0, duration: 1.0, dt: 0.01}\n",
    )
    .unwrap();
    let err = load_project(&path).unwrap_err();
    assert!(err.to_string().contains("m must be strictly positive"));
}

#[test]
fn params_js_file_is_written() {
    let project = sample_project();
    let path = std::env::temp_dir().join("ds_project_params.js");
    write_params_js(&path, &project.parameters().unwrap()).unwrap();
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("window.DAMP_PARAMS = {"));
    assert!(content.ends_with("};"));
    assert!(content.contains("\"scale\":40.0"));
}
