use ds_app::{RunOptions, RunRequest, ensure_run, list_runs, load_run};
use ds_sim::Parameters;

#[test]
fn second_run_is_served_from_cache() {
    let project_dir = std::env::temp_dir().join("ds_app_run_cache");
    let _ = std::fs::remove_dir_all(&project_dir);
    std::fs::create_dir_all(&project_dir).unwrap();
    let project_path = project_dir.join("demo.yaml");

    let params = Parameters {
        duration: 2.0,
        ..Parameters::default()
    };
    let request = RunRequest {
        project_path: &project_path,
        project_name: "demo",
        params,
        options: RunOptions::default(),
    };

    let first = ensure_run(&request).unwrap();
    assert!(!first.loaded_from_cache);
    assert_eq!(first.timing.steps, 500);

    let second = ensure_run(&request).unwrap();
    assert!(second.loaded_from_cache);
    assert_eq!(second.run_id, first.run_id);
    assert_eq!(second.trajectory, first.trajectory);

    let runs = list_runs(&project_path).unwrap();
    assert_eq!(runs.len(), 1);
    assert_eq!(runs[0].parameters, params);

    let (manifest, traj) = load_run(&project_path, &first.run_id).unwrap();
    assert_eq!(manifest.samples, 501);
    assert_eq!(traj, first.trajectory);
}

#[test]
fn no_cache_recomputes() {
    let project_dir = std::env::temp_dir().join("ds_app_no_cache");
    let _ = std::fs::remove_dir_all(&project_dir);
    std::fs::create_dir_all(&project_dir).unwrap();
    let project_path = project_dir.join("demo.yaml");

    let mut request = RunRequest {
        project_path: &project_path,
        project_name: "demo",
        params: Parameters {
            duration: 1.0,
            ..Parameters::default()
        },
        options: RunOptions::default(),
    };
    ensure_run(&request).unwrap();

    request.options.use_cache = false;
    let again = ensure_run(&request).unwrap();
    assert!(!again.loaded_from_cache);
}
