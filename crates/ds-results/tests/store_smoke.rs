use ds_results::*;
use ds_sim::{Parameters, integrate};

fn manifest_for(run_id: &str, params: Parameters, samples: usize) -> RunManifest {
    RunManifest {
        run_id: run_id.to_string(),
        project_name: "smoke".to_string(),
        timestamp: "2026-10-19T12:00:00Z".to_string(),
        parameters: params,
        max_steps: 1000,
        engine_version: "v1".to_string(),
        samples,
    }
}

#[test]
fn save_and_load_run() {
    let temp_dir = std::env::temp_dir().join("ds_results_test");
    let _ = std::fs::remove_dir_all(&temp_dir);

    let store = RunStore::new(temp_dir.clone()).unwrap();

    let params = Parameters {
        duration: 1.0,
        dt: 0.01,
        ..Parameters::default()
    };
    let traj = integrate(&params).unwrap();
    let records = records_from_trajectory(&traj);
    let run_id = compute_run_id(&params, 1000, "v1");
    let manifest = manifest_for(&run_id, params, records.len());

    store.save_run(&manifest, &records).unwrap();
    assert!(store.has_run(&run_id));

    let loaded_manifest = store.load_manifest(&run_id).unwrap();
    assert_eq!(loaded_manifest.parameters, params);
    assert_eq!(loaded_manifest.samples, 101);

    let loaded = store.load_trajectory(&run_id).unwrap();
    assert_eq!(trajectory_from_records(&loaded), traj);

    let runs = store.list_runs().unwrap();
    assert_eq!(runs.len(), 1);

    store.delete_run(&run_id).unwrap();
    assert!(!store.has_run(&run_id));
}

#[test]
fn missing_run_is_reported() {
    let temp_dir = std::env::temp_dir().join("ds_results_missing");
    let store = RunStore::new(temp_dir).unwrap();
    assert!(matches!(
        store.load_manifest("nope"),
        Err(ResultsError::RunNotFound { .. })
    ));
    assert!(matches!(
        store.load_trajectory("nope"),
        Err(ResultsError::RunNotFound { .. })
    ));
}

#[test]
fn store_for_project_lives_next_to_file() {
    let project_dir = std::env::temp_dir().join("ds_results_project");
    let _ = std::fs::remove_dir_all(&project_dir);
    std::fs::create_dir_all(&project_dir).unwrap();

    let store = RunStore::for_project(&project_dir.join("demo.yaml")).unwrap();
    assert!(project_dir.join(".dampsim").join("runs").is_dir());
    assert!(store.list_runs().unwrap().is_empty());
}
