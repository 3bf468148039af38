use std::process::Command;

#[test]
fn sim_binary_reports_json() {
    let output = Command::new("cargo")
        .args(["run", "--quiet", "--bin", "sim", "--", "probability", "3", "7"])
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .output()
        .expect("failed to run sim binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let report: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    assert_eq!(report["strategy"], "probability");
    assert_eq!(report["games"], 3);
    assert_eq!(report["wins"], 3);
    assert!(report["mean_turns"].as_f64().unwrap() >= 17.0);
}
