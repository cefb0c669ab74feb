use std::process::Command;

fn run_sim(args: &[&str]) -> serde_json::Value {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(args)
        .output()
        .expect("failed to run sim binary");
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    serde_json::from_str(stdout.trim()).expect("invalid json")
}

#[test]
fn sim_binary_smoke() {
    let v = run_sim(&["--seed", "1", "--map", "0"]);
    assert_eq!(v["tier"], "Two");
    assert_eq!(v["sink_events"], 7);
    assert!(v["shots"].as_u64().unwrap() <= 100);
    assert_eq!(v["final_sink_shot"], v["shots"]);
}

#[test]
fn sim_binary_impossible_on_random_board() {
    let v = run_sim(&["--seed", "9", "--tier", "impossible"]);
    assert_eq!(v["shots"], 28);
    assert_eq!(v["wasted_shots"], 0);
}
