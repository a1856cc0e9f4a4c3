use std::process::Command;

#[test]
fn sim_binary_smoke() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .arg("42")
        .output()
        .expect("failed to run sim binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    assert!(v["winner"].is_string());
    assert_eq!(v["seed"], 42);
    let lost = v["player1"]["ships_lost"].as_u64().unwrap() + v["player2"]["ships_lost"].as_u64().unwrap();
    assert!(lost >= 7);
    assert!(v["turns"].is_null());
    assert!(v["handovers"].is_u64());
    let shots = v["shots"].as_u64().unwrap();
    assert_eq!(
        shots,
        v["player1"]["shots"].as_u64().unwrap() + v["player2"]["shots"].as_u64().unwrap()
    );
    assert!(shots >= 7);
}

#[test]
fn sim_binary_is_deterministic() {
    let run = || {
        Command::new(env!("CARGO_BIN_EXE_sim"))
            .arg("7")
            .output()
            .expect("failed to run sim binary")
            .stdout
    };
    assert_eq!(run(), run());
}
