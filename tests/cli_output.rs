use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_fitcalc"))
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("run fitcalc")
}

fn stdout_lines(out: &Output) -> Vec<String> {
    String::from_utf8_lossy(&out.stdout)
        .lines()
        .map(ToOwned::to_owned)
        .collect()
}

#[test]
fn demo_batch_prints_three_reports() {
    let out = run(&["-q"]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(
        stdout_lines(&out),
        [
            "Workout type: Swimming; Duration: 1.000 h.; Distance: 0.994 km; Avg. speed: 1.000 km/h; Calories burned: 336.000.",
            "Workout type: Running; Duration: 1.000 h.; Distance: 9.750 km; Avg. speed: 9.750 km/h; Calories burned: 699.750.",
            "Workout type: SportsWalking; Duration: 1.000 h.; Distance: 5.850 km; Avg. speed: 5.850 km/h; Calories burned: 157.500.",
        ]
    );
}

#[test]
fn russian_output_matches_reference_wording() {
    let out = run(&["-q", "--lang", "ru", "SWM:720,1,80,25,40"]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(
        stdout_lines(&out),
        ["Тип тренировки: Swimming; Длительность: 1.000 ч.; Дистанция: 0.994 км; Ср. скорость: 1.000 км/ч; Потрачено ккал: 336.000."]
    );
}

#[test]
fn json_lines_parse() {
    let out = run(&["-q", "--json", "RUN:15000,1,75", "WLK:9000,1,75,180"]);
    assert_eq!(out.status.code(), Some(0));
    let lines = stdout_lines(&out);
    assert_eq!(lines.len(), 2);
    let v: serde_json::Value = serde_json::from_str(&lines[1]).expect("json");
    assert_eq!(v["training_type"], "SportsWalking");
    let calories = v["calories"].as_f64().expect("calories");
    assert!((calories - 157.5).abs() < 1e-9);
}

#[test]
fn unknown_tag_is_fatal_and_named() {
    let out = run(&["-q", "RUN:15000,1,75", "XYZ:1,1,1", "SWM:720,1,80,25,40"]);
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(stdout_lines(&out).len(), 1);
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("XYZ"), "stderr: {stderr}");
}

#[test]
fn keep_going_reports_the_rest() {
    let out = run(&[
        "-qq",
        "--keep-going",
        "RUN:15000,1,75",
        "XYZ:1,1,1",
        "SWM:720,1,80,25,40",
    ]);
    assert_eq!(out.status.code(), Some(1));
    let lines = stdout_lines(&out);
    assert_eq!(lines.len(), 2);
    assert!(lines[1].starts_with("Workout type: Swimming;"));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("XYZ"), "stderr: {stderr}");
}

#[test]
fn malformed_package_exits_with_usage_error() {
    let out = run(&["RUN=15000,1,75"]);
    assert_eq!(out.status.code(), Some(2));
}

#[test]
fn invalid_value_is_fatal_and_names_the_field() {
    let out = run(&["-q", "RUN:15000,0,75"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("invalid duration"), "stderr: {stderr}");
}

#[test]
fn overflowing_metric_is_fatal_instead_of_null_json() {
    let out = run(&["-q", "--json", "RUN:15000,1e-320,75"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("speed is not a finite number"), "stderr: {stderr}");
}
