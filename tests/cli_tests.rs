use std::process::Command;

#[test]
fn test_missing_shader_dir_exits_with_error() {
    let dir = std::env::temp_dir().join(format!("complex-dynamics-no-shaders-{}", std::process::id()));
    let expected = format!(
        "Could not find file: \"{}\"",
        dir.join("complex_dynamics.vert.wgsl").display()
    );

    let output = Command::new(env!("CARGO_BIN_EXE_complex-dynamics"))
        .arg("--shader-dir")
        .arg(&dir)
        .env("RUST_LOG", "off")
        .output()
        .expect("viewer binary runs");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains(&expected), "stderr: {stderr}");
    // Shaders load before the event loop or banner
    assert!(output.stdout.is_empty());
}

#[test]
fn test_zero_width_is_rejected() {
    let output = Command::new(env!("CARGO_BIN_EXE_complex-dynamics"))
        .args(["--width", "0"])
        .output()
        .expect("viewer binary runs");

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(2));
}
