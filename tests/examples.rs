fn check_actions(actions: &[&str]) -> std::process::ExitStatus {
    let example = escargot::CargoBuild::new()
        .current_release()
        .current_target()
        .manifest_path("./form/Cargo.toml")
        .example("check_actions")
        .run()
        .expect("Failed building check_actions example");

    example
        .command()
        .args(actions)
        .status()
        .expect("Failed running check_actions example")
}

#[test]
fn check_valid_actions() {
    println!("Build and run the example with valid actions");
    let exit_status = check_actions(&[
        "OK",
        "  reject   Go away",
        "550 5.7.1 Access denied",
        "FILTER smtp:[127.0.0.1]:10025",
        "permit_mynetworks reject_unauth_destination",
    ]);

    if !exit_status.success() {
        panic!("Example failed with status {}", exit_status);
    }
}

#[test]
fn check_invalid_actions() {
    println!("Build and run the example with an invalid action");
    let exit_status = check_actions(&["OK", "BCC not-an-address"]);

    assert!(
        !exit_status.success(),
        "Example accepted an invalid action"
    );
}
