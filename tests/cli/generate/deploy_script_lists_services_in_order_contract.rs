use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn deploy_script_lists_each_service_once_in_input_order() {
    let ctx = TestContext::new();

    ctx.cli()
        .write_stdin(TestContext::answers(&[
            "svcA,svcB", "admin", "pw", "db", "3306", "t1", "y", "t2", "y", "yes",
        ]))
        .assert()
        .success()
        .stdout(predicate::str::contains("Deployment script generated: deploy_services.sh"));

    let script = std::fs::read_to_string(ctx.deploy_script()).expect("read deploy script");
    assert!(script.contains("services=(\"svcA\" \"svcB\")"));
    assert_eq!(script.matches("svcA").count(), 1);
    assert_eq!(script.matches("svcB").count(), 1);
    assert!(script.contains("--env-file ./env/.env up -d"));
}

#[test]
fn deploy_script_is_overwritten_on_each_generation() {
    let ctx = TestContext::new();
    std::fs::write(ctx.deploy_script(), "stale\n").unwrap();

    ctx.cli()
        .write_stdin(TestContext::answers(&["", "admin", "pw", "db", "3306", "y"]))
        .assert()
        .success();

    let script = std::fs::read_to_string(ctx.deploy_script()).unwrap();
    assert!(!script.contains("stale"));
    assert!(script.contains("services=()"));
}

#[cfg(unix)]
#[test]
fn deploy_script_is_executable() {
    use std::os::unix::fs::PermissionsExt;

    let ctx = TestContext::new();

    ctx.cli()
        .write_stdin(TestContext::answers(&["svc", "admin", "pw", "db", "3306", "t", "y", "y"]))
        .assert()
        .success();

    let mode = std::fs::metadata(ctx.deploy_script()).unwrap().permissions().mode();
    assert!(mode & 0o111 != 0, "deploy_services.sh should be executable");
}
