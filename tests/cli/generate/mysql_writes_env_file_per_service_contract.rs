use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn mysql_run_writes_nine_schema_fields_plus_token_per_service() {
    let ctx = TestContext::new();

    ctx.cli()
        .write_stdin(TestContext::answers(&[
            "a,b", "admin", "pw123", "db", "3306", "t1", "yes", "t2", "yes", "no",
        ]))
        .assert()
        .success()
        .stdout(predicate::str::contains("Created a/env/.env"))
        .stdout(predicate::str::contains("Created b/env/.env"))
        .stdout(predicate::str::contains("MYSQL_PASSWORD: *****"))
        .stdout(predicate::str::contains("No deployment script generated."));

    let a = ctx.read_env_file("a");
    assert_eq!(a.lines().count(), 10);
    assert!(a.starts_with("SUPERUSER_ID=admin\nDEVMODE=false\nTZ=Europe/Moscow\n"));
    assert!(a.contains("MYSQL_DATABASE=admin\n"));
    assert!(a.ends_with("TELEGRAM_BOT_TOKEN=t1\n"));

    let b = ctx.read_env_file("b");
    assert!(b.contains("MYSQL_DATABASE=admin\n"));
    assert!(b.ends_with("TELEGRAM_BOT_TOKEN=t2\n"));

    assert!(!ctx.deploy_script().exists());
}
