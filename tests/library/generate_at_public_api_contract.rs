use deployenv::ports::{Console, Prompter};
use deployenv::{AppError, CredentialSchema, GenerateOutcome, generate_at};
use std::collections::VecDeque;
use tempfile::TempDir;

struct Answers(VecDeque<&'static str>);

impl Prompter for Answers {
    fn input(&mut self, _prompt: &str) -> Result<String, AppError> {
        self.0.pop_front().map(str::to_string).ok_or(AppError::Interrupted)
    }

    fn secret(&mut self, prompt: &str) -> Result<String, AppError> {
        self.input(prompt)
    }
}

#[derive(Default)]
struct Silent;

impl Console for Silent {
    fn line(&mut self, _text: &str) {}
}

#[test]
fn generate_at_writes_into_given_root() {
    let temp = TempDir::new().unwrap();
    let answers = Answers(
        ["x, y", "admin", "pw", "db", "3306", "t1", "y", "t2", "y", "y"].into_iter().collect(),
    );

    let outcome =
        generate_at(temp.path(), CredentialSchema::Mysql, answers, Silent).expect("generate");

    let GenerateOutcome::Completed { env_files, deploy_script } = outcome else {
        panic!("expected completed run");
    };
    assert_eq!(env_files.len(), 2);
    assert!(env_files.iter().all(|report| report.is_created()));
    assert_eq!(env_files[1].service, "y");
    assert!(deploy_script.is_some());
    assert!(temp.path().join("x/env/.env").exists());
    assert!(temp.path().join("y/env/.env").exists());

    let script = std::fs::read_to_string(temp.path().join("deploy_services.sh")).unwrap();
    assert!(script.contains("services=(\"x\" \" y\")"));
}

#[test]
fn generate_at_surfaces_interruption() {
    let temp = TempDir::new().unwrap();
    let answers = Answers(["svc"].into_iter().collect());

    let result = generate_at(temp.path(), CredentialSchema::Postgresql, answers, Silent);

    assert!(matches!(result, Err(AppError::Interrupted)));
}
