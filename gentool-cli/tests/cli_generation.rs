//! Integration tests for the generate command

use std::fs;
use std::io::Cursor;
use std::path::Path;

use gentool::config::GentoolConfig;
use gentool::generation::GenerationType;
use gentool_cli_lib::prompt::LinePrompt;
use gentool_cli_lib::GenerateCommand;
use tempfile::TempDir;

/// Configuration without the cosmetic delay
fn quiet_config() -> GentoolConfig {
    let mut config = GentoolConfig::default();
    config.progress.enabled = false;
    config
}

fn prompt(input: &str) -> LinePrompt<Cursor<Vec<u8>>, Vec<u8>> {
    LinePrompt::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

#[test]
fn test_prompted_module_generation() {
    let src = TempDir::new().unwrap();
    write(src.path(), "ExampleApplication.txt", "Example module example");
    let out = TempDir::new().unwrap();

    let cmd = GenerateCommand::new(src.path().to_path_buf(), out.path().to_path_buf());
    let mut prompt = prompt("1\nbilling\n");
    let report = cmd.execute_with(&quiet_config(), &mut prompt).unwrap();

    assert_eq!(report.output_dir, out.path().join("billingmodule"));
    assert_eq!(
        fs::read_to_string(report.output_dir.join("BillingApplication.txt")).unwrap(),
        "Billing module billing"
    );
}

#[test]
fn test_prompt_retries_then_generates_crud() {
    let src = TempDir::new().unwrap();
    write(src.path(), "service/CrudExampleService.java", "crudExample instance");
    let out = TempDir::new().unwrap();

    let cmd = GenerateCommand::new(src.path().to_path_buf(), out.path().to_path_buf());
    let mut prompt = prompt("zero\n0\n2\nOrder\n");
    let report = cmd.execute_with(&quiet_config(), &mut prompt).unwrap();

    assert_eq!(
        fs::read_to_string(report.output_dir.join("service/OrderService.java")).unwrap(),
        "order instance"
    );
    let transcript = String::from_utf8(prompt.into_writer()).unwrap();
    assert_eq!(transcript.matches("What do you wanna generate?").count(), 3);
}

#[test]
fn test_flags_skip_prompts() {
    let src = TempDir::new().unwrap();
    write(src.path(), "CRUDEXAMPLE.sql", "CREATE TABLE crudexample;");
    let out = TempDir::new().unwrap();

    let mut cmd = GenerateCommand::new(src.path().to_path_buf(), out.path().to_path_buf());
    cmd.gen_type = Some(GenerationType::Crud);
    cmd.name = Some("invoice".to_string());
    cmd.no_staging = true;

    let mut config = quiet_config();
    cmd.apply_overrides(&mut config);
    let mut prompt = prompt("");
    let report = cmd.execute_with(&config, &mut prompt).unwrap();

    assert_eq!(report.output_dir, out.path().join("invoice"));
    assert_eq!(
        fs::read_to_string(report.output_dir.join("INVOICE.sql")).unwrap(),
        "CREATE TABLE invoice;"
    );
    assert!(prompt.into_writer().is_empty());
}

#[test]
fn test_missing_example_directory_fails() {
    let out = TempDir::new().unwrap();
    let cmd = GenerateCommand::new(out.path().join("missing"), out.path().to_path_buf());

    let err = cmd
        .execute_with(&quiet_config(), &mut prompt("1\nbilling\n"))
        .unwrap_err();

    assert!(format!("{err:#}").contains("doesn't exist"));
    assert_eq!(fs::read_dir(out.path()).unwrap().count(), 0);
}

#[test]
fn test_gives_up_after_max_attempts() {
    let src = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let cmd = GenerateCommand::new(src.path().to_path_buf(), out.path().to_path_buf());

    let mut config = quiet_config();
    config.prompt.max_attempts = 2;

    let err = cmd
        .execute_with(&config, &mut prompt("9\n9\n9\n"))
        .unwrap_err();
    assert!(err.to_string().contains("Giving up after 2"));
}
