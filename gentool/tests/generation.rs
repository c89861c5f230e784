//! Integration tests for the generation pipeline

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use gentool::config::OutputSettings;
use gentool::materializer::copy_tree;
use gentool::{Args, GenError, GenerationType, Generator, NoopObserver};
use tempfile::TempDir;
use walkdir::WalkDir;

/// Relative paths of every entry below `root`
fn relative_paths(root: &Path) -> BTreeSet<PathBuf> {
    WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .map(|e| e.unwrap().path().strip_prefix(root).unwrap().to_path_buf())
        .collect()
}

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn generate(gen_type: GenerationType, name: &str, src: &Path, out: &Path, staging: bool) -> PathBuf {
    let args = Args::new(gen_type, name, src, out).unwrap();
    Generator::new(args, &OutputSettings { staging })
        .run(&mut NoopObserver)
        .unwrap()
        .output_dir
}

/// Module example tree resembling a small Spring module
fn module_fixture() -> TempDir {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    write(
        root,
        "ExampleApplication.java",
        "package com.acme.examplemodule;\n\npublic class ExampleApplication {}\n",
    );
    write(
        root,
        "examplemodule/ExampleController.java",
        "@RequestMapping(\"/example\")\nclass ExampleController { String EXAMPLE_KEY; }\n",
    );
    write(root, "resources/application-example.yml", "name: example\n");
    fs::create_dir_all(root.join("examplemodule/empty")).unwrap();
    temp
}

#[test]
fn test_module_end_to_end() {
    let src = TempDir::new().unwrap();
    write(src.path(), "ExampleApplication.txt", "Example module example");
    let out = TempDir::new().unwrap();

    let gen_dir = generate(GenerationType::Module, "billing", src.path(), out.path(), true);

    assert_eq!(gen_dir, out.path().join("billingmodule"));
    assert_eq!(
        fs::read_to_string(gen_dir.join("BillingApplication.txt")).unwrap(),
        "Billing module billing"
    );
    assert!(!gen_dir.join("ExampleApplication.txt").exists());
}

#[test]
fn test_crud_end_to_end() {
    let src = TempDir::new().unwrap();
    write(src.path(), "CrudExampleService.java", "crudExample instance");
    let out = TempDir::new().unwrap();

    let gen_dir = generate(GenerationType::Crud, "Order", src.path(), out.path(), true);

    assert_eq!(gen_dir, out.path().join("order"));
    assert_eq!(
        fs::read_to_string(gen_dir.join("OrderService.java")).unwrap(),
        "order instance"
    );
}

#[test]
fn test_module_output_has_no_placeholders() {
    let src = module_fixture();
    let out = TempDir::new().unwrap();

    let gen_dir = generate(GenerationType::Module, "Payroll", src.path(), out.path(), true);

    for entry in WalkDir::new(&gen_dir).min_depth(1) {
        let entry = entry.unwrap();
        let name = entry.file_name().to_string_lossy().to_lowercase();
        assert!(!name.contains("example"), "Name not replaced: {name}");

        if entry.file_type().is_file() {
            let content = fs::read_to_string(entry.path()).unwrap();
            assert!(
                !content.to_lowercase().contains("example"),
                "Content not replaced in {}: {content}",
                entry.path().display()
            );
        }
    }

    assert_eq!(
        fs::read_to_string(gen_dir.join("PayrollApplication.java")).unwrap(),
        "package com.acme.payroll;\n\npublic class PayrollApplication {}\n"
    );
    assert_eq!(
        fs::read_to_string(gen_dir.join("payroll/PayrollController.java")).unwrap(),
        "@RequestMapping(\"/payroll\")\nclass PayrollController { String PAYROLL_KEY; }\n"
    );
    assert!(gen_dir.join("payroll/empty").is_dir());
    assert!(gen_dir.join("resources/application-payroll.yml").is_file());
}

#[test]
fn test_copy_preserves_relative_paths() {
    let src = module_fixture();
    let dst = TempDir::new().unwrap();

    copy_tree(src.path(), dst.path()).unwrap();

    assert_eq!(relative_paths(src.path()), relative_paths(dst.path()));
}

#[test]
fn test_staged_and_direct_runs_agree() {
    let src = module_fixture();
    let staged = TempDir::new().unwrap();
    let direct = TempDir::new().unwrap();

    let a = generate(GenerationType::Module, "Ledger", src.path(), staged.path(), true);
    let b = generate(GenerationType::Module, "Ledger", src.path(), direct.path(), false);

    assert_eq!(relative_paths(&a), relative_paths(&b));
}

#[test]
fn test_missing_source_leaves_destination_untouched() {
    let out = TempDir::new().unwrap();
    let missing = out.path().join("no-such-example");
    let args = Args::new(GenerationType::Module, "Billing", &missing, out.path()).unwrap();

    for staging in [true, false] {
        let err = Generator::new(args.clone(), &OutputSettings { staging })
            .run(&mut NoopObserver)
            .unwrap_err();
        assert!(matches!(err, GenError::PathNotFound { .. }));
    }
    assert_eq!(fs::read_dir(out.path()).unwrap().count(), 0);
}

#[test]
fn test_generating_into_existing_target_merges() {
    let src = TempDir::new().unwrap();
    write(src.path(), "CrudExampleRepository.kt", "class CrudExampleRepository");
    let out = TempDir::new().unwrap();
    write(out.path(), "invoice/Existing.kt", "keep me");

    let gen_dir = generate(GenerationType::Crud, "Invoice", src.path(), out.path(), true);

    assert_eq!(fs::read_to_string(gen_dir.join("Existing.kt")).unwrap(), "keep me");
    assert_eq!(
        fs::read_to_string(gen_dir.join("InvoiceRepository.kt")).unwrap(),
        "class InvoiceRepository"
    );
    // No staging directory is left behind
    assert_eq!(fs::read_dir(out.path()).unwrap().count(), 1);
}

#[test]
fn test_generating_inside_example_directory() {
    for staging in [true, false] {
        let src = TempDir::new().unwrap();
        write(src.path(), "ExampleApplication.txt", "Example");
        let args = Args::new(GenerationType::Module, "Billing", src.path(), src.path()).unwrap();

        let report = Generator::new(args, &OutputSettings { staging })
            .run(&mut NoopObserver)
            .unwrap();

        assert_eq!(report.files_copied, 1, "staging = {staging}");
        assert_eq!(
            relative_paths(&report.output_dir),
            BTreeSet::from([PathBuf::from("BillingApplication.txt")]),
            "staging = {staging}"
        );
        assert_eq!(
            relative_paths(src.path()),
            BTreeSet::from([
                PathBuf::from("ExampleApplication.txt"),
                PathBuf::from("billingmodule"),
                PathBuf::from("billingmodule/BillingApplication.txt"),
            ]),
            "staging = {staging}"
        );
    }
}
