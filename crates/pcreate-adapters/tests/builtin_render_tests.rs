//! End-to-end rendering of the built-in scaffolds onto a real directory.

use std::fs;
use std::sync::Arc;

use pcreate_adapters::{
    InMemoryCatalog, LocalFilesystem, MemorySink, PinnedDistribution,
};
use pcreate_core::prelude::*;
use tempfile::TempDir;

fn service(workdir: &TempDir, version: &str) -> (CreateService, MemorySink) {
    let sink = MemorySink::new();
    let catalog = InMemoryCatalog::with_builtin_on(Arc::new(LocalFilesystem::new())).unwrap();
    let service = CreateService::new(
        Box::new(catalog),
        Box::new(PinnedDistribution::new("pyramid", version)),
        Box::new(sink.clone()),
        workdir.path(),
    );
    (service, sink)
}

#[test]
fn starter_renders_into_project_dir() {
    let workdir = TempDir::new().unwrap();
    let (service, sink) = service(&workdir, "1.5.2");

    let invocation = Invocation::builder().scaffold("starter").project("Blog-App").build();
    assert_eq!(service.run(&invocation).unwrap(), ExitStatus::Success);

    let root = workdir.path().join("Blog-App");
    let readme = fs::read_to_string(root.join("README.txt")).unwrap();
    assert!(readme.starts_with("Blog-App README"));
    assert!(readme.contains("/en/1.5-branch/"));

    let ini = fs::read_to_string(root.join("development.ini")).unwrap();
    assert!(ini.contains("use = egg:Blog_App"));

    assert!(root.join("blog_app/__init__.py").is_file());
    assert!(root.join("blog_app/templates/mytemplate.pt").is_file());
    assert!(!root.join("setup.py_tmpl").exists());
    assert!(sink.lines().is_empty());
}

#[test]
fn two_scaffolds_share_one_directory() {
    let workdir = TempDir::new().unwrap();
    let (service, _) = service(&workdir, "1.10");

    let invocation = Invocation::builder()
        .scaffolds(["starter", "alchemy"])
        .project("Shop")
        .overwrite(true)
        .build();
    assert_eq!(service.run(&invocation).unwrap(), ExitStatus::Success);

    let root = workdir.path().join("Shop");
    assert!(root.join("shop/models.py").is_file());
    let setup = fs::read_to_string(root.join("setup.py")).unwrap();
    assert!(setup.contains("'SQLAlchemy',"));
}

#[test]
fn existing_file_is_kept_without_overwrite() {
    let workdir = TempDir::new().unwrap();
    let root = workdir.path().join("Keep");
    fs::create_dir_all(&root).unwrap();
    fs::write(root.join("README.txt"), "hand written").unwrap();

    let (service, _) = service(&workdir, "1.9");
    let invocation = Invocation::builder().scaffold("starter").project("Keep").build();
    service.run(&invocation).unwrap();

    assert_eq!(fs::read_to_string(root.join("README.txt")).unwrap(), "hand written");
    assert!(root.join("setup.py").is_file());
}

#[test]
fn simulate_leaves_disk_untouched() {
    let workdir = TempDir::new().unwrap();
    let (service, _) = service(&workdir, "1.9");

    let invocation = Invocation::builder()
        .scaffold("alchemy")
        .project("Dry")
        .simulate(true)
        .build();
    assert_eq!(service.run(&invocation).unwrap(), ExitStatus::Success);
    assert!(!workdir.path().join("Dry").exists());
}

#[test]
fn listing_shows_builtins() {
    let workdir = TempDir::new().unwrap();
    let (service, sink) = service(&workdir, "1.9");

    service.run(&Invocation::builder().list(true).build()).unwrap();
    assert_eq!(
        sink.lines(),
        vec![
            "Available scaffolds:",
            "  alchemy:  Web application project using SQLAlchemy",
            "  starter:  Basic web application project",
        ]
    );
}

#[test]
fn reserved_project_name_is_usage_error() {
    let workdir = TempDir::new().unwrap();
    let (service, sink) = service(&workdir, "1.9");

    let invocation = Invocation::builder().scaffold("starter").project("Pyramid").build();
    assert_eq!(service.run(&invocation).unwrap(), ExitStatus::Usage);
    assert_eq!(sink.lines().len(), 1);
    assert!(!workdir.path().join("Pyramid").exists());
}

#[test]
fn empty_pinned_version_is_an_error() {
    let workdir = TempDir::new().unwrap();
    let (service, _) = service(&workdir, "");

    let invocation = Invocation::builder().scaffold("starter").project("NoVer").build();
    let err = service.run(&invocation).unwrap_err();
    assert_eq!(err.category(), pcreate_core::error::ErrorCategory::Configuration);
}
