//! Phase-level pipeline scenarios: discovery, phase classpath, output layout

mod common;

use common::{put_source, FixtureCompiler};
use mclbuild::{BuildConfig, BuildPhase, BuildPipeline, FsSourceRepository, LocalFs};
use std::path::Path;
use tempfile::tempdir;

fn project_config(root: &Path) -> BuildConfig {
    BuildConfig {
        source_dirs: vec![root.join("src/main/mcl")],
        test_source_dirs: vec![root.join("src/test/mcl")],
        output_dir: root.join("target/classes"),
        test_output_dir: root.join("target/test-classes"),
        ..BuildConfig::default()
    }
}

#[test]
fn main_phase_compiles_into_the_main_output() {
    let project = tempdir().unwrap();
    put_source(project.path(), "src/main/mcl/Main.mcl");
    put_source(project.path(), "src/main/mcl/util/Helper.mcl");

    let pipeline = BuildPipeline::new(
        project_config(project.path()),
        FsSourceRepository::new(),
        FixtureCompiler::new("app", b"main-bytes"),
        LocalFs::new(),
    );

    let result = pipeline.run(BuildPhase::Main).unwrap();

    assert_eq!(result.class_count, 2);
    assert!(project
        .path()
        .join("target/classes/app/Main.class")
        .is_file());
    assert!(project
        .path()
        .join("target/classes/app/Helper.class")
        .is_file());
}

#[test]
fn test_phase_resolves_main_classes_first() {
    let project = tempdir().unwrap();
    put_source(project.path(), "src/main/mcl/Main.mcl");
    put_source(project.path(), "src/test/mcl/MainTest.mcl");
    let config = project_config(project.path());

    let main_pipeline = BuildPipeline::new(
        config.clone(),
        FsSourceRepository::new(),
        FixtureCompiler::new("app", b"main-bytes"),
        LocalFs::new(),
    );
    main_pipeline.run(BuildPhase::Main).unwrap();

    let test_compiler = FixtureCompiler::new("app", b"test-bytes").watching("app.Main");
    let test_pipeline = BuildPipeline::new(
        config.clone(),
        FsSourceRepository::new(),
        test_compiler.clone(),
        LocalFs::new(),
    );
    let result = test_pipeline.run(BuildPhase::Test).unwrap();

    // the freshly built main class resolved from the main output directory
    assert_eq!(test_compiler.located(), Some(config.output_dir.clone()));
    assert_eq!(result.class_count, 1);
    assert!(project
        .path()
        .join("target/test-classes/app/MainTest.class")
        .is_file());
}

#[test]
fn phase_without_a_source_tree_is_a_noop() {
    let project = tempdir().unwrap();
    put_source(project.path(), "src/main/mcl/Main.mcl");

    let pipeline = BuildPipeline::new(
        project_config(project.path()),
        FsSourceRepository::new(),
        FixtureCompiler::new("app", b"bytes"),
        LocalFs::new(),
    );

    let result = pipeline.run(BuildPhase::Test).unwrap();

    assert!(result.skipped);
    assert!(!project
        .path()
        .join("target/test-classes/app")
        .exists());
}

#[test]
fn phases_do_not_cross_their_output_directories() {
    let project = tempdir().unwrap();
    put_source(project.path(), "src/main/mcl/Main.mcl");
    put_source(project.path(), "src/test/mcl/MainTest.mcl");
    let config = project_config(project.path());

    for phase in [BuildPhase::Main, BuildPhase::Test] {
        let pipeline = BuildPipeline::new(
            config.clone(),
            FsSourceRepository::new(),
            FixtureCompiler::new("app", b"bytes"),
            LocalFs::new(),
        );
        pipeline.run(phase).unwrap();
    }

    assert!(project
        .path()
        .join("target/classes/app/Main.class")
        .is_file());
    assert!(!project
        .path()
        .join("target/classes/app/MainTest.class")
        .exists());
    assert!(project
        .path()
        .join("target/test-classes/app/MainTest.class")
        .is_file());
    assert!(!project
        .path()
        .join("target/test-classes/app/Main.class")
        .exists());
}
