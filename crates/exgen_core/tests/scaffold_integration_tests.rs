//! Integration tests for scaffold generation.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use exgen_core::{
    AuthScaffolder, ExgenConfig, FileStatus, PathPlanner, ScaffoldEngine, ScaffoldError,
    StructureInitializer,
};
use exgen_templates::{
    DbFlavor, Language, ModuleFlavor, ModuleKind, ModuleName, TemplateError,
};
use tempfile::tempdir;

/// Snapshot of every file under `dir`, keyed by relative path.
fn snapshot(dir: &Path) -> BTreeMap<PathBuf, String> {
    fn walk(base: &Path, dir: &Path, out: &mut BTreeMap<PathBuf, String>) {
        for entry in fs::read_dir(dir).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                walk(base, &path, out);
            } else {
                let rel = path.strip_prefix(base).unwrap().to_path_buf();
                out.insert(rel, fs::read_to_string(&path).unwrap());
            }
        }
    }

    let mut out = BTreeMap::new();
    if dir.exists() {
        walk(dir, dir, &mut out);
    }
    out
}

fn project_with_src() -> tempfile::TempDir {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("src")).unwrap();
    dir
}

#[test]
fn test_generates_all_kinds_for_each_module() {
    let dir = project_with_src();
    let engine = ScaffoldEngine::new(PathPlanner::new(dir.path()));
    let modules = ModuleName::parse_list("users,books").unwrap();

    let report = engine
        .run(&modules, &ModuleKind::all(), &ModuleFlavor::default())
        .unwrap();

    assert_eq!(report.created_count(), 10);
    assert_eq!(report.skipped_count(), 0);

    let src = dir.path().join("src");
    for name in ["users", "books"] {
        assert!(src.join("routes").join(format!("{name}.route.ts")).is_file());
        assert!(src.join("controllers").join(format!("{name}.controller.ts")).is_file());
        assert!(src.join("services").join(format!("{name}.service.ts")).is_file());
        assert!(src.join("models").join(format!("{name}.model.ts")).is_file());
        assert!(src.join("tests").join(format!("{name}.test.ts")).is_file());
    }
}

#[test]
fn test_outcomes_follow_module_then_kind_order() {
    let dir = project_with_src();
    let engine = ScaffoldEngine::new(PathPlanner::new(dir.path()));
    let modules = ModuleName::parse_list("b,a").unwrap();
    let kinds = vec![ModuleKind::Service, ModuleKind::Route];

    let report = engine.run(&modules, &kinds, &ModuleFlavor::default()).unwrap();
    let names: Vec<_> = report
        .files
        .iter()
        .map(|f| f.path.file_name().unwrap().to_string_lossy().to_string())
        .collect();

    assert_eq!(
        names,
        vec!["b.service.ts", "b.route.ts", "a.service.ts", "a.route.ts"]
    );
}

#[test]
fn test_second_run_writes_nothing() {
    let dir = project_with_src();
    let engine = ScaffoldEngine::new(PathPlanner::new(dir.path()));
    let modules = ModuleName::parse_list("widgets").unwrap();
    let flavor = ModuleFlavor::default();

    let first = engine.run(&modules, &ModuleKind::all(), &flavor).unwrap();
    let after_first = snapshot(dir.path());

    let second = engine.run(&modules, &ModuleKind::all(), &flavor).unwrap();
    let after_second = snapshot(dir.path());

    assert_eq!(first.created_count(), 5);
    assert_eq!(second.created_count(), 0);
    assert_eq!(second.skipped_count(), 5);
    assert!(second.folders_created.is_empty());
    assert_eq!(after_first, after_second);
}

#[test]
fn test_user_edits_survive_rerun() {
    let dir = project_with_src();
    let engine = ScaffoldEngine::new(PathPlanner::new(dir.path()));
    let modules = ModuleName::parse_list("books").unwrap();

    engine.run(&modules, &ModuleKind::all(), &ModuleFlavor::default()).unwrap();

    let service = dir.path().join("src/services/books.service.ts");
    fs::write(&service, "// hand written").unwrap();

    let flavor = ModuleFlavor::default().with_db(DbFlavor::Pg);
    engine.run(&modules, &ModuleKind::all(), &flavor).unwrap();

    assert_eq!(fs::read_to_string(&service).unwrap(), "// hand written");
    // The model keeps the flavor of the first run.
    let model = fs::read_to_string(dir.path().join("src/models/books.model.ts")).unwrap();
    assert!(model.contains("mongoose.Schema"));
}

#[test]
fn test_partial_collision_fills_in_missing_files() {
    let dir = project_with_src();
    let routes = dir.path().join("src").join("routes");
    fs::create_dir_all(&routes).unwrap();
    fs::write(routes.join("tasks.route.ts"), "existing").unwrap();

    let engine = ScaffoldEngine::new(PathPlanner::new(dir.path()));
    let modules = ModuleName::parse_list("tasks").unwrap();
    let kinds = vec![ModuleKind::Route, ModuleKind::Controller];

    let report = engine.run(&modules, &kinds, &ModuleFlavor::default()).unwrap();

    assert_eq!(report.files[0].status, FileStatus::Skipped);
    assert_eq!(report.files[1].status, FileStatus::Created);
    assert_eq!(fs::read_to_string(routes.join("tasks.route.ts")).unwrap(), "existing");
    assert!(dir
        .path()
        .join("src/controllers/tasks.controller.ts")
        .is_file());
}

#[test]
fn test_missing_source_root_writes_nothing() {
    let dir = tempdir().unwrap();
    let engine = ScaffoldEngine::new(PathPlanner::new(dir.path()));
    let modules = ModuleName::parse_list("users").unwrap();

    let err = engine
        .run(&modules, &ModuleKind::all(), &ModuleFlavor::default())
        .unwrap_err();

    assert!(matches!(err, ScaffoldError::SourceRootMissing(_)));
    assert!(snapshot(dir.path()).is_empty());
    assert!(!dir.path().join("src").exists());
}

#[test]
fn test_no_modules_writes_nothing() {
    let dir = project_with_src();
    let engine = ScaffoldEngine::new(PathPlanner::new(dir.path()));

    let err = engine
        .run(&[], &ModuleKind::all(), &ModuleFlavor::default())
        .unwrap_err();

    assert!(matches!(
        err,
        ScaffoldError::Template(TemplateError::EmptyModuleList)
    ));
    assert_eq!(fs::read_dir(dir.path().join("src")).unwrap().count(), 0);
}

#[test]
fn test_pg_flavor_selects_table_model() {
    let dir = project_with_src();
    let engine = ScaffoldEngine::new(PathPlanner::new(dir.path()));
    let modules = ModuleName::parse_list("books").unwrap();
    let flavor = ModuleFlavor::default().with_db(DbFlavor::Pg);

    engine.run(&modules, &[ModuleKind::Model], &flavor).unwrap();

    let model = fs::read_to_string(dir.path().join("src/models/books.model.ts")).unwrap();
    assert!(model.contains("sequelize.define('Books'"));
}

#[test]
fn test_js_language_uses_js_extension_and_kinds() {
    let dir = project_with_src();
    let config = ExgenConfig::default().with_language(Language::Js);
    let engine = ScaffoldEngine::new(PathPlanner::new(dir.path()));
    let modules = ModuleName::parse_list("books").unwrap();

    let report = engine.run(&modules, &config.kinds(), &config.flavor()).unwrap();

    assert_eq!(report.created_count(), 3);
    assert!(dir.path().join("src/routes/books.route.js").is_file());
    assert!(dir.path().join("src/controllers/books.controller.js").is_file());
    assert!(dir.path().join("src/services/books.service.js").is_file());
    assert!(!dir.path().join("src/models").exists());
}

#[test]
fn test_js_route_imports_generated_auth_middleware() {
    let dir = project_with_src();
    let config = ExgenConfig::default().with_language(Language::Js);
    let modules = ModuleName::parse_list("books").unwrap();

    ScaffoldEngine::new(PathPlanner::new(dir.path()))
        .run(&modules, &config.kinds(), &config.flavor())
        .unwrap();
    AuthScaffolder::new(PathPlanner::new(dir.path())).run("jwt").unwrap();

    let route = fs::read_to_string(dir.path().join("src/routes/books.route.js")).unwrap();
    let import = route
        .lines()
        .find(|line| line.contains("isAuthenticated } from"))
        .unwrap();
    let target = import.split("'@/").nth(1).unwrap().trim_end_matches("';");

    assert!(dir.path().join("src").join(target).is_file(), "{target} not generated");
}

#[test]
fn test_custom_source_dir_from_config() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("exgen.yaml"), "source_dir: app\ndb: pg\n").unwrap();
    fs::create_dir(dir.path().join("app")).unwrap();

    let config = ExgenConfig::load(dir.path()).unwrap();
    let planner = PathPlanner::new(dir.path()).with_source_dir(&config.source_dir);
    let modules = ModuleName::parse_list("orders").unwrap();

    ScaffoldEngine::new(planner)
        .run(&modules, &[ModuleKind::Model], &config.flavor())
        .unwrap();

    let model = fs::read_to_string(dir.path().join("app/models/orders.model.ts")).unwrap();
    assert!(model.contains("sequelize"));
}

#[test]
fn test_auth_jwt_writes_five_files() {
    let dir = tempdir().unwrap();
    let scaffolder = AuthScaffolder::new(PathPlanner::new(dir.path()));

    let report = scaffolder.run("jwt").unwrap();
    assert_eq!(report.created_count(), 5);

    let src = dir.path().join("src");
    let service = fs::read_to_string(src.join("services/auth.service.ts")).unwrap();
    let strategy = fs::read_to_string(src.join("strategies/passport.strategy.ts")).unwrap();

    assert!(service.contains("jwt.sign("));
    assert!(strategy.contains("ExtractJwt"));
    assert!(src.join("controllers/auth.controller.ts").is_file());
    assert!(src.join("routes/auth.routes.ts").is_file());
    assert!(src.join("middlewares/auth.middleware.ts").is_file());
}

#[test]
fn test_auth_modes_share_mode_independent_files() {
    let jwt_dir = tempdir().unwrap();
    let session_dir = tempdir().unwrap();

    AuthScaffolder::new(PathPlanner::new(jwt_dir.path())).run("jwt").unwrap();
    AuthScaffolder::new(PathPlanner::new(session_dir.path())).run("session").unwrap();

    let jwt = snapshot(jwt_dir.path());
    let session = snapshot(session_dir.path());

    for file in [
        "src/controllers/auth.controller.ts",
        "src/routes/auth.routes.ts",
        "src/middlewares/auth.middleware.ts",
    ] {
        let key = PathBuf::from(file);
        assert_eq!(jwt[&key], session[&key], "{file} differs");
    }

    let session_service = &session[&PathBuf::from("src/services/auth.service.ts")];
    let session_strategy = &session[&PathBuf::from("src/strategies/passport.strategy.ts")];
    assert!(session_service.contains("Session started"));
    assert!(session_strategy.contains("LocalStrategy"));
}

#[test]
fn test_auth_invalid_mode_writes_nothing() {
    let dir = tempdir().unwrap();
    let scaffolder = AuthScaffolder::new(PathPlanner::new(dir.path()));

    let err = scaffolder.run("oauth").unwrap_err();

    assert!(matches!(
        err,
        ScaffoldError::Template(TemplateError::InvalidAuthMode(_))
    ));
    assert!(fs::read_dir(dir.path()).unwrap().next().is_none());
}

#[test]
fn test_auth_rerun_skips_existing_files() {
    let dir = tempdir().unwrap();
    let scaffolder = AuthScaffolder::new(PathPlanner::new(dir.path()));

    scaffolder.run("session").unwrap();
    let report = scaffolder.run("jwt").unwrap();

    assert_eq!(report.skipped_count(), 5);
    let service = fs::read_to_string(dir.path().join("src/services/auth.service.ts")).unwrap();
    assert!(!service.contains("jwt.sign"));
}

#[test]
fn test_structure_then_modules() {
    let dir = tempdir().unwrap();
    let planner = PathPlanner::new(dir.path());

    StructureInitializer::new(planner.clone()).run().unwrap();
    let modules = ModuleName::parse_list("users").unwrap();
    let report = ScaffoldEngine::new(planner)
        .run(&modules, &ModuleKind::all(), &ModuleFlavor::default())
        .unwrap();

    // routes, controllers, services and models already exist; only tests is new.
    assert_eq!(report.folders_created, vec![dir.path().join("src").join("tests")]);
    assert!(dir.path().join("public").is_dir());
}
