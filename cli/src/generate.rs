#![deny(missing_docs)]

//! # Generate Command
//!
//! Turns directories of paired request/response JSON examples into Spring
//! Boot sources inside an existing project tree: one model class per inferred
//! record, one create-endpoint controller and one MockMvc round-trip test per
//! entity, plus verbatim fixture copies under `src/test/resources`.
//!
//! Pairing: a response file matches a request file when its filename stem
//! starts with the request's stem. Requests without a match are skipped with
//! a warning; malformed JSON aborts the run naming the offending file.

use crate::error::{CliError, CliResult};
use bootgen_core::{
    generate_controller, generate_controller_test, generate_model_class, infer, naming,
    parse_object, AppError, Entity,
};
use regex::Regex;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Arguments for the generate command.
#[derive(clap::Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Root of the Spring Boot project tree to write into.
    #[clap(long, default_value = ".")]
    pub project_dir: PathBuf,

    /// Base Java package for generated sources (e.g. com.example.demo).
    #[clap(long, value_parser = parse_package)]
    pub package: String,

    /// Directory of JSON request examples.
    #[clap(long, default_value = "request_json")]
    pub request_dir: PathBuf,

    /// Directory of JSON response examples.
    #[clap(long, default_value = "response_json")]
    pub response_dir: PathBuf,

    /// Print inferred record specs as JSON instead of writing files.
    #[clap(long)]
    pub dry_run: bool,
}

/// Validates a dot-separated lowercase Java package name.
fn parse_package(s: &str) -> Result<String, String> {
    let re = Regex::new(r"^[a-z][a-z0-9]*(\.[a-z][a-z0-9]*)*$").map_err(|e| e.to_string())?;
    if re.is_match(s) {
        Ok(s.to_string())
    } else {
        Err(format!(
            "invalid package name '{}': must be dot-separated lowercase identifiers",
            s
        ))
    }
}

/// Executes the generation pipeline.
///
/// # Arguments
///
/// * `args` - Command arguments including directories and the target package.
pub fn execute(args: &GenerateArgs) -> CliResult<()> {
    let requests = list_json_files(&args.request_dir)?;
    let responses = list_json_files(&args.response_dir)?;

    if requests.is_empty() {
        println!(
            "Warning: no .json files in {:?}; nothing to generate.",
            args.request_dir
        );
        return Ok(());
    }

    // One emitted source per class name for the whole run. A divergent
    // re-emission under the same name is a conflict, never an overwrite.
    let mut catalog: BTreeMap<String, String> = BTreeMap::new();
    let mut generated = 0usize;

    for request in &requests {
        let stem = file_stem(request);
        let Some(response) = responses.iter().find(|r| file_stem(r).starts_with(&stem)) else {
            println!("Warning: no response example for {}; skipping entity.", request);
            continue;
        };

        let entity = build_entity(args, request, response)?;
        // Conflicts are detected in both modes; only the writes are skipped
        // on a dry run.
        let models = register_models(&entity, &args.package, &mut catalog)?;

        if args.dry_run {
            let dump = serde_json::to_string_pretty(&entity)
                .map_err(|e| CliError::General(format!("Failed to serialize entity: {}", e)))?;
            println!("{}", dump);
        } else {
            write_entity(args, &entity, &models)?;
        }
        generated += 1;
    }

    if generated == 0 {
        println!("Warning: no request/response pairs matched; nothing was generated.");
    }

    Ok(())
}

/// Lists `.json` filenames directly inside `dir`, sorted for deterministic
/// pairing and output order.
fn list_json_files(dir: &Path) -> CliResult<Vec<String>> {
    if !dir.is_dir() {
        return Err(CliError::General(format!("{:?} is not a directory", dir)));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry =
            entry.map_err(|e| CliError::General(format!("Failed to read {:?}: {}", dir, e)))?;
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "json") {
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                files.push(name.to_string());
            }
        }
    }
    files.sort();
    Ok(files)
}

fn file_stem(name: &str) -> String {
    Path::new(name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(name)
        .to_string()
}

/// Reads and infers both fixtures of one entity.
fn build_entity(args: &GenerateArgs, request: &str, response: &str) -> CliResult<Entity> {
    let name = naming::capitalize_first(&file_stem(request));

    let request_doc = read_object(&args.request_dir.join(request))?;
    let response_doc = read_object(&args.response_dir.join(response))?;

    let request_registry = infer(&request_doc, &format!("{}Request", name))?;
    let response_registry = infer(&response_doc, &format!("{}Response", name))?;

    Ok(Entity {
        name,
        request: request_registry,
        response: response_registry,
        request_fixture: request.to_string(),
        response_fixture: response.to_string(),
    })
}

fn read_object(path: &Path) -> CliResult<serde_json::Map<String, serde_json::Value>> {
    let text = fs::read_to_string(path)?;
    Ok(parse_object(&path.to_string_lossy(), &text)?)
}

/// Renders the entity's model classes and records them in the run-wide
/// catalog, returning the classes not yet emitted this run. An identical
/// re-emission under an already-seen name is skipped; a divergent one is a
/// conflict, never an overwrite.
fn register_models(
    entity: &Entity,
    package: &str,
    catalog: &mut BTreeMap<String, String>,
) -> CliResult<Vec<(String, String)>> {
    let mut fresh = Vec::new();
    for record in entity.request.records().chain(entity.response.records()) {
        let source = generate_model_class(record, package);
        match catalog.get(&record.name) {
            Some(existing) if *existing == source => continue,
            Some(_) => return Err(AppError::NameConflict(record.name.clone()).into()),
            None => {}
        }
        catalog.insert(record.name.clone(), source.clone());
        fresh.push((record.name.clone(), source));
    }
    Ok(fresh)
}

/// Writes all artifacts for one entity into the project tree.
fn write_entity(args: &GenerateArgs, entity: &Entity, models: &[(String, String)]) -> CliResult<()> {
    println!(
        "Generating entity {} ({} + {})",
        entity.name, entity.request_fixture, entity.response_fixture
    );

    let package_path: PathBuf = args.package.split('.').collect();
    let main_java = args.project_dir.join("src/main/java").join(&package_path);
    let model_dir = main_java.join("model");
    let controller_dir = main_java.join("controller");
    let test_dir = args
        .project_dir
        .join("src/test/java")
        .join(&package_path)
        .join("controller");
    let resources_dir = args.project_dir.join("src/test/resources");

    for dir in [&model_dir, &controller_dir, &test_dir, &resources_dir] {
        fs::create_dir_all(dir)?;
    }

    // The generated test loads the fixtures by name at runtime.
    fs::copy(
        args.request_dir.join(&entity.request_fixture),
        resources_dir.join(&entity.request_fixture),
    )?;
    fs::copy(
        args.response_dir.join(&entity.response_fixture),
        resources_dir.join(&entity.response_fixture),
    )?;

    for (name, source) in models {
        fs::write(model_dir.join(format!("{}.java", name)), source)?;
    }

    let response_root = entity
        .response
        .get(&entity.response_class())
        .ok_or_else(|| {
            CliError::General(format!("Missing response record for {}", entity.name))
        })?;

    let controller = generate_controller(&entity.name, response_root, &args.package);
    fs::write(
        controller_dir.join(format!("{}Controller.java", entity.name)),
        controller,
    )?;

    let test = generate_controller_test(
        &args.package,
        &entity.name,
        &entity.request_fixture,
        &entity.response_fixture,
    );
    fs::write(
        test_dir.join(format!("{}ControllerTest.java", entity.name)),
        test,
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn args_for(root: &Path) -> GenerateArgs {
        GenerateArgs {
            project_dir: root.join("project"),
            package: "com.example.demo".to_string(),
            request_dir: root.join("request_json"),
            response_dir: root.join("response_json"),
            dry_run: false,
        }
    }

    fn write_fixture(dir: &Path, name: &str, body: &str) {
        fs::create_dir_all(dir).unwrap();
        fs::write(dir.join(name), body).unwrap();
    }

    #[test]
    fn test_parse_package() {
        assert!(parse_package("com.example.demo").is_ok());
        assert!(parse_package("io2.acme").is_ok());
        assert!(parse_package("Com.example").is_err());
        assert!(parse_package("com..example").is_err());
        assert!(parse_package("com.2bad").is_err());
        assert!(parse_package("").is_err());
    }

    #[test]
    fn test_generates_all_artifacts_for_a_pair() {
        let dir = tempdir().unwrap();
        let args = args_for(dir.path());

        write_fixture(
            &args.request_dir,
            "order.json",
            r#"{"id": 1, "customer": {"name": "Ada"}, "tags": ["x"]}"#,
        );
        write_fixture(
            &args.response_dir,
            "order_response.json",
            r#"{"status": "ok", "count": 3}"#,
        );

        execute(&args).unwrap();

        let java = args.project_dir.join("src/main/java/com/example/demo");
        assert!(java.join("model/OrderRequest.java").exists());
        assert!(java.join("model/Customer.java").exists());
        assert!(java.join("model/OrderResponse.java").exists());

        let controller = fs::read_to_string(java.join("controller/OrderController.java")).unwrap();
        assert!(controller.contains("response.setStatus(\"ok\");"));
        assert!(controller.contains("response.setCount(3);"));
        assert!(controller.contains("@RequestMapping(\"/api/v1/orders\")"));

        let test = fs::read_to_string(
            args.project_dir
                .join("src/test/java/com/example/demo/controller/OrderControllerTest.java"),
        )
        .unwrap();
        assert!(test.contains("src/test/resources/order.json"));
        assert!(test.contains("src/test/resources/order_response.json"));

        let resources = args.project_dir.join("src/test/resources");
        assert!(resources.join("order.json").exists());
        assert!(resources.join("order_response.json").exists());
    }

    #[test]
    fn test_orphan_request_is_skipped() {
        let dir = tempdir().unwrap();
        let args = args_for(dir.path());

        write_fixture(&args.request_dir, "order.json", r#"{"id": 1}"#);
        // Stem "payment" does not start with "order"
        write_fixture(&args.response_dir, "payment.json", r#"{"ok": true}"#);

        execute(&args).unwrap();

        assert!(!args.project_dir.join("src/main/java").exists());
    }

    #[test]
    fn test_malformed_json_is_fatal_and_names_the_file() {
        let dir = tempdir().unwrap();
        let args = args_for(dir.path());

        write_fixture(&args.request_dir, "order.json", "{ not json");
        write_fixture(&args.response_dir, "order.json", r#"{"ok": true}"#);

        let err = execute(&args).unwrap_err();
        assert!(format!("{}", err).contains("order.json"));
    }

    #[test]
    fn test_missing_request_dir_is_an_error() {
        let dir = tempdir().unwrap();
        let args = args_for(dir.path());
        write_fixture(&args.response_dir, "a.json", "{}");

        let err = execute(&args).unwrap_err();
        assert!(format!("{}", err).contains("is not a directory"));
    }

    #[test]
    fn test_empty_request_dir_warns_and_succeeds() {
        let dir = tempdir().unwrap();
        let args = args_for(dir.path());
        fs::create_dir_all(&args.request_dir).unwrap();
        fs::create_dir_all(&args.response_dir).unwrap();

        execute(&args).unwrap();
        assert!(!args.project_dir.exists());
    }

    #[test]
    fn test_cross_entity_conflict_is_reported() {
        let dir = tempdir().unwrap();
        let args = args_for(dir.path());

        // Both entities derive a class named Address, with different shapes.
        write_fixture(
            &args.request_dir,
            "order.json",
            r#"{"address": {"city": "NYC"}}"#,
        );
        write_fixture(&args.response_dir, "order_response.json", r#"{"ok": true}"#);
        write_fixture(
            &args.request_dir,
            "user.json",
            r#"{"address": {"zip": "10001"}}"#,
        );
        write_fixture(&args.response_dir, "user_response.json", r#"{"ok": true}"#);

        let err = execute(&args).unwrap_err();
        match err {
            CliError::Core(AppError::NameConflict(name)) => assert_eq!(name, "Address"),
            other => panic!("expected NameConflict, got {}", other),
        }
    }

    #[test]
    fn test_dry_run_reports_cross_entity_conflict() {
        let dir = tempdir().unwrap();
        let mut args = args_for(dir.path());
        args.dry_run = true;

        write_fixture(
            &args.request_dir,
            "order.json",
            r#"{"address": {"city": "NYC"}}"#,
        );
        write_fixture(&args.response_dir, "order_response.json", r#"{"ok": true}"#);
        write_fixture(
            &args.request_dir,
            "user.json",
            r#"{"address": {"zip": "10001"}}"#,
        );
        write_fixture(&args.response_dir, "user_response.json", r#"{"ok": true}"#);

        // A dry run reports the same conflict a real run would, and still
        // writes nothing.
        let err = execute(&args).unwrap_err();
        match err {
            CliError::Core(AppError::NameConflict(name)) => assert_eq!(name, "Address"),
            other => panic!("expected NameConflict, got {}", other),
        }
        assert!(!args.project_dir.exists());
    }

    #[test]
    fn test_identical_shared_class_is_written_once() {
        let dir = tempdir().unwrap();
        let args = args_for(dir.path());

        write_fixture(
            &args.request_dir,
            "order.json",
            r#"{"address": {"city": "NYC"}}"#,
        );
        write_fixture(
            &args.response_dir,
            "order_response.json",
            r#"{"address": {"city": "NYC"}}"#,
        );

        execute(&args).unwrap();

        let model = args.project_dir.join("src/main/java/com/example/demo/model");
        assert!(model.join("Address.java").exists());
        assert!(model.join("OrderRequest.java").exists());
        assert!(model.join("OrderResponse.java").exists());
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let dir = tempdir().unwrap();
        let mut args = args_for(dir.path());
        args.dry_run = true;

        write_fixture(&args.request_dir, "order.json", r#"{"id": 1}"#);
        write_fixture(&args.response_dir, "order.json", r#"{"status": "ok"}"#);

        execute(&args).unwrap();
        assert!(!args.project_dir.exists());
    }
}
