use std::fs;
use stubsmith::recipe::{NameInput, Recipe, RunFlags};
use stubsmith::resolver::Resolver;
use stubsmith::stub::Generated;
use stubsmith::transform::NameTransform;
use tempfile::TempDir;

fn write_stub(temp_dir: &TempDir, name: &str, contents: &str) {
    let stubs = temp_dir.path().join("stubs");
    fs::create_dir_all(&stubs).unwrap();
    fs::write(stubs.join(name), contents).unwrap();
}

#[test]
fn test_name_input_parsing() {
    assert_eq!(
        NameInput::parse("HeroSection/BackgroundImage"),
        NameInput {
            relative_path: Some("HeroSection".to_string()),
            base_name: Some("BackgroundImage".to_string()),
        }
    );

    assert_eq!(
        NameInput::parse("simple-file"),
        NameInput {
            relative_path: None,
            base_name: Some("simple-file".to_string()),
        }
    );

    // backslashes are treated as path separators
    assert_eq!(
        NameInput::parse("Admin\\Panel\\Widget"),
        NameInput {
            relative_path: Some("Admin/Panel".to_string()),
            base_name: Some("Widget".to_string()),
        }
    );

    // the extension is dropped from the final segment
    assert_eq!(
        NameInput::parse("MyView.blade.php"),
        NameInput {
            relative_path: None,
            base_name: Some("MyView.blade".to_string()),
        }
    );

    // leading and trailing separators are trimmed
    assert_eq!(
        NameInput::parse("/Admin/Panel/"),
        NameInput {
            relative_path: Some("Admin".to_string()),
            base_name: Some("Panel".to_string()),
        }
    );

    assert_eq!(NameInput::parse(""), NameInput::default());
}

#[test]
fn test_run_generates_the_file_with_derived_replacements() {
    let temp_dir = TempDir::new().unwrap();
    write_stub(
        &temp_dir,
        "component.php.stub",
        "namespace DUMMY_NAMESPACE;\n\nclass DUMMY_CLASS {}\n",
    );
    let resolver = Resolver::new(temp_dir.path());

    let recipe = Recipe::new("stubs/component.php.stub", "app/Components");
    let generated = recipe
        .run(
            &NameInput::parse("HeroSection/BackgroundImage"),
            &resolver,
            RunFlags::default(),
        )
        .unwrap();

    let expected_path = temp_dir
        .path()
        .join("app")
        .join("Components")
        .join("HeroSection")
        .join("BackgroundImage.php");
    assert_eq!(generated, Generated::Written(expected_path.clone()));
    assert_eq!(
        fs::read_to_string(&expected_path).unwrap(),
        "namespace App\\HeroSection;\n\nclass BackgroundImage {}\n"
    );
}

#[test]
fn test_root_namespace_override() {
    let temp_dir = TempDir::new().unwrap();
    write_stub(&temp_dir, "component.php.stub", "DUMMY_NAMESPACE");
    let resolver = Resolver::new(temp_dir.path());

    let recipe = Recipe::new("stubs/component.php.stub", "app/View/Components")
        .with_root_namespace("App\\View\\Components");
    let generated = recipe
        .run(
            &NameInput::parse("Hero/Background"),
            &resolver,
            RunFlags::default(),
        )
        .unwrap();

    assert_eq!(
        fs::read_to_string(generated.path()).unwrap(),
        "App\\View\\Components\\Hero"
    );
}

#[test]
fn test_explicit_replacements_override_derived_ones() {
    let temp_dir = TempDir::new().unwrap();
    write_stub(&temp_dir, "component.php.stub", "class DUMMY_CLASS");
    let resolver = Resolver::new(temp_dir.path());

    let recipe = Recipe::new("stubs/component.php.stub", "app")
        .with_replace([("DUMMY_CLASS", "FixedName")]);
    let generated = recipe
        .run(&NameInput::parse("Widget"), &resolver, RunFlags::default())
        .unwrap();

    assert_eq!(
        fs::read_to_string(generated.path()).unwrap(),
        "class FixedName"
    );
}

#[test]
fn test_base_name_falls_back_to_the_stub_name() {
    let temp_dir = TempDir::new().unwrap();
    write_stub(&temp_dir, "generic-file.stub", "#REPLACE-ME#");
    let resolver = Resolver::new(temp_dir.path());

    let recipe = Recipe::new("stubs/generic-file.stub", "app")
        .with_extension("txt")
        .with_replace([("#REPLACE-ME#", "replaced")]);
    let generated = recipe
        .run(&NameInput::default(), &resolver, RunFlags::default())
        .unwrap();

    assert_eq!(
        generated.path(),
        temp_dir.path().join("app").join("generic-file.txt")
    );
    assert_eq!(fs::read_to_string(generated.path()).unwrap(), "replaced");
}

#[test]
fn test_file_name_transform_applies_to_name_and_class_token() {
    let temp_dir = TempDir::new().unwrap();
    write_stub(&temp_dir, "view.blade.php.stub", "<x-DUMMY_CLASS />");
    let resolver = Resolver::new(temp_dir.path());

    let recipe = Recipe::new("stubs/view.blade.php.stub", "resources/views")
        .with_file_name_transform(NameTransform::Kebab);
    let generated = recipe
        .run(&NameInput::parse("MyView"), &resolver, RunFlags::default())
        .unwrap();

    assert_eq!(
        generated.path(),
        temp_dir
            .path()
            .join("resources")
            .join("views")
            .join("my-view.blade.php")
    );
    assert_eq!(
        fs::read_to_string(generated.path()).unwrap(),
        "<x-my-view />"
    );
}

#[test]
fn test_relative_path_transform_applies_per_segment() {
    let temp_dir = TempDir::new().unwrap();
    write_stub(&temp_dir, "view.blade.php.stub", "view");
    let resolver = Resolver::new(temp_dir.path());

    let recipe = Recipe::new("stubs/view.blade.php.stub", "resources/views")
        .with_relative_path_transform(NameTransform::Kebab)
        .with_file_name_transform(NameTransform::Kebab);
    let generated = recipe
        .run(
            &NameInput::parse("AdminPanel/HeroSection/MyView"),
            &resolver,
            RunFlags::default(),
        )
        .unwrap();

    assert_eq!(
        generated.path(),
        temp_dir
            .path()
            .join("resources")
            .join("views")
            .join("admin-panel")
            .join("hero-section")
            .join("my-view.blade.php")
    );
}

#[test]
fn test_dry_run_computes_the_path_without_writing() {
    let temp_dir = TempDir::new().unwrap();
    write_stub(&temp_dir, "component.php.stub", "class DUMMY_CLASS");
    let resolver = Resolver::new(temp_dir.path());

    let recipe = Recipe::new("stubs/component.php.stub", "app");
    let generated = recipe
        .run(
            &NameInput::parse("Widget"),
            &resolver,
            RunFlags { dry_run: true, ..Default::default() },
        )
        .unwrap();

    let expected_path = temp_dir.path().join("app").join("Widget.php");
    assert_eq!(generated, Generated::DryRun(expected_path.clone()));
    assert!(!expected_path.exists());
}

#[test]
fn test_run_level_flags_merge_with_recipe_flags() {
    let temp_dir = TempDir::new().unwrap();
    write_stub(&temp_dir, "file.txt.stub", "fresh");
    let resolver = Resolver::new(temp_dir.path());
    let target_path = temp_dir.path().join("app").join("note.txt");
    fs::create_dir_all(target_path.parent().unwrap()).unwrap();
    fs::write(&target_path, "stale").unwrap();

    let recipe = Recipe::new("stubs/file.txt.stub", "app");
    let name = NameInput::parse("note");

    // without any flag the existing target is a recoverable error
    assert!(recipe.run(&name, &resolver, RunFlags::default()).is_err());

    // the run-level overwrite flag resolves the conflict
    recipe
        .run(&name, &resolver, RunFlags { overwrite: true, ..Default::default() })
        .unwrap();
    assert_eq!(fs::read_to_string(&target_path).unwrap(), "fresh");
}

#[test]
fn test_empty_stub_or_target_is_a_configuration_error() {
    let temp_dir = TempDir::new().unwrap();
    let resolver = Resolver::new(temp_dir.path());

    let recipe = Recipe::new("", "app");
    assert!(recipe
        .run(&NameInput::parse("X"), &resolver, RunFlags::default())
        .is_err());

    let recipe = Recipe::new("stubs/a.stub", "");
    assert!(recipe
        .run(&NameInput::parse("X"), &resolver, RunFlags::default())
        .is_err());
}
