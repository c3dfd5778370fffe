use indexmap::IndexMap;
use stubsmith::file::FileHandle;
use stubsmith::transform::NameTransform;
use tempfile::TempDir;

fn replace_map(pairs: &[(&str, &str)]) -> IndexMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_file_lifecycle() {
    let temp_dir = TempDir::new().unwrap();
    let file = FileHandle::new(
        temp_dir.path().join("generated"),
        "my-file",
        "txt",
        temp_dir.path(),
    );

    assert!(!file.folder_exists());
    assert!(!file.exists());

    file.create_folder().unwrap();
    assert!(file.folder_exists());
    assert!(!file.exists());

    let contents = "My name is Antonio Primera and I am a developer";
    file.set_contents(contents).unwrap();
    assert!(file.exists());
    assert_eq!(file.get_contents().unwrap(), contents);

    file.replace_in_file(&replace_map(&[
        ("Antonio Primera", "Anthony The First"),
        ("developer", "psychologist"),
    ]))
    .unwrap();
    assert_eq!(
        file.get_contents().unwrap(),
        "My name is Anthony The First and I am a psychologist"
    );

    file.delete().unwrap();
    assert!(!file.exists());
    assert!(file.folder_exists());

    // deleting an absent file is a no-op, not an error
    assert!(file.delete().is_ok());
}

#[test]
fn test_get_contents_of_missing_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    let file = FileHandle::new(temp_dir.path(), "absent", "txt", temp_dir.path());

    assert!(file.get_contents().is_err());
    assert!(file.replace_in_file(&replace_map(&[("a", "b")])).is_err());
}

#[test]
fn test_replacement_is_sequential_not_simultaneous() {
    let temp_dir = TempDir::new().unwrap();
    let file = FileHandle::new(temp_dir.path(), "cascade", "txt", temp_dir.path());
    file.set_contents("A").unwrap();

    // later pairs see the result of earlier substitutions
    file.replace_in_file(&replace_map(&[("A", "B"), ("B", "C")]))
        .unwrap();

    assert_eq!(file.get_contents().unwrap(), "C");
}

#[test]
fn test_relative_folder_resolves_against_root() {
    let temp_dir = TempDir::new().unwrap();
    let file = FileHandle::new("generated/sub", "file", "txt", temp_dir.path());

    assert_eq!(
        file.full_path(),
        temp_dir.path().join("generated").join("sub").join("file.txt")
    );
}

#[test]
fn test_from_path_splits_folder_name_and_extension() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("stubs").join("viewStub.blade.php.stub");
    let file = FileHandle::from_path(&path, temp_dir.path());

    assert_eq!(file.folder(), temp_dir.path().join("stubs"));
    assert_eq!(file.name(), "viewStub.blade.php");
    assert_eq!(file.extension(), "stub");
    assert_eq!(file.file_name(), "viewStub.blade.php.stub");
    assert_eq!(file.full_path(), path);
}

#[test]
fn test_sub_folder_appends_normalized_segments() {
    let temp_dir = TempDir::new().unwrap();
    let mut file = FileHandle::new(temp_dir.path(), "file", "txt", temp_dir.path());

    file.sub_folder("/Hero\\Section/");
    assert_eq!(file.folder(), temp_dir.path().join("Hero").join("Section"));

    // an empty segment is a no-op
    let before = file.folder().to_path_buf();
    file.sub_folder("");
    assert_eq!(file.folder(), before);
}

#[test]
fn test_set_extension_never_duplicates() {
    let temp_dir = TempDir::new().unwrap();

    let mut file = FileHandle::new(temp_dir.path(), "MyView", "", temp_dir.path());
    file.set_extension(".blade.php");
    assert_eq!(file.file_name(), "MyView.blade.php");

    // partial overlap with the base name is dropped
    let mut file = FileHandle::new(temp_dir.path(), "MyView.blade", "", temp_dir.path());
    file.set_extension("blade.php");
    assert_eq!(file.file_name(), "MyView.blade.php");

    // full overlap with the base name is dropped
    let mut file = FileHandle::new(temp_dir.path(), "MyView.blade.php", "", temp_dir.path());
    file.set_extension("blade.php");
    assert_eq!(file.file_name(), "MyView.blade.php");
}

#[test]
fn test_rename_and_transform_name() {
    let temp_dir = TempDir::new().unwrap();
    let mut file = FileHandle::new(temp_dir.path(), "MyView", "php", temp_dir.path());

    file.set_filename("YourView");
    assert_eq!(file.name(), "YourView");

    file.transform_name(Some(&NameTransform::Kebab));
    assert_eq!(file.name(), "your-view");

    // no transform, no change
    file.transform_name(None);
    assert_eq!(file.name(), "your-view");
}

#[test]
fn test_set_contents_creates_the_folder_tree() {
    let temp_dir = TempDir::new().unwrap();
    let file = FileHandle::new(
        temp_dir.path().join("deeply").join("nested"),
        "file",
        "txt",
        temp_dir.path(),
    );

    file.set_contents("content").unwrap();
    assert!(file.folder_exists());
    assert_eq!(file.get_contents().unwrap(), "content");
}
