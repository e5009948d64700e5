#[cfg(test)]
mod tests {
    use crate::discovery::{build_component_records, find_component_files, import_specifier};
    use crate::error::GenerateError;
    use crate::options::ModuleOptions;
    use std::fs;
    use std::path::{Path, PathBuf};

    fn touch(root: &Path, rel: &str) -> PathBuf {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "<template><div /></template>").unwrap();
        path
    }

    fn names(files: &[PathBuf], root: &Path) -> Vec<String> {
        files
            .iter()
            .map(|f| {
                f.strip_prefix(root)
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect()
    }

    // ═══════════════════════════════════════════════════════════════════════════════
    // SCANNING
    // ═══════════════════════════════════════════════════════════════════════════════

    #[test]
    fn test_missing_dir_contributes_nothing() {
        let root = tempfile::tempdir().unwrap();
        let files = find_component_files(root.path(), &["components".to_string()], "vue").unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_no_target_dirs() {
        let root = tempfile::tempdir().unwrap();
        touch(root.path(), "components/Foo.vue");
        let files = find_component_files(root.path(), &[], "vue").unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_recursive_depth_first_sorted() {
        let root = tempfile::tempdir().unwrap();
        touch(root.path(), "components/Z.vue");
        touch(root.path(), "components/A.vue");
        touch(root.path(), "components/b/C.vue");
        touch(root.path(), "components/b/D.txt");
        touch(root.path(), "components/A.props.ts");

        let files = find_component_files(root.path(), &["components".to_string()], "vue").unwrap();
        assert_eq!(
            names(&files, root.path()),
            vec!["components/A.vue", "components/Z.vue", "components/b/C.vue"]
        );
    }

    #[test]
    fn test_dirs_concatenated_in_given_order() {
        let root = tempfile::tempdir().unwrap();
        touch(root.path(), "sections/Hero.vue");
        touch(root.path(), "components/Card.vue");

        let dirs = vec![
            "sections".to_string(),
            "missing".to_string(),
            "components".to_string(),
        ];
        let files = find_component_files(root.path(), &dirs, "vue").unwrap();
        assert_eq!(
            names(&files, root.path()),
            vec!["sections/Hero.vue", "components/Card.vue"]
        );
    }

    #[test]
    fn test_custom_extension() {
        let root = tempfile::tempdir().unwrap();
        touch(root.path(), "components/Card.vue");
        touch(root.path(), "components/Card.tsx");

        let files = find_component_files(root.path(), &["components".to_string()], "tsx").unwrap();
        assert_eq!(names(&files, root.path()), vec!["components/Card.tsx"]);
    }

    #[test]
    fn test_file_as_scan_dir_fails() {
        let root = tempfile::tempdir().unwrap();
        touch(root.path(), "components");

        let err = find_component_files(root.path(), &["components".to_string()], "vue").unwrap_err();
        assert!(matches!(err, GenerateError::NotADirectory(ref path) if path.ends_with("components")));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinks_not_followed_or_kept() {
        use std::os::unix::fs::symlink;

        let root = tempfile::tempdir().unwrap();
        touch(root.path(), "components/Real.vue");
        let outside = touch(root.path(), "outside/Linked.vue");
        symlink(&outside, root.path().join("components/Alias.vue")).unwrap();
        symlink(root.path().join("outside"), root.path().join("components/nested")).unwrap();

        let files = find_component_files(root.path(), &["components".to_string()], "vue").unwrap();
        assert_eq!(names(&files, root.path()), vec!["components/Real.vue"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_dir_fails_scan() {
        use std::os::unix::fs::PermissionsExt;

        let root = tempfile::tempdir().unwrap();
        touch(root.path(), "components/Foo.vue");
        touch(root.path(), "components/locked/Bar.vue");
        let locked = root.path().join("components/locked");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // Permission bits do not apply to root.
        if fs::read_dir(&locked).is_ok() {
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let result = find_component_files(root.path(), &["components".to_string()], "vue");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        let err = result.unwrap_err();
        assert!(matches!(err, GenerateError::Scan { ref path, .. } if path.ends_with("locked")));
    }

    // ═══════════════════════════════════════════════════════════════════════════════
    // RECORDS
    // ═══════════════════════════════════════════════════════════════════════════════

    #[test]
    fn test_record_without_props() {
        let root = tempfile::tempdir().unwrap();
        let file = touch(root.path(), "components/Foo.vue");
        let output_dir = root.path().join(".nuxt/dynamic-ui");

        let records = build_component_records(&[file], &output_dir, &ModuleOptions::default());
        assert_eq!(records.len(), 1);

        let record = &records[0];
        assert_eq!(record.key, "foo");
        assert_eq!(record.display_name, "Foo");
        assert!(!record.has_props);
        assert_eq!(record.import_path, "../../components/Foo.vue");
        assert_eq!(record.props_import_path, "../../components/Foo.props");
    }

    #[test]
    fn test_record_with_props_and_suffix() {
        let root = tempfile::tempdir().unwrap();
        let file = touch(root.path(), "components/home/FooSection.vue");
        touch(root.path(), "components/home/FooSection.props.ts");
        let output_dir = root.path().join("generated");

        let records = build_component_records(&[file], &output_dir, &ModuleOptions::default());
        let record = &records[0];
        assert_eq!(record.key, "foo");
        assert_eq!(record.display_name, "FooSection");
        assert!(record.has_props);
        assert_eq!(record.import_path, "../components/home/FooSection.vue");
        assert_eq!(record.props_import_path, "../components/home/FooSection.props");
        assert_eq!(record.props_type_name(), "FooSectionProps");
    }

    #[test]
    fn test_duplicate_keys_are_kept_in_order() {
        let root = tempfile::tempdir().unwrap();
        let a = touch(root.path(), "a/Card.vue");
        let b = touch(root.path(), "b/CardSection.vue");

        let records = build_component_records(&[a, b], root.path(), &ModuleOptions::default());
        let keys: Vec<&str> = records.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, vec!["card", "card"]);
    }

    #[test]
    fn test_import_specifier() {
        assert_eq!(
            import_specifier(Path::new("/app/gen"), Path::new("/app/components/Foo.vue")),
            "../components/Foo.vue"
        );
        assert_eq!(
            import_specifier(Path::new("/app"), Path::new("/app/components/Foo.vue")),
            "./components/Foo.vue"
        );
        assert_eq!(
            import_specifier(Path::new("/app/a/./b/.."), Path::new("/app/c/Foo.vue")),
            "../c/Foo.vue"
        );
    }
}
