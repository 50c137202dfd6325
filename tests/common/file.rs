use derive_new::new;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Eq, PartialEq, new)]
pub struct FileSpec {
    pub path: PathBuf,
    pub content: String,
}

pub fn write_file(file_spec: FileSpec) {
    // make sure the parent directory exists
    if let Some(parent) = file_spec.path.parent() {
        std::fs::create_dir_all(parent)
            .unwrap_or_else(|e| panic!("Failed to create directory {:?}: {}", parent, e));
    }

    std::fs::write(&file_spec.path, &file_spec.content)
        .unwrap_or_else(|e| panic!("Failed to write file {:?}: {}", file_spec.path, e));
}

pub fn read_file(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read file {:?}: {}", path, e))
}

/// Write several files relative to `dir`
pub fn write_files(dir: &Path, files: &[(&str, &str)]) {
    for (name, content) in files {
        write_file(FileSpec::new(dir.join(name), content.to_string()));
    }
}

pub fn count_objects(dir: &Path) -> usize {
    std::fs::read_dir(dir.join(".mygit").join("objects"))
        .map(|entries| entries.count())
        .unwrap_or(0)
}
