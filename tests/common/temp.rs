use std::{
    fs,
    path::{Path, PathBuf},
};

/// 一時プロジェクトディレクトリ（drop 時に削除）
#[derive(Debug)]
pub struct TempWorkspace {
    dir: tempfile::TempDir,
}

#[allow(dead_code)]
impl TempWorkspace {
    pub fn new(prefix: &str) -> Self {
        let dir = tempfile::Builder::new().prefix(prefix).tempdir().unwrap();
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn create_file(&self, rel: &str, contents: &str) -> PathBuf {
        self.create_binary(rel, contents.as_bytes())
    }

    pub fn create_binary(&self, rel: &str, contents: &[u8]) -> PathBuf {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, contents).unwrap();
        path
    }

    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.dir.path().join(rel)).unwrap()
    }
}
