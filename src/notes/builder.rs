//! Builds the module → chapter → section tree from a notes directory.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use walkdir::WalkDir;

use super::{
    filter::ModuleFilter,
    tree::{Chapter, Document, Module, Section},
};
use crate::utils::{file_name_string, has_extension, relative_posix_path};

/// Name of the optional wrapper directory holding a module's chapters.
pub const CHAPTERS_DIR: &str = "chapters";

/// Walks one notes root. Every relpath it emits is relative to `root`.
pub struct NotesIndexer<'a> {
    root: &'a Path,
    document_extensions: &'a [String],
}

impl<'a> NotesIndexer<'a> {
    pub fn new(root: &'a Path, document_extensions: &'a [String]) -> Self {
        Self {
            root,
            document_extensions,
        }
    }

    /// Build every module accepted by `filter`, sorted by directory name.
    pub fn build(&self, filter: &ModuleFilter) -> Result<Vec<Module>> {
        let mut modules = Vec::new();
        for dir in self.child_dirs(self.root)? {
            if filter.includes(&file_name_string(&dir)) {
                modules.push(self.build_module(&dir)?);
            }
        }
        Ok(modules)
    }

    fn build_module(&self, dir: &Path) -> Result<Module> {
        let chapters_dir = dir.join(CHAPTERS_DIR);
        let chapter_dirs = if chapters_dir.is_dir() {
            self.child_dirs(&chapters_dir)?
        } else {
            self.child_dirs(dir)?
        };

        let chapters = chapter_dirs
            .iter()
            .map(|chapter| self.build_chapter(chapter))
            .collect::<Result<Vec<_>>>()?;

        Ok(Module {
            name: file_name_string(dir),
            relpath: self.relpath(dir),
            documents: self.collect_documents(dir)?,
            chapters,
        })
    }

    fn build_chapter(&self, dir: &Path) -> Result<Chapter> {
        let mut sections = Vec::new();
        for child in self.children(dir)? {
            if child.is_dir() {
                sections.push(Section {
                    name: file_name_string(&child),
                    relpath: self.relpath(&child),
                    documents: self.collect_documents(&child)?,
                });
            } else if self.is_document(&child) {
                let stem = child
                    .file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_default();
                sections.push(Section::from_document(stem, self.document(&child)));
            }
        }

        Ok(Chapter {
            name: file_name_string(dir),
            relpath: self.relpath(dir),
            documents: self.collect_documents(dir)?,
            sections,
        })
    }

    /// Documents directly inside `dir`; subdirectories are not descended.
    pub fn collect_documents(&self, dir: &Path) -> Result<Vec<Document>> {
        Ok(self
            .children(dir)?
            .iter()
            .filter(|path| self.is_document(path))
            .map(|path| self.document(path))
            .collect())
    }

    fn is_document(&self, path: &Path) -> bool {
        path.is_file() && has_extension(path, self.document_extensions, true)
    }

    fn document(&self, path: &Path) -> Document {
        Document {
            name: file_name_string(path),
            relpath: self.relpath(path),
        }
    }

    fn relpath(&self, path: &Path) -> String {
        relative_posix_path(path, self.root)
    }

    /// Immediate children of `dir`, sorted by file name.
    fn children(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .map(|entry| {
                entry
                    .map(|e| e.into_path())
                    .with_context(|| format!("Failed to read directory: {}", dir.display()))
            })
            .collect()
    }

    fn child_dirs(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        Ok(self
            .children(dir)?
            .into_iter()
            .filter(|path| path.is_dir())
            .collect())
    }
}

/// Build the notes tree rooted at `root`.
pub fn build_tree(
    root: &Path,
    document_extensions: &[String],
    filter: &ModuleFilter,
) -> Result<Vec<Module>> {
    NotesIndexer::new(root, document_extensions).build(filter)
}
