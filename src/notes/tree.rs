//! Notes index types.
//!
//! Field names are what the site's client script reads, so documents are
//! serialized as `pdfs` whatever their extension.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    /// File name including its extension.
    pub name: String,
    /// Path relative to the notes root, `/`-separated.
    pub relpath: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub name: String,
    pub relpath: String,
    #[serde(rename = "pdfs")]
    pub documents: Vec<Document>,
}

impl Section {
    /// A one-document section standing in for a document that sits directly
    /// inside a chapter. It is named after the file stem.
    pub fn from_document(stem: impl Into<String>, document: Document) -> Self {
        Self {
            name: stem.into(),
            relpath: document.relpath.clone(),
            documents: vec![document],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chapter {
    pub name: String,
    pub relpath: String,
    #[serde(rename = "pdfs")]
    pub documents: Vec<Document>,
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Module {
    pub name: String,
    pub relpath: String,
    #[serde(rename = "pdfs")]
    pub documents: Vec<Document>,
    pub chapters: Vec<Chapter>,
}

#[cfg(test)]
impl Module {
    pub fn chapter(&self, name: &str) -> Option<&Chapter> {
        self.chapters.iter().find(|c| c.name == name)
    }
}

#[cfg(test)]
impl Chapter {
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name == name)
    }
}
