use bytes::Bytes;

use crate::domain::{Asset, AssetId, AssetStatus, GeneratedMetadata, SourceFile};

/// Insertion-ordered collection of uploaded assets. All mutation goes
/// through here so the status invariants hold in one place; the
/// orchestrator locks the catalog only around these short transitions,
/// never across a network await.
#[derive(Debug, Default)]
pub struct AssetCatalog {
    assets: Vec<Asset>,
}

impl AssetCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, source: SourceFile, preview: Option<Bytes>) -> AssetId {
        let asset = Asset::new(source, preview);
        let id = asset.id;
        self.assets.push(asset);
        id
    }

    pub fn remove(&mut self, id: AssetId) -> bool {
        let before = self.assets.len();
        self.assets.retain(|a| a.id != id);
        self.assets.len() != before
    }

    /// Destroys all items atomically; previews are released with them.
    pub fn clear(&mut self) {
        self.assets.clear();
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    pub fn get(&self, id: AssetId) -> Option<&Asset> {
        self.assets.iter().find(|a| a.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Asset> {
        self.assets.iter()
    }

    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    /// Ids of items a batch run would pick up right now.
    pub fn batch_candidates(&self) -> Vec<AssetId> {
        self.assets
            .iter()
            .filter(|a| a.status.is_batch_candidate())
            .map(|a| a.id)
            .collect()
    }

    /// User edits apply at any time and never change status.
    pub fn edit_title(&mut self, id: AssetId, title: impl Into<String>) -> bool {
        self.edit(id, |a| a.title = title.into())
    }

    pub fn edit_keywords(&mut self, id: AssetId, keywords: impl Into<String>) -> bool {
        self.edit(id, |a| a.keywords = keywords.into())
    }

    pub fn edit_description(&mut self, id: AssetId, description: impl Into<String>) -> bool {
        self.edit(id, |a| a.description = description.into())
    }

    fn edit(&mut self, id: AssetId, apply: impl FnOnce(&mut Asset)) -> bool {
        match self.assets.iter_mut().find(|a| a.id == id) {
            Some(asset) => {
                apply(asset);
                true
            }
            None => false,
        }
    }

    /// Transitions an item into `Generating`, clearing any prior error,
    /// and hands back the source for encoding. Refuses items that are
    /// already generating; returns `None` for items removed since the
    /// queue snapshot.
    pub fn begin_generation(&mut self, id: AssetId) -> Option<SourceFile> {
        let asset = self.assets.iter_mut().find(|a| a.id == id)?;
        if asset.status == AssetStatus::Generating {
            return None;
        }
        asset.status = AssetStatus::Generating;
        asset.error = None;
        Some(asset.source.clone())
    }

    pub fn commit_success(&mut self, id: AssetId, metadata: GeneratedMetadata) -> bool {
        self.edit(id, |a| {
            a.title = metadata.title;
            a.keywords = metadata.keywords;
            a.description = metadata.description;
            a.status = AssetStatus::Success;
            a.error = None;
        })
    }

    pub fn commit_failure(&mut self, id: AssetId, error: impl Into<String>) -> bool {
        self.edit(id, |a| {
            a.status = AssetStatus::Failed;
            a.error = Some(error.into());
        })
    }
}
