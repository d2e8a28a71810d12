use crate::training_engine::{
    error::{DrillError, Result},
    models::{Block, BlockId, Catalog, Selection, Word, WordId},
};

/// Words of every selected block, blocks and words in stored order.
///
/// An empty selection means every block. Fails with
/// [`DrillError::EmptyCatalog`] only when the catalog holds no words at all;
/// a selection matching no block yields an empty pool.
pub fn words_in_selection(selection: &Selection, blocks: &[Block]) -> Result<Vec<Word>> {
    if blocks.iter().all(|b| b.words.is_empty()) {
        return Err(DrillError::EmptyCatalog);
    }

    Ok(blocks
        .iter()
        .filter(|b| selection.includes(b.id))
        .flat_map(|b| b.words.iter().cloned())
        .collect())
}

impl Catalog {
    /// Parse the bundled dataset (`{"blocks": [...], "extras": {...}}`).
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(DrillError::InvalidCatalog)
    }

    pub fn words_in_selection(&self, selection: &Selection) -> Result<Vec<Word>> {
        words_in_selection(selection, &self.blocks)
    }

    pub fn block(&self, id: BlockId) -> Option<&Block> {
        self.blocks.iter().find(|b| b.id == id)
    }

    /// The block a word belongs to.
    pub fn block_of_word(&self, word: WordId) -> Option<&Block> {
        self.blocks.iter().find(|b| b.words.iter().any(|w| w.id == word))
    }

    pub fn word_count(&self) -> usize {
        self.blocks.iter().map(|b| b.words.len()).sum()
    }

    /// Free-text lookup over the whole catalog.
    ///
    /// Glyphs are matched against the raw query; pronunciation and
    /// translation against the trimmed, lower-cased query.
    pub fn search(&self, query: &str) -> Vec<&Word> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        self.blocks
            .iter()
            .flat_map(|b| b.words.iter())
            .filter(|w| {
                w.glyph.contains(query)
                    || w.pronunciation.to_lowercase().contains(&needle)
                    || w.translation.to_lowercase().contains(&needle)
            })
            .collect()
    }
}
