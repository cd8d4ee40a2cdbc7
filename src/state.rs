use std::sync::Arc;

use crate::config::TranslatorSettings;
use crate::storage::{AudioStore, DiskStore, StorageError};
use crate::translate::MockTranslator;

#[derive(Clone)]
pub struct AppState {
    pub settings: TranslatorSettings,
    pub translator: Arc<MockTranslator>,
}

impl AppState {
    pub fn new(settings: TranslatorSettings, store: Arc<dyn AudioStore>) -> Self {
        let translator = Arc::new(MockTranslator::new(
            store,
            settings.audio_delay,
            settings.text_delay,
        ));

        Self {
            settings,
            translator,
        }
    }

    /// State backed by the on-disk uploads directory, created if absent.
    pub fn with_disk_store(settings: TranslatorSettings) -> Result<Self, StorageError> {
        let store = DiskStore::new(&settings.uploads_dir)?;
        Ok(Self::new(settings, Arc::new(store)))
    }

    pub fn store(&self) -> &Arc<dyn AudioStore> {
        self.translator.store()
    }
}
