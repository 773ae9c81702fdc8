use crate::core::repository::HiringRepository;
use crate::domain::model::HiringItemMap;
use crate::domain::ports::Storage;
use crate::utils::error::{EtlError, Result};
use std::sync::Arc;
use tokio::sync::watch;

/// What the renderer shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub loading: bool,
    pub failure: bool,
    pub hiring_item_map: HiringItemMap,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            loading: true,
            failure: false,
            hiring_item_map: HiringItemMap::new(),
        }
    }
}

/// Single writer of [`ViewState`]; observers hold `watch` receivers.
pub struct HiringViewModel<S: Storage> {
    repository: Arc<HiringRepository<S>>,
    state: watch::Sender<ViewState>,
}

impl<S: Storage + 'static> HiringViewModel<S> {
    pub fn new(repository: Arc<HiringRepository<S>>) -> Self {
        let (state, _) = watch::channel(ViewState::default());
        Self { repository, state }
    }

    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.state.subscribe()
    }

    pub fn state(&self) -> ViewState {
        self.state.borrow().clone()
    }

    /// Loads the hiring items and publishes the outcome.
    ///
    /// Parsing runs on the blocking pool so the calling task stays free.
    pub async fn load(&self) {
        self.state.send_modify(|state| state.loading = true);

        match self.fetch().await {
            Ok(hiring_item_map) => {
                tracing::info!("Loaded {} hiring lists", hiring_item_map.len());
                self.state.send_replace(ViewState {
                    loading: false,
                    failure: false,
                    hiring_item_map,
                });
            }
            Err(e) => {
                tracing::warn!("Failed to load hiring items: {}", e);
                self.state.send_replace(ViewState {
                    loading: false,
                    failure: true,
                    hiring_item_map: HiringItemMap::new(),
                });
            }
        }
    }

    async fn fetch(&self) -> Result<HiringItemMap> {
        let data = self.repository.read_document().await?;
        let loader = self.repository.loader();

        let map = tokio::task::spawn_blocking(move || loader.load_slice(&data))
            .await
            .map_err(|e| EtlError::ProcessingError {
                message: format!("load task failed: {}", e),
            })??;

        Ok(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::LocalStorage;
    use tempfile::TempDir;

    fn repository_with(content: &str) -> (TempDir, Arc<HiringRepository<LocalStorage>>) {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("hiring.json"), content).unwrap();
        let storage = LocalStorage::new(temp_dir.path().to_str().unwrap());
        let repository = Arc::new(HiringRepository::new(storage, "hiring.json"));
        (temp_dir, repository)
    }

    #[test]
    fn test_initial_state_is_loading() {
        let (_dir, repository) = repository_with("[]");
        let view_model = HiringViewModel::new(repository);
        let state = view_model.state();

        assert!(state.loading);
        assert!(!state.failure);
        assert!(state.hiring_item_map.is_empty());
    }

    #[tokio::test]
    async fn test_load_publishes_map() {
        let (_dir, repository) = repository_with(
            r#"[{"id":1,"listId":2,"name":"B"},{"id":2,"listId":2,"name":"A"}]"#,
        );
        let view_model = HiringViewModel::new(repository);
        let mut receiver = view_model.subscribe();

        view_model.load().await;

        assert!(receiver.has_changed().unwrap());
        let state = receiver.borrow_and_update().clone();
        assert!(!state.loading);
        assert!(!state.failure);
        assert_eq!(state.hiring_item_map[&2][0].id, 2);
    }

    #[tokio::test]
    async fn test_load_failure_clears_map() {
        let (_dir, repository) = repository_with("not valid json");
        let view_model = HiringViewModel::new(repository);

        view_model.load().await;

        let state = view_model.state();
        assert!(!state.loading);
        assert!(state.failure);
        assert!(state.hiring_item_map.is_empty());
    }
}
