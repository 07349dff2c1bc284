use std::rc::Rc;

use yewdux::prelude::*;

use crate::components::catalog::{Catalog, FilteredView};
use crate::components::modal::{MediaElement, ModalState};

/// Everything the page derives from user input: the applied search query,
/// the episodes it selects and the player binding.
#[derive(Clone, PartialEq, Store)]
pub struct CatalogState {
    pub catalog: Catalog,
    pub query: String,
    pub view: FilteredView,
    pub modal: ModalState,
}

impl Default for CatalogState {
    fn default() -> Self {
        let catalog = Catalog::embedded();
        for finding in catalog.audit() {
            log::warn!("Catalog entry {}: {}", finding.index, finding.issue);
        }
        Self::with_catalog(catalog)
    }
}

impl CatalogState {
    pub fn with_catalog(catalog: Catalog) -> Self {
        let view = catalog.filter("");
        Self {
            catalog,
            query: String::new(),
            view,
            modal: ModalState::Closed,
        }
    }

    pub fn apply_query(&mut self, query: &str) {
        self.query = query.to_string();
        self.view = self.catalog.filter(query);
        log::debug!("Query {:?} matched {} episodes", query, self.view.len());
    }

    pub fn clear_query(&mut self) {
        self.apply_query("");
    }

    /// Returns false if `index` is not a catalog position.
    pub fn open_episode<M: MediaElement + ?Sized>(&mut self, index: usize, media: &M) -> bool {
        let Some(episode) = self.catalog.get(index).cloned() else {
            log::warn!("No episode at catalog position {}", index);
            return false;
        };
        self.modal.open(index, episode, media);
        true
    }

    pub fn close_modal<M: MediaElement + ?Sized>(&mut self, media: &M) -> bool {
        self.modal.close(media)
    }
}

pub enum CatalogMsg {
    ApplyQuery(String),
    ClearQuery,
    RecordPosition(f64),
}

impl Reducer<CatalogState> for CatalogMsg {
    fn apply(self, mut state: Rc<CatalogState>) -> Rc<CatalogState> {
        let state_mut = Rc::make_mut(&mut state);

        match self {
            CatalogMsg::ApplyQuery(query) => state_mut.apply_query(&query),
            CatalogMsg::ClearQuery => state_mut.clear_query(),
            CatalogMsg::RecordPosition(seconds) => state_mut.modal.record_position(seconds),
        }

        state
    }
}
