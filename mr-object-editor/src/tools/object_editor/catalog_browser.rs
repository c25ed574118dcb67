use bevy::prelude::*;

use super::selection::{SelectionError, SelectionState};
use crate::engine::assets::catalog::{AssetCatalog, CatalogError, CatalogItemRef};
use crate::engine::runtime::{PanelHost, PanelId};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BrowserView {
    #[default]
    Categories,
    Items {
        category: String,
    },
}

/// Category list and per-category item list.
#[derive(Debug, Default)]
pub struct CatalogBrowser {
    view: BrowserView,
    items: Vec<CatalogItemRef>,
}

impl CatalogBrowser {
    pub fn view(&self) -> &BrowserView {
        &self.view
    }

    pub fn items(&self) -> &[CatalogItemRef] {
        &self.items
    }

    /// Switch to the item list of `category`. The selection is cleared before loading so no
    /// choice from a previous category survives.
    pub fn open_category<C: AssetCatalog, H: PanelHost>(
        &mut self,
        category: &str,
        catalog: &C,
        selection: &mut SelectionState,
        host: &mut H,
    ) -> Result<&[CatalogItemRef], CatalogError> {
        info!("Opening category: {}", category);
        host.hide(PanelId::CategoryBrowser);
        host.show(PanelId::ItemBrowser);
        self.view = BrowserView::Items {
            category: category.to_string(),
        };
        selection.clear();
        self.items.clear();

        match catalog.load_category(category) {
            Ok(items) => {
                if items.is_empty() {
                    warn!("No items found in category {}", category);
                }
                self.items = items;
                Ok(&self.items)
            }
            Err(e) => {
                warn!("Failed to load category {}: {}", category, e);
                Err(e)
            }
        }
    }

    /// Choose the item at `index` of the open category for placement.
    pub fn choose_item<'s>(
        &self,
        index: usize,
        selection: &'s mut SelectionState,
    ) -> Result<&'s CatalogItemRef, SelectionError> {
        selection.select_catalog_item(index, self.items.clone())
    }

    pub fn return_to_categories<H: PanelHost>(
        &mut self,
        selection: &mut SelectionState,
        host: &mut H,
    ) {
        info!("Returning to categories");
        host.hide(PanelId::ItemBrowser);
        host.show(PanelId::CategoryBrowser);
        self.view = BrowserView::Categories;
        self.items.clear();
        selection.clear();
    }
}
