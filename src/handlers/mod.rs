use std::sync::Arc;

use crate::pages::registry::PageRegistry;

pub mod nav;
pub mod pages;
pub mod probe;

/// Shared application state injected into every route
pub type SharedRegistry = Arc<PageRegistry>;
