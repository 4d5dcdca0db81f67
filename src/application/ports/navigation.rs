// src/application/ports/navigation.rs
use crate::domain::article::ArticleSlug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationTarget {
    Home,
    Article(ArticleSlug),
}

/// Router collaborator. Called while the store is settling, so it must not
/// call back into the store synchronously.
pub trait Navigator: Send + Sync {
    fn navigate_to(&self, target: NavigationTarget);
}
