use alloc::vec::Vec;
use trivia_protocol::{CategoryDetail, CategoryId, CategorySummary};

use crate::Result;

/// Read-only access to a trivia API.
///
/// Implementations run on the browser's single thread, so the futures are not
/// required to be `Send`.
#[allow(async_fn_in_trait)]
pub trait TriviaSource {
    /// Up to `count` categories to draw the board from.
    async fn list_categories(&self, count: usize) -> Result<Vec<CategorySummary>>;

    /// Title and full clue list of one category.
    async fn category(&self, id: CategoryId) -> Result<CategoryDetail>;
}
