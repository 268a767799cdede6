use alloc::collections::BTreeSet;
use alloc::string::String;
use alloc::vec::Vec;
use rand::seq::index;
use trivia_protocol::{CategoryId, CategorySummary};

use crate::*;

/// Draws a board from a [`TriviaSource`].
///
/// Categories and clues are both sampled without replacement. A category that
/// cannot fill a whole column is skipped and the next one in the draw takes its
/// place, so a finished fetch always yields a complete board.
#[derive(Clone, Debug, PartialEq)]
pub struct BoardFetcher {
    seed: u64,
    config: GameConfig,
}

impl BoardFetcher {
    pub fn new(seed: u64, config: GameConfig) -> Self {
        Self { seed, config }
    }

    /// Fetches one category at a time, in draw order.
    pub async fn fetch<S: TriviaSource>(&self, source: &S) -> Result<Board> {
        use rand::SeedableRng;
        use rand::rngs::SmallRng;

        let GameConfig {
            categories: required,
            clues_per_category,
            category_pool,
        } = self.config;
        let mut rng = SmallRng::seed_from_u64(self.seed);

        let listed = dedup_by_id(source.list_categories(category_pool).await?);
        let listed_len = listed.len();
        // listed counts include unusable clues, so passing here does not guarantee a full column
        let pool: Vec<CategorySummary> = listed
            .into_iter()
            .filter(|summary| {
                summary
                    .clues_count
                    .is_none_or(|count| count as usize >= clues_per_category)
            })
            .collect();
        log::debug!(
            "category pool: {} usable of {} distinct, {} requested",
            pool.len(),
            listed_len,
            category_pool
        );
        if pool.len() < required {
            return Err(TriviaError::InsufficientCategories {
                available: pool.len(),
                required,
            });
        }

        // a full shuffle of the pool: the head is the board, the tail are replacements
        let draw = index::sample(&mut rng, pool.len(), pool.len());
        let mut categories = Vec::with_capacity(required);
        let mut last_rejected = None;

        for idx in draw.iter() {
            if categories.len() == required {
                break;
            }
            match self.draw_category(source, &pool[idx], &mut rng).await {
                Ok(category) => categories.push(category),
                Err(err @ TriviaError::InsufficientClues { .. }) => {
                    log::warn!("skipping {}: {}", category_label(&pool[idx]), err);
                    last_rejected = Some(err);
                }
                Err(err) => return Err(err),
            }
        }

        if categories.len() < required {
            return Err(last_rejected.unwrap_or(TriviaError::InsufficientCategories {
                available: categories.len(),
                required,
            }));
        }

        log::debug!("board ready: {} categories", categories.len());
        Board::new(self.config, categories)
    }

    async fn draw_category<S: TriviaSource, R: rand::Rng>(
        &self,
        source: &S,
        summary: &CategorySummary,
        rng: &mut R,
    ) -> Result<Category> {
        let required = self.config.clues_per_category;

        log::debug!("fetching category {}", category_label(summary));
        let detail = source.category(summary.id).await?;

        let mut seen_questions = BTreeSet::new();
        let mut eligible: Vec<Option<Clue>> = detail
            .clues
            .iter()
            .filter_map(Clue::from_record)
            .filter(|clue| seen_questions.insert(clue.question.clone()))
            .map(Some)
            .collect();

        if eligible.len() < required {
            return Err(TriviaError::InsufficientClues {
                category_id: summary.id,
                available: eligible.len(),
                required,
            });
        }

        let clues = index::sample(rng, eligible.len(), required)
            .iter()
            .filter_map(|idx| eligible[idx].take())
            .collect();

        let title = match normalize_text(&detail.title) {
            title if title.is_empty() => normalize_text(&summary.title),
            title => title,
        };
        Ok(Category::new(title, clues))
    }
}

fn dedup_by_id(listed: Vec<CategorySummary>) -> Vec<CategorySummary> {
    let mut seen: BTreeSet<CategoryId> = BTreeSet::new();
    listed
        .into_iter()
        .filter(|summary| seen.insert(summary.id))
        .collect()
}

/// Label for logs, e.g. `"#42 potent potables"`.
fn category_label(summary: &CategorySummary) -> String {
    alloc::format!("#{} {}", summary.id, summary.title)
}
