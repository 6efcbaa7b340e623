//! Recommend command: rank items for one user.

use clap::Args;
use tracing::{debug, error};

use embedrank_core::Config;
use embedrank_storage::open_recommender;

/// Arguments for the recommend command.
#[derive(Args, Debug)]
pub struct RecommendArgs {
    /// User id to recommend items for
    pub user_id: String,

    /// Number of items to return (defaults to retrieval.default_top_k)
    #[arg(short = 'k', long = "top-k")]
    pub top_k: Option<usize>,
}

/// Execute the recommend command.
///
/// Loads both embedding tables, ranks the full item table against the
/// user's vector, and prints one `- <item_id>` line per result. An unknown
/// user prints the header with no items and still exits 0.
///
/// # Returns
///
/// Exit code:
/// - 0: Success
/// - 1: Initialization failed (unreadable or malformed embedding files)
pub fn handle_recommend(args: RecommendArgs, config: &Config) -> i32 {
    let recommender = match open_recommender(config) {
        Ok(recommender) => recommender,
        Err(err) => {
            error!("Failed to initialize recommender: {}", err);
            return 1;
        }
    };

    let k = args.top_k.unwrap_or(config.retrieval.default_top_k);
    debug!("ranking {} items for user {}", recommender.items().len(), args.user_id);

    let recommendations = recommender.recommend(&args.user_id, k);

    println!("Recommendations for user {}:", args.user_id);
    for item in &recommendations {
        println!("- {}", item);
    }

    0
}
