//! Fixtures Example
//!
//! This example populates a small blog domain with placeholder data and
//! prints the result.
//!
//! Run with: `RUST_LOG=lorem_fill=trace cargo run --example fixtures`

use lorem_fill::{Bounds, FillConfig, FillError, Filler, Loremize};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing_subscriber::EnvFilter;

// =============================================================================
// Domain
// =============================================================================

#[derive(Debug, Default, Loremize)]
struct Timestamps {
    created_at: u32,
    updated_at: u32,
}

#[derive(Debug, Default, Loremize)]
struct Author {
    #[lorem(tag = "word,4,8")]
    handle: String,
    #[lorem(tag = "email")]
    email: String,
    #[lorem(tag = "url")]
    homepage: Option<String>,
}

/// A price in cents, kept in a believable range by a hand-written impl.
#[derive(Debug, Default)]
struct Cents(u64);

impl Loremize for Cents {
    fn loremize(&mut self, filler: &mut Filler<'_>, _tag: &str) -> Result<(), FillError> {
        self.0 = filler.rng().gen_range(99..10_000);
        Ok(())
    }
}

#[derive(Debug, Default, Loremize)]
struct Post {
    #[lorem(skip)]
    id: u64,
    #[lorem(tag = "sentence,4,8")]
    title: String,
    #[lorem(tag = "readable-path,3,5")]
    slug: String,
    #[lorem(tag = "paragraph,1,2")]
    body: String,
    #[lorem(tag = "word,3,7")]
    tags: Vec<String>,
    author: Author,
    price: Cents,
    published: bool,
    #[lorem(flatten)]
    timestamps: Timestamps,
}

fn main() -> Result<(), FillError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Thread-local randomness, default configuration.
    let mut post = Post {
        id: 1,
        ..Default::default()
    };
    lorem_fill::fill(&mut post)?;
    println!("{post:#?}");

    // Seeded and configured: the same posts on every run.
    let mut rng = StdRng::seed_from_u64(2024);
    let mut filler = Filler::new(&mut rng)
        .with_config(FillConfig::new().with_list_len(Bounds::new(1, 3)));

    let mut posts: Vec<Post> = (2..5)
        .map(|id| Post {
            id,
            ..Default::default()
        })
        .collect();
    for post in &mut posts {
        filler.fill(post)?;
        println!("#{} {} ({})", post.id, post.title, post.slug);
    }

    Ok(())
}
