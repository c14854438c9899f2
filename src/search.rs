use crossbeam_channel as channel;
use rayon::{Scope, ThreadPool, ThreadPoolBuilder};

use crate::config::{Config, SpellerConfig};
use crate::correction::WordSet;
use crate::error::Result;
use crate::masks::MaskSet;
use crate::trie::Trie;

/// Where chunked lookups run: rayon's global pool, or a pool owned by the checker.
pub(crate) enum Executor {
    Global,
    Pool(ThreadPool),
}

impl Executor {
    pub(crate) fn from_config(config: &Config) -> Result<Executor> {
        let workers = config.get_workers();
        if workers == 0 {
            return Ok(Executor::Global);
        }

        let pool = ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("speller-worker-{i}"))
            .build()?;

        Ok(Executor::Pool(pool))
    }

    /// Runs `op` and returns once every task it spawned has finished.
    fn scope<'scope, OP, R>(&self, op: OP) -> R
    where
        OP: FnOnce(&Scope<'scope>) -> R + Send,
        R: Send,
    {
        match self {
            Executor::Global => rayon::scope(op),
            Executor::Pool(pool) => pool.scope(op),
        }
    }
}

/// Unions the trie matches of every mask.
///
/// Sets larger than `chunk_size` are split into chunks of at most `chunk_size` masks,
/// each checked by its own task; partial results come back over a channel once the
/// scope has joined. The result does not depend on how the masks were split.
pub(crate) fn lookup(
    trie: &Trie,
    masks: &MaskSet,
    chunk_size: usize,
    executor: &Executor,
) -> WordSet {
    let chunk_size = chunk_size.max(1);
    if masks.len() <= chunk_size {
        return check_masks(trie, masks.iter());
    }

    let masks: Vec<&String> = masks.iter().collect();
    let (tx, rx) = channel::unbounded();

    executor.scope(|scope| {
        for (id, chunk) in masks.chunks(chunk_size).enumerate() {
            let tx = tx.clone();

            scope.spawn(move |_| {
                log::trace!("chunk #{} checks {} masks", id, chunk.len());

                // the receiver outlives the scope
                let _ = tx.send(check_masks(trie, chunk.iter().copied()));
            });
        }
    });

    drop(tx);

    let mut result = WordSet::new();
    for found in rx {
        result.extend(found);
    }

    result
}

fn check_masks<'a, I>(trie: &Trie, masks: I) -> WordSet
where
    I: Iterator<Item = &'a String>,
{
    let mut found = WordSet::new();
    for mask in masks {
        trie.find_all_into(mask, &mut found);
    }

    found
}
