//! Scan a synthetic set of pages and print the dedup summary.
//!
//! Run with:
//!     RUST_LOG=pagededup=debug cargo run --example scan_pages

use bytes::Bytes;
use pagededup::{Block, DEFAULT_BLOCK_SIZE, OwnerId, ScanConfig, ScanSession};
use tracing_subscriber::EnvFilter;

/// Owner ids at or above this value are reserved and not tracked.
const FIRST_RESERVED_OWNER: u32 = 0x7ff0;

/// Builds a fake physical memory map: some free pages, some zero pages,
/// a few pages shared between owners and the rest private.
fn synthetic_memory(pages: usize) -> Vec<Block> {
    let shared = Bytes::from(vec![0x90u8; DEFAULT_BLOCK_SIZE]);

    (0..pages)
        .map(|i| {
            let owner = OwnerId::new((i % 4) as u32);
            match i % 10 {
                0 => Block::new(vec![0xccu8; DEFAULT_BLOCK_SIZE]),
                1 | 2 => Block::owned_by(vec![0u8; DEFAULT_BLOCK_SIZE], owner),
                3 => Block::owned_by(shared.clone(), owner),
                4 => Block::owned_by(
                    vec![0x11u8; DEFAULT_BLOCK_SIZE],
                    OwnerId::new(FIRST_RESERVED_OWNER),
                ),
                _ => {
                    let mut data = vec![0u8; DEFAULT_BLOCK_SIZE];
                    data[..8].copy_from_slice(&(i as u64).to_le_bytes());
                    Block::owned_by(data, owner)
                }
            }
        })
        .collect()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let memory = synthetic_memory(4096);

    let config = ScanConfig::new(memory.len())?
        .with_max_owner(OwnerId::new(FIRST_RESERVED_OWNER - 1));
    let mut session = ScanSession::new(config)?;

    println!("Scanning {} pages...\n", memory.len());

    for block in &memory {
        session.offer_block(block)?;
    }

    println!("{}\n", session.report());

    let index = session.into_index();
    for entry in index.cross_owner_entries().take(10) {
        println!(
            "shared page {}: {} copies, first seen in {}",
            &entry.digest().to_hex()[..16],
            entry.count(),
            entry.first_owner()
        );
    }

    Ok(())
}
