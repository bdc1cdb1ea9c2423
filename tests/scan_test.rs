// Integration tests for scan sessions
// Tests cover: owner filters, Block input, fatal capacity errors, reports

use bytes::Bytes;
use pagededup::{
    Block, DEFAULT_BLOCK_SIZE, DedupError, Observation, OwnerId, ScanConfig, ScanSession,
};

fn page(fill: u8) -> Bytes {
    Bytes::from(vec![fill; DEFAULT_BLOCK_SIZE])
}

// ============================================================================
// Filters
// ============================================================================

#[test]
fn test_unowned_and_reserved_owners_never_reach_index() {
    let config = ScanConfig::new(16)
        .unwrap()
        .with_max_owner(OwnerId::new(0x7fef));
    let mut session = ScanSession::new(config).unwrap();

    let blocks = vec![
        Block::new(page(1)),
        Block::owned_by(page(1), OwnerId::new(0x7ff0)),
        Block::owned_by(page(1), OwnerId::new(0x7fff)),
        Block::owned_by(page(1), OwnerId::new(3)),
    ];
    for block in &blocks {
        session.offer_block(block).unwrap();
    }

    let report = session.finish();
    assert_eq!(report.blocks_offered, 4);
    assert_eq!(report.unowned_skipped, 1);
    assert_eq!(report.filtered_skipped, 2);
    assert_eq!(report.blocks_indexed(), 1);
    assert_eq!(report.stats.distinct_count, 1);
    assert_eq!(report.stats.total_cross_owner_matches, 0);
}

// ============================================================================
// Whole Scans
// ============================================================================

#[test]
fn test_scan_over_synthetic_memory() {
    // 3 owners share a library page, each has a private page, plus free and zero pages
    let shared = page(0xaa);
    let mut memory: Vec<Block> = Vec::new();
    for id in 1..=3 {
        memory.push(Block::owned_by(shared.clone(), OwnerId::new(id)));
        memory.push(Block::owned_by(page(id as u8), OwnerId::new(id)));
        memory.push(Block::owned_by(page(0), OwnerId::new(id)));
        memory.push(Block::new(page(0xee)));
    }

    let mut session = ScanSession::new(ScanConfig::new(64).unwrap()).unwrap();
    for block in &memory {
        session.offer_block(block).unwrap();
    }

    let index = session.into_index();
    let stats = index.stats();
    assert_eq!(stats.distinct_count, 4);
    assert_eq!(stats.zero_count, 3);
    assert_eq!(stats.total_cross_owner_matches, 2);
    assert_eq!(stats.distinct_cross_owner_matches, 1);

    let shared_entry = index.get(&pagededup::digest_of(&shared)).unwrap();
    assert_eq!(shared_entry.count(), 3);
    assert_eq!(shared_entry.first_owner(), OwnerId::new(1));
}

#[test]
fn test_offer_all_from_pairs() {
    let a = page(1);
    let z = page(0);
    let pairs = vec![
        (Some(OwnerId::new(1)), &a[..]),
        (Some(OwnerId::new(2)), &a[..]),
        (Some(OwnerId::new(2)), &z[..]),
        (None, &a[..]),
    ];

    let mut session = ScanSession::new(ScanConfig::new(4).unwrap()).unwrap();
    session.offer_all(pairs).unwrap();

    let report = session.report();
    assert_eq!(report.blocks_offered, 4);
    assert_eq!(report.stats.distinct_count, 1);
    assert_eq!(report.stats.zero_count, 1);
    assert_eq!(report.stats.distinct_cross_owner_matches, 1);
}

#[test]
fn test_capacity_error_aborts_scan() {
    let mut session = ScanSession::new(ScanConfig::new(2).unwrap()).unwrap();

    assert_eq!(
        session.offer(Some(OwnerId::new(1)), &page(1)).unwrap(),
        Some(Observation::NewDigest)
    );
    session.offer(Some(OwnerId::new(1)), &page(2)).unwrap();

    let err = session.offer(Some(OwnerId::new(1)), &page(3)).unwrap_err();
    assert_eq!(err, DedupError::CapacityExhausted { capacity: 2 });
    assert!(err.to_string().contains("index full"));

    assert_eq!(session.index().len(), 2);
}

#[test]
fn test_report_display() {
    let mut session = ScanSession::new(ScanConfig::new(4).unwrap()).unwrap();
    session.offer(Some(OwnerId::new(1)), &page(0)).unwrap();
    session.offer(None, &page(0)).unwrap();

    let s = session.finish().to_string();
    assert!(s.contains("scanned: 2"));
    assert!(s.contains("unowned: 1"));
    assert!(s.contains("zero: 1"));
}
