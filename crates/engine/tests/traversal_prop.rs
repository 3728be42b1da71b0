// crates/engine/tests/traversal_prop.rs
use engine::{AlternatingEnds, BlockLayout, TraversalOrder, block_count};
use proptest::prelude::*;

proptest! {
    #[test]
    fn orders_are_permutations(
        file_len in 0u64..1_000_000,
        block_size in 1usize..70_000,
    ) {
        let layout = BlockLayout::new(file_len, block_size).unwrap();
        let count = layout.count();
        for order in [TraversalOrder::Sequential, TraversalOrder::AlternatingEnds] {
            let mut seen: Vec<u64> = layout.traverse(order).collect();
            prop_assert_eq!(seen.len() as u64, count);
            seen.sort_unstable();
            prop_assert!(seen.iter().copied().eq(0..count));
        }
    }

    #[test]
    fn ranges_tile_the_file(
        file_len in 0u64..1_000_000,
        block_size in 1usize..70_000,
    ) {
        let layout = BlockLayout::new(file_len, block_size).unwrap();
        let mut next = 0u64;
        for index in layout.traverse(TraversalOrder::Sequential) {
            let range = layout.range(index);
            prop_assert_eq!(range.start, next);
            let last = index + 1 == layout.count();
            if !last {
                prop_assert_eq!(range.end - range.start, block_size as u64);
            }
            next = range.end;
        }
        prop_assert_eq!(next, file_len);
    }

    #[test]
    fn alternating_starts_low_then_high(count in 2u64..10_000) {
        let mut it = AlternatingEnds::new(count);
        prop_assert_eq!(it.next(), Some(0));
        prop_assert_eq!(it.next(), Some(count - 1));
    }
}

#[test]
fn at_least_one_block() {
    assert_eq!(block_count(0, 1), 1);
    assert_eq!(block_count(0, 32768), 1);
    assert_eq!(block_count(32768, 32768), 1);
    assert_eq!(block_count(32769, 32768), 2);
}
