//! Kani bounded-verification harnesses for the disjoint set.
//!
//! The proptest suites sample large universes; these harnesses exhaust every
//! merge sequence over a tiny `u8` universe instead.
//!
//! ```bash
//! cargo kani -p disjoint-core --harness verify_merge_closure_over_four_elements
//! ```

use crate::DisjointSet;

const LEN: usize = 4;
const MERGES: usize = 3;

fn any_element() -> u8 {
    let element: u8 = kani::any();
    kani::assume(usize::from(element) < LEN);
    element
}

#[kani::proof]
#[kani::unwind(6)]
fn verify_merge_closure_over_four_elements() {
    let Ok(mut set) = DisjointSet::<u8>::new(LEN) else {
        panic!("four elements fit in u8");
    };
    let mut pairs = [(0_u8, 0_u8); MERGES];
    for pair in &mut pairs {
        *pair = (any_element(), any_element());
        assert!(set.merge(pair.0, pair.1).is_ok());
    }
    for (left, right) in pairs {
        assert_eq!(set.equiv(left, right), Ok(true));
    }
    assert_eq!(set.roots().count(), set.class_count());
}

#[kani::proof]
#[kani::unwind(6)]
fn verify_out_of_range_find_leaves_set_unchanged() {
    let Ok(mut set) = DisjointSet::<u8>::new(LEN) else {
        panic!("four elements fit in u8");
    };
    let left = any_element();
    let right = any_element();
    assert!(set.merge(left, right).is_ok());
    let before = set.clone();
    let stray: u8 = kani::any();
    kani::assume(usize::from(stray) >= LEN);
    assert!(set.find(stray).is_err());
    assert!(set.same_structure(&before));
}
