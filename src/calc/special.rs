use super::*;

// 七対子: 7種の対子. 同種4枚は1対子としてのみ数える
pub(crate) fn seven_pairs_distance(counts: &TileCounts) -> u8 {
    let mut pairs = 0u8;
    let mut kinds = 0u8;
    for &c in counts.iter() {
        if c >= 1 {
            kinds += 1;
        }
        if c >= 2 {
            pairs += 1;
        }
    }
    // 7種に満たない場合は新しい牌種から対子を起こす必要がある
    7u8.saturating_sub(pairs) + 7u8.saturating_sub(kinds)
}

// 国士無双: 幺九牌13種 + うち1種の対子
pub(crate) fn thirteen_orphans_distance(counts: &TileCounts) -> u8 {
    let mut kinds = 0u8;
    let mut has_pair = false;
    for t in 0..KIND {
        if is_orphan(t) && counts[t] > 0 {
            kinds += 1;
            if counts[t] >= 2 {
                has_pair = true;
            }
        }
    }
    14u8.saturating_sub(kinds + has_pair as u8)
}

#[test]
fn test_seven_pairs_distance() {
    let counts = crate::util::tile_counts_from_string("11223344556677z");
    assert_eq!(seven_pairs_distance(&counts), 0);

    let counts = crate::util::tile_counts_from_string("1122334455667m");
    assert_eq!(seven_pairs_distance(&counts), 1);

    let counts = crate::util::tile_counts_from_string("1188m288p55s1177z");
    assert_eq!(seven_pairs_distance(&counts), 1);

    // 同種4枚は1対子にしかならない
    let counts = crate::util::tile_counts_from_string("1111223344556m");
    assert_eq!(seven_pairs_distance(&counts), 3);

    let counts = crate::util::tile_counts_from_string("123m456p789s1122z");
    assert_eq!(seven_pairs_distance(&counts), 5);
}

#[test]
fn test_thirteen_orphans_distance() {
    let counts = crate::util::tile_counts_from_string("19m19p19s12345677z");
    assert_eq!(thirteen_orphans_distance(&counts), 0);

    let counts = crate::util::tile_counts_from_string("19m19p19s1234567z");
    assert_eq!(thirteen_orphans_distance(&counts), 1);

    // 幺九牌は1m,9s,1z,2zの4種で対子あり
    let counts = crate::util::tile_counts_from_string("123m456p789s1122z");
    assert_eq!(thirteen_orphans_distance(&counts), 9);
}
