use super::*;
use super::replacement::replacement_number;

// 置換数を減らす牌(有効牌)の集合をビットフラグで返す
// 牌山に残っていない牌種(手牌に4枚ある牌など)は対象外
pub fn calculate_necessary_tiles(
    counts: &TileCounts,
    players: PlayerCount,
) -> Result<(u8, TileFlags), InvalidHandError> {
    let hand = Hand::validate(counts, &None, players)?;
    let current = replacement_number(&hand);
    let mut flags = 0;
    for t in 0..KIND {
        if hand.counts[t] >= hand.caps[t] {
            continue;
        }
        let mut drawn = hand.clone();
        drawn.counts[t] += 1;
        if replacement_number(&drawn) < current {
            flags |= 1 << t;
        }
    }
    Ok((current, flags))
}

// 捨てても置換数が変わらない牌の集合をビットフラグで返す
// 1枚除いても最短距離が維持される牌が対象 (除去で置換数が減ることはない)
pub fn calculate_unnecessary_tiles(
    counts: &TileCounts,
    players: PlayerCount,
) -> Result<(u8, TileFlags), InvalidHandError> {
    let hand = Hand::validate(counts, &None, players)?;
    let current = replacement_number(&hand);
    let mut flags = 0;
    for t in 0..KIND {
        if hand.counts[t] == 0 {
            continue;
        }
        let mut discarded = hand.clone();
        discarded.counts[t] -= 1;
        if replacement_number(&discarded) == current {
            flags |= 1 << t;
        }
    }
    Ok((current, flags))
}

#[test]
fn test_necessary_tiles_tenpai() {
    let counts = crate::util::tile_counts_from_string("123m456p789s1122z");
    let (rn, flags) = calculate_necessary_tiles(&counts, PlayerCount::Four).unwrap();
    assert_eq!(rn, 1);
    assert_eq!(flags, crate::util::tile_flags_from_string("12z"));
}

#[test]
fn test_unnecessary_tiles_tenpai() {
    // 聴牌形の13枚には不要牌がない
    let counts = crate::util::tile_counts_from_string("123m456p789s1122z");
    let (rn, flags) = calculate_unnecessary_tiles(&counts, PlayerCount::Four).unwrap();
    assert_eq!(rn, 1);
    assert_eq!(flags, 0);
}

#[test]
fn test_necessary_tiles_14() {
    let counts = crate::util::tile_counts_from_string("199m146779p12s246z");
    let (rn, flags) = calculate_necessary_tiles(&counts, PlayerCount::Four).unwrap();
    assert_eq!(rn, 5);
    assert_eq!(
        flags,
        crate::util::tile_flags_from_string("1239m123456789p1239s1234567z")
    );
}

#[test]
fn test_unnecessary_tiles_14() {
    let counts = crate::util::tile_counts_from_string("199m146779p12s246z");
    let (rn, flags) = calculate_unnecessary_tiles(&counts, PlayerCount::Four).unwrap();
    assert_eq!(rn, 5);
    assert_eq!(
        flags,
        crate::util::tile_flags_from_string("1m14679p12s246z")
    );
}

#[test]
fn test_necessary_tiles_four_of_a_kind() {
    // 4枚持っている牌は有効牌にならない
    let counts = crate::util::tile_counts_from_string("1111m111122233z");
    let (rn, flags) = calculate_necessary_tiles(&counts, PlayerCount::Four).unwrap();
    assert_eq!(rn, 2);
    assert_eq!(flags, crate::util::tile_flags_from_string("23m"));

    let (rn, flags) = calculate_unnecessary_tiles(&counts, PlayerCount::Four).unwrap();
    assert_eq!(rn, 2);
    assert_eq!(flags, crate::util::tile_flags_from_string("1z"));
}

#[test]
fn test_necessary_tiles_3_player() {
    // 三麻では2m-8mが有効牌から除外され, 順子も作れない
    let counts = crate::util::tile_counts_from_string("1111m111122233z");
    let (rn, flags) = calculate_necessary_tiles(&counts, PlayerCount::Three).unwrap();
    assert_eq!(rn, 3);
    assert_eq!(
        flags,
        crate::util::tile_flags_from_string("9m123456789p123456789s34567z")
    );

    let (rn, flags) = calculate_unnecessary_tiles(&counts, PlayerCount::Three).unwrap();
    assert_eq!(rn, 3);
    assert_eq!(flags, crate::util::tile_flags_from_string("1m1z"));
}

#[test]
fn test_necessary_tiles_error() {
    let counts = [0; KIND];
    assert_eq!(
        calculate_necessary_tiles(&counts, PlayerCount::Four),
        Err(InvalidHandError::EmptyHand)
    );
    assert_eq!(
        calculate_unnecessary_tiles(&counts, PlayerCount::Three),
        Err(InvalidHandError::EmptyHand)
    );
}

#[test]
fn test_necessary_tiles_decrease_by_one() {
    use rand::prelude::*;

    // 有効牌を引くと置換数はちょうど1減る
    let mut rng = StdRng::seed_from_u64(2);
    let mut wall = vec![];
    for t in 0..KIND {
        for _ in 0..TILE {
            wall.push(t);
        }
    }
    for _ in 0..50 {
        wall.shuffle(&mut rng);
        let mut counts = [0; KIND];
        for &t in &wall[..13] {
            counts[t] += 1;
        }
        let (rn, flags) = calculate_necessary_tiles(&counts, PlayerCount::Four).unwrap();
        for (t, &necessary) in tile_flags_to_array(flags).iter().enumerate() {
            if !necessary {
                continue;
            }
            let mut drawn = counts;
            drawn[t] += 1;
            let rn_drawn = calculate_replacement_number(&drawn, &None).unwrap();
            assert_eq!(rn_drawn, rn - 1);
        }
    }
}
