use super::*;
use super::special::{seven_pairs_distance, thirteen_orphans_distance};
use super::standard::standard_distance;

// 四人麻雀の置換数を計算
// 置換数 = 和了形にするために入れ替える牌の最小枚数 (シャンテン数+1)
pub fn calculate_replacement_number(
    counts: &TileCounts,
    melds: &Option<MeldList>,
) -> Result<u8, InvalidHandError> {
    let hand = Hand::validate(counts, melds, PlayerCount::Four)?;
    Ok(replacement_number(&hand))
}

// 三人麻雀の置換数を計算 (2m-8mとチーは使用不可)
pub fn calculate_replacement_number_3_player(
    counts: &TileCounts,
    melds: &Option<MeldList>,
) -> Result<u8, InvalidHandError> {
    let hand = Hand::validate(counts, melds, PlayerCount::Three)?;
    Ok(replacement_number(&hand))
}

pub(crate) fn replacement_number(hand: &Hand) -> u8 {
    let mut best = standard_distance(hand);
    // 特殊形は門前のみ
    if hand.n_melds == 0 {
        best = best
            .min(seven_pairs_distance(&hand.counts))
            .min(thirteen_orphans_distance(&hand.counts));
    }
    best
}

#[test]
fn test_replacement_number_basic() {
    let rn = |s: &str| {
        calculate_replacement_number(&crate::util::tile_counts_from_string(s), &None).unwrap()
    };
    assert_eq!(rn("123m456p789s11122z"), 0);
    assert_eq!(rn("123m456p789s1122z"), 1); // 聴牌
    assert_eq!(rn("19m19p19s1234567z"), 1); // 国士無双13面待ち
    assert_eq!(rn("1188m288p55s1177z"), 1); // 七対子聴牌
}

#[test]
fn test_replacement_number_with_melds() {
    let counts = crate::util::tile_counts_from_string("123m456p2z");
    let melds = [
        Some(Meld::Pon(27)),
        Some(Meld::Chii(24, ClaimedTilePosition::Low)),
        None,
        None,
    ];
    assert_eq!(
        calculate_replacement_number(&counts, &Some(melds)).unwrap(),
        1
    );
}

#[test]
fn test_replacement_number_four_of_a_kind() {
    // 同種4枚は刻子と雀頭に同時に使えない
    let rn = |s: &str| {
        calculate_replacement_number(&crate::util::tile_counts_from_string(s), &None).unwrap()
    };
    assert_eq!(rn("1111222333444z"), 2);
    assert_eq!(rn("11m11112222333z"), 3);
    assert_eq!(rn("23m11112222333z"), 3);
    assert_eq!(rn("1111222233334z"), 4);
    assert_eq!(rn("11112222333444z"), 2);
    assert_eq!(rn("11m111122223333z"), 3);
    assert_eq!(rn("23m111122223333z"), 3);
}

#[test]
fn test_replacement_number_melds_exclude_special_shapes() {
    // 副露があると七対子・国士無双は成立しない
    let counts = crate::util::tile_counts_from_string("19m19p19s1234z");
    let melds = [Some(Meld::Pon(33)), None, None, None];
    assert_eq!(
        calculate_replacement_number(&counts, &Some(melds)).unwrap(),
        7
    );
}

#[test]
fn test_replacement_number_3_player() {
    let counts = crate::util::tile_counts_from_string("111m456p789s1122z");
    assert_eq!(
        calculate_replacement_number_3_player(&counts, &None).unwrap(),
        1
    );

    let counts = crate::util::tile_counts_from_string("111m456p789s2z");
    let melds = [Some(Meld::Pon(27)), None, None, None];
    assert_eq!(
        calculate_replacement_number_3_player(&counts, &Some(melds)).unwrap(),
        1
    );
}

#[test]
fn test_replacement_number_error() {
    let counts = crate::util::tile_counts_from_string("123m");
    assert_eq!(
        calculate_replacement_number(&counts, &None),
        Err(InvalidHandError::InvalidHandSize(3))
    );

    // 三麻で不可の手牌も四麻では受理される
    let counts = crate::util::tile_counts_from_string("1112m456p789s112z");
    assert_eq!(
        calculate_replacement_number_3_player(&counts, &None),
        Err(InvalidHandError::TileNotInThreePlayer(1))
    );
    assert_eq!(calculate_replacement_number(&counts, &None), Ok(2));
}

#[test]
fn test_replacement_number_random_range() {
    use rand::prelude::*;

    // ランダムな13枚の手牌の置換数は必ず1..=7に収まる
    // (最大は13種の孤立牌で, 七対子経由の7)
    let mut rng = StdRng::seed_from_u64(0);
    let mut wall = vec![];
    for t in 0..KIND {
        for _ in 0..TILE {
            wall.push(t);
        }
    }
    for _ in 0..300 {
        wall.shuffle(&mut rng);
        let mut counts = [0; KIND];
        for &t in &wall[..13] {
            counts[t] += 1;
        }
        let rn = calculate_replacement_number(&counts, &None).unwrap();
        assert!((1..=7).contains(&rn), "rn={} counts={:?}", rn, counts);
    }
}

#[test]
fn test_replacement_number_3_player_random() {
    use rand::prelude::*;

    // 三麻の牌山(2m-8m抜き)から配った手牌では, 四麻の置換数が三麻を上回らない
    let mut rng = StdRng::seed_from_u64(1);
    let mut wall = vec![];
    for t in 0..KIND {
        if (1..=7).contains(&t) {
            continue;
        }
        for _ in 0..TILE {
            wall.push(t);
        }
    }
    for _ in 0..300 {
        wall.shuffle(&mut rng);
        let mut counts = [0; KIND];
        for &t in &wall[..13] {
            counts[t] += 1;
        }
        let rn3 = calculate_replacement_number_3_player(&counts, &None).unwrap();
        let rn4 = calculate_replacement_number(&counts, &None).unwrap();
        assert!((1..=7).contains(&rn3), "rn={} counts={:?}", rn3, counts);
        assert!(rn4 <= rn3);
    }
}
