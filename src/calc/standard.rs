use super::*;

const INF: u8 = u8::MAX;

// 1グループ(1色の数牌または字牌)の面子・雀頭コスト表を計算
// res[s][p] = このグループでs面子p雀頭を作るために補充する牌の最小枚数
// capsは副露と三麻制約を考慮した各牌種の使用上限
pub(crate) fn group_distance(counts: &[u8], caps: &[u8], runs: bool) -> [[u8; 2]; SET + 1] {
    let len = counts.len();
    // dp[s][p][a][b]
    // a: 1つ前の牌から始まる順子の数, b: 2つ前の牌から始まる順子の数
    let mut dp = [[[[INF; SET + 1]; SET + 1]; 2]; SET + 1];
    dp[0][0][0][0] = 0;
    for i in 0..len {
        let mut next = [[[[INF; SET + 1]; SET + 1]; 2]; SET + 1];
        for s in 0..=SET {
            for p in 0..2 {
                for a in 0..=SET {
                    for b in 0..=SET {
                        let cur = dp[s][p][a][b];
                        if cur == INF {
                            continue;
                        }
                        // この牌から始まる順子はi+2が範囲内の場合のみ
                        let max_n = if runs && i + 2 < len { SET - s } else { 0 };
                        for n in 0..=max_n {
                            for t in 0..2 {
                                if s + n + t > SET {
                                    continue;
                                }
                                for q in 0..2 - p {
                                    let used = a + b + n + 3 * t + 2 * q;
                                    if used > caps[i] as usize {
                                        continue;
                                    }
                                    // 足りない分だけ補充する
                                    let short = (used as u8).saturating_sub(counts[i]);
                                    let cost = cur.saturating_add(short);
                                    let e = &mut next[s + n + t][p + q][n][a];
                                    if cost < *e {
                                        *e = cost;
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
        dp = next;
    }
    let mut res = [[INF; 2]; SET + 1];
    for s in 0..=SET {
        for p in 0..2 {
            res[s][p] = dp[s][p][0][0];
        }
    }
    res
}

// 4グループのコスト表を畳み込み, 必要な面子数+雀頭1つの最小コストを求める
pub(crate) fn standard_distance(hand: &Hand) -> u8 {
    let groups = [
        (TM, TP, true),
        (TP, TS, true),
        (TS, TZ, true),
        (TZ, KIND, false),
    ];
    let mut acc = [[INF; 2]; SET + 1];
    acc[0][0] = 0;
    for &(start, end, runs) in &groups {
        let g = group_distance(&hand.counts[start..end], &hand.caps[start..end], runs);
        let mut next = [[INF; 2]; SET + 1];
        for s0 in 0..=SET {
            for p0 in 0..2 {
                if acc[s0][p0] == INF {
                    continue;
                }
                for s1 in 0..=SET - s0 {
                    for p1 in 0..2 - p0 {
                        if g[s1][p1] == INF {
                            continue;
                        }
                        let cost = acc[s0][p0].saturating_add(g[s1][p1]);
                        let e = &mut next[s0 + s1][p0 + p1];
                        if cost < *e {
                            *e = cost;
                        }
                    }
                }
            }
        }
        acc = next;
    }
    acc[SET - hand.n_melds][1]
}

#[test]
fn test_group_distance_empty() {
    let counts = [0; 9];
    let caps = [TILE as u8; 9];
    let res = group_distance(&counts, &caps, true);
    assert_eq!(res[0][0], 0);
    assert_eq!(res[1][0], 3);
    assert_eq!(res[0][1], 2);
    assert_eq!(res[4][1], 14);
}

#[test]
fn test_group_distance_nine_gates() {
    // 純正九蓮宝燈の13枚は4面子1雀頭まであと1枚
    let counts = crate::util::tile_counts_from_string("1112345678999m");
    let caps = [TILE as u8; 9];
    let res = group_distance(&counts[..9], &caps, true);
    assert_eq!(res[4][1], 1);

    // 5mを加えた14枚 (111m 234m 55m 678m 999m) は完成形
    let counts = crate::util::tile_counts_from_string("11123455678999m");
    let res = group_distance(&counts[..9], &caps, true);
    assert_eq!(res[4][1], 0);
}

#[test]
fn test_group_distance_honors() {
    // 字牌グループは順子を作れない
    let counts = crate::util::tile_counts_from_string("1122z");
    let caps = [TILE as u8; 7];
    let res = group_distance(&counts[TZ..], &caps, false);
    assert_eq!(res[0][1], 0);
    assert_eq!(res[1][1], 1);
    assert_eq!(res[2][1], 4);
}

#[test]
fn test_group_distance_cap() {
    // 同種4枚の場合, 刻子と雀頭を同じ牌種からは作れない
    let counts = crate::util::tile_counts_from_string("1111z");
    let caps = [TILE as u8; 7];
    let res = group_distance(&counts[TZ..], &caps, false);
    assert_eq!(res[1][0], 0);
    assert_eq!(res[1][1], 2);
}

#[test]
fn test_standard_distance_complete() {
    let counts = crate::util::tile_counts_from_string("123m456p789s11122z");
    let hand = Hand::validate(&counts, &None, PlayerCount::Four).unwrap();
    assert_eq!(standard_distance(&hand), 0);
}

#[test]
fn test_standard_distance_with_melds() {
    // 副露数だけ必要な面子数が減る
    let counts = crate::util::tile_counts_from_string("123m456p2z");
    let melds = [
        Some(Meld::Pon(27)),
        Some(Meld::Chii(24, ClaimedTilePosition::Low)),
        None,
        None,
    ];
    let hand = Hand::validate(&counts, &Some(melds), PlayerCount::Four).unwrap();
    assert_eq!(standard_distance(&hand), 1);
}
