use super::*;

// 牌番号に対応する表記名
pub const TILE_NAMES: [&str; KIND] = [
    "1m", "2m", "3m", "4m", "5m", "6m", "7m", "8m", "9m", // 萬子
    "1p", "2p", "3p", "4p", "5p", "6p", "7p", "8p", "9p", // 筒子
    "1s", "2s", "3s", "4s", "5s", "6s", "7s", "8s", "9s", // 索子
    "1z", "2z", "3z", "4z", "5z", "6z", "7z", // 字牌
];

// 字牌
#[inline]
pub fn is_honor(t: Tile) -> bool {
    t >= TZ
}

// 1,9牌および字牌 (国士無双の構成牌)
#[inline]
pub fn is_orphan(t: Tile) -> bool {
    is_honor(t) || t % 9 == 0 || t % 9 == 8
}

// 数牌の数字部分 (0始まり). 字牌に対しては無意味
#[inline]
pub fn number(t: Tile) -> usize {
    t % 9
}

// ビットフラグを牌番号順の真偽値配列に変換. bit34-63は無視
pub fn tile_flags_to_array(flags: TileFlags) -> [bool; KIND] {
    let mut res = [false; KIND];
    for t in 0..KIND {
        res[t] = flags & (1 << t) != 0;
    }
    res
}

#[test]
fn test_tile_names() {
    assert_eq!(TILE_NAMES[0], "1m");
    assert_eq!(TILE_NAMES[TP], "1p");
    assert_eq!(TILE_NAMES[TS + 8], "9s");
    assert_eq!(TILE_NAMES[KIND - 1], "7z");
}

#[test]
fn test_is_orphan() {
    let orphans: Vec<Tile> = (0..KIND).filter(|&t| is_orphan(t)).collect();
    assert_eq!(
        orphans,
        vec![0, 8, 9, 17, 18, 26, 27, 28, 29, 30, 31, 32, 33]
    );
}

#[test]
fn test_tile_flags_to_array_empty() {
    assert_eq!(tile_flags_to_array(0), [false; KIND]);
}

#[test]
fn test_tile_flags_to_array_all() {
    // bit34以上が立っていても下位34bitのみを見る
    assert_eq!(tile_flags_to_array(u64::MAX), [true; KIND]);
    assert_eq!(tile_flags_to_array((1 << KIND) - 1), [true; KIND]);
}

#[test]
fn test_tile_flags_to_array_pattern() {
    // 1m456p789s12z
    let flags: TileFlags = 0b0000011_111000000_000111000_000000001;
    let mut expected = [false; KIND];
    for &t in &[0, 12, 13, 14, 24, 25, 26, 27, 28] {
        expected[t] = true;
    }
    assert_eq!(tile_flags_to_array(flags), expected);
}
