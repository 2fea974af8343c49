// テスト用のユーティリティ
use crate::model::*;

// "123m456p789s1122z"のような文字列から枚数配列を生成
pub fn tile_counts_from_string(s: &str) -> TileCounts {
    let mut counts = [0; KIND];
    let mut digits = vec![];
    for c in s.chars() {
        match c {
            '1'..='9' => digits.push(c as usize - '1' as usize),
            'm' | 'p' | 's' | 'z' => {
                let base = match c {
                    'm' => TM,
                    'p' => TP,
                    's' => TS,
                    _ => TZ,
                };
                for &d in &digits {
                    counts[base + d] += 1;
                }
                digits.clear();
            }
            _ => panic!("invalid tile string: {}", s),
        }
    }
    assert!(digits.is_empty(), "invalid tile string: {}", s);
    counts
}

// 同じ表記から牌種の集合をビットフラグとして生成
pub fn tile_flags_from_string(s: &str) -> TileFlags {
    let counts = tile_counts_from_string(s);
    let mut flags = 0;
    for t in 0..KIND {
        if counts[t] > 0 {
            flags |= 1 << t;
        }
    }
    flags
}

#[test]
fn test_tile_counts_from_string() {
    let counts = tile_counts_from_string("123m456p789s1122z");
    assert_eq!(counts[0], 1);
    assert_eq!(counts[1], 1);
    assert_eq!(counts[2], 1);
    assert_eq!(counts[12], 1);
    assert_eq!(counts[24], 1);
    assert_eq!(counts[27], 2);
    assert_eq!(counts[28], 2);
    assert_eq!(counts.iter().map(|&c| c as usize).sum::<usize>(), 13);

    let counts = tile_counts_from_string("1111z");
    assert_eq!(counts[27], 4);
}

#[test]
fn test_tile_flags_from_string() {
    let flags = tile_flags_from_string("19m19p19s1234567z");
    let expected: TileFlags = (1 << 0)
        | (1 << 8)
        | (1 << 9)
        | (1 << 17)
        | (1 << 18)
        | (1 << 26)
        | (0b1111111 << 27);
    assert_eq!(flags, expected);
}
