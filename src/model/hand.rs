use super::*;

// 副露のリスト (最大4副露)
pub type MeldList = [Option<Meld>; MELD];

// プレイヤー人数 (三麻では2m-8mを使用しない)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerCount {
    Four,
    Three,
}

// 手牌の構成エラー
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidHandError {
    InvalidLength(usize),              // 枚数配列の長さが34でない
    CountOutOfRange(Tile, u8),         // 同種の牌が5枚以上
    EmptyHand,                         // 手牌が空
    InvalidHandSize(usize),            // 副露込みの総枚数が13でも14でもない
    InvalidMeld(InvalidMeldError),     // 副露が面子として不成立
    TileNotInThreePlayer(Tile),        // 三麻で使用しない牌(2m-8m)を含む
    MeldNotInThreePlayer(Meld),        // 三麻で許可されない副露
    TooManyTilesOfKind(Tile),          // 純手牌と副露の合計が5枚以上
}

impl fmt::Display for InvalidHandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidHandError::InvalidLength(n) => {
                write!(f, "tile counts must have 34 entries: {}", n)
            }
            InvalidHandError::CountOutOfRange(t, c) => {
                write!(f, "too many {} in the hand: {}", TILE_NAMES[*t], c)
            }
            InvalidHandError::EmptyHand => write!(f, "hand is empty"),
            InvalidHandError::InvalidHandSize(n) => {
                write!(f, "total number of tiles must be 13 or 14: {}", n)
            }
            InvalidHandError::InvalidMeld(e) => write!(f, "invalid meld: {}", e),
            InvalidHandError::TileNotInThreePlayer(t) => {
                write!(f, "{} is not used in 3-player mahjong", TILE_NAMES[*t])
            }
            InvalidHandError::MeldNotInThreePlayer(m) => {
                write!(f, "{} is not allowed in 3-player mahjong", m)
            }
            InvalidHandError::TooManyTilesOfKind(t) => {
                write!(
                    f,
                    "hand and melds together use too many {}",
                    TILE_NAMES[*t]
                )
            }
        }
    }
}

impl std::error::Error for InvalidHandError {}

impl From<InvalidMeldError> for InvalidHandError {
    fn from(e: InvalidMeldError) -> Self {
        InvalidHandError::InvalidMeld(e)
    }
}

// 検証済みの手牌
// countsは純手牌の枚数, capsは各牌種をあと何枚引けるか
#[derive(Debug, Clone)]
pub(crate) struct Hand {
    pub counts: TileCounts,
    pub caps: TileCounts,
    pub n_melds: usize,
}

impl Hand {
    pub fn validate(
        counts: &TileCounts,
        melds: &Option<MeldList>,
        players: PlayerCount,
    ) -> Result<Hand, InvalidHandError> {
        for t in 0..KIND {
            if counts[t] > TILE as u8 {
                return Err(InvalidHandError::CountOutOfRange(t, counts[t]));
            }
        }

        let total: usize = counts.iter().map(|&c| c as usize).sum();
        if total == 0 {
            return Err(InvalidHandError::EmptyHand);
        }

        let mut n_melds = 0;
        if let Some(melds) = melds {
            n_melds = melds.iter().flatten().count();
        }
        let size = total + 3 * n_melds;
        if size != 13 && size != 14 {
            return Err(InvalidHandError::InvalidHandSize(size));
        }

        if let Some(melds) = melds {
            for m in melds.iter().flatten() {
                m.check()?;
            }
        }

        if players == PlayerCount::Three {
            for t in 1..=7 {
                if counts[t] > 0 {
                    return Err(InvalidHandError::TileNotInThreePlayer(t));
                }
            }
            if let Some(melds) = melds {
                for m in melds.iter().flatten() {
                    if !m.is_allowed_3_player() {
                        return Err(InvalidHandError::MeldNotInThreePlayer(*m));
                    }
                }
            }
        }

        // 副露の使用枚数を差し引いた残り枚数の上限
        let mut usage = [0; KIND];
        if let Some(melds) = melds {
            for m in melds.iter().flatten() {
                m.add_usage(&mut usage);
            }
        }
        let mut caps = [0; KIND];
        for t in 0..KIND {
            if counts[t] + usage[t] > TILE as u8 {
                return Err(InvalidHandError::TooManyTilesOfKind(t));
            }
            caps[t] = TILE as u8 - usage[t];
        }
        if players == PlayerCount::Three {
            for t in 1..=7 {
                caps[t] = 0;
            }
        }

        Ok(Hand {
            counts: *counts,
            caps,
            n_melds,
        })
    }
}

// スライスから枚数配列を構築. 長さが34でない場合はエラー
pub fn tile_counts_from_slice(counts: &[u8]) -> Result<TileCounts, InvalidHandError> {
    if counts.len() != KIND {
        return Err(InvalidHandError::InvalidLength(counts.len()));
    }
    let mut res = [0; KIND];
    res.copy_from_slice(counts);
    Ok(res)
}

#[test]
fn test_tile_counts_from_slice() {
    let v = vec![0u8; 35];
    assert_eq!(
        tile_counts_from_slice(&v),
        Err(InvalidHandError::InvalidLength(35))
    );
    let v = vec![0u8; 33];
    assert_eq!(
        tile_counts_from_slice(&v),
        Err(InvalidHandError::InvalidLength(33))
    );
    let v = vec![1u8; 34];
    assert_eq!(tile_counts_from_slice(&v), Ok([1; KIND]));
}

#[test]
fn test_validate_count_out_of_range() {
    let mut counts = [0; KIND];
    counts[0] = 5;
    assert_eq!(
        Hand::validate(&counts, &None, PlayerCount::Four).unwrap_err(),
        InvalidHandError::CountOutOfRange(0, 5)
    );
}

#[test]
fn test_validate_empty_hand() {
    let counts = [0; KIND];
    assert_eq!(
        Hand::validate(&counts, &None, PlayerCount::Four).unwrap_err(),
        InvalidHandError::EmptyHand
    );
}

#[test]
fn test_validate_hand_size() {
    let counts = crate::util::tile_counts_from_string("123m");
    assert_eq!(
        Hand::validate(&counts, &None, PlayerCount::Four).unwrap_err(),
        InvalidHandError::InvalidHandSize(3)
    );

    let counts = crate::util::tile_counts_from_string("123456m123456p123s");
    assert_eq!(
        Hand::validate(&counts, &None, PlayerCount::Four).unwrap_err(),
        InvalidHandError::InvalidHandSize(15)
    );

    // 14枚の純手牌に副露があると17枚扱い
    let counts = crate::util::tile_counts_from_string("123456m123456p12s");
    let melds = [Some(Meld::Pon(27)), None, None, None];
    assert_eq!(
        Hand::validate(&counts, &Some(melds), PlayerCount::Four).unwrap_err(),
        InvalidHandError::InvalidHandSize(17)
    );
}

#[test]
fn test_validate_invalid_meld() {
    // 純手牌10枚 + 副露1つで13枚なのでサイズ検査は通過する
    let counts = crate::util::tile_counts_from_string("123456789m1p");
    let melds = [Some(Meld::Chii(8, ClaimedTilePosition::Low)), None, None, None];
    assert_eq!(
        Hand::validate(&counts, &Some(melds), PlayerCount::Four).unwrap_err(),
        InvalidHandError::InvalidMeld(InvalidMeldError::InvalidChiiPosition(
            8,
            ClaimedTilePosition::Low
        ))
    );

    let melds = [Some(Meld::Pon(34)), None, None, None];
    assert_eq!(
        Hand::validate(&counts, &Some(melds), PlayerCount::Four).unwrap_err(),
        InvalidHandError::InvalidMeld(InvalidMeldError::IndexOutOfRange(34))
    );
}

#[test]
fn test_validate_3_player_tile() {
    let counts = crate::util::tile_counts_from_string("1118m456p789s112z");
    assert_eq!(
        Hand::validate(&counts, &None, PlayerCount::Three).unwrap_err(),
        InvalidHandError::TileNotInThreePlayer(7)
    );
}

#[test]
fn test_validate_3_player_meld() {
    let counts = crate::util::tile_counts_from_string("111m456p789s1z");
    let melds = [Some(Meld::Chii(9, ClaimedTilePosition::Low)), None, None, None];
    assert_eq!(
        Hand::validate(&counts, &Some(melds), PlayerCount::Three).unwrap_err(),
        InvalidHandError::MeldNotInThreePlayer(Meld::Chii(9, ClaimedTilePosition::Low))
    );

    let counts = crate::util::tile_counts_from_string("111m456p789s1z");
    let melds = [Some(Meld::Pon(1)), None, None, None];
    assert_eq!(
        Hand::validate(&counts, &Some(melds), PlayerCount::Three).unwrap_err(),
        InvalidHandError::MeldNotInThreePlayer(Meld::Pon(1))
    );
}

#[test]
fn test_validate_too_many_tiles_of_kind() {
    // 純手牌の1mが2枚 + 槓子4枚で合計6枚
    let counts = crate::util::tile_counts_from_string("11m456p789s112z");
    let melds = [Some(Meld::Kan(0)), None, None, None];
    assert_eq!(
        Hand::validate(&counts, &Some(melds), PlayerCount::Four).unwrap_err(),
        InvalidHandError::TooManyTilesOfKind(0)
    );
}

#[test]
fn test_validate_caps() {
    // 純手牌7枚 + 2副露で13枚
    let counts = crate::util::tile_counts_from_string("123m456p1z");
    let melds = [
        Some(Meld::Pon(27)),
        Some(Meld::Chii(9, ClaimedTilePosition::Low)),
        None,
        None,
    ];
    let hand = Hand::validate(&counts, &Some(melds), PlayerCount::Four).unwrap();
    assert_eq!(hand.n_melds, 2);
    assert_eq!(hand.caps[27], 1);
    assert_eq!(hand.caps[9], 3);
    assert_eq!(hand.caps[10], 3);
    assert_eq!(hand.caps[11], 3);
    assert_eq!(hand.caps[0], 4);
}
