use super::*;

// 順子で鳴いた牌が面子内のどの位置かを表す
// 例: 3-4-5の順子を3で鳴けばLow, 4で鳴けばMiddle, 5で鳴けばHigh
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClaimedTilePosition {
    Low,
    Middle,
    High,
}

impl fmt::Display for ClaimedTilePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClaimedTilePosition::Low => write!(f, "Low"),
            ClaimedTilePosition::Middle => write!(f, "Middle"),
            ClaimedTilePosition::High => write!(f, "High"),
        }
    }
}

// 副露面子
// シャンテン計算上は槓子も面子1つ分として刻子と等価に扱う
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Meld {
    Chii(Tile, ClaimedTilePosition), // 順子 (鳴いた牌とその位置)
    Pon(Tile),                       // 刻子
    Kan(Tile),                       // 槓子
}

impl fmt::Display for Meld {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Meld::Chii(t, p) => write!(f, "Chii-{}-{}", TILE_NAMES[*t], p),
            Meld::Pon(t) => write!(f, "Pon-{}", TILE_NAMES[*t]),
            Meld::Kan(t) => write!(f, "Kan-{}", TILE_NAMES[*t]),
        }
    }
}

// 面子の構成エラー
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMeldError {
    IndexOutOfRange(Tile),
    ChiiWithHonor(Tile),
    InvalidChiiPosition(Tile, ClaimedTilePosition),
}

impl fmt::Display for InvalidMeldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidMeldError::IndexOutOfRange(t) => {
                write!(f, "tile index must be between 0 and 33: {}", t)
            }
            InvalidMeldError::ChiiWithHonor(t) => {
                write!(f, "chii cannot be formed with an honor: {}", TILE_NAMES[*t])
            }
            InvalidMeldError::InvalidChiiPosition(t, p) => {
                write!(f, "chii cannot claim {} at position {}", TILE_NAMES[*t], p)
            }
        }
    }
}

impl std::error::Error for InvalidMeldError {}

impl Meld {
    // 面子として成立するかの検査
    pub fn check(&self) -> Result<(), InvalidMeldError> {
        match *self {
            Meld::Chii(t, p) => {
                if t >= KIND {
                    return Err(InvalidMeldError::IndexOutOfRange(t));
                }
                if is_honor(t) {
                    return Err(InvalidMeldError::ChiiWithHonor(t));
                }
                // 鳴いた牌の位置から順子が同一牌種内に収まるかを確認
                let ok = match p {
                    ClaimedTilePosition::Low => number(t) <= 6,
                    ClaimedTilePosition::Middle => (1..=7).contains(&number(t)),
                    ClaimedTilePosition::High => number(t) >= 2,
                };
                if !ok {
                    return Err(InvalidMeldError::InvalidChiiPosition(t, p));
                }
                Ok(())
            }
            Meld::Pon(t) | Meld::Kan(t) => {
                if t >= KIND {
                    return Err(InvalidMeldError::IndexOutOfRange(t));
                }
                Ok(())
            }
        }
    }

    // 各牌種の物理的な使用枚数を加算 (check済みの面子にのみ使用可)
    pub(crate) fn add_usage(&self, usage: &mut TileCounts) {
        match *self {
            Meld::Chii(t, p) => {
                let low = match p {
                    ClaimedTilePosition::Low => t,
                    ClaimedTilePosition::Middle => t - 1,
                    ClaimedTilePosition::High => t - 2,
                };
                for i in low..low + 3 {
                    usage[i] += 1;
                }
            }
            Meld::Pon(t) => usage[t] += 3,
            Meld::Kan(t) => usage[t] += 4,
        }
    }

    // 三麻で使用できる面子か (チーは不可, 2m-8mを含む面子も不可)
    pub(crate) fn is_allowed_3_player(&self) -> bool {
        match *self {
            Meld::Chii(..) => false,
            Meld::Pon(t) | Meld::Kan(t) => !(1..=7).contains(&t),
        }
    }
}

#[test]
fn test_meld_display() {
    assert_eq!(
        Meld::Chii(0, ClaimedTilePosition::Low).to_string(),
        "Chii-1m-Low"
    );
    assert_eq!(
        Meld::Chii(1, ClaimedTilePosition::Middle).to_string(),
        "Chii-2m-Middle"
    );
    assert_eq!(
        Meld::Chii(2, ClaimedTilePosition::High).to_string(),
        "Chii-3m-High"
    );
    assert_eq!(Meld::Pon(0).to_string(), "Pon-1m");
    assert_eq!(Meld::Kan(0).to_string(), "Kan-1m");
}

#[test]
#[should_panic(expected = "index out of bounds")]
fn test_meld_display_out_of_range() {
    let _ = Meld::Kan(34).to_string();
}

#[test]
fn test_meld_check() {
    assert_eq!(Meld::Chii(6, ClaimedTilePosition::Low).check(), Ok(()));
    assert_eq!(Meld::Chii(11, ClaimedTilePosition::High).check(), Ok(()));
    assert_eq!(
        Meld::Chii(7, ClaimedTilePosition::Low).check(),
        Err(InvalidMeldError::InvalidChiiPosition(
            7,
            ClaimedTilePosition::Low
        ))
    );
    assert_eq!(
        Meld::Chii(0, ClaimedTilePosition::Middle).check(),
        Err(InvalidMeldError::InvalidChiiPosition(
            0,
            ClaimedTilePosition::Middle
        ))
    );
    assert_eq!(
        Meld::Chii(1, ClaimedTilePosition::High).check(),
        Err(InvalidMeldError::InvalidChiiPosition(
            1,
            ClaimedTilePosition::High
        ))
    );
    assert_eq!(
        Meld::Chii(27, ClaimedTilePosition::Low).check(),
        Err(InvalidMeldError::ChiiWithHonor(27))
    );
    assert_eq!(Meld::Pon(33).check(), Ok(()));
    assert_eq!(
        Meld::Pon(34).check(),
        Err(InvalidMeldError::IndexOutOfRange(34))
    );
    assert_eq!(
        Meld::Kan(100).check(),
        Err(InvalidMeldError::IndexOutOfRange(100))
    );
}

#[test]
fn test_meld_usage() {
    let mut usage = [0; KIND];
    Meld::Chii(12, ClaimedTilePosition::Low).add_usage(&mut usage); // 4-56p
    Meld::Chii(14, ClaimedTilePosition::High).add_usage(&mut usage); // 45-6p
    Meld::Pon(27).add_usage(&mut usage);
    Meld::Kan(24).add_usage(&mut usage);
    assert_eq!(usage[12], 2);
    assert_eq!(usage[13], 2);
    assert_eq!(usage[14], 2);
    assert_eq!(usage[27], 3);
    assert_eq!(usage[24], 4);
}

#[test]
fn test_meld_serde() {
    let m = Meld::Chii(12, ClaimedTilePosition::Low);
    let json = serde_json::to_string(&m).unwrap();
    let m2: Meld = serde_json::from_str(&json).unwrap();
    assert_eq!(m, m2);

    let m = Meld::Kan(24);
    let json = serde_json::to_string(&m).unwrap();
    let m2: Meld = serde_json::from_str(&json).unwrap();
    assert_eq!(m, m2);
}

#[test]
fn test_meld_allowed_3_player() {
    assert!(!Meld::Chii(9, ClaimedTilePosition::Low).is_allowed_3_player());
    assert!(!Meld::Pon(1).is_allowed_3_player());
    assert!(Meld::Pon(0).is_allowed_3_player());
    assert!(Meld::Kan(8).is_allowed_3_player());
    assert!(Meld::Pon(27).is_allowed_3_player());
}
