// 型エイリアス
pub type Tile = usize; // 牌番号 (0-33)
pub type TileCounts = [u8; KIND]; // 牌種ごとの所持枚数
pub type TileFlags = u64; // 下位34bitで牌種の集合を表すビットフラグ

// Number
pub const KIND: usize = 34; // 牌の種類数
pub const TILE: usize = 4; // 同種の牌の総枚数
pub const MELD: usize = 4; // 副露の最大数
pub const SET: usize = 4; // 和了形に必要な面子の数

// 牌種の開始番号
pub const TM: usize = 0; // Manzu (萬子)
pub const TP: usize = 9; // Pinzu (筒子)
pub const TS: usize = 18; // Souzu (索子)
pub const TZ: usize = 27; // Zihai (字牌)
