// 麻雀の手牌に対する置換数(シャンテン数+1)計算を行うライブラリ
// 牌種をインデックスで直接扱うため以下のclippy警告は無効化
#![allow(clippy::needless_range_loop)]

mod calc;
mod model;
#[cfg(test)]
mod util;

pub use calc::{
    calculate_necessary_tiles, calculate_replacement_number,
    calculate_replacement_number_3_player, calculate_unnecessary_tiles,
};
pub use model::*;
