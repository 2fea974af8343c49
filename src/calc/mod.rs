// 置換数(シャンテン数+1)の計算
mod replacement;
mod special;
mod standard;
mod tiles;

use crate::model::*;

pub use replacement::{calculate_replacement_number, calculate_replacement_number_3_player};
pub use tiles::{calculate_necessary_tiles, calculate_unnecessary_tiles};
