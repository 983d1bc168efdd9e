//! Level text format.
//!
//! A level is a whitespace-separated list of cell tokens, each of the form
//! `tag_column_row[_data...]`:
//!
//! - `til_C_R_KIND[_TX_TY]`: a tile, `KIND` is `col` or `ncl`, `TX`/`TY` pick the
//!   tileset texture.
//! - `psw_C_R`: the player spawn.
//! - `tri_C_R_...`: a trigger. Kept verbatim so the level can be written back out.
//!
//! Tokens with fewer than three fields are skipped. No two tokens may share a
//! position.

use std::collections::HashSet;

use glam::Vec2;

use crate::core::grid::{Cell, Grid, TileKind};
use crate::error::LevelError;

const TILE_TAG: &str = "til";
const SPAWN_TAG: &str = "psw";
const TRIGGER_TAG: &str = "tri";

/// A trigger cell. Its effect payload is kept unparsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerCell {
    pub column: i32,
    pub row: i32,
    pub data: String,
}

/// A parsed level.
#[derive(Debug, Clone, PartialEq)]
pub struct Level {
    pub grid: Grid,
    /// Spawn cell as (column, row).
    pub spawn: (i32, i32),
    pub triggers: Vec<TriggerCell>,
}

impl Level {
    /// Parse level text. Any malformed token fails the whole load.
    pub fn parse(text: &str, cell_size: i32) -> Result<Self, LevelError> {
        if cell_size <= 0 {
            return Err(LevelError::BadCellSize(cell_size));
        }
        let mut taken = HashSet::new();
        let mut cells = Vec::new();
        let mut triggers = Vec::new();
        let mut spawn = None;

        for token in text.split_whitespace() {
            let fields: Vec<&str> = token.split('_').collect();
            if fields.len() < 3 {
                log::debug!("skipping short level token `{token}`");
                continue;
            }
            let column = parse_int(fields[1], token)?;
            let row = parse_int(fields[2], token)?;
            let data = &fields[3..];

            match fields[0] {
                TILE_TAG | SPAWN_TAG | TRIGGER_TAG => {}
                tag => {
                    return Err(LevelError::UnknownCellTag {
                        tag: tag.to_string(),
                        token: token.to_string(),
                    })
                }
            }
            if !taken.insert((column, row)) {
                return Err(LevelError::DuplicateCell { column, row });
            }

            match fields[0] {
                TILE_TAG => cells.push(parse_tile(column, row, data, token)?),
                SPAWN_TAG => spawn = Some((column, row)),
                _ => triggers.push(TriggerCell {
                    column,
                    row,
                    data: data.join("_"),
                }),
            }
        }

        let spawn = spawn.ok_or(LevelError::MissingSpawn)?;
        let grid = Grid::from_cells(cells, cell_size)?;
        log::info!(
            "level loaded: {} cells, {} triggers, spawn at {:?}",
            grid.len(),
            triggers.len(),
            spawn
        );
        Ok(Self {
            grid,
            spawn,
            triggers,
        })
    }

    /// World-space centre of the spawn cell.
    pub fn spawn_center(&self) -> Vec2 {
        let size = self.grid.cell_size();
        Vec2::new(
            (self.spawn.0 * size + size / 2) as f32,
            (self.spawn.1 * size + size / 2) as f32,
        )
    }

    /// Write the level back out in the format `parse` reads.
    pub fn to_text(&self) -> String {
        let mut tokens = Vec::with_capacity(self.grid.len() + self.triggers.len() + 1);
        for cell in self.grid.cells() {
            let mut token = format!("{TILE_TAG}_{}_{}_{}", cell.column, cell.row, cell.kind.tag());
            if let Some((tx, ty)) = cell.texture {
                token.push_str(&format!("_{tx}_{ty}"));
            }
            tokens.push(token);
        }
        for trigger in &self.triggers {
            let mut token = format!("{TRIGGER_TAG}_{}_{}", trigger.column, trigger.row);
            if !trigger.data.is_empty() {
                token.push('_');
                token.push_str(&trigger.data);
            }
            tokens.push(token);
        }
        tokens.push(format!("{SPAWN_TAG}_{}_{}", self.spawn.0, self.spawn.1));
        tokens.join(" ")
    }
}

fn parse_tile(column: i32, row: i32, data: &[&str], token: &str) -> Result<Cell, LevelError> {
    let Some(kind) = data.first() else {
        return Err(LevelError::MissingTileKind {
            token: token.to_string(),
        });
    };
    let kind = TileKind::from_tag(kind).ok_or_else(|| LevelError::UnknownTileKind {
        kind: kind.to_string(),
        token: token.to_string(),
    })?;
    let mut cell = Cell::new(column, row, kind);
    if let Some(tx) = data.get(1) {
        let tx = parse_int(tx, token)?;
        let ty = match data.get(2) {
            Some(ty) => parse_int(ty, token)?,
            None => 0,
        };
        cell = cell.with_texture(tx, ty);
    }
    Ok(cell)
}

fn parse_int(value: &str, token: &str) -> Result<i32, LevelError> {
    value.parse().map_err(|_| LevelError::BadInteger {
        value: value.to_string(),
        token: token.to_string(),
    })
}
