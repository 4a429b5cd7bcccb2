//! Deterministic move selection for automated players
//!
//! Strategies only read the model. Ties between equally good cells go to
//! the upper-left-most one (smallest r, then smallest q), so the choice
//! never depends on scan order.

use serde::{Deserialize, Serialize};

use crate::board::{CellColor, Hex};
use crate::error::Result;
use crate::model::ReadonlyModel;

/// Move selection strategy
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveStrategy {
    /// Flip as many tiles as possible
    MaxCapture,
    /// Prefer the six outer corners, else fall back to `MaxCapture`
    CornerPreference,
    /// First sub-strategy that proposes a cell wins
    Chain(Vec<MoveStrategy>),
}

impl MoveStrategy {
    /// Propose a cell for `color`, or `None` if the strategy finds nothing
    pub fn choose_move<M>(&self, model: &M, color: CellColor) -> Result<Option<Hex>>
    where
        M: ReadonlyModel + ?Sized,
    {
        let color = color.ensure_player()?;

        let choice = match self {
            MoveStrategy::MaxCapture => {
                best_capture(model, whole_board(model.board_size()), color)?
            }
            MoveStrategy::CornerPreference => {
                match best_capture(model, corners(model.board_size()), color)? {
                    Some(corner) => Some(corner),
                    None => best_capture(model, whole_board(model.board_size()), color)?,
                }
            }
            MoveStrategy::Chain(strategies) => {
                let mut found = None;
                for strategy in strategies {
                    if let Some(hex) = strategy.choose_move(model, color)? {
                        found = Some(hex);
                        break;
                    }
                }
                found
            }
        };

        tracing::trace!("{:?} chose {:?} for {}", self, choice, color);
        Ok(choice)
    }
}

/// Pick the legal candidate that captures most, ties to the upper-left.
///
/// A candidate must be on the board, empty and a legal placement before its
/// capture count is considered at all.
fn best_capture<M, I>(model: &M, candidates: I, color: CellColor) -> Result<Option<Hex>>
where
    M: ReadonlyModel + ?Sized,
    I: IntoIterator<Item = Hex>,
{
    let mut best: Option<(Hex, usize)> = None;

    for hex in candidates {
        if !model.is_valid_coordinate(hex)
            || model.contents_of(hex)? != CellColor::Empty
            || !model.is_valid_move(hex, color)?
        {
            continue;
        }

        let captured = model.num_tiles_captured(hex, color)?;
        let better = match best {
            None => true,
            Some((best_hex, best_captured)) => {
                captured > best_captured
                    || (captured == best_captured && hex.is_upper_left_of(best_hex))
            }
        };
        if better {
            best = Some((hex, captured));
        }
    }

    Ok(best.map(|(hex, _)| hex))
}

/// All coordinates of a board of `size`, in reading order
fn whole_board(size: i32) -> impl Iterator<Item = Hex> {
    let radius = size / 2;
    (-radius..=radius).flat_map(move |r| {
        let first = (-radius).max(-radius - r);
        let last = radius.min(radius - r);
        (first..=last).map(move |q| Hex::new(q, r))
    })
}

/// The six corners of the hexagon: q and r drawn from {-k, 0, k}, q != r
fn corners(size: i32) -> Vec<Hex> {
    let k = size / 2;
    let axis = [-k, 0, k];
    axis.iter()
        .flat_map(|&q| axis.iter().map(move |&r| Hex::new(q, r)))
        .filter(|hex| hex.q != hex.r)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameEngine;

    #[test]
    fn test_corners() {
        assert_eq!(
            corners(7),
            vec![
                Hex::new(-3, 0),
                Hex::new(-3, 3),
                Hex::new(0, -3),
                Hex::new(0, 3),
                Hex::new(3, -3),
                Hex::new(3, 0),
            ]
        );
    }

    #[test]
    fn test_whole_board_matches_board_coordinates() {
        let engine = GameEngine::new(9).unwrap();
        let expected: Vec<Hex> = engine.board().coordinates().collect();
        assert_eq!(whole_board(9).collect::<Vec<_>>(), expected);
    }

    #[test]
    fn test_max_capture_breaks_ties_upper_left() {
        for size in [7, 11] {
            let engine = GameEngine::new(size).unwrap();
            for color in [CellColor::Black, CellColor::White] {
                let choice = MoveStrategy::MaxCapture.choose_move(&engine, color).unwrap();
                assert_eq!(choice, Some(Hex::new(1, -2)), "size {} {}", size, color);
            }
        }
    }

    #[test]
    fn test_max_capture_prefers_more_tiles() {
        let mut engine = GameEngine::new(7).unwrap();
        engine.place_tile(CellColor::Black, Hex::new(-1, -1)).unwrap();
        engine.place_tile(CellColor::White, Hex::new(1, -2)).unwrap();
        engine.place_tile(CellColor::Black, Hex::new(-2, 1)).unwrap();

        let choice = MoveStrategy::MaxCapture
            .choose_move(&engine, CellColor::White)
            .unwrap()
            .unwrap();
        let best = engine.num_tiles_captured(choice, CellColor::White).unwrap();
        assert_eq!(best, 3);
        for hex in engine.legal_moves(CellColor::White).unwrap() {
            assert!(engine.num_tiles_captured(hex, CellColor::White).unwrap() <= best);
        }
    }

    #[test]
    fn test_empty_color_rejected() {
        let engine = GameEngine::new(7).unwrap();
        let strategies = [
            MoveStrategy::MaxCapture,
            MoveStrategy::CornerPreference,
            MoveStrategy::Chain(vec![]),
        ];
        for strategy in strategies {
            let err = strategy.choose_move(&engine, CellColor::Empty).unwrap_err();
            assert!(err.is_invalid_argument());
        }
    }

    #[test]
    fn test_corner_falls_back_to_max_capture() {
        let engine = GameEngine::new(7).unwrap();
        let corner = MoveStrategy::CornerPreference
            .choose_move(&engine, CellColor::Black)
            .unwrap();
        let capture = MoveStrategy::MaxCapture
            .choose_move(&engine, CellColor::Black)
            .unwrap();
        assert_eq!(corner, capture);
    }

    #[test]
    fn test_empty_chain_finds_nothing() {
        let engine = GameEngine::new(7).unwrap();
        let choice = MoveStrategy::Chain(vec![])
            .choose_move(&engine, CellColor::Black)
            .unwrap();
        assert_eq!(choice, None);
    }

    #[test]
    fn test_strategy_json_names() {
        let chain = MoveStrategy::Chain(vec![MoveStrategy::CornerPreference, MoveStrategy::MaxCapture]);
        let json = serde_json::to_string(&chain).unwrap();
        assert_eq!(json, r#"{"Chain":["CornerPreference","MaxCapture"]}"#);
        assert_eq!(serde_json::from_str::<MoveStrategy>(&json).unwrap(), chain);
    }
}
