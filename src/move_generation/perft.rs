use crate::game_state::board_state::BoardState;
use crate::move_generation::legal_move_apply::{apply_tentative, rollback};
use crate::move_generation::legal_move_checks::is_general_attacked;
use crate::move_generation::move_generator::MoveGenerator;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub checks: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.checks += rhs.checks;
    }
}

/// Count leaf positions `depth` plies below `state`. Captured pieces stay in
/// their player's active set during the walk and are skipped because the
/// board no longer holds them.
pub fn perft<G: MoveGenerator>(generator: &G, state: &BoardState, depth: u8) -> PerftCounts {
    let mut scratch = state.clone();
    perft_recurse(generator, &mut scratch, depth)
}

fn perft_recurse<G: MoveGenerator>(generator: &G, state: &mut BoardState, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for generated in generator.generate_legal_moves(state) {
        if depth == 1 {
            total.nodes += 1;
            if generated.captured_piece.is_some() {
                total.captures += 1;
            }
            if generated.annotations.gives_check {
                total.checks += 1;
            }
            continue;
        }

        let Some(id) = state.board.occupant(generated.mv.from) else {
            continue;
        };
        let side = state.side_to_move;
        let undo = apply_tentative(state, id, generated.mv.to);
        state.side_to_move = side.opposite();
        total.merge(perft_recurse(generator, state, depth - 1));
        state.side_to_move = side;
        rollback(state, undo);
    }

    total
}

/// Nodes only, checking every leaf without annotations.
pub fn perft_nodes<G: MoveGenerator>(generator: &G, state: &BoardState, depth: u8) -> usize {
    perft(generator, state, depth).nodes
}

/// True when the side to move of `state` is attacked. Exposed for perft
/// harnesses that tally checks themselves.
pub fn side_to_move_in_check(state: &BoardState) -> bool {
    is_general_attacked(state, state.side_to_move)
}
