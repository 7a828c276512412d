//! Crate root module declarations for the Plum Isolation game-search engine.
//!
//! Exposes the board contract and the reference Isolation game, the search
//! core (deadline clock, evaluation, minimax, alpha-beta, iterative
//! deepening), the engine layer built on top of it, and small utilities
//! shared by tests and benches.

pub mod errors;

pub mod game_state {
    pub mod game_position;
    pub mod isolation;
}

pub mod search {
    pub mod alpha_beta;
    pub mod board_scoring;
    pub mod deadline;
    pub mod evaluation;
    pub mod iterative_deepening;
    pub mod minimax;
    pub mod search_types;
}

pub mod engines {
    pub mod engine_iterative;
    pub mod engine_minimax;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod random_opening;
}

#[cfg(test)]
mod test_support;
