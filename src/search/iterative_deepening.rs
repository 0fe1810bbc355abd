//! Iterative deepening search with negamax alpha-beta pruning.
//!
//! Each call to [`Engine::find_best_move`] clears the transposition table,
//! starts a [`SearchTimer`] and deepens one ply at a time until the depth
//! limit, the time budget or a forced mate ends the search. An iteration cut
//! short by the timer is thrown away, so the returned move always comes from
//! the deepest iteration that completed. The first iteration ignores the
//! timer so a move is returned whenever one exists.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{debug, error, info, trace};

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::generate_all_legal_moves;
use crate::moves::magic::init_slider_tables;
use crate::search::board_scoring::{BoardScorer, StandardScorer, MATE_SCORE};
use crate::search::move_ordering::order_moves;
use crate::search::search_config::SearchConfig;
use crate::search::search_timer::SearchTimer;
use crate::search::transposition_table::{Bound, TTEntry, TranspositionTable};

/// Wider than any reachable score, mate scores included.
pub const INFINITY: i32 = 1_000_000;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    /// Deepest iteration that ran to completion.
    pub depth_reached: u32,
    /// Score of `best_move` for the side to move.
    pub score: i32,
    /// Search ended because a forced mate was found.
    pub shortest_mate_found: bool,
    /// Probes that found an entry deep enough to use.
    pub transposition_hits: u64,
    pub nodes: u64,
    pub elapsed: Duration,
}

struct RootOutcome {
    best_move: Option<Move>,
    score: i32,
    mate_found: bool,
}

pub struct Engine<S: BoardScorer = StandardScorer> {
    config: SearchConfig,
    scorer: S,
    tt: TranspositionTable,
    stop_flag: Arc<AtomicBool>,
    root_depth: u32,
    abortable: bool,
    nodes: u64,
    transposition_hits: u64,
}

impl Engine<StandardScorer> {
    pub fn new(config: SearchConfig) -> Self {
        Self::with_scorer(config, StandardScorer)
    }
}

impl Default for Engine<StandardScorer> {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl<S: BoardScorer> Engine<S> {
    pub fn with_scorer(config: SearchConfig, scorer: S) -> Self {
        // Build the magic tables now rather than inside the first timed search.
        init_slider_tables();
        Self {
            tt: TranspositionTable::new_with_mb(config.transposition_table_mb),
            config,
            scorer,
            stop_flag: Arc::new(AtomicBool::new(false)),
            root_depth: 0,
            abortable: false,
            nodes: 0,
            transposition_hits: 0,
        }
    }

    #[inline]
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Replace the limits. The table is reallocated only when its size changes.
    pub fn set_config(&mut self, config: SearchConfig) {
        if config.transposition_table_mb != self.config.transposition_table_mb {
            self.tt = TranspositionTable::new_with_mb(config.transposition_table_mb);
        }
        self.config = config;
    }

    /// Search `game_state` within the configured limits.
    ///
    /// The position is only read. `best_move` is `None` exactly when the side
    /// to move has no legal moves.
    pub fn find_best_move(&mut self, game_state: &GameState) -> SearchResult {
        let started_at = Instant::now();
        self.tt.clear();
        self.nodes = 0;
        self.transposition_hits = 0;
        self.stop_flag.store(false, Ordering::Release);

        let mut result = SearchResult::default();
        let root_moves = generate_all_legal_moves(game_state);
        if root_moves.is_empty() {
            result.score = if is_king_in_check(game_state) {
                -MATE_SCORE
            } else {
                0
            };
            result.elapsed = started_at.elapsed();
            debug!(fen = %game_state.get_fen(), "no legal moves at the root");
            return result;
        }

        debug!(
            fen = %game_state.get_fen(),
            root_moves = root_moves.len(),
            time_limit_ms = self.config.time_limit.as_millis() as u64,
            depth_limit = self.config.depth_limit,
            "starting search"
        );

        let timer = SearchTimer::start(Arc::clone(&self.stop_flag), self.config.time_limit);

        for depth in 1..=self.config.depth_limit.max(1) {
            self.abortable = depth > 1;
            let outcome = self.search_root(game_state, &root_moves, depth);

            if self.should_stop() {
                trace!(depth, "iteration interrupted, result discarded");
                break;
            }

            result.best_move = outcome.best_move;
            result.score = outcome.score;
            result.depth_reached = depth;
            trace!(
                depth,
                score = outcome.score,
                nodes = self.nodes,
                best_move = ?outcome.best_move,
                "iteration complete"
            );

            if outcome.mate_found {
                result.shortest_mate_found = true;
                break;
            }
            if self.stop_flag.load(Ordering::Acquire) {
                break;
            }
        }

        timer.finish();

        result.nodes = self.nodes;
        result.transposition_hits = self.transposition_hits;
        result.elapsed = started_at.elapsed();
        let tt_stats = self.tt.stats();
        info!(
            depth = result.depth_reached,
            score = result.score,
            nodes = result.nodes,
            tt_hits = result.transposition_hits,
            tt_probes = tt_stats.probes,
            tt_stores = tt_stats.stores,
            tt_entries = self.tt.len(),
            mate = result.shortest_mate_found,
            elapsed_ms = result.elapsed.as_millis() as u64,
            "search finished"
        );
        result
    }

    #[inline]
    fn should_stop(&self) -> bool {
        self.abortable && self.stop_flag.load(Ordering::Relaxed)
    }

    fn search_root(
        &mut self,
        game_state: &GameState,
        root_moves: &[Move],
        depth: u32,
    ) -> RootOutcome {
        self.root_depth = depth;

        let tt_move = self
            .tt
            .probe(game_state.zobrist_key)
            .and_then(|entry| entry.best_move);
        let mut moves = root_moves.to_vec();
        order_moves(game_state, &mut moves, tt_move);

        let mut best_move = None;
        let mut best = -MATE_SCORE;
        let mut mate_found = false;

        for mv in moves {
            let mut child = *game_state;
            if let Err(err) = child.apply_move(mv) {
                error!(%err, ?mv, "generated root move failed to apply");
                continue;
            }

            let score = -self.negamax(&child, depth - 1, -INFINITY, -best);
            if self.should_stop() {
                break;
            }

            if best_move.is_none() || score > best {
                best = score;
                best_move = Some(mv);
            }

            if best >= MATE_SCORE - depth as i32 {
                mate_found = true;
                break;
            }
        }

        if !self.should_stop() {
            self.tt.store(TTEntry {
                key: game_state.zobrist_key,
                depth,
                score: best,
                bound: Bound::Exact,
                best_move,
            });
        }

        RootOutcome {
            best_move,
            score: best,
            mate_found,
        }
    }

    fn negamax(
        &mut self,
        game_state: &GameState,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        if self.should_stop() {
            return 0;
        }
        self.nodes += 1;

        let mut tt_move = None;
        if let Some(entry) = self.tt.probe(game_state.zobrist_key) {
            tt_move = entry.best_move;
            if entry.depth >= depth {
                self.transposition_hits += 1;
                match entry.bound {
                    Bound::Exact => return entry.score,
                    Bound::Lower => alpha = alpha.max(entry.score),
                    Bound::Upper => beta = beta.min(entry.score),
                }
                if alpha >= beta {
                    return entry.score;
                }
            }
        }

        if depth == 0 {
            return self.scorer.score(game_state);
        }

        let mut moves = generate_all_legal_moves(game_state);
        if moves.is_empty() {
            return if is_king_in_check(game_state) {
                // Mates closer to the root score higher.
                -MATE_SCORE + (self.root_depth - depth) as i32
            } else {
                0
            };
        }
        order_moves(game_state, &mut moves, tt_move);

        let window_alpha = alpha;
        let mut best = -INFINITY;
        let mut best_move = None;

        for mv in moves {
            let mut child = *game_state;
            if let Err(err) = child.apply_move(mv) {
                error!(%err, ?mv, "generated move failed to apply");
                continue;
            }

            let score = -self.negamax(&child, depth - 1, -beta, -alpha);
            if self.should_stop() {
                return 0;
            }

            if score > best {
                best = score;
                best_move = Some(mv);
            }
            if best > alpha {
                alpha = best;
            }
            if alpha >= beta {
                break;
            }
        }

        let bound = if best <= window_alpha {
            Bound::Upper
        } else if best >= beta {
            Bound::Lower
        } else {
            Bound::Exact
        };
        self.tt.store(TTEntry {
            key: game_state.zobrist_key,
            depth,
            score: best,
            bound,
            best_move,
        });

        best
    }
}
