//! Core game logic: attack resolution, fortify repositioning and turn/win
//! control for both players, driven symmetrically through one engine.

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::board::{Board, CellState};
use crate::common::{AttackOutcome, Coord, FortifyEvent, GameError, PlayerId};
use crate::config::{GRID_SIZE, PLAYER_ONE_SHIPS, PLAYER_TWO_SHIPS};
use crate::fleet::Fleet;

/// Report returned by a completed attack.
///
/// `winner` is populated on the terminal move only, so a caller that forwards
/// it to a win counter records each game exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttackReport {
    pub attacker: PlayerId,
    pub coord: Coord,
    pub outcome: AttackOutcome,
    pub game_over: bool,
    pub winner: Option<PlayerId>,
}

/// Serializable snapshot of a running game.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub boards: [Board; 2],
    pub fleets: [Fleet; 2],
    pub current: PlayerId,
    pub game_over: bool,
    pub winner: Option<PlayerId>,
    pub fortify_mode: bool,
    pub selected: Option<String>,
    pub status: String,
}

/// Resolve one attack against a defender's board and fleet.
///
/// Rejects revealed cells with no state change. Otherwise marks exactly one
/// cell and, on a hit, increments exactly one ship's hit counter. The true
/// nature of the cell is taken from the fleet when a ship occupies an
/// unrevealed coordinate, falling back to the recorded cell state (a ship
/// segment already marked HIT is never credited twice).
pub fn resolve_attack(
    board: &mut Board,
    fleet: &mut Fleet,
    coord: Coord,
) -> Result<AttackOutcome, GameError> {
    let (row, col) = coord;
    let cell = board.cell(row, col)?;
    if matches!(cell, CellState::Hit | CellState::Miss) {
        return Err(GameError::AlreadyRevealed { row, col });
    }

    let truth = match fleet.ship_at(coord) {
        Some(_) if cell != CellState::Hit => CellState::Ship,
        _ => cell,
    };

    match truth {
        CellState::Empty => {
            board.set_cell(row, col, CellState::Miss)?;
            Ok(AttackOutcome::Miss)
        }
        CellState::Ship => {
            board.set_cell(row, col, CellState::Hit)?;
            let ship = fleet
                .ship_at_mut(coord)
                .ok_or(GameError::AlreadyRevealed { row, col })?;
            ship.record_hit();
            let id = ship.id().to_string();
            if ship.is_sunk() {
                Ok(AttackOutcome::Sunk(id))
            } else {
                Ok(AttackOutcome::Hit(id))
            }
        }
        // revealed states were rejected above
        CellState::Hit | CellState::Miss => Err(GameError::AlreadyRevealed { row, col }),
    }
}

/// The battle engine: two boards, two fleets, and turn/win control.
///
/// Every mutating operation either completes and updates the state, or fails
/// with a [`GameError`] and leaves the state exactly as it was.
pub struct GameEngine {
    boards: [Board; 2],
    fleets: [Fleet; 2],
    current: PlayerId,
    game_over: bool,
    winner: Option<PlayerId>,
    fortify_mode: bool,
    selected: Option<String>,
    status: String,
}

impl GameEngine {
    /// Start a new game at the fixed initial layouts, Player 1 to move.
    pub fn new() -> Self {
        let fleets = [
            Fleet::from_specs(&PLAYER_ONE_SHIPS),
            Fleet::from_specs(&PLAYER_TWO_SHIPS),
        ];
        let boards = [
            Board::from_fleet(GRID_SIZE, &fleets[0]),
            Board::from_fleet(GRID_SIZE, &fleets[1]),
        ];
        GameEngine {
            boards,
            fleets,
            current: PlayerId::One,
            game_over: false,
            winner: None,
            fortify_mode: false,
            selected: None,
            status: String::new(),
        }
    }

    /// Reset to the same initial layouts as a freshly constructed game.
    pub fn reset(&mut self) {
        *self = GameEngine::new();
    }

    /// Player whose turn it is.
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    /// Whether the game has reached its terminal state.
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Winner of the game, once decided.
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    /// Whether the current player is in fortify mode.
    pub fn fortify_mode(&self) -> bool {
        self.fortify_mode
    }

    /// Id of the ship selected for fortifying, if any.
    pub fn selected_ship(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Human-readable message describing the last engine action.
    pub fn status_message(&self) -> &str {
        &self.status
    }

    /// A player's board.
    pub fn board(&self, player: PlayerId) -> &Board {
        &self.boards[player.index()]
    }

    /// A player's fleet.
    pub fn fleet(&self, player: PlayerId) -> &Fleet {
        &self.fleets[player.index()]
    }

    /// Current player attacks (`row`, `col`) on the opponent's board.
    ///
    /// A valid move marks the cell, updates the hit ship if any, and passes
    /// the turn unless the defending fleet was just destroyed, in which case
    /// the game ends with the attacker as winner. Completing an attack also
    /// ends any open fortify session: the selection never outlives the turn.
    pub fn attack(&mut self, row: usize, col: usize) -> Result<AttackReport, GameError> {
        if self.game_over {
            return Err(GameError::GameAlreadyOver);
        }
        if !(row < GRID_SIZE && col < GRID_SIZE) {
            return Err(GameError::OutOfBounds { row, col });
        }

        let attacker = self.current;
        let defender = attacker.other();
        let (outcome, destroyed) = {
            let board = &mut self.boards[defender.index()];
            let fleet = &mut self.fleets[defender.index()];
            let outcome = resolve_attack(board, fleet, (row, col))?;
            (outcome, fleet.is_destroyed())
        };

        let mut winner = None;
        if destroyed {
            self.game_over = true;
            self.winner = Some(attacker);
            winner = Some(attacker);
        } else {
            self.current = defender;
        }
        // the turn is spent; a stale selection must not survive into the
        // opponent's (or a later) fortify session
        self.fortify_mode = false;
        self.selected = None;

        self.status = match &outcome {
            AttackOutcome::Miss => format!("{} missed at ({}, {}).", attacker, row, col),
            AttackOutcome::Hit(id) => format!("{} hit {} at ({}, {})!", attacker, id, row, col),
            AttackOutcome::Sunk(id) if destroyed => {
                format!("{} sunk! Game over, {} wins!", id, attacker)
            }
            AttackOutcome::Sunk(id) => format!("{} sunk {}!", attacker, id),
        };

        Ok(AttackReport {
            attacker,
            coord: (row, col),
            outcome,
            game_over: self.game_over,
            winner,
        })
    }

    /// Toggle fortify mode for the current player, clearing any selection.
    pub fn toggle_fortify(&mut self) -> Result<bool, GameError> {
        if self.game_over {
            return Err(GameError::GameAlreadyOver);
        }
        self.fortify_mode = !self.fortify_mode;
        self.selected = None;
        self.status = if self.fortify_mode {
            "Fortify mode: select an undamaged ship.".into()
        } else {
            "Attack mode.".into()
        };
        Ok(self.fortify_mode)
    }

    /// Fortify-mode click on the current player's own board, dispatching
    /// between ship selection and a move attempt.
    pub fn fortify_click(&mut self, row: usize, col: usize) -> Result<FortifyEvent, GameError> {
        if self.game_over {
            return Err(GameError::GameAlreadyOver);
        }
        if !self.fortify_mode {
            return Err(GameError::NotInFortifyMode);
        }
        if !(row < GRID_SIZE && col < GRID_SIZE) {
            return Err(GameError::OutOfBounds { row, col });
        }

        match self.selected.clone() {
            None => self.fortify_select((row, col)),
            Some(id) => self.fortify_move(&id, (row, col)),
        }
    }

    fn fortify_select(&mut self, coord: Coord) -> Result<FortifyEvent, GameError> {
        let acting = self.current.index();
        match self.fleets[acting].ship_at(coord) {
            Some(ship) if ship.hits() == 0 => {
                let id = ship.id().to_string();
                self.selected = Some(id.clone());
                self.status = format!("{} selected. Click a destination.", id);
                Ok(FortifyEvent::Selected(id))
            }
            Some(ship) => Err(GameError::ShipDamaged(ship.id().to_string())),
            None => {
                self.status = "Click one of your undamaged ships.".into();
                Ok(FortifyEvent::NothingHere)
            }
        }
    }

    fn fortify_move(&mut self, id: &str, coord: Coord) -> Result<FortifyEvent, GameError> {
        let acting = self.current.index();

        if let Some(clicked) = self.fleets[acting].ship_at(coord) {
            if clicked.id() == id {
                self.selected = None;
                self.status = "Ship deselected.".into();
                return Ok(FortifyEvent::Deselected);
            }
            self.status = format!("{} still selected. Click a destination or deselect.", id);
            return Ok(FortifyEvent::SelectionKept(id.to_string()));
        }

        let ship = self.fleets[acting]
            .get(id)
            .ok_or_else(|| GameError::UnknownShip(id.to_string()))?;
        let old_coords: Vec<Coord> = ship.coords().to_vec();
        let proposed = ship.orientation().run(coord, ship.size());

        for &(r, c) in &proposed {
            if !(r < GRID_SIZE && c < GRID_SIZE) {
                return Err(GameError::OutOfBounds { row: r, col: c });
            }
        }
        for &(r, c) in &proposed {
            if matches!(
                self.boards[acting].cell(r, c)?,
                CellState::Hit | CellState::Miss
            ) {
                return Err(GameError::DestinationRevealed { row: r, col: c });
            }
        }
        for other in self.fleets[acting].ships() {
            if other.id() == id {
                continue;
            }
            if proposed.iter().any(|&c| other.occupies(c)) {
                return Err(GameError::ShipCollision(other.id().to_string()));
            }
        }
        if proposed.len() == old_coords.len() && proposed.iter().all(|c| old_coords.contains(c)) {
            return Err(GameError::NoOpMove);
        }

        self.fleets[acting]
            .get_mut(id)
            .ok_or_else(|| GameError::UnknownShip(id.to_string()))?
            .set_coords(proposed.clone());
        for &(r, c) in &old_coords {
            self.boards[acting].set_cell(r, c, CellState::Empty)?;
        }
        for &(r, c) in &proposed {
            self.boards[acting].set_cell(r, c, CellState::Ship)?;
        }

        self.selected = None;
        self.fortify_mode = false;
        self.current = self.current.other();
        self.status = format!("{} moved.", id);
        Ok(FortifyEvent::Moved(id.to_string()))
    }

    /// Serializable snapshot of the full game state.
    pub fn state(&self) -> GameState {
        GameState {
            boards: self.boards.clone(),
            fleets: self.fleets.clone(),
            current: self.current,
            game_over: self.game_over,
            winner: self.winner,
            fortify_mode: self.fortify_mode,
            selected: self.selected.clone(),
            status: self.status.clone(),
        }
    }

    /// Restore an engine from a previously captured snapshot.
    pub fn from_state(state: GameState) -> Self {
        GameEngine {
            boards: state.boards,
            fleets: state.fleets,
            current: state.current,
            game_over: state.game_over,
            winner: state.winner,
            fortify_mode: state.fortify_mode,
            selected: state.selected,
            status: state.status,
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
