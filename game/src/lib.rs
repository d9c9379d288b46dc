//! Game abstractions crate.
//!
//! Holds the game state and the one tick update algorithm. Nothing here knows
//! about time, input devices or drawing.

pub mod aux;
pub mod difficulty;
pub mod error;
pub mod fruit;
pub mod grid;
pub mod snake;

/// This is an alias for standart [`Result`](std::result::Result) type which
/// represents failure.
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Common reexports in one place.
pub mod prelude {
	pub use crate::{
		advance,
		aux::*,
		difficulty::Difficulty,
		fruit::{Fruit, FruitGenerator, FruitKind, SpawnFruit},
		grid::{Board, GameObject, GridPoint},
		snake::Snake,
		GameState, UpdateResult,
	};
}

use aux::{Cell, Color, Direction};
use difficulty::Difficulty;
use fruit::{Fruit, FruitKind, SpawnFruit};
use grid::{Board, GameObject, GridPoint};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use snake::Snake;

/// Outcome of a single tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateResult {
	/// The snake moved and the game goes on.
	Continued {
		/// Score after the tick.
		score: u32,

		/// High score after the tick.
		high_score: u32,

		/// Kind of the fruit eaten during the tick, if any.
		eaten: Option<FruitKind>,

		/// `true` if the tick raised the high score, so it has to be stored.
		new_high_score: bool,
	},

	/// The snake hit a wall or itself. The state is left as it was before
	/// the tick.
	GameOver {
		/// Final score.
		score: u32,
	},
}

/// Whole state of one game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct GameState {
	snake: Snake,
	fruits: Vec<Fruit>,
	score: u32,
	high_score: u32,
	direction: Direction,
	pending_direction: Direction,
	paused: bool,
	difficulty: Difficulty,
}

impl GameState {
	/// Number of fruits kept on the board.
	pub const FRUITS_AMOUNT: usize = 2;

	/// Cell the snake starts at.
	pub const SNAKE_START: Cell = Cell::new(10, 10);

	/// Direction the snake starts moving in.
	pub const SNAKE_DIRECTION: Direction = Direction::Right;

	/// Return a fresh paused game. `high_score` is the best score of the
	/// previous games.
	pub fn new(high_score: u32, difficulty: Difficulty, spawner: &mut impl SpawnFruit) -> Self {
		Self {
			snake: Snake::new(Self::SNAKE_START),
			fruits: spawner.spawn_batch(Self::FRUITS_AMOUNT),
			score: 0,
			high_score,
			direction: Self::SNAKE_DIRECTION,
			pending_direction: Self::SNAKE_DIRECTION,
			paused: true,
			difficulty,
		}
	}

	/// Return a running game with the given snake and fruits and zero score.
	#[cfg(test)]
	pub(crate) fn with_layout(snake: Snake, fruits: Vec<Fruit>, direction: Direction) -> Self {
		Self {
			snake,
			fruits,
			score: 0,
			high_score: 0,
			direction,
			pending_direction: direction,
			paused: false,
			difficulty: Difficulty::default(),
		}
	}

	/// Advance the game one tick using the pending direction.
	pub fn step(&mut self, spawner: &mut impl SpawnFruit) -> UpdateResult {
		let requested = self.pending_direction;
		advance(self, requested, spawner)
	}

	/// Remember `direction` to be applied on the next tick.
	pub fn request_direction(&mut self, direction: Direction) {
		self.pending_direction = direction;
	}

	/// Return draw-order list of objects: every snake segment, then every
	/// fruit.
	pub fn scene(&self) -> Vec<GridPoint> {
		let mut scene = Vec::with_capacity(self.snake.len() + self.fruits.len());
		for segment in self.snake.body() {
			scene.push(GridPoint::new(GameObject::SnakeSegment, *segment, Color::GREEN));
		}
		for fruit in &self.fruits {
			scene.push(GridPoint::new(
				GameObject::Fruit(fruit.kind()),
				fruit.cell(),
				fruit.kind().color(),
			));
		}
		scene
	}

	/// Return the snake.
	pub fn snake(&self) -> &Snake {
		&self.snake
	}

	/// Return fruits on the board.
	pub fn fruits(&self) -> &[Fruit] {
		&self.fruits
	}

	/// Return current score.
	pub fn score(&self) -> u32 {
		self.score
	}

	/// Return the best score known to this game.
	pub fn high_score(&self) -> u32 {
		self.high_score
	}

	/// Return direction applied on the last tick.
	pub fn direction(&self) -> Direction {
		self.direction
	}

	/// Return direction requested for the next tick.
	pub fn pending_direction(&self) -> Direction {
		self.pending_direction
	}

	/// Return `true` if the game is paused.
	pub fn paused(&self) -> bool {
		self.paused
	}

	/// Pause or resume the game.
	pub fn set_paused(&mut self, paused: bool) {
		self.paused = paused;
	}

	/// Return game speed.
	pub fn difficulty(&self) -> Difficulty {
		self.difficulty
	}

	/// Change game speed.
	pub fn set_difficulty(&mut self, difficulty: Difficulty) {
		self.difficulty = difficulty;
	}
}

/// Advance `state` one tick, moving the snake towards `requested` unless it
/// is the reverse of the current direction.
///
/// A new fruit is taken from `spawner` for every eaten one.
pub fn advance(
	state: &mut GameState,
	requested: Direction,
	spawner: &mut impl SpawnFruit,
) -> UpdateResult {
	let direction = if requested == -state.direction {
		state.direction
	} else {
		requested
	};
	let head = state.snake.head() + direction.offset();

	if !Board::STANDARD.contains(head) || state.snake.contains(head) {
		info!("snake crashed at {} with {} points", head, state.score);
		return UpdateResult::GameOver { score: state.score };
	}

	if direction != state.direction {
		debug!("snake turned {}", direction);
	}
	state.direction = direction;

	let fruits_amount = state.fruits.len();
	let eaten = match state.fruits.iter().position(|fruit| fruit.cell() == head) {
		Some(index) => {
			let fruit = state.fruits.remove(index);
			state.fruits.push(spawner.spawn());
			Some(fruit.kind())
		}
		None => None,
	};

	let mut new_high_score = false;
	match eaten {
		Some(kind) => {
			state.score += kind.score();
			if state.score > state.high_score {
				state.high_score = state.score;
				new_high_score = true;
			}
			state.snake.step(head, kind.growth());
			debug!("{} eaten at {}, score is {}", kind, head, state.score);
		}
		None => state.snake.step(head, 0),
	}
	debug_assert_eq!(state.fruits.len(), fruits_amount);

	UpdateResult::Continued {
		score: state.score,
		high_score: state.high_score,
		eaten,
		new_high_score,
	}
}

#[cfg(test)]
pub mod tests {
	use super::*;
	use crate::fruit::FruitGenerator;

	fn snake(cells: &[(i32, i32)]) -> Snake {
		Snake::from_segments(cells.iter().map(|&c| Cell::from(c))).unwrap()
	}

	fn fruit(x: i32, y: i32, kind: FruitKind) -> Fruit {
		Fruit::new(Cell::new(x, y), kind)
	}

	/// Spawner which puts every new fruit in the corner.
	fn corner() -> impl FnMut() -> Fruit {
		|| fruit(0, 0, FruitKind::Normal)
	}

	fn body(state: &GameState) -> Vec<Cell> {
		state.snake().body().iter().copied().collect()
	}

	#[test]
	fn plain_move() {
		let far = vec![fruit(30, 20, FruitKind::Normal), fruit(31, 20, FruitKind::Normal)];
		let mut state = GameState::with_layout(snake(&[(10, 10)]), far, Direction::Right);

		let result = advance(&mut state, Direction::Right, &mut corner());

		assert!(matches!(result, UpdateResult::Continued { eaten: None, score: 0, .. }));
		assert_eq!(body(&state), vec![Cell::new(11, 10)]);
		assert_eq!(state.score(), 0);
	}

	#[test]
	fn eat_normal() {
		let fruits = vec![fruit(11, 10, FruitKind::Normal), fruit(30, 20, FruitKind::Cherry)];
		let mut state = GameState::with_layout(snake(&[(10, 10)]), fruits, Direction::Right);

		let result = advance(&mut state, Direction::Right, &mut corner());

		assert_eq!(
			result,
			UpdateResult::Continued {
				score: 10,
				high_score: 10,
				eaten: Some(FruitKind::Normal),
				new_high_score: true,
			}
		);
		assert_eq!(body(&state), vec![Cell::new(11, 10), Cell::new(10, 10)]);
		assert_eq!(state.fruits().len(), GameState::FRUITS_AMOUNT);
		assert!(state.fruits().iter().all(|f| f.cell() != Cell::new(11, 10)));
		assert!(state.fruits().contains(&fruit(30, 20, FruitKind::Cherry)));
	}

	#[test]
	fn eat_cherry() {
		let fruits = vec![fruit(11, 10, FruitKind::Cherry), fruit(30, 20, FruitKind::Normal)];
		let mut state = GameState::with_layout(snake(&[(10, 10), (9, 10)]), fruits, Direction::Right);

		advance(&mut state, Direction::Right, &mut corner());

		assert_eq!(state.snake().len(), 5);
		assert_eq!(state.score(), 10);
	}

	#[test]
	fn eat_blueberry() {
		let fruits = vec![fruit(10, 9, FruitKind::Blueberry), fruit(30, 20, FruitKind::Normal)];
		let mut state = GameState::with_layout(snake(&[(10, 10)]), fruits, Direction::Up);

		advance(&mut state, Direction::Up, &mut corner());

		assert_eq!(state.snake().len(), 2);
		assert_eq!(state.score(), 25);
	}

	#[test]
	fn only_one_stacked_fruit_is_eaten() {
		let fruits = vec![fruit(11, 10, FruitKind::Normal), fruit(11, 10, FruitKind::Blueberry)];
		let mut state = GameState::with_layout(snake(&[(10, 10)]), fruits, Direction::Right);

		advance(&mut state, Direction::Right, &mut corner());

		assert_eq!(state.score(), 10);
		assert_eq!(state.fruits().len(), 2);
		assert!(state.fruits().contains(&fruit(11, 10, FruitKind::Blueberry)));
	}

	#[test]
	fn wall_crash() {
		let mut state = GameState::with_layout(snake(&[(0, 10)]), Vec::new(), Direction::Left);
		let before = state.clone();

		let result = advance(&mut state, Direction::Left, &mut corner());

		assert_eq!(result, UpdateResult::GameOver { score: 0 });
		assert_eq!(state, before);
	}

	#[test]
	fn walls_on_every_side() {
		let cases = [
			((39, 5), Direction::Right),
			((5, 0), Direction::Up),
			((5, 29), Direction::Down),
			((0, 5), Direction::Left),
		];
		for (start, direction) in cases {
			let mut state = GameState::with_layout(snake(&[start]), Vec::new(), direction);
			assert!(matches!(
				advance(&mut state, direction, &mut corner()),
				UpdateResult::GameOver { .. }
			));
		}
	}

	#[test]
	fn self_crash_keeps_state() {
		// Head at (5, 5) turning down runs into (5, 6).
		let fruits = vec![fruit(1, 1, FruitKind::Normal), fruit(2, 2, FruitKind::Normal)];
		let mut state = GameState::with_layout(
			snake(&[(5, 5), (4, 5), (4, 6), (5, 6), (6, 6)]),
			fruits,
			Direction::Right,
		);
		state.score = 40;
		let before = state.clone();

		let result = advance(&mut state, Direction::Down, &mut corner());

		assert_eq!(result, UpdateResult::GameOver { score: 40 });
		assert_eq!(state, before);
	}

	#[test]
	fn tail_about_to_move_still_kills() {
		// A square loop: the head steps onto the current tail.
		let mut state = GameState::with_layout(
			snake(&[(5, 5), (5, 6), (6, 6), (6, 5)]),
			Vec::new(),
			Direction::Up,
		);

		let result = advance(&mut state, Direction::Right, &mut corner());

		assert!(matches!(result, UpdateResult::GameOver { .. }));
	}

	#[test]
	fn reverse_is_ignored() {
		let far = vec![fruit(30, 20, FruitKind::Normal), fruit(31, 20, FruitKind::Normal)];
		let mut state = GameState::with_layout(snake(&[(10, 10), (9, 10)]), far, Direction::Right);

		let result = advance(&mut state, Direction::Left, &mut corner());

		assert!(matches!(result, UpdateResult::Continued { .. }));
		assert_eq!(state.direction(), Direction::Right);
		assert_eq!(state.snake().head(), Cell::new(11, 10));
	}

	#[test]
	fn reverse_is_ignored_for_single_segment() {
		let mut state = GameState::with_layout(snake(&[(10, 10)]), Vec::new(), Direction::Up);

		advance(&mut state, Direction::Down, &mut corner());

		assert_eq!(state.snake().head(), Cell::new(10, 9));
	}

	#[test]
	fn turn_is_applied() {
		let mut state = GameState::with_layout(snake(&[(10, 10)]), Vec::new(), Direction::Right);
		state.request_direction(Direction::Down);

		state.step(&mut corner());

		assert_eq!(state.direction(), Direction::Down);
		assert_eq!(state.snake().head(), Cell::new(10, 11));
	}

	#[test]
	fn high_score_is_kept_above_score() {
		let fruits = vec![fruit(11, 10, FruitKind::Normal), fruit(12, 10, FruitKind::Normal)];
		let mut state = GameState::with_layout(snake(&[(10, 10)]), fruits, Direction::Right);
		state.high_score = 15;

		let first = advance(&mut state, Direction::Right, &mut corner());
		assert!(matches!(first, UpdateResult::Continued { high_score: 15, new_high_score: false, .. }));

		let second = advance(&mut state, Direction::Right, &mut corner());
		assert!(matches!(second, UpdateResult::Continued { high_score: 20, new_high_score: true, .. }));
		assert!(state.high_score() >= state.score());
	}

	/// Direction towards the first fruit not covered by the snake, never the
	/// reverse of the current one.
	fn chase(state: &GameState) -> Direction {
		let head = state.snake().head();
		let target = state
			.fruits()
			.iter()
			.map(|fruit| fruit.cell())
			.find(|&cell| !state.snake().contains(cell));
		let target = match target {
			Some(target) => target,
			None => return state.direction(),
		};
		let (dx, dy) = (target.x - head.x, target.y - head.y);
		let wanted = [
			(dx > 0, Direction::Right),
			(dx < 0, Direction::Left),
			(dy > 0, Direction::Down),
			(dy < 0, Direction::Up),
		];
		wanted
			.iter()
			.filter(|(fits, direction)| *fits && *direction != -state.direction())
			.map(|&(_, direction)| direction)
			.next()
			.unwrap_or(match state.direction() {
				Direction::Left | Direction::Right if head.y < Board::HEIGHT / 2 => Direction::Down,
				Direction::Left | Direction::Right => Direction::Up,
				_ if head.x < Board::WIDTH / 2 => Direction::Right,
				_ => Direction::Left,
			})
	}

	#[test]
	fn random_play_invariants() {
		let mut generator = FruitGenerator::seeded(3);
		let mut state = GameState::new(0, Difficulty::default(), &mut generator);
		let mut last_score = 0;
		let mut eats = 0;

		for _ in 0..2000 {
			let length = state.snake().len();
			let requested = chase(&state);
			match advance(&mut state, requested, &mut generator) {
				UpdateResult::Continued { score, eaten, .. } => {
					let growth = eaten.map(FruitKind::growth).unwrap_or(0);
					assert_eq!(state.snake().len(), length + growth);
					assert_eq!(state.fruits().len(), GameState::FRUITS_AMOUNT);
					assert!(score >= last_score);
					assert!(state.high_score() >= score);
					for cell in state.snake().body() {
						assert!(Board::STANDARD.contains(*cell));
					}
					if eaten.is_some() {
						eats += 1;
						assert!(score > last_score);
					}
					last_score = score;
				}
				UpdateResult::GameOver { score } => {
					assert_eq!(score, last_score);
					break;
				}
			}
		}

		assert!(eats > 0);
	}

	#[test]
	fn fresh_game() {
		let mut spawner = corner();
		let state = GameState::new(120, Difficulty::Fast, &mut spawner);

		assert_eq!(body(&state), vec![GameState::SNAKE_START]);
		assert_eq!(state.fruits().len(), 2);
		assert_eq!(state.score(), 0);
		assert_eq!(state.high_score(), 120);
		assert_eq!(state.direction(), Direction::Right);
		assert!(state.paused());
		assert_eq!(state.difficulty(), Difficulty::Fast);
	}

	#[test]
	fn scene_order() {
		let fruits = vec![fruit(1, 1, FruitKind::Cherry), fruit(2, 2, FruitKind::Blueberry)];
		let state = GameState::with_layout(snake(&[(5, 5), (4, 5)]), fruits, Direction::Right);

		let kinds: Vec<GameObject> = state.scene().iter().map(|p| p.object_kind).collect();
		assert_eq!(
			kinds,
			vec![
				GameObject::SnakeSegment,
				GameObject::SnakeSegment,
				GameObject::Fruit(FruitKind::Cherry),
				GameObject::Fruit(FruitKind::Blueberry),
			]
		);
		assert_eq!(state.scene()[3].color, Color::BLUE);
	}
}
