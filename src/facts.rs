//! Snake trivia shown on the game over screen.

use rand::{seq::SliceRandom, Rng};

/// Facts to pick from.
pub const FUN_FACTS: [&str; 8] = [
	"Snakes smell with their tongues.",
	"Some snakes can go a whole year without eating.",
	"A snake's jaw can stretch to swallow prey wider than its head.",
	"Snakes have no eyelids, a clear scale protects each eye.",
	"There are more than 3,500 species of snakes.",
	"Pythons can sense the body heat of their prey.",
	"Snakes shed their skin several times a year.",
	"The reticulated python can grow longer than 6 metres.",
];

/// Return a random fact.
pub fn random_fact<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
	FUN_FACTS.choose(rng).copied().unwrap_or(FUN_FACTS[0])
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::{rngs::StdRng, SeedableRng};

	#[test]
	fn picks_known_fact() {
		let mut rng = StdRng::seed_from_u64(9);
		for _ in 0..20 {
			assert!(FUN_FACTS.contains(&random_fact(&mut rng)));
		}
	}
}
