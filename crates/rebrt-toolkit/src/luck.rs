use crate::ToolError;
use rand::seq::IndexedRandom;
use rand::Rng;

const COIN_SIDES: [&str; 2] = ["I can't stop winning", "Oh dang it"];

pub fn coin<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    if rng.random_bool(0.5) {
        COIN_SIDES[0]
    } else {
        COIN_SIDES[1]
    }
}

/// Random item of a whitespace separated list. `None` for an empty list.
pub fn pick<'a, R: Rng + ?Sized>(items: &'a str, rng: &mut R) -> Option<&'a str> {
    let items: Vec<&str> = items.split_whitespace().collect();
    items.choose(rng).copied()
}

/// Uniform integer in `[start, stop]`
pub fn random_between<R: Rng + ?Sized>(start: i64, stop: i64, rng: &mut R) -> Result<i64, ToolError> {
    if start > stop {
        return Err(ToolError::InvalidRange { start, stop });
    }
    Ok(rng.random_range(start..=stop))
}

/// Value for comparing ISVs: the leader skill counts five times
pub fn isv(leader_skill: i64, team_skill: i64) -> i64 {
    leader_skill * 4 + team_skill - 90
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_coin_lands_on_a_side() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            assert!(COIN_SIDES.contains(&coin(&mut rng)));
        }
    }

    #[test]
    fn test_pick() {
        let mut rng = StdRng::seed_from_u64(7);
        let items = "ichika  saki\thonami shiho";
        for _ in 0..20 {
            let picked = pick(items, &mut rng).unwrap();
            assert!(["ichika", "saki", "honami", "shiho"].contains(&picked));
        }
        assert_eq!(pick("   ", &mut rng), None);
    }

    #[test]
    fn test_random_between() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let n = random_between(1, 6, &mut rng).unwrap();
            assert!((1..=6).contains(&n));
        }
        assert_eq!(random_between(3, 3, &mut rng), Ok(3));
        assert_eq!(
            random_between(10, 1, &mut rng),
            Err(ToolError::InvalidRange { start: 10, stop: 1 })
        );
    }

    #[test]
    fn test_isv() {
        assert_eq!(isv(120, 560), 950);
        assert_eq!(isv(0, 0), -90);
    }
}
