use anyhow::{Result, anyhow};
use dreamdle_game::{
    Character, GameMode, MemoryJudge, ModeConfigIds, SessionController, stage_description,
};
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use std::rc::Rc;

pub type Controller = SessionController<Rc<MemoryJudge>>;

/// Whether a character can serve as the target of `mode`.
fn has_clues(character: &Character, mode: GameMode) -> bool {
    match mode {
        GameMode::Classic => true,
        GameMode::Emoji => !character.emojis.is_empty(),
        GameMode::Description => !stage_description(&character.description).is_empty(),
    }
}

/// One seeded iteration: a target per mode and a shuffled pool of wrong guesses.
pub struct Fixture {
    roster: Vec<Character>,
    ids: ModeConfigIds,
    targets: [u64; 3],
    rng: ChaCha8Rng,
}

impl Fixture {
    /// Targets drawn from characters that carry clues for their mode.
    pub fn new(roster: &[Character], seed: u64) -> Result<Self> {
        Self::pick(roster, seed, |c, mode| has_clues(c, mode))
    }

    /// Clue-mode targets drawn from characters with no clues at all.
    pub fn degraded(roster: &[Character], seed: u64) -> Result<Self> {
        Self::pick(roster, seed, |c, mode| {
            mode == GameMode::Classic || !has_clues(c, mode)
        })
    }

    fn pick(
        roster: &[Character],
        seed: u64,
        eligible: impl Fn(&Character, GameMode) -> bool,
    ) -> Result<Self> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut targets = [0; 3];
        for (slot, mode) in GameMode::ALL.into_iter().enumerate() {
            let pool: Vec<&Character> = roster.iter().filter(|c| eligible(c, mode)).collect();
            let chosen = pool
                .choose(&mut rng)
                .ok_or_else(|| anyhow!("roster has no eligible {mode} target"))?;
            targets[slot] = chosen.id;
        }
        log::debug!("seed {seed} targets {targets:?}");
        Ok(Self {
            roster: roster.to_vec(),
            ids: ModeConfigIds::default(),
            targets,
            rng,
        })
    }

    pub fn judge(&self) -> Rc<MemoryJudge> {
        let judge = GameMode::ALL
            .into_iter()
            .zip(self.targets)
            .fold(MemoryJudge::new(self.roster.clone()), |judge, (mode, id)| {
                judge.with_target(self.ids.id_for(mode), id)
            });
        Rc::new(judge)
    }

    pub fn controller(&self, judge: &Rc<MemoryJudge>, mode: GameMode) -> Controller {
        SessionController::new(Rc::clone(judge), mode, self.ids.id_for(mode))
    }

    fn target_id(&self, mode: GameMode) -> u64 {
        let slot = GameMode::ALL
            .iter()
            .position(|m| *m == mode)
            .unwrap_or_default();
        self.targets[slot]
    }

    pub fn target_name(&self, mode: GameMode) -> Result<String> {
        let id = self.target_id(mode);
        self.roster
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.name.clone())
            .ok_or_else(|| anyhow!("target {id} missing from roster"))
    }

    /// Up to `count` distinct wrong names for `mode`, in seeded random order.
    pub fn decoys(&mut self, mode: GameMode, count: usize) -> Vec<String> {
        let target = self.target_id(mode);
        let mut names: Vec<String> = self
            .roster
            .iter()
            .filter(|c| c.id != target)
            .map(|c| c.name.clone())
            .collect();
        names.shuffle(&mut self.rng);
        names.truncate(count);
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dreamdle_game::sample_roster;

    #[test]
    fn same_seed_same_targets() {
        let roster = sample_roster().unwrap();
        let a = Fixture::new(&roster, 7).unwrap();
        let b = Fixture::new(&roster, 7).unwrap();
        assert_eq!(a.targets, b.targets);
    }

    #[test]
    fn clue_targets_carry_clues() {
        let roster = sample_roster().unwrap();
        for seed in 0..20 {
            let fixture = Fixture::new(&roster, seed).unwrap();
            let judge = fixture.judge();
            let emoji = judge.target_of(fixture.ids.emoji).unwrap();
            assert!(!emoji.emojis.is_empty());
            let degraded = Fixture::degraded(&roster, seed).unwrap();
            let judge = degraded.judge();
            let emoji = judge.target_of(degraded.ids.emoji).unwrap();
            assert!(emoji.emojis.is_empty());
        }
    }

    #[test]
    fn decoys_never_include_target() {
        let roster = sample_roster().unwrap();
        let mut fixture = Fixture::new(&roster, 3).unwrap();
        let target = fixture.target_name(GameMode::Classic).unwrap();
        let decoys = fixture.decoys(GameMode::Classic, 20);
        assert_eq!(decoys.len(), roster.len() - 1);
        assert!(!decoys.contains(&target));
    }
}
