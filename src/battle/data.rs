use schema::{Actor, Team, Unit};

/// Mutable per-encounter context shared between the resolver and the view.
///
/// The teams are borrowed: whoever owns them must keep them alive for the whole
/// encounter. HP values here are the real ones, kept per unit so a unit switched
/// out keeps its damage; the view animates its own copies toward them.
#[derive(Debug, Clone)]
pub struct BattleData<'t> {
    teams: [&'t Team; 2],
    pub trainer_label: String,
    pub background: String,
    active: [usize; 2],
    // Indexed by side, then by team slot.
    hp: [Vec<i32>; 2],
}

impl<'t> BattleData<'t> {
    pub fn new(atk_team: &'t Team, def_team: &'t Team, trainer_label: &str, background: &str) -> Self {
        let teams = [atk_team, def_team];
        let active = teams.map(|team| team.first_usable().unwrap_or(0));
        let hp = teams.map(|team| {
            team.units
                .iter()
                .map(|unit| i32::from(unit.hp.min(unit.max_hp)))
                .collect::<Vec<i32>>()
        });
        Self {
            teams,
            trainer_label: trainer_label.to_string(),
            background: background.to_string(),
            active,
            hp,
        }
    }

    pub fn team(&self, actor: Actor) -> &'t Team {
        self.teams[actor.index()]
    }

    pub fn active_index(&self, actor: Actor) -> usize {
        self.active[actor.index()]
    }

    pub fn active_unit(&self, actor: Actor) -> Option<&'t Unit> {
        self.team(actor).unit(self.active_index(actor))
    }

    /// Current HP of `actor`'s active unit, 0 when the active slot is empty.
    pub fn hp(&self, actor: Actor) -> i32 {
        self.unit_hp(actor, self.active_index(actor)).unwrap_or(0)
    }

    /// Current HP of the unit in `team_index`, benched or not.
    pub fn unit_hp(&self, actor: Actor, team_index: usize) -> Option<i32> {
        self.hp[actor.index()].get(team_index).copied()
    }

    pub fn max_hp(&self, actor: Actor) -> i32 {
        self.active_unit(actor)
            .map(|unit| i32::from(unit.max_hp))
            .unwrap_or(0)
    }

    /// Applies `delta` to the active unit's HP, clamped to `[0, max_hp]`. Returns the new value.
    pub fn apply_hp_delta(&mut self, actor: Actor, delta: i32) -> i32 {
        let max_hp = self.max_hp(actor);
        let slot = self.active_index(actor);
        match self.hp[actor.index()].get_mut(slot) {
            Some(hp) => {
                *hp = hp.saturating_add(delta).clamp(0, max_hp);
                *hp
            }
            None => 0,
        }
    }

    pub fn is_fainted(&self, actor: Actor) -> bool {
        self.hp(actor) == 0
    }

    /// Makes `team_index` the active unit of `actor`. Returns `false` if the slot is empty.
    pub fn switch_to(&mut self, actor: Actor, team_index: usize) -> bool {
        if self.team(actor).unit(team_index).is_none() {
            return false;
        }
        self.active[actor.index()] = team_index;
        true
    }
}
