//! Synchronous wrapper around one simulator session
//!
//! The engine owns the session and the local mirror of it. Every call that
//! advances the simulator re-derives the mirror before returning, so the
//! records it hands out are always the latest best-effort copy.

use splice_protocol::{Choice, SideId};
use thiserror::Error;
use tracing::{debug, info, warn};

use super::animation::{AnimationEvent, AnimationMapper};
use super::mirror::{mirror_field, mirror_side};
use super::preamble::PreambleFilter;
use crate::simulator::{
    BattleSetup, PendingRequest, SimHandle, Simulator, SimulatorError, SimulatorFactory,
};
use crate::types::{FieldState, PlayerRecord};

#[derive(Error, Debug)]
pub enum EngineError {
    #[error(transparent)]
    Simulator(#[from] SimulatorError),

    #[error("{side} choice {choice:?} rejected, and so was the default")]
    ChoiceRejected { side: SideId, choice: String },

    #[error("{0} has no forced switch pending")]
    NoPendingSwitch(SideId),

    #[error("{0} has no pokemon able to switch in")]
    NoSwitchTarget(SideId),

    #[error("simulator has no {0} side")]
    MissingSide(SideId),
}

/// How a session is created
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineOptions {
    /// Simulator format id
    pub format: String,
    /// PRNG seed, random when unset
    pub seed: Option<[u16; 4]>,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            format: "gen9customgame".to_string(),
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceOutcome {
    Accepted,
    /// The original choice was rejected and `default` went through instead
    FellBackToDefault,
}

/// Result of one simulator-advancing call
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TurnReport {
    pub outcomes: Vec<ChoiceOutcome>,
    /// New log lines, preamble duplicates removed
    pub lines: Vec<String>,
    pub events: Vec<AnimationEvent>,
}

pub struct Engine<S: Simulator> {
    sim: S,
    players: [PlayerRecord; 2],
    handles: [Vec<Option<SimHandle>>; 2],
    field: FieldState,
    turn: u32,
    log_cursor: usize,
    preamble: PreambleFilter,
    animations: AnimationMapper,
    seed: [u16; 4],
}

impl<S: Simulator> Engine<S> {
    /// Create and start a session, returning the engine with the opening events
    pub fn start<F>(
        factory: &F,
        p1: PlayerRecord,
        p2: PlayerRecord,
        options: &EngineOptions,
    ) -> Result<(Self, Vec<AnimationEvent>), EngineError>
    where
        F: SimulatorFactory<Sim = S>,
    {
        let seed = options.seed.unwrap_or_else(rand::random);
        let setup = BattleSetup {
            format: &options.format,
            seed,
            p1: &p1,
            p2: &p2,
        };
        let mut sim = factory.create(&setup)?;

        match sim.start() {
            Ok(()) => {}
            Err(SimulatorError::AlreadyStarted) => {
                debug!("simulator reports battle already started, continuing");
            }
            Err(e) => return Err(e.into()),
        }

        info!(
            format = %options.format,
            ?seed,
            p1 = p1.id(),
            p2 = p2.id(),
            "battle started"
        );

        let animations = AnimationMapper::new(p1.id(), p2.id());
        let mut engine = Self {
            sim,
            players: [p1, p2],
            handles: Default::default(),
            field: FieldState::new(),
            turn: 0,
            log_cursor: 0,
            preamble: PreambleFilter::new(),
            animations,
            seed,
        };
        // No handles are known yet, so this first sync links every team
        // member to its simulator object by position or name
        engine.sync()?;
        let (_, events) = engine.drain_log();
        Ok((engine, events))
    }

    /// Submit one side's choice and re-sync
    pub fn submit(&mut self, side: SideId, choice: &Choice) -> Result<ChoiceOutcome, EngineError> {
        let outcome = self.choose(side, choice)?;
        self.sync()?;
        Ok(outcome)
    }

    /// Submit both sides' choices, re-sync and collect what happened
    pub fn submit_turn(&mut self, p1: &Choice, p2: &Choice) -> Result<TurnReport, EngineError> {
        let outcomes = vec![self.choose(SideId::P1, p1)?, self.choose(SideId::P2, p2)?];
        self.sync()?;
        let (lines, events) = self.drain_log();
        Ok(TurnReport {
            outcomes,
            lines,
            events,
        })
    }

    /// Whether the simulator waits on a forced replacement from `side`
    pub fn pending_switch(&self, side: SideId) -> bool {
        self.sim
            .side(side)
            .is_some_and(|s| s.pending == PendingRequest::Switch)
    }

    /// Answer a forced replacement with team member `slot`, or the first
    /// healthy bench member
    pub fn force_switch(
        &mut self,
        side: SideId,
        slot: Option<usize>,
    ) -> Result<TurnReport, EngineError> {
        if !self.pending_switch(side) {
            return Err(EngineError::NoPendingSwitch(side));
        }

        let player = self.player(side).ok_or(EngineError::MissingSide(side))?;
        let team_index = match slot {
            Some(idx) => idx,
            None => player
                .bench()
                .map(|(idx, _)| idx)
                .next()
                .ok_or(EngineError::NoSwitchTarget(side))?,
        };
        let sim_slot = self
            .sim_slot(side, team_index)
            .ok_or(EngineError::NoSwitchTarget(side))?;

        let outcome = self.choose(side, &Choice::Switch(sim_slot))?;
        self.sync()?;
        let (lines, events) = self.drain_log();
        Ok(TurnReport {
            outcomes: vec![outcome],
            lines,
            events,
        })
    }

    /// Re-derive the mirror from the simulator
    pub fn sync(&mut self) -> Result<(), EngineError> {
        for side in [SideId::P1, SideId::P2] {
            let snapshot = self.sim.side(side).ok_or(EngineError::MissingSide(side))?;
            let idx = side.index();
            mirror_side(&mut self.players[idx], &mut self.handles[idx], &snapshot);
        }
        mirror_field(&mut self.field, &self.sim.field());
        self.turn = self.sim.turn();
        Ok(())
    }

    /// Log lines appended since the last read, with their animation events
    pub fn drain_log(&mut self) -> (Vec<String>, Vec<AnimationEvent>) {
        let fresh = self.sim.log().get(self.log_cursor..).unwrap_or_default();
        self.log_cursor += fresh.len();

        let lines = self.preamble.filter(fresh);
        let events = self.animations.map_lines(&lines);
        (lines, events)
    }

    pub fn player(&self, side: SideId) -> Option<&PlayerRecord> {
        self.players.get(side.index())
    }

    pub fn field(&self) -> &FieldState {
        &self.field
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn ended(&self) -> bool {
        self.sim.ended()
    }

    pub fn winner(&self) -> Option<String> {
        self.sim.winner()
    }

    pub fn seed(&self) -> [u16; 4] {
        self.seed
    }

    fn choose(&mut self, side: SideId, choice: &Choice) -> Result<ChoiceOutcome, EngineError> {
        if side.index() >= self.players.len() {
            return Err(EngineError::MissingSide(side));
        }

        let command = choice.to_command();
        if self.sim.choose(side, &command)? {
            return Ok(ChoiceOutcome::Accepted);
        }

        warn!(side = %side, command = %command, "choice rejected, retrying with default");
        if self.sim.choose(side, &Choice::Default.to_command())? {
            return Ok(ChoiceOutcome::FellBackToDefault);
        }

        Err(EngineError::ChoiceRejected {
            side,
            choice: command,
        })
    }

    /// 1-based slot of team member `team_index` in the simulator's current order
    fn sim_slot(&self, side: SideId, team_index: usize) -> Option<u8> {
        let snapshot = self.sim.side(side)?;
        let handle = self.handles.get(side.index())?.get(team_index).copied().flatten();
        let poke = self.player(side)?.team().get(team_index)?;

        let position = snapshot
            .pokemon
            .iter()
            .position(|p| Some(p.handle) == handle)
            .or_else(|| {
                snapshot
                    .pokemon
                    .iter()
                    .position(|p| poke.answers_to(&p.species) || poke.answers_to(&p.name))
            })?;
        u8::try_from(position + 1).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulator::{SimCondition, SimField, SimSide};
    use crate::tracking::fake::{FakeFactory, FakeSim, Step, lines, sim_pokemon, sim_side};
    use crate::types::PokemonRecord;

    fn alice() -> PlayerRecord {
        PlayerRecord::new(
            "alice",
            "Alice",
            vec![
                PokemonRecord::new("a1", "Pikachu", "Pikachu", 50).with_max_hp(100),
                PokemonRecord::new("a2", "Onix", "Onix", 50).with_max_hp(100),
            ],
        )
    }

    fn bob() -> PlayerRecord {
        PlayerRecord::new(
            "bob",
            "Bob",
            vec![PokemonRecord::new("b1", "Bulbasaur", "Bulbasaur", 50).with_max_hp(100)],
        )
    }

    fn opening_sides() -> [SimSide; 2] {
        [
            sim_side(
                "Alice",
                vec![
                    sim_pokemon(1, Some(0), "Pikachu", 100),
                    sim_pokemon(2, Some(1), "Onix", 100),
                ],
                PendingRequest::Move,
            ),
            sim_side(
                "Bob",
                vec![sim_pokemon(10, Some(0), "Bulbasaur", 100)],
                PendingRequest::Move,
            ),
        ]
    }

    fn fake() -> FakeSim {
        FakeSim {
            start_lines: lines(&[
                "|player|p1|Alice|",
                "|player|p2|Bob|",
                "|start",
                "|switch|p1a: Pikachu|Pikachu, L50|100/100",
                "|switch|p2a: Bulbasaur|Bulbasaur, L50|100/100",
                "|turn|1",
                // re-emitted preamble
                "|start",
                "|switch|p1a: Pikachu|Pikachu, L50|100/100",
                "|switch|p2a: Bulbasaur|Bulbasaur, L50|100/100",
                "|turn|1",
            ]),
            sides: opening_sides(),
            ..FakeSim::default()
        }
    }

    fn options() -> EngineOptions {
        EngineOptions {
            seed: Some([1, 2, 3, 4]),
            ..EngineOptions::default()
        }
    }

    fn start(template: FakeSim) -> (Engine<FakeSim>, Vec<AnimationEvent>) {
        let factory = FakeFactory {
            template,
            ..FakeFactory::default()
        };
        Engine::start(&factory, alice(), bob(), &options()).unwrap()
    }

    #[test]
    fn test_start_drops_duplicated_preamble() {
        let (engine, events) = start(fake());

        let switches: Vec<_> = events
            .iter()
            .filter(|e| matches!(e, AnimationEvent::Switch { .. }))
            .collect();
        assert_eq!(switches.len(), 2);
        assert_eq!(
            switches[0],
            &AnimationEvent::Switch {
                player_id: "alice".to_string(),
                pokemon: "Pikachu".to_string(),
                species: "Pikachu".to_string(),
                hp_percent: Some(100),
                dragged: false,
            }
        );
        assert_eq!(engine.turn(), 1);
        assert_eq!(engine.seed(), [1, 2, 3, 4]);
    }

    #[test]
    fn test_start_passes_setup_to_factory() {
        let factory = FakeFactory {
            template: fake(),
            ..FakeFactory::default()
        };
        Engine::start(&factory, alice(), bob(), &options()).unwrap();

        let seen = factory.seen.borrow().clone().unwrap();
        assert_eq!(seen, ("gen9customgame".to_string(), [1, 2, 3, 4]));
    }

    #[test]
    fn test_already_started_is_swallowed() {
        let template = FakeSim {
            start_error: Some(|| SimulatorError::AlreadyStarted),
            ..fake()
        };
        let (engine, _) = start(template);
        assert_eq!(engine.player(SideId::P1).unwrap().active_index(), 0);
    }

    #[test]
    fn test_start_errors_propagate() {
        let factory = FakeFactory {
            template: FakeSim {
                start_error: Some(|| SimulatorError::Internal("boom".to_string())),
                ..fake()
            },
            ..FakeFactory::default()
        };
        let err = Engine::start(&factory, alice(), bob(), &options()).err().unwrap();
        assert!(matches!(err, EngineError::Simulator(SimulatorError::Internal(_))));

        let factory = FakeFactory {
            refuse: true,
            ..FakeFactory::default()
        };
        let err = Engine::start(&factory, alice(), bob(), &options()).err().unwrap();
        assert!(matches!(err, EngineError::Simulator(SimulatorError::InvalidSetup(_))));
    }

    #[test]
    fn test_rejected_choice_falls_back_to_default() {
        let template = FakeSim {
            reject: vec!["move 4".to_string()],
            ..fake()
        };
        let choices = template.choices.clone();
        let (mut engine, _) = start(template);

        let outcome = engine.submit(SideId::P1, &Choice::Move {
            slot: 4,
            target: None,
            modifier: None,
        });
        assert_eq!(outcome.unwrap(), ChoiceOutcome::FellBackToDefault);
        assert_eq!(choices.borrow().as_slice(), &[(SideId::P1, "default".to_string())]);
    }

    #[test]
    fn test_rejected_default_is_an_error() {
        let template = FakeSim {
            reject: vec!["switch 2".to_string(), "default".to_string()],
            ..fake()
        };
        let (mut engine, _) = start(template);

        let err = engine.submit(SideId::P1, &Choice::Switch(2)).unwrap_err();
        match err {
            EngineError::ChoiceRejected { side, choice } => {
                assert_eq!(side, SideId::P1);
                assert_eq!(choice, "switch 2");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_simulator_choice_errors_propagate() {
        let template = FakeSim {
            fail: vec!["move 1".to_string()],
            ..fake()
        };
        let (mut engine, _) = start(template);

        let err = engine
            .submit(SideId::P1, &Choice::Move {
                slot: 1,
                target: None,
                modifier: None,
            })
            .unwrap_err();
        assert!(matches!(err, EngineError::Simulator(_)));
    }

    #[test]
    fn test_turn_mirrors_state_and_field() {
        let mut sides = opening_sides();
        sides[1].pokemon[0].hp = 40;
        sides[1].pokemon[0].status = "par".to_string();
        sides[1].active = vec![Some(sides[1].pokemon[0].clone())];

        let template = FakeSim {
            script: [Step {
                lines: lines(&[
                    "|move|p1a: Pikachu|Thunderbolt|p2a: Bulbasaur",
                    "|-damage|p2a: Bulbasaur|40/100 par",
                    "|-status|p2a: Bulbasaur|par",
                    "|-weather|RainDance",
                    "|turn|2",
                ]),
                sides: Some(sides),
                field: Some(SimField {
                    weather: Some(SimCondition::new("raindance", Some(5))),
                    terrain: None,
                    pseudo_weather: vec![SimCondition::new("trickroom", Some(5))],
                }),
                ..Step::default()
            }]
            .into(),
            ..fake()
        };
        let (mut engine, _) = start(template);

        let thunderbolt = Choice::Move {
            slot: 1,
            target: None,
            modifier: None,
        };
        let report = engine.submit_turn(&thunderbolt, &thunderbolt).unwrap();

        assert_eq!(report.outcomes, vec![ChoiceOutcome::Accepted; 2]);
        assert_eq!(report.lines.len(), 5);
        assert!(report.events.contains(&AnimationEvent::Damage {
            player_id: "bob".to_string(),
            target: "Bulbasaur".to_string(),
            hp_percent: Some(40),
            source: None,
        }));

        let bulbasaur = &engine.player(SideId::P2).unwrap().team()[0];
        assert_eq!(bulbasaur.hp(), 40);
        assert_eq!(bulbasaur.status(), Some(crate::types::Status::Paralysis));

        assert_eq!(engine.turn(), 2);
        assert_eq!(engine.field().weather_kind(), Some(crate::types::Weather::Rain));
        assert!(engine.field().has_room(crate::types::Room::TrickRoom));
    }

    #[test]
    fn test_active_recomputed_after_handle_change() {
        // Onix comes in with fresh handles and no position field
        let mut sides = opening_sides();
        let onix = sim_pokemon(99, None, "Onix", 100);
        let pikachu = sim_pokemon(98, None, "Pikachu", 100);
        sides[0].pokemon = vec![onix.clone(), pikachu];
        sides[0].active = vec![Some(onix)];

        let template = FakeSim {
            script: [Step {
                lines: lines(&["|switch|p1a: Onix|Onix, L50|100/100", "|turn|2"]),
                sides: Some(sides),
                ..Step::default()
            }]
            .into(),
            ..fake()
        };
        let (mut engine, _) = start(template);

        engine
            .submit_turn(&Choice::Switch(2), &Choice::Default)
            .unwrap();

        let alice = engine.player(SideId::P1).unwrap();
        assert_eq!(alice.active_index(), 1);
        assert_eq!(alice.active_pokemon().unwrap().name(), "Onix");
    }

    #[test]
    fn test_force_switch_picks_first_healthy_bench_member() {
        let mut fainted = opening_sides();
        fainted[0].pokemon[0].hp = 0;
        fainted[0].pokemon[0].status = "fnt".to_string();
        fainted[0].pokemon[0].fainted = true;
        fainted[0].active = vec![Some(fainted[0].pokemon[0].clone())];
        fainted[0].pending = PendingRequest::Switch;
        fainted[1].pending = PendingRequest::Wait;

        let template = FakeSim {
            script: [
                Step {
                    lines: lines(&["|faint|p1a: Pikachu"]),
                    sides: Some(fainted),
                    ..Step::default()
                },
                Step {
                    lines: lines(&["|switch|p1a: Onix|Onix, L50|100/100", "|turn|2"]),
                    ..Step::default()
                },
            ]
            .into(),
            ..fake()
        };
        let choices = template.choices.clone();
        let (mut engine, _) = start(template);

        assert!(!engine.pending_switch(SideId::P1));
        let err = engine.force_switch(SideId::P1, None).unwrap_err();
        assert!(matches!(err, EngineError::NoPendingSwitch(SideId::P1)));

        let report = engine
            .submit_turn(&Choice::Default, &Choice::Default)
            .unwrap();
        assert_eq!(report.events, vec![AnimationEvent::Faint {
            player_id: "alice".to_string(),
            pokemon: "Pikachu".to_string(),
        }]);
        assert!(engine.pending_switch(SideId::P1));

        let report = engine.force_switch(SideId::P1, None).unwrap();
        assert_eq!(report.outcomes, vec![ChoiceOutcome::Accepted]);
        assert_eq!(
            choices.borrow().last(),
            Some(&(SideId::P1, "switch 2".to_string()))
        );
    }

    #[test]
    fn test_force_switch_translates_team_index() {
        // Onix is out and listed first in the simulator's order
        let mut sides = opening_sides();
        sides[0].pokemon.reverse();
        sides[0].active = vec![Some(sides[0].pokemon[0].clone())];
        sides[0].pending = PendingRequest::Switch;
        sides[1].pending = PendingRequest::Wait;

        let template = FakeSim {
            sides,
            ..fake()
        };
        let choices = template.choices.clone();
        let (mut engine, _) = start(template);

        engine.force_switch(SideId::P1, Some(0)).unwrap();
        assert_eq!(
            choices.borrow().last(),
            Some(&(SideId::P1, "switch 2".to_string()))
        );
    }

    #[test]
    fn test_winner_is_mirrored() {
        let template = FakeSim {
            script: [Step {
                lines: lines(&["|win|Alice"]),
                winner: Some("Alice".to_string()),
                ended: true,
                ..Step::default()
            }]
            .into(),
            ..fake()
        };
        let (mut engine, _) = start(template);
        assert!(!engine.ended());

        engine
            .submit_turn(&Choice::Default, &Choice::Default)
            .unwrap();
        assert!(engine.ended());
        assert_eq!(engine.winner().as_deref(), Some("Alice"));
    }
}
