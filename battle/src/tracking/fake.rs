//! Scripted in-memory simulator for engine tests

use std::cell::RefCell;
use std::collections::{BTreeMap, VecDeque};
use std::rc::Rc;

use splice_protocol::SideId;

use crate::simulator::{
    BattleSetup, PendingRequest, SimField, SimHandle, SimPokemon, SimSide, Simulator,
    SimulatorError, SimulatorFactory,
};

/// One scripted advance, applied once every pending side has chosen
#[derive(Debug, Clone, Default)]
pub(crate) struct Step {
    pub lines: Vec<String>,
    pub sides: Option<[SimSide; 2]>,
    pub field: Option<SimField>,
    pub winner: Option<String>,
    pub ended: bool,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct FakeSim {
    pub log: Vec<String>,
    pub start_lines: Vec<String>,
    pub sides: [SimSide; 2],
    pub field: SimField,
    pub turn: u32,
    pub ended: bool,
    pub winner: Option<String>,

    /// Commands answered with `false`
    pub reject: Vec<String>,
    /// Commands answered with an error
    pub fail: Vec<String>,
    pub start_error: Option<fn() -> SimulatorError>,
    pub script: VecDeque<Step>,

    /// Accepted choices, shared with the test after the engine takes ownership
    pub choices: Rc<RefCell<Vec<(SideId, String)>>>,
    pub chosen: usize,
}

impl FakeSim {
    fn needed(&self) -> usize {
        self.sides
            .iter()
            .filter(|s| {
                matches!(
                    s.pending,
                    PendingRequest::Move | PendingRequest::Switch | PendingRequest::TeamPreview
                )
            })
            .count()
    }

    fn advance(&mut self) {
        self.chosen = 0;
        let Some(step) = self.script.pop_front() else {
            return;
        };
        self.log.extend(step.lines);
        if let Some(sides) = step.sides {
            self.sides = sides;
        }
        if let Some(field) = step.field {
            self.field = field;
        }
        self.ended = step.ended;
        self.winner = step.winner;
        if !self.ended {
            self.turn += 1;
        }
    }
}

impl Simulator for FakeSim {
    fn start(&mut self) -> Result<(), SimulatorError> {
        if let Some(err) = self.start_error {
            return Err(err());
        }
        self.log.append(&mut self.start_lines);
        self.turn = 1;
        Ok(())
    }

    fn choose(&mut self, side: SideId, command: &str) -> Result<bool, SimulatorError> {
        if self.fail.iter().any(|c| c == command) {
            return Err(SimulatorError::Internal(format!("cannot process {command}")));
        }
        if self.reject.iter().any(|c| c == command) {
            return Ok(false);
        }

        self.choices.borrow_mut().push((side, command.to_string()));
        self.chosen += 1;
        if self.chosen >= self.needed() {
            self.advance();
        }
        Ok(true)
    }

    fn log(&self) -> &[String] {
        &self.log
    }

    fn side(&self, side: SideId) -> Option<SimSide> {
        self.sides.get(side.index()).cloned()
    }

    fn field(&self) -> SimField {
        self.field.clone()
    }

    fn turn(&self) -> u32 {
        self.turn
    }

    fn ended(&self) -> bool {
        self.ended
    }

    fn winner(&self) -> Option<String> {
        self.winner.clone()
    }
}

/// Hands out clones of a prepared session and remembers the setup it saw
#[derive(Debug, Default)]
pub(crate) struct FakeFactory {
    pub template: FakeSim,
    pub seen: RefCell<Option<(String, [u16; 4])>>,
    pub refuse: bool,
}

impl SimulatorFactory for FakeFactory {
    type Sim = FakeSim;

    fn create(&self, setup: &BattleSetup<'_>) -> Result<FakeSim, SimulatorError> {
        if self.refuse {
            return Err(SimulatorError::InvalidSetup("unknown format".to_string()));
        }
        *self.seen.borrow_mut() = Some((setup.format.to_string(), setup.seed));
        Ok(self.template.clone())
    }
}

pub(crate) fn sim_pokemon(
    handle: u64,
    position: Option<usize>,
    species: &str,
    hp: u32,
) -> SimPokemon {
    SimPokemon {
        handle: SimHandle(handle),
        position,
        species: species.to_string(),
        name: species.to_string(),
        hp,
        max_hp: 100,
        status: String::new(),
        fainted: false,
        boosts: BTreeMap::new(),
        volatiles: BTreeMap::new(),
    }
}

/// Side with `pokemon` in order, the first one active
pub(crate) fn sim_side(name: &str, pokemon: Vec<SimPokemon>, pending: PendingRequest) -> SimSide {
    SimSide {
        name: name.to_string(),
        active: vec![pokemon.first().cloned()],
        pokemon,
        pending,
    }
}

pub(crate) fn lines(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|l| l.to_string()).collect()
}
