//! Character creation wizard: race, then class, then confirmation.
//!
//! The flow owns no rendering. Hosts call the transition methods in response
//! to clicks and drain [`FlowEvent`]s once per frame. Rejected transitions
//! leave the state untouched and come back as a [`FlowError`].

use crate::catalog::{Catalog, ClassOption, RaceOption};
use crate::error::FlowError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stage {
    Race,
    Class,
    Confirm,
}

impl Stage {
    pub fn number(self) -> u8 {
        match self {
            Stage::Race => 1,
            Stage::Class => 2,
            Stage::Confirm => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Stage::Race => "Race",
            Stage::Class => "Class",
            Stage::Confirm => "Confirm",
        }
    }
}

/// `selected_class` is only ever set at [`Stage::Confirm`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardState {
    pub stage: Stage,
    pub selected_race: Option<RaceOption>,
    pub selected_class: Option<ClassOption>,
}

impl Default for WizardState {
    fn default() -> Self {
        Self {
            stage: Stage::Race,
            selected_race: None,
            selected_class: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterCreated {
    pub race: RaceOption,
    pub class: ClassOption,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowEvent {
    Created(CharacterCreated),
    /// Dismissed without completing.
    Closed,
}

pub struct CharacterCreationFlow {
    races: Catalog<RaceOption>,
    classes: Catalog<ClassOption>,
    state: WizardState,
    visible: bool,
    events: Vec<FlowEvent>,
}

impl CharacterCreationFlow {
    pub fn new(races: Catalog<RaceOption>, classes: Catalog<ClassOption>) -> Self {
        Self {
            races,
            classes,
            state: WizardState::default(),
            visible: false,
            events: Vec::new(),
        }
    }

    pub fn races(&self) -> &Catalog<RaceOption> {
        &self.races
    }

    pub fn classes(&self) -> &Catalog<ClassOption> {
        &self.classes
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn stage(&self) -> Stage {
        self.state.stage
    }

    pub fn is_open(&self) -> bool {
        self.visible
    }

    pub fn open(&mut self) {
        self.state = WizardState::default();
        self.visible = true;
        tracing::debug!("character creation opened");
    }

    pub fn select_race(&mut self, id: &str) -> Result<Stage, FlowError> {
        self.expect_stage(Stage::Race)?;
        let race = self
            .races
            .get(id)
            .cloned()
            .ok_or_else(|| FlowError::UnknownRace(id.to_string()))?;
        tracing::debug!(race = %race.id, "race selected");
        self.state.selected_race = Some(race);
        self.state.stage = Stage::Class;
        Ok(self.state.stage)
    }

    pub fn select_class(&mut self, id: &str) -> Result<Stage, FlowError> {
        self.expect_stage(Stage::Class)?;
        let class = self
            .classes
            .get(id)
            .cloned()
            .ok_or_else(|| FlowError::UnknownClass(id.to_string()))?;
        tracing::debug!(class = %class.id, "class selected");
        self.state.selected_class = Some(class);
        self.state.stage = Stage::Confirm;
        Ok(self.state.stage)
    }

    /// Class -> Race keeps the chosen race as the previous choice.
    /// Confirm -> Class drops the class. At Race this does nothing.
    pub fn go_back(&mut self) -> Result<Stage, FlowError> {
        if !self.visible {
            return Err(FlowError::NotOpen);
        }
        match self.state.stage {
            Stage::Race => {}
            Stage::Class => {
                self.state.selected_class = None;
                self.state.stage = Stage::Race;
            }
            Stage::Confirm => {
                self.state.selected_class = None;
                self.state.stage = Stage::Class;
            }
        }
        tracing::debug!(stage = ?self.state.stage, "went back");
        Ok(self.state.stage)
    }

    pub fn confirm(&mut self) -> Result<CharacterCreated, FlowError> {
        self.expect_stage(Stage::Confirm)?;
        let (Some(race), Some(class)) = (&self.state.selected_race, &self.state.selected_class) else {
            return Err(FlowError::IncompleteSelection);
        };
        let created = CharacterCreated {
            race: race.clone(),
            class: class.clone(),
        };
        tracing::info!(race = %created.race.id, class = %created.class.id, "character created");
        self.events.push(FlowEvent::Created(created.clone()));
        self.reset();
        Ok(created)
    }

    /// Returns whether the wizard was open.
    pub fn close(&mut self) -> bool {
        let was_open = self.visible;
        self.reset();
        if was_open {
            tracing::debug!("character creation dismissed");
            self.events.push(FlowEvent::Closed);
        }
        was_open
    }

    pub fn drain_events(&mut self) -> Vec<FlowEvent> {
        std::mem::take(&mut self.events)
    }

    fn reset(&mut self) {
        self.state = WizardState::default();
        self.visible = false;
    }

    fn expect_stage(&self, expected: Stage) -> Result<(), FlowError> {
        if !self.visible {
            return Err(FlowError::NotOpen);
        }
        if self.state.stage != expected {
            return Err(FlowError::WrongStage {
                expected,
                actual: self.state.stage,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{default_classes, default_races};
    use proptest::prelude::*;

    fn flow() -> CharacterCreationFlow {
        CharacterCreationFlow::new(default_races(), default_classes())
    }

    fn assert_invariants(state: &WizardState) {
        if state.stage != Stage::Confirm {
            assert!(state.selected_class.is_none(), "class set at {:?}", state.stage);
        }
        if state.stage == Stage::Confirm {
            assert!(state.selected_race.is_some());
            assert!(state.selected_class.is_some());
        }
        if state.stage == Stage::Class {
            assert!(state.selected_race.is_some());
        }
    }

    #[test]
    fn open_starts_at_race() {
        let mut flow = flow();
        assert!(!flow.is_open());
        flow.open();
        assert!(flow.is_open());
        assert_eq!(flow.state(), &WizardState::default());
    }

    #[test]
    fn elf_mage_scenario() {
        let mut flow = flow();
        flow.open();
        assert_eq!(flow.select_race("elf"), Ok(Stage::Class));
        assert_eq!(flow.state().selected_race.as_ref().map(|r| r.id.as_str()), Some("elf"));
        assert_eq!(flow.select_class("mage"), Ok(Stage::Confirm));

        let created = flow.confirm().expect("confirm");
        assert_eq!(created.race.id, "elf");
        assert_eq!(created.class.id, "mage");
        assert!(!flow.is_open());
        assert_eq!(flow.state(), &WizardState::default());
        assert_eq!(flow.drain_events(), vec![FlowEvent::Created(created)]);
        assert!(flow.drain_events().is_empty());
    }

    #[test]
    fn going_back_from_class_keeps_race() {
        let mut flow = flow();
        flow.open();
        flow.select_race("human").expect("race");
        assert_eq!(flow.go_back(), Ok(Stage::Race));
        assert_eq!(flow.state().selected_race.as_ref().map(|r| r.id.as_str()), Some("human"));
        assert!(flow.state().selected_class.is_none());

        flow.select_race("elf").expect("race again");
        assert_eq!(flow.state().selected_race.as_ref().map(|r| r.id.as_str()), Some("elf"));
    }

    #[test]
    fn going_back_from_confirm_clears_class() {
        let mut flow = flow();
        flow.open();
        flow.select_race("dwarf").expect("race");
        flow.select_class("warrior").expect("class");
        assert_eq!(flow.go_back(), Ok(Stage::Class));
        assert!(flow.state().selected_class.is_none());
        assert!(flow.state().selected_race.is_some());
    }

    #[test]
    fn go_back_at_race_is_harmless() {
        let mut flow = flow();
        flow.open();
        assert_eq!(flow.go_back(), Ok(Stage::Race));
        assert_eq!(flow.state(), &WizardState::default());
    }

    #[test]
    fn class_before_race_is_rejected() {
        let mut flow = flow();
        flow.open();
        let before = flow.state().clone();
        assert_eq!(
            flow.select_class("warrior"),
            Err(FlowError::WrongStage {
                expected: Stage::Class,
                actual: Stage::Race
            })
        );
        assert_eq!(flow.state(), &before);
    }

    #[test]
    fn unknown_ids_are_rejected() {
        let mut flow = flow();
        flow.open();
        assert_eq!(flow.select_race("gnome"), Err(FlowError::UnknownRace("gnome".into())));
        assert_eq!(flow.stage(), Stage::Race);
        flow.select_race("orc").expect("race");
        assert_eq!(flow.select_class("bard"), Err(FlowError::UnknownClass("bard".into())));
        assert_eq!(flow.stage(), Stage::Class);
    }

    #[test]
    fn confirm_requires_confirm_stage() {
        let mut flow = flow();
        flow.open();
        flow.select_race("elf").expect("race");
        assert!(flow.confirm().is_err());
        assert!(flow.is_open());
        assert!(flow.drain_events().is_empty());
    }

    #[test]
    fn closed_wizard_rejects_everything() {
        let mut flow = flow();
        assert_eq!(flow.select_race("elf"), Err(FlowError::NotOpen));
        assert_eq!(flow.go_back(), Err(FlowError::NotOpen));
        assert_eq!(flow.confirm(), Err(FlowError::NotOpen));
        assert!(!flow.close());
        assert!(flow.drain_events().is_empty());
    }

    #[test]
    fn close_discards_selection_and_reports() {
        let mut flow = flow();
        flow.open();
        flow.select_race("elf").expect("race");
        flow.select_class("rogue").expect("class");
        assert!(flow.close());
        assert_eq!(flow.drain_events(), vec![FlowEvent::Closed]);

        flow.open();
        assert_eq!(flow.state(), &WizardState::default());
    }

    #[derive(Debug, Clone)]
    enum Op {
        Open,
        SelectRace(&'static str),
        SelectClass(&'static str),
        GoBack,
        Confirm,
        Close,
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            Just(Op::Open),
            prop::sample::select(vec!["human", "elf", "gnome"]).prop_map(Op::SelectRace),
            prop::sample::select(vec!["warrior", "mage", "bard"]).prop_map(Op::SelectClass),
            Just(Op::GoBack),
            Just(Op::Confirm),
            Just(Op::Close),
        ]
    }

    proptest! {
        #[test]
        fn stage_moves_only_through_the_right_calls(ops in prop::collection::vec(op(), 0..40)) {
            let mut flow = flow();
            for op in ops {
                let before = flow.state().clone();
                let was_open = flow.is_open();
                let accepted = match &op {
                    Op::Open => { flow.open(); true }
                    Op::SelectRace(id) => flow.select_race(id).is_ok(),
                    Op::SelectClass(id) => flow.select_class(id).is_ok(),
                    Op::GoBack => flow.go_back().is_ok(),
                    Op::Confirm => {
                        let ok = flow.confirm().is_ok();
                        if ok {
                            prop_assert!(before.selected_race.is_some() && before.selected_class.is_some());
                        }
                        ok
                    }
                    Op::Close => { flow.close(); true }
                };
                let after = flow.state();
                assert_invariants(after);

                if !accepted {
                    prop_assert_eq!(after, &before);
                    prop_assert_eq!(flow.is_open(), was_open);
                }
                if after.stage > before.stage {
                    prop_assert!(matches!(op, Op::SelectRace(_) | Op::SelectClass(_)));
                }
                if after.stage < before.stage {
                    prop_assert!(matches!(op, Op::GoBack | Op::Open | Op::Close | Op::Confirm));
                }
            }
        }

        #[test]
        fn close_then_open_is_a_full_reset(ops in prop::collection::vec(op(), 0..20)) {
            let mut flow = flow();
            for op in ops {
                let _ = match op {
                    Op::Open => { flow.open(); Ok(Stage::Race) }
                    Op::SelectRace(id) => flow.select_race(id),
                    Op::SelectClass(id) => flow.select_class(id),
                    Op::GoBack => flow.go_back(),
                    Op::Confirm => flow.confirm().map(|_| Stage::Race),
                    Op::Close => { flow.close(); Ok(Stage::Race) }
                };
            }
            flow.close();
            flow.open();
            prop_assert_eq!(flow.state(), &WizardState::default());
            prop_assert!(flow.is_open());
        }
    }
}
