//! Gadgetry - the technical hero's kit and action surface
//!
//! Gadgets draw on suit power rather than energy. Hacking draws on both:
//! tools are switched on with the scanner (suit power), the hack itself is a
//! power (energy), and success is gated on intelligence.

use crate::error::{ActionError, DomainError};
use crate::events::{
    FightOutcome, GadgetUsed, GaugeChange, IntelligenceUpgrade, Rested, SystemHacked, TagAdded,
    Tactic,
};
use crate::value_objects::{
    Gauge, TagSet, COMMUNICATION_DEVICE, EMERGENCY_BEACON, HACKING, HACKING_DEVICE, SCANNER,
    STARTER_GADGETS, TECHNOLOGY,
};

use super::actor::Actor;

pub const DEFAULT_INTELLIGENCE: u8 = 85;
pub const DEFAULT_GADGET_COST: u32 = 5;
pub const HACKING_TOOLS_COST: u32 = 10;
pub const HACK_ENERGY_COST: u32 = 15;
/// Minimum skill (intelligence plus gadget bonus) for a hack to succeed.
pub const HACK_DIFFICULTY: u32 = 20;
pub const HACKING_DEVICE_BONUS: u32 = 10;
pub const SCAN_COST: u32 = 8;
pub const COLLAPSE_SCAN_COST: u32 = 15;
pub const COLLAPSE_TECHNOLOGY_COST: u32 = 20;
pub const BEACON_COST: u32 = 10;
pub const DEFAULT_RECHARGE: u32 = 30;
/// Suit power restored as part of a rest.
pub const REST_RECHARGE: u32 = 25;
pub const DEFAULT_INTELLIGENCE_UPGRADE: u32 = 5;

/// What a scan turns up.
pub const SCAN_FINDINGS: [&str; 3] = ["Security Camera", "Motion Sensor", "Hidden Door"];

/// Markers in an opponent's name that call for cyber warfare.
const TECH_OPPONENT_MARKERS: [&str; 2] = ["Cyber", "Tech"];

/// Kind of technology-assisted rescue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RescueKind {
    BuildingCollapse,
    CyberAttack,
    Standard,
}

impl RescueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BuildingCollapse => "building_collapse",
            Self::CyberAttack => "cyber_attack",
            Self::Standard => "standard",
        }
    }
}

/// Unrecognized kinds fall back to a standard rescue.
impl From<&str> for RescueKind {
    fn from(kind: &str) -> Self {
        match kind {
            "building_collapse" => Self::BuildingCollapse,
            "cyber_attack" => Self::CyberAttack,
            _ => Self::Standard,
        }
    }
}

/// Intelligence, gadgets, suit power, and hacking-tool status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TechKit {
    intelligence: Gauge,
    gadgets: TagSet,
    suit_power: Gauge,
    tools_active: bool,
}

impl TechKit {
    /// A fully charged kit with the starter gadgets.
    pub fn new(intelligence: u8) -> Result<Self, DomainError> {
        let intelligence = Gauge::new(i64::from(intelligence))
            .map_err(|_| DomainError::validation("Intelligence must be between 0 and 100"))?;
        Ok(Self {
            intelligence,
            gadgets: TagSet::from_tags(STARTER_GADGETS),
            suit_power: Gauge::FULL,
            tools_active: false,
        })
    }

    /// Rebuild a stored kit. Stored gadgets replace the starter set.
    pub fn restore(
        intelligence: Gauge,
        gadgets: TagSet,
        suit_power: Gauge,
        tools_active: bool,
    ) -> Self {
        Self {
            intelligence,
            gadgets,
            suit_power,
            tools_active,
        }
    }

    #[inline]
    pub fn intelligence(&self) -> Gauge {
        self.intelligence
    }

    #[inline]
    pub fn gadgets(&self) -> &TagSet {
        &self.gadgets
    }

    #[inline]
    pub fn suit_power(&self) -> Gauge {
        self.suit_power
    }

    #[inline]
    pub fn tools_active(&self) -> bool {
        self.tools_active
    }

    /// Intelligence plus the hacking device bonus, if owned.
    pub fn hacking_skill(&self) -> u32 {
        let bonus = if self.gadgets.contains(HACKING_DEVICE) {
            HACKING_DEVICE_BONUS
        } else {
            0
        };
        u32::from(self.intelligence.value()) + bonus
    }
}

/// Mutable view of a technical hero: the shared actor plus its kit.
///
/// Obtained from [`super::Hero::technical_mut`].
#[derive(Debug)]
pub struct TechHero<'a> {
    actor: &'a mut Actor,
    kit: &'a mut TechKit,
}

impl<'a> TechHero<'a> {
    pub(crate) fn new(actor: &'a mut Actor, kit: &'a mut TechKit) -> Self {
        Self { actor, kit }
    }

    pub fn actor(&mut self) -> &mut Actor {
        &mut *self.actor
    }

    pub fn kit(&self) -> &TechKit {
        &*self.kit
    }

    pub fn add_gadget(&mut self, gadget: impl Into<String>) -> TagAdded {
        let gadget = gadget.into();
        if self.kit.gadgets.insert(gadget.clone()) {
            tracing::info!(hero = %self.actor.alias(), gadget = %gadget, "acquired gadget");
            TagAdded::Added(gadget)
        } else {
            TagAdded::AlreadyPresent(gadget)
        }
    }

    /// Use a gadget, paying `cost` suit power.
    ///
    /// Fails without touching suit power if the gadget is not owned or the
    /// suit cannot cover the cost.
    pub fn use_gadget(&mut self, gadget: &str, cost: u32) -> Result<GadgetUsed, ActionError> {
        if !self.kit.gadgets.contains(gadget) {
            tracing::debug!(hero = %self.actor.alias(), gadget, "does not have gadget");
            return Err(ActionError::MissingGadget {
                gadget: gadget.to_string(),
            });
        }
        let Some(remaining) = self.kit.suit_power.checked_sub(cost) else {
            return Err(ActionError::InsufficientSuitPower {
                gadget: gadget.to_string(),
                required: cost,
                available: self.kit.suit_power.value(),
            });
        };
        self.kit.suit_power = remaining;
        tracing::debug!(
            hero = %self.actor.alias(),
            gadget,
            suit_power = remaining.value(),
            "used gadget"
        );
        Ok(GadgetUsed {
            gadget: gadget.to_string(),
            cost,
            suit_power_remaining: remaining.value(),
        })
    }

    pub fn activate_hacking_tools(&mut self) -> Result<GadgetUsed, ActionError> {
        let used = self.use_gadget(SCANNER, HACKING_TOOLS_COST)?;
        self.kit.tools_active = true;
        tracing::info!(hero = %self.actor.alias(), "activated hacking tools");
        Ok(used)
    }

    /// Hack into `target`.
    ///
    /// Tries to switch the tools on first, but proceeds even if that fails.
    /// The hacking power's energy is paid before the skill check, so a hero
    /// whose skill falls short of the difficulty loses the energy anyway.
    pub fn hack_system(&mut self, target: &str) -> Result<SystemHacked, ActionError> {
        if !self.kit.tools_active {
            if let Err(err) = self.activate_hacking_tools() {
                tracing::debug!(hero = %self.actor.alias(), error = %err, "hacking tools unavailable");
            }
        }

        let skill = self.kit.hacking_skill();
        self.actor.use_power(HACKING, HACK_ENERGY_COST)?;

        if skill < HACK_DIFFICULTY {
            tracing::info!(hero = %self.actor.alias(), target, skill, "hack failed");
            return Err(ActionError::HackFailed {
                target: target.to_string(),
                skill,
                difficulty: HACK_DIFFICULTY,
            });
        }
        tracing::info!(hero = %self.actor.alias(), target, "hacked system");
        Ok(SystemHacked {
            target: target.to_string(),
            skill,
        })
    }

    /// Scan an area. Returns the findings, or nothing if the scanner could
    /// not be used.
    pub fn scan_area(&mut self, area: &str) -> Vec<String> {
        match self.use_gadget(SCANNER, SCAN_COST) {
            Ok(_) => {
                tracing::debug!(hero = %self.actor.alias(), area, "scanned area");
                SCAN_FINDINGS.iter().map(|s| s.to_string()).collect()
            }
            Err(err) => {
                tracing::debug!(hero = %self.actor.alias(), area, error = %err, "scan failed");
                Vec::new()
            }
        }
    }

    pub fn tech_rescue(&mut self, kind: RescueKind) -> Result<(), ActionError> {
        match kind {
            RescueKind::BuildingCollapse => {
                for gadget in [SCANNER, COMMUNICATION_DEVICE] {
                    if !self.kit.gadgets.contains(gadget) {
                        return Err(ActionError::MissingGadget {
                            gadget: gadget.to_string(),
                        });
                    }
                }
                self.use_gadget(SCANNER, COLLAPSE_SCAN_COST)?;
                self.actor.use_power(TECHNOLOGY, COLLAPSE_TECHNOLOGY_COST)?;
            }
            RescueKind::CyberAttack => {
                self.hack_system("Emergency Systems")?;
            }
            RescueKind::Standard => {
                self.use_gadget(EMERGENCY_BEACON, BEACON_COST)?;
                self.actor.rescue()?;
            }
        }
        tracing::info!(hero = %self.actor.alias(), kind = kind.as_str(), "completed tech rescue");
        Ok(())
    }

    /// Restore `amount` suit power, stopping at 100.
    pub fn recharge(&mut self, amount: u32) -> GaugeChange {
        let from = self.kit.suit_power;
        self.kit.suit_power = from.saturating_add(amount);
        GaugeChange {
            from: from.value(),
            to: self.kit.suit_power.value(),
        }
    }

    pub fn upgrade_intelligence(&mut self, points: u32) -> IntelligenceUpgrade {
        let from = self.kit.intelligence;
        if from.is_full() {
            return IntelligenceUpgrade::AlreadyMaxed;
        }
        self.kit.intelligence = from.saturating_add(points);
        tracing::info!(
            hero = %self.actor.alias(),
            from = from.value(),
            to = self.kit.intelligence.value(),
            "intelligence increased"
        );
        IntelligenceUpgrade::Upgraded(GaugeChange {
            from: from.value(),
            to: self.kit.intelligence.value(),
        })
    }

    /// Fight with scanner support.
    ///
    /// The opponent is always scanned first. Against tech opponents (name
    /// contains "Cyber" or "Tech") a successful hack wins outright; otherwise
    /// scanner and comms support is attempted. Every path that does not end
    /// in a successful hack falls back to the base fight.
    pub fn fight(&mut self, opponent: &str) -> Result<FightOutcome, ActionError> {
        let findings = self.scan_area(&format!("{}'s location", opponent));
        if findings.is_empty() {
            return self.actor.fight(opponent);
        }

        if is_tech_opponent(opponent) {
            match self.hack_system(&format!("{}'s systems", opponent)) {
                Ok(_) => {
                    return Ok(FightOutcome::Victory {
                        opponent: opponent.to_string(),
                        tactic: Tactic::CyberWarfare,
                    })
                }
                Err(err) => {
                    tracing::debug!(hero = %self.actor.alias(), error = %err, "cyber warfare failed")
                }
            }
            return self.actor.fight(opponent);
        }

        let assisted = self.use_gadget(SCANNER, DEFAULT_GADGET_COST).is_ok()
            && self
                .use_gadget(COMMUNICATION_DEVICE, DEFAULT_GADGET_COST)
                .is_ok();
        let tactic = if assisted {
            Tactic::TechAssisted
        } else {
            Tactic::Ground
        };
        self.actor.fight_with(opponent, tactic)
    }

    /// Rest, recharge the suit, and power the hacking tools down.
    pub fn rest(&mut self, gain: u32) -> Rested {
        let rested = self.actor.rest(gain);
        let suit_power = self.recharge(REST_RECHARGE);
        self.kit.tools_active = false;
        Rested {
            suit_power: Some(suit_power),
            ..rested
        }
    }
}

fn is_tech_opponent(opponent: &str) -> bool {
    TECH_OPPONENT_MARKERS
        .iter()
        .any(|marker| opponent.contains(marker))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregates::Person;
    use crate::value_objects::{Age, Alias, PersonName, Weakness, RESCUE, TECH_POWERS};

    struct Fixture {
        actor: Actor,
        kit: TechKit,
    }

    impl Fixture {
        fn new(intelligence: u8) -> Self {
            let person = Person::new(
                PersonName::new("Tony Stark").unwrap(),
                Age::new(45).unwrap(),
                "Male",
            );
            let actor = Actor::new(
                person,
                Alias::new("Iron Man").unwrap(),
                TagSet::from_tags(["Powered Armor", RESCUE]).with_required(&TECH_POWERS),
                Weakness::optional(Some("EMP")),
            );
            Self {
                actor,
                kit: TechKit::new(intelligence).unwrap(),
            }
        }

        fn hero(&mut self) -> TechHero<'_> {
            TechHero::new(&mut self.actor, &mut self.kit)
        }
    }

    mod kit {
        use super::*;

        #[test]
        fn new_kit_has_starter_gadgets_and_full_suit() {
            let kit = TechKit::new(DEFAULT_INTELLIGENCE).unwrap();
            assert!(kit.gadgets().contains_all(&STARTER_GADGETS));
            assert!(kit.suit_power().is_full());
            assert!(!kit.tools_active());
        }

        #[test]
        fn intelligence_above_hundred_is_rejected() {
            assert!(TechKit::new(101).is_err());
        }

        #[test]
        fn hacking_device_adds_bonus() {
            let mut fx = Fixture::new(15);
            assert_eq!(fx.kit.hacking_skill(), 15);
            fx.hero().add_gadget(HACKING_DEVICE);
            assert_eq!(fx.kit.hacking_skill(), 25);
        }

        #[test]
        fn rescue_kind_parsing_defaults_to_standard() {
            assert_eq!(RescueKind::from("building_collapse"), RescueKind::BuildingCollapse);
            assert_eq!(RescueKind::from("cyber_attack"), RescueKind::CyberAttack);
            assert_eq!(RescueKind::from("flood"), RescueKind::Standard);
        }
    }

    mod gadgets {
        use super::*;

        #[test]
        fn add_gadget_is_idempotent() {
            let mut fx = Fixture::new(90);
            assert!(fx.hero().add_gadget("Repulsors").was_added());
            assert!(!fx.hero().add_gadget("Repulsors").was_added());
            assert_eq!(fx.kit.gadgets().len(), 4);
        }

        #[test]
        fn use_gadget_spends_suit_power() {
            let mut fx = Fixture::new(90);
            let used = fx.hero().use_gadget(SCANNER, DEFAULT_GADGET_COST).unwrap();
            assert_eq!(used.suit_power_remaining, 95);
        }

        #[test]
        fn missing_gadget_fails() {
            let mut fx = Fixture::new(90);
            assert_eq!(
                fx.hero().use_gadget("Arc Reactor", 5),
                Err(ActionError::MissingGadget {
                    gadget: "Arc Reactor".to_string()
                })
            );
            assert!(fx.kit.suit_power().is_full());
        }

        #[test]
        fn insufficient_suit_power_fails_without_spending() {
            let mut fx = Fixture::new(90);
            fx.kit = TechKit::restore(
                fx.kit.intelligence(),
                fx.kit.gadgets().clone(),
                Gauge::new(7).unwrap(),
                false,
            );
            assert!(matches!(
                fx.hero().use_gadget(SCANNER, SCAN_COST),
                Err(ActionError::InsufficientSuitPower { .. })
            ));
            assert_eq!(fx.kit.suit_power().value(), 7);
        }

        #[test]
        fn scan_returns_fixed_findings() {
            let mut fx = Fixture::new(90);
            let findings = fx.hero().scan_area("Stark Tower");
            assert_eq!(findings, SCAN_FINDINGS);
            assert_eq!(fx.kit.suit_power().value(), 92);
        }

        #[test]
        fn scan_without_power_returns_nothing() {
            let mut fx = Fixture::new(90);
            fx.kit = TechKit::restore(fx.kit.intelligence(), TagSet::new(), Gauge::FULL, false);
            assert!(fx.hero().scan_area("Stark Tower").is_empty());
        }

        #[test]
        fn recharge_caps_at_hundred() {
            let mut fx = Fixture::new(90);
            fx.hero().use_gadget(SCANNER, 20).unwrap();
            assert_eq!(
                fx.hero().recharge(DEFAULT_RECHARGE),
                GaugeChange { from: 80, to: 100 }
            );
        }
    }

    mod hacking {
        use super::*;

        #[test]
        fn hack_activates_tools_and_spends_energy() {
            let mut fx = Fixture::new(95);
            let hacked = fx.hero().hack_system("Security Network").unwrap();
            assert_eq!(hacked.skill, 95);
            assert!(fx.kit.tools_active());
            assert_eq!(fx.kit.suit_power().value(), 90);
            assert_eq!(fx.actor.energy().value(), 85);
        }

        #[test]
        fn low_intelligence_fails_but_energy_is_spent() {
            let mut fx = Fixture::new(15);
            let err = fx.hero().hack_system("X").unwrap_err();
            assert_eq!(
                err,
                ActionError::HackFailed {
                    target: "X".to_string(),
                    skill: 15,
                    difficulty: HACK_DIFFICULTY
                }
            );
            assert_eq!(fx.actor.energy().value(), 85);
        }

        #[test]
        fn hack_proceeds_without_tools() {
            let mut fx = Fixture::new(50);
            fx.kit = TechKit::restore(fx.kit.intelligence(), TagSet::new(), Gauge::FULL, false);
            assert!(fx.hero().hack_system("Mainframe").is_ok());
            assert!(!fx.kit.tools_active());
        }

        #[test]
        fn active_tools_skip_the_scanner() {
            let mut fx = Fixture::new(50);
            fx.hero().activate_hacking_tools().unwrap();
            fx.hero().hack_system("Mainframe").unwrap();
            assert_eq!(fx.kit.suit_power().value(), 90);
        }

        #[test]
        fn upgrade_intelligence_caps_and_reports_max() {
            let mut fx = Fixture::new(98);
            assert_eq!(
                fx.hero().upgrade_intelligence(DEFAULT_INTELLIGENCE_UPGRADE),
                IntelligenceUpgrade::Upgraded(GaugeChange { from: 98, to: 100 })
            );
            assert_eq!(
                fx.hero().upgrade_intelligence(5),
                IntelligenceUpgrade::AlreadyMaxed
            );
        }
    }

    mod rescues {
        use super::*;

        #[test]
        fn building_collapse_spends_scanner_and_technology() {
            let mut fx = Fixture::new(90);
            fx.hero().tech_rescue(RescueKind::BuildingCollapse).unwrap();
            assert_eq!(fx.kit.suit_power().value(), 85);
            assert_eq!(fx.actor.energy().value(), 80);
        }

        #[test]
        fn building_collapse_requires_comms() {
            let mut fx = Fixture::new(90);
            fx.kit = TechKit::restore(
                fx.kit.intelligence(),
                TagSet::from_tags([SCANNER]),
                Gauge::FULL,
                false,
            );
            assert_eq!(
                fx.hero().tech_rescue(RescueKind::BuildingCollapse),
                Err(ActionError::MissingGadget {
                    gadget: COMMUNICATION_DEVICE.to_string()
                })
            );
            assert!(fx.kit.suit_power().is_full());
        }

        #[test]
        fn cyber_attack_hacks_emergency_systems() {
            let mut fx = Fixture::new(90);
            fx.hero().tech_rescue(RescueKind::CyberAttack).unwrap();
            assert_eq!(fx.actor.energy().value(), 85);
        }

        #[test]
        fn standard_rescue_uses_beacon_then_rescue() {
            let mut fx = Fixture::new(90);
            fx.hero().tech_rescue(RescueKind::Standard).unwrap();
            assert_eq!(fx.kit.suit_power().value(), 90);
            assert_eq!(fx.actor.energy().value(), 85);
        }
    }

    mod combat {
        use super::*;

        #[test]
        fn cyber_opponent_is_hacked() {
            let mut fx = Fixture::new(95);
            let outcome = fx.hero().fight("Cyber Criminal").unwrap();
            assert_eq!(
                outcome,
                FightOutcome::Victory {
                    opponent: "Cyber Criminal".to_string(),
                    tactic: Tactic::CyberWarfare
                }
            );
            // scan 8 + tools 10
            assert_eq!(fx.kit.suit_power().value(), 82);
            // hacking only, no base fight
            assert_eq!(fx.actor.energy().value(), 85);
        }

        #[test]
        fn failed_hack_falls_back_to_base_fight() {
            let mut fx = Fixture::new(10);
            let outcome = fx.hero().fight("TechnoMage").unwrap();
            assert_eq!(
                outcome,
                FightOutcome::Victory {
                    opponent: "TechnoMage".to_string(),
                    tactic: Tactic::Ground
                }
            );
            // 15 hacking + 25 fight
            assert_eq!(fx.actor.energy().value(), 60);
        }

        #[test]
        fn regular_opponent_gets_tactical_support() {
            let mut fx = Fixture::new(90);
            let outcome = fx.hero().fight("The Mandarin").unwrap();
            assert_eq!(
                outcome,
                FightOutcome::Victory {
                    opponent: "The Mandarin".to_string(),
                    tactic: Tactic::TechAssisted
                }
            );
            // scan 8 + scanner 5 + comms 5
            assert_eq!(fx.kit.suit_power().value(), 82);
            assert_eq!(fx.actor.energy().value(), 75);
        }

        #[test]
        fn failed_scan_goes_straight_to_base_fight() {
            let mut fx = Fixture::new(90);
            fx.kit = TechKit::restore(
                fx.kit.intelligence(),
                fx.kit.gadgets().clone(),
                Gauge::new(5).unwrap(),
                false,
            );
            let outcome = fx.hero().fight("Cyber Criminal").unwrap();
            assert_eq!(
                outcome,
                FightOutcome::Victory {
                    opponent: "Cyber Criminal".to_string(),
                    tactic: Tactic::Ground
                }
            );
            assert_eq!(fx.kit.suit_power().value(), 5);
            assert_eq!(fx.actor.energy().value(), 75);
        }

        #[test]
        fn tech_marker_is_case_sensitive() {
            let mut fx = Fixture::new(95);
            let outcome = fx.hero().fight("cyber criminal").unwrap();
            assert!(matches!(
                outcome,
                FightOutcome::Victory {
                    tactic: Tactic::TechAssisted,
                    ..
                }
            ));
        }

        #[test]
        fn weakness_still_applies() {
            let mut fx = Fixture::new(90);
            let outcome = fx.hero().fight("EMP Generator").unwrap();
            assert!(!outcome.is_victory());
            assert_eq!(fx.actor.person().health().value(), 70);
        }
    }

    mod rest {
        use super::*;

        #[test]
        fn rest_recharges_suit_and_resets_tools() {
            let mut fx = Fixture::new(90);
            fx.hero().activate_hacking_tools().unwrap();
            fx.hero().scan_area("Lab");
            fx.actor.fight("Whiplash").unwrap();

            let rested = fx.hero().rest(20);
            assert_eq!(rested.energy, GaugeChange { from: 75, to: 95 });
            assert_eq!(rested.suit_power, Some(GaugeChange { from: 82, to: 100 }));
            assert!(!rested.landed);
            assert!(!fx.kit.tools_active());
        }
    }
}
