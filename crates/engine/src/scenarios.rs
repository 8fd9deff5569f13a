//! Scripted demonstration scenarios.
//!
//! Each scenario builds its own heroes, drives them through a fixed script,
//! and hands the heroes back so the runner can snapshot them.

use std::fmt;
use std::str::FromStr;

use heroforge_domain::aggregates::{DEFAULT_POWER_COST, DEFAULT_REST_GAIN, RescueKind};
use heroforge_domain::value_objects::{Age, PersonName};
use heroforge_domain::{DomainError, Hero, HeroProfile, Person};

use crate::error::EngineError;
use crate::runner::StepLog;

/// A scripted demonstration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scenario {
    BasicPerson,
    BasicHero,
    FlyingHero,
    TechHero,
    Polymorphism,
    Encapsulation,
}

impl Scenario {
    pub const ALL: [Scenario; 6] = [
        Self::BasicPerson,
        Self::BasicHero,
        Self::FlyingHero,
        Self::TechHero,
        Self::Polymorphism,
        Self::Encapsulation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BasicPerson => "basic-person",
            Self::BasicHero => "basic-hero",
            Self::FlyingHero => "flying-hero",
            Self::TechHero => "tech-hero",
            Self::Polymorphism => "polymorphism",
            Self::Encapsulation => "encapsulation",
        }
    }

    /// Run the script, returning the heroes it created.
    pub fn run(self, log: &mut StepLog) -> Vec<Hero> {
        match self {
            Self::BasicPerson => {
                basic_person(log);
                Vec::new()
            }
            Self::BasicHero => basic_hero(log).into_iter().collect(),
            Self::FlyingHero => flying_hero(log).into_iter().collect(),
            Self::TechHero => tech_hero(log).into_iter().collect(),
            Self::Polymorphism => polymorphism(log),
            Self::Encapsulation => encapsulation(log).into_iter().collect(),
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scenario {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|scenario| scenario.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| EngineError::unknown_scenario(s))
    }
}

// =============================================================================
// Scripts
// =============================================================================

fn create(log: &mut StepLog, alias: &str, hero: Result<Hero, DomainError>) -> Option<Hero> {
    match hero {
        Ok(hero) => {
            log.note(alias, "create", &hero);
            Some(hero)
        }
        Err(err) => {
            log.record::<(), _>(alias, "create", Err(err));
            None
        }
    }
}

fn basic_person(log: &mut StepLog) {
    let subject = "Alice Johnson";
    let person = PersonName::new(subject)
        .and_then(|name| Ok(Person::new(name, Age::new(28)?, "Female")));
    let Some(mut person) = log.record(subject, "create", person) else {
        return;
    };

    log.note(subject, "introduce", person.introduce());
    let birthday = person.celebrate_birthday();
    log.note(subject, "celebrate_birthday", format!("now {}", birthday.new_age));
    log.note(subject, "take_damage", format!("{:?}", person.take_damage(20)));
    log.note(subject, "heal", format!("{:?}", person.heal(10)));
    log.record(subject, "set_name", person.set_name("Alice Smith"));
    log.record(subject, "set_age", person.set_age(-5));
    log.note(subject, "final_state", &person);
}

fn basic_hero(log: &mut StepLog) -> Option<Hero> {
    let alias = "Wonder Woman";
    let profile = HeroProfile::new("Diana Prince", 30, "Female", alias)
        .with_powers(["Super Strength", "Lasso of Truth", "Flight"])
        .with_weakness("Magic");
    let mut hero = create(log, alias, Hero::plain(profile))?;

    log.note(alias, "introduce", hero.introduce());
    log.record(alias, "use_power", hero.use_power("Super Strength", DEFAULT_POWER_COST));
    log.note(alias, "add_power", format!("{:?}", hero.add_power("Invisible Jet")));
    log.record(alias, "rescue", hero.rescue());
    log.record(alias, "fight", hero.fight("Ares"));
    log.record(alias, "fight", hero.fight("Cheetah"));
    log.note(alias, "powers", hero.actor().powers());
    log.note(alias, "rest", format!("{:?}", hero.rest(DEFAULT_REST_GAIN)));
    log.note(alias, "reveal_identity", format!("{:?}", hero.reveal_identity()));
    log.note(alias, "introduce", hero.introduce());
    Some(hero)
}

fn flying_hero(log: &mut StepLog) -> Option<Hero> {
    let alias = "Superman";
    let profile = HeroProfile::new("Clark Kent", 32, "Male", alias)
        .with_powers(["Super Strength", "Heat Vision", "X-Ray Vision"])
        .with_weakness("Kryptonite");
    let mut hero = create(log, alias, Hero::aerial(profile, 50_000))?;

    if let Some(mut flyer) = hero.aerial_mut() {
        log.record(alias, "take_off", flyer.take_off());
        log.record(alias, "fly_to", flyer.fly_to(1_000));
        log.record(alias, "patrol", flyer.patrol(2_000));
        log.record(alias, "aerial_rescue", flyer.aerial_rescue(800));
        log.record(alias, "aerial_fight", flyer.fight("Lex Luthor", true));
    }
    log.record(alias, "fight", hero.fight("General Zod"));
    log.note(alias, "rest", format!("{:?}", hero.rest(DEFAULT_REST_GAIN)));
    if let Some(flight) = hero.flight_state() {
        log.note(alias, "flying_status", flight.is_flying());
    }
    Some(hero)
}

fn tech_hero(log: &mut StepLog) -> Option<Hero> {
    let alias = "Iron Man";
    let profile = HeroProfile::new("Tony Stark", 45, "Male", alias)
        .with_powers(["Genius Intellect", "Powered Armor"])
        .with_weakness("EMP");
    let mut hero = create(log, alias, Hero::technical(profile, 95))?;

    if let Some(mut tech) = hero.technical_mut() {
        for gadget in ["Repulsors", "Arc Reactor", "Hacking Device"] {
            log.note(alias, "add_gadget", format!("{:?}", tech.add_gadget(gadget)));
        }
        log.note(alias, "gadgets", tech.kit().gadgets());

        let findings = tech.scan_area("Stark Tower");
        log.note(alias, "scan_area", findings.join(", "));
        log.record(alias, "hack_system", tech.hack_system("Security Network"));
        for kind in ["building_collapse", "cyber_attack"] {
            log.record(alias, "tech_rescue", tech.tech_rescue(RescueKind::from(kind)));
        }
    }
    log.record(alias, "fight", hero.fight("Cyber Criminal"));
    log.record(alias, "fight", hero.fight("The Mandarin"));
    if let Some(mut tech) = hero.technical_mut() {
        log.note(alias, "upgrade_intelligence", format!("{:?}", tech.upgrade_intelligence(3)));
    }
    log.note(alias, "rest", format!("{:?}", hero.rest(DEFAULT_REST_GAIN)));
    Some(hero)
}

fn polymorphism(log: &mut StepLog) -> Vec<Hero> {
    let candidates = [
        (
            "Spider-Man",
            Hero::plain(
                HeroProfile::new("Peter Parker", 22, "Male", "Spider-Man")
                    .with_powers(["Web Slinging", "Spider Sense"])
                    .with_weakness("Responsibility"),
            ),
        ),
        (
            "Captain Marvel",
            Hero::aerial(
                HeroProfile::new("Carol Danvers", 35, "Female", "Captain Marvel")
                    .with_powers(["Photon Blasts", "Super Strength"]),
                100_000,
            ),
        ),
        (
            "Batman",
            Hero::technical(
                HeroProfile::new("Bruce Wayne", 40, "Male", "Batman")
                    .with_powers(["Martial Arts", "Detective Skills"])
                    .with_weakness("No Powers"),
                90,
            ),
        ),
    ];
    let mut heroes: Vec<Hero> = candidates
        .into_iter()
        .filter_map(|(alias, hero)| create(log, alias, hero))
        .collect();

    for hero in &heroes {
        log.note(hero.alias().as_str(), "introduce", hero.introduce());
    }
    for hero in &mut heroes {
        let alias = hero.alias().to_string();
        log.record(&alias, "fight", hero.fight("The Joker"));
    }
    for hero in &mut heroes {
        let alias = hero.alias().to_string();
        log.note(&alias, "rest", format!("{:?}", hero.rest(DEFAULT_REST_GAIN)));
    }
    heroes
}

fn encapsulation(log: &mut StepLog) -> Option<Hero> {
    let alias = "Black Widow";
    let profile = HeroProfile::new("Natasha Romanoff", 35, "Female", alias)
        .with_powers(["Espionage", "Combat Skills"]);
    let mut hero = create(log, alias, Hero::technical(profile, 88))?;

    log.note(alias, "name", hero.person().name());
    if let Some(kit) = hero.tech_kit() {
        log.note(alias, "intelligence", kit.intelligence());
    }
    log.note(alias, "powers", hero.actor().powers());

    log.record(alias, "set_name", hero.person_mut().set_name("Natasha Romanoff-Rogers"));
    log.record(alias, "set_alias", hero.actor_mut().set_alias("The Black Widow"));
    if let Some(mut tech) = hero.technical_mut() {
        log.note(alias, "upgrade_intelligence", format!("{:?}", tech.upgrade_intelligence(5)));
    }

    log.record(alias, "set_age", hero.person_mut().set_age(-10));
    log.record(alias, "set_health", hero.person_mut().set_health(150));
    Some(hero)
}
