//! Visitor flow through the showcase state, from first paint to a flavor switch.

use ui::core::animation::{AnimationPhase, HeroAnimation};
use ui::core::config::ShowcaseConfig;
use ui::core::flavors::FlavorTable;
use ui::core::presentation::{background_style, flavor_tiles, hero_subtitle};
use ui::core::selection::{SelectOutcome, SelectionState};

fn selected_tiles(state: &SelectionState) -> Vec<String> {
    flavor_tiles(Some(state.table()), state.selected_name())
        .into_iter()
        .filter(|tile| tile.selected)
        .map(|tile| tile.name)
        .collect()
}

#[test]
fn strawberry_to_chocolate() {
    let table = FlavorTable::bundled().expect("bundled table").clone();
    let mut state = SelectionState::from_config(table.clone(), &ShowcaseConfig::default());
    let mut animation = HeroAnimation::default();

    let strawberry = table.find("Strawberry").unwrap();
    assert_eq!(state.selected_name(), "Strawberry");
    assert_eq!(background_style(state.current()), background_style(strawberry));
    assert_eq!(hero_subtitle(state.current()), "Strawberry cone");
    assert_eq!(selected_tiles(&state), ["Strawberry"]);
    assert_eq!(animation.observe(state.selected_name()), None);

    assert_eq!(state.select("Chocolate"), Ok(SelectOutcome::Changed));
    let chocolate = table.find("Chocolate").unwrap();
    assert_eq!(state.current(), chocolate);
    assert_eq!(
        background_style(state.current()),
        format!("background: {};", chocolate.gradient)
    );
    assert_eq!(hero_subtitle(state.current()), "Chocolate cone");
    assert_eq!(selected_tiles(&state), ["Chocolate"]);

    let generation = animation
        .observe(state.selected_name())
        .expect("switch opens an animation window");
    assert_eq!(animation.phase(), AnimationPhase::Animating);
    assert!(animation.settle(generation));
    assert_eq!(animation.phase(), AnimationPhase::Idle);
}

#[test]
fn reselecting_current_flavor_is_idempotent() {
    let table = FlavorTable::bundled().expect("bundled table").clone();
    let mut state = SelectionState::from_config(table, &ShowcaseConfig::default());
    let mut animation = HeroAnimation::default();
    animation.observe(state.selected_name());

    let before = state.clone();
    assert_eq!(state.select("Strawberry"), Ok(SelectOutcome::Unchanged));
    assert_eq!(state, before);
    assert_eq!(animation.observe(state.selected_name()), None);
    assert!(!animation.is_animating());
}

#[test]
fn every_bundled_flavor_paints_its_gradient() {
    let table = FlavorTable::bundled().expect("bundled table").clone();
    let mut state = SelectionState::from_config(table.clone(), &ShowcaseConfig::default());
    for record in table.all() {
        state.select(&record.name).unwrap();
        assert_eq!(
            background_style(state.current()),
            format!("background: {};", record.gradient)
        );
        assert_eq!(selected_tiles(&state), [record.name.clone()]);
    }
}
