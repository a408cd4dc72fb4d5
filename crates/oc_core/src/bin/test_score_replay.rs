use anyhow::{bail, Result};

use oc_core::{
    calculate_dls_target, replay, transition, Action, FileSnapshotStore, MatchState, SnapshotStore,
    Winner,
};

fn main() -> Result<()> {
    println!("🔧 Testing Scoring Engine Integration...");

    // Test 1: Score a short match end to end
    println!("\n🧪 Test 1: Full match flow");

    let mut state = transition(&MatchState::default(), &Action::NewMatch { total_overs: Some(5) });

    for _ in 0..10 {
        state = transition(&state, &Action::run(6));
    }
    state = transition(&state, &Action::wide());
    state = transition(&state, &Action::noball(1, false));

    println!(
        "✅ First innings: {}/{} in {} (extras {})",
        state.innings.first.runs,
        state.innings.first.wickets,
        state.innings.first.overs(),
        state.innings.first.extras.total()
    );

    state = transition(&state, &Action::EndInnings);
    let Some(target) = state.target else {
        bail!("target should be set after END_INNINGS");
    };
    println!("✅ Target for the chase: {}", target);

    while !state.is_match_over {
        state = transition(&state, &Action::run(4));
    }
    if state.winner != Some(Winner::Batting) {
        bail!("the chase reached the target, batting should have won");
    }
    println!(
        "✅ Chase complete: {}/{} in {}",
        state.innings.second.runs,
        state.innings.second.wickets,
        state.innings.second.overs()
    );

    // Test 2: Undo walks the whole match back
    println!("\n🧪 Test 2: Undo to the very first ball");

    let mut rewound = state.clone();
    while rewound.can_undo() {
        rewound = transition(&rewound, &Action::Undo);
    }
    if rewound != MatchState::new(5) {
        bail!("undoing everything should recover the fresh state");
    }
    println!("✅ {} events unwound cleanly", state.ball_history.len());

    // Test 3: Replay equivalence
    println!("\n🧪 Test 3: Replay of the ball history");

    let refolded = replay(&state.ball_history, state.total_overs);
    if refolded.innings != state.innings {
        bail!("replaying the history must reproduce the aggregates");
    }
    println!("✅ Fold over {} events matches the live aggregates", state.ball_history.len());

    // Test 4: Snapshot save/load through the storage port
    println!("\n🧪 Test 4: Snapshot round-trip");

    let store = FileSnapshotStore::new(FileSnapshotStore::default_path());
    store.save(&state);
    let loaded = store.load();
    if loaded != state {
        bail!("loaded state should match the saved one");
    }
    store.clear();
    println!("✅ Save/load round-trip via {:?}", store.path());

    // Test 5: Rain revision
    println!("\n🧪 Test 5: DLS target revision");

    let revised = calculate_dls_target(180, 20.0, false, 20.0, 5.0);
    if revised.target != 151 {
        bail!("reference revision should produce 151, got {}", revised.target);
    }
    println!(
        "✅ 180 defended over 15 overs: par {} / target {} ({}% vs {}%)",
        revised.par_score, revised.target, revised.resources_team2, revised.resources_team1
    );

    println!("\n🎉 ALL SCORING ENGINE TESTS PASSED!");
    Ok(())
}
