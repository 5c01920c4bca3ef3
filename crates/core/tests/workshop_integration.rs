// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

//! Integration tests for the workshop coordinator
//!
//! Drives the public API the way a simulator would and checks the event
//! stream a driver would render.

use std::time::Duration;
use workshop_core::{
    reindeer_team, CancellationToken, Coordinator, Effect, ElfId, Event, EventRecord, FakeClock,
    WorkshopInput, WorkshopState,
};

// =============================================================================
// Pure machine replay
// =============================================================================

#[test]
fn sequential_trace_replays_deterministically() {
    // R1..R9 then E1..E6 with the arbiter ticking after every arrival
    let mut state = WorkshopState::new();
    let mut phases = Vec::new();
    let step = |state: WorkshopState, input: WorkshopInput, phases: &mut Vec<Event>| {
        let (mut next, mut effects) = state.transition(input);
        // Let the arbiter settle before the next arrival
        loop {
            let (ticked, tick_effects) = next.transition(WorkshopInput::Tick);
            next = ticked;
            if tick_effects.is_empty() {
                break;
            }
            effects.extend(tick_effects);
        }
        for effect in effects {
            match effect {
                Effect::Emit(event) if event.is_phase_transition() => phases.push(event),
                Effect::Reject(rejection) => panic!("unexpected rejection: {rejection}"),
                _ => {}
            }
        }
        next
    };

    for reindeer in reindeer_team() {
        state = step(state, WorkshopInput::ReindeerReturned { reindeer }, &mut phases);
    }
    for id in 1..=3 {
        state = step(state, WorkshopInput::ElfQueued { elf: ElfId(id) }, &mut phases);
    }
    for reindeer in reindeer_team() {
        state = step(state, WorkshopInput::ReindeerHitched { reindeer }, &mut phases);
    }
    for id in 1..=3 {
        state = step(state, WorkshopInput::ElfHelped { elf: ElfId(id) }, &mut phases);
    }
    for id in 4..=6 {
        state = step(state, WorkshopInput::ElfQueued { elf: ElfId(id) }, &mut phases);
    }
    for id in 4..=6 {
        state = step(state, WorkshopInput::ElfHelped { elf: ElfId(id) }, &mut phases);
    }

    assert_eq!(
        phases,
        vec![
            Event::RoundStarted {
                round: 1,
                reindeer: reindeer_team().collect()
            },
            Event::RoundFinished { round: 1 },
            Event::GroupStarted {
                group: 1,
                elves: vec![ElfId(1), ElfId(2), ElfId(3)]
            },
            Event::GroupFinished {
                group: 1,
                elves: vec![ElfId(1), ElfId(2), ElfId(3)]
            },
            Event::GroupStarted {
                group: 2,
                elves: vec![ElfId(4), ElfId(5), ElfId(6)]
            },
            Event::GroupFinished {
                group: 2,
                elves: vec![ElfId(4), ElfId(5), ElfId(6)]
            },
        ]
    );
    assert_eq!(state.snapshot().rounds, 1);
    assert_eq!(state.snapshot().groups, 2);
}

// =============================================================================
// Async coordinator
// =============================================================================

#[tokio::test]
async fn fake_clock_stamps_every_record() {
    let clock = FakeClock::new();
    let coordinator = Coordinator::with_clock(clock.clone());
    let cancel = CancellationToken::new();
    let mut rx = coordinator.events().set_global_handler();

    clock.advance(Duration::from_millis(250));

    let santa = {
        let coordinator = coordinator.clone();
        let cancel = cancel.clone();
        tokio::spawn(async move { coordinator.run_arbiter(&cancel).await })
    };
    let team: Vec<_> = reindeer_team()
        .map(|reindeer| {
            let coordinator = coordinator.clone();
            let cancel = cancel.clone();
            tokio::spawn(async move { coordinator.reindeer_arrive(reindeer, async {}, &cancel).await })
        })
        .collect();
    for reindeer in team {
        reindeer.await.unwrap().unwrap();
    }

    let mut records: Vec<EventRecord> = Vec::new();
    while records.last().map(|r| r.name) != Some("santa:round:finished") {
        let record = tokio::time::timeout(Duration::from_secs(10), rx.recv())
            .await
            .expect("round never finished")
            .unwrap();
        records.push(record);
    }
    cancel.cancel();
    assert!(santa.await.unwrap().unwrap_err().is_cancelled());

    assert!(records.iter().all(|r| r.elapsed_ms == 250));
    let sequences: Vec<u64> = records.iter().map(|r| r.sequence).collect();
    let expected: Vec<u64> = (1..=records.len() as u64).collect();
    assert_eq!(sequences, expected);
    // 9 returned, 9 harnessed, 9 delivered, start and finish
    assert_eq!(records.len(), 29);
}
