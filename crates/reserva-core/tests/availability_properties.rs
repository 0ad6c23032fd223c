//! Property-based tests for availability resolution.
//!
//! Verifies that for ANY occupancy, free and taken slots partition the
//! calendar: their union is the full domain and their intersection is
//! empty.

#![allow(clippy::unwrap_used)]

use proptest::prelude::*;
use reserva_core::{
    CalendarDate, Reservation, RoomOccupancy, SLOT_COUNT, SlotCalendar, SlotStatus, TimeSlot,
    availability,
};

/// Strategy for an arbitrary subset of the slot domain.
fn arbitrary_taken_slots() -> impl Strategy<Value = Vec<TimeSlot>> {
    prop::collection::vec(any::<bool>(), SLOT_COUNT).prop_map(|mask| {
        SlotCalendar::iter().zip(mask).filter_map(|(slot, taken)| taken.then_some(slot)).collect()
    })
}

fn occupancy_for(taken: &[TimeSlot]) -> RoomOccupancy {
    let date = CalendarDate::parse("2024-06-01").unwrap();
    let rows = taken
        .iter()
        .map(|slot| Reservation {
            room_id: "101".to_string(),
            date: date.clone(),
            slot: *slot,
            holder: "Ana".to_string(),
        })
        .collect();

    let mut occupancy = RoomOccupancy::new();
    occupancy.insert("101", rows);
    occupancy
}

proptest! {
    #[test]
    fn free_and_taken_partition_the_calendar(taken in arbitrary_taken_slots()) {
        let occupancy = occupancy_for(&taken);
        let free = occupancy.free_slots("101");

        // Disjoint
        for slot in &free {
            prop_assert!(!taken.contains(slot));
        }

        // Union covers the full domain
        prop_assert_eq!(free.len() + taken.len(), SLOT_COUNT);
        let mut union: Vec<TimeSlot> = free.iter().chain(taken.iter()).copied().collect();
        union.sort();
        prop_assert_eq!(union, SlotCalendar::slots().to_vec());
    }

    #[test]
    fn free_slots_preserve_calendar_order(taken in arbitrary_taken_slots()) {
        let occupancy = occupancy_for(&taken);
        let free = occupancy.free_slots("101");

        for pair in free.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn status_agrees_with_free_slots(taken in arbitrary_taken_slots()) {
        let occupancy = occupancy_for(&taken);
        let free = occupancy.free_slots("101");
        let rows = occupancy.for_room("101");

        for slot in SlotCalendar::iter() {
            let status = availability::status_of(rows, slot);
            prop_assert_eq!(free.contains(&slot), status.is_free());
        }
    }
}

#[test]
fn statuses_of_a_mixed_day() {
    let taken = [TimeSlot::parse("08:00-09:30").unwrap(), TimeSlot::parse("19:00-20:30").unwrap()];
    let occupancy = occupancy_for(&taken);

    assert_eq!(
        occupancy.slot_status("101", taken[0]),
        SlotStatus::Taken { holder: "Ana".to_string() }
    );
    assert!(occupancy.slot_status("101", TimeSlot::parse("11:30-13:00").unwrap()).is_free());
    assert_eq!(occupancy.free_slots("101").len(), 6);
}
