//! Party formation shapes.
//!
//! Every shape is a pure function of the slot index. Slot 0 is normally the
//! lead character; WAVYLINE and TRIANGLE move the lead further back using
//! [`corrected_position`].

use crate::geometry::{Offset, polar_x, polar_y, truncate_toward_zero};

/// Number of party slots described by each formation row.
pub const SLOT_COUNT: usize = 20;

/// Spacing between consecutive members of a single-file line.
const LINE_SPACING: i32 = 36;

/// Radius of the ring used by PROTECT.
const PROTECT_RADIUS: i32 = 68;
/// Angular step between the five ring members (360 / 5).
const PROTECT_STEP_DEGREES: i32 = 72;
/// Angle of the two rear ring members (2 * step - 90).
const PROTECT_BACK_DEGREES: i32 = 54;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormationKind {
    Line,
    T,
    Gather,
    FourAndTwo,
    S { bg2_style: bool },
    WavyLine,
    Protect,
    ThreeByTwo,
    TwoByThree,
    Rank,
    V,
    Triangle,
    Wedge,
    None,
}

impl FormationKind {
    /// Coordinates for all slots, in slot order.
    pub fn slots(self) -> [Offset; SLOT_COUNT] {
        match self {
            // 2BY3 carries its depth from one slot to the next.
            FormationKind::TwoByThree => two_by_three(),
            kind => std::array::from_fn(|slot| kind.slot(slot)),
        }
    }

    /// Coordinate of a single slot; callers stay below `SLOT_COUNT`.
    fn slot(self, slot: usize) -> Offset {
        debug_assert!(slot < SLOT_COUNT, "slot {slot} out of range");
        let i = slot as i32;
        match self {
            FormationKind::Line => line(i),
            FormationKind::T => t_shape(i),
            FormationKind::Gather => gather(i),
            FormationKind::FourAndTwo => four_and_two(i),
            FormationKind::S { bg2_style } => s_shape(i, bg2_style),
            FormationKind::WavyLine => wavy_line(i),
            FormationKind::Protect => protect(i),
            FormationKind::ThreeByTwo => three_by_two(i),
            FormationKind::TwoByThree => two_by_three()[slot],
            FormationKind::Rank => rank(i),
            FormationKind::V => v_shape(i),
            FormationKind::Triangle => triangle(i),
            FormationKind::Wedge => wedge(i),
            FormationKind::None => Offset::ORIGIN,
        }
    }
}

/// A formation row as it appears in the table: its label and its shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Formation {
    pub name: &'static str,
    pub kind: FormationKind,
}

impl Formation {
    pub const fn new(name: &'static str, kind: FormationKind) -> Self {
        Formation { name, kind }
    }

    pub fn slots(&self) -> [Offset; SLOT_COUNT] {
        self.kind.slots()
    }
}

/// Slot taken by party member `actor` when the lead has to stand in slot `lead`.
///
/// Members that would have been in front of the lead move up one slot to make
/// room; members behind it keep their own index.
pub fn corrected_position(actor: usize, lead: usize) -> usize {
    if actor == 0 {
        lead
    } else if actor < lead + 1 {
        actor - 1
    } else {
        actor
    }
}

fn line(i: i32) -> Offset {
    Offset::new(0, i * LINE_SPACING)
}

fn t_shape(i: i32) -> Offset {
    match i {
        0 => Offset::new(0, 0),
        1 => Offset::new(48, 0),
        2 => Offset::new(-48, 0),
        3 => Offset::new(0, 48),
        _ => Offset::new(0, 48 + (i - 3) * LINE_SPACING),
    }
}

fn gather(i: i32) -> Offset {
    match i {
        0 => Offset::new(0, -36),
        1 => Offset::new(48, -24),
        2 => Offset::new(-48, -24),
        _ => match i % 3 {
            0 => Offset::new(48, 24 * i / 3),
            1 => Offset::new(-48, 24 * (i - 1) / 3),
            _ => Offset::new(0, 12 + 24 * (i - 2) / 3),
        },
    }
}

fn four_and_two(i: i32) -> Offset {
    let x = match i % 4 {
        0 => 0,
        1 => 64,
        2 => -64,
        _ => 128,
    };
    Offset::new(x, (i / 4) * 48)
}

fn s_shape(i: i32, bg2_style: bool) -> Offset {
    let x = match (i % 2 == 0, bg2_style) {
        (true, true) => 15,
        (false, true) => -15,
        (true, false) => 0,
        (false, false) => 64,
    };
    Offset::new(x, i * 24)
}

fn wavy_line(i: i32) -> Offset {
    let pos = corrected_position(i as usize, 3) as i32;
    let x = if pos % 2 == 0 { 15 } else { -15 };
    Offset::new(x, pos * 24)
}

fn protect(i: i32) -> Offset {
    let radius = f64::from(PROTECT_RADIUS);
    let step = f64::from(PROTECT_STEP_DEGREES);
    let back = f64::from(PROTECT_BACK_DEGREES);
    // The anchor sits behind the ring centre, not on it.
    let offset = truncate_toward_zero(radius * (90.0 + step).to_radians().sin());

    match i {
        0 => Offset::ORIGIN,
        1 => Offset::new(0, offset - PROTECT_RADIUS),
        2 => Offset::new(polar_x(radius, 270.0 - step), 0),
        3 => Offset::new(polar_x(radius, 270.0 + step), 0),
        4 => Offset::new(
            polar_x(radius, 180.0 - back),
            polar_y(radius, 180.0 - back) + offset,
        ),
        5 => Offset::new(polar_x(radius, back), polar_y(radius, back) + offset),
        _ => Offset::new(0, 24 * (i - 5)),
    }
}

fn three_by_two(i: i32) -> Offset {
    let x = match i % 3 {
        0 => 0,
        1 => 64,
        _ => -64,
    };
    Offset::new(x, (i / 3) * 48)
}

fn two_by_three() -> [Offset; SLOT_COUNT] {
    let mut slots = [Offset::ORIGIN; SLOT_COUNT];
    let mut y = 0;
    for (index, slot) in slots.iter_mut().enumerate() {
        if index % 2 == 0 {
            *slot = Offset::new(-24, y);
        } else {
            *slot = Offset::new(24, y);
            y = if y == 0 { 48 } else { y + LINE_SPACING };
        }
    }
    slots
}

fn rank(i: i32) -> Offset {
    let x = if i % 2 == 0 {
        -32 - (i / 2) * 64
    } else {
        -32 + ((i + 1) / 2) * 64
    };
    Offset::new(x, 0)
}

fn v_shape(i: i32) -> Offset {
    let row = i / 2;
    let x = if i % 2 == 0 { row * -15 } else { 64 + row * -15 };
    Offset::new(x, row * 48)
}

fn triangle(i: i32) -> Offset {
    match corrected_position(i as usize, 3) as i32 {
        0 => Offset::new(0, 0),
        1 => Offset::new(-32, 36),
        2 => Offset::new(32, 36),
        pos => {
            let pos = pos - 3;
            let x = match pos % 3 {
                0 => 0,
                1 => -64,
                _ => 64,
            };
            Offset::new(x, 72 + (pos / 3) * 36)
        }
    }
}

fn wedge(i: i32) -> Offset {
    match i {
        0 => Offset::new(0, 0),
        1 => Offset::new(64, 36),
        2 => Offset::new(-64, 36),
        3 => Offset::new(-124, 72),
        4 => Offset::new(124, 72),
        5 => Offset::new(0, 72),
        _ => {
            let x = match (i - 6) % 3 {
                0 => 0,
                1 => -124,
                _ => 124,
            };
            Offset::new(x, 72 + (i / 3) * 36)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(kind: FormationKind) -> Vec<(i32, i32)> {
        kind.slots().iter().map(|o| (o.x, o.y)).collect()
    }

    #[test]
    fn line_steps_back_36_per_slot() {
        let slots = FormationKind::Line.slots();
        assert_eq!(slots[0], Offset::new(0, 0));
        assert_eq!(slots[19], Offset::new(0, 684));
        for (i, slot) in slots.iter().enumerate() {
            assert_eq!(*slot, Offset::new(0, 36 * i as i32));
        }
    }

    #[test]
    fn lead_correction_boundaries() {
        assert_eq!(corrected_position(0, 3), 3);
        assert_eq!(corrected_position(1, 3), 0);
        assert_eq!(corrected_position(2, 3), 1);
        assert_eq!(corrected_position(3, 3), 2);
        assert_eq!(corrected_position(4, 3), 4);
        assert_eq!(corrected_position(19, 3), 19);
    }

    #[test]
    fn lead_correction_is_a_permutation() {
        let mut seen: Vec<usize> = (0..SLOT_COUNT)
            .map(|i| corrected_position(i, 3))
            .collect();
        seen.sort_unstable();
        assert_eq!(seen, (0..SLOT_COUNT).collect::<Vec<_>>());
    }

    #[test]
    fn t_places_wings_then_tail() {
        let p = pairs(FormationKind::T);
        assert_eq!(&p[..5], &[(0, 0), (48, 0), (-48, 0), (0, 48), (0, 84)]);
        assert_eq!(p[19], (0, 624));
    }

    #[test]
    fn gather_buckets_by_remainder() {
        let p = pairs(FormationKind::Gather);
        assert_eq!(
            &p[..7],
            &[(0, -36), (48, -24), (-48, -24), (48, 24), (-48, 24), (0, 36), (48, 48)]
        );
        assert_eq!(p[19], (-48, 144));
    }

    #[test]
    fn four_and_two_rows() {
        let p = pairs(FormationKind::FourAndTwo);
        assert_eq!(
            &p[..6],
            &[(0, 0), (64, 0), (-64, 0), (128, 0), (0, 48), (64, 48)]
        );
    }

    #[test]
    fn s_style_depends_on_game() {
        let bg2 = pairs(FormationKind::S { bg2_style: true });
        let other = pairs(FormationKind::S { bg2_style: false });
        assert_eq!(&bg2[..3], &[(15, 0), (-15, 24), (15, 48)]);
        assert_eq!(&other[..3], &[(0, 0), (64, 24), (0, 48)]);
    }

    #[test]
    fn wavy_line_puts_lead_fourth() {
        let p = pairs(FormationKind::WavyLine);
        assert_eq!(&p[..5], &[(-15, 72), (15, 0), (-15, 24), (15, 48), (15, 96)]);
    }

    #[test]
    fn protect_ring_matches_shipped_values() {
        let p = pairs(FormationKind::Protect);
        assert_eq!(p[0], (0, 0));
        assert_eq!(
            &p[1..8],
            &[(0, -47), (-64, 0), (64, 0), (-39, 76), (39, 76), (0, 24), (0, 48)]
        );
        assert_eq!(p[19], (0, 336));
    }

    #[test]
    fn two_by_three_first_step_is_deeper() {
        let p = pairs(FormationKind::TwoByThree);
        assert_eq!(
            &p[..6],
            &[(-24, 0), (24, 0), (-24, 48), (24, 48), (-24, 84), (24, 84)]
        );
        let all = FormationKind::TwoByThree.slots();
        for (slot, expected) in all.iter().enumerate() {
            assert_eq!(FormationKind::TwoByThree.slot(slot), *expected);
        }
    }

    #[test]
    fn single_slot_agrees_with_full_row() {
        let kinds = [
            FormationKind::Line,
            FormationKind::T,
            FormationKind::Gather,
            FormationKind::FourAndTwo,
            FormationKind::S { bg2_style: true },
            FormationKind::S { bg2_style: false },
            FormationKind::WavyLine,
            FormationKind::Protect,
            FormationKind::ThreeByTwo,
            FormationKind::TwoByThree,
            FormationKind::Rank,
            FormationKind::V,
            FormationKind::Triangle,
            FormationKind::Wedge,
            FormationKind::None,
        ];
        for kind in kinds {
            let row = kind.slots();
            assert_eq!(row.len(), SLOT_COUNT);
            for (slot, expected) in row.iter().enumerate() {
                assert_eq!(kind.slot(slot), *expected, "{kind:?} slot {slot}");
            }
        }
    }

    #[test]
    fn rank_alternates_around_anchor() {
        let p = pairs(FormationKind::Rank);
        assert_eq!(&p[..4], &[(-32, 0), (32, 0), (-96, 0), (96, 0)]);
        assert!(p.iter().all(|&(_, y)| y == 0));
    }

    #[test]
    fn v_and_three_by_two() {
        let v = pairs(FormationKind::V);
        assert_eq!(&v[..4], &[(0, 0), (64, 0), (-15, 48), (49, 48)]);
        let block = pairs(FormationKind::ThreeByTwo);
        assert_eq!(&block[..4], &[(0, 0), (64, 0), (-64, 0), (0, 48)]);
    }

    #[test]
    fn triangle_keeps_lead_at_back_of_front_rows() {
        let p = pairs(FormationKind::Triangle);
        assert_eq!(
            &p[..6],
            &[(0, 72), (0, 0), (-32, 36), (32, 36), (-64, 72), (64, 72)]
        );
        assert_eq!(p[19], (-64, 252));
    }

    #[test]
    fn wedge_rows() {
        let p = pairs(FormationKind::Wedge);
        assert_eq!(
            &p[..7],
            &[(0, 0), (64, 36), (-64, 36), (-124, 72), (124, 72), (0, 72), (0, 144)]
        );
        assert_eq!(p[19], (-124, 288));
    }

    #[test]
    fn none_collapses_every_slot() {
        assert!(FormationKind::None.slots().iter().all(|o| *o == Offset::ORIGIN));
    }
}
