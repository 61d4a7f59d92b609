use crate::base::BasePalette;
use crate::pipeline::count::{ColorCount, ColorCounts};

/// Best-match pass: give each slot the most frequent image color whose
/// nearest slot it is.
///
/// Colors are visited in first-occurrence order and a slot only changes
/// hands on a strictly greater count, so on a tie the color seen earliest in
/// the scan keeps the slot. This deliberately departs from a "later color
/// wins" rule: the earliest-seen color is kept, so the result depends only on
/// scan order. Slots no color is nearest to stay `None`.
pub fn assign_best(counts: &ColorCounts, base: &BasePalette) -> Vec<Option<ColorCount>> {
    let mut slots: Vec<Option<ColorCount>> = vec![None; base.len()];
    for entry in counts.entries() {
        let Some(i) = base.nearest_slot(entry.color) else {
            break;
        };
        match slots[i] {
            Some(held) if entry.count <= held.count => {}
            _ => slots[i] = Some(*entry),
        }
    }
    log::debug!(
        "best match filled {} of {} slots",
        slots.iter().filter(|s| s.is_some()).count(),
        slots.len()
    );
    slots
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cancel::CancelToken;
    use crate::color::Color;
    use crate::pipeline::count::count_colors;
    use crate::source::PixelGrid;

    const BLACK: Color = Color::new(0, 0, 0);
    const WHITE: Color = Color::new(255, 255, 255);

    fn counts_of(pixels: Vec<Color>) -> ColorCounts {
        count_colors(&PixelGrid::from_row(pixels).unwrap(), &CancelToken::new())
    }

    fn two_slot_base() -> BasePalette {
        BasePalette::new(vec![BLACK, WHITE])
    }

    #[test]
    fn most_frequent_near_color_wins() {
        let dark_a = Color::new(10, 10, 10);
        let dark_b = Color::new(20, 20, 20);
        let counts = counts_of(vec![dark_a, dark_b, dark_b, dark_b, dark_a, WHITE]);
        let slots = assign_best(&counts, &two_slot_base());
        assert_eq!(
            slots[0],
            Some(ColorCount {
                color: dark_b,
                count: 3
            })
        );
        assert_eq!(
            slots[1],
            Some(ColorCount {
                color: WHITE,
                count: 1
            })
        );
    }

    #[test]
    fn common_color_cannot_take_a_far_slot() {
        let near_black = Color::new(5, 5, 5);
        let mut pixels = vec![near_black; 100];
        pixels.push(Color::new(250, 250, 250));
        let slots = assign_best(&counts_of(pixels), &two_slot_base());
        assert_eq!(slots[0].map(|c| c.color), Some(near_black));
        assert_eq!(slots[1].map(|c| c.color), Some(Color::new(250, 250, 250)));
    }

    #[test]
    fn unreached_slots_stay_unassigned() {
        let slots = assign_best(&counts_of(vec![BLACK, BLACK]), &two_slot_base());
        assert!(slots[0].is_some());
        assert_eq!(slots[1], None);
    }

    #[test]
    fn assigned_black_is_not_confused_with_absence() {
        let slots = assign_best(&counts_of(vec![BLACK]), &two_slot_base());
        assert_eq!(
            slots[0],
            Some(ColorCount {
                color: BLACK,
                count: 1
            })
        );
    }

    #[test]
    fn count_tie_keeps_earliest_seen() {
        let a = Color::new(1, 1, 1);
        let b = Color::new(2, 2, 2);
        let slots = assign_best(&counts_of(vec![b, a, a, b]), &two_slot_base());
        assert_eq!(slots[0].map(|c| c.color), Some(b));

        let slots = assign_best(&counts_of(vec![a, b, b, a]), &two_slot_base());
        assert_eq!(slots[0].map(|c| c.color), Some(a));
    }

    #[test]
    fn output_matches_base_length() {
        let base = BasePalette::new(vec![BLACK; 5]);
        assert_eq!(assign_best(&counts_of(vec![WHITE]), &base).len(), 5);
    }

    #[test]
    fn empty_base() {
        let slots = assign_best(&counts_of(vec![WHITE]), &BasePalette::new(Vec::new()));
        assert!(slots.is_empty());
    }
}
